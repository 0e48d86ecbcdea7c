use serde::Serialize;

use crate::render::markup::{class_attr, escape};

/// Highest rating a tool can carry.
pub const MAX_RATING: f64 = 5.0;
const STAR_COUNT: usize = 5;

/// One symbol of a star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(self) -> &'static str {
        match self {
            Star::Full => "★",
            Star::Half => "⯪",
            Star::Empty => "☆",
        }
    }

    fn class_suffix(self) -> &'static str {
        match self {
            Star::Full => "star-full",
            Star::Half => "star-half",
            Star::Empty => "star-empty",
        }
    }
}

/// Clamp a rating into `[0, 5]`; NaN becomes 0.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

/// Five symbols for a rating: full stars for each whole point, a half star
/// when the remainder is at least 0.5, empty stars for the rest.
pub fn render_stars(rating: f64) -> [Star; STAR_COUNT] {
    let rating = clamp_rating(rating);
    let whole = rating.floor();
    let full = whole as usize;
    let half = rating - whole >= 0.5;

    let mut stars = [Star::Empty; STAR_COUNT];
    for (index, star) in stars.iter_mut().enumerate() {
        if index < full {
            *star = Star::Full;
        } else if index == full && half {
            *star = Star::Half;
        }
    }
    stars
}

/// Star rating as a `<span>` with an accessible label.
///
/// The rating is rounded to two decimals first, so the label and the glyphs
/// always describe the same number.
pub fn render_stars_html(rating: f64, class_prefix: &str) -> String {
    let rating = (clamp_rating(rating) * 100.0).round() / 100.0;
    let label = format!("{} out of 5", format_rating(rating));

    let mut out = String::new();
    out.push_str("<span");
    out.push_str(&class_attr(class_prefix, &["stars"]));
    out.push_str(" role=\"img\" aria-label=\"");
    out.push_str(&escape(&label));
    out.push_str("\">");
    for star in render_stars(rating) {
        out.push_str("<span");
        out.push_str(&class_attr(class_prefix, &[star.class_suffix()]));
        out.push_str(" aria-hidden=\"true\">");
        out.push_str(star.glyph());
        out.push_str("</span>");
    }
    out.push_str("</span>");
    out
}

/// "4.5", "4" or "4.96": up to two decimal places, trailing zeros dropped.
pub fn format_rating(rating: f64) -> String {
    let text = format!("{:.2}", rating);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

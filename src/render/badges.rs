use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::toolrecord::ToolRecord;
use crate::render::stars::clamp_rating;

/// Lowest rating that still earns `TopRated`.
const TOP_RATED_FLOOR: f64 = 4.0;

/// Highlight shown next to a tool's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Badge {
    TopRated,
    BestValue,
    FreePlan,
    FreeTrial,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::TopRated => "Top Rated",
            Badge::BestValue => "Best Value",
            Badge::FreePlan => "Free Plan",
            Badge::FreeTrial => "Free Trial",
        }
    }

    /// CSS-friendly identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Badge::TopRated => "top-rated",
            Badge::BestValue => "best-value",
            Badge::FreePlan => "free-plan",
            Badge::FreeTrial => "free-trial",
        }
    }
}

/// Badges `tool` earns among `peers` (the tools shown alongside it).
///
/// Ties on rating or price give every tied tool the badge. `BestValue` needs
/// at least two tools with a positive starting price, and every priced tool
/// must share one currency marker and billing period; "$1,200/yr" beside
/// "$10/month", or "€9" beside "$10", awards no `BestValue` at all.
pub fn badges_for(tool: &ToolRecord, peers: &[ToolRecord]) -> Vec<Badge> {
    let mut badges = vec![];

    let top = peers
        .iter()
        .map(|peer| clamp_rating(peer.rating))
        .fold(clamp_rating(tool.rating), f64::max);
    if top >= TOP_RATED_FLOOR && clamp_rating(tool.rating) == top {
        badges.push(Badge::TopRated);
    }

    if let Some(amount) = paid_amount(tool) {
        let basis = tool.pricing.price_basis();
        let priced: Vec<&ToolRecord> = peers
            .iter()
            .filter(|peer| paid_amount(peer).is_some())
            .collect();
        let comparable = priced
            .iter()
            .all(|peer| peer.pricing.price_basis() == basis);
        let cheapest = priced
            .iter()
            .filter_map(|peer| paid_amount(peer))
            .fold(amount, Decimal::min);
        if comparable && priced.len() >= 2 && amount == cheapest {
            badges.push(Badge::BestValue);
        }
    }

    if tool.pricing.has_free_version {
        badges.push(Badge::FreePlan);
    }
    if tool.pricing.has_free_trial {
        badges.push(Badge::FreeTrial);
    }

    badges
}

fn paid_amount(tool: &ToolRecord) -> Option<Decimal> {
    tool.pricing
        .starting_amount()
        .filter(|amount| *amount > Decimal::ZERO)
}

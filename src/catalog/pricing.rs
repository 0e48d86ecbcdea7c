use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

/// Pricing descriptor as authored for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Display string, e.g. "$10/month" or "Free". Passed through verbatim.
    pub starting_price: String,
    pub has_free_version: bool,
    pub has_free_trial: bool,
}

impl Pricing {
    pub fn new(starting_price: impl Into<String>) -> Self {
        Pricing {
            starting_price: starting_price.into(),
            ..Pricing::default()
        }
    }

    /// Numeric amount of the starting price, if the display string carries one.
    ///
    /// Takes the first run of digits (with `,` thousands separators and one
    /// `.`), so "$1,200/yr" reads as 1200 and "from €9.99" as 9.99.
    pub fn starting_amount(&self) -> Option<Decimal> {
        parse_amount(&self.starting_price)
    }

    /// Currency marker and billing period of the starting price. Two amounts
    /// are only comparable when their bases are equal.
    pub fn price_basis(&self) -> PriceBasis {
        PriceBasis {
            currency: currency_marker(&self.starting_price),
            period: billing_period(&self.starting_price),
        }
    }
}

/// Billing period named in a price string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BillingPeriod {
    Unstated,
    Week,
    Month,
    Year,
    OneTime,
}

/// What a starting amount is denominated in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBasis {
    /// Currency symbol or ISO code exactly as written ("$", "€", "USD").
    pub currency: Option<String>,
    pub period: BillingPeriod,
}

const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥', '₹', '₩'];

fn currency_marker(display: &str) -> Option<String> {
    if let Some(symbol) = display.chars().find(|ch| CURRENCY_SYMBOLS.contains(ch)) {
        return Some(symbol.to_string());
    }
    display
        .split(|ch: char| !ch.is_ascii_alphabetic())
        .find(|word| word.len() == 3 && word.chars().all(|ch| ch.is_ascii_uppercase()))
        .map(str::to_string)
}

fn billing_period(display: &str) -> BillingPeriod {
    let lower = display.to_lowercase();
    if lower.contains("one-time") || lower.contains("one time") {
        return BillingPeriod::OneTime;
    }

    for word in lower.split(|ch: char| !ch.is_ascii_alphabetic()) {
        match word {
            "mo" | "mth" | "month" | "monthly" => return BillingPeriod::Month,
            "yr" | "year" | "yearly" | "annual" | "annually" => return BillingPeriod::Year,
            "wk" | "week" | "weekly" => return BillingPeriod::Week,
            "once" | "lifetime" => return BillingPeriod::OneTime,
            _ => {}
        }
    }
    BillingPeriod::Unstated
}

fn parse_amount(display: &str) -> Option<Decimal> {
    let start = display.find(|ch: char| ch.is_ascii_digit())?;
    let mut digits = String::new();
    let mut seen_point = false;

    for ch in display[start..].chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ',' => {}
            '.' if !seen_point => {
                seen_point = true;
                digits.push(ch);
            }
            _ => break,
        }
    }

    let digits = digits.trim_end_matches('.');
    Decimal::from_str(digits).ok()
}

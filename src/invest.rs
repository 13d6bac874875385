//! Minimum investment gate for the call-to-action.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Smallest accepted investment, in dollars.
pub const MIN_INVESTMENT: f64 = 2500.0;

// Currency symbols, thousands separators and whitespace users tend to type.
static AMOUNT_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s$,_]").unwrap());

/// Whether `amount` meets [`MIN_INVESTMENT`].
pub fn validate(amount: Option<f64>) -> bool {
    meets_minimum(amount, MIN_INVESTMENT)
}

fn meets_minimum(amount: Option<f64>, minimum: f64) -> bool {
    amount.is_some_and(|amount| amount >= minimum)
}

/// Parse free-form amount text such as `"$2,500.00"`.
///
/// Returns `None` for blank, unparseable or non-finite input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned = AMOUNT_NOISE.replace_all(input, "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|amount| amount.is_finite())
}

/// Serializable view of the gate for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentInput {
    pub amount: Option<f64>,
    pub is_valid: bool,
}

/// Returned by a successful [`InvestmentGate::confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct InvestmentGate {
    company: String,
    minimum: f64,
    amount: Option<f64>,
}

impl InvestmentGate {
    pub fn new(company: impl Into<String>, minimum: f64) -> Self {
        Self {
            company: company.into(),
            minimum,
            amount: None,
        }
    }

    /// Record the current input and return whether it is valid.
    pub fn set_amount(&mut self, amount: Option<f64>) -> bool {
        self.amount = amount;
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        meets_minimum(self.amount, self.minimum)
    }

    /// Acknowledge the investment intent. Does nothing unless the amount is valid.
    pub fn confirm(&self) -> Option<Acknowledgement> {
        self.is_valid().then(|| Acknowledgement {
            message: format!("Investment process initiated for {}!", self.company),
        })
    }

    pub fn snapshot(&self) -> InvestmentInput {
        InvestmentInput {
            amount: self.amount,
            is_valid: self.is_valid(),
        }
    }
}

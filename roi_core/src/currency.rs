//! # Currency
//!
//! The supported profile currencies and a small amount formatter used by the
//! CLI summary. Amounts are never converted between currencies; the code only
//! changes how a number is labelled.
//!
//! ```rust
//! use roi_core::currency::Currency;
//!
//! assert_eq!(Currency::Eur.format(40860.0), "€40,860.00");
//! assert_eq!(Currency::Aud.format(-1200.5), "-A$1,200.50");
//! ```

use serde::{Deserialize, Serialize};

/// ISO 4217 currency code for all monetary inputs and outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
    Aud,
}

impl Currency {
    /// All currencies for selection prompts
    pub const ALL: [Currency; 4] = [Currency::Eur, Currency::Usd, Currency::Gbp, Currency::Aud];

    /// ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
        }
    }

    /// Symbol used as an amount prefix
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Aud => "A$",
        }
    }

    /// Parse an ISO code, case-insensitive
    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Format an amount with symbol, thousands separators and two decimals.
    ///
    /// Non-finite amounts render as an em dash placeholder.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return "—".to_string();
        }
        let fixed = format!("{:.2}", amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}{}{}.{}", sign, self.symbol(), group_thousands(int_part), frac_part)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

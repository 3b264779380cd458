use serde::{Deserialize, Serialize};

/// Fixed-precision price rendering.
///
/// With `trim_zero` set, one trailing `0` is dropped after formatting, so the
/// default prints `$5.0` and `$5.5` but keeps `$5.25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub decimals: u8,
    pub trim_zero: bool,
}

impl PriceFormat {
    pub const MAX_DECIMALS: u8 = 4;

    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            trim_zero: false,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        let mut digits = format!("{:.*}", self.decimals as usize, amount.abs());
        if self.trim_zero && digits.contains('.') && digits.ends_with('0') {
            digits.pop();
        }
        // Amounts that round to zero print unsigned.
        let negative = amount < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
        if negative {
            format!("-${}", digits)
        } else {
            format!("${}", digits)
        }
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            decimals: 2,
            trim_zero: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSpec {
    pub description: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierSpec {
    pub suffix: String,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub description: String,
    pub cost: f64,
    pub display: String,
}

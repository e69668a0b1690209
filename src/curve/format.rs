use std::sync::Arc;

/// Injected currency formatting capability.
pub type CurrencyFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// US dollar formatting with thousands separators: `$1,500.00`, `-$50.00`.
pub fn usd(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Values that round to zero are shown unsigned
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn usd_formatter() -> CurrencyFormatter {
    Arc::new(usd)
}

/// Two-decimal display of a plotted price.
#[inline]
pub fn price_header(price: f64) -> String {
    format!("{price:.2}")
}

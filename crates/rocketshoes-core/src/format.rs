//! # Price Formatting
//!
//! Currency rendering for the storefront (pt-BR conventions: "R$ 1.234,56").
//! Formatting goes through integer cents so display never inherits float
//! artifacts.

/// Formats a price for display.
///
/// ## Example
/// ```rust
/// use rocketshoes_core::format::format_price;
/// assert_eq!(format_price(179.9), "R$ 179,90");
/// ```
pub fn format_price(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    format!(
        "{}R$ {},{:02}",
        if negative { "-" } else { "" },
        group_thousands(whole),
        frac
    )
}

/// Inserts pt-BR thousands separators ("1234567" → "1.234.567").
fn group_thousands(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push_str(&format!(".{:03}", group));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_basic() {
        assert_eq!(format_price(179.9), "R$ 179,90");
        assert_eq!(format_price(1.0), "R$ 1,00");
        assert_eq!(format_price(0.01), "R$ 0,01");
        assert_eq!(format_price(0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(1234.5), "R$ 1.234,50");
        assert_eq!(format_price(1234567.89), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-12.34), "-R$ 12,34");
    }

    #[test]
    fn test_format_price_rounds_float_noise() {
        // 3 × 59.97 is not exactly representable; display must still be exact
        assert_eq!(format_price(59.97 * 3.0), "R$ 179,91");
    }
}

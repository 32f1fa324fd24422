//! USD prices with an approximate INR equivalent.

pub const USD_TO_INR_RATE: f64 = 83.5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLabel {
    pub usd: String,
    pub inr: String,
}

pub fn usd_to_inr(usd: i64) -> i64 {
    (usd as f64 * USD_TO_INR_RATE).round() as i64
}

pub fn format_price(usd: i64) -> PriceLabel {
    PriceLabel {
        usd: format!("${}", group_thousands(usd)),
        inr: format!("₹{}", group_thousands(usd_to_inr(usd))),
    }
}

pub fn format_price_range(min_usd: i64, max_usd: i64) -> PriceLabel {
    PriceLabel {
        usd: format!(
            "${} - ${}",
            group_thousands(min_usd),
            group_thousands(max_usd)
        ),
        inr: format!(
            "₹{} - ₹{}",
            group_thousands(usd_to_inr(min_usd)),
            group_thousands(usd_to_inr(max_usd))
        ),
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45210), "-45,210");
    }

    #[test]
    fn nightly_price_in_both_currencies() {
        let p = format_price(35);
        assert_eq!(p.usd, "$35");
        assert_eq!(p.inr, "₹2,923"); // 2922.5 rounds up
    }

    #[test]
    fn large_totals_are_grouped() {
        let p = format_price(1400);
        assert_eq!(p.usd, "$1,400");
        assert_eq!(p.inr, "₹116,900");
    }

    #[test]
    fn range_formats_both_ends() {
        let r = format_price_range(28, 45);
        assert_eq!(r.usd, "$28 - $45");
        assert_eq!(r.inr, "₹2,338 - ₹3,758");
    }
}

pub const CURRENCY_CODE: &str = "PKR";

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `PKR 1,234.50`, with a leading `-` for negative amounts.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{} 0.00", CURRENCY_CODE);
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {}.{:02}", sign, CURRENCY_CODE, whole, cents % 100)
}

/// Lenient numeric input: blank or unparseable fields count as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_code_separators_and_two_decimals() {
        assert_eq!(format_currency(1234.5), "PKR 1,234.50");
        assert_eq!(format_currency(0.0), "PKR 0.00");
        assert_eq!(format_currency(999.999), "PKR 1,000.00");
        assert_eq!(format_currency(1_250_000.0), "PKR 1,250,000.00");
    }

    #[test]
    fn negative_currency_gets_leading_minus() {
        assert_eq!(format_currency(-42.1), "-PKR 42.10");
        assert_eq!(format_currency(-0.001), "PKR 0.00");
    }

    #[test]
    fn parse_amount_is_lenient() {
        assert_eq!(parse_amount(" 1500.5 "), 1500.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize(""), "");
    }
}

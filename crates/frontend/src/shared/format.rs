//! Number formatting for table cells

/// Two decimals with a comma every three integer digits
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "1,234.50");
/// ```
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}.{}", sign, grouped, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(10.0), "10.00");
        assert_eq!(format_money(99.999), "100.00");
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(-123.0), "-123.00");
    }
}

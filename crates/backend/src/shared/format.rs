use rust_decimal::{Decimal, RoundingStrategy};

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Форматирует денежную сумму в леях: "1.234,56 Lei"
///
/// Округление до двух знаков, половина округляется от нуля.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{},{} Lei", sign, group_thousands(int_part), frac_part)
}

/// Округление денежной суммы до двух знаков
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(0)), "0,00 Lei");
        assert_eq!(format_money(dec!(129.99)), "129,99 Lei");
        assert_eq!(format_money(dec!(2736.8215)), "2.736,82 Lei");
        assert_eq!(format_money(dec!(1234567.5)), "1.234.567,50 Lei");
        assert_eq!(format_money(dec!(-436.975)), "-436,98 Lei");
    }

    #[test]
    fn test_round_money() {
        assert_eq!(round_money(dec!(436.9715)), dec!(436.97));
        assert_eq!(round_money(dec!(0.005)), dec!(0.01));
    }
}

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount as Colombian pesos: rounded to whole pesos,
/// digits grouped by thousands, `COP` suffix.
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrato_cli::format::format_cop;
///
/// assert_eq!(format_cop(dec!(3670000)), "3,670,000 COP");
/// assert_eq!(format_cop(dec!(2384196.19)), "2,384,196 COP");
/// ```
pub fn format_cop(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let bytes = digits.as_bytes();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped} COP")
    } else {
        format!("{grouped} COP")
    }
}

/// Formats a dimensionless factor with two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use contrato_cli::format::format_factor;
///
/// assert_eq!(format_factor(dec!(1.468)), "1.47");
/// assert_eq!(format_factor(dec!(0.35)), "0.35");
/// ```
pub fn format_factor(value: Decimal) -> String {
    // Decimal's precision formatting truncates, so round explicitly first.
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

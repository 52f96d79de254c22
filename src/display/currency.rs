use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round an engine amount to cents, half away from zero.
///
/// Returns `None` for NaN, infinities and values outside the `Decimal` range.
pub fn to_cents(amount: f64) -> Option<Decimal> {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Render an amount as euros: `€1,234.56`, negatives as `-€1,234.56`.
pub fn format_eur(amount: f64) -> String {
    let Some(cents) = to_cents(amount) else {
        return format!("€{amount}");
    };
    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", cents.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("{sign}€{}.{frac_part}", group_thousands(int_part))
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

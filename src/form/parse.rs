//! Lenient numeric parsing of raw text fields.

/// Parse the leading integer of `raw`, ignoring whatever follows.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit is found or the value overflows.
///
/// `"1598"` → 1598, `" 42kW"` → 42, `"1.6"` → 1, `"abc"` → None.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the leading decimal number of `raw` (digits with an optional `.` fraction).
///
/// Same leniency as [`parse_int_lenient`]; exponents are not recognised.
pub fn parse_decimal_lenient(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let body = &s[sign_len..];

    let int_len = body.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    if body.as_bytes().get(int_len) == Some(&b'.') {
        let frac_len = body[int_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if int_len + frac_len == 0 {
            return None;
        }
        end = int_len + 1 + frac_len;
    } else if int_len == 0 {
        return None;
    }

    s[..sign_len + end].parse().ok()
}

/// Leading integer of `raw`, or `default` when nothing parses or the value is zero.
pub fn int_or(raw: &str, default: i64) -> i64 {
    match parse_int_lenient(raw) {
        Some(n) if n != 0 => n,
        _ => default,
    }
}

/// Leading decimal of `raw`, or `default` when nothing parses or the value is zero.
pub fn decimal_or(raw: &str, default: f64) -> f64 {
    match parse_decimal_lenient(raw) {
        Some(n) if n != 0.0 => n,
        _ => default,
    }
}

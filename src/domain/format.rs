// src/domain/format.rs
//
// Number rendering shared by the HTML views and the CLI report. Output
// matches en-US browser formatting (toLocaleString / toFixed).

/// `1000` -> `1,000`, `1234.5` -> `1,234.5`. At most three fraction digits,
/// trailing zeros trimmed.
pub fn group_thousands(n: f64) -> String {
    if !n.is_finite() {
        return plain(n);
    }

    let rounded = round_half_up(n.abs(), 3);
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if n < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Fixed number of decimals: `fixed(0.5, 2)` -> `0.50`, `fixed(0.125, 2)`
/// -> `0.13`.
pub fn fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return plain(n);
    }
    let digits = round_half_up(n.abs(), decimals);
    if n.is_sign_negative() && n != 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Round a non-negative value to `decimals` places, ties away from zero,
/// judged on its exact decimal expansion. `{:.N}` alone rounds exact binary
/// ties to even (0.125 -> "0.12"), browsers round them up.
fn round_half_up(abs: f64, decimals: usize) -> String {
    // An f64 has at most 1074 fractional digits, so this expansion is exact.
    let exact = format!("{abs:.1100}");
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if frac.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out: String = digits[..split].iter().map(|&b| b as char).collect();
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&b| b as char));
    }
    out
}

/// Whole numbers without a fraction: `1990.0` -> `1990`.
pub fn plain(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Placeholder for a field the backend did not send.
pub const MISSING: &str = "—";

pub fn plain_or_missing(n: Option<f64>) -> String {
    n.map(plain).unwrap_or_else(|| MISSING.to_string())
}

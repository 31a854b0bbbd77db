//! Number formatting for display.
//!
//! Amounts are grouped by thousands with a comma and shown with at most two
//! fraction digits, trailing zeros dropped: `75000` -> `75,000`,
//! `2533.3333` -> `2,533.33`.

/// Format an amount for display.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, fractional) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fractional = fractional.trim_end_matches('0');
    let is_negative = value < 0.0 && (whole != "0" || !fractional.is_empty());

    let mut formatted = group_digits(whole, ',');
    if !fractional.is_empty() {
        formatted.push('.');
        formatted.push_str(fractional);
    }

    if is_negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a number with thousands separators.
pub fn format_with_thousands(n: u64, sep: char) -> String {
    group_digits(&n.to_string(), sep)
}

fn group_digits(digits: &str, sep: char) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut result = Vec::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}

// Rounding and currency display helpers shared by the engine and every
// text export, so amounts look identical wherever they are printed.

pub const DEFAULT_CURRENCY: &str = "INR";

/// Rounds to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats `amount` in the default currency, e.g. `₹1,23,456.78`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, DEFAULT_CURRENCY)
}

/// Formats `amount` with exactly 2 decimals, Indian digit grouping
/// (last three digits, then pairs) and the symbol for `currency`.
/// Unknown codes are written as a prefix: `CHF 1,200.00`.
pub fn format_currency_with(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let rounded = round2(amount);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_indian(integer);

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{fraction}"),
        None => format!("{sign}{code} {grouped}.{fraction}"),
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("JP¥"),
        "AUD" => Some("A$"),
        "CAD" => Some("CA$"),
        _ => None,
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Lowercases `text` and joins whitespace-separated words with `-`.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

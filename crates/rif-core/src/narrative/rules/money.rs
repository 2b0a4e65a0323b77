//! Brazilian-locale numeric normalization.

/// Convert a Brazilian-formatted decimal string (`1.234,56`) to a float.
///
/// Tolerates a surrounding currency symbol, stray whitespace and underscore
/// padding leaked by malformed exports. Never fails: empty, malformed or
/// non-finite input yields `0.0`, so at this layer malformed input is
/// indistinguishable from zero.
pub fn normalize_brl(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return 0.0;
    }

    // Thousands dots out, decimal comma in, then a possible stray trailing
    // separator left by truncated clauses
    let normalized = cleaned.replace('.', "").replace(',', ".");
    let normalized = normalized.trim_end_matches('.');

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Format a value in Brazilian style (`1.234,56`).
pub fn format_brl(amount: f64) -> String {
    let s = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{formatted},{decimal_part}")
}

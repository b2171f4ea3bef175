/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// Non-finite values are rendered as `"NaN"`, `"inf"` or `"-inf"`.
///
/// # Examples
///
/// ```
/// use inflammation_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut result = group_thousands(int_part);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    // "-0.00" reads oddly on an axis; only keep the sign for non-zero output.
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("-{}", result)
    } else {
        result
    }
}

/// Pick the number of decimals needed to tell apart labels spread over `span`.
///
/// # Examples
///
/// ```
/// use inflammation_core::formatting::decimals_for_span;
///
/// assert_eq!(decimals_for_span(250.0), 0);
/// assert_eq!(decimals_for_span(4.0), 2);
/// assert_eq!(decimals_for_span(0.02), 4);
/// ```
pub fn decimals_for_span(span: f64) -> u32 {
    let span = span.abs();
    if !span.is_finite() || span >= 100.0 {
        0
    } else if span >= 10.0 {
        1
    } else if span >= 0.1 {
        2
    } else if span >= 0.001 {
        4
    } else {
        6
    }
}

/// Human-readable day count, e.g. `"1 day"`, `"40 days"`.
pub fn format_day_count(days: usize) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────

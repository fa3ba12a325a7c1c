//! Number formatting for counters, popups, tooltips, and axis ticks.

const SUFFIXES: [(f64, &str); 4] = [(1e12, "t"), (1e9, "b"), (1e6, "m"), (1e3, "k")];

/// Abbreviated figure with `decimals` places, e.g. `1.2k`, `3.4m`.
fn abbreviate(n: i64, decimals: i32) -> String {
    let abs = (n as f64).abs();
    let sign = if n < 0 { "-" } else { "" };
    let scale = 10f64.powi(decimals);
    let round = |v: f64| (v * scale).round() / scale;

    let mut unit = SUFFIXES.iter().position(|(threshold, _)| abs >= *threshold);
    // Rounding may carry into the next unit (999_950 -> 1000.0k -> 1.0m).
    if let Some(i) = unit {
        if i > 0 && round(abs / SUFFIXES[i].0) >= 1000.0 {
            unit = Some(i - 1);
        }
    }

    let (value, suffix) = match unit {
        Some(i) => (round(abs / SUFFIXES[i].0), SUFFIXES[i].1),
        None => (round(abs), ""),
    };
    format!("{}{:.*}{}", sign, decimals as usize, value, suffix)
}

/// Compact one-decimal figure: `1234 -> "1.2k"`, `999 -> "999.0"`.
pub fn format_compact(n: i64) -> String {
    abbreviate(n, 1)
}

/// Whole-number axis tick: `1500 -> "2k"`, `1200 -> "1k"`, `0 -> "0"`.
pub fn format_axis(n: i64) -> String {
    abbreviate(n, 0)
}

/// Today's delta for an info box. Absent and zero both read `+0`.
pub fn pretty_print_stat(stat: Option<i64>) -> String {
    match stat {
        None | Some(0) => "+0".to_string(),
        Some(n) if n < 0 => format_compact(n),
        Some(n) => format!("+{}", format_compact(n)),
    }
}

/// Thousands-separated integer: `1234567 -> "1,234,567"`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Thousands-separated integer with an explicit sign for positives.
pub fn format_signed_thousands(n: i64) -> String {
    if n > 0 {
        format!("+{}", format_thousands(n))
    } else {
        format_thousands(n)
    }
}

/// `format_thousands` for an optional counter; absent reads `n/a`.
pub fn format_thousands_opt(n: Option<i64>) -> String {
    n.map(format_thousands).unwrap_or_else(|| "n/a".to_string())
}

/// `format_compact` for an optional counter; absent reads `n/a`.
pub fn format_compact_opt(n: Option<i64>) -> String {
    n.map(format_compact).unwrap_or_else(|| "n/a".to_string())
}

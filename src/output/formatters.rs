//! Formatting utilities for terminal output

/// Frames cycled by the status marker
pub const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Width of the rules and padding around the solution list
pub const RULE_WIDTH: usize = 60;

/// Format an integer with thousands separators
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Fraction of `goal` reached, clamped to [0, 1]
///
/// `None` when the goal is unknown or zero.
#[must_use]
pub fn fraction_done(count: u64, goal: Option<u64>) -> Option<f64> {
    goal.filter(|&g| g > 0)
        .map(|g| (count as f64 / g as f64).clamp(0.0, 1.0))
}

/// Create a bar of `width` cells filled up to `fraction`, with a marker overlaid
///
/// The marker cell shows `marker_glyph` regardless of the fill.
#[must_use]
pub fn create_progress_bar(
    fraction: Option<f64>,
    width: usize,
    marker: usize,
    marker_glyph: char,
) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = fraction.map_or(0, |f| ((f * width as f64).round() as usize).min(width));

    (0..width)
        .map(|cell| {
            if cell == marker {
                marker_glyph
            } else if cell < filled {
                '='
            } else {
                ' '
            }
        })
        .collect()
}

/// Render the full status line
///
/// `[====/      ]  40.00% | 1,234 permutations`, with `--.--%` when the goal
/// is unavailable.
#[must_use]
pub fn status_line(
    count: u64,
    goal: Option<u64>,
    width: usize,
    marker: usize,
    marker_glyph: char,
) -> String {
    let fraction = fraction_done(count, goal);
    let percent = fraction.map_or_else(|| "--.--%".to_string(), |f| format!("{:.2}%", f * 100.0));

    format!(
        "[{}] {percent:>7} | {} permutations",
        create_progress_bar(fraction, width, marker, marker_glyph),
        group_digits(count)
    )
}

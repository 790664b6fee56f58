//! Hex color helpers shared by the form controller and the analytics charts.

use tracing::warn;

/// Fallback for anything that does not survive normalization.
pub const DEFAULT_COLOR: &str = "#000000";

/// Normalize free-form user input into an uppercase `#RRGGBB` string.
///
/// Whitespace is dropped, a missing `#` is added and 3-digit shorthand is
/// expanded. Anything that is still not six hex digits maps to `#000000`.
pub fn normalize_color(raw: &str) -> String {
    let mut color = prefixed(raw);

    if color.len() == 4 && is_hex(&color[1..]) {
        let expanded: String = color[1..].chars().flat_map(|c| [c, c]).collect();
        color = format!("#{expanded}");
    }

    if color.len() != 7 || !is_hex(&color[1..]) {
        warn!(input = raw, "invalid color format, falling back to {DEFAULT_COLOR}");
        return DEFAULT_COLOR.to_string();
    }

    color.to_ascii_uppercase()
}

/// Submission-time check: `#` plus 3 or 6 hex digits after the same cleanup
/// [`normalize_color`] applies. Returns the cleaned value (not expanded).
pub fn submission_color(raw: &str) -> Option<String> {
    let color = prefixed(raw);
    let digits = &color[1..];
    if matches!(digits.len(), 3 | 6) && is_hex(digits) {
        Some(color)
    } else {
        None
    }
}

/// `#rrggbb` → `rgba(r, g, b, alpha)`. Invalid input renders as black.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = rgb_components(&normalize_color(hex)).unwrap_or((0, 0, 0));
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Blend a color towards white by `percent` (0-100).
pub fn lighten_color(hex: &str, percent: f64) -> String {
    let (r, g, b) = rgb_components(&normalize_color(hex)).unwrap_or((0, 0, 0));
    let ratio = percent.clamp(0.0, 100.0) / 100.0;
    let lift = |channel: u8| -> u8 {
        let value = f64::from(channel);
        (value + (255.0 - value) * ratio).round().min(255.0) as u8
    };
    format!("#{:02x}{:02x}{:02x}", lift(r), lift(g), lift(b))
}

fn prefixed(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.starts_with('#') {
        compact
    } else {
        format!("#{compact}")
    }
}

fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn rgb_components(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

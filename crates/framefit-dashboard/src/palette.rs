#![forbid(unsafe_code)]

//! Brand color palette shared by every dashboard chart.

pub const PRIMARY: &str = "#01D6B0";
pub const SECONDARY: &str = "#00B399";
pub const TERTIARY: &str = "#008B7A";
pub const QUATERNARY: &str = "#006B5F";
pub const LIGHT: &str = "#01F0C7";

pub const TEXT: &str = "#FFFFFF";
pub const TEXT_SECONDARY: &str = "#E0E0E0";
pub const BORDER: &str = "#4A5668";
pub const GRID: &str = "#3A4655";
pub const SURFACE: &str = "#28313E";
pub const TOOLTIP_SURFACE: &str = "#323D4D";

/// Teal ramp used when a chart needs one color per series or point.
pub const SERIES: [&str; 8] = [
    "#01D6B0", "#00B399", "#008B7A", "#006B5F", "#01F0C7", "#00B39F", "#00A894", "#009A89",
];

/// Higher-contrast mixed palette for charts where adjacent teal shades
/// read as one.
pub const CONTRAST: [&str; 6] = [
    "#01D6B0", "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8",
];

/// First `count` series colors, capped at the ramp length.
#[must_use]
pub fn series_colors(count: usize) -> &'static [&'static str] {
    &SERIES[..count.min(SERIES.len())]
}

/// First `count` contrast colors, capped at the palette length.
#[must_use]
pub fn contrast_colors(count: usize) -> &'static [&'static str] {
    &CONTRAST[..count.min(CONTRAST.len())]
}

/// Append an alpha channel to a `#RRGGBB` color, e.g.
/// `with_alpha(PRIMARY, 0x20)` → `"#01D6B020"`.
#[must_use]
pub fn with_alpha(hex: &str, alpha: u8) -> String {
    format!("{hex}{alpha:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn series_colors_are_capped() {
        assert_eq!(series_colors(3).len(), 3);
        assert_eq!(series_colors(50).len(), SERIES.len());
    }

    #[test]
    fn alpha_suffix_is_two_hex_digits() {
        assert_eq!(with_alpha(PRIMARY, 0x20), "#01D6B020");
        assert_eq!(with_alpha(PRIMARY, 0x05), "#01D6B005");
    }
}

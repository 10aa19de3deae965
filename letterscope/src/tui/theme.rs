//! TUI color theme
//!
//! HUD-inspired color scheme for the terminal interface

use ratatui::style::Color;

pub const HUD_GREEN: Color = Color::Rgb(0, 255, 0);
pub const CRITICAL_RED: Color = Color::Rgb(255, 0, 0);
pub const CAUTION_AMBER: Color = Color::Rgb(255, 191, 0);
pub const INFO_DIM: Color = Color::Rgb(0, 180, 0);
pub const HUD_CYAN: Color = Color::Rgb(0, 255, 255);

/// Selection brackets around the highlighted history entry
pub const SEL_LEFT: &str = "▶";
pub const SEL_RIGHT: &str = " ";

/// Horizontal bar for `count` relative to `max`, `width` cells wide
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn count_bar(count: u64, max: u64, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((u128::from(count.min(max)) * width as u128) / u128::from(max)) as usize
    };
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bar_scales_to_max() {
        assert_eq!(count_bar(0, 4, 4), "░░░░");
        assert_eq!(count_bar(2, 4, 4), "▓▓░░");
        assert_eq!(count_bar(4, 4, 4), "▓▓▓▓");
    }

    #[test]
    fn test_count_bar_all_zero_tally() {
        assert_eq!(count_bar(0, 0, 3), "░░░");
    }
}

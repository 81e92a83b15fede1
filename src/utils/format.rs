// src/utils/format.rs
use console::{style, Color};

use crate::core::Theme;
use crate::models::{CharacterClass, StrengthReport, StrengthTier};

const BAR_WIDTH: usize = 12;

// Fixed-width meter, e.g. "[########----]" for 66%
pub fn strength_bar(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn tier_color(tier: StrengthTier) -> Color {
    match tier {
        StrengthTier::Weak => Color::Red,
        StrengthTier::Medium => Color::Yellow,
        StrengthTier::Strong => Color::Green,
    }
}

/// One-line strength meter colored for the active theme.
pub fn render_strength(report: &StrengthReport, theme: Theme) -> String {
    let styled = style(format!(
        "{} {} ({:.1} bits)",
        strength_bar(report.percentage, BAR_WIDTH),
        report.tier,
        report.entropy_bits
    ))
    .fg(tier_color(report.tier));

    match theme {
        Theme::Dark => styled.bright().to_string(),
        Theme::Light => styled.bold().to_string(),
    }
}

// Join class names for display
pub fn format_classes(classes: &[CharacterClass]) -> String {
    if classes.is_empty() {
        return "none".to_string();
    }
    classes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

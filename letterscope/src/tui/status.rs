//! Header and status bar
//!
//! The header shows the active toggles; the status bar shows key hints and
//! the current notice, if any.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{CAUTION_AMBER, CRITICAL_RED, HUD_CYAN, HUD_GREEN, INFO_DIM};
use crate::domain::{Category, Source};
use crate::session::{Notice, NoticeLevel, Settings};

const STYLE_KEY: Style = Style::new().fg(CAUTION_AMBER);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);

/// Toggle labels shown in the header, in display order
#[must_use]
pub fn toggle_labels(settings: Settings) -> [&'static str; 3] {
    [
        match settings.category {
            Category::Vowels => "[VOWELS]",
            Category::Consonants => "[CONSONANTS]",
        },
        match settings.source {
            Source::Local => "[LOCAL]",
            Source::Remote => "[ONLINE]",
        },
        if settings.show_zeros { "[ZEROS ON]" } else { "[ZEROS OFF]" },
    ]
}

pub fn render_header(f: &mut Frame, area: Rect, settings: Settings, pending: usize, server: &str) {
    let [category, source, zeros] = toggle_labels(settings);
    let source_color = match settings.source {
        Source::Local => HUD_GREEN,
        Source::Remote => HUD_CYAN,
    };

    let mut spans = vec![
        Span::styled("LETTERSCOPE", Style::new().fg(HUD_GREEN).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", STYLE_DIM),
        Span::styled(category, Style::new().fg(CAUTION_AMBER).add_modifier(Modifier::BOLD)),
        Span::styled(" | ", STYLE_DIM),
        Span::styled(source, Style::new().fg(source_color)),
        Span::styled(" | ", STYLE_DIM),
        Span::styled(zeros, Style::new().fg(HUD_GREEN)),
    ];
    if settings.source == Source::Remote {
        spans.push(Span::styled(format!(" {server}"), STYLE_DIM));
    }
    if pending > 0 {
        spans.push(Span::styled(" | ", STYLE_DIM));
        spans.push(Span::styled(format!("{pending} pending"), Style::new().fg(CAUTION_AMBER)));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::new().fg(HUD_GREEN)));
    f.render_widget(header, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, notice: Option<&Notice>, mode_label: &str) {
    let line = match notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Warning => CAUTION_AMBER,
                NoticeLevel::Error => CRITICAL_RED,
            };
            Line::from(vec![
                Span::styled(
                    format!("{}: ", notice.title),
                    Style::new().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(notice.message, Style::new().fg(color)),
            ])
        }
        None => Line::from(vec![
            Span::styled("Enter", STYLE_KEY),
            Span::styled(":Analyze ", STYLE_DIM),
            Span::styled("Tab", STYLE_KEY),
            Span::styled(":History ", STYLE_DIM),
            Span::styled("F2", STYLE_KEY),
            Span::styled(":Vowels/Consonants ", STYLE_DIM),
            Span::styled("F3", STYLE_KEY),
            Span::styled(":Local/Online ", STYLE_DIM),
            Span::styled("F4", STYLE_KEY),
            Span::styled(":Zeros ", STYLE_DIM),
            Span::styled("F1", STYLE_KEY),
            Span::styled(":Help ", STYLE_DIM),
            Span::styled("Esc", STYLE_KEY),
            Span::styled(":Quit ", STYLE_DIM),
            Span::styled(format!("[{mode_label}]"), Style::new().fg(HUD_CYAN)),
        ]),
    };

    let status = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(HUD_GREEN)));
    f.render_widget(status, area);
}

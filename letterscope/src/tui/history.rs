//! History panel - rendered results, oldest first.
//!
//! Each entry is one line produced by the Result Formatter with the current
//! zero preference. While the input line has focus the panel follows the
//! newest entry; with history focus the user moves the selection freely.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use super::theme::{CAUTION_AMBER, HUD_CYAN, HUD_GREEN, INFO_DIM, SEL_LEFT, SEL_RIGHT};

/// Truncate a string for display, adding "..." if too long
fn truncate_for_display(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Calculate scroll offset to keep selected item visible
fn visible_scroll_offset(selected: usize, current_offset: usize, visible_count: usize) -> usize {
    if selected >= current_offset + visible_count {
        selected.saturating_sub(visible_count - 1)
    } else {
        current_offset.min(selected)
    }
}

/// History list with its own selection state
#[derive(Debug, Default)]
pub struct HistoryView {
    /// First visible entry
    scroll_offset: usize,
    /// Highlighted entry
    pub selected_index: usize,
}

impl HistoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.scroll_offset = self.scroll_offset.min(self.selected_index);
    }

    pub fn scroll_down(&mut self, len: usize) {
        self.selected_index = (self.selected_index + 1).min(len.saturating_sub(1));
    }

    /// Move selection to the newest entry
    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.saturating_sub(1);
    }

    /// Render `lines` (one per history entry); the selection is only drawn
    /// when the panel has focus
    pub fn render(&mut self, f: &mut Frame, area: Rect, lines: &[String], focused: bool) {
        let visible_count = (area.height.saturating_sub(2) as usize).max(1);
        self.scroll_offset =
            visible_scroll_offset(self.selected_index, self.scroll_offset, visible_count);
        let max_len = (area.width as usize).saturating_sub(5);

        let rendered: Vec<Line> = if lines.is_empty() {
            vec![Line::from(Span::styled(
                " No results yet. Type a text and press Enter.",
                Style::default().fg(INFO_DIM),
            ))]
        } else {
            lines
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(visible_count)
                .map(|(idx, line)| {
                    let is_selected = focused && idx == self.selected_index;
                    let (sel_l, sel_r) = if is_selected { (SEL_LEFT, SEL_RIGHT) } else { (" ", " ") };
                    let style = if is_selected {
                        Style::default().fg(HUD_GREEN).add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    } else {
                        Style::default().fg(HUD_GREEN)
                    };
                    Line::from(vec![
                        Span::styled(sel_l, Style::default().fg(CAUTION_AMBER)),
                        Span::styled(truncate_for_display(line, max_len), style),
                        Span::styled(sel_r, Style::default().fg(CAUTION_AMBER)),
                    ])
                })
                .collect()
        };

        let title = format!("[ HISTORY {} ]", lines.len());
        let border = if focused { HUD_CYAN } else { HUD_GREEN };
        let paragraph = Paragraph::new(rendered).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .title(title)
                .border_style(Style::default().fg(border)),
        );

        f.render_widget(paragraph, area);
    }
}

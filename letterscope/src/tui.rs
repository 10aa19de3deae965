//! # Terminal User Interface (TUI)
//!
//! Interactive terminal UI using `ratatui`.
//!
//! ## View Modes
//!
//! - **Input** - Type text, Enter analyzes it (default)
//! - **History** - Move through past results
//! - **Detail** - Per-letter bars for the selected result
//! - **Help** - Keyboard shortcuts
//!
//! ## Remote Analyses
//!
//! Online requests are spawned on the tokio runtime. Each completion is sent
//! back over a channel and drained every tick, so results are appended in
//! completion order while the UI keeps accepting input.
//!
//! ## Sub-Modules
//!
//! - `history` - History list and selection
//! - `status` - Header toggles and status bar
//! - `theme` - Color scheme

// TUI rendering uses precision-losing casts and long functions for clarity
#![allow(
    clippy::cast_possible_truncation,
    clippy::too_many_lines,
    clippy::needless_pass_by_value
)]

use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use tokio::runtime::Handle;

pub mod history; // Public for testing
mod status;
mod theme;

use history::HistoryView;
use theme::{count_bar, CAUTION_AMBER, HUD_CYAN, HUD_GREEN, INFO_DIM};

use crate::domain::{AnalysisResult, FrequencyMap, RemoteError};
use crate::formatter::TIME_FORMAT;
use crate::remote::HttpAnalyzer;
use crate::session::{Notice, RemoteRequest, Session, Submission};

pub use crate::domain::TuiError;

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

const STYLE_HEADING: Style = Style::new().fg(HUD_GREEN).add_modifier(Modifier::BOLD);
const STYLE_LABEL: Style = Style::new().fg(CAUTION_AMBER).add_modifier(Modifier::BOLD);
const STYLE_DIM: Style = Style::new().fg(INFO_DIM);
const STYLE_KEY: Style = Style::new().fg(CAUTION_AMBER);
const STYLE_TEXT: Style = Style::new().fg(ratatui::style::Color::White);

/// How long a notice stays in the status bar
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Redraw interval when nothing changed (expires notices)
const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Width of the per-letter bars in the detail overlay
const BAR_WIDTH: usize = 30;

// =============================================================================
// VIEW MODES
// =============================================================================

/// Current view mode determines what's displayed and how keys are handled
#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewMode {
    /// Text input line has focus
    Input,
    /// History list has focus
    History,
    /// Frozen detail view of one history entry
    Detail,
    /// Help overlay with keyboard shortcuts
    Help,
}

impl ViewMode {
    fn label(self) -> &'static str {
        match self {
            ViewMode::Input => "Input",
            ViewMode::History => "History",
            ViewMode::Detail => "Detail",
            ViewMode::Help => "Help",
        }
    }
}

/// A finished remote analysis, sent from the runtime back to the UI loop
#[derive(Debug)]
pub struct Completion {
    pub request: RemoteRequest,
    pub outcome: Result<FrequencyMap, RemoteError>,
}

// =============================================================================
// APPLICATION STATE
// =============================================================================

struct App {
    session: Session,
    input: String,
    view_mode: ViewMode,
    /// Mode to return to when help closes
    return_mode: ViewMode,
    history_view: HistoryView,
    /// History index shown in the detail overlay
    detail_index: Option<usize>,
    notice: Option<(Notice, Instant)>,
    should_quit: bool,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            input: String::new(),
            view_mode: ViewMode::Input,
            return_mode: ViewMode::Input,
            history_view: HistoryView::new(),
            detail_index: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Handle one key press. Returns a remote request to run, if the key
    /// submitted one.
    fn handle_key(&mut self, key: KeyEvent) -> Option<RemoteRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        if self.view_mode == ViewMode::Help {
            // Any key closes help
            self.view_mode = self.return_mode;
            return None;
        }

        match key.code {
            KeyCode::F(1) => {
                self.return_mode = self.view_mode;
                self.view_mode = ViewMode::Help;
                return None;
            }
            KeyCode::F(2) => {
                self.session.toggle_category();
                return None;
            }
            KeyCode::F(3) => {
                self.session.toggle_source();
                return None;
            }
            KeyCode::F(4) => {
                self.session.toggle_show_zeros();
                return None;
            }
            _ => {}
        }

        match self.view_mode {
            ViewMode::Input => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => return self.submit(),
                KeyCode::Tab => {
                    if !self.session.history().is_empty() {
                        self.view_mode = ViewMode::History;
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.clear();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input.push(c);
                }
                _ => {}
            },
            ViewMode::History => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.view_mode = ViewMode::Input;
                    self.history_view.select_last(self.session.history().len());
                }
                KeyCode::Up => self.history_view.scroll_up(),
                KeyCode::Down => self.history_view.scroll_down(self.session.history().len()),
                KeyCode::Enter => {
                    let index = self.history_view.selected_index;
                    if self.session.history().get(index).is_some() {
                        self.detail_index = Some(index);
                        self.view_mode = ViewMode::Detail;
                    }
                }
                _ => {}
            },
            ViewMode::Detail => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | 'Q')) {
                    self.view_mode = ViewMode::History;
                    self.detail_index = None;
                }
            }
            ViewMode::Help => {}
        }
        None
    }

    fn submit(&mut self) -> Option<RemoteRequest> {
        match self.session.submit(&self.input) {
            Submission::Rejected(notice) => {
                self.show_notice(notice);
                None
            }
            Submission::Completed(_) => {
                self.notice = None;
                self.follow_latest();
                None
            }
            Submission::Pending(request) => Some(request),
        }
    }

    fn complete(&mut self, completion: Completion) {
        match self.session.complete(completion.request, completion.outcome) {
            Ok(_) => {
                self.notice = None;
                self.follow_latest();
            }
            Err(notice) => self.show_notice(notice),
        }
    }

    fn follow_latest(&mut self) {
        if self.view_mode == ViewMode::Input {
            self.history_view.select_last(self.session.history().len());
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some((notice, Instant::now()));
    }

    fn active_notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|(_, shown)| shown.elapsed() < NOTICE_TTL)
            .map(|(notice, _)| notice)
    }
}

// =============================================================================
// RENDERING
// =============================================================================

fn draw(f: &mut ratatui::Frame, app: &mut App, lines: &[String], server: &str) {
    let outer_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // History
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    status::render_header(
        f,
        outer_layout[0],
        app.session.settings(),
        app.session.pending(),
        server,
    );
    render_input(f, outer_layout[1], &app.input, app.view_mode == ViewMode::Input);
    app.history_view.render(f, outer_layout[2], lines, app.view_mode != ViewMode::Input);
    status::render_status_bar(f, outer_layout[3], app.active_notice(), app.view_mode.label());

    match app.view_mode {
        ViewMode::Help => render_help_overlay(f, f.area()),
        ViewMode::Detail => {
            if let Some(result) = app.detail_index.and_then(|i| app.session.history().get(i)) {
                render_detail_overlay(f, f.area(), result);
            }
        }
        ViewMode::Input | ViewMode::History => {}
    }
}

fn render_input(f: &mut ratatui::Frame, area: Rect, input: &str, focused: bool) {
    // Keep the cursor end visible for long inputs
    let width = (area.width as usize).saturating_sub(5);
    let skip = input.chars().count().saturating_sub(width);
    let visible: String = input.chars().skip(skip).collect();
    let cursor = if focused { "_" } else { "" };

    let widget = Paragraph::new(Line::from(vec![
        Span::styled("> ", STYLE_KEY),
        Span::styled(format!("{visible}{cursor}"), STYLE_TEXT),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Text")
            .border_style(Style::new().fg(if focused { HUD_CYAN } else { HUD_GREEN })),
    );
    f.render_widget(widget, area);
}

/// Render the help overlay with keyboard shortcuts
fn render_help_overlay(f: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_popup(area, 70, 20);

    let key_line = |key: &'static str, text: &'static str| {
        Line::from(vec![Span::styled(format!("  {key:<8}"), STYLE_KEY), Span::styled(text, STYLE_TEXT)])
    };

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled("  What You're Looking At", STYLE_HEADING)),
        Line::from(Span::styled(
            "  Each line counts vowels or consonants in one text. Letters are",
            STYLE_DIM,
        )),
        Line::from(Span::styled(
            "  counted case-insensitively; umlauts, ß, digits and symbols are ignored.",
            STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("  Keys", STYLE_HEADING)),
        key_line("Enter", "Analyze text / open selected result"),
        key_line("Tab", "Switch between input and history"),
        key_line("↑↓", "Select result"),
        key_line("F2", "Toggle vowels / consonants"),
        key_line("F3", "Toggle local / online counting"),
        key_line("F4", "Show / hide zero counts"),
        key_line("Ctrl+U", "Clear input"),
        key_line("Esc", "Back / quit"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", STYLE_DIM)),
    ];

    let help_widget = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::new().bg(ratatui::style::Color::Black).fg(HUD_GREEN)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

/// Render per-letter bars for one result
fn render_detail_overlay(f: &mut ratatui::Frame, area: Rect, result: &AnalysisResult) {
    let counts = result.counts();
    let height = (counts.len() as u16 + 10).min(area.height);
    let popup_area = centered_popup(area, 70, height);
    let separator = "─".repeat(popup_area.width.saturating_sub(4) as usize);

    let source = result.source().annotation().unwrap_or("(local)");
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {source}", result.category().label().to_uppercase()),
            STYLE_HEADING,
        )),
        Line::from(separator.clone()),
        Line::from(vec![
            Span::styled("Time:  ", STYLE_LABEL),
            Span::styled(result.timestamp().format(TIME_FORMAT).to_string(), STYLE_DIM),
        ]),
        Line::from(vec![
            Span::styled("Text:  ", STYLE_LABEL),
            Span::styled(format!("\"{}\"", result.input()), STYLE_TEXT),
        ]),
        Line::from(vec![
            Span::styled("Total: ", STYLE_LABEL),
            Span::styled(counts.total().to_string(), Style::new().fg(HUD_GREEN)),
        ]),
        Line::from(separator),
    ];

    let max = counts.max_count();
    for (letter, count) in counts.iter() {
        let style = if count > 0 { Style::new().fg(HUD_GREEN) } else { STYLE_DIM };
        lines.push(Line::from(vec![
            Span::styled(format!("  {letter}  "), STYLE_LABEL),
            Span::styled(count_bar(count, max, BAR_WIDTH), style),
            Span::styled(format!(" {count}"), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Esc to close", STYLE_DIM)));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Detail ")
            .style(Style::new().bg(ratatui::style::Color::Black).fg(HUD_GREEN)),
    );

    f.render_widget(ratatui::widgets::Clear, popup_area);
    f.render_widget(widget, popup_area);
}

/// Create a centered popup area with given width percentage and height in lines
fn centered_popup(area: Rect, width_percent: u16, height_lines: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(height_lines), Constraint::Fill(1)])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run the interactive UI until the user quits and hand the session back.
///
/// Remote requests are spawned on `runtime` and their completions are drained
/// on every tick. Requests still in flight at exit are abandoned.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal setup or
/// rendering fails.
pub fn run(session: Session, analyzer: HttpAnalyzer, runtime: Handle) -> Result<Session, TuiError> {
    if !io::stdout().is_terminal() {
        return Err(TuiError::TerminalError(
            "stdout is not a terminal (use --headless for scripted use)".to_string(),
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let server = analyzer.endpoint(session.settings().category).origin().ascii_serialization();
    let mut app = App::new(session);
    let result = event_loop(&mut terminal, &mut app, &analyzer, &runtime, &server);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app.session)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    analyzer: &HttpAnalyzer,
    runtime: &Handle,
    server: &str,
) -> Result<(), TuiError> {
    let (completion_tx, completion_rx): (Sender<Completion>, Receiver<Completion>) = unbounded();
    let mut last_update: Option<Instant> = None;
    let mut dirty = true;

    loop {
        // Drain finished remote analyses (non-blocking)
        while let Ok(completion) = completion_rx.try_recv() {
            app.complete(completion);
            dirty = true;
        }

        if dirty || last_update.map_or(true, |t| t.elapsed() >= UPDATE_INTERVAL) {
            let lines = app.session.render_history();
            terminal.draw(|f| draw(f, app, &lines, server))?;
            last_update = Some(Instant::now());
            dirty = false;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = app.handle_key(key) {
                        spawn_remote(runtime, analyzer.clone(), request, completion_tx.clone());
                    }
                    dirty = true;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    if app.session.pending() > 0 {
        debug!("Quitting with {} remote analyses in flight", app.session.pending());
    }
    Ok(())
}

fn spawn_remote(
    runtime: &Handle,
    analyzer: HttpAnalyzer,
    request: RemoteRequest,
    completion_tx: Sender<Completion>,
) {
    runtime.spawn(async move {
        let outcome = analyzer.analyze(&request.text, request.category).await;
        // The UI may have quit in the meantime
        completion_tx.send(Completion { request, outcome }).ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Source};
    use crate::session::Settings;
    use letterscope_common::analyze;

    fn press(app: &mut App, code: KeyCode) -> Option<RemoteRequest> {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_local_submit() {
        let mut app = App::new(Session::default());
        type_text(&mut app, "Hello");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "Hell");

        assert!(press(&mut app, KeyCode::Enter).is_none());
        assert_eq!(app.session.history().len(), 1);
        // Input is kept for re-analysis with other toggles
        assert_eq!(app.input, "Hell");
    }

    #[test]
    fn test_empty_submit_shows_warning() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_notice(), Some(&Notice::empty_text()));
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_online_submit_returns_request() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::F(3));
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, "abc");

        let request = press(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(request, RemoteRequest { text: "abc".into(), category: Category::Vowels });
        assert_eq!(app.session.pending(), 1);

        app.complete(Completion { request, outcome: Ok(analyze("abc", Category::Vowels)) });
        assert_eq!(app.session.pending(), 0);
        assert_eq!(app.session.history().latest().map(AnalysisResult::source), Some(Source::Remote));
    }

    #[test]
    fn test_failed_completion_shows_error() {
        let mut app = App::new(Session::new(Settings { source: Source::Remote, ..Settings::default() }));
        type_text(&mut app, "x");
        let request = press(&mut app, KeyCode::Enter).unwrap();

        app.complete(Completion { request, outcome: Err(RemoteError::Service { status: 503 }) });
        let notice = app.active_notice().unwrap();
        assert_eq!(notice.message, "There seems to be a problem with the server.");
    }

    #[test]
    fn test_remote_success_clears_notice() {
        let mut app = App::new(Session::new(Settings { source: Source::Remote, ..Settings::default() }));
        press(&mut app, KeyCode::Enter);
        assert!(app.active_notice().is_some());

        type_text(&mut app, "a");
        let request = press(&mut app, KeyCode::Enter).unwrap();
        app.complete(Completion { request, outcome: Ok(analyze("a", Category::Consonants)) });

        assert_eq!(app.session.history().len(), 1);
        assert!(app.active_notice().is_none());
    }

    #[test]
    fn test_history_focus_and_detail() {
        let mut app = App::new(Session::default());
        // Tab does nothing without history
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view_mode, ViewMode::Input);

        type_text(&mut app, "one");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history_view.selected_index, 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view_mode, ViewMode::History);
        // Typing goes nowhere while history has focus
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.input, "one");

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view_mode, ViewMode::Detail);
        assert_eq!(app.detail_index, Some(0));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view_mode, ViewMode::History);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view_mode, ViewMode::Input);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.view_mode, ViewMode::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.view_mode, ViewMode::Input);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Session::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(Session::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let mut app = App::new(Session::default());
        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_zero_toggle_changes_rendering() {
        let mut app = App::new(Session::default());
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Enter);
        let hidden = app.session.render_history();
        press(&mut app, KeyCode::F(4));
        let shown = app.session.render_history();
        assert!(shown[0].len() > hidden[0].len());
        assert!(shown[0].contains("C: 0"));
    }
}

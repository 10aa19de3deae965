//! Analysis session: preferences, history and the submission flow
//!
//! ## Data Flow
//!
//! ```text
//! text ──► Session::submit()
//!             ├─ empty ───────────► Rejected(Notice)
//!             ├─ Source::Local ───► analyze() ──► History  ──► Completed(index)
//!             └─ Source::Remote ──► Pending(RemoteRequest)
//!                                        │  (caller runs HttpAnalyzer)
//!                                        ▼
//!                                Session::complete() ──► History | Notice
//! ```
//!
//! The session never performs I/O. The TUI and headless mode own the remote
//! calls and feed their outcomes back through [`Session::complete`].

use letterscope_common::{analyze, Category, FrequencyMap};
use log::{debug, warn};

use crate::domain::{AnalysisResult, FailureKind, RemoteError, Source};
use crate::formatter::format_result;
use crate::history::History;

/// User-selectable toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub category: Category,
    pub source: Source,
    /// List zero counts when rendering results
    pub show_zeros: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { category: Category::Consonants, source: Source::Local, show_zeros: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Short user-facing message (title + body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub message: &'static str,
}

impl Notice {
    /// Shown when analysis is requested for an empty text
    #[must_use]
    pub fn empty_text() -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Empty Text",
            message: "Please enter a text to analyze",
        }
    }

    /// Shown when a remote analysis fails
    #[must_use]
    pub fn remote_failure(err: &RemoteError) -> Self {
        let message = match err.kind() {
            FailureKind::Unreachable => "The backend seems not to be reachable.",
            FailureKind::ServiceError => "There seems to be a problem with the server.",
        };
        Self { level: NoticeLevel::Error, title: "An error occurred!", message }
    }
}

/// A remote analysis waiting to be run.
///
/// Category is captured at submission, so toggling while the request is in
/// flight does not change what the result is recorded as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub text: String,
    pub category: Category,
}

/// Outcome of [`Session::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Nothing was analyzed
    Rejected(Notice),
    /// Local result appended at this history index
    Completed(usize),
    /// Caller must run the request and report back via [`Session::complete`]
    Pending(RemoteRequest),
}

/// Preferences plus the history they apply to
#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    history: History,
    pending: usize,
}

impl Session {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings, history: History::new(), pending: 0 }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn toggle_category(&mut self) {
        self.settings.category = self.settings.category.toggled();
    }

    pub fn toggle_source(&mut self) {
        self.settings.source = self.settings.source.toggled();
    }

    pub fn toggle_show_zeros(&mut self) {
        self.settings.show_zeros = !self.settings.show_zeros;
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Remote requests submitted but not yet completed
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Analyze `text` with the current settings
    pub fn submit(&mut self, text: &str) -> Submission {
        if text.is_empty() {
            return Submission::Rejected(Notice::empty_text());
        }

        let category = self.settings.category;
        match self.settings.source {
            Source::Local => {
                let counts = analyze(text, category);
                debug!("Local {category} analysis: {} letters", counts.total());
                let index = self.history.push(AnalysisResult::new(text, Source::Local, counts));
                Submission::Completed(index)
            }
            Source::Remote => {
                self.pending += 1;
                Submission::Pending(RemoteRequest { text: text.to_string(), category })
            }
        }
    }

    /// Record the outcome of a remote request.
    ///
    /// # Errors
    /// Returns the [`Notice`] to show when the request failed; nothing is
    /// appended in that case.
    pub fn complete(
        &mut self,
        request: RemoteRequest,
        outcome: Result<FrequencyMap, RemoteError>,
    ) -> Result<usize, Notice> {
        self.pending = self.pending.saturating_sub(1);
        match outcome {
            Ok(counts) if counts.category() == request.category => {
                Ok(self.history.push(AnalysisResult::new(request.text, Source::Remote, counts)))
            }
            Ok(counts) => {
                let err = RemoteError::InvalidResponse(format!(
                    "{} tally for a {} request",
                    counts.category(),
                    request.category
                ));
                warn!("Remote analysis failed: {err}");
                Err(Notice::remote_failure(&err))
            }
            Err(err) => {
                warn!("Remote analysis failed: {err}");
                Err(Notice::remote_failure(&err))
            }
        }
    }

    /// Every history entry rendered with the current zero preference
    #[must_use]
    pub fn render_history(&self) -> Vec<String> {
        self.history.iter().map(|r| format_result(r, self.settings.show_zeros)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_session() -> Session {
        Session::new(Settings { source: Source::Remote, ..Settings::default() })
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let mut session = Session::default();
        assert_eq!(session.submit(""), Submission::Rejected(Notice::empty_text()));
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_local_submission_appends() {
        let mut session = Session::new(Settings { category: Category::Vowels, ..Settings::default() });
        assert_eq!(session.submit("aeiou"), Submission::Completed(0));

        let result = session.history().get(0).unwrap();
        assert_eq!(result.source(), Source::Local);
        assert_eq!(result.category(), Category::Vowels);
        assert_eq!(result.counts().total(), 5);
    }

    #[test]
    fn test_whitespace_is_analyzed() {
        let mut session = Session::default();
        assert_eq!(session.submit("   "), Submission::Completed(0));
        assert_eq!(session.history().get(0).unwrap().counts().total(), 0);
    }

    #[test]
    fn test_remote_submission_is_pending() {
        let mut session = remote_session();
        let Submission::Pending(request) = session.submit("abc") else {
            panic!("expected pending submission");
        };
        assert_eq!(request.category, Category::Consonants);
        assert_eq!(session.pending(), 1);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_remote_success_appends_online_result() {
        let mut session = remote_session();
        let Submission::Pending(request) = session.submit("abc") else {
            panic!("expected pending submission");
        };
        session.toggle_category();

        let index = session.complete(request, Ok(analyze("abc", Category::Consonants))).unwrap();
        let result = session.history().get(index).unwrap();
        assert_eq!(result.source(), Source::Remote);
        assert_eq!(result.category(), Category::Consonants);
        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn test_remote_failures_map_to_notices() {
        let mut session = remote_session();
        let request = RemoteRequest { text: "x".into(), category: Category::Vowels };

        let unreachable = session
            .complete(request.clone(), Err(RemoteError::Unreachable("refused".into())))
            .unwrap_err();
        assert_eq!(unreachable.message, "The backend seems not to be reachable.");
        assert_eq!(unreachable.level, NoticeLevel::Error);

        let server = session.complete(request, Err(RemoteError::Service { status: 500 })).unwrap_err();
        assert_eq!(server.message, "There seems to be a problem with the server.");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_wrong_category_tally_is_rejected() {
        let mut session = remote_session();
        let request = RemoteRequest { text: "aaa".into(), category: Category::Vowels };

        let notice = session
            .complete(request, Ok(analyze("bbb", Category::Consonants)))
            .unwrap_err();
        assert_eq!(notice.message, "There seems to be a problem with the server.");
        assert!(session.history().is_empty());
        assert_eq!(session.pending(), 0);
    }

    #[test]
    fn test_completion_order_is_history_order() {
        let mut session = remote_session();
        let Submission::Pending(first) = session.submit("first") else { panic!() };
        let Submission::Pending(second) = session.submit("second") else { panic!() };
        assert_eq!(session.pending(), 2);

        session.complete(second, Ok(analyze("second", Category::Consonants))).unwrap();
        session.complete(first, Ok(analyze("first", Category::Consonants))).unwrap();

        let inputs: Vec<&str> = session.history().iter().map(AnalysisResult::input).collect();
        assert_eq!(inputs, vec!["second", "first"]);
    }

    #[test]
    fn test_render_follows_zero_toggle() {
        let mut session = Session::new(Settings { category: Category::Vowels, ..Settings::default() });
        session.submit("e");
        assert!(session.render_history()[0].ends_with("Vowels = E: 1"));

        session.toggle_show_zeros();
        assert!(session.render_history()[0].ends_with("Vowels = A: 0 E: 1 I: 0 O: 0 U: 0"));
    }

    #[test]
    fn test_toggles() {
        let mut session = Session::default();
        session.toggle_source();
        assert_eq!(session.settings().source, Source::Remote);
        session.toggle_category();
        assert_eq!(session.settings().category, Category::Vowels);
    }
}

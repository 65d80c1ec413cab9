//! The chat session record and its transitions.
//!
//! `Session` is the only piece of domain state. It is owned by the UI loop
//! and mutated only through the methods below, so every field combination
//! it can reach is one of the four [`Phase`]s.

use crate::error::ChatError;

/// Where the session is in its request cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing submitted yet, or cleared.
    #[default]
    Idle,
    /// A request is in flight; `loading` is true.
    Submitting,
    /// The last request produced an answer.
    Answered,
    /// The last submit failed validation or the request failed.
    Failed,
}

/// Result of asking the session to start a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The question was accepted; send exactly this text.
    Accepted(String),
    /// The question was blank. The error is already stored on the session.
    Rejected(ChatError),
    /// A request is already in flight.
    Ignored,
}

/// Question, answer, loading flag, error line and theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    question: String,
    answer: String,
    loading: bool,
    error_message: String,
    dark_mode: bool,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Empty when there is no error to show.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the question text. Allowed in every phase, including while a
    /// request is in flight.
    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    /// Start a submit.
    ///
    /// A blank question stores the validation message and moves to
    /// [`Phase::Failed`] without touching `loading`. An accepted question
    /// clears the previous answer and error and sets `loading`.
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }

        if self.question.trim().is_empty() {
            let err = ChatError::Validation;
            self.error_message = err.user_message();
            self.phase = Phase::Failed;
            return SubmitOutcome::Rejected(err);
        }

        self.answer.clear();
        self.error_message.clear();
        self.loading = true;
        self.phase = Phase::Submitting;
        SubmitOutcome::Accepted(self.question.clone())
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Returns false (and changes nothing) when no request is in flight.
    pub fn complete(&mut self, outcome: Result<String, ChatError>) -> bool {
        if !self.loading {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(answer) => {
                self.answer = answer;
                self.error_message.clear();
                self.phase = Phase::Answered;
            }
            Err(err) => {
                self.answer.clear();
                self.error_message = err.user_message();
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Reset question, answer and error.
    ///
    /// A request in flight keeps `loading` and [`Phase::Submitting`]; its
    /// completion still ends the cycle. Otherwise the phase returns to
    /// [`Phase::Idle`].
    pub fn clear(&mut self) {
        self.question.clear();
        self.answer.clear();
        self.error_message.clear();
        if !self.loading {
            self.phase = Phase::Idle;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_REQUEST_MESSAGE;

    fn with_question(question: &str) -> Session {
        let mut session = Session::new();
        session.set_question(question);
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.loading());
        assert!(!session.dark_mode());
        assert!(session.answer().is_empty());
        assert!(session.error_message().is_empty());
    }

    #[test]
    fn test_blank_question_is_rejected() {
        for question in ["", "   ", "\n\t "] {
            let mut session = with_question(question);
            let outcome = session.begin_submit();
            assert_eq!(outcome, SubmitOutcome::Rejected(ChatError::Validation));
            assert_eq!(session.error_message(), "Please enter a question.");
            assert_eq!(session.phase(), Phase::Failed);
            assert!(!session.loading());
        }
    }

    #[test]
    fn test_accepted_question_is_sent_untrimmed() {
        let mut session = with_question("  2+2?\n");
        assert_eq!(
            session.begin_submit(),
            SubmitOutcome::Accepted("  2+2?\n".to_string())
        );
        assert!(session.loading());
        assert_eq!(session.phase(), Phase::Submitting);
    }

    #[test]
    fn test_submit_clears_previous_answer_and_error() {
        let mut session = with_question("first");
        session.begin_submit();
        session.complete(Ok("old answer".to_string()));

        session.set_question("");
        session.begin_submit();
        assert_eq!(session.error_message(), "Please enter a question.");

        session.set_question("second");
        session.begin_submit();
        assert!(session.answer().is_empty());
        assert!(session.error_message().is_empty());
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut session = with_question("q");
        session.begin_submit();
        assert_eq!(session.begin_submit(), SubmitOutcome::Ignored);
        assert_eq!(session.phase(), Phase::Submitting);
    }

    #[test]
    fn test_complete_success() {
        let mut session = with_question("2+2?");
        session.begin_submit();
        assert!(session.complete(Ok("4".to_string())));
        assert_eq!(session.answer(), "4");
        assert!(session.error_message().is_empty());
        assert!(!session.loading());
        assert_eq!(session.phase(), Phase::Answered);
    }

    #[test]
    fn test_complete_failure() {
        let mut session = with_question("2+2?");
        session.begin_submit();
        assert!(session.complete(Err(ChatError::request("quota exceeded"))));
        assert_eq!(session.error_message(), "quota exceeded");
        assert!(session.answer().is_empty());
        assert!(!session.loading());
        assert_eq!(session.phase(), Phase::Failed);

        session.begin_submit();
        session.complete(Err(ChatError::request(GENERIC_REQUEST_MESSAGE)));
        assert_eq!(session.error_message(), GENERIC_REQUEST_MESSAGE);
    }

    #[test]
    fn test_complete_without_request_is_dropped() {
        let mut session = with_question("q");
        assert!(!session.complete(Ok("late".to_string())));
        assert!(session.answer().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_clear_resets_from_every_settled_phase() {
        let mut answered = with_question("q");
        answered.begin_submit();
        answered.complete(Ok("a".to_string()));

        let mut failed = with_question("");
        failed.begin_submit();

        for mut session in [answered, failed, Session::new()] {
            session.clear();
            assert!(session.question().is_empty());
            assert!(session.answer().is_empty());
            assert!(session.error_message().is_empty());
            assert!(!session.loading());
            assert_eq!(session.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_clear_while_submitting_keeps_request_pending() {
        let mut session = with_question("q");
        session.begin_submit();
        session.clear();

        assert!(session.question().is_empty());
        assert!(session.loading());
        assert_eq!(session.phase(), Phase::Submitting);

        session.set_question("second");
        assert_eq!(session.begin_submit(), SubmitOutcome::Ignored);

        assert!(session.complete(Ok("late".to_string())));
        assert_eq!(session.answer(), "late");
        assert!(!session.loading());
        assert_eq!(session.phase(), Phase::Answered);
    }

    #[test]
    fn test_clear_keeps_theme() {
        let mut session = Session::new();
        session.toggle_theme();
        session.clear();
        assert!(session.dark_mode());
    }

    #[test]
    fn test_toggle_theme_touches_nothing_else() {
        let mut session = with_question("q");
        session.begin_submit();
        let before = session.clone();

        session.toggle_theme();
        assert!(session.dark_mode());
        assert_eq!(session.question(), before.question());
        assert_eq!(session.answer(), before.answer());
        assert_eq!(session.error_message(), before.error_message());
        assert_eq!(session.loading(), before.loading());
        assert_eq!(session.phase(), before.phase());

        session.toggle_theme();
        assert_eq!(session, before);
    }
}

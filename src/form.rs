use crate::error::{SubmitError, ValidationError};
use crate::logging::{LogLevel, Logger};
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const SUCCESS_TEXT: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILURE_TEXT: &str = "Sorry, there was an error sending your message. Please try again.";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks fields in display order and stops at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingName);
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if is_blank(&self.subject) {
            return Err(ValidationError::MissingSubject);
        }
        if is_blank(&self.message) {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "form-message success",
            Self::Error => "form-message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Holds the single visible notice. Each `show` hands out a ticket; a
/// dismissal only succeeds with the ticket of the notice still on screen, so
/// a late timer from a superseded notice cannot remove its replacement.
#[derive(Clone, Debug, Default)]
pub struct NoticeBoard {
    current: Option<(u64, Notice)>,
    issued: u64,
}

impl NoticeBoard {
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.issued += 1;
        self.current = Some((self.issued, notice));
        self.issued
    }

    pub fn dismiss(&mut self, ticket: u64) -> bool {
        match &self.current {
            Some((current, _)) if *current == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, notice)| notice)
    }
}

/// What the submission flow drives on the page.
pub trait FormSurface {
    /// Disable the submit button and show the loading label.
    fn begin_submit(&self);
    /// Re-enable the button with its original label.
    fn end_submit(&self);
    fn show_notice(&self, notice: Notice);
    fn reset_fields(&self);
}

#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Invalid(ValidationError),
    Sent,
    Failed(SubmitError),
}

pub async fn process_submission(
    form: &ContactForm,
    surface: &impl FormSurface,
    submitter: &impl Submitter,
    logger: &Logger,
) -> SubmissionOutcome {
    if let Err(error) = form.validate() {
        logger.event(
            LogLevel::Debug,
            "contact_validation_failed",
            json!({ "field": error.field() }),
        );
        surface.show_notice(Notice::error(error.to_string()));
        return SubmissionOutcome::Invalid(error);
    }

    surface.begin_submit();
    let result = submitter.submit(form).await;

    let outcome = match result {
        Ok(()) => {
            surface.show_notice(Notice::success(SUCCESS_TEXT));
            surface.reset_fields();
            logger.event(LogLevel::Info, "contact_submitted", json!({}));
            SubmissionOutcome::Sent
        }
        Err(error) => {
            surface.show_notice(Notice::error(FAILURE_TEXT));
            logger.event(
                LogLevel::Error,
                "contact_submit_failed",
                json!({ "error": error.to_string() }),
            );
            SubmissionOutcome::Failed(error)
        }
    };

    surface.end_submit();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Begin,
        End,
        Notice(Notice),
        Reset,
    }

    #[derive(Default)]
    struct FakeSurface {
        calls: RefCell<Vec<Call>>,
    }

    impl FakeSurface {
        fn notices(&self) -> Vec<Notice> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Notice(notice) => Some(notice.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl FormSurface for FakeSurface {
        fn begin_submit(&self) {
            self.calls.borrow_mut().push(Call::Begin);
        }

        fn end_submit(&self) {
            self.calls.borrow_mut().push(Call::End);
        }

        fn show_notice(&self, notice: Notice) {
            self.calls.borrow_mut().push(Call::Notice(notice));
        }

        fn reset_fields(&self) {
            self.calls.borrow_mut().push(Call::Reset);
        }
    }

    struct FakeSubmitter {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FakeSubmitter {
        fn succeeding() -> Self {
            Self { calls: Cell::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { calls: Cell::new(0), fail: true }
        }
    }

    impl Submitter for FakeSubmitter {
        async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            tokio::task::yield_now().await;
            if self.fail {
                Err(SubmitError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk.".to_string(),
        }
    }

    fn quiet_logger() -> Logger {
        Logger::new(LogLevel::Error)
    }

    #[tokio::test]
    async fn each_blank_field_yields_one_error_and_no_submit() {
        let cases: [(fn(&mut ContactForm), ValidationError); 4] = [
            (|form: &mut ContactForm| form.name.clear(), ValidationError::MissingName),
            (|form: &mut ContactForm| form.email = "   ".to_string(), ValidationError::MissingEmail),
            (|form: &mut ContactForm| form.subject.clear(), ValidationError::MissingSubject),
            (|form: &mut ContactForm| form.message = "\n".to_string(), ValidationError::MissingMessage),
        ];

        for (blank, expected) in cases {
            let mut form = valid_form();
            blank(&mut form);
            let surface = FakeSurface::default();
            let submitter = FakeSubmitter::succeeding();

            let outcome = process_submission(&form, &surface, &submitter, &quiet_logger()).await;

            assert_eq!(outcome, SubmissionOutcome::Invalid(expected));
            assert_eq!(surface.notices(), vec![Notice::error(expected.to_string())]);
            assert_eq!(surface.calls.borrow().len(), 1, "only the error notice is shown");
            assert_eq!(submitter.calls.get(), 0);
        }
    }

    #[test]
    fn validation_stops_at_first_failure() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        let form = ContactForm {
            name: "Ada".to_string(),
            email: "nope".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_pattern_requires_at_sign_and_domain_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" first.last@example.org "));
        assert!(!is_valid_email("ab.co"));
        assert!(!is_valid_email("a@bco"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn messages_name_the_failing_field() {
        assert_eq!(ValidationError::MissingSubject.to_string(), "Please enter a subject");
        assert_eq!(ValidationError::InvalidEmail.field(), "email");
    }

    #[tokio::test]
    async fn valid_form_shows_success_and_clears_fields() {
        let surface = FakeSurface::default();
        let submitter = FakeSubmitter::succeeding();

        let outcome = process_submission(&valid_form(), &surface, &submitter, &quiet_logger()).await;

        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(
            *surface.calls.borrow(),
            vec![
                Call::Begin,
                Call::Notice(Notice::success(SUCCESS_TEXT)),
                Call::Reset,
                Call::End,
            ]
        );
    }

    #[tokio::test]
    async fn failed_submit_shows_generic_error_and_restores_button() {
        let surface = FakeSurface::default();
        let submitter = FakeSubmitter::failing();

        let outcome = process_submission(&valid_form(), &surface, &submitter, &quiet_logger()).await;

        assert_eq!(outcome, SubmissionOutcome::Failed(SubmitError::Unavailable));
        assert_eq!(
            *surface.calls.borrow(),
            vec![Call::Begin, Call::Notice(Notice::error(FAILURE_TEXT)), Call::End]
        );
    }

    #[test]
    fn stale_ticket_cannot_dismiss_newer_notice() {
        let mut board = NoticeBoard::default();

        let first = board.show(Notice::error("first"));
        let second = board.show(Notice::success("second"));

        assert!(!board.dismiss(first));
        assert_eq!(board.current().map(|notice| notice.text.as_str()), Some("second"));
        assert!(board.dismiss(second));
        assert!(board.current().is_none());
        assert!(!board.dismiss(second), "dismissing twice is a no-op");
    }
}

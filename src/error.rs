/// A contact form field failed its check. `Display` is the text shown to the
/// visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a subject")]
    MissingSubject,
    #[error("Please enter your message")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingSubject => "subject",
            Self::MissingMessage => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable")]
    Unavailable,
}

use std::fmt;

/// Statuses after which the session is treated as expired
pub fn should_reauth(status: Option<u16>) -> bool {
    matches!(status, Some(400 | 401 | 403))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    /// The word is present and no translation was requested
    Word,
    /// The word is present with the requested translation
    Translation,
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKind::Word => write!(f, "word already exists"),
            DuplicateKind::Translation => write!(f, "word with this translation already exists"),
        }
    }
}

/// Failure talking to the remote dictionary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn should_reauth(&self) -> bool {
        should_reauth(self.status())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeoError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{word}: {kind}")]
    Duplicate { word: String, kind: DuplicateKind },

    #[error("{0}: no translation candidates returned")]
    NoTranslation(String),

    #[error("Session store error: {0}")]
    Session(#[from] std::io::Error),
}

impl LeoError {
    /// "Already exists" outcomes, which callers may treat as idempotent success
    pub fn is_duplicate(&self) -> bool {
        matches!(self, LeoError::Duplicate { .. })
    }
}

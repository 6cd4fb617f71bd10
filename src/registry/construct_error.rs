use core::fmt::{self, Display};

use crate::types::ErrorFamily;

/// Why a registered type could not be rebuilt from a remote message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError {
    /// The type resolved, but has no message constructor.
    NoConstructor,
    /// The constructor refused the message.
    Rejected(String),
    /// The entry's family is not the one the caller required.
    FamilyMismatch { expected: ErrorFamily, found: ErrorFamily },
}

impl ConstructError {
    /// Shorthand for [`ConstructError::Rejected`].
    #[inline]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}

impl Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConstructor => f.write_str("no message constructor registered"),
            Self::Rejected(reason) => write!(f, "constructor rejected message: {reason}"),
            Self::FamilyMismatch { expected, found } => {
                write!(f, "expected {expected} family, found {found}")
            },
        }
    }
}

impl core::error::Error for ConstructError {}

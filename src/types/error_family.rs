//! Error families recognized by the translator.
//!
//! Every registered remote type name belongs to exactly one [`ErrorFamily`]. Only the
//! [`Domain`](ErrorFamily::Domain), [`Io`](ErrorFamily::Io) and
//! [`Runtime`](ErrorFamily::Runtime) families are ever reconstructed locally; names in the
//! [`Unrecognized`](ErrorFamily::Unrecognized) family resolve, but are passed through as the
//! raw [`RemoteError`](crate::RemoteError).
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category a remote error type belongs to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Application-level failures (business or protocol conditions).
    Domain,
    /// I/O failures.
    Io,
    /// Local runtime faults such as invalid arguments or broken invariants.
    Runtime,
    /// Known to the registry, but not something the translator should impersonate.
    Unrecognized,
}

impl ErrorFamily {
    /// Returns `true` for the families the translator rebuilds locally.
    #[inline]
    pub const fn is_reconstructible(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Short lowercase label, used in log fields.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Io => "io",
            Self::Runtime => "runtime",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

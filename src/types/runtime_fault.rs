use core::error::Error;
use core::fmt::{self, Display};

use super::canonical_error::BoxError;

/// A local runtime fault: an invariant broke or an argument was invalid.
///
/// Transports report client-side faults with this type, and remote faults of the runtime
/// family are rebuilt as it when no more specific type is registered.
#[derive(Debug)]
pub struct RuntimeFault {
    pub(crate) message: String,
    pub(crate) cause: Option<BoxError>,
}

impl RuntimeFault {
    /// Name under which the runtime fault is registered.
    pub const TYPE_NAME: &'static str = "remote_rail::RuntimeFault";

    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    #[inline]
    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { message: message.into(), cause: Some(Box::new(cause)) }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for RuntimeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for RuntimeFault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

use std::borrow::Cow;

use super::ConstructError;
use crate::traits::RemoteErrorType;
use crate::types::{BoxError, ErrorFamily};

/// Builds a boxed error instance from a remote message.
pub type Constructor = fn(&str) -> Result<BoxError, ConstructError>;

/// A resolved remote type: its name, family and (optional) message constructor.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub(crate) name: Cow<'static, str>,
    pub(crate) family: ErrorFamily,
    pub(crate) constructor: Option<Constructor>,
}

impl TypeEntry {
    /// Entry for a [`RemoteErrorType`].
    pub fn of<T: RemoteErrorType>() -> Self {
        Self {
            name: Cow::Borrowed(T::TYPE_NAME),
            family: T::FAMILY,
            constructor: Some(construct_boxed::<T> as Constructor),
        }
    }

    /// Entry with an explicit family and constructor.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        family: ErrorFamily,
        constructor: Option<Constructor>,
    ) -> Self {
        Self { name: name.into(), family, constructor }
    }

    /// Entry for a name in the [`ErrorFamily::Unrecognized`] family, with no constructor.
    #[inline]
    pub fn foreign(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, ErrorFamily::Unrecognized, None)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn family(&self) -> ErrorFamily {
        self.family
    }

    /// Returns `true` if the entry can build instances.
    #[inline]
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Builds an instance from `message`.
    pub fn construct(&self, message: &str) -> Result<BoxError, ConstructError> {
        let constructor = self.constructor.ok_or(ConstructError::NoConstructor)?;
        constructor(message)
    }
}

fn construct_boxed<T: RemoteErrorType>(message: &str) -> Result<BoxError, ConstructError> {
    let error = T::from_message(message)?;
    Ok(Box::new(error))
}

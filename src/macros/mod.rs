//! Macros for declaring reconstructible error types.
//!
//! - [`macro@crate::remote_error_type`] - Declares message-carrying error structs and registers
//!   them as [`RemoteErrorType`](crate::RemoteErrorType) under a remote name and family.
//!
//! # Examples
//!
//! ```
//! use remote_rail::{remote_error_type, RemoteErrorType, TypeRegistry};
//!
//! remote_error_type! {
//!     /// The application id is not known to the scheduler.
//!     pub struct ApplicationNotFound: Domain = "scheduler.ApplicationNotFoundException";
//!
//!     pub struct SpillFailed: Io = "scheduler.SpillFailedException";
//! }
//!
//! let registry = TypeRegistry::with_defaults()
//!     .register::<ApplicationNotFound>()
//!     .register::<SpillFailed>();
//!
//! assert!(registry.contains(ApplicationNotFound::TYPE_NAME));
//! assert_eq!(ApplicationNotFound::new("app_42").message(), "app_42");
//! ```

/// Declares one or more message-only error structs that the translator can rebuild.
///
/// Each declaration takes the form
/// `[attrs] vis struct Name: Family = "remote.type.Name";`
/// where `Family` is one of `Domain`, `Io` or `Runtime`.
///
/// The generated struct:
/// - derives `Debug`, `Clone`, `PartialEq` and `Eq`
/// - has `new(message)` and `message()` methods
/// - displays as its message
/// - implements [`std::error::Error`] and [`RemoteErrorType`](crate::RemoteErrorType)
///
/// # Examples
///
/// ```
/// use remote_rail::{remote_error_type, ErrorFamily, RemoteErrorType};
///
/// remote_error_type! {
///     pub struct InvalidResourceRequest: Runtime = "scheduler.InvalidResourceRequestException";
/// }
///
/// assert_eq!(InvalidResourceRequest::FAMILY, ErrorFamily::Runtime);
/// let err = InvalidResourceRequest::from_message("negative memory").unwrap();
/// assert_eq!(err.to_string(), "negative memory");
/// ```
#[macro_export]
macro_rules! remote_error_type {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $family:ident = $remote:literal ;
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            $vis struct $name {
                message: ::std::string::String,
            }

            impl $name {
                #[allow(dead_code)]
                pub fn new(message: impl ::core::convert::Into<::std::string::String>) -> Self {
                    Self { message: message.into() }
                }

                #[allow(dead_code)]
                pub fn message(&self) -> &str {
                    &self.message
                }
            }

            impl ::core::fmt::Display for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(&self.message)
                }
            }

            impl ::core::error::Error for $name {}

            impl $crate::RemoteErrorType for $name {
                const TYPE_NAME: &'static str = $remote;
                const FAMILY: $crate::ErrorFamily = $crate::ErrorFamily::$family;

                fn from_message(
                    message: &str,
                ) -> ::core::result::Result<Self, $crate::ConstructError> {
                    ::core::result::Result::Ok(Self::new(message))
                }
            }
        )+
    };
}

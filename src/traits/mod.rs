//! Core traits for remote error translation.
//!
//! - [`RemoteErrorType`]: marks a local error type as reconstructible from a remote name
//! - [`ServiceResultExt`]: translates the error side of a transport `Result`

pub mod remote_error_type;
pub mod service_result_ext;

pub use remote_error_type::RemoteErrorType;
pub use service_result_ext::ServiceResultExt;

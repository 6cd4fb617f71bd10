//! Async extensions for remote-rail.
//!
//! Translates the error of futures that resolve to `Result<T, ServiceCallError>`, so an
//! async RPC client can `.await?` straight into [`Unwrapped`](crate::Unwrapped).
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! remote-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use remote_rail::prelude_async::*;
//!
//! async fn fetch_report(client: &Client, id: u64) -> Result<Report, Unwrapped> {
//!     client.call("getReport", id).unwrap_remote().await
//! }
//! ```

mod future_ext;
mod unwrap_future;

pub use future_ext::FutureUnwrapExt;
pub use unwrap_future::UnwrapFuture;

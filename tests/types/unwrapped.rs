use std::error::Error;
use std::io;

use remote_rail::{
    CanonicalError, ErrorFamily, RemoteError, RemoteTranslator, RuntimeFault, ServiceCallError,
    Unwrapped,
};

fn reconstructed(type_name: &str, message: &str) -> Unwrapped {
    RemoteTranslator::new()
        .translate(ServiceCallError::with_cause("failed", RemoteError::new(type_name, message)))
}

#[test]
fn family_per_variant() {
    assert_eq!(Unwrapped::Io(io::Error::other("x")).family(), ErrorFamily::Io);
    assert_eq!(Unwrapped::Runtime(RuntimeFault::new("x")).family(), ErrorFamily::Runtime);
    assert_eq!(Unwrapped::Remote(RemoteError::new("a", "b")).family(), ErrorFamily::Unrecognized);
    assert_eq!(reconstructed("pkg.Any", "m").family(), ErrorFamily::Domain);
    assert_eq!(reconstructed("std::io::Error", "m").family(), ErrorFamily::Io);
}

#[test]
fn message_per_variant() {
    assert_eq!(Unwrapped::Io(io::Error::other("disk")).message(), "disk");
    assert_eq!(Unwrapped::Runtime(RuntimeFault::new("oops")).message(), "oops");
    assert_eq!(Unwrapped::Remote(RemoteError::new("a", "b")).message(), "b");
    assert_eq!(reconstructed("pkg.Any", "kept").message(), "kept");
}

#[test]
fn remote_is_available_for_reconstructed_and_raw() {
    assert_eq!(reconstructed("pkg.Any", "m").remote().unwrap().type_name(), "pkg.Any");
    assert!(Unwrapped::Remote(RemoteError::new("a", "b")).remote().is_some());
    assert!(Unwrapped::Io(io::Error::other("x")).remote().is_none());
}

#[test]
fn display_and_source_are_transparent() {
    let err = reconstructed("pkg.Any", "lost lease");

    assert_eq!(err.to_string(), "lost lease");
    assert_eq!(err.source().unwrap().to_string(), "pkg.Any: lost lease");

    let raw = Unwrapped::Remote(RemoteError::new("pkg.Raw", "raw"));
    assert_eq!(raw.to_string(), "pkg.Raw: raw");
    assert!(raw.source().is_none());
}

#[test]
fn downcast_only_applies_to_reconstructed() {
    assert!(reconstructed("pkg.Any", "m").downcast_ref::<CanonicalError>().is_some());
    assert!(Unwrapped::Io(io::Error::other("x")).downcast_ref::<io::Error>().is_none());
}

#[test]
fn service_call_error_only_for_transport() {
    let transport = RemoteTranslator::new().translate(ServiceCallError::new("refused"));
    assert!(transport.service_call_error().is_some());
    assert!(Unwrapped::Io(io::Error::other("x")).service_call_error().is_none());
}

#[test]
fn error_chain_walks_every_source() {
    let runtime = Unwrapped::Runtime(RuntimeFault::with_cause(
        "decode failed",
        CanonicalError::from_cause(io::Error::other("truncated frame")),
    ));

    assert_eq!(runtime.error_chain(), "decode failed -> truncated frame -> truncated frame");
}

#[test]
fn reconstructed_downcast_failure_returns_self() {
    let Unwrapped::Reconstructed(rebuilt) = reconstructed("pkg.Any", "m") else {
        panic!("expected reconstruction");
    };

    let rebuilt = rebuilt.downcast::<RuntimeFault>().unwrap_err();
    assert_eq!(rebuilt.message(), "m");
    assert_eq!(rebuilt.get_ref().to_string(), "m");
    assert_eq!(rebuilt.into_remote(), RemoteError::new("pkg.Any", "m"));
}

use std::error::Error;
use std::io;

use remote_rail::{
    BoxError, CallCause, CanonicalError, ErrorFamily, RemoteError, RuntimeFault, ServiceCallError,
};

mod unwrapped;

#[test]
fn remote_error_exposes_name_and_message() {
    let re = RemoteError::new("pkg.Conflict", "version 3 != 4");

    assert_eq!(re.type_name(), "pkg.Conflict");
    assert_eq!(re.message(), "version 3 != 4");
    assert_eq!(re.to_string(), "pkg.Conflict: version 3 != 4");
    assert!(re.source().is_none());

    let (type_name, message) = re.into_parts();
    assert_eq!(type_name, "pkg.Conflict");
    assert_eq!(message, "version 3 != 4");
}

#[test]
fn remote_error_without_message_displays_type_name() {
    assert_eq!(RemoteError::new("pkg.Empty", "").to_string(), "pkg.Empty");
}

#[test]
fn canonical_error_from_message() {
    let err = CanonicalError::new("queue draining");

    assert_eq!(err.message(), "queue draining");
    assert_eq!(err.to_string(), "queue draining");
    assert!(err.cause().is_none());
}

#[test]
fn canonical_error_from_cause_takes_cause_text() {
    let err = CanonicalError::from_cause(RemoteError::new("pkg.Inner", "lower layer"));

    assert_eq!(err.message(), "pkg.Inner: lower layer");
    let cause = err.source().unwrap().downcast_ref::<RemoteError>().unwrap();
    assert_eq!(cause.type_name(), "pkg.Inner");

    let renamed = err.with_message("outer");
    assert_eq!(renamed.to_string(), "outer");
    assert!(renamed.cause().is_some());
}

#[test]
fn runtime_fault_chains_optional_cause() {
    let plain = RuntimeFault::new("bad index");
    assert!(plain.source().is_none());

    let chained = RuntimeFault::with_cause("decode failed", io::Error::other("truncated"));
    assert_eq!(chained.to_string(), "decode failed");
    assert_eq!(chained.source().unwrap().to_string(), "truncated");
}

#[test]
fn service_call_error_source_is_its_cause() {
    let se = ServiceCallError::with_cause("call failed", RemoteError::new("pkg.X", "y"));

    assert_eq!(se.to_string(), "call failed");
    assert_eq!(se.source().unwrap().to_string(), "pkg.X: y");
    assert!(matches!(se.cause(), Some(CallCause::Remote(_))));

    let (message, cause) = se.into_parts();
    assert_eq!(message, "call failed");
    assert!(cause.is_some());

    assert!(ServiceCallError::new("refused").source().is_none());
}

#[test]
fn call_cause_conversions() {
    assert!(matches!(CallCause::from(io::Error::other("x")), CallCause::Io(_)));
    assert!(matches!(CallCause::from(RuntimeFault::new("x")), CallCause::Runtime(_)));
    assert!(matches!(CallCause::from(RemoteError::new("a", "b")), CallCause::Remote(_)));

    let other = CallCause::other(CanonicalError::new("odd"));
    assert_eq!(other.to_string(), "odd");
    assert!(other.as_error().downcast_ref::<CanonicalError>().is_some());
}

#[test]
fn other_classifies_known_error_types() {
    assert!(matches!(CallCause::other(io::Error::other("disk")), CallCause::Io(_)));
    assert!(matches!(CallCause::other(RuntimeFault::new("r")), CallCause::Runtime(_)));

    let CallCause::Remote(re) = CallCause::other(RemoteError::new("pkg.Gone", "m")) else {
        panic!("expected the remote record");
    };
    assert_eq!(re, RemoteError::new("pkg.Gone", "m"));

    let boxed: BoxError = Box::new(CanonicalError::new("odd"));
    assert!(matches!(CallCause::from_boxed(boxed), CallCause::Other(_)));
}

#[test]
fn error_family_classification() {
    assert!(ErrorFamily::Domain.is_reconstructible());
    assert!(ErrorFamily::Io.is_reconstructible());
    assert!(ErrorFamily::Runtime.is_reconstructible());
    assert!(!ErrorFamily::Unrecognized.is_reconstructible());

    assert_eq!(ErrorFamily::Domain.to_string(), "domain");
    assert_eq!(ErrorFamily::Unrecognized.as_str(), "unrecognized");
}

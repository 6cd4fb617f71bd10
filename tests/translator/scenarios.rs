//! End-to-end translation of the failure shapes an RPC client sees.

use std::error::Error;
use std::io;

use remote_rail::{
    CanonicalError, RemoteError, RemoteTranslator, ServiceCallError, ServiceResultExt, Unwrapped,
};

use super::{translator, KnownDomainError};

#[test]
fn transport_failure_before_any_remote_error() {
    let err = translator().translate(ServiceCallError::new("connection reset by peer"));

    assert!(err.is_io());
    assert_eq!(err.to_string(), "connection reset by peer");
    assert_eq!(err.service_call_error().unwrap().message(), "connection reset by peer");
}

#[test]
fn registered_domain_error_with_message_constructor() {
    let re = RemoteError::new("pkg.KnownDomainError", "bad state");
    let err = translator().translate(ServiceCallError::with_cause("call failed", re.clone()));

    assert_eq!(err.downcast_ref::<KnownDomainError>(), Some(&KnownDomainError::new("bad state")));
    assert_eq!(err.remote(), Some(&re));
    assert_eq!(err.error_chain(), "bad state -> pkg.KnownDomainError: bad state");
}

#[test]
fn unresolvable_type_from_a_newer_server() {
    let err = translator().translate(ServiceCallError::with_cause(
        "call failed",
        RemoteError::new("pkg.UnknownFutureType", "m"),
    ));

    assert!(err.downcast_ref::<CanonicalError>().is_some());
    assert_eq!(err.message(), "m");
}

#[test]
fn local_io_error_reported_by_the_client_stack() {
    let err = translator()
        .translate(ServiceCallError::with_cause("send failed", io::Error::from(io::ErrorKind::BrokenPipe)));

    let Unwrapped::Io(e) = err else {
        panic!("expected the io error");
    };
    assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn result_extension_translates_only_errors() {
    let ok: Result<u32, ServiceCallError> = Ok(7);
    assert_eq!(ok.unwrap_remote_with(&translator()).unwrap(), 7);

    let failed: Result<u32, ServiceCallError> =
        Err(ServiceCallError::with_cause("x", RemoteError::new("pkg.KnownDomainError", "y")));
    let err = failed.unwrap_remote_with(&translator()).unwrap_err();
    assert!(err.downcast_ref::<KnownDomainError>().is_some());

    let failed: Result<u32, ServiceCallError> = Err(ServiceCallError::new("refused"));
    assert!(failed.unwrap_remote().unwrap_err().is_io());
}

#[test]
fn question_mark_converts_into_io_error() {
    fn fetch(translator: &RemoteTranslator) -> io::Result<()> {
        let call: Result<(), ServiceCallError> =
            Err(ServiceCallError::with_cause("x", RemoteError::new("pkg.Gone", "job finished")));
        call.unwrap_remote_with(translator)?;
        Ok(())
    }

    let err = fetch(&translator()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
    assert_eq!(err.to_string(), "job finished");

    let inner = err.into_inner().unwrap();
    let unwrapped = inner.downcast_ref::<Unwrapped>().unwrap();
    assert_eq!(unwrapped.remote().unwrap().type_name(), "pkg.Gone");
}

#[test]
fn transport_error_converts_into_itself() {
    let err = translator().translate(ServiceCallError::new("refused"));
    let io_err: io::Error = err.into();

    assert_eq!(io_err.to_string(), "refused");
    assert!(io_err.get_ref().unwrap().downcast_ref::<ServiceCallError>().is_some());
    assert!(io_err.source().is_none());
}

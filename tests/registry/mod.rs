use std::io;

use remote_rail::{
    remote_error_type, CanonicalError, ConstructError, ErrorFamily, RemoteErrorType, RuntimeFault,
    TypeEntry, TypeRegistry,
};

remote_error_type! {
    pub struct QuotaExceeded: Domain = "scheduler.QuotaExceeded";
}

#[test]
fn new_registry_knows_only_the_canonical_fallback() {
    let registry = TypeRegistry::new();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(CanonicalError::TYPE_NAME));
    assert_eq!(registry.fallback().name(), CanonicalError::TYPE_NAME);
    assert_eq!(registry.fallback().family(), ErrorFamily::Domain);
    assert!(registry.resolve(RuntimeFault::TYPE_NAME).is_none());
}

#[test]
fn defaults_cover_builtin_families() {
    let registry = TypeRegistry::default();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.resolve(RuntimeFault::TYPE_NAME).unwrap().family(), ErrorFamily::Runtime);
    assert_eq!(registry.resolve(<io::Error as RemoteErrorType>::TYPE_NAME).unwrap().family(), ErrorFamily::Io);

    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["remote_rail::CanonicalError", "remote_rail::RuntimeFault", "std::io::Error"]);
}

#[test]
fn register_adds_a_constructible_entry() {
    let registry = TypeRegistry::with_defaults().register::<QuotaExceeded>();
    let entry = registry.resolve("scheduler.QuotaExceeded").unwrap();

    assert!(entry.has_constructor());
    let built = entry.construct("over by 3 GiB").unwrap();
    assert_eq!(built.downcast_ref::<QuotaExceeded>().unwrap().message(), "over by 3 GiB");
}

#[test]
fn foreign_entries_resolve_without_constructor() {
    let registry = TypeRegistry::new().register_foreign(String::from("java.lang.InterruptedException"));
    let entry = registry.resolve("java.lang.InterruptedException").unwrap();

    assert_eq!(entry.family(), ErrorFamily::Unrecognized);
    assert!(!entry.has_constructor());
    assert_eq!(entry.construct("x").unwrap_err(), ConstructError::NoConstructor);
}

#[test]
fn later_registration_replaces_earlier() {
    let registry = TypeRegistry::new()
        .register_entry(TypeEntry::new("pkg.Thing", ErrorFamily::Domain, None))
        .register_foreign("pkg.Thing");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resolve("pkg.Thing").unwrap().family(), ErrorFamily::Unrecognized);
}

#[test]
fn with_fallback_replaces_and_registers() {
    let registry = TypeRegistry::new().with_fallback::<QuotaExceeded>();

    assert_eq!(registry.fallback().name(), QuotaExceeded::TYPE_NAME);
    assert!(registry.contains(QuotaExceeded::TYPE_NAME));
    assert!(registry.contains(CanonicalError::TYPE_NAME));
}

#[test]
fn custom_constructor_entry() {
    fn always_fails(_: &str) -> Result<remote_rail::BoxError, ConstructError> {
        Err(ConstructError::rejected("not today"))
    }

    let entry = TypeEntry::new("pkg.Moody", ErrorFamily::Io, Some(always_fails));
    assert_eq!(entry.construct("m").unwrap_err(), ConstructError::Rejected("not today".into()));
}

#[test]
fn construct_error_messages() {
    assert_eq!(ConstructError::NoConstructor.to_string(), "no message constructor registered");
    assert_eq!(ConstructError::rejected("bad").to_string(), "constructor rejected message: bad");
    assert_eq!(
        ConstructError::FamilyMismatch { expected: ErrorFamily::Domain, found: ErrorFamily::Io }
            .to_string(),
        "expected domain family, found io"
    );
}

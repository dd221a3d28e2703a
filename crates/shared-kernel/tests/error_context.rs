// crates/shared-kernel/tests/error_context.rs
use std::{error::Error, io, path::PathBuf};

use file_lister_shared_kernel::{ApplicationError, ErrorContext, FileListerError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(FileListerError::from)
        .context("reading directory")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading directory"));
    assert!(display.contains("Output error:"));
}

#[test]
fn nested_context_keeps_the_source_chain() {
    let missing = ApplicationError::DirectoryNotFound {
        path: PathBuf::from("/nowhere"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    let err = Err::<(), _>(missing)
        .context("resolving root")
        .with_context(|| "starting listing".to_string())
        .unwrap_err();

    assert!(err.to_string().starts_with("starting listing: resolving root"));
    let inner = err.source().expect("inner context");
    assert!(inner.to_string().starts_with("resolving root"));
    let application = inner.source().expect("application error");
    assert!(application.to_string().contains("Directory doesn't exist"));
}

// File: src/error.rs
// Purpose: System errors, kept apart from field validation failures

use entry_form_core::CharsetError;

/// Failures that stop validation from producing an answer.
///
/// A rejected field is not an error; it is reported in
/// [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reference store query failed: {0}")]
    Store(#[from] sqlx::Error),

    #[error("no reference store is available for the {0} check")]
    StoreUnavailable(&'static str),

    #[error(transparent)]
    Charset(#[from] CharsetError),
}

pub type Result<T> = std::result::Result<T, Error>;

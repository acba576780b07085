//! Entry form validation
//!
//! Runs one short-circuiting rule chain per field group over a submitted
//! form and reports the first failure of each group. Two groups consult a
//! [`ReferenceStore`]: address consistency against the postal master and
//! duplicate e-mail against registered users. Store failures come back as
//! [`Error`], never as field errors.
//!
//! ```no_run
//! use std::sync::Arc;
//! use entry_form::{Documents, FieldValidator, FormInput, LegacyCharset, ValidatorConfig, Variant};
//!
//! # async fn run() -> entry_form::Result<()> {
//! let validator = FieldValidator::new(
//!     ValidatorConfig::for_variant(Variant::EditWithFiles),
//!     Arc::new(LegacyCharset::bundled().clone()),
//! );
//!
//! let input = FormInput::new().with("name", "山田太郎");
//! let result = validator.validate(&input, &Documents::none()).await?;
//! assert!(!result.ok);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod store;
pub mod validator;
pub mod variant;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CharsetConfig, Config, DatabaseConfig, ValidatorSection};
pub use error::{Error, Result};
pub use input::{Documents, FileDescriptor, FormInput, UploadError};
pub use result::{FieldGroup, ValidationResult};
pub use store::{AddressMasterRecord, MemoryStore, NoStore, ReferenceStore, SqlStore};
pub use validator::FieldValidator;
pub use variant::{BirthDateRule, ValidatorConfig, Variant};

pub use entry_form_core::{messages, LegacyCharset};

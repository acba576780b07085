//! Entry form validation core
//!
//! Rule vocabulary shared by the authoritative server validator and the
//! browser mirror: codepoint classes, the legacy ideograph set, format
//! checks, per-group rule chains and the message catalogue.

pub mod charclass;
pub mod fields;
pub mod legacy;
pub mod live;
pub mod messages;
pub mod rules;

pub use charclass::{char_len, conforms, has_leading_space, is_blank, CharClass};
pub use legacy::{CharsetError, LegacyCharset};
pub use rules::*;

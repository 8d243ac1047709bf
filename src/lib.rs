//! Typed, validated configuration options for curl-style transfer handles.
//!
//! This crate sits between a caller's request intent and a transfer
//! library's raw numeric/flag option space. Callers refer to options by
//! human-friendly names (`"follow-location"`, `"max-time"`, ...) or numeric
//! ids; the crate resolves them to canonical identifiers, validates the
//! supplied value against that option's rules, and hands back an immutable
//! `(id, value)` pair ready to be applied to a live handle.
//!
//! ```
//! use transfer_options::{build, OptionSet, TransferOpt, Value};
//!
//! // One option at a time...
//! let port = build("port", 8080)?;
//! assert_eq!(port.id(), TransferOpt::Port);
//!
//! // ...or a whole working set.
//! let mut options = OptionSet::new();
//! options.set("follow-location", true)?;
//! options.set("cookie", vec![("session", "abc123")])?;
//! assert_eq!(
//!     options.get(TransferOpt::Cookie),
//!     Some(&Value::Str("session=abc123".into()))
//! );
//! # Ok::<(), transfer_options::OptionError>(())
//! ```
//!
//! Validation failures all surface as [`OptionError`] with a descriptive
//! message; nothing partially-validated ever escapes. The crate performs no
//! I/O and holds no mutable global state.

pub mod error;
pub mod options;
pub mod transport;

pub use error::{OptionError, Result};
pub use options::{build, resolve, OptionKind, OptionRef, OptionSet, TransferOption, Value};
pub use transport::TransferOpt;

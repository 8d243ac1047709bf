//! Option resolution, classification, and validation
//!
//! The pipeline: an alias or numeric id resolves to a canonical
//! [`TransferOpt`](crate::transport::TransferOpt), the registry classifies it
//! into one of six value kinds with constraints, and the factory validates
//! the raw value through that kind, producing an immutable
//! [`TransferOption`].

pub mod factory;
pub mod registry;
pub mod set;
pub mod types;

pub use factory::build;
pub use registry::{OptionRef, resolve};
pub use set::OptionSet;
pub use types::{Normalizer, OptionKind, TransferOption, Value};

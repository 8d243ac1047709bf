//! In-memory collection of validated options

use crate::error::Result;
use crate::options::factory;
use crate::options::registry::OptionRef;
use crate::options::types::{TransferOption, Value};
use crate::transport::TransferOpt;

/// An insertion-ordered set of validated options, ready to be applied to a
/// transfer handle.
///
/// At most one entry per canonical identifier; setting an option again
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    options: Vec<TransferOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an option through the factory and store it, replacing any
    /// previous value for the same identifier.
    pub fn set(&mut self, option: impl Into<OptionRef>, value: impl Into<Value>) -> Result<()> {
        let option = factory::build(option, value)?;
        log::debug!("set option {option}");
        self.insert(option);
        Ok(())
    }

    /// Store an already-validated option, replacing any previous entry with
    /// the same identifier. The original position is retained on replace.
    pub fn insert(&mut self, option: TransferOption) {
        match self.options.iter_mut().find(|o| o.id() == option.id()) {
            Some(slot) => *slot = option,
            None => self.options.push(option),
        }
    }

    pub fn contains(&self, opt: TransferOpt) -> bool {
        self.options.iter().any(|o| o.id() == opt)
    }

    /// The validated value for an identifier, if set.
    pub fn get(&self, opt: TransferOpt) -> Option<&Value> {
        self.options
            .iter()
            .find(|o| o.id() == opt)
            .map(|o| o.value())
    }

    pub fn remove(&mut self, opt: TransferOpt) -> Option<TransferOption> {
        let index = self.options.iter().position(|o| o.id() == opt)?;
        Some(self.options.remove(index))
    }

    /// Options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a TransferOption;
    type IntoIter = std::slice::Iter<'a, TransferOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

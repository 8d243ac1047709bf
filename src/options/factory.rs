//! Option factory: resolve, classify, validate, wrap

use crate::error::{OptionError, Result};
use crate::options::registry::{self, OptionRef};
use crate::options::types::{TransferOption, Value};

/// Build a validated option from a name (or numeric id) and a raw value.
///
/// Resolution, classification, and validation all happen here; on any
/// failure the error propagates and no instance is returned.
///
/// ```
/// use transfer_options::{build, TransferOpt, Value};
///
/// let option = build("follow-location", true).unwrap();
/// assert_eq!(option.id(), TransferOpt::FollowLocation);
/// assert_eq!(option.value(), &Value::Bool(true));
/// ```
pub fn build(option: impl Into<OptionRef>, value: impl Into<Value>) -> Result<TransferOption> {
    let opt = registry::resolve(option)?;
    let kind = registry::rule_for(opt).ok_or_else(|| {
        OptionError::new(format!("\"{opt}\" is not a supported transfer option"))
    })?;

    let value = kind.validate(value.into())?;
    log::debug!("built option {opt} = {value:?}");

    Ok(TransferOption::new(opt, value))
}

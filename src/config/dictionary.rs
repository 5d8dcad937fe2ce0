//! Dictionary configuration module.

use super::ConfigResult;
use super::Validate;
use crate::data_structures::Collation;
use serde::{Deserialize, Serialize};

/// Dictionary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Ordering used for the sorted listing
    pub collation: Collation,
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Every collation variant is usable as is.
        Ok(())
    }
}

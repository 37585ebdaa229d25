//! Export options supplied by the host.

use crate::error::{Result, XliffError};
use serde::Deserialize;

/// Lifetime of the unit id registry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistryScope {
    /// Registry cleared at the start of every export
    #[default]
    Export,
    /// Registry kept across all exports of one session
    Session,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExportOptions {
    pub registry_scope: RegistryScope,
    /// Emit a warning event for each duplicate block id
    pub log_duplicates: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            registry_scope: RegistryScope::Export,
            log_duplicates: true,
        }
    }
}

impl ExportOptions {
    /// Parse options from the host's JSON object; `null` yields the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| XliffError::InvalidOptions(e.to_string()))
    }
}

//! Diagnostics collected during an export.

use serde::Serialize;
use std::fmt;

/// Non-fatal findings reported alongside the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Diagnostic {
    /// A block id was seen again and its unit got a suffixed id
    #[serde(rename_all = "camelCase")]
    DuplicateBlockId {
        block_id: String,
        unit_id: String,
        page_id: String,
        occurrence: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateBlockId {
                block_id,
                unit_id,
                page_id,
                ..
            } => write!(
                f,
                "Duplicate block ID: {} (page {}, exported as {})",
                block_id, page_id, unit_id
            ),
        }
    }
}

#![deny(clippy::all)]

//! Supernova XLIFF export
//!
//! Converts the page/block tree of a documentation site into an XLIFF 1.2
//! document with one `<trans-unit>` per text-bearing block.
//!
//! ```
//! use supernova_xliff::{build_xliff_output, BlockContent, DocumentationPage, DocumentationPageBlock, RichText};
//!
//! let heading = DocumentationPageBlock::new(
//!     "h1",
//!     BlockContent::Heading { text: RichText::new(["Hello, ", "world!"]) },
//! );
//! let page = DocumentationPage::new("p1", vec![heading]);
//!
//! let xliff = build_xliff_output(&[page], &[]);
//! assert!(xliff.contains("<source>Hello, world!</source>"));
//! ```

pub mod diagnostics;
pub mod document;
mod error;
pub mod flatten;
pub mod model;
pub mod options;
pub mod registry;
pub mod unit;
pub mod xml;

// Re-exports
pub use diagnostics::Diagnostic;
pub use document::{build_xliff_output, ExportSession, XliffExport};
pub use error::{Result, XliffError};
pub use flatten::{flatten_page, is_translatable, translatable_blocks};
pub use model::{
    groups_from_json, pages_from_json, BlockContent, BlockKind, DocumentationGroup,
    DocumentationPage, DocumentationPageBlock, RichText, RichTextSpan, TextBlock,
};
pub use options::{ExportOptions, RegistryScope};
pub use registry::{ClaimedId, UnitIdRegistry};
pub use unit::UnitRenderer;

/// Decode the host's JSON input and export it with `options`
pub fn export_json(pages: &str, groups: Option<&str>, options: ExportOptions) -> Result<XliffExport> {
    let pages = pages_from_json(pages)?;
    let groups = match groups {
        Some(groups) => groups_from_json(groups)?,
        None => Vec::new(),
    };
    Ok(ExportSession::new(options).export(&pages, &groups))
}

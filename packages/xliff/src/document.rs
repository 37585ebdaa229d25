//! XLIFF Document Module
//!
//! Assembles the units of all pages into the fixed XLIFF 1.2 envelope.

use crate::diagnostics::Diagnostic;
use crate::flatten::translatable_blocks;
use crate::model::{DocumentationGroup, DocumentationPage};
use crate::options::{ExportOptions, RegistryScope};
use crate::registry::UnitIdRegistry;
use crate::unit::{UnitRenderer, UNIT_INDENT};
use crate::xml::{self, Declaration, Node, Tag, CR, NO_ATTRS};

const VERSION: &str = "1.2";
const XMLNS: &str = "urn:oasis:names:tc:xliff:document:1.2";
pub const SOURCE_LANGUAGE: &str = "en";
pub const TARGET_LANGUAGE: &str = "jp";
const DATATYPE: &str = "plaintext";
const ORIGINAL: &str = "supernova-documentation.data";
const TOOL_ID: &str = "supernova.io";
const TOOL_NAME: &str = "supernova";

/// Result of one export
#[derive(Debug, Clone)]
pub struct XliffExport {
    /// The XLIFF document
    pub document: String,
    /// Number of `<trans-unit>` elements in the document
    pub unit_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Export state: the unit id registry plus the options it runs under.
///
/// With [`RegistryScope::Export`] every call to [`ExportSession::export`]
/// starts from an empty registry; with [`RegistryScope::Session`] ids keep
/// accumulating until [`ExportSession::reset`].
#[derive(Debug, Default)]
pub struct ExportSession {
    options: ExportOptions,
    registry: UnitIdRegistry,
}

impl ExportSession {
    pub fn new(options: ExportOptions) -> Self {
        ExportSession {
            options,
            registry: UnitIdRegistry::new(),
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Replace the options, keeping whatever the registry has seen
    pub fn set_options(&mut self, options: ExportOptions) {
        self.options = options;
    }

    pub fn registry(&self) -> &UnitIdRegistry {
        &self.registry
    }

    pub fn reset(&mut self) {
        self.registry.clear();
    }

    /// Export `pages` as one XLIFF document.
    ///
    /// `groups` is part of the host contract and currently not consulted.
    pub fn export(
        &mut self,
        pages: &[DocumentationPage],
        _groups: &[DocumentationGroup],
    ) -> XliffExport {
        if self.options.registry_scope == RegistryScope::Export {
            self.registry.clear();
        }

        let mut diagnostics = Vec::new();
        let mut units: Vec<Box<dyn Node>> = Vec::new();
        let mut unit_count = 0;
        {
            let mut renderer =
                UnitRenderer::new(&mut self.registry, &mut diagnostics, self.options.log_duplicates);
            for page in pages {
                let blocks = translatable_blocks(page);
                tracing::debug!(page_id = %page.persistent_id, units = blocks.len(), "exporting page");
                for block in blocks {
                    units.push(Box::new(CR::new(UNIT_INDENT)));
                    units.push(Box::new(renderer.render(block, page)));
                    unit_count += 1;
                }
            }
        }

        tracing::info!(
            pages = pages.len(),
            units = unit_count,
            duplicates = diagnostics.len(),
            "built XLIFF document"
        );

        XliffExport {
            document: assemble(units),
            unit_count,
            diagnostics,
        }
    }
}

/// Wrap serialized units in the XLIFF envelope
fn assemble(mut units: Vec<Box<dyn Node>>) -> String {
    units.push(Box::new(CR::new(UNIT_INDENT - 2)));
    let body = Tag::new("body", NO_ATTRS, units);

    let tool = Tag::new(
        "tool",
        [("tool-id", TOOL_ID), ("tool-name", TOOL_NAME)],
        Vec::new(),
    );
    let header_children: Vec<Box<dyn Node>> =
        vec![Box::new(CR::new(6)), Box::new(tool), Box::new(CR::new(4))];
    let header = Tag::new("header", NO_ATTRS, header_children);

    let file_children: Vec<Box<dyn Node>> = vec![
        Box::new(CR::new(4)),
        Box::new(header),
        Box::new(CR::new(4)),
        Box::new(body),
        Box::new(CR::new(2)),
    ];
    let file = Tag::new(
        "file",
        [
            ("source-language", SOURCE_LANGUAGE),
            ("target-language", TARGET_LANGUAGE),
            ("datatype", DATATYPE),
            ("original", ORIGINAL),
        ],
        file_children,
    );

    let xliff_children: Vec<Box<dyn Node>> =
        vec![Box::new(CR::new(2)), Box::new(file), Box::new(CR::new(0))];
    let xliff = Tag::new("xliff", [("version", VERSION), ("xmlns", XMLNS)], xliff_children);

    let nodes: Vec<Box<dyn Node>> = vec![
        Box::new(Declaration::new([
            ("version", "1.0"),
            ("encoding", "UTF-8"),
            ("standalone", "yes"),
        ])),
        Box::new(CR::new(0)),
        Box::new(xliff),
        Box::new(CR::new(0)),
    ];
    xml::serialize(&nodes)
}

/// Export with a fresh registry, returning only the document
pub fn build_xliff_output(pages: &[DocumentationPage], groups: &[DocumentationGroup]) -> String {
    ExportSession::default().export(pages, groups).document
}

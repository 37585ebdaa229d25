//! Translation Unit Module
//!
//! Turns one text-bearing block into a `<trans-unit>` element.

use crate::diagnostics::Diagnostic;
use crate::model::{DocumentationPage, TextBlock};
use crate::registry::UnitIdRegistry;
use crate::xml::{self, Node, Tag, CR, NO_ATTRS};

const UNIT_TAG: &str = "trans-unit";
const SOURCE_TAG: &str = "source";
const TARGET_TAG: &str = "target";
const CONTEXT_GROUP_TAG: &str = "context-group";
const CONTEXT_TAG: &str = "context";

/// Indentation of a `<trans-unit>` inside `<body>`
pub const UNIT_INDENT: usize = 6;

/// Renders units against a shared id registry
pub struct UnitRenderer<'s> {
    registry: &'s mut UnitIdRegistry,
    diagnostics: &'s mut Vec<Diagnostic>,
    log_duplicates: bool,
}

impl<'s> UnitRenderer<'s> {
    pub fn new(
        registry: &'s mut UnitIdRegistry,
        diagnostics: &'s mut Vec<Diagnostic>,
        log_duplicates: bool,
    ) -> Self {
        UnitRenderer {
            registry,
            diagnostics,
            log_duplicates,
        }
    }

    /// Build the `<trans-unit>` tag for `block`.
    ///
    /// Source and target carry the same text; nothing is translated here.
    pub fn render(&mut self, block: TextBlock<'_>, page: &DocumentationPage) -> Tag {
        let text = block.plain_text();
        let claimed = self.registry.claim(block.id());

        if claimed.is_duplicate() {
            if self.log_duplicates {
                tracing::warn!(
                    block_id = block.id(),
                    unit_id = %claimed.id,
                    page_id = %page.persistent_id,
                    "Duplicate block ID: {}",
                    block.id()
                );
            }
            self.diagnostics.push(Diagnostic::DuplicateBlockId {
                block_id: block.id().to_string(),
                unit_id: claimed.id.clone(),
                page_id: page.persistent_id.clone(),
                occurrence: claimed.occurrence,
            });
        }

        let inner = UNIT_INDENT + 2;
        let context_group: Vec<Box<dyn Node>> = vec![
            Box::new(CR::new(inner + 2)),
            Box::new(Tag::with_text(
                CONTEXT_TAG,
                [("context-type", "blocktype")],
                block.kind().as_str(),
            )),
            Box::new(CR::new(inner + 2)),
            Box::new(Tag::with_text(
                CONTEXT_TAG,
                [("context-type", "pageid")],
                &page.persistent_id,
            )),
            Box::new(CR::new(inner)),
        ];

        let children: Vec<Box<dyn Node>> = vec![
            Box::new(CR::new(inner)),
            Box::new(Tag::with_text(SOURCE_TAG, NO_ATTRS, &text)),
            Box::new(CR::new(inner)),
            Box::new(Tag::with_text(TARGET_TAG, NO_ATTRS, &text)),
            Box::new(CR::new(inner)),
            Box::new(Tag::new(
                CONTEXT_GROUP_TAG,
                [("purpose", "location")],
                context_group,
            )),
            Box::new(CR::new(UNIT_INDENT)),
        ];

        Tag::new(UNIT_TAG, [("id", claimed.id.as_str())], children)
    }

    /// Render `block` straight to its XML fragment
    pub fn render_to_string(&mut self, block: TextBlock<'_>, page: &DocumentationPage) -> String {
        let unit: Vec<Box<dyn Node>> = vec![Box::new(self.render(block, page))];
        xml::serialize(&unit)
    }
}

//! Block Flattening Module
//!
//! Collects the block tree of a page into one ordered list and picks out
//! the blocks that yield translation units.

use crate::model::{BlockKind, DocumentationPage, DocumentationPageBlock, TextBlock};

/// Flatten every block reachable from `page`.
///
/// The order is level-by-sibling-list rather than plain pre-order: the
/// top-level list comes first, then for each top-level block its children
/// list followed by the expansion of each of those children, recursively.
///
/// ```text
/// A(A1(A1a), A2), B(B1)  =>  A B A1 A2 A1a B1
/// ```
pub fn flatten_page(page: &DocumentationPage) -> Vec<&DocumentationPageBlock> {
    let mut blocks: Vec<&DocumentationPageBlock> = page.blocks.iter().collect();
    for block in &page.blocks {
        collect_descendants(block, &mut blocks);
    }
    blocks
}

fn collect_descendants<'a>(
    block: &'a DocumentationPageBlock,
    out: &mut Vec<&'a DocumentationPageBlock>,
) {
    out.extend(block.children.iter());
    for child in &block.children {
        collect_descendants(child, out);
    }
}

/// Whether a block of this kind becomes a translation unit
pub fn is_translatable_kind(kind: BlockKind) -> bool {
    matches!(
        kind,
        BlockKind::Text | BlockKind::Heading | BlockKind::Callout | BlockKind::Quote
    )
}

pub fn is_translatable(block: &DocumentationPageBlock) -> bool {
    is_translatable_kind(block.kind())
}

/// Flattened blocks of `page` that carry translatable text, in flattened order.
///
/// Containers are filtered on their own kind only; their descendants were
/// already flattened and decide for themselves.
pub fn translatable_blocks(page: &DocumentationPage) -> Vec<TextBlock<'_>> {
    flatten_page(page)
        .into_iter()
        .filter(|block| is_translatable(block))
        .filter_map(DocumentationPageBlock::as_text)
        .collect()
}

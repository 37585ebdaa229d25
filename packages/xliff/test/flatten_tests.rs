//! Flattening Tests
//!
//! Traversal order and translatable-kind filtering

use proptest::prelude::*;
use std::collections::HashSet;
use supernova_xliff::{
    flatten_page, is_translatable, translatable_blocks, BlockContent, DocumentationPage,
    DocumentationPageBlock, RichText,
};

fn text(id: &str) -> DocumentationPageBlock {
    DocumentationPageBlock::new(id, BlockContent::Text { text: RichText::new([id]) })
}

fn image(id: &str) -> DocumentationPageBlock {
    DocumentationPageBlock::new(id, BlockContent::Image)
}

fn ids<'a>(blocks: impl IntoIterator<Item = &'a DocumentationPageBlock>) -> Vec<&'a str> {
    blocks.into_iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn should_list_top_level_blocks_first() {
    let page = DocumentationPage::new(
        "p1",
        vec![
            text("a").with_children(vec![text("a1")]),
            text("b"),
            text("c").with_children(vec![text("c1")]),
        ],
    );
    assert_eq!(ids(flatten_page(&page)), vec!["a", "b", "c", "a1", "c1"]);
}

#[test]
fn should_expand_children_lists_before_grandchildren() {
    let page = DocumentationPage::new(
        "p1",
        vec![text("a").with_children(vec![
            text("a1").with_children(vec![text("a1x"), text("a1y")]),
            text("a2").with_children(vec![text("a2x")]),
        ])],
    );
    assert_eq!(
        ids(flatten_page(&page)),
        vec!["a", "a1", "a2", "a1x", "a1y", "a2x"]
    );
}

#[test]
fn should_filter_on_block_kind_only() {
    for (content, expected) in [
        (BlockContent::Text { text: RichText::default() }, true),
        (BlockContent::Heading { text: RichText::default() }, true),
        (BlockContent::Callout { text: RichText::default() }, true),
        (BlockContent::Quote { text: RichText::default() }, true),
        (BlockContent::Image, false),
        (BlockContent::Table, false),
        (BlockContent::Code, false),
        (BlockContent::Embed, false),
        (BlockContent::Unsupported, false),
    ] {
        let block = DocumentationPageBlock::new("x", content);
        assert_eq!(is_translatable(&block), expected, "{:?}", block.kind());
    }
}

#[test]
fn should_visit_text_inside_non_translatable_containers() {
    let page = DocumentationPage::new(
        "p1",
        vec![image("img").with_children(vec![text("caption"), image("nested")])],
    );
    let blocks = translatable_blocks(&page);
    let found: Vec<&str> = blocks.iter().map(|b| b.id()).collect();
    assert_eq!(found, vec!["caption"]);
}

#[derive(Debug, Clone)]
struct Shape {
    is_text: bool,
    children: Vec<Shape>,
}

fn arb_block() -> impl Strategy<Value = DocumentationPageBlock> {
    let leaf = any::<bool>().prop_map(|is_text| Shape {
        is_text,
        children: Vec::new(),
    });
    let tree = leaf.prop_recursive(4, 48, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(is_text, children)| Shape { is_text, children })
    });
    tree.prop_map(|shape| {
        let mut next_id = 0;
        build(shape, &mut next_id)
    })
}

fn build(shape: Shape, next_id: &mut usize) -> DocumentationPageBlock {
    *next_id += 1;
    let id = format!("b{}", next_id);
    let block = if shape.is_text { text(&id) } else { image(&id) };
    block.with_children(
        shape
            .children
            .into_iter()
            .map(|c| build(c, next_id))
            .collect(),
    )
}

fn count(block: &DocumentationPageBlock) -> usize {
    1 + block.children.iter().map(count).sum::<usize>()
}

fn collect_ids<'a>(block: &'a DocumentationPageBlock, out: &mut Vec<&'a str>) {
    out.push(&block.id);
    for child in &block.children {
        collect_ids(child, out);
    }
}

proptest! {
    #[test]
    fn flatten_visits_every_block_exactly_once(blocks in prop::collection::vec(arb_block(), 0..4)) {
        // Ids are only unique within one tree; prefix them per top-level block.
        let blocks: Vec<DocumentationPageBlock> = blocks
            .into_iter()
            .enumerate()
            .map(|(i, b)| prefix_ids(b, i))
            .collect();
        let page = DocumentationPage::new("p", blocks);

        let flat = flatten_page(&page);
        let total: usize = page.blocks.iter().map(count).sum();
        prop_assert_eq!(flat.len(), total);
        prop_assert!(flat.len() >= page.blocks.len());

        let mut expected = Vec::new();
        for block in &page.blocks {
            collect_ids(block, &mut expected);
        }
        let seen: HashSet<&str> = flat.iter().map(|b| b.id.as_str()).collect();
        prop_assert_eq!(seen.len(), flat.len());
        prop_assert_eq!(seen, expected.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn flatten_puts_parents_before_descendants(block in arb_block()) {
        let page = DocumentationPage::new("p", vec![block]);
        let flat = flatten_page(&page);
        let position = |id: &str| flat.iter().position(|b| b.id == id);
        for (index, parent) in flat.iter().enumerate() {
            for child in &parent.children {
                prop_assert!(position(&child.id).map_or(false, |p| p > index));
            }
        }
    }

    #[test]
    fn flatten_is_deterministic(block in arb_block()) {
        let page = DocumentationPage::new("p", vec![block]);
        let first = ids(flatten_page(&page));
        let second = ids(flatten_page(&page));
        prop_assert_eq!(first, second);
    }
}

fn prefix_ids(mut block: DocumentationPageBlock, prefix: usize) -> DocumentationPageBlock {
    block.id = format!("{}-{}", prefix, block.id);
    block.children = block
        .children
        .into_iter()
        .map(|c| prefix_ids(c, prefix))
        .collect();
    block
}

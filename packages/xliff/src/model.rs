//! Documentation Model Module
//!
//! Read-only view of the documentation data handed over by the host:
//! pages, groups and the nested block tree of every page.

use crate::error::Result;
use serde::Deserialize;
use std::fmt;

/// A single documentation page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationPage {
    /// Stable identifier, used as the `pageid` context of every unit
    pub persistent_id: String,
    #[serde(default)]
    pub name: String,
    /// Top-level content blocks, in document order
    #[serde(default)]
    pub blocks: Vec<DocumentationPageBlock>,
}

/// A documentation group.
///
/// Groups are part of the host contract but carry nothing the export reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentationGroup {
    pub id: String,
    pub persistent_id: String,
    pub title: String,
}

/// A node of a page's content tree
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentationPageBlock {
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
    #[serde(default)]
    pub children: Vec<DocumentationPageBlock>,
}

/// Block payload, keyed by the host's `type` tag.
///
/// Only the span-bearing kinds carry text; everything else is opaque.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BlockContent {
    Text { text: RichText },
    Heading { text: RichText },
    Callout { text: RichText },
    Quote { text: RichText },
    Code,
    UnorderedList,
    OrderedList,
    Divider,
    Image,
    Table,
    Embed,
    Token,
    Link,
    #[serde(other)]
    Unsupported,
}

/// Closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Heading,
    Callout,
    Quote,
    Code,
    UnorderedList,
    OrderedList,
    Divider,
    Image,
    Table,
    Embed,
    Token,
    Link,
    Unsupported,
}

impl BlockKind {
    /// Tag name as used by the host model
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "Text",
            BlockKind::Heading => "Heading",
            BlockKind::Callout => "Callout",
            BlockKind::Quote => "Quote",
            BlockKind::Code => "Code",
            BlockKind::UnorderedList => "UnorderedList",
            BlockKind::OrderedList => "OrderedList",
            BlockKind::Divider => "Divider",
            BlockKind::Image => "Image",
            BlockKind::Table => "Table",
            BlockKind::Embed => "Embed",
            BlockKind::Token => "Token",
            BlockKind::Link => "Link",
            BlockKind::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styled text made of consecutive spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub spans: Vec<RichTextSpan>,
}

impl RichText {
    pub fn new<I, S>(spans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RichText {
            spans: spans
                .into_iter()
                .map(|text| RichTextSpan { text: text.into() })
                .collect(),
        }
    }

    /// Concatenation of all span fragments, styling dropped
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// One run of text; formatting attributes sent by the host are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichTextSpan {
    pub text: String,
}

/// Borrowed view of a block whose kind carries span text.
///
/// Obtained through [`DocumentationPageBlock::as_text`], so a unit can only
/// ever be rendered from a text-bearing block.
#[derive(Debug, Clone, Copy)]
pub struct TextBlock<'a> {
    pub block: &'a DocumentationPageBlock,
    pub text: &'a RichText,
}

impl<'a> TextBlock<'a> {
    pub fn id(&self) -> &'a str {
        &self.block.id
    }

    pub fn kind(&self) -> BlockKind {
        self.block.kind()
    }

    pub fn plain_text(&self) -> String {
        self.text.plain_text()
    }
}

impl DocumentationPageBlock {
    pub fn new(id: impl Into<String>, content: BlockContent) -> Self {
        DocumentationPageBlock {
            id: id.into(),
            content,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DocumentationPageBlock>) -> Self {
        self.children = children;
        self
    }

    pub fn kind(&self) -> BlockKind {
        match &self.content {
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::Callout { .. } => BlockKind::Callout,
            BlockContent::Quote { .. } => BlockKind::Quote,
            BlockContent::Code => BlockKind::Code,
            BlockContent::UnorderedList => BlockKind::UnorderedList,
            BlockContent::OrderedList => BlockKind::OrderedList,
            BlockContent::Divider => BlockKind::Divider,
            BlockContent::Image => BlockKind::Image,
            BlockContent::Table => BlockKind::Table,
            BlockContent::Embed => BlockKind::Embed,
            BlockContent::Token => BlockKind::Token,
            BlockContent::Link => BlockKind::Link,
            BlockContent::Unsupported => BlockKind::Unsupported,
        }
    }

    /// Text view of the block, `None` for kinds without spans
    pub fn as_text(&self) -> Option<TextBlock<'_>> {
        match &self.content {
            BlockContent::Text { text }
            | BlockContent::Heading { text }
            | BlockContent::Callout { text }
            | BlockContent::Quote { text } => Some(TextBlock { block: self, text }),
            _ => None,
        }
    }
}

impl DocumentationPage {
    pub fn new(persistent_id: impl Into<String>, blocks: Vec<DocumentationPageBlock>) -> Self {
        DocumentationPage {
            persistent_id: persistent_id.into(),
            name: String::new(),
            blocks,
        }
    }
}

/// Decode the host's page array
pub fn pages_from_json(json: &str) -> Result<Vec<DocumentationPage>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode the host's group array
pub fn groups_from_json(json: &str) -> Result<Vec<DocumentationGroup>> {
    Ok(serde_json::from_str(json)?)
}

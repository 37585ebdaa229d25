//! XML Helper Module
//!
//! Small node tree used to assemble the XLIFF document, plus the escaping
//! rules for text and attribute values.

use indexmap::IndexMap;
use quick_xml::escape::{escape, partial_escape};

/// Visitor trait for XML nodes
pub trait IVisitor {
    fn visit_tag(&mut self, tag: &Tag) -> String;
    fn visit_text(&mut self, text: &Text) -> String;
    fn visit_declaration(&mut self, decl: &Declaration) -> String;
}

/// Attribute list of a tag without attributes
pub const NO_ATTRS: [(&str, &str); 0] = [];

struct Visitor;

impl IVisitor for Visitor {
    fn visit_tag(&mut self, tag: &Tag) -> String {
        let str_attrs = serialize_attributes(&tag.attrs);

        if tag.children.is_empty() {
            return format!("<{}{}/>", tag.name, str_attrs);
        }

        let str_children: String = tag.children.iter().map(|node| node.visit(self)).collect();

        format!("<{}{}>{}</{}>", tag.name, str_attrs, str_children, tag.name)
    }

    fn visit_text(&mut self, text: &Text) -> String {
        text.value.clone()
    }

    fn visit_declaration(&mut self, decl: &Declaration) -> String {
        format!("<?xml{}?>", serialize_attributes(&decl.attrs))
    }
}

fn serialize_attributes(attrs: &IndexMap<String, String>) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, value))
        .collect()
}

/// Serialize XML nodes to string
pub fn serialize(nodes: &[Box<dyn Node>]) -> String {
    let mut visitor = Visitor;
    nodes.iter().map(|node| node.visit(&mut visitor)).collect()
}

/// Base trait for all XML nodes
pub trait Node: std::fmt::Debug {
    fn visit(&self, visitor: &mut dyn IVisitor) -> String;
}

/// XML Declaration node
#[derive(Debug, Clone)]
pub struct Declaration {
    pub attrs: IndexMap<String, String>,
}

impl Declaration {
    pub fn new<'a>(unescaped_attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Declaration {
            attrs: escape_attrs(unescaped_attrs),
        }
    }
}

impl Node for Declaration {
    fn visit(&self, visitor: &mut dyn IVisitor) -> String {
        visitor.visit_declaration(self)
    }
}

/// XML Tag node, attributes kept in insertion order
#[derive(Debug)]
pub struct Tag {
    pub name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Box<dyn Node>>,
}

impl Tag {
    pub fn new<'a>(
        name: &str,
        unescaped_attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
        children: Vec<Box<dyn Node>>,
    ) -> Self {
        Tag {
            name: name.to_string(),
            attrs: escape_attrs(unescaped_attrs),
            children,
        }
    }

    /// Tag holding a single text child
    pub fn with_text<'a>(
        name: &str,
        unescaped_attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
        text: &str,
    ) -> Self {
        let child: Box<dyn Node> = Box::new(Text::new(text));
        Tag::new(name, unescaped_attrs, vec![child])
    }
}

impl Node for Tag {
    fn visit(&self, visitor: &mut dyn IVisitor) -> String {
        visitor.visit_tag(self)
    }
}

/// XML Text node
#[derive(Debug, Clone)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(unescaped_value: &str) -> Self {
        Text {
            value: escape_text(unescaped_value),
        }
    }
}

impl Node for Text {
    fn visit(&self, visitor: &mut dyn IVisitor) -> String {
        visitor.visit_text(self)
    }
}

/// Line break followed by `ws` spaces of indentation
#[derive(Debug, Clone)]
pub struct CR {
    value: String,
}

impl CR {
    pub fn new(ws: usize) -> Self {
        CR {
            value: format!("\n{}", " ".repeat(ws)),
        }
    }
}

impl Node for CR {
    fn visit(&self, visitor: &mut dyn IVisitor) -> String {
        visitor.visit_text(&Text {
            value: self.value.clone(),
        })
    }
}

fn escape_attrs<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> IndexMap<String, String> {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), escape_attr(v)))
        .collect()
}

/// Escape text content: `&`, `<` and `>` become entities, quotes stay literal
pub fn escape_text(text: &str) -> String {
    partial_escape(text).into_owned()
}

/// Escape an attribute value, quotes included
pub fn escape_attr(value: &str) -> String {
    escape(value).into_owned()
}

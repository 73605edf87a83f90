//! Tagged element representation.
//!
//! A `TaggedElement` is one `<tag class="LABEL">content</tag>` unit of the
//! markup dialect. Its class, attributes and content hold plain (unescaped)
//! text; escaping happens only when rendering.

use quick_xml::escape::{escape, partial_escape};
use serde::{Deserialize, Serialize};

/// A single classed markup element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaggedElement {
    /// Element name, e.g. `p`
    pub tag: String,
    /// Value of the `class` attribute, e.g. `ZHTW`
    pub class: String,
    /// Unescaped text content
    pub content: String,
    /// Attributes other than `class`, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
}

impl TaggedElement {
    pub fn new(tag: impl Into<String>, class: impl Into<String>, content: impl Into<String>) -> Self {
        TaggedElement {
            tag: tag.into(),
            class: class.into(),
            content: content.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an extra attribute, rendered after `class`
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Check whether the content is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Two elements share a tag-class when both tag name and class match
    pub fn same_class(&self, other: &TaggedElement) -> bool {
        self.tag == other.tag && self.class == other.class
    }

    /// Render the element as markup
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.content.len() + self.tag.len() * 2 + self.class.len() + 16);
        self.write_markup(&mut out);
        out
    }

    /// Start tag carrying the class and every extra attribute
    pub fn start_tag(&self) -> String {
        let mut out = format!("<{} class=\"{}\"", self.tag, escape(self.class.as_str()));
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value.as_str())));
        }
        out.push('>');
        out
    }

    /// Append the rendered element to `out`
    pub fn write_markup(&self, out: &mut String) {
        out.push_str(&self.start_tag());
        out.push_str(&partial_escape(self.content.as_str()));
        out.push_str(&close_tag(&self.tag));
    }
}

impl std::fmt::Display for TaggedElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_markup())
    }
}

/// `<tag class="class">`, with the class value escaped
pub fn open_tag(tag: &str, class: &str) -> String {
    format!("<{} class=\"{}\">", tag, escape(class))
}

/// `</tag>`
pub fn close_tag(tag: &str) -> String {
    format!("</{}>", tag)
}

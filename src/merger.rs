//! Element merging.
//!
//! Collapses the fragmentation left by the tagger: blank elements are dropped
//! and runs of adjacent elements of the same tag-class are concatenated. The
//! output has no blank elements and no two neighbours of the same tag-class, so
//! merging it again changes nothing. A merged element keeps the attributes of
//! the first element of its run.

use crate::element::TaggedElement;
use crate::error::Result;
use crate::markup::{parse_elements, render_elements};

/// Separator placed between rendered elements
pub const ELEMENT_SEPARATOR: &str = " ";

/// Fold an element sequence left to right
pub fn merge_elements(elements: Vec<TaggedElement>) -> Vec<TaggedElement> {
    let mut merged: Vec<TaggedElement> = Vec::new();
    let mut open: Option<TaggedElement> = None;

    for element in elements {
        // Blank elements are not even separators
        if element.is_blank() {
            continue;
        }

        match open.as_mut() {
            Some(current) if current.same_class(&element) => {
                current.content.push_str(&element.content);
            }
            _ => {
                if let Some(done) = open.replace(element) {
                    merged.push(done);
                }
            }
        }
    }

    if let Some(done) = open {
        merged.push(done);
    }

    merged
}

/// Parse `markup`, merge its elements and render the result
pub fn merge(markup: &str) -> Result<String> {
    let elements = merge_elements(parse_elements(markup)?);
    Ok(render_elements(&elements, ELEMENT_SEPARATOR))
}

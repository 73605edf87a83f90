//! Boundary tagging.
//!
//! The tagger makes a purely local decision per span: a foreign span closes the
//! ambient element, gets its own foreign element, and reopens the ambient one.
//! The fragmentation this leaves behind (empty ambient elements between two
//! foreign spans, back-to-back elements of the same class) is cleaned up by the
//! merger in a second pass.

use quick_xml::escape::partial_escape;

use crate::element::{close_tag, open_tag};
use crate::script::ScriptClassifier;
use crate::segmenter::{Segmenter, Span};

/// Emits tagged markup from a span sequence
#[derive(Debug, Clone)]
pub struct BoundaryTagger {
    classifier: ScriptClassifier,
    tag: String,
    ambient_class: String,
    foreign_class: String,
}

impl BoundaryTagger {
    /// Create a tagger for `<tag class="...">` elements
    pub fn new(
        classifier: ScriptClassifier,
        tag: impl Into<String>,
        ambient_class: impl Into<String>,
        foreign_class: impl Into<String>,
    ) -> Self {
        BoundaryTagger {
            classifier,
            tag: tag.into(),
            ambient_class: ambient_class.into(),
            foreign_class: foreign_class.into(),
        }
    }

    pub fn classifier(&self) -> &ScriptClassifier {
        &self.classifier
    }

    pub fn ambient_class(&self) -> &str {
        &self.ambient_class
    }

    pub fn foreign_class(&self) -> &str {
        &self.foreign_class
    }

    /// Tag a span sequence.
    ///
    /// The result is the *content* of an ambient element: it is only
    /// well-formed once wrapped in `<tag class="ambient">...</tag>`.
    pub fn tag(&self, spans: &[Span]) -> String {
        let ambient_open = open_tag(&self.tag, &self.ambient_class);
        let foreign_open = open_tag(&self.tag, &self.foreign_class);
        let close = close_tag(&self.tag);

        let mut out = String::new();
        for span in spans {
            let text = partial_escape(span.text.as_str());
            if self.classifier.is_foreign(&span.text) {
                out.push_str(&close);
                out.push_str(&foreign_open);
                out.push_str(&text);
                out.push_str(&close);
                out.push_str(&ambient_open);
            } else {
                out.push_str(&text);
            }
        }
        out
    }

    /// Segment `content`, tag it and wrap it in the ambient element
    pub fn tag_element(&self, segmenter: &Segmenter, content: &str) -> String {
        let spans = segmenter.segment(content);
        format!(
            "{}{}{}",
            open_tag(&self.tag, &self.ambient_class),
            self.tag(&spans),
            close_tag(&self.tag)
        )
    }
}

impl Default for BoundaryTagger {
    fn default() -> Self {
        BoundaryTagger::new(ScriptClassifier::default(), "p", "ZHTW", "JP")
    }
}

/// Tag spans with the default classifier and `p` elements
pub fn tag(spans: &[Span], ambient_class: &str, foreign_class: &str) -> String {
    BoundaryTagger::new(ScriptClassifier::default(), "p", ambient_class, foreign_class).tag(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_elements;

    fn span(text: &str) -> Span {
        Span::new(text.to_string(), 0, true)
    }

    #[test]
    fn test_foreign_span_keeps_trailing_delimiter() {
        let out = tag(&[span("どんなところ＝『哪一方面』。")], "ZHTW", "JP");
        assert_eq!(
            out,
            "</p><p class=\"JP\">どんなところ＝『哪一方面』。</p><p class=\"ZHTW\">"
        );
    }

    #[test]
    fn test_base_spans_stay_inline() {
        let out = tag(&[span("撮影，"), span("拍照拍片。")], "ZHTW", "JP");
        assert_eq!(out, "撮影，拍照拍片。");
    }

    #[test]
    fn test_consecutive_foreign_spans_leave_empty_ambient() {
        let out = tag(&[span("くわしい："), span("しっかり。")], "ZHTW", "JP");
        assert_eq!(
            out,
            "</p><p class=\"JP\">くわしい：</p><p class=\"ZHTW\"></p><p class=\"JP\">しっかり。</p><p class=\"ZHTW\">"
        );
    }

    #[test]
    fn test_tag_element_is_well_formed() {
        let tagger = BoundaryTagger::default();
        let markup = tagger.tag_element(&Segmenter::default(), "合間(あいま)：空檔。\n");
        let elements = parse_elements(&markup).unwrap();
        let classes: Vec<&str> = elements.iter().map(|e| e.class.as_str()).collect();
        assert_eq!(classes, vec!["ZHTW", "JP", "ZHTW"]);
        assert_eq!(elements[1].content, "合間(あいま)：");
        assert_eq!(elements[2].content, "空檔。");
    }

    #[test]
    fn test_markup_characters_are_escaped() {
        let tagger = BoundaryTagger::default();
        let markup = tagger.tag_element(&Segmenter::default(), "a<b");
        let elements = parse_elements(&markup).unwrap();
        let text: String = elements.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(text, "a<b");
    }

    #[test]
    fn test_custom_tag_and_classes() {
        let tagger = BoundaryTagger::new(ScriptClassifier::default(), "span", "zh", "ja");
        assert_eq!(
            tagger.tag(&[span("です。")]),
            "</span><span class=\"ja\">です。</span><span class=\"zh\">"
        );
    }
}

//! Punctuation-aware segmentation.
//!
//! Text is cut into minimal spans at every delimiter character. Unlike a plain
//! split, each delimiter stays attached to the span before it, so that
//! `"撮影。どんな。"` yields `["撮影。", "どんな。"]`.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

/// Full-width and Chinese punctuation
pub const ZH_PUNCTS: &str = "＝，。！？；：「」『』（）［］【】《》〈〉、…";

/// ASCII punctuation. Parentheses are not delimiters: `(笑)` or `(モア)` stay
/// inside the span they annotate.
pub const EN_PUNCTS: &str = ",.!?;:\"'[]{}\\/<>-_+=`~@#$%^&*|";

/// Japanese sentence punctuation
pub const JP_PUNCTS: &str = "。、！？…";

/// Line breaks
pub const LINE_BREAKS: &str = "\n\r";

static DEFAULT_DELIMITERS: Lazy<HashSet<char>> = Lazy::new(|| {
    ZH_PUNCTS
        .chars()
        .chain(EN_PUNCTS.chars())
        .chain(JP_PUNCTS.chars())
        .chain(LINE_BREAKS.chars())
        .collect()
});

/// A set of delimiter characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: HashSet<char>,
}

impl DelimiterSet {
    /// Build a set from every character of `chars`
    pub fn from_chars(chars: &str) -> Self {
        DelimiterSet {
            chars: chars.chars().collect(),
        }
    }

    /// Add delimiters
    pub fn with(mut self, chars: &str) -> Self {
        self.chars.extend(chars.chars());
        self
    }

    /// Remove delimiters
    pub fn without(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            self.chars.remove(&c);
        }
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The delimiters as a string, in code point order
    pub fn to_chars_string(&self) -> String {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars.into_iter().collect()
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        DelimiterSet {
            chars: DEFAULT_DELIMITERS.clone(),
        }
    }
}

/// A minimal punctuation-delimited slice of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// The span text, including its trailing delimiter
    pub text: String,
    /// Starting byte offset in the segmented text
    pub start: usize,
    /// Length in bytes
    pub len: usize,
    /// Whether the span was closed by a delimiter (false only for trailing text)
    pub delimited: bool,
}

impl Span {
    pub fn new(text: String, start: usize, delimited: bool) -> Self {
        let len = text.len();
        Span {
            text,
            start,
            len,
            delimited,
        }
    }

    /// Byte offset one past the end of the span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The delimiter closing this span, if any
    pub fn delimiter(&self) -> Option<char> {
        if self.delimited {
            self.text.chars().last()
        } else {
            None
        }
    }
}

/// Splits text into spans at delimiter characters
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    delimiters: DelimiterSet,
}

impl Segmenter {
    pub fn new(delimiters: DelimiterSet) -> Self {
        Segmenter { delimiters }
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    /// Segment `text` into spans.
    ///
    /// Whitespace-only buffers are dropped together with their delimiter, so
    /// consecutive delimiters or blank lines never produce an empty span.
    pub fn segment(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut buf_start = 0;

        for (i, c) in text.char_indices() {
            if self.delimiters.contains(c) {
                let end = i + c.len_utf8();
                push_span(&mut spans, text, buf_start, end, true);
                buf_start = end;
            }
        }

        // Trailing text without a closing delimiter
        push_span(&mut spans, text, buf_start, text.len(), false);

        spans
    }
}

fn push_span(spans: &mut Vec<Span>, text: &str, start: usize, end: usize, delimited: bool) {
    let slice = &text[start..end];
    if !slice.trim().is_empty() {
        spans.push(Span::new(slice.to_string(), start, delimited));
    }
}

/// Segment `text` with an explicit delimiter set
pub fn segment(text: &str, delimiters: &DelimiterSet) -> Vec<Span> {
    Segmenter::new(delimiters.clone()).segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_delimiter_attached_to_preceding_span() {
        let spans = Segmenter::default().segment("撮影。どんな！");
        assert_eq!(texts(&spans), vec!["撮影。", "どんな！"]);
        assert!(spans.iter().all(|s| s.delimited));
    }

    #[test]
    fn test_trailing_text_without_delimiter() {
        let spans = Segmenter::default().segment("開場，妹妹");
        assert_eq!(texts(&spans), vec!["開場，", "妹妹"]);
        assert!(!spans[1].delimited);
        assert_eq!(spans[1].delimiter(), None);
        assert_eq!(spans[0].delimiter(), Some('，'));
    }

    #[test]
    fn test_consecutive_delimiters() {
        // The second delimiter forms its own span, it is not whitespace
        let spans = Segmenter::default().segment("好。。");
        assert_eq!(texts(&spans), vec!["好。", "。"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let spans = Segmenter::default().segment("第一段\n\n\n第二段\n");
        assert_eq!(texts(&spans), vec!["第一段\n", "第二段\n"]);
    }

    #[test]
    fn test_leading_whitespace_kept_inside_span() {
        let spans = Segmenter::default().segment("\n   開場\n");
        assert_eq!(texts(&spans), vec!["   開場\n"]);
        assert_eq!(spans[0].start, 1);
    }

    #[test]
    fn test_ascii_parentheses_are_not_delimiters() {
        let spans = Segmenter::default().segment("頭が良くて!(モア)…ありさ");
        assert_eq!(texts(&spans), vec!["頭が良くて!", "(モア)…", "ありさ"]);
    }

    #[test]
    fn test_offsets() {
        let text = "哪一方面』。とこ";
        let spans = Segmenter::default().segment(text);
        for span in &spans {
            assert_eq!(&text[span.start..span.end()], span.text);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(Segmenter::default().segment("").is_empty());
        assert!(Segmenter::default().segment("  \n \r\n").is_empty());
    }

    #[test]
    fn test_custom_delimiters() {
        let delims = DelimiterSet::from_chars("|");
        let spans = segment("a|b,c|", &delims);
        assert_eq!(texts(&spans), vec!["a|", "b,c|"]);

        let delims = DelimiterSet::default().without(",").with("~");
        assert!(!delims.contains(','));
        assert!(delims.contains('~'));
        assert!(delims.contains('。'));
    }

    #[test]
    fn test_default_set_contents() {
        let delims = DelimiterSet::default();
        for c in ['＝', '『', '。', '、', '…', '\n', '\r', '&', '<', '|'] {
            assert!(delims.contains(c), "{:?} should be a delimiter", c);
        }
        for c in ['(', ')', '～', ' ', 'あ'] {
            assert!(!delims.contains(c), "{:?} should not be a delimiter", c);
        }
    }
}

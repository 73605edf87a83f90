//! Script classification for mixed Chinese/Japanese text.
//!
//! Han ideographs are shared between Chinese and Japanese, so a span can only be
//! told apart by its kana. A span is "foreign" as soon as it contains one
//! character of the configured syllabary range.

use serde::{Deserialize, Serialize};

/// Script of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    /// Hiragana (U+3040 to U+309F)
    Hiragana,
    /// Katakana (U+30A0 to U+30FF)
    Katakana,
    /// CJK ideograph, shared by both scripts
    Han,
    /// Basic Latin letters and digits
    Latin,
    /// Punctuation, ASCII or full-width
    Punct,
    /// Spaces and line breaks
    Whitespace,
    /// Anything else
    #[default]
    Other,
}

impl Script {
    /// Short label used in debug output
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Hiragana => "HIRAGANA",
            Script::Katakana => "KATAKANA",
            Script::Han => "HAN",
            Script::Latin => "LATIN",
            Script::Punct => "PUNCT",
            Script::Whitespace => "SPACE",
            Script::Other => "OTHER",
        }
    }

    /// Check if this script is kana
    pub fn is_kana(&self) -> bool {
        matches!(self, Script::Hiragana | Script::Katakana)
    }
}

/// Get the script of a character
pub fn get_script(c: char) -> Script {
    if c.is_whitespace() {
        return Script::Whitespace;
    }

    match c {
        '\u{3040}'..='\u{309F}' => Script::Hiragana,
        '\u{30A0}'..='\u{30FF}' => Script::Katakana,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // CJK Unified Ideographs Extension A
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        => Script::Han,
        '\u{3000}'..='\u{303F}'     // CJK Symbols and Punctuation
        | '\u{FF01}'..='\u{FF0F}'   // Full-width ASCII punctuation
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}'
        | '\u{2010}'..='\u{2027}'   // General punctuation (dashes, ellipsis)
        => Script::Punct,
        c if c.is_ascii_alphanumeric() => Script::Latin,
        c if c.is_ascii_punctuation() => Script::Punct,
        _ => Script::Other,
    }
}

/// An inclusive range of code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    /// First code point of the range
    pub start: char,
    /// Last code point of the range
    pub end: char,
}

/// Hiragana and katakana blocks
pub const KANA_RANGE: ScriptRange = ScriptRange {
    start: '\u{3040}',
    end: '\u{30FF}',
};

impl ScriptRange {
    pub const fn new(start: char, end: char) -> Self {
        ScriptRange { start, end }
    }

    /// Check if a character falls in this range
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }

    /// An inverted range matches nothing
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        KANA_RANGE
    }
}

/// Decides whether a span belongs to the foreign script
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptClassifier {
    range: ScriptRange,
}

impl ScriptClassifier {
    pub fn new(range: ScriptRange) -> Self {
        ScriptClassifier { range }
    }

    /// The range this classifier detects
    pub fn range(&self) -> ScriptRange {
        self.range
    }

    /// True iff `text` contains at least one character of the foreign range
    pub fn is_foreign(&self, text: &str) -> bool {
        text.chars().any(|c| self.range.contains(c))
    }
}

/// True iff `text` contains hiragana or katakana
pub fn is_foreign_script(text: &str) -> bool {
    ScriptClassifier::default().is_foreign(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kana_is_foreign() {
        assert!(is_foreign_script("どんなところ"));
        assert!(is_foreign_script("ニコ☆プチ"));
        // Range boundaries
        assert!(is_foreign_script("\u{3040}"));
        assert!(is_foreign_script("\u{30FF}"));
    }

    #[test]
    fn test_ideographs_are_not_foreign() {
        assert!(!is_foreign_script("哪一方面"));
        assert!(!is_foreign_script("撮影，合間。"));
        assert!(!is_foreign_script("漢字!?"));
        assert!(!is_foreign_script(""));
        assert!(!is_foreign_script("\u{303F}\u{3100}"));
    }

    #[test]
    fn test_mixed_span_is_foreign() {
        // One kana is enough, ideographs included
        assert!(is_foreign_script("覚えていて＝還記得"));
    }

    #[test]
    fn test_custom_range() {
        // Katakana only
        let classifier = ScriptClassifier::new(ScriptRange::new('\u{30A0}', '\u{30FF}'));
        assert!(classifier.is_foreign("テスト"));
        assert!(!classifier.is_foreign("ひらがな"));
    }

    #[test]
    fn test_get_script() {
        assert_eq!(get_script('ど'), Script::Hiragana);
        assert_eq!(get_script('ニ'), Script::Katakana);
        assert_eq!(get_script('漢'), Script::Han);
        assert_eq!(get_script('a'), Script::Latin);
        assert_eq!(get_script('。'), Script::Punct);
        assert_eq!(get_script('，'), Script::Punct);
        assert_eq!(get_script('!'), Script::Punct);
        assert_eq!(get_script('\n'), Script::Whitespace);
        assert_eq!(get_script('\u{3000}'), Script::Whitespace);
        assert!(get_script('か').is_kana());
    }

    #[test]
    fn test_range_validity() {
        assert!(KANA_RANGE.is_valid());
        assert!(!ScriptRange::new('z', 'a').is_valid());
    }
}

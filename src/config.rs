//! Pipeline configuration.
//!
//! Every field has a default, so a configuration file only needs to name what
//! it overrides:
//!
//! ```json
//! { "foreign_class": "JA", "delimiters": "。，\n" }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::script::{ScriptClassifier, ScriptRange};
use crate::segmenter::{DelimiterSet, Segmenter};
use crate::tagger::BoundaryTagger;

/// Default element name
pub const DEFAULT_TAG: &str = "p";

/// Default class of the document's base language (Traditional Chinese)
pub const DEFAULT_BASE_CLASS: &str = "ZHTW";

/// Default class of foreign-script spans
pub const DEFAULT_FOREIGN_CLASS: &str = "JP";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Element name of the markup dialect
    pub tag: String,
    /// Class whose elements are segmented and tagged
    pub base_class: String,
    /// Class given to spans detected as foreign
    pub foreign_class: String,
    /// Delimiter characters; `None` means the built-in punctuation set
    pub delimiters: Option<String>,
    /// Code points that mark a span as foreign
    pub foreign_range: ScriptRange,
    /// Apply NFC normalization to element content before segmenting
    pub normalize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag: DEFAULT_TAG.to_string(),
            base_class: DEFAULT_BASE_CLASS.to_string(),
            foreign_class: DEFAULT_FOREIGN_CLASS.to_string(),
            delimiters: None,
            foreign_range: ScriptRange::default(),
            normalize: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn with_classes(mut self, base_class: &str, foreign_class: &str) -> Self {
        self.base_class = base_class.to_string();
        self.foreign_class = foreign_class.to_string();
        self
    }

    pub fn with_delimiters(mut self, delimiters: &str) -> Self {
        self.delimiters = Some(delimiters.to_string());
        self
    }

    pub fn with_foreign_range(mut self, range: ScriptRange) -> Self {
        self.foreign_range = range;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Parse a JSON configuration and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Config::from_json_str(&content)
    }

    /// Reject configurations the pipeline cannot honour
    pub fn validate(&self) -> Result<()> {
        if !is_valid_name(&self.tag) {
            return Err(Error::Config(format!("invalid tag name {:?}", self.tag)));
        }
        for class in [&self.base_class, &self.foreign_class] {
            if class.trim().is_empty() || class.contains(&['"', '<', '>', '&'][..]) {
                return Err(Error::Config(format!("invalid class label {:?}", class)));
            }
        }
        if self.base_class == self.foreign_class {
            return Err(Error::Config(format!(
                "base and foreign class are both {:?}",
                self.base_class
            )));
        }
        if !self.foreign_range.is_valid() {
            return Err(Error::Config(format!(
                "foreign range U+{:04X}..U+{:04X} is inverted",
                self.foreign_range.start as u32, self.foreign_range.end as u32
            )));
        }
        Ok(())
    }

    pub fn delimiter_set(&self) -> DelimiterSet {
        match &self.delimiters {
            Some(chars) => DelimiterSet::from_chars(chars),
            None => DelimiterSet::default(),
        }
    }

    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.delimiter_set())
    }

    pub fn classifier(&self) -> ScriptClassifier {
        ScriptClassifier::new(self.foreign_range)
    }

    pub fn tagger(&self) -> BoundaryTagger {
        BoundaryTagger::new(
            self.classifier(),
            self.tag.as_str(),
            self.base_class.as_str(),
            self.foreign_class.as_str(),
        )
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tag, "p");
        assert_eq!(config.base_class, "ZHTW");
        assert_eq!(config.foreign_class, "JP");
        assert_eq!(config.delimiter_set(), DelimiterSet::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json_str(r#"{"foreign_class": "JA", "delimiters": "。\n"}"#).unwrap();
        assert_eq!(config.base_class, "ZHTW");
        assert_eq!(config.foreign_class, "JA");
        let delims = config.delimiter_set();
        assert_eq!(delims.len(), 2);
        assert!(delims.contains('。'));
    }

    #[test]
    fn test_json_range() {
        let config =
            Config::from_json_str(r#"{"foreign_range": {"start": "ァ", "end": "ヿ"}}"#).unwrap();
        assert!(!config.classifier().is_foreign("ひらがな"));
        assert!(config.classifier().is_foreign("カタカナ"));
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(Error::Config(_))
        ));
        assert!(Config::default().with_classes("ZHTW", "ZHTW").validate().is_err());
        assert!(Config::default().with_classes("", "JP").validate().is_err());
        assert!(Config::default().with_classes("a\"b", "JP").validate().is_err());
        assert!(Config::default().with_tag("1p").validate().is_err());
        assert!(Config::default()
            .with_foreign_range(ScriptRange::new('z', 'a'))
            .validate()
            .is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"tag": "span", "normalize": true}}"#).unwrap();
        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.tag, "span");
        assert!(config.normalize);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json_file("/nonexistent/jpmark.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

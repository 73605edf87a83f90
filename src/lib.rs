//! # jpmark-rs
//!
//! Mark embedded Japanese inside Chinese paragraphs.
//!
//! Paragraphs of the base language (`<p class="ZHTW">`) are cut into minimal
//! punctuation-delimited spans. Every span containing kana is moved into its own
//! foreign element (`<p class="JP">`), then adjacent elements of the same class
//! are merged and empty ones dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use jpmark_rs::process;
//!
//! let doc = r#"<p class="ZHTW">重點單字：くわしい：超懂。</p>"#;
//! let out = process(doc).unwrap();
//!
//! assert_eq!(
//!     out,
//!     r#"<p class="ZHTW">重點單字：</p> <p class="JP">くわしい：</p> <p class="ZHTW">超懂。</p>"#
//! );
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use jpmark_rs::{Config, Pipeline};
//!
//! let config = Config::default().with_classes("zh", "ja").with_tag("span");
//! let pipeline = Pipeline::new(config).unwrap();
//! let out = pipeline.process(r#"<span class="zh">好。です</span>"#).unwrap();
//!
//! assert_eq!(out, r#"<span class="zh">好。</span> <span class="ja">です</span>"#);
//! ```
//!
//! ## Python Bindings
//!
//! Build with the `python` feature to get a Python extension module.

pub mod config;
pub mod element;
pub mod error;
pub mod markup;
pub mod merger;
pub mod pipeline;
pub mod script;
pub mod segmenter;
pub mod tagger;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use config::Config;
pub use element::TaggedElement;
pub use error::{Error, Result};
pub use markup::{parse_elements, render_elements};
pub use merger::{merge, merge_elements};
pub use pipeline::{process, LogObserver, Pipeline, PipelineObserver};
pub use script::{get_script, is_foreign_script, Script, ScriptClassifier, ScriptRange, KANA_RANGE};
pub use segmenter::{segment, DelimiterSet, Segmenter, Span};
pub use tagger::{tag, BoundaryTagger};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let doc = "<p class=\"ZHTW\">\n第一段：先整句念\nどんなところがまじめだと思うのかみんなに聞いてみたいな。\n講稿\n</p>";
        let out = process(doc).unwrap();

        let elements = parse_elements(&out).unwrap();
        let classes: Vec<&str> = elements.iter().map(|e| e.class.as_str()).collect();
        assert_eq!(classes, vec!["ZHTW", "JP", "ZHTW"]);
        assert_eq!(
            elements[1].content,
            "どんなところがまじめだと思うのかみんなに聞いてみたいな。"
        );

        // Merging the output again changes nothing
        assert_eq!(merge(&out).unwrap(), out);
    }

    #[test]
    fn test_segment_then_tag() {
        let spans = segment("好。です。", &DelimiterSet::default());
        assert_eq!(spans.len(), 2);
        assert_eq!(
            tag(&spans, "ZHTW", "JP"),
            "好。</p><p class=\"JP\">です。</p><p class=\"ZHTW\">"
        );
    }
}

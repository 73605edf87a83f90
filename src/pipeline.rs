//! The full tagging pipeline.
//!
//! 1. parse the document into its top-level elements,
//! 2. segment and tag the content of every base-class element,
//! 3. merge the resulting markup.
//!
//! The document is transformed in memory; a parse error anywhere aborts the
//! whole run.

use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::config::Config;
use crate::element::close_tag;
use crate::error::Result;
use crate::markup::parse_elements;
use crate::merger::merge;
use crate::segmenter::{Segmenter, Span};
use crate::tagger::BoundaryTagger;

/// Hook for inspecting intermediate pipeline stages
pub trait PipelineObserver: Send + Sync {
    /// Called with the spans of each base-class element
    fn on_spans(&self, _spans: &[Span]) {}

    /// Called with the tagged, not yet merged document
    fn on_tagged(&self, _markup: &str) {}

    /// Called with the final merged document
    fn on_merged(&self, _markup: &str) {}
}

/// Observer reporting stages through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn on_spans(&self, spans: &[Span]) {
        log::trace!("segmented {} spans", spans.len());
        for span in spans {
            log::trace!("  {}..{} {:?}", span.start, span.end(), span.text);
        }
    }

    fn on_tagged(&self, markup: &str) {
        log::debug!("tagged markup:\n{}", markup);
    }

    fn on_merged(&self, markup: &str) {
        log::debug!("merged markup ({} bytes)", markup.len());
    }
}

/// Segments, tags and merges documents
pub struct Pipeline {
    config: Config,
    segmenter: Segmenter,
    tagger: BoundaryTagger,
    observer: Arc<dyn PipelineObserver>,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Pipeline {
            segmenter: config.segmenter(),
            tagger: config.tagger(),
            config,
            observer: Arc::new(LogObserver),
        })
    }

    /// Replace the observer
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    pub fn tagger(&self) -> &BoundaryTagger {
        &self.tagger
    }

    /// Segment one piece of element content
    pub fn segment(&self, content: &str) -> Vec<Span> {
        if self.config.normalize {
            let normalized: String = content.nfc().collect();
            self.segmenter.segment(&normalized)
        } else {
            self.segmenter.segment(content)
        }
    }

    /// Tag every base-class element, leaving the others as they are.
    ///
    /// The result is the intermediate markup, before merging.
    pub fn tag_document(&self, document: &str) -> Result<String> {
        let elements = parse_elements(document)?;

        let mut base_count = 0;
        let mut out = String::with_capacity(document.len() * 2);
        for element in &elements {
            if element.tag == self.config.tag && element.class == self.config.base_class {
                base_count += 1;
                let spans = self.segment(&element.content);
                self.observer.on_spans(&spans);
                out.push_str(&element.start_tag());
                out.push_str(&self.tagger.tag(&spans));
                out.push_str(&close_tag(&element.tag));
            } else {
                element.write_markup(&mut out);
            }
        }
        log::debug!(
            "tagged {} of {} elements as class {}",
            base_count,
            elements.len(),
            self.config.base_class
        );

        self.observer.on_tagged(&out);
        Ok(out)
    }

    /// Tag and merge a document
    pub fn process(&self, document: &str) -> Result<String> {
        let tagged = self.tag_document(document)?;
        let merged = merge(&tagged)?;
        self.observer.on_merged(&merged);
        Ok(merged)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        let config = Config::default();
        Pipeline {
            segmenter: config.segmenter(),
            tagger: config.tagger(),
            config,
            observer: Arc::new(LogObserver),
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Process a document with the default configuration
pub fn process(document: &str) -> Result<String> {
    Pipeline::default().process(document)
}

//! Python bindings for jpmark-rs using PyO3
//!
//! This module exposes the pipeline and its stages to Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::Config;
use crate::error::Error;
use crate::merger;
use crate::pipeline::Pipeline;
use crate::script;
use crate::segmenter::Span;

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::Io(e) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn span_to_dict<'py>(py: Python<'py>, span: &Span) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("text", &span.text)?;
    dict.set_item("start", span.start)?;
    dict.set_item("len", span.len)?;
    dict.set_item("delimited", span.delimited)?;
    Ok(dict)
}

/// A configured tagging pipeline
#[pyclass(name = "Pipeline")]
pub struct PyPipeline {
    inner: Pipeline,
}

#[pymethods]
impl PyPipeline {
    /// Create a pipeline
    ///
    /// Args:
    ///     base_class: Class of paragraphs to tag (default: "ZHTW")
    ///     foreign_class: Class given to kana spans (default: "JP")
    ///     tag: Element name (default: "p")
    ///     delimiters: Delimiter characters (default: built-in punctuation set)
    ///     config_path: JSON configuration file, overridden by the other arguments
    #[new]
    #[pyo3(signature = (base_class=None, foreign_class=None, tag=None, delimiters=None, config_path=None))]
    fn new(
        base_class: Option<&str>,
        foreign_class: Option<&str>,
        tag: Option<&str>,
        delimiters: Option<&str>,
        config_path: Option<&str>,
    ) -> PyResult<Self> {
        let mut config = match config_path {
            Some(path) => Config::from_json_file(path).map_err(to_py_err)?,
            None => Config::default(),
        };
        if let Some(class) = base_class {
            config.base_class = class.to_string();
        }
        if let Some(class) = foreign_class {
            config.foreign_class = class.to_string();
        }
        if let Some(tag) = tag {
            config.tag = tag.to_string();
        }
        if let Some(chars) = delimiters {
            config.delimiters = Some(chars.to_string());
        }
        let inner = Pipeline::new(config).map_err(to_py_err)?;
        Ok(PyPipeline { inner })
    }

    /// Tag and merge a document
    fn process(&self, document: &str) -> PyResult<String> {
        self.inner.process(document).map_err(to_py_err)
    }

    /// Tag a document without merging
    fn tag_document(&self, document: &str) -> PyResult<String> {
        self.inner.tag_document(document).map_err(to_py_err)
    }

    /// Segment text into spans
    fn segment<'py>(&self, py: Python<'py>, text: &str) -> PyResult<Vec<Bound<'py, PyDict>>> {
        self.inner
            .segment(text)
            .iter()
            .map(|span| span_to_dict(py, span))
            .collect()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Pipeline(tag={:?}, base_class={:?}, foreign_class={:?})",
            config.tag, config.base_class, config.foreign_class
        )
    }
}

/// Tag and merge a document with the default configuration
#[pyfunction]
fn process(document: &str) -> PyResult<String> {
    crate::pipeline::process(document).map_err(to_py_err)
}

/// Merge adjacent same-class elements and drop empty ones
#[pyfunction]
fn merge(markup: &str) -> PyResult<String> {
    merger::merge(markup).map_err(to_py_err)
}

/// Check whether text contains hiragana or katakana
#[pyfunction]
fn is_foreign_script(text: &str) -> bool {
    script::is_foreign_script(text)
}

/// Create the Python module
#[pymodule]
fn jpmark_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPipeline>()?;
    m.add_function(wrap_pyfunction!(process, m)?)?;
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    m.add_function(wrap_pyfunction!(is_foreign_script, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

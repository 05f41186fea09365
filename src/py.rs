//! Python bindings using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::engine::Engine;
use crate::intent::resolve_intent;
use crate::matcher::matches;
use crate::normalize::normalize;
use crate::random::RngSource;
use crate::templates::ResponseTemplates;
use crate::types::Payload;

fn to_py_err(e: crate::error::Error) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Normalize text (Python function)
#[pyfunction]
#[pyo3(name = "normalize")]
pub fn py_normalize(text: &str) -> String {
    normalize(text)
}

/// Whether raw text fuzzily contains any of the keywords
#[pyfunction]
#[pyo3(name = "fuzzy_match")]
pub fn py_fuzzy_match(text: &str, keywords: Vec<String>) -> bool {
    matches(&normalize(text), &keywords)
}

/// Resolve the intent of raw text as `{intent, kind, genre}`
#[pyfunction]
#[pyo3(name = "resolve_intent")]
pub fn py_resolve_intent<'py>(py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyDict>> {
    let resolution = resolve_intent(&normalize(text));
    let recommendation = resolution.recommendation;

    let dict = PyDict::new_bound(py);
    dict.set_item("intent", resolution.intent.as_str())?;
    dict.set_item("kind", recommendation.map(|r| r.kind.as_str()))?;
    dict.set_item(
        "genre",
        recommendation.and_then(|r| r.genre).map(|g| g.as_str()),
    )?;
    Ok(dict)
}

/// Python wrapper holding a template store
#[pyclass(name = "Responder")]
pub struct PyResponder {
    templates: ResponseTemplates,
}

#[pymethods]
impl PyResponder {
    /// Built-in templates unless a JSON template store is given
    #[new]
    #[pyo3(signature = (responses_json=None))]
    fn new(responses_json: Option<&str>) -> PyResult<Self> {
        let templates = match responses_json {
            Some(raw) => ResponseTemplates::from_json(raw).map_err(to_py_err)?,
            None => ResponseTemplates::builtin().clone(),
        };
        Ok(Self { templates })
    }

    /// Reply to a JSON payload; unparseable payloads count as empty
    fn respond(&self, payload_json: &str) -> String {
        let payload = Payload::from_json(payload_json).unwrap_or_default();
        Engine::new(&self.templates).respond(&payload, &mut RngSource::thread())
    }
}

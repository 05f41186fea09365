//! Canned chat core - intent classification and templated replies
//!
//! Normalizes a user utterance, resolves it against an ordered keyword
//! ladder with typo-tolerant matching, and composes a reply from a canned
//! template store or from supplied catalog items.

pub mod types;
pub mod error;
pub mod normalize;
pub mod similarity;
pub mod matcher;
pub mod entities;
pub mod intent;
pub mod random;
pub mod templates;
pub mod compose;
pub mod query;
pub mod catalog;
pub mod engine;
pub mod config;

pub use types::*;
pub use error::{Error, Result};
pub use normalize::*;
pub use similarity::*;
pub use matcher::*;
pub use entities::*;
pub use intent::*;
pub use random::*;
pub use templates::*;
pub use compose::*;
pub use query::*;
pub use catalog::*;
pub use engine::*;
pub use config::*;

// Python bindings
#[cfg(feature = "python")]
pub mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn canned_chat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyResponder>()?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(py_fuzzy_match, m)?)?;
    m.add_function(wrap_pyfunction!(py_resolve_intent, m)?)?;
    Ok(())
}

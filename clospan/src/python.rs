use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{threshold_from_raw, MinerConfig};
use crate::error::MiningError;
use crate::ingest::load_database;
use crate::seq::{mine, SequenceDatabase};

fn value_error(err: MiningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn mine_sorted(db: &SequenceDatabase, min_support: i64) -> PyResult<Vec<(Vec<String>, usize)>> {
    let min_support = threshold_from_raw(min_support).map_err(value_error)?;
    let outcome = mine(db, &MinerConfig::new(min_support));

    Ok(outcome
        .patterns
        .sorted_for_display(db)
        .into_iter()
        .map(|record| (record.pattern, record.support))
        .collect())
}

/// Mine closed patterns from `list[list[list[str]]]` (sequences of itemsets).
#[pyfunction]
#[pyo3(name = "mine")]
fn mine_py(sequences: Vec<Vec<Vec<String>>>, min_support: i64) -> PyResult<Vec<(Vec<String>, usize)>> {
    let db = SequenceDatabase::from_sequences(sequences);
    if db.is_empty() {
        return Err(value_error(MiningError::EmptyInput));
    }
    mine_sorted(&db, min_support)
}

/// Mine closed patterns from comma-separated lines of text.
#[pyfunction]
#[pyo3(name = "mine_text")]
fn mine_text_py(text: &str, min_support: i64) -> PyResult<Vec<(Vec<String>, usize)>> {
    let db = load_database(text, false).map_err(value_error)?;
    mine_sorted(&db, min_support)
}

#[pymodule]
fn clospan(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_py, m)?)?;
    m.add_function(wrap_pyfunction!(mine_text_py, m)?)?;
    Ok(())
}

use crate::config::MiningConfig;
use crate::fp::{FpGrowth, group_by_level, transactions_from_matrix};
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn growth_from_matrix(
    transactions: PyReadonlyArray2<'_, i32>,
    config: &MiningConfig,
) -> PyResult<FpGrowth> {
    let transactions = transactions_from_matrix(transactions.as_array());
    FpGrowth::new(&transactions, config).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Frequent itemsets per size as `(itemsets, supports)` pairs.
#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<(Bound<'py, PyArray2<u32>>, Bound<'py, PyArray1<usize>>)>> {
    let growth = growth_from_matrix(transactions, &MiningConfig::new(min_support, 0.0))?;
    let itemsets = growth
        .frequent_itemsets()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    let levels = group_by_level(&itemsets, growth.tree())
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;

    let mut result = Vec::new();
    for level in levels.iter().filter(|level| !level.is_empty()) {
        let array = Array2::from_shape_vec(
            (level.len(), level.itemset_size),
            level.flat_items().to_vec(),
        )
        .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        let supports = level.supports().to_vec().into_pyarray(py);
        result.push((array.into_pyarray(py), supports));
    }

    Ok(result)
}

#[pyfunction]
#[pyo3(name = "association_rules")]
fn association_rules_py(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<Vec<(Vec<u32>, Vec<u32>, usize, f64)>> {
    let growth = growth_from_matrix(transactions, &MiningConfig::new(min_support, min_confidence))?;
    let to_py_err = |e: crate::error::MiningError| PyRuntimeError::new_err(e.to_string());

    let itemsets = growth.frequent_itemsets().map_err(to_py_err)?;
    let rules = growth
        .association_rules(&itemsets, min_confidence)
        .map_err(to_py_err)?;

    rules
        .into_iter()
        .map(|rule| {
            let support = rule.support(growth.tree()).map_err(to_py_err)?;
            let confidence = rule.confidence(growth.tree()).map_err(to_py_err)?;
            Ok((
                rule.antecedent.into_iter().collect(),
                rule.consequent.into_iter().collect(),
                support,
                confidence,
            ))
        })
        .collect()
}

#[pymodule]
fn fprules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules_py, m)?)?;
    Ok(())
}

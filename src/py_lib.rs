use crate::{
    errors::FlareRankErr,
    magnitude::compute_magnitude,
    rank::{rank, RankPolicy},
};
use pyo3::{exceptions, prelude::*, wrap_pyfunction};

/// Magnitude of a GOES class string on the combined scale, e.g. 33.2 for "M3.2".
#[pyfunction]
fn magnitude(goes_class: &str) -> PyResult<f64> {
    Ok(compute_magnitude(goes_class)?.value())
}

/// Peak X-ray flux in W/m^2 for a GOES class string.
#[pyfunction]
fn peak_flux(goes_class: &str) -> PyResult<f64> {
    Ok(compute_magnitude(goes_class)?.peak_flux())
}

/// Sort GOES class strings, most intense first.
///
/// With lenient set, unreadable classes are listed last instead of raising.
#[pyfunction]
fn rank_classes(classes: Vec<String>, lenient: bool) -> PyResult<Vec<String>> {
    let policy = if lenient {
        RankPolicy::Lenient
    } else {
        RankPolicy::Strict
    };

    rank(classes, policy).map_err(Into::into)
}

/// Rank GOES solar flare classes by magnitude.
#[pymodule]
fn goes_flare_rank(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_wrapped(wrap_pyfunction!(magnitude))?;
    m.add_wrapped(wrap_pyfunction!(peak_flux))?;
    m.add_wrapped(wrap_pyfunction!(rank_classes))?;

    Ok(())
}

impl std::convert::From<FlareRankErr> for PyErr {
    fn from(err: FlareRankErr) -> PyErr {
        PyErr::new::<exceptions::PyValueError, _>(err.to_string())
    }
}

use ndarray::Array1;

/// Returns `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// Computed as `start + (end − start)·i/(n − 1)` so both endpoints are
/// reproduced exactly whenever `start + (end − start) == end`.
#[allow(clippy::cast_precision_loss)]
pub(super) fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    debug_assert!(n >= 2, "linspace needs at least two points");
    let last = (n - 1) as f64;
    Array1::from_shape_fn(n, |i| start + (end - start) * (i as f64 / last))
}

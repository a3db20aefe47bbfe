/// A boxcar (rectangular) window. This is the same as no window at all.
///
/// `sym` has no effect. Unlike every other family, there is no special handling of small or periodic lengths.
pub fn boxcar(m: usize, _sym: bool) -> Vec<f64> {
    vec![1.0; m]
}

/// Round to two decimal places, the precision used for every
/// user-facing score in the pipeline.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

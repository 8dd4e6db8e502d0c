#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

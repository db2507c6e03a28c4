/// Numeric rounding helpers.
///
/// Floor-based division and remainder used by `//` and `%`, for integers and
/// floats. Division by zero and overflow are reported through `Option`
/// instead of panicking.
pub mod num;

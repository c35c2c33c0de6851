/// One uniform draw per call, in [0, 1).
///
/// Supplied per invocation so concurrent requests never contend on a shared
/// generator and tests can replay fixed sequences.
pub trait RandomSource: Send {
    fn draw(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64 + Send,
{
    fn draw(&mut self) -> f64 {
        self()
    }
}

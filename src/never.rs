/// Rust's `!` is unstable.  This empty enum is a locally-defined equivalent which is stable.
///
/// The firmware's `inner_main` returns `Result<Never>`: it can only come back with an error.
#[derive(Debug)]
pub enum Never {}

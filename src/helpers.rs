//! Small helpers shared by the library, the binaries and the tests.

pub mod env;
pub mod error;

//! Citation graph construction.

mod builder;

pub use builder::{BuildOutput, GraphBuilder};

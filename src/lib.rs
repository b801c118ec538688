pub mod application;
pub mod domain;
pub mod infra;
pub mod prompts;
pub mod render;
pub mod ui;

use std::future::Future;
use tokio::runtime::Runtime;

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

/// Shared Tokio runtime for the refinement and export tasks.
pub fn runtime() -> &'static Runtime {
    &RUNTIME
}

pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}

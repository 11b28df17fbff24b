//! Library side of the `onco` CLI: logging setup, evaluation and rendering.

pub mod evaluation;
pub mod logging;
pub mod render;

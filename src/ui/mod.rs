// src/ui/mod.rs

// Terminal presentation: a live progress gauge while scanning and a colored
// listing of the findings afterwards.
mod widgets;

pub use widgets::findings::{render_findings, render_summary};
pub use widgets::progress::{progress_gauge, ProgressView};

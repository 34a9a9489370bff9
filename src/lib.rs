// src/lib.rs

//! Concurrent scanner for DOM clobbering indicators.
//!
//! The engine in [`core`] fetches each target, looks for risky DOM sinks in its
//! inline scripts, probes it with a fixed catalog of clobbering payloads and
//! merges everything into one result per target. The remaining modules are the
//! command line surface around it.

pub mod app;
pub mod core;
pub mod export;
pub mod logging;
pub mod ui;

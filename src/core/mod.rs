// src/core/mod.rs

// The detection engine. Everything below is independent of the terminal and
// of how targets were loaded.

/// Scan settings and output switches.
pub mod config;

/// Payload catalog and risky-sink table used by the detectors.
pub mod knowledge_base;

/// Data structures shared by the engine and its consumers, such as
/// `Evidence`, `TargetResult` and `ScanReport`.
pub mod models;

/// Formatting of proof and PoC strings.
pub mod poc;

/// The fetch, analyze, probe and aggregate stages plus the orchestrator
/// that runs them across all targets.
pub mod scanner;

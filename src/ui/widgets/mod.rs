// src/ui/widgets/mod.rs

pub mod findings; // Colored listing of vulnerable targets.
pub mod progress; // Inline gauge shown while the scan runs.

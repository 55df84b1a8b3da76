// Application layer: drives the registry for the CLI and renders results.

#[cfg(feature = "cli")]
pub mod commands;
pub mod report;

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::memory::InMemoryCenterStore;
pub use crate::config::seed_config::SeedConfig;
pub use crate::core::registry::VaccineRegistry;
pub use crate::core::search::SearchEngine;
pub use crate::domain::model::{
    CostType, DoseType, Location, SearchRequest, SearchResponse, VaccineAvailability,
    VaccineCenter, VaccineType,
};
pub use crate::utils::error::{ErrorKind, RegistryError, Result};

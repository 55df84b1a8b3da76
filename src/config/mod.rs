#[cfg(feature = "cli")]
pub mod cli;
pub mod seed_config;

use crate::core::{DoseType, SearchRequest, VaccineType};
use crate::utils::error::{RegistryError, Result};

/// Parses `VACCINE:DOSE` into a search request.
pub fn parse_search_request(raw: &str) -> Result<SearchRequest> {
    let parts = raw
        .split_once(':')
        .map(|(vaccine, dose)| (vaccine.trim(), dose.trim()));
    match parts {
        Some((vaccine, dose)) if !vaccine.is_empty() && !dose.is_empty() => Ok(SearchRequest::new(
            VaccineType::from(vaccine),
            DoseType::from(dose),
        )),
        _ => Err(RegistryError::InvalidConfigValueError {
            field: "request".to_string(),
            value: raw.to_string(),
            reason: "Expected VACCINE:DOSE".to_string(),
        }),
    }
}

use crate::app::report;
use crate::config::cli::{Command, OutputFormat};
use crate::config::parse_search_request;
use crate::core::registry::VaccineRegistry;
use crate::core::{DoseType, VaccineType};
use crate::utils::error::{RegistryError, Result};

/// Runs one CLI command against the registry and renders its output.
pub fn execute(registry: &mut VaccineRegistry, command: &Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::Show { center } => render_center(registry, center, format),
        Command::Search { vaccine, dose } => {
            let vaccine_type = VaccineType::from(vaccine.as_str());
            let dose_type = DoseType::from(dose.as_str());
            let response = registry.search(Some(&vaccine_type), Some(&dose_type));
            tracing::info!("🔍 {} centers offer {}/{}", response.total_count, vaccine_type, dose_type);
            match format {
                OutputFormat::Json => report::response_to_json(&response),
                OutputFormat::Csv => report::response_to_csv(&response),
            }
        }
        Command::MultiSearch { requests } => {
            let requests = requests
                .iter()
                .map(|raw| parse_search_request(raw))
                .collect::<Result<Vec<_>>>()?;
            let response = registry.multi_search(&requests);
            tracing::info!(
                "🔍 {} entries across {} searches",
                response.total_count,
                requests.len()
            );
            match format {
                OutputFormat::Json => report::response_to_json(&response),
                OutputFormat::Csv => report::response_to_csv(&response),
            }
        }
        Command::Book {
            center,
            vaccine,
            dose,
        } => {
            registry.book_vaccine_slot(
                center,
                &VaccineType::from(vaccine.as_str()),
                &DoseType::from(dose.as_str()),
            )?;
            tracing::info!("✅ Booked {}/{} at {}", vaccine, dose, center);
            render_center(registry, center, format)
        }
    }
}

fn render_center(registry: &VaccineRegistry, center_id: &str, format: OutputFormat) -> Result<String> {
    let center = registry
        .get(center_id)
        .ok_or_else(|| RegistryError::CenterNotFound {
            center_id: center_id.to_string(),
        })?;
    match format {
        OutputFormat::Json => report::center_to_json(center),
        OutputFormat::Csv => report::center_to_csv(center),
    }
}

use crate::core::registry::VaccineRegistry;
use crate::core::VaccineCenter;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_unique_ids, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Centers to register at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub registry: RegistryInfo,
    #[serde(default)]
    pub centers: Vec<VaccineCenter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SeedConfig {
    /// 從檔案載入：副檔名為 .json 時用 JSON，其餘一律視為 TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        validate_path("seed", &path.to_string_lossy())?;

        let content = std::fs::read_to_string(path).map_err(RegistryError::IoError)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(serde_json::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CENTER_NAME})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn registry_name(&self) -> &str {
        self.registry.name.as_deref().unwrap_or("vaccine-registry")
    }

    /// Validates the seed and registers every center in file order.
    pub fn into_registry(self) -> Result<VaccineRegistry> {
        self.validate()?;

        let mut registry = VaccineRegistry::new();
        for center in self.centers {
            registry.add(center)?;
        }
        tracing::info!("Loaded {} vaccine centers", registry.len());
        Ok(registry)
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        for (i, center) in self.centers.iter().enumerate() {
            validate_non_empty_string(&format!("centers[{}].id", i), &center.id)?;

            for (j, availability) in center.vaccine_availabilities.iter().enumerate() {
                validate_non_empty_string(
                    &format!("centers[{}].vaccine_availabilities[{}].id", i, j),
                    &availability.id,
                )?;
            }
            validate_unique_ids(
                &format!("centers[{}].vaccine_availabilities", i),
                center
                    .vaccine_availabilities
                    .iter()
                    .map(|availability| availability.id.as_str()),
            )?;
        }
        Ok(())
    }
}

//! Integration tests for loading seed files into a registry

use std::io::Write;
use tempfile::{Builder, NamedTempFile};
use vaccine_registry::utils::validation::Validate;
use vaccine_registry::{DoseType, ErrorKind, SeedConfig, VaccineType};

const TOML_SEED: &str = r#"
[registry]
name = "kolhapur-district"

[[centers]]
id = "c1"
name = "Civil Hospital"
vaccine_types = ["COVAXIN"]
dose_types = ["FIRST_DOSE"]
cost_types = ["FREE"]

[centers.location]
street = "vikramnagar"
district = "kolhapur"
state = "maharashtra"
pin_code = 416115

[[centers.vaccine_availabilities]]
id = "1"
vaccine_type = "COVAXIN"
dose_type = "FIRST_DOSE"
available_quantity_count = 10
booked_quantity_count = 0

[[centers]]
id = "c2"
name = "Rural Clinic"
vaccine_types = ["COVISHIELD"]
dose_types = ["SECOND_DOSE"]
cost_types = ["PAID"]

[[centers.vaccine_availabilities]]
id = "1"
vaccine_type = "COVISHIELD"
dose_type = "SECOND_DOSE"
available_quantity_count = 1
"#;

#[test]
fn test_load_toml_seed_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(TOML_SEED.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = SeedConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.registry_name(), "kolhapur-district");
    assert!(config.validate().is_ok());

    let mut registry = config.into_registry().unwrap();
    assert_eq!(registry.len(), 2);

    let response = registry.search(Some(&VaccineType::Covishield), Some(&DoseType::SecondDose));
    assert_eq!(response.total_count, 1);
    assert_eq!(response.results[0].id, "c2");

    registry
        .book_vaccine_slot("c2", &VaccineType::Covishield, &DoseType::SecondDose)
        .unwrap();
    assert!(registry
        .book_vaccine_slot("c2", &VaccineType::Covishield, &DoseType::SecondDose)
        .is_err());
}

#[test]
fn test_load_json_seed_from_file() {
    let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
    let seed = serde_json::json!({
        "centers": [{
            "id": "c1",
            "name": "Civil Hospital",
            "vaccine_types": ["COVAXIN", "SPUTNIK"],
            "vaccine_availabilities": [{
                "id": "1",
                "vaccine_type": "SPUTNIK",
                "dose_type": "FIRST_DOSE",
                "available_quantity_count": 3,
                "booked_quantity_count": 0
            }]
        }]
    });
    temp_file.write_all(seed.to_string().as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = SeedConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(config.registry_name(), "vaccine-registry");
    assert_eq!(
        config.centers[0].vaccine_types,
        vec![VaccineType::Covaxin, VaccineType::Other("SPUTNIK".to_string())]
    );

    let registry = config.into_registry().unwrap();
    let response = registry.search(
        Some(&VaccineType::from("SPUTNIK")),
        Some(&DoseType::FirstDose),
    );
    assert_eq!(response.total_count, 1);
}

#[test]
fn test_duplicate_center_in_seed_fails_to_load() {
    let seed = r#"
[[centers]]
id = "c1"
name = "first"

[[centers]]
id = "c1"
name = "second"
"#;
    let err = SeedConfig::from_toml_str(seed)
        .unwrap()
        .into_registry()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Duplicate);
}

#[test]
fn test_duplicate_availability_in_seed_fails_validation() {
    let seed = r#"
[[centers]]
id = "c1"
name = "first"

[[centers.vaccine_availabilities]]
id = "1"

[[centers.vaccine_availabilities]]
id = "1"
"#;
    let config = SeedConfig::from_toml_str(seed).unwrap();
    let err = config.validate().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_missing_seed_file() {
    let err = SeedConfig::from_file("/nonexistent/centers.toml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_malformed_toml_is_a_config_error() {
    let err = SeedConfig::from_toml_str("[[centers]\nid = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

use crate::core::{SearchResponse, VaccineCenter};
use crate::utils::error::{RegistryError, Result};

const CSV_HEADER: [&str; 7] = [
    "center_id",
    "name",
    "street",
    "district",
    "state",
    "pin_code",
    "available_total",
];

pub fn response_to_json(response: &SearchResponse<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

pub fn center_to_json(center: &VaccineCenter) -> Result<String> {
    Ok(serde_json::to_string_pretty(center)?)
}

/// One row per result entry; centers listed twice in the response are written twice.
pub fn response_to_csv(response: &SearchResponse<'_>) -> Result<String> {
    centers_to_csv(response.results.iter().copied())
}

pub fn center_to_csv(center: &VaccineCenter) -> Result<String> {
    centers_to_csv(std::iter::once(center))
}

fn centers_to_csv<'a, I>(centers: I) -> Result<String>
where
    I: IntoIterator<Item = &'a VaccineCenter>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for center in centers {
        let location = center.location.clone().unwrap_or_default();
        writer.write_record([
            center.id.clone(),
            center.name.clone(),
            location.street,
            location.district,
            location.state,
            location.pin_code.to_string(),
            center.available_total().to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| RegistryError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| RegistryError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DoseType, Location, VaccineAvailability, VaccineType};

    fn center() -> VaccineCenter {
        VaccineCenter {
            id: "c1".to_string(),
            name: "Civil Hospital".to_string(),
            location: Some(Location::new("vikramnagar", "kolhapur", "maharashtra", 416115)),
            vaccine_availabilities: vec![
                VaccineAvailability::new("1", VaccineType::Covaxin, DoseType::FirstDose, 10, 0),
                VaccineAvailability::new("2", VaccineType::Covishield, DoseType::FirstDose, 5, 1),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_response_to_csv_keeps_duplicates() {
        let center = center();
        let response = SearchResponse::from_results(vec![&center, &center]);

        let csv_output = response_to_csv(&response).unwrap();
        let lines: Vec<&str> = csv_output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "center_id,name,street,district,state,pin_code,available_total"
        );
        assert_eq!(
            lines[1],
            "c1,Civil Hospital,vikramnagar,kolhapur,maharashtra,416115,15"
        );
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn test_response_to_json() {
        let center = center();
        let response = SearchResponse::from_results(vec![&center]);

        let json: serde_json::Value =
            serde_json::from_str(&response_to_json(&response).unwrap()).unwrap();
        assert_eq!(json["total_count"], 1);
        assert_eq!(json["results"][0]["id"], "c1");
        assert_eq!(
            json["results"][0]["vaccine_availabilities"][0]["vaccine_type"],
            "COVAXIN"
        );
    }
}

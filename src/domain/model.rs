use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a string-valued enumeration with a fixed set of known members and an
/// `Other` catch-all, so unknown values are carried through instead of rejected.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($value => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Vaccine brand administered at a center.
    VaccineType {
        Covaxin => "COVAXIN",
        Covishield => "COVISHIELD",
    }
);

string_enum!(
    DoseType {
        FirstDose => "FIRST_DOSE",
        SecondDose => "SECOND_DOSE",
    }
);

string_enum!(
    CostType {
        Free => "FREE",
        Paid => "PAID",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: String,
    pub district: String,
    pub state: String,
    pub pin_code: u32,
}

impl Location {
    pub fn new(street: &str, district: &str, state: &str, pin_code: u32) -> Self {
        Self {
            street: street.to_string(),
            district: district.to_string(),
            state: state.to_string(),
            pin_code,
        }
    }
}

/// Remaining and booked slot counts for one vaccine/dose pair at a center.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineAvailability {
    #[serde(default)]
    pub id: String,
    pub vaccine_type: Option<VaccineType>,
    pub dose_type: Option<DoseType>,
    #[serde(default)]
    pub available_quantity_count: u32,
    #[serde(default)]
    pub booked_quantity_count: u32,
}

impl VaccineAvailability {
    pub fn new(
        id: &str,
        vaccine_type: VaccineType,
        dose_type: DoseType,
        available_quantity_count: u32,
        booked_quantity_count: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            vaccine_type: Some(vaccine_type),
            dose_type: Some(dose_type),
            available_quantity_count,
            booked_quantity_count,
        }
    }

    /// An absent criterion never matches, even against an absent field.
    pub fn matches(&self, vaccine_type: Option<&VaccineType>, dose_type: Option<&DoseType>) -> bool {
        match (vaccine_type, dose_type) {
            (Some(vaccine), Some(dose)) => {
                self.vaccine_type.as_ref() == Some(vaccine) && self.dose_type.as_ref() == Some(dose)
            }
            _ => false,
        }
    }

    /// Stock left and room to record one more booking.
    pub fn is_bookable(&self) -> bool {
        self.available_quantity_count > 0 && self.booked_quantity_count < u32::MAX
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineCenter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub vaccine_types: Vec<VaccineType>,
    #[serde(default)]
    pub dose_types: Vec<DoseType>,
    #[serde(default)]
    pub cost_types: Vec<CostType>,
    #[serde(default)]
    pub vaccine_availabilities: Vec<VaccineAvailability>,
}

impl VaccineCenter {
    pub fn new(
        id: &str,
        name: &str,
        location: Location,
        vaccine_types: Vec<VaccineType>,
        dose_types: Vec<DoseType>,
        cost_types: Vec<CostType>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            location: Some(location),
            vaccine_types,
            dose_types,
            cost_types,
            vaccine_availabilities: Vec::new(),
        }
    }

    /// True when no field carries a value at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.name.is_empty()
            && self.location.is_none()
            && self.vaccine_types.is_empty()
            && self.dose_types.is_empty()
            && self.cost_types.is_empty()
            && self.vaccine_availabilities.is_empty()
    }

    pub fn availability_position(&self, availability_id: &str) -> Option<usize> {
        self.vaccine_availabilities
            .iter()
            .position(|availability| availability.id == availability_id)
    }

    pub fn find_availability(&self, availability_id: &str) -> Option<&VaccineAvailability> {
        self.availability_position(availability_id)
            .map(|index| &self.vaccine_availabilities[index])
    }

    /// Whether any availability entry carries the vaccine/dose pair, regardless of stock.
    pub fn offers(&self, vaccine_type: Option<&VaccineType>, dose_type: Option<&DoseType>) -> bool {
        self.vaccine_availabilities
            .iter()
            .any(|availability| availability.matches(vaccine_type, dose_type))
    }

    pub fn available_total(&self) -> u64 {
        self.vaccine_availabilities
            .iter()
            .map(|availability| u64::from(availability.available_quantity_count))
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub vaccine_type: Option<VaccineType>,
    pub dose_type: Option<DoseType>,
}

impl SearchRequest {
    pub fn new(vaccine_type: VaccineType, dose_type: DoseType) -> Self {
        Self {
            vaccine_type: Some(vaccine_type),
            dose_type: Some(dose_type),
        }
    }
}

/// Centers matching a query. Borrows from the registry it was produced by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse<'a> {
    pub total_count: usize,
    pub results: Vec<&'a VaccineCenter>,
}

impl<'a> SearchResponse<'a> {
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            results: Vec::new(),
        }
    }

    pub fn from_results(results: Vec<&'a VaccineCenter>) -> Self {
        Self {
            total_count: results.len(),
            results,
        }
    }

    /// Appends another response, keeping repeated centers.
    pub fn concat(mut self, other: SearchResponse<'a>) -> Self {
        self.results.extend(other.results);
        self.total_count = self.results.len();
        self
    }
}

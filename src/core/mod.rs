pub mod registry;
pub mod search;

pub use crate::domain::model::{
    CostType, DoseType, Location, SearchRequest, SearchResponse, VaccineAvailability,
    VaccineCenter, VaccineType,
};
pub use crate::domain::ports::CenterStore;
pub use crate::utils::error::Result;

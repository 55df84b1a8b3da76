use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Vaccine center has no fields set")]
    EmptyCenter,

    #[error("Vaccine center already registered: {center_id}")]
    DuplicateCenter { center_id: String },

    #[error("Vaccine center not found: {center_id}")]
    CenterNotFound { center_id: String },

    #[error("Availability {availability_id} already exists in center {center_id}")]
    DuplicateAvailability {
        center_id: String,
        availability_id: String,
    },

    #[error("Availability {availability_id} not found in center {center_id}")]
    AvailabilityNotFound {
        center_id: String,
        availability_id: String,
    },

    #[error("No bookable {vaccine_type}/{dose_type} slot in center {center_id}")]
    NoSlotAvailable {
        center_id: String,
        vaccine_type: String,
        dose_type: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse reason code for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Duplicate,
    InvalidInput,
    Config,
    Io,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::CenterNotFound { .. }
            | RegistryError::AvailabilityNotFound { .. }
            | RegistryError::NoSlotAvailable { .. } => ErrorKind::NotFound,
            RegistryError::DuplicateCenter { .. } | RegistryError::DuplicateAvailability { .. } => {
                ErrorKind::Duplicate
            }
            RegistryError::EmptyCenter => ErrorKind::InvalidInput,
            RegistryError::SerializationError(_)
            | RegistryError::TomlError(_)
            | RegistryError::ConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. } => ErrorKind::Config,
            RegistryError::IoError(_) | RegistryError::CsvError(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

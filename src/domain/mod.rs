// Domain layer: entity model and the store port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;

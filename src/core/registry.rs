use crate::adapters::memory::InMemoryCenterStore;
use crate::core::search::SearchEngine;
use crate::core::{
    CenterStore, DoseType, SearchRequest, SearchResponse, VaccineAvailability, VaccineCenter,
    VaccineType,
};
use crate::utils::error::{RegistryError, Result};

/// Owns every registered vaccine center and their availability records.
///
/// Every failed operation returns an error and leaves state untouched.
#[derive(Debug, Clone, Default)]
pub struct VaccineRegistry<S: CenterStore = InMemoryCenterStore> {
    store: S,
}

impl VaccineRegistry<InMemoryCenterStore> {
    pub fn new() -> Self {
        Self::with_store(InMemoryCenterStore::new())
    }
}

impl<S: CenterStore> VaccineRegistry<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn get(&self, id: &str) -> Option<&VaccineCenter> {
        self.store.find(id)
    }

    pub fn centers(&self) -> &[VaccineCenter] {
        self.store.centers()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn add(&mut self, center: VaccineCenter) -> Result<()> {
        if center.is_empty() {
            tracing::warn!("Rejected empty vaccine center");
            return Err(RegistryError::EmptyCenter);
        }
        if self.get(&center.id).is_some() {
            tracing::warn!("Rejected duplicate vaccine center {}", center.id);
            return Err(RegistryError::DuplicateCenter {
                center_id: center.id,
            });
        }

        tracing::debug!("Registering vaccine center {} ({})", center.id, center.name);
        self.store.insert(center);
        Ok(())
    }

    pub fn add_availability(
        &mut self,
        center_id: &str,
        availability: VaccineAvailability,
    ) -> Result<()> {
        let center = self.center_mut(center_id)?;
        if center.availability_position(&availability.id).is_some() {
            tracing::warn!(
                "Availability {} already exists in center {}",
                availability.id,
                center_id
            );
            return Err(RegistryError::DuplicateAvailability {
                center_id: center_id.to_string(),
                availability_id: availability.id,
            });
        }

        tracing::debug!("Adding availability {} to center {}", availability.id, center_id);
        center.vaccine_availabilities.push(availability);
        Ok(())
    }

    /// Replaces the entry sharing `availability.id` wholesale, keeping its position.
    pub fn update_availability(
        &mut self,
        center_id: &str,
        availability: VaccineAvailability,
    ) -> Result<()> {
        let center = self.center_mut(center_id)?;
        let position = Self::position_of(center, &availability.id)?;

        tracing::debug!("Updating availability {} in center {}", availability.id, center_id);
        center.vaccine_availabilities[position] = availability;
        Ok(())
    }

    /// Only `availability.id` is used for the lookup.
    pub fn remove_availability(
        &mut self,
        center_id: &str,
        availability: &VaccineAvailability,
    ) -> Result<()> {
        let center = self.center_mut(center_id)?;
        let position = Self::position_of(center, &availability.id)?;

        tracing::debug!("Removing availability {} from center {}", availability.id, center_id);
        center.vaccine_availabilities.remove(position);
        Ok(())
    }

    /// Books one unit from the first entry matching both types that still has stock.
    pub fn book_vaccine_slot(
        &mut self,
        center_id: &str,
        vaccine_type: &VaccineType,
        dose_type: &DoseType,
    ) -> Result<()> {
        let center = self.center_mut(center_id)?;
        let slot = center
            .vaccine_availabilities
            .iter_mut()
            .find(|availability| {
                availability.matches(Some(vaccine_type), Some(dose_type)) && availability.is_bookable()
            })
            .ok_or_else(|| {
                tracing::warn!(
                    "No bookable {}/{} slot in center {}",
                    vaccine_type,
                    dose_type,
                    center_id
                );
                RegistryError::NoSlotAvailable {
                    center_id: center_id.to_string(),
                    vaccine_type: vaccine_type.to_string(),
                    dose_type: dose_type.to_string(),
                }
            })?;

        slot.booked_quantity_count += 1;
        slot.available_quantity_count -= 1;
        tracing::debug!(
            "Booked {}/{} slot from availability {} in center {} ({} left)",
            vaccine_type,
            dose_type,
            slot.id,
            center_id,
            slot.available_quantity_count
        );
        Ok(())
    }

    pub fn search(
        &self,
        vaccine_type: Option<&VaccineType>,
        dose_type: Option<&DoseType>,
    ) -> SearchResponse<'_> {
        SearchEngine::new(self).search(vaccine_type, dose_type)
    }

    pub fn multi_search(&self, requests: &[SearchRequest]) -> SearchResponse<'_> {
        SearchEngine::new(self).multi_search(requests)
    }

    fn center_mut(&mut self, center_id: &str) -> Result<&mut VaccineCenter> {
        self.store.find_mut(center_id).ok_or_else(|| {
            tracing::warn!("Vaccine center {} not found", center_id);
            RegistryError::CenterNotFound {
                center_id: center_id.to_string(),
            }
        })
    }

    fn position_of(center: &VaccineCenter, availability_id: &str) -> Result<usize> {
        center.availability_position(availability_id).ok_or_else(|| {
            tracing::warn!(
                "Availability {} not found in center {}",
                availability_id,
                center.id
            );
            RegistryError::AvailabilityNotFound {
                center_id: center.id.clone(),
                availability_id: availability_id.to_string(),
            }
        })
    }
}

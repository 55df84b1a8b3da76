use crate::core::registry::VaccineRegistry;
use crate::core::{CenterStore, DoseType, SearchRequest, SearchResponse, VaccineType};

/// Read-only queries over a registry.
pub struct SearchEngine<'a, S: CenterStore> {
    registry: &'a VaccineRegistry<S>,
}

impl<'a, S: CenterStore> SearchEngine<'a, S> {
    pub fn new(registry: &'a VaccineRegistry<S>) -> Self {
        Self { registry }
    }

    /// Centers with at least one availability entry matching both criteria, in
    /// registration order. A missing criterion matches nothing.
    pub fn search(
        &self,
        vaccine_type: Option<&VaccineType>,
        dose_type: Option<&DoseType>,
    ) -> SearchResponse<'a> {
        let results = self
            .registry
            .centers()
            .iter()
            .filter(|center| center.offers(vaccine_type, dose_type))
            .collect::<Vec<_>>();

        tracing::debug!(
            "Search {:?}/{:?} matched {} centers",
            vaccine_type.map(VaccineType::as_str),
            dose_type.map(DoseType::as_str),
            results.len()
        );
        SearchResponse::from_results(results)
    }

    /// Runs each request in order and concatenates the results. A center matching
    /// several requests is listed once per request.
    pub fn multi_search(&self, requests: &[SearchRequest]) -> SearchResponse<'a> {
        let response = requests
            .iter()
            .map(|request| self.search(request.vaccine_type.as_ref(), request.dose_type.as_ref()))
            .fold(SearchResponse::empty(), SearchResponse::concat);

        tracing::debug!(
            "Multi search over {} requests matched {} entries",
            requests.len(),
            response.total_count
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{VaccineAvailability, VaccineCenter};

    fn center_with(id: &str, vaccine: VaccineType, dose: DoseType) -> VaccineCenter {
        VaccineCenter {
            id: id.to_string(),
            name: id.to_string(),
            vaccine_availabilities: vec![VaccineAvailability::new("1", vaccine, dose, 1, 0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_search_borrows_live_centers() {
        let mut registry = VaccineRegistry::new();
        registry
            .add(center_with("c1", VaccineType::Covaxin, DoseType::FirstDose))
            .unwrap();

        let engine = SearchEngine::new(&registry);
        let response = engine.search(Some(&VaccineType::Covaxin), Some(&DoseType::FirstDose));
        assert_eq!(response.total_count, 1);
        assert!(std::ptr::eq(response.results[0], registry.get("c1").unwrap()));
    }

    #[test]
    fn test_multi_search_with_no_requests_is_empty() {
        let mut registry = VaccineRegistry::new();
        registry
            .add(center_with("c1", VaccineType::Covaxin, DoseType::FirstDose))
            .unwrap();

        let response = SearchEngine::new(&registry).multi_search(&[]);
        assert_eq!(response, SearchResponse::empty());
    }

    #[test]
    fn test_unknown_types_only_match_identical_strings() {
        let mut registry = VaccineRegistry::new();
        registry
            .add(center_with(
                "c1",
                VaccineType::from("SPUTNIK"),
                DoseType::from("BOOSTER"),
            ))
            .unwrap();

        let engine = SearchEngine::new(&registry);
        assert_eq!(
            engine
                .search(Some(&VaccineType::from("SPUTNIK")), Some(&DoseType::from("BOOSTER")))
                .total_count,
            1
        );
        assert_eq!(
            engine
                .search(Some(&VaccineType::from("sputnik")), Some(&DoseType::from("BOOSTER")))
                .total_count,
            0
        );
    }
}

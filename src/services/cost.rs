//! Cost service
//!
//! Business logic for cost record management: input validation, id
//! generation, and name-or-id lookup for the CLI. All mutations go through
//! the repository, which owns persistence.

use tracing::warn;

use crate::error::{SubtrackError, SubtrackResult};
use crate::models::{BillingCycle, CostCategory, CostId, CostRecord, CostValidationError, Money};
use crate::storage::Storage;

/// Service for cost record management
pub struct CostService<'a> {
    storage: &'a Storage,
}

impl<'a> CostService<'a> {
    /// Create a new cost service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new cost record
    pub fn add_cost(
        &self,
        name: &str,
        category: CostCategory,
        cost: Money,
        billing_cycle: BillingCycle,
        renewal_date: &str,
    ) -> SubtrackResult<CostRecord> {
        let record = CostRecord::new(name.trim(), category, cost, billing_cycle, renewal_date);
        self.check(&record)?;

        self.storage.costs.add(record.clone())?;
        Ok(record)
    }

    /// Update an existing cost record
    pub fn update_cost(&self, record: CostRecord) -> SubtrackResult<CostRecord> {
        self.check(&record)?;
        self.storage.costs.update(record.clone())?;
        Ok(record)
    }

    /// Delete a cost record, returning the removed record
    pub fn delete_cost(&self, id: CostId) -> SubtrackResult<CostRecord> {
        self.storage
            .costs
            .remove(id)?
            .ok_or_else(|| SubtrackError::cost_not_found(id.to_string()))
    }

    /// Get a cost by ID
    pub fn get_cost(&self, id: CostId) -> SubtrackResult<Option<CostRecord>> {
        self.storage.costs.get(id)
    }

    /// Find a cost by name or ID string
    pub fn find_cost(&self, identifier: &str) -> SubtrackResult<Option<CostRecord>> {
        // Try by name first
        if let Some(cost) = self.storage.costs.get_by_name(identifier)? {
            return Ok(Some(cost));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CostId>() {
            return self.storage.costs.get(id);
        }

        Ok(None)
    }

    /// List all costs in insertion order
    pub fn list_costs(&self) -> SubtrackResult<Vec<CostRecord>> {
        self.storage.costs.list()
    }

    /// Validate a record before it is stored
    ///
    /// Empty names and negative amounts are hard errors. A malformed renewal
    /// date is only warned about: the record is still accepted, matching the
    /// tolerance the loader applies to already-stored data.
    fn check(&self, record: &CostRecord) -> SubtrackResult<()> {
        match record.validate() {
            Ok(()) => Ok(()),
            Err(CostValidationError::MalformedDate(date)) => {
                warn!(
                    "Cost '{}' has a malformed renewal date '{}'; accepting it anyway",
                    record.name, date
                );
                Ok(())
            }
            Err(e) => Err(SubtrackError::Validation(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SubtrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SubtrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_cost() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let cost = service
            .add_cost(
                "  Vercel  ",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap();

        assert_eq!(cost.name, "Vercel"); // trimmed
        assert_eq!(storage.costs.count().unwrap(), 1);
    }

    #[test]
    fn test_add_cost_rejects_empty_name() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let err = service
            .add_cost(
                "   ",
                CostCategory::Other,
                Money::from_dollars(1.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_cost_rejects_negative_amount() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let err = service
            .add_cost(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(-5.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_cost_accepts_malformed_date_with_warning() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        // Accepted: the date is warned about but not a hard gate
        let cost = service
            .add_cost(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "someday",
            )
            .unwrap();
        assert_eq!(cost.renewal_date, "someday");
    }

    #[test]
    fn test_update_cost() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let mut cost = service
            .add_cost(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap();

        cost.cost = Money::from_dollars(25.0);
        service.update_cost(cost.clone()).unwrap();

        let stored = service.get_cost(cost.id).unwrap().unwrap();
        assert_eq!(stored.cost, Money::from_dollars(25.0));
    }

    #[test]
    fn test_delete_cost() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let cost = service
            .add_cost(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap();

        let removed = service.delete_cost(cost.id).unwrap();
        assert_eq!(removed.id, cost.id);

        let err = service.delete_cost(cost.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_cost_by_name_or_id() {
        let (_dir, storage) = create_test_storage();
        let service = CostService::new(&storage);

        let cost = service
            .add_cost(
                "Vercel",
                CostCategory::Cloud,
                Money::from_dollars(20.0),
                BillingCycle::Monthly,
                "2026-09-15",
            )
            .unwrap();

        assert!(service.find_cost("vercel").unwrap().is_some());
        assert!(service
            .find_cost(&cost.id.as_uuid().to_string())
            .unwrap()
            .is_some());
        assert!(service.find_cost("nope").unwrap().is_none());
    }
}

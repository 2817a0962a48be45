use crate::entities::{CrossdockCenter, Supplier};
use crate::util::assertions;

/// A fully assembled instance of the Cross-Docking Assignment Problem.
/// Constructed once per run and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Instance {
    /// Number of customers, with ids `0..customers`
    pub customers: usize,
    /// All suppliers and their delivery sets
    pub suppliers: Vec<Supplier>,
    /// The cross-docking center connecting both sides
    pub center: CrossdockCenter,
}

impl Instance {
    pub fn new(customers: usize, suppliers: Vec<Supplier>, center: CrossdockCenter) -> Self {
        let instance = Self {
            customers,
            suppliers,
            center,
        };
        debug_assert!(assertions::instance_is_consistent(&instance));
        instance
    }

    /// Total number of delivery edges in the supplier-to-customer matrix.
    pub fn n_deliveries(&self) -> usize {
        self.suppliers.iter().map(|s| s.deliveries.len()).sum()
    }

    /// Total demand: the sum of all pallets across all deliveries.
    pub fn total_pallets(&self) -> u64 {
        self.suppliers.iter().map(Supplier::shipped_pallets).sum()
    }
}

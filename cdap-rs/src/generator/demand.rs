use crate::entities::{Delivery, Supplier};
use crate::generator::UniformRange;
use crate::util::assertions;
use anyhow::{Result, ensure};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Tracks how many supplier-to-customer edges may still be inserted.
/// The ceiling is fixed up front from the requested matrix density.
struct EdgeBudget {
    filled: usize,
    limit: usize,
}

impl EdgeBudget {
    fn new(supplier_count: usize, customer_count: usize, density: f64) -> Self {
        let limit =
            (supplier_count as f64 * customer_count as f64 * density / 100.0).floor() as usize;
        EdgeBudget { filled: 0, limit }
    }

    /// Accounts for one inserted edge.
    /// Errors when the insertion was mandatory but the ceiling is already reached.
    fn register_insertion(&mut self) -> Result<()> {
        self.filled += 1;
        ensure!(
            self.filled <= self.limit,
            "density must be higher to generate the instance"
        );
        Ok(())
    }

    fn is_met(&self) -> bool {
        self.filled >= self.limit
    }
}

/// Samples the supplier-to-customer demand matrix in three phases:
/// 1. every supplier receives one delivery, drawing customers from a shuffled pool,
/// 2. customers left in the pool are attached to random suppliers,
/// 3. random edges are added until the density ceiling is reached.
///
/// Phases 1 and 2 cover every supplier and every customer, unless a sampled
/// pallet count of zero drops the delivery without retry (coverage is
/// best-effort when the pallet range includes zero). A pallet range capped at
/// zero combined with a positive ceiling cannot converge in phase 3.
pub fn generate_suppliers(
    supplier_count: usize,
    customer_count: usize,
    pallet_range: UniformRange,
    density: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Supplier>> {
    assert!(supplier_count > 0, "supplier count must be positive");
    assert!(customer_count > 0, "customer count must be positive");
    assert!(density <= 100.0, "density cannot be higher than 100");

    let mut suppliers: Vec<Supplier> = (0..supplier_count).map(Supplier::new).collect();
    let mut budget = EdgeBudget::new(supplier_count, customer_count, density);

    let mut pool: Vec<usize> = (0..customer_count).collect();
    pool.shuffle(rng);

    // Phase 1: one delivery per supplier.
    for supplier in 0..supplier_count {
        let customer = match pool.pop() {
            Some(customer) => customer,
            // more suppliers than customers, reuse an arbitrary customer
            None => rng.random_range(0..customer_count),
        };
        let pallets = pallet_range.sample(rng);
        if pallets > 0 {
            suppliers[supplier].deliveries.push(Delivery { customer, pallets });
            budget.register_insertion()?;
        }
    }

    // Phase 2: attach the customers nobody drew yet to random suppliers.
    for customer in pool {
        let supplier = rng.random_range(0..supplier_count);
        let pallets = pallet_range.sample(rng);
        if pallets > 0 {
            suppliers[supplier].deliveries.push(Delivery { customer, pallets });
            budget.register_insertion()?;
        }
    }
    debug!("[GEN] coverage phases placed {} deliveries", budget.filled);

    // Phase 3: top up with random edges, rejecting duplicates.
    while !budget.is_met() {
        let supplier = rng.random_range(0..supplier_count);
        let customer = rng.random_range(0..customer_count);
        let pallets = pallet_range.sample(rng);
        if pallets > 0 && !suppliers[supplier].delivers_to(customer) {
            suppliers[supplier].deliveries.push(Delivery { customer, pallets });
            budget.register_insertion()?;
        }
    }
    debug!(
        "[GEN] demand matrix holds {}/{} edges",
        budget.filled, budget.limit
    );

    debug_assert!(assertions::deliveries_valid(&suppliers, customer_count));
    Ok(suppliers)
}

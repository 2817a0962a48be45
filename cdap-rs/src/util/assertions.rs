use crate::entities::{DistanceEntry, Door, Instance, Supplier};
use itertools::Itertools;

/// Door ids must be dense, zero-based and in generation order.
pub fn door_ids_dense(doors: &[Door]) -> bool {
    doors.iter().enumerate().all(|(i, door)| door.id == i)
}

/// Supplier ids must be dense; every delivery must target an in-bounds
/// customer with a positive pallet count, and no supplier may hold two
/// deliveries to the same customer.
pub fn deliveries_valid(suppliers: &[Supplier], n_customers: usize) -> bool {
    suppliers.iter().enumerate().all(|(i, supplier)| {
        supplier.id == i
            && supplier
                .deliveries
                .iter()
                .all(|d| d.customer < n_customers && d.pallets > 0)
            && supplier
                .deliveries
                .iter()
                .map(|d| d.customer)
                .unique()
                .count()
                == supplier.deliveries.len()
    })
}

/// The distance table must cover the full inbound by outbound Cartesian product,
/// each pair exactly once.
pub fn distance_table_complete(entries: &[DistanceEntry], n_in: usize, n_out: usize) -> bool {
    entries.len() == n_in * n_out
        && entries.iter().all(|e| e.in_door < n_in && e.out_door < n_out)
        && entries
            .iter()
            .map(|e| (e.in_door, e.out_door))
            .unique()
            .count()
            == entries.len()
}

/// Structural validity of a fully assembled instance.
pub fn instance_is_consistent(instance: &Instance) -> bool {
    door_ids_dense(&instance.center.in_doors)
        && door_ids_dense(&instance.center.out_doors)
        && deliveries_valid(&instance.suppliers, instance.customers)
        && distance_table_complete(
            &instance.center.door_distances,
            instance.center.in_doors.len(),
            instance.center.out_doors.len(),
        )
}

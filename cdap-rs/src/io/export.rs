use crate::entities::{CrossdockCenter, Door, Instance, Supplier};
use crate::io::ext_repr::{
    ExtCrossdockingCenter, ExtDelivery, ExtDistanceEntry, ExtDoor, ExtInstance, ExtSupplier,
};

/// Converts an [`Instance`] into its external representation.
pub fn export(instance: &Instance) -> ExtInstance {
    ExtInstance {
        customers: instance.customers as u64,
        suppliers: instance.suppliers.iter().map(export_supplier).collect(),
        crossdocking_center: export_center(&instance.center),
    }
}

fn export_supplier(supplier: &Supplier) -> ExtSupplier {
    ExtSupplier {
        id: supplier.id as u64,
        deliveries: supplier
            .deliveries
            .iter()
            .map(|d| ExtDelivery {
                id: d.customer as u64,
                pallets: d.pallets,
            })
            .collect(),
    }
}

fn export_center(center: &CrossdockCenter) -> ExtCrossdockingCenter {
    ExtCrossdockingCenter {
        in_doors: center.in_doors.iter().map(export_door).collect(),
        out_doors: center.out_doors.iter().map(export_door).collect(),
        door_distances: center
            .door_distances
            .iter()
            .map(|e| ExtDistanceEntry {
                in_door: e.in_door as u64,
                out_door: e.out_door as u64,
                distance: e.distance,
            })
            .collect(),
    }
}

fn export_door(door: &Door) -> ExtDoor {
    ExtDoor {
        id: door.id as u64,
        capacity: door.capacity,
    }
}

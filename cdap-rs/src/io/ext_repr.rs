//! External (serializable) representations of the instance entities.
//! These structs define the JSON shape and are decoupled from the internal ones.

use serde::{Deserialize, Serialize};

/// External representation of a complete instance.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtInstance {
    /// Number of customers
    pub customers: u64,
    /// All suppliers with their deliveries
    pub suppliers: Vec<ExtSupplier>,
    /// The cross-docking center servicing the suppliers and customers
    pub crossdocking_center: ExtCrossdockingCenter,
}

/// External representation of a supplier.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtSupplier {
    /// Unique identifier of the supplier
    pub id: u64,
    /// Deliveries this supplier ships through the center
    pub deliveries: Vec<ExtDelivery>,
}

/// External representation of a single delivery.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtDelivery {
    /// Identifier of the receiving customer
    pub id: u64,
    /// Number of pallets in the delivery
    pub pallets: u64,
}

/// External representation of the cross-docking center.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtCrossdockingCenter {
    /// Inbound doors
    pub in_doors: Vec<ExtDoor>,
    /// Outbound doors
    pub out_doors: Vec<ExtDoor>,
    /// Distance between every inbound and outbound door pair
    pub door_distances: Vec<ExtDistanceEntry>,
}

/// External representation of a door.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtDoor {
    /// Unique identifier of the door within its side
    pub id: u64,
    /// Number of pallets the door can handle
    pub capacity: u64,
}

/// External representation of one cell of the door distance table.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtDistanceEntry {
    /// Id of the inbound door
    pub in_door: u64,
    /// Id of the outbound door
    pub out_door: u64,
    /// Distance between the two doors
    pub distance: u64,
}

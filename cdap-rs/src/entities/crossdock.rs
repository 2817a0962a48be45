use crate::entities::Door;

/// Distance between one inbound and one outbound door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceEntry {
    /// Identifier of the inbound door
    pub in_door: usize,
    /// Identifier of the outbound door
    pub out_door: usize,
    /// Distance between the two doors
    pub distance: u64,
}

/// The cross-docking center: a set of doors on each side and the distances between them.
#[derive(Debug, Clone)]
pub struct CrossdockCenter {
    /// Doors at which suppliers unload
    pub in_doors: Vec<Door>,
    /// Doors at which customers load
    pub out_doors: Vec<Door>,
    /// One entry for every (inbound, outbound) door pair
    pub door_distances: Vec<DistanceEntry>,
}

/// An inbound or outbound capacity-constrained gate at the cross-docking center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    /// Unique identifier of the door within its side, dense and zero-based
    pub id: usize,
    /// Number of pallets the door can handle
    pub capacity: u64,
}

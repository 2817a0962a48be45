/// A single supplier-to-customer shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Identifier of the customer receiving the pallets
    pub customer: usize,
    /// Number of pallets to move, always strictly positive
    pub pallets: u64,
}

/// Source node producing pallets destined for customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    /// Unique identifier of the supplier
    pub id: usize,
    /// All deliveries of this supplier, in insertion order
    pub deliveries: Vec<Delivery>,
}

impl Supplier {
    /// Creates a supplier with no deliveries yet.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            deliveries: vec![],
        }
    }

    /// Whether this supplier already holds a delivery to `customer`.
    pub fn delivers_to(&self, customer: usize) -> bool {
        self.deliveries.iter().any(|d| d.customer == customer)
    }

    /// Total number of pallets this supplier ships.
    pub fn shipped_pallets(&self) -> u64 {
        self.deliveries.iter().map(|d| d.pallets).sum()
    }
}

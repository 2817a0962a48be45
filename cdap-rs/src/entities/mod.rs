mod crossdock;
mod door;
mod instance;
mod supplier;

#[doc(inline)]
pub use crossdock::CrossdockCenter;
#[doc(inline)]
pub use crossdock::DistanceEntry;
#[doc(inline)]
pub use door::Door;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use supplier::Delivery;
#[doc(inline)]
pub use supplier::Supplier;

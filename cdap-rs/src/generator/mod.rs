mod assemble;
mod demand;
mod distances;
mod doors;
mod params;

#[doc(inline)]
pub use assemble::generate_instance;
#[doc(inline)]
pub use demand::generate_suppliers;
#[doc(inline)]
pub use distances::generate_distances;
#[doc(inline)]
pub use doors::generate_doors;
#[doc(inline)]
pub use doors::generate_doors_with_slackness;
#[doc(inline)]
pub use params::CapacityModel;
#[doc(inline)]
pub use params::InstanceParams;
#[doc(inline)]
pub use params::UniformRange;

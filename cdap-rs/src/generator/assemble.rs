use crate::entities::{CrossdockCenter, Instance};
use crate::generator::demand::generate_suppliers;
use crate::generator::distances::generate_distances;
use crate::generator::doors::{generate_doors, generate_doors_with_slackness};
use crate::generator::params::{CapacityModel, InstanceParams};
use anyhow::Result;
use log::info;
use rand::Rng;

/// Synthesizes a complete instance from `params`.
/// The demand matrix is sampled first since the slackness capacity model
/// derives the door capacities from the realized pallet volume.
pub fn generate_instance(params: &InstanceParams, rng: &mut impl Rng) -> Result<Instance> {
    params.validate()?;

    let suppliers = generate_suppliers(
        params.suppliers,
        params.customers,
        params.pallets,
        params.density,
        rng,
    )?;

    let (in_doors, out_doors) = match params.door_capacities {
        CapacityModel::Range { in_doors, out_doors } => (
            generate_doors(params.in_doors, in_doors, rng),
            generate_doors(params.out_doors, out_doors, rng),
        ),
        CapacityModel::Slackness { slackness } => {
            let total_demand: u64 = suppliers.iter().map(|s| s.shipped_pallets()).sum();
            let in_base = total_demand as f64 / params.in_doors as f64;
            let out_base = total_demand as f64 / params.out_doors as f64;
            (
                generate_doors_with_slackness(params.in_doors, in_base, slackness),
                generate_doors_with_slackness(params.out_doors, out_base, slackness),
            )
        }
    };

    let door_distances =
        generate_distances(params.in_doors, params.out_doors, params.min_door_distance);

    let center = CrossdockCenter {
        in_doors,
        out_doors,
        door_distances,
    };
    let instance = Instance::new(params.customers, suppliers, center);

    info!(
        "[GEN] assembled instance: {} suppliers, {} customers, {} deliveries, {} pallets",
        instance.suppliers.len(),
        instance.customers,
        instance.n_deliveries(),
        instance.total_pallets()
    );
    Ok(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::params::UniformRange;
    use crate::util::assertions;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn range_params() -> InstanceParams {
        InstanceParams {
            suppliers: 8,
            customers: 12,
            in_doors: 3,
            out_doors: 5,
            pallets: UniformRange { min: 10, max: 50 },
            density: 40.0,
            min_door_distance: 8,
            door_capacities: CapacityModel::Range {
                in_doors: UniformRange { min: 10, max: 80 },
                out_doors: UniformRange { min: 20, max: 90 },
            },
        }
    }

    #[test]
    fn range_mode_produces_consistent_instance() {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = generate_instance(&range_params(), &mut rng).unwrap();
        assert!(assertions::instance_is_consistent(&instance));
        assert_eq!(instance.center.in_doors.len(), 3);
        assert_eq!(instance.center.out_doors.len(), 5);
        assert!(instance.center.in_doors.iter().all(|d| (10..=80).contains(&d.capacity)));
        assert!(instance.center.out_doors.iter().all(|d| (20..=90).contains(&d.capacity)));
        // 8 * 12 * 0.40 = 38.4, floored
        assert_eq!(instance.n_deliveries(), 38);
    }

    #[test]
    fn slackness_mode_splits_demand_per_side() {
        let params = InstanceParams {
            suppliers: 2,
            customers: 2,
            in_doors: 2,
            out_doors: 4,
            pallets: UniformRange { min: 25, max: 25 },
            density: 100.0,
            min_door_distance: 8,
            door_capacities: CapacityModel::Slackness { slackness: 0.0 },
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = generate_instance(&params, &mut rng).unwrap();
        // full matrix at 25 pallets per delivery: 100 pallets in total
        assert_eq!(instance.total_pallets(), 100);
        assert!(instance.center.in_doors.iter().all(|d| d.capacity == 50));
        assert!(instance.center.out_doors.iter().all(|d| d.capacity == 25));
    }

    #[test]
    fn slackness_adds_headroom_on_both_sides() {
        let params = InstanceParams {
            suppliers: 2,
            customers: 2,
            in_doors: 2,
            out_doors: 4,
            pallets: UniformRange { min: 25, max: 25 },
            density: 100.0,
            min_door_distance: 8,
            door_capacities: CapacityModel::Slackness { slackness: 0.1 },
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = generate_instance(&params, &mut rng).unwrap();
        assert!(instance.center.in_doors.iter().all(|d| d.capacity == 55));
        assert!(instance.center.out_doors.iter().all(|d| d.capacity == 28));
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut params = range_params();
        params.customers = 0;
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(generate_instance(&params, &mut rng).is_err());
    }
}

use anyhow::{Result, ensure};
use rand::Rng;

/// Inclusive integer range from which values are drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformRange {
    pub min: u64,
    pub max: u64,
}

impl UniformRange {
    pub fn try_new(min: u64, max: u64) -> Result<Self> {
        ensure!(min <= max, "invalid range: minimum {min} exceeds maximum {max}");
        Ok(UniformRange { min, max })
    }

    /// Draws a value from `[min, max]`, both bounds inclusive.
    pub fn sample(&self, rng: &mut impl Rng) -> u64 {
        rng.random_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// How door capacities are determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityModel {
    /// Each door capacity is drawn independently from a uniform range.
    Range {
        in_doors: UniformRange,
        out_doors: UniformRange,
    },
    /// Capacities are derived from the realized demand: every door on a side
    /// receives an equal share of the total pallet volume, inflated by the
    /// slackness fraction.
    Slackness { slackness: f64 },
}

/// All parameters needed to synthesize one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceParams {
    /// Number of suppliers
    pub suppliers: usize,
    /// Number of customers
    pub customers: usize,
    /// Number of inbound doors
    pub in_doors: usize,
    /// Number of outbound doors
    pub out_doors: usize,
    /// Range from which per-delivery pallet counts are drawn
    pub pallets: UniformRange,
    /// Target fill of the supplier-to-customer demand matrix, in percent
    pub density: f64,
    /// Offset added to every door distance
    pub min_door_distance: u64,
    /// Capacity model for the doors on both sides
    pub door_capacities: CapacityModel,
}

impl InstanceParams {
    /// Rejects parameter combinations that cannot yield a well-formed instance.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.suppliers > 0, "supplier count must be positive");
        ensure!(self.customers > 0, "customer count must be positive");
        ensure!(self.in_doors > 0, "inbound door count must be positive");
        ensure!(self.out_doors > 0, "outbound door count must be positive");
        ensure!(self.density > 0.0, "density must be positive");
        ensure!(self.density <= 100.0, "density cannot be higher than 100");
        ensure!(
            self.pallets.min <= self.pallets.max,
            "invalid pallet range: minimum {} exceeds maximum {}",
            self.pallets.min,
            self.pallets.max
        );
        match self.door_capacities {
            CapacityModel::Range { in_doors, out_doors } => {
                ensure!(
                    in_doors.min <= in_doors.max,
                    "invalid inbound capacity range: minimum {} exceeds maximum {}",
                    in_doors.min,
                    in_doors.max
                );
                ensure!(
                    out_doors.min <= out_doors.max,
                    "invalid outbound capacity range: minimum {} exceeds maximum {}",
                    out_doors.min,
                    out_doors.max
                );
            }
            CapacityModel::Slackness { slackness } => {
                ensure!(slackness >= 0.0, "slackness cannot be negative");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn base_params() -> InstanceParams {
        InstanceParams {
            suppliers: 4,
            customers: 6,
            in_doors: 2,
            out_doors: 3,
            pallets: UniformRange { min: 10, max: 50 },
            density: 25.0,
            min_door_distance: 8,
            door_capacities: CapacityModel::Range {
                in_doors: UniformRange { min: 10, max: 80 },
                out_doors: UniformRange { min: 10, max: 80 },
            },
        }
    }

    #[test]
    fn valid_params_pass() {
        assert!(base_params().validate().is_ok());
    }

    #[test]
    fn zero_counts_rejected() {
        for field in 0..4 {
            let mut params = base_params();
            match field {
                0 => params.suppliers = 0,
                1 => params.customers = 0,
                2 => params.in_doors = 0,
                _ => params.out_doors = 0,
            }
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn density_out_of_bounds_rejected() {
        let mut params = base_params();
        params.density = 0.0;
        assert!(params.validate().is_err());
        params.density = 100.5;
        assert!(params.validate().is_err());
        params.density = 100.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn inverted_range_rejected() {
        assert!(UniformRange::try_new(50, 10).is_err());
        let mut params = base_params();
        params.pallets = UniformRange { min: 50, max: 10 };
        assert!(params.validate().is_err());
    }

    #[test]
    fn negative_slackness_rejected() {
        let mut params = base_params();
        params.door_capacities = CapacityModel::Slackness { slackness: -0.1 };
        assert!(params.validate().is_err());
        params.door_capacities = CapacityModel::Slackness { slackness: 0.0 };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn sample_stays_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(0);
        let range = UniformRange { min: 10, max: 50 };
        for _ in 0..1000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        let mut rng = SmallRng::seed_from_u64(0);
        let range = UniformRange { min: 7, max: 7 };
        for _ in 0..100 {
            assert_eq!(range.sample(&mut rng), 7);
        }
    }
}

use crate::entities::Door;
use crate::generator::UniformRange;
use rand::Rng;

/// Generates `count` doors with capacities drawn independently from `range`.
pub fn generate_doors(count: usize, range: UniformRange, rng: &mut impl Rng) -> Vec<Door> {
    (0..count)
        .map(|id| Door {
            id,
            capacity: range.sample(rng),
        })
        .collect()
}

/// Generates `count` doors which all carry the same capacity:
/// `base_capacity` inflated by the `slackness` fraction, rounded to the
/// nearest integer.
pub fn generate_doors_with_slackness(
    count: usize,
    base_capacity: f64,
    slackness: f64,
) -> Vec<Door> {
    let capacity = (base_capacity * (1.0 + slackness)).round() as u64;
    (0..count).map(|id| Door { id, capacity }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn capacities_within_range() {
        let mut rng = SmallRng::seed_from_u64(0);
        let range = UniformRange { min: 10, max: 80 };
        let doors = generate_doors(100, range, &mut rng);
        assert_eq!(doors.len(), 100);
        assert!(assertions::door_ids_dense(&doors));
        assert!(doors.iter().all(|d| range.contains(d.capacity)));
    }

    #[test]
    fn slackness_inflates_base_capacity() {
        let doors = generate_doors_with_slackness(4, 50.0, 0.1);
        assert_eq!(doors.len(), 4);
        assert!(assertions::door_ids_dense(&doors));
        assert!(doors.iter().all(|d| d.capacity == 55));
    }

    #[test]
    fn zero_slackness_keeps_base_capacity() {
        let doors = generate_doors_with_slackness(3, 50.0, 0.0);
        assert!(doors.iter().all(|d| d.capacity == 50));
    }
}

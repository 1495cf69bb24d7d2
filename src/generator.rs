//! Random array generation

use crate::config::ValueRange;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Produces fresh arrays of bar values
#[derive(Debug, Clone)]
pub struct ArrayGenerator {
    rng: SmallRng,
}

impl ArrayGenerator {
    /// A seeded generator repeats the same sequence of arrays
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        ArrayGenerator { rng }
    }

    /// `len` values drawn uniformly from the inclusive range
    pub fn generate(&mut self, len: usize, range: ValueRange) -> Vec<u32> {
        (0..len)
            .map(|_| self.rng.random_range(range.min..=range.max))
            .collect()
    }
}

impl Default for ArrayGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_in_range() {
        let mut generator = ArrayGenerator::new(Some(7));
        let range = ValueRange::new(10, 20).unwrap();
        let values = generator.generate(500, range);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| range.contains(*v)));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let range = ValueRange::default();
        let a = ArrayGenerator::new(Some(42)).generate(64, range);
        let b = ArrayGenerator::new(Some(42)).generate(64, range);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_value_range() {
        let mut generator = ArrayGenerator::new(Some(1));
        let values = generator.generate(8, ValueRange::new(5, 5).unwrap());
        assert_eq!(values, vec![5; 8]);
    }
}

//! Sequential value generators.

use super::ValueRule;

/// Constructor of sequential rules.
///
/// Every call to [`SequenceFactory::instantiate`] yields a fresh counter
/// starting at `start`, so replacing a field's rule with the same factory
/// restarts its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceFactory {
    start: i64,
    step: i64,
}

impl SequenceFactory {
    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Build a new counter positioned at `start`.
    pub fn instantiate(&self) -> ValueRule {
        ValueRule::Sequential {
            next: self.start,
            step: self.step,
        }
    }
}

/// Factory of sequence generators advancing by `step` from `start`.
pub fn generator_factory(start: i64, step: i64) -> SequenceFactory {
    SequenceFactory { start, step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ValueGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_arithmetic_sequence() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rule = generator_factory(100000, 3).instantiate();

        let values: Vec<i64> = (0..50)
            .map(|_| rule.generate(&mut rng).as_i64().unwrap())
            .collect();

        assert_eq!(values[0], 100000);
        for pair in values.windows(2) {
            assert_eq!(pair[1] - pair[0], 3);
        }
    }

    #[test]
    fn test_negative_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rule = generator_factory(10, -2).instantiate();

        let values: Vec<i64> = (0..4)
            .map(|_| rule.generate(&mut rng).as_i64().unwrap())
            .collect();
        assert_eq!(values, vec![10, 8, 6, 4]);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        let factory = generator_factory(1, 1);

        let mut first = factory.instantiate();
        first.generate(&mut rng);
        first.generate(&mut rng);

        let mut second = factory.instantiate();
        assert_eq!(second.generate(&mut rng).as_i64(), Some(1));
        assert_eq!(first.generate(&mut rng).as_i64(), Some(3));
    }
}

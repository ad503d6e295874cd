//! Flattening tracks into operation records.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Operation, ScheduleInstance};

/// Projects a finished instance into renderer input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleEmitter;

impl ScheduleEmitter {
    /// Every interval as an [`Operation`], track by track in interval order.
    pub fn flatten(instance: &ScheduleInstance) -> Vec<Operation> {
        instance
            .slices()
            .iter()
            .enumerate()
            .flat_map(|(track, slice)| {
                slice
                    .iter()
                    .map(move |interval| Operation::from_interval(track, interval))
            })
            .collect()
    }

    /// Same records as [`flatten`](Self::flatten) in uniformly shuffled order.
    pub fn emit<R: Rng + ?Sized>(instance: &ScheduleInstance, rng: &mut R) -> Vec<Operation> {
        let mut operations = Self::flatten(instance);
        operations.shuffle(rng);
        operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Interval, Slice};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_instance() -> ScheduleInstance {
        ScheduleInstance::from_slices(vec![
            Slice::from_intervals(vec![
                Interval::new(0, 59).unwrap(),
                Interval::new(65, 118).unwrap(),
            ])
            .unwrap(),
            Slice::new(),
            Slice::from_intervals(vec![Interval::new(10, 69).unwrap()]).unwrap(),
        ])
    }

    #[test]
    fn test_flatten_order_and_values() {
        let ops = ScheduleEmitter::flatten(&sample_instance());
        assert_eq!(
            ops,
            vec![
                Operation {
                    track: 0,
                    start: 0,
                    duration: 59,
                },
                Operation {
                    track: 0,
                    start: 65,
                    duration: 53,
                },
                Operation {
                    track: 2,
                    start: 10,
                    duration: 59,
                },
            ]
        );
    }

    #[test]
    fn test_emit_is_a_permutation() {
        let inst = sample_instance();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut emitted = ScheduleEmitter::emit(&inst, &mut rng);
        let mut flat = ScheduleEmitter::flatten(&inst);
        emitted.sort();
        flat.sort();
        assert_eq!(emitted, flat);
    }

    #[test]
    fn test_emit_does_not_touch_instance() {
        let inst = sample_instance();
        let before = inst.clone();
        let mut rng = SmallRng::seed_from_u64(42);
        let _ = ScheduleEmitter::emit(&inst, &mut rng);
        assert_eq!(inst, before);
    }

    #[test]
    fn test_emit_shuffles() {
        // 30 records: the chance a seeded shuffle is the identity is negligible.
        let slice = Slice::from_intervals(
            (0..30)
                .map(|i| Interval::with_duration(i * 60, 53).unwrap())
                .collect(),
        )
        .unwrap();
        let inst = ScheduleInstance::from_slices(vec![slice]);
        let mut rng = SmallRng::seed_from_u64(3);
        assert_ne!(ScheduleEmitter::emit(&inst, &mut rng), ScheduleEmitter::flatten(&inst));
    }

    #[test]
    fn test_emit_empty_instance() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(ScheduleEmitter::emit(&ScheduleInstance::new(4), &mut rng).is_empty());
    }
}

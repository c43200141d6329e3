//! The canonical numeric sequence being sorted

use crate::sort::errors::CommandError;
use rand::Rng;

/// Hard cap on sequence length, chosen so every bar stays visible on screen.
pub const MAX_LEN: usize = 60;

/// Smallest sequence worth sorting (and the clamp floor for random fills).
pub const MIN_RANDOM_LEN: usize = 2;

/// Where a new sequence comes from.
#[derive(Debug, Clone)]
pub enum GenerateSource {
    /// An explicit list parsed from the manual-entry field.
    /// Already filtered of non-numeric tokens; may be empty, which is rejected.
    Manual(Vec<i64>),

    /// A random fill of `count` values, each drawn uniformly from [1, 100].
    /// `count` is clamped to [2, 60] before drawing.
    Random { count: usize },
}

/// The ordered sequence of values under sort.
///
/// Replaced wholesale by [`generate`](SequenceModel::generate); mutated in
/// place only through adjacent-pair swaps while a run is active.
#[derive(Debug, Default, Clone)]
pub struct SequenceModel {
    values: Vec<i64>,
}

impl SequenceModel {
    pub fn new() -> Self {
        SequenceModel { values: Vec::new() }
    }

    /// Replace the sequence from `source`.
    ///
    /// Manual lists are capped to [`MAX_LEN`] entries; an empty manual list is
    /// an [`CommandError::InvalidInput`] and leaves the sequence unchanged.
    pub fn generate(&mut self, source: GenerateSource) -> Result<(), CommandError> {
        match source {
            GenerateSource::Manual(mut list) => {
                if list.is_empty() {
                    return Err(CommandError::InvalidInput {
                        message: "Please provide valid comma-separated numbers".to_string(),
                    });
                }
                list.truncate(MAX_LEN);
                self.values = list;
            }
            GenerateSource::Random { count } => {
                let count = count.clamp(MIN_RANDOM_LEN, MAX_LEN);
                let mut rng = rand::rng();
                self.values = (0..count).map(|_| rng.random_range(1..=100)).collect();
            }
        }
        Ok(())
    }

    /// Clear the sequence. The engine command layer rejects this mid-run.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Exchange positions `i` and `i + 1`. Out-of-range indices are a no-op;
    /// the engine only ever calls this with indices from its own pass bounds.
    pub fn swap_adjacent(&mut self, i: usize) {
        if i + 1 < self.values.len() {
            self.values.swap(i, i + 1);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<i64> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_generate_replaces_wholesale() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Manual(vec![5, 1, 4, 2, 8]))
            .unwrap();
        assert_eq!(seq.values(), &[5, 1, 4, 2, 8]);

        seq.generate(GenerateSource::Manual(vec![7])).unwrap();
        assert_eq!(seq.values(), &[7]);
    }

    #[test]
    fn test_empty_manual_list_rejected() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Manual(vec![3, 1])).unwrap();

        let err = seq.generate(GenerateSource::Manual(Vec::new()));
        assert!(matches!(err, Err(CommandError::InvalidInput { .. })));
        // Rejection leaves the previous sequence intact
        assert_eq!(seq.values(), &[3, 1]);
    }

    #[test]
    fn test_manual_list_capped_to_max() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Manual((0..100).collect()))
            .unwrap();
        assert_eq!(seq.len(), MAX_LEN);
        assert_eq!(seq.get(0), Some(0));
        assert_eq!(seq.get(MAX_LEN - 1), Some(59));
    }

    #[test]
    fn test_random_count_clamped() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Random { count: 0 }).unwrap();
        assert_eq!(seq.len(), 2);

        seq.generate(GenerateSource::Random { count: 1000 }).unwrap();
        assert_eq!(seq.len(), MAX_LEN);
    }

    #[test]
    fn test_random_values_in_range() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Random { count: 60 }).unwrap();
        assert!(seq.values().iter().all(|&v| (1..=100).contains(&v)));
    }

    #[test]
    fn test_swap_adjacent() {
        let mut seq = SequenceModel::new();
        seq.generate(GenerateSource::Manual(vec![1, 2, 3])).unwrap();
        seq.swap_adjacent(1);
        assert_eq!(seq.values(), &[1, 3, 2]);

        // Last index has no right neighbour; nothing happens
        seq.swap_adjacent(2);
        assert_eq!(seq.values(), &[1, 3, 2]);
    }
}

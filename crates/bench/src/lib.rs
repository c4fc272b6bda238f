use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;
const FEW_UNIQUE_KEYS: i64 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    Ascending,
    Descending,
    NearlySorted1pctSwaps,
    FewUnique,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::Ascending,
    Distribution::Descending,
    Distribution::NearlySorted1pctSwaps,
    Distribution::FewUnique,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewUnique => "few_unique",
        }
    }
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_dataset<R: Rng>(rng: &mut R, dist: Distribution, size: usize) -> Vec<i64> {
    match dist {
        Distribution::RandomUniform => (0..size).map(|_| rng.random::<i64>()).collect(),
        Distribution::Ascending => (0..size as i64).collect(),
        Distribution::Descending => (0..size as i64).rev().collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i64> = (0..size as i64).collect();
            if size > 1 {
                for _ in 0..(size / 100).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    data.swap(a, b);
                }
            }
            data
        }
        Distribution::FewUnique => {
            let mut data: Vec<i64> = (0..size as i64).map(|i| i % FEW_UNIQUE_KEYS).collect();
            data.shuffle(rng);
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_requested_size_and_shape() {
        let mut rng = default_rng();
        for dist in ALL_DISTRIBUTIONS {
            for size in [0_usize, 1, 2, 100, 1000] {
                let data = generate_dataset(&mut rng, dist, size);
                assert_eq!(data.len(), size, "dist={}", dist.label());
            }
        }

        let ascending = generate_dataset(&mut rng, Distribution::Ascending, 64);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let descending = generate_dataset(&mut rng, Distribution::Descending, 64);
        assert!(descending.windows(2).all(|w| w[0] >= w[1]));

        let few = generate_dataset(&mut rng, Distribution::FewUnique, 512);
        assert!(few.iter().all(|&x| (0..FEW_UNIQUE_KEYS).contains(&x)));
    }
}

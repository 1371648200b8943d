use ahash::RandomState;

/// Hasher with fixed seeds so cache behaviour is identical from run to run.
pub(crate) fn fixed_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}
pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

pub mod knapsack;

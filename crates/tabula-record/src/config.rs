//! Schema discovery configuration.

/// What discovery does when two mapped fields resolve to the same name.
///
/// Duplicates arise when embedded or referenced sub-records expose
/// same-named leaf fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// List the name once per occurrence. The accessor returns the first
    /// match in discovery order.
    #[default]
    FirstMatch,
    /// Fail discovery with [`RecordError::DuplicateName`](crate::RecordError::DuplicateName).
    Reject,
}

/// Configuration for a [`SchemaCache`](crate::SchemaCache).
#[derive(Clone, Debug)]
pub struct DiscoveryConfig {
    /// Handling of repeated field names across embeds.
    ///
    /// Default: [`DuplicatePolicy::FirstMatch`].
    pub duplicate_names: DuplicatePolicy,

    /// Number of shapes the cache map is pre-sized for.
    ///
    /// Default: 32.
    pub initial_capacity: usize,
}

impl DiscoveryConfig {
    /// Default pre-sized shape capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

    /// A config with default values.
    pub fn new() -> Self {
        Self {
            duplicate_names: DuplicatePolicy::default(),
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Set the duplicate-name policy.
    pub fn with_duplicate_names(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }

    /// Set the pre-sized shape capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_first_match() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.duplicate_names, DuplicatePolicy::FirstMatch);
        assert_eq!(config.initial_capacity, 32);
    }

    #[test]
    fn builders_override() {
        let config = DiscoveryConfig::new()
            .with_duplicate_names(DuplicatePolicy::Reject)
            .with_initial_capacity(4);
        assert_eq!(config.duplicate_names, DuplicatePolicy::Reject);
        assert_eq!(config.initial_capacity, 4);
    }
}

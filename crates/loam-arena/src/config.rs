//! Memory configuration parameters.

/// Configuration for a [`crate::Memory`] instance.
///
/// Controls the total arena size and the stack/heap split. Validated at
/// `Memory::new`; all values are immutable after construction.
#[derive(Clone, Debug)]
pub struct MemoryConfig {
    /// Total arena size in bytes.
    pub size_bytes: usize,

    /// Size of the stack region in bytes.
    ///
    /// Defaults to 30% of `size_bytes` when `None`. Must stay below
    /// half of the arena; `Memory::new` rejects anything at or above
    /// that with `MemoryError::InvalidConfig`.
    pub stack_bytes: Option<usize>,
}

impl MemoryConfig {
    /// Default stack share of the arena, in percent.
    pub const DEFAULT_STACK_PERCENT: usize = 30;

    /// Create a config for an arena of `size_bytes` with the default
    /// stack split.
    pub fn new(size_bytes: usize) -> Self {
        Self {
            size_bytes,
            stack_bytes: None,
        }
    }

    /// Override the stack region size in bytes.
    pub fn with_stack_bytes(mut self, stack_bytes: usize) -> Self {
        self.stack_bytes = Some(stack_bytes);
        self
    }

    /// The effective stack region size in bytes.
    pub fn stack_len(&self) -> usize {
        self.stack_bytes
            .unwrap_or(self.size_bytes * Self::DEFAULT_STACK_PERCENT / 100)
    }

    /// The effective heap region size in bytes.
    pub fn heap_len(&self) -> usize {
        self.size_bytes - self.stack_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stack_is_thirty_percent() {
        let config = MemoryConfig::new(1000);
        assert_eq!(config.stack_len(), 300);
        assert_eq!(config.heap_len(), 700);
    }

    #[test]
    fn explicit_stack_overrides_default() {
        let config = MemoryConfig::new(1024).with_stack_bytes(256);
        assert_eq!(config.stack_len(), 256);
        assert_eq!(config.heap_len(), 768);
    }
}

//! Bounded cache misconfiguration.

/// A bounded cache was configured with a capacity it cannot honour.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display(
    "Capacity Error: {} cache needs a positive capacity, got {} (line {} in {})",
    cache,
    capacity,
    line,
    file
)]
pub struct CapacityError {
    cache: String,
    capacity: usize,
    line: u32,
    file: &'static str,
}

impl CapacityError {
    /// Create a new CapacityError naming the offending cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildstate_error::CapacityError;
    ///
    /// let err = CapacityError::new("dm_channels", 0);
    /// assert_eq!(err.cache(), "dm_channels");
    /// assert_eq!(*err.capacity(), 0);
    /// ```
    #[track_caller]
    pub fn new(cache: impl Into<String>, capacity: usize) -> Self {
        let location = std::panic::Location::caller();
        Self {
            cache: cache.into(),
            capacity,
            line: location.line(),
            file: location.file(),
        }
    }
}

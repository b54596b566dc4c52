use clockface_core::Timestamp;

/// Port for time abstraction
///
/// This allows the widget to use different time sources:
/// - Real local wall-clock time in production
/// - Fixed or manually advanced time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

use std::time::Duration;

/// Timing of register transactions and broadcast polling.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Total time a read may take, all attempts included.
    pub read_timeout: Duration,
    /// Number of times a read request is sent within `read_timeout`.
    pub read_attempts: u32,
    /// Time a write waits for its acknowledgement. Writes are never resent.
    pub write_timeout: Duration,
    /// Sleep between polls when the transport has nothing buffered.
    pub poll_interval: Duration,
    /// Broadcast iteration reports a timeout after this much silence.
    /// `None` waits forever.
    pub broadcast_idle_timeout: Option<Duration>,
    /// Broadcasts kept while no one iterates; the oldest are dropped first.
    pub broadcast_queue_capacity: usize,
}

impl DriverConfig {
    /// Time allotted to one read attempt.
    pub fn read_attempt_timeout(&self) -> Duration {
        self.read_timeout / self.read_attempts.max(1)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(150),
            read_attempts: 2,
            write_timeout: Duration::from_millis(150),
            poll_interval: Duration::from_millis(1),
            broadcast_idle_timeout: Some(Duration::from_secs(1)),
            broadcast_queue_capacity: 1024,
        }
    }
}

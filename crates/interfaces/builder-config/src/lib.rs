//! Central configuration constants for runtime limits and defaults.

/// Depot endpoint used when no setting or override is present.
pub const DEFAULT_DEPOT_URL: &str = "http://localhost:9636/v1";

/// Environment variable that overrides the configured depot URL.
pub const DEPOT_URL_ENV: &str = "BUILDER_DEPOT_URL";

/// Default timeout for a single depot request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum allowed request timeout.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Capacity of the kernel's domain event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Community chat invite opened by the header's chat button.
pub const COMMUNITY_SLACK_URL: &str = "https://slack.habitat.sh/";

/// User agent sent with every depot request.
pub const USER_AGENT: &str = concat!("builder/", env!("CARGO_PKG_VERSION"));

/// Convenience function to clamp a timeout value into allowed range.
pub fn clamp_timeout_secs(v: u64) -> u64 {
    v.clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_clamped_into_range() {
        assert_eq!(clamp_timeout_secs(0), MIN_REQUEST_TIMEOUT_SECS);
        assert_eq!(clamp_timeout_secs(30), 30);
        assert_eq!(clamp_timeout_secs(10_000), MAX_REQUEST_TIMEOUT_SECS);
    }
}

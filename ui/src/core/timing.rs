//! Timer and wall-clock utilities that work on both web and native targets.

use time::{macros::format_description, OffsetDateTime};

/// Suspend the current task for `ms` milliseconds.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let clamped = ms.min(u64::from(u32::MAX)) as u32;
        gloo_timers::future::TimeoutFuture::new(clamped).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Local wall-clock time, falling back to UTC when the offset is unknown.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Milliseconds since the Unix epoch.
pub fn unix_millis() -> i128 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

/// `HH:MM` clock label for history entries.
pub fn format_clock(stamp: OffsetDateTime) -> String {
    stamp
        .format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn clock_label_is_zero_padded() {
        assert_eq!(format_clock(datetime!(2024-03-02 07:05 UTC)), "07:05");
        assert_eq!(format_clock(datetime!(2024-03-02 23:59 UTC)), "23:59");
    }
}

use std::time::Duration;

use finscreen_core::BackoffConfig;
use rand::Rng;

/// `base_ms` plus a uniform random extra of up to `jitter_percent` percent.
pub fn jitter_wait(base_ms: u64, jitter_percent: u32) -> u64 {
    let jitter_range = if jitter_percent == 0 {
        1
    } else {
        std::cmp::max(1, (base_ms.saturating_mul(u64::from(jitter_percent))) / 100)
    };
    let mut rng = rand::rng();
    base_ms + rng.random_range(0..jitter_range)
}

/// Wait before retry number `retry` (0-based).
pub(crate) fn retry_delay(cfg: &BackoffConfig, retry: u32) -> Duration {
    Duration::from_millis(jitter_wait(
        cfg.base_delay_ms(retry),
        u32::from(cfg.jitter_percent),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_jitter_is_exact() {
        for base in [0, 1, 250, 30_000] {
            assert_eq!(jitter_wait(base, 0), base);
        }
    }

    #[test]
    fn jitter_stays_within_bound() {
        for _ in 0..200 {
            let w = jitter_wait(1_000, 20);
            assert!((1_000..1_200).contains(&w), "{w}");
        }
    }

    #[test]
    fn delay_follows_config() {
        let cfg = BackoffConfig {
            min_backoff_ms: 100,
            max_backoff_ms: 400,
            factor: 2,
            jitter_percent: 0,
        };
        assert_eq!(retry_delay(&cfg, 0), Duration::from_millis(100));
        assert_eq!(retry_delay(&cfg, 1), Duration::from_millis(200));
        assert_eq!(retry_delay(&cfg, 5), Duration::from_millis(400));
    }
}

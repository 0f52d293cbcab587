use spin_sleep_util::Interval;
use std::time::Duration;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LimitMode {
    Target(Duration),
    #[default]
    Disabled,
}

impl LimitMode {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        match self {
            LimitMode::Target(dt) => !dt.is_zero(),
            LimitMode::Disabled => false,
        }
    }
}

/// Sleeps at the end of each frame so frames start at a fixed period
pub(super) struct FrameLimiter {
    interval: Option<Interval>,
}

impl FrameLimiter {
    #[inline]
    pub fn new(mode: LimitMode) -> Self {
        let interval = mode.is_enabled().then(|| {
            log::debug!("FrameLimiter enabled with mode={mode:?}");
            spin_sleep_util::interval(duration_from_mode(mode))
        });

        FrameLimiter { interval }
    }

    #[inline(always)]
    pub fn tick(&mut self) {
        if let Some(interval) = &mut self.interval {
            interval.tick();
        }
    }
}

#[inline(always)]
fn duration_from_mode(mode: LimitMode) -> Duration {
    match mode {
        LimitMode::Target(dt) => dt,
        LimitMode::Disabled => Duration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn limit_mode_is_enabled() {
        assert!(LimitMode::Target(Duration::from_millis(50)).is_enabled());
        assert!(!LimitMode::Target(Duration::ZERO).is_enabled());
        assert!(!LimitMode::Disabled.is_enabled());
    }

    #[test]
    fn duration_from_mode_off_is_zero() {
        assert_eq!(duration_from_mode(LimitMode::Disabled), Duration::ZERO);
    }

    #[test]
    fn tick_does_not_sleep_when_off() {
        let mut limiter = FrameLimiter::new(LimitMode::Disabled);
        let start = Instant::now();
        for _ in 0..10 {
            limiter.tick();
        }
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn tick_waits_for_the_period() {
        let dt = Duration::from_millis(10);
        let mut limiter = FrameLimiter::new(LimitMode::Target(dt));
        let start = Instant::now();
        // the first tick returns right away, the next ones wait a period each
        for _ in 0..4 {
            limiter.tick();
        }
        assert!(start.elapsed() >= dt * 3);
    }
}

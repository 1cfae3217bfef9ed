//! Browser timers

use std::future::Future;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use shared::Delay;

/// `setTimeout`-backed delay for the analysis provider
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(millis(duration))
    }
}

/// Run `callback` once after `ms` milliseconds
pub fn after(ms: u32, callback: impl FnOnce() + 'static) {
    Timeout::new(ms, callback).forget();
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(2500)), 2500);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

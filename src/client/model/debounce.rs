use std::time::Duration;

/// Handle for one scheduled call; only the latest one can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Single-slot debouncer.
///
/// Each `schedule` replaces whatever was pending. After the quiet period the caller
/// redeems its ticket with `take`, which yields the value only if nothing was scheduled
/// in the meantime.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    pub fn schedule(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some((self.generation, value));
        DebounceTicket(self.generation)
    }

    pub fn take(&mut self, ticket: DebounceTicket) -> Option<T> {
        match self.pending.take() {
            Some((generation, value)) if generation == ticket.0 => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    #[cfg(test)]
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits out a debounce quiet period.
#[allow(async_fn_in_trait)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

/// `setTimeout`-backed sleep for the browser.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutSleep;

#[cfg(feature = "web")]
impl Sleep for TimeoutSleep {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[cfg(feature = "desktop")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleep;

#[cfg(feature = "desktop")]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

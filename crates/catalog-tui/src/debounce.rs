//! Debounced delivery of the search query.
//!
//! Every keystroke schedules a single-shot timer task; a newer keystroke
//! aborts the pending one. When a timer survives its quiet period the text
//! is sent over an mpsc channel that the main loop drains, so the items
//! state is only ever touched from the loop itself.
//!
//! Each emission carries the generation it was scheduled under. `input`
//! and `cancel` advance the generation, so a value that was already sent
//! but not yet drained is discarded instead of applied late.

use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Pending emission: the timer task and the value it will send.
#[derive(Debug)]
struct Pending {
    handle: JoinHandle<()>,
    value: String,
}

#[derive(Debug)]
pub struct QueryDebouncer {
    delay: Duration,
    min_len: Option<usize>,
    tx: UnboundedSender<(u64, String)>,
    rx: UnboundedReceiver<(u64, String)>,
    generation: u64,
    pending: Option<Pending>,
}

impl QueryDebouncer {
    pub fn new(delay: Duration, min_len: Option<usize>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            delay,
            min_len,
            tx,
            rx,
            generation: 0,
            pending: None,
        }
    }

    /// Returns `true` while an emission is scheduled and has not fired.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| !p.handle.is_finished())
    }

    /// Records new input text, restarting the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn input(&mut self, text: &str) {
        self.cancel();
        let value = self.effective(text);
        let tx = self.tx.clone();
        let delay = self.delay;
        let generation = self.generation;
        let sent = value.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(query = %sent, generation, "debounced query emitted");
            let _ = tx.send((generation, sent));
        });
        self.pending = Some(Pending { handle, value });
    }

    /// Emits the pending value immediately. Returns `false` if nothing was
    /// pending.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(p) if !p.handle.is_finished() => {
                p.handle.abort();
                tracing::debug!(query = %p.value, "query flushed");
                let _ = self.tx.send((self.generation, p.value));
                true
            }
            _ => false,
        }
    }

    /// Drops any pending emission without sending it, and invalidates
    /// emissions already sent but not yet received.
    pub fn cancel(&mut self) {
        if let Some(p) = self.pending.take() {
            p.handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Takes the next emitted query of the current generation, if any.
    /// Values from earlier generations are discarded.
    pub fn try_recv(&mut self) -> Option<String> {
        while let Ok((generation, value)) = self.rx.try_recv() {
            if generation == self.generation {
                return Some(value);
            }
            tracing::debug!(query = %value, generation, "stale query dropped");
        }
        None
    }

    /// Waits for the next emitted query of the current generation.
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<String> {
        loop {
            let (generation, value) = self.rx.recv().await?;
            if generation == self.generation {
                return Some(value);
            }
        }
    }

    /// Applies the minimum-length policy.
    fn effective(&self, text: &str) -> String {
        match self.min_len {
            Some(min) if text.chars().count() < min => String::new(),
            _ => text.to_string(),
        }
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        if let Some(p) = self.pending.take() {
            p.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    const DELAY: Duration = Duration::from_millis(500);

    fn debouncer(min_len: Option<usize>) -> QueryDebouncer {
        QueryDebouncer::new(DELAY, min_len)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_value() {
        let mut d = debouncer(None);
        let start = Instant::now();

        d.input("l");
        sleep(Duration::from_millis(50)).await;
        d.input("la");
        sleep(Duration::from_millis(50)).await;
        d.input("lam");

        let value = d.recv().await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(value, "lam");
        assert!(elapsed >= Duration::from_millis(600), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(610), "{elapsed:?}");

        sleep(Duration::from_secs(2)).await;
        assert_eq!(d.try_recv(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_emitted_before_quiet_period() {
        let mut d = debouncer(None);

        d.input("mug");
        sleep(Duration::from_millis(499)).await;

        assert_eq!(d.try_recv(), None);
        assert!(d.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_pauses_emit_each_value() {
        let mut d = debouncer(None);

        d.input("a");
        assert_eq!(d.recv().await.unwrap(), "a");
        d.input("ab");
        assert_eq!(d.recv().await.unwrap(), "ab");
        assert!(!d.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_emission() {
        let mut d = debouncer(None);

        d.input("lamp");
        d.cancel();
        sleep(Duration::from_secs(2)).await;

        assert_eq!(d.try_recv(), None);
        assert!(!d.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_value_already_sent() {
        let mut d = debouncer(None);

        d.input("x");
        sleep(Duration::from_millis(501)).await;
        assert!(!d.is_pending());

        d.cancel();

        assert_eq!(d.try_recv(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn new_input_supersedes_undrained_value() {
        let mut d = debouncer(None);

        d.input("a");
        sleep(Duration::from_millis(501)).await;
        d.input("ab");

        assert_eq!(d.try_recv(), None);
        assert_eq!(d.recv().await.unwrap(), "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn flush_emits_immediately_and_only_once() {
        let mut d = debouncer(None);

        d.input("desk");
        assert!(d.flush());
        assert_eq!(d.try_recv().as_deref(), Some("desk"));

        sleep(Duration::from_secs(2)).await;
        assert_eq!(d.try_recv(), None);
        assert!(!d.flush());
    }

    #[tokio::test(start_paused = true)]
    async fn short_text_emits_empty_under_min_len() {
        let mut d = debouncer(Some(3));

        d.input("ab");
        assert_eq!(d.recv().await.unwrap(), "");

        d.input("abc");
        assert_eq!(d.recv().await.unwrap(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn min_len_counts_characters_not_bytes() {
        let mut d = debouncer(Some(3));

        d.input("éé");
        assert_eq!(d.recv().await.unwrap(), "");
    }
}

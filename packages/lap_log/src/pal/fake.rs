//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

use crate::pal::abstractions::Platform;
use crate::{Error, Result};

const ERR_POISONED_LOCK: &str = "FakePlatform state lock should not be poisoned";

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    now: DateTime<Local>,
    free_memory: Option<u64>,
    terminal_columns: Option<u16>,
    thread_name: String,
    lines: Vec<String>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Multiple clones of the same `FakePlatform` share the same underlying state, allowing tests
/// to advance time, change free memory and inspect written lines after handing a clone to the
/// code under test.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a fake platform at a fixed instant with 1 GiB of free memory, an 80 column
    /// terminal and a thread named `main`.
    pub(crate) fn new() -> Self {
        let start = DateTime::from_timestamp(1_700_000_000, 0)
            .expect("fixed start timestamp is in range")
            .with_timezone(&Local);

        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                now: start,
                free_memory: Some(1 << 30),
                terminal_columns: Some(80),
                thread_name: "main".to_string(),
                lines: Vec::new(),
            })),
        }
    }

    /// Moves the clock forward.
    pub(crate) fn advance(&self, by: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);

        state.now = state
            .now
            .checked_add_signed(TimeDelta::from_std(by).expect("test duration is in range"))
            .expect("advanced time is in range");
    }

    /// Sets the free memory reading, or makes the probe fail if `None`.
    pub(crate) fn set_free_memory(&self, bytes: Option<u64>) {
        self.state.lock().expect(ERR_POISONED_LOCK).free_memory = bytes;
    }

    /// Sets the terminal width, or simulates no terminal if `None`.
    pub(crate) fn set_terminal_columns(&self, columns: Option<u16>) {
        self.state.lock().expect(ERR_POISONED_LOCK).terminal_columns = columns;
    }

    pub(crate) fn set_thread_name(&self, name: &str) {
        name.clone_into(&mut self.state.lock().expect(ERR_POISONED_LOCK).thread_name);
    }

    /// Every line written so far, in order.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.state.lock().expect(ERR_POISONED_LOCK).lines.clone()
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> DateTime<Local> {
        self.state.lock().expect(ERR_POISONED_LOCK).now
    }

    fn free_memory(&self) -> Result<u64> {
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .free_memory
            .ok_or_else(|| Error::ResourceUnavailable {
                resource: "free memory",
                reason: "fake probe disabled".to_string(),
            })
    }

    fn terminal_columns(&self) -> Option<u16> {
        self.state.lock().expect(ERR_POISONED_LOCK).terminal_columns
    }

    fn thread_name(&self) -> String {
        self.state.lock().expect(ERR_POISONED_LOCK).thread_name.clone()
    }

    fn write_line(&self, line: &str) {
        self.state
            .lock()
            .expect(ERR_POISONED_LOCK)
            .lines
            .push(line.to_owned());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn advances_time() {
        let platform = FakePlatform::new();
        let before = platform.now();

        platform.advance(Duration::from_millis(1500));

        assert_eq!(
            platform.now().signed_duration_since(before),
            TimeDelta::milliseconds(1500)
        );
    }

    #[test]
    fn disabled_memory_probe_fails() {
        let platform = FakePlatform::new();
        platform.set_free_memory(None);

        assert!(matches!(
            platform.free_memory(),
            Err(Error::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_free_memory(Some(42));
        platform2.write_line("hello");
        platform2.set_terminal_columns(None);

        assert_eq!(platform2.free_memory().unwrap(), 42);
        assert_eq!(platform1.lines(), vec!["hello".to_string()]);
        assert_eq!(platform1.terminal_columns(), None);
    }
}

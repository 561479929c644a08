use std::fmt::Debug;

use chrono::{DateTime, Local};

use crate::Result;

/// Everything the tracker needs from the environment it runs in.
///
/// This trait is automatically mocked by mockall in test builds, generating `MockPlatform`.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// The current wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// The amount of free memory on the host machine, in bytes.
    ///
    /// Returns [`Error::ResourceUnavailable`](crate::Error::ResourceUnavailable) if the
    /// platform cannot report memory statistics.
    fn free_memory(&self) -> Result<u64>;

    /// The column count of the attached terminal, if there is one.
    fn terminal_columns(&self) -> Option<u16>;

    /// A name identifying the calling thread.
    fn thread_name(&self) -> String;

    /// Writes one line of output, followed by a newline.
    fn write_line(&self, line: &str);
}

//! Builder for configuring a tracker.

use crate::Tracker;
use crate::pal::PlatformFacade;

/// Builder for a [`Tracker`], selecting which segments every recorded line carries and whether
/// lines can be captured into a buffer.
///
/// Every option is off by default. The timestamp segment is controlled per call through
/// [`LineOptions`](crate::LineOptions) instead.
///
/// # Examples
///
/// ```
/// use lap_log::Tracker;
///
/// let mut tracker = Tracker::builder()
///     .elapsed(true)
///     .memory(true)
///     .thread_id(true)
///     .buffer(true)
///     .build();
///
/// tracker.record_line("loaded input");
/// tracker.finish();
/// ```
#[derive(Debug)]
#[must_use]
pub struct TrackerBuilder {
    pub(crate) elapsed: bool,
    pub(crate) memory: bool,
    pub(crate) thread_id: bool,
    pub(crate) buffer: bool,
    pub(crate) platform: PlatformFacade,
}

impl TrackerBuilder {
    pub(crate) fn new() -> Self {
        Self {
            elapsed: false,
            memory: false,
            thread_id: false,
            buffer: false,
            platform: PlatformFacade::target(),
        }
    }

    /// Whether lines show `[since-last / since-start]` elapsed time.
    pub fn elapsed(mut self, show: bool) -> Self {
        self.elapsed = show;
        self
    }

    /// Whether lines show `[since-last / since-start]` memory consumption, measured as the
    /// decrease in free memory on the host.
    ///
    /// If the platform cannot report free memory, the segment is silently omitted.
    pub fn memory(mut self, show: bool) -> Self {
        self.memory = show;
        self
    }

    /// Whether lines start with the name of the calling thread.
    pub fn thread_id(mut self, show: bool) -> Self {
        self.thread_id = show;
        self
    }

    /// Whether the tracker keeps a buffer of clean lines recorded with capture enabled.
    pub fn buffer(mut self, enabled: bool) -> Self {
        self.buffer = enabled;
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Starts the session, taking the initial clock, free memory and terminal readings.
    #[must_use]
    pub fn build(self) -> Tracker {
        Tracker::start(self)
    }
}

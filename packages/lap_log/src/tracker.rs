//! Measurement tracker that decorates console lines.

use chrono::{DateTime, Local};

use crate::elapsed::{format_seconds, seconds_between};
use crate::pal::{Platform, PlatformFacade};
use crate::{Error, LineOptions, Style, TrackerBuilder, bytes_to_human, clear};

/// Separator width used when the terminal size cannot be determined.
const FALLBACK_COLUMNS: u16 = 20;

/// Message used by [`Tracker::finish()`].
pub const DEFAULT_FINISH_MESSAGE: &str = "done";

/// Printed in place of the total memory figure when no memory reading is available.
const MEMORY_NOT_AVAILABLE: &str = "n/a";

/// Free memory readings taken when the session started and at the last memory display.
#[derive(Clone, Copy, Debug)]
struct MemoryBaseline {
    init_free: u64,
    last_free: u64,
}

/// Prints console lines decorated with timestamps, elapsed time, memory consumption and the
/// calling thread's name, optionally keeping a transcript of clean (uncolored) lines.
///
/// A tracker represents one session. Elapsed time is reported both since the previous recorded
/// line and since the session started. Memory consumption is reported as the decrease of free
/// memory on the host machine, again both since the previous memory display and since the
/// session started.
///
/// Lines are written to stdout. Every recording method also returns the colored line.
///
/// # Examples
///
/// ```
/// use lap_log::{LineOptions, Tracker};
///
/// let mut tracker = Tracker::builder().elapsed(true).buffer(true).build();
///
/// tracker.record_section("loading");
/// tracker.record_line_with("parsed 10 files", LineOptions::new().capture(true));
/// let (elapsed, _memory) = tracker.finish();
///
/// assert!(elapsed.ends_with('s'));
/// assert_eq!(tracker.buffer().unwrap().len(), 1);
/// ```
///
/// # Threading
///
/// Recording requires `&mut self`, so concurrent use from multiple threads requires the caller
/// to wrap the tracker in a mutex. The thread name segment only reports which thread made the
/// call.
#[derive(Debug)]
pub struct Tracker {
    platform: PlatformFacade,

    show_elapsed: bool,
    show_memory: bool,
    show_thread_id: bool,

    init_timestamp: DateTime<Local>,
    last_timestamp: DateTime<Local>,

    // None if the memory probe was unavailable when the session started.
    memory: Option<MemoryBaseline>,

    separator: String,

    buffer: Option<Vec<String>>,
}

impl Tracker {
    /// Starts a session in which every optional segment and the buffer are disabled.
    ///
    /// Use [`Tracker::builder()`] to enable them.
    #[expect(
        clippy::new_without_default,
        reason = "starting a session reads the clock and probes the platform, which is not a default value"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Configures a new session.
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    pub(crate) fn start(builder: TrackerBuilder) -> Self {
        let TrackerBuilder {
            elapsed,
            memory,
            thread_id,
            buffer,
            platform,
        } = builder;

        let now = platform.now();

        let memory_baseline = match platform.free_memory() {
            Ok(free) => Some(MemoryBaseline {
                init_free: free,
                last_free: free,
            }),
            Err(error) => {
                if memory {
                    tracing::warn!(%error, "memory display disabled for this session");
                }
                None
            }
        };

        let columns = platform
            .terminal_columns()
            .filter(|&columns| columns > 0)
            .unwrap_or_else(|| {
                tracing::debug!(
                    columns = FALLBACK_COLUMNS,
                    "terminal size unavailable, using fallback separator width"
                );
                FALLBACK_COLUMNS
            });

        Self {
            show_elapsed: elapsed,
            show_memory: memory && memory_baseline.is_some(),
            show_thread_id: thread_id,
            init_timestamp: now,
            last_timestamp: now,
            memory: memory_baseline,
            separator: "-".repeat(usize::from(columns)),
            buffer: buffer.then(Vec::new),
            platform,
        }
    }

    /// Records a line with the timestamp shown and without capturing it.
    ///
    /// Returns the colored line that was written.
    pub fn record_line(&mut self, message: &str) -> String {
        self.record_line_with(message, LineOptions::new())
    }

    /// Records a line with explicit options.
    ///
    /// The line consists of the enabled segments in the order
    /// `[thread] HH:MM:SS [since-last / since-start] [used / total-used] message`, separated by
    /// single spaces. The timestamp is the only measurement segment printed without brackets.
    /// Returns the colored line that was written.
    pub fn record_line_with(&mut self, message: &str, options: LineOptions) -> String {
        let now = self.platform.now();
        let since_last = seconds_between(now, self.last_timestamp);
        let since_start = seconds_between(now, self.init_timestamp);
        self.last_timestamp = now;

        let memory_segment = if self.show_memory {
            self.measure_memory()
        } else {
            None
        };

        let mut segments = Vec::with_capacity(5);

        if self.show_thread_id {
            segments.push(format!("[{}]", self.platform.thread_name()));
        }

        if options.shows_timestamp() {
            segments.push(Style::Blue.wrap(&now.format("%H:%M:%S").to_string()));
        }

        if self.show_elapsed {
            segments.push(pair_segment(
                &format_seconds(since_last),
                &format_seconds(since_start),
            ));
        }

        if let Some(memory_segment) = memory_segment {
            segments.push(memory_segment);
        }

        segments.push(message.to_owned());

        let line = segments.join(" ");

        if options.captures() {
            self.capture(clear(&line));
        }

        self.platform.write_line(&line);

        line
    }

    /// Records a line between two separator rules as wide as the terminal.
    ///
    /// Returns the colored line that was written between the separators.
    pub fn record_section(&mut self, message: &str) -> String {
        self.record_section_with(message, LineOptions::new())
    }

    /// Records a line between two separator rules, with explicit options.
    ///
    /// When capturing, both separators are captured as well.
    pub fn record_section_with(&mut self, message: &str, options: LineOptions) -> String {
        self.write_separator(options.captures());
        let line = self.record_line_with(message, options);
        self.write_separator(options.captures());

        line
    }

    /// Records a line with the message highlighted as a failure.
    pub fn record_error(&mut self, message: &str) -> String {
        self.record_line(&Style::Fail.wrap(message))
    }

    /// Records a `done` section followed by a summary of the whole session.
    ///
    /// Returns the total elapsed time and total memory consumption as uncolored strings.
    pub fn finish(&mut self) -> (String, String) {
        self.finish_with_message(DEFAULT_FINISH_MESSAGE)
    }

    /// Records a section with the given message followed by a summary of the whole session.
    ///
    /// The summary reads `total: elapsed {time}, in use {memory}` and is followed by an empty
    /// line. The memory figure is `n/a` if the platform cannot report free memory.
    ///
    /// Returns the total elapsed time and total memory consumption as uncolored strings.
    pub fn finish_with_message(&mut self, message: &str) -> (String, String) {
        self.record_section(message);

        let elapsed = format_seconds(seconds_between(self.platform.now(), self.init_timestamp));

        let memory = match self.memory {
            Some(baseline) => match self.platform.free_memory() {
                Ok(free) => bytes_to_human(free_memory_decrease(baseline.init_free, free)),
                Err(error) => {
                    self.disable_memory(&error);
                    MEMORY_NOT_AVAILABLE.to_string()
                }
            },
            None => MEMORY_NOT_AVAILABLE.to_string(),
        };

        self.platform.write_line(&format!(
            "total: elapsed {}, in use {}",
            Style::Green.wrap(&elapsed),
            Style::Green.wrap(&memory)
        ));
        self.platform.write_line("");

        (elapsed, memory)
    }

    /// The captured clean lines, or `None` if the tracker was built without buffering.
    #[must_use]
    pub fn buffer(&self) -> Option<&[String]> {
        self.buffer.as_deref()
    }

    /// Takes the captured clean lines, leaving an empty buffer in place.
    ///
    /// Returns `None` if the tracker was built without buffering.
    pub fn take_buffer(&mut self) -> Option<Vec<String>> {
        self.buffer.as_mut().map(std::mem::take)
    }

    /// Whether the tracker was built with buffering.
    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.buffer.is_some()
    }

    /// Whether recorded lines currently carry the memory segment.
    ///
    /// This turns `false` for the rest of the session if the memory probe fails.
    #[must_use]
    pub fn is_memory_shown(&self) -> bool {
        self.show_memory
    }

    /// The separator rule printed around sections.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Reads free memory, advances the since-last baseline and formats the memory segment.
    fn measure_memory(&mut self) -> Option<String> {
        let baseline = self.memory.as_mut()?;

        match self.platform.free_memory() {
            Ok(free) => {
                let used = free_memory_decrease(baseline.last_free, free);
                let total_used = free_memory_decrease(baseline.init_free, free);
                baseline.last_free = free;

                Some(pair_segment(
                    &bytes_to_human(used),
                    &bytes_to_human(total_used),
                ))
            }
            Err(error) => {
                self.disable_memory(&error);
                None
            }
        }
    }

    fn disable_memory(&mut self, error: &Error) {
        if self.show_memory {
            tracing::warn!(%error, "memory display disabled for the rest of this session");
        }

        self.show_memory = false;
    }

    fn write_separator(&mut self, capture: bool) {
        self.platform.write_line(&self.separator);

        if capture {
            let separator = self.separator.clone();
            self.capture(separator);
        }
    }

    fn capture(&mut self, clean_line: String) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.push(clean_line);
        }
    }

    #[cfg(test)]
    pub(crate) fn with_platform(builder: TrackerBuilder, platform: PlatformFacade) -> Self {
        Self::start(builder.platform(platform))
    }
}

/// Formats `[first / second]` with both values highlighted.
fn pair_segment(first: &str, second: &str) -> String {
    format!("[{} / {}]", Style::Blue.wrap(first), Style::Blue.wrap(second))
}

/// How much free memory decreased from `previous` to `current`. Negative if it grew.
fn free_memory_decrease(previous: u64, current: u64) -> i64 {
    let magnitude = i64::try_from(previous.abs_diff(current)).unwrap_or(i64::MAX);

    if previous >= current {
        magnitude
    } else {
        magnitude.saturating_neg()
    }
}

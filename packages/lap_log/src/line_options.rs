/// Per-call options for recording a line with a [`Tracker`](crate::Tracker).
///
/// By default the wall-clock timestamp is shown and the line is not captured into the
/// tracker's buffer.
///
/// # Examples
///
/// ```
/// use lap_log::{LineOptions, Tracker};
///
/// let mut tracker = Tracker::builder().buffer(true).build();
/// tracker.record_line_with("quiet", LineOptions::new().show_timestamp(false).capture(true));
///
/// assert_eq!(tracker.buffer().unwrap(), ["quiet"]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineOptions {
    show_timestamp: bool,
    capture: bool,
}

impl LineOptions {
    /// Options with the timestamp shown and capture disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_timestamp: true,
            capture: false,
        }
    }

    /// Whether the `HH:MM:SS` timestamp segment is included in the line.
    #[must_use]
    pub const fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    /// Whether the clean form of the line is appended to the tracker's buffer.
    ///
    /// Has no effect on trackers built without buffering.
    #[must_use]
    pub const fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub(crate) const fn shows_timestamp(self) -> bool {
        self.show_timestamp
    }

    pub(crate) const fn captures(self) -> bool {
        self.capture
    }
}

impl Default for LineOptions {
    fn default() -> Self {
        Self::new()
    }
}

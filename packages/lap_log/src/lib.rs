#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Console line decoration for long-running programs: timestamps, elapsed time, memory
//! consumption, thread names and ANSI highlighting, with an optional transcript of clean lines.
//!
//! The core functionality includes:
//! - [`Tracker`] - One measurement session that records decorated lines to stdout
//! - [`TrackerBuilder`] - Selects which segments a tracker's lines carry
//! - [`LineOptions`] - Per-line timestamp and capture options
//! - [`Style`], [`wrap()`] and [`clear()`] - Named ANSI styles and their exact inverse
//! - [`bytes_to_human()`] - Compact binary-unit formatting of byte counts
//!
//! This package is a development aid. Problems with the platform probes never abort the host
//! program; the affected segment is dropped instead.
//!
//! # Simple usage
//!
//! ```
//! use lap_log::Tracker;
//!
//! let mut tracker = Tracker::builder().elapsed(true).memory(true).build();
//!
//! tracker.record_section("loading");
//! let data: Vec<u64> = (0..100_000).collect();
//! tracker.record_line(&format!("loaded {} items", data.len()));
//!
//! let (elapsed, memory) = tracker.finish();
//! println!("took {elapsed}, consumed {memory}");
//! ```
//!
//! A line with every segment enabled looks like this (colors omitted):
//!
//! ```text
//! [main] 14:03:27 [0.52s / 3.1s] [976.6K / 12.4M] loaded 100000 items
//! ```
//!
//! The first pair is the time since the previous line and since the session started. The
//! second pair is the decrease of free memory on the host over the same two periods.
//!
//! # Capturing a transcript
//!
//! A tracker built with buffering keeps the clean (uncolored) form of every line recorded with
//! [`LineOptions::capture`]. A tracker built without buffering has no buffer at all:
//!
//! ```
//! use lap_log::{LineOptions, Tracker};
//!
//! let mut buffered = Tracker::builder().buffer(true).build();
//! buffered.record_line_with("kept", LineOptions::new().show_timestamp(false).capture(true));
//! buffered.record_line("not kept");
//! assert_eq!(buffered.buffer().unwrap(), ["kept"]);
//!
//! let unbuffered = Tracker::new();
//! assert!(unbuffered.buffer().is_none());
//! ```
//!
//! # Threading
//!
//! Trackers do no internal locking. Share one across threads behind a mutex.

mod bytes;
mod elapsed;
mod error;
mod highlight;
mod line_options;
mod pal;
mod tracker;
mod tracker_builder;

pub use bytes::bytes_to_human;
pub use error::{Error, Result};
pub use highlight::{Style, clear, wrap, wrap_named};
pub use line_options::LineOptions;
pub use tracker::{DEFAULT_FINISH_MESSAGE, Tracker};
pub use tracker_builder::TrackerBuilder;

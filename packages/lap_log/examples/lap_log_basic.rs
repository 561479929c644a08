//! Demonstrates a tracker reporting the time and memory consumed by a few phases of work.
//!
//! Run with: `cargo run --example lap_log_basic`.

use std::hint::black_box;
use std::thread;
use std::time::Duration;

use lap_log::{LineOptions, Tracker};

fn main() {
    let mut tracker = Tracker::builder()
        .elapsed(true)
        .memory(true)
        .thread_id(true)
        .buffer(true)
        .build();

    tracker.record_section_with("allocating", LineOptions::new().capture(true));

    let data: Vec<u64> = (0..2_000_000).collect();
    black_box(&data);
    tracker.record_line_with(
        &format!("allocated {} numbers", data.len()),
        LineOptions::new().capture(true),
    );

    thread::sleep(Duration::from_millis(250));
    tracker.record_line_with("slept a while", LineOptions::new().capture(true));

    drop(data);
    tracker.record_error("dropped the numbers, this is just what an error line looks like");

    let (elapsed, memory) = tracker.finish();

    println!("Summary: {elapsed} elapsed, {memory} consumed");
    println!();
    println!("Captured transcript:");

    for line in tracker.take_buffer().unwrap_or_default() {
        println!("  {line}");
    }
}

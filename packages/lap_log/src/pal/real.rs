use std::io::{self, Write};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread;

use chrono::{DateTime, Local};
use sysinfo::System;
use terminal_size::{Width, terminal_size};

use crate::pal::Platform;
use crate::{Error, Result};

/// The platform the crate was built for: system clock, `sysinfo` memory statistics,
/// the terminal attached to stdout and stdout itself as the output sink.
///
/// One `sysinfo::System` is created on the first memory reading and refreshed on every later
/// one.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    system: OnceLock<Mutex<System>>,
}

impl BuildTargetPlatform {
    pub(crate) const fn new() -> Self {
        Self {
            system: OnceLock::new(),
        }
    }
}

// Trivial forwarder to system APIs - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Platform for BuildTargetPlatform {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn free_memory(&self) -> Result<u64> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(Error::ResourceUnavailable {
                resource: "free memory",
                reason: "memory statistics are not supported on this operating system"
                    .to_string(),
            });
        }

        // Every refresh overwrites the whole reading, so a poisoned lock is still usable.
        let mut system = self
            .system
            .get_or_init(|| Mutex::new(System::new()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        system.refresh_memory();

        if system.total_memory() == 0 {
            return Err(Error::ResourceUnavailable {
                resource: "free memory",
                reason: "the operating system reported zero total memory".to_string(),
            });
        }

        Ok(system.free_memory())
    }

    fn terminal_columns(&self) -> Option<u16> {
        terminal_size().map(|(Width(columns), _)| columns)
    }

    fn thread_name(&self) -> String {
        let current = thread::current();

        current
            .name()
            .map_or_else(|| format!("{:?}", current.id()), ToOwned::to_owned)
    }

    fn write_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();

        if let Err(error) = writeln!(stdout, "{line}") {
            tracing::debug!(%error, "failed to write tracker line to stdout");
        }
    }
}

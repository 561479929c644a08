use std::fmt;
#[cfg(test)]
use std::sync::Arc;

use chrono::{DateTime, Local};

#[cfg(test)]
use crate::pal::{FakePlatform, MockPlatform};
use crate::pal::{BuildTargetPlatform, Platform};
use crate::Result;

/// Facade over the platform, dispatching to the real implementation or a test double.
///
/// In production, this always uses `BuildTargetPlatform`. In tests, it can also wrap a
/// `FakePlatform` or a `MockPlatform` for controlled scenarios.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Target(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fake(FakePlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

// Debug implementations have no API contract to test.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl fmt::Debug for PlatformFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(_) => f.debug_struct("PlatformFacade::Target").finish(),
            #[cfg(test)]
            Self::Fake(fake) => f.debug_tuple("PlatformFacade::Fake").field(fake).finish(),
            #[cfg(test)]
            Self::Mock(_) => f.debug_struct("PlatformFacade::Mock").finish(),
        }
    }
}

static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl PlatformFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(fake: FakePlatform) -> Self {
        Self::Fake(fake)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockPlatform) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

// Facade types are trivial pass-through layers - not worth testing.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)]
impl Platform for PlatformFacade {
    fn now(&self) -> DateTime<Local> {
        match self {
            Self::Target(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(fake) => fake.now(),
            #[cfg(test)]
            Self::Mock(mock) => mock.now(),
        }
    }

    fn free_memory(&self) -> Result<u64> {
        match self {
            Self::Target(platform) => platform.free_memory(),
            #[cfg(test)]
            Self::Fake(fake) => fake.free_memory(),
            #[cfg(test)]
            Self::Mock(mock) => mock.free_memory(),
        }
    }

    fn terminal_columns(&self) -> Option<u16> {
        match self {
            Self::Target(platform) => platform.terminal_columns(),
            #[cfg(test)]
            Self::Fake(fake) => fake.terminal_columns(),
            #[cfg(test)]
            Self::Mock(mock) => mock.terminal_columns(),
        }
    }

    fn thread_name(&self) -> String {
        match self {
            Self::Target(platform) => platform.thread_name(),
            #[cfg(test)]
            Self::Fake(fake) => fake.thread_name(),
            #[cfg(test)]
            Self::Mock(mock) => mock.thread_name(),
        }
    }

    fn write_line(&self, line: &str) {
        match self {
            Self::Target(platform) => platform.write_line(line),
            #[cfg(test)]
            Self::Fake(fake) => fake.write_line(line),
            #[cfg(test)]
            Self::Mock(mock) => mock.write_line(line),
        }
    }
}

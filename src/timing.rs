//! Process CPU sampling and the per-pass time deltas derived from it.

use std::io;
use std::time::Duration;

/// Snapshot of this process's accumulated CPU time since it started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuUsage {
    pub user: Duration,
    pub system: Duration,
}

/// Read the process's user and system CPU counters via `getrusage(2)`.
#[cfg(unix)]
pub fn process_cpu() -> io::Result<CpuUsage> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc == -1 {
        return Err(io::Error::last_os_error());
    }
    let usage = unsafe { usage.assume_init() };
    Ok(CpuUsage {
        user: timeval_to_duration(usage.ru_utime),
        system: timeval_to_duration(usage.ru_stime),
    })
}

/// CPU accounting is only wired up on Unix. Elsewhere the CPU columns of
/// the report read zero and only the wall-clock column is meaningful.
#[cfg(not(unix))]
pub fn process_cpu() -> io::Result<CpuUsage> {
    Ok(CpuUsage::default())
}

#[cfg(unix)]
fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = tv.tv_sec.max(0) as u64;
    let micros = tv.tv_usec.clamp(0, 999_999) as u32;
    Duration::new(secs, micros * 1_000)
}

/// The four figures reported for one benchmark pass, all in seconds on the
/// report line: user CPU, system CPU, their sum, and elapsed wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchTimes {
    pub user: Duration,
    pub system: Duration,
    pub total: Duration,
    pub real: Duration,
}

impl BenchTimes {
    /// Delta between two CPU snapshots paired with a measured wall time.
    ///
    /// Counters never run backwards in practice; subtraction still
    /// saturates so a clamped sample can not panic mid-run.
    pub fn between(start: CpuUsage, end: CpuUsage, real: Duration) -> Self {
        let user = end.user.saturating_sub(start.user);
        let system = end.system.saturating_sub(start.system);
        Self {
            user,
            system,
            total: user + system,
            real,
        }
    }
}

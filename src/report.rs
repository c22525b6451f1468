//! The on-disk report and the timing harness that appends to it.
//!
//! Layout follows the classic four-column benchmark table: user CPU,
//! system CPU, their sum, then wall-clock seconds in parentheses. Lines
//! are written straight to the file as each pass finishes, so a run that
//! dies mid-way still leaves the completed passes on disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::error::BenchResult;
use crate::timing::{process_cpu, BenchTimes};

/// Fixed stem of every report filename.
pub const REPORT_PREFIX: &str = "single_thread_benchmark";

/// Filename for a report opened at `ts`, stamped to the minute.
pub fn report_filename(ts: &DateTime<Local>) -> String {
    format!("{}-{}.txt", REPORT_PREFIX, ts.format("%Y%m%d%H%M"))
}

/// Caption row for [`format_line`] output. The first three headings end
/// flush with their figures; `real` ends over the last digit of the
/// parenthesized wall clock.
pub fn caption(label_width: usize) -> String {
    format!(
        "{:width$}{:>10} {:>10} {:>10} {:>11}\n",
        "",
        "user",
        "system",
        "total",
        "real",
        width = label_width
    )
}

/// One report row: the label padded to `label_width`, then the four
/// figures with six decimal places, wall clock parenthesized.
pub fn format_line(label: &str, label_width: usize, times: &BenchTimes) -> String {
    format!(
        "{:<width$}{:>10.6} {:>10.6} {:>10.6} ({:>10.6})\n",
        label,
        times.user.as_secs_f64(),
        times.system.as_secs_f64(),
        times.total.as_secs_f64(),
        times.real.as_secs_f64(),
        width = label_width
    )
}

/// Report file plus the label width its rows are formatted with.
pub struct Report {
    out: File,
    path: PathBuf,
    label_width: usize,
}

impl Report {
    /// Create (or truncate) the timestamped report in `dir` and write the
    /// caption row. The file exists on disk before any pass runs.
    pub fn create(dir: &Path, label_width: usize) -> BenchResult<Self> {
        let path = dir.join(report_filename(&Local::now()));
        let out = File::create(&path)?;
        let mut report = Self {
            out,
            path,
            label_width,
        };
        report.out.write_all(caption(report.label_width).as_bytes())?;
        Ok(report)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Time `block` and append one row for it on success.
    ///
    /// CPU counters are sampled immediately before and after the block and
    /// the wall clock runs across the same span. An error from the block
    /// propagates as-is; no row is written for a failed pass.
    pub fn measure<F>(&mut self, label: &str, block: F) -> BenchResult<BenchTimes>
    where
        F: FnOnce() -> BenchResult<()>,
    {
        let cpu_start = process_cpu()?;
        let wall = Instant::now();
        block()?;
        let real = wall.elapsed();
        let cpu_end = process_cpu()?;

        let times = BenchTimes::between(cpu_start, cpu_end, real);
        let line = format_line(label, self.label_width, &times);
        self.out.write_all(line.as_bytes())?;
        Ok(times)
    }
}

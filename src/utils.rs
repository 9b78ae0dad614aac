//!
//! Small helpers shared by the CLI and evaluation
//!
use indicatif::ProgressStyle;
use std::time::Instant;

///
/// measure time in milli-seconds (ms) of closure.
///
pub fn timer<F, T>(f: F) -> (T, u128)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let ret = f();
    let duration = start.elapsed();
    (ret, duration.as_millis())
}

///
/// Progress bar style of long running loops
///
pub fn progress_common_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "[{elapsed_precise}/{duration_precise}] {bar:40.cyan/blue} {pos:>6}/{len:6} ({per_sec})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}

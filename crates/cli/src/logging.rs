//! Per-run debug log file

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use navorder_core::config::constants::EXECUTABLE_PATH;

/// `logs/` next to the binary, created on first use
fn logs_dir() -> io::Result<PathBuf> {
    let exe = EXECUTABLE_PATH
        .get()
        .ok_or_else(|| io::Error::other("executable path unknown"))?;
    let dir = exe
        .parent()
        .ok_or_else(|| io::Error::other("executable has no parent directory"))?
        .join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn log_file_name(pid: u32, started: SystemTime) -> String {
    let secs = started
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("navorder_{pid}_{secs}.log")
}

/// Fresh log file for this invocation and where it lives
pub fn open_run_log() -> io::Result<(PathBuf, File)> {
    let path = logs_dir()?.join(log_file_name(std::process::id(), SystemTime::now()));
    let file = File::create(&path)?;
    Ok((path, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn file_name_carries_pid_and_start_time() {
        let started = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        assert_eq!(log_file_name(42, started), "navorder_42_1700000000.log");
    }

    #[test]
    fn clock_before_epoch_falls_back_to_zero() {
        let started = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(log_file_name(7, started), "navorder_7_0.log");
    }
}

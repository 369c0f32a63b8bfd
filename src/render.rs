use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::{Command, Stdio};

use log::{debug, info};
use thiserror::Error;

use crate::chart;
use crate::sweep::Sweep;

// Hidden first argument: the process becomes a chart window fed a JSON sweep on stdin.
pub const CHART_CHILD_ARG: &str = "--render-chart";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no graphical display available (neither DISPLAY nor WAYLAND_DISPLAY is set)")]
    NoDisplay,
    #[error("failed to start chart window: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("chart window exited with {0}")]
    ChildFailed(std::process::ExitStatus),
    #[error("invalid chart data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart backend failed: {0}")]
    Backend(String),
    #[error("chart I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait ChartRenderer {
    fn render(&mut self, sweep: &Sweep) -> Result<(), RenderError>;
}

/// Each chart gets its own child process: a windowing event loop can be
/// created only once per process.
#[derive(Debug, Default)]
pub struct WindowRenderer;

impl WindowRenderer {
    pub fn new() -> Self {
        WindowRenderer
    }
}

impl ChartRenderer for WindowRenderer {
    fn render(&mut self, sweep: &Sweep) -> Result<(), RenderError> {
        check_display()?;

        let exe = std::env::current_exe().map_err(RenderError::Spawn)?;
        let payload = serde_json::to_vec(sweep)?;
        debug!("spawning {} {} ({} samples)", exe.display(), CHART_CHILD_ARG, sweep.len());

        let mut command = Command::new(exe);
        command.arg(CHART_CHILD_ARG);
        run_child(command, &payload)
    }
}

fn run_child(mut command: Command, payload: &[u8]) -> Result<(), RenderError> {
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(RenderError::Spawn)?;
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(payload),
        None => Ok(()),
    };

    // A child that died early breaks the pipe; its exit status says more.
    let status = child.wait()?;
    info!("chart window closed with {status}");
    if !status.success() {
        return Err(RenderError::ChildFailed(status));
    }
    written?;
    Ok(())
}

fn check_display() -> Result<(), RenderError> {
    if display_available(|name| std::env::var_os(name)) {
        Ok(())
    } else {
        Err(RenderError::NoDisplay)
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_available<F>(var: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    let has = |name: &str| var(name).is_some_and(|v| !v.is_empty());
    has("DISPLAY") || has("WAYLAND_DISPLAY")
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_available<F>(_var: F) -> bool
where
    F: Fn(&str) -> Option<OsString>,
{
    true
}

pub fn serve_chart<R: Read>(input: R) -> Result<(), RenderError> {
    let sweep = read_sweep(input)?;
    chart::show(sweep).map_err(|e| RenderError::Backend(e.to_string()))
}

fn read_sweep<R: Read>(input: R) -> Result<Sweep, RenderError> {
    Ok(serde_json::from_reader(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::Band;

    #[test]
    fn child_reads_what_parent_writes() {
        let sweep = Sweep::for_band(Band::Vhf, "Wavelength vs Frequency").unwrap();
        let payload = serde_json::to_vec(&sweep).unwrap();
        let decoded = read_sweep(payload.as_slice()).unwrap();
        assert_eq!(decoded, sweep);
    }

    #[test]
    fn child_rejects_garbage() {
        let err = read_sweep(&b"not json"[..]).unwrap_err();
        assert!(matches!(err, RenderError::Json(_)));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn no_display_without_display_vars() {
        assert!(!display_available(|_| None));
        assert!(!display_available(|_| Some(OsString::new())));
        assert!(display_available(|name| (name == "DISPLAY").then(|| OsString::from(":0"))));
        assert!(display_available(|name| (name == "WAYLAND_DISPLAY").then(|| OsString::from("wayland-0"))));
    }

    #[cfg(unix)]
    #[test]
    fn failing_child_is_reported() {
        let mut command = Command::new("sh");
        command.args(["-c", "cat > /dev/null; exit 3"]);
        let err = run_child(command, b"{}").unwrap_err();
        match err {
            RenderError::ChildFailed(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn child_exiting_before_reading_is_reported() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 2"]);
        let payload = vec![b' '; 4 << 20];
        let err = run_child(command, &payload).unwrap_err();
        assert!(matches!(err, RenderError::ChildFailed(_)), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn successful_child_reads_payload() {
        let mut command = Command::new("sh");
        command.args(["-c", "test \"$(cat)\" = ok"]);
        run_child(command, b"ok").unwrap();
    }

    #[test]
    fn spawn_failure_is_reported() {
        let command = Command::new("/nonexistent/ham-wavelength-chart");
        assert!(matches!(run_child(command, b""), Err(RenderError::Spawn(_))));
    }
}

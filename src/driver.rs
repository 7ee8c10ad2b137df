//! Process driver for the vendor installer
//!
//! Spawns the installer described by an `InvocationSpec` and waits for it to
//! finish. The wait is deliberately unbounded: a full MATLAB install can run
//! for tens of minutes. stdin/stdout stay inherited so the interactive and
//! automated wizard modes keep working; stderr is piped through a drain
//! thread into a bounded tail kept for diagnostics.

use std::collections::VecDeque;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;

use crate::error::{InstallError, Result};
use crate::invocation::InvocationSpec;
use crate::platform;

/// Maximum stderr bytes retained for diagnostics
const STDERR_TAIL_BYTES: usize = 4096;

/// Terminal outcome of an installer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub succeeded: bool,
    pub stderr_tail: Option<String>,
}

/// Run the installer to completion
///
/// Fails up front with `ElevationRequired` when the spec demands elevated
/// privileges the process does not have; elevation itself (sudo, UAC) is the
/// invoking shell's job. A child killed by SIGINT/SIGTERM is reported as
/// `Cancelled`: the terminal delivers the interrupt to the whole foreground
/// process group, so the installer dies with us rather than running detached.
pub fn run(spec: &InvocationSpec) -> Result<ExecutionResult> {
    if spec.requires_elevation && !platform::is_elevated() {
        return Err(InstallError::ElevationRequired);
    }

    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| InstallError::SpawnFailed {
            program: spec.program.display().to_string(),
            reason: e.to_string(),
        })?;

    // Drain stderr on a thread so the child never blocks on a full pipe
    let drain = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut tail: VecDeque<u8> = VecDeque::with_capacity(STDERR_TAIL_BYTES);
            let mut buf = [0u8; 1024];
            loop {
                match pipe.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        tail.extend(&buf[..n]);
                        while tail.len() > STDERR_TAIL_BYTES {
                            tail.pop_front();
                        }
                    }
                }
            }
            tail
        })
    });

    let status = child.wait()?;

    let stderr_tail = drain
        .and_then(|handle| handle.join().ok())
        .map(|tail| {
            let bytes: Vec<u8> = tail.into_iter().collect();
            String::from_utf8_lossy(&bytes).trim().to_string()
        })
        .filter(|tail| !tail.is_empty());

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            if signal == libc::SIGINT || signal == libc::SIGTERM {
                return Err(InstallError::Cancelled);
            }
        }
    }

    let exit_code = status.code().unwrap_or(-1);
    Ok(ExecutionResult {
        exit_code,
        succeeded: exit_code == 0,
        stderr_tail,
    })
}

//! Blocking solver session execution.
//!
//! One session is one solver child process fed a command script on stdin.
//! stdout and stderr are merged into an anonymous spool file instead of
//! pipes: the solver prints far more than a pipe buffer holds, and the
//! spool keeps the wait loop single-threaded with no deadlock risk. The
//! exit status is recorded but never interpreted; the solver exits nonzero
//! on a scripted QUIT, so the polar save-file on disk is what decides
//! whether a session produced anything.

use crate::error::{XfoilError, XfoilResult};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// How often the wait loop checks whether the solver has exited.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal state of one bounded solver session.
#[derive(Debug)]
pub enum SessionOutcome {
    /// The solver exited within the bound; the merged console output is
    /// kept for diagnostics.
    Completed { transcript: String },
    /// The bound elapsed first and the solver was killed.
    TimedOut,
}

/// Launches one solver child process per session.
#[derive(Debug, Clone)]
pub struct SessionRunner {
    executable: PathBuf,
    timeout: Duration,
}

impl SessionRunner {
    pub fn new(executable: PathBuf, timeout: Duration) -> Self {
        Self {
            executable,
            timeout,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one session: pipe `script` to the solver on stdin, then wait
    /// for exit or the timeout, whichever comes first. A timed-out child
    /// is killed and reaped before this returns.
    pub fn run(&self, script: &str) -> XfoilResult<SessionOutcome> {
        let mut spool = tempfile::tempfile()?;

        let mut command = Command::new(&self.executable);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::from(spool.try_clone()?))
            .stderr(Stdio::from(spool.try_clone()?));
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            // CREATE_NO_WINDOW: a batch sweep must not flash a console
            // window per session.
            command.creation_flags(0x0800_0000);
        }

        let mut child = command.spawn().map_err(|source| XfoilError::Spawn {
            executable: self.executable.clone(),
            source,
        })?;

        feed_script(&mut child, script)?;

        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait()? {
                Some(status) => {
                    // Nonzero is normal for a scripted QUIT; the polar
                    // save-file is the real success signal.
                    tracing::debug!("solver exited with status {}", status);
                    break;
                }
                None if Instant::now() >= deadline => {
                    tracing::debug!("solver still running at {:?}, killing", self.timeout);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(SessionOutcome::TimedOut);
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        }

        spool.seek(SeekFrom::Start(0))?;
        let mut raw = Vec::new();
        spool.read_to_end(&mut raw)?;

        Ok(SessionOutcome::Completed {
            transcript: String::from_utf8_lossy(&raw).into_owned(),
        })
    }
}

/// Write the whole script and close stdin so the solver sees EOF after
/// the final QUIT.
fn feed_script(child: &mut Child, script: &str) -> XfoilResult<()> {
    let Some(mut stdin) = child.stdin.take() else {
        return Ok(());
    };
    let result = stdin.write_all(script.as_bytes());
    drop(stdin);
    match result {
        Ok(()) => Ok(()),
        // The solver can quit before consuming the whole script (bad
        // geometry name, early QUIT). What that meant is decided by the
        // polar check, not by the pipe.
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("solver closed stdin early: {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

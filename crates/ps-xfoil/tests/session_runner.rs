//! Session runner tests against /bin/sh standing in for the solver.

#![cfg(unix)]

use ps_xfoil::{SessionOutcome, SessionRunner, XfoilError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[test]
fn completed_session_captures_merged_transcript() {
    let runner = SessionRunner::new(PathBuf::from("/bin/sh"), Duration::from_secs(10));
    let outcome = runner
        .run("echo to-stdout\necho to-stderr 1>&2\n")
        .unwrap();

    match outcome {
        SessionOutcome::Completed { transcript } => {
            assert!(transcript.contains("to-stdout"));
            assert!(transcript.contains("to-stderr"));
        }
        SessionOutcome::TimedOut => panic!("session should complete"),
    }
}

#[test]
fn session_reads_whole_script_from_stdin() {
    let runner = SessionRunner::new(PathBuf::from("/bin/sh"), Duration::from_secs(10));
    // cat the script back: the last line must have arrived intact.
    let outcome = runner.run("cat <<'EOF'\nfirst\nlast\nEOF\n").unwrap();

    match outcome {
        SessionOutcome::Completed { transcript } => {
            assert!(transcript.contains("first\nlast\n"));
        }
        SessionOutcome::TimedOut => panic!("session should complete"),
    }
}

#[test]
fn hung_session_is_killed_at_the_bound() {
    let runner = SessionRunner::new(PathBuf::from("/bin/sh"), Duration::from_millis(300));
    let started = Instant::now();
    let outcome = runner.run("sleep 30\n").unwrap();

    assert!(matches!(outcome, SessionOutcome::TimedOut));
    // Far below the scripted sleep: the child was killed, not waited out.
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn early_exit_without_reading_stdin_is_not_an_error() {
    let runner = SessionRunner::new(PathBuf::from("/bin/true"), Duration::from_secs(10));
    let outcome = runner.run("PANE\nOPER\nQUIT\n").unwrap();
    assert!(matches!(outcome, SessionOutcome::Completed { .. }));
}

#[test]
fn missing_executable_is_a_spawn_error() {
    let runner = SessionRunner::new(
        PathBuf::from("/nonexistent/xfoil-binary"),
        Duration::from_secs(1),
    );
    let err = runner.run("QUIT\n").unwrap_err();
    assert!(matches!(err, XfoilError::Spawn { .. }));
}

#[test]
fn nonzero_exit_still_completes() {
    let runner = SessionRunner::new(PathBuf::from("/bin/sh"), Duration::from_secs(10));
    let outcome = runner.run("echo before-failure\nexit 3\n").unwrap();

    match outcome {
        SessionOutcome::Completed { transcript } => {
            assert!(transcript.contains("before-failure"));
        }
        SessionOutcome::TimedOut => panic!("session should complete"),
    }
}

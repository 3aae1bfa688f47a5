/*
Cross-language comparison run

The same benchmark written for another interpreter can be launched after
the Rust timings, through the platform shell, with its output going
straight to the console. A missing interpreter or a failing script is
reported and skipped, it never ends the run.
*/

use std::process::Command;

use log::{info, warn};

#[derive(Debug, PartialEq, Eq)]
pub enum Comparison {
    Completed,
    Failed(Option<i32>),
    Unavailable(String),
}

fn shell(command: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

pub fn run_comparison(command: &str) -> Comparison {
    info!("running comparison: {command}");
    launch(shell(command), command)
}

fn launch(mut cmd: Command, command: &str) -> Comparison {
    match cmd.status() {
        Ok(status) if status.success() => Comparison::Completed,
        Ok(status) => {
            warn!("comparison `{command}` exited with {status}");
            Comparison::Failed(status.code())
        }
        Err(e) => {
            warn!("comparison `{command}` could not be started: {e}");
            Comparison::Unavailable(e.to_string())
        }
    }
}

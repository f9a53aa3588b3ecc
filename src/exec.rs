use log::debug;
use std::process::Command;

/// Runs an external command and reports whether it exited with code 0.
pub fn run(args: &[&str]) -> bool {
    run_expecting(args, &[0])
}

/// Runs an external command and reports whether its exit code is one of
/// `accepted`. A missing binary, a failed launch or a signal-killed process
/// all count as failure.
pub fn run_expecting(args: &[&str], accepted: &[i32]) -> bool {
    let Some((program, rest)) = args.split_first() else {
        return false;
    };

    match Command::new(program).args(rest).status() {
        Ok(status) => status.code().is_some_and(|code| accepted.contains(&code)),
        Err(why) => {
            debug!("Failed to run {program}: {why}");
            false
        }
    }
}

/// Runs an external command and captures its exit code and standard output.
/// Returns `None` if the command could not be launched or did not exit on
/// its own.
pub fn execute(args: &[&str]) -> Option<(i32, String)> {
    let (program, rest) = args.split_first()?;

    let output = match Command::new(program).args(rest).output() {
        Ok(output) => output,
        Err(why) => {
            debug!("Failed to run {program}: {why}");
            return None;
        }
    };

    let code = output.status.code()?;
    Some((code, String::from_utf8_lossy(&output.stdout).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::{execute, run, run_expecting};

    #[test]
    fn zero_exit_is_success() {
        assert!(run(&["true"]));
    }

    #[test]
    fn nonzero_exit_is_failure() {
        assert!(!run(&["false"]));
    }

    #[test]
    fn accepted_codes_extend_success() {
        assert!(run_expecting(&["sh", "-c", "exit 7"], &[0, 7]));
        assert!(!run_expecting(&["sh", "-c", "exit 7"], &[0]));
    }

    #[test]
    fn missing_binary_is_failure() {
        assert!(!run(&["/nonexistent/not-a-binary"]));
        assert!(execute(&["/nonexistent/not-a-binary"]).is_none());
    }

    #[test]
    fn empty_command_line_is_failure() {
        assert!(!run(&[]));
        assert!(execute(&[]).is_none());
    }

    #[test]
    fn execute_captures_code_and_output() {
        let (code, output) = execute(&["echo", "degraded"]).unwrap();
        assert_eq!(code, 0);
        assert!(output.starts_with("degraded"));
    }
}

// FileScout - platform/shell.rs
//
// Hand a path to the host OS: open it with the default application, or
// reveal it in the file manager.
//
// Platform behaviour:
// - **Windows**: `explorer <path>` / `explorer /select,"<path>"`.
// - **macOS**: `open <path>` / `open -R <path>` (reveals in Finder).
// - **Linux and others**: `xdg-open <path>` / `xdg-open <parent>` (most
//   Linux file managers have no standard per-file selection API).
//
// Arguments are always passed to the helper directly, never through a
// shell. Helpers run on a short-lived thread so waiting for an exit status
// never stalls the UI; outcomes come back through `Launcher::poll`.

use crate::util::error::LaunchError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::mpsc;

/// What to do with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Open with the default application for its type.
    Open,
    /// Show the containing folder in the file manager.
    Reveal,
}

/// A fully resolved helper-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: &'static str,
    pub args: Vec<OsString>,
    /// Whether a non-zero exit status means failure. `explorer.exe` returns
    /// 1 even on success, so its status is ignored.
    pub check_status: bool,
    /// Pass `args` verbatim on the command line (Windows only). Explorer
    /// parses its own command line and does not understand the quoting
    /// the standard library applies around arguments containing spaces.
    pub raw_args: bool,
}

/// Build the helper invocation for `action` on the current platform.
pub fn launch_plan(action: ShellAction, path: &Path) -> LaunchPlan {
    #[cfg(target_os = "windows")]
    {
        let arg = match action {
            ShellAction::Open => path.as_os_str().to_os_string(),
            ShellAction::Reveal => {
                // One token, no space after the comma, path quoted inside it.
                let mut arg = OsString::from("/select,\"");
                arg.push(path.as_os_str());
                arg.push("\"");
                arg
            }
        };
        LaunchPlan {
            program: "explorer",
            raw_args: action == ShellAction::Reveal,
            args: vec![arg],
            check_status: false,
        }
    }
    #[cfg(target_os = "macos")]
    {
        let mut args = Vec::with_capacity(2);
        if action == ShellAction::Reveal {
            args.push(OsString::from("-R"));
        }
        args.push(path.as_os_str().to_os_string());
        LaunchPlan {
            program: "open",
            args,
            check_status: true,
            raw_args: false,
        }
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let target = match action {
            ShellAction::Open => path,
            ShellAction::Reveal => path.parent().unwrap_or(path),
        };
        LaunchPlan {
            program: "xdg-open",
            args: vec![target.as_os_str().to_os_string()],
            check_status: true,
            raw_args: false,
        }
    }
}

/// Open `path` with the default application. Blocks until the helper exits.
pub fn open_path(path: &Path) -> Result<(), LaunchError> {
    run(ShellAction::Open, path)
}

/// Reveal `path` in the system file manager. Blocks until the helper exits.
pub fn reveal_in_file_manager(path: &Path) -> Result<(), LaunchError> {
    run(ShellAction::Reveal, path)
}

/// Runs open/reveal requests off the UI thread.
///
/// Each request gets its own thread; results are collected with `poll`.
pub struct Launcher {
    tx: mpsc::Sender<Result<(), LaunchError>>,
    rx: mpsc::Receiver<Result<(), LaunchError>>,
    in_flight: usize,
}

impl Launcher {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start `action` on `path` in the background.
    pub fn launch(&mut self, action: ShellAction, path: PathBuf) {
        let tx = self.tx.clone();
        self.in_flight += 1;
        std::thread::spawn(move || {
            let outcome = match action {
                ShellAction::Open => open_path(&path),
                ShellAction::Reveal => reveal_in_file_manager(&path),
            };
            let _ = tx.send(outcome);
        });
    }

    /// Outcomes of finished launches, without blocking.
    pub fn poll(&mut self) -> Vec<Result<(), LaunchError>> {
        let outcomes: Vec<_> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(outcomes.len());
        outcomes
    }

    /// Whether any launch has not reported back yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

fn run(action: ShellAction, path: &Path) -> Result<(), LaunchError> {
    if !path.exists() {
        return Err(LaunchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let plan = launch_plan(action, path);
    tracing::info!(
        action = ?action,
        program = plan.program,
        path = %path.display(),
        "Launching shell helper"
    );

    let mut command = Command::new(plan.program);
    apply_args(&mut command, &plan);

    let spawn_err = |source| LaunchError::Spawn {
        program: plan.program.to_string(),
        path: path.to_path_buf(),
        source,
    };

    if !plan.check_status {
        command.spawn().map_err(spawn_err)?;
        return Ok(());
    }

    let status = command.status().map_err(spawn_err)?;
    if status.success() {
        Ok(())
    } else {
        tracing::warn!(
            program = plan.program,
            path = %path.display(),
            code = ?status.code(),
            "Shell helper reported failure"
        );
        Err(LaunchError::ExitStatus {
            program: plan.program.to_string(),
            path: path.to_path_buf(),
            code: status.code(),
        })
    }
}

#[cfg(target_os = "windows")]
fn apply_args(command: &mut Command, plan: &LaunchPlan) {
    use std::os::windows::process::CommandExt;
    if plan.raw_args {
        for arg in &plan.args {
            command.raw_arg(arg);
        }
    } else {
        command.args(&plan.args);
    }
}

#[cfg(not(target_os = "windows"))]
fn apply_args(command: &mut Command, plan: &LaunchPlan) {
    command.args(&plan.args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_missing_path_rejected_before_spawn() {
        let path = PathBuf::from("/nonexistent/filescout/test.txt");
        let err = open_path(&path).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound { .. }));
        let err = reveal_in_file_manager(&path).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound { .. }));
    }

    #[test]
    fn test_launcher_reports_through_poll() {
        let mut launcher = Launcher::new();
        assert!(launcher.poll().is_empty());
        assert!(!launcher.is_busy());
        launcher.launch(
            ShellAction::Open,
            PathBuf::from("/nonexistent/filescout/test.txt"),
        );

        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let outcomes = launcher.poll();
            if let Some(outcome) = outcomes.into_iter().next() {
                assert!(matches!(outcome, Err(LaunchError::NotFound { .. })));
                assert!(!launcher.is_busy());
                break;
            }
            assert!(Instant::now() < deadline, "launch outcome never arrived");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_plan_passes_path_as_single_argument() {
        let path = Path::new("/tmp/dir with spaces/a; rm -rf.txt");
        let plan = launch_plan(ShellAction::Open, path);
        assert_eq!(plan.args.last().unwrap(), path.as_os_str());
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn test_linux_reveal_opens_parent() {
        let plan = launch_plan(ShellAction::Reveal, Path::new("/srv/docs/report.pdf"));
        assert_eq!(plan.program, "xdg-open");
        assert_eq!(plan.args, vec![OsString::from("/srv/docs")]);
        assert!(plan.check_status);
        assert!(!plan.raw_args);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_macos_reveal_uses_finder_flag() {
        let plan = launch_plan(ShellAction::Reveal, Path::new("/Users/u/report.pdf"));
        assert_eq!(plan.program, "open");
        assert_eq!(plan.args[0], OsString::from("-R"));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_reveal_select_argument() {
        let plan = launch_plan(
            ShellAction::Reveal,
            Path::new(r"C:\Users\Jane Doe\report.pdf"),
        );
        assert_eq!(plan.program, "explorer");
        assert_eq!(
            plan.args,
            vec![OsString::from(r#"/select,"C:\Users\Jane Doe\report.pdf""#)]
        );
        assert!(plan.raw_args);
        assert!(!plan.check_status);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_open_uses_plain_argument() {
        let plan = launch_plan(ShellAction::Open, Path::new(r"C:\Users\Jane Doe\report.pdf"));
        assert!(!plan.raw_args);
        assert_eq!(plan.args, vec![OsString::from(r"C:\Users\Jane Doe\report.pdf")]);
    }
}

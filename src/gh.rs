use crate::config::get_gh_binary;
use crate::error::{Result, StatusError};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread;
use std::time::Duration;

// A freshly written binary can briefly fail to exec with ETXTBSY while
// another thread's fork still holds its write descriptor.
const SPAWN_ATTEMPTS: u32 = 10;
const SPAWN_RETRY_DELAY: Duration = Duration::from_millis(20);

/// Runs the `gh` CLI, which owns authentication and transport.
#[derive(Debug, Clone)]
pub struct Gh {
    binary: PathBuf,
}

impl Gh {
    /// Use the binary from `USER_STATUS_GH`, or `gh` on the PATH
    pub fn from_env() -> Self {
        Self::with_binary(get_gh_binary())
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run gh with `args` and return its stdout
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<String> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        log::debug!("Running {} {:?}", self.binary.display(), args);

        let output = self.spawn(&args).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StatusError::GhNotFound(e.to_string()),
            _ => StatusError::Io(e),
        })?;

        if !output.status.success() {
            return Err(StatusError::Gh {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn spawn(&self, args: &[&str]) -> io::Result<Output> {
        let mut attempt = 1;
        loop {
            match Command::new(&self.binary).args(args).output() {
                Err(e)
                    if e.kind() == io::ErrorKind::ExecutableFileBusy
                        && attempt < SPAWN_ATTEMPTS =>
                {
                    log::debug!("{} is busy, retrying", self.binary.display());
                    attempt += 1;
                    thread::sleep(SPAWN_RETRY_DELAY);
                }
                result => return result,
            }
        }
    }

    /// `gh api graphql` with the given `-f`/`-F` field arguments
    pub fn graphql(&self, fields: &[String]) -> Result<String> {
        let mut args = vec!["api".to_string(), "graphql".to_string()];
        args.extend(fields.iter().cloned());
        self.run(args.as_slice())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn script(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("gh");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn returns_stdout() {
        let dir = TempDir::new().unwrap();
        let gh = Gh::with_binary(script(&dir, "echo \"$@\""));

        let out = gh.graphql(&["-f".to_string(), "query=x".to_string()]).unwrap();
        assert_eq!(out.trim(), "api graphql -f query=x");
    }

    #[test]
    fn non_zero_exit_carries_stderr() {
        let dir = TempDir::new().unwrap();
        let gh = Gh::with_binary(script(&dir, "echo 'bad credentials' >&2\nexit 4"));

        match gh.run(&["api"]) {
            Err(StatusError::Gh { status, stderr }) => {
                assert_eq!(status.code(), Some(4));
                assert_eq!(stderr, "bad credentials");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn waits_for_binary_still_open_for_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gh");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"#!/bin/sh\necho ready\n").unwrap();
        file.flush().unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let writer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(40));
            drop(file);
        });

        let out = Gh::with_binary(path).run(&["api"]).unwrap();
        writer.join().unwrap();
        assert_eq!(out.trim(), "ready");
    }

    #[test]
    fn missing_binary_is_reported() {
        let dir = TempDir::new().unwrap();
        let gh = Gh::with_binary(dir.path().join("no-such-gh"));
        assert!(matches!(gh.run(&["api"]), Err(StatusError::GhNotFound(_))));
    }
}

//! Shared testing utilities for sxcu-setup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROFILE_NAMES: [&str; 4] = ["file", "image", "text", "url"];

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory used as the working directory of CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default output root (`<work>/output`).
    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.join("output")
    }

    /// Build a command for invoking the compiled `sxcu-setup` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sxcu-setup").expect("Failed to locate sxcu-setup binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Read a file relative to the output root.
    pub fn read_output(&self, relative: &str) -> String {
        let path = self.output_dir().join(relative);
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
    }

    /// Write a file relative to the working directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Seed a minimal template directory at `<work>/<dir>`.
    pub fn seed_templates(&self, dir: &str) -> PathBuf {
        self.write_file(
            &format!("{dir}/Caddyfile"),
            "{{ mainApiUrl }} {\n\treverse_proxy api:3000\n}\n",
        );
        self.write_file(
            &format!("{dir}/docker-compose.yaml"),
            "services:\n  api:\n    image: api\n    {% if port %}\n    ports:\n      - \"{{ port }}:3000\"\n    {% endif %}\n",
        );
        for name in PROFILE_NAMES {
            self.write_file(
                &format!("{dir}/sxcu/{name}.sxcu"),
                &format!(
                    "{{\"Name\": \"{name}\", \"RequestURL\": \"{{{{ mainApiUrl }}}}\", \"Key\": \"{{{{ apiKey }}}}\"}}\n"
                ),
            );
        }
        self.work_dir.join(dir)
    }

    /// Assert every artifact of a run without a custom web server exists.
    pub fn assert_default_artifacts(&self) {
        let out = self.output_dir();
        assert!(out.join(".env").is_file(), ".env should exist");
        assert!(out.join("docker/caddy/Caddyfile").is_file(), "Caddyfile should exist");
        assert!(out.join("docker-compose.yaml").is_file(), "compose file should exist");
        for name in PROFILE_NAMES {
            assert!(out.join(format!("sxcu/{name}.sxcu")).is_file(), "{name}.sxcu should exist");
        }
    }

    /// Value of `KEY` in the generated `.env`.
    pub fn env_value(&self, key: &str) -> Option<String> {
        self.read_output(".env")
            .lines()
            .find_map(|line| line.strip_prefix(&format!("{key}=")).map(str::to_string))
    }
}

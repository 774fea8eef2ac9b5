//! [`TestWorkspace`] builder for REDkit install and workspace layouts.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Name of the editor session file inside `bin`.
pub const SESSIONS_FILE_NAME: &str = "r4LavaEditor2.sessions.ini";

/// A temporary directory laid out like a user's machine:
///
/// ```text
/// <root>/
///   The Witcher 3 REDkit/bin/r4LavaEditor2.sessions.ini
///   workspace/dlc/<project>/
///   presets/<name>.txt
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn redkit_dir(&self) -> PathBuf {
        self.root().join("The Witcher 3 REDkit")
    }

    pub fn workspace_dir(&self) -> PathBuf {
        self.root().join("workspace")
    }

    pub fn presets_dir(&self) -> PathBuf {
        self.root().join("presets")
    }

    /// Create `The Witcher 3 REDkit/bin/r4LavaEditor2.sessions.ini` with
    /// `content` and return its path.
    pub fn install_redkit(&self, content: &[u8]) -> PathBuf {
        let bin = self.redkit_dir().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join(SESSIONS_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    /// Create `workspace/dlc/<project>` for each project and return the
    /// workspace path.
    pub fn create_workspace(&self, projects: &[&str]) -> PathBuf {
        let dlc = self.workspace_dir().join("dlc");
        fs::create_dir_all(&dlc).unwrap();
        for project in projects {
            fs::create_dir_all(dlc.join(project)).unwrap();
        }
        self.workspace_dir()
    }

    /// Write `presets/<name>.txt` and return its path.
    pub fn write_preset(&self, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(self.presets_dir()).unwrap();
        let path = self.presets_dir().join(format!("{name}.txt"));
        fs::write(&path, content).unwrap();
        path
    }

    /// Write an arbitrary file relative to the root.
    pub fn write_file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the root as bytes.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_bytes(&self, rel: &str) -> Vec<u8> {
        let full_path = self.root().join(rel);
        fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}

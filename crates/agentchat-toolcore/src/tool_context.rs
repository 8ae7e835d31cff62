use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Tool execution context
///
/// This struct provides the execution context for tools, including:
/// - Working directory that file-touching tools are confined to
/// - Session identifier for tracking operations
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub work_dir: PathBuf,
    pub session_id: String,
}

impl ToolContext {
    pub fn new(work_dir: PathBuf, session_id: String) -> Self {
        Self {
            work_dir,
            session_id,
        }
    }

    /// Resolve a user-supplied relative path inside the work directory.
    ///
    /// Absolute paths and any `..` component are rejected. The deepest part
    /// of the joined path that already exists is canonicalized and must stay
    /// under the canonical work directory, so symlinks cannot lead outside.
    pub fn resolve_path(&self, relative: &str) -> Result<PathBuf> {
        let candidate = Path::new(relative.trim());

        if candidate.is_absolute() {
            anyhow::bail!("Absolute paths are not allowed: {}", relative);
        }

        for component in candidate.components() {
            match component {
                Component::ParentDir => {
                    anyhow::bail!("Path escapes the work directory: {}", relative)
                }
                Component::Prefix(_) | Component::RootDir => {
                    anyhow::bail!("Absolute paths are not allowed: {}", relative)
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        let joined = self.work_dir.join(candidate);
        self.ensure_inside_work_dir(&joined, relative)?;
        Ok(joined)
    }

    fn ensure_inside_work_dir(&self, joined: &Path, relative: &str) -> Result<()> {
        let root = self
            .work_dir
            .canonicalize()
            .with_context(|| format!("Work directory unavailable: {}", self.work_dir.display()))?;

        // symlink_metadata so a dangling link counts as existing and fails to canonicalize
        let mut existing = joined;
        while fs::symlink_metadata(existing).is_err() {
            match existing.parent() {
                Some(parent) => existing = parent,
                None => break,
            }
        }

        let resolved = existing
            .canonicalize()
            .with_context(|| format!("Cannot resolve path: {}", relative))?;
        if !resolved.starts_with(&root) {
            anyhow::bail!("Path escapes the work directory: {}", relative);
        }
        Ok(())
    }
}

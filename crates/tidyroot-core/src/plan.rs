use std::path::{Component, Path, PathBuf};

use crate::error::{CleanupError, Result};

pub const DEFAULT_BASE_PATH: &str = "/workspaces/buisness";

pub const DEFAULT_TARGETS: &[&str] = &["client", "server", "start.sh"];

pub const DEFAULT_VISIBLE_FILES: &[&str] = &["railway.json", "package.json", ".gitignore"];

/// What to remove, where, and which root files to surface afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupPlan {
    base_path: PathBuf,
    targets: Vec<String>,
    visible_files: Vec<String>,
}

impl Default for CleanupPlan {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            targets: DEFAULT_TARGETS.iter().map(ToString::to_string).collect(),
            visible_files: DEFAULT_VISIBLE_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl CleanupPlan {
    /// # Errors
    ///
    /// Returns an error if any target is empty, absolute, or contains a
    /// `..` component.
    pub fn new<T, V>(base_path: impl Into<PathBuf>, targets: T, visible_files: V) -> Result<Self>
    where
        T: IntoIterator,
        T::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        for target in &targets {
            validate_target(target)?;
        }

        Ok(Self {
            base_path: base_path.into(),
            targets,
            visible_files: visible_files.into_iter().map(Into::into).collect(),
        })
    }

    /// Keeps the default targets and allow-list but points them at another root.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub fn visible_files(&self) -> &[String] {
        &self.visible_files
    }

    #[must_use]
    pub fn resolve(&self, target: &str) -> PathBuf {
        self.base_path.join(target)
    }

    #[must_use]
    pub fn is_visible_file(&self, name: &str) -> bool {
        self.visible_files.iter().any(|visible| visible == name)
    }
}

fn validate_target(target: &str) -> Result<()> {
    if target.is_empty() {
        return Err(CleanupError::EmptyTarget);
    }

    let path = Path::new(target);
    if path.has_root() {
        return Err(CleanupError::AbsoluteTarget(target.to_string()));
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CleanupError::EscapingTarget(target.to_string()));
    }

    Ok(())
}

use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{
    FileChange, FileChangeType, IndexChangeType, WorkspaceChangeType,
};
use crate::artifacts::status::inspector::Inspector;
use crate::errors::Result;
use colored::Colorize;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use tracing::debug;

pub type FileSet = BTreeSet<PathBuf>;
pub type IndexChangeSet = BTreeMap<PathBuf, IndexChangeType>;
pub type WorkspaceChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;

/// The three status categories for one working directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    /// Staged files that are new or differ from HEAD
    pub(crate) index_changeset: IndexChangeSet,
    /// Tracked files whose working copy differs from staging or HEAD
    pub(crate) workspace_changeset: WorkspaceChangeSet,
    /// Files neither staged nor in HEAD
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    pub fn to_be_committed(&self) -> &IndexChangeSet {
        &self.index_changeset
    }

    pub fn not_staged(&self) -> &WorkspaceChangeSet {
        &self.workspace_changeset
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked_files
    }

    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty()
            && self.workspace_changeset.is_empty()
            && self.untracked_files.is_empty()
    }

    /// Two-column short format, tracked changes first, then untracked files
    pub fn porcelain(&self) -> String {
        let mut changed_files = BTreeMap::<&PathBuf, FileChange>::new();

        for (path, change) in &self.index_changeset {
            changed_files.entry(path).or_default().index_change = *change;
        }
        for (path, change) in &self.workspace_changeset {
            changed_files.entry(path).or_default().workspace_change = *change;
        }

        let tracked = changed_files
            .into_iter()
            .map(|(path, change)| format!("{} {}\n", change, path.display()));
        let untracked = self
            .untracked_files
            .iter()
            .map(|path| format!("{} {}\n", FileChange::untracked(), path.display()));

        tracked.chain(untracked).collect()
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Changes to be committed:")?;
        if self.index_changeset.is_empty() {
            writeln!(f, "{:>8}(no changes staged for commit)", "")?;
        }
        for (path, change) in &self.index_changeset {
            writeln!(f, "{}{}", FileChangeType::Index(*change), path.display())?;
        }

        writeln!(f)?;
        writeln!(f, "Changes not staged for commit:")?;
        if self.workspace_changeset.is_empty() {
            writeln!(f, "{:>8}(no changes added to commit)", "")?;
        }
        for (path, change) in &self.workspace_changeset {
            writeln!(f, "{}{}", FileChangeType::Workspace(*change), path.display())?;
        }

        writeln!(f)?;
        writeln!(f, "Untracked files:")?;
        if self.untracked_files.is_empty() {
            writeln!(f, "{:>8}(nothing untracked)", "")?;
        }
        for path in &self.untracked_files {
            writeln!(f, "{:>8}{}", "", path.display().to_string().red())?;
        }

        Ok(())
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    /// Reconcile the working directory, staging and the HEAD commit.
    ///
    /// A staged file is compared with HEAD for "to be committed". Its working
    /// copy is compared with the staged version; only files that are not
    /// staged fall back to the HEAD version. Ignored paths are never reported
    /// as untracked or modified.
    pub fn initialize(&self) -> Result<StatusInfo> {
        let workspace = self.repository.workspace()?;
        let head = self.repository.head_commit()?;

        let staged_files = self.repository.staging().list_files()?;
        let committed_files = match &head {
            Some(id) => self.repository.history().list_files(id)?,
            None => FileSet::new(),
        };
        let working_files = workspace.list_files()?;

        let inspector = Inspector::new(
            self.repository,
            head.as_ref(),
            self.repository.content_store(),
        );

        let mut index_changeset = IndexChangeSet::new();
        for path in &staged_files {
            let change =
                inspector.check_staged_against_head(path, committed_files.contains(path))?;
            if change != IndexChangeType::None {
                index_changeset.insert(path.clone(), change);
            }
        }

        let tracked_files = staged_files
            .union(&committed_files)
            .cloned()
            .collect::<FileSet>();

        let mut workspace_changeset = WorkspaceChangeSet::new();
        for path in tracked_files.iter().filter(|path| !workspace.is_ignored(path)) {
            let change = inspector.check_workspace(path, staged_files.contains(path))?;
            if matches!(
                change,
                WorkspaceChangeType::Modified | WorkspaceChangeType::Deleted
            ) {
                workspace_changeset.insert(path.clone(), change);
            }
        }

        let untracked_files = working_files
            .difference(&tracked_files)
            .cloned()
            .collect::<FileSet>();

        debug!(
            to_be_committed = index_changeset.len(),
            not_staged = workspace_changeset.len(),
            untracked = untracked_files.len(),
            "computed status"
        );

        Ok(StatusInfo {
            index_changeset,
            workspace_changeset,
            untracked_files,
        })
    }
}

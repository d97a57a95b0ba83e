use crate::areas::storage::Storage;
use crate::artifacts::ignore::pattern::GlobPattern;
use crate::errors::Result;
use crate::{CONTROL_DIR, IGNORE_FILE};
use std::path::{Component, Path};
use tracing::debug;

/// Names that are never tracked, whatever the user rules say: wit's own files
/// and the metadata of tools that commonly share a working directory
const BUILTIN_IGNORED: [&str; 7] = [
    CONTROL_DIR,
    IGNORE_FILE,
    ".git",
    ".venv",
    ".idea",
    "__pycache__",
    ".DS_Store",
];

/// Decides whether a working-directory path is excluded from tracking
///
/// Rules come from the `.witignore` file at the working-directory root, one glob
/// per line. A path is ignored when any rule matches its own name or the name of
/// one of its ancestor directories.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<GlobPattern>,
}

impl IgnoreMatcher {
    pub fn from_rules(content: &str) -> Self {
        IgnoreMatcher {
            rules: content.lines().filter_map(GlobPattern::parse).collect(),
        }
    }

    /// Load the rule file; a missing file means no user rules
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let path = Path::new(IGNORE_FILE);
        if !storage.is_file(path) {
            return Ok(Self::default());
        }

        let content = storage.read(path)?;
        let matcher = Self::from_rules(&String::from_utf8_lossy(&content));
        debug!(rules = matcher.rules.len(), "loaded ignore rules");

        Ok(matcher)
    }

    /// Append a rule line verbatim. No deduplication and no validation.
    pub fn add_rule(storage: &dyn Storage, pattern: &str) -> Result<()> {
        storage.append(Path::new(IGNORE_FILE), format!("{pattern}\n").as_bytes())?;
        debug!(pattern, "appended ignore rule");

        Ok(())
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(GlobPattern::as_str)
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let names = Self::component_names(path);
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();

        if names.iter().any(|name| BUILTIN_IGNORED.contains(name)) {
            return true;
        }

        self.rules.iter().any(|rule| rule.matches(&names))
    }

    /// The first rule matching the path, for reporting
    pub fn matching_rule(&self, path: &Path) -> Option<&str> {
        let names = Self::component_names(path);
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();

        self.rules
            .iter()
            .find(|rule| rule.matches(&names))
            .map(GlobPattern::as_str)
    }

    fn component_names(path: &Path) -> Vec<String> {
        path.components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }
}

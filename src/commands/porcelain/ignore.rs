use crate::IGNORE_FILE;
use crate::areas::repository::Repository;
use crate::artifacts::ignore::matcher::IgnoreMatcher;
use crate::errors::Result;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreOutcome {
    pattern: String,
}

impl std::fmt::Display for IgnoreOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Added '{}' to {}", self.pattern, IGNORE_FILE)
    }
}

impl Repository {
    /// Append a rule to `.witignore`. The rule file belongs to the working
    /// directory, so this works before `init` as well.
    pub fn ignore(&self, pattern: &str) -> Result<IgnoreOutcome> {
        IgnoreMatcher::add_rule(self.storage(), pattern)?;
        info!(pattern, "added ignore rule");

        Ok(IgnoreOutcome {
            pattern: pattern.to_string(),
        })
    }
}

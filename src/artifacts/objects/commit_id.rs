//! Commit identifier
//!
//! Commit ids are 8 random lowercase hex characters. They carry no ordering;
//! history is ordered by commit timestamp instead.

use fake::rand;

/// Number of hex characters in a commit id
pub const COMMIT_ID_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Draw a fresh random id. Uniqueness against existing commits is the
    /// caller's concern.
    pub fn generate() -> Self {
        CommitId(format!("{:08x}", rand::random::<u32>()))
    }

    /// Validate a user supplied id; `None` if it is not 8 hex characters
    pub fn try_parse(id: &str) -> Option<Self> {
        let id = id.trim();

        if id.len() != COMMIT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        Some(CommitId(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

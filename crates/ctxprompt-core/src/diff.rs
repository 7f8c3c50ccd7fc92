use std::fmt;

/// What the diff section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffContent {
    Changes(String),
    /// The current branch is the baseline itself.
    SameBranch,
    NoChanges,
}

/// The diff of the current branch against a baseline branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    pub baseline: String,
    pub content: DiffContent,
}

impl DiffRecord {
    pub fn caption(&self) -> String {
        format!("Diff between current branch and `{}`:", self.baseline)
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            DiffContent::Changes(diff) => f.write_str(diff),
            DiffContent::SameBranch => {
                write!(f, "[Current branch is {}; no diff to show]", self.baseline)
            }
            DiffContent::NoChanges => {
                f.write_str("[No changes between current branch and main branch]")
            }
        }
    }
}

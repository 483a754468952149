#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub branch: String,
}

impl Library {
    pub fn new(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
        }
    }
}

/// A book shelved at one branch. The author is kept as a raw name and the
/// branch is only used for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchBook {
    pub title: String,
    pub author: String,
    pub branch: String,
}

impl BranchBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            branch: branch.into(),
        }
    }

    pub fn is_shelved_at(&self, library: &Library) -> bool {
        self.branch == library.branch
    }
}

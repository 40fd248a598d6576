// src/models/project_record.rs

/// Raw counts for a single project subtree, produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub sloc: u64,
    pub word_count: u64,
    pub file_count: u64,
}

impl ProjectRecord {
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            sloc: 0,
            word_count: 0,
            file_count: 0,
        }
    }

    /// Folds the counts of one qualifying file into the record.
    pub const fn add_file(&mut self, sloc: u64, words: u64) {
        self.sloc = self.sloc.saturating_add(sloc);
        self.word_count = self.word_count.saturating_add(words);
        self.file_count = self.file_count.saturating_add(1);
    }
}

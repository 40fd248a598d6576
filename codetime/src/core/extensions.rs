// src/core/extensions.rs
use std::path::Path;

/// Which of the two recognized extension sets a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Code,
    Document,
}

// These two sets are a versioned constant: adding or removing an extension
// changes every scan result downstream.
const CODE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "py", "java", "c", "cpp", "go", "rb", "sh", "bat", "ps1", "kt",
    "rs", "dart", "swift", "html", "css", "scss", "vue", "svelte", "sql",
];

const DOC_EXTENSIONS: &[&str] = &[
    "md", "txt", "json", "yaml", "yml", "rst", "ini", "toml", "cfg", "csv", "tsv", "xml",
    "properties", "docx", "doc", "xlsx", "xls",
];

/// Returns the set a file name's extension belongs to, or `None` for
/// unrecognized extensions. Files without an extension never qualify.
#[must_use]
pub fn classify(file_name: &str) -> Option<FileKind> {
    let ext = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
    if CODE_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Code)
    } else if DOC_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Document)
    } else {
        None
    }
}

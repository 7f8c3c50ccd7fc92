use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Text standing in for file content that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// An optional file is absent. Carries the base name.
    OptionalMissing { name: String },
    /// A required file is absent. Carries the path as given, before expansion.
    NotFound { path: String },
    NotAFile { path: String },
    /// Zero-length file. Carries the base name.
    Empty { name: String },
    ReadError { path: String, detail: String },
}

impl Placeholder {
    /// True for outcomes that indicate something went wrong, as opposed to an
    /// expected absence of an optional file.
    pub fn is_error(&self) -> bool {
        !matches!(self, Placeholder::OptionalMissing { .. })
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::OptionalMissing { name } => {
                write!(f, "[Optional file not found: {name}]")
            }
            Placeholder::NotFound { path } => write!(f, "Error: File not found at '{path}'"),
            Placeholder::NotAFile { path } => write!(f, "Error: Path is not a file: '{path}'"),
            Placeholder::Empty { name } => write!(f, "[File is empty: {name}]"),
            Placeholder::ReadError { path, detail } => {
                write!(f, "Error reading file '{path}': {detail}")
            }
        }
    }
}

/// Result of loading a file: its text, or a placeholder describing the gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Placeholder(Placeholder),
}

impl FileContent {
    pub fn text(&self) -> Option<&str> {
        match self {
            FileContent::Text(t) => Some(t),
            FileContent::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            FileContent::Text(_) => None,
            FileContent::Placeholder(p) => Some(p),
        }
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(t) => f.write_str(t),
            FileContent::Placeholder(p) => p.fmt(f),
        }
    }
}

/// Expand a leading `~` or `~/` to the current user's home directory.
/// `~user` forms and paths without a leading tilde are returned unchanged.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };
    let rest = if text == "~" {
        ""
    } else if let Some(rest) = text.strip_prefix("~/") {
        rest
    } else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

/// Base name of a path for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a file as UTF-8 text. Never fails: every filesystem problem is turned
/// into a [`Placeholder`].
pub fn load_file(path: impl AsRef<Path>, optional: bool) -> FileContent {
    let given = path.as_ref();
    let shown = given.display().to_string();
    let expanded = expand_tilde(given);

    let meta = match fs::metadata(&expanded) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let placeholder = if optional {
                Placeholder::OptionalMissing {
                    name: display_name(given),
                }
            } else {
                Placeholder::NotFound { path: shown }
            };
            return FileContent::Placeholder(placeholder);
        }
        Err(e) => {
            return FileContent::Placeholder(Placeholder::ReadError {
                path: shown,
                detail: e.to_string(),
            })
        }
    };

    if !meta.is_file() {
        return FileContent::Placeholder(Placeholder::NotAFile { path: shown });
    }

    if meta.len() == 0 {
        return FileContent::Placeholder(Placeholder::Empty {
            name: display_name(given),
        });
    }

    match fs::read_to_string(&expanded) {
        Ok(text) => FileContent::Text(text),
        Err(e) => FileContent::Placeholder(Placeholder::ReadError {
            path: shown,
            detail: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.py");
        let body = "def f():\n    return 1\n\n  trailing  \n";
        fs::write(&path, body).unwrap();

        assert_eq!(load_file(&path, false), FileContent::Text(body.into()));
    }

    #[test]
    fn optional_missing_uses_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal-output.txt");

        let content = load_file(&path, true);
        assert_eq!(
            content.to_string(),
            "[Optional file not found: terminal-output.txt]"
        );
        assert!(!content.placeholder().unwrap().is_error());
    }

    #[test]
    fn required_missing_keeps_unexpanded_path() {
        let content = load_file("~/definitely/not/here/ctxprompt.md", false);
        assert_eq!(
            content.to_string(),
            "Error: File not found at '~/definitely/not/here/ctxprompt.md'"
        );
        assert!(content.placeholder().unwrap().is_error());
    }

    #[test]
    fn empty_file_placeholder_ignores_optionality() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.rs");
        fs::write(&path, "").unwrap();

        for optional in [true, false] {
            assert_eq!(
                load_file(&path, optional).to_string(),
                "[File is empty: empty.rs]"
            );
        }
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let content = load_file(dir.path(), false);
        assert_eq!(
            content.to_string(),
            format!("Error: Path is not a file: '{}'", dir.path().display())
        );
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let content = load_file(&path, false);
        let text = content.to_string();
        assert!(text.starts_with(&format!("Error reading file '{}': ", path.display())));
        assert!(matches!(
            content,
            FileContent::Placeholder(Placeholder::ReadError { .. })
        ));
    }

    #[test]
    fn tilde_expansion() {
        let Some(home) = std::env::var_os("HOME") else {
            return;
        };
        let home = PathBuf::from(home);
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/src/a.rs")), home.join("src/a.rs"));
        assert_eq!(expand_tilde(Path::new("/abs/~/x")), PathBuf::from("/abs/~/x"));
        assert_eq!(expand_tilde(Path::new("~bob/x")), PathBuf::from("~bob/x"));
    }
}

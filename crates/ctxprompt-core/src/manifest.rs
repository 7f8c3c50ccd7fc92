use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::CoreError;
use crate::loader::{display_name, expand_tilde, load_file, FileContent};

/// How the lines of a manifest map to file paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManifestFormat {
    /// Every line is a complete path.
    #[default]
    Direct,
    /// The first line is a base directory; later lines are joined onto it.
    BasePrefixed,
    /// `BasePrefixed` when the first line names an existing directory, else `Direct`.
    Auto,
}

impl ManifestFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestFormat::Direct => "direct",
            ManifestFormat::BasePrefixed => "base-prefixed",
            ManifestFormat::Auto => "auto",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(ManifestFormat::Direct),
            "base-prefixed" => Some(ManifestFormat::BasePrefixed),
            "auto" => Some(ManifestFormat::Auto),
            _ => None,
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub display_name: String,
    /// Tilde-expanded path.
    pub path: PathBuf,
    pub file_type: String,
}

impl ManifestEntry {
    pub fn resolve(candidate: &str) -> Self {
        let given = Path::new(candidate);
        let path = expand_tilde(given);
        if !path.is_absolute() {
            warn!("path may not be absolute, using as provided: '{candidate}'");
        }
        Self {
            display_name: display_name(given),
            file_type: file_type(&path),
            path,
        }
    }
}

/// A manifest entry paired with whatever loading it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFile {
    pub display_name: String,
    pub file_type: String,
    pub content: FileContent,
}

/// Fence tag for a path: its extension, with plain-text files tagged `text`.
pub fn file_type(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => "text".to_string(),
        Some(ext) => ext.to_string(),
        None => String::new(),
    }
}

fn candidate_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// Turn manifest text into path strings, in line order, duplicates kept.
pub fn parse_manifest(text: &str, format: ManifestFormat) -> Vec<String> {
    let lines: Vec<&str> = candidate_lines(text).collect();
    let format = match format {
        ManifestFormat::Auto => match lines.first() {
            Some(first) if expand_tilde(Path::new(first)).is_dir() => ManifestFormat::BasePrefixed,
            _ => ManifestFormat::Direct,
        },
        other => other,
    };

    match format {
        ManifestFormat::BasePrefixed => {
            let Some((base, rest)) = lines.split_first() else {
                return Vec::new();
            };
            let trimmed = base.trim_end_matches(|c: char| c == '/' || c.is_whitespace());
            let base = if trimmed.is_empty() && base.starts_with('/') {
                "/"
            } else {
                trimmed
            };
            rest.iter()
                .map(|line| line.trim_start_matches(|c: char| c == '/' || c.is_whitespace()))
                .filter(|line| !line.is_empty())
                .map(|line| Path::new(base).join(line).display().to_string())
                .collect()
        }
        _ => lines.into_iter().map(str::to_string).collect(),
    }
}

/// Read and resolve the manifest. The manifest is mandatory: missing, empty,
/// unreadable or entry-less manifests are fatal.
pub fn read_manifest(path: &Path, format: ManifestFormat) -> Result<Vec<ManifestEntry>, CoreError> {
    info!("reading list of file paths from '{}'", path.display());
    let text = match load_file(path, false) {
        FileContent::Text(text) => text,
        FileContent::Placeholder(p) => {
            return Err(CoreError::Manifest {
                path: path.to_path_buf(),
                reason: p.to_string(),
            })
        }
    };

    let candidates = parse_manifest(&text, format);
    if candidates.is_empty() {
        return Err(CoreError::EmptyManifest(path.to_path_buf()));
    }

    Ok(candidates.iter().map(|c| ManifestEntry::resolve(c)).collect())
}

/// Load every entry as a required file. Problems are logged and carried as
/// placeholder content.
pub fn load_context_files(entries: &[ManifestEntry]) -> Vec<ContextFile> {
    entries
        .iter()
        .map(|entry| {
            info!("processing: {}", entry.path.display());
            let content = load_file(&entry.path, false);
            if let Some(p) = content.placeholder() {
                warn!("{p}");
            }
            ContextFile {
                display_name: entry.display_name.clone(),
                file_type: entry.file_type.clone(),
                content,
            }
        })
        .collect()
}

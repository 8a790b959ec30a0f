use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

/// A single candidate container discovered by the enumerator.
///
/// File candidates are lazy: the builder reads the bytes on demand so a
/// directory scan never has to hold every font file in memory at once.
/// Memory candidates already own their bytes.
#[derive(Debug, Clone)]
pub enum Candidate {
    File(PathBuf),
    Memory { label: Box<str>, bytes: Arc<[u8]> },
}

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// Platform-specific default font directories, in priority order.
///
/// Grounded on the handful of well-known system locations every desktop
/// font stack agrees on; unusual or vendor-specific directories are left to
/// `BuildConfig::font_dirs` overrides.
pub fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    #[cfg(target_os = "linux")]
    {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join(".fonts"));
            dirs.push(home.join(".local/share/fonts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        dirs.push(PathBuf::from("/Library/Fonts"));
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join("Library/Fonts"));
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(windir) = std::env::var_os("WINDIR") {
            dirs.push(PathBuf::from(windir).join("Fonts"));
        }
        if let Some(data) = dirs::data_local_dir() {
            dirs.push(data.join("Microsoft").join("Windows").join("Fonts"));
        }
    }

    dirs
}

/// Recursively scans `roots`, yielding a [`Candidate::File`] for every entry
/// whose extension is one of `ttf`/`otf`/`ttc`/`otc`.
///
/// Symlink loops are broken by tracking the set of canonicalized directory
/// paths already visited; a directory reachable by two different symlink
/// chains is only ever descended into once. When `follow_symlinks` is
/// `false`, symlinked entries are skipped entirely instead.
pub fn scan(roots: &[PathBuf], follow_symlinks: bool) -> Vec<Candidate> {
    log::debug!("scanning {} font director{} for candidates", roots.len(), if roots.len() == 1 { "y" } else { "ies" });

    let mut seen_dirs = HashSet::new();
    let mut candidates = Vec::new();

    for root in roots {
        let walker = WalkDir::new(root).follow_links(follow_symlinks);
        for entry in walker.into_iter().filter_map(Result::ok) {
            if entry.file_type().is_dir() {
                if follow_symlinks {
                    if let Ok(canonical) = entry.path().canonicalize() {
                        if !seen_dirs.insert(canonical) {
                            continue;
                        }
                    }
                }
                continue;
            }

            if !follow_symlinks && entry.path_is_symlink() {
                continue;
            }

            if has_font_extension(entry.path()) {
                candidates.push(Candidate::File(entry.path().to_path_buf()));
            }
        }
    }

    candidates
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_finds_font_files_and_skips_others() {
        let dir = std::env::temp_dir().join(format!(
            "fontmatch-source-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("a.ttf"), b"stub").unwrap();
        fs::write(dir.join("nested").join("b.OTF"), b"stub").unwrap();
        fs::write(dir.join("notes.txt"), b"stub").unwrap();

        let candidates = scan(&[dir.clone()], true);
        let paths: Vec<_> = candidates
            .iter()
            .map(|c| match c {
                Candidate::File(p) => p.clone(),
                Candidate::Memory { .. } => unreachable!(),
            })
            .collect();

        assert_eq!(paths.len(), 2);
        assert!(paths.iter().any(|p| p.ends_with("a.ttf")));
        assert!(paths.iter().any(|p| p.ends_with("b.OTF")));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn has_font_extension_is_case_insensitive() {
        assert!(has_font_extension(Path::new("x.TTC")));
        assert!(has_font_extension(Path::new("x.otf")));
        assert!(!has_font_extension(Path::new("x.txt")));
        assert!(!has_font_extension(Path::new("x")));
    }
}

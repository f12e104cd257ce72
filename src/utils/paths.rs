use std::borrow::Cow;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use solutions_readme::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/leetcode/solutions");
/// // Returns "~/leetcode/solutions" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Marker for the filesystem root in lexical path parts
const ROOT: &str = "/";

/// Link prefix for solution files as seen from the README's directory
///
/// Builds the path from the README's parent to the solutions directory,
/// climbing with `..` where needed, and renders it with forward slashes.
/// Downward paths get a leading `./`. Paths are resolved lexically first; when
/// that isn't possible (one side absolute, or the README directory climbs
/// above its start) both are resolved against the current directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use solutions_readme::link_base;
///
/// assert_eq!(link_base(Path::new("./solutions"), Path::new("./README.md")), "./solutions");
/// assert_eq!(link_base(Path::new("./solutions"), Path::new("docs/README.md")), "../solutions");
/// assert_eq!(link_base(Path::new("/repo/solutions"), Path::new("/repo/README.md")), "./solutions");
/// ```
pub fn link_base(solutions_dir: &Path, readme_path: &Path) -> String {
    let readme_dir = readme_path.parent().unwrap_or(Path::new(""));

    let lexical = if readme_dir.is_absolute() == solutions_dir.is_absolute() {
        relative_parts(readme_dir, solutions_dir)
    } else {
        None
    };
    let parts =
        lexical.or_else(|| relative_parts(&absolutize(readme_dir), &absolutize(solutions_dir)));

    match parts {
        Some(parts) if parts.is_empty() => ".".to_string(),
        Some(parts) if parts[0] == ".." => parts.join("/"),
        Some(parts) => format!("./{}", parts.join("/")),
        None => solutions_dir.to_string_lossy().replace('\\', "/"),
    }
}

/// Parts leading from directory `from` to `to`, or `None` if they can't be related
fn relative_parts(from: &Path, to: &Path) -> Option<Vec<String>> {
    let from_parts = lexical_parts(from);
    let to_parts = lexical_parts(to);

    let common = from_parts.iter().zip(&to_parts).take_while(|(a, b)| a == b).count();

    // Different roots (e.g. drive prefixes) have no relative path
    if common == 0 && from.is_absolute() {
        return None;
    }
    // Climbing out of an unknown parent can't be undone lexically
    if from_parts[common..].iter().any(|p| p == "..") {
        return None;
    }

    let mut parts = vec!["..".to_string(); from_parts.len() - common];
    parts.extend(to_parts[common..].iter().cloned());
    Some(parts)
}

/// Path components with `.` dropped and `..` folded into the preceding name
fn lexical_parts(path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().map(String::as_str) {
                None | Some("..") => parts.push("..".to_string()),
                Some(ROOT) => {}
                Some(_) => {
                    parts.pop();
                }
            },
            Component::RootDir => parts.push(ROOT.to_string()),
            Component::Prefix(prefix) => {
                parts.push(prefix.as_os_str().to_string_lossy().into_owned())
            }
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
        }
    }
    parts
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir().map(|cwd| cwd.join(path)).unwrap_or_else(|_| path.to_path_buf())
}

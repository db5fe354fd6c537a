use std::env;
use std::path::PathBuf;

use dirs_next::{cache_dir, home_dir};

/// Environment variable allowing callers to override the session file path.
pub const SESSION_PATH_ENV: &str = "VYRA_SESSION_PATH";

/// Default filename for the persisted session payload.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Replace a leading `~` with the home directory in a user-supplied session path.
///
/// Both `~/` and `~\` separators are recognised. Without a resolvable home
/// directory the `~` is kept literally.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let Some(after_tilde) = trimmed.strip_prefix('~') else {
        return PathBuf::from(trimmed);
    };
    let relative = match after_tilde.chars().next() {
        None => "",
        Some('/' | '\\') => &after_tilde[1..],
        Some(_) => return PathBuf::from(trimmed),
    };

    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    if relative.is_empty() { home } else { home.join(relative) }
}

/// Resolve where the session file lives.
///
/// `VYRA_SESSION_PATH` wins when set to a non-empty value; otherwise the file
/// sits in the platform cache directory (`~/.cache/vyra/session.json` on Linux),
/// since session state is disposable.
pub fn default_session_path() -> PathBuf {
    if let Ok(path) = env::var(SESSION_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vyra")
        .join(SESSION_FILE_NAME)
}

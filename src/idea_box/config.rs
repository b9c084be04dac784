use std::env;
use std::path::PathBuf;

pub const DB_FILENAME: &str = "ideas.json";

/// Where the idea document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaBoxConfig {
    pub db_path: PathBuf,
}

impl IdeaBoxConfig {
    /// The document sits next to the running executable, falling back to the
    /// working directory when that location cannot be determined.
    pub fn resolve() -> Self {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()));
        Self::from_exe_dir(exe_dir)
    }

    fn from_exe_dir(exe_dir: Option<PathBuf>) -> Self {
        let db_path = exe_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DB_FILENAME);
        Self { db_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_next_to_executable() {
        let config = IdeaBoxConfig::from_exe_dir(Some(PathBuf::from("/opt/idea-box/bin")));
        assert_eq!(config.db_path, PathBuf::from("/opt/idea-box/bin/ideas.json"));
    }

    #[test]
    fn unknown_executable_falls_back_to_working_dir() {
        let config = IdeaBoxConfig::from_exe_dir(None);
        assert_eq!(config.db_path, PathBuf::from("./ideas.json"));
    }

    #[test]
    fn resolve_ignores_environment() {
        let exe_dir = env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();
        assert_eq!(IdeaBoxConfig::resolve().db_path, exe_dir.join(DB_FILENAME));
    }
}

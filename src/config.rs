use std::path::PathBuf;

pub const LANG_NAME: &str = "Monkey";

pub const PROMPT: &str = ">> ";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Overrides the history file; set it empty to turn history off.
pub const HISTORY_ENV: &str = "MONKEY_HISTORY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<PathBuf>,
    pub user: Option<String>,
}

impl ReplConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let history_file = match var(HISTORY_ENV) {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(DEFAULT_HISTORY_FILE)),
        };
        let user = var("USER")
            .or_else(|| var("USERNAME"))
            .filter(|u| !u.is_empty());

        Self {
            prompt: PROMPT.to_owned(),
            history_file,
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ReplConfig, DEFAULT_HISTORY_FILE, HISTORY_ENV, PROMPT};

    #[test]
    fn defaults_without_environment() {
        let config = ReplConfig::from_vars(|_| None);
        assert_eq!(config.prompt, PROMPT);
        assert_eq!(config.history_file, Some(PathBuf::from(DEFAULT_HISTORY_FILE)));
        assert_eq!(config.user, None);
    }

    #[test]
    fn empty_history_disables_it() {
        let config = ReplConfig::from_vars(|key| (key == HISTORY_ENV).then(String::new));
        assert_eq!(config.history_file, None);
    }

    #[test]
    fn history_and_user_from_environment() {
        let config = ReplConfig::from_vars(|key| match key {
            HISTORY_ENV => Some("/tmp/monkey_history".to_owned()),
            "USERNAME" => Some("ada".to_owned()),
            _ => None,
        });
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/monkey_history")));
        assert_eq!(config.user.as_deref(), Some("ada"));
    }
}

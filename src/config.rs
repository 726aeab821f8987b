use std::path::PathBuf;

pub const STATE_ENV: &str = "STEP_CHALLENGE_STATE";
pub const DEFAULT_STATE_FILE: &str = "step_challenge.json";

/// `--state` wins over the environment, which wins over the default file in the working directory.
pub fn resolve_state_path(flag: Option<PathBuf>) -> PathBuf {
    resolve_with(flag, std::env::var_os(STATE_ENV).map(PathBuf::from))
}

fn resolve_with(flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    let non_empty = |path: &PathBuf| !path.as_os_str().is_empty();
    flag.filter(non_empty)
        .or(env.filter(non_empty))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_environment() {
        let path = resolve_with(Some("a.json".into()), Some("b.json".into()));
        assert_eq!(path, PathBuf::from("a.json"));
    }

    #[test]
    fn empty_flag_falls_through_to_environment() {
        let path = resolve_with(Some(PathBuf::new()), Some("b.json".into()));
        assert_eq!(path, PathBuf::from("b.json"));
    }

    #[test]
    fn falls_back_to_environment_then_default() {
        assert_eq!(
            resolve_with(None, Some("b.json".into())),
            PathBuf::from("b.json")
        );
        assert_eq!(resolve_with(None, None), PathBuf::from(DEFAULT_STATE_FILE));
        assert_eq!(
            resolve_with(None, Some(PathBuf::new())),
            PathBuf::from(DEFAULT_STATE_FILE)
        );
    }
}

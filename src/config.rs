use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the optional log file path.
pub const LOG_FILE_VAR: &str = "NSIMON_LOG";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Process configuration. The binary takes no arguments, so everything
/// comes from the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub timings: Timings,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var_os(LOG_FILE_VAR).map(PathBuf::from))
    }

    fn from_vars(log_file: Option<PathBuf>) -> Self {
        Self {
            log_file: log_file.filter(|p| !p.as_os_str().is_empty()),
            timings: Timings::default(),
        }
    }
}

/// Animation pacing for every timed pause the game makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a link stays lit during playback.
    pub highlight: Duration,
    /// Dark frame between two links, so repeated colors stay distinguishable.
    pub gap: Duration,
    /// Echo flash after a correct keypress.
    pub feedback: Duration,
    /// "Prepare yourself!" and "Correct!" pauses.
    pub round_pause: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            highlight: Duration::from_millis(500),
            gap: Duration::from_millis(200),
            feedback: Duration::from_millis(200),
            round_pause: Duration::from_millis(999),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings_match_classic_pacing() {
        let t = Timings::default();
        assert_eq!(t.highlight, Duration::from_millis(500));
        assert_eq!(t.gap, Duration::from_millis(200));
        assert_eq!(t.feedback, Duration::from_millis(200));
        assert_eq!(t.round_pause, Duration::from_millis(999));
    }

    #[test]
    fn test_empty_log_path_means_no_log_file() {
        let config = Config::from_vars(Some(PathBuf::new()));
        assert!(config.log_file.is_none());

        let config = Config::from_vars(Some(PathBuf::from("/tmp/nsimon.log")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/nsimon.log")));
    }
}

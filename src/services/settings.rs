use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::services::loader::ResourceSource;

const DEFAULT_FRAMES_PER_SECOND: u32 = 15;
const MAX_FRAMES_PER_SECOND: u32 = 1000;

/// Launch-time settings read from `settings.toml` in the platform config
/// directory. Every key is optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub style_source: String,
    pub categories_source: String,
    pub cookie_jar: Option<PathBuf>,
    pub frames_per_second: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            style_source: String::from("config.json"),
            categories_source: String::from("categories.json"),
            cookie_jar: None,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
        }
    }
}

impl AppSettings {
    pub fn load_or_default() -> Self {
        match Self::try_load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(?err, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let Some(path) = settings_file_path() else {
            return Ok(Self::default());
        };
        let contents = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read settings file {}", path.display()));
            }
        };
        let settings = Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(raw)?;
        settings.normalize();
        Ok(settings)
    }

    fn normalize(&mut self) {
        let defaults = Self::default();
        if self.style_source.trim().is_empty() {
            self.style_source = defaults.style_source;
        }
        if self.categories_source.trim().is_empty() {
            self.categories_source = defaults.categories_source;
        }
        if self.frames_per_second == 0 {
            self.frames_per_second = defaults.frames_per_second;
        }
        self.frames_per_second = self.frames_per_second.min(MAX_FRAMES_PER_SECOND);
    }

    pub fn style_source(&self) -> ResourceSource {
        ResourceSource::parse(&self.style_source)
    }

    pub fn categories_source(&self) -> ResourceSource {
        ResourceSource::parse(&self.categories_source)
    }

    /// Interval between two highlight swaps of a spinning reel.
    pub fn spin_period(&self) -> Duration {
        let fps = self.frames_per_second.clamp(1, MAX_FRAMES_PER_SECOND);
        Duration::from_secs_f64(1.0 / f64::from(fps))
    }

    pub fn cookie_jar_path(&self) -> PathBuf {
        self.cookie_jar
            .clone()
            .unwrap_or_else(|| default_data_dir().join("cookies.json"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "OptionRoulette", "OptionRoulette")
}

fn settings_file_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("settings.toml"))
}

fn default_data_dir() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().to_path_buf()
    } else {
        let mut fallback = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        fallback.push(".option-roulette");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(AppSettings::from_toml_str("").unwrap(), AppSettings::default());
    }

    #[test]
    fn default_period_is_fifteen_frames_per_second() {
        let period = AppSettings::default().spin_period();
        assert_eq!(period.as_micros(), 66_666);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = AppSettings::from_toml_str(
            r#"
            categories_source = "https://example.com/categories.json"
            frames_per_second = 0
            cookie_jar = "/tmp/roulette-cookies.json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.style_source, "config.json");
        assert_eq!(settings.frames_per_second, 15);
        assert_eq!(
            settings.categories_source(),
            ResourceSource::Url("https://example.com/categories.json".into())
        );
        assert_eq!(
            settings.cookie_jar_path(),
            PathBuf::from("/tmp/roulette-cookies.json")
        );
    }

    #[test]
    fn huge_frame_rate_keeps_a_non_zero_period() {
        let settings = AppSettings::from_toml_str("frames_per_second = 4000000000").unwrap();
        assert_eq!(settings.frames_per_second, 1000);
        assert_eq!(settings.spin_period(), Duration::from_millis(1));

        let unnormalized = AppSettings {
            frames_per_second: u32::MAX,
            ..AppSettings::default()
        };
        assert!(!unnormalized.spin_period().is_zero());
    }

    #[test]
    fn rejects_wrong_types() {
        let err = AppSettings::from_toml_str("frames_per_second = \"fast\"")
            .expect_err("string fps must fail");
        assert!(err.to_string().contains("fast"));
    }
}

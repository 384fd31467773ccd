//! Configuration file loader with multi-source merging

use super::file_config::FileTracerConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_CONFIG_FILES: [&str; 2] = ["log-tracer.toml", ".log-tracer.toml"];
const ENV_PREFIX: &str = "LOG_TRACER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LOG_TRACER_*` environment variables (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./log-tracer.toml` or `./.log-tracer.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/log-tracer/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileTracerConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileTracerConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileTracerConfig {
        FileTracerConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("log-tracer").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {ENV_PREFIX}*");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./log-tracer.toml or ./.log-tracer.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use log_tracer_domain::{DateFormat, LevelSet};

    /// Empty environment with config dirs pointing into the jail
    fn isolate(jail: &mut Jail) {
        jail.clear_env();
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.levels, LevelSet::ALL);
        assert!(config.append);
    }

    #[test]
    fn test_global_config_path_names_the_tool() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("log-tracer"));
        }
    }

    #[test]
    fn test_load_without_sources_matches_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.levels, LevelSet::ALL);
            assert_eq!(config.path, None);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "tracer.toml",
                r#"
levels = "error"
entry_numbering = true

[date_time]
date_format = "year2_month2_day2"
"#,
            )?;

            let path = jail.directory().join("tracer.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.levels, LevelSet::ERROR);
            assert!(config.entry_numbering);
            assert_eq!(config.date_time.date_format, DateFormat::Year2Month2Day2);
            // Untouched keys keep their defaults
            assert_eq!(config.date_time.time_separator, ":");
            Ok(())
        });
    }

    #[test]
    fn test_project_file_is_discovered() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("log-tracer.toml", "csv = true\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert!(config.csv);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "tracer.toml",
                r#"
levels = "info|debug"

[date_time]
date_separator = "."
"#,
            )?;
            jail.set_env("LOG_TRACER_LEVELS", "error");
            jail.set_env("LOG_TRACER_DATE_TIME__DATE_SEPARATOR", "/");

            let path = jail.directory().join("tracer.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.levels, LevelSet::ERROR);
            assert_eq!(config.date_time.date_separator, "/");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_reports_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("broken.toml", "levels = \"sometimes\"\n")?;

            let path = jail.directory().join("broken.toml");
            assert!(ConfigLoader::load(Some(&path)).is_err());
            Ok(())
        });
    }
}

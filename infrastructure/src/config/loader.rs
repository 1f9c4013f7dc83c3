//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "debate-arena";
const PROJECT_FILES: [&str; 2] = ["arena.toml", ".arena.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./arena.toml` or `./.arena.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/debate-arena/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the REPL history file
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }

    /// Render the effective configuration as TOML
    pub fn render(config: &FileConfig) -> String {
        toml::to_string_pretty(config).unwrap_or_else(|e| format!("# could not render: {e}\n"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:^7}] Explicit: {}", path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [ FOUND ] Project: {}", path.display());
        } else {
            println!("  [       ] Project: ./arena.toml or ./.arena.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{mark:^7}] Global:  {}", path.display());
        }

        println!("  [       ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::Model;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.provider.debater_model, Model::Gemini15Flash);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_mentions_app() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("debate-arena"));
        }
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[provider]\nanalyzer_model = \"gemini-2.5-flash\"").unwrap();
        writeln!(file, "[repl]\nshow_progress = false").unwrap();

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.provider.analyzer_model, Model::Gemini25Flash);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(ConfigLoader::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_render_round_trips() {
        let rendered = ConfigLoader::render(&FileConfig::default());
        assert!(rendered.contains("debater_model = \"gemini-1.5-flash\""));
        let back: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(back.provider.base_url, FileConfig::default().provider.base_url);
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use counsel_config::CounselConfig;

use crate::cli::OutputFormat;

pub fn load_config() -> anyhow::Result<CounselConfig> {
    load_project_dotenv()?;
    CounselConfig::load().map_err(anyhow::Error::from)
}

/// The configured `general.default_format` as an [`OutputFormat`].
pub fn default_format(config: &CounselConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_str(&config.general.default_format, true)
        .map_err(|error| anyhow::anyhow!("invalid general.default_format: {error}"))
}

fn load_project_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;

    // A project `.env` sits next to the nearest `.counsel` directory.
    if let Some(env_path) = find_project_dotenv(&cwd) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(anyhow::anyhow!("failed to load .env: {error}")),
    }
}

fn find_project_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".counsel").is_dir())
        .map(|root| root.join(".env"))
        .filter(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    fn mark_project(jail: &Jail) -> figment::Result<()> {
        std::fs::create_dir(jail.directory().join(".counsel")).map_err(|e| e.to_string())?;
        Ok(())
    }

    #[test]
    fn default_format_follows_config() {
        let mut config = CounselConfig::default();
        assert_eq!(default_format(&config).unwrap(), OutputFormat::Json);

        config.general.default_format = "table".into();
        assert_eq!(default_format(&config).unwrap(), OutputFormat::Table);
    }

    #[test]
    fn unknown_default_format_is_an_error() {
        let mut config = CounselConfig::default();
        config.general.default_format = "yaml".into();
        let err = default_format(&config).unwrap_err();
        assert!(err.to_string().contains("general.default_format"));
    }

    #[test]
    fn no_project_dotenv_outside_a_project() {
        assert_eq!(find_project_dotenv(Path::new("/")), None);
    }

    #[test]
    fn project_dotenv_is_found_from_nested_directories() {
        Jail::expect_with(|jail| {
            mark_project(jail)?;
            jail.create_file(".env", "BOOTSTRAP_NESTED_MARKER=project")?;
            let nested = jail.directory().join("clients").join("archive");
            std::fs::create_dir_all(&nested).map_err(|e| e.to_string())?;

            assert_eq!(
                find_project_dotenv(&nested),
                Some(jail.directory().join(".env"))
            );
            Ok(())
        });
    }

    #[test]
    fn project_dotenv_is_loaded_into_the_environment() {
        Jail::expect_with(|jail| {
            mark_project(jail)?;
            jail.create_file(".env", "BOOTSTRAP_LOADED_MARKER=project")?;

            load_project_dotenv().map_err(|e| e.to_string())?;
            assert_eq!(
                std::env::var("BOOTSTRAP_LOADED_MARKER").as_deref(),
                Ok("project")
            );
            Ok(())
        });
    }

    #[test]
    fn malformed_project_dotenv_is_an_error() {
        Jail::expect_with(|jail| {
            mark_project(jail)?;
            jail.create_file(".env", "not a valid line")?;

            let err = load_project_dotenv().unwrap_err();
            assert!(format!("{err:#}").contains("failed to load dotenv file"));
            Ok(())
        });
    }
}

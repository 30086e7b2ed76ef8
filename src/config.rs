use crate::error::{LkmError, Result};
use std::{env, path::PathBuf};

const ENV_LKM_OUTPUT_DIR: &str = "LKM_OUTPUT_DIR";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(output_dir) = env::var(ENV_LKM_OUTPUT_DIR) {
            if !output_dir.trim().is_empty() {
                let path = PathBuf::from(output_dir);

                // If the path already exists but is not a directory, reject early.
                if path.exists() && !path.is_dir() {
                    return Err(LkmError::InvalidConfiguration(format!(
                        "Output path is not a directory: {}",
                        path.display()
                    )));
                }

                config.output_dir = Some(path);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serializes the tests touching LKM_OUTPUT_DIR.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_from_env_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let orig_output_dir = env::var(ENV_LKM_OUTPUT_DIR).ok();

        unsafe {
            env::remove_var(ENV_LKM_OUTPUT_DIR);
        }

        let config = Config::from_env().unwrap();
        assert!(config.output_dir.is_none());

        unsafe {
            if let Some(value) = orig_output_dir {
                env::set_var(ENV_LKM_OUTPUT_DIR, value);
            }
        }
    }

    #[test]
    fn test_from_env_with_valid_output_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let temp_dir = TempDir::new().unwrap();
        unsafe {
            env::set_var(ENV_LKM_OUTPUT_DIR, temp_dir.path());
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir, Some(temp_dir.path().to_path_buf()));

        unsafe {
            env::remove_var(ENV_LKM_OUTPUT_DIR);
        }
    }

    #[test]
    fn test_from_env_with_file_as_output_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        std::fs::write(&file_path, "x").unwrap();

        unsafe {
            env::set_var(ENV_LKM_OUTPUT_DIR, &file_path);
        }

        let result = Config::from_env();
        assert!(result.is_err());

        unsafe {
            env::remove_var(ENV_LKM_OUTPUT_DIR);
        }
    }
}

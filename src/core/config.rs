use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to $EDITOR / nano.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save_to(path)?;
        }

        let default_editor = Self::default_editor();
        let first = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&first).arg(path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited successfully using '{}'", first);
                return Ok(());
            }
            _ => eprintln!(
                "⚠️  Editor '{}' not available, falling back to '{}'",
                first, default_editor
            ),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if status.success() {
            println!(
                "✅ Configuration file edited successfully using fallback '{}'",
                default_editor
            );
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            )))
        }
    }
}

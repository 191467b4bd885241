use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Editor to use: explicit choice, then `$EDITOR`/`$VISUAL`, then a platform default.
    pub fn default_editor() -> String {
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

    /// Open `path` in `editor`, falling back to the default editor once.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let requested = editor.map(str::to_string).unwrap_or_else(|| fallback.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(requested),
            Ok(s) => tracing::warn!("Editor '{requested}' exited with {s}"),
            Err(e) => tracing::warn!("Editor '{requested}' not available: {e}"),
        }

        if requested == fallback {
            return Err(AppError::Config(format!(
                "failed to edit {} with '{}'",
                path.display(),
                requested
            )));
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            _ => Err(AppError::Config(format!(
                "failed to edit {} with '{}' or fallback '{}'",
                path.display(),
                requested,
                fallback
            ))),
        }
    }
}

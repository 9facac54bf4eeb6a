use crate::error::{Result, WhitelabelError};
use crate::paths::MauticLayout;
use std::fs;
use std::path::PathBuf;

/// Ensure `themes/system` exists. The themes directory itself must already be there.
pub fn init_system_theme(layout: &MauticLayout) -> Result<PathBuf> {
    let themes = layout.themes_dir();
    if !themes.is_dir() {
        return Err(WhitelabelError::ThemesDirNotFound(themes));
    }

    let system = layout.system_theme_dir();
    if !system.is_dir() {
        fs::create_dir(&system).map_err(|source| WhitelabelError::OverrideDirCreation {
            path: system.clone(),
            source,
        })?;
    }
    Ok(system)
}

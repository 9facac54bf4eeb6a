use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paths::MauticLayout;
use std::fs;
use std::path::Path;

/// Remove everything directly under `var/cache`, keeping the directory itself.
/// Dotfiles such as `.gitkeep` are removed too.
/// A missing cache directory has nothing to clear.
pub fn clear(layout: &MauticLayout, result: &mut CmdResult) -> Result<()> {
    let cache_dir = layout.cache_dir();
    if !cache_dir.is_dir() {
        result.add_message(CmdMessage::info(format!(
            "No cache directory at {}",
            cache_dir.display()
        )));
        return Ok(());
    }

    let mut removed = 0;
    for entry in fs::read_dir(&cache_dir)? {
        let path = entry?.path();
        remove_entry(&path)?;
        result.removed_entries.push(path);
        removed += 1;
    }

    result.add_message(CmdMessage::success(format!(
        "Cleared {} cache entries in {}",
        removed,
        cache_dir.display()
    )));
    Ok(())
}

// Symlinks are removed, never followed.
fn remove_entry(path: &Path) -> Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    if file_type.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

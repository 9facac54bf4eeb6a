use crate::commands::{CmdMessage, CmdResult};
use crate::config::{LoginLogo, SidebarLogo, WhitelabelConfig};
use crate::error::{Result, WhitelabelError};
use crate::fragment::FragmentReplacer;
use crate::patch;
use crate::paths::MauticLayout;
use std::fs;
use std::path::{Path, PathBuf};

/// Copy the login template into the system theme and rebrand it.
pub fn install_login<R: FragmentReplacer>(
    layout: &MauticLayout,
    config: &WhitelabelConfig,
    replacer: &R,
    result: &mut CmdResult,
) -> Result<()> {
    let target = copy_login(layout, result)?;
    patch_login_override(&target, config, replacer, result)?;
    Ok(())
}

/// Copy the navbar template into the system theme and rebrand it.
/// A Mautic tree without the navbar template is left alone.
pub fn install_navbar<R: FragmentReplacer>(
    layout: &MauticLayout,
    config: &WhitelabelConfig,
    replacer: &R,
    result: &mut CmdResult,
) -> Result<()> {
    copy_navbar(layout, result)?;
    patch_navbar_override(&layout.navbar_override(), config, replacer, result)?;
    Ok(())
}

/// The source is copied unconditionally: a missing login template fails the run.
pub fn copy_login(layout: &MauticLayout, result: &mut CmdResult) -> Result<PathBuf> {
    let source = layout.login_source();
    let target = layout.login_override();
    report_paths("Login", &source, &target, result);

    ensure_parent(&target)?;
    copy_template(&source, &target)?;
    result.written_files.push(target.clone());
    Ok(target)
}

pub fn copy_navbar(layout: &MauticLayout, result: &mut CmdResult) -> Result<Option<PathBuf>> {
    let source = layout.navbar_source();
    let target = layout.navbar_override();
    report_paths("Navbar", &source, &target, result);

    ensure_parent(&target)?;
    if !source.exists() {
        result.add_message(CmdMessage::warning(format!(
            "Navbar template not found at {}, skipping",
            source.display()
        )));
        return Ok(None);
    }
    copy_template(&source, &target)?;
    result.written_files.push(target.clone());
    Ok(Some(target))
}

/// Returns whether the file was rewritten.
pub fn patch_login_override<R: FragmentReplacer>(
    path: &Path,
    config: &WhitelabelConfig,
    replacer: &R,
    result: &mut CmdResult,
) -> Result<bool> {
    let content = read_template(path)?;
    let Some(logo) = LoginLogo::from_config(config) else {
        result.add_message(CmdMessage::info(
            "No login logo configured, login template left unchanged",
        ));
        return Ok(false);
    };

    let patched = patch::patch_login(replacer, &content, &logo)?;
    write_template(path, &patched)?;
    result.add_message(CmdMessage::success(format!(
        "Login logo set to {}",
        logo.src
    )));
    Ok(true)
}

/// Returns whether the file was rewritten. A missing override is not an error.
pub fn patch_navbar_override<R: FragmentReplacer>(
    path: &Path,
    config: &WhitelabelConfig,
    replacer: &R,
    result: &mut CmdResult,
) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content = read_template(path)?;
    let Some(logo) = SidebarLogo::from_config(config) else {
        result.add_message(CmdMessage::info(
            "No sidebar logo configured, navbar template left unchanged",
        ));
        return Ok(false);
    };

    let patched = patch::patch_navbar(replacer, &content, &logo)?;
    write_template(path, &patched)?;
    result.add_message(CmdMessage::success(format!(
        "Sidebar logo set to {}",
        logo.src
    )));
    Ok(true)
}

fn report_paths(name: &str, source: &Path, target: &Path, result: &mut CmdResult) {
    result.add_message(CmdMessage::info(format!(
        "{} template: {}",
        name,
        source.display()
    )));
    result.add_message(CmdMessage::info(format!(
        "{} override: {}",
        name,
        target.display()
    )));
}

fn ensure_parent(target: &Path) -> Result<()> {
    let Some(dir) = target.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).map_err(|source| WhitelabelError::OverrideDirCreation {
        path: dir.to_path_buf(),
        source,
    })
}

fn copy_template(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|source| WhitelabelError::TemplateCopy {
        from: from.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| WhitelabelError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

fn write_template(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| WhitelabelError::TemplateWrite {
        path: path.to_path_buf(),
        source,
    })
}

use crate::commands::{cache, templates, theme, CmdMessage, CmdResult};
use crate::config::WhitelabelConfig;
use crate::error::Result;
use crate::fragment::FragmentReplacer;
use crate::paths::{resolve_web_root, MauticLayout, ProjectLocation};
use std::collections::HashMap;

/// Run the full whitelabel process against `project`.
///
/// Steps run in a fixed order and the first failure stops the run. Anything
/// already copied or patched stays on disk. Messages are pushed into `result`
/// as the run progresses so the caller can still show them after a failure.
pub fn run<R: FragmentReplacer>(
    project: &ProjectLocation,
    process_env: &HashMap<String, String>,
    replacer: &R,
    result: &mut CmdResult,
) -> Result<()> {
    result.add_message(CmdMessage::info("Executing whitelabel process..."));

    let config = WhitelabelConfig::load(&project.root, process_env)?;
    result.add_messages(config.report());

    let web_root = resolve_web_root(&project.manifest)?;
    result.add_message(CmdMessage::info(format!("Mautic web-root path: {}", web_root)));
    let layout = MauticLayout::new(&project.root, &web_root);

    theme::init_system_theme(&layout)?;
    templates::install_login(&layout, &config, replacer, result)?;
    templates::install_navbar(&layout, &config, replacer, result)?;
    cache::clear(&layout, result)?;

    result.add_message(CmdMessage::success("Whitelabel process completed"));
    Ok(())
}

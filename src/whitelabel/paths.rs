use crate::error::{Result, WhitelabelError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_MANIFEST: &str = "composer.json";
const DEFAULT_WEB_ROOT: &str = ".";

// Relative to both `app/bundles` and the system theme, which mirrors the bundle layout.
const LOGIN_TEMPLATE: &str = "UserBundle/Resources/views/Security/base.html.twig";
const NAVBAR_TEMPLATE: &str = "CoreBundle/Resources/views/Default/navbar.html.twig";

/// Where the host project lives: its root directory and the composer manifest in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLocation {
    pub root: PathBuf,
    pub manifest: PathBuf,
}

impl ProjectLocation {
    /// `composer_file` is the value of the `COMPOSER` variable, if set.
    /// The project root is the directory holding the manifest.
    pub fn discover(cwd: &Path, composer_file: Option<&str>) -> Self {
        let manifest = cwd.join(composer_file.unwrap_or(DEFAULT_MANIFEST));
        let root = manifest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        Self { root, manifest }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    extra: ComposerExtra,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerExtra {
    #[serde(rename = "mautic-scaffold")]
    mautic_scaffold: Option<ScaffoldSettings>,
}

#[derive(Debug, Deserialize)]
struct ScaffoldSettings {
    locations: Option<ScaffoldLocations>,
}

#[derive(Debug, Deserialize)]
struct ScaffoldLocations {
    #[serde(rename = "web-root")]
    web_root: Option<String>,
}

/// Read `extra.mautic-scaffold.locations.web-root` from the composer manifest.
/// Falls back to `.` when the manifest or any of the keys is missing.
pub fn resolve_web_root(manifest: &Path) -> Result<String> {
    if !manifest.exists() {
        return Ok(DEFAULT_WEB_ROOT.to_string());
    }
    let content = fs::read_to_string(manifest)?;
    parse_web_root(&content)
}

fn parse_web_root(content: &str) -> Result<String> {
    let manifest: ComposerManifest =
        serde_json::from_str(content).map_err(WhitelabelError::Serialization)?;
    Ok(manifest
        .extra
        .mautic_scaffold
        .and_then(|s| s.locations)
        .and_then(|l| l.web_root)
        .unwrap_or_else(|| DEFAULT_WEB_ROOT.to_string()))
}

/// All paths the whitelabel run reads or writes, derived from the project
/// root and the Mautic web-root.
#[derive(Debug, Clone)]
pub struct MauticLayout {
    root: PathBuf,
    web_root: PathBuf,
}

impl MauticLayout {
    /// `web_root` is always taken relative to `root`, even with a leading slash.
    pub fn new(root: impl Into<PathBuf>, web_root: &str) -> Self {
        let root = root.into();
        let web_root = root.join(web_root.trim_start_matches(&['/', '\\'][..]));
        Self { root, web_root }
    }

    pub fn themes_dir(&self) -> PathBuf {
        self.web_root.join("themes")
    }

    pub fn system_theme_dir(&self) -> PathBuf {
        self.themes_dir().join("system")
    }

    pub fn login_source(&self) -> PathBuf {
        self.bundles_dir().join(LOGIN_TEMPLATE)
    }

    pub fn login_override(&self) -> PathBuf {
        self.system_theme_dir().join(LOGIN_TEMPLATE)
    }

    pub fn navbar_source(&self) -> PathBuf {
        self.bundles_dir().join(NAVBAR_TEMPLATE)
    }

    pub fn navbar_override(&self) -> PathBuf {
        self.system_theme_dir().join(NAVBAR_TEMPLATE)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join("var").join("cache")
    }

    fn bundles_dir(&self) -> PathBuf {
        self.web_root.join("app").join("bundles")
    }
}

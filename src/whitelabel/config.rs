use crate::commands::CmdMessage;
use crate::error::{Result, WhitelabelError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const ENV_FILE: &str = ".env";
const DIST_ENV_FILE: &str = ".env.dist";
const KEY_PREFIX: &str = "WHITELABEL_";
const APP_ENV_KEY: &str = "APP_ENV";
const DEFAULT_APP_ENV: &str = "dev";
const TEST_ENVS: &[&str] = &["test"];

const DEFAULT_LOGIN_LOGO_WIDTH: &str = "200";
const DEFAULT_SIDEBAR_LOGO_WIDTH: &str = "130";
const DEFAULT_MARGIN: &str = "0";

/// Branding values collected from `WHITELABEL_*` variables, keyed by the
/// lower-cased remainder of the variable name (`WHITELABEL_LOGIN_LOGO` -> `login_logo`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhitelabelConfig {
    values: BTreeMap<String, String>,
}

impl WhitelabelConfig {
    /// Load the dotenv files under `root` and collect the whitelabel values.
    ///
    /// Files are layered the same way the Symfony kernel does it: `.env`
    /// (or `.env.dist`), then `.env.local`, `.env.<APP_ENV>` and
    /// `.env.<APP_ENV>.local`. Variables already present in `process_env`
    /// win over anything read from disk. Nothing is exported into the
    /// process environment.
    pub fn load(root: &Path, process_env: &HashMap<String, String>) -> Result<Self> {
        let values = load_dotenv(root, process_env)?;
        Ok(Self::from_pairs(values))
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let values = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(KEY_PREFIX)
                    .filter(|suffix| !suffix.is_empty())
                    .map(|suffix| (suffix.to_lowercase(), value))
            })
            .collect();
        Self { values }
    }

    /// Returns the value for `key` if it is set and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn report(&self) -> Vec<CmdMessage> {
        let mut messages = vec![CmdMessage::info("Whitelabel config:")];
        for (key, value) in &self.values {
            messages.push(CmdMessage::info(format!("{}: {}", capitalize(key), value)));
        }
        messages
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn load_dotenv(
    root: &Path,
    process_env: &HashMap<String, String>,
) -> Result<HashMap<String, String>> {
    let env_path = root.join(ENV_FILE);
    let dist_path = root.join(DIST_ENV_FILE);

    let base = if env_path.is_file() || !dist_path.is_file() {
        &env_path
    } else {
        &dist_path
    };
    let mut loaded: HashMap<String, String> = read_dotenv(base, &HashMap::new())?
        .ok_or_else(|| WhitelabelError::ConfigNotFound(env_path.clone()))?
        .into_iter()
        .collect();

    let app_env = process_env
        .get(APP_ENV_KEY)
        .or_else(|| loaded.get(APP_ENV_KEY))
        .cloned()
        .unwrap_or_else(|| DEFAULT_APP_ENV.to_string());

    let mut layers = Vec::new();
    if !TEST_ENVS.contains(&app_env.as_str()) {
        layers.push(root.join(format!("{}.local", ENV_FILE)));
    }
    if app_env != "local" {
        layers.push(root.join(format!("{}.{}", ENV_FILE, app_env)));
        layers.push(root.join(format!("{}.{}.local", ENV_FILE, app_env)));
    }

    for layer in layers {
        if let Some(pairs) = read_dotenv(&layer, &loaded)? {
            loaded.extend(pairs);
        }
    }

    // Real environment variables are never overridden by dotenv files.
    loaded.extend(process_env.iter().map(|(k, v)| (k.clone(), v.clone())));
    Ok(loaded)
}

/// Parse a dotenv file without touching the process environment.
/// Returns `None` when the file does not exist.
///
/// `${VAR}` references may point at values from earlier layers: those are
/// fed to the parser ahead of the file contents, so they expand like
/// definitions made earlier in the same file.
fn read_dotenv(
    path: &Path,
    loaded: &HashMap<String, String>,
) -> Result<Option<Vec<(String, String)>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut input = String::new();
    for (key, value) in loaded {
        input.push_str(&format!("{}=\"{}\"\n", key, escape_value(value)));
    }
    input.push_str(&content);

    let pairs = dotenvy::from_read_iter(input.as_bytes())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Some(pairs))
}

// Escapes for a double-quoted dotenv value, keeping it literal.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Login page logo settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginLogo {
    pub src: String,
    pub width: String,
    pub margin_top: String,
    pub margin_bottom: String,
}

impl LoginLogo {
    /// `None` when `login_logo` is absent or empty.
    pub fn from_config(config: &WhitelabelConfig) -> Option<Self> {
        let src = config.get("login_logo")?;
        Some(Self {
            src: src.to_string(),
            width: config
                .get_or("login_logo_width", DEFAULT_LOGIN_LOGO_WIDTH)
                .to_string(),
            margin_top: config
                .get_or("login_logo_margin_top", DEFAULT_MARGIN)
                .to_string(),
            margin_bottom: config
                .get_or("login_logo_margin_bottom", DEFAULT_MARGIN)
                .to_string(),
        })
    }
}

/// Navigation sidebar logo settings. Only the desktop logo honors the
/// size and margin values; the minimized logo has a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLogo {
    pub src: String,
    pub width: String,
    pub margin_top: String,
    pub margin_left: String,
    pub margin_right: String,
}

impl SidebarLogo {
    /// `None` when `sidebar_logo` is absent or empty.
    pub fn from_config(config: &WhitelabelConfig) -> Option<Self> {
        let src = config.get("sidebar_logo")?;
        Some(Self {
            src: src.to_string(),
            width: config
                .get_or("sidebar_logo_width", DEFAULT_SIDEBAR_LOGO_WIDTH)
                .to_string(),
            margin_top: config
                .get_or("sidebar_logo_margin_top", DEFAULT_MARGIN)
                .to_string(),
            margin_left: config
                .get_or("sidebar_logo_margin_left", DEFAULT_MARGIN)
                .to_string(),
            margin_right: config
                .get_or("sidebar_logo_margin_right", DEFAULT_MARGIN)
                .to_string(),
        })
    }
}

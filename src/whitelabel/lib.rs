//! # mautic-whitelabel
//!
//! Rebrands a Mautic installation: the login page logo and the two sidebar
//! logos are swapped for images configured through `WHITELABEL_*` dotenv
//! variables. The stock templates are copied into the `themes/system`
//! override theme, patched there, and the Mautic cache is emptied so the
//! overrides are picked up.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │    and reads the process environment                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Facade holding the project location and env snapshot     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - File system steps, report through CmdResult messages     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pure transforms (config, paths, patch, fragment)           │
//! │  - Config parsing, path layout, template rewriting          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Theme directory, template install, cache clearing, and the full run
//! - [`config`]: Dotenv loading and the whitelabel values
//! - [`paths`]: Project discovery, web-root resolution, Mautic paths
//! - [`patch`]: Logo markup and template rewriting
//! - [`fragment`]: The fragment replacer used by [`patch`]
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fragment;
pub mod patch;
pub mod paths;

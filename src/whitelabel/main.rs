use clap::Parser;
use colored::*;
use std::collections::HashMap;
use std::path::PathBuf;
use whitelabel::api::{CmdMessage, MessageLevel, WhitelabelApi};
use whitelabel::commands::CmdResult;
use whitelabel::error::Result;
use whitelabel::paths::ProjectLocation;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = match cli.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let process_env: HashMap<String, String> = std::env::vars().collect();
    let composer_file = process_env.get("COMPOSER").map(String::as_str);
    let project = ProjectLocation::discover(&cwd, composer_file);
    let api = WhitelabelApi::new(project, process_env);

    let mut result = CmdResult::default();
    let outcome = api.whitelabel(&mut result);
    print_messages(&result.messages);
    outcome
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

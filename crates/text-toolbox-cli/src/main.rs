//! text-toolbox - run text tools from the command line

mod ports;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use text_toolbox_config::Config;
use text_toolbox_engine::{
    ClipboardPort, FileStore, Notification, NotificationPort, PersistencePort, Tool, ToolOutput,
};

use ports::{StderrNotifier, SystemClipboard};

#[derive(Parser)]
#[command(name = "text-toolbox")]
#[command(version, about = "Small text utilities: case, dedupe, URL coding, counts, Markdown preview", long_about = None)]
#[command(after_help = "EXAMPLES:
    echo 'hello world' | text-toolbox run title-case
    text-toolbox run markdown-preview README.md
    text-toolbox run word-count essay.txt --json
    text-toolbox notes set todo todo.txt
    text-toolbox config init")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a tool over FILE, or stdin when no file is given
    Run {
        /// Tool name, see `text-toolbox tools`
        #[arg(value_name = "TOOL")]
        tool: Tool,

        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Copy the result to the system clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print word-count statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available tools
    Tools,
    /// Save and restore notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum NotesAction {
    /// Print a saved note
    Get { key: String },
    /// Save FILE, or stdin, under KEY
    Set { key: String, file: Option<PathBuf> },
    /// List saved note keys
    List,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with default settings
    Init {
        /// Replace an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let mut notifier = StderrNotifier;
    match cli.command {
        Command::Run {
            tool,
            file,
            copy,
            json,
        } => {
            let config = load_config()?;
            let input = read_input(file.as_deref())?;
            let mut clipboard = SystemClipboard;
            let clipboard: Option<&mut dyn ClipboardPort> = if copy || config.copy_to_clipboard {
                Some(&mut clipboard)
            } else {
                None
            };
            let output = run_tool(tool, &input, json, clipboard, &mut notifier)?;
            print_text(&output);
        }
        Command::Tools => {
            for tool in Tool::ALL {
                println!("{:<18}{}", tool.name(), tool.description());
            }
        }
        Command::Notes { action } => {
            let config = load_config()?;
            let mut store = FileStore::new(&config.store_path);
            return notes(action, &mut store, &mut notifier);
        }
        Command::Config { action } => match action {
            ConfigAction::Init { force } => {
                let path = Config::config_path();
                if !init_config(&path, force)? {
                    notifier.notify(Notification::failure(format!(
                        "Config file already exists at {}, use --force to replace it",
                        path.display()
                    )));
                    return Ok(ExitCode::FAILURE);
                }
                notifier.notify(Notification::success(format!(
                    "Wrote default config to {}",
                    path.display()
                )));
            }
            ConfigAction::Path => println!("{}", Config::config_path().display()),
        },
    }
    Ok(ExitCode::SUCCESS)
}

/// Reads the config file, or defaults when there is none. Only `run` and
/// `notes` call this; `config init` must work on an unparseable file.
fn load_config() -> Result<Config> {
    let config = Config::load_or_default().context("Failed to load config file")?;
    log::debug!("config: {config:?}");
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

/// Runs one tool and returns what to print. A decode failure becomes a
/// fallback message plus a failure notification rather than an error.
fn run_tool(
    tool: Tool,
    input: &str,
    json: bool,
    clipboard: Option<&mut dyn ClipboardPort>,
    notifier: &mut dyn NotificationPort,
) -> Result<String> {
    let text = match tool.run(input) {
        Ok(ToolOutput::Statistics(stats)) if json => serde_json::to_string_pretty(&stats)?,
        Ok(output) => output.into_text(),
        Err(err) => {
            notifier.notify(Notification::failure(format!("{tool} failed: {err}")));
            return Ok(format!("Unable to decode: {err}"));
        }
    };

    if let Some(clipboard) = clipboard {
        match clipboard.write_text(&text) {
            Ok(()) => notifier.notify(Notification::success("Copied to clipboard")),
            Err(e) => notifier.notify(Notification::failure(format!("Copy failed: {e}"))),
        }
    }
    Ok(text)
}

/// Writes the default config to `path`. Returns false, leaving the file
/// untouched, when it exists and `force` is not set.
fn init_config(path: &Path, force: bool) -> Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn notes(
    action: NotesAction,
    store: &mut FileStore,
    notifier: &mut dyn NotificationPort,
) -> Result<ExitCode> {
    match action {
        NotesAction::Get { key } => match store.get(&key)? {
            Some(note) => print_text(&note),
            None => {
                notifier.notify(Notification::failure(format!("No note named {key}")));
                return Ok(ExitCode::FAILURE);
            }
        },
        NotesAction::Set { key, file } => {
            let value = read_input(file.as_deref())?;
            store.set(&key, &value)?;
            notifier.notify(Notification::success(format!("Saved note {key}")));
        }
        NotesAction::List => {
            for key in store.keys()? {
                println!("{key}");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

//! CLI entry point for camel-keymap
//!
//! Provides commands for resolving single keys and shortcuts, checking a
//! pad config, and rendering it to CircuitPython.

use anyhow::Context;
use camel_keymap::{
    core::{keycode_name, parse_key_to_keycodes},
    logging,
    pad::{self, render_config_py, ConfigWatcher, PadError, PadWriter, WriteOutcome},
};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "camel-keymap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single key name
    Key {
        /// Key token, e.g. "enter" or "f5"
        key: String,
    },

    /// Resolve a shortcut such as "ctrl+shift+c"
    Combo {
        /// `+`-joined shortcut
        shortcut: String,
    },

    /// Validate a pad config and resolve every binding
    Check {
        /// Path to pad config file
        #[arg(short, long, default_value = "~/.config/camel-pad/config.yaml")]
        config: PathBuf,
    },

    /// Render a pad config to CircuitPython config.py
    Render {
        /// Path to pad config file
        #[arg(short, long, default_value = "~/.config/camel-pad/config.yaml")]
        config: PathBuf,

        /// Output file, e.g. /media/CIRCUITPY/config.py
        #[arg(short, long)]
        output: PathBuf,

        /// Re-render whenever the config changes
        #[arg(short, long)]
        watch: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Key { key } => resolve_key(&key),
        Commands::Combo { shortcut } => resolve_combo(&shortcut),
        Commands::Check { config } => check_config(&config)?,
        Commands::Render {
            config,
            output,
            watch,
        } => render(&config, &output, watch)?,
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand(path: &Path) -> anyhow::Result<PathBuf> {
    let raw = path.to_str().context("Invalid path encoding")?;
    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

fn resolve_key(key: &str) {
    match keycode_name(key) {
        Ok(name) => println!("{}", name.green().bold()),
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn resolve_combo(shortcut: &str) {
    match parse_key_to_keycodes(shortcut) {
        Ok(names) => {
            let list = names
                .iter()
                .map(|name| format!("Keycode.{}", name))
                .collect::<Vec<_>>()
                .join(", ");
            println!("[{}]", list.green().bold());
        }
        Err(e) => {
            eprintln!("{} {}: {}", "✗".red().bold(), e.kind().to_string().yellow(), e);
            std::process::exit(1);
        }
    }
}

/// Check a pad config for structural and binding errors
fn check_config(config_path: &Path) -> anyhow::Result<()> {
    let path = expand(config_path)?;

    println!("{} Checking config: {}", "→".cyan(), path.display());

    match pad::build(&path) {
        Ok(resolved) => {
            let bindings: usize = resolved.buttons.iter().map(|b| b.gestures.len()).sum();
            println!(
                "{} {} button{}, {} binding{} resolved",
                "✓".green().bold(),
                resolved.buttons.len(),
                if resolved.buttons.len() == 1 { "" } else { "s" },
                bindings,
                if bindings == 1 { "" } else { "s" },
            );
            Ok(())
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

/// Print every problem carried by a pad error
fn report(e: &PadError) {
    eprintln!("{} {}", "✗".red().bold(), e.to_string().bold());

    match e {
        PadError::Invalid(problems) => {
            for problem in problems {
                eprintln!("  {} {}", "•".dimmed(), problem);
            }
        }
        PadError::InvalidBindings(failures) => {
            for failure in failures {
                eprintln!(
                    "  {} {}",
                    format!("button {} {}", failure.button, failure.gesture).yellow(),
                    failure.error,
                );
            }
        }
        _ => {}
    }
}

/// Render once, then optionally keep re-rendering on config changes
fn render(config_path: &Path, output: &Path, watch: bool) -> anyhow::Result<()> {
    let path = expand(config_path)?;
    let writer = PadWriter::new(expand(output)?)?;

    if let Err(e) = render_once(&path, &writer) {
        report(&e);
        if !watch {
            std::process::exit(1);
        }
    }

    if !watch {
        return Ok(());
    }

    let watcher = ConfigWatcher::new(&path)
        .with_context(|| format!("Failed to watch {}", path.display()))?;
    println!("{} Watching {} (Ctrl+C to stop)", "→".cyan(), path.display());
    info!(path = %path.display(), "watching pad config");

    while watcher.wait_for_change(pad::watcher::DEFAULT_DEBOUNCE) {
        // Keep the previous output when the new config is broken
        if let Err(e) = render_once(&path, &writer) {
            error!(error = %e, "reload failed, keeping previous output");
            report(&e);
        }
    }

    Ok(())
}

fn render_once(config_path: &Path, writer: &PadWriter) -> Result<(), PadError> {
    let resolved = pad::build(config_path)?;
    let content = render_config_py(&resolved, Some(Local::now().naive_local()));

    match writer.write(&content)? {
        WriteOutcome::Unchanged => {
            println!("{} {} is up to date", "✓".green(), writer.output_path().display());
        }
        WriteOutcome::Written { backup } => {
            println!("{} Wrote {}", "✓".green().bold(), writer.output_path().display());
            if let Some(backup) = backup {
                println!("  {} {}", "backup:".dimmed(), backup.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
pins: [BOOT0]
buttons:
  0:
    press: "ctrl+`"
"#;

    fn setup(config: &str) -> (TempDir, PathBuf, PadWriter) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, config).unwrap();
        let writer = PadWriter::new(temp_dir.path().join("config.py")).unwrap();
        (temp_dir, config_path, writer)
    }

    #[test]
    fn test_render_once_writes_config_py() {
        let (temp_dir, config_path, writer) = setup(CONFIG);

        render_once(&config_path, &writer).unwrap();

        let output = fs::read_to_string(temp_dir.path().join("config.py")).unwrap();
        assert!(output.starts_with("# Generated by camel-keymap at "));
        assert!(output.contains("\"press\": [Keycode.CONTROL, Keycode.GRAVE_ACCENT],"));
    }

    #[test]
    fn test_render_once_twice_leaves_output_alone() {
        let (temp_dir, config_path, writer) = setup(CONFIG);

        render_once(&config_path, &writer).unwrap();
        let first = fs::read_to_string(writer.output_path()).unwrap();

        render_once(&config_path, &writer).unwrap();
        assert_eq!(fs::read_to_string(writer.output_path()).unwrap(), first);
        assert!(!temp_dir.path().join("backups").exists(), "Unchanged render should not back up");
    }

    #[test]
    fn test_render_once_bad_binding_writes_nothing() {
        let (temp_dir, config_path, writer) = setup("buttons:\n  0:\n    press: c+ctrl\n");

        assert!(matches!(
            render_once(&config_path, &writer),
            Err(PadError::InvalidBindings(_))
        ));
        assert!(!temp_dir.path().join("config.py").exists());
    }

    #[test]
    fn test_expand_tilde() {
        if std::env::var_os("HOME").is_some() {
            let expanded = expand(Path::new("~/config.yaml")).unwrap();
            assert!(!expanded.starts_with("~"));
        }
        assert_eq!(expand(Path::new("/tmp/x.yaml")).unwrap(), PathBuf::from("/tmp/x.yaml"));
    }
}

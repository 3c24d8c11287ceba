use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crtsh_core::{crtsh_log_debug, CommandHistory, SeedData, ShellContext};
use crtsh_ui::{run_once, run_repl, Renderer, TerminalConfig};

/// Virtual CRT terminal shell.
#[derive(Parser, Debug)]
#[command(author, version, about = "crtsh virtual terminal", long_about = None)]
struct Cli {
    /// Command to execute instead of launching the interactive shell.
    #[arg()]
    command: Option<String>,

    /// Session user name (overrides the config file).
    #[arg(long)]
    user: Option<String>,

    /// Config file (.toml or .json); defaults to <config_dir>/crtsh/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON seed replacing the built-in filesystem and contacts.
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `crtsh_core=info`.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Disable ANSI colors.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration.
    fn apply(&self, config: &mut TerminalConfig) {
        if let Some(user) = &self.user {
            config.user = user.clone();
        }
        if let Some(seed) = &self.seed {
            config.seed_path = Some(seed.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_color {
            config.ui.color = false;
        }
    }
}

fn build_session(config: &TerminalConfig) -> anyhow::Result<ShellContext> {
    let seed = match &config.seed_path {
        Some(path) => SeedData::from_file(path)
            .with_context(|| format!("Failed to load seed {}", path.display()))?,
        None => SeedData::builtin().context("Built-in seed is invalid")?,
    };
    let history = match config.history.max_entries {
        Some(max) => CommandHistory::with_capacity_limit(max),
        None => CommandHistory::new(),
    };
    let ctx = ShellContext::from_seed(seed, config.user.clone())
        .context("Failed to build session from seed")?
        .with_history(history);
    Ok(ctx)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = TerminalConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    #[cfg(feature = "logging")]
    crtsh_core::logging::init_logging(&config.logging.level, config.logging.json)
        .context("Failed to initialize logging")?;
    crtsh_log_debug!(user = %config.user, "starting session");

    let mut ctx = build_session(&config)?;

    if let Some(cmd) = cli.command {
        let renderer = Renderer::new(config.ui.color);
        for line in run_once(&mut ctx, &cmd, &renderer) {
            println!("{line}");
        }
    } else {
        run_repl(ctx, &config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["crtsh", "--user", "Omega", "--no-color", "--log-level", "debug"]);
        let mut config = TerminalConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.user, "Omega");
        assert!(!config.ui.color);
        assert_eq!(config.logging.level, "debug");
        assert!(cli.command.is_none());
    }

    #[test]
    fn positional_command() {
        let cli = Cli::parse_from(["crtsh", "ls"]);
        assert_eq!(cli.command.as_deref(), Some("ls"));
    }

    #[test]
    fn default_session_keeps_every_line() {
        let mut ctx = build_session(&TerminalConfig::default()).unwrap();
        let renderer = Renderer::new(false);
        for _ in 0..1005 {
            run_once(&mut ctx, "pwd", &renderer);
        }
        assert_eq!(ctx.history().len(), 1005);
    }

    #[test]
    fn session_respects_history_limit() {
        let mut config = TerminalConfig::default();
        config.history.max_entries = Some(1);
        let mut ctx = build_session(&config).unwrap();
        let renderer = Renderer::new(false);
        run_once(&mut ctx, "ls", &renderer);
        run_once(&mut ctx, "pwd", &renderer);
        assert_eq!(ctx.history().len(), 1);
    }
}

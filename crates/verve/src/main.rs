// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verve - a conversational health-coaching assistant.
//!
//! This is the binary entry point for the Verve CLI.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod chat;
mod shell;
mod wiring;

/// Verve - a conversational health-coaching assistant.
#[derive(Parser, Debug)]
#[command(name = "verve", version, about, long_about = None)]
struct Cli {
    /// Force demo mode regardless of configuration.
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a single message and print the assistant reply.
    Chat {
        /// The message to send.
        message: String,
    },
    /// Launch an interactive coaching session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match verve_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            verve_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Chat { message }) => chat::run_chat(&config, cli.demo, &message).await,
        Some(Commands::Shell) => shell::run_shell(&config, cli.demo).await,
        None => {
            println!("verve: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn default_config_is_valid_for_the_binary() {
        // The out-of-the-box config (demo mode on) must pass validation,
        // so a fresh install can run without a config file.
        let config = verve_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "verve");
        assert!(config.demo.enabled);
    }
}

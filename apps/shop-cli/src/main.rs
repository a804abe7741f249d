//! Shop CLI - runs purchase requests against an in-memory store.
//!
//! # Usage
//!
//! ```bash
//! # One purchase from an argument
//! shop-cli purchase '{"user":{"email":"x@test.com","password":"password123"},"items":[],"payment":"card"}'
//!
//! # JSON lines from stdin, pinned to a Saturday, then dump the directory
//! shop-cli --today 2024-06-15 batch - --dump-users < requests.jsonl
//!
//! # Directory of a fresh process
//! shop-cli users
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;

use shop_cli::commands;
use shop_cli::error::ApiError;
use shop_cli::state::{ShopConfig, ShopState};
use shop_core::clock::FixedClock;
use shop_core::UserView;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Shop order pipeline")]
struct Cli {
    /// Pin the calendar date (YYYY-MM-DD) instead of reading the UTC system clock
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one purchase request (JSON, or `-` for stdin)
    Purchase {
        request: String,
    },
    /// Run JSON-lines purchase requests against one store
    Batch {
        /// Input file, or `-` for stdin
        input: PathBuf,

        /// Print the user directory after the last request
        #[arg(long)]
        dump_users: bool,
    },
    /// Print the user directory
    Users,
}

fn main() -> Result<()> {
    shop_cli::init_tracing();

    let cli = Cli::parse();

    let config = ShopConfig::from_env().context("Failed to load configuration")?;
    let state = match cli.today {
        Some(date) => {
            info!(%date, "Using fixed clock");
            ShopState::new(config, Arc::new(FixedClock::new(date)))
        }
        None => ShopState::with_system_clock(config),
    }
    .context("Failed to initialize store")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Purchase { request } => {
            let body = if request == "-" {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read request from stdin")?;
                buf
            } else {
                request
            };
            let response = commands::handle_line(&state, body.trim());
            write_json(&mut out, &response)?;
        }
        Commands::Batch { input, dump_users } => {
            let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                let file = File::open(&input)
                    .with_context(|| format!("Failed to open {}", input.display()))?;
                Box::new(BufReader::new(file))
            };

            commands::run_batch(&state, reader, &mut out).context("Batch failed")?;

            if dump_users {
                print_users(&mut out, commands::list_users(&state))?;
            }
        }
        Commands::Users => {
            print_users(&mut out, commands::list_users(&state))?;
        }
    }

    Ok(())
}

fn print_users<W: Write>(out: &mut W, users: Result<Vec<UserView>, ApiError>) -> Result<()> {
    match users {
        Ok(users) => write_json(out, &users),
        Err(err) => write_json(out, &err),
    }
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

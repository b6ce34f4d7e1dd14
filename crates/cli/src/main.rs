// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use color_eyre::Result;
use rota_api::{
    GenerateMonthRequest, ScheduleService, SetMonthAdminRequest, SetOverrideRequest,
    StaticDirectory,
};
use rota_storage::JsonFileStore;
use std::path::PathBuf;
use tracing::warn;

/// Shift rotation scheduler for small round-the-clock teams.
#[derive(Debug, Parser)]
#[command(name = "rota", version, about, long_about = None)]
struct Args {
    /// Directory holding month records and the rotation snapshot
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// JSON roster file (an array of employees)
    #[arg(long, default_value = "roster.json")]
    roster: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Designate the administrator for a month
    SetAdmin {
        year: u16,
        month: u8,
        employee_id: String,
    },

    /// Generate a month's schedule
    Generate {
        year: u16,
        month: u8,
        /// Fail instead of reporting coverage gaps
        #[arg(long)]
        strict: bool,
    },

    /// Print the effective schedule as JSON
    Show { year: u16, month: u8 },

    /// Record a manual correction for one cell
    SetOverride {
        year: u16,
        month: u8,
        employee_id: String,
        day: u8,
        shift: String,
    },

    /// Validate the effective schedule of a month
    Validate { year: u16, month: u8 },

    /// Finalize a month; no further edits after this
    Lock { year: u16, month: u8 },

    /// Recompute the rotation snapshot from a finished month
    AcceptBaseline { year: u16, month: u8 },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store = JsonFileStore::open(&args.data_dir)?;
    let directory = StaticDirectory::from_json_file(&args.roster)?;
    let service = ScheduleService::new(store, directory);

    match args.command {
        Command::SetAdmin {
            year,
            month,
            employee_id,
        } => {
            service.set_month_admin(&SetMonthAdminRequest {
                year,
                month,
                employee_id: employee_id.clone(),
            })?;
            println!("Administrator for {year:04}-{month:02} is now {employee_id}");
        }
        Command::Generate {
            year,
            month,
            strict,
        } => {
            let response = service.generate_month(&GenerateMonthRequest {
                year,
                month,
                strict,
            })?;
            println!("{}", response.message);
            for warning in &response.warnings {
                warn!(
                    day = warning.day,
                    shift = %warning.shift,
                    "no eligible employee for this slot"
                );
            }
        }
        Command::Show { year, month } => {
            let response = service.get_effective_schedule(year, month)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::SetOverride {
            year,
            month,
            employee_id,
            day,
            shift,
        } => {
            service.set_override(&SetOverrideRequest {
                year,
                month,
                employee_id: employee_id.clone(),
                day,
                shift,
            })?;
            println!("Recorded override for {employee_id} on {year:04}-{month:02}-{day:02}");
        }
        Command::Validate { year, month } => {
            let response = service.validate_month(year, month)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.blocking {
                std::process::exit(1);
            }
        }
        Command::Lock { year, month } => {
            let response = service.lock_month(year, month)?;
            println!("{}", response.message);
            if !response.locked {
                println!("{}", serde_json::to_string_pretty(&response.violations)?);
                std::process::exit(1);
            }
        }
        Command::AcceptBaseline { year, month } => {
            let response = service.accept_month_as_baseline(year, month)?;
            println!("{}", response.message);
        }
    }

    Ok(())
}

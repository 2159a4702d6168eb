#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that paints room projects and exports the world.

mod project;

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use map_maker_core::{DiagnosticEvent, DiagnosticKind, DiagnosticSink};
use map_maker_system_editor::EditorSession;
use map_maker_system_export::WorldDocument;

use crate::project::Project;

/// File written by `export` when no output path is given.
const DEFAULT_OUTPUT: &str = "world_data.json";

#[derive(Debug, Parser)]
#[command(name = "map-maker", version, about = "Paints rooms and exports world data")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Paints every room of the project and writes the world document.
    Export {
        /// TOML room project to load.
        project: PathBuf,
        /// Destination of the world document.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Paints every room of the project and reports spawn problems.
    Check {
        /// TOML room project to load.
        project: PathBuf,
    },
}

/// Diagnostics sink that forwards every event to the log.
#[derive(Debug, Default)]
struct LogSink {
    reported: usize,
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, event: DiagnosticEvent) {
        self.reported += 1;
        match event.kind {
            DiagnosticKind::NoSpawn => log::warn!(
                "no spawn position in room {}, fix and export again",
                event.room
            ),
            DiagnosticKind::MultipleSpawns => log::warn!(
                "multiple spawn positions in room {}, fix and export again \
                 (bottom right one is included in json)",
                event.room
            ),
        }
    }
}

/// Entry point for the map maker command-line interface.
fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        CliCommand::Export {
            project,
            output,
            pretty,
        } => {
            let (document, _) = paint_and_export(&project)?;
            let json = if pretty {
                document.to_json_pretty()
            } else {
                document.to_json()
            };
            fs::write(&output, json)
                .with_context(|| format!("failed to write world data to {}", output.display()))?;
            log::info!(
                "wrote {} rooms to {}",
                document.rooms.len(),
                output.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Check { project } => {
            let (document, sink) = paint_and_export(&project)?;
            log::info!(
                "checked {} rooms, {} diagnostics",
                document.rooms.len(),
                sink.reported
            );
            if sink.reported == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn paint_and_export(path: &Path) -> Result<(WorldDocument, LogSink)> {
    let project = Project::load(path)?;
    let mut session = EditorSession::new(project.editor_config());
    project.paint_into(&mut session)?;

    let mut sink = LogSink::default();
    let document = session.export(&mut sink);
    Ok((document, sink))
}

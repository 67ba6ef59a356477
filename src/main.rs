#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use mapty::{cli, render, session, store::WorkoutStore, types::Workout, utils};
use serde::Serialize;

#[macro_use]
extern crate mapty;

#[derive(Serialize)]
struct JsonEntry<'a> {
    workout: &'a Workout,
    marker: render::Marker,
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);
    dlog!(
        "mode=replay session={} format={:?}",
        cli.session.display(),
        cli.format
    );

    let reader = utils::open_session(&cli.session)?;
    let mut store = WorkoutStore::new();
    let summary = session::replay(reader, &mut store)?;

    dlog!(
        "accepted={} rejected={}",
        summary.accepted,
        summary.rejected.len()
    );

    match cli.format {
        cli::Format::Text => {
            if store.is_empty() {
                println!("No workouts logged.");
            } else {
                println!("{}", render::render_list(&store));
            }
        }
        cli::Format::Json => {
            let entries: Vec<JsonEntry<'_>> = store
                .iter()
                .map(|w| JsonEntry {
                    workout: w,
                    marker: render::marker(w),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

use std::io::BufRead;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use catalog_core::{update, CatalogState, Msg};
use catalog_engine::{ApiSettings, ReqwestCatalogApi};
use catalog_logging::catalog_info;

use crate::effects::EffectRunner;
use crate::input::{self, Command};
use crate::logging::{self, LogDestination};
use crate::render;

/// Wires the pure core to the engine and drives the dispatch loop:
/// commands in, `update`, effects out, re-render when the state is dirty.
pub fn run() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let mut settings = ApiSettings::default();
    if let Ok(base_url) = std::env::var("CATALOG_API_URL") {
        settings.base_url = base_url;
    }
    catalog_info!("using catalog source {}", settings.base_url);
    let api = ReqwestCatalogApi::new(settings).context("building catalog api client")?;

    let (tx, rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(Arc::new(api), tx.clone());
    spawn_input_thread(tx);

    let mut state = CatalogState::new();
    dispatch(&mut state, Msg::LoadRequested, &runner);

    while let Ok(command) = rx.recv() {
        match command {
            Command::Quit => break,
            Command::Help => render::help(),
            Command::Unknown(line) => println!("Unrecognized command: {line} (try `help`)"),
            Command::Core(msg) => dispatch(&mut state, msg, &runner),
        }
    }

    Ok(())
}

fn dispatch(state: &mut CatalogState, msg: Msg, runner: &EffectRunner) {
    let (mut next, effects) = update(std::mem::take(state), msg);
    runner.enqueue(effects);
    if next.consume_dirty() {
        render::render(&next.view());
    }
    *state = next;
}

fn spawn_input_thread(tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(input::parse(&line)).is_err() {
                return;
            }
        }
        // EOF on stdin ends the session.
        let _ = tx.send(Command::Quit);
    });
}

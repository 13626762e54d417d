use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tuirealm::Update;
use tuirealm::application::PollStrategy;

use book::model::ModelManager;
use book::storage::{JsonBookStorage, JsonPrefsStorage, StorageManager};
use unibook::app::model::Model;
use unibook::logic::Logic;
use unibook::{bootstrap, logger};

/// Command-line parameters.
#[derive(Debug, Parser)]
#[command(
    name = "unibook",
    about = "Terminal address book for university contacts grouped by modules",
    version
)]
struct AppParameters {
    /// Path to the application config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let parameters = AppParameters::parse();

    // Config first: logging is configured from it. Messages logged before
    // this point would go nowhere, so the config step reports through the
    // returned value only.
    let config = bootstrap::init_config(parameters.config.as_deref());
    logger::setup(config.logging()).context("failed to initialize logging")?;
    log::info!("=============================[ Initializing UniBook ]===========================");

    let prefs_storage = JsonPrefsStorage::new(config.user_prefs_path());
    let user_prefs = bootstrap::init_prefs(&prefs_storage);
    let book_storage = JsonBookStorage::new(user_prefs.book_file_path());
    let storage = StorageManager::new(book_storage, prefs_storage);
    let initial_book = bootstrap::init_book(&storage);

    let logic = Logic::new(ModelManager::new(initial_book, user_prefs), storage);
    let mut model = Model::new(logic).context("failed to initialize the interface")?;

    // Enter alternate screen
    let _ = model.terminal.enter_alternate_screen();
    let _ = model.terminal.enable_raw_mode();

    // Main loop
    while !model.quit {
        // Tick
        match model.app.tick(PollStrategy::Once) {
            Err(err) => {
                log::error!("Application tick failed: {err}");
                model.redraw = true;
            }
            Ok(messages) if !messages.is_empty() => {
                // NOTE: redraw if at least one msg has been processed
                model.redraw = true;
                for msg in messages.into_iter() {
                    let mut msg = Some(msg);
                    while msg.is_some() {
                        msg = model.update(msg);
                    }
                }
            }
            _ => {}
        }
        // Redraw
        if model.redraw {
            model.view();
            model.redraw = false;
        }
    }

    log::info!("============================ [ Stopping UniBook ] =============================");
    if let Err(e) = model.logic.save_prefs() {
        log::error!("Failed to save preferences: {e}");
    }

    // Terminate terminal
    let _ = model.terminal.leave_alternate_screen();
    let _ = model.terminal.disable_raw_mode();
    let _ = model.terminal.clear_screen();
    Ok(())
}

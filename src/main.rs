//! dirsync CLI - bidirectional folder synchronization helper
//!
//! Usage: dirsync <COMMAND>
//!
//! Commands:
//!   sync    Two-way sync (unison, or rsync pull+push when unison is missing)
//!   push    One-way copy SRC -> DST
//!   pull    One-way copy SRC -> DST

mod ui;

use anyhow::Result;
use dirsync::domain::ports::SyncEventSink;
use dirsync::infrastructure::JsonEventSink;
use dirsync::logging;
use dirsync::presentation::{create_sync_use_case, parse_args, Cli, ParseOutcome};
use tracing::debug;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(ParseOutcome::Run(cli)) => cli,
        Ok(ParseOutcome::Info(text)) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
            return;
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    logging::init_tracing(cli.verbose, ui.color);

    if let Err(err) = run(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let request = cli.to_request()?;

    if !request.dry_run() {
        pass_interrupts_to_child();
    }

    let events: Box<dyn SyncEventSink> = if ui.json {
        Box::new(JsonEventSink::stderr())
    } else {
        Box::new(ConsoleEventSink::stderr(*ui))
    };

    let mut use_case = create_sync_use_case(request.dry_run());
    let outcome = use_case.execute(&request, events.as_ref())?;
    debug!(?outcome, "finished");
    Ok(())
}

/// Leave Ctrl+C to the running engine.
///
/// The engine shares our process group and gets the interrupt itself; its
/// exit status is then reported like any other failure.
fn pass_interrupts_to_child() {
    if let Err(err) = ctrlc::set_handler(|| {}) {
        debug!(error = %err, "could not install interrupt handler");
    }
}

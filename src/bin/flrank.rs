//! flrank - List GOES solar flares from HEK exports, most intense first.

use anyhow::{Context, Error};
use goes_flare_rank::{load_events_from_path, write_report, CmdLineArgs};
use std::io;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);

        for cause in e.chain().skip(1) {
            println!("caused by: {}", cause);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let app = CmdLineArgs::new_app("flrank", "Rank GOES flare events by magnitude.");
    let (args, _matches) = CmdLineArgs::matches(app)?;

    let mut events = vec![];
    for input in args.inputs() {
        let loaded = load_events_from_path(input)
            .with_context(|| format!("reading events from {}", input.display()))?;
        events.extend(loaded);
    }

    let stdout = io::stdout();
    write_report(&args, events, stdout.lock())?;

    Ok(())
}

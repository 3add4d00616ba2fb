// roster: interactive student record manager

use std::io;

use crossterm::tty::IsTty;
use tracing::{debug, info};

use roster::console::{Session, SessionOptions};
use roster::logging::{self, LogConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = logging::init(&LogConfig::from_env()) {
        eprintln!("Warning: {}", e);
    }

    let stdout = io::stdout();
    let options = SessionOptions {
        styled: stdout.is_tty(),
    };
    debug!(?options, "starting session");

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    let end = session.run()?;

    info!(?end, records = session.store().len(), "session finished");
    Ok(())
}

// src/main.rs
// Entry point. `agenda_watch` runs one check; `agenda_watch serve`
// exposes the same run behind GET /check.

use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use agenda_watch::cli::{self, Mode};
use agenda_watch::config::Config;
use agenda_watch::runner::Watcher;
use agenda_watch::server;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agenda_watch=info")),
        )
        .init();

    let mut config = Config::from_env();
    let mode = cli::parse(&mut config)?;
    let watcher = Watcher::new(&config)?;

    match mode {
        Mode::Check => {
            let outcome = watcher.run_once()?;
            print!("{}", outcome.status_line());
            Ok(())
        }
        Mode::Serve => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::serve(watcher, config.port))?;
            Ok(())
        }
    }
}

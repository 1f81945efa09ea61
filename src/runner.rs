// src/runner.rs
// One watch cycle: fetch → extract → diff against the snapshot →
// notify → save. Frontends (CLI, HTTP) only ever call into here.

use std::collections::BTreeSet;

use tracing::{info, warn};

use crate::config::{consts, Config};
use crate::error::RunError;
use crate::fetch::{Fetcher, PageSource};
use crate::notify::{Channel, Notifier};
use crate::store::SnapshotStore;
use crate::{diff, extract};

/// What a completed (non-failed) run observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Previously unseen activities; the operator was notified
    /// (best-effort) and the snapshot was refreshed.
    News(Vec<String>),
    /// Page unchanged; snapshot refreshed anyway.
    NoNews,
    /// Extraction matched nothing. Either the page is empty or the
    /// selectors went stale; the snapshot is deliberately left alone so
    /// a transient DOM change cannot wipe it.
    StalePage,
}

impl RunOutcome {
    pub fn status_line(&self) -> String {
        match self {
            RunOutcome::News(list) => {
                format!("{} nueva(s) actividad(es):\n{}\n", list.len(), list.join("\n"))
            }
            RunOutcome::NoNews => "Sin novedades.\n".into(),
            RunOutcome::StalePage => {
                "La página no devolvió actividades; snapshot sin tocar.\n".into()
            }
        }
    }
}

/// Drive one full pipeline run.
///
/// Policies, in order:
/// - fetch failure aborts with no state change;
/// - empty extraction is a soft outcome, nothing saved, nobody notified;
/// - a notify failure is logged and the snapshot is still saved, so the
///   next run does not re-announce the same activities.
pub fn run(
    source: &dyn PageSource,
    notifier: &dyn Notifier,
    store: &SnapshotStore,
) -> Result<RunOutcome, RunError> {
    let markup = source.fetch()?;

    let current: BTreeSet<String> = extract::activities(&markup, consts::SELECTORS);
    if current.is_empty() {
        return Ok(RunOutcome::StalePage);
    }

    let previous = store.load();
    let new = diff::new_activities(&current, &previous);

    if new.is_empty() {
        save(store, &current)?;
        info!("no new activities");
        return Ok(RunOutcome::NoNews);
    }

    info!("{} new activit{} detected", new.len(), if new.len() == 1 { "y" } else { "ies" });
    if let Err(e) = notifier.notify(&new) {
        warn!("notification failed (continuing): {e}");
    }
    save(store, &current)?;

    Ok(RunOutcome::News(new))
}

fn save(store: &SnapshotStore, current: &BTreeSet<String>) -> Result<(), RunError> {
    store.save(current).map_err(|source| RunError::Snapshot {
        path: store.path().to_path_buf(),
        source,
    })
}

/* ---------------- Bundled runner for the frontends ---------------- */

/// The concrete fetcher/channel/store trio built from one [`Config`].
pub struct Watcher {
    fetcher: Fetcher,
    channel: Channel,
    store: SnapshotStore,
}

impl Watcher {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config.page_url.clone(), config.timeout)?,
            channel: Channel::from_config(&config.channel),
            store: SnapshotStore::new(config.snapshot_path.clone()),
        })
    }

    pub fn run_once(&self) -> Result<RunOutcome, RunError> {
        run(&self.fetcher, &self.channel, &self.store)
    }
}

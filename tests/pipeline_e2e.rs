// tests/pipeline_e2e.rs
// Full pipeline runs against canned pages, a temp snapshot file, and a
// recording notifier. Covers the change-detection policies end to end.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use agenda_watch::config::consts::PAGE_URL;
use agenda_watch::error::{FetchError, NotifyError, RunError};
use agenda_watch::fetch::PageSource;
use agenda_watch::notify::Notifier;
use agenda_watch::runner::{self, RunOutcome};
use agenda_watch::store::SnapshotStore;
use reqwest::StatusCode;
use tempfile::tempdir;

/* ---------------- Fakes ---------------- */

struct Page(String);

impl Page {
    fn with_titles(titles: &[&str]) -> Self {
        let mut body = String::new();
        for t in titles {
            body.push_str(&format!("<h2>{t}</h2>\n"));
        }
        Page(format!("<html><body>{body}</body></html>"))
    }

    fn empty() -> Self {
        Page("<html><body><p>Sin actividades por ahora.</p></body></html>".into())
    }
}

impl PageSource for Page {
    fn fetch(&self) -> Result<String, FetchError> {
        Ok(self.0.clone())
    }
}

struct UnreachablePage;

impl PageSource for UnreachablePage {
    fn fetch(&self) -> Result<String, FetchError> {
        Err(FetchError::Status {
            url: PAGE_URL.into(),
            status: StatusCode::GATEWAY_TIMEOUT,
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    calls: RefCell<Vec<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, new_activities: &[String]) -> Result<(), NotifyError> {
        self.calls.borrow_mut().push(new_activities.to_vec());
        Ok(())
    }
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(&self, _new_activities: &[String]) -> Result<(), NotifyError> {
        Err(NotifyError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "mail provider down".into(),
        })
    }
}

fn snapshot_bytes(path: &Path) -> Option<Vec<u8>> {
    fs::read(path).ok()
}

/* ---------------- Scenarios ---------------- */

#[test]
fn unchanged_page_reports_no_news() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    store
        .save(&["Taller A".to_string(), "Charla B".to_string()].into_iter().collect())
        .unwrap();
    let before = snapshot_bytes(store.path()).unwrap();

    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Taller A", "Charla B"]);

    let outcome = runner::run(&page, &notifier, &store).unwrap();
    assert_eq!(outcome, RunOutcome::NoNews);
    assert!(notifier.calls.borrow().is_empty());
    // Refreshed, but same content.
    assert_eq!(snapshot_bytes(store.path()).unwrap(), before);
}

#[test]
fn first_run_notifies_and_persists() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Feria C"]);

    let outcome = runner::run(&page, &notifier, &store).unwrap();
    assert_eq!(outcome, RunOutcome::News(vec!["Feria C".to_string()]));

    let calls = notifier.calls.borrow();
    assert_eq!(calls.as_slice(), &[vec!["Feria C".to_string()]]);
    assert_eq!(store.load(), ["Feria C".to_string()].into_iter().collect());
}

#[test]
fn fetch_failure_leaves_everything_alone() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    store.save(&["Taller A".to_string()].into_iter().collect()).unwrap();
    let before = snapshot_bytes(store.path()).unwrap();

    let notifier = RecordingNotifier::default();
    let result = runner::run(&UnreachablePage, &notifier, &store);

    assert!(matches!(result, Err(RunError::Fetch(_))));
    assert!(notifier.calls.borrow().is_empty());
    assert_eq!(snapshot_bytes(store.path()).unwrap(), before);
}

#[test]
fn fetch_failure_on_first_run_creates_no_snapshot() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));

    let notifier = RecordingNotifier::default();
    let result = runner::run(&UnreachablePage, &notifier, &store);

    assert!(result.is_err());
    assert!(snapshot_bytes(store.path()).is_none());
}

#[test]
fn stale_selectors_do_not_wipe_the_snapshot() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    store.save(&["Taller A".to_string()].into_iter().collect()).unwrap();
    let before = snapshot_bytes(store.path()).unwrap();

    let notifier = RecordingNotifier::default();
    let outcome = runner::run(&Page::empty(), &notifier, &store).unwrap();

    assert_eq!(outcome, RunOutcome::StalePage);
    assert!(notifier.calls.borrow().is_empty());
    assert_eq!(snapshot_bytes(store.path()).unwrap(), before);
}

#[test]
fn back_to_back_runs_are_idempotent() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Taller A", "Charla B"]);

    let first = runner::run(&page, &notifier, &store).unwrap();
    assert!(matches!(first, RunOutcome::News(_)));
    let after_first = snapshot_bytes(store.path()).unwrap();

    let second = runner::run(&page, &notifier, &store).unwrap();
    assert_eq!(second, RunOutcome::NoNews);
    assert_eq!(snapshot_bytes(store.path()).unwrap(), after_first);
    assert_eq!(notifier.calls.borrow().len(), 1);
}

#[test]
fn notify_failure_still_saves_the_snapshot() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    let page = Page::with_titles(&["Feria C"]);

    // The run completes and persists; only the notification is lost.
    let outcome = runner::run(&page, &FailingNotifier, &store).unwrap();
    assert_eq!(outcome, RunOutcome::News(vec!["Feria C".to_string()]));
    assert_eq!(store.load(), ["Feria C".to_string()].into_iter().collect());
}

#[test]
fn repeated_titles_on_the_page_are_reported_once() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Feria C", "Feria C", "Feria C"]);

    let outcome = runner::run(&page, &notifier, &store).unwrap();
    assert_eq!(outcome, RunOutcome::News(vec!["Feria C".to_string()]));
    assert_eq!(notifier.calls.borrow()[0], vec!["Feria C".to_string()]);
}

#[test]
fn new_activities_come_back_sorted() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Zumba", "Ajedrez", "Milonga"]);

    let outcome = runner::run(&page, &notifier, &store).unwrap();
    let expected: Vec<String> =
        ["Ajedrez", "Milonga", "Zumba"].into_iter().map(String::from).collect();
    assert_eq!(outcome, RunOutcome::News(expected));
}

#[test]
fn removed_activities_refresh_the_snapshot_without_news() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("actividades.json"));
    store
        .save(&["Taller A".to_string(), "Charla B".to_string()].into_iter().collect())
        .unwrap();

    let notifier = RecordingNotifier::default();
    let page = Page::with_titles(&["Taller A"]);

    let outcome = runner::run(&page, &notifier, &store).unwrap();
    assert_eq!(outcome, RunOutcome::NoNews);
    // Snapshot tracks the latest successful fetch, not history.
    assert_eq!(store.load(), ["Taller A".to_string()].into_iter().collect());
}

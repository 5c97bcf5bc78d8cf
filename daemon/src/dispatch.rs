/// Trigger-file scan and dispatch.
///
/// One dispatcher instance watches exactly one directory for the life of the
/// process. [`TriggerDispatcher::on_directory_changed`] is the only entry
/// point; it never panics and never returns an error — every per-trigger
/// failure degrades to a logged no-op and the scan moves on to the next
/// table entry.
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::host::{ScreenHost, ViewHost};
use crate::triggers::{ActionKind, Orientation, TRIGGERS};

pub struct TriggerDispatcher {
    dir: PathBuf,
    /// Object name of the host view in which page turns are meaningful.
    reading_view: String,
    view: Arc<dyn ViewHost>,
    screen: Arc<dyn ScreenHost>,
    activity_tx: mpsc::Sender<()>,
    /// Serializes scans. The underlying watch can deliver one change event
    /// per file touch; overlapping scans must never interleave.
    scan_lock: Mutex<()>,
}

impl TriggerDispatcher {
    pub fn new(
        dir: PathBuf,
        reading_view: String,
        view: Arc<dyn ViewHost>,
        screen: Arc<dyn ScreenHost>,
        activity_tx: mpsc::Sender<()>,
    ) -> Self {
        Self {
            dir,
            reading_view,
            view,
            screen,
            activity_tx,
            scan_lock: Mutex::new(()),
        }
    }

    /// Entry point for directory change events.
    ///
    /// Scans the trigger table in declaration order; for each trigger file
    /// present, emits an activity signal, executes the mapped action, and
    /// deletes the file. Paths other than the watched directory are ignored.
    pub fn on_directory_changed(&self, path: &Path) {
        if path != self.dir {
            return;
        }

        let _guard = match self.scan_lock.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };

        for def in TRIGGERS {
            let file = self.dir.join(def.name);
            if !file.exists() {
                continue;
            }

            // Keep the device awake. Queued before the action runs so that a
            // blocking or failing action still counts as activity; try_send
            // means a full channel drops the signal (best-effort).
            let _ = self.activity_tx.try_send(());

            self.execute(def.action);

            eprintln!("[dispatch] Invoking {}", def.name);

            // The file is deleted as the acknowledgment. Failure here is
            // non-fatal: the remaining triggers are still processed.
            if let Err(e) = std::fs::remove_file(&file) {
                eprintln!(
                    "[dispatch] Failed to remove trigger file {}: {e}",
                    file.display()
                );
            }
        }
    }

    fn execute(&self, action: ActionKind) {
        match action {
            ActionKind::NextPage => self.turn_page("nextPage"),
            ActionKind::PrevPage => self.turn_page("prevPage"),
            ActionKind::RotatePrimary => self.rotate(Orientation::Primary),
            ActionKind::RotateTo(orientation) => self.rotate(orientation),
        }
    }

    /// Forwards a page turn to the active view, but only when the reading
    /// view is frontmost. Anything else is a logged no-op — the request is
    /// not queued and not retried.
    fn turn_page(&self, method: &str) {
        let view = match self.view.current_view() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("[dispatch] Skipping {method}: {e}");
                return;
            }
        };
        if view.name != self.reading_view {
            eprintln!("[dispatch] Not the reading view ({}), skipping {method}", view.name);
            return;
        }
        if let Err(e) = self.view.invoke(&view, method) {
            eprintln!("[dispatch] {method} failed: {e}");
        }
    }

    fn rotate(&self, orientation: Orientation) {
        let screen = match self.screen.primary_screen() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[dispatch] Skipping rotation to {orientation}: {e}");
                return;
            }
        };
        if let Err(e) = self.screen.set_orientation(&screen, orientation) {
            eprintln!("[dispatch] Rotation to {orientation} failed: {e}");
        }
    }
}

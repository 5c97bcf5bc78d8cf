use notify::{Config as NotifyConfig, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::event::DaemonEvent;

/// Watches the trigger directory and forwards a
/// [`DaemonEvent::DirectoryChanged`] for every change event touching it.
///
/// The watch is non-recursive: only files directly inside the directory are
/// triggers. Every raw notify event kind (create, modify, remove) is
/// forwarded — the dispatcher decides whether any trigger is actually
/// present, so a removal event costs one empty scan at most.
pub async fn run(dir: PathBuf, tx: mpsc::Sender<DaemonEvent>) {
    let (watch_tx, mut watch_rx) = mpsc::channel::<notify::Event>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                let _ = watch_tx.blocking_send(event);
            }
        },
        NotifyConfig::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("[watch] Failed to create file watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        eprintln!("[watch] Failed to watch {}: {e}", dir.display());
        return;
    }

    while let Some(event) = watch_rx.recv().await {
        let touches_dir = event
            .paths
            .iter()
            .any(|p| p.parent() == Some(dir.as_path()) || p == dir.as_path());

        if touches_dir
            && tx
                .send(DaemonEvent::DirectoryChanged(dir.clone()))
                .await
                .is_err()
        {
            break;
        }
    }
}

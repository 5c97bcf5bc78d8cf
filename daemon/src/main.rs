mod config;
mod dispatch;
mod event;
mod helper;
mod host;
mod idle;
mod paths;
mod triggers;
mod watch;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::event::DaemonEvent;

#[tokio::main]
async fn main() {
    // ── Configuration ─────────────────────────────────────────────────────────
    let config_path = paths::config_file_path();
    let config = config::load_or_default(&config_path).unwrap_or_else(|e| {
        eprintln!("[config] Error (using defaults): {e}");
        config::Config::default()
    });

    let watch_dir = PathBuf::from(&config.watch.dir);
    if let Err(e) = std::fs::create_dir_all(&watch_dir) {
        eprintln!("Failed to create watch directory {}: {e}", watch_dir.display());
        std::process::exit(1);
    }

    // ── Host collaborators ────────────────────────────────────────────────────
    let view = Arc::new(host::HelperViewHost::new(&config.helpers));
    let screen = Arc::new(host::HelperScreenHost::new(&config.helpers));
    let power = Arc::new(host::HelperPowerHost::new(&config.helpers));

    let (event_tx, mut event_rx) = mpsc::channel::<DaemonEvent>(32);
    let (activity_tx, activity_rx) = mpsc::channel::<()>(16);

    // ── Background tasks ──────────────────────────────────────────────────────
    tokio::spawn(idle::run(activity_rx, power));
    tokio::spawn(watch::run(watch_dir.clone(), event_tx.clone()));

    // Graceful shutdown on Ctrl+C.
    {
        let tx = event_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(DaemonEvent::Shutdown).await;
            }
        });
    }

    let dispatcher = dispatch::TriggerDispatcher::new(
        watch_dir.clone(),
        config.watch.reading_view.clone(),
        view,
        screen,
        activity_tx,
    );

    println!(
        "pageturner-daemon v{} watching {}",
        env!("CARGO_PKG_VERSION"),
        watch_dir.display()
    );

    // ── Event loop ────────────────────────────────────────────────────────────
    while let Some(evt) = event_rx.recv().await {
        match evt {
            DaemonEvent::DirectoryChanged(path) => dispatcher.on_directory_changed(&path),
            DaemonEvent::Shutdown => {
                println!("Shutting down");
                break;
            }
        }
    }
}

use std::path::PathBuf;

pub enum DaemonEvent {
    /// The watched trigger directory changed on disk.
    DirectoryChanged(PathBuf),
    /// Ctrl+C received; the daemon should exit.
    Shutdown,
}

/// Host collaborator interfaces.
///
/// The daemon never talks to the reading application directly; it goes
/// through three narrow traits so tests can supply fakes and production
/// wiring can swap in whatever integration the device offers. The shipped
/// implementations shell out to helper executables (see [`crate::helper`]),
/// following the convention that a nonzero exit status means "target
/// unavailable" and the daemon falls back to doing nothing.
use thiserror::Error;

use crate::config::HelperConfig;
use crate::helper;
use crate::triggers::Orientation;

/// Why a host collaborator could not carry out a request.
///
/// All of these are handled locally by the caller (logged, then skipped);
/// none of them is fatal to the daemon.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host's window controller could not be reached at all.
    #[error("no window controller instance")]
    NoController,
    /// The controller is up but reports no active view.
    #[error("no active view")]
    NoView,
    #[error("no primary screen")]
    NoScreen,
    #[error("no power manager instance")]
    NoPowerManager,
    /// A helper executable could not be spawned.
    #[error("helper `{command}` failed to run: {source}")]
    HelperSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    /// A helper ran but reported failure.
    #[error("helper `{command}` exited with status {status}")]
    HelperStatus { command: String, status: i32 },
}

/// Handle to a host view. Carries the view's object name so the dispatcher
/// can recognize the reading view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle {
    pub name: String,
}

/// Handle to a host screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenHandle {
    pub name: String,
}

/// Access to the host's active UI view.
pub trait ViewHost: Send + Sync {
    /// The currently active view, if the host has one.
    fn current_view(&self) -> Result<ViewHandle, HostError>;
    /// Queues a zero-argument method call on `view`.
    fn invoke(&self, view: &ViewHandle, method: &str) -> Result<(), HostError>;
}

/// Access to the host's display control.
pub trait ScreenHost: Send + Sync {
    fn primary_screen(&self) -> Result<ScreenHandle, HostError>;
    fn set_orientation(
        &self,
        screen: &ScreenHandle,
        orientation: Orientation,
    ) -> Result<(), HostError>;
}

/// Access to the host's idle-timer reset mechanism.
pub trait PowerHost: Send + Sync {
    /// Delivers a synthetic user-activity event to the power manager,
    /// resetting the idle/sleep countdown.
    fn deliver_activity_event(&self) -> Result<(), HostError>;
}

// ── Helper-backed implementations ───────────────────────────────────────────

fn spawn_err(command: &str, source: std::io::Error) -> HostError {
    HostError::HelperSpawn { command: command.to_string(), source }
}

/// [`ViewHost`] backed by helper executables.
///
/// The view-lookup helper prints the active view's object name on stdout and
/// exits 0. A nonzero exit means the controller is unreachable; exit 0 with
/// empty output means the controller is up but has no active view. The
/// invoke helper receives the view name and the method name as arguments.
pub struct HelperViewHost {
    current_view_cmd: String,
    invoke_cmd: String,
}

impl HelperViewHost {
    pub fn new(helpers: &HelperConfig) -> Self {
        Self {
            current_view_cmd: helpers.current_view.clone(),
            invoke_cmd: helpers.invoke_view.clone(),
        }
    }
}

impl ViewHost for HelperViewHost {
    fn current_view(&self) -> Result<ViewHandle, HostError> {
        let out = helper::run(&self.current_view_cmd, &[])
            .map_err(|e| spawn_err(&self.current_view_cmd, e))?;
        if !out.success() {
            return Err(HostError::NoController);
        }
        let name = out.trimmed();
        if name.is_empty() {
            return Err(HostError::NoView);
        }
        Ok(ViewHandle { name: name.to_string() })
    }

    fn invoke(&self, view: &ViewHandle, method: &str) -> Result<(), HostError> {
        let out = helper::run(&self.invoke_cmd, &[&view.name, method])
            .map_err(|e| spawn_err(&self.invoke_cmd, e))?;
        if !out.success() {
            return Err(HostError::HelperStatus {
                command: self.invoke_cmd.clone(),
                status: out.status,
            });
        }
        Ok(())
    }
}

/// [`ScreenHost`] backed by helper executables.
///
/// The screen-lookup helper prints the primary screen's identifier; the
/// orientation helper receives the screen identifier and an orientation name
/// (`primary`, `portrait`, `landscape`, `inverted-portrait`,
/// `inverted-landscape`).
pub struct HelperScreenHost {
    primary_screen_cmd: String,
    set_orientation_cmd: String,
}

impl HelperScreenHost {
    pub fn new(helpers: &HelperConfig) -> Self {
        Self {
            primary_screen_cmd: helpers.primary_screen.clone(),
            set_orientation_cmd: helpers.set_orientation.clone(),
        }
    }
}

impl ScreenHost for HelperScreenHost {
    fn primary_screen(&self) -> Result<ScreenHandle, HostError> {
        let out = helper::run(&self.primary_screen_cmd, &[])
            .map_err(|e| spawn_err(&self.primary_screen_cmd, e))?;
        if !out.success() || out.trimmed().is_empty() {
            return Err(HostError::NoScreen);
        }
        Ok(ScreenHandle { name: out.trimmed().to_string() })
    }

    fn set_orientation(
        &self,
        screen: &ScreenHandle,
        orientation: Orientation,
    ) -> Result<(), HostError> {
        let out = helper::run(&self.set_orientation_cmd, &[&screen.name, orientation.as_str()])
            .map_err(|e| spawn_err(&self.set_orientation_cmd, e))?;
        if !out.success() {
            return Err(HostError::HelperStatus {
                command: self.set_orientation_cmd.clone(),
                status: out.status,
            });
        }
        Ok(())
    }
}

/// [`PowerHost`] backed by a helper executable. A nonzero exit is treated as
/// "power manager unavailable".
pub struct HelperPowerHost {
    reset_idle_cmd: String,
}

impl HelperPowerHost {
    pub fn new(helpers: &HelperConfig) -> Self {
        Self { reset_idle_cmd: helpers.reset_idle.clone() }
    }
}

impl PowerHost for HelperPowerHost {
    fn deliver_activity_event(&self) -> Result<(), HostError> {
        let out = helper::run(&self.reset_idle_cmd, &[])
            .map_err(|e| spawn_err(&self.reset_idle_cmd, e))?;
        if !out.success() {
            return Err(HostError::NoPowerManager);
        }
        Ok(())
    }
}

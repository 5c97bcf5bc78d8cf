use std::fmt;

/// Screen orientations accepted by the rotation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The device's native orientation.
    Primary,
    Portrait,
    Landscape,
    InvertedPortrait,
    InvertedLandscape,
}

impl Orientation {
    /// Stable lowercase name, passed as the argument to orientation helpers.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Primary => "primary",
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::InvertedPortrait => "inverted-portrait",
            Orientation::InvertedLandscape => "inverted-landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action requested by a trigger file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    NextPage,
    PrevPage,
    /// Rotate back to the device's primary orientation.
    RotatePrimary,
    RotateTo(Orientation),
}

/// A recognized trigger file name and the action it requests.
pub struct TriggerDef {
    pub name: &'static str,
    pub action: ActionKind,
}

/// Recognized trigger files, in scan order.
///
/// The order is part of the protocol: triggers present in the same change
/// event are dispatched in this order, and external actors may rely on it
/// being stable across runs. File presence alone is the command; contents
/// are never read.
pub const TRIGGERS: &[TriggerDef] = &[
    TriggerDef { name: "nextPage", action: ActionKind::NextPage },
    TriggerDef { name: "prevPage", action: ActionKind::PrevPage },
    TriggerDef { name: "rotatePrimary", action: ActionKind::RotatePrimary },
    TriggerDef { name: "rotate0", action: ActionKind::RotateTo(Orientation::Portrait) },
    TriggerDef { name: "rotate90", action: ActionKind::RotateTo(Orientation::Landscape) },
    TriggerDef { name: "rotate180", action: ActionKind::RotateTo(Orientation::InvertedPortrait) },
    TriggerDef { name: "rotate270", action: ActionKind::RotateTo(Orientation::InvertedLandscape) },
];

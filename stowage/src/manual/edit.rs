use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::entities::{Container, Placement, yawed_extents};
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Point3};
use crate::util::PackerConfig;

/// Which degrees of freedom a manual edit may change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Move the center, rotation is reset
    Translate,
    /// Turn around the vertical axis, only the yaw component is kept
    RotateYaw,
}

/// Pose of a placement: the center of its box and its Euler rotation (radians).
/// `roll` and `pitch` turn around the width and depth axes, `yaw` around the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Pose {
    pub center: Point3,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    pub fn new(center: Point3) -> Self {
        Pose {
            center,
            ..Default::default()
        }
    }

    pub fn with_rotation(self, roll: f64, pitch: f64, yaw: f64) -> Self {
        Pose {
            roll,
            pitch,
            yaw,
            ..self
        }
    }
}

impl From<&Placement> for Pose {
    fn from(p: &Placement) -> Self {
        Pose::new(p.center()).with_rotation(0.0, 0.0, p.yaw)
    }
}

/// Request to move one placement to a new pose
#[derive(Clone, Debug, PartialEq)]
pub struct Edit {
    pub placement_id: String,
    pub pose: Pose,
    pub mode: EditMode,
    /// Grid the center snaps to in [`EditMode::Translate`], no snapping if `None`
    pub snap: Option<f64>,
}

/// Result of a manual edit.
#[derive(Clone, Debug, PartialEq)]
pub struct EditOutcome {
    pub accepted: bool,
    /// The placement after the edit, unchanged if the edit was rejected.
    /// `None` if no placement with the requested id exists.
    pub placement: Option<Placement>,
}

impl EditOutcome {
    fn rejected(placement: Option<Placement>) -> Self {
        EditOutcome {
            accepted: false,
            placement,
        }
    }
}

/// Validates the move of placement `id` to `pose`.
///
/// The requested center is snapped (translations only) and clamped into the container,
/// the rotation is restricted to what `mode` allows, and the resulting box may not collide with any other placement.
/// If one of these constraints cannot be met, the edit is rejected and the placement is returned unchanged.
pub fn validate_edit(
    placements: &[Placement],
    id: &str,
    pose: Pose,
    container: &Container,
    mode: EditMode,
    snap: Option<f64>,
    config: &PackerConfig,
) -> EditOutcome {
    let Some(target) = placements.iter().find(|p| p.id == id) else {
        warn!("[EDIT] no placement with id {id}, edit rejected");
        return EditOutcome::rejected(None);
    };
    let others = placements.iter().filter(|p| p.id != id);
    resolve_edit(target, others, pose, container, mode, snap, config)
}

pub(super) fn resolve_edit<'a>(
    target: &Placement,
    mut others: impl Iterator<Item = &'a Placement>,
    pose: Pose,
    container: &Container,
    mode: EditMode,
    snap: Option<f64>,
    config: &PackerConfig,
) -> EditOutcome {
    let yaw = match mode {
        EditMode::Translate => 0.0,
        EditMode::RotateYaw => pose.yaw,
    };

    let center = match (mode, snap) {
        (EditMode::Translate, Some(step)) if step > 0.0 => pose.center.snapped(step),
        _ => pose.center,
    };

    let (w, d) = yawed_extents(target.w, target.d, yaw);
    let extents = container.extents();
    let tol = config.collision_tolerance;
    if w > extents.0 + tol || d > extents.1 + tol || target.h > extents.2 + tol {
        debug!(
            "[EDIT] {} turned by {:.3} rad needs {:.3}x{:.3}, does not fit the container, edit rejected",
            target.id, yaw, w, d
        );
        return EditOutcome::rejected(Some(target.clone()));
    }

    let center = Point3(
        clamp_axis(center.0, w / 2.0, extents.0),
        clamp_axis(center.1, d / 2.0, extents.1),
        clamp_axis(center.2, target.h / 2.0, extents.2),
    );

    let candidate = Cuboid::centered(center, w, d, target.h);
    if let Some(blocker) = others.find(|p| p.bbox().collides_with(&candidate, tol)) {
        debug!(
            "[EDIT] moving {} to ({:.3}, {:.3}, {:.3}) collides with {}, edit rejected",
            target.id, center.0, center.1, center.2, blocker.id
        );
        return EditOutcome::rejected(Some(target.clone()));
    }

    let moved = Placement {
        x: center.0 - target.w / 2.0,
        y: center.1 - target.d / 2.0,
        z: center.2 - target.h / 2.0,
        yaw,
        ..target.clone()
    };

    debug!(
        "[EDIT] moved {} to ({:.3}, {:.3}, {:.3}), yaw {:.3}",
        moved.id, moved.x, moved.y, moved.z, moved.yaw
    );

    EditOutcome {
        accepted: true,
        placement: Some(moved),
    }
}

/// Keeps a box with half extent `half` centered at `v` within `[0, size]`
fn clamp_axis(v: f64, half: f64, size: f64) -> f64 {
    f64::max(half, f64::min(size - half, v))
}

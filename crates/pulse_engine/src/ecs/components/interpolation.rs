//! Interpolation component for smooth rendering between ticks

use crate::foundation::math::Vec2;

/// Pose snapshot from the start of the most recent simulation tick
///
/// Captured once per tick, before the motion integrator runs. The renderer
/// blends between this snapshot and the current transform using the loop
/// driver's fraction-to-next-tick, so entities move smoothly even when the
/// display refreshes faster than the simulation ticks.
///
/// Entities without this component render at their raw current pose.
#[derive(Debug, Clone, Copy)]
pub struct Interpolation {
    /// Position at the start of the most recent tick
    pub previous_position: Vec2,

    /// Rotation in degrees at the start of the most recent tick
    pub previous_rotation_degrees: f32,
}

impl Default for Interpolation {
    fn default() -> Self {
        Self {
            previous_position: Vec2::zeros(),
            previous_rotation_degrees: 0.0,
        }
    }
}

//! Lifetime component for entities that expire after a duration

/// Countdown that expires an entity after a number of seconds
///
/// The expiry sweeper decrements `remaining_seconds` once per fixed tick.
/// When it reaches zero the entity is either destroyed outright or, with
/// `destroy_on_expiry` cleared, only marked so game logic can react to the
/// expiry itself (spawn an effect, play a sound) before removing it.
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    /// Seconds left before the entity expires
    pub remaining_seconds: f32,

    /// Destroy the entity on expiry; when false it is only marked expired
    pub destroy_on_expiry: bool,

    /// Set by the sweeper once the countdown reaches zero
    pub expired: bool,
}

impl Lifetime {
    /// Lifetime that destroys its entity when the countdown elapses
    pub fn destroying(seconds: f32) -> Self {
        Self {
            remaining_seconds: seconds,
            destroy_on_expiry: true,
            expired: false,
        }
    }

    /// Lifetime that only marks its entity as expired
    pub fn marking(seconds: f32) -> Self {
        Self {
            remaining_seconds: seconds,
            destroy_on_expiry: false,
            expired: false,
        }
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::destroying(1.0)
    }
}

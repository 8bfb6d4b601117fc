//! # Input handling
//!
//! Platform events arrive through an [`EventPump`] implementation; the
//! engine drains it once per frame into an [`InputState`] snapshot that
//! scenes can query for held keys and edge transitions. Nothing here
//! depends on a concrete windowing library.

use std::collections::HashSet;

use crate::foundation::math::Vec2;

/// Logical keyboard keys the engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Enter,
    Escape,
    Tab,
    LeftShift,
    LeftCtrl,
    P,
    Q,
    E,
    R,
    F,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
}

/// A single platform event delivered by the event pump
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user asked to close the application
    Quit,
    /// A key transitioned to pressed
    KeyDown(Key),
    /// A key transitioned to released
    KeyUp(Key),
    /// The mouse moved to a new surface pixel position
    MouseMoved(Vec2),
    /// The primary mouse button transitioned to pressed
    MouseDown,
    /// The primary mouse button transitioned to released
    MouseUp,
    /// The output surface was resized, in pixels
    Resized(f32, f32),
}

/// Source of platform events, drained once per frame
pub trait EventPump {
    /// Pop the next pending event, or `None` when the queue is empty
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Per-frame snapshot of keyboard and mouse state
#[derive(Debug)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    released: HashSet<Key>,
    mouse_position: Vec2,
    mouse_delta: Vec2,
    mouse_held: bool,
    mouse_pressed: bool,
    quit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            released: HashSet::new(),
            mouse_position: Vec2::zeros(),
            mouse_delta: Vec2::zeros(),
            mouse_held: false,
            mouse_pressed: false,
            quit_requested: false,
        }
    }

    /// Clear the per-frame edge sets, keeping held state
    ///
    /// Call at the start of each frame before feeding new events.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.mouse_delta = Vec2::zeros();
        self.mouse_pressed = false;
    }

    /// Fold one platform event into the snapshot
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.quit_requested = true,
            InputEvent::KeyDown(key) => {
                // Key repeat delivers KeyDown for already-held keys
                if self.held.insert(key) {
                    self.pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                if self.held.remove(&key) {
                    self.released.insert(key);
                }
            }
            InputEvent::MouseMoved(position) => {
                self.mouse_delta += position - self.mouse_position;
                self.mouse_position = position;
            }
            InputEvent::MouseDown => {
                if !self.mouse_held {
                    self.mouse_pressed = true;
                }
                self.mouse_held = true;
            }
            InputEvent::MouseUp => self.mouse_held = false,
            InputEvent::Resized(..) => {}
        }
    }

    /// Whether a key is currently held down
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether a key went down this frame
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether a key went up this frame
    pub fn was_released(&self, key: Key) -> bool {
        self.released.contains(&key)
    }

    /// WASD/arrow movement axis, one unit per active direction
    ///
    /// Opposing keys cancel; the diagonal is normalized to unit length so
    /// diagonal movement is not faster.
    pub fn movement_axis(&self) -> Vec2 {
        let mut axis = Vec2::zeros();
        if self.is_held(Key::W) || self.is_held(Key::Up) {
            axis.y += 1.0;
        }
        if self.is_held(Key::S) || self.is_held(Key::Down) {
            axis.y -= 1.0;
        }
        if self.is_held(Key::D) || self.is_held(Key::Right) {
            axis.x += 1.0;
        }
        if self.is_held(Key::A) || self.is_held(Key::Left) {
            axis.x -= 1.0;
        }
        if axis.magnitude() > 1.0 {
            axis = axis.normalize();
        }
        axis
    }

    /// Current mouse position in surface pixels
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse movement accumulated over the current frame
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Whether the primary mouse button is held
    pub fn is_mouse_held(&self) -> bool {
        self.mouse_held
    }

    /// Whether the primary mouse button went down this frame
    pub fn was_mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether a quit event has been seen
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_edge_lasts_one_frame() {
        let mut state = InputState::new();
        state.apply(InputEvent::KeyDown(Key::Space));

        assert!(state.was_pressed(Key::Space));
        assert!(state.is_held(Key::Space));

        state.begin_frame();
        assert!(!state.was_pressed(Key::Space));
        assert!(state.is_held(Key::Space));
    }

    #[test]
    fn test_key_repeat_is_not_a_new_press() {
        let mut state = InputState::new();
        state.apply(InputEvent::KeyDown(Key::W));
        state.begin_frame();
        state.apply(InputEvent::KeyDown(Key::W));

        assert!(state.is_held(Key::W));
        assert!(!state.was_pressed(Key::W));
    }

    #[test]
    fn test_release_clears_held() {
        let mut state = InputState::new();
        state.apply(InputEvent::KeyDown(Key::A));
        state.begin_frame();
        state.apply(InputEvent::KeyUp(Key::A));

        assert!(!state.is_held(Key::A));
        assert!(state.was_released(Key::A));

        state.begin_frame();
        assert!(!state.was_released(Key::A));
    }

    #[test]
    fn test_movement_axis_cancels_and_normalizes() {
        let mut state = InputState::new();
        state.apply(InputEvent::KeyDown(Key::W));
        state.apply(InputEvent::KeyDown(Key::S));
        assert_eq!(state.movement_axis(), Vec2::zeros());

        state.apply(InputEvent::KeyUp(Key::S));
        state.apply(InputEvent::KeyDown(Key::D));
        let axis = state.movement_axis();
        assert!((axis.magnitude() - 1.0).abs() < 1e-5);
        assert!(axis.x > 0.0 && axis.y > 0.0);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut state = InputState::new();
        state.apply(InputEvent::Quit);
        state.begin_frame();
        assert!(state.quit_requested());
    }

    #[test]
    fn test_mouse_tracking() {
        let mut state = InputState::new();
        state.apply(InputEvent::MouseMoved(Vec2::new(100.0, 50.0)));
        state.apply(InputEvent::MouseDown);

        assert!(state.was_mouse_pressed());
        assert!(state.is_mouse_held());
        assert_eq!(state.mouse_position().x, 100.0);

        state.begin_frame();
        assert!(!state.was_mouse_pressed());
        assert!(state.is_mouse_held());
    }

    #[test]
    fn test_mouse_delta_accumulates_then_resets() {
        let mut state = InputState::new();
        state.apply(InputEvent::MouseMoved(Vec2::new(10.0, 0.0)));
        state.apply(InputEvent::MouseMoved(Vec2::new(15.0, 5.0)));
        assert_eq!(state.mouse_delta(), Vec2::new(15.0, 5.0));

        state.begin_frame();
        assert_eq!(state.mouse_delta(), Vec2::zeros());
        assert_eq!(state.mouse_position(), Vec2::new(15.0, 5.0));
    }
}

/// Platform-agnostic input handling system
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Platform-independent input events
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    FocusLost,
}

/// Logical actions a demo reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    TiltForward,
    TiltBack,
    RotateLeft,
    RotateRight,
    ScaleUp,
    ScaleDown,
    Reset,
}

impl Action {
    pub const ALL: [Action; 11] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::TiltForward,
        Action::TiltBack,
        Action::RotateLeft,
        Action::RotateRight,
        Action::ScaleUp,
        Action::ScaleDown,
        Action::Reset,
    ];
}

/// Actions held during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    actions: HashSet<Action>,
}

impl InputSnapshot {
    pub fn contains(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<Action> for InputSnapshot {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        Self { actions: iter.into_iter().collect() }
    }
}

/// Keys currently held down, fed from window events
#[derive(Debug, Default)]
pub struct InputState {
    pub pressed_keys: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.pressed_keys.insert(*key);
            }
            InputEvent::KeyUp(key) => {
                self.pressed_keys.remove(key);
            }
            // Releases that happen while unfocused never arrive
            InputEvent::FocusLost => {
                self.clear_keys();
            }
        }
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
    }
}

/// Key mapping configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_up: Vec<KeyCode>,
    pub move_down: Vec<KeyCode>,
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub tilt_forward: Vec<KeyCode>,
    pub tilt_back: Vec<KeyCode>,
    pub rotate_left: Vec<KeyCode>,
    pub rotate_right: Vec<KeyCode>,
    pub scale_up: Vec<KeyCode>,
    pub scale_down: Vec<KeyCode>,
    pub reset: Vec<KeyCode>,
    pub quit: KeyCode,
    pub toggle_overlay: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: vec![KeyCode::ArrowUp],
            move_down: vec![KeyCode::ArrowDown],
            move_left: vec![KeyCode::ArrowLeft],
            move_right: vec![KeyCode::ArrowRight],
            tilt_forward: vec![KeyCode::KeyW],
            tilt_back: vec![KeyCode::KeyS],
            rotate_left: vec![KeyCode::KeyA],
            rotate_right: vec![KeyCode::KeyD],
            scale_up: vec![KeyCode::Equal, KeyCode::NumpadAdd],
            scale_down: vec![KeyCode::Minus, KeyCode::NumpadSubtract],
            reset: vec![KeyCode::KeyR],
            quit: KeyCode::Escape,
            toggle_overlay: KeyCode::F3,
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::MoveUp => &self.move_up,
            Action::MoveDown => &self.move_down,
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::TiltForward => &self.tilt_forward,
            Action::TiltBack => &self.tilt_back,
            Action::RotateLeft => &self.rotate_left,
            Action::RotateRight => &self.rotate_right,
            Action::ScaleUp => &self.scale_up,
            Action::ScaleDown => &self.scale_down,
            Action::Reset => &self.reset,
        }
    }
}

/// High-level input processor
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    bindings: KeyBindings,
}

impl InputProcessor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn is_action_held(&self, input: &InputState, action: Action) -> bool {
        self.bindings
            .keys_for(action)
            .iter()
            .any(|key| input.is_key_pressed(*key))
    }

    /// Resolve held keys into this frame's set of actions
    pub fn snapshot(&self, input: &InputState) -> InputSnapshot {
        Action::ALL
            .into_iter()
            .filter(|action| self.is_action_held(input, *action))
            .collect()
    }

    pub fn is_quit(&self, key: KeyCode) -> bool {
        key == self.bindings.quit
    }

    pub fn wants_to_toggle_overlay(&self, key: KeyCode) -> bool {
        key == self.bindings.toggle_overlay
    }
}

pub mod native {
    use super::InputEvent;
    use winit::event::{ElementState, KeyEvent, WindowEvent};
    use winit::keyboard::PhysicalKey;

    /// Translate a winit window event into an input event, if it is one we track
    pub fn window_event_to_input(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent { state, physical_key: PhysicalKey::Code(code), .. },
                ..
            } => Some(match state {
                ElementState::Pressed => InputEvent::KeyDown(*code),
                ElementState::Released => InputEvent::KeyUp(*code),
            }),
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }
}

/// Key codes this game binds, as browser `keyCode` values. The queue itself
/// stays generic; these are the codes the session's mapping understands.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const ARROW_UP: u32 = 38;
    pub const ESCAPE: u32 = 27;
}

/// Input event types the simulation understands.
/// Generic — key codes and pointer positions carry no game semantics here;
/// the session maps them to jump/pause/menu actions.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at world coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A command from the host UI (start/restart buttons, resize, etc.).
    /// `kind` identifies the command; `a`, `b` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the runner reads and drains them
/// each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

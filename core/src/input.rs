//! Logical buttons, the host key table, and edge tracking.

use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Pressed logical buttons, as the console's controller sees them.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ButtonMask: u32 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const ENTER = 1 << 4;
        const RED = 1 << 5;
        const YELLOW = 1 << 6;
        const BLUE = 1 << 7;
        const GREEN = 1 << 8;
        const HELP = 1 << 9;
        const EXIT = 1 << 10;
        const ABC = 1 << 11;
    }
}

/// A logical controller button, independent of any host key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Red,
    Yellow,
    Blue,
    Green,
    Help,
    Exit,
    Abc,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Enter,
        Button::Red,
        Button::Yellow,
        Button::Blue,
        Button::Green,
        Button::Help,
        Button::Exit,
        Button::Abc,
    ];

    pub fn mask(self) -> ButtonMask {
        match self {
            Button::Up => ButtonMask::UP,
            Button::Down => ButtonMask::DOWN,
            Button::Left => ButtonMask::LEFT,
            Button::Right => ButtonMask::RIGHT,
            Button::Enter => ButtonMask::ENTER,
            Button::Red => ButtonMask::RED,
            Button::Yellow => ButtonMask::YELLOW,
            Button::Blue => ButtonMask::BLUE,
            Button::Green => ButtonMask::GREEN,
            Button::Help => ButtonMask::HELP,
            Button::Exit => ButtonMask::EXIT,
            Button::Abc => ButtonMask::ABC,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::Enter => "enter",
            Button::Red => "red",
            Button::Yellow => "yellow",
            Button::Blue => "blue",
            Button::Green => "green",
            Button::Help => "help",
            Button::Exit => "exit",
            Button::Abc => "abc",
        }
    }
}

/// Frontend action fired on key-down instead of a button edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hotkey {
    Fullscreen,
    /// Video layer 0, 1, or 2 (sprites).
    Layer(u8),
    Pause,
    Step,
    SpriteOutlines,
    FlipVisual,
    Oscilloscope,
    Reset,
    Leds,
    Vsync,
    Screenshot,
}

impl Hotkey {
    pub const ALL: [Hotkey; 13] = [
        Hotkey::Fullscreen,
        Hotkey::Layer(0),
        Hotkey::Layer(1),
        Hotkey::Layer(2),
        Hotkey::Pause,
        Hotkey::Step,
        Hotkey::SpriteOutlines,
        Hotkey::FlipVisual,
        Hotkey::Oscilloscope,
        Hotkey::Reset,
        Hotkey::Leds,
        Hotkey::Vsync,
        Hotkey::Screenshot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hotkey::Fullscreen => "fullscreen",
            Hotkey::Layer(0) => "layer0",
            Hotkey::Layer(1) => "layer1",
            Hotkey::Layer(_) => "layer2",
            Hotkey::Pause => "pause",
            Hotkey::Step => "step",
            Hotkey::SpriteOutlines => "sprite_outlines",
            Hotkey::FlipVisual => "flip_visual",
            Hotkey::Oscilloscope => "oscilloscope",
            Hotkey::Reset => "reset",
            Hotkey::Leds => "leds",
            Hotkey::Vsync => "vsync",
            Hotkey::Screenshot => "screenshot",
        }
    }
}

/// What a host key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    Button(Button),
    Hotkey(Hotkey),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown binding `{0}`")]
pub struct UnknownBinding(pub String);

impl FromStr for Binding {
    type Err = UnknownBinding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(button) = Button::ALL.iter().find(|b| b.name() == name) {
            return Ok(Binding::Button(*button));
        }
        if let Some(hotkey) = Hotkey::ALL.iter().find(|h| h.name() == name) {
            return Ok(Binding::Hotkey(*hotkey));
        }
        Err(UnknownBinding(s.to_string()))
    }
}

/// Host key to [`Binding`] table. `K` is the host's key type.
#[derive(Clone, Debug)]
pub struct KeyMap<K> {
    map: HashMap<K, Binding>,
}

impl<K: Eq + Hash> KeyMap<K> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a key, replacing whatever it was bound to.
    pub fn bind(&mut self, key: K, binding: Binding) {
        self.map.insert(key, binding);
    }

    /// Remove every key bound to `binding`.
    pub fn unbind(&mut self, binding: Binding) {
        self.map.retain(|_, b| *b != binding);
    }

    pub fn get(&self, key: &K) -> Option<Binding> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash> Default for KeyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Host event, already reduced to what the backend reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent<K> {
    Quit,
    KeyDown(K),
    KeyUp(K),
}

/// Previous and current button masks.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    previous: ButtonMask,
    current: ButtonMask,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.current.insert(button.mask());
    }

    pub fn release(&mut self, button: Button) {
        self.current.remove(button.mask());
    }

    pub fn button_states(&self) -> ButtonMask {
        self.current
    }

    /// Buttons that differ from the last latched state.
    pub fn changed_buttons(&self) -> ButtonMask {
        self.previous ^ self.current
    }

    /// End a poll: returns the current mask if anything changed, and makes
    /// it the baseline for the next poll.
    pub fn latch(&mut self) -> Option<ButtonMask> {
        let changed = self.changed_buttons();
        self.previous = self.current;
        (!changed.is_empty()).then_some(self.current)
    }
}

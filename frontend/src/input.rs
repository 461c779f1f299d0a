use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use vfrown_core::input::{Binding, Button, HostEvent, Hotkey, KeyMap};

/// Default keyboard layout.
const DEFAULT_BINDINGS: &[(Scancode, Binding)] = &[
    // Controller
    (Scancode::Up, Binding::Button(Button::Up)),
    (Scancode::Down, Binding::Button(Button::Down)),
    (Scancode::Left, Binding::Button(Button::Left)),
    (Scancode::Right, Binding::Button(Button::Right)),
    (Scancode::Space, Binding::Button(Button::Enter)),
    (Scancode::Z, Binding::Button(Button::Red)),
    (Scancode::X, Binding::Button(Button::Yellow)),
    (Scancode::V, Binding::Button(Button::Blue)),
    (Scancode::C, Binding::Button(Button::Green)),
    (Scancode::A, Binding::Button(Button::Help)),
    (Scancode::S, Binding::Button(Button::Exit)),
    (Scancode::D, Binding::Button(Button::Abc)),
    // Frontend and debug
    (Scancode::Grave, Binding::Hotkey(Hotkey::Fullscreen)),
    (Scancode::Num1, Binding::Hotkey(Hotkey::Layer(0))),
    (Scancode::Num2, Binding::Hotkey(Hotkey::Layer(1))),
    (Scancode::Num3, Binding::Hotkey(Hotkey::Layer(2))),
    (Scancode::Num4, Binding::Hotkey(Hotkey::Pause)),
    (Scancode::Num5, Binding::Hotkey(Hotkey::Step)),
    (Scancode::Num6, Binding::Hotkey(Hotkey::SpriteOutlines)),
    (Scancode::Num7, Binding::Hotkey(Hotkey::FlipVisual)),
    (Scancode::Num8, Binding::Hotkey(Hotkey::Oscilloscope)),
    (Scancode::Num0, Binding::Hotkey(Hotkey::Reset)),
    (Scancode::F1, Binding::Hotkey(Hotkey::Leds)),
    (Scancode::P, Binding::Hotkey(Hotkey::Vsync)),
    (Scancode::F12, Binding::Hotkey(Hotkey::Screenshot)),
];

pub fn default_key_map() -> KeyMap<Scancode> {
    let mut km = KeyMap::new();
    for &(scancode, binding) in DEFAULT_BINDINGS {
        km.bind(scancode, binding);
    }
    km
}

/// Reduce an SDL event to what the backend reacts to. Key repeats are dropped.
pub fn translate(event: Event) -> Option<HostEvent<Scancode>> {
    match event {
        Event::Quit { .. } => Some(HostEvent::Quit),
        Event::KeyDown {
            scancode: Some(sc),
            repeat: false,
            ..
        } => Some(HostEvent::KeyDown(sc)),
        Event::KeyUp {
            scancode: Some(sc), ..
        } => Some(HostEvent::KeyUp(sc)),
        _ => None,
    }
}

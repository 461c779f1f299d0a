mod common;

use common::{Call, RecordingConsole, RecordingDisplay};
use vfrown_core::audio::NullSink;
use vfrown_core::compositor::Compositor;
use vfrown_core::input::{Binding, Button, ButtonMask, HostEvent, Hotkey, InputTracker, KeyMap};
use vfrown_core::video::ViewMode;

use HostEvent::{KeyDown, KeyUp, Quit};

fn key_map() -> KeyMap<char> {
    let mut keys = KeyMap::new();
    keys.bind('^', Binding::Button(Button::Up));
    keys.bind('z', Binding::Button(Button::Red));
    keys.bind('x', Binding::Button(Button::Yellow));
    keys.bind(' ', Binding::Button(Button::Enter));
    keys.bind('1', Binding::Hotkey(Hotkey::Layer(0)));
    keys.bind('3', Binding::Hotkey(Hotkey::Layer(2)));
    keys.bind('4', Binding::Hotkey(Hotkey::Pause));
    keys.bind('5', Binding::Hotkey(Hotkey::Step));
    keys.bind('6', Binding::Hotkey(Hotkey::SpriteOutlines));
    keys.bind('7', Binding::Hotkey(Hotkey::FlipVisual));
    keys.bind('8', Binding::Hotkey(Hotkey::Oscilloscope));
    keys.bind('0', Binding::Hotkey(Hotkey::Reset));
    keys.bind('`', Binding::Hotkey(Hotkey::Fullscreen));
    keys.bind('L', Binding::Hotkey(Hotkey::Leds));
    keys.bind('p', Binding::Hotkey(Hotkey::Vsync));
    keys.bind('S', Binding::Hotkey(Hotkey::Screenshot));
    keys
}

struct Rig {
    compositor: Compositor,
    console: RecordingConsole,
    display: RecordingDisplay,
    keys: KeyMap<char>,
}

impl Rig {
    fn new() -> Self {
        Self {
            compositor: Compositor::new(Box::new(NullSink)),
            console: RecordingConsole::new(),
            display: RecordingDisplay::new(),
            keys: key_map(),
        }
    }

    fn poll(&mut self, events: &[HostEvent<char>]) -> bool {
        self.compositor
            .poll_events(
                events.iter().copied(),
                &self.keys,
                &mut self.console,
                &mut self.display,
            )
            .unwrap()
    }
}

#[test]
fn test_press_and_release_edit_current_mask() {
    let mut tracker = InputTracker::new();
    tracker.press(Button::Red);
    tracker.press(Button::Up);
    tracker.release(Button::Up);

    assert_eq!(tracker.button_states(), ButtonMask::RED);
    assert_eq!(tracker.changed_buttons(), ButtonMask::RED);
}

#[test]
fn test_double_press_is_idempotent() {
    let mut tracker = InputTracker::new();
    tracker.press(Button::Blue);
    tracker.press(Button::Blue);
    assert_eq!(tracker.button_states(), ButtonMask::BLUE);

    tracker.release(Button::Blue);
    assert!(tracker.button_states().is_empty());
}

#[test]
fn test_latch_reports_changes_once() {
    let mut tracker = InputTracker::new();
    tracker.press(Button::Green);

    assert_eq!(tracker.latch(), Some(ButtonMask::GREEN));
    assert_eq!(tracker.changed_buttons(), ButtonMask::empty());
    assert_eq!(tracker.latch(), None);

    tracker.release(Button::Green);
    assert_eq!(tracker.changed_buttons(), ButtonMask::GREEN);
    assert_eq!(tracker.latch(), Some(ButtonMask::empty()));
}

#[test]
fn test_one_update_per_poll() {
    let mut rig = Rig::new();
    assert!(rig.poll(&[KeyDown('z'), KeyDown('x'), KeyDown('^')]));

    assert_eq!(
        rig.console.updates,
        vec![(0, ButtonMask::RED | ButtonMask::YELLOW | ButtonMask::UP)]
    );
}

#[test]
fn test_no_update_without_change() {
    let mut rig = Rig::new();
    rig.poll(&[KeyDown('z')]);
    rig.poll(&[]);
    // Down then up within one poll nets out to no change
    rig.poll(&[KeyDown('x'), KeyUp('x')]);
    rig.poll(&[KeyDown('z')]);

    assert_eq!(rig.console.updates, vec![(0, ButtonMask::RED)]);
}

#[test]
fn test_changed_mask_is_previous_xor_current() {
    let mut rig = Rig::new();
    rig.poll(&[KeyDown('z'), KeyDown('^')]);
    rig.poll(&[KeyUp('z'), KeyDown(' ')]);

    let input = rig.compositor.input();
    assert_eq!(input.button_states(), ButtonMask::UP | ButtonMask::ENTER);
    assert_eq!(
        rig.console.updates.last(),
        Some(&(0, ButtonMask::UP | ButtonMask::ENTER))
    );
    assert_eq!(rig.console.updates.len(), 2);
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut rig = Rig::new();
    assert!(rig.poll(&[KeyDown('q'), KeyUp('q')]));
    assert!(rig.console.updates.is_empty());
    assert!(rig.console.actions.is_empty());
}

#[test]
fn test_quit_stops_after_draining() {
    let mut rig = Rig::new();
    assert!(!rig.poll(&[Quit, KeyDown('z')]));
    assert_eq!(rig.console.updates, vec![(0, ButtonMask::RED)]);
}

#[test]
fn test_console_hotkeys() {
    let mut rig = Rig::new();
    rig.poll(&[
        KeyDown('1'),
        KeyDown('3'),
        KeyDown('4'),
        KeyDown('5'),
        KeyDown('6'),
        KeyDown('7'),
        KeyDown('0'),
    ]);

    assert_eq!(
        rig.console.actions,
        vec!["layer0", "layer2", "pause", "step", "sprite_outlines", "flip_visual", "reset"]
    );
    assert!(rig.console.updates.is_empty());
}

#[test]
fn test_hotkeys_fire_on_key_down_only() {
    let mut rig = Rig::new();
    rig.poll(&[KeyDown('4'), KeyUp('4')]);
    assert_eq!(rig.console.actions, vec!["pause"]);
}

#[test]
fn test_frontend_hotkeys() {
    let mut rig = Rig::new();

    rig.poll(&[KeyDown('8')]);
    assert_eq!(rig.compositor.view(), ViewMode::Oscilloscope);
    rig.poll(&[KeyDown('8')]);
    assert_eq!(rig.compositor.view(), ViewMode::Normal);

    rig.poll(&[KeyDown('L')]);
    assert!(rig.compositor.show_leds());

    rig.poll(&[KeyDown('`'), KeyDown('`')]);
    assert!(!rig.compositor.is_fullscreen());

    rig.poll(&[KeyDown('p')]);
    assert!(rig.compositor.vsync_enabled());

    assert_eq!(
        rig.display.calls,
        vec![Call::Fullscreen(true), Call::Fullscreen(false), Call::Vsync(true)]
    );
}

#[test]
fn test_screenshot_request_is_taken_once() {
    let mut rig = Rig::new();
    assert!(!rig.compositor.take_screenshot_request());

    rig.poll(&[KeyDown('S')]);
    assert!(rig.compositor.take_screenshot_request());
    assert!(!rig.compositor.take_screenshot_request());
}

#[test]
fn test_key_map_is_swappable() {
    let mut rig = Rig::new();
    rig.keys.unbind(Binding::Button(Button::Red));
    rig.keys.bind('r', Binding::Button(Button::Red));

    rig.poll(&[KeyDown('z'), KeyDown('r')]);
    assert_eq!(rig.console.updates, vec![(0, ButtonMask::RED)]);
    assert_eq!(rig.keys.get(&'z'), None);
}

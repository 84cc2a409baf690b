//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Per-frame input snapshot.
//!
//! The context accumulates OS events into an [`Input`] between frames. Widgets
//! query it through predicates that honour the clip of the window asking.

use bitflags::*;

use crate::rect::{unify, Point, Rect};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Pointer buttons tracked by the snapshot.
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

impl MouseButton {
    /// The order in which click-driven focus changes inspect the buttons.
    pub const CLICK_ORDER: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
/// State of one pointer button.
pub struct ButtonState {
    /// Button is held.
    pub down: bool,
    /// The button changed state since the last frame.
    pub clicked: bool,
    /// Where the last press happened.
    pub clicked_pos: Point,
}

#[derive(Clone, Default, Debug)]
/// Pointer part of the snapshot.
pub struct MouseInput {
    pub(crate) valid: bool,
    pub(crate) clip: Rect,
    /// Left, middle and right button.
    pub buttons: [ButtonState; 3],
    /// Current pointer position.
    pub pos: Point,
    /// Position at the end of the previous frame.
    pub prev: Point,
    /// Movement since the previous frame.
    pub delta: Point,
    /// Wheel notches; positive values scroll up.
    pub scroll_delta: i32,
}

impl MouseInput {
    /// State of `button`.
    pub fn button(&self, button: MouseButton) -> &ButtonState { &self.buttons[button.index()] }

    pub(crate) fn button_mut(&mut self, button: MouseButton) -> &mut ButtonState { &mut self.buttons[button.index()] }

    /// The last press of `button` happened inside `r`.
    pub fn has_click_in_rect(&self, button: MouseButton, r: Rect) -> bool { unify(r, self.clip).contains(self.button(button).clicked_pos) }

    /// `button` was released this frame after a press inside `r`.
    pub fn is_click_in_rect(&self, button: MouseButton, r: Rect) -> bool { self.is_click_down_in_rect(button, r, false) }

    /// `button` changed state this frame, its press happened inside `r` and it is now `down`.
    pub fn is_click_down_in_rect(&self, button: MouseButton, r: Rect, down: bool) -> bool {
        let btn = self.button(button);
        self.has_click_in_rect(button, r) && btn.down == down && btn.clicked
    }

    /// Any button was released after a press inside `r`.
    pub fn any_click_in_rect(&self, r: Rect) -> bool {
        self.is_click_in_rect(MouseButton::Left, r) || self.is_click_in_rect(MouseButton::Middle, r) || self.is_click_in_rect(MouseButton::Right, r)
    }

    /// The pointer is inside `r` and the window clip.
    pub fn hovering_rect(&self, r: Rect) -> bool { self.valid && unify(r, self.clip).contains(self.pos) }

    /// The pointer was inside `r` at the end of the previous frame.
    pub fn prev_hovering_rect(&self, r: Rect) -> bool { self.valid && unify(r, self.clip).contains(self.prev) }

    /// `button` was clicked inside `r` and the pointer is still over it.
    pub fn clicked(&self, button: MouseButton, r: Rect) -> bool { self.hovering_rect(r) && self.is_click_in_rect(button, r) }

    /// `button` is held.
    pub fn down(&self, button: MouseButton) -> bool { self.button(button).down }

    /// `button` went down this frame.
    pub fn pressed(&self, button: MouseButton) -> bool { self.button(button).down && self.button(button).clicked }

    /// `button` went up this frame.
    pub fn released(&self, button: MouseButton) -> bool { !self.button(button).down && self.button(button).clicked }

    /// The wheel moved while the pointer was over `r`.
    pub fn scrollwheel_over(&self, r: Rect) -> bool { self.scroll_delta != 0 && self.hovering_rect(r) }

    /// Any button is held.
    pub fn any_down(&self) -> bool { self.buttons.iter().any(|b| b.down) }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    /// Modifier keys held during a key event.
    pub struct Modifiers : u32 {
        /// Either shift key.
        const SHIFT = 1;
        /// Either control key.
        const CONTROL = 2;
        /// Either alt key.
        const ALT = 4;
        /// Command / super key.
        const META = 8;
        /// No modifier.
        const NONE = 0;
    }
}

impl Modifiers {
    /// Returns `true` if shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CONTROL) }
    /// Returns `true` if alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if no modifier is held.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Physical key identity.
pub enum KeyCode {
    /// Key without a dedicated code; its rune may still produce text.
    Unknown,
    /// Printable key of the main block (letters, digits, punctuation, space), by its unshifted character.
    Character(char),
    /// Printable key of the numeric keypad, by its character.
    Keypad(char),
    /// Tab.
    Tab,
    /// Return / Enter.
    Enter,
    /// Keypad Enter.
    KeypadEnter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Insert.
    Insert,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Function key F1..F24.
    Function(u8),
    /// A modifier key on its own.
    Modifier,
}

impl KeyCode {
    fn produces_text(&self) -> bool { matches!(self, Self::Character(_) | Self::Keypad(_)) }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Press or release.
pub enum KeyDirection {
    /// Key went down (or repeated).
    Press,
    /// Key went up.
    Release,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// A keyboard event.
pub struct KeyEvent {
    /// Which key.
    pub code: KeyCode,
    /// Character the key produces with the current modifiers, if any.
    pub rune: Option<char>,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// Press or release.
    pub direction: KeyDirection,
}

impl KeyEvent {
    /// A key press.
    pub fn press(code: KeyCode, rune: Option<char>, modifiers: Modifiers) -> Self { Self { code, rune, modifiers, direction: KeyDirection::Press } }
}

#[derive(Clone, Default, Debug)]
/// Keyboard part of the snapshot.
pub struct KeyboardInput {
    /// Keys pressed this frame, one entry per key code.
    pub keys: Vec<KeyEvent>,
    /// Text typed this frame.
    pub text: String,
}

impl KeyboardInput {
    /// Returns `true` if `code` was pressed this frame.
    pub fn pressed(&self, code: KeyCode) -> bool { self.keys.iter().any(|k| k.code == code) }

    fn record(&mut self, e: KeyEvent) {
        match self.keys.iter_mut().find(|k| k.code == e.code) {
            Some(k) => k.modifiers |= e.modifiers,
            None => self.keys.push(e),
        }
    }

    /// Folds a key event into the key list; text-producing keys also append to `text`.
    pub fn process_key_event(&mut self, e: KeyEvent, text: &mut String) {
        if e.direction == KeyDirection::Release {
            return;
        }
        let rune = match e.code {
            KeyCode::Tab => Some('\t'),
            KeyCode::Enter | KeyCode::KeypadEnter => Some('\n'),
            KeyCode::Unknown => match e.rune {
                Some(r) if r != '\0' => Some(r),
                _ => {
                    return;
                }
            },
            code if code.produces_text() => e.rune,
            _ => {
                self.record(e);
                return;
            }
        };
        if e.modifiers.is_none() || e.modifiers == Modifiers::SHIFT {
            if let Some(r) = rune {
                text.push(r);
            }
        }
        self.record(KeyEvent { rune, ..e });
    }
}

#[derive(Clone, Default, Debug)]
/// Everything a widget may look at.
pub struct Input {
    /// Pointer state.
    pub mouse: MouseInput,
    /// Keyboard state.
    pub keyboard: KeyboardInput,
}

impl Input {
    /// Snapshot that never reports hover, clicks or keys.
    pub fn blank() -> Self { Self::default() }

    /// Returns `true` if the pointer is known (inside the surface).
    pub fn is_valid(&self) -> bool { self.mouse.valid }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer_at(x: i32, y: i32) -> MouseInput {
        let mut m = MouseInput { valid: true, clip: crate::rect::NULL_RECT, pos: Point::new(x, y), ..MouseInput::default() };
        m.prev = m.pos;
        m
    }

    #[test]
    fn hover_respects_clip() {
        let mut m = pointer_at(15, 15);
        let r = Rect::new(10, 10, 10, 10);
        assert!(m.hovering_rect(r));
        m.clip = Rect::new(0, 0, 12, 12);
        assert!(!m.hovering_rect(r));
        assert!(!MouseInput::default().hovering_rect(r));
    }

    #[test]
    fn click_predicates() {
        let mut m = pointer_at(15, 15);
        let r = Rect::new(10, 10, 10, 10);
        *m.button_mut(MouseButton::Left) = ButtonState { down: true, clicked: true, clicked_pos: Point::new(12, 12) };
        assert!(m.pressed(MouseButton::Left));
        assert!(m.is_click_down_in_rect(MouseButton::Left, r, true));
        assert!(!m.is_click_in_rect(MouseButton::Left, r));
        m.button_mut(MouseButton::Left).down = false;
        assert!(m.released(MouseButton::Left));
        assert!(m.clicked(MouseButton::Left, r));
        assert!(m.any_click_in_rect(r));
        assert!(!m.clicked(MouseButton::Right, r));
    }

    #[test]
    fn key_events_dedupe_and_produce_text() {
        let mut kb = KeyboardInput::default();
        let mut text = String::new();
        kb.process_key_event(KeyEvent::press(KeyCode::Character('a'), Some('A'), Modifiers::SHIFT), &mut text);
        kb.process_key_event(KeyEvent::press(KeyCode::Character('a'), Some('a'), Modifiers::CONTROL), &mut text);
        kb.process_key_event(KeyEvent::press(KeyCode::Tab, None, Modifiers::NONE), &mut text);
        kb.process_key_event(KeyEvent::press(KeyCode::Left, None, Modifiers::NONE), &mut text);
        kb.process_key_event(KeyEvent { direction: KeyDirection::Release, ..KeyEvent::press(KeyCode::Up, None, Modifiers::NONE) }, &mut text);
        kb.process_key_event(KeyEvent::press(KeyCode::Unknown, Some('é'), Modifiers::NONE), &mut text);
        kb.process_key_event(KeyEvent::press(KeyCode::Unknown, None, Modifiers::NONE), &mut text);
        assert_eq!(text, "A\té");
        assert_eq!(kb.keys.len(), 4);
        assert_eq!(kb.keys[0].modifiers, Modifiers::SHIFT | Modifiers::CONTROL);
        assert!(kb.pressed(KeyCode::Left));
        assert!(!kb.pressed(KeyCode::Up));
    }
}

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
//! Widgets and the state machine they share.
//!
//! Widgets do not own any retained state: the interaction state of a widget is looked
//! up from the previous frame by its rectangle in a [`WidgetBuffer`], updated against
//! the input snapshot, stored back and finally used to pick the colors it is drawn
//! with. Every widget is a method on [`crate::Window`].

mod button;
pub mod draw;
mod label;
mod property;
mod scrollbar;
mod selectable;
mod slider;
mod toggle;
mod tree;

pub(crate) use button::{button_width, do_button};
pub use property::*;
pub(crate) use scrollbar::{do_scrollbarh, do_scrollbarv, Wheel};
pub use tree::*;

use std::collections::HashMap;

use crate::command::{CommandBuffer, Image};
use crate::font::Face;
use crate::input::{Input, MouseButton};
use crate::rect::Rect;
use crate::style::WidgetStates;
use crate::text::{font_height, Align, TextCache};
use crate::Color;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Built-in symbols drawn inside buttons, combo boxes and tree headers.
pub enum Symbol {
    /// Nothing.
    #[default]
    None,
    /// The letter `x`.
    X,
    /// An underscore.
    Underscore,
    /// Filled circle.
    CircleSolid,
    /// Circle outline.
    CircleOutline,
    /// Filled rectangle.
    RectSolid,
    /// Rectangle outline.
    RectOutline,
    /// Triangle pointing up.
    TriangleUp,
    /// Triangle pointing down.
    TriangleDown,
    /// Triangle pointing left.
    TriangleLeft,
    /// Triangle pointing right.
    TriangleRight,
    /// A plus sign.
    Plus,
    /// A minus sign.
    Minus,
}

#[derive(Clone, Debug, PartialEq)]
/// Content of a button, combo box header or menu entry.
pub enum Label<'a> {
    /// A flat colored swatch.
    Color(Color),
    /// An image stretched to the content area.
    Image(Image),
    /// An image followed by text.
    ImageText(Image, &'a str, Align),
    /// A symbol.
    Symbol(Symbol),
    /// A symbol followed by text.
    SymbolText(Symbol, &'a str, Align),
    /// Text.
    Text(&'a str, Align),
}

impl<'a> Label<'a> {
    /// Centered text.
    pub fn text(s: &'a str) -> Self { Label::Text(s, Align::CC) }

    /// Text with an explicit alignment.
    pub fn text_aligned(s: &'a str, align: Align) -> Self { Label::Text(s, align) }

    /// A symbol followed by centered text.
    pub fn symbol_text(sym: Symbol, s: &'a str) -> Self { Label::SymbolText(sym, s, Align::CC) }

    /// The text part of the label, empty when there is none.
    pub fn as_str(&self) -> &'a str {
        match self {
            Label::ImageText(_, s, _) | Label::SymbolText(_, s, _) | Label::Text(s, _) => s,
            _ => "",
        }
    }
}

/// Widget states of the previous frame, keyed by widget rectangle.
#[derive(Default, Debug)]
pub(crate) struct WidgetBuffer {
    cur: HashMap<Rect, (WidgetStates, u64)>,
    frame: u64,
}

impl WidgetBuffer {
    pub(crate) fn prev_state(&self, bounds: Rect) -> WidgetStates { self.cur.get(&bounds).map(|e| e.0).unwrap_or_default() }

    pub(crate) fn add(&mut self, ws: WidgetStates, bounds: Rect) { self.cur.insert(bounds, (ws, self.frame)); }

    /// Drops every entry that was not refreshed during the frame that just ended.
    pub(crate) fn reset(&mut self) {
        let frame = self.frame;
        self.cur.retain(|_, e| e.1 == frame);
        self.frame += 1;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize { self.cur.len() }
}

/// Everything a widget needs to draw itself: the target buffer, the width cache, the
/// active face and the widget-state record of its window.
pub struct WidgetCtx<'a> {
    /// Command buffer of the window being populated.
    pub out: &'a mut CommandBuffer,
    /// Text width cache.
    pub text: &'a mut TextCache,
    /// Active font face.
    pub face: &'a Face,
    pub(crate) widgets: &'a mut WidgetBuffer,
}

impl<'a> WidgetCtx<'a> {
    pub(crate) fn new(out: &'a mut CommandBuffer, text: &'a mut TextCache, face: &'a Face, widgets: &'a mut WidgetBuffer) -> Self { Self { out, text, face, widgets } }

    /// Width of `s` in the active face.
    pub fn font_width(&mut self, s: &str) -> i32 { self.text.font_width(self.face, s) }

    /// Line height of the active face.
    pub fn font_height(&self) -> i32 { font_height(self.face) }

    pub(crate) fn prev_state(&self, bounds: Rect) -> WidgetStates { self.widgets.prev_state(bounds) }

    pub(crate) fn add(&mut self, ws: WidgetStates, bounds: Rect) { self.widgets.add(ws, bounds) }
}

/// Hover transitions shared by every widget; returns the state the widget leaves in.
pub(crate) fn basic_state_control(state: &mut WidgetStates, input: &Input, r: Rect) -> WidgetStates {
    let hovering = input.mouse.hovering_rect(r);
    if *state == WidgetStates::Inactive && hovering {
        *state = WidgetStates::Hovered;
    }
    if *state == WidgetStates::Hovered && !hovering {
        *state = WidgetStates::Inactive;
    }
    if *state == WidgetStates::Hovered && input.mouse.has_click_in_rect(MouseButton::Left, r) {
        *state = WidgetStates::Active;
    }
    if hovering { WidgetStates::Hovered } else { WidgetStates::Inactive }
}

/// Press/release logic of buttons. Returns `true` on release over the widget, or on
/// every frame the button is held when `repeat` is set.
pub(crate) fn button_behavior(state: &mut WidgetStates, r: Rect, input: &Input, repeat: bool) -> bool {
    let exit = basic_state_control(state, input, r);
    let mut ret = false;
    if *state == WidgetStates::Active {
        if exit == WidgetStates::Hovered {
            ret = if repeat { input.mouse.down(MouseButton::Left) } else { input.mouse.released(MouseButton::Left) };
        }
        if !input.mouse.down(MouseButton::Left) {
            *state = exit;
        }
    }
    ret
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::input::ButtonState;
    use crate::rect::{Point, NULL_RECT};

    pub(crate) fn pointer(x: i32, y: i32) -> Input {
        let mut input = Input::default();
        input.mouse.valid = true;
        input.mouse.clip = NULL_RECT;
        input.mouse.pos = Point::new(x, y);
        input.mouse.prev = input.mouse.pos;
        input
    }

    pub(crate) fn with_left(mut input: Input, down: bool, clicked: bool, at: Point) -> Input {
        input.mouse.buttons[0] = ButtonState { down, clicked, clicked_pos: at };
        input
    }

    #[test]
    fn hover_and_leave() {
        let r = Rect::new(0, 0, 10, 10);
        let mut ws = WidgetStates::Inactive;
        assert_eq!(basic_state_control(&mut ws, &pointer(5, 5), r), WidgetStates::Hovered);
        assert_eq!(ws, WidgetStates::Hovered);
        assert_eq!(basic_state_control(&mut ws, &pointer(50, 5), r), WidgetStates::Inactive);
        assert_eq!(ws, WidgetStates::Inactive);
    }

    #[test]
    fn click_fires_on_release() {
        let r = Rect::new(0, 0, 10, 10);
        let at = Point::new(5, 5);
        let mut ws = WidgetStates::Hovered;
        assert!(!button_behavior(&mut ws, r, &with_left(pointer(5, 5), true, true, at), false));
        assert_eq!(ws, WidgetStates::Active);
        assert!(!button_behavior(&mut ws, r, &with_left(pointer(5, 5), true, false, at), false));
        assert_eq!(ws, WidgetStates::Active);
        assert!(button_behavior(&mut ws, r, &with_left(pointer(5, 5), false, true, at), false));
        assert_eq!(ws, WidgetStates::Hovered);
    }

    #[test]
    fn repeat_fires_while_held() {
        let r = Rect::new(0, 0, 10, 10);
        let at = Point::new(5, 5);
        let mut ws = WidgetStates::Hovered;
        assert!(button_behavior(&mut ws, r, &with_left(pointer(5, 5), true, true, at), true));
        assert!(button_behavior(&mut ws, r, &with_left(pointer(5, 5), true, false, at), true));
    }

    #[test]
    fn release_outside_does_not_click() {
        let r = Rect::new(0, 0, 10, 10);
        let mut ws = WidgetStates::Active;
        assert!(!button_behavior(&mut ws, r, &with_left(pointer(40, 40), false, true, Point::new(5, 5)), false));
        assert_eq!(ws, WidgetStates::Inactive);
    }

    #[test]
    fn stale_entries_are_evicted() {
        let mut buf = WidgetBuffer::default();
        buf.add(WidgetStates::Hovered, Rect::new(0, 0, 1, 1));
        buf.reset();
        assert_eq!(buf.prev_state(Rect::new(0, 0, 1, 1)), WidgetStates::Hovered);
        buf.add(WidgetStates::Active, Rect::new(5, 5, 1, 1));
        buf.reset();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.prev_state(Rect::new(0, 0, 1, 1)), WidgetStates::Inactive);
    }
}

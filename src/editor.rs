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
//! Single-line editor embedded in property widgets.
//!
//! Cursor and selection are byte offsets into [`PropertyEditor::buffer`] and always
//! sit on character boundaries.

use crate::clipboard::Clipboard;
use crate::input::{Input, KeyCode, KeyEvent, Modifiers, MouseButton};
use crate::rect::{shrink_rect, Point, Rect};
use crate::style::{EditStyle, Item, WidgetStates};
use crate::text::{glyph_advance, widget_text, Align, TextWidget};
use crate::widgets::WidgetCtx;

/// Accepts the characters of an integer.
pub fn filter_decimal(c: char) -> bool { c.is_ascii_digit() || c == '-' }

/// Accepts the characters of a decimal number.
pub fn filter_float(c: char) -> bool { c.is_ascii_digit() || c == '.' || c == '-' }

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum PropertyStatus {
    #[default]
    Default,
    Edit,
    Drag,
}

/// Text state of a property while it is being edited or dragged.
#[derive(Clone, Debug, Default)]
pub struct PropertyEditor {
    /// Text being edited.
    pub buffer: String,
    /// Cursor position.
    pub cursor: usize,
    /// Selection anchor.
    pub select_start: usize,
    /// Selection end; equal to `select_start` when nothing is selected.
    pub select_end: usize,
    /// Whether the editor has keyboard focus.
    pub active: bool,
    pub(crate) status: PropertyStatus,
}

fn insert_text(buf: &mut String, cursor: &mut usize, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let at = (*cursor).min(buf.len());
    buf.insert_str(at, text);
    *cursor = at + text.len();
    true
}

fn delete_prev(buf: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 || buf.is_empty() {
        return false;
    }
    let start = move_left(buf, *cursor);
    buf.replace_range(start..*cursor, "");
    *cursor = start;
    true
}

fn delete_next(buf: &mut String, cursor: usize) -> bool {
    if cursor >= buf.len() {
        return false;
    }
    let end = move_right(buf, cursor);
    buf.replace_range(cursor..end, "");
    true
}

fn move_left(buf: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut c = cursor - 1;
    while c > 0 && !buf.is_char_boundary(c) {
        c -= 1;
    }
    c
}

fn move_right(buf: &str, cursor: usize) -> usize {
    if cursor >= buf.len() {
        return buf.len();
    }
    let mut c = cursor + 1;
    while c < buf.len() && !buf.is_char_boundary(c) {
        c += 1;
    }
    c
}

impl PropertyEditor {
    /// Editor holding `text`, inactive.
    pub fn new(text: &str) -> Self { Self { buffer: text.to_string(), ..Self::default() } }

    /// Returns `true` if some text is selected.
    pub fn has_selection(&self) -> bool { self.select_start != self.select_end }

    /// Selected byte range, ordered.
    pub fn selection(&self) -> (usize, usize) { (self.select_start.min(self.select_end), self.select_start.max(self.select_end)) }

    /// Selects the whole buffer.
    pub fn select_all(&mut self) {
        self.select_start = 0;
        self.select_end = self.buffer.len();
        self.cursor = self.buffer.len();
    }

    fn clamp(&mut self) {
        let len = self.buffer.len();
        self.cursor = self.cursor.min(len);
        self.select_start = self.select_start.min(len);
        self.select_end = self.select_end.min(len);
    }

    fn clear_selection(&mut self) {
        self.select_start = self.cursor;
        self.select_end = self.cursor;
    }

    fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (begin, end) = self.selection();
        self.buffer.replace_range(begin..end, "");
        self.cursor = begin;
        self.clear_selection();
        true
    }

    /// Replaces the selection with the characters of `text` accepted by `filter`.
    pub fn insert(&mut self, text: &str, filter: fn(char) -> bool) {
        let accepted: String = text.chars().filter(|c| filter(*c)).collect();
        if accepted.is_empty() {
            return;
        }
        self.delete_selection();
        insert_text(&mut self.buffer, &mut self.cursor, &accepted);
        self.clear_selection();
    }

    fn extend_selection(&mut self, to: usize) {
        if !self.has_selection() {
            self.select_start = self.cursor;
        }
        self.cursor = to;
        self.select_end = to;
    }

    /// Applies a navigation or deletion key.
    pub fn key(&mut self, e: &KeyEvent) {
        let shift = e.modifiers.is_shift();
        match e.code {
            KeyCode::Backspace => {
                if !self.delete_selection() {
                    delete_prev(&mut self.buffer, &mut self.cursor);
                    self.clear_selection();
                }
            }
            KeyCode::Delete => {
                if !self.delete_selection() {
                    delete_next(&mut self.buffer, self.cursor);
                    self.clear_selection();
                }
            }
            KeyCode::Left if shift => self.extend_selection(move_left(&self.buffer, self.cursor)),
            KeyCode::Right if shift => self.extend_selection(move_right(&self.buffer, self.cursor)),
            KeyCode::Home if shift => self.extend_selection(0),
            KeyCode::End if shift => self.extend_selection(self.buffer.len()),
            KeyCode::Left => {
                self.cursor = if self.has_selection() { self.selection().0 } else { move_left(&self.buffer, self.cursor) };
                self.clear_selection();
            }
            KeyCode::Right => {
                self.cursor = if self.has_selection() { self.selection().1 } else { move_right(&self.buffer, self.cursor) };
                self.clear_selection();
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.clear_selection();
            }
            KeyCode::End => {
                self.cursor = self.buffer.len();
                self.clear_selection();
            }
            _ => {}
        }
    }

    /// Byte offset of the character boundary closest to `x` pixels into the text.
    fn locate(&self, ctx: &WidgetCtx<'_>, x: i32) -> usize {
        let mut at = 0;
        for (i, ch) in self.buffer.char_indices() {
            let w = glyph_advance(ctx.face, ch);
            if x < at + w / 2 {
                return i;
            }
            at += w;
        }
        self.buffer.len()
    }

    fn width_to(&self, ctx: &mut WidgetCtx<'_>, end: usize) -> i32 { ctx.font_width(&self.buffer[..end]) }

    /// Runs the editor over `bounds` for one frame.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn edit(&mut self, ctx: &mut WidgetCtx<'_>, bounds: Rect, style: &EditStyle, input: &Input, filter: fn(char) -> bool, clipboard: &mut dyn Clipboard) {
        self.clamp();
        let area = Rect::new(
            bounds.x + style.padding.x + style.border,
            bounds.y + style.padding.y + style.border,
            bounds.w - (2 * style.padding.x + 2 * style.border),
            bounds.h - (2 * style.padding.y + 2 * style.border),
        );

        let left = input.mouse.button(MouseButton::Left);
        if left.clicked && left.down {
            self.active = input.mouse.hovering_rect(bounds);
        }
        let hovered = input.mouse.hovering_rect(bounds);

        if self.active {
            let coord_x = input.mouse.pos.x - area.x;
            let over_area = input.mouse.hovering_rect(area);
            if over_area && left.down && left.clicked {
                self.cursor = self.locate(ctx, coord_x);
                self.clear_selection();
            } else if over_area && left.down && input.mouse.delta != Point::new(0, 0) {
                let to = self.locate(ctx, coord_x);
                self.extend_selection(to);
            }

            if !input.keyboard.text.is_empty() {
                self.insert(&input.keyboard.text, filter);
            }

            let (mut copy, mut cut, mut paste) = (false, false, false);
            for e in input.keyboard.keys.iter() {
                let shortcut = e.modifiers.intersects(Modifiers::CONTROL | Modifiers::META);
                match e.code {
                    KeyCode::Character('x') if shortcut => cut = true,
                    KeyCode::Character('c') if shortcut => copy = true,
                    KeyCode::Character('v') if shortcut => paste = true,
                    KeyCode::Character('a') if shortcut => self.select_all(),
                    _ => self.key(e),
                }
            }
            if (copy || cut) && self.has_selection() {
                let (begin, end) = self.selection();
                clipboard.set(&self.buffer[begin..end]);
                if cut {
                    self.delete_selection();
                }
            }
            if paste {
                if let Some(text) = clipboard.get() {
                    self.insert(&text, filter);
                }
            }
        }

        let state = if self.active {
            WidgetStates::Active
        } else if hovered {
            WidgetStates::Hovered
        } else {
            WidgetStates::Inactive
        };
        ctx.add(state, bounds);
        self.draw(ctx, state, style, bounds, area);
    }

    fn draw(&self, ctx: &mut WidgetCtx<'_>, state: WidgetStates, style: &EditStyle, bounds: Rect, area: Rect) {
        let (background, fg) = match state {
            WidgetStates::Active => (&style.active, style.text_active),
            WidgetStates::Hovered => (&style.hover, style.text_hover),
            WidgetStates::Inactive => (&style.normal, style.text_normal),
        };
        let bg = match background {
            Item::Image(img) => {
                ctx.out.draw_image(bounds, img);
                style.cursor_text_normal
            }
            Item::Color(c) => {
                ctx.out.fill_rect(bounds, style.rounding, style.border_color);
                ctx.out.fill_rect(shrink_rect(bounds, style.border), style.rounding, *c);
                *c
            }
        };

        let hovered = state == WidgetStates::Hovered;
        let (sel_bg, sel_fg) = if hovered { (style.selected_hover, style.selected_text_hover) } else { (style.selected_normal, style.selected_text_normal) };
        let plain = TextWidget { padding: Point::new(0, 0), background: bg, text: fg };
        let selected = TextWidget { padding: Point::new(0, 0), background: sel_bg, text: sel_fg };

        let (begin, end) = if self.active { self.selection() } else { (0, 0) };
        let x_begin = self.width_to(ctx, begin);
        let x_end = self.width_to(ctx, end);
        let full = ctx.font_width(&self.buffer);
        let runs = [(0, begin, 0, x_begin, false), (begin, end, x_begin, x_end, true), (end, self.buffer.len(), x_end, full, false)];
        for (from, to, x0, x1, is_selected) in runs {
            if from >= to {
                continue;
            }
            let r = Rect::new(area.x + x0, area.y, x1 - x0, area.h);
            if is_selected {
                ctx.out.fill_rect(r, 0, sel_bg);
            }
            let text = if is_selected { &selected } else { &plain };
            widget_text(ctx.out, ctx.text, r, &self.buffer[from..to], text, Align::LC, ctx.face);
        }

        if self.active && !self.has_selection() {
            let x = area.x + self.width_to(ctx, self.cursor);
            let fh = ctx.font_height();
            let color = if hovered { style.cursor_hover } else { style.cursor_normal };
            ctx.out.fill_rect(Rect::new(x, area.y + area.h / 2 - fh / 2, 1, fh), 0, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: Modifiers) -> KeyEvent { KeyEvent::press(code, None, modifiers) }

    #[test]
    fn filters() {
        assert!(filter_decimal('7') && filter_decimal('-') && !filter_decimal('.'));
        assert!(filter_float('.') && !filter_float('e') && !filter_float('\n'));
    }

    #[test]
    fn insert_replaces_selection_and_filters() {
        let mut ed = PropertyEditor::new("12345");
        ed.cursor = 1;
        ed.select_start = 1;
        ed.select_end = 3;
        ed.insert("9a.\n", filter_float);
        assert_eq!(ed.buffer, "19.45");
        assert_eq!(ed.cursor, 3);
        assert!(!ed.has_selection());
    }

    #[test]
    fn navigation_and_deletion() {
        let mut ed = PropertyEditor::new("héllo");
        ed.cursor = ed.buffer.len();
        ed.key(&key(KeyCode::Backspace, Modifiers::NONE));
        assert_eq!(ed.buffer, "héll");
        ed.key(&key(KeyCode::Home, Modifiers::NONE));
        ed.key(&key(KeyCode::Right, Modifiers::NONE));
        ed.key(&key(KeyCode::Delete, Modifiers::NONE));
        assert_eq!(ed.buffer, "hll");
        ed.key(&key(KeyCode::End, Modifiers::SHIFT));
        assert_eq!(ed.selection(), (1, 3));
        ed.key(&key(KeyCode::Backspace, Modifiers::NONE));
        assert_eq!(ed.buffer, "h");
    }

    #[test]
    fn select_all_covers_buffer() {
        let mut ed = PropertyEditor::new("42");
        ed.select_all();
        assert_eq!(ed.selection(), (0, 2));
        ed.insert("7", filter_decimal);
        assert_eq!(ed.buffer, "7");
    }
}

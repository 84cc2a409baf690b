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
//! Check boxes and radio buttons.

use crate::font::Face;
use crate::input::{Input, MouseButton};
use crate::rect::Rect;
use crate::style::{TogglePainter, ToggleStyle, WidgetStates};
use crate::text::{font_height, TextCache};
use crate::widgets::WidgetCtx;
use crate::window::Window;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ToggleKind {
    Check,
    Option,
}

fn toggle_behavior(input: &Input, b: Rect, state: &mut WidgetStates, active: bool) -> bool {
    *state = if input.mouse.hovering_rect(b) { WidgetStates::Hovered } else { WidgetStates::Inactive };
    if *state == WidgetStates::Hovered && input.mouse.clicked(MouseButton::Left, b) {
        *state = WidgetStates::Active;
        return !active;
    }
    active
}

fn toggle_width(s: &str, kind: ToggleKind, style: &ToggleStyle, cache: &mut TextCache, face: &Face) -> i32 {
    let sw = font_height(face) + style.padding.x;
    let w = 2 * style.padding.x + 2 * style.touch_padding.x + cache.font_width(face, s) + sw;
    match kind {
        ToggleKind::Option => w + sw / 4,
        ToggleKind::Check => w + sw / 6,
    }
}

struct DefaultToggle;

impl TogglePainter for DefaultToggle {}

fn do_toggle(ctx: &mut WidgetCtx<'_>, r: Rect, active: bool, s: &str, kind: ToggleKind, style: &ToggleStyle, input: &Input) -> bool {
    let fh = ctx.font_height();
    let mut r = r;
    r.w = r.w.max(fh + 2 * style.padding.x);
    r.h = r.h.max(fh + 2 * style.padding.y);

    let tp = style.touch_padding;
    let bounds = Rect::new(r.x - tp.x, r.y - tp.y, r.w + 2 * tp.x, r.h + 2 * tp.y);

    let mut select = Rect::new(r.x + style.padding.x, 0, r.h.min(fh + style.padding.y), 0);
    select.h = select.w;
    select.y = r.y + (r.h / 2 - select.h / 2);
    let cursor_pad = match kind {
        ToggleKind::Option => select.w / 4,
        ToggleKind::Check => select.h / 6,
    };
    select.h = select.w.max(cursor_pad * 2);

    let side = select.h - cursor_pad * 2;
    let cursor = Rect::new(select.x + cursor_pad, select.y + cursor_pad, side, side);

    let mut label = Rect::new(r.x + select.w + style.padding.x * 2, select.y, 0, select.w);
    label.w = (r.x + r.w).max(label.x + style.padding.x) - (label.x + style.padding.x);

    let mut state = ctx.prev_state(bounds);
    let active = toggle_behavior(input, bounds, &mut state, active);
    ctx.add(state, r);

    let default_painter = DefaultToggle;
    let painter: &dyn TogglePainter = match &style.painter {
        Some(p) => p.as_ref(),
        None => &default_painter,
    };
    crate::widgets::draw::run_hook(&style.draw_begin, ctx.out);
    match kind {
        ToggleKind::Check => painter.checkbox(ctx, state, style, active, label, select, cursor, s),
        ToggleKind::Option => painter.radio(ctx, state, style, active, label, select, cursor, s),
    }
    crate::widgets::draw::run_hook(&style.draw_end, ctx.out);
    active
}

impl<'a> Window<'a> {
    fn toggle(&mut self, s: &str, active: bool, kind: ToggleKind) -> Option<bool> {
        let (valid, bounds, fit) = self.widget();
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let style = match kind {
                ToggleKind::Check => &ctx.style.checkbox,
                ToggleKind::Option => &ctx.style.option,
            };
            let w = toggle_width(s, kind, style, &mut ctx.text, &ctx.style.font);
            self.fit(fit, w);
        }
        if !valid {
            return None;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let style = match kind {
            ToggleKind::Check => &p.style.checkbox,
            ToggleKind::Option => &p.style.option,
        };
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        Some(do_toggle(&mut wc, bounds, active, s, kind, style, p.input))
    }

    /// Radio button drawn selected when `is_active`. Returns the new selection, `true`
    /// once it is clicked. Keeping a single option selected is up to the caller.
    pub fn option_text(&mut self, s: &str, is_active: bool) -> bool { self.toggle(s, is_active, ToggleKind::Option).unwrap_or(false) }

    /// Check box bound to `active`. Returns `true` when the value changed.
    pub fn checkbox_text(&mut self, s: &str, active: &mut bool) -> bool {
        match self.toggle(s, *active, ToggleKind::Check) {
            Some(v) => {
                let changed = v != *active;
                *active = v;
                changed
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandBuffer;
    use crate::rect::Point;
    use crate::style::Style;
    use crate::widgets::tests::{pointer, with_left};
    use crate::widgets::WidgetBuffer;

    fn toggle_at(input: &Input, active: bool) -> (bool, WidgetStates) {
        let style = Style::default();
        let mut out = CommandBuffer::default();
        let mut cache = TextCache::default();
        let mut widgets = WidgetBuffer::default();
        let r = Rect::new(0, 0, 100, 20);
        let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
        let v = do_toggle(&mut wc, r, active, "x", ToggleKind::Check, &style.checkbox, input);
        (v, widgets.prev_state(r))
    }

    #[test]
    fn release_flips_the_value() {
        let at = Point::new(10, 10);
        assert_eq!(toggle_at(&with_left(pointer(10, 10), true, true, at), false), (false, WidgetStates::Hovered));
        assert_eq!(toggle_at(&with_left(pointer(10, 10), false, true, at), false), (true, WidgetStates::Active));
        assert_eq!(toggle_at(&pointer(10, 10), true), (true, WidgetStates::Hovered));
    }

    #[test]
    fn option_is_wider_than_checkbox_selector() {
        let style = Style::default();
        let mut cache = TextCache::default();
        let sw = font_height(&style.font) + style.option.padding.x;
        let option = toggle_width("abc", ToggleKind::Option, &style.option, &mut cache, &style.font);
        let check = toggle_width("abc", ToggleKind::Check, &style.option, &mut cache, &style.font);
        assert_eq!(option - check, sw / 4 - sw / 6);
    }
}

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
//! Non-interactive widgets: labels, images, spacing and custom widgets.

use crate::command::{CommandBuffer, Image};
use crate::style::WidgetStates;
use crate::text::{widget_text, widget_text_wrap, Align, TextWidget};
use crate::widgets::basic_state_control;
use crate::window::{window_style, Window};
use crate::Color;
use crate::rect::Rect;

impl<'a> Window<'a> {
    /// Text label drawn with `color`.
    pub fn label_colored(&mut self, s: &str, align: Align, color: Color) {
        let (_, bounds, fit) = self.widget();
        let padding = self.ctx.style.text.padding;
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let w = 2 * padding.x + ctx.text.font_width(&ctx.style.font, s);
            self.fit(fit, w);
        }
        let p = self.ctx.parts(self.id, false);
        let text = TextWidget { padding, background: window_style(p.style, p.win.flags).background, text: color };
        p.win.widgets.add(WidgetStates::Inactive, bounds);
        widget_text(&mut p.win.cmds, p.text, bounds, s, &text, align, &p.style.font);
    }

    /// Text label wrapped at word boundaries, drawn with `color`.
    pub fn label_wrap_colored(&mut self, s: &str, color: Color) {
        let (_, bounds, _) = self.widget();
        let p = self.ctx.parts(self.id, false);
        let text = TextWidget { padding: p.style.text.padding, background: window_style(p.style, p.win.flags).background, text: color };
        p.win.widgets.add(WidgetStates::Inactive, bounds);
        let runes: Vec<char> = s.chars().collect();
        widget_text_wrap(&mut p.win.cmds, p.text, bounds, &runes, &text, &p.style.font);
    }

    /// Text label in the default text color.
    pub fn label(&mut self, s: &str, align: Align) {
        let color = self.ctx.style.text.color;
        self.label_colored(s, align, color)
    }

    /// Wrapped text label in the default text color.
    pub fn label_wrap(&mut self, s: &str) {
        let color = self.ctx.style.text.color;
        self.label_wrap_colored(s, color)
    }

    /// Image stretched over the widget rectangle.
    pub fn image(&mut self, img: &Image) {
        let (valid, bounds, fit) = self.widget();
        self.fit(fit, img.bounds().w);
        if !valid {
            return;
        }
        let win = self.data_mut();
        win.widgets.add(WidgetStates::Inactive, bounds);
        win.cmds.draw_image(bounds, img);
    }

    /// Leaves `cols` columns empty.
    pub fn spacing(&mut self, cols: i32) {
        for _ in 0..cols {
            self.widget();
        }
    }

    /// State the next custom widget would have, without allocating it.
    pub fn custom_state(&mut self) -> WidgetStates {
        let bounds = self.widget_bounds();
        let valid = self.data().layout.clip.intersect(&bounds);
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut ws = p.win.widgets.prev_state(bounds);
        basic_state_control(&mut ws, p.input, bounds);
        ws
    }

    /// Allocates a widget drawn by the caller. Unless `state` is
    /// [`WidgetStates::Active`] the recorded state follows the pointer. Returns the
    /// rectangle and the buffer to draw into; the buffer is `None` when the widget is
    /// not visible.
    pub fn custom(&mut self, state: WidgetStates) -> (Rect, Option<&mut CommandBuffer>) {
        let (valid, bounds, _) = self.widget();
        if !valid {
            return (bounds, None);
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut prev = p.win.widgets.prev_state(bounds);
        let exit = basic_state_control(&mut prev, p.input, bounds);
        let state = if state == WidgetStates::Active { state } else { exit };
        p.win.widgets.add(state, bounds);
        (bounds, Some(&mut p.win.cmds))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::command::Command;
    use crate::context::Context;
    use crate::window::WindowFlags;

    #[test]
    fn label_draws_its_text() {
        let mut ctx = Context::new(WindowFlags::empty(), |w: &mut Window<'_>| {
            w.row(20).dynamic(1);
            w.label("hello", Align::LC);
        });
        ctx.frame(Rect::new(0, 0, 200, 100));
        assert!(ctx.commands().iter().any(|c| matches!(c, Command::Text { text, .. } if text == "hello")));
    }

    #[test]
    fn wrapped_label_splits_lines() {
        let mut ctx = Context::new(WindowFlags::empty(), |w: &mut Window<'_>| {
            w.row(80).dynamic(1);
            w.label_wrap("one two three four five six seven");
        });
        ctx.frame(Rect::new(0, 0, 120, 200));
        let lines = ctx.commands().iter().filter(|c| matches!(c, Command::Text { .. })).count();
        assert!(lines > 1);
    }

    #[test]
    fn spacing_skips_columns() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w: &mut Window<'_>| {
            w.row(20).dynamic(3);
            let (a, _) = w.custom(WidgetStates::Inactive);
            w.spacing(1);
            let (c, _) = w.custom(WidgetStates::Inactive);
            out.lock().unwrap().push((a, c));
        });
        ctx.frame(Rect::new(0, 0, 300, 100));
        let (a, c) = seen.lock().unwrap()[0];
        assert_eq!(a.y, c.y);
        assert!(c.x >= a.x + 2 * a.w);
    }
}

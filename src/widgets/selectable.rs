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
//! Selectable labels.

use crate::input::Input;
use crate::rect::{touch_rect, Rect};
use crate::style::SelectableStyle;
use crate::text::Align;
use crate::widgets::{button_behavior, draw, Symbol, WidgetCtx};
use crate::window::Window;

/// Runs a selectable at `bounds`, flipping `value` on click. Returns `true` when the
/// value changed.
#[allow(clippy::too_many_arguments)]
fn do_selectable(ctx: &mut WidgetCtx<'_>, bounds: Rect, s: &str, sym: Option<Symbol>, align: Align, value: &mut bool, style: &SelectableStyle, input: &Input) -> bool {
    if s.is_empty() {
        return false;
    }
    let old = *value;
    let touch = touch_rect(bounds, style.touch_padding);
    let mut state = ctx.prev_state(bounds);
    if button_behavior(&mut state, touch, input, false) {
        *value = !*value;
    }
    ctx.add(state, bounds);
    match sym {
        Some(sym) => draw::selectable_symbol(ctx, state, style, *value, bounds, sym, s, align),
        None => draw::selectable(ctx, state, style, *value, bounds, s, align),
    }
    old != *value
}

impl<'a> Window<'a> {
    fn selectable(&mut self, s: &str, sym: Option<Symbol>, align: Align, value: &mut bool) -> bool {
        let (valid, bounds, fit) = self.widget();
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let sel = &ctx.style.selectable;
            let mut w = 2 * sel.padding.x + 2 * sel.touch_padding.x + ctx.text.font_width(&ctx.style.font, s);
            if sym.is_some() {
                w += crate::text::font_height(&ctx.style.font) + sel.padding.x;
            }
            self.fit(fit, w);
        }
        if !valid {
            return false;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        do_selectable(&mut wc, bounds, s, sym, align, value, &p.style.selectable, p.input)
    }

    /// Label that toggles `value` when clicked. Returns `true` on click.
    pub fn selectable_label(&mut self, s: &str, align: Align, value: &mut bool) -> bool { self.selectable(s, None, align, value) }

    /// Like [`Window::selectable_label`] with a symbol in front of the text.
    pub fn selectable_symbol_label(&mut self, sym: Symbol, s: &str, align: Align, value: &mut bool) -> bool { self.selectable(s, Some(sym), align, value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, CommandBuffer};
    use crate::rect::Point;
    use crate::style::Style;
    use crate::text::TextCache;
    use crate::widgets::tests::{pointer, with_left};
    use crate::widgets::WidgetBuffer;

    #[test]
    fn click_toggles_and_empty_text_is_inert() {
        let style = Style::default();
        let mut out = CommandBuffer::default();
        let mut cache = TextCache::default();
        let mut widgets = WidgetBuffer::default();
        let r = Rect::new(0, 0, 100, 20);
        let at = Point::new(5, 5);
        let mut value = false;
        let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
        assert!(!do_selectable(&mut wc, r, "", None, Align::LC, &mut value, &style.selectable, &with_left(pointer(5, 5), true, true, at)));
        assert!(!do_selectable(&mut wc, r, "item", None, Align::LC, &mut value, &style.selectable, &with_left(pointer(5, 5), true, true, at)));
        assert!(do_selectable(&mut wc, r, "item", None, Align::LC, &mut value, &style.selectable, &with_left(pointer(5, 5), false, true, at)));
        assert!(value);
        assert!(out.commands.iter().any(|c| matches!(c, Command::Text { text, .. } if text == "item")));
    }
}

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
use crate::font::Face;
use crate::input::Input;
use crate::rect::Rect;
use crate::style::{ButtonStyle, Item};
use crate::text::{font_height, Align, HAlign, TextCache};
use crate::widgets::draw::{self, run_hook};
use crate::widgets::{button_behavior, Label, Symbol, WidgetCtx};
use crate::window::Window;

fn symbol_width(sym: Symbol, cache: &mut TextCache, face: &Face) -> i32 {
    let s = match sym {
        Symbol::X => "x",
        Symbol::Underscore => "_",
        Symbol::Plus => "+",
        Symbol::Minus => "-",
        _ => "M",
    };
    cache.font_width(face, s)
}

/// Natural width of a button showing `lbl`.
pub(crate) fn button_width(lbl: &Label<'_>, style: &ButtonStyle, cache: &mut TextCache, face: &Face) -> i32 {
    let w = 2 * style.padding.x + 2 * style.touch_padding.x + 2 * style.border;
    w + match lbl {
        Label::Text(s, _) => cache.font_width(face, s),
        Label::Symbol(sym) => symbol_width(*sym, cache, face),
        Label::Image(img) => img.bounds().w + 2 * style.image_padding.x,
        Label::SymbolText(sym, s, _) => cache.font_width(face, s) + symbol_width(*sym, cache, face) + 2 * style.padding.x,
        Label::ImageText(..) | Label::Color(_) => 0,
    }
}

/// Runs the behavior of a button at `r` and draws it. Returns `true` when it fires.
pub(crate) fn do_button(ctx: &mut WidgetCtx<'_>, lbl: &Label<'_>, r: Rect, style: &ButtonStyle, input: &Input, repeat: bool) -> bool {
    let swatch;
    let style = match lbl {
        Label::Color(c) => {
            swatch = ButtonStyle {
                normal: Item::Color(*c),
                hover: Item::Color(*c),
                active: Item::Color(*c),
                padding: Default::default(),
                ..style.clone()
            };
            &swatch
        }
        _ => style,
    };

    let mut content = Rect::new(
        r.x + style.padding.x + style.border,
        r.y + style.padding.y + style.border,
        r.w - 2 * style.padding.x + style.border,
        r.h - 2 * style.padding.y + style.border,
    );
    let tp = style.touch_padding;
    let bounds = Rect::new(r.x - tp.x, r.y - tp.y, r.w + 2 * tp.x, r.h + 2 * tp.y);

    let mut state = ctx.prev_state(bounds);
    let fired = button_behavior(&mut state, bounds, input, repeat);
    ctx.add(state, bounds);

    run_hook(&style.draw_begin, ctx.out);
    let default_painter = DefaultPainter;
    let painter: &dyn crate::style::ButtonPainter = match &style.painter {
        Some(p) => p.as_ref(),
        None => &default_painter,
    };
    match lbl {
        Label::Text(s, align) => painter.text(ctx, bounds, content, state, style, s, *align),
        Label::Symbol(sym) => painter.symbol(ctx, bounds, content, state, style, *sym),
        Label::Image(img) => {
            let ip = style.image_padding;
            content = Rect::new(content.x + ip.x, content.y + ip.y, content.w - 2 * ip.x, content.h - 2 * ip.y);
            painter.image(ctx, bounds, content, state, style, img)
        }
        Label::SymbolText(sym, s, align) => {
            let fh = font_height(ctx.face);
            let mut tri = Rect::new(0, content.y + content.h / 2 - fh / 2, fh, fh);
            tri.x = match align {
                Align(HAlign::Left, _) => ((content.x + content.w) - (2 * style.padding.x + tri.w)).max(0),
                _ => content.x + 2 * style.padding.x,
            };
            painter.text_symbol(ctx, bounds, content, tri, state, style, s, *sym)
        }
        Label::ImageText(img, s, align) => {
            let h = bounds.h - 2 * style.padding.y;
            let mut icon = Rect::new(0, bounds.y + style.padding.y, h, h);
            icon.x = match align {
                Align(HAlign::Left, _) => ((bounds.x + bounds.w) - (2 * style.padding.x + icon.w)).max(0),
                _ => bounds.x + 2 * style.padding.x,
            };
            let ip = style.image_padding;
            icon = Rect::new(icon.x + ip.x, icon.y + ip.y, icon.w - 2 * ip.x, icon.h - 2 * ip.y);
            painter.text_image(ctx, bounds, content, icon, state, style, s, img)
        }
        Label::Color(_) => painter.symbol(ctx, bounds, bounds, state, style, Symbol::None),
    }
    run_hook(&style.draw_end, ctx.out);
    fired
}

struct DefaultPainter;

impl crate::style::ButtonPainter for DefaultPainter {}

impl<'a> Window<'a> {
    /// Push button. With `repeat` it fires on every frame it is held down instead of
    /// once on release.
    pub fn button(&mut self, lbl: Label<'_>, repeat: bool) -> bool {
        let (valid, bounds, fit) = self.widget();
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let w = button_width(&lbl, &ctx.style.button, &mut ctx.text, &ctx.style.font);
            self.fit(fit, w);
        }
        if !valid {
            return false;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        do_button(&mut wc, &lbl, bounds, &p.style.button, p.input, repeat)
    }

    /// Button with a centered text label.
    pub fn button_text(&mut self, text: &str) -> bool { self.button(Label::text(text), false) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, CommandBuffer};
    use crate::rect::{Point, NULL_RECT};
    use crate::style::{Style, WidgetStates};
    use crate::widgets::tests::{pointer, with_left};
    use crate::widgets::WidgetBuffer;

    fn buffer() -> CommandBuffer {
        let mut out = CommandBuffer::default();
        out.push_scissor(NULL_RECT);
        out
    }

    #[test]
    fn text_width_includes_padding_and_border() {
        let style = Style::default();
        let mut cache = TextCache::default();
        let w = button_width(&Label::text("abc"), &style.button, &mut cache, &style.font);
        let b = &style.button;
        assert_eq!(w, 2 * b.padding.x + 2 * b.touch_padding.x + 2 * b.border + cache.font_width(&style.font, "abc"));
    }

    #[test]
    fn button_records_state_and_draws_label() {
        let style = Style::default();
        let mut out = buffer();
        let mut cache = TextCache::default();
        let mut widgets = WidgetBuffer::default();
        let r = Rect::new(10, 10, 80, 20);
        let input = with_left(pointer(20, 15), true, true, Point::new(20, 15));
        let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
        assert!(!do_button(&mut wc, &Label::text("go"), r, &style.button, &input, false));
        assert_eq!(widgets.prev_state(r), WidgetStates::Active);
        assert!(out.commands.iter().any(|c| matches!(c, Command::Text { text, .. } if text == "go")));
    }
}

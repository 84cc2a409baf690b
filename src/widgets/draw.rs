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
//! Built-in looks of every widget.
//!
//! The functions in this module only emit commands; they never look at input. Custom
//! [`crate::ButtonPainter`] and [`crate::TogglePainter`] implementations can call them
//! to fall back to the default rendering.

use crate::command::{CommandBuffer, Image};
use crate::font::Face;
use crate::rect::{shrink_rect, triangle_from_direction, Heading, Point, Rect};
use crate::style::*;
use crate::text::{font_height, widget_text, Align, TextCache, TextWidget};
use crate::widgets::{Symbol, WidgetCtx};
use crate::{color, Color};

fn transparent() -> Color { color(0, 0, 0, 0) }

fn text_widget(background: Color, text: Color) -> TextWidget { TextWidget { padding: Point::new(0, 0), background, text } }

pub(crate) fn run_hook(hook: &Option<DrawHook>, out: &mut CommandBuffer) {
    if let Some(hook) = hook {
        hook(out);
    }
}

fn by_state<T>(state: WidgetStates, normal: T, hover: T, active: T) -> T {
    match state {
        WidgetStates::Hovered => hover,
        WidgetStates::Active => active,
        WidgetStates::Inactive => normal,
    }
}

/// Draws `sym` inside `content`.
#[allow(clippy::too_many_arguments)]
pub fn draw_symbol(out: &mut CommandBuffer, cache: &mut TextCache, sym: Symbol, content: Rect, background: Color, foreground: Color, border_width: i32, face: &Face) {
    let triangle = |out: &mut CommandBuffer, heading: Heading| {
        let p = triangle_from_direction(content, border_width, border_width, heading);
        out.fill_triangle(p[0], p[1], p[2], foreground);
    };
    match sym {
        Symbol::X | Symbol::Underscore | Symbol::Plus | Symbol::Minus => {
            let s = match sym {
                Symbol::X => "x",
                Symbol::Underscore => "_",
                Symbol::Plus => "+",
                _ => "-",
            };
            widget_text(out, cache, content, s, &text_widget(background, foreground), Align::CC, face);
        }
        Symbol::RectSolid | Symbol::RectOutline => {
            out.fill_rect(content, 0, foreground);
            if sym == Symbol::RectOutline {
                out.fill_rect(shrink_rect(content, border_width), 0, background);
            }
        }
        Symbol::CircleSolid | Symbol::CircleOutline => {
            out.fill_circle(content, foreground);
            if sym == Symbol::CircleOutline {
                out.fill_circle(shrink_rect(content, 1), background);
            }
        }
        Symbol::TriangleUp => triangle(out, Heading::Up),
        Symbol::TriangleDown => triangle(out, Heading::Down),
        Symbol::TriangleLeft => triangle(out, Heading::Left),
        Symbol::TriangleRight => triangle(out, Heading::Right),
        Symbol::None => {}
    }
}

/// Draws the frame of a button and returns the background item that was used.
pub fn button<'s>(out: &mut CommandBuffer, bounds: Rect, state: WidgetStates, style: &'s ButtonStyle) -> &'s Item {
    let background = by_state(state, &style.normal, &style.hover, &style.active);
    match background {
        Item::Image(img) => out.draw_image(bounds, img),
        Item::Color(c) => {
            out.fill_rect(bounds, style.rounding, style.border_color);
            out.fill_rect(shrink_rect(bounds, style.border), style.rounding, *c);
        }
    }
    background
}

fn button_text_colors(background: &Item, state: WidgetStates, style: &ButtonStyle) -> TextWidget {
    let bg = background.color().unwrap_or(style.text_background);
    text_widget(bg, by_state(state, style.text_normal, style.text_hover, style.text_active))
}

/// Button with a text label.
pub fn text_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, align: Align) {
    let background = button(ctx.out, bounds, state, style);
    let text = button_text_colors(background, state, style);
    widget_text(ctx.out, ctx.text, content, txt, &text, align, ctx.face);
}

/// Button with a symbol.
pub fn symbol_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, symbol: Symbol) {
    let background = button(ctx.out, bounds, state, style);
    let text = button_text_colors(background, state, style);
    draw_symbol(ctx.out, ctx.text, symbol, content, text.background, text.text, style.symbol_border_width, ctx.face);
}

/// Button with an image.
pub fn image_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, img: &Image) {
    button(ctx.out, bounds, state, style);
    ctx.out.draw_image(content, img);
}

/// Button with a symbol and a centered label.
#[allow(clippy::too_many_arguments)]
pub fn text_symbol_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, label: Rect, sym: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, symbol: Symbol) {
    let background = button(ctx.out, bounds, state, style);
    let text = button_text_colors(background, state, style);
    draw_symbol(ctx.out, ctx.text, symbol, sym, style.text_background, text.text, 0, ctx.face);
    widget_text(ctx.out, ctx.text, label, txt, &text, Align::CC, ctx.face);
}

/// Button with an image and a centered label.
#[allow(clippy::too_many_arguments)]
pub fn text_image_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, label: Rect, img_rect: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, img: &Image) {
    let background = button(ctx.out, bounds, state, style);
    let text = button_text_colors(background, state, style);
    widget_text(ctx.out, ctx.text, label, txt, &text, Align::CC, ctx.face);
    ctx.out.draw_image(img_rect, img);
}

/// Symbol button honoring the hooks and the painter of `style`.
pub(crate) fn styled_symbol_button(ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, symbol: Symbol) {
    run_hook(&style.draw_begin, ctx.out);
    match &style.painter {
        Some(p) => p.symbol(ctx, bounds, content, state, style, symbol),
        None => symbol_button(ctx, bounds, content, state, style, symbol),
    }
    run_hook(&style.draw_end, ctx.out);
}

fn selectable_frame(out: &mut CommandBuffer, state: WidgetStates, style: &SelectableStyle, active: bool, bounds: Rect) -> TextWidget {
    let (background, fg) = if active {
        by_state(state, (&style.normal_active, style.text_normal_active), (&style.hover_active, style.text_hover_active), (&style.pressed_active, style.text_pressed_active))
    } else {
        by_state(state, (&style.normal, style.text_normal), (&style.hover, style.text_hover), (&style.pressed, style.text_pressed))
    };
    let bg = match background {
        Item::Image(img) => {
            out.draw_image(bounds, img);
            transparent()
        }
        Item::Color(c) => {
            out.fill_rect(bounds, style.rounding, *c);
            *c
        }
    };
    TextWidget { padding: style.padding, background: bg, text: fg }
}

/// Selectable label; `active` is the selection value.
#[allow(clippy::too_many_arguments)]
pub fn selectable(ctx: &mut WidgetCtx<'_>, state: WidgetStates, style: &SelectableStyle, active: bool, bounds: Rect, txt: &str, align: Align) {
    run_hook(&style.draw_begin, ctx.out);
    let text = selectable_frame(ctx.out, state, style, active, bounds);
    widget_text(ctx.out, ctx.text, bounds, txt, &text, align, ctx.face);
    run_hook(&style.draw_end, ctx.out);
}

/// Selectable label with a symbol in front of the text.
#[allow(clippy::too_many_arguments)]
pub fn selectable_symbol(ctx: &mut WidgetCtx<'_>, state: WidgetStates, style: &SelectableStyle, active: bool, bounds: Rect, sym: Symbol, txt: &str, align: Align) {
    run_hook(&style.draw_begin, ctx.out);
    let text = selectable_frame(ctx.out, state, style, active, bounds);
    let fh = font_height(ctx.face);
    let icon = Rect::new(bounds.x + style.padding.x, bounds.y + bounds.h / 2 - fh / 2, fh, fh);
    draw_symbol(ctx.out, ctx.text, sym, icon, text.background, text.text, 1, ctx.face);
    let skip = icon.w + style.padding.x;
    let lbl = Rect::new(bounds.x + skip, bounds.y, (bounds.w - skip).max(0), bounds.h);
    widget_text(ctx.out, ctx.text, lbl, txt, &text, align, ctx.face);
    run_hook(&style.draw_end, ctx.out);
}

/// Scrollbar track and cursor.
pub fn scrollbar(out: &mut CommandBuffer, state: WidgetStates, style: &ScrollbarStyle, bounds: Rect, cursor: Rect) {
    run_hook(&style.draw_begin, out);
    let (background, cursor_item) = match state {
        WidgetStates::Active => (&style.active, &style.cursor_active),
        WidgetStates::Hovered => (&style.hover, &style.cursor_hover),
        WidgetStates::Inactive => (&style.normal, &style.cursor_normal),
    };
    match background {
        Item::Color(c) => {
            out.fill_rect(bounds, style.rounding, style.border_color);
            out.fill_rect(shrink_rect(bounds, style.border), style.rounding, *c);
        }
        Item::Image(img) => out.draw_image(bounds, img),
    }
    cursor_item.fill(out, cursor, style.rounding);
    run_hook(&style.draw_end, out);
}

/// Check box (`radio == false`) or radio button.
#[allow(clippy::too_many_arguments)]
pub fn togglebox(ctx: &mut WidgetCtx<'_>, radio: bool, state: WidgetStates, style: &ToggleStyle, active: bool, label: Rect, select: Rect, cursor: Rect, txt: &str) {
    let (background, cursor_item, fg) = match state {
        WidgetStates::Hovered => (&style.hover, &style.cursor_hover, style.text_hover),
        WidgetStates::Active => (&style.hover, &style.cursor_hover, style.text_active),
        WidgetStates::Inactive => (&style.normal, &style.cursor_normal, style.text_normal),
    };
    let fill = |out: &mut CommandBuffer, item: &Item, r: Rect| match item {
        Item::Image(img) => out.draw_image(r, img),
        Item::Color(c) if radio => out.fill_circle(r, *c),
        Item::Color(c) => out.fill_rect(r, 0, *c),
    };
    fill(ctx.out, background, select);
    if active {
        fill(ctx.out, cursor_item, cursor);
    }
    let text = text_widget(style.text_background, fg);
    widget_text(ctx.out, ctx.text, label, txt, &text, Align::LC, ctx.face);
}

/// Progress bar.
pub fn progress(out: &mut CommandBuffer, state: WidgetStates, style: &ProgressStyle, bounds: Rect, cursor: Rect) {
    run_hook(&style.draw_begin, out);
    let (background, cursor_item) = match state {
        WidgetStates::Active => (&style.active, &style.cursor_active),
        WidgetStates::Hovered => (&style.hover, &style.cursor_hover),
        WidgetStates::Inactive => (&style.normal, &style.cursor_normal),
    };
    background.fill(out, bounds, style.rounding);
    cursor_item.fill(out, cursor, style.rounding);
    run_hook(&style.draw_end, out);
}

/// Slider track, filled part and cursor; `virtual_cursor` is the logical cursor cell.
pub fn slider(out: &mut CommandBuffer, state: WidgetStates, style: &SliderStyle, bounds: Rect, virtual_cursor: Rect) {
    run_hook(&style.draw_begin, out);
    let (background, bar_color, cursor) = match state {
        WidgetStates::Active => (&style.active, style.bar_active, &style.cursor_active),
        WidgetStates::Hovered => (&style.hover, style.bar_hover, &style.cursor_hover),
        WidgetStates::Inactive => (&style.normal, style.bar_normal, &style.cursor_normal),
    };

    let bar = Rect::new(bounds.x, (bounds.y + virtual_cursor.h / 2) - virtual_cursor.h / 8, bounds.w, bounds.h / 6);
    let mut scursor = Rect::new(0, 0, style.cursor_size.x, style.cursor_size.y);
    scursor.y = (bar.y + bar.h / 2) - scursor.h / 2;
    scursor.x = virtual_cursor.x - virtual_cursor.w / 2;
    let fill = Rect::new(bar.x, bar.y, (scursor.x + scursor.w / 2) - bar.x, bar.h);

    match background {
        Item::Image(img) => out.draw_image(bounds, img),
        Item::Color(c) => {
            out.fill_rect(bounds, style.rounding, style.border_color);
            out.fill_rect(shrink_rect(bounds, style.border), style.rounding, *c);
        }
    }
    out.fill_rect(bar, style.rounding, bar_color);
    out.fill_rect(fill, style.rounding, style.bar_filled);
    match cursor {
        Item::Image(img) => out.draw_image(scursor, img),
        Item::Color(c) => out.fill_circle(scursor, *c),
    }
    run_hook(&style.draw_end, out);
}

/// Property frame and its name.
pub fn property(ctx: &mut WidgetCtx<'_>, style: &PropertyStyle, bounds: Rect, label: Rect, state: WidgetStates, name: &str) {
    run_hook(&style.draw_begin, ctx.out);
    let (background, fg) = match state {
        WidgetStates::Active => (&style.active, style.label_active),
        WidgetStates::Hovered => (&style.hover, style.label_hover),
        WidgetStates::Inactive => (&style.normal, style.label_normal),
    };
    let bg = match background {
        Item::Image(img) => {
            ctx.out.draw_image(bounds, img);
            transparent()
        }
        Item::Color(c) => {
            ctx.out.fill_rect(bounds, style.rounding, style.border_color);
            ctx.out.fill_rect(shrink_rect(bounds, style.border), style.rounding, *c);
            *c
        }
    };
    widget_text(ctx.out, ctx.text, label, name, &text_widget(bg, fg), Align::CC, ctx.face);
    run_hook(&style.draw_end, ctx.out);
}

/// What a combo box header shows.
pub enum ComboContent<'a> {
    /// Selected text.
    Text(&'a str),
    /// A color swatch.
    Color(Color),
    /// A symbol.
    Symbol(Symbol),
    /// A symbol followed by text.
    SymbolText(Symbol, &'a str),
    /// An image.
    Image(&'a Image),
    /// An image followed by text.
    ImageText(&'a Image, &'a str),
}

/// Combo box header: background, content and the open/close button.
pub fn combo(ctx: &mut WidgetCtx<'_>, style: &ComboStyle, state: WidgetStates, header: Rect, is_active: bool, content: ComboContent<'_>) {
    let (background, label_color, symbol_color) = match state {
        WidgetStates::Active => (&style.active, style.label_active, style.symbol_active),
        WidgetStates::Hovered => (&style.hover, style.label_hover, style.symbol_hover),
        WidgetStates::Inactive => (&style.normal, style.label_normal, style.symbol_normal),
    };
    let rounding = if let ComboContent::Text(_) = content { style.rounding } else { 0 };
    let bg = match background {
        Item::Image(img) => {
            ctx.out.draw_image(header, img);
            transparent()
        }
        Item::Color(c) => {
            ctx.out.fill_rect(header, rounding, style.border_color);
            ctx.out.fill_rect(shrink_rect(header, 1), rounding, *c);
            *c
        }
    };
    let sym = if state == WidgetStates::Hovered {
        style.sym_hover
    } else if is_active {
        style.sym_active
    } else {
        style.sym_normal
    };

    let bw = header.h - 2 * style.button_padding.y;
    let button_x_pad = match content {
        ComboContent::Symbol(_) | ComboContent::Image(_) => style.button_padding.y,
        _ => style.button_padding.x,
    };
    let button = Rect::new((header.x + header.w - header.h) - button_x_pad, header.y + style.button_padding.y, bw, bw);
    let bp = style.button.padding;
    let button_content = Rect::new(button.x + bp.x, button.y + bp.y, button.w - 2 * bp.x, button.h - 2 * bp.y);
    let cp = style.content_padding;
    let text = text_widget(bg, label_color);

    let icon = Rect::new(header.x + cp.x, header.y + cp.y, header.h - 2 * cp.y, header.h - 2 * cp.y);
    let after_icon = Rect::new(icon.x + icon.w + style.spacing.x + cp.x, header.y + cp.y, 0, header.h - 2 * cp.y);
    let after_icon = Rect { w: (button.x - cp.x) - after_icon.x, ..after_icon };

    match content {
        ComboContent::Text(selected) => {
            let lbl = Rect::new(header.x + cp.x, header.y + cp.y, button.x - (cp.x + style.spacing.x) - (header.x + cp.x), header.h - 2 * cp.y);
            widget_text(ctx.out, ctx.text, lbl, selected, &text, Align::LC, ctx.face);
        }
        ComboContent::Color(c) => {
            let x = header.x + 2 * cp.x;
            let b = Rect::new(x, header.y + 2 * cp.y, (button.x - (cp.x + style.spacing.x)) - x, header.h - 4 * cp.y);
            ctx.out.fill_rect(b, 0, c);
        }
        ComboContent::Symbol(s) => {
            let x = header.x + cp.x;
            let b = Rect::new(x, header.y + cp.y, (button.x - cp.y) - x, header.h - 2 * cp.y);
            draw_symbol(ctx.out, ctx.text, s, b, bg, symbol_color, 1, ctx.face);
        }
        ComboContent::SymbolText(s, selected) => {
            draw_symbol(ctx.out, ctx.text, s, icon, bg, symbol_color, 1, ctx.face);
            widget_text(ctx.out, ctx.text, after_icon, selected, &text, Align::LC, ctx.face);
        }
        ComboContent::Image(img) => {
            let x = header.x + cp.x;
            ctx.out.draw_image(Rect::new(x, header.y + cp.y, (button.x - cp.y) - x, header.h - 2 * cp.y), img);
        }
        ComboContent::ImageText(img, selected) => {
            ctx.out.draw_image(icon, img);
            widget_text(ctx.out, ctx.text, after_icon, selected, &text, Align::LC, ctx.face);
        }
    }
    styled_symbol_button(ctx, button, button_content, state, &style.button, sym);
}

/// Tab or node header of a tree; returns the rectangle left for the title.
pub fn tree_node(ctx: &mut WidgetCtx<'_>, tab: &TabStyle, window: &WindowStyle, is_tab: bool, header: Rect, sym: Rect) -> Rect {
    if is_tab {
        match &tab.background {
            Item::Image(img) => ctx.out.draw_image(header, img),
            Item::Color(c) => {
                ctx.out.fill_rect(header, 0, tab.border_color);
                ctx.out.fill_rect(shrink_rect(header, tab.border), tab.rounding, *c);
            }
        }
    }
    let spacing = window.spacing;
    let padding = window.padding;
    let w = header.w.max(sym.w + spacing.y + padding.x);
    Rect::new(
        sym.x + sym.w + spacing.x + 2 * tab.spacing.x,
        sym.y,
        w - (sym.w + 2 * tab.spacing.x + spacing.y + padding.x),
        font_height(ctx.face),
    )
}

/// Title bar of a window.
pub(crate) struct WindowHeader<'a> {
    pub header: Rect,
    pub label: Rect,
    pub hovered: bool,
    pub focused: bool,
    pub title: &'a str,
}

/// Window background and, when present, the title bar.
pub(crate) fn window_header(
    out: &mut CommandBuffer, cache: &mut TextCache, face: &Face, style: &WindowStyle, bounds: Rect, dynamic: bool, row_height: i32, header_h: i32,
    header: Option<WindowHeader<'_>>,
) {
    if !dynamic {
        let mut body = bounds;
        if header.is_some() {
            body.y += header_h - 1;
            body.h -= header_h;
        }
        style.fixed_background.fill(out, body, 0);
    } else {
        out.fill_rect(Rect::new(bounds.x, bounds.y, bounds.w, row_height + style.padding.y), 0, style.background);
    }

    if let Some(h) = header {
        let hs = &style.header;
        let (background, fg) = if h.focused {
            (&hs.active, hs.label_active)
        } else if h.hovered {
            (&hs.hover, hs.label_hover)
        } else {
            (&hs.normal, hs.label_normal)
        };
        let bg = match background {
            Item::Image(img) => {
                out.draw_image(h.header, img);
                transparent()
            }
            Item::Color(c) => {
                out.fill_rect(h.header, 0, *c);
                *c
            }
        };
        widget_text(out, cache, h.label, h.title, &text_widget(bg, fg), Align::LC, face);
    }
}

/// Scaler grip and borders drawn once the body is complete.
pub(crate) struct ScalerAndBorders {
    pub scaler: Option<Rect>,
    pub header_border: bool,
    pub borders: bool,
    pub bounds: Rect,
    pub border: i32,
    pub header_h: i32,
    pub border_color: Color,
    pub padding_y: i32,
}

impl ScalerAndBorders {
    pub(crate) fn draw(&self, out: &mut CommandBuffer, style: &WindowStyle) {
        if let Some(s) = self.scaler {
            match &style.scaler {
                Item::Image(img) => out.draw_image(s, img),
                Item::Color(c) => out.fill_triangle(Point::new(s.x + s.w, s.y), s.max(), Point::new(s.x, s.y + s.h), *c),
            }
        }
        let b = self.bounds;
        let bw = self.border;
        if self.header_border {
            out.stroke_line(Point::new(b.x + bw / 2, b.y + self.header_h - bw), Point::new(b.x + b.w - bw, b.y + self.header_h - bw), bw, self.border_color);
        }
        if self.borders {
            let left = b.x + bw / 2;
            let right = b.x + b.w - bw;
            let top = b.y + bw / 2;
            let bottom = self.padding_y - bw;
            out.stroke_line(Point::new(left, top), Point::new(right, top), style.border, self.border_color);
            out.stroke_line(Point::new(left, bottom), Point::new(right, bottom), bw, self.border_color);
            out.stroke_line(Point::new(left, top), Point::new(left, bottom), bw, self.border_color);
            out.stroke_line(Point::new(right, top), Point::new(right, bottom), bw, self.border_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::rect::NULL_RECT;

    fn buffer() -> CommandBuffer {
        let mut out = CommandBuffer::default();
        out.reset();
        out.fill_rect(Rect::new(0, 0, 1, 1), 0, color(1, 1, 1, 255));
        out
    }

    #[test]
    fn outline_rect_symbol_draws_two_fills() {
        let mut out = buffer();
        let mut cache = TextCache::default();
        let face = Face::default();
        let r = Rect::new(10, 10, 10, 10);
        draw_symbol(&mut out, &mut cache, Symbol::RectOutline, r, color(0, 0, 0, 255), color(255, 0, 0, 255), 2, &face);
        assert_eq!(out.commands.len(), 3);
        assert_eq!(out.commands[2], Command::RectFilled { rect: Rect::new(12, 12, 6, 6), rounding: 0, color: color(0, 0, 0, 255) });
    }

    #[test]
    fn letter_symbols_become_text() {
        let mut out = buffer();
        let mut cache = TextCache::default();
        let face = Face::default();
        draw_symbol(&mut out, &mut cache, Symbol::Plus, Rect::new(0, 0, 20, 20), color(0, 0, 0, 255), color(255, 255, 255, 255), 0, &face);
        assert!(matches!(&out.commands[1], Command::Text { text, .. } if text == "+"));
        draw_symbol(&mut out, &mut cache, Symbol::None, Rect::new(0, 0, 20, 20), color(0, 0, 0, 255), color(255, 255, 255, 255), 0, &face);
        assert_eq!(out.commands.len(), 2);
    }

    #[test]
    fn button_frame_uses_border_then_body() {
        let mut out = buffer();
        let style = Style::default();
        let bounds = Rect::new(0, 0, 40, 20);
        button(&mut out, bounds, WidgetStates::Hovered, &style.button);
        assert_eq!(out.commands[1], Command::RectFilled { rect: bounds, rounding: style.button.rounding, color: style.button.border_color });
        assert_eq!(
            out.commands[2],
            Command::RectFilled { rect: shrink_rect(bounds, style.button.border), rounding: style.button.rounding, color: style.button.hover.color().unwrap_or_default() }
        );
        assert_eq!(out.clip, NULL_RECT);
    }
}

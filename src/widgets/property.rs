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
use std::collections::HashMap;

use crate::clipboard::Clipboard;
use crate::editor::{filter_decimal, filter_float, PropertyEditor, PropertyStatus};
use crate::input::{Input, KeyCode, MouseButton};
use crate::rect::{clamp_float, clamp_int, Rect};
use crate::style::{PropertyStyle, WidgetStates};
use crate::text::{font_height, TextCache};
use crate::widgets::{button_behavior, do_button, draw, Label, WidgetCtx};
use crate::font::Face;
use crate::window::Window;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PropertyRet {
    Stay,
    Inc,
    Dec,
    Drag,
    Set,
}

/// Formats `v` as a 32 bit float with `prec` significant digits, switching to
/// exponent notation for very large or small magnitudes. A negative `prec` picks the
/// shortest representation that reads back to the same value.
pub fn format_g(v: f64, prec: i32) -> String {
    let v = v as f32;
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let shortest = prec < 0;
    let mut prec = prec.max(1);
    let sci = if shortest { format!("{:e}", v.abs()) } else { format!("{:.*e}", (prec - 1) as usize, v.abs()) };
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: Vec<u8> = {
        let mut d: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        while d.len() > 1 && d.last() == Some(&b'0') {
            d.pop();
        }
        d
    };
    let nd = digits.len() as i32;
    let dp = exp + 1;
    if shortest {
        prec = nd;
    }

    let mut eprec = prec;
    if eprec > nd && nd >= dp {
        eprec = nd;
    }
    if shortest {
        eprec = 6;
    }

    let mut out = String::new();
    if v < 0.0 {
        out.push('-');
    }
    let digit = |i: i32| if i >= 0 && i < nd { digits[i as usize] as char } else { '0' };

    let e = dp - 1;
    if e < -4 || e >= eprec {
        let prec = prec.min(nd);
        out.push(digit(0));
        if prec > 1 {
            out.push('.');
            (1..prec).for_each(|i| out.push(digit(i)));
        }
        out.push('E');
        out.push(if e < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", e.abs()));
        return out;
    }

    if prec > dp {
        prec = nd;
    }
    if dp > 0 {
        (0..dp).for_each(|i| out.push(digit(i)));
    } else {
        out.push('0');
    }
    let frac = (prec - dp).max(0);
    if frac > 0 {
        out.push('.');
        (0..frac).for_each(|i| out.push(digit(dp + i)));
    }
    out
}

fn digits(n: i32) -> i32 { ((n.max(1) as f64).log2() + 1.0) as i32 }

pub(crate) fn property_width(max: i32, style: &PropertyStyle, cache: &mut TextCache, face: &Face) -> i32 {
    2 * font_height(face) / 2 + digits(max) * cache.font_width(face, "0") + 4 * style.padding.x + 2 * style.border
}

struct PropertyRects {
    left: Rect,
    label: Rect,
    right: Rect,
    edit: Rect,
    empty: Rect,
}

fn property_rects(ctx: &mut WidgetCtx<'_>, property: Rect, name: &str, buffer: &str, style: &PropertyStyle) -> PropertyRects {
    let side = ctx.font_height() / 2;
    let left = Rect::new(property.x + style.border + style.padding.x, property.y + style.border + property.h / 2 - side / 2, side, side);
    let label = Rect::new(left.x + left.w + style.padding.x, property.y + style.border, ctx.font_width(name) + 2 * style.padding.x, property.h - 2 * style.border);
    let right = Rect::new(property.x + property.w - (side + style.padding.x), left.y, side, side);
    let edit_w = ctx.font_width(buffer) + ctx.font_width("i") + 2 * style.padding.x;
    let edit = Rect::new(right.x - (edit_w + style.padding.x), property.y + style.border + 1, edit_w, property.h - (2 * style.border + 2));
    let empty = Rect::new(label.x + label.w, property.y, edit.x - (label.x + label.w), property.h);
    PropertyRects { left, label, right, edit, empty }
}

/// Moves the editor between its idle, editing and dragging modes. Returns whether the
/// value is being dragged and by how many pixels this frame.
fn property_behavior(ed: &mut PropertyEditor, ws: &mut WidgetStates, input: &Input, property: Rect, r: &PropertyRects) -> (bool, i32) {
    if ed.status == PropertyStatus::Default {
        if button_behavior(ws, r.edit, input, false) {
            ed.status = PropertyStatus::Edit;
        } else if input.mouse.is_click_down_in_rect(MouseButton::Left, r.label, true) || input.mouse.is_click_down_in_rect(MouseButton::Left, r.empty, true) {
            ed.status = PropertyStatus::Drag;
        }
    }

    let mut drag = (false, 0);
    if ed.status == PropertyStatus::Drag {
        if input.mouse.released(MouseButton::Left) {
            ed.status = PropertyStatus::Default;
        } else {
            drag = (true, input.mouse.delta.x);
        }
    }

    *ws = match ed.status {
        PropertyStatus::Default if input.mouse.hovering_rect(property) => WidgetStates::Hovered,
        PropertyStatus::Default => WidgetStates::Inactive,
        _ => WidgetStates::Active,
    };
    drag
}

/// Runs one frame of a property widget. Returns what happened to the value, the drag
/// distance and the editor text.
#[allow(clippy::too_many_arguments)]
pub(crate) fn do_property(
    ctx: &mut WidgetCtx<'_>,
    editors: &mut HashMap<String, PropertyEditor>,
    property: Rect,
    name: &str,
    text: &str,
    filter: fn(char) -> bool,
    style: &PropertyStyle,
    input: &Input,
    clipboard: &mut dyn Clipboard,
    activate: Option<&str>,
) -> (PropertyRet, i32, String) {
    let mut ws = ctx.prev_state(property);
    let mut ed = match editors.remove(name) {
        Some(ed) if ws == WidgetStates::Active => ed,
        _ => PropertyEditor::new(text),
    };
    let rects = property_rects(ctx, property, name, &ed.buffer, style);

    match activate {
        Some(target) if target == name && ed.status != PropertyStatus::Edit => {
            ed.status = PropertyStatus::Edit;
            ed.active = true;
            ed.select_all();
        }
        _ => {}
    }

    let old = ed.status == PropertyStatus::Edit;
    let (drag, delta) = property_behavior(&mut ed, &mut ws, input, property, &rects);
    let mut ret = if drag { PropertyRet::Drag } else { PropertyRet::Stay };
    if ws == WidgetStates::Active {
        ed.active = true;
    }
    ctx.add(ws, property);
    draw::property(ctx, style, property, rects.label, ws, name);

    if do_button(ctx, &Label::Symbol(style.sym_left), rects.left, &style.dec_button, input, false) {
        ret = PropertyRet::Dec;
    }
    if do_button(ctx, &Label::Symbol(style.sym_right), rects.right, &style.inc_button, input, false) {
        ret = PropertyRet::Inc;
    }

    if !old && ed.status == PropertyStatus::Edit {
        ed.cursor = ed.buffer.len();
    }
    ed.edit(ctx, rects.edit, &style.edit, input, filter, clipboard);

    let mut active = ed.active;
    if active && (input.keyboard.pressed(KeyCode::Enter) || input.keyboard.pressed(KeyCode::KeypadEnter)) {
        active = false;
    }
    if matches!(activate, Some(target) if target != name) {
        active = false;
    }
    if old && !active {
        ed.status = PropertyStatus::Default;
        ed.active = false;
        ret = PropertyRet::Set;
    }

    let buffer = ed.buffer.clone();
    if ws == WidgetStates::Active {
        editors.insert(name.to_string(), ed);
    }
    (ret, delta, buffer)
}

fn update_float(ret: PropertyRet, delta: i32, buffer: &str, val: f64, step: f64, inc_per_pixel: f64) -> f64 {
    match ret {
        PropertyRet::Dec => val - step,
        PropertyRet::Inc => val + step,
        PropertyRet::Drag => val + delta as f64 * inc_per_pixel,
        PropertyRet::Set => buffer.trim().parse().unwrap_or(val),
        PropertyRet::Stay => val,
    }
}

fn update_int(ret: PropertyRet, delta: i32, buffer: &str, val: i32, step: i32, inc_per_pixel: i32) -> i32 {
    match ret {
        PropertyRet::Dec => val - step,
        PropertyRet::Inc => val + step,
        PropertyRet::Drag => val + delta * inc_per_pixel,
        PropertyRet::Set => buffer.trim().parse().unwrap_or(val),
        PropertyRet::Stay => val,
    }
}

impl<'a> Window<'a> {
    fn property(&mut self, name: &str, max: i32, text: &str, filter: fn(char) -> bool) -> Option<(PropertyRet, i32, String)> {
        let (valid, bounds, fit) = self.widget();
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let w = property_width(max, &ctx.style.property, &mut ctx.text, &ctx.style.font);
            self.fit(fit, w);
        }
        if !valid {
            return None;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        Some(do_property(&mut wc, &mut p.win.editors, bounds, name, text, filter, &p.style.property, p.input, &mut *p.clipboard, p.activate_editor))
    }

    /// Named numeric field. The value moves by `step` with the arrow buttons, by
    /// `inc_per_pixel` per pixel when the label is dragged, or can be typed in. It is
    /// shown with `prec` significant digits. Returns `true` when `val` changed.
    #[allow(clippy::too_many_arguments)]
    pub fn property_float(&mut self, name: &str, min: f64, val: &mut f64, max: f64, step: f64, inc_per_pixel: f64, prec: i32) -> bool {
        let text = format_g(*val, prec);
        let Some((ret, delta, buffer)) = self.property(name, (max + 1.0) as i32, &text, filter_float) else {
            return false;
        };
        *val = update_float(ret, delta, &buffer, *val, step, inc_per_pixel);
        let changed = ret != PropertyRet::Stay;
        if changed {
            *val = clamp_float(min, *val, max);
        }
        changed
    }

    /// Integer flavour of [`Window::property_float`].
    #[allow(clippy::too_many_arguments)]
    pub fn property_int(&mut self, name: &str, min: i32, val: &mut i32, max: i32, step: i32, inc_per_pixel: i32) -> bool {
        let text = val.to_string();
        let Some((ret, delta, buffer)) = self.property(name, max, &text, filter_decimal) else {
            return false;
        };
        *val = update_int(ret, delta, &buffer, *val, step, inc_per_pixel);
        let changed = ret != PropertyRet::Stay;
        if changed {
            *val = clamp_int(min, *val, max);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::context::Context;
    use crate::master::Event;
    use crate::window::WindowFlags;
    use crate::command::CommandBuffer;
    use crate::input::{KeyEvent, Modifiers};
    use crate::rect::{Point, NULL_RECT};
    use crate::style::Style;
    use crate::widgets::tests::{pointer, with_left};
    use crate::widgets::WidgetBuffer;

    struct Harness {
        style: Style,
        cache: TextCache,
        widgets: WidgetBuffer,
        editors: HashMap<String, PropertyEditor>,
        clipboard: MemoryClipboard,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                style: Style::default(),
                cache: TextCache::default(),
                widgets: WidgetBuffer::default(),
                editors: HashMap::new(),
                clipboard: MemoryClipboard::default(),
            }
        }

        fn frame(&mut self, bounds: Rect, value: &mut i32, input: &Input) -> PropertyRet {
            let mut out = CommandBuffer::default();
            out.push_scissor(NULL_RECT);
            let text = value.to_string();
            let (ret, delta, buffer) = {
                let mut wc = WidgetCtx::new(&mut out, &mut self.cache, &self.style.font, &mut self.widgets);
                do_property(&mut wc, &mut self.editors, bounds, "n", &text, filter_decimal, &self.style.property, input, &mut self.clipboard, None)
            };
            self.widgets.reset();
            *value = update_int(ret, delta, &buffer, *value, 1, 1);
            ret
        }

        fn rects(&mut self, bounds: Rect, buffer: &str) -> PropertyRects {
            let mut out = CommandBuffer::default();
            let mut wc = WidgetCtx::new(&mut out, &mut self.cache, &self.style.font, &mut self.widgets);
            property_rects(&mut wc, bounds, "n", buffer, &self.style.property)
        }
    }

    fn center(r: Rect) -> Point { Point::new(r.x + r.w / 2, r.y + r.h / 2) }

    #[test]
    fn dragging_the_label_moves_the_value() {
        let seen = Arc::new(Mutex::new((50, false, Rect::default())));
        let out = seen.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(30).dynamic(1);
            let mut s = out.lock().unwrap();
            let mut v = s.0;
            let changed = w.property_int("n", 0, &mut v, 100, 1, 1);
            *s = (v, changed, w.last_widget_bounds());
        });
        let view = Rect::new(0, 0, 640, 480);
        let step = |ctx: &mut Context, e: Event| {
            ctx.handle_event(e);
            ctx.frame(view);
        };
        step(&mut ctx, Event::MouseMove(Point::new(600, 400)));
        let r = seen.lock().unwrap().2;
        // between the name and the value text
        let grab = Point::new(r.x + r.w / 2, r.y + r.h / 2);

        step(&mut ctx, Event::MouseMove(grab));
        step(&mut ctx, Event::MouseButton { button: MouseButton::Left, down: true, pos: grab });
        assert_eq!(seen.lock().unwrap().0, 50);

        step(&mut ctx, Event::MouseMove(Point::new(grab.x + 25, grab.y)));
        assert_eq!(seen.lock().unwrap().0, 75);
        assert!(seen.lock().unwrap().1);

        step(&mut ctx, Event::MouseMove(Point::new(grab.x + 75, grab.y)));
        assert_eq!(seen.lock().unwrap().0, 100);

        step(&mut ctx, Event::MouseButton { button: MouseButton::Left, down: false, pos: Point::new(grab.x + 75, grab.y) });
        step(&mut ctx, Event::MouseMove(Point::new(grab.x + 100, grab.y)));
        assert_eq!(*seen.lock().unwrap(), (100, false, r));
    }

    #[test]
    fn harness_drag_reports_the_distance() {
        let mut h = Harness::new();
        let bounds = Rect::new(0, 0, 200, 30);
        let grab = center(h.rects(bounds, "50").label);
        let mut value = 50;

        assert_eq!(h.frame(bounds, &mut value, &pointer(grab.x, grab.y)), PropertyRet::Stay);
        assert_eq!(h.frame(bounds, &mut value, &with_left(pointer(grab.x, grab.y), true, true, grab)), PropertyRet::Drag);

        let mut moved = with_left(pointer(grab.x + 25, grab.y), true, false, grab);
        moved.mouse.delta = Point::new(25, 0);
        assert_eq!(h.frame(bounds, &mut value, &moved), PropertyRet::Drag);
        assert_eq!(value, 75);

        let released = with_left(pointer(grab.x + 25, grab.y), false, true, grab);
        assert_eq!(h.frame(bounds, &mut value, &released), PropertyRet::Stay);
        assert!(h.editors.values().all(|e| e.status == PropertyStatus::Default));
    }

    #[test]
    fn typed_value_is_parsed_on_enter() {
        let mut h = Harness::new();
        let bounds = Rect::new(0, 0, 200, 30);
        let edit = center(h.rects(bounds, "50").edit);
        let mut value = 50;

        h.frame(bounds, &mut value, &pointer(edit.x, edit.y));
        h.frame(bounds, &mut value, &with_left(pointer(edit.x, edit.y), true, true, edit));
        h.frame(bounds, &mut value, &with_left(pointer(edit.x, edit.y), false, true, edit));
        assert_eq!(h.editors.get("n").map(|e| e.status), Some(PropertyStatus::Edit));

        let mut typing = pointer(edit.x, edit.y);
        typing.keyboard.keys.push(KeyEvent::press(KeyCode::Backspace, None, Modifiers::NONE));
        typing.keyboard.keys.push(KeyEvent::press(KeyCode::Backspace, None, Modifiers::NONE));
        h.frame(bounds, &mut value, &typing);
        assert_eq!(h.editors.get("n").map(|e| e.buffer.as_str()), Some(""));

        let mut typing = pointer(edit.x, edit.y);
        typing.keyboard.text = "4x2".to_string();
        h.frame(bounds, &mut value, &typing);
        assert_eq!(h.editors.get("n").map(|e| e.buffer.as_str()), Some("42"));

        let mut enter = pointer(edit.x, edit.y);
        enter.keyboard.keys.push(KeyEvent::press(KeyCode::Enter, None, Modifiers::NONE));
        assert_eq!(h.frame(bounds, &mut value, &enter), PropertyRet::Set);
        assert_eq!(value, 42);
    }

    #[test]
    fn g_formatting() {
        assert_eq!(format_g(75.0, 3), "75");
        assert_eq!(format_g(0.5, 3), "0.5");
        assert_eq!(format_g(1.0e6, -1), "1E+06");
        assert_eq!(format_g(123456.0, 3), "1.23E+05");
        assert_eq!(format_g(-2.5, 2), "-2.5");
        assert_eq!(format_g(0.0, 2), "0");
        assert_eq!(format_g(0.1, -1), "0.1");
    }

    #[test]
    fn digit_count_and_width() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(100), 7);
        let style = Style::default();
        let mut cache = TextCache::default();
        let w = property_width(100, &style.property, &mut cache, &style.font);
        assert!(w > 7 * cache.font_width(&style.font, "0"));
    }
}

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
//! Sliders and progress bars.

use crate::input::{Input, MouseButton};
use crate::rect::{clamp_float, pad_rect, Rect};
use crate::style::{ProgressStyle, SliderStyle, WidgetStates};
use crate::widgets::{basic_state_control, do_button, draw, Label, WidgetCtx};
use crate::window::Window;

/// Moves the value by whole steps toward the pointer while the slider is dragged.
#[allow(clippy::too_many_arguments)]
fn slider_behavior(state: &mut WidgetStates, cursor: Rect, input: &Input, style: &SliderStyle, bounds: Rect, min: f64, value: f64, max: f64, step: f64, steps: i32) -> f64 {
    let exit = basic_state_control(state, input, bounds);
    let mut value = value;
    if *state == WidgetStates::Active {
        if !input.mouse.down(MouseButton::Left) {
            *state = exit;
        } else {
            let d = (input.mouse.pos.x - (cursor.x + cursor.w / 2)) as f64;
            let pxstep = (bounds.w - 2 * style.padding.x) as f64 / steps as f64;
            if d.abs() >= pxstep {
                let n = (d.abs() / pxstep).trunc();
                value += if d > 0.0 { step * n } else { -step * n };
                value = clamp_float(min, value, max);
            }
        }
    }
    value
}

#[allow(clippy::too_many_arguments)]
fn do_slider(ctx: &mut WidgetCtx<'_>, bounds: Rect, min: f64, val: f64, max: f64, step: f64, style: &SliderStyle, input: &Input) -> f64 {
    let mut bounds = bounds;
    let mut val = val;
    bounds.x += style.padding.x;
    bounds.y += style.padding.y;
    bounds.h = bounds.h.max(2 * style.padding.y);
    bounds.w = bounds.w.max(1 + bounds.h + 2 * style.padding.x);
    bounds.h -= 2 * style.padding.y;
    bounds.w -= 2 * style.padding.y;

    if style.show_buttons {
        let mut button = Rect::new(bounds.x, bounds.y, bounds.h, bounds.h);
        if do_button(ctx, &Label::Symbol(style.dec_symbol), button, &style.dec_button, input, false) {
            val -= step;
        }
        button.x = (bounds.x + bounds.w) - button.w;
        if do_button(ctx, &Label::Symbol(style.inc_symbol), button, &style.inc_button, input, false) {
            val += step;
        }
        bounds.x += button.w + style.spacing.x;
        bounds.w -= 2 * button.w + 2 * style.spacing.x;
    }

    let value = clamp_float(min, val, max);
    let steps = ((max - min) / step) as i32;
    let offset = (value - min) / step;
    let cell = bounds.w as f64 / (steps + 1) as f64;
    let cursor = Rect::new(bounds.x + (cell * offset) as i32, bounds.y, cell as i32, bounds.h);

    let mut state = ctx.prev_state(bounds);
    let value = slider_behavior(&mut state, cursor, input, style, bounds, min, value, max, step, steps);
    ctx.add(state, bounds);
    draw::slider(ctx.out, state, style, bounds, cursor);
    value
}

fn progress_behavior(state: &mut WidgetStates, input: &Input, r: Rect, max: i32, value: i32, modifiable: bool) -> i32 {
    if !modifiable {
        *state = WidgetStates::Inactive;
        return value;
    }
    let exit = basic_state_control(state, input, r);
    let mut value = value;
    if *state == WidgetStates::Active {
        if !input.mouse.down(MouseButton::Left) {
            *state = exit;
        } else {
            let ratio = ((input.mouse.pos.x - r.x) as f64).max(0.0) / r.w as f64;
            value = ((max as f64 * ratio) as i32).max(0);
        }
    }
    if max > 0 && value > max { max } else { value }
}

fn do_progress(ctx: &mut WidgetCtx<'_>, bounds: Rect, value: i32, max: i32, modifiable: bool, style: &ProgressStyle, input: &Input) -> i32 {
    let mut cursor = pad_rect(bounds, style.padding);
    cursor.w = (cursor.w as f64 * (value as f64 / max as f64)) as i32;
    let value = value.min(max);

    let mut state = ctx.prev_state(bounds);
    let value = progress_behavior(&mut state, input, bounds, max, value, modifiable);
    ctx.add(state, bounds);
    draw::progress(ctx.out, state, style, bounds, cursor);
    value
}

impl<'a> Window<'a> {
    /// Slider over `[min, max]` moving by `step`. Returns `true` when `value` changed.
    pub fn slider_float(&mut self, min: f64, value: &mut f64, max: f64, step: f64) -> bool {
        let (valid, bounds, _) = self.widget();
        if !valid {
            return false;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        let old = *value;
        *value = do_slider(&mut wc, bounds, min, old, max, step, &p.style.slider, p.input);
        old != *value
    }

    /// Integer flavour of [`Window::slider_float`].
    pub fn slider_int(&mut self, min: i32, value: &mut i32, max: i32, step: i32) -> bool {
        let mut v = *value as f64;
        let changed = self.slider_float(min as f64, &mut v, max as f64, step as f64);
        *value = v as i32;
        changed
    }

    /// Progress bar showing `cur` out of `max`; with `modifiable` it can be dragged.
    /// Returns `true` when `cur` changed.
    pub fn progress(&mut self, cur: &mut i32, max: i32, modifiable: bool) -> bool {
        let (valid, bounds, _) = self.widget();
        if !valid {
            return false;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        let old = *cur;
        *cur = do_progress(&mut wc, bounds, old, max, modifiable, &p.style.progress, p.input);
        *cur != old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Point;
    use crate::style::Style;
    use crate::widgets::tests::{pointer, with_left};

    fn dragging(x: i32) -> Input { with_left(pointer(x, 5), true, false, Point::new(2, 5)) }

    #[test]
    fn slider_moves_by_whole_steps() {
        let mut style = Style::default().slider;
        style.padding = Point::new(5, 0);
        let bounds = Rect::new(0, 0, 110, 10);
        let cursor = Rect::new(0, 0, 10, 10);
        let mut state = WidgetStates::Active;
        assert_eq!(slider_behavior(&mut state, cursor, &dragging(40), &style, bounds, 0.0, 0.0, 10.0, 1.0, 10), 3.0);
        assert_eq!(slider_behavior(&mut state, cursor, &dragging(8), &style, bounds, 0.0, 0.0, 10.0, 1.0, 10), 0.0);
        assert_eq!(slider_behavior(&mut state, cursor, &dragging(109), &style, bounds, 0.0, 9.0, 10.0, 1.0, 10), 10.0);
        assert_eq!(state, WidgetStates::Active);
    }

    #[test]
    fn slider_release_leaves_active_state() {
        let style = Style::default().slider;
        let bounds = Rect::new(0, 0, 110, 10);
        let mut state = WidgetStates::Active;
        let released = with_left(pointer(40, 5), false, true, Point::new(2, 5));
        assert_eq!(slider_behavior(&mut state, Rect::new(0, 0, 10, 10), &released, &style, bounds, 0.0, 4.0, 10.0, 1.0, 10), 4.0);
        assert_eq!(state, WidgetStates::Hovered);
    }

    #[test]
    fn progress_follows_the_pointer() {
        let r = Rect::new(0, 0, 100, 10);
        let mut state = WidgetStates::Active;
        assert_eq!(progress_behavior(&mut state, &dragging(50), r, 200, 10, true), 100);
        assert_eq!(progress_behavior(&mut state, &dragging(500), r, 200, 10, true), 200);
        let mut fixed = WidgetStates::Active;
        assert_eq!(progress_behavior(&mut fixed, &dragging(50), r, 200, 10, false), 10);
        assert_eq!(fixed, WidgetStates::Inactive);
    }
}

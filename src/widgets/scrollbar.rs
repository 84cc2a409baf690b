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
//! Scrollbars of window bodies.
//!
//! Scrollbars are not placed by the layout; [`crate::Window`] bodies draw them in
//! `panel_end` once the content height is known.

use crate::input::{Input, MouseButton};
use crate::rect::{clamp_float, Rect};
use crate::style::{ScrollbarStyle, WidgetStates};
use crate::widgets::{basic_state_control, do_button, draw, Label, WidgetCtx};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Orientation {
    Vertical,
    Horizontal,
}

/// Scroll wheel notches available to a scrollbar. The scrollbar consumes what it
/// uses and leaves the residual in `delta`.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Wheel {
    pub delta: i32,
    /// Whether the pointer is over the area the wheel scrolls.
    pub over: bool,
}

#[allow(clippy::too_many_arguments)]
/// `view` is the visible extent of the content; `scroll` may be shorter when the cursor was stretched to its minimum size.
fn scrollbar_behavior(
    state: &mut WidgetStates, input: &Input, scroll: Rect, cursor: Rect, empty0: Rect, empty1: Rect, offset: f64, target: f64, view: f64, o: Orientation,
) -> f64 {
    let exit = basic_state_control(state, input, cursor);
    let extent = match o {
        Orientation::Vertical => scroll.h as f64,
        Orientation::Horizontal => scroll.w as f64,
    };
    if *state == WidgetStates::Active {
        if !input.mouse.down(MouseButton::Left) {
            *state = exit;
            return offset;
        }
        let pixel = match o {
            Orientation::Vertical => input.mouse.delta.y,
            Orientation::Horizontal => input.mouse.delta.x,
        };
        let delta = (pixel as f64 / extent) * target;
        clamp_float(0.0, offset + delta, target - view)
    } else if input.mouse.is_click_in_rect(MouseButton::Left, empty0) {
        (offset - extent).max(0.0)
    } else if input.mouse.is_click_in_rect(MouseButton::Left, empty1) {
        (offset + extent).min(target - view)
    } else {
        offset
    }
}

fn scrollwheel_behavior(wheel: &mut Wheel, scroll: Rect, offset: f64, target: f64, step: f64) -> f64 {
    if wheel.delta == 0 || !wheel.over {
        return offset;
    }
    let new_offset = clamp_float(0.0, offset + step * -wheel.delta as f64, target - scroll.h as f64);
    let used = (new_offset - offset) / step;
    let residual = wheel.delta as f64 + used;
    wheel.delta = if residual < 0.0 { residual.ceil() as i32 } else { residual.floor() as i32 };
    new_offset
}

/// Vertical scrollbar over `target` pixels of content; returns the new offset.
#[allow(clippy::too_many_arguments)]
pub(crate) fn do_scrollbarv(
    ctx: &mut WidgetCtx<'_>, scroll: Rect, offset: f64, target: f64, step: f64, button_pixel_inc: f64, style: &ScrollbarStyle, input: &Input, wheel: &mut Wheel,
) -> f64 {
    let mut scroll = scroll;
    let mut offset = offset;
    scroll.w = scroll.w.max(1);
    scroll.h = scroll.h.max(2 * scroll.w);
    if target <= scroll.h as f64 {
        return 0.0;
    }

    if style.show_buttons {
        let mut button = Rect::new(scroll.x, scroll.y, scroll.w, scroll.w);
        let inc = step.min(button_pixel_inc);
        if do_button(ctx, &Label::Symbol(style.dec_symbol), button, &style.dec_button, input, true) {
            offset -= inc;
        }
        button.y = scroll.y + scroll.h - button.h;
        if do_button(ctx, &Label::Symbol(style.inc_symbol), button, &style.inc_button, input, true) {
            offset += inc;
        }
        scroll.y += button.h;
        scroll.h -= 2 * button.h;
    }

    let scroll_step = step.min(scroll.h as f64);
    let mut scroll_offset = clamp_float(0.0, offset, target - scroll.h as f64);
    let ratio = scroll.h as f64 / target;
    let original = scroll;

    let mut cursor = Rect::new(scroll.x + 1, 0, scroll.w - 2, (ratio * scroll.h as f64 - 2.0) as i32);
    let min_h = ctx.font_height();
    if cursor.h < min_h {
        cursor.h = min_h;
        scroll.h -= min_h;
    }
    cursor.y = scroll.y + ((scroll_offset / target) * scroll.h as f64) as i32 + 1;

    let north = Rect { h: cursor.y - scroll.y, ..scroll };
    let south_y = cursor.y + cursor.h;
    let south = Rect { y: south_y, h: (scroll.y + scroll.h) - south_y, ..scroll };

    let mut state = ctx.prev_state(scroll);
    scroll_offset = scrollbar_behavior(&mut state, input, scroll, cursor, north, south, scroll_offset, target, original.h as f64, Orientation::Vertical);
    scroll_offset = scrollwheel_behavior(wheel, original, scroll_offset, target, scroll_step);
    cursor.y = scroll.y + ((scroll_offset / target) * scroll.h as f64) as i32;

    ctx.add(state, scroll);
    draw::scrollbar(ctx.out, state, style, original, cursor);
    scroll_offset
}

/// Horizontal scrollbar over `target` pixels of content; returns the new offset.
#[allow(clippy::too_many_arguments)]
pub(crate) fn do_scrollbarh(ctx: &mut WidgetCtx<'_>, scroll: Rect, offset: f64, target: f64, step: f64, button_pixel_inc: f64, style: &ScrollbarStyle, input: &Input) -> f64 {
    let mut scroll = scroll;
    let mut offset = offset;
    scroll.h = scroll.h.max(1);
    scroll.w = scroll.w.max(2 * scroll.h);
    if target <= scroll.w as f64 {
        return 0.0;
    }

    if style.show_buttons {
        let mut button = Rect::new(scroll.x, scroll.y, scroll.h, scroll.h);
        let inc = step.min(button_pixel_inc);
        if do_button(ctx, &Label::Symbol(style.dec_symbol), button, &style.dec_button, input, true) {
            offset -= inc;
        }
        button.x = scroll.x + scroll.w - button.w;
        if do_button(ctx, &Label::Symbol(style.inc_symbol), button, &style.inc_button, input, true) {
            offset += inc;
        }
        scroll.x += button.w;
        scroll.w -= 2 * button.w;
    }

    let mut scroll_offset = clamp_float(0.0, offset, target - scroll.w as f64);
    let ratio = scroll.w as f64 / target;
    let mut cursor = Rect::new(0, scroll.y + 1, (ratio * scroll.w as f64 - 2.0) as i32, scroll.h - 2);
    cursor.x = scroll.x + ((scroll_offset / target) * scroll.w as f64) as i32 + 1;

    let west = Rect { w: cursor.x - scroll.x, ..scroll };
    let east_x = cursor.x + cursor.w;
    let east = Rect { x: east_x, w: (scroll.x + scroll.w) - east_x, ..scroll };

    let mut state = ctx.prev_state(scroll);
    scroll_offset = scrollbar_behavior(&mut state, input, scroll, cursor, west, east, scroll_offset, target, scroll.w as f64, Orientation::Horizontal);
    cursor.x = scroll.x + ((scroll_offset / target) * scroll.w as f64) as i32;

    ctx.add(state, scroll);
    draw::scrollbar(ctx.out, state, style, scroll, cursor);
    scroll_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandBuffer;
    use crate::rect::Point;
    use crate::style::Style;
    use crate::text::TextCache;
    use crate::widgets::tests::{pointer, with_left};
    use crate::widgets::WidgetBuffer;

    fn vertical(view: i32, target: f64, offset: f64, wheel: &mut Wheel) -> f64 {
        let style = Style::default();
        let mut out = CommandBuffer::default();
        let mut cache = TextCache::default();
        let mut widgets = WidgetBuffer::default();
        let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
        let scroll = Rect::new(0, 0, 10, view);
        do_scrollbarv(&mut wc, scroll, offset, target, view as f64 * 0.10, view as f64 * 0.01, &style.scrollv, &pointer(500, 500), wheel)
    }

    #[test]
    fn offset_is_clamped_to_the_content() {
        for view in [40, 200, 333] {
            for content in [0, 10, 39, 200, 201, 500, 1000, 5000] {
                for requested in [-100.0, 0.0, 17.5, 150.0, 799.0, 800.0, 801.0, 1e6] {
                    let offset = vertical(view, content as f64, requested, &mut Wheel::default());
                    if content <= view {
                        assert_eq!(offset, 0.0);
                    } else {
                        assert!(offset >= 0.0 && offset <= (content - view) as f64, "{} {} {} -> {}", view, content, requested, offset);
                    }
                }
            }
        }
    }

    #[test]
    fn dragging_a_short_cursor_stops_at_the_end() {
        let style = Style::default();
        for view in [40, 41, 50, 60] {
            let target = 5000.0;
            let mut out = CommandBuffer::default();
            let mut cache = TextCache::default();
            let mut widgets = WidgetBuffer::default();
            let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
            // the cursor is stretched to a line, which shortens the track it moves in
            let track = Rect::new(0, 0, 10, view - wc.font_height());
            wc.add(WidgetStates::Active, track);
            let mut input = with_left(pointer(5, 20), true, false, Point::new(5, 20));
            input.mouse.delta = Point::new(0, 995);
            let offset = do_scrollbarv(&mut wc, Rect::new(0, 0, 10, view), 4900.0, target, 4.0, 0.4, &style.scrollv, &input, &mut Wheel::default());
            assert_eq!(offset, target - view as f64, "view {}", view);
            assert_eq!(wc.prev_state(track), WidgetStates::Active);
        }
    }

    #[test]
    fn wheel_moves_by_whole_steps() {
        let mut wheel = Wheel { delta: -3, over: true };
        assert_eq!(vertical(200, 1000.0, 0.0, &mut wheel), 60.0);
        assert_eq!(wheel.delta, 0);

        let mut wheel = Wheel { delta: -3, over: true };
        assert_eq!(vertical(200, 1000.0, 780.0, &mut wheel), 800.0);
        assert_eq!(wheel.delta, -2);

        let mut wheel = Wheel { delta: -3, over: false };
        assert_eq!(vertical(200, 1000.0, 0.0, &mut wheel), 0.0);
        assert_eq!(wheel.delta, -3);
    }

    #[test]
    fn clicking_the_track_pages() {
        let style = Style::default();
        let mut out = CommandBuffer::default();
        let mut cache = TextCache::default();
        let mut widgets = WidgetBuffer::default();
        let mut wc = WidgetCtx::new(&mut out, &mut cache, &style.font, &mut widgets);
        let mut input = pointer(5, 190);
        input.mouse.buttons[0] = crate::input::ButtonState { down: false, clicked: true, clicked_pos: Point::new(5, 190) };
        let offset = do_scrollbarv(&mut wc, Rect::new(0, 0, 10, 200), 0.0, 1000.0, 20.0, 2.0, &style.scrollv, &input, &mut Wheel::default());
        assert_eq!(offset, 200.0);
    }
}

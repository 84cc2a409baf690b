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
//! Row and column layout.
//!
//! Every window owns a [`Panel`] describing the row being filled. A row is started with
//! [`Window::row`] and one of the [`RowConstructor`] modes; each widget then takes the
//! next slot with [`Window::widget`]. Once every column of a row is used the next
//! allocation wraps to a new row with the same configuration.

use crate::rect::{saturate, Point, Rect};
use crate::style::WindowStyle;
use crate::window::{window_style, AdjustCol, Window, WindowData, WindowFlags};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum RowKind {
    DynamicFixed,
    DynamicFree,
    Dynamic,
    StaticFree,
    Static,
    #[default]
    Invalid,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct RowLayout {
    pub kind: RowKind,
    pub index: i32,
    /// Column counter of rows built with `layout_set_width` / `layout_fit_width`.
    pub index2: i32,
    pub calc_max_width: bool,
    pub height: i32,
    pub columns: i32,
    pub ratio: Vec<f64>,
    pub width_arr: Vec<i32>,
    pub item_width: i32,
    pub item_ratio: f64,
    pub item_height: i32,
    pub item_offset: i32,
    pub filled: f64,
    pub item: Rect,
    pub tree_depth: i32,
    pub free_x: f64,
    pub free_y: f64,
    pub free_w: f64,
    pub free_h: f64,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MenuState {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub offset: Point,
}

/// Per-frame layout state of a window.
#[derive(Clone, Debug, Default)]
pub(crate) struct Panel {
    pub cnt: i32,
    pub bounds: Rect,
    pub at_x: i32,
    pub at_y: i32,
    pub max_x: i32,
    pub width: i32,
    pub height: i32,
    pub footer_h: i32,
    pub header_h: i32,
    pub border: i32,
    pub clip: Rect,
    pub menu: MenuState,
    pub row: RowLayout,
    pub reserved_height: i32,
}

/// Auto-fitted column a widget was placed into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FitSlot {
    cnt: i32,
    col: i32,
}

fn wrong_layout() -> ! { panic!("Command not available with current layout") }

fn scale(v: i32, scaling: f64) -> i32 { (v as f64 * scaling).round() as i32 }

impl WindowData {
    /// Starts a new row of `cols` columns.
    pub(crate) fn panel_layout(&mut self, ws: &WindowStyle, height: i32, cols: i32, cnt: i32) {
        let spacing = ws.spacing;
        let layout = &mut self.layout;
        let mut height = height;
        if height == 0 {
            height = layout.height - (layout.at_y - layout.bounds.y) - 1;
            if layout.row.index != 0 && !self.flags.contains(WindowFlags::POPUP) {
                height -= layout.row.height;
            } else {
                height -= spacing.y;
            }
            if layout.reserved_height > 0 {
                height -= layout.reserved_height;
            }
        }

        layout.cnt = cnt;
        layout.row.index = 0;
        layout.row.index2 = 0;
        layout.row.calc_max_width = false;

        layout.at_y += layout.row.height;
        layout.row.columns = cols;
        layout.row.height = height + spacing.y;
        layout.row.item_offset = 0;
        if self.flags.contains(WindowFlags::DYNAMIC) {
            let r = Rect::new(layout.bounds.x, layout.at_y, layout.bounds.w, height + spacing.y);
            self.cmds.fill_rect(r, 0, ws.background);
        }
    }

    fn alloc_row(&mut self, ws: &WindowStyle) {
        let height = self.layout.row.height - ws.spacing.y;
        let cols = self.layout.row.columns;
        self.panel_layout(ws, height, cols, 0);
    }

    /// Position of the next widget; `modify` advances the row cursor.
    pub(crate) fn widget_space(&mut self, ws: &WindowStyle, modify: bool) -> Rect {
        let spacing = ws.spacing;
        let padding = ws.padding;
        let offset = self.scrollbar;
        let layout = &mut self.layout;

        let panel_spacing = ((layout.row.columns - 1) as f64 * spacing.x as f64) as i32;
        let panel_space = layout.width - 2 * padding.x - panel_spacing;

        let (item_width, item_offset, item_spacing) = match layout.row.kind {
            RowKind::Invalid => panic!("invalid layout"),
            RowKind::DynamicFixed => {
                let item_width = (panel_space as f64 / layout.row.columns as f64) as i32;
                (item_width, layout.row.index * item_width, layout.row.index * spacing.x)
            }
            RowKind::DynamicFree => {
                let row = &layout.row;
                return Rect::new(
                    layout.at_x + (layout.width as f64 * row.free_x) as i32 - offset.x,
                    layout.at_y + (row.height as f64 * row.free_y) as i32 - offset.y,
                    (layout.width as f64 * row.free_w) as i32,
                    (row.height as f64 * row.free_h) as i32,
                );
            }
            RowKind::Dynamic => {
                let index = layout.row.index as usize;
                let ratio = match layout.row.ratio.get(index) {
                    Some(r) if *r >= 0.0 => *r,
                    _ => layout.row.item_ratio,
                };
                let item_width = (ratio * panel_space as f64) as i32;
                let item_offset = layout.row.item_offset;
                if modify {
                    layout.row.item_offset += item_width;
                    layout.row.filled += ratio;
                }
                (item_width, item_offset, layout.row.index * spacing.x)
            }
            RowKind::StaticFree => {
                let at_x = layout.at_x.max(layout.clip.x);
                let at_y = layout.at_y.max(layout.clip.y);
                let item = layout.row.item;
                let x = at_x + item.x;
                if x + item.w > layout.max_x && modify {
                    layout.max_x = x + item.w;
                }
                return Rect::new(x - offset.x, at_y + item.y - offset.y, item.w, item.h);
            }
            RowKind::Static => {
                let item_width = match layout.row.width_arr.get(layout.row.index as usize) {
                    Some(w) => *w,
                    None => layout.row.item_width,
                };
                let item_offset = layout.row.item_offset;
                if modify {
                    layout.row.item_offset += item_width;
                }
                (item_width, item_offset, layout.row.index * spacing.x)
            }
        };

        let mut bounds = Rect::new(layout.at_x + item_offset + item_spacing + padding.x, layout.at_y - offset.y, item_width, layout.row.height - spacing.y);
        if bounds.x + bounds.w > layout.max_x && modify {
            layout.max_x = bounds.x + bounds.w;
        }
        bounds.x -= offset.x;
        bounds
    }

    /// Takes the next slot of the current row, wrapping to a new row when it is full.
    pub(crate) fn alloc_space(&mut self, ws: &WindowStyle, _scaling: f64) -> (Rect, Option<FitSlot>) {
        if self.using_sub {
            panic!("parent window used while populating a sub window");
        }
        if self.layout.row.columns > 0 && self.layout.row.index >= self.layout.row.columns {
            self.alloc_row(ws);
        }
        let bounds = self.widget_space(ws, true);
        self.last_widget_bounds = bounds;
        self.layout.row.index += 1;

        let fit = match self.layout.row.calc_max_width {
            true => Some(FitSlot { cnt: self.layout.cnt, col: self.layout.row.index2 - 1 }),
            false => None,
        };
        (bounds, fit)
    }

    /// Grows a fitted column to `width` if it is wider than what was recorded; returns
    /// `true` when it grew.
    pub(crate) fn fit(&mut self, slot: FitSlot, width: i32) -> bool {
        match self.adjust.get_mut(&slot.cnt).and_then(|cols| cols.get_mut(&slot.col)) {
            Some(col) if width > col.width => {
                col.width = width;
                true
            }
            _ => false,
        }
    }

    /// Resolves zero widths of a static row to an equal share of the unused space.
    fn static_zeros(&self, ws: &WindowStyle, width: &mut [i32]) {
        let nzero = width.iter().filter(|w| **w == 0).count() as i32;
        if nzero == 0 {
            return;
        }
        let used: i32 = width.iter().sum();
        let panel_spacing = ((width.len() as i32 - 1) as f64 * ws.spacing.x as f64) as i32;
        let panel_space = self.layout.width - 2 * ws.padding.x - panel_spacing;
        let zero_width = (panel_space - used) / nzero;
        for w in width.iter_mut().filter(|w| **w == 0) {
            *w = zero_width;
        }
    }

    fn reset_row_items(&mut self) {
        let row = &mut self.layout.row;
        row.item_width = 0;
        row.item_ratio = 0.0;
        row.item_offset = 0;
        row.filled = 0.0;
    }

    fn require_open_static(&self) {
        if self.layout.row.kind != RowKind::Static || !self.layout.row.width_arr.is_empty() {
            wrong_layout();
        }
    }

    fn set_width_scaled(&mut self, width: i32) {
        self.require_open_static();
        self.layout.row.index2 += 1;
        self.layout.row.calc_max_width = false;
        self.layout.row.item_width = width;
    }
}

/// Configures the row started by [`Window::row`] or [`Window::row_scaled`].
pub struct RowConstructor<'w, 'a> {
    win: &'w mut Window<'a>,
    height: i32,
}

impl<'w, 'a> RowConstructor<'w, 'a> {
    fn layout(&mut self, cols: i32, cnt: i32) {
        let (win, style) = self.win.ctx.window_and_style(self.win.id);
        win.panel_layout(window_style(style, win.flags), self.height, cols, cnt);
    }

    /// `cols` columns of equal width filling the row.
    pub fn dynamic(mut self, cols: i32) {
        self.layout(cols, 0);
        let data = self.win.data_mut();
        data.layout.row.kind = RowKind::DynamicFixed;
        data.layout.row.ratio.clear();
        data.reset_row_items();
    }

    /// One column per ratio of the row width; negative ratios share what is left.
    pub fn ratio(mut self, ratio: &[f64]) {
        self.layout(ratio.len() as i32, 0);
        let specified: f64 = ratio.iter().filter(|r| **r >= 0.0).sum();
        let n_undef = ratio.iter().filter(|r| **r < 0.0).count();
        let r = saturate(1.0 - specified);

        let data = self.win.data_mut();
        data.reset_row_items();
        data.layout.row.kind = RowKind::Dynamic;
        data.layout.row.ratio = ratio.to_vec();
        if r > 0.0 && n_undef > 0 {
            data.layout.row.item_ratio = r / n_undef as f64;
        }
    }

    /// Columns of fixed width in unscaled units; zero widths share the remaining space.
    ///
    /// Without widths the row never wraps and each column is declared with
    /// [`Window::layout_set_width`] or [`Window::layout_fit_width`].
    pub fn static_widths(self, widths: &[i32]) {
        let scaling = self.win.ctx.style.scaling;
        let scaled: Vec<i32> = widths.iter().map(|w| scale(*w, scaling)).collect();
        self.static_scaled(&scaled)
    }

    /// Like [`RowConstructor::static_widths`] with widths already scaled.
    pub fn static_scaled(mut self, widths: &[i32]) {
        let mut cnt = 0;
        if widths.is_empty() {
            let data = self.win.data_mut();
            if data.layout.row.width_arr.is_empty() {
                cnt = data.layout.cnt;
            } else {
                data.last_layout_cnt += 1;
                cnt = data.last_layout_cnt;
            }
        }
        self.layout(widths.len() as i32, cnt);

        let mut widths = widths.to_vec();
        let (win, style) = self.win.ctx.window_and_style(self.win.id);
        win.static_zeros(window_style(style, win.flags), &mut widths);
        win.layout.row.width_arr = widths;
        win.layout.row.kind = RowKind::Static;
        win.reset_row_items();
    }

    /// Free placement of `count` widgets with [`Window::layout_space_push`]. Returns
    /// the usable area of the row relative to its origin.
    pub fn space_begin(mut self, count: i32) -> Rect {
        self.layout(count, 0);
        let padding = self.win.window_style().padding;
        let spacing = self.win.window_style().spacing;
        let data = self.win.data_mut();
        data.layout.row.kind = RowKind::StaticFree;
        data.layout.row.ratio.clear();
        data.reset_row_items();
        Rect::new(0, 0, data.layout.width - 2 * padding.x, data.layout.row.height - spacing.y)
    }

    /// Free placement of `count` widgets with [`Window::layout_space_push_ratio`].
    pub fn space_begin_ratio(mut self, count: i32) {
        self.layout(count, 0);
        let data = self.win.data_mut();
        data.layout.row.kind = RowKind::DynamicFree;
        data.layout.row.ratio.clear();
        data.reset_row_items();
    }
}

impl<'a> Window<'a> {
    /// Starts a new row of `height` unscaled pixels; zero stretches the row over the
    /// remaining height of the window.
    pub fn row(&mut self, height: i32) -> RowConstructor<'_, 'a> {
        let height = self.ctx.scale(height);
        RowConstructor { win: self, height }
    }

    /// Like [`Window::row`] with an already scaled height.
    pub fn row_scaled(&mut self, height: i32) -> RowConstructor<'_, 'a> { RowConstructor { win: self, height } }

    /// Reserves `num` rows of `height` at the bottom of the window; zero-height rows
    /// stop short of them.
    pub fn layout_reserve_row(&mut self, height: i32, num: i32) {
        let height = self.ctx.scale(height);
        self.layout_reserve_row_scaled(height, num)
    }

    /// Like [`Window::layout_reserve_row`] with an already scaled height.
    pub fn layout_reserve_row_scaled(&mut self, height: i32, num: i32) {
        let spacing = self.window_style().spacing.y;
        self.data_mut().layout.reserved_height += height * num + spacing * num;
    }

    /// Restarts the current static row with new widths.
    pub fn layout_reset_static(&mut self, widths: &[i32]) {
        let scaled: Vec<i32> = widths.iter().map(|w| self.ctx.scale(*w)).collect();
        self.layout_reset_static_scaled(&scaled)
    }

    /// Like [`Window::layout_reset_static`] with already scaled widths.
    pub fn layout_reset_static_scaled(&mut self, widths: &[i32]) {
        let mut widths = widths.to_vec();
        let (win, style) = self.ctx.window_and_style(self.id);
        if win.layout.row.kind != RowKind::Static {
            wrong_layout();
        }
        win.static_zeros(window_style(style, win.flags), &mut widths);
        let row = &mut win.layout.row;
        row.index = 0;
        row.index2 = 0;
        row.calc_max_width = false;
        row.columns = widths.len() as i32;
        row.width_arr = widths;
        win.reset_row_items();
    }

    /// Adds a column of `width` unscaled pixels to an open static row.
    pub fn layout_set_width(&mut self, width: i32) {
        let width = self.ctx.scale(width);
        self.data_mut().set_width_scaled(width)
    }

    /// Like [`Window::layout_set_width`] with an already scaled width.
    pub fn layout_set_width_scaled(&mut self, width: i32) { self.data_mut().set_width_scaled(width) }

    /// Adds a column to an open static row that is as wide as the widest widget ever
    /// placed in it, and at least `min_width`. Changing `id` discards the recorded width.
    pub fn layout_fit_width(&mut self, id: i32, min_width: i32) {
        let face_id = self.ctx.style.font.id();
        let scaled_min = self.ctx.scale(min_width);
        let data = self.data_mut();
        data.require_open_static();
        let cnt = data.layout.cnt;
        let index2 = data.layout.row.index2;
        let cols = data.adjust.entry(cnt).or_default();
        match cols.get(&index2) {
            Some(col) if col.id == id && col.face_id == face_id => {
                let (width, first) = (col.width, col.first);
                data.set_width_scaled(width);
                data.layout.row.calc_max_width = first;
            }
            _ => {
                cols.insert(index2, AdjustCol { id, face_id, width: scaled_min, first: true });
                data.set_width_scaled(scaled_min);
                data.layout.row.calc_max_width = true;
                self.ctx.trash = true;
            }
        }
    }

    /// Places the next widget of a [`RowConstructor::space_begin`] row, in unscaled
    /// units relative to the row.
    pub fn layout_space_push(&mut self, r: Rect) {
        let scaling = self.ctx.style.scaling;
        self.layout_space_push_scaled(r.scaled(scaling))
    }

    /// Like [`Window::layout_space_push`] with an already scaled rectangle.
    pub fn layout_space_push_scaled(&mut self, r: Rect) {
        let row = &mut self.data_mut().layout.row;
        if row.kind != RowKind::StaticFree {
            wrong_layout();
        }
        row.item = r;
    }

    /// Places the next widget of a [`RowConstructor::space_begin_ratio`] row as
    /// fractions of the row.
    pub fn layout_space_push_ratio(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let row = &mut self.data_mut().layout.row;
        if row.kind != RowKind::DynamicFree {
            wrong_layout();
        }
        row.free_x = x;
        row.free_y = y;
        row.free_w = w;
        row.free_h = h;
    }

    /// Rectangle the next widget will get, without allocating it.
    pub fn widget_bounds(&mut self) -> Rect {
        let (win, style) = self.ctx.window_and_style(self.id);
        let ws = window_style(style, win.flags);
        let saved = (win.layout.at_y, win.layout.row.item_offset, win.layout.row.index);
        if win.layout.row.columns > 0 && win.layout.row.index >= win.layout.row.columns {
            win.layout.at_y += win.layout.row.height;
            win.layout.row.item_offset = 0;
            win.layout.row.index = 0;
            win.layout.row.index2 = 0;
        }
        let bounds = win.widget_space(ws, false);
        (win.layout.at_y, win.layout.row.item_offset, win.layout.row.index) = saved;
        bounds
    }

    /// Height left below the current row.
    pub fn layout_available_height(&self) -> i32 {
        let layout = &self.data().layout;
        layout.clip.h - (layout.at_y - layout.bounds.y) - self.window_style().spacing.y - layout.row.height
    }

    /// Width usable by the columns of the current row.
    pub fn layout_available_width(&self) -> i32 {
        let layout = &self.data().layout;
        match layout.row.kind {
            RowKind::DynamicFree | RowKind::StaticFree => layout.clip.w,
            _ => {
                let ws = self.window_style();
                let panel_spacing = ((layout.row.columns - 1) as f64 * ws.spacing.x as f64) as i32;
                layout.width - ws.padding.x * 2 - panel_spacing - layout.at_x
            }
        }
    }

    /// Whether the last widget is above or below the visible area, with `slop` pixels
    /// of tolerance.
    pub fn invisible(&self, slop: i32) -> (bool, bool) {
        let data = self.data();
        let (b, clip) = (data.last_widget_bounds, data.layout.clip);
        (b.y - slop < clip.y, b.y + b.h + slop > clip.y + clip.h)
    }

    /// Layout cursor relative to the body clip.
    pub fn at(&self) -> Point {
        let layout = &self.data().layout;
        Point::new(layout.at_x - layout.clip.x, layout.at_y - layout.clip.y)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::context::Context;
    use crate::style::WidgetStates;

    fn run(scaling: f64, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> Context {
        let mut ctx = Context::new(WindowFlags::empty(), f);
        let mut style = ctx.style().clone();
        style.scale(scaling);
        ctx.set_style(style);
        ctx.frame(Rect::new(0, 0, 640, 480));
        ctx
    }

    #[test]
    fn widgets_stay_inside_the_body_clip() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.0, move |w| {
            let mut rects = Vec::new();
            w.row(30).dynamic(3);
            for _ in 0..6 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                rects.push(r);
            }
            w.row(20).ratio(&[0.2, -1.0, 0.3]);
            for _ in 0..3 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                rects.push(r);
            }
            w.row(25).static_widths(&[100, 0, 80]);
            for _ in 0..3 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                rects.push(r);
            }
            let clip = w.data().layout.clip;
            out.lock().unwrap().push((clip, rects));
        });
        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        for (clip, rects) in seen.iter() {
            assert_eq!(rects.len(), 12);
            for r in rects {
                assert!(r.w > 0 && r.h > 0);
                assert_eq!(crate::rect::unify(*r, *clip), *r, "{:?} outside {:?}", r, clip);
            }
        }
    }

    #[test]
    fn static_widths_are_scaled() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(2.0, move |w| {
            w.row(10).static_widths(&[50, 25, 40]);
            let mut widths = Vec::new();
            for _ in 0..3 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                widths.push(r.w);
            }
            out.lock().unwrap().push(widths);
        });
        assert_eq!(seen.lock().unwrap()[0], vec![100, 50, 80]);
    }

    #[test]
    fn static_widths_round_at_fractional_scaling() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.5, move |w| {
            w.row(10).static_widths(&[25, 33, 41]);
            let mut widths = Vec::new();
            for _ in 0..3 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                widths.push(r.w);
            }
            out.lock().unwrap().push(widths);
        });
        assert_eq!(seen.lock().unwrap()[0], vec![38, 50, 62]);
    }

    #[test]
    fn unspecified_ratios_share_the_remainder() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.0, move |w| {
            w.row(10).ratio(&[0.5, -1.0, -1.0]);
            let data = w.data();
            out.lock().unwrap().push(data.layout.row.item_ratio);
        });
        assert_eq!(seen.lock().unwrap()[0], 0.25);
    }

    #[test]
    fn rows_wrap_with_the_same_configuration() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.0, move |w| {
            w.row(30).dynamic(2);
            let (a, _) = w.custom(WidgetStates::Inactive);
            let (_, _) = w.custom(WidgetStates::Inactive);
            let (c, _) = w.custom(WidgetStates::Inactive);
            out.lock().unwrap().push((a, c));
        });
        let (a, c) = seen.lock().unwrap()[0];
        assert_eq!(a.x, c.x);
        assert_eq!(a.w, c.w);
        assert_eq!(c.y, a.y + 30 + 4);
    }

    #[test]
    fn zero_static_widths_share_leftover() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.0, move |w| {
            w.row(10).static_widths(&[100, 0, 0]);
            let mut widths = Vec::new();
            for _ in 0..3 {
                let (r, _) = w.custom(WidgetStates::Inactive);
                widths.push(r.w);
            }
            let space = w.data().layout.width - 2 * 4 - 2 * 4;
            out.lock().unwrap().push((widths, space));
        });
        let (widths, space) = seen.lock().unwrap()[0].clone();
        assert_eq!(widths[1], (space - 100) / 2);
        assert_eq!(widths[1], widths[2]);
    }

    #[test]
    #[should_panic(expected = "Command not available with current layout")]
    fn set_width_needs_an_open_static_row() {
        let mut ctx = Context::new(WindowFlags::empty(), |w: &mut Window<'_>| {
            w.row(10).dynamic(1);
            w.layout_set_width(10);
        });
        ctx.frame(Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn space_rows_place_widgets_freely() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(1.0, move |w| {
            let area = w.row(100).space_begin(1);
            w.layout_space_push(Rect::new(10, 20, 30, 40));
            let (r, _) = w.custom(WidgetStates::Inactive);
            out.lock().unwrap().push((area, r, w.data().layout.clip));
        });
        let (area, r, clip) = seen.lock().unwrap()[0];
        assert_eq!(area.h, 100);
        assert_eq!((r.x, r.y, r.w, r.h), (clip.x + 10, clip.y + 20, 30, 40));
    }
}

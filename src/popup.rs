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
//! Transient windows: popups, nonblocking drop downs (menus, combo boxes, contextual
//! menus), tooltips and groups.
//!
//! Drop downs come in two flavours. The `*_begin` methods return the popup as a
//! [`Window`] to be filled in right away, every frame, by the caller. The plain
//! methods take an update procedure that the context calls on its own, in stack
//! order, until the popup closes.

use crate::context::{Context, ROOT, TOOLTIP_TITLE};
use crate::input::MouseButton;
use crate::rect::{Point, Rect, NULL_RECT};
use crate::text::{font_height, Align};
use crate::widgets::draw::{self, ComboContent};
use crate::widgets::{button_behavior, button_width, do_button, Label, WidgetCtx};
use crate::window::{UpdateFn, WinId, Window, WindowData, WindowFlags};

impl Context {
    pub(crate) fn nonblock_open(&mut self, flags: WindowFlags, body: Rect, header: Rect, f: Option<UpdateFn>) -> WinId {
        let inline = f.is_none();
        let mut popup = WindowData::new("");
        popup.idx = self.stack.len() as i32;
        popup.update_fn = f;
        popup.bounds = body;
        popup.flags = flags | WindowFlags::BORDER | WindowFlags::POPUP | WindowFlags::DYNAMIC | WindowFlags::SUB | WindowFlags::NONBLOCK;
        popup.header = header;
        let id = self.alloc(popup);
        self.stack.push(id);
        log::debug!("drop down opened at {:?}", body);
        if inline {
            self.special_panel_begin(id);
        }
        id
    }

    /// Opens a popup window updated by `f` until it closes. With `scale` the
    /// rectangle is given in unscaled pixels. A nonmodal popup placed at the origin is
    /// cascaded from the previous auto-positioned one.
    pub fn popup_open(&mut self, title: &str, flags: WindowFlags, rect: Rect, scale: bool, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> WinId {
        self.open_popup(title, flags, rect, scale, Box::new(f))
    }

    pub(crate) fn open_popup(&mut self, title: &str, flags: WindowFlags, rect: Rect, scale: bool, f: UpdateFn) -> WinId {
        let mut rect = if scale { rect.scaled(self.style.scaling) } else { rect };
        let root = self.window(ROOT).bounds;
        if (rect.x + rect.w <= 0 && rect.y + rect.h <= 0) || (rect.x >= root.w && rect.y >= root.h) {
            rect.x = 0;
            rect.y = 0;
        }
        if rect.x == 0 && rect.y == 0 && flags.contains(WindowFlags::NONMODAL) {
            let at = self.auto_position();
            rect.x = at.x;
            rect.y = at.y;
        }

        if !flags.contains(WindowFlags::TOOLTIP) {
            self.docked_focus = 0;
            log::debug!("popup {:?} opened at {:?}", title, rect);
        }
        let mut popup = WindowData::new(title);
        popup.idx = self.stack.len() as i32;
        popup.update_fn = Some(f);
        popup.bounds = rect;
        popup.flags = flags | WindowFlags::BORDER | WindowFlags::SUB | WindowFlags::POPUP;
        let id = self.alloc(popup);
        self.stack.push(id);
        id
    }

    fn auto_position(&mut self) -> Point {
        let at = self.autopos;
        let z = font_height(&self.style.font) + 2 * self.style.normal_window.header.padding.y;
        let step = self.scale(z);
        self.autopos.x += step;
        self.autopos.y += step;
        let root = self.window(ROOT).bounds;
        if root.w != 0 && root.h != 0 && (self.autopos.x >= root.w || self.autopos.y >= root.h) {
            self.autopos = Point::default();
        }
        at
    }

    /// The topmost drop down, if it was opened from `header`.
    fn open_drop_down(&self, header: Rect) -> Option<WinId> {
        let top = *self.stack.last()?;
        let w = self.window(top);
        (top != ROOT && w.flags.contains(WindowFlags::NONBLOCK) && w.header == header).then_some(top)
    }
}

impl<'a> Window<'a> {
    fn contextual(&mut self, mut flags: WindowFlags, size: Point, trigger: Rect, f: Option<UpdateFn>) -> Option<WinId> {
        if let Some(top) = self.ctx.open_drop_down(trigger) {
            if f.is_none() {
                self.ctx.special_panel_begin(top);
            }
            return Some(top);
        }
        let mut size = size;
        if size == Point::default() {
            size = Point::new(NULL_RECT.w, NULL_RECT.h);
            flags |= WindowFlags::HDYNAMIC;
        }
        let size = Point::new(self.ctx.scale(size.x), self.ctx.scale(size.y));
        if trigger.w > 0 && trigger.h > 0 && !self.input().mouse.clicked(MouseButton::Right, trigger) {
            return None;
        }

        let pos = self.ctx.input.mouse.pos;
        let mut body = Rect::new(pos.x, pos.y, size.x, size.y);
        if flags.contains(WindowFlags::CONTEXTUAL_REPLACE) {
            if let Some(&top) = self.ctx.stack.last() {
                let prev = self.ctx.window_mut(top);
                if top != ROOT && prev.flags.contains(WindowFlags::CONTEXTUAL) {
                    body.x = prev.bounds.x;
                    body.y = prev.bounds.y;
                    prev.close = true;
                }
            }
        }

        self.ctx.bump_changed();
        Some(self.ctx.nonblock_open(flags | WindowFlags::CONTEXTUAL | WindowFlags::NO_SCROLLBAR, body, trigger, f))
    }

    /// Opens a contextual menu when `trigger` is right clicked, or right away when
    /// `trigger` is empty. A zero `size` makes the menu as wide as its widest
    /// [`Window::menu_item`]. Returns `true` while the menu is open.
    pub fn contextual_open(&mut self, flags: WindowFlags, size: Point, trigger: Rect, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> bool {
        self.contextual(flags, size, trigger, Some(Box::new(f))).is_some()
    }

    /// Inline form of [`Window::contextual_open`]: the open menu is returned to be
    /// filled in by the caller.
    pub fn contextual_begin(&mut self, flags: WindowFlags, size: Point, trigger: Rect) -> Option<Window<'_>> {
        let id = self.contextual(flags, size, trigger, None)?;
        Some(Window::new(self.ctx, id))
    }

    /// Entry of a menu or contextual menu. Closes the menu and returns `true` when clicked.
    pub fn menu_item(&mut self, lbl: Label<'_>) -> bool {
        let padding = self.ctx.style.contextual_button.padding;
        let (valid, bounds) = self.widget_fitting(padding);
        if !valid {
            return false;
        }
        if self.flags().contains(WindowFlags::HDYNAMIC) {
            let ctx = &mut *self.ctx;
            let w = ctx.text.font_width(&ctx.style.font, lbl.as_str()) + 2 * padding.x;
            let data = self.data_mut();
            data.menu_item_width = data.menu_item_width.max(w);
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        let fired = do_button(&mut wc, &lbl, bounds, &p.style.contextual_button, p.input, false);
        if fired {
            self.close();
        }
        fired
    }

    /// Shows a tooltip of `width` pixels just below and right of the pointer. The
    /// tooltip lasts one frame; call this every frame it should stay visible.
    pub fn tooltip_open(&mut self, width: i32, scale: bool, f: impl FnMut(&mut Window<'_>) + Send + 'static) {
        let width = if scale { self.ctx.scale(width) } else { width };
        let pos = self.ctx.input.mouse.pos;
        let bounds = Rect::new(pos.x + 1, pos.y + 1, width, NULL_RECT.h);
        let flags = WindowFlags::DYNAMIC | WindowFlags::NO_SCROLLBAR | WindowFlags::TOOLTIP;
        self.ctx.open_popup(TOOLTIP_TITLE, flags, bounds, false, Box::new(f));
    }

    /// Tooltip holding a single line of text.
    pub fn tooltip(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let ctx = &mut *self.ctx;
        let (padding, spacing) = (ctx.style.tooltip_window.padding, ctx.style.tooltip_window.spacing);
        let width = ctx.text.font_width(&ctx.style.font, text) + ctx.scale(4 * padding.x) + ctx.scale(2 * spacing.x);
        let height = font_height(&ctx.style.font);
        let text = text.to_string();
        self.tooltip_open(width, false, move |tw| {
            tw.row_scaled(height).dynamic(1);
            tw.label(&text, Align::LC);
        });
    }

    fn combo_header(&mut self, lbl: &Label<'_>) -> Option<(Rect, bool)> {
        let (valid, header, _) = self.widget();
        if !valid {
            return None;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut state = p.win.widgets.prev_state(header);
        let clicked = button_behavior(&mut state, header, p.input, false);
        p.win.widgets.add(state, header);
        let content = match lbl {
            Label::Color(c) => ComboContent::Color(*c),
            Label::Image(img) => ComboContent::Image(img),
            Label::ImageText(img, s, _) => ComboContent::ImageText(img, s),
            Label::Symbol(sym) => ComboContent::Symbol(*sym),
            Label::SymbolText(sym, s, _) => ComboContent::SymbolText(*sym, s),
            Label::Text(s, _) => ComboContent::Text(s),
        };
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        draw::combo(&mut wc, &p.style.combo, state, header, clicked, content);
        Some((header, clicked))
    }

    fn combo_drop_down(&mut self, lbl: Label<'_>, height: i32, f: Option<UpdateFn>) -> Option<WinId> {
        let (header, clicked) = self.combo_header(&lbl)?;
        if f.is_none() {
            if let Some(top) = self.ctx.open_drop_down(header) {
                self.ctx.special_panel_begin(top);
                return Some(top);
            }
        }
        if !clicked {
            return None;
        }
        let body = Rect::new(header.x, header.y + header.h - 1, header.w, height);
        Some(self.ctx.nonblock_open(WindowFlags::COMBO, body, header, f))
    }

    /// Combo box showing `lbl`; clicking it opens a drop down of `height` unscaled
    /// pixels updated by `f`. Returns `true` on the frame the drop down opens.
    pub fn combo(&mut self, lbl: Label<'_>, height: i32, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> bool {
        let height = self.ctx.scale(height);
        self.combo_drop_down(lbl, height, Some(Box::new(f))).is_some()
    }

    /// Inline form of [`Window::combo`].
    pub fn combo_begin(&mut self, lbl: Label<'_>, height: i32) -> Option<Window<'_>> {
        let height = self.ctx.scale(height);
        let id = self.combo_drop_down(lbl, height, None)?;
        Some(Window::new(self.ctx, id))
    }

    /// Combo box choosing one of `items`. Returns the new selection.
    pub fn combo_simple(&mut self, items: &[&str], selected: usize, item_height: i32) -> usize {
        if items.is_empty() {
            return selected;
        }
        let item_height = self.ctx.scale(item_height);
        let item_padding = self.ctx.style.combo.button_padding.y;
        let window_padding = self.window_style().padding.y;
        let height = (items.len() as i32 + 1) * item_height + item_padding * 3 + window_padding * 2;
        let current = items.get(selected).copied().unwrap_or_default();

        let mut selected = selected;
        if let Some(id) = self.combo_drop_down(Label::text(current), height, None) {
            let mut w = Window::new(self.ctx, id);
            w.row_scaled(item_height).dynamic(1);
            for (i, item) in items.iter().enumerate() {
                if w.menu_item(Label::text_aligned(item, Align::LC)) {
                    selected = i;
                }
            }
        }
        selected
    }

    fn menu_drop_down(&mut self, lbl: Label<'_>, width: i32, f: Option<UpdateFn>) -> Option<WinId> {
        let (valid, header, fit) = self.widget();
        if fit.is_some() {
            let ctx = &mut *self.ctx;
            let w = button_width(&lbl, &ctx.style.menu_button, &mut ctx.text, &ctx.style.font);
            self.fit(fit, w);
        }
        if !valid {
            return None;
        }
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let mut wc = WidgetCtx::new(&mut p.win.cmds, p.text, &p.style.font, &mut p.win.widgets);
        let clicked = do_button(&mut wc, &lbl, header, &p.style.menu_button, p.input, false);

        if f.is_none() {
            if let Some(top) = self.ctx.open_drop_down(header) {
                self.ctx.special_panel_begin(top);
                return Some(top);
            }
        }
        if !clicked {
            return None;
        }

        let mut flags = WindowFlags::MENU | WindowFlags::NO_SCROLLBAR;
        let mut width = self.ctx.scale(width);
        if width == 0 {
            width = NULL_RECT.w;
            flags |= WindowFlags::HDYNAMIC;
        }
        let area = self.data().layout.bounds;
        let top = header.y + header.h;
        let body = Rect::new(header.x, top, width, area.y + area.h - top);
        Some(self.ctx.nonblock_open(flags, body, header, f))
    }

    /// Menu button; clicking it opens a drop down updated by `f`. A zero `width`
    /// fits the drop down to its widest [`Window::menu_item`]. Returns `true` on the
    /// frame the drop down opens.
    pub fn menu(&mut self, lbl: Label<'_>, width: i32, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> bool {
        self.menu_drop_down(lbl, width, Some(Box::new(f))).is_some()
    }

    /// Inline form of [`Window::menu`].
    pub fn menu_begin(&mut self, lbl: Label<'_>, width: i32) -> Option<Window<'_>> {
        let id = self.menu_drop_down(lbl, width, None)?;
        Some(Window::new(self.ctx, id))
    }

    /// Starts a group: a scrollable sub window occupying the next widget slot. The
    /// returned window must be finished with [`Window::group_end`]; the parent cannot
    /// be used until then.
    pub fn group_begin(&mut self, title: &str, flags: WindowFlags) -> Option<Window<'_>> {
        let parent = self.id;
        let sub = match self.data().groups.get(title) {
            Some(id) => *id,
            None => {
                let mut data = WindowData::new(title);
                data.parent = Some(parent);
                let id = self.ctx.alloc(data);
                self.data_mut().groups.insert(title.to_string(), id);
                id
            }
        };

        let (idx, clip, parent_flags) = {
            let d = self.data();
            (d.idx, d.cmds.clip, d.flags)
        };
        let sw = self.ctx.window_mut(sub);
        sw.cur_node = 0;
        sw.widgets.reset();
        sw.cmds.reset();
        sw.idx = idx;
        sw.cmds.clip = clip;

        let (valid, bounds, _) = self.widget();
        if !valid {
            return None;
        }
        let mut flags = flags | WindowFlags::SUB | WindowFlags::GROUP;
        if parent_flags.contains(WindowFlags::ENABLED) {
            flags |= WindowFlags::ENABLED;
        }
        let sw = self.ctx.window_mut(sub);
        sw.bounds = bounds;
        sw.flags = flags;
        self.ctx.panel_begin(sub);
        self.data_mut().using_sub = true;
        Some(Window::new(self.ctx, sub))
    }

    /// Closes a group and appends what it drew to its parent.
    pub fn group_end(self) {
        self.ctx.panel_end(self.id);
        let w = self.ctx.window_mut(self.id);
        let parent = w.parent;
        let commands = std::mem::take(&mut w.cmds.commands);
        if let Some(parent) = parent {
            let p = self.ctx.window_mut(parent);
            p.using_sub = false;
            p.cmds.commands.extend(commands);
        }
    }

    /// Starts a scrollable list of `num` rows inside a group named `name`.
    pub fn group_list(&mut self, name: &str, num: usize, flags: WindowFlags) -> GroupList<'_> {
        let w = self.group_begin(name, flags);
        let scrollbar_y = w.as_ref().map_or(0, |w| w.scrollbar().y);
        GroupList {
            w,
            num: num as i32,
            idx: -1,
            scrollbar_y,
            done: false,
            skipped_line_height: 0,
        }
    }
}

/// Lazily populated list inside a group. Rows scrolled out of view can be replaced
/// by a single filler row with [`GroupList::skip_to_visible`].
///
/// ```no_run
/// # fn demo(w: &mut imkit::Window<'_>) {
/// let mut list = w.group_list("files", 10_000, imkit::WindowFlags::BORDER);
/// list.skip_to_visible(20);
/// while let Some((i, row)) = list.next() {
///     row.row(20).dynamic(1);
///     row.label(&format!("file {}", i), imkit::Align::LC);
/// }
/// # }
/// ```
pub struct GroupList<'w> {
    w: Option<Window<'w>>,
    num: i32,
    idx: i32,
    scrollbar_y: i32,
    done: bool,
    skipped_line_height: i32,
}

impl<'w> GroupList<'w> {
    /// Advances to the next row; `None` once the list is exhausted, at which point the
    /// group is closed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<(usize, &mut Window<'w>)> {
        let w = self.w.as_mut()?;
        if self.skipped_line_height > 0 && self.idx >= 0 && w.invisible(0).1 {
            let n = self.num - self.idx;
            self.idx = self.num;
            filler(w, n, self.skipped_line_height);
        }
        self.idx += 1;
        if self.idx >= self.num {
            self.finish();
            return None;
        }
        let idx = self.idx as usize;
        self.w.as_mut().map(|w| (idx, w))
    }

    /// Index of the current row.
    pub fn index(&self) -> i32 { self.idx }

    /// Skips the rows above the visible area, given rows of `line_height` unscaled pixels.
    pub fn skip_to_visible(&mut self, line_height: i32) {
        let Some(w) = self.w.as_ref() else { return };
        let line_height = w.ctx.scale(line_height);
        self.skip_to_visible_scaled(line_height);
    }

    /// [`GroupList::skip_to_visible`] with an already scaled line height.
    pub fn skip_to_visible_scaled(&mut self, line_height: i32) {
        let Some(w) = self.w.as_mut() else { return };
        let spacing = w.window_style().spacing.y;
        let skip = (w.scrollbar().y / (line_height + spacing).max(1) - 2).min(self.num - 3).max(0);
        self.skipped_line_height = line_height;
        filler(w, skip, line_height);
        self.idx = skip - 1;
    }

    /// Scrolls so that the current row ends up in the middle of the list, if it is
    /// not visible.
    pub fn center(&mut self) {
        let Some(w) = self.w.as_ref() else { return };
        let (above, below) = w.invisible(w.last_widget_bounds().h * 2);
        if above || below {
            self.scrollbar_y = (w.at().y - w.bounds().h / 2).max(0);
        }
    }

    fn finish(&mut self) {
        if std::mem::replace(&mut self.done, true) {
            return;
        }
        if let Some(mut w) = self.w.take() {
            if self.scrollbar_y != w.scrollbar().y {
                w.set_scrollbar(Point::new(w.scrollbar().x, self.scrollbar_y));
                w.changed();
            }
            w.group_end();
        }
    }
}

impl Drop for GroupList<'_> {
    fn drop(&mut self) { self.finish() }
}

fn filler(w: &mut Window<'_>, n: i32, line_height: i32) {
    if n <= 0 {
        return;
    }
    let spacing = w.window_style().spacing.y;
    w.row_scaled(n * line_height + (n - 1) * spacing).dynamic(1);
    w.label("More...", Align::LC);
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::command::Command;
    use crate::master::Event;

    const VIEW: Rect = Rect::new(0, 0, 640, 480);

    fn click(ctx: &mut Context, button: MouseButton, p: Point) {
        ctx.handle_event(Event::MouseMove(p));
        ctx.frame(VIEW);
        ctx.handle_event(Event::MouseButton { button, down: true, pos: p });
        ctx.frame(VIEW);
        ctx.handle_event(Event::MouseButton { button, down: false, pos: p });
        ctx.frame(VIEW);
    }

    fn center(r: Rect) -> Point { Point::new(r.x + r.w / 2, r.y + r.h / 2) }

    fn texts(ctx: &Context) -> Vec<(String, Rect)> {
        ctx.commands()
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, rect, .. } => Some((text.clone(), *rect)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn tooltip_lives_one_frame_below_the_pointer() {
        for scaling in [1.0, 1.5] {
            let state = Arc::new(Mutex::new((true, None)));
            let out = state.clone();
            let mut ctx = Context::new(WindowFlags::empty(), move |w| {
                let open = out.lock().unwrap().0;
                if open {
                    let seen = out.clone();
                    w.tooltip_open(100, true, move |tw| {
                        tw.row(20).dynamic(1);
                        tw.label("hi", Align::LC);
                        seen.lock().unwrap().1 = Some((tw.bounds(), tw.flags(), tw.last_widget_bounds()));
                    });
                }
            });
            let mut style = ctx.style().clone();
            style.scale(scaling);
            ctx.set_style(style);
            ctx.handle_event(Event::MouseMove(Point::new(200, 200)));
            ctx.frame(VIEW);

            let (bounds, flags, row) = state.lock().unwrap().1.unwrap();
            assert_eq!((bounds.x, bounds.y, bounds.w), (201, 201, (100.0 * scaling) as i32));
            assert_eq!(row.h, (20.0 * scaling) as i32);
            assert!(flags.contains(WindowFlags::TOOLTIP));
            let hi: Vec<_> = texts(&ctx).into_iter().filter(|(t, _)| t == "hi").collect();
            assert_eq!(hi.len(), 1);
            assert!(hi[0].1.x >= 201 && hi[0].1.y >= 201);
            assert_eq!(ctx.stack.len(), 1);

            state.lock().unwrap().0 = false;
            ctx.frame(VIEW);
            assert!(texts(&ctx).iter().all(|(t, _)| t != "hi"));
        }
    }

    #[test]
    fn tooltip_text_sizes_to_the_label() {
        let mut ctx = Context::new(WindowFlags::empty(), |w| w.tooltip("some help"));
        ctx.handle_event(Event::MouseMove(Point::new(50, 50)));
        ctx.frame(VIEW);
        assert!(texts(&ctx).iter().any(|(t, r)| t == "some help" && r.x > 51));
    }

    #[test]
    fn contextual_menu_item_fires_and_closes() {
        let state = Arc::new(Mutex::new((Rect::default(), Rect::default(), false)));
        let out = state.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(30).dynamic(1);
            w.label("target", Align::LC);
            let trigger = w.last_widget_bounds();
            let mut s = out.lock().unwrap();
            s.0 = trigger;
            if let Some(mut m) = w.contextual_begin(WindowFlags::empty(), Point::new(100, 100), trigger) {
                m.row(20).dynamic(1);
                if m.menu_item(Label::text("Copy")) {
                    s.2 = true;
                }
                s.1 = m.last_widget_bounds();
            }
        });
        ctx.frame(VIEW);
        let trigger = state.lock().unwrap().0;
        click(&mut ctx, MouseButton::Right, center(trigger));
        assert_eq!(ctx.stack.len(), 2);
        let menu = ctx.window(ctx.stack[1]);
        assert!(menu.flags.contains(WindowFlags::CONTEXTUAL | WindowFlags::NONBLOCK));
        assert_eq!(menu.bounds.min(), center(trigger));

        let item = state.lock().unwrap().1;
        click(&mut ctx, MouseButton::Left, center(item));
        assert!(state.lock().unwrap().2);
        assert_eq!(ctx.stack.len(), 1);
    }

    #[test]
    fn combo_opens_below_its_header_and_closes_on_outside_click() {
        let state = Arc::new(Mutex::new((0usize, Rect::default())));
        let out = state.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(25).dynamic(1);
            let mut s = out.lock().unwrap();
            s.0 = w.combo_simple(&["one", "two", "three"], s.0, 20);
            s.1 = w.last_widget_bounds();
        });
        ctx.frame(VIEW);
        let header = state.lock().unwrap().1;
        click(&mut ctx, MouseButton::Left, center(header));
        assert_eq!(ctx.stack.len(), 2);
        let drop_down = ctx.window(ctx.stack[1]);
        assert!(drop_down.flags.contains(WindowFlags::NONBLOCK));
        assert_eq!(drop_down.bounds.y, header.y + header.h - 1);
        assert_eq!(drop_down.header, header);

        click(&mut ctx, MouseButton::Left, Point::new(320, 400));
        assert_eq!(ctx.stack.len(), 1);
        assert_eq!(state.lock().unwrap().0, 0);
    }

    #[test]
    fn menu_runs_its_own_update_and_fits_its_items() {
        let state = Arc::new(Mutex::new((Rect::default(), 0)));
        let out = state.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.menubar_begin();
            w.row(25).static_widths(&[60]);
            let runs = out.clone();
            w.menu(Label::text("File"), 0, move |m| {
                m.row(20).dynamic(1);
                m.menu_item(Label::text_aligned("Open", Align::LC));
                runs.lock().unwrap().1 += 1;
            });
            out.lock().unwrap().0 = w.last_widget_bounds();
            w.menubar_end();
        });
        ctx.frame(VIEW);
        let header = state.lock().unwrap().0;
        click(&mut ctx, MouseButton::Left, center(header));
        assert_eq!(ctx.stack.len(), 2);
        assert!(state.lock().unwrap().1 >= 1);
        ctx.frame(VIEW);
        let menu = ctx.window(ctx.stack[1]);
        assert!(menu.flags.contains(WindowFlags::MENU | WindowFlags::HDYNAMIC));
        assert_eq!((menu.bounds.x, menu.bounds.y), (header.x, header.y + header.h));
        assert!(menu.bounds.w < 200);
    }

    #[test]
    fn nonmodal_popups_at_the_origin_cascade() {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        ctx.frame(VIEW);
        let a = ctx.popup_open("a", WindowFlags::NONMODAL, Rect::new(0, 0, 100, 100), false, |_| {});
        let b = ctx.popup_open("b", WindowFlags::NONMODAL, Rect::new(0, 0, 100, 100), false, |_| {});
        let step = font_height(&ctx.style.font) + 2 * ctx.style.normal_window.header.padding.y;
        assert_eq!(ctx.window(a).bounds.min(), Point::new(0, 0));
        assert_eq!(ctx.window(b).bounds.min(), Point::new(step, step));
    }

    #[test]
    fn group_list_stops_below_the_visible_rows() {
        let visited = Arc::new(Mutex::new(Vec::new()));
        let out = visited.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(200).dynamic(1);
            let mut seen = Vec::new();
            {
                let mut list = w.group_list("rows", 1000, WindowFlags::BORDER);
                list.skip_to_visible(20);
                while let Some((i, row)) = list.next() {
                    row.row(20).dynamic(1);
                    row.label(&format!("row {}", i), Align::LC);
                    seen.push(i);
                }
            }
            w.row(20).dynamic(1);
            w.label("after", Align::LC);
            *out.lock().unwrap() = seen;
        });
        ctx.frame(VIEW);
        let seen = visited.lock().unwrap().clone();
        assert_eq!(seen[0], 0);
        assert!(seen.len() > 3 && seen.len() < 20);
        assert!(texts(&ctx).iter().any(|(t, _)| t == "after"));
    }
}

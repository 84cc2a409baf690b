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
//! The per-frame driver.
//!
//! A [`Context`] owns every window, the docking tree, the style and the input
//! snapshot. Each [`Context::frame`] drains the queued events, runs the update
//! procedures of the root window, the docked windows and the floating windows in
//! stacking order (twice at most, when the first pass asks for a rerun), concatenates
//! the per-window command buffers and reports whether the result differs from the
//! previous frame.

use std::any::Any;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::clipboard::{default_clipboard, Clipboard};
use crate::command::{Command, CommandBuffer};
use crate::dock::{DockNode, DockPolicy};
use crate::input::{Input, MouseButton};
use crate::master::Event;
use crate::rect::{Point, Rect, NULL_RECT};
use crate::style::Style;
use crate::text::TextCache;
use crate::window::{WinId, Window, WindowData, WindowFlags};

/// Arena slot of the root window.
pub(crate) const ROOT: WinId = WinId(0);

/// Title given to tooltip windows; they live for a single frame.
pub(crate) const TOOLTIP_TITLE: &str = "__##Tooltip##__";

/// Borrowed pieces of the context a widget needs while its window is populated.
pub(crate) struct Parts<'a> {
    pub win: &'a mut WindowData,
    pub text: &'a mut TextCache,
    pub style: &'a Style,
    pub input: &'a Input,
    pub clipboard: &'a mut dyn Clipboard,
    pub activate_editor: Option<&'a str>,
}

fn slot(windows: &[Option<WindowData>], id: WinId) -> Option<&WindowData> { windows.get(id.0).and_then(Option::as_ref) }

fn slot_mut(windows: &mut [Option<WindowData>], id: WinId) -> &mut WindowData {
    match windows.get_mut(id.0).and_then(Option::as_mut) {
        Some(w) => w,
        None => panic!("stale window handle {:?}", id),
    }
}

/// Everything the toolkit keeps between frames.
pub struct Context {
    pub(crate) style: Style,
    pub(crate) text: TextCache,
    pub(crate) input: Input,
    pub(crate) blank: Input,
    /// Set by anything that invalidates the layout of the current pass.
    pub(crate) trash: bool,
    pub(crate) scroll_focus: i32,
    pub(crate) docked_focus: i32,
    pub(crate) float_focus: i32,
    pub(crate) windows: Vec<Option<WindowData>>,
    free: Vec<usize>,
    /// Floating windows bottom to top; the root is always first.
    pub(crate) stack: Vec<WinId>,
    /// Position of the update loop inside `stack`.
    cursor: usize,
    pub(crate) dock: DockNode,
    pub(crate) docked_cnt: i32,
    pub(crate) dock_policy: DockPolicy,
    changed: Arc<AtomicI32>,
    pub(crate) activate_editor: Option<String>,
    cmds: Vec<Command>,
    prev_cmds: Vec<Command>,
    pub(crate) final_cmds: CommandBuffer,
    pub(crate) autopos: Point,
    pub(crate) clipboard: Box<dyn Clipboard>,
    events: VecDeque<Event>,
    text_buffer: String,
}

impl Context {
    /// Creates a context whose root window is populated by `f` every frame.
    pub fn new(flags: WindowFlags, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> Self {
        let mut root = WindowData::new("");
        root.flags = flags | WindowFlags::NONMODAL;
        root.update_fn = Some(Box::new(f));
        let mut input = Input::default();
        input.mouse.valid = true;
        Self {
            style: Style::default(),
            text: TextCache::default(),
            input,
            blank: Input::blank(),
            trash: false,
            scroll_focus: 0,
            docked_focus: 0,
            float_focus: 0,
            windows: vec![Some(root)],
            free: Vec::new(),
            stack: vec![ROOT],
            cursor: 0,
            dock: DockNode::default(),
            docked_cnt: 0,
            dock_policy: DockPolicy::default(),
            changed: Arc::new(AtomicI32::new(2)),
            activate_editor: None,
            cmds: Vec::new(),
            prev_cmds: Vec::new(),
            final_cmds: CommandBuffer::default(),
            autopos: Point::default(),
            clipboard: default_clipboard(),
            events: VecDeque::new(),
            text_buffer: String::new(),
        }
    }

    pub(crate) fn window(&self, id: WinId) -> &WindowData {
        match slot(&self.windows, id) {
            Some(w) => w,
            None => panic!("stale window handle {:?}", id),
        }
    }

    pub(crate) fn window_mut(&mut self, id: WinId) -> &mut WindowData { slot_mut(&mut self.windows, id) }

    pub(crate) fn window_and_style(&mut self, id: WinId) -> (&mut WindowData, &Style) { (slot_mut(&mut self.windows, id), &self.style) }

    /// Stores a new window in the arena, reusing a freed slot when there is one.
    pub(crate) fn alloc(&mut self, win: WindowData) -> WinId {
        match self.free.pop() {
            Some(i) => {
                self.windows[i] = Some(win);
                WinId(i)
            }
            None => {
                self.windows.push(Some(win));
                WinId(self.windows.len() - 1)
            }
        }
    }

    pub(crate) fn is_toplevel(&self, win: &WindowData) -> bool {
        !win.moving && ((self.docked_focus != 0 && win.idx == self.docked_focus) || win.idx == self.float_focus)
    }

    /// Input as seen by a window: the live snapshot clipped to the window body, or a blank one.
    pub(crate) fn routed_input(&mut self, id: WinId, live: bool) -> &Input {
        if !live {
            return &self.blank;
        }
        self.input.mouse.clip = self.window(id).cmds.clip;
        &self.input
    }

    pub(crate) fn parts(&mut self, id: WinId, live: bool) -> Parts<'_> {
        let win = slot_mut(&mut self.windows, id);
        let input = if live {
            self.input.mouse.clip = win.cmds.clip;
            &self.input
        } else {
            &self.blank
        };
        Parts {
            win,
            text: &mut self.text,
            style: &self.style,
            input,
            clipboard: self.clipboard.as_mut(),
            activate_editor: self.activate_editor.as_deref(),
        }
    }

    /// Multiplies an unscaled length by the style scaling.
    pub fn scale(&self, x: i32) -> i32 { (x as f64 * self.style.scaling) as i32 }

    /// Current style.
    pub fn style(&self) -> &Style { &self.style }

    /// Replaces the style and forces a redraw.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.invalidate();
        self.changed();
    }

    /// Input snapshot of the frame being built.
    pub fn input(&self) -> &Input { &self.input }

    /// Replaces the clipboard used by editable widgets.
    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) { self.clipboard = clipboard }

    /// Chooses whether a drop in the middle of an occupied dock leaf swaps windows.
    pub fn set_dock_policy(&mut self, policy: DockPolicy) { self.dock_policy = policy }

    /// Bounds the number of entries of the text width cache.
    pub fn set_width_cache_capacity(&mut self, capacity: usize) { self.text.set_capacity(capacity) }

    /// Commands produced by the last frame.
    pub fn commands(&self) -> &[Command] { &self.cmds }

    /// Forgets the previous frame so that the next one is reported as changed.
    pub fn invalidate(&mut self) { self.prev_cmds.clear() }

    /// Asks for at least two more frames.
    pub fn changed(&self) { self.changed.fetch_max(2, Ordering::SeqCst); }

    /// Shared counter of pending frames; it can be read without holding the context.
    pub fn changed_counter(&self) -> Arc<AtomicI32> { self.changed.clone() }

    /// Consumes one pending frame request, returning `true` if there was one.
    pub(crate) fn take_change(&self) -> bool {
        self.changed.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| if c > 0 { Some(c - 1) } else { None }).is_ok()
    }

    pub(crate) fn bump_changed(&self) { self.changed.fetch_add(1, Ordering::SeqCst); }

    /// Puts the property editor called `name` into edit mode on the next frame.
    pub fn activate_editor(&mut self, name: &str) {
        self.activate_editor = Some(name.to_string());
        self.changed();
    }

    /// Queues an input event for the next frame.
    pub fn handle_event(&mut self, e: Event) {
        self.events.push_back(e);
        self.changed();
    }

    fn process_event(&mut self, e: Event) {
        let mouse = &mut self.input.mouse;
        match e {
            Event::MouseMove(p) => mouse.pos = p,
            Event::MouseButton { button, down, pos } => {
                mouse.pos = pos;
                let b = &mut mouse.buttons[button.index()];
                if b.down == down {
                    return;
                }
                if down {
                    b.clicked_pos = pos;
                }
                b.down = down;
                b.clicked = true;
            }
            Event::Wheel(d) => mouse.scroll_delta += d.signum(),
            Event::Key(k) => self.input.keyboard.process_key_event(k, &mut self.text_buffer),
            Event::Focus(focused) => mouse.valid = focused,
            Event::Resize(_) | Event::Close | Event::Expose => {}
        }
    }

    /// Runs one frame over `viewport`; returns `true` if the command list changed.
    pub fn frame(&mut self, viewport: Rect) -> bool {
        while let Some(e) = self.events.pop_front() {
            self.process_event(e);
        }
        let mouse = &mut self.input.mouse;
        mouse.delta = mouse.pos - mouse.prev;
        mouse.clip = NULL_RECT;
        self.input.keyboard.text = std::mem::take(&mut self.text_buffer);
        self.window_mut(ROOT).bounds = viewport;

        self.update();
        self.collect_commands();
        self.reset();
        self.collect_garbage();

        let changed = self.cmds != self.prev_cmds;
        if changed {
            self.prev_cmds.clone_from(&self.cmds);
        } else {
            log::trace!("frame unchanged ({} commands), redraw skipped", self.cmds.len());
        }
        changed
    }

    fn begin_pass(&mut self) {
        let ids: Vec<WinId> = self.stack.iter().copied().chain(self.dock.windows()).collect();
        for id in ids {
            let w = self.window_mut(id);
            w.begin_frame();
            w.began = false;
        }
        self.final_cmds.reset();
        self.trash = false;
        self.panel_begin(ROOT);
    }

    fn update(&mut self) {
        for pass in 0..2 {
            self.begin_pass();
            self.restack();
            self.find_focus();
            self.cursor = 0;
            while self.cursor < self.stack.len() {
                let i = self.cursor;
                let id = self.stack[i];
                let w = self.window(id);
                // a window undocked during this pass was already updated
                if i == 0 || !(w.began && w.update_fn.is_some()) {
                    self.update_window(id);
                }
                if i == 0 {
                    self.update_docked();
                }
                self.cursor += 1;
            }
            self.panel_end(ROOT);
            if !self.trash {
                break;
            }
            if pass == 0 {
                log::trace!("layout trashed, running the frame again");
                self.reset();
            } else {
                log::trace!("layout trashed twice in one frame, ignored");
            }
        }
    }

    pub(crate) fn update_window(&mut self, id: WinId) {
        if let Some(mut f) = self.window_mut(id).update_fn.take() {
            self.special_panel_begin(id);
            f(&mut Window::new(self, id));
            if let Some(w) = self.windows.get_mut(id.0).and_then(Option::as_mut) {
                if w.update_fn.is_none() {
                    w.update_fn = Some(f);
                }
            }
        }
        let w = self.window_mut(id);
        if !w.began {
            w.close = true;
            return;
        }
        if w.title == TOOLTIP_TITLE {
            w.close = true;
        }
        if w.flags.contains(WindowFlags::POPUP) {
            self.panel_end(id);
        }
    }

    fn update_docked(&mut self) {
        let root = self.window(ROOT).bounds;
        let mut placed = Vec::new();
        self.dock.layout(root, self.style.scaling, &mut placed);
        for (id, bounds) in placed {
            if !self.dock.contains(id) {
                continue;
            }
            self.window_mut(id).bounds = bounds;
            self.update_window(id);
        }
        let windows = &self.windows;
        self.dock.prune(&|id| slot(windows, id).is_some_and(|w| !w.close && w.flags.contains(WindowFlags::DOCKED)));
    }

    /// Stack position of the window being updated; adjusted when a window leaves the stack.
    pub(crate) fn unstack(&mut self, id: WinId) {
        if let Some(pos) = self.stack.iter().position(|s| *s == id) {
            self.stack.remove(pos);
            if pos <= self.cursor {
                self.cursor = self.cursor.saturating_sub(1);
            }
        }
    }

    fn restack_click(&self, bounds: Rect) -> bool {
        let mouse = &self.input.mouse;
        mouse.valid
            && MouseButton::CLICK_ORDER.iter().any(|b| {
                let btn = mouse.button(*b);
                btn.clicked && btn.down && bounds.contains(btn.clicked_pos)
            })
    }

    fn restack(&mut self) {
        if !MouseButton::CLICK_ORDER.iter().any(|b| self.input.mouse.pressed(*b)) {
            return;
        }
        self.docked_focus = 0;
        let top = self.stack.iter().rposition(|id| !self.window(*id).flags.contains(WindowFlags::TOOLTIP));
        let Some(top) = top else { return };
        if !self.window(self.stack[top]).flags.contains(WindowFlags::NONMODAL) {
            return;
        }
        for i in (1..self.stack.len()).rev() {
            let w = self.window(self.stack[i]);
            if w.flags.contains(WindowFlags::TOOLTIP) {
                continue;
            }
            if self.restack_click(w.bounds) {
                if i != top {
                    let id = self.stack.remove(i);
                    self.stack.insert(top, id);
                    self.reindex();
                }
                return;
            }
        }
        for id in self.dock.windows() {
            let w = self.window(id);
            let (idx, hit) = (w.idx, w.flags.contains(WindowFlags::DOCKED) && self.restack_click(w.bounds));
            if hit {
                self.docked_focus = idx;
            }
        }
    }

    fn find_focus(&mut self) {
        self.float_focus = self.stack.iter().rposition(|id| !self.window(*id).flags.contains(WindowFlags::TOOLTIP)).unwrap_or(0) as i32;
        let pos = self.input.mouse.pos;
        self.scroll_focus = (1..self.stack.len()).rev().find(|i| self.window(self.stack[*i]).bounds.contains(pos)).unwrap_or(0) as i32;
        if self.scroll_focus == 0 {
            for id in self.dock.windows() {
                let w = self.window(id);
                let (idx, hit) = (w.idx, w.bounds.contains(pos));
                if hit {
                    self.scroll_focus = idx;
                }
            }
        }
    }

    pub(crate) fn reindex(&mut self) {
        for i in 0..self.stack.len() {
            let id = self.stack[i];
            self.window_mut(id).idx = i as i32;
        }
    }

    fn collect_commands(&mut self) {
        self.cmds.clear();
        let order: Vec<WinId> = std::iter::once(ROOT).chain(self.dock.windows()).chain(self.stack.iter().skip(1).copied()).collect();
        let Self { cmds, windows, final_cmds, .. } = self;
        for id in order {
            if let Some(w) = slot(windows, id) {
                cmds.extend_from_slice(&w.cmds.commands);
            }
        }
        cmds.extend_from_slice(&final_cmds.commands);
        if let Some(Command::RectFilled { color, .. }) = self.cmds.iter_mut().find(|c| matches!(c, Command::RectFilled { .. })) {
            color.a = 0xff;
        }
    }

    /// Drops closed windows and the per-frame part of the input.
    pub(crate) fn reset(&mut self) {
        let before = self.stack.len();
        let windows = &self.windows;
        self.stack.retain(|id| match slot(windows, *id) {
            Some(w) if w.close && *id != ROOT => {
                log::debug!("window {:?} closed", w.title);
                false
            }
            _ => true,
        });
        self.reindex();
        if before == 2 && self.stack.len() == 1 && self.input.mouse.valid {
            let mouse = &self.input.mouse;
            for id in self.dock.windows() {
                let w = self.window(id);
                let hit = MouseButton::CLICK_ORDER.iter().any(|b| mouse.button(*b).clicked && w.bounds.contains(mouse.button(*b).clicked_pos));
                let (idx, hit) = (w.idx, hit && w.flags.contains(WindowFlags::DOCKED));
                if hit {
                    self.docked_focus = idx;
                }
            }
        }
        self.activate_editor = None;
        let mouse = &mut self.input.mouse;
        for b in mouse.buttons.iter_mut() {
            b.clicked = false;
        }
        mouse.scroll_delta = 0;
        mouse.prev = mouse.pos;
        mouse.delta = Point::default();
        self.input.keyboard.keys.clear();
        self.input.keyboard.text.clear();
    }

    /// Frees the arena slots no longer reachable from the stack or the docking tree.
    fn collect_garbage(&mut self) {
        let mut live = vec![false; self.windows.len()];
        let mut pending: Vec<WinId> = self.stack.iter().copied().chain(self.dock.windows()).collect();
        while let Some(id) = pending.pop() {
            if live[id.0] {
                continue;
            }
            live[id.0] = true;
            if let Some(w) = slot(&self.windows, id) {
                pending.extend(w.groups.values().copied());
            }
        }
        for (i, entry) in self.windows.iter_mut().enumerate() {
            if !live[i] {
                if let Some(w) = entry.take() {
                    log::trace!("window {:?} released", w.title);
                    self.free.push(i);
                }
            }
        }
    }

    /// Visits the root, then every node of the docking tree, then the nonmodal
    /// floating windows. `split` is the size of split nodes, negative for side by side
    /// splits; leaves and floating windows report 0.
    pub fn walk(&self, mut f: impl FnMut(&str, Option<&(dyn Any + Send)>, bool, i32, Rect)) {
        let root = self.window(ROOT);
        f(&root.title, root.data.as_deref(), false, 0, root.bounds);
        self.dock.walk(&mut |node| match node {
            DockNode::Leaf(Some(id)) => {
                let w = self.window(*id);
                f(&w.title, w.data.as_deref(), true, 0, w.bounds)
            }
            DockNode::Leaf(None) => f("", None, true, 0, Rect::default()),
            DockNode::Split { kind, split, .. } => f("", None, true, kind.signed(split.size), Rect::default()),
        });
        for id in &self.stack[1..] {
            let w = self.window(*id);
            if w.flags.contains(WindowFlags::NONMODAL) {
                f(&w.title, w.data.as_deref(), false, 0, w.bounds);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::text::Align;

    const VIEW: Rect = Rect::new(0, 0, 640, 480);

    fn press(ctx: &mut Context, p: Point, down: bool) {
        ctx.handle_event(Event::MouseButton { button: MouseButton::Left, down, pos: p });
        ctx.frame(VIEW);
    }

    fn move_to(ctx: &mut Context, p: Point) {
        ctx.handle_event(Event::MouseMove(p));
        ctx.frame(VIEW);
    }

    fn titles(ctx: &Context) -> Vec<String> { ctx.stack.iter().map(|id| ctx.window(*id).title.clone()).collect() }

    #[test]
    fn idle_frame_is_not_redrawn() {
        let mut ctx = Context::new(WindowFlags::empty(), |w| {
            w.row(30).dynamic(1);
            w.button_text("Click");
        });
        assert!(ctx.frame(VIEW));
        let first = ctx.commands().to_vec();
        assert!(!ctx.frame(VIEW));
        assert!(!ctx.frame(VIEW));
        assert_eq!(ctx.commands(), &first[..]);
    }

    #[test]
    fn button_fires_once_on_release() {
        let clicks = Arc::new(Mutex::new((0, Rect::default())));
        let out = clicks.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(30).dynamic(1);
            let fired = w.button_text("Click");
            let mut c = out.lock().unwrap();
            if fired {
                c.0 += 1;
            }
            c.1 = w.last_widget_bounds();
        });
        move_to(&mut ctx, Point::new(10, 10));
        let target = Point::new(100, 20);
        assert!(clicks.lock().unwrap().1.contains(target));
        move_to(&mut ctx, target);
        press(&mut ctx, target, true);
        assert_eq!(clicks.lock().unwrap().0, 0);
        press(&mut ctx, target, false);
        assert_eq!(clicks.lock().unwrap().0, 1);
        ctx.frame(VIEW);
        assert_eq!(clicks.lock().unwrap().0, 1);

        let fills = ctx.commands().iter().filter(|c| matches!(c, Command::RectFilled { .. })).count();
        let texts: Vec<&str> = ctx
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, 3);
        assert_eq!(texts, vec!["Click"]);
    }

    #[test]
    fn checkbox_toggle_only_adds_the_cursor() {
        let value = Arc::new(Mutex::new((false, Rect::default())));
        let out = value.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(30).dynamic(1);
            let mut v = out.lock().unwrap();
            let mut checked = v.0;
            w.checkbox_text("x", &mut checked);
            *v = (checked, w.last_widget_bounds());
        });
        let away = Point::new(600, 400);
        move_to(&mut ctx, away);
        ctx.frame(VIEW);
        let before = ctx.commands().to_vec();

        let r = value.lock().unwrap().1;
        let at = Point::new(r.x + r.w / 2, r.y + r.h / 2);
        move_to(&mut ctx, at);
        press(&mut ctx, at, true);
        press(&mut ctx, at, false);
        assert!(value.lock().unwrap().0);
        move_to(&mut ctx, away);
        ctx.frame(VIEW);
        assert!(value.lock().unwrap().0);

        let after = ctx.commands().to_vec();
        assert_eq!(after.len(), before.len() + 1);
        let extra = (0..after.len()).find(|i| before.get(*i) != Some(&after[*i])).unwrap();
        assert!(matches!(after[extra], Command::RectFilled { .. }));
        let mut trimmed = after.clone();
        trimmed.remove(extra);
        assert_eq!(trimmed, before);
    }

    #[test]
    fn wheel_scrolls_the_group_under_the_pointer() {
        let seen = Arc::new(Mutex::new(Rect::default()));
        let out = seen.clone();
        let mut ctx = Context::new(WindowFlags::empty(), move |w| {
            w.row(200).dynamic(1);
            if let Some(mut g) = w.group_begin("list", WindowFlags::BORDER) {
                g.row(20).dynamic(1);
                for i in 0..50 {
                    g.label(&format!("row {}", i), Align::LC);
                }
                *out.lock().unwrap() = g.data().layout.clip;
                g.group_end();
            }
        });
        move_to(&mut ctx, Point::new(100, 100));
        let group = ctx.window(ROOT).groups["list"];
        assert_eq!(ctx.window(group).scrollbar.y, 0);
        for _ in 0..3 {
            ctx.handle_event(Event::Wheel(-1));
        }
        ctx.frame(VIEW);
        let clip = *seen.lock().unwrap();
        let step = clip.h as f64 * 0.10;
        let offset = ctx.window(group).scrollbar.y;
        assert_eq!(offset, (step * 3.0) as i32);
        assert!(offset <= 800);
        assert_eq!(ctx.input().mouse.scroll_delta, 0);
    }

    #[test]
    fn click_raises_a_nonmodal_window() {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        let body = |w: &mut Window<'_>| {
            w.row(20).dynamic(1);
            w.label("body", Align::LC);
        };
        ctx.popup_open("a", WindowFlags::NONMODAL, Rect::new(10, 10, 100, 100), false, body);
        ctx.popup_open("b", WindowFlags::NONMODAL, Rect::new(60, 60, 100, 100), false, body);
        ctx.frame(VIEW);
        assert_eq!(titles(&ctx), vec!["", "a", "b"]);
        move_to(&mut ctx, Point::new(20, 20));
        press(&mut ctx, Point::new(20, 20), true);
        assert_eq!(titles(&ctx), vec!["", "b", "a"]);
        assert_eq!(ctx.float_focus, 2);
    }

    #[test]
    fn closed_windows_leave_the_arena() {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        ctx.popup_open("once", WindowFlags::empty(), Rect::new(10, 10, 100, 100), false, |w| w.close());
        ctx.frame(VIEW);
        assert_eq!(titles(&ctx), vec![""]);
        assert_eq!(ctx.windows.iter().filter(|w| w.is_some()).count(), 1);
        ctx.popup_open("again", WindowFlags::empty(), Rect::new(10, 10, 100, 100), false, |_| {});
        assert_eq!(ctx.windows.len(), 2);
    }

    #[test]
    fn changed_counter_is_consumed() {
        let ctx = Context::new(WindowFlags::empty(), |_| {});
        assert!(ctx.take_change());
        assert!(ctx.take_change());
        assert!(!ctx.take_change());
        ctx.changed();
        assert_eq!(ctx.changed_counter().load(Ordering::SeqCst), 2);
    }
}

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
//! Windows: the arena record every window lives in and the handle update
//! procedures receive.
//!
//! A [`Window`] is a short-lived mutable view over one window of a [`Context`]; it is
//! what update procedures and inline popups work with. The window data itself stays
//! in the context arena and is addressed by [`WinId`].

use std::any::Any;
use std::collections::HashMap;

use bitflags::*;

use crate::command::CommandBuffer;
use crate::context::Context;
use crate::editor::PropertyEditor;
use crate::input::{Input, KeyboardInput};
use crate::layout::{FitSlot, Panel};
use crate::rect::{Point, Rect};
use crate::style::{Style, WindowStyle};
use crate::widgets::WidgetBuffer;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    /// Window option set. The lowercase-documented tail of the set is maintained by
    /// the toolkit itself and is exposed read-only through [`Window::flags`].
    pub struct WindowFlags : u32 {
        /// Draw a border around the window.
        const BORDER = 1 << 0;
        /// Draw a line between the title bar and the body.
        const BORDER_HEADER = 1 << 1;
        /// The title bar can be dragged.
        const MOVABLE = 1 << 2;
        /// A scaler grip is drawn in the bottom right corner.
        const SCALABLE = 1 << 3;
        /// A close button is drawn in the title bar.
        const CLOSABLE = 1 << 4;
        /// The window height follows its content.
        const DYNAMIC = 1 << 5;
        /// No scrollbars at all.
        const NO_SCROLLBAR = 1 << 6;
        /// No horizontal scrollbar.
        const NO_HSCROLLBAR = 1 << 7;
        /// Draw a title bar.
        const TITLE = 1 << 8;
        /// A contextual menu opened over another one takes its place.
        const CONTEXTUAL_REPLACE = 1 << 9;
        /// Other windows can be raised above this one.
        const NONMODAL = 1 << 10;

        /// sub window
        const SUB = 1 << 11;
        /// group inside a parent window
        const GROUP = 1 << 12;
        /// popup window
        const POPUP = 1 << 13;
        /// popup closed by clicks outside of it
        const NONBLOCK = 1 << 14;
        /// contextual menu
        const CONTEXTUAL = 1 << 15;
        /// combo box drop down
        const COMBO = 1 << 16;
        /// menu drop down
        const MENU = 1 << 17;
        /// tooltip
        const TOOLTIP = 1 << 18;
        /// receives input
        const ENABLED = 1 << 19;
        /// width follows the widest menu item
        const HDYNAMIC = 1 << 20;
        /// lives in the docking tree
        const DOCKED = 1 << 21;

        /// Border, title, close button, movable and scalable.
        const DEFAULT = Self::BORDER.bits() | Self::MOVABLE.bits() | Self::SCALABLE.bits() | Self::CLOSABLE.bits() | Self::TITLE.bits();
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Index of a window in the context arena.
pub struct WinId(pub(crate) usize);

/// Procedure populating a window every frame.
pub type UpdateFn = Box<dyn FnMut(&mut Window<'_>) + Send>;

/// Persistent open/closed state of one collapsible section.
#[derive(Debug, Clone)]
pub(crate) struct TreeNode {
    pub open: bool,
    pub parent: Option<usize>,
    pub children: HashMap<String, usize>,
}

impl TreeNode {
    pub(crate) fn new(open: bool, parent: Option<usize>) -> Self { Self { open, parent, children: HashMap::new() } }
}

/// Width record of an auto-fitted column.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdjustCol {
    pub id: i32,
    pub face_id: u64,
    pub width: i32,
    pub first: bool,
}

/// Everything the toolkit remembers about a window between frames.
pub(crate) struct WindowData {
    pub title: String,
    /// Stack position; negative for docked windows, the parent's value for groups.
    pub idx: i32,
    pub flags: WindowFlags,
    pub bounds: Rect,
    pub scrollbar: Point,
    pub cmds: CommandBuffer,
    pub widgets: WidgetBuffer,
    pub layout: Panel,
    pub close: bool,
    pub first: bool,
    pub moving: bool,
    pub scaling: bool,
    /// Trigger rectangle of nonblocking popups.
    pub header: Rect,
    pub nodes: Vec<TreeNode>,
    pub cur_node: usize,
    pub parent: Option<WinId>,
    pub groups: HashMap<String, WinId>,
    pub update_fn: Option<UpdateFn>,
    pub using_sub: bool,
    pub began: bool,
    pub menu_item_width: i32,
    pub last_layout_cnt: i32,
    pub adjust: HashMap<i32, HashMap<i32, AdjustCol>>,
    pub undocked: Rect,
    pub editors: HashMap<String, PropertyEditor>,
    pub last_widget_bounds: Rect,
    pub data: Option<Box<dyn Any + Send>>,
}

impl WindowData {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            idx: 0,
            flags: WindowFlags::empty(),
            bounds: Rect::default(),
            scrollbar: Point::default(),
            cmds: CommandBuffer::default(),
            widgets: WidgetBuffer::default(),
            layout: Panel::default(),
            close: false,
            first: true,
            moving: false,
            scaling: false,
            header: Rect::default(),
            nodes: vec![TreeNode::new(false, None)],
            cur_node: 0,
            parent: None,
            groups: HashMap::new(),
            update_fn: None,
            using_sub: false,
            began: false,
            menu_item_width: 0,
            last_layout_cnt: 0,
            adjust: HashMap::new(),
            undocked: Rect::default(),
            editors: HashMap::new(),
            last_widget_bounds: Rect::default(),
            data: None,
        }
    }

    /// Per-frame reset performed before any window is updated.
    pub(crate) fn begin_frame(&mut self) {
        self.using_sub = false;
        self.cur_node = 0;
        self.close = false;
        self.widgets.reset();
        self.cmds.reset();
    }
}

/// Frame style of a window with the given flags.
pub(crate) fn window_style(style: &Style, flags: WindowFlags) -> &WindowStyle {
    if flags.contains(WindowFlags::COMBO) {
        &style.combo_window
    } else if flags.contains(WindowFlags::CONTEXTUAL) {
        &style.contextual_window
    } else if flags.contains(WindowFlags::MENU) {
        &style.menu_window
    } else if flags.contains(WindowFlags::GROUP) {
        &style.group_window
    } else if flags.contains(WindowFlags::TOOLTIP) {
        &style.tooltip_window
    } else {
        &style.normal_window
    }
}

/// Mutable view of one window, handed to update procedures.
pub struct Window<'a> {
    pub(crate) ctx: &'a mut Context,
    pub(crate) id: WinId,
}

impl<'a> Window<'a> {
    pub(crate) fn new(ctx: &'a mut Context, id: WinId) -> Self { Self { ctx, id } }

    pub(crate) fn data(&self) -> &WindowData { self.ctx.window(self.id) }

    pub(crate) fn data_mut(&mut self) -> &mut WindowData { self.ctx.window_mut(self.id) }

    /// Arena index of this window.
    pub fn id(&self) -> WinId { self.id }

    /// Title given when the window was opened.
    pub fn title(&self) -> &str { &self.data().title }

    /// Current flags, including the ones maintained by the toolkit.
    pub fn flags(&self) -> WindowFlags { self.data().flags }

    /// Outer bounds of the window.
    pub fn bounds(&self) -> Rect { self.data().bounds }

    /// Moves or resizes the window; takes effect on the next frame.
    pub fn set_bounds(&mut self, r: Rect) { self.data_mut().bounds = r }

    /// Scroll offsets of the window body.
    pub fn scrollbar(&self) -> Point { self.data().scrollbar }

    /// Sets the scroll offsets of the window body.
    pub fn set_scrollbar(&mut self, offset: Point) { self.data_mut().scrollbar = offset }

    /// Rectangle of the widget added last.
    pub fn last_widget_bounds(&self) -> Rect { self.data().last_widget_bounds }

    /// Slot for application data attached to the window.
    pub fn user_data(&mut self) -> &mut Option<Box<dyn Any + Send>> { &mut self.data_mut().data }

    /// Style of the context.
    pub fn style(&self) -> &Style { &self.ctx.style }

    /// Frame style used for this window.
    pub fn window_style(&self) -> &WindowStyle { window_style(&self.ctx.style, self.data().flags) }

    /// Command buffer of the window, for custom drawing.
    pub fn commands(&mut self) -> &mut CommandBuffer { &mut self.data_mut().cmds }

    /// Returns `true` if this window currently receives pointer input.
    pub fn toplevel(&self) -> bool { self.ctx.is_toplevel(self.data()) }

    /// Input snapshot as seen by this window: empty unless the window is toplevel.
    pub fn input(&mut self) -> &Input {
        let live = self.toplevel();
        self.ctx.routed_input(self.id, live)
    }

    /// Input for a widget allocated with validity `valid`; empty when the widget is clipped away or the window is disabled.
    pub fn input_maybe(&mut self, valid: bool) -> &Input {
        let live = self.live(valid);
        self.ctx.routed_input(self.id, live)
    }

    /// Input for scrolling: real only when this window holds the scroll focus.
    pub fn scrollwheel_input(&mut self) -> &Input {
        let live = self.scroll_focused();
        self.ctx.routed_input(self.id, live)
    }

    /// Keyboard input if this window is toplevel and the pointer is over `bounds`.
    pub fn keyboard_on_hover(&self, bounds: Rect) -> KeyboardInput {
        if !self.toplevel() || !self.ctx.input.mouse.hovering_rect(bounds) {
            return KeyboardInput::default();
        }
        self.ctx.input.keyboard.clone()
    }

    /// Whether widgets allocated with validity `valid` receive input.
    pub(crate) fn live(&self, valid: bool) -> bool { valid && self.toplevel() && self.data().flags.contains(WindowFlags::ENABLED) }

    /// Whether this window is the one the scroll wheel applies to.
    pub(crate) fn scroll_focused(&self) -> bool { self.ctx.scroll_focus == self.data().idx }

    /// Asks the context to run at least one more frame.
    pub fn changed(&self) { self.ctx.changed() }

    /// Programmatically closes the window. The root window cannot be closed.
    pub fn close(&mut self) {
        if self.data().idx != 0 {
            log::debug!("closing window {:?}", self.data().title);
            self.data_mut().close = true;
        }
    }

    /// Allocates the next widget rectangle; `valid` is `false` when it is invisible.
    pub(crate) fn widget(&mut self) -> (bool, Rect, Option<FitSlot>) {
        let scaling = self.ctx.style.scaling;
        let (win, style) = self.ctx.window_and_style(self.id);
        let (bounds, fit) = win.alloc_space(window_style(style, win.flags), scaling);
        let valid = win.layout.clip.intersect(&bounds) && bounds.w > 0 && bounds.h > 0;
        (valid, bounds, fit)
    }

    /// Like [`Window::widget`], with the rectangle grown by the item padding so that the
    /// widget fills its column without visible gaps.
    pub(crate) fn widget_fitting(&mut self, item_padding: Point) -> (bool, Rect) {
        let (valid, mut bounds, _) = self.widget();
        let padding = self.window_style().padding;
        let row = &self.data().layout.row;
        if row.index == 1 {
            bounds.w += padding.x;
            bounds.x -= padding.x;
        } else {
            bounds.x -= item_padding.x;
        }
        if row.columns > 0 && row.index == row.columns {
            bounds.w += padding.x;
        } else {
            bounds.w += item_padding.x;
        }
        (valid, bounds)
    }

    /// Reports the natural width of the widget allocated into `slot`.
    pub(crate) fn fit(&mut self, slot: Option<FitSlot>, width: i32) {
        if let Some(slot) = slot {
            if self.data_mut().fit(slot, width) {
                self.ctx.trash = true;
            }
        }
    }
}

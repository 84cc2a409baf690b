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
//! Docking.
//!
//! Docked windows tile the root window. The tiling is a binary tree: leaves hold at
//! most one window, inner nodes split their rectangle in two with a [`ScalableSplit`].
//! Dropping a dragged window on the outer 3% of a leaf splits that leaf; dropping it in
//! the middle of an occupied leaf swaps the occupant out when the [`DockPolicy`]
//! allows it.

use crate::context::{Context, ROOT};
use crate::input::MouseButton;
use crate::rect::{clamp_int, Point, Rect};
use crate::style::WidgetStates;
use crate::text::font_height;
use crate::window::{WinId, Window, WindowFlags};

/// Minimum size, in unscaled pixels, of either side of a docking split.
pub const MIN_SPLIT_SIZE: i32 = 40;

const EDGE_FRACTION: f64 = 0.03;

/// A user resizable division of a rectangle in two.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalableSplit {
    /// Size of the first part, in unscaled pixels. Zero splits in the middle.
    pub size: i32,
    /// Neither part shrinks below this, in unscaled pixels.
    pub min_size: i32,
    /// Width of the grip between the two parts, in unscaled pixels.
    pub spacing: i32,
    last_size: i32,
    resize: bool,
}

impl ScalableSplit {
    /// A split whose first part is `size` pixels, with the docking minimum.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            min_size: MIN_SPLIT_SIZE,
            ..Self::default()
        }
    }

    fn divide(&mut self, extent: i32, scaling: f64) -> (i32, i32, i32) {
        if self.last_size == 0 {
            self.last_size = extent;
        }
        if self.last_size != extent {
            let diff = ((extent - self.last_size) as f64 / scaling) as i32;
            self.size += diff / 2;
            self.last_size = extent;
        }

        let gap = (self.spacing as f64 * scaling) as i32;
        let total = extent - gap;
        let (mut first, mut second);
        if self.size == 0 {
            first = total / 2;
            second = total - first;
            self.size = (first as f64 / scaling) as i32;
        } else {
            first = (self.size as f64 * scaling) as i32;
            second = total - first;
        }

        let min = (self.min_size as f64 * scaling) as i32;
        if second < min {
            second = min;
            first = total - second;
        }
        if first < min {
            first = min;
            second = total - first;
        }
        (first, gap, second)
    }

    /// Top part, grip and bottom part of `bounds`.
    pub(crate) fn rows(&mut self, bounds: Rect, scaling: f64) -> (Rect, Rect, Rect) {
        if bounds.w < 0 || bounds.h < 0 {
            return Default::default();
        }
        let (h0, gap, h1) = self.divide(bounds.h, scaling);
        let top = Rect { h: h0, ..bounds };
        let grip = Rect { y: bounds.y + h0, h: gap, ..bounds };
        let bottom = Rect { y: grip.y + gap, h: h1, ..bounds };
        (top, grip, bottom)
    }

    /// Left part, grip and right part of `bounds`.
    pub(crate) fn columns(&mut self, bounds: Rect, scaling: f64) -> (Rect, Rect, Rect) {
        if bounds.w < 0 || bounds.h < 0 {
            return Default::default();
        }
        let (w0, gap, w1) = self.divide(bounds.w, scaling);
        let left = Rect { w: w0, ..bounds };
        let grip = Rect { x: bounds.x + w0, w: gap, ..bounds };
        let right = Rect { x: grip.x + gap, w: w1, ..bounds };
        (left, grip, right)
    }

    /// Splits `bounds`, given in the coordinates of the current space row, into a top
    /// and a bottom part. The grip between them is allocated as a widget and dragging
    /// it moves the division.
    pub fn horizontal(&mut self, w: &mut Window<'_>, bounds: Rect) -> (Rect, Rect) {
        let scaling = w.style().scaling;
        let (top, grip, bottom) = self.rows(bounds, scaling);
        let delta = self.drag(w, grip).y;
        self.resize_by(delta, scaling);
        (top, bottom)
    }

    /// Side by side counterpart of [`ScalableSplit::horizontal`].
    pub fn vertical(&mut self, w: &mut Window<'_>, bounds: Rect) -> (Rect, Rect) {
        let scaling = w.style().scaling;
        let (left, grip, right) = self.columns(bounds, scaling);
        let delta = self.drag(w, grip).x;
        self.resize_by(delta, scaling);
        (left, right)
    }

    fn drag(&mut self, w: &mut Window<'_>, grip: Rect) -> Point {
        w.layout_space_push_scaled(grip);
        let (grip, _) = w.custom(WidgetStates::Inactive);
        let mouse = &w.input().mouse;
        if mouse.is_click_down_in_rect(MouseButton::Left, grip, true) {
            self.resize = true;
        }
        if !self.resize {
            return Point::default();
        }
        if !mouse.down(MouseButton::Left) {
            self.resize = false;
            return Point::default();
        }
        mouse.delta
    }

    fn resize_by(&mut self, delta: i32, scaling: f64) {
        if delta != 0 {
            self.size = (self.size + (delta as f64 / scaling) as i32).max(self.min_size);
        }
    }
}

/// Orientation of a docking split.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitKind {
    /// One part above the other.
    Horizontal,
    /// Parts side by side.
    Vertical,
}

impl SplitKind {
    /// Split size as reported by [`Context::walk`]: negative for side by side splits.
    pub fn signed(self, size: i32) -> i32 {
        match self {
            SplitKind::Horizontal => size,
            SplitKind::Vertical => -size,
        }
    }

    fn divide(self, split: &mut ScalableSplit, bounds: Rect, scaling: f64) -> (Rect, Rect, Rect) {
        match self {
            SplitKind::Horizontal => split.rows(bounds, scaling),
            SplitKind::Vertical => split.columns(bounds, scaling),
        }
    }
}

/// What a drop in the middle of an occupied leaf does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DockPolicy {
    /// Only the edges of a leaf accept drops.
    Edges,
    /// A drop in the middle replaces the occupant, which floats again.
    #[default]
    EdgesAndCenter,
}

/// Node of the docking tree.
#[derive(Debug)]
pub(crate) enum DockNode {
    Leaf(Option<WinId>),
    Split { kind: SplitKind, split: ScalableSplit, children: Box<[DockNode; 2]> },
}

impl Default for DockNode {
    fn default() -> Self { DockNode::Leaf(None) }
}

/// Outcome of a drop over the docking tree.
#[derive(Debug, PartialEq)]
pub(crate) struct DockHit {
    /// Area the dropped window would take.
    pub preview: Rect,
    /// The window is now in the tree.
    pub docked: bool,
    /// Previous occupant of the leaf, to be floated.
    pub displaced: Option<WinId>,
}

/// Top, bottom, left and right strips of `bounds`, each `f` of its extent.
fn edge_strips(bounds: Rect, f: f64) -> [Rect; 4] {
    let pw = (bounds.w as f64 * f) as i32;
    let ph = (bounds.h as f64 * f) as i32;
    [
        Rect { h: ph, ..bounds },
        Rect { y: bounds.y + bounds.h - ph, h: ph, ..bounds },
        Rect { w: pw, ..bounds },
        Rect { x: bounds.x + bounds.w - pw, w: pw, ..bounds },
    ]
}

impl DockNode {
    /// Assigns a rectangle to every docked window.
    pub(crate) fn layout(&mut self, bounds: Rect, scaling: f64, out: &mut Vec<(WinId, Rect)>) {
        match self {
            DockNode::Leaf(Some(id)) => out.push((*id, bounds)),
            DockNode::Leaf(None) => {}
            DockNode::Split { kind, split, children } => {
                let (b0, _, b1) = kind.divide(split, bounds, scaling);
                children[0].layout(b0, scaling, out);
                children[1].layout(b1, scaling, out);
            }
        }
    }

    /// Pre-order visit.
    pub(crate) fn walk(&self, f: &mut dyn FnMut(&DockNode)) {
        f(self);
        if let DockNode::Split { children, .. } = self {
            children[0].walk(f);
            children[1].walk(f);
        }
    }

    pub(crate) fn windows(&self) -> Vec<WinId> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let DockNode::Leaf(Some(id)) = node {
                out.push(*id);
            }
        });
        out
    }

    pub(crate) fn contains(&self, id: WinId) -> bool { self.windows().contains(&id) }

    /// Empties the leaves whose window fails `keep` and collapses splits left with
    /// an empty side.
    pub(crate) fn prune(&mut self, keep: &dyn Fn(WinId) -> bool) {
        match self {
            DockNode::Leaf(w) => {
                if w.is_some_and(|id| !keep(id)) {
                    *w = None;
                }
            }
            DockNode::Split { children, .. } => {
                children[0].prune(keep);
                children[1].prune(keep);
                if let Some(i) = children.iter().position(|c| matches!(c, DockNode::Leaf(None))) {
                    let survivor = std::mem::take(&mut children[1 - i]);
                    *self = survivor;
                }
            }
        }
    }

    pub(crate) fn remove(&mut self, id: WinId) { self.prune(&|w| w != id) }

    /// Applies a scaler drag of the docked window `id` to the split that owns the
    /// dragged edge. Returns the part of `delta` no split along the way consumed.
    pub(crate) fn scale(&mut self, id: WinId, delta: Point, scaling: f64) -> Point {
        if delta == Point::default() {
            return delta;
        }
        match self {
            DockNode::Leaf(w) if *w == Some(id) => delta,
            DockNode::Leaf(_) => Point::default(),
            DockNode::Split { kind, split, children } => {
                let mut d0 = children[0].scale(id, delta, scaling);
                let along = match kind {
                    SplitKind::Horizontal => &mut d0.y,
                    SplitKind::Vertical => &mut d0.x,
                };
                if *along != 0 {
                    split.size = (split.size + (*along as f64 / scaling) as i32).max(split.min_size);
                    *along = 0;
                }
                if d0 != Point::default() { d0 } else { children[1].scale(id, delta, scaling) }
            }
        }
    }

    /// Drops `win` at `pos`; with `None` only the preview is computed.
    pub(crate) fn dock(&mut self, win: Option<WinId>, pos: Point, bounds: Rect, scaling: f64, policy: DockPolicy) -> Option<DockHit> {
        let occupant = match self {
            DockNode::Leaf(w) => *w,
            DockNode::Split { kind, split, children } => {
                let (b0, _, b1) = kind.divide(split, bounds, scaling);
                return children[0].dock(win, pos, b0, scaling, policy).or_else(|| children[1].dock(win, pos, b1, scaling, policy));
            }
        };

        let Some(edge) = edge_strips(bounds, EDGE_FRACTION).iter().position(|r| r.contains(pos)) else {
            if policy != DockPolicy::EdgesAndCenter || occupant.is_none() || !bounds.contains(pos) {
                return None;
            }
            let displaced = if win.is_some() { std::mem::replace(self, DockNode::Leaf(win)) } else { DockNode::Leaf(None) };
            let displaced = match displaced {
                DockNode::Leaf(w) => w,
                DockNode::Split { .. } => None,
            };
            return Some(DockHit { preview: bounds, docked: win.is_some(), displaced });
        };

        let Some(old) = occupant else {
            if win.is_some() {
                *self = DockNode::Leaf(win);
            }
            return Some(DockHit { preview: bounds, docked: win.is_some(), displaced: None });
        };

        let halves = edge_strips(bounds, 0.5);
        if let Some(new) = win {
            let (kind, size, at) = if edge < 2 { (SplitKind::Horizontal, halves[0].h, edge) } else { (SplitKind::Vertical, halves[2].w, edge - 2) };
            let mut children = [DockNode::Leaf(Some(old)), DockNode::Leaf(Some(old))];
            children[at] = DockNode::Leaf(Some(new));
            *self = DockNode::Split {
                kind,
                split: ScalableSplit::new((size as f64 / scaling) as i32),
                children: Box::new(children),
            };
        }
        Some(DockHit { preview: halves[edge], docked: win.is_some(), displaced: None })
    }

    fn at_path(&mut self, path: &[usize]) -> Option<&mut DockNode> {
        match path.split_first() {
            None => Some(self),
            Some((i, rest)) => match self {
                DockNode::Split { children, .. } => children.get_mut(*i)?.at_path(rest),
                DockNode::Leaf(_) => None,
            },
        }
    }
}

impl Context {
    /// Moves a window from the floating stack into the docking tree bookkeeping.
    pub(crate) fn dock_window(&mut self, id: WinId) {
        self.docked_cnt -= 1;
        let idx = self.docked_cnt;
        let w = self.window_mut(id);
        w.undocked = w.bounds;
        w.flags |= WindowFlags::DOCKED;
        w.idx = idx;
        log::debug!("window {:?} docked", w.title);
        self.unstack(id);
        self.reindex();
    }

    /// Puts a window back on top of the floating stack with its pre-dock bounds.
    fn float_window(&mut self, id: WinId) {
        let root = self.window(ROOT).bounds;
        let fh = font_height(&self.style.font);
        let idx = self.stack.len() as i32;
        let w = self.window_mut(id);
        w.flags.remove(WindowFlags::DOCKED);
        w.bounds = w.undocked;
        w.bounds.x = clamp_int(0, w.bounds.x, root.x + root.w - fh);
        w.bounds.y = clamp_int(0, w.bounds.y, root.y + root.h - fh);
        w.idx = idx;
        self.stack.push(id);
    }

    /// Takes a docked window out of the tree; it floats again at its pre-dock bounds.
    pub(crate) fn undock(&mut self, id: WinId) {
        self.dock.remove(id);
        self.float_window(id);
        log::debug!("window {:?} undocked", self.window(id).title);
    }

    /// Handles the release of a dragged floating window at `pos`.
    pub(crate) fn dock_dragged(&mut self, id: WinId, pos: Point) {
        let root = self.window(ROOT).bounds;
        let (scaling, policy) = (self.style.scaling, self.dock_policy);
        let Some(hit) = self.dock.dock(Some(id), pos, root, scaling, policy) else { return };
        if hit.docked {
            self.dock_window(id);
        }
        if let Some(old) = hit.displaced {
            log::debug!("window {:?} displaced from the dock", self.window(old).title);
            self.float_window(old);
        }
    }

    /// Area a window released at `pos` would take, if any.
    pub(crate) fn dock_preview(&mut self, pos: Point) -> Option<Rect> {
        let root = self.window(ROOT).bounds;
        let (scaling, policy) = (self.style.scaling, self.dock_policy);
        self.dock.dock(None, pos, root, scaling, policy).map(|hit| hit.preview)
    }

    /// Closes every window but the root and empties the docking tree. The returned
    /// handle addresses the whole root area and is used to lay out a new tiling.
    pub fn reset_windows(&mut self) -> DockSplit {
        self.dock = DockNode::default();
        self.stack.truncate(1);
        self.docked_cnt = 0;
        log::debug!("windows reset");
        DockSplit { path: Vec::new() }
    }
}

/// Handle on a node of the docking tree while building a tiling with
/// [`Context::reset_windows`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DockSplit {
    path: Vec<usize>,
}

impl DockSplit {
    fn child(&self, i: usize) -> DockSplit {
        let mut path = self.path.clone();
        path.push(i);
        DockSplit { path }
    }

    /// Divides the node in two. `horizontal` puts the parts above each other; `size`
    /// is the extent of the first one in unscaled pixels.
    pub fn split(&self, ctx: &mut Context, horizontal: bool, size: i32) -> (DockSplit, DockSplit) {
        if let Some(node) = ctx.dock.at_path(&self.path) {
            let kind = if horizontal { SplitKind::Horizontal } else { SplitKind::Vertical };
            *node = DockNode::Split {
                kind,
                split: ScalableSplit::new(size),
                children: Box::new([DockNode::default(), DockNode::default()]),
            };
        }
        (self.child(0), self.child(1))
    }

    /// Opens a window and docks it in this node.
    pub fn open(&self, ctx: &mut Context, title: &str, flags: WindowFlags, rect: Rect, scale: bool, f: impl FnMut(&mut Window<'_>) + Send + 'static) {
        let id = ctx.popup_open(title, flags, rect, scale, f);
        match ctx.dock.at_path(&self.path) {
            Some(node) => *node = DockNode::Leaf(Some(id)),
            None => {
                log::warn!("dock node {:?} is gone, {:?} stays floating", self.path, title);
                return;
            }
        }
        ctx.dock_window(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Rect = Rect::new(0, 0, 640, 480);
    const FLOATING: Rect = Rect::new(100, 100, 200, 150);

    fn body(_: &mut Window<'_>) {}

    fn closing(w: &mut Window<'_>) { w.close() }

    fn flags() -> WindowFlags { WindowFlags::NONMODAL | WindowFlags::MOVABLE }

    fn empty() -> Context {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        ctx.frame(VIEW);
        ctx
    }

    #[test]
    fn split_divides_in_the_middle_by_default() {
        let mut s = ScalableSplit::default();
        let (top, grip, bottom) = s.rows(Rect::new(0, 0, 100, 101), 1.0);
        assert_eq!((top.h, grip.h, bottom.y, bottom.h), (50, 0, 50, 51));
        assert_eq!(s.size, 50);
    }

    #[test]
    fn split_follows_half_the_resize() {
        let mut s = ScalableSplit::new(100);
        s.columns(Rect::new(0, 0, 400, 10), 1.0);
        let (left, _, right) = s.columns(Rect::new(0, 0, 500, 10), 1.0);
        assert_eq!((left.w, right.x, right.w), (150, 150, 350));
    }

    #[test]
    fn split_respects_the_minimum() {
        let mut s = ScalableSplit::new(390);
        let (left, _, right) = s.columns(Rect::new(0, 0, 400, 10), 1.0);
        assert_eq!((left.w, right.w), (360, 40));
    }

    #[test]
    fn two_docked_windows_side_by_side() {
        let mut ctx = empty();
        let root = ctx.reset_windows();
        let (left, right) = root.split(&mut ctx, false, 100);
        left.open(&mut ctx, "A", flags(), FLOATING, false, body);
        right.open(&mut ctx, "B", flags(), FLOATING, false, body);
        ctx.frame(VIEW);

        let ids = ctx.dock.windows();
        assert_eq!(ids.len(), 2);
        assert_eq!(ctx.window(ids[0]).bounds, Rect::new(0, 0, 100, 480));
        assert_eq!(ctx.window(ids[1]).bounds, Rect::new(100, 0, 540, 480));
        assert_eq!(ctx.stack.len(), 1);

        let mut splits = Vec::new();
        ctx.walk(|title, _, docked, split, _| splits.push((title.to_string(), docked, split)));
        assert_eq!(
            splits,
            vec![("".to_string(), false, 0), ("".to_string(), true, -100), ("A".to_string(), true, 0), ("B".to_string(), true, 0)]
        );
    }

    #[test]
    fn dock_then_undock_restores_the_bounds() {
        let mut ctx = empty();
        let id = ctx.popup_open("w", flags(), FLOATING, false, body);
        ctx.frame(VIEW);

        ctx.dock_dragged(id, Point::new(5, 240));
        assert!(ctx.window(id).flags.contains(WindowFlags::DOCKED));
        ctx.frame(VIEW);
        assert_eq!(ctx.window(id).bounds, VIEW);
        assert!(ctx.window(id).idx < 0);

        ctx.undock(id);
        ctx.frame(VIEW);
        let w = ctx.window(id);
        assert_eq!(w.bounds, FLOATING);
        assert!(!w.flags.contains(WindowFlags::DOCKED));
        assert_eq!(ctx.stack, vec![ROOT, id]);
        assert!(ctx.dock.windows().is_empty());
    }

    #[test]
    fn edge_drop_splits_the_leaf() {
        let mut ctx = empty();
        let a = ctx.popup_open("a", flags(), FLOATING, false, body);
        let b = ctx.popup_open("b", flags(), FLOATING, false, body);
        ctx.frame(VIEW);
        ctx.dock_dragged(a, Point::new(5, 240));
        assert_eq!(ctx.dock_preview(Point::new(320, 5)), Some(Rect::new(0, 0, 640, 240)));
        ctx.dock_dragged(b, Point::new(320, 5));
        ctx.frame(VIEW);

        assert_eq!(ctx.dock.windows(), vec![b, a]);
        assert_eq!(ctx.window(b).bounds, Rect::new(0, 0, 640, 240));
        assert_eq!(ctx.window(a).bounds, Rect::new(0, 240, 640, 240));
    }

    #[test]
    fn center_drop_swaps_the_occupant() {
        let mut ctx = empty();
        let a = ctx.popup_open("a", flags(), FLOATING, false, body);
        let b = ctx.popup_open("b", flags(), Rect::new(10, 20, 100, 100), false, body);
        ctx.frame(VIEW);
        ctx.dock_dragged(a, Point::new(5, 240));
        ctx.dock_dragged(b, Point::new(320, 240));
        ctx.frame(VIEW);

        assert_eq!(ctx.dock.windows(), vec![b]);
        assert_eq!(ctx.stack, vec![ROOT, a]);
        assert_eq!(ctx.window(a).bounds, FLOATING);
        assert_eq!(ctx.window(b).bounds, VIEW);
    }

    #[test]
    fn center_drop_is_refused_with_edges_only() {
        let mut ctx = empty();
        ctx.set_dock_policy(DockPolicy::Edges);
        let a = ctx.popup_open("a", flags(), FLOATING, false, body);
        let b = ctx.popup_open("b", flags(), FLOATING, false, body);
        ctx.frame(VIEW);
        ctx.dock_dragged(a, Point::new(5, 240));
        assert_eq!(ctx.dock_preview(Point::new(320, 240)), None);
        ctx.dock_dragged(b, Point::new(320, 240));
        assert_eq!(ctx.dock.windows(), vec![a]);
        assert!(!ctx.window(b).flags.contains(WindowFlags::DOCKED));
    }

    #[test]
    fn closed_docked_window_collapses_its_split() {
        let mut ctx = empty();
        let root = ctx.reset_windows();
        let (left, right) = root.split(&mut ctx, false, 100);
        left.open(&mut ctx, "A", flags(), FLOATING, false, body);
        right.open(&mut ctx, "B", flags(), FLOATING, false, closing);
        ctx.frame(VIEW);
        let ids = ctx.dock.windows();
        assert_eq!(ids.len(), 1);
        assert!(matches!(ctx.dock, DockNode::Leaf(Some(_))));
        ctx.frame(VIEW);
        assert_eq!(ctx.window(ids[0]).bounds, VIEW);
    }

    #[test]
    fn scaling_a_docked_window_moves_its_split() {
        let mut ctx = empty();
        let root = ctx.reset_windows();
        let (left, right) = root.split(&mut ctx, false, 100);
        left.open(&mut ctx, "A", flags(), FLOATING, false, body);
        right.open(&mut ctx, "B", flags(), FLOATING, false, body);
        ctx.frame(VIEW);
        let ids = ctx.dock.windows();
        ctx.scale_window(ids[0], Point::new(30, 12));
        ctx.frame(VIEW);
        assert_eq!(ctx.window(ids[0]).bounds.w, 130);
        assert_eq!(ctx.window(ids[1]).bounds.x, 130);

        // the right window's grip has no split to drive
        ctx.scale_window(ids[1], Point::new(30, 0));
        ctx.frame(VIEW);
        assert_eq!(ctx.window(ids[0]).bounds.w, 130);
    }
}

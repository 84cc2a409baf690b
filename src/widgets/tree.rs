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
use crate::command::CommandBuffer;
use crate::layout::RowKind;
use crate::rect::{Point, Rect};
use crate::text::{font_height, widget_text, Align, TextWidget};
use crate::widgets::{button_behavior, do_button, draw, Label, WidgetCtx};
use crate::window::{window_style, TreeNode, Window};
use crate::color;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Look of a collapsible section header.
pub enum TreeType {
    /// Plain header with a triangle.
    #[default]
    Node,
    /// Header drawn as a filled tab on its own row.
    Tab,
}

impl<'a> Window<'a> {
    fn tree_header(&mut self, kind: TreeType, name: &str, initial_open: bool) -> (Rect, bool, bool) {
        if kind == TreeType::Tab {
            let (win, style) = self.ctx.window_and_style(self.id);
            let height = font_height(&style.font) + 2 * style.tab.padding.y;
            win.panel_layout(window_style(style, win.flags), height, 1, 0);
            let row = &mut win.layout.row;
            row.kind = RowKind::DynamicFixed;
            row.item_width = 0;
            row.item_ratio = 0.0;
            row.ratio.clear();
            row.item_offset = 0;
            row.filled = 0.0;
        }

        let (valid, header, _) = self.widget();
        let live = self.live(valid);
        let p = self.ctx.parts(self.id, live);
        let (win, style) = (&mut *p.win, p.style);

        let cur = win.cur_node;
        let node = match win.nodes[cur].children.get(name) {
            Some(&n) => n,
            None => {
                win.nodes.push(TreeNode::new(initial_open, Some(cur)));
                let n = win.nodes.len() - 1;
                win.nodes[cur].children.insert(name.to_string(), n);
                n
            }
        };

        let mut ws = win.widgets.prev_state(header);
        if button_behavior(&mut ws, header, p.input, false) {
            win.nodes[node].open = !win.nodes[node].open;
        }
        let open = win.nodes[node].open;

        let wstyle = window_style(style, win.flags);
        let fh = font_height(&style.font);
        let sym = Rect::new(header.x + wstyle.padding.x + style.tab.padding.x, header.y + style.tab.padding.y, fh, fh);

        let mut wc = WidgetCtx::new(&mut win.cmds, p.text, &style.font, &mut win.widgets);
        wc.add(ws, header);
        let label = draw::tree_node(&mut wc, &style.tab, wstyle, kind == TreeType::Tab, header, sym);
        let symbol = if open { style.tab.sym_minimize } else { style.tab.sym_maximize };
        let button = if kind == TreeType::Tab { &style.tab.tab_button } else { &style.tab.node_button };
        do_button(&mut wc, &Label::Symbol(symbol), sym, button, p.input, false);

        if open {
            let offset_x = win.scrollbar.x;
            let layout = &mut win.layout;
            layout.at_x = header.x + offset_x + style.tab.indent;
            layout.width = layout.width.max(2 * wstyle.padding.x);
            layout.width -= style.tab.indent + wstyle.padding.x;
            layout.row.tree_depth += 1;
            win.cur_node = node;
        }
        (label, valid, open)
    }

    /// Collapsible section titled `title`. Returns `true` when it is open; the caller
    /// then adds the section contents and closes it with [`Window::tree_pop`].
    pub fn tree_push(&mut self, kind: TreeType, title: &str, initial_open: bool) -> bool { self.tree_push_named(kind, title, title, initial_open) }

    /// Like [`Window::tree_push`], keying the persistent state by `name` instead of the
    /// title.
    pub fn tree_push_named(&mut self, kind: TreeType, name: &str, title: &str, initial_open: bool) -> bool {
        let (label, _, open) = self.tree_header(kind, name, initial_open);
        let p = self.ctx.parts(self.id, false);
        let background = match kind {
            TreeType::Tab => p.style.tab.background.color().unwrap_or(color(0, 0, 0, 0)),
            TreeType::Node => window_style(p.style, p.win.flags).background,
        };
        let text = TextWidget { padding: Point::new(0, 0), background, text: p.style.tab.text };
        widget_text(&mut p.win.cmds, p.text, label, title, &text, Align::LC, &p.style.font);
        open
    }

    /// Section header without a title. Returns the rectangle left for custom header
    /// content, the buffer to draw it into when visible and whether the section is open.
    pub fn tree_push_custom(&mut self, kind: TreeType, name: &str, initial_open: bool) -> (Rect, Option<&mut CommandBuffer>, bool) {
        let (label, valid, open) = self.tree_header(kind, name, initial_open);
        let out = if valid { Some(&mut self.data_mut().cmds) } else { None };
        (label, out, open)
    }

    fn tree_set_open(&mut self, open: bool, path: &[&str]) {
        let win = self.data_mut();
        let mut node = win.cur_node;
        for name in path {
            match win.nodes[node].children.get(*name) {
                Some(&n) => node = n,
                None => return,
            }
        }
        win.nodes[node].open = open;
    }

    /// Opens the section reached by following `path` from the current one.
    pub fn tree_open(&mut self, path: &[&str]) { self.tree_set_open(true, path) }

    /// Closes the section reached by following `path` from the current one.
    pub fn tree_close(&mut self, path: &[&str]) { self.tree_set_open(false, path) }

    /// Returns `true` if the child section `name` of the current one is open.
    pub fn tree_is_open(&self, name: &str) -> bool {
        let win = self.data();
        win.nodes[win.cur_node].children.get(name).is_some_and(|&n| win.nodes[n].open)
    }

    /// Closes the innermost open section.
    ///
    /// # Panics
    ///
    /// Panics if no section is open.
    pub fn tree_pop(&mut self) {
        let (win, style) = self.ctx.window_and_style(self.id);
        let step = window_style(style, win.flags).padding.x + style.tab.indent;
        win.layout.at_x -= step;
        win.layout.width += step;
        if win.layout.row.tree_depth == 0 {
            panic!("TreePop called without opened tree nodes");
        }
        win.cur_node = win.nodes[win.cur_node].parent.unwrap_or(0);
        win.layout.row.tree_depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::context::Context;
    use crate::window::WindowFlags;

    fn run(f: impl FnMut(&mut Window<'_>) + Send + 'static) -> Context {
        let mut ctx = Context::new(WindowFlags::empty(), f);
        ctx.frame(Rect::new(0, 0, 640, 480));
        ctx
    }

    #[test]
    fn push_and_pop_restore_the_cursor() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(move |w| {
            w.row(20).dynamic(1);
            let layout = |w: &Window<'_>| (w.data().layout.at_x, w.data().layout.width, w.data().layout.row.tree_depth);
            let before = layout(w);
            let mut inner = None;
            if w.tree_push(TreeType::Tab, "outer", true) {
                let tab = layout(w);
                if w.tree_push(TreeType::Node, "inner", true) {
                    inner = Some(layout(w));
                    w.label("leaf", Align::LC);
                    w.tree_pop();
                }
                let after_inner = layout(w);
                w.tree_pop();
                out.lock().unwrap().push((before, tab, inner, after_inner, layout(w)));
            }
        });
        let seen = seen.lock().unwrap();
        assert!(!seen.is_empty());
        for (before, tab, inner, after_inner, after) in seen.iter() {
            assert_eq!(before, after);
            assert_eq!(tab.2, 1);
            assert!(tab.0 > before.0 && tab.1 < before.1);
            let inner = inner.expect("inner node open");
            assert_eq!(inner.2, 2);
            assert!(inner.0 > tab.0);
            assert_eq!(after_inner, tab);
        }
    }

    #[test]
    fn closed_sections_report_closed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = seen.clone();
        run(move |w| {
            w.row(20).dynamic(1);
            let open = w.tree_push(TreeType::Node, "closed", false);
            out.lock().unwrap().push((open, w.tree_is_open("closed"), w.data().layout.row.tree_depth));
            w.tree_open(&["closed"]);
            let reopened = w.tree_is_open("closed");
            w.tree_close(&["closed"]);
            out.lock().unwrap().push((reopened, w.tree_is_open("closed"), 0));
        });
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], (false, false, 0));
        assert_eq!(seen[1], (true, false, 0));
    }

    #[test]
    #[should_panic(expected = "TreePop called without opened tree nodes")]
    fn unbalanced_pop_panics() {
        run(|w| {
            w.row(20).dynamic(1);
            w.tree_pop();
        });
    }

    #[test]
    #[should_panic(expected = "Some TreePush not closed by TreePop")]
    fn unclosed_push_panics() {
        run(|w| {
            w.row(20).dynamic(1);
            w.tree_push(TreeType::Node, "left open", true);
        });
    }
}

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
//! Window frames: the part of a window's update that runs before and after the
//! application fills it in. `panel_begin` lays out the title bar and the body clip,
//! `panel_end` closes the body with scrollbars, the scaler grip and the borders.

use crate::color;
use crate::context::{Context, ROOT};
use crate::input::{Input, MouseButton};
use crate::rect::{clamp_int, shrink_rect, unify, Point, Rect, NULL_RECT};
use crate::style::{HeaderAlign, WidgetStates};
use crate::text::font_height;
use crate::widgets::draw::{window_header, ScalerAndBorders, WindowHeader};
use crate::widgets::{do_button, do_scrollbarh, do_scrollbarv, Label, WidgetCtx, Wheel};
use crate::window::{window_style, WinId, Window, WindowData, WindowFlags};

impl Context {
    pub(crate) fn panel_begin(&mut self, id: WinId) {
        if self.window(id).moving {
            let (pos, delta) = (self.input.mouse.pos, self.input.mouse.delta);
            if !self.input.mouse.down(MouseButton::Left) {
                if !self.window(id).flags.contains(WindowFlags::DOCKED) {
                    self.dock_dragged(id, pos);
                }
                self.window_mut(id).moving = false;
            } else {
                self.move_window(id, delta, pos);
            }
        }

        let toplevel = self.is_toplevel(self.window(id));
        self.input.mouse.clip = NULL_RECT;
        let Context { windows, style, text, input, blank, .. } = self;
        let input: &Input = if toplevel { &*input } else { &*blank };
        let win = match windows.get_mut(id.0).and_then(Option::as_mut) {
            Some(w) => w,
            None => return,
        };
        let ws = window_style(style, win.flags);
        let face = &style.font;
        let (padding, spacing) = (ws.padding, ws.spacing);
        let flags = win.flags;

        win.using_sub = false;
        win.last_layout_cnt = 0;
        for cols in win.adjust.values_mut() {
            for col in cols.values_mut() {
                col.first = false;
            }
        }

        let WindowData { layout, cmds, widgets, bounds, close, moving, title, idx, .. } = win;
        *layout = Default::default();
        layout.bounds = if flags.contains(WindowFlags::BORDER) { shrink_rect(*bounds, ws.border) } else { *bounds };
        layout.border = layout.bounds.x - bounds.x;
        layout.at_x = layout.bounds.x;
        layout.at_y = layout.bounds.y;
        layout.width = layout.bounds.w;
        layout.height = layout.bounds.h;
        layout.header_h = padding.y;
        layout.row.height = padding.y;

        let scrollbars = !flags.contains(WindowFlags::NO_SCROLLBAR) && !flags.contains(WindowFlags::NO_HSCROLLBAR);
        layout.footer_h = if !flags.contains(WindowFlags::NONBLOCK) && (scrollbars || flags.contains(WindowFlags::SCALABLE)) {
            ws.scaler_size.y + ws.footer_padding.y
        } else {
            0
        };
        if !flags.contains(WindowFlags::NO_SCROLLBAR) {
            layout.width = layout.bounds.w - ws.scrollbar_size.x;
        }
        layout.height = layout.bounds.h - (layout.header_h + padding.y) - layout.footer_h;

        let fh = font_height(face);
        let hs = &ws.header;
        let dynamic = flags.contains(WindowFlags::DYNAMIC);
        let mut close_button = Rect::default();
        if *idx != 0 && flags.contains(WindowFlags::TITLE) {
            let mut header = Rect::new(layout.bounds.x, layout.bounds.y, layout.bounds.w, 0);
            layout.header_h = fh + 2 * hs.padding.y + 2 * hs.label_padding.y;
            layout.row.height += layout.header_h;
            header.h = layout.header_h;
            layout.height = layout.bounds.h - (header.h + 2 * spacing.y) - layout.footer_h;

            let label = Rect::new(
                header.x + hs.padding.x + hs.label_padding.x,
                header.y + hs.label_padding.y,
                text.font_width(face, title.as_str()) + 2 * hs.spacing.x,
                fh + 2 * hs.label_padding.y,
            );
            let decoration = WindowHeader { header, label, hovered: input.mouse.hovering_rect(header), focused: toplevel, title: title.as_str() };
            widgets.add(WidgetStates::Inactive, layout.bounds);
            window_header(cmds, text, face, ws, layout.bounds, dynamic, layout.row.height, layout.header_h, Some(decoration));

            close_button.y = header.y + hs.padding.y;
            close_button.h = layout.header_h - 2 * hs.padding.y;
            close_button.w = close_button.h;
            if flags.contains(WindowFlags::CLOSABLE) {
                close_button.x = match hs.align {
                    HeaderAlign::Right => header.x + header.w - (close_button.w + hs.padding.x),
                    HeaderAlign::Left => header.x + hs.padding.x,
                };
                let mut wc = WidgetCtx::new(cmds, text, face, widgets);
                if do_button(&mut wc, &Label::Symbol(hs.close_symbol), close_button, &hs.close_button, input, false) {
                    log::debug!("window {:?} closed from its title bar", title);
                    *close = true;
                }
            }
        } else {
            widgets.add(WidgetStates::Inactive, layout.bounds);
            window_header(cmds, text, face, ws, layout.bounds, dynamic, layout.row.height, layout.header_h, None);
        }

        if flags.contains(WindowFlags::MOVABLE) && toplevel {
            let grip = Rect::new(bounds.x, bounds.y, bounds.w, fh + 2 * hs.padding.y + 2 * hs.label_padding.y);
            let mouse = &input.mouse;
            if mouse.is_click_down_in_rect(MouseButton::Left, grip, true) && !mouse.is_click_down_in_rect(MouseButton::Left, close_button, true) {
                *moving = true;
            }
        }

        let mut clip = if dynamic {
            Rect::new(layout.bounds.x, 0, layout.width, 0)
        } else {
            Rect::new(layout.bounds.x + padding.x, 0, layout.width - 2 * padding.x, 0)
        };
        clip.h = layout.bounds.h - (layout.footer_h + layout.header_h) - padding.y;
        clip.y = layout.bounds.y;
        if !flags.intersects(WindowFlags::COMBO | WindowFlags::MENU) {
            clip.y += layout.header_h;
        }
        layout.clip = unify(cmds.clip, clip);

        widgets.add(WidgetStates::Inactive, layout.bounds);
        cmds.push_scissor(layout.clip);
        cmds.clip.x = layout.bounds.x;
        cmds.clip.w = layout.width;
        if !flags.contains(WindowFlags::NO_SCROLLBAR) {
            cmds.clip.w += ws.scrollbar_size.x;
        }
        layout.row.kind = Default::default();
    }

    /// Frame preparation of windows with an update procedure: contextual flipping,
    /// width fitting, outside-click closing, and the panel of popups.
    pub(crate) fn special_panel_begin(&mut self, id: WinId) {
        let root_max = self.window(ROOT).bounds.max();
        let root_body = self.window(ROOT).layout.bounds;
        let mouse = &self.input.mouse;
        let (style, windows) = (&self.style, &mut self.windows);
        let Some(win) = windows.get_mut(id.0).and_then(Option::as_mut) else { return };
        win.began = true;
        let flags = win.flags;
        let body = |w: &WindowData| Rect { h: w.layout.height, ..w.bounds };

        if flags.contains(WindowFlags::CONTEXTUAL) {
            let prevbody = body(win);
            let header = win.header;
            let anchored = header.h <= 0 || header.w <= 0 || header.contains(prevbody.min());
            let outside = prevbody.max().x > root_max.x || prevbody.max().y > root_max.y;
            if anchored && outside && win.bounds.x - prevbody.w >= 0 && win.bounds.y - prevbody.h >= 0 {
                win.bounds.x -= prevbody.w;
                win.bounds.y -= prevbody.h;
            }
        }

        if flags.contains(WindowFlags::HDYNAMIC) && !win.first {
            let ws = window_style(style, flags);
            let uw = win.menu_item_width + 2 * ws.padding.x + 2 * ws.border;
            if uw < win.bounds.w {
                win.bounds.w = uw;
            }
        }

        if flags.contains(WindowFlags::COMBO | WindowFlags::DYNAMIC) {
            let mut prevbody = body(win);
            if prevbody.y + prevbody.h > root_max.y {
                prevbody.h = root_max.y - prevbody.y;
                win.bounds = prevbody;
                win.flags.remove(WindowFlags::COMBO);
            }
        }

        if flags.contains(WindowFlags::NONBLOCK) && !win.first {
            let prevbody = body(win);
            let in_panel = mouse.is_click_in_rect(MouseButton::Left, root_body);
            let in_body = mouse.is_click_in_rect(MouseButton::Left, prevbody);
            let in_header = mouse.is_click_in_rect(MouseButton::Left, win.header);
            if (!in_body && in_panel) || in_header {
                win.close = true;
            }
        }

        let popup = flags.contains(WindowFlags::POPUP);
        if popup {
            win.cmds.push_scissor(NULL_RECT);
        }
        let first = std::mem::replace(&mut win.first, false);
        if popup {
            self.panel_begin(id);
        }
        if first && flags.intersects(WindowFlags::CONTEXTUAL | WindowFlags::HDYNAMIC) {
            self.trash = true;
        }
    }

    pub(crate) fn panel_end(&mut self, id: WinId) {
        let toplevel = self.is_toplevel(self.window(id));
        if toplevel {
            self.input.mouse.clip = NULL_RECT;
        }
        let outclip = match self.window(id).parent {
            Some(parent) if self.window(id).flags.contains(WindowFlags::GROUP) => self.window(parent).cmds.clip,
            _ => NULL_RECT,
        };
        let focused = toplevel && self.scroll_focus == self.window(id).idx;
        let mut wheel = Wheel { delta: if focused { self.input.mouse.scroll_delta } else { 0 }, over: false };
        let mut scale_delta = None;

        {
            let Context { windows, style, text, input, blank, trash, .. } = &mut *self;
            let pointer = (input.mouse.valid, input.mouse.pos);
            let input: &Input = if toplevel { &*input } else { &*blank };
            let Some(win) = windows.get_mut(id.0).and_then(Option::as_mut) else { return };
            let ws = window_style(style, win.flags);
            let face = &style.font;
            let flags = win.flags;
            let (spacing, padding, sb_size, scaler_size) = (ws.spacing, ws.padding, ws.scrollbar_size, ws.scaler_size);
            let WindowData { layout, cmds, widgets, bounds, scrollbar, scaling, flags: win_flags, .. } = win;
            let bounds = *bounds;
            cmds.push_scissor(outclip);
            layout.at_y += layout.row.height;

            let mut footer = Rect::default();
            if flags.contains(WindowFlags::DYNAMIC) {
                layout.height = (layout.at_y - layout.bounds.y).min(layout.bounds.h);
                let fill_y = layout.at_y - spacing.y;
                cmds.fill_rect(Rect::new(bounds.x, fill_y, bounds.w, bounds.y + layout.height + spacing.y + padding.y - fill_y), 0, ws.background);

                if scrollbar.x == 0 || flags.contains(WindowFlags::NO_SCROLLBAR) {
                    footer = Rect::new(bounds.x, bounds.y + layout.height + spacing.y + padding.y, bounds.w + sb_size.x, 0);
                    layout.footer_h = 0;
                    if scrollbar.x == 0 && !flags.contains(WindowFlags::NO_SCROLLBAR) {
                        cmds.fill_rect(Rect::new(layout.bounds.x + layout.width, layout.clip.y, sb_size.x, layout.height), 0, ws.background);
                    }
                } else {
                    footer = Rect::new(bounds.x, bounds.y + layout.height, bounds.w + sb_size.x, layout.footer_h);
                    if !flags.intersects(WindowFlags::COMBO | WindowFlags::MENU | WindowFlags::CONTEXTUAL) {
                        footer.y += layout.footer_h;
                    }
                    cmds.fill_rect(footer, 0, ws.background);
                    if !flags.intersects(WindowFlags::COMBO | WindowFlags::MENU) {
                        cmds.fill_rect(Rect::new(layout.bounds.x, bounds.y + layout.height, layout.bounds.w, layout.row.height), 0, ws.background);
                    }
                }
            }

            if !flags.contains(WindowFlags::NO_SCROLLBAR) {
                let mut wc = WidgetCtx::new(cmds, text, face, widgets);

                let mut sb = Rect::new(layout.bounds.x + layout.width, layout.clip.y, sb_size.y, layout.clip.h);
                if flags.contains(WindowFlags::BORDER) {
                    sb.h -= 1;
                }
                let clip_h = layout.clip.h as f64;
                let target = (layout.at_y - layout.clip.y) as f64;
                wheel.over = pointer.0 && layout.bounds.contains(pointer.1);
                let offset = do_scrollbarv(&mut wc, sb, scrollbar.y as f64, target, clip_h * 0.10, clip_h * 0.01, &style.scrollv, input, &mut wheel) as i32;
                if offset != scrollbar.y {
                    *trash = true;
                }
                scrollbar.y = offset;

                if !flags.contains(WindowFlags::NO_HSCROLLBAR) {
                    let mut sb = Rect::new(layout.bounds.x + padding.x, 0, 0, 0);
                    if flags.contains(WindowFlags::SUB) {
                        sb.h = sb_size.x;
                        sb.y = layout.bounds.y + layout.header_h + layout.menu.h + layout.height;
                        if flags.contains(WindowFlags::BORDER) {
                            sb.y += 1;
                        }
                        sb.w = layout.clip.w;
                    } else if flags.contains(WindowFlags::DYNAMIC) {
                        sb.h = sb_size.x.min(layout.footer_h);
                        sb.w = layout.bounds.w;
                        sb.y = footer.y;
                    } else {
                        sb.h = sb_size.x.min(layout.footer_h);
                        sb.y = layout.bounds.y + bounds.h - layout.footer_h.max(sb_size.x);
                        sb.w = layout.width - 2 * padding.x;
                    }
                    let max_x = layout.max_x as f64;
                    let target = (layout.max_x - sb.x) as f64;
                    let offset = do_scrollbarh(&mut wc, sb, scrollbar.x as f64, target, max_x * 0.05, max_x * 0.005, &style.scrollh, input) as i32;
                    if offset != scrollbar.x {
                        *trash = true;
                    }
                    scrollbar.x = offset;
                }
            }

            let mut scaler = None;
            if flags.contains(WindowFlags::SCALABLE) {
                let (w, h) = (scaler_size.x.max(0), scaler_size.y.max(0));
                let x = layout.bounds.x + layout.bounds.w - (padding.x + w);
                let y = if flags.contains(WindowFlags::DYNAMIC) {
                    footer.y + layout.footer_h - scaler_size.y
                } else {
                    layout.bounds.y + layout.bounds.h - (scaler_size.y + padding.y)
                };
                let grip = Rect::new(x, y, w, h);
                scaler = Some(grip);
                if toplevel {
                    if *scaling {
                        if !input.mouse.down(MouseButton::Left) {
                            *scaling = false;
                        } else {
                            scale_delta = Some(input.mouse.delta);
                        }
                    } else if input.mouse.is_click_down_in_rect(MouseButton::Left, grip, true) {
                        *scaling = true;
                    }
                }
            }

            let borders = flags.contains(WindowFlags::BORDER);
            let decoration = ScalerAndBorders {
                scaler,
                header_border: borders && flags.contains(WindowFlags::BORDER_HEADER),
                borders,
                bounds,
                border: layout.border,
                header_h: layout.header_h,
                border_color: ws.border_color,
                padding_y: if flags.contains(WindowFlags::DYNAMIC) { layout.footer_h + footer.y } else { layout.bounds.y + layout.bounds.h },
            };
            widgets.add(WidgetStates::Inactive, bounds);
            decoration.draw(cmds, ws);
            *win_flags |= WindowFlags::ENABLED;

            if layout.row.tree_depth != 0 {
                panic!("Some TreePush not closed by TreePop");
            }
        }

        if focused {
            self.input.mouse.scroll_delta = wheel.delta;
        }
        if let Some(delta) = scale_delta {
            self.scale_window(id, delta);
        }
    }

    /// Drags a floating window, previewing the dock target under the pointer.
    pub(crate) fn move_window(&mut self, id: WinId, delta: Point, pos: Point) {
        if self.window(id).flags.contains(WindowFlags::DOCKED) {
            if delta.x != 0 && delta.y != 0 {
                self.undock(id);
            }
            return;
        }
        let root = self.window(ROOT).bounds;
        if let Some(preview) = self.dock_preview(pos) {
            self.final_cmds.fill_rect(preview, 0, color(0, 0, 0x50, 0x50));
        }
        let fh = font_height(&self.style.font);
        let b = &mut self.window_mut(id).bounds;
        b.x = clamp_int(0, b.x + delta.x, root.x + root.w - fh);
        b.y = clamp_int(0, b.y + delta.y, root.y + root.h - fh);
    }

    /// Resizes a window from its scaler grip.
    pub(crate) fn scale_window(&mut self, id: WinId, delta: Point) {
        if self.window(id).flags.contains(WindowFlags::DOCKED) {
            let scaling = self.style.scaling;
            self.dock.scale(id, delta, scaling);
            return;
        }
        let (win, style) = self.window_and_style(id);
        let min = window_style(style, win.flags).min_size;
        win.bounds.w = min.x.max(win.bounds.w + delta.x);
        if !win.flags.contains(WindowFlags::DYNAMIC) {
            win.bounds.h = min.y.max(win.bounds.h + delta.y);
        }
    }
}

impl Window<'_> {
    /// Starts a menubar: the widgets added until [`Window::menubar_end`] stay at the
    /// top of the window regardless of scrolling.
    pub fn menubar_begin(&mut self) {
        let WindowData { layout, scrollbar, .. } = self.data_mut();
        layout.menu.x = layout.at_x;
        layout.menu.y = layout.bounds.y + layout.header_h;
        layout.menu.w = layout.width;
        layout.menu.offset = *scrollbar;
        scrollbar.y = 0;
    }

    /// Ends the menubar; the body clip starts below it.
    pub fn menubar_end(&mut self) {
        let WindowData { layout, scrollbar, cmds, .. } = self.data_mut();
        layout.menu.h = layout.at_y - layout.menu.y;
        layout.clip.y = layout.bounds.y + layout.header_h + layout.menu.h + layout.row.height;
        layout.height -= layout.menu.h;
        *scrollbar = layout.menu.offset;
        layout.clip.h -= layout.menu.h + layout.row.height;
        layout.at_y = layout.menu.y + layout.menu.h;
        cmds.push_scissor(layout.clip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::Event;
    use crate::style::Style;
    use crate::text::Align;

    const VIEW: Rect = Rect::new(0, 0, 640, 480);

    fn body(w: &mut Window<'_>) {
        w.row(20).dynamic(1);
        w.label("body", Align::LC);
    }

    fn open(flags: WindowFlags) -> (Context, WinId) {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        ctx.popup_open("w", flags | WindowFlags::NONMODAL, Rect::new(100, 100, 200, 150), false, body);
        ctx.frame(VIEW);
        let id = ctx.stack[1];
        (ctx, id)
    }

    fn step(ctx: &mut Context, events: &[Event]) {
        for e in events {
            ctx.handle_event(e.clone());
        }
        ctx.frame(VIEW);
    }

    fn left(down: bool, pos: Point) -> Event { Event::MouseButton { button: MouseButton::Left, down, pos } }

    #[test]
    fn close_button_closes_the_window() {
        let (mut ctx, _) = open(WindowFlags::BORDER | WindowFlags::TITLE | WindowFlags::CLOSABLE);
        let style = Style::default();
        let ws = &style.normal_window;
        let hs = &ws.header;
        let lb = shrink_rect(Rect::new(100, 100, 200, 150), ws.border);
        let header_h = font_height(&style.font) + 2 * hs.padding.y + 2 * hs.label_padding.y;
        let side = header_h - 2 * hs.padding.y;
        let at = Point::new(lb.x + lb.w - (side + hs.padding.x) + side / 2, lb.y + hs.padding.y + side / 2);

        step(&mut ctx, &[Event::MouseMove(at)]);
        step(&mut ctx, &[left(true, at)]);
        assert_eq!(ctx.stack.len(), 2);
        step(&mut ctx, &[left(false, at)]);
        assert_eq!(ctx.stack.len(), 1);
    }

    #[test]
    fn title_drag_moves_the_window() {
        let (mut ctx, id) = open(WindowFlags::BORDER | WindowFlags::TITLE | WindowFlags::MOVABLE);
        let grab = Point::new(150, 105);
        step(&mut ctx, &[Event::MouseMove(grab)]);
        step(&mut ctx, &[left(true, grab)]);
        assert!(ctx.window(id).moving);
        step(&mut ctx, &[Event::MouseMove(Point::new(170, 125))]);
        assert_eq!(ctx.window(id).bounds, Rect::new(120, 120, 200, 150));
        step(&mut ctx, &[left(false, Point::new(170, 125))]);
        assert!(!ctx.window(id).moving);
        assert_eq!(ctx.window(id).bounds, Rect::new(120, 120, 200, 150));
    }

    #[test]
    fn scaler_drag_resizes_the_window() {
        let (mut ctx, id) = open(WindowFlags::BORDER | WindowFlags::SCALABLE);
        let ws = &Style::default().normal_window;
        let lb = shrink_rect(Rect::new(100, 100, 200, 150), ws.border);
        let grip = Point::new(lb.x + lb.w - ws.padding.x - ws.scaler_size.x / 2, lb.y + lb.h - ws.padding.y - ws.scaler_size.y / 2);

        step(&mut ctx, &[Event::MouseMove(grip)]);
        step(&mut ctx, &[left(true, grip)]);
        assert!(ctx.window(id).scaling);
        step(&mut ctx, &[Event::MouseMove(grip + Point::new(30, 40))]);
        assert_eq!(ctx.window(id).bounds, Rect::new(100, 100, 230, 190));
        step(&mut ctx, &[left(false, grip + Point::new(30, 40))]);
        assert!(!ctx.window(id).scaling);
    }

    #[test]
    fn menubar_pushes_the_body_down() {
        let mut ctx = Context::new(WindowFlags::empty(), |w| {
            w.menubar_begin();
            w.row(25).dynamic(1);
            w.label("menu", Align::LC);
            w.menubar_end();
            w.row(20).dynamic(1);
            w.label("body", Align::LC);
        });
        ctx.frame(VIEW);
        let layout = &ctx.window(ROOT).layout;
        assert!(layout.clip.y >= layout.bounds.y + layout.header_h + 25);
        assert!(layout.clip.y >= layout.menu.y + layout.menu.h);
    }

    #[test]
    #[should_panic(expected = "Some TreePush not closed by TreePop")]
    fn unbalanced_tree_in_popup_panics() {
        let mut ctx = Context::new(WindowFlags::empty(), |_| {});
        ctx.popup_open("w", WindowFlags::empty(), Rect::new(10, 10, 100, 100), false, |w| {
            w.row(20).dynamic(1);
            w.tree_push(crate::widgets::TreeType::Node, "open", true);
        });
        ctx.frame(VIEW);
    }
}

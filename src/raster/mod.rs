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
//! Software rasterizer for command lists.
//!
//! [`draw`] walks a command list once, front to back, and composites every
//! primitive into a [`Framebuffer`]. Rectangles and axis aligned lines are plain
//! span fills; rounded corners, oblique lines, triangles and circles go through
//! the anti-aliasing [`accumulator`]. Text is composited from the glyph bitmaps
//! of the command's face.

mod accumulator;
mod framebuffer;
mod simd;

use std::f64::consts::PI;

use rs_math3d::Vec2f;

use crate::command::{Command, Image};
use crate::font::Face;
use crate::rect::{shrink_rect, unify, Point, Rect};
use crate::text::font_height;
use crate::Color;

use accumulator::{Accumulator, Path};
pub use framebuffer::Framebuffer;
use framebuffer::{Paint, M};

/// Paint operations or clip entries a single frame may issue.
pub const MAX_PAINT_OPS: usize = 1 << 16;

/// Largest border the filled-rect border optimisation applies to.
pub const MAX_OPTIMIZED_BORDER: i32 = 128;

#[derive(Default, Debug)]
/// Per-frame counter of paint operations and clip entries.
///
/// Exceeding [`MAX_PAINT_OPS`] of either is a programming error and panics.
pub struct PaintBudget {
    ops: usize,
    clips: usize,
}

impl PaintBudget {
    /// Records one paint operation.
    pub fn paint(&mut self) {
        self.ops += 1;
        if self.ops > MAX_PAINT_OPS {
            panic!("more than {} paint operations in one frame", MAX_PAINT_OPS);
        }
    }

    /// Records one clip path entry.
    pub fn clip(&mut self) {
        self.clips += 1;
        if self.clips > MAX_PAINT_OPS {
            panic!("more than {} clip path entries in one frame", MAX_PAINT_OPS);
        }
    }

    /// Paint operations recorded so far.
    pub fn ops(&self) -> usize { self.ops }
}

/// Rasterizes `cmds` into `fb` and returns the number of commands processed.
pub fn draw(fb: &mut Framebuffer, cmds: &[Command]) -> usize {
    let mut r = Renderer {
        clip: fb.bounds(),
        fb,
        path: Path::default(),
        acc: Accumulator::default(),
        budget: PaintBudget::default(),
        precomposite: None,
    };
    let background = cmds.iter().position(|c| matches!(c, Command::RectFilled { .. }));
    for (i, cmd) in cmds.iter().enumerate() {
        match cmd {
            Command::Scissor(rect) => {
                r.budget.clip();
                r.clip = unify(*rect, r.fb.bounds());
            }
            Command::RectFilled { rect, rounding, color } => {
                r.budget.paint();
                let mut color = *color;
                // the first fill is the background of the root window
                if Some(i) == background {
                    color.a = 0xff;
                }
                r.rect_filled(cmds, i, *rect, *rounding as i32, color);
            }
            Command::Line { begin, end, thickness, color } => {
                r.budget.paint();
                r.line(*begin, *end, *thickness as i32, *color);
            }
            Command::TriangleFilled { a, b, c, color } => {
                r.budget.paint();
                r.path.clear();
                r.path.move_to(vec2(a.x as f64, a.y as f64));
                r.path.line_to(vec2(b.x as f64, b.y as f64));
                r.path.line_to(vec2(c.x as f64, c.y as f64));
                r.fill_path(Paint::from_color(*color));
            }
            Command::CircleFilled { rect, color } => {
                r.budget.paint();
                r.path.clear();
                let (rx, ry) = ((rect.w / 2) as f64, (rect.h / 2) as f64);
                let start = r.path.arc(rect.x as f64 + rx, rect.y as f64 + ry, rx, ry, 0.0, -PI * 2.0, true);
                r.path.line_to(start);
                r.fill_path(Paint::from_color(*color));
            }
            Command::Image { rect, image } => {
                r.budget.paint();
                r.image(*rect, image);
            }
            Command::Text { rect, face, foreground, text } => {
                r.budget.paint();
                r.text(*rect, face, *foreground, text);
            }
        }
    }
    cmds.len()
}

fn vec2(x: f64, y: f64) -> Vec2f { Vec2f::new(x as f32, y as f32) }

/// Returns the border width when `cmds[idx]` is `outer` shrunk on every side, the
/// width is at most [`MAX_OPTIMIZED_BORDER`] and at least one of the two colors is opaque.
fn border_optimize(outer: Rect, outer_color: Color, cmds: &[Command], idx: usize) -> Option<(i32, u16, Color)> {
    let Some(Command::RectFilled { rect, rounding, color }) = cmds.get(idx) else { return None };
    if outer_color.a != 0xff && color.a != 0xff {
        return None;
    }
    let border = rect.x - outer.x;
    if border <= 0 || border > MAX_OPTIMIZED_BORDER {
        return None;
    }
    if shrink_rect(outer, border) != *rect {
        return None;
    }
    Some((border, *rounding, *color))
}

struct Renderer<'a> {
    fb: &'a mut Framebuffer,
    clip: Rect,
    path: Path,
    acc: Accumulator,
    budget: PaintBudget,
    /// Set while the next fill is the transparent interior of a border.
    precomposite: Option<[u8; 4]>,
}

impl Renderer<'_> {
    fn fill(&mut self, r: Rect, p: Paint) { self.fb.fill(unify(r, self.clip), p) }

    fn fill_path(&mut self, p: Paint) { self.acc.fill(self.fb, self.clip, &self.path, p) }

    fn rect_filled(&mut self, cmds: &[Command], i: usize, rect: Rect, rounding: i32, color: Color) {
        let mut paint = Paint::from_color(color);
        if let Some(under) = self.precomposite.take() {
            let [r, g, b, a] = paint.over(under);
            paint = Paint::from_premultiplied(r, g, b, a);
        }

        let rounded = rounding > 0 && rounding * 2 < rect.w && rounding * 2 < rect.h;
        let mut body = rect;
        let (mut lwing, mut rwing) = (Rect::default(), Rect::default());
        if rounded {
            body.x += rounding;
            body.w -= 2 * rounding;
            lwing = Rect::new(rect.x, rect.y + rounding, rounding, rect.h - 2 * rounding);
            rwing = Rect::new(rect.x + rect.w - rounding, lwing.y, rounding, lwing.h);
        }

        match border_optimize(rect, color, cmds, i + 1) {
            Some((border, inner_rounding, inner)) => {
                if inner.a != 0xff {
                    let px = [(paint.r >> 8) as u8, (paint.g >> 8) as u8, (paint.b >> 8) as u8, (paint.a >> 8) as u8];
                    self.precomposite = Some(px);
                }
                let border = border + inner_rounding as i32;
                let top = Rect::new(body.x, body.y, body.w, border);
                let bottom = Rect::new(body.x, body.y + body.h - border, body.w, border);
                self.fill(top, paint);
                self.fill(bottom, paint);
                let extra = border - if rounded { rounding } else { 0 };
                if extra > 0 {
                    let side_h = bottom.y - (top.y + top.h);
                    self.fill(Rect::new(top.x, top.y + top.h, extra, side_h), paint);
                    self.fill(Rect::new(top.x + top.w - extra, top.y + top.h, extra, side_h), paint);
                }
            }
            None => self.fill(body, paint),
        }

        if rounded {
            self.fill(lwing, paint);
            self.fill(rwing, paint);
            let r = rounding as f64;
            let (x0, y0) = ((rect.x + rounding) as f64, (rect.y + rounding) as f64);
            let (x1, y1) = ((rect.x + rect.w - rounding) as f64, (rect.y + rect.h - rounding) as f64);
            for (cx, cy, start) in [(x1, y0, -PI / 2.0), (x1, y1, 0.0), (x0, y1, PI / 2.0), (x0, y0, PI)] {
                self.path.clear();
                self.path.move_to(vec2(cx, cy));
                self.path.arc(cx, cy, r, r, start, PI / 2.0, false);
                self.path.line_to(vec2(cx, cy));
                self.fill_path(paint);
            }
        }
    }

    fn line(&mut self, begin: Point, end: Point, thickness: i32, color: Color) {
        let paint = Paint::from_color(color);
        let h1 = thickness / 2;
        let h2 = thickness - h1;
        if begin.x == end.x {
            let r = Rect::from_min_max(Point::new(begin.x - h1, begin.y.min(end.y)), Point::new(begin.x + h2, begin.y.max(end.y)));
            self.fill(r, paint);
        } else if begin.y == end.y {
            let r = Rect::from_min_max(Point::new(begin.x.min(end.x), begin.y - h1), Point::new(begin.x.max(end.x), begin.y + h2));
            self.fill(r, paint);
        } else {
            let (dx, dy) = ((end.x - begin.x) as f64, (end.y - begin.y) as f64);
            let len = (dx * dx + dy * dy).sqrt();
            let half = thickness as f64 / 2.0;
            let (nx, ny) = (-dy / len * half, dx / len * half);
            let (bx, by, ex, ey) = (begin.x as f64, begin.y as f64, end.x as f64, end.y as f64);
            self.path.clear();
            self.path.move_to(vec2(bx + nx, by + ny));
            self.path.line_to(vec2(ex + nx, ey + ny));
            self.path.line_to(vec2(ex - nx, ey - ny));
            self.path.line_to(vec2(bx - nx, by - ny));
            self.fill_path(paint);
        }
    }

    fn image(&mut self, rect: Rect, image: &Image) {
        let dst = unify(unify(Rect::new(rect.x, rect.y, image.width(), image.height()), rect), self.clip);
        let dst = unify(dst, self.fb.bounds());
        for y in dst.y..dst.y + dst.h {
            for x in dst.x..dst.x + dst.w {
                let c = image.pixel(x - rect.x, y - rect.y);
                if c.a == 0 {
                    continue;
                }
                let p = Paint::from_color(c);
                self.fb.span(y, x, x + 1, p, M);
            }
        }
    }

    fn text(&mut self, rect: Rect, face: &Face, foreground: Color, text: &str) {
        let area = unify(unify(rect, self.clip), self.fb.bounds());
        if area.is_empty() {
            return;
        }
        let paint = Paint::from_color(foreground);
        let glyphs = face.glyphs();
        let mut baseline = rect.y + face.ascent();
        for line in text.split('\n') {
            let mut pen = rect.x as f32;
            let mut prev: Option<char> = None;
            for ch in line.chars() {
                if let Some(p) = prev {
                    pen += glyphs.kern(p, ch);
                }
                let g = glyphs.rasterize(ch);
                let gx = pen.round() as i32 + g.xmin;
                let gy = baseline - g.ymin - g.height as i32;
                for row in 0..g.height as i32 {
                    let y = gy + row;
                    if y < area.y || y >= area.y + area.h {
                        continue;
                    }
                    for col in 0..g.width as i32 {
                        let x = gx + col;
                        if x < area.x || x >= area.x + area.w {
                            continue;
                        }
                        let cov = g.coverage[(row * g.width as i32 + col) as usize];
                        if cov != 0 {
                            self.fb.span(y, x, x + 1, paint, cov as u32 * 0x101);
                        }
                    }
                }
                pen += glyphs.advance(ch);
                prev = Some(ch);
            }
            baseline += font_height(face);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;
    use crate::color;
    use crate::rect::NULL_RECT;

    fn fill(rect: Rect, color: Color) -> Command { Command::RectFilled { rect, rounding: 0, color } }

    fn painted(fb: &Framebuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.pixel(x, y).a != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn background_is_forced_opaque() {
        let mut fb = Framebuffer::new(4, 4);
        draw(&mut fb, &[Command::Scissor(NULL_RECT), fill(Rect::new(0, 0, 4, 4), color(10, 20, 30, 0))]);
        assert_eq!(fb.pixel(3, 3), color(10, 20, 30, 255));
    }

    #[test]
    fn border_optimisation_matches_plain_painting() {
        let mut rng = rand::rng();
        let r = Rect::new(3, 2, 300, 280);
        for n in 1..=MAX_OPTIMIZED_BORDER {
            let bg = color(rng.random(), rng.random(), rng.random(), 255);
            let outer = color(rng.random(), rng.random(), rng.random(), if rng.random::<bool>() { 255 } else { rng.random() });
            let inner = color(rng.random(), rng.random(), rng.random(), if outer.a != 255 { 255 } else { rng.random() });

            let mut optimized = Framebuffer::new(310, 290);
            let bounds = optimized.bounds();
            draw(&mut optimized, &[fill(bounds, bg), fill(r, outer), fill(shrink_rect(r, n), inner)]);

            // a scissor change between the rects defeats the optimisation
            let mut plain = Framebuffer::new(310, 290);
            let cmds = [fill(bounds, bg), fill(r, outer), Command::Scissor(NULL_RECT), fill(shrink_rect(r, n), inner)];
            draw(&mut plain, &cmds);

            assert_eq!(optimized.pixels(), plain.pixels(), "border {} outer {:?} inner {:?}", n, outer, inner);
        }
    }

    #[test]
    fn nested_scissors_confine_every_write() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let outer = Rect::new(rng.random_range(-20..40), rng.random_range(-20..40), rng.random_range(0..80), rng.random_range(0..80));
            let inner = Rect::new(outer.x + rng.random_range(0..10), outer.y + rng.random_range(0..10), rng.random_range(0..60), rng.random_range(0..60));
            let mut fb = Framebuffer::new(64, 48);
            let red = color(255, 0, 0, 255);
            let cmds = [
                Command::Scissor(outer),
                Command::Scissor(unify(inner, outer)),
                fill(Rect::new(-100, -100, 300, 300), red),
                Command::Line { begin: Point::new(-10, -5), end: Point::new(90, 70), thickness: 3, color: red },
                Command::CircleFilled { rect: Rect::new(5, 5, 50, 40), color: red },
                Command::TriangleFilled { a: Point::new(0, 0), b: Point::new(60, 10), c: Point::new(20, 45), color: red },
                Command::Text { rect: Rect::new(0, 0, 64, 48), face: Face::builtin(12, 1.0), foreground: red, text: "clip\nme".to_string() },
            ];
            draw(&mut fb, &cmds);
            let allowed = unify(unify(inner, outer), fb.bounds());
            for (x, y) in painted(&fb) {
                assert!(x >= allowed.x && x < allowed.x + allowed.w && y >= allowed.y && y < allowed.y + allowed.h, "({}, {}) outside {:?}", x, y, allowed);
            }
        }
    }

    #[test]
    fn axis_aligned_lines_split_their_thickness() {
        let mut fb = Framebuffer::new(20, 20);
        let c = color(0, 255, 0, 255);
        draw(&mut fb, &[Command::Line { begin: Point::new(10, 2), end: Point::new(10, 12), thickness: 3, color: c }]);
        assert_eq!(painted(&fb).iter().map(|p| p.0).min(), Some(9));
        assert_eq!(painted(&fb).iter().map(|p| p.0).max(), Some(11));
        assert_eq!(painted(&fb).len(), 30);
    }

    #[test]
    fn rounded_rects_leave_their_corners_open() {
        let mut fb = Framebuffer::new(40, 40);
        draw(&mut fb, &[Command::RectFilled { rect: Rect::new(0, 0, 40, 40), rounding: 8, color: color(255, 255, 255, 255) }]);
        assert_eq!(fb.pixel(0, 0).a, 0);
        assert_eq!(fb.pixel(39, 39).a, 0);
        assert_eq!(fb.pixel(20, 0), color(255, 255, 255, 255));
        assert_eq!(fb.pixel(0, 20), color(255, 255, 255, 255));
        assert_eq!(fb.pixel(8, 8), color(255, 255, 255, 255));
    }

    #[test]
    fn images_are_clipped_to_their_rect() {
        let mut fb = Framebuffer::new(10, 10);
        let img = Image::filled(8, 8, color(1, 2, 3, 255));
        draw(&mut fb, &[Command::Image { rect: Rect::new(2, 2, 4, 20), image: img }]);
        let px = painted(&fb);
        assert_eq!(px.len(), 4 * 8);
        assert!(px.iter().all(|(x, y)| (2..6).contains(x) && (2..10).contains(y)));
        assert_eq!(fb.pixel(2, 2), color(1, 2, 3, 255));
    }

    #[test]
    fn text_lands_below_the_rect_origin() {
        let mut fb = Framebuffer::new(60, 40);
        let face = Face::builtin(12, 1.0);
        draw(&mut fb, &[Command::Text { rect: Rect::new(5, 5, 50, 30), face: face.clone(), foreground: color(255, 255, 255, 255), text: "ab\nc".to_string() }]);
        let px = painted(&fb);
        assert!(!px.is_empty());
        assert!(px.iter().all(|(x, y)| *x >= 5 && *y >= 5));
        // the second line starts one line height lower
        assert!(px.iter().any(|(_, y)| *y >= 5 + font_height(&face)));
    }

    #[test]
    #[should_panic(expected = "paint operations")]
    fn paint_budget_is_enforced() {
        let mut fb = Framebuffer::new(1, 1);
        let cmds = vec![fill(Rect::new(0, 0, 1, 1), color(0, 0, 0, 255)); MAX_PAINT_OPS + 1];
        draw(&mut fb, &cmds);
    }
}

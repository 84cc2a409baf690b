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
//! Anti-aliased polygon coverage.
//!
//! Paths are flattened to line segments whose signed area is accumulated per
//! pixel cell; a running sum along each row turns the accumulation into coverage.
//! Coverage is the absolute value of the sum, clamped to one, which equals the
//! non-zero winding rule for the simple shapes the toolkit draws.

use std::f64::consts::PI;

use rs_math3d::Vec2f;

use super::framebuffer::{Framebuffer, Paint, M};
use crate::rect::{unify, Point, Rect};

#[derive(Default)]
/// A set of closed polygons in surface coordinates.
pub(crate) struct Path {
    contours: Vec<Vec<Vec2f>>,
}

impl Path {
    pub fn clear(&mut self) { self.contours.clear() }

    /// Starts a new contour at `p`.
    pub fn move_to(&mut self, p: Vec2f) { self.contours.push(vec![p]) }

    /// Extends the current contour to `p`.
    pub fn line_to(&mut self, p: Vec2f) {
        match self.contours.last_mut() {
            Some(c) => c.push(p),
            None => self.contours.push(vec![p]),
        }
    }

    #[cfg(test)]
    /// Number of points of every contour.
    pub fn len(&self) -> usize { self.contours.iter().map(Vec::len).sum() }

    /// Appends an elliptic arc around (`x`, `y`) from `start` sweeping `angle` radians.
    ///
    /// Angles grow clockwise in surface coordinates. When `first` is set the arc opens
    /// a new contour; the returned point is the first point traced in that case.
    pub fn arc(&mut self, x: f64, y: f64, rx: f64, ry: f64, start: f64, angle: f64, mut first: bool) -> Vec2f {
        let clockwise = angle >= 0.0;
        let mut start = start;
        let mut end = start + angle;
        if !clockwise {
            while start < end {
                start += PI * 2.0;
            }
            end = start + angle;
        }
        let ra = (rx.abs() + ry.abs()) / 2.0;
        let mut da = (ra / (ra + 0.125)).acos() * 2.0;
        if !clockwise {
            da = -da;
        }
        let point = |t: f64| Vec2f::new((x + t.cos() * rx) as f32, (y + t.sin() * ry) as f32);
        let mut origin = Vec2f::new(0.0, 0.0);
        let mut t = start;
        // a zero step would never reach the end of the arc
        if da == 0.0 || !da.is_finite() {
            self.line_to(point(end));
            return origin;
        }
        loop {
            if (t < end - da / 4.0) != clockwise {
                self.line_to(point(end));
                return origin;
            }
            let p = point(t);
            t += da;
            if first {
                first = false;
                origin = p;
                self.move_to(p);
            } else {
                self.line_to(p);
            }
        }
    }

    fn bounds(&self) -> Option<(f32, f32, f32, f32)> {
        let mut it = self.contours.iter().flatten();
        let first = it.next()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(it.fold(init, |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))))
    }
}

#[derive(Default)]
/// Signed area cells covering the bounding box of the last rasterized path.
pub(crate) struct Accumulator {
    origin: (i32, i32),
    w: usize,
    h: usize,
    cells: Vec<f32>,
}

impl Accumulator {
    /// Fills `path` with `p`, writing only inside `clip`.
    pub fn fill(&mut self, fb: &mut Framebuffer, clip: Rect, path: &Path, p: Paint) {
        let Some((x0, y0, x1, y1)) = path.bounds() else { return };
        let area = Rect::from_min_max(Point::new(x0.floor() as i32, y0.floor() as i32), Point::new(x1.ceil() as i32 + 1, y1.ceil() as i32 + 1));
        let visible = unify(unify(area, clip), fb.bounds());
        if visible.is_empty() {
            return;
        }
        // columns span the whole path so every edge lands inside the row; rows are clipped
        self.origin = (area.x, visible.y);
        self.w = area.w as usize;
        self.h = visible.h as usize;
        self.cells.clear();
        self.cells.resize(self.w * self.h + self.w + 4, 0.0);

        let (ox, oy) = (self.origin.0 as f32, self.origin.1 as f32);
        for contour in &path.contours {
            for (i, a) in contour.iter().enumerate() {
                let b = contour[(i + 1) % contour.len()];
                self.line(Vec2f::new(a.x - ox, a.y - oy), Vec2f::new(b.x - ox, b.y - oy));
            }
        }
        self.paint(fb, visible, p);
    }

    fn line(&mut self, p0: Vec2f, p1: Vec2f) {
        if (p0.y - p1.y).abs() <= f32::EPSILON {
            return;
        }
        let (dir, p0, p1) = if p0.y < p1.y { (1.0, p0, p1) } else { (-1.0, p1, p0) };
        let dxdy = (p1.x - p0.x) / (p1.y - p0.y);
        let mut x = p0.x;
        if p0.y < 0.0 {
            x -= p0.y * dxdy;
        }
        let top = p0.y.max(0.0) as usize;
        let bottom = self.h.min(p1.y.ceil().max(0.0) as usize);
        let max_x = (self.w - 1) as f32;
        for y in top..bottom {
            let line = y * self.w;
            let dy = ((y + 1) as f32).min(p1.y) - (y as f32).max(p0.y);
            let xnext = x + dxdy * dy;
            let d = dy * dir;
            let (xa, xb) = if x < xnext { (x.clamp(0.0, max_x), xnext.clamp(0.0, max_x)) } else { (xnext.clamp(0.0, max_x), x.clamp(0.0, max_x)) };
            let xa_floor = xa.floor();
            let xa_i = xa_floor as usize;
            let xb_ceil = xb.ceil();
            let xb_i = xb_ceil as usize;
            if xb_i <= xa_i + 1 {
                let xmf = 0.5 * (xa + xb) - xa_floor;
                self.cells[line + xa_i] += d - d * xmf;
                self.cells[line + xa_i + 1] += d * xmf;
            } else {
                let s = (xb - xa).recip();
                let xa_f = xa - xa_floor;
                let a0 = 0.5 * s * (1.0 - xa_f) * (1.0 - xa_f);
                let xb_f = xb - xb_ceil + 1.0;
                let am = 0.5 * s * xb_f * xb_f;
                self.cells[line + xa_i] += d * a0;
                if xb_i == xa_i + 2 {
                    self.cells[line + xa_i + 1] += d * (1.0 - a0 - am);
                } else {
                    let a1 = s * (1.5 - xa_f);
                    self.cells[line + xa_i + 1] += d * (a1 - a0);
                    for xi in xa_i + 2..xb_i - 1 {
                        self.cells[line + xi] += d * s;
                    }
                    let a2 = a1 + (xb_i - xa_i - 3) as f32 * s;
                    self.cells[line + xb_i - 1] += d * (1.0 - a2 - am);
                }
                self.cells[line + xb_i] += d * am;
            }
            x = xnext;
        }
    }

    fn paint(&self, fb: &mut Framebuffer, visible: Rect, p: Paint) {
        let left = (visible.x - self.origin.0) as usize;
        let right = left + visible.w as usize;
        for row in 0..self.h {
            let y = self.origin.1 + row as i32;
            let cells = &self.cells[row * self.w..(row + 1) * self.w];
            let mut acc = 0.0f32;
            let mut run: Option<(usize, u32)> = None;
            for (col, cell) in cells.iter().enumerate().take(right) {
                acc += cell;
                if col < left {
                    continue;
                }
                let ma = (acc.abs().min(1.0) * M as f32) as u32;
                match run {
                    Some((_, a)) if a == ma => {}
                    Some((start, a)) => {
                        self.flush(fb, y, start, col, a, p);
                        run = Some((col, ma));
                    }
                    None => run = Some((col, ma)),
                }
            }
            if let Some((start, a)) = run {
                self.flush(fb, y, start, right, a, p);
            }
        }
    }

    fn flush(&self, fb: &mut Framebuffer, y: i32, start: usize, end: usize, ma: u32, p: Paint) {
        if ma == 0 {
            return;
        }
        let x = self.origin.0;
        fb.span(y, x + start as i32, x + end as i32, p, ma);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    fn opaque_red() -> Paint { Paint::from_color(color(255, 0, 0, 255)) }

    #[test]
    fn axis_aligned_square_is_solid() {
        let mut fb = Framebuffer::new(10, 10);
        let mut path = Path::default();
        path.move_to(Vec2f::new(2.0, 2.0));
        path.line_to(Vec2f::new(6.0, 2.0));
        path.line_to(Vec2f::new(6.0, 6.0));
        path.line_to(Vec2f::new(2.0, 6.0));
        let bounds = fb.bounds();
        Accumulator::default().fill(&mut fb, bounds, &path, opaque_red());
        assert_eq!(fb.pixel(2, 2), color(255, 0, 0, 255));
        assert_eq!(fb.pixel(5, 5), color(255, 0, 0, 255));
        assert_eq!(fb.pixel(6, 6), color(0, 0, 0, 0));
        assert_eq!(fb.pixel(1, 3), color(0, 0, 0, 0));
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut cw = Framebuffer::new(12, 12);
        let mut ccw = Framebuffer::new(12, 12);
        let pts = [Vec2f::new(1.0, 1.0), Vec2f::new(10.5, 3.0), Vec2f::new(4.0, 10.0)];
        let mut path = Path::default();
        path.move_to(pts[0]);
        path.line_to(pts[1]);
        path.line_to(pts[2]);
        let bounds = cw.bounds();
        Accumulator::default().fill(&mut cw, bounds, &path, opaque_red());
        path.clear();
        path.move_to(pts[2]);
        path.line_to(pts[1]);
        path.line_to(pts[0]);
        Accumulator::default().fill(&mut ccw, bounds, &path, opaque_red());
        assert!(cw.pixels().iter().zip(ccw.pixels()).all(|(a, b)| a.abs_diff(*b) <= 1));
        // edges are anti-aliased
        assert!(cw.pixels().chunks_exact(4).any(|px| px[3] > 0 && px[3] < 255));
    }

    #[test]
    fn circle_stays_inside_its_box_and_clip() {
        let mut fb = Framebuffer::new(40, 40);
        let mut path = Path::default();
        let start = path.arc(20.0, 20.0, 10.0, 10.0, 0.0, -PI * 2.0, true);
        path.line_to(start);
        assert!(path.len() > 16);
        let clip = Rect::new(0, 0, 20, 40);
        Accumulator::default().fill(&mut fb, clip, &path, opaque_red());
        assert_eq!(fb.pixel(15, 20), color(255, 0, 0, 255));
        assert_eq!(fb.pixel(25, 20), color(0, 0, 0, 0));
        assert_eq!(fb.pixel(20, 5), color(0, 0, 0, 0));
        assert_eq!(fb.pixel(3, 3), color(0, 0, 0, 0));
    }

    #[test]
    fn paths_hanging_off_the_surface_are_clipped() {
        let mut fb = Framebuffer::new(8, 8);
        let mut path = Path::default();
        path.move_to(Vec2f::new(-20.0, -20.0));
        path.line_to(Vec2f::new(30.0, -20.0));
        path.line_to(Vec2f::new(30.0, 30.0));
        path.line_to(Vec2f::new(-20.0, 30.0));
        let bounds = fb.bounds();
        Accumulator::default().fill(&mut fb, bounds, &path, opaque_red());
        assert!(fb.pixels().chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    }
}

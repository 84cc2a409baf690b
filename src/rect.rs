//
// Copyright 2023-Present (c) Raja Lehtihet & Wael El Oraiby
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
//! Integer geometry shared by layout, input and the rasterizer.

use std::ops::{Add, Sub};

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Pixel coordinate.
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

impl Add for Point {
    type Output = Point;
    fn add(self, o: Point) -> Point { Point::new(self.x + o.x, self.y + o.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point { Point::new(self.x - o.x, self.y - o.y) }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Axis aligned rectangle in pixels.
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

/// Sentinel clip rectangle that disables clipping.
pub const NULL_RECT: Rect = Rect { x: -8192, y: -8192, w: 16384, h: 16384 };

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self { Self { x, y, w, h } }

    /// Builds a rectangle from its top-left and bottom-right corners.
    pub fn from_min_max(min: Point, max: Point) -> Self { Self::new(min.x, min.y, max.x - min.x, max.y - min.y) }

    /// Top-left corner.
    pub fn min(&self) -> Point { Point::new(self.x, self.y) }

    /// Bottom-right corner.
    pub fn max(&self) -> Point { Point::new(self.x + self.w, self.y + self.h) }

    /// Returns `true` if `p` lies inside the rectangle, edges included.
    pub fn contains(&self, p: Point) -> bool { self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h }

    /// Returns `true` if the rectangles overlap or touch.
    pub fn intersect(&self, other: &Rect) -> bool {
        other.x <= self.x + self.w && other.x + other.w >= self.x && other.y <= self.y + self.h && other.y + other.h >= self.y
    }

    /// Returns `true` for rectangles with no area.
    pub fn is_empty(&self) -> bool { self.w <= 0 || self.h <= 0 }

    /// Multiplies every component by `s`, truncating toward zero.
    pub fn scaled(self, s: f64) -> Rect {
        if s == 1.0 {
            return self;
        }
        Rect::new((self.x as f64 * s) as i32, (self.y as f64 * s) as i32, (self.w as f64 * s) as i32, (self.h as f64 * s) as i32)
    }

    /// Moves the rectangle by `d`.
    pub fn translate(self, d: Point) -> Rect { Rect::new(self.x + d.x, self.y + d.y, self.w, self.h) }
}

/// Intersection of `a` and `b`; the size never goes negative.
pub fn unify(a: Rect, b: Rect) -> Rect {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let w = (a.x + a.w).min(b.x + b.w) - x;
    let h = (a.y + a.h).min(b.y + b.h) - y;
    Rect::new(x, y, w.max(0), h.max(0))
}

/// Insets `r` by `amount` on every side.
pub fn shrink_rect(r: Rect, amount: i32) -> Rect {
    let w = r.w.max(2 * amount);
    let h = r.h.max(2 * amount);
    Rect::new(r.x + amount, r.y + amount, w - 2 * amount, h - 2 * amount)
}

/// Insets `r` by `pad.x` horizontally and `pad.y` vertically.
pub fn pad_rect(r: Rect, pad: Point) -> Rect {
    let w = r.w.max(2 * pad.x);
    let h = r.h.max(2 * pad.y);
    Rect::new(r.x + pad.x, r.y + pad.y, w - 2 * pad.x, h - 2 * pad.y)
}

/// Grows `r` by `pad` on every side.
pub fn touch_rect(r: Rect, pad: Point) -> Rect { Rect::new(r.x - pad.x, r.y - pad.y, r.w + 2 * pad.x, r.h + 2 * pad.y) }

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Direction a triangle symbol points at.
pub enum Heading {
    /// Pointing up.
    Up,
    /// Pointing right.
    Right,
    /// Pointing down.
    Down,
    /// Pointing left.
    Left,
}

/// Triangle inscribed in `r` after padding, pointing toward `direction`.
pub fn triangle_from_direction(r: Rect, pad_x: i32, pad_y: i32, direction: Heading) -> [Point; 3] {
    let w = (2 * pad_x).max(r.w);
    let h = (2 * pad_y).max(r.h);
    let r = Rect::new(r.x + pad_x, r.y + pad_y, w - 2 * pad_x, h - 2 * pad_y);
    let w_half = r.w / 2;
    let h_half = r.h / 2;
    match direction {
        Heading::Up => [Point::new(r.x + w_half, r.y), Point::new(r.x + r.w, r.y + r.h), Point::new(r.x, r.y + r.h)],
        Heading::Right => [Point::new(r.x, r.y), Point::new(r.x + r.w, r.y + h_half), Point::new(r.x, r.y + r.h)],
        Heading::Down => [Point::new(r.x, r.y), Point::new(r.x + r.w, r.y), Point::new(r.x + w_half, r.y + r.h)],
        Heading::Left => [Point::new(r.x, r.y + h_half), Point::new(r.x + r.w, r.y), Point::new(r.x + r.w, r.y + r.h)],
    }
}

/// Clamps `v` into `[lo, hi]`.
pub fn clamp_int(lo: i32, v: i32, hi: i32) -> i32 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Floating point counterpart of [`clamp_int`].
pub fn clamp_float(lo: f64, v: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Clamps `v` into `[0, 1]`.
pub fn saturate(v: f64) -> f64 { v.min(1.0).max(0.0) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(10, 10, 20, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(30, 15)));
        assert!(!r.contains(Point::new(31, 15)));
        assert!(!r.contains(Point::new(9, 12)));
    }

    #[test]
    fn unify_never_goes_negative() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 10, 10);
        assert_eq!(unify(a, b), Rect::new(20, 20, 0, 0));
        assert_eq!(unify(a, Rect::new(5, 5, 10, 10)), Rect::new(5, 5, 5, 5));
        assert_eq!(unify(a, NULL_RECT), a);
    }

    #[test]
    fn shrink_keeps_minimum_extent() {
        assert_eq!(shrink_rect(Rect::new(0, 0, 10, 10), 2), Rect::new(2, 2, 6, 6));
        assert_eq!(shrink_rect(Rect::new(0, 0, 1, 1), 2), Rect::new(2, 2, 0, 0));
    }

    #[test]
    fn intersect_touching_edges() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersect(&Rect::new(10, 10, 5, 5)));
        assert!(!a.intersect(&Rect::new(11, 0, 5, 5)));
    }

    #[test]
    fn scaled_truncates() {
        assert_eq!(Rect::new(1, 3, 5, 7).scaled(1.5), Rect::new(1, 4, 7, 10));
        assert_eq!(Rect::new(1, 3, 5, 7).scaled(1.0), Rect::new(1, 3, 5, 7));
    }

    #[test]
    fn triangle_right_points_at_middle() {
        let t = triangle_from_direction(Rect::new(0, 0, 10, 10), 0, 0, Heading::Right);
        assert_eq!(t[1], Point::new(10, 5));
    }
}

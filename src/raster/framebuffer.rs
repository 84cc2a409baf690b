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
//! RGBA8 pixel surface and its solid fill loops.

use crate::error::Error;
use crate::rect::{unify, Rect};
use crate::{color, Color};

/// Largest 16-bit channel value.
pub(crate) const M: u32 = 0xffff;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Premultiplied color with 16-bit channels, the unit of every compositing step.
pub(crate) struct Paint {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

impl Paint {
    /// Converts a straight alpha color.
    pub fn from_color(c: Color) -> Self {
        let a = c.a as u32 * 0x101;
        let p = |v: u8| v as u32 * 0x101 * a / M;
        Self { r: p(c.r), g: p(c.g), b: p(c.b), a }
    }

    /// Color whose 8-bit channels are already premultiplied.
    pub fn from_premultiplied(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r: r as u32 * 0x101, g: g as u32 * 0x101, b: b as u32 * 0x101, a: a as u32 * 0x101 } }

    pub fn is_opaque(&self) -> bool { self.a == M }

    /// Result of drawing `self` over a pixel of the 8-bit premultiplied value `under`.
    pub fn over(&self, under: [u8; 4]) -> [u8; 4] {
        let a = (M - self.a) * 0x101;
        [
            ((under[0] as u32 * a / M + self.r) >> 8) as u8,
            ((under[1] as u32 * a / M + self.g) >> 8) as u8,
            ((under[2] as u32 * a / M + self.b) >> 8) as u8,
            ((under[3] as u32 * a / M + self.a) >> 8) as u8,
        ]
    }
}

/// Owned RGBA8 pixel buffer with premultiplied alpha.
pub struct Framebuffer {
    width: i32,
    height: i32,
    stride: usize,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Creates a transparent black buffer with tightly packed rows.
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let stride = width as usize * 4;
        Self { width, height, stride, pixels: vec![0; stride * height as usize] }
    }

    /// Creates a buffer whose rows are `stride` bytes apart, as some surfaces require.
    pub fn with_stride(width: i32, height: i32, stride: usize) -> Result<Self, Error> {
        if width < 0 || height < 0 {
            return Err(Error::Surface(format!("invalid surface size {}x{}", width, height)));
        }
        if stride < width as usize * 4 {
            return Err(Error::Surface(format!("stride {} too small for width {}", stride, width)));
        }
        Ok(Self { width, height, stride, pixels: vec![0; stride * height as usize] })
    }

    /// Resizes the buffer; the contents are cleared when the size changes.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width, height);
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// Distance between rows in bytes.
    pub fn stride(&self) -> usize { self.stride }

    /// The whole surface.
    pub fn bounds(&self) -> Rect { Rect::new(0, 0, self.width, self.height) }

    /// Raw bytes, `stride` per row.
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    /// Mutable raw bytes.
    pub fn pixels_mut(&mut self) -> &mut [u8] { &mut self.pixels }

    /// Value of the pixel at (`x`, `y`), premultiplied.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        let i = self.offset(x, y);
        color(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3])
    }

    /// Fills the whole surface with `c`.
    pub fn clear(&mut self, c: Color) { self.fill_src(self.bounds(), Paint::from_color(c)) }

    pub(crate) fn offset(&self, x: i32, y: i32) -> usize { y as usize * self.stride + x as usize * 4 }

    fn clip(&self, r: Rect) -> Option<Rect> {
        let r = unify(r, self.bounds());
        if r.is_empty() { None } else { Some(r) }
    }

    /// Copies `p` into every pixel of `r`.
    pub(crate) fn fill_src(&mut self, r: Rect, p: Paint) {
        let Some(r) = self.clip(r) else { return };
        let px = [(p.r >> 8) as u8, (p.g >> 8) as u8, (p.b >> 8) as u8, (p.a >> 8) as u8];
        let i0 = self.offset(r.x, r.y);
        let len = r.w as usize * 4;
        for chunk in self.pixels[i0..i0 + len].chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        for y in 1..r.h as usize {
            let start = i0 + y * self.stride;
            self.pixels.copy_within(i0..i0 + len, start);
        }
    }

    /// Composites `p` over every pixel of `r`.
    pub(crate) fn fill_over(&mut self, r: Rect, p: Paint) {
        let Some(r) = self.clip(r) else { return };
        let width = r.w as usize * 4;
        let simd = super::simd::available();
        for y in r.y..r.y + r.h {
            let i0 = self.offset(r.x, y);
            let row = &mut self.pixels[i0..i0 + width];
            if simd {
                super::simd::fill_over_row(row, p);
            } else {
                fill_over_row_scalar(row, p);
            }
        }
    }

    /// Fills `r` with the operator the alpha of `p` calls for.
    pub(crate) fn fill(&mut self, r: Rect, p: Paint) {
        if p.is_opaque() {
            self.fill_src(r, p)
        } else if p.a != 0 {
            self.fill_over(r, p)
        }
    }

    /// Composites `p` scaled by the 16-bit coverage `ma` over the pixels `x0..x1` of row `y`.
    ///
    /// The caller clips the span to the surface.
    pub(crate) fn span(&mut self, y: i32, x0: i32, x1: i32, p: Paint, ma: u32) {
        if x0 >= x1 {
            return;
        }
        let i0 = self.offset(x0, y);
        let row = &mut self.pixels[i0..i0 + (x1 - x0) as usize * 4];
        if ma == M && p.is_opaque() {
            let px = [(p.r >> 8) as u8, (p.g >> 8) as u8, (p.b >> 8) as u8, 0xff];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
            return;
        }
        let a = (M - (p.a * ma / M)) * 0x101;
        for chunk in row.chunks_exact_mut(4) {
            chunk[0] = ((chunk[0] as u32 * a + p.r * ma) / M >> 8) as u8;
            chunk[1] = ((chunk[1] as u32 * a + p.g * ma) / M >> 8) as u8;
            chunk[2] = ((chunk[2] as u32 * a + p.b * ma) / M >> 8) as u8;
            chunk[3] = ((chunk[3] as u32 * a + p.a * ma) / M >> 8) as u8;
        }
    }
}

/// Src-over of a solid color on a row of RGBA8 pixels.
pub(crate) fn fill_over_row_scalar(row: &mut [u8], p: Paint) {
    let a = (M - p.a) * 0x101;
    for chunk in row.chunks_exact_mut(4) {
        chunk[0] = ((chunk[0] as u32 * a / M + p.r) >> 8) as u8;
        chunk[1] = ((chunk[1] as u32 * a / M + p.g) >> 8) as u8;
        chunk[2] = ((chunk[2] as u32 * a / M + p.b) >> 8) as u8;
        chunk[3] = ((chunk[3] as u32 * a / M + p.a) >> 8) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_survive_premultiplication() {
        let p = Paint::from_color(color(12, 200, 255, 255));
        assert!(p.is_opaque());
        assert_eq!((p.r >> 8, p.g >> 8, p.b >> 8), (12, 200, 255));
        assert_eq!(Paint::from_color(color(255, 255, 255, 0)), Paint { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn fills_are_clipped_to_the_surface() {
        let mut fb = Framebuffer::new(4, 3);
        fb.fill_src(Rect::new(-2, 1, 4, 10), Paint::from_color(color(1, 2, 3, 255)));
        assert_eq!(fb.pixel(0, 0), color(0, 0, 0, 0));
        assert_eq!(fb.pixel(0, 1), color(1, 2, 3, 255));
        assert_eq!(fb.pixel(1, 2), color(1, 2, 3, 255));
        assert_eq!(fb.pixel(2, 2), color(0, 0, 0, 0));
    }

    #[test]
    fn half_transparent_black_darkens() {
        let mut fb = Framebuffer::new(1, 1);
        fb.clear(color(200, 100, 50, 255));
        fb.fill(Rect::new(0, 0, 1, 1), Paint::from_color(color(0, 0, 0, 128)));
        let c = fb.pixel(0, 0);
        assert!(c.r < 110 && c.r > 90, "{:?}", c);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn strided_surfaces_keep_padding_untouched() {
        let mut fb = Framebuffer::with_stride(2, 2, 16).unwrap();
        fb.clear(color(9, 9, 9, 255));
        assert_eq!(fb.pixels()[8..16], [0; 8]);
        assert_eq!(fb.pixel(1, 1), color(9, 9, 9, 255));
        assert!(Framebuffer::with_stride(4, 1, 8).is_err());
    }
}

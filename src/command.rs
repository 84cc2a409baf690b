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
//! Drawing command buffers.
//!
//! Every window owns a [`CommandBuffer`]. Widgets append primitives to it in call
//! order; at the end of a frame the buffers of all windows are concatenated and
//! handed to a consumer such as the software rasterizer in [`crate::raster`].

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

#[cfg(feature = "png_source")]
use std::io::Cursor;

#[cfg(feature = "png_source")]
use png::{BitDepth, ColorType, Decoder, Transformations};

use crate::error::Error;
use crate::font::Face;
use crate::rect::{Point, Rect, NULL_RECT};
use crate::{color, Color};

/// RGBA8 pixels of an image, not premultiplied.
pub struct ImageData {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Width in pixels.
    pub fn width(&self) -> i32 { self.width }

    /// Height in pixels.
    pub fn height(&self) -> i32 { self.height }

    /// Row-major RGBA bytes, `width * 4` bytes per row.
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    /// Color of the pixel at (`x`, `y`); both must be inside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        let i = ((y * self.width + x) * 4) as usize;
        color(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3])
    }
}

#[derive(Clone)]
/// Shared image handle. Two handles are equal when they point at the same pixels.
pub struct Image(Arc<ImageData>);

impl Image {
    /// Wraps raw RGBA bytes; `pixels` must hold exactly `width * height * 4` bytes.
    pub fn from_rgba(width: i32, height: i32, pixels: Vec<u8>) -> Result<Self, Error> {
        if width < 0 || height < 0 {
            return Err(Error::Image(format!("invalid image size {}x{}", width, height)));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::Image(format!("Expected {} RGBA bytes, found {}", expected, pixels.len())));
        }
        Ok(Self(Arc::new(ImageData { width, height, pixels })))
    }

    /// Image of `width` x `height` pixels all set to `c`.
    pub fn filled(width: i32, height: i32, c: Color) -> Self {
        let n = width.max(0) as usize * height.max(0) as usize;
        let mut pixels = Vec::with_capacity(n * 4);
        for _ in 0..n {
            pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        Self(Arc::new(ImageData { width: width.max(0), height: height.max(0), pixels }))
    }

    #[cfg(feature = "png_source")]
    /// Decodes a PNG file.
    pub fn from_png(bytes: &[u8]) -> Result<Self, Error> {
        let (width, height, pixels) = decode_png(bytes).map_err(Error::Image)?;
        Self::from_rgba(width, height, pixels)
    }

    /// Bounds of the image placed at the origin.
    pub fn bounds(&self) -> Rect { Rect::new(0, 0, self.0.width, self.0.height) }
}

impl std::ops::Deref for Image {
    type Target = ImageData;
    fn deref(&self) -> &ImageData { &self.0 }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "Image({}x{})", self.0.width, self.0.height) }
}

#[cfg(feature = "png_source")]
fn decode_png(bytes: &[u8]) -> Result<(i32, i32, Vec<u8>), String> {
    let mut cursor = Cursor::new(bytes);
    let mut decoder = Decoder::new(&mut cursor);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(|e| format!("PNG decode error: {}", e))?;
    let buf_size = reader.output_buffer_size().ok_or_else(|| "PNG decoder did not report output size".to_string())?;
    let mut img_data = vec![0; buf_size];
    let info = reader.next_frame(&mut img_data).map_err(|e| format!("PNG decode error: {}", e))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(format!("Unsupported PNG bit depth: {:?}", info.bit_depth));
    }

    let pixel_size = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Indexed => return Err("Indexed PNGs are not supported".to_string()),
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
    };

    let mut pixels = Vec::with_capacity((info.width * info.height * 4) as usize);
    for y in 0..info.height as usize {
        let line = &img_data[y * info.line_size..(y + 1) * info.line_size];
        for x in 0..info.width as usize {
            let px = &line[x * pixel_size..(x + 1) * pixel_size];
            let rgba = match pixel_size {
                1 => [px[0], px[0], px[0], 0xff],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 0xff],
                _ => [px[0], px[1], px[2], px[3]],
            };
            pixels.extend_from_slice(&rgba);
        }
    }
    Ok((info.width as i32, info.height as i32, pixels))
}

#[derive(Clone, Debug, PartialEq)]
/// One drawing directive.
pub enum Command {
    /// Restricts subsequent drawing to the rectangle.
    Scissor(Rect),
    /// Straight line of the given thickness.
    Line {
        /// Start point.
        begin: Point,
        /// End point.
        end: Point,
        /// Thickness in pixels.
        thickness: u16,
        /// Line color.
        color: Color,
    },
    /// Filled rectangle, optionally with rounded corners.
    RectFilled {
        /// Area to fill.
        rect: Rect,
        /// Corner radius.
        rounding: u16,
        /// Fill color.
        color: Color,
    },
    /// Filled triangle.
    TriangleFilled {
        /// First vertex.
        a: Point,
        /// Second vertex.
        b: Point,
        /// Third vertex.
        c: Point,
        /// Fill color.
        color: Color,
    },
    /// Filled ellipse inscribed in `rect`.
    CircleFilled {
        /// Bounding box.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Image drawn unscaled at the top left corner of `rect` and clipped to it.
    Image {
        /// Destination.
        rect: Rect,
        /// Pixels to draw.
        image: Image,
    },
    /// A run of text; `rect` is the clip of the text, its origin the top left of the first line.
    Text {
        /// Text area.
        rect: Rect,
        /// Face used to shape the glyphs.
        face: Face,
        /// Text color.
        foreground: Color,
        /// The string itself.
        text: String,
    },
}

#[derive(Clone, Debug)]
/// List of drawing directives plus the current scissor.
pub struct CommandBuffer {
    /// Scissor currently in effect.
    pub clip: Rect,
    /// Commands in issue order.
    pub commands: Vec<Command>,
}

impl Default for CommandBuffer {
    fn default() -> Self { Self { clip: NULL_RECT, commands: Vec::new() } }
}

impl CommandBuffer {
    /// Drops every command and disables clipping; the allocation is kept.
    pub fn reset(&mut self) {
        self.clip = NULL_RECT;
        self.commands.clear();
    }

    /// Changes the scissor. Consecutive scissor changes collapse into one command.
    pub fn push_scissor(&mut self, r: Rect) {
        self.clip = r;
        if let Some(Command::Scissor(last)) = self.commands.last_mut() {
            *last = r;
            return;
        }
        self.commands.push(Command::Scissor(r));
    }

    /// Appends a line.
    pub fn stroke_line(&mut self, begin: Point, end: Point, thickness: i32, color: Color) {
        self.commands.push(Command::Line { begin, end, thickness: thickness as u16, color });
    }

    /// Appends a filled rectangle. Transparent fills are dropped except as the very first command.
    pub fn fill_rect(&mut self, rect: Rect, rounding: u16, color: Color) {
        if color.a == 0 && !self.commands.is_empty() {
            return;
        }
        if !rect.intersect(&self.clip) {
            return;
        }
        self.commands.push(Command::RectFilled { rect, rounding, color });
    }

    /// Appends a filled ellipse.
    pub fn fill_circle(&mut self, rect: Rect, color: Color) {
        if color.a == 0 || !rect.intersect(&self.clip) {
            return;
        }
        self.commands.push(Command::CircleFilled { rect, color });
    }

    /// Appends a filled triangle; triangles with a vertex outside the scissor are dropped.
    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        if color.a == 0 {
            return;
        }
        if !self.clip.contains(a) || !self.clip.contains(b) || !self.clip.contains(c) {
            return;
        }
        self.commands.push(Command::TriangleFilled { a, b, c, color });
    }

    /// Appends a text run.
    pub fn draw_text(&mut self, rect: Rect, text: &str, face: &Face, foreground: Color) {
        if text.is_empty() || foreground.a == 0 || !rect.intersect(&self.clip) {
            return;
        }
        self.commands.push(Command::Text { rect, face: face.clone(), foreground, text: text.to_string() });
    }

    /// Appends an image.
    pub fn draw_image(&mut self, rect: Rect, image: &Image) {
        if !rect.intersect(&self.clip) {
            return;
        }
        self.commands.push(Command::Image { rect, image: image.clone() });
    }

    /// Number of commands.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Returns `true` if no command was recorded.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color { color(0xff, 0, 0, 0xff) }

    #[test]
    fn scissors_collapse() {
        let mut buf = CommandBuffer::default();
        buf.push_scissor(Rect::new(0, 0, 10, 10));
        buf.push_scissor(Rect::new(1, 1, 5, 5));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.commands[0], Command::Scissor(Rect::new(1, 1, 5, 5)));
        buf.fill_rect(Rect::new(1, 1, 2, 2), 0, red());
        buf.push_scissor(NULL_RECT);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.clip, NULL_RECT);
    }

    #[test]
    fn first_fill_survives_transparency() {
        let mut buf = CommandBuffer::default();
        buf.fill_rect(Rect::new(0, 0, 10, 10), 0, color(0, 0, 0, 0));
        buf.fill_rect(Rect::new(0, 0, 10, 10), 0, color(0, 0, 0, 0));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn clipped_primitives_are_dropped() {
        let mut buf = CommandBuffer::default();
        buf.push_scissor(Rect::new(0, 0, 10, 10));
        buf.fill_rect(Rect::new(20, 20, 5, 5), 0, red());
        buf.fill_circle(Rect::new(20, 20, 5, 5), red());
        buf.fill_triangle(Point::new(0, 0), Point::new(10, 0), Point::new(11, 5), red());
        buf.draw_text(Rect::new(0, 0, 5, 5), "", &Face::default(), red());
        assert_eq!(buf.len(), 1);
        buf.fill_triangle(Point::new(0, 0), Point::new(10, 0), Point::new(10, 10), red());
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn images_compare_by_identity() {
        let a = Image::filled(2, 2, red());
        let b = a.clone();
        let c = Image::filled(2, 2, red());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.pixel(1, 1), red());
        assert!(Image::from_rgba(2, 2, vec![0; 3]).is_err());
    }

    #[cfg(feature = "png_source")]
    #[test]
    fn png_decode_error_returns_err() { assert!(Image::from_png(&[]).is_err()); }
}

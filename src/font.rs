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
//! Font faces.
//!
//! A [`Face`] is a cheap handle over anything implementing [`Glyphs`]. TrueType and
//! OpenType files are parsed with `fontdue` through [`FontCollection`]; [`FixedFace`]
//! is a built-in monospace face used when no font file is supplied.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use fontdue::FontSettings;

use crate::error::FontError;

/// Coverage bitmap of a single rasterized glyph.
#[derive(Clone, Debug, Default)]
pub struct GlyphBitmap {
    /// Horizontal offset of the bitmap from the pen position.
    pub xmin: i32,
    /// Offset of the bitmap's bottom edge above the baseline.
    pub ymin: i32,
    /// Bitmap width in pixels.
    pub width: usize,
    /// Bitmap height in pixels.
    pub height: usize,
    /// Row-major 8-bit coverage.
    pub coverage: Vec<u8>,
}

/// Glyph source backing a [`Face`].
pub trait Glyphs: Send + Sync {
    /// Distance from the baseline to the top of the line, in pixels.
    fn ascent(&self) -> f32;
    /// Distance from the baseline to the bottom of the line, in pixels (positive).
    fn descent(&self) -> f32;
    /// Horizontal advance of `ch`.
    fn advance(&self, ch: char) -> f32;
    /// Kerning adjustment between two consecutive characters.
    fn kern(&self, _left: char, _right: char) -> f32 { 0.0 }
    /// Rasterizes `ch`.
    fn rasterize(&self, ch: char) -> Arc<GlyphBitmap>;
}

static NEXT_FACE_ID: AtomicU64 = AtomicU64::new(1);

/// Shared handle to a sized font face.
#[derive(Clone)]
pub struct Face {
    id: u64,
    glyphs: Arc<dyn Glyphs>,
}

impl Face {
    /// Wraps a glyph source into a face with a fresh identity.
    pub fn new(glyphs: Arc<dyn Glyphs>) -> Self {
        Self {
            id: NEXT_FACE_ID.fetch_add(1, Ordering::Relaxed),
            glyphs,
        }
    }

    /// Built-in face of `size` points at the given scaling.
    pub fn builtin(size: i32, scaling: f64) -> Self { Self::new(Arc::new(FixedFace::new((size as f64 * scaling) as i32))) }

    /// Process-unique identity of this face.
    pub fn id(&self) -> u64 { self.id }

    /// Access to the underlying glyph source.
    pub fn glyphs(&self) -> &dyn Glyphs { self.glyphs.as_ref() }

    /// Ascent rounded up to whole pixels.
    pub fn ascent(&self) -> i32 { self.glyphs.ascent().ceil() as i32 }

    /// Descent rounded up to whole pixels.
    pub fn descent(&self) -> i32 { self.glyphs.descent().ceil() as i32 }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Face {}

impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state) }
}

impl Debug for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "Face({})", self.id) }
}

impl Default for Face {
    fn default() -> Self { Self::builtin(12, 1.0) }
}

/// Monospace face with synthetic metrics; glyphs are drawn as outlined boxes.
pub struct FixedFace {
    size: i32,
    cache: Mutex<HashMap<char, Arc<GlyphBitmap>>>,
}

impl FixedFace {
    /// Creates a face whose line height equals `size` pixels.
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(4),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn advance_px(&self) -> i32 { self.size * 6 / 10 }

    fn box_glyph(&self, ch: char) -> GlyphBitmap {
        if ch.is_whitespace() {
            return GlyphBitmap::default();
        }
        let width = (self.advance_px() - 2).max(1) as usize;
        let height = (self.size - self.size / 4 - 2).max(1) as usize;
        let mut coverage = vec![0u8; width * height];
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    coverage[y * width + x] = 0xff;
                }
            }
        }
        GlyphBitmap { xmin: 1, ymin: 0, width, height, coverage }
    }
}

impl Glyphs for FixedFace {
    fn ascent(&self) -> f32 { (self.size - self.size / 4) as f32 }

    fn descent(&self) -> f32 { (self.size / 4) as f32 }

    fn advance(&self, ch: char) -> f32 {
        match ch {
            '\n' => 0.0,
            _ => self.advance_px() as f32,
        }
    }

    fn rasterize(&self, ch: char) -> Arc<GlyphBitmap> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache.entry(ch).or_insert_with(|| Arc::new(self.box_glyph(ch))).clone()
    }
}

struct TruetypeGlyphs {
    font: Arc<fontdue::Font>,
    px: f32,
    ascent: f32,
    descent: f32,
    cache: Mutex<HashMap<char, Arc<GlyphBitmap>>>,
}

impl Glyphs for TruetypeGlyphs {
    fn ascent(&self) -> f32 { self.ascent }

    fn descent(&self) -> f32 { self.descent }

    fn advance(&self, ch: char) -> f32 { self.font.metrics(ch, self.px).advance_width }

    fn kern(&self, left: char, right: char) -> f32 { self.font.horizontal_kern(left, right, self.px).unwrap_or(0.0) }

    fn rasterize(&self, ch: char) -> Arc<GlyphBitmap> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        cache
            .entry(ch)
            .or_insert_with(|| {
                let (metrics, coverage) = self.font.rasterize(ch, self.px);
                Arc::new(GlyphBitmap {
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                })
            })
            .clone()
    }
}

/// A parsed font file, possibly holding several faces (TrueType collections).
pub struct FontCollection {
    fonts: Vec<Arc<fontdue::Font>>,
}

/// One font out of a [`FontCollection`].
#[derive(Clone)]
pub struct FontRef {
    font: Arc<fontdue::Font>,
}

impl FontCollection {
    /// Parses a TrueType/OpenType file or collection.
    pub fn parse(bytes: &[u8]) -> Result<Self, FontError> {
        let first = fontdue::Font::from_bytes(bytes, FontSettings::default()).map_err(|e| FontError::Parse(e.to_string()))?;
        let mut fonts = vec![Arc::new(first)];
        // collections report an error once the index runs past the last face
        for index in 1..64u32 {
            let settings = FontSettings {
                collection_index: index,
                ..FontSettings::default()
            };
            match fontdue::Font::from_bytes(bytes, settings) {
                Ok(font) => fonts.push(Arc::new(font)),
                Err(_) => break,
            }
        }
        log::debug!("parsed font collection with {} face(s)", fonts.len());
        Ok(Self { fonts })
    }

    /// Number of fonts in the collection.
    pub fn len(&self) -> usize { self.fonts.len() }

    /// Returns `true` if the collection holds no font.
    pub fn is_empty(&self) -> bool { self.fonts.is_empty() }

    /// Returns the `index`-th font.
    pub fn font(&self, index: usize) -> Result<FontRef, FontError> {
        self.fonts.get(index).map(|font| FontRef { font: font.clone() }).ok_or(FontError::NoSuchFace(index))
    }
}

impl FontRef {
    /// Creates a face of `px` pixels.
    pub fn face(&self, px: i32) -> Face {
        let px = px.max(1) as f32;
        let (ascent, descent) = match self.font.horizontal_line_metrics(px) {
            Some(m) => (m.ascent, -m.descent),
            None => (px * 0.8, px * 0.2),
        };
        Face::new(Arc::new(TruetypeGlyphs {
            font: self.font.clone(),
            px,
            ascent,
            descent,
            cache: Mutex::new(HashMap::new()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_face_metrics() {
        let face = Face::new(Arc::new(FixedFace::new(12)));
        assert_eq!(face.ascent(), 9);
        assert_eq!(face.descent(), 3);
        assert_eq!(face.glyphs().advance('a'), 7.0);
    }

    #[test]
    fn faces_compare_by_identity() {
        let a = Face::builtin(12, 1.0);
        let b = a.clone();
        let c = Face::builtin(12, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn box_glyph_outline() {
        let face = FixedFace::new(12);
        let g = face.rasterize('x');
        assert_eq!(g.width, 5);
        assert_eq!(g.coverage[0], 0xff);
        assert!(face.rasterize(' ').coverage.is_empty());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(FontCollection::parse(&[1, 2, 3, 4]).is_err());
    }
}

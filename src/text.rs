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
//! Text measurement and placement.
//!
//! Widths of whole lines are memoised in a small LRU owned by the context
//! ([`TextCache`]); everything else is computed directly from the face.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::command::CommandBuffer;
use crate::font::Face;
use crate::rect::{Point, Rect};
use crate::Color;

/// Default number of cached line widths.
pub const DEFAULT_WIDTH_CACHE_CAPACITY: usize = 256;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Horizontal placement of text inside its rectangle.
pub enum HAlign {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Vertical placement of text inside its rectangle.
pub enum VAlign {
    /// Top of the rectangle, after padding.
    Top,
    /// Vertically centered.
    Center,
    /// Bottom of the rectangle.
    Bottom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Text alignment: horizontal then vertical.
pub struct Align(pub HAlign, pub VAlign);

impl Align {
    /// Left, vertically centered.
    pub const LC: Align = Align(HAlign::Left, VAlign::Center);
    /// Centered on both axes.
    pub const CC: Align = Align(HAlign::Center, VAlign::Center);
    /// Right, vertically centered.
    pub const RC: Align = Align(HAlign::Right, VAlign::Center);
    /// Left, top.
    pub const LT: Align = Align(HAlign::Left, VAlign::Top);
    /// Centered, top.
    pub const CT: Align = Align(HAlign::Center, VAlign::Top);
    /// Right, top.
    pub const RT: Align = Align(HAlign::Right, VAlign::Top);
    /// Left, bottom.
    pub const LB: Align = Align(HAlign::Left, VAlign::Bottom);
    /// Centered, bottom.
    pub const CB: Align = Align(HAlign::Center, VAlign::Bottom);
    /// Right, bottom.
    pub const RB: Align = Align(HAlign::Right, VAlign::Bottom);
}

/// Line height of `face`.
pub fn font_height(face: &Face) -> i32 { face.ascent() + face.descent() }

/// Advance of a single character, rounded up.
pub fn glyph_advance(face: &Face, ch: char) -> i32 { face.glyphs().advance(ch).ceil() as i32 }

/// Width of a run of characters including kerning, rounded up once at the end.
pub fn measure_runes(face: &Face, runes: &[char]) -> i32 {
    let glyphs = face.glyphs();
    let mut advance = 0.0f32;
    let mut prev: Option<char> = None;
    for &c in runes {
        if let Some(p) = prev {
            advance += glyphs.kern(p, c);
        }
        advance += glyphs.advance(c);
        prev = Some(c);
    }
    advance.ceil() as i32
}

fn measure_str(face: &Face, s: &str) -> i32 {
    let runes: Vec<char> = s.chars().collect();
    measure_runes(face, &runes)
}

/// Number of leading characters of `text` that fit strictly inside `space` pixels.
pub fn text_clamp(face: &Face, text: &[char], space: i32) -> usize {
    let mut width = 0;
    for (i, &ch) in text.iter().enumerate() {
        let xw = glyph_advance(face, ch);
        if width + xw >= space {
            return i;
        }
        width += xw;
    }
    text.len()
}

/// Least-recently-used memo of line widths keyed by face and line.
pub struct TextCache {
    widths: LruCache<(u64, String), i32>,
}

impl Default for TextCache {
    fn default() -> Self { Self::new(DEFAULT_WIDTH_CACHE_CAPACITY) }
}

fn ceiling(capacity: usize) -> NonZeroUsize { NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN) }

impl TextCache {
    /// Creates a cache holding at most `capacity` widths.
    pub fn new(capacity: usize) -> Self { Self { widths: LruCache::new(ceiling(capacity)) } }

    /// Current ceiling.
    pub fn capacity(&self) -> usize { self.widths.cap().get() }

    /// Number of cached widths.
    pub fn len(&self) -> usize { self.widths.len() }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool { self.widths.is_empty() }

    /// Raises the ceiling to `capacity`. Growing discards the cached entries; a smaller value is ignored.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.widths = LruCache::new(ceiling(capacity));
        }
    }

    fn line_width(&mut self, face: &Face, line: &str) -> i32 {
        let key = (face.id(), line.to_string());
        if let Some(w) = self.widths.get(&key) {
            return *w;
        }
        let w = measure_str(face, line);
        self.widths.put(key, w);
        w
    }

    /// Width of the widest line of `s`.
    pub fn font_width(&mut self, face: &Face, s: &str) -> i32 { s.split('\n').map(|line| self.line_width(face, line)).max().unwrap_or(0) }
}

#[derive(Clone, Debug, PartialEq)]
/// One line produced by [`layout`].
pub struct TextLine {
    /// Characters of the line, without the terminating newline.
    pub text: String,
    /// Advance of every character, in pixels.
    pub advances: Vec<i32>,
    /// Ascent of the face.
    pub ascent: i32,
    /// Descent of the face.
    pub descent: i32,
    /// Pixel bounds relative to the top left of the text block.
    pub bounds: Rect,
}

/// Breaks `s` into lines no wider than `max_width`, wrapping at spaces when possible.
pub fn layout(face: &Face, s: &str, max_width: i32) -> Vec<TextLine> {
    let ascent = face.ascent();
    let descent = face.descent();
    let line_h = ascent + descent;
    let mut lines = Vec::new();
    let mut y = 0;
    let mut push = |chars: &[char], lines: &mut Vec<TextLine>| {
        let advances: Vec<i32> = chars.iter().map(|&c| glyph_advance(face, c)).collect();
        let width = measure_runes(face, chars);
        lines.push(TextLine {
            text: chars.iter().collect(),
            advances,
            ascent,
            descent,
            bounds: Rect::new(0, y, width, line_h),
        });
        y += line_h;
    };
    for paragraph in s.split('\n') {
        let chars: Vec<char> = paragraph.chars().collect();
        let mut start = 0;
        loop {
            let rest = &chars[start..];
            let mut n = 0;
            let mut width = 0;
            let mut last_space = None;
            while n < rest.len() {
                let xw = glyph_advance(face, rest[n]);
                if n > 0 && width + xw > max_width {
                    break;
                }
                if rest[n] == ' ' {
                    last_space = Some(n);
                }
                width += xw;
                n += 1;
            }
            if n < rest.len() {
                if rest[n] == ' ' {
                    push(&rest[..n], &mut lines);
                    start += n + 1;
                    continue;
                }
                if let Some(sp) = last_space.filter(|&sp| sp > 0) {
                    push(&rest[..sp], &mut lines);
                    start += sp + 1;
                    continue;
                }
                push(&rest[..n], &mut lines);
                start += n;
                continue;
            }
            push(rest, &mut lines);
            break;
        }
    }
    lines
}

#[derive(Copy, Clone, Debug)]
/// Colors and padding used to place a text run.
pub struct TextWidget {
    /// Inner padding around the text.
    pub padding: Point,
    /// Background color behind the text.
    pub background: Color,
    /// Text color.
    pub text: Color,
}

/// Emits `s` aligned inside `b`.
pub fn widget_text(out: &mut CommandBuffer, cache: &mut TextCache, b: Rect, s: &str, t: &TextWidget, align: Align, face: &Face) {
    let mut b = b;
    b.h = b.h.max(2 * t.padding.y);
    let mut lbl = Rect::new(0, b.y + t.padding.y, 0, b.h - 2 * t.padding.y);

    match align.0 {
        HAlign::Left => {
            lbl.x = b.x + t.padding.x;
            lbl.w = (b.w - 2 * t.padding.x).max(0);
        }
        HAlign::Center => {
            let text_width = cache.font_width(face, s) + 2 * t.padding.x;
            lbl.w = (2 * t.padding.x + text_width).max(1);
            lbl.x = b.x + t.padding.x + ((b.w - 2 * t.padding.x) - lbl.w) / 2;
            lbl.x = lbl.x.max(b.x + t.padding.x);
            lbl.w = (b.x + b.w).min(lbl.x + lbl.w);
            if lbl.w >= lbl.x {
                lbl.w -= lbl.x;
            }
        }
        HAlign::Right => {
            let text_width = cache.font_width(face, s) + 2 * t.padding.x;
            lbl.x = (b.x + t.padding.x).max((b.x + b.w) - (2 * t.padding.x + text_width));
            lbl.w = text_width + 2 * t.padding.x;
        }
    }

    let fh = font_height(face);
    match align.1 {
        VAlign::Top => {}
        VAlign::Center => lbl.y = b.y + b.h / 2 - fh / 2,
        VAlign::Bottom => lbl.y = b.y + b.h - fh,
    }
    if lbl.h < fh * 2 {
        lbl.h = fh * 2;
    }

    out.draw_text(lbl, s, face, t.text);
}

/// Emits `s` inside `b`, breaking it into as many lines as fit.
pub fn widget_text_wrap(out: &mut CommandBuffer, cache: &mut TextCache, b: Rect, s: &[char], t: &TextWidget, face: &Face) {
    let text = TextWidget { padding: Point::new(0, 0), background: t.background, text: t.text };
    let mut b = b;
    b.w = b.w.max(2 * t.padding.x);
    b.h = b.h.max(2 * t.padding.y) - 2 * t.padding.y;

    let fh = font_height(face);
    let mut line = Rect::new(b.x + t.padding.x, b.y + t.padding.y, b.w - 2 * t.padding.x, 2 * t.padding.y + fh);

    let mut done = 0;
    let mut fitting = text_clamp(face, s, line.w);
    while done < s.len() {
        if fitting == 0 || line.y + line.h >= b.y + b.h {
            break;
        }
        let piece: String = s[done..done + fitting].iter().collect();
        widget_text(out, cache, line, &piece, &text, Align::LC, face);
        done += fitting;
        line.y += fh + 2 * t.padding.y;
        fitting = text_clamp(face, &s[done..], line.w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::color;

    fn face() -> Face { Face::builtin(12, 1.0) }

    #[test]
    fn widths_and_heights() {
        let f = face();
        let mut cache = TextCache::default();
        assert_eq!(font_height(&f), 12);
        assert_eq!(cache.font_width(&f, "abc"), 21);
        assert_eq!(cache.font_width(&f, "a\nabcd\nab"), 28);
        assert_eq!(cache.font_width(&f, ""), 0);
        assert_eq!(measure_runes(&f, &['x', 'y']), 14);
    }

    #[test]
    fn cache_evicts_least_recent() {
        let f = face();
        let mut cache = TextCache::new(2);
        cache.font_width(&f, "a");
        cache.font_width(&f, "b");
        cache.font_width(&f, "a");
        cache.font_width(&f, "c");
        assert_eq!(cache.len(), 2);
        assert!(cache.widths.contains(&(f.id(), "a".to_string())));
        assert!(!cache.widths.contains(&(f.id(), "b".to_string())));
    }

    #[test]
    fn capacity_only_grows() {
        let mut cache = TextCache::new(10);
        cache.set_capacity(5);
        assert_eq!(cache.capacity(), 10);
        cache.set_capacity(20);
        assert_eq!(cache.capacity(), 20);
    }

    #[test]
    fn misses_past_the_ceiling_keep_the_newest_lines() {
        let f = face();
        let mut cache = TextCache::new(8);
        for i in 0..100 {
            cache.font_width(&f, &format!("line {}", i));
        }
        assert_eq!(cache.len(), 8);
        assert!(cache.widths.contains(&(f.id(), "line 99".to_string())));
        assert!(!cache.widths.contains(&(f.id(), "line 91".to_string())));
    }

    #[test]
    fn clamp_is_strict() {
        let f = face();
        let text: Vec<char> = "abcdef".chars().collect();
        assert_eq!(text_clamp(&f, &text, 21), 2);
        assert_eq!(text_clamp(&f, &text, 22), 3);
        assert_eq!(text_clamp(&f, &text, 1000), 6);
    }

    #[test]
    fn layout_wraps_at_spaces() {
        let f = face();
        let lines = layout(&f, "aa bb cc\nd", 40);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["aa bb", "cc", "d"]);
        assert_eq!(lines[1].bounds, Rect::new(0, 12, 14, 12));
        assert_eq!(lines[0].advances.len(), 5);
    }

    #[test]
    fn centered_label_rect() {
        let f = face();
        let mut cache = TextCache::default();
        let mut out = CommandBuffer::default();
        let t = TextWidget { padding: Point::new(2, 2), background: color(0, 0, 0, 255), text: color(255, 255, 255, 255) };
        widget_text(&mut out, &mut cache, Rect::new(0, 0, 100, 20), "ab", &t, Align::CC, &f);
        match &out.commands[0] {
            Command::Text { rect, text, .. } => {
                assert_eq!(text, "ab");
                // text 14 + 4 padding, plus 4 again for the label
                assert_eq!(rect.w, 22);
                assert_eq!(rect.x, 2 + (96 - 22) / 2);
                assert_eq!(rect.y, 10 - 6);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn wrap_emits_multiple_lines() {
        let f = face();
        let mut cache = TextCache::default();
        let mut out = CommandBuffer::default();
        let t = TextWidget { padding: Point::new(0, 0), background: color(0, 0, 0, 255), text: color(255, 255, 255, 255) };
        let s: Vec<char> = "abcdefgh".chars().collect();
        widget_text_wrap(&mut out, &mut cache, Rect::new(0, 0, 30, 100), &s, &t, &f);
        assert_eq!(out.len(), 2);
    }
}

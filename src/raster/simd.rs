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
//! SSE4.1 variant of the src-over fill loop.
//!
//! The vector loop replaces the division by 0xffff of the scalar loop with
//! `(x + (x >> 16) + 1) >> 16`, which is exact for every product a pixel channel
//! and a 16-bit alpha complement can produce, so both loops write the same bytes.

use std::sync::OnceLock;

use super::framebuffer::Paint;
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
use super::framebuffer::fill_over_row_scalar;

static SSE41: OnceLock<bool> = OnceLock::new();

/// Returns `true` when the vector loop can run on this CPU. Detection happens once.
pub(crate) fn available() -> bool {
    *SSE41.get_or_init(|| {
        let found = detect();
        log::debug!("sse4.1 fill path {}", if found { "enabled" } else { "unavailable" });
        found
    })
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect() -> bool { is_x86_feature_detected!("sse4.1") }

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn detect() -> bool { false }

/// Src-over of `p` on a row of RGBA8 pixels; only called when [`available`] said so.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) fn fill_over_row(row: &mut [u8], p: Paint) {
    // SAFETY: callers check `available()` first, so the CPU runs SSE4.1
    unsafe { fill_over_row_sse41(row, p) }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) fn fill_over_row(row: &mut [u8], p: Paint) { fill_over_row_scalar(row, p) }

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[target_feature(enable = "sse4.1")]
fn fill_over_row_sse41(row: &mut [u8], p: Paint) {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    let a = ((super::framebuffer::M - p.a) * 0x101) as i32;
    let alpha = _mm_set1_epi32(a);
    let src = _mm_set_epi32(p.a as i32, p.b as i32, p.g as i32, p.r as i32);
    let one = _mm_set1_epi32(1);
    for chunk in row.chunks_exact_mut(4) {
        let px = _mm_cvtsi32_si128(i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        let d = _mm_cvtepu8_epi32(px);
        // the products stay below 2^32; the shifts are logical
        let x = _mm_mullo_epi32(d, alpha);
        let q = _mm_srli_epi32(_mm_add_epi32(_mm_add_epi32(x, _mm_srli_epi32(x, 16)), one), 16);
        let v = _mm_srli_epi32(_mm_add_epi32(q, src), 8);
        let packed = _mm_packus_epi16(_mm_packus_epi32(v, v), _mm_setzero_si128());
        chunk.copy_from_slice(&_mm_cvtsi128_si32(packed).to_ne_bytes());
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::super::framebuffer::fill_over_row_scalar;
    use super::*;
    use crate::color;

    #[test]
    fn vector_and_scalar_loops_agree() {
        if !available() {
            return;
        }
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let c = color(rng.random(), rng.random(), rng.random(), rng.random());
            let p = Paint::from_color(c);
            let row: Vec<u8> = (0..64).map(|_| rng.random()).collect();
            // destination pixels are premultiplied: channels never exceed alpha
            let row: Vec<u8> = row.chunks_exact(4).flat_map(|px| [px[0].min(px[3]), px[1].min(px[3]), px[2].min(px[3]), px[3]]).collect();
            let mut scalar = row.clone();
            let mut vector = row;
            fill_over_row_scalar(&mut scalar, p);
            fill_over_row(&mut vector, p);
            assert_eq!(scalar, vector, "color {:?}", c);
        }
    }

    #[test]
    fn extremes_agree() {
        if !available() {
            return;
        }
        for a in [0u8, 1, 127, 128, 254, 255] {
            let p = Paint::from_color(color(255, 0, 255, a));
            let mut scalar = vec![255u8; 16];
            let mut vector = scalar.clone();
            fill_over_row_scalar(&mut scalar, p);
            fill_over_row(&mut vector, p);
            assert_eq!(scalar, vector);
        }
    }
}

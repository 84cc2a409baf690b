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
//! Error types for the few fallible entry points of the crate.

use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Failure while loading or selecting a font.
pub enum FontError {
    /// The font file could not be parsed.
    Parse(String),
    /// The collection has no face at the requested index.
    NoSuchFace(usize),
}

impl Display for FontError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "font parse error: {}", msg),
            Self::NoSuchFace(index) => write!(f, "font collection has no face at index {}", index),
        }
    }
}

impl std::error::Error for FontError {}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Resource failures surfaced to the embedding application.
pub enum Error {
    /// Font loading failed.
    Font(FontError),
    /// The pixel surface could not be created or resized.
    Surface(String),
    /// An image could not be decoded.
    Image(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Font(err) => err.fmt(f),
            Self::Surface(msg) => write!(f, "surface error: {}", msg),
            Self::Image(msg) => write!(f, "image error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Font(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FontError> for Error {
    fn from(err: FontError) -> Self { Self::Font(err) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_errors_convert() {
        let err: Error = FontError::NoSuchFace(3).into();
        assert_eq!(err.to_string(), "font collection has no face at index 3");
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&Error::Surface("gone".into())).is_none());
    }
}

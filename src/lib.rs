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
#![warn(missing_docs)]
//! `imkit` is the interaction core of an immediate-mode GUI toolkit.
//!
//! Every frame the host feeds input events into a [`Context`], the context calls the
//! application's update procedure for the root window, the floating popups and the
//! docked windows, and widgets append drawing primitives to per-window
//! [`CommandBuffer`]s. The concatenated command list is compared with the previous
//! frame and, when it changed, handed to the software rasterizer in [`raster`].
//!
//! ```no_run
//! use imkit::*;
//!
//! let mw = MasterWindow::new(WindowFlags::empty(), "hello", |w: &mut Window<'_>| {
//!     w.row(30).dynamic(1);
//!     if w.button_text("Click") {
//!         log::info!("clicked");
//!     }
//! });
//! let _ctx = mw.lock();
//! ```

mod clipboard;
mod command;
mod context;
mod dock;
mod editor;
mod error;
mod font;
mod input;
mod layout;
mod master;
mod panel;
mod popup;
mod rect;
mod style;
mod text;
mod window;

pub mod raster;
pub mod widgets;

pub use clipboard::*;
pub use command::*;
pub use context::*;
pub use dock::*;
pub use editor::*;
pub use error::*;
pub use font::*;
pub use input::*;
pub use layout::*;
pub use master::*;
pub use popup::*;
pub use rect::*;
pub use style::*;
pub use text::*;
pub use widgets::{Label, Symbol};
pub use window::*;

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit, non premultiplied components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

impl Color {
    /// Returns the same color with the alpha channel replaced.
    pub fn with_alpha(self, a: u8) -> Color { Color { a, ..self } }
}

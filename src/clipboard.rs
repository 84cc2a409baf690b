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
//! Clipboard bridge used by the property editor.

/// Text clipboard.
pub trait Clipboard: Send {
    /// Current clipboard text, if any.
    fn get(&mut self) -> Option<String>;
    /// Replaces the clipboard text.
    fn set(&mut self, text: &str);
}

/// Process-local clipboard.
#[derive(Default, Debug, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    /// Empty clipboard.
    pub fn new() -> Self { Self::default() }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> Option<String> { self.text.clone() }

    fn set(&mut self, text: &str) { self.text = Some(text.to_string()) }
}

/// The operating system clipboard. Failures are logged and otherwise ignored.
#[cfg(feature = "system-clipboard")]
#[derive(Default, Debug)]
pub struct SystemClipboard {
    fallback: MemoryClipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Connects to the system clipboard on every access.
    pub fn new() -> Self { Self::default() }

    fn open() -> Option<arboard::Clipboard> {
        match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                log::warn!("system clipboard unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        let Some(mut cb) = Self::open() else {
            return self.fallback.get();
        };
        match cb.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("clipboard read failed: {}", e);
                None
            }
        }
    }

    fn set(&mut self, text: &str) {
        self.fallback.set(text);
        if let Some(mut cb) = Self::open() {
            if let Err(e) = cb.set_text(text.to_string()) {
                log::warn!("clipboard write failed: {}", e);
            }
        }
    }
}

/// Clipboard installed in new contexts: the system one when the `system-clipboard`
/// feature is enabled, the in-memory one otherwise.
pub fn default_clipboard() -> Box<dyn Clipboard> {
    #[cfg(feature = "system-clipboard")]
    {
        Box::new(SystemClipboard::new())
    }
    #[cfg(not(feature = "system-clipboard"))]
    {
        Box::new(MemoryClipboard::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_round_trips() {
        let mut cb = MemoryClipboard::new();
        assert_eq!(cb.get(), None);
        cb.set("abc");
        assert_eq!(cb.get().as_deref(), Some("abc"));
    }
}

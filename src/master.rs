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
//! The top level window.
//!
//! A [`MasterWindow`] owns a [`Context`] behind a mutex so that other threads can
//! inject events, open popups or request a redraw while the UI is idle. The host
//! supplies a [`Binding`]: a pixel surface plus an event source. [`MasterWindow::main`]
//! drives everything from the calling thread; [`MasterWindow::run_updater`] runs the
//! idle driver on a thread of its own for bindings that can be shared.

use std::any::Any;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::command::Command;
use crate::context::Context;
use crate::dock::{DockPolicy, DockSplit};
use crate::input::{Input, KeyEvent, MouseButton};
use crate::raster::{self, Framebuffer};
use crate::rect::{Point, Rect};
use crate::style::{Style, Theme};
use crate::text::DEFAULT_WIDTH_CACHE_CAPACITY;
use crate::window::{WinId, Window, WindowFlags};

#[derive(Clone, Debug, PartialEq)]
/// Input and lifecycle notifications delivered by a [`Binding`].
pub enum Event {
    /// The pointer moved to the given position.
    MouseMove(Point),
    /// A mouse button changed state.
    MouseButton {
        /// Button that changed.
        button: MouseButton,
        /// `true` on press.
        down: bool,
        /// Pointer position at the time of the change.
        pos: Point,
    },
    /// Wheel steps, positive away from the user.
    Wheel(i32),
    /// A key press or release.
    Key(KeyEvent),
    /// The surface gained (`true`) or lost keyboard and pointer focus.
    Focus(bool),
    /// The surface was resized to the given size.
    Resize(Point),
    /// The user asked to close the window.
    Close,
    /// The surface contents were lost and must be repainted.
    Expose,
}

/// Host side of a [`MasterWindow`].
pub trait Binding {
    /// Pixel surface the frames are rasterized into. Its size is the size of the root window.
    fn surface(&mut self) -> &mut Framebuffer;
    /// Shows the surface on screen.
    fn present(&mut self);
    /// Appends the events received since the last call.
    fn poll_events(&mut self, out: &mut Vec<Event>);
}

/// Settings of a [`MasterWindow`].
pub struct MasterOptions {
    /// Title of the host window.
    pub title: String,
    /// Initial surface size.
    pub size: Point,
    /// Flags of the root window.
    pub flags: WindowFlags,
    /// Color theme.
    pub theme: Theme,
    /// Scaling factor of every metric.
    pub scaling: f64,
    /// Where windows dragged over the docking area may land.
    pub dock_policy: DockPolicy,
    /// Ceiling of the text width cache.
    pub width_cache_capacity: usize,
    /// Driver period while no mouse button is held.
    pub idle_interval: Duration,
    /// Driver period while a mouse button is held.
    pub busy_interval: Duration,
    /// Clipboard override; the system clipboard is used when `None`.
    pub clipboard: Option<Box<dyn Clipboard>>,
}

impl Default for MasterOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            size: Point::new(640, 480),
            flags: WindowFlags::empty(),
            theme: Theme::Default,
            scaling: 1.0,
            dock_policy: DockPolicy::default(),
            width_cache_capacity: DEFAULT_WIDTH_CACHE_CAPACITY,
            idle_interval: Duration::from_millis(20),
            busy_interval: Duration::from_millis(10),
            clipboard: None,
        }
    }
}

struct Shared {
    ctx: Mutex<Context>,
    closing: AtomicBool,
    changed: Arc<AtomicI32>,
    title: String,
    size: Point,
    idle_interval: Duration,
    busy_interval: Duration,
}

#[derive(Clone)]
/// Handle to the top level window. Clones refer to the same window.
pub struct MasterWindow {
    shared: Arc<Shared>,
}

/// Exclusive access to the context of a [`MasterWindow`].
pub struct ContextGuard<'a>(MutexGuard<'a, Context>);

impl Deref for ContextGuard<'_> {
    type Target = Context;
    fn deref(&self) -> &Context { &self.0 }
}

impl DerefMut for ContextGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context { &mut self.0 }
}

impl MasterWindow {
    /// Creates a 640x480 window whose root is populated by `f`.
    pub fn new(flags: WindowFlags, title: &str, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> Self {
        Self::with_options(MasterOptions { title: title.to_string(), flags, ..MasterOptions::default() }, f)
    }

    /// Creates a window from explicit options.
    pub fn with_options(options: MasterOptions, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> Self {
        let mut ctx = Context::new(options.flags, f);
        ctx.set_style(Style::from_theme(options.theme, options.scaling));
        ctx.set_dock_policy(options.dock_policy);
        ctx.set_width_cache_capacity(options.width_cache_capacity);
        if let Some(clipboard) = options.clipboard {
            ctx.set_clipboard(clipboard);
        }
        log::debug!("master window {:?} created ({}x{})", options.title, options.size.x, options.size.y);
        let changed = ctx.changed_counter();
        Self {
            shared: Arc::new(Shared {
                ctx: Mutex::new(ctx),
                closing: AtomicBool::new(false),
                changed,
                title: options.title,
                size: options.size,
                idle_interval: options.idle_interval,
                busy_interval: options.busy_interval,
            }),
        }
    }

    /// Title the host window should carry.
    pub fn title(&self) -> &str { &self.shared.title }

    /// Size the host surface should be created with.
    pub fn initial_size(&self) -> Point { self.shared.size }

    /// Locks the context. A lock poisoned by a panicking update procedure is recovered.
    pub fn lock(&self) -> ContextGuard<'_> {
        match self.shared.ctx.lock() {
            Ok(guard) => ContextGuard(guard),
            Err(poisoned) => ContextGuard(poisoned.into_inner()),
        }
    }

    /// Asks the driver loop to stop; idempotent.
    pub fn close(&self) {
        if !self.shared.closing.swap(true, Ordering::SeqCst) {
            log::debug!("master window {:?} closing", self.shared.title);
        }
    }

    /// Returns `true` once [`MasterWindow::close`] was called or the binding reported [`Event::Close`].
    pub fn closed(&self) -> bool { self.shared.closing.load(Ordering::SeqCst) }

    /// Requests a new frame. Does not take the lock.
    pub fn changed(&self) { self.shared.changed.fetch_max(2, Ordering::SeqCst); }

    /// Copy of the current style.
    pub fn style(&self) -> Style { self.lock().style().clone() }

    /// Replaces the style.
    pub fn set_style(&self, style: Style) { self.lock().set_style(style) }

    /// Opens a floating window from outside the update procedures.
    pub fn popup_open(&self, title: &str, flags: WindowFlags, rect: Rect, scale: bool, f: impl FnMut(&mut Window<'_>) + Send + 'static) -> WinId {
        let id = self.lock().popup_open(title, flags, rect, scale, f);
        self.changed();
        id
    }

    /// See [`Context::walk`].
    pub fn walk(&self, f: impl FnMut(&str, Option<&(dyn Any + Send)>, bool, i32, Rect)) { self.lock().walk(f) }

    /// Closes every window except the root and empties the docking tree.
    pub fn reset_windows(&self) -> DockSplit {
        let split = self.lock().reset_windows();
        self.changed();
        split
    }

    /// Snapshot of the input state.
    pub fn input(&self) -> Input { self.lock().input().clone() }

    /// See [`Context::activate_editor`].
    pub fn activate_editor(&self, name: &str) { self.lock().activate_editor(name) }

    /// Queues an event for the next frame.
    pub fn handle_event(&self, e: Event) {
        let mut ctx = self.lock();
        self.apply(&mut ctx, e);
    }

    fn apply(&self, ctx: &mut Context, e: Event) {
        match e {
            Event::Close => self.close(),
            Event::Resize(_) | Event::Expose => {
                ctx.invalidate();
                ctx.changed();
            }
            e => ctx.handle_event(e),
        }
    }

    /// Runs one frame over `viewport` without painting; returns `true` if the command list changed.
    pub fn frame(&self, viewport: Rect) -> bool { self.lock().frame(viewport) }

    /// Commands of the last frame, for consumers other than the software rasterizer.
    pub fn commands(&self) -> Vec<Command> { self.lock().commands().to_vec() }

    /// Runs a frame if one is due and paints it into the binding's surface.
    ///
    /// Returns `true` while a mouse button is held, in which case frames keep
    /// running at the busy interval even when nothing asked for one.
    pub fn tick(&self, binding: &mut dyn Binding) -> bool {
        let mut ctx = self.lock();
        if self.closed() {
            return false;
        }
        let busy = ctx.input().mouse.any_down();
        if !ctx.take_change() && !busy {
            return false;
        }
        let viewport = binding.surface().bounds();
        if ctx.frame(viewport) {
            let n = raster::draw(binding.surface(), ctx.commands());
            log::trace!("{} primitives painted", n);
            binding.present();
        }
        busy
    }

    /// Drives the window from the calling thread until it is closed.
    pub fn main(&self, binding: &mut dyn Binding) {
        let mut events = Vec::new();
        let mut focused_once = false;
        while !self.closed() {
            events.clear();
            binding.poll_events(&mut events);
            if !events.is_empty() {
                let mut ctx = self.lock();
                for e in events.drain(..) {
                    if e == Event::Focus(true) && !focused_once {
                        focused_once = true;
                        ctx.invalidate();
                    }
                    self.apply(&mut ctx, e);
                }
            }
            let busy = self.tick(binding);
            std::thread::sleep(if busy { self.shared.busy_interval } else { self.shared.idle_interval });
        }
        log::debug!("master window {:?} main loop finished", self.shared.title);
    }

    /// Spawns the idle driver on its own thread.
    ///
    /// The thread wakes up every idle interval (the busy interval while a mouse
    /// button is held) and paints a frame into `binding` when one is due. Events
    /// are expected to arrive through [`MasterWindow::handle_event`]. The thread
    /// exits once the window is closed.
    pub fn run_updater<B: Binding + Send + 'static>(&self, binding: Arc<Mutex<B>>) -> JoinHandle<()> {
        let mw = self.clone();
        std::thread::spawn(move || {
            let mut busy = false;
            while !mw.closed() {
                std::thread::sleep(if busy { mw.shared.busy_interval } else { mw.shared.idle_interval });
                let mut b = match binding.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                busy = mw.tick(&mut *b);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Headless {
        fb: Framebuffer,
        presented: usize,
        pending: Vec<Event>,
    }

    impl Headless {
        fn new() -> Self { Self { fb: Framebuffer::new(200, 100), presented: 0, pending: Vec::new() } }
    }

    impl Binding for Headless {
        fn surface(&mut self) -> &mut Framebuffer { &mut self.fb }

        fn present(&mut self) { self.presented += 1 }

        fn poll_events(&mut self, out: &mut Vec<Event>) { out.append(&mut self.pending) }
    }

    #[test]
    fn options_default_to_a_small_window() {
        let o = MasterOptions::default();
        assert_eq!(o.size, Point::new(640, 480));
        assert_eq!(o.idle_interval, Duration::from_millis(20));
        assert_eq!(o.busy_interval, Duration::from_millis(10));
        let mw = MasterWindow::new(WindowFlags::empty(), "hello", |_w| {});
        assert_eq!(mw.title(), "hello");
        assert_eq!(mw.initial_size(), Point::new(640, 480));
    }

    #[test]
    fn ticks_paint_only_when_something_changed() {
        let mw = MasterWindow::new(WindowFlags::empty(), "t", |w| {
            w.row(30).dynamic(1);
            w.button_text("Click");
        });
        let mut b = Headless::new();
        // the initial counter asks for two frames; the second one is identical
        mw.tick(&mut b);
        mw.tick(&mut b);
        mw.tick(&mut b);
        assert_eq!(b.presented, 1);
        assert_eq!(mw.lock().window(crate::context::ROOT).bounds, Rect::new(0, 0, 200, 100));

        mw.handle_event(Event::Expose);
        mw.tick(&mut b);
        assert_eq!(b.presented, 2);
    }

    #[test]
    fn close_event_stops_the_loop() {
        let mw = MasterWindow::new(WindowFlags::empty(), "t", |_w| {});
        let mut b = Headless::new();
        b.pending.push(Event::MouseMove(Point::new(3, 4)));
        b.pending.push(Event::Close);
        mw.main(&mut b);
        assert!(mw.closed());
        assert_eq!(mw.input().mouse.pos, Point::new(0, 0));
        assert_eq!(b.presented, 0);
    }

    #[test]
    fn popup_open_from_outside_requests_a_frame() {
        let mw = MasterWindow::new(WindowFlags::empty(), "t", |_w| {});
        let mut b = Headless::new();
        while mw.lock().take_change() {}
        mw.popup_open("About", WindowFlags::TITLE | WindowFlags::NONMODAL, Rect::new(10, 10, 100, 50), false, |w| {
            w.row(20).dynamic(1);
            w.label("imkit", crate::text::Align::LC);
        });
        mw.tick(&mut b);
        assert_eq!(b.presented, 1);
        let mut titles = Vec::new();
        mw.walk(|title, _, docked, _, _| titles.push((title.to_string(), docked)));
        assert_eq!(titles, vec![(String::new(), false), (String::new(), true), ("About".to_string(), false)]);
    }

    #[test]
    fn updater_thread_exits_after_close() {
        let mw = MasterWindow::new(WindowFlags::empty(), "t", |_w| {});
        let binding = Arc::new(Mutex::new(Headless::new()));
        let handle = mw.run_updater(binding.clone());
        std::thread::sleep(Duration::from_millis(60));
        mw.close();
        assert!(handle.join().is_ok());
        assert!(binding.lock().unwrap().presented >= 1);
    }
}

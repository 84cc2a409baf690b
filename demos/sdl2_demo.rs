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
//! SDL2 host for the toolkit: frames are rasterized in software and streamed to a texture.
//!
//! Run with `cargo run --example sdl2_demo --features example-sdl2`.

use imkit::raster::Framebuffer;
use imkit::*;

use sdl2::event::{Event as SdlEvent, WindowEvent};
use sdl2::keyboard::{Keycode, Mod};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use sdl2::EventPump;

struct SdlBinding {
    canvas: WindowCanvas,
    creator: TextureCreator<WindowContext>,
    pump: EventPump,
    fb: Framebuffer,
}

fn map_mouse_button(b: sdl2::mouse::MouseButton) -> Option<MouseButton> {
    match b {
        sdl2::mouse::MouseButton::Left => Some(MouseButton::Left),
        sdl2::mouse::MouseButton::Middle => Some(MouseButton::Middle),
        sdl2::mouse::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}

fn map_modifiers(m: Mod) -> Modifiers {
    let mut out = Modifiers::NONE;
    if m.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD) {
        out |= Modifiers::SHIFT;
    }
    if m.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD) {
        out |= Modifiers::CONTROL;
    }
    if m.intersects(Mod::LALTMOD | Mod::RALTMOD) {
        out |= Modifiers::ALT;
    }
    if m.intersects(Mod::LGUIMOD | Mod::RGUIMOD) {
        out |= Modifiers::META;
    }
    out
}

fn map_keycode(k: Keycode) -> KeyCode {
    match k {
        Keycode::Tab => KeyCode::Tab,
        Keycode::Return => KeyCode::Enter,
        Keycode::KpEnter => KeyCode::KeypadEnter,
        Keycode::Escape => KeyCode::Escape,
        Keycode::Backspace => KeyCode::Backspace,
        Keycode::Delete => KeyCode::Delete,
        Keycode::Insert => KeyCode::Insert,
        Keycode::Left => KeyCode::Left,
        Keycode::Right => KeyCode::Right,
        Keycode::Up => KeyCode::Up,
        Keycode::Down => KeyCode::Down,
        Keycode::Home => KeyCode::Home,
        Keycode::End => KeyCode::End,
        Keycode::PageUp => KeyCode::PageUp,
        Keycode::PageDown => KeyCode::PageDown,
        Keycode::LShift | Keycode::RShift | Keycode::LCtrl | Keycode::RCtrl | Keycode::LAlt | Keycode::RAlt | Keycode::LGui | Keycode::RGui => KeyCode::Modifier,
        // printable keys report their character; the typed text arrives separately
        k => match u32::try_from(k.into_i32()).ok().and_then(char::from_u32) {
            Some(ch) if !ch.is_control() => KeyCode::Character(ch),
            _ => KeyCode::Unknown,
        },
    }
}

impl Binding for SdlBinding {
    fn surface(&mut self) -> &mut Framebuffer { &mut self.fb }

    fn present(&mut self) {
        let (w, h) = (self.fb.width() as u32, self.fb.height() as u32);
        let mut texture = match self.creator.create_texture_streaming(PixelFormatEnum::ABGR8888, w, h) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("cannot create texture: {}", e);
                return;
            }
        };
        if let Err(e) = texture.update(None, self.fb.pixels(), self.fb.stride()) {
            log::warn!("cannot upload frame: {}", e);
            return;
        }
        if let Err(e) = self.canvas.copy(&texture, None, None) {
            log::warn!("cannot copy frame: {}", e);
            return;
        }
        self.canvas.present();
    }

    fn poll_events(&mut self, out: &mut Vec<Event>) {
        for e in self.pump.poll_iter() {
            match e {
                SdlEvent::Quit { .. } => out.push(Event::Close),
                SdlEvent::Window { win_event, .. } => match win_event {
                    WindowEvent::Close => out.push(Event::Close),
                    WindowEvent::Resized(w, h) | WindowEvent::SizeChanged(w, h) => {
                        self.fb.resize(w, h);
                        out.push(Event::Resize(Point::new(w, h)));
                    }
                    WindowEvent::Exposed => out.push(Event::Expose),
                    WindowEvent::FocusGained => out.push(Event::Focus(true)),
                    WindowEvent::FocusLost => out.push(Event::Focus(false)),
                    _ => {}
                },
                SdlEvent::MouseMotion { x, y, .. } => out.push(Event::MouseMove(Point::new(x, y))),
                SdlEvent::MouseButtonDown { mouse_btn, x, y, .. } | SdlEvent::MouseButtonUp { mouse_btn, x, y, .. } => {
                    let down = matches!(e, SdlEvent::MouseButtonDown { .. });
                    if let Some(button) = map_mouse_button(mouse_btn) {
                        out.push(Event::MouseButton { button, down, pos: Point::new(x, y) });
                    }
                }
                SdlEvent::MouseWheel { y, .. } => out.push(Event::Wheel(y)),
                SdlEvent::KeyDown { keycode: Some(k), keymod, .. } => {
                    let code = map_keycode(k);
                    out.push(Event::Key(KeyEvent::press(code, None, map_modifiers(keymod))));
                }
                SdlEvent::TextInput { text, .. } => {
                    for ch in text.chars() {
                        out.push(Event::Key(KeyEvent::press(KeyCode::Unknown, Some(ch), Modifiers::NONE)));
                    }
                }
                _ => {}
            }
        }
    }
}

struct Demo {
    clicks: i32,
    check: bool,
    option: usize,
    ratio: f64,
    count: i32,
    progress: i32,
    selected: usize,
}

impl Demo {
    fn update(&mut self, w: &mut Window<'_>) {
        w.menubar_begin();
        w.row(25).static_widths(&[60, 60]);
        w.menu(Label::text("File"), 120, |m| {
            m.row(20).dynamic(1);
            if m.menu_item(Label::text("Hello")) {
                log::info!("hello from the menu");
            }
            m.menu_item(Label::text("Close menu"));
        });
        w.menu(Label::text("Help"), 120, |m| {
            m.row(20).dynamic(1);
            m.label("imkit demo", Align::LC);
        });
        w.menubar_end();

        w.row(30).dynamic(2);
        if w.button_text("Click me") {
            self.clicks += 1;
        }
        w.label(&format!("clicked {} times", self.clicks), Align::LC);

        w.row(25).dynamic(3);
        w.checkbox_text("Check", &mut self.check);
        for (i, name) in ["one", "two"].iter().enumerate() {
            if w.option_text(name, self.option == i) {
                self.option = i;
            }
        }

        w.row(25).ratio(&[0.3, 0.7]);
        w.label("Ratio", Align::LC);
        w.slider_float(0.0, &mut self.ratio, 1.0, 0.01);

        w.row(25).dynamic(1);
        w.property_int("Count:", 0, &mut self.count, 100, 1, 1);
        w.progress(&mut self.progress, 100, true);
        self.selected = w.combo_simple(&["apple", "banana", "cherry"], self.selected, 20);
        let combo = w.last_widget_bounds();
        if w.input().mouse.hovering_rect(combo) {
            w.tooltip("pick a fruit");
        }

        if w.tree_push(TreeType::Tab, "Details", false) {
            w.row(20).dynamic(1);
            w.label_wrap("Frames are only rasterized when the command list changes; an idle window costs one update per tick.");
            w.tree_pop();
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut demo = Demo { clicks: 0, check: false, option: 0, ratio: 0.5, count: 20, progress: 40, selected: 0 };
    let mw = MasterWindow::new(WindowFlags::empty(), "imkit demo", move |w: &mut Window<'_>| demo.update(w));

    {
        let mut ctx = mw.lock();
        let root = ctx.reset_windows();
        let (left, right) = root.split(&mut ctx, false, 260);
        left.open(&mut ctx, "Panel", WindowFlags::TITLE | WindowFlags::BORDER, Rect::default(), true, |w: &mut Window<'_>| {
            w.row(20).dynamic(1);
            w.label("Docked on the left", Align::LC);
        });
        right.open(&mut ctx, "Log", WindowFlags::TITLE | WindowFlags::BORDER | WindowFlags::SCALABLE, Rect::default(), true, |w: &mut Window<'_>| {
            w.row(20).dynamic(1);
            w.label("Drag a window title over an edge to dock it", Align::LC);
        });
    }

    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let size = mw.initial_size();
    let window = video.window(mw.title(), size.x as u32, size.y as u32).position_centered().resizable().build().map_err(|e| e.to_string())?;
    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let creator = canvas.texture_creator();
    let pump = sdl.event_pump()?;
    let mut binding = SdlBinding { canvas, creator, pump, fb: Framebuffer::new(size.x, size.y) };

    mw.main(&mut binding);
    Ok(())
}

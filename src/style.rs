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
//! Widget styles, color themes and DPI scaling.
//!
//! A [`Style`] is a tree of plain records, one per widget family, built from a
//! 29-entry [`ColorTable`]. Pixel metrics are stored unscaled in a pristine copy so that
//! [`Style::scale`] can be called any number of times without drifting.

use std::sync::Arc;

use crate::command::{CommandBuffer, Image};
use crate::font::Face;
use crate::rect::{Point, Rect};
use crate::text::Align;
use crate::widgets::{draw, Symbol, WidgetCtx};
use crate::{color, Color};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// Interaction state of a widget.
pub enum WidgetStates {
    /// Not hovered and not pressed.
    #[default]
    Inactive,
    /// The pointer is over the widget.
    Hovered,
    /// The widget is being pressed or dragged.
    Active,
}

#[derive(Clone, Debug, PartialEq)]
/// Background of a widget part: either a flat color or a stretched image.
pub enum Item {
    /// Flat color.
    Color(Color),
    /// Image stretched to the target rectangle.
    Image(Image),
}

impl Item {
    /// A fully transparent item.
    pub fn hide() -> Self { Item::Color(color(0, 0, 0, 0)) }

    /// The color of a flat item.
    pub fn color(&self) -> Option<Color> {
        match self {
            Item::Color(c) => Some(*c),
            Item::Image(_) => None,
        }
    }

    /// Fills `r` with the item; colors use `rounding`.
    pub fn fill(&self, out: &mut CommandBuffer, r: Rect, rounding: u16) {
        match self {
            Item::Color(c) => out.fill_rect(r, rounding, *c),
            Item::Image(img) => out.draw_image(r, img),
        }
    }
}

impl Default for Item {
    fn default() -> Self { Item::hide() }
}

/// Callback run before or after a widget is drawn.
pub type DrawHook = Arc<dyn Fn(&mut CommandBuffer) + Send + Sync>;

/// Custom button rendering. Every method defaults to the built-in look.
pub trait ButtonPainter: Send + Sync {
    /// Button with a text label.
    fn text(&self, ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, align: Align) {
        draw::text_button(ctx, bounds, content, state, style, txt, align)
    }

    /// Button with a symbol.
    fn symbol(&self, ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, symbol: Symbol) {
        draw::symbol_button(ctx, bounds, content, state, style, symbol)
    }

    /// Button with an image.
    fn image(&self, ctx: &mut WidgetCtx<'_>, bounds: Rect, content: Rect, state: WidgetStates, style: &ButtonStyle, img: &Image) {
        draw::image_button(ctx, bounds, content, state, style, img)
    }

    /// Button with a symbol followed by text.
    fn text_symbol(&self, ctx: &mut WidgetCtx<'_>, bounds: Rect, label: Rect, sym: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, symbol: Symbol) {
        draw::text_symbol_button(ctx, bounds, label, sym, state, style, txt, symbol)
    }

    /// Button with an image followed by text.
    fn text_image(&self, ctx: &mut WidgetCtx<'_>, bounds: Rect, label: Rect, img_rect: Rect, state: WidgetStates, style: &ButtonStyle, txt: &str, img: &Image) {
        draw::text_image_button(ctx, bounds, label, img_rect, state, style, txt, img)
    }
}

/// Custom check box and radio button rendering.
pub trait TogglePainter: Send + Sync {
    /// Check box.
    fn checkbox(&self, ctx: &mut WidgetCtx<'_>, state: WidgetStates, style: &ToggleStyle, active: bool, label: Rect, select: Rect, cursor: Rect, txt: &str) {
        draw::togglebox(ctx, false, state, style, active, label, select, cursor, txt)
    }

    /// Radio button.
    fn radio(&self, ctx: &mut WidgetCtx<'_>, state: WidgetStates, style: &ToggleStyle, active: bool, label: Rect, select: Rect, cursor: Rect, txt: &str) {
        draw::togglebox(ctx, true, state, style, active, label, select, cursor, txt)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Colors of a theme, one entry per widget part.
pub struct ColorTable {
    pub text: Color,
    pub window: Color,
    pub header: Color,
    pub header_focused: Color,
    pub border: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_active: Color,
    pub toggle: Color,
    pub toggle_hover: Color,
    pub toggle_cursor: Color,
    pub select: Color,
    pub select_active: Color,
    pub slider: Color,
    pub slider_cursor: Color,
    pub slider_cursor_hover: Color,
    pub slider_cursor_active: Color,
    pub property: Color,
    pub edit: Color,
    pub edit_cursor: Color,
    pub combo: Color,
    pub chart: Color,
    pub chart_color: Color,
    pub chart_color_highlight: Color,
    pub scrollbar: Color,
    pub scrollbar_cursor: Color,
    pub scrollbar_cursor_hover: Color,
    pub scrollbar_cursor_active: Color,
    pub tab_header: Color,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Built-in color themes.
pub enum Theme {
    /// Dark gray.
    #[default]
    Default,
    /// Light gray.
    White,
    /// Blue-gray with red accents.
    Red,
    /// Slate with blue accents.
    Dark,
}

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

const DEFAULT_TABLE: ColorTable = ColorTable {
    text: rgba(175, 175, 175, 255),
    window: rgba(45, 45, 45, 255),
    header: rgba(40, 40, 40, 255),
    header_focused: rgba(40, 40, 40, 255),
    border: rgba(65, 65, 65, 255),
    button: rgba(50, 50, 50, 255),
    button_hover: rgba(40, 40, 40, 255),
    button_active: rgba(35, 35, 35, 255),
    toggle: rgba(100, 100, 100, 255),
    toggle_hover: rgba(120, 120, 120, 255),
    toggle_cursor: rgba(45, 45, 45, 255),
    select: rgba(45, 45, 45, 255),
    select_active: rgba(35, 35, 35, 255),
    slider: rgba(38, 38, 38, 255),
    slider_cursor: rgba(100, 100, 100, 255),
    slider_cursor_hover: rgba(120, 120, 120, 255),
    slider_cursor_active: rgba(150, 150, 150, 255),
    property: rgba(38, 38, 38, 255),
    edit: rgba(38, 38, 38, 255),
    edit_cursor: rgba(175, 175, 175, 255),
    combo: rgba(45, 45, 45, 255),
    chart: rgba(120, 120, 120, 255),
    chart_color: rgba(45, 45, 45, 255),
    chart_color_highlight: rgba(255, 0, 0, 255),
    scrollbar: rgba(40, 40, 40, 255),
    scrollbar_cursor: rgba(100, 100, 100, 255),
    scrollbar_cursor_hover: rgba(120, 120, 120, 255),
    scrollbar_cursor_active: rgba(150, 150, 150, 255),
    tab_header: rgba(40, 40, 40, 255),
};

const WHITE_TABLE: ColorTable = ColorTable {
    text: rgba(70, 70, 70, 255),
    window: rgba(175, 175, 175, 255),
    header: rgba(175, 175, 175, 255),
    header_focused: rgba(0xc3, 0x9a, 0x9a, 255),
    border: rgba(0, 0, 0, 255),
    button: rgba(185, 185, 185, 255),
    button_hover: rgba(170, 170, 170, 255),
    button_active: rgba(160, 160, 160, 255),
    toggle: rgba(150, 150, 150, 255),
    toggle_hover: rgba(120, 120, 120, 255),
    toggle_cursor: rgba(175, 175, 175, 255),
    select: rgba(175, 175, 175, 255),
    select_active: rgba(190, 190, 190, 255),
    slider: rgba(190, 190, 190, 255),
    slider_cursor: rgba(80, 80, 80, 255),
    slider_cursor_hover: rgba(70, 70, 70, 255),
    slider_cursor_active: rgba(60, 60, 60, 255),
    property: rgba(175, 175, 175, 255),
    edit: rgba(150, 150, 150, 255),
    edit_cursor: rgba(0, 0, 0, 255),
    combo: rgba(175, 175, 175, 255),
    chart: rgba(160, 160, 160, 255),
    chart_color: rgba(45, 45, 45, 255),
    chart_color_highlight: rgba(255, 0, 0, 255),
    scrollbar: rgba(180, 180, 180, 255),
    scrollbar_cursor: rgba(140, 140, 140, 255),
    scrollbar_cursor_hover: rgba(150, 150, 150, 255),
    scrollbar_cursor_active: rgba(160, 160, 160, 255),
    tab_header: rgba(180, 180, 180, 255),
};

const RED_TABLE: ColorTable = ColorTable {
    text: rgba(190, 190, 190, 255),
    window: rgba(30, 33, 40, 215),
    header: rgba(181, 45, 69, 220),
    header_focused: rgba(0xb5, 0x0c, 0x2c, 0xdc),
    border: rgba(51, 55, 67, 255),
    button: rgba(181, 45, 69, 255),
    button_hover: rgba(190, 50, 70, 255),
    button_active: rgba(195, 55, 75, 255),
    toggle: rgba(51, 55, 67, 255),
    toggle_hover: rgba(45, 60, 60, 255),
    toggle_cursor: rgba(181, 45, 69, 255),
    select: rgba(51, 55, 67, 255),
    select_active: rgba(181, 45, 69, 255),
    slider: rgba(51, 55, 67, 255),
    slider_cursor: rgba(181, 45, 69, 255),
    slider_cursor_hover: rgba(186, 50, 74, 255),
    slider_cursor_active: rgba(191, 55, 79, 255),
    property: rgba(51, 55, 67, 255),
    edit: rgba(51, 55, 67, 225),
    edit_cursor: rgba(190, 190, 190, 255),
    combo: rgba(51, 55, 67, 255),
    chart: rgba(51, 55, 67, 255),
    chart_color: rgba(170, 40, 60, 255),
    chart_color_highlight: rgba(255, 0, 0, 255),
    scrollbar: rgba(30, 33, 40, 255),
    scrollbar_cursor: rgba(64, 84, 95, 255),
    scrollbar_cursor_hover: rgba(70, 90, 100, 255),
    scrollbar_cursor_active: rgba(75, 95, 105, 255),
    tab_header: rgba(181, 45, 69, 220),
};

const DARK_TABLE: ColorTable = ColorTable {
    text: rgba(210, 210, 210, 255),
    window: rgba(57, 67, 71, 255),
    header: rgba(51, 51, 56, 220),
    header_focused: rgba(0x29, 0x29, 0x37, 0xdc),
    border: rgba(46, 46, 46, 255),
    button: rgba(48, 83, 111, 255),
    button_hover: rgba(58, 93, 121, 255),
    button_active: rgba(63, 98, 126, 255),
    toggle: rgba(50, 58, 61, 255),
    toggle_hover: rgba(45, 53, 56, 255),
    toggle_cursor: rgba(48, 83, 111, 255),
    select: rgba(57, 67, 61, 255),
    select_active: rgba(48, 83, 111, 255),
    slider: rgba(50, 58, 61, 255),
    slider_cursor: rgba(48, 83, 111, 245),
    slider_cursor_hover: rgba(53, 88, 116, 255),
    slider_cursor_active: rgba(58, 93, 121, 255),
    property: rgba(50, 58, 61, 255),
    edit: rgba(50, 58, 61, 225),
    edit_cursor: rgba(210, 210, 210, 255),
    combo: rgba(50, 58, 61, 255),
    chart: rgba(50, 58, 61, 255),
    chart_color: rgba(48, 83, 111, 255),
    chart_color_highlight: rgba(255, 0, 0, 255),
    scrollbar: rgba(50, 58, 61, 255),
    scrollbar_cursor: rgba(48, 83, 111, 255),
    scrollbar_cursor_hover: rgba(53, 88, 116, 255),
    scrollbar_cursor_active: rgba(58, 93, 121, 255),
    tab_header: rgba(48, 83, 111, 255),
};

impl Theme {
    /// The color table of the theme.
    pub fn table(self) -> ColorTable {
        match self {
            Theme::Default => DEFAULT_TABLE,
            Theme::White => WHITE_TABLE,
            Theme::Red => RED_TABLE,
            Theme::Dark => DARK_TABLE,
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
/// Plain text labels.
pub struct TextStyle {
    /// Label color.
    pub color: Color,
    /// Space around the text.
    pub padding: Point,
}

#[derive(Clone, Default)]
/// Push buttons, also reused by the smaller buttons embedded in other widgets.
pub struct ButtonStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub text_background: Color,
    pub text_normal: Color,
    pub text_hover: Color,
    pub text_active: Color,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub image_padding: Point,
    pub touch_padding: Point,
    pub symbol_border_width: i32,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
    /// Replaces the built-in rendering.
    pub painter: Option<Arc<dyn ButtonPainter>>,
}

#[derive(Clone, Default)]
/// Check boxes and radio buttons.
pub struct ToggleStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub text_normal: Color,
    pub text_hover: Color,
    pub text_active: Color,
    pub text_background: Color,
    pub padding: Point,
    pub touch_padding: Point,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
    /// Replaces the built-in rendering.
    pub painter: Option<Arc<dyn TogglePainter>>,
}

#[derive(Clone, Default)]
/// Selectable labels.
pub struct SelectableStyle {
    pub normal: Item,
    pub hover: Item,
    pub pressed: Item,
    pub normal_active: Item,
    pub hover_active: Item,
    pub pressed_active: Item,
    pub text_normal: Color,
    pub text_hover: Color,
    pub text_pressed: Color,
    pub text_normal_active: Color,
    pub text_hover_active: Color,
    pub text_pressed_active: Color,
    pub text_background: Color,
    pub rounding: u16,
    pub padding: Point,
    pub touch_padding: Point,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
}

#[derive(Clone, Default)]
/// Sliders.
pub struct SliderStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub bar_normal: Color,
    pub bar_hover: Color,
    pub bar_active: Color,
    pub bar_filled: Color,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub border: i32,
    pub rounding: u16,
    pub bar_height: i32,
    pub padding: Point,
    pub spacing: Point,
    pub cursor_size: Point,
    pub show_buttons: bool,
    pub inc_button: ButtonStyle,
    pub dec_button: ButtonStyle,
    pub inc_symbol: Symbol,
    pub dec_symbol: Symbol,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
}

#[derive(Clone, Default)]
/// Progress bars.
pub struct ProgressStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub rounding: u16,
    pub padding: Point,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
}

#[derive(Clone, Default)]
/// Scrollbars.
pub struct ScrollbarStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub cursor_normal: Item,
    pub cursor_hover: Item,
    pub cursor_active: Item,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub show_buttons: bool,
    pub inc_button: ButtonStyle,
    pub dec_button: ButtonStyle,
    pub inc_symbol: Symbol,
    pub dec_symbol: Symbol,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
}

#[derive(Clone, Default)]
/// Text fields, including the inline editor of properties.
pub struct EditStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub scrollbar: ScrollbarStyle,
    pub cursor_normal: Color,
    pub cursor_hover: Color,
    pub cursor_text_normal: Color,
    pub cursor_text_hover: Color,
    pub text_normal: Color,
    pub text_hover: Color,
    pub text_active: Color,
    pub selected_normal: Color,
    pub selected_hover: Color,
    pub selected_text_normal: Color,
    pub selected_text_hover: Color,
    pub border: i32,
    pub rounding: u16,
    pub scrollbar_size: Point,
    pub padding: Point,
    pub row_padding: i32,
}

#[derive(Clone, Default)]
/// Numeric properties.
pub struct PropertyStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub label_normal: Color,
    pub label_hover: Color,
    pub label_active: Color,
    pub sym_left: Symbol,
    pub sym_right: Symbol,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub edit: EditStyle,
    pub inc_button: ButtonStyle,
    pub dec_button: ButtonStyle,
    pub draw_begin: Option<DrawHook>,
    pub draw_end: Option<DrawHook>,
}

#[derive(Clone, Default)]
/// Combo box headers.
pub struct ComboStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub border_color: Color,
    pub label_normal: Color,
    pub label_hover: Color,
    pub label_active: Color,
    pub symbol_normal: Color,
    pub symbol_hover: Color,
    pub symbol_active: Color,
    pub button: ButtonStyle,
    pub sym_normal: Symbol,
    pub sym_hover: Symbol,
    pub sym_active: Symbol,
    pub border: i32,
    pub rounding: u16,
    pub content_padding: Point,
    pub button_padding: Point,
    pub spacing: Point,
}

#[derive(Clone, Default)]
/// Tree tabs and nodes.
pub struct TabStyle {
    pub background: Item,
    pub border_color: Color,
    pub text: Color,
    pub tab_button: ButtonStyle,
    pub node_button: ButtonStyle,
    pub sym_minimize: Symbol,
    pub sym_maximize: Symbol,
    pub border: i32,
    pub rounding: u16,
    pub padding: Point,
    pub spacing: Point,
    pub indent: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
/// Side of the title bar holding the close button.
pub enum HeaderAlign {
    /// Left edge.
    Left,
    /// Right edge.
    #[default]
    Right,
}

#[derive(Clone, Default)]
/// Window title bars.
pub struct WindowHeaderStyle {
    pub normal: Item,
    pub hover: Item,
    pub active: Item,
    pub close_button: ButtonStyle,
    pub minimize_button: ButtonStyle,
    pub close_symbol: Symbol,
    pub minimize_symbol: Symbol,
    pub maximize_symbol: Symbol,
    pub label_normal: Color,
    pub label_hover: Color,
    pub label_active: Color,
    pub align: HeaderAlign,
    pub padding: Point,
    pub label_padding: Point,
    pub spacing: Point,
}

#[derive(Clone, Default)]
/// Window frames; one instance per kind of window.
pub struct WindowStyle {
    pub header: WindowHeaderStyle,
    pub fixed_background: Item,
    pub background: Color,
    pub border_color: Color,
    pub scaler: Item,
    pub footer_padding: Point,
    pub border: i32,
    pub rounding: u16,
    pub scaler_size: Point,
    pub padding: Point,
    pub spacing: Point,
    pub scrollbar_size: Point,
    pub min_size: Point,
}

#[derive(Clone)]
/// Complete style of a context.
pub struct Style {
    /// Scaling factor applied to every pixel metric.
    pub scaling: f64,
    /// Face used for all text.
    pub font: Face,
    default_font: bool,
    unscaled: Option<Box<Style>>,
    pub text: TextStyle,
    pub button: ButtonStyle,
    pub contextual_button: ButtonStyle,
    pub menu_button: ButtonStyle,
    pub option: ToggleStyle,
    pub checkbox: ToggleStyle,
    pub selectable: SelectableStyle,
    pub slider: SliderStyle,
    pub progress: ProgressStyle,
    pub property: PropertyStyle,
    pub edit: EditStyle,
    pub scrollh: ScrollbarStyle,
    pub scrollv: ScrollbarStyle,
    pub tab: TabStyle,
    pub combo: ComboStyle,
    pub normal_window: WindowStyle,
    pub menu_window: WindowStyle,
    pub tooltip_window: WindowStyle,
    pub combo_window: WindowStyle,
    pub contextual_window: WindowStyle,
    pub group_window: WindowStyle,
}

fn flat_button(normal: Color, hover: Color, active: Color, border_color: Color, text_background: Color, text: Color) -> ButtonStyle {
    ButtonStyle {
        normal: Item::Color(normal),
        hover: Item::Color(hover),
        active: Item::Color(active),
        border_color,
        text_background,
        text_normal: text,
        text_hover: text,
        text_active: text,
        padding: Point::new(4, 4),
        symbol_border_width: 1,
        ..ButtonStyle::default()
    }
}

fn toggle(t: &ColorTable) -> ToggleStyle {
    ToggleStyle {
        normal: Item::Color(t.toggle),
        hover: Item::Color(t.toggle_hover),
        active: Item::Color(t.toggle_hover),
        cursor_normal: Item::Color(t.toggle_cursor),
        cursor_hover: Item::Color(t.toggle_cursor),
        text_background: t.window,
        text_normal: t.text,
        text_hover: t.text,
        text_active: t.text,
        padding: Point::new(4, 4),
        ..ToggleStyle::default()
    }
}

fn edit(t: &ColorTable, background: Color) -> EditStyle {
    EditStyle {
        normal: Item::Color(background),
        hover: Item::Color(background),
        active: Item::Color(background),
        cursor_normal: t.text,
        cursor_hover: t.text,
        cursor_text_normal: t.edit,
        cursor_text_hover: t.edit,
        text_normal: t.text,
        text_hover: t.text,
        text_active: t.text,
        selected_normal: t.text,
        selected_hover: t.text,
        selected_text_normal: t.edit,
        selected_text_hover: t.edit,
        ..EditStyle::default()
    }
}

fn sc(v: i32, k: f64) -> i32 { (v as f64 * k) as i32 }

fn scu(v: u16, k: f64) -> u16 { (v as f64 * k) as u16 }

fn scp(p: Point, k: f64) -> Point { Point::new(sc(p.x, k), sc(p.y, k)) }

impl ButtonStyle {
    fn scale(&mut self, k: f64) {
        self.padding = scp(self.padding, k);
        self.image_padding = scp(self.image_padding, k);
        self.touch_padding = scp(self.touch_padding, k);
        self.border = sc(self.border, k);
        self.symbol_border_width = sc(self.symbol_border_width, k);
        self.rounding = scu(self.rounding, k);
    }
}

impl ScrollbarStyle {
    fn scale(&mut self, k: f64) {
        self.padding = scp(self.padding, k);
        self.border = sc(self.border, k);
        self.rounding = scu(self.rounding, k);
        self.inc_button.scale(k);
        self.dec_button.scale(k);
    }
}

impl EditStyle {
    fn scale(&mut self, k: f64) {
        self.row_padding = sc(self.row_padding, k);
        self.padding = scp(self.padding, k);
        self.scrollbar_size = scp(self.scrollbar_size, k);
        self.border = sc(self.border, k);
        self.rounding = scu(self.rounding, k);
    }
}

impl WindowStyle {
    fn scale(&mut self, k: f64) {
        self.header.padding = scp(self.header.padding, k);
        self.header.spacing = scp(self.header.spacing, k);
        self.header.label_padding = scp(self.header.label_padding, k);
        self.header.close_button.scale(k);
        self.header.minimize_button.scale(k);
        self.footer_padding = scp(self.footer_padding, k);
        self.rounding = scu(self.rounding, k);
        self.scaler_size = scp(self.scaler_size, k);
        self.padding = scp(self.padding, k);
        self.spacing = scp(self.spacing, k);
        self.scrollbar_size = scp(self.scrollbar_size, k);
        self.min_size = scp(self.min_size, k);
        self.border = sc(self.border, k);
    }
}

impl Style {
    /// Builds the style of a built-in theme.
    pub fn from_theme(theme: Theme, scaling: f64) -> Self { Self::from_table(&theme.table(), scaling) }

    /// Builds a style from a color table.
    pub fn from_table(t: &ColorTable, scaling: f64) -> Self {
        let mut button = flat_button(t.button, t.button_hover, t.button_active, t.border, t.button, t.text);
        button.border = 1;
        button.rounding = 4;

        let contextual_button = flat_button(t.window, t.button_hover, t.button_active, t.window, t.window, t.text);

        let mut menu_button = flat_button(t.window, t.window, t.window, t.window, t.window, t.text);
        menu_button.rounding = 1;

        let selectable = SelectableStyle {
            normal: Item::Color(t.select),
            hover: Item::Color(t.select),
            pressed: Item::Color(t.select),
            normal_active: Item::Color(t.select_active),
            hover_active: Item::Color(t.select_active),
            pressed_active: Item::Color(t.select_active),
            text_normal: t.text,
            text_hover: t.text,
            text_pressed: t.text,
            text_normal_active: t.text,
            text_hover_active: t.text,
            text_pressed_active: t.text,
            padding: Point::new(4, 4),
            ..SelectableStyle::default()
        };

        let mut small_button = flat_button(rgba(40, 40, 40, 255), rgba(42, 42, 42, 255), rgba(44, 44, 44, 255), rgba(65, 65, 65, 255), rgba(40, 40, 40, 255), rgba(175, 175, 175, 255));
        small_button.border = 1;
        small_button.symbol_border_width = 0;

        let mut slider_button = small_button.clone();
        slider_button.padding = Point::new(8, 8);

        let slider = SliderStyle {
            normal: Item::hide(),
            hover: Item::hide(),
            active: Item::hide(),
            bar_normal: t.slider,
            bar_hover: t.slider,
            bar_active: t.slider,
            bar_filled: t.slider_cursor,
            cursor_normal: Item::Color(t.slider_cursor),
            cursor_hover: Item::Color(t.slider_cursor_hover),
            cursor_active: Item::Color(t.slider_cursor_active),
            inc_symbol: Symbol::TriangleRight,
            dec_symbol: Symbol::TriangleLeft,
            cursor_size: Point::new(16, 16),
            padding: Point::new(4, 4),
            spacing: Point::new(4, 4),
            bar_height: 8,
            inc_button: slider_button.clone(),
            dec_button: slider_button,
            ..SliderStyle::default()
        };

        let progress = ProgressStyle {
            normal: Item::Color(t.slider),
            hover: Item::Color(t.slider),
            active: Item::Color(t.slider),
            cursor_normal: Item::Color(t.slider_cursor),
            cursor_hover: Item::Color(t.slider_cursor_hover),
            cursor_active: Item::Color(t.slider_cursor_active),
            padding: Point::new(4, 4),
            ..ProgressStyle::default()
        };

        let scroll = ScrollbarStyle {
            normal: Item::Color(t.scrollbar),
            hover: Item::Color(t.scrollbar),
            active: Item::Color(t.scrollbar),
            cursor_normal: Item::Color(t.scrollbar_cursor),
            cursor_hover: Item::Color(t.scrollbar_cursor_hover),
            cursor_active: Item::Color(t.scrollbar_cursor_active),
            dec_symbol: Symbol::CircleOutline,
            inc_symbol: Symbol::CircleOutline,
            border_color: rgba(65, 65, 65, 255),
            padding: Point::new(4, 4),
            inc_button: small_button.clone(),
            dec_button: small_button,
            ..ScrollbarStyle::default()
        };

        let mut main_edit = edit(t, t.edit);
        main_edit.scrollbar = scroll.clone();
        main_edit.border_color = t.border;
        main_edit.row_padding = 2;
        main_edit.padding = Point::new(4, 4);
        main_edit.scrollbar_size = Point::new(4, 4);
        main_edit.border = 1;

        let mut property_button = flat_button(t.property, t.property, t.property, rgba(0, 0, 0, 0), t.property, t.text);
        property_button.padding = Point::new(0, 0);

        let property = PropertyStyle {
            normal: Item::Color(t.property),
            hover: Item::Color(t.property),
            active: Item::Color(t.property),
            border_color: t.border,
            label_normal: t.text,
            label_hover: t.text,
            label_active: t.text,
            sym_left: Symbol::TriangleLeft,
            sym_right: Symbol::TriangleRight,
            padding: Point::new(4, 4),
            border: 1,
            rounding: 10,
            edit: edit(t, t.property),
            inc_button: property_button.clone(),
            dec_button: property_button,
            ..PropertyStyle::default()
        };

        let mut combo_button = flat_button(t.combo, t.combo, t.combo, rgba(0, 0, 0, 0), t.combo, t.text);
        combo_button.padding = Point::new(2, 2);

        let combo = ComboStyle {
            normal: Item::Color(t.combo),
            hover: Item::Color(t.combo),
            active: Item::Color(t.combo),
            border_color: t.border,
            label_normal: t.text,
            label_hover: t.text,
            label_active: t.text,
            symbol_normal: t.text,
            symbol_hover: t.text,
            symbol_active: t.text,
            button: combo_button,
            sym_normal: Symbol::TriangleDown,
            sym_hover: Symbol::TriangleDown,
            sym_active: Symbol::TriangleDown,
            content_padding: Point::new(4, 4),
            button_padding: Point::new(0, 4),
            spacing: Point::new(4, 0),
            border: 1,
            rounding: 0,
        };

        let mut tab_button = flat_button(t.tab_header, t.tab_header, t.tab_header, rgba(0, 0, 0, 0), t.tab_header, t.text);
        tab_button.padding = Point::new(2, 2);
        tab_button.symbol_border_width = 2;
        let mut node_button = flat_button(t.window, t.window, t.window, rgba(0, 0, 0, 0), t.tab_header, t.text);
        node_button.padding = Point::new(2, 2);
        node_button.symbol_border_width = 2;

        let tab = TabStyle {
            background: Item::Color(t.tab_header),
            border_color: t.border,
            text: t.text,
            tab_button,
            node_button,
            sym_minimize: Symbol::TriangleDown,
            sym_maximize: Symbol::TriangleRight,
            border: 1,
            rounding: 0,
            padding: Point::new(4, 4),
            spacing: Point::new(4, 4),
            indent: 0,
        };

        let mut header_button = flat_button(t.header, t.header, t.header_focused, rgba(0, 0, 0, 0), t.header, t.text);
        header_button.padding = Point::new(0, 0);

        let normal_window = WindowStyle {
            header: WindowHeaderStyle {
                normal: Item::Color(t.header),
                hover: Item::Color(t.header),
                active: Item::Color(t.header_focused),
                close_button: header_button.clone(),
                minimize_button: header_button,
                close_symbol: Symbol::X,
                minimize_symbol: Symbol::Minus,
                maximize_symbol: Symbol::Plus,
                label_normal: t.text,
                label_hover: t.text,
                label_active: t.text,
                align: HeaderAlign::Right,
                padding: Point::new(2, 2),
                label_padding: Point::new(2, 2),
                spacing: Point::new(0, 0),
            },
            fixed_background: Item::Color(t.window),
            background: t.window,
            border_color: t.border,
            scaler: Item::Color(t.text),
            footer_padding: Point::new(0, 0),
            border: 2,
            rounding: 0,
            scaler_size: Point::new(9, 9),
            padding: Point::new(4, 4),
            spacing: Point::new(4, 4),
            scrollbar_size: Point::new(10, 10),
            min_size: Point::new(64, 64),
        };

        let mut menu_window = normal_window.clone();
        menu_window.border = 1;
        menu_window.spacing = Point::new(2, 2);

        let mut tooltip_window = normal_window.clone();
        tooltip_window.border = 1;
        tooltip_window.padding = Point::new(2, 2);

        let mut combo_window = normal_window.clone();
        combo_window.border = 1;

        let mut contextual_window = normal_window.clone();
        contextual_window.border_color = t.text;
        contextual_window.border = 1;

        let mut group_window = normal_window.clone();
        group_window.border = 1;
        group_window.padding = Point::new(2, 2);
        group_window.spacing = Point::new(2, 2);

        let mut style = Style {
            scaling: 1.0,
            font: Face::builtin(12, 1.0),
            default_font: true,
            unscaled: None,
            text: TextStyle { color: t.text, padding: Point::new(4, 4) },
            button,
            contextual_button,
            menu_button,
            option: toggle(t),
            checkbox: toggle(t),
            selectable,
            slider,
            progress,
            property,
            edit: main_edit,
            scrollh: scroll.clone(),
            scrollv: scroll,
            tab,
            combo,
            normal_window,
            menu_window,
            tooltip_window,
            combo_window,
            contextual_window,
            group_window,
        };
        style.scale(scaling);
        style
    }

    /// The style as it was before any scaling.
    pub fn unscaled(&self) -> &Style {
        match &self.unscaled {
            Some(u) => u,
            None => self,
        }
    }

    /// Replaces the text face. The face is used as is by every later [`Style::scale`].
    pub fn set_font(&mut self, face: Face) {
        self.font = face.clone();
        self.default_font = false;
        if let Some(u) = self.unscaled.as_mut() {
            u.font = face;
            u.default_font = false;
        }
    }

    /// Rescales every metric to `scaling`, starting from the unscaled values.
    pub fn scale(&mut self, scaling: f64) {
        match self.unscaled.take() {
            Some(unscaled) => {
                *self = (*unscaled).clone();
                self.unscaled = Some(unscaled);
            }
            None => {
                let mut pristine = self.clone();
                pristine.unscaled = None;
                self.unscaled = Some(Box::new(pristine));
            }
        }

        self.scaling = scaling;
        if self.default_font {
            self.font = Face::builtin(12, scaling);
        }
        if let Some(u) = self.unscaled.as_mut() {
            u.font = self.font.clone();
            u.default_font = self.default_font;
        }

        if scaling == 1.0 {
            return;
        }
        let k = scaling;

        self.text.padding = scp(self.text.padding, k);

        self.button.scale(k);
        self.contextual_button.scale(k);
        self.menu_button.scale(k);

        for t in [&mut self.checkbox, &mut self.option] {
            t.padding = scp(t.padding, k);
            t.touch_padding = scp(t.touch_padding, k);
        }

        self.selectable.padding = scp(self.selectable.padding, k);
        self.selectable.touch_padding = scp(self.selectable.touch_padding, k);
        self.selectable.rounding = scu(self.selectable.rounding, k);

        let s = &mut self.slider;
        s.cursor_size = scp(s.cursor_size, k);
        s.padding = scp(s.padding, k);
        s.spacing = scp(s.spacing, k);
        s.rounding = scu(s.rounding, k);
        s.bar_height = sc(s.bar_height, k);
        s.inc_button.scale(k);
        s.dec_button.scale(k);

        self.progress.padding = scp(self.progress.padding, k);
        self.progress.rounding = scu(self.progress.rounding, k);

        self.scrollh.scale(k);
        self.scrollv.scale(k);

        self.edit.scale(k);

        let p = &mut self.property;
        p.padding = scp(p.padding, k);
        p.border = sc(p.border, k);
        p.rounding = scu(p.rounding, k);
        p.inc_button.scale(k);
        p.dec_button.scale(k);
        p.edit.scale(k);

        let c = &mut self.combo;
        c.content_padding = scp(c.content_padding, k);
        c.button_padding = scp(c.button_padding, k);
        c.spacing = scp(c.spacing, k);
        c.border = sc(c.border, k);
        c.rounding = scu(c.rounding, k);
        c.button.scale(k);

        let t = &mut self.tab;
        t.border = sc(t.border, k);
        t.rounding = scu(t.rounding, k);
        t.padding = scp(t.padding, k);
        t.spacing = scp(t.spacing, k);
        t.tab_button.scale(k);
        t.node_button.scale(k);

        for w in [
            &mut self.normal_window,
            &mut self.menu_window,
            &mut self.tooltip_window,
            &mut self.combo_window,
            &mut self.contextual_window,
            &mut self.group_window,
        ] {
            w.scale(k);
        }
    }
}

impl Default for Style {
    fn default() -> Self { Self::from_theme(Theme::Default, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::font_height;

    #[test]
    fn scaling_is_idempotent() {
        let mut style = Style::from_theme(Theme::Dark, 1.0);
        style.scale(1.5);
        let once = style.normal_window.padding;
        style.scale(1.5);
        assert_eq!(style.normal_window.padding, once);
        assert_eq!(once, Point::new(6, 6));
        style.scale(1.0);
        assert_eq!(style.normal_window.padding, Point::new(4, 4));
        assert_eq!(style.unscaled().normal_window.scrollbar_size, Point::new(10, 10));
    }

    #[test]
    fn default_font_follows_scaling() {
        let mut style = Style::default();
        let h1 = font_height(&style.font);
        style.scale(2.0);
        assert!(font_height(&style.font) > h1);
    }

    #[test]
    fn custom_font_is_kept() {
        let mut style = Style::default();
        let face = Face::builtin(20, 1.0);
        style.set_font(face.clone());
        style.scale(2.0);
        assert_eq!(style.font, face);
    }

    #[test]
    fn window_variants() {
        let style = Style::from_theme(Theme::White, 1.0);
        let t = Theme::White.table();
        assert_eq!(style.contextual_window.border_color, t.text);
        assert_eq!(style.group_window.padding, Point::new(2, 2));
        assert_eq!(style.menu_window.spacing, Point::new(2, 2));
        assert_eq!(style.tooltip_window.border, 1);
        assert_eq!(style.normal_window.border, 2);
        assert_eq!(style.button.normal, Item::Color(t.button));
    }
}

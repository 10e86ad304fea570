//! Presentation styles attached to token prototypes.
//!
//! The engine never paints anything. A [`FontStyle`] only carries enough
//! information for a renderer to draw foreground, background and underline
//! without further lexical knowledge.

use crate::error::LexerError;
use std::fmt;
use std::str::FromStr;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (`0` is fully transparent).
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// `darkgray`.
    pub const DARK_GRAY: Self = Self::rgb(0xA9, 0xA9, 0xA9);
    /// `orange`.
    pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);
    /// `lightgreen`.
    pub const LIGHT_GREEN: Self = Self::rgb(0x90, 0xEE, 0x90);
    /// `greenyellow`.
    pub const GREEN_YELLOW: Self = Self::rgb(0xAD, 0xFF, 0x2F);
    /// `peachpuff`.
    pub const PEACH_PUFF: Self = Self::rgb(0xFF, 0xDA, 0xB9);
    /// `skyblue`.
    pub const SKY_BLUE: Self = Self::rgb(0x87, 0xCE, 0xEB);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if the color is fully transparent.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl FromStr for Color {
    type Err = LexerError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LexerError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Presentation style of a token category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    /// Font size relative to the editor's base size.
    pub size_ratio: f32,
    /// Glyph color.
    pub foreground: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Whether the span is underlined.
    pub underlined: bool,
    /// Underline color (only meaningful when `underlined`).
    pub underline_color: Color,
    /// Background fill.
    pub background: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            size_ratio: 1.0,
            foreground: Color::WHITE,
            bold: false,
            italic: false,
            underlined: false,
            underline_color: Color::TRANSPARENT,
            background: Color::TRANSPARENT,
        }
    }
}

impl FontStyle {
    /// Start building a style from the defaults.
    pub fn builder() -> FontStyleBuilder {
        FontStyleBuilder::default()
    }

    /// Start building a style from this one.
    pub fn to_builder(self) -> FontStyleBuilder {
        FontStyleBuilder { style: self }
    }

    /// Shorthand for a default style with a given foreground.
    pub fn foreground(color: Color) -> Self {
        Self::builder().foreground(color).build()
    }

    /// Error-highlight style used for [`Unknown`](crate::TokenCategory::Unknown) tokens
    /// when a language does not register its own.
    pub fn unknown_default() -> Self {
        Self::builder()
            .foreground(Color::WHITE)
            .background(Color::rgba(0x4D, 0x4D, 0x4D, 0x99))
            .underline(Color::RED)
            .build()
    }
}

/// Builder for [`FontStyle`].
#[derive(Debug, Clone, Default)]
pub struct FontStyleBuilder {
    style: FontStyle,
}

impl FontStyleBuilder {
    /// Set the font size ratio.
    pub fn size_ratio(mut self, ratio: f32) -> Self {
        self.style.size_ratio = ratio;
        self
    }

    /// Set the glyph color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.style.foreground = color;
        self
    }

    /// Set the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    /// Use a bold weight.
    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Use an italic slant.
    pub fn italic(mut self) -> Self {
        self.style.italic = true;
        self
    }

    /// Underline with the given color.
    pub fn underline(mut self, color: Color) -> Self {
        self.style.underlined = true;
        self.style.underline_color = color;
        self
    }

    /// Finish the style.
    pub fn build(self) -> FontStyle {
        self.style
    }
}

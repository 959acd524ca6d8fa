//! Social share card layout
//!
//! A fixed 1200x630 composition described as a list of draw commands, so
//! the same card can be painted onto a canvas or serialized as SVG.

use super::document::TextAlign;
use super::wrap::wrap_text;
use crate::common::truncate_with_ellipsis;
use crate::entities::StoryResult;
use crate::value_objects::tradition_name;

pub const SHARE_CARD_WIDTH: u32 = 1200;
pub const SHARE_CARD_HEIGHT: u32 = 630;
pub const SHARE_EXCERPT_CHARS: usize = 200;

const PADDING: f32 = 60.0;
const BADGE_SIZE: f32 = 40.0;
const TAGLINE: &str = "Transform your modern scenarios into ancient myths";
const DOMAIN: &str = "mythweaver.fun";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const NIGHT: Color = Color::rgb(0x1a, 0x1a, 0x2e);
    pub const DEEP_BLUE: Color = Color::rgb(0x16, 0x21, 0x3e);
    pub const GOLD: Color = Color::rgb(0xda, 0xa5, 0x20);
    pub const BRIGHT_GOLD: Color = Color::rgb(0xff, 0xd7, 0x00);
    pub const PARCHMENT: Color = Color::rgb(0xf5, 0xf5, 0xdc);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// `#rrggbb`, ignoring alpha
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS colour including alpha
    pub fn css(&self) -> String {
        if self.alpha >= 1.0 {
            self.hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Linear gradient from the top-left to the bottom-right corner
    Diagonal { from: Color, to: Color },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFont {
    pub size_px: f32,
    pub bold: bool,
    pub italic: bool,
}

impl CardFont {
    pub const FAMILY: &'static str = "'Times New Roman', serif";

    const fn regular(size_px: f32) -> Self {
        Self {
            size_px,
            bold: false,
            italic: false,
        }
    }

    const fn bold(size_px: f32) -> Self {
        Self {
            size_px,
            bold: true,
            italic: false,
        }
    }

    const fn italic(size_px: f32) -> Self {
        Self {
            size_px,
            bold: false,
            italic: true,
        }
    }

    /// CSS font shorthand
    pub fn css(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if self.italic {
            parts.push("italic".to_string());
        }
        if self.bold {
            parts.push("bold".to_string());
        }
        parts.push(format!("{}px", self.size_px));
        parts.push(Self::FAMILY.to_string());
        parts.join(" ")
    }
}

/// Painting primitive. Text `y` is the top of the line box.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: Fill,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font: CardFont,
        color: Color,
        align: TextAlign,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareCard {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub commands: Vec<DrawCommand>,
}

impl ShareCard {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }
}

fn columns_px(width_px: f32, font: CardFont) -> usize {
    ((width_px / (font.size_px * 0.5)).floor() as usize).max(1)
}

/// Story opening, cut at [`SHARE_EXCERPT_CHARS`]
pub fn excerpt(story: &StoryResult) -> String {
    truncate_with_ellipsis(&story.adapted_story, SHARE_EXCERPT_CHARS)
}

pub fn build_share_card(story: &StoryResult) -> ShareCard {
    let width = SHARE_CARD_WIDTH as f32;
    let height = SHARE_CARD_HEIGHT as f32;
    let content_width = width - PADDING * 2.0;
    let mut commands = Vec::new();

    commands.push(DrawCommand::Rect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        radius: 0.0,
        fill: Fill::Diagonal {
            from: Color::NIGHT,
            to: Color::DEEP_BLUE,
        },
    });

    // brand row
    commands.push(DrawCommand::Rect {
        x: PADDING,
        y: PADDING,
        width: BADGE_SIZE,
        height: BADGE_SIZE,
        radius: 8.0,
        fill: Fill::Diagonal {
            from: Color::GOLD,
            to: Color::BRIGHT_GOLD,
        },
    });
    commands.push(DrawCommand::Text {
        x: PADDING + BADGE_SIZE / 2.0,
        y: PADDING + 10.0,
        text: "M".into(),
        font: CardFont::bold(20.0),
        color: Color::NIGHT,
        align: TextAlign::Center,
    });
    commands.push(DrawCommand::Text {
        x: PADDING + BADGE_SIZE + 15.0,
        y: PADDING + 4.0,
        text: "MythWeaver".into(),
        font: CardFont::bold(32.0),
        color: Color::GOLD,
        align: TextAlign::Left,
    });

    let mut y = PADDING + BADGE_SIZE + 30.0;

    let title_font = CardFont::bold(36.0);
    for line in wrap_text(&story.title, columns_px(content_width, title_font)) {
        commands.push(DrawCommand::Text {
            x: PADDING,
            y,
            text: line,
            font: title_font,
            color: Color::GOLD,
            align: TextAlign::Left,
        });
        y += title_font.size_px * 1.2;
    }
    y += 20.0;

    let tradition_font = CardFont::italic(16.0);
    commands.push(DrawCommand::Text {
        x: PADDING,
        y,
        text: format!("{} Tradition", tradition_name(&story.meta.culture)),
        font: tradition_font,
        color: Color::PARCHMENT.with_alpha(0.8),
        align: TextAlign::Left,
    });
    y += tradition_font.size_px * 1.2 + 20.0;

    let excerpt_font = CardFont::regular(18.0);
    for line in wrap_text(&excerpt(story), columns_px(content_width, excerpt_font)) {
        commands.push(DrawCommand::Text {
            x: PADDING,
            y,
            text: line,
            font: excerpt_font,
            color: Color::PARCHMENT,
            align: TextAlign::Left,
        });
        y += excerpt_font.size_px * 1.4;
    }

    // footer, anchored to the bottom padding
    let domain_font = CardFont::bold(18.0);
    let tagline_font = CardFont::regular(16.0);
    let domain_y = height - PADDING - domain_font.size_px;
    let tagline_y = domain_y - 5.0 - tagline_font.size_px;
    commands.push(DrawCommand::Text {
        x: width / 2.0,
        y: tagline_y,
        text: TAGLINE.into(),
        font: tagline_font,
        color: Color::GOLD.with_alpha(0.7),
        align: TextAlign::Center,
    });
    commands.push(DrawCommand::Text {
        x: width / 2.0,
        y: domain_y,
        text: DOMAIN.into(),
        font: domain_font,
        color: Color::BRIGHT_GOLD.with_alpha(0.7),
        align: TextAlign::Center,
    });

    ShareCard {
        width: SHARE_CARD_WIDTH,
        height: SHARE_CARD_HEIGHT,
        title: story.title.clone(),
        commands,
    }
}

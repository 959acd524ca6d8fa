//! SVG render target
//!
//! Serializes draw commands into a standalone SVG document and rasterizes
//! it to PNG with resvg. Used on desktop where no canvas is available
//! outside the webview. Text uses the system font database, loaded once.

use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

use mythweaver_domain::export::{CardFont, Color, DrawCommand, Fill, TextAlign};
use resvg::{tiny_skia, usvg};

use crate::ports::outbound::{DownloadPayload, RasterImage, RenderError, RenderTarget};

#[derive(Debug, Default)]
pub struct SvgTarget {
    surface: Option<SvgSurface>,
}

#[derive(Debug)]
struct SvgSurface {
    width: u32,
    height: u32,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgTarget {
    pub fn new() -> Self {
        Self::default()
    }

    fn surface(&mut self) -> Result<&mut SvgSurface, RenderError> {
        self.surface
            .as_mut()
            .ok_or_else(|| RenderError::Unavailable("svg surface not created".into()))
    }
}

fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut fonts = usvg::fontdb::Database::new();
            fonts.load_system_fonts();
            tracing::debug!(faces = fonts.len(), "Loaded system fonts for share images");
            Arc::new(fonts)
        })
        .clone()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn paint(color: &Color) -> String {
    if color.alpha >= 1.0 {
        format!("fill=\"{}\"", color.hex())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{}\"", color.hex(), color.alpha)
    }
}

fn stop(offset: u8, color: &Color) -> String {
    format!(
        "<stop offset=\"{}%\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
        offset,
        color.hex(),
        color.alpha
    )
}

fn font_attrs(font: &CardFont) -> String {
    let mut attrs = format!(
        "font-family=\"{}\" font-size=\"{}\"",
        escape(CardFont::FAMILY),
        font.size_px
    );
    if font.bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if font.italic {
        attrs.push_str(" font-style=\"italic\"");
    }
    attrs
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

impl SvgSurface {
    fn fill_attr(&mut self, fill: &Fill) -> Result<String, RenderError> {
        match fill {
            Fill::Solid(color) => Ok(paint(color)),
            Fill::Diagonal { from, to } => {
                self.gradients += 1;
                let id = format!("g{}", self.gradients);
                write!(
                    self.defs,
                    "<linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"1\">{}{}</linearGradient>",
                    id,
                    stop(0, from),
                    stop(100, to)
                )
                .map_err(|e| RenderError::Draw(e.to_string()))?;
                Ok(format!("fill=\"url(#{})\"", id))
            }
        }
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                radius,
                fill,
            } => {
                let fill = self.fill_attr(fill)?;
                write!(
                    self.body,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" {}/>",
                    x, y, width, height, radius, fill
                )
            }
            DrawCommand::Text {
                x,
                y,
                text,
                font,
                color,
                align,
            } => write!(
                self.body,
                "<text x=\"{}\" y=\"{}\" dominant-baseline=\"text-before-edge\" text-anchor=\"{}\" {} {}>{}</text>",
                x,
                y,
                anchor(*align),
                font_attrs(font),
                paint(color),
                escape(text)
            ),
        }
        .map_err(|e| RenderError::Draw(e.to_string()))
    }

    fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"><defs>{defs}</defs>{body}</svg>",
            w = self.width,
            h = self.height,
            defs = self.defs,
            body = self.body
        )
    }

    fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let options = usvg::Options {
            fontdb: font_database(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&self.document(), &options)
            .map_err(|e| RenderError::Rasterize(e.to_string()))?;
        let mut pixmap = tiny_skia::Pixmap::new(self.width, self.height).ok_or_else(|| {
            RenderError::Rasterize(format!("cannot allocate {}x{}", self.width, self.height))
        })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        pixmap
            .encode_png()
            .map_err(|e| RenderError::Rasterize(e.to_string()))
    }
}

impl RenderTarget for SvgTarget {
    fn create(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Unavailable(format!(
                "invalid surface size {}x{}",
                width, height
            )));
        }
        self.surface = Some(SvgSurface {
            width,
            height,
            defs: String::new(),
            body: String::new(),
            gradients: 0,
        });
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        self.surface()?.draw(command)
    }

    fn rasterize(&mut self) -> Result<RasterImage, RenderError> {
        let png = self
            .surface
            .as_ref()
            .ok_or_else(|| RenderError::Rasterize("nothing drawn".into()))?
            .encode_png()?;
        Ok(RasterImage {
            mime_type: "image/png",
            extension: "png",
            payload: DownloadPayload::Bytes(png),
        })
    }

    fn destroy(&mut self) {
        self.surface = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn svg_text(target: &SvgTarget) -> String {
        target.surface.as_ref().unwrap().document()
    }

    fn png_bytes(image: RasterImage) -> Vec<u8> {
        match image.payload {
            DownloadPayload::Bytes(bytes) => bytes,
            DownloadPayload::DataUrl(_) => panic!("expected bytes"),
        }
    }

    /// Width and height from the IHDR chunk
    fn png_size(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn draws_gradient_rect_and_escaped_text() {
        let mut target = SvgTarget::new();
        target.create(1200, 630).unwrap();
        target
            .draw(&DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 630.0,
                radius: 0.0,
                fill: Fill::Diagonal {
                    from: Color::NIGHT,
                    to: Color::DEEP_BLUE,
                },
            })
            .unwrap();
        target
            .draw(&DrawCommand::Text {
                x: 600.0,
                y: 40.0,
                text: "Bread & <Salt>".into(),
                font: CardFont {
                    size_px: 36.0,
                    bold: true,
                    italic: false,
                },
                color: Color::PARCHMENT,
                align: TextAlign::Center,
            })
            .unwrap();

        let svg = svg_text(&target);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"1200\" height=\"630\""));
        assert!(svg.contains("<linearGradient id=\"g1\""));
        assert!(svg.contains("fill=\"url(#g1)\""));
        assert!(svg.contains("Bread &amp; &lt;Salt&gt;"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("font-weight=\"bold\""));
    }

    #[test]
    fn rasterizes_to_png_at_surface_size() {
        let mut target = SvgTarget::new();
        target.create(1200, 630).unwrap();
        target
            .draw(&DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 1200.0,
                height: 630.0,
                radius: 0.0,
                fill: Fill::Diagonal {
                    from: Color::NIGHT,
                    to: Color::DEEP_BLUE,
                },
            })
            .unwrap();

        let image = target.rasterize().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.extension, "png");
        let bytes = png_bytes(image);
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        assert_eq!(png_size(&bytes), (1200, 630));
    }

    #[test]
    fn translucent_colors_use_opacity() {
        let mut target = SvgTarget::new();
        target.create(10, 10).unwrap();
        target
            .draw(&DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
                radius: 2.0,
                fill: Fill::Solid(Color::GOLD.with_alpha(0.5)),
            })
            .unwrap();
        let svg = svg_text(&target);
        assert!(svg.contains("fill=\"#daa520\" fill-opacity=\"0.5\""));
    }

    #[test]
    fn drawing_requires_a_surface() {
        let mut target = SvgTarget::new();
        let command = DrawCommand::Rect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            radius: 0.0,
            fill: Fill::Solid(Color::GOLD),
        };
        assert!(matches!(
            target.draw(&command),
            Err(RenderError::Unavailable(_))
        ));

        target.create(4, 4).unwrap();
        target.destroy();
        assert!(target.rasterize().is_err());
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(SvgTarget::new().create(0, 630).is_err());
    }
}

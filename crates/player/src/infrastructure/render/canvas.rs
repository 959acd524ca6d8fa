//! HTML canvas render target
//!
//! The canvas is never attached to the document; dropping the references
//! in `destroy` releases it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mythweaver_domain::export::{Color, DrawCommand, Fill, TextAlign};

use crate::ports::outbound::{DownloadPayload, RasterImage, RenderError, RenderTarget};

#[derive(Default)]
pub struct CanvasTarget {
    surface: Option<(HtmlCanvasElement, CanvasRenderingContext2d)>,
}

impl CanvasTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

fn rounded_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    r: f64,
) -> Result<(), JsValue> {
    ctx.begin_path();
    if r <= 0.0 {
        ctx.rect(x, y, w, h);
    } else {
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r)?;
        ctx.arc_to(x + w, y + h, x, y + h, r)?;
        ctx.arc_to(x, y + h, x, y, r)?;
        ctx.arc_to(x, y, x + w, y, r)?;
    }
    ctx.close_path();
    Ok(())
}

fn set_fill(
    ctx: &CanvasRenderingContext2d,
    fill: &Fill,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    match fill {
        Fill::Solid(color) => ctx.set_fill_style_str(&color.css()),
        Fill::Diagonal { from, to } => {
            let gradient = ctx.create_linear_gradient(x, y, x + w, y + h);
            gradient.add_color_stop(0.0, &from.css())?;
            gradient.add_color_stop(1.0, &to.css())?;
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
    Ok(())
}

fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

fn paint(
    ctx: &CanvasRenderingContext2d,
    command: &DrawCommand,
) -> Result<(), JsValue> {
    match command {
        DrawCommand::Rect {
            x,
            y,
            width,
            height,
            radius,
            fill,
        } => {
            let (x, y, w, h) = (*x as f64, *y as f64, *width as f64, *height as f64);
            set_fill(ctx, fill, x, y, w, h)?;
            rounded_rect(ctx, x, y, w, h, *radius as f64)?;
            ctx.fill();
        }
        DrawCommand::Text {
            x,
            y,
            text,
            font,
            color,
            align,
        } => {
            ctx.set_font(&font.css());
            ctx.set_text_align(text_align(*align));
            ctx.set_text_baseline("top");
            ctx.set_fill_style_str(&Color::css(color));
            ctx.fill_text(text, *x as f64, *y as f64)?;
        }
    }
    Ok(())
}

impl RenderTarget for CanvasTarget {
    fn create(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| RenderError::Unavailable("no document".into()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| RenderError::Unavailable(js_err(e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| RenderError::Unavailable("canvas cast failed".into()))?;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| RenderError::Unavailable(js_err(e)))?
            .ok_or_else(|| RenderError::Unavailable("2d context unsupported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Unavailable("context cast failed".into()))?;

        self.surface = Some((canvas, ctx));
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RenderError> {
        let (_, ctx) = self
            .surface
            .as_ref()
            .ok_or_else(|| RenderError::Unavailable("canvas not created".into()))?;
        paint(ctx, command).map_err(|e| RenderError::Draw(js_err(e)))
    }

    fn rasterize(&mut self) -> Result<RasterImage, RenderError> {
        let (canvas, _) = self
            .surface
            .as_ref()
            .ok_or_else(|| RenderError::Rasterize("canvas not created".into()))?;
        let data_url = canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| RenderError::Rasterize(js_err(e)))?;
        Ok(RasterImage {
            mime_type: "image/png",
            extension: "png",
            payload: DownloadPayload::DataUrl(data_url),
        })
    }

    fn destroy(&mut self) {
        if let Some((canvas, _)) = self.surface.take() {
            canvas.remove();
        }
    }
}

//! Browser adapter backed by web-sys

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::infrastructure::render::CanvasTarget;
use crate::ports::outbound::{
    BrowserError, BrowserPort, DownloadFile, DownloadPayload, RenderTarget,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn object_url(bytes: &[u8], mime_type: &str) -> Result<String, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))
}

fn click_download_link(href: &str, filename: &str) -> Result<(), String> {
    let document = window()?.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(href);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(|e| format!("{:?}", e))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[async_trait::async_trait(?Send)]
impl BrowserPort for WebBrowser {
    async fn copy_to_clipboard(&self, text: &str) -> Result<(), BrowserError> {
        let clipboard = window()
            .map_err(BrowserError::Clipboard)?
            .navigator()
            .clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::Clipboard(format!("{:?}", e)))
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError> {
        window()
            .map_err(BrowserError::OpenUrl)?
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|e| BrowserError::OpenUrl(format!("{:?}", e)))
    }

    fn download(&self, file: DownloadFile) -> Result<(), BrowserError> {
        let result = match &file.payload {
            DownloadPayload::DataUrl(href) => click_download_link(href, &file.filename),
            DownloadPayload::Bytes(bytes) => {
                object_url(bytes, &file.mime_type).and_then(|href| {
                    let clicked = click_download_link(&href, &file.filename);
                    let _ = Url::revoke_object_url(&href);
                    clicked
                })
            }
        };
        result.map_err(BrowserError::Download)
    }

    fn page_url(&self, route_path: &str) -> String {
        let origin = window()
            .ok()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        format!("{}{}", origin, route_path)
    }

    fn share_card_target(&self) -> Box<dyn RenderTarget> {
        Box::new(CanvasTarget::new())
    }
}

//! Live preview fetching and stale-response bookkeeping.

use base64::Engine as _;
use futures::future::LocalBoxFuture;
use thiserror::Error;
use tracing::{debug, error};

use super::request::PreviewRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("preview request could not be sent: {0}")]
    Transport(String),
    #[error("preview request failed with status: {0}")]
    Status(u16),
    #[error("preview response could not be read: {0}")]
    Body(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResponse {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl PreviewResponse {
    pub fn png(body: Vec<u8>) -> Self {
        Self {
            content_type: Some("image/png".into()),
            body,
        }
    }

    /// Inline `data:` URL usable as an `<img>` source.
    pub fn data_url(&self) -> String {
        let mime = self
            .content_type
            .as_deref()
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or("image/png");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.body);
        format!("data:{mime};base64,{encoded}")
    }
}

/// Sends a preview request. Swappable so the controller can be driven in tests.
pub trait PreviewTransport {
    fn send(
        &self,
        url: &str,
        request: PreviewRequest,
    ) -> LocalBoxFuture<'static, Result<PreviewResponse, PreviewError>>;
}

/// Real HTTP transport: `gloo-net` in the browser, `reqwest` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[cfg(target_arch = "wasm32")]
impl PreviewTransport for HttpTransport {
    fn send(
        &self,
        url: &str,
        request: PreviewRequest,
    ) -> LocalBoxFuture<'static, Result<PreviewResponse, PreviewError>> {
        use futures::FutureExt;

        let url = url.to_string();
        async move {
            let body = form_data(&request)?;
            let response = gloo_net::http::Request::post(&url)
                .body(body)
                .map_err(|err| PreviewError::Transport(err.to_string()))?
                .send()
                .await
                .map_err(|err| PreviewError::Transport(err.to_string()))?;

            if !response.ok() {
                return Err(PreviewError::Status(response.status()));
            }
            let content_type = response.headers().get("content-type");
            let body = response
                .binary()
                .await
                .map_err(|err| PreviewError::Body(err.to_string()))?;
            Ok(PreviewResponse { content_type, body })
        }
        .boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
fn form_data(request: &PreviewRequest) -> Result<web_sys::FormData, PreviewError> {
    use super::request::Part;

    let js_err = |err: wasm_bindgen::JsValue| PreviewError::Transport(format!("{err:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;

    for (name, part) in request.parts() {
        match part {
            Part::Text(value) => form.append_with_str(name, value).map_err(js_err)?,
            Part::File {
                filename,
                mime,
                bytes,
            } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let sequence = js_sys::Array::new();
                sequence.push(&array);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(mime);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                    .map_err(js_err)?;
                form.append_with_blob_and_filename(name, &blob, filename)
                    .map_err(js_err)?;
            }
        }
    }
    Ok(form)
}

#[cfg(not(target_arch = "wasm32"))]
impl PreviewTransport for HttpTransport {
    fn send(
        &self,
        url: &str,
        request: PreviewRequest,
    ) -> LocalBoxFuture<'static, Result<PreviewResponse, PreviewError>> {
        use futures::FutureExt;
        use reqwest::multipart::{Form, Part as FilePart};

        use super::request::Part;

        let url = url.to_string();
        async move {
            let mut form = Form::new();
            for (name, part) in request.parts() {
                form = match part {
                    Part::Text(value) => form.text(name.to_string(), value.clone()),
                    Part::File {
                        filename,
                        mime,
                        bytes,
                    } => {
                        let file = FilePart::bytes(bytes.clone())
                            .file_name(filename.clone())
                            .mime_str(mime)
                            .map_err(|err| PreviewError::Transport(err.to_string()))?;
                        form.part(name.to_string(), file)
                    }
                };
            }

            let response = reqwest::Client::new()
                .post(&url)
                .multipart(form)
                .send()
                .await
                .map_err(|err| PreviewError::Transport(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(PreviewError::Status(status.as_u16()));
            }
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let body = response
                .bytes()
                .await
                .map_err(|err| PreviewError::Body(err.to_string()))?;
            Ok(PreviewResponse {
                content_type,
                body: body.to_vec(),
            })
        }
        .boxed_local()
    }
}

/// What happened to a finished fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A newer request was issued meanwhile; the response is dropped.
    Stale,
    /// The preview image changed. Carries the reasons to record in history.
    Updated { reasons: Vec<String> },
    Failed(PreviewError),
}

/// Issues generation tokens and keeps the last good image.
///
/// Only the response to the most recent request may replace the image.
/// Reasons attached to superseded requests ride along with the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewTracker {
    latest: u64,
    settled: u64,
    pending_reasons: Vec<String>,
    image: Option<String>,
}

impl PreviewTracker {
    pub fn issue(&mut self, reason: Option<String>) -> u64 {
        self.latest += 1;
        if let Some(reason) = reason {
            self.pending_reasons.push(reason);
        }
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_loading(&self) -> bool {
        self.settled < self.latest
    }

    /// Data URL of the current preview, if one has been generated.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: Result<PreviewResponse, PreviewError>,
    ) -> Resolution {
        if generation != self.latest {
            debug!(generation, latest = self.latest, "discarding stale preview response");
            return Resolution::Stale;
        }
        self.settled = generation;

        match outcome {
            Ok(response) => {
                self.image = Some(response.data_url());
                Resolution::Updated {
                    reasons: std::mem::take(&mut self.pending_reasons),
                }
            }
            Err(err) => {
                error!("error updating preview: {err}");
                self.pending_reasons.clear();
                Resolution::Failed(err)
            }
        }
    }
}

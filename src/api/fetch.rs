//! Browser Transport
//!
//! `Transport` implementation on top of `window.fetch`.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use super::transport::{ApiRequest, Multipart, Part, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone)]
pub struct FetchTransport {
    base_url: String,
    token_key: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>, token_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_key: token_key.into(),
        }
    }

    fn bearer_token(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage
            .get_item(&self.token_key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
}

/// Build browser `FormData` from a multipart body
fn to_form_data(body: &Multipart) -> ApiResult<FormData> {
    let form = FormData::new()?;
    for (name, part) in &body.parts {
        match part {
            Part::Text(value) => form.append_with_str(name, value)?,
            Part::File(file) => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let sequence = js_sys::Array::of1(&bytes);
                let options = BlobPropertyBag::new();
                options.set_type(&file.mime);
                let blob = Blob::new_with_u8_array_sequence_and_options(&sequence, &options)?;
                form.append_with_blob_and_filename(name, &blob, &file.file_name)?;
            }
        }
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, request.path_and_query());
        log::debug!("[API] {} {}", request.method, url);

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            // The browser sets the multipart boundary header itself
            init.set_body(&to_form_data(body)?.into());
        }

        let req = Request::new_with_str_and_init(&url, &init)?;
        req.headers().set("Accept", "application/json")?;
        if let Some(token) = self.bearer_token() {
            req.headers().set("Authorization", &format!("Bearer {}", token))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        let resp: Response = resp_value.dyn_into()?;

        let json = match resp.json() {
            Ok(promise) => JsFuture::from(promise).await.ok(),
            Err(_) => None,
        };
        let body: Value = json
            .and_then(|js| serde_wasm_bindgen::from_value(js).ok())
            .unwrap_or(Value::Null);

        if !resp.ok() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| resp.status_text());
            return Err(ApiError::Http {
                status: resp.status(),
                message,
            });
        }

        if body.is_null() {
            return Err(ApiError::Decode(format!("empty body from {}", url)));
        }
        Ok(body)
    }
}

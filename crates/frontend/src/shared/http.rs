//! Authenticated access to the content API.
//!
//! Every call goes through the `AuthGate`: the bearer header is taken from
//! the session, and a 401 (or a missing token) sends the user to the login
//! route exactly once.

use std::fmt;
use std::sync::Arc;

use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::response::{decode_list, decode_record, decode_records};
use contracts::shared::upload::{parse_upload_response, UPLOAD_FIELD, UPLOAD_PATH};
use contracts::system::auth::AuthGate;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use super::api_utils::AppConfig;
use crate::system::auth::context::Session;

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

enum Body {
    Empty,
    Json(serde_json::Value),
    Form(FormData),
}

#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    gate: Arc<AuthGate<Session>>,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            config,
            gate: Arc::new(AuthGate::new(session)),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> Session {
        *self.gate.session()
    }

    /// Store a fresh token and re-arm the 401 redirect.
    pub fn signed_in(&self, token: String) {
        self.gate.session().sign_in(token);
        self.gate.reset();
    }

    pub async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        self.execute(Verb::Get, path, Body::Empty).await
    }

    /// GET a collection; a single object or an empty body is tolerated.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let body = self.get_text(path).await?;
        decode_list(&body).map_err(|e| self.log_decode(path, e))
    }

    /// GET a resource collection; every record must carry an id.
    pub async fn get_records<T: Resource>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let body = self.get_text(path).await?;
        decode_records(&body).map_err(|e| self.log_decode(path, e))
    }

    /// GET one resource record; a body without an id is a load error.
    pub async fn get_record<T: Resource>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.get_text(path).await?;
        decode_record(&body).map_err(|e| self.log_decode(path, e))
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let value = serde_json::to_value(body)?;
        self.execute(Verb::Post, path, Body::Json(value)).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ApiError> {
        let value = serde_json::to_value(body)?;
        self.execute(Verb::Put, path, Body::Json(value)).await
    }

    pub async fn post_form(&self, path: &str, form: FormData) -> Result<String, ApiError> {
        self.execute(Verb::Post, path, Body::Form(form)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Verb::Delete, path, Body::Empty).await.map(|_| ())
    }

    /// Upload a file to the shared upload endpoint and return the stored
    /// filename to be written into the record's image field.
    pub async fn upload(&self, file: &File) -> Result<String, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(js_error)?;
        let body = self.post_form(UPLOAD_PATH, form).await?;
        let filename = parse_upload_response(&body)?;
        log::debug!("uploaded {} as {}", file.name(), filename);
        Ok(filename)
    }

    async fn execute(&self, verb: Verb, path: &str, body: Body) -> Result<String, ApiError> {
        let result = self.send(verb, path, body).await;
        self.gate.observe(result)
    }

    async fn send(&self, verb: Verb, path: &str, body: Body) -> Result<String, ApiError> {
        let bearer = self.gate.bearer()?;
        let url = self.config.api_url(path);

        let builder: RequestBuilder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .header("Authorization", &bearer)
        .header("Accept", "application/json");

        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            // the browser sets the multipart boundary itself
            Body::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;

        let response = request.send().await.map_err(|e| {
            log::error!("{} {} failed to send: {}", verb, path, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            log::error!("{} {} -> {}: {}", verb, path, status, text);
            return Err(ApiError::from_status(status, text));
        }

        log::debug!("{} {} -> {}", verb, path, status);
        Ok(text)
    }

    fn log_decode(&self, path: &str, err: ApiError) -> ApiError {
        log::error!("GET {} returned an unexpected shape: {}", path, err);
        err
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

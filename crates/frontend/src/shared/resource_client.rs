use std::marker::PhantomData;

use contracts::domain::common::{Resource, ResourceDef};
use contracts::shared::api_error::ApiError;
use contracts::shared::form_draft::multipart_fields;
use contracts::shared::urls::api_path;
use web_sys::{File, FormData};

use super::http::ApiClient;

/// Typed CRUD operations for one resource over the shared `ApiClient`.
pub struct ResourceClient<T> {
    api: ApiClient,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    pub fn def(&self) -> &'static ResourceDef {
        T::def()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        self.api.get_records(&api_path(T::KIND, None)).await
    }

    pub async fn get(&self, id: i64) -> Result<T, ApiError> {
        self.api.get_record(&api_path(T::KIND, Some(id))).await
    }

    pub async fn create(&self, record: &T) -> Result<(), ApiError> {
        self.api
            .post_json(&api_path(T::KIND, None), record)
            .await
            .map(|_| ())
    }

    /// Create with the chosen file sent in the same multipart request
    /// under the resource's image field.
    pub async fn create_multipart(&self, record: &T, file: &File) -> Result<(), ApiError> {
        let image_key = match T::def().image_field() {
            Some(field) => field.key,
            None => return self.create(record).await,
        };

        let payload = match serde_json::to_value(record)? {
            serde_json::Value::Object(map) => map,
            other => return Err(ApiError::Decode(format!("expected an object, got {}", other))),
        };

        let form = FormData::new().map_err(js_error)?;
        for (key, value) in multipart_fields(&payload) {
            if key != image_key {
                form.append_with_str(&key, &value).map_err(js_error)?;
            }
        }
        form.append_with_blob_and_filename(image_key, file, &file.name())
            .map_err(js_error)?;

        self.api
            .post_form(&api_path(T::KIND, None), form)
            .await
            .map(|_| ())
    }

    pub async fn update(&self, id: i64, record: &T) -> Result<(), ApiError> {
        self.api
            .put_json(&api_path(T::KIND, Some(id)), record)
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&api_path(T::KIND, Some(id))).await
    }

    pub async fn upload(&self, file: &File) -> Result<String, ApiError> {
        self.api.upload(file).await
    }
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

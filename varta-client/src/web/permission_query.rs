/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::error::MediaAccessError;
use crate::permissions::{Capability, PermissionQuery, PermissionStatus};
use futures::future::LocalBoxFuture;
use gloo_utils::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::PermissionState;

use super::describe_js_error;

/// `navigator.permissions.query({ name })`.
///
/// `camera` and `microphone` are not in web-sys' `PermissionName`, so the
/// descriptor is built by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPermissionQuery;

impl WebPermissionQuery {
    async fn query_state(capability: Capability) -> Result<PermissionState, JsValue> {
        let permissions = window().navigator().permissions()?;
        let descriptor = js_sys::Object::new();
        js_sys::Reflect::set(
            &descriptor,
            &JsValue::from_str("name"),
            &JsValue::from_str(capability.as_str()),
        )?;
        let status: web_sys::PermissionStatus = JsFuture::from(permissions.query(&descriptor)?)
            .await?
            .dyn_into()?;
        Ok(status.state())
    }
}

impl PermissionQuery for WebPermissionQuery {
    fn query(
        &self,
        capability: Capability,
    ) -> LocalBoxFuture<'static, Result<PermissionStatus, MediaAccessError>> {
        Box::pin(async move {
            match Self::query_state(capability).await {
                Ok(PermissionState::Granted) => Ok(PermissionStatus::Granted),
                Ok(PermissionState::Denied) => Ok(PermissionStatus::Denied),
                Ok(PermissionState::Prompt) => Ok(PermissionStatus::Prompt),
                Ok(_) => Ok(PermissionStatus::Unsupported),
                Err(e) => {
                    let (name, message) = describe_js_error(&e);
                    Err(MediaAccessError::ProbeUnavailable(format!(
                        "{capability}: {name} {message}"
                    )))
                }
            }
        })
    }
}

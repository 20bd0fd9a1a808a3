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
use crate::media::{LocalTrack, MediaCapture, TrackKind};
use futures::future::LocalBoxFuture;
use gloo_utils::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack};

use super::describe_js_error;

impl LocalTrack for MediaStreamTrack {
    fn kind(&self) -> TrackKind {
        if MediaStreamTrack::kind(self) == "audio" {
            TrackKind::Audio
        } else {
            TrackKind::Video
        }
    }

    fn enabled(&self) -> bool {
        MediaStreamTrack::enabled(self)
    }

    fn stop(&self) {
        MediaStreamTrack::stop(self);
    }
}

/// `navigator.mediaDevices.getUserMedia({ audio: true, video: true })`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMediaCapture;

impl WebMediaCapture {
    async fn request() -> Result<Vec<MediaStreamTrack>, JsValue> {
        let navigator = window().navigator();
        let media_devices = navigator.media_devices()?;

        let constraints = MediaStreamConstraints::new();

        // Request access to the microphone
        constraints.set_audio(&JsValue::TRUE);

        // Request access to the camera
        constraints.set_video(&JsValue::TRUE);

        let promise = media_devices.get_user_media_with_constraints(&constraints)?;
        let stream: MediaStream = JsFuture::from(promise).await?.unchecked_into();

        Ok(stream
            .get_tracks()
            .iter()
            .map(|track| track.unchecked_into::<MediaStreamTrack>())
            .collect())
    }
}

impl MediaCapture for WebMediaCapture {
    type Track = MediaStreamTrack;

    fn get_user_media(
        &self,
    ) -> LocalBoxFuture<'static, Result<Vec<MediaStreamTrack>, MediaAccessError>> {
        Box::pin(async move { Self::request().await.map_err(|e| classify_capture_error(&e)) })
    }
}

fn classify_capture_error(err: &JsValue) -> MediaAccessError {
    let (name, message) = describe_js_error(err);
    let message = if message.is_empty() { name.clone() } else { message };
    match name.as_str() {
        "NotAllowedError" | "SecurityError" => MediaAccessError::AcquisitionDenied(message),
        _ => MediaAccessError::AcquisitionUnavailable(message),
    }
}

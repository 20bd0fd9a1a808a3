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

//! Track acquisition: the one place that may show the native capture prompt.

use crate::error::MediaAccessError;
use futures::future::LocalBoxFuture;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Video,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("audio"),
            Self::Video => f.write_str("video"),
        }
    }
}

/// Handle to a live capture track.
pub trait LocalTrack {
    fn kind(&self) -> TrackKind;
    fn enabled(&self) -> bool;
    /// Stop capture and release the underlying device.
    fn stop(&self);
}

/// One audio and one video track.
///
/// Each side is absent, present-but-disabled or present-and-enabled.
#[derive(Clone, Debug)]
pub struct MediaTrackPair<T> {
    pub audio: Option<T>,
    pub video: Option<T>,
}

impl<T> Default for MediaTrackPair<T> {
    fn default() -> Self {
        Self {
            audio: None,
            video: None,
        }
    }
}

impl<T: LocalTrack> MediaTrackPair<T> {
    /// Keep the first track of each kind; extra tracks are stopped.
    pub fn from_tracks(tracks: impl IntoIterator<Item = T>) -> Self {
        let mut pair = Self::default();
        for track in tracks {
            let slot = match track.kind() {
                TrackKind::Audio => &mut pair.audio,
                TrackKind::Video => &mut pair.video,
            };
            if slot.is_none() {
                *slot = Some(track);
            } else {
                log::debug!("Dropping extra {} track", track.kind());
                track.stop();
            }
        }
        pair
    }

    pub fn is_complete(&self) -> bool {
        self.audio.is_some() && self.video.is_some()
    }

    /// Both tracks present and enabled.
    pub fn is_live(&self) -> bool {
        self.audio.as_ref().is_some_and(|t| t.enabled())
            && self.video.as_ref().is_some_and(|t| t.enabled())
    }

    /// Stop and drop both tracks.
    pub fn release(&mut self) {
        for track in [self.audio.take(), self.video.take()].into_iter().flatten() {
            log::info!("Stopping local {} track", track.kind());
            track.stop();
        }
    }
}

/// The browser media capture subsystem.
pub trait MediaCapture {
    type Track: LocalTrack + 'static;

    /// Request simultaneous audio and video capture.
    fn get_user_media(&self) -> LocalBoxFuture<'static, Result<Vec<Self::Track>, MediaAccessError>>;
}

/// Wraps a [`MediaCapture`] and turns its output into a [`MediaTrackPair`].
///
/// Never retries; a retry is always a new user-initiated join.
pub struct TrackAcquirer<C> {
    capture: Rc<C>,
}

impl<C> Clone for TrackAcquirer<C> {
    fn clone(&self) -> Self {
        Self {
            capture: self.capture.clone(),
        }
    }
}

impl<C: MediaCapture> TrackAcquirer<C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture: Rc::new(capture),
        }
    }

    pub async fn acquire(&self) -> Result<MediaTrackPair<C::Track>, MediaAccessError> {
        let tracks = self.capture.get_user_media().await.map_err(|e| {
            log::warn!("Media acquisition failed: {e}");
            e
        })?;

        let mut pair = MediaTrackPair::from_tracks(tracks);
        if !pair.is_complete() {
            pair.release();
            let missing = "Requested device not found";
            log::warn!("Media acquisition returned an incomplete track set");
            return Err(MediaAccessError::AcquisitionUnavailable(missing.to_string()));
        }
        log::info!("Media acquisition succeeded");
        Ok(pair)
    }
}

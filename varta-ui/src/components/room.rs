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

use web_sys::{HtmlInputElement, HtmlVideoElement, MediaStream, MediaStreamTrack};
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct RoomProps {
    pub name: String,
    pub topics: Vec<String>,
    pub audio: MediaStreamTrack,
    pub video: MediaStreamTrack,
    pub chat_input: String,
    pub on_chat_input: Callback<String>,
    pub on_exit: Callback<()>,
}

/// The active session: local preview, who you are, and the chat box.
#[function_component(Room)]
pub fn room(props: &RoomProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with(props.video.clone(), move |track| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let tracks = js_sys::Array::of1(track);
                match MediaStream::new_with_tracks(&tracks) {
                    Ok(stream) => video.set_src_object(Some(&stream)),
                    Err(e) => log::error!("Failed to build preview stream: {e:?}"),
                }
            }
            move || {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_src_object(None);
                }
            }
        });
    }

    let on_chat_input = props.on_chat_input.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        on_chat_input.emit(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_exit = props.on_exit.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_exit.emit(()));

    html! {
        <div class="room">
            <div class="room-video">
                // The local preview is muted; audio goes to peers, not back to us.
                <video ref={video_ref} class="local-video" autoplay=true playsinline=true muted=true />
                <div class="room-identity">
                    <span class="room-name">{ &props.name }</span>
                    <span class="mic-state">
                        { if props.audio.enabled() { "Mic on" } else { "Mic off" } }
                    </span>
                    <ul class="room-topics">
                        { for props.topics.iter().map(|topic| html! { <li>{ topic }</li> }) }
                    </ul>
                </div>
            </div>
            <div class="room-chat">
                <div class="chat-messages">
                    <p class="chat-placeholder">{ "Chat messages..." }</p>
                </div>
                <div class="chat-controls">
                    <button class="join-exit-btn" {onclick}>{ "Exit" }</button>
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Type a message..."
                        value={props.chat_input.clone()}
                        {oninput}
                    />
                    <button class="send-btn">{ "Send" }</button>
                </div>
            </div>
        </div>
    }
}

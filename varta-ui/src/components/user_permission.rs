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

//! Consent popover shown before the browser's own camera/microphone prompt.
//!
//! Collects the display name and the topics (languages) the user wants to
//! practise. Submitting hands a [`UserProfile`] to the parent, which starts
//! track acquisition; cancelling closes the popover without acquiring.

use varta_client::profile::MAX_DISPLAY_NAME_LEN;
use varta_client::{is_valid_display_name, UserProfile};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Hindi",
    "Japanese",
    "Mandarin",
    "Portuguese",
];

#[derive(Properties, Debug, PartialEq)]
pub struct UserPermissionProps {
    /// Stored profile used to pre-fill the form.
    pub initial: UserProfile,
    pub on_submit: Callback<UserProfile>,
    pub on_cancel: Callback<()>,
}

pub struct UserPermission {
    name: String,
    selected: Vec<String>,
    name_error: Option<String>,
}

pub enum Msg {
    NameChanged(String),
    TopicToggled(String),
    Submit,
    Cancel,
}

impl Component for UserPermission {
    type Message = Msg;
    type Properties = UserPermissionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let initial = &ctx.props().initial;
        Self {
            name: initial.display_name.clone(),
            selected: initial.topics.clone(),
            name_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => {
                self.name = name;
                self.name_error = None;
                true
            }
            Msg::TopicToggled(topic) => {
                if let Some(pos) = self.selected.iter().position(|t| *t == topic) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(topic);
                }
                true
            }
            Msg::Submit => {
                let name = self.name.trim();
                if !is_valid_display_name(name) {
                    log::warn!("Rejected display name {name:?}");
                    self.name_error = Some(format!(
                        "Use up to {MAX_DISPLAY_NAME_LEN} letters, digits, spaces, '_' or '-'."
                    ));
                    return true;
                }
                let profile = UserProfile::new(name, self.selected.iter().cloned());
                ctx.props().on_submit.emit(profile);
                false
            }
            Msg::Cancel => {
                ctx.props().on_cancel.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            Msg::NameChanged(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="permission-popover" role="dialog" aria-modal="true">
                <form class="permission-form" {onsubmit}>
                    <h2 class="permission-title">{ "Before you join" }</h2>
                    <p class="permission-hint">
                        { "varta needs your camera and microphone. Your browser will ask next." }
                    </p>
                    <label for="display-name">{ "Name" }</label>
                    <input
                        id="display-name"
                        class="display-name-input"
                        type="text"
                        placeholder="Anonymous"
                        value={self.name.clone()}
                        {oninput}
                    />
                    {
                        if let Some(error) = &self.name_error {
                            html! { <p class="error-message name-error">{ error }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <fieldset class="topic-list">
                        <legend>{ "Languages you want to practise" }</legend>
                        { for LANGUAGES.iter().map(|lang| self.topic_checkbox(ctx, lang)) }
                    </fieldset>
                    <div class="permission-actions">
                        <button type="submit" class="allow-join-btn">{ "Allow & Join" }</button>
                        <button
                            type="button"
                            class="cancel-btn"
                            onclick={link.callback(|_| Msg::Cancel)}
                        >
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}

impl UserPermission {
    fn topic_checkbox(&self, ctx: &Context<Self>, lang: &str) -> Html {
        let checked = self.selected.iter().any(|t| t == lang);
        let topic = lang.to_string();
        let onchange = ctx
            .link()
            .callback(move |_: Event| Msg::TopicToggled(topic.clone()));
        html! {
            <label class="topic-option">
                <input type="checkbox" value={lang.to_string()} {checked} {onchange} />
                { lang }
            </label>
        }
    }
}

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

use crate::components::navbar::Navbar;
use crate::components::room::Room;
use crate::components::user_permission::UserPermission;
use std::rc::Rc;
use varta_client::{
    browser, BrowserIdentity, GateConfig, LocalStorageProfileStore, SessionDriver,
    SessionDriverOptions, UserProfile, WebMediaCapture, WebPermissionQuery,
};
use yew::prelude::*;

pub const JOIN_PROMPT: &str = "Click on join button to start match.....";

#[derive(Properties, Debug, PartialEq)]
pub struct ChatPageProps {
    pub config: GateConfig,
    /// Overrides user-agent classification.
    #[prop_or_default]
    pub identity: Option<BrowserIdentity>,
}

pub struct ChatPage {
    driver: SessionDriver<WebMediaCapture>,
    chat_input: String,
}

pub enum Msg {
    GateChanged,
    Toggle,
    SubmitProfile(UserProfile),
    CancelPopover,
    ExitRoom,
    ChatInput(String),
}

impl Component for ChatPage {
    type Message = Msg;
    type Properties = ChatPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let identity = props.identity.unwrap_or_else(browser::classify);
        let on_change = ctx.link().callback(|_: ()| Msg::GateChanged);
        let driver = SessionDriver::new(SessionDriverOptions {
            identity,
            config: props.config.clone(),
            capture: WebMediaCapture,
            permissions: Rc::new(WebPermissionQuery),
            store: Rc::new(LocalStorageProfileStore),
            on_change: Rc::new(move || on_change.emit(())),
        });
        Self {
            driver,
            chat_input: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GateChanged => true,
            Msg::Toggle => {
                self.driver.toggle();
                false
            }
            Msg::SubmitProfile(profile) => {
                self.driver.submit_profile(profile);
                false
            }
            Msg::CancelPopover => {
                self.driver.cancel_popover();
                false
            }
            Msg::ExitRoom => {
                self.driver.request_exit();
                false
            }
            Msg::ChatInput(text) => {
                self.chat_input = text;
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.driver.snapshot();
        let link = ctx.link();

        let room = if snapshot.popover_open {
            None
        } else {
            self.driver.with_gate(|gate| {
                gate.room_handoff().map(|room| {
                    html! {
                        <Room
                            name={room.display_name.to_string()}
                            topics={room.topics.to_vec()}
                            audio={room.audio.clone()}
                            video={room.video.clone()}
                            chat_input={self.chat_input.clone()}
                            on_chat_input={link.callback(Msg::ChatInput)}
                            on_exit={link.callback(|_| Msg::ExitRoom)}
                        />
                    }
                })
            })
        };

        let content = room.unwrap_or_else(|| {
            let label = if snapshot.intent { "Exit" } else { "Join" };
            html! {
                <>
                    <div class="join-placeholder">
                        <img class="placeholder-logo" src="./apple-icon-180x180.png" alt="varta-logo" />
                        <p class="join-prompt">{ JOIN_PROMPT }</p>
                        {
                            if snapshot.error.occurred {
                                html! { <p class="error-message">{ &snapshot.error.message }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <div class="chat-panel">
                        <div class="chat-messages">
                            <p class="chat-placeholder">{ "Chat messages..." }</p>
                        </div>
                        <div class="chat-controls">
                            <button class="join-exit-btn" onclick={link.callback(|_| Msg::Toggle)}>
                                { label }
                            </button>
                            <input
                                type="text"
                                class="chat-input"
                                placeholder="Type a message..."
                                disabled=true
                            />
                            <button class="send-btn" disabled=true>{ "Send" }</button>
                        </div>
                    </div>
                </>
            }
        });

        html! {
            <>
                <Navbar />
                <div class="chat-page">
                    if snapshot.popover_open {
                        <div class="popover-backdrop"></div>
                    }
                    <div class={classes!("chat-card", snapshot.popover_open.then_some("blurred"))}>
                        { content }
                    </div>
                    if snapshot.popover_open {
                        <UserPermission
                            initial={snapshot.profile.clone()}
                            on_submit={link.callback(Msg::SubmitProfile)}
                            on_cancel={link.callback(|_| Msg::CancelPopover)}
                        />
                    }
                </div>
            </>
        }
    }
}

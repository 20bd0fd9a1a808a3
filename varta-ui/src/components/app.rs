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

use crate::components::chat_page::ChatPage;
use crate::components::config_error::ConfigError;
use crate::constants::RuntimeConfig;
use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct AppProps {
    pub config: Result<RuntimeConfig, String>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    match &props.config {
        Ok(config) => html! { <ChatPage config={config.gate_config()} /> },
        Err(message) => html! { <ConfigError message={message.clone()} /> },
    }
}

/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown instead of the chat page when the runtime configuration is unusable.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container config-error">
            <h2 class="error-title">{ "varta could not start" }</h2>
            <p class="error-message">{ props.message.clone() }</p>
        </div>
    }
}

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

#[cfg(target_arch = "wasm32")]
fn main() {
    use varta_ui::components::app::{App, AppProps};
    use varta_ui::constants::app_config;

    let config = app_config();
    let level = config
        .as_ref()
        .map(|c| c.log_level())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    if let Err(e) = &config {
        log::error!("{e}");
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("varta-ui only runs in the browser; build it for wasm32-unknown-unknown");
}

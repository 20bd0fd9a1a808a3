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

//! Native (desktop / test) platform primitives.

use std::future::Future;

/// Spawn a `!Send` task on the current thread.
///
/// **Important:** must be called from inside a `tokio::task::LocalSet`.
pub fn spawn_local<F: Future<Output = ()> + 'static>(future: F) {
    tokio::task::spawn_local(future);
}

/// There is no browser outside wasm.
pub fn user_agent() -> Option<String> {
    None
}

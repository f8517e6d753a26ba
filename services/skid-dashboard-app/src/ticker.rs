//! Scoped repeating timer for chart refreshes
//!
//! Arming hands back a handle that must be cancelled on the reverse
//! transition or on tile teardown, so no timer outlives its tile.
//! On non-wasm targets arming is a no-op, which keeps the crate
//! buildable and testable natively.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};

/// A live repeating timer tied to one tile's chart view.
pub struct RefreshTimer {
    #[cfg(target_arch = "wasm32")]
    handle: IntervalHandle,
}

impl RefreshTimer {
    /// Arm a repeating timer firing every `period`.
    ///
    /// Returns `None` when no timer backend exists (non-wasm) or the
    /// browser refused to schedule one.
    pub fn arm(period: Duration, on_tick: impl Fn() + 'static) -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            match set_interval_with_handle(on_tick, period) {
                Ok(handle) => Some(Self { handle }),
                Err(err) => {
                    log::error!("failed to arm refresh timer: {:?}", err);
                    None
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (period, &on_tick);
            None
        }
    }

    /// Cancel the timer. Synchronous; no tick fires after this returns.
    pub fn cancel(self) {
        #[cfg(target_arch = "wasm32")]
        self.handle.clear();
    }
}

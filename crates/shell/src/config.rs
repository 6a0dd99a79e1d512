use std::ops::RangeInclusive;

use tindahan_core::CartId;

/// Session settings. Defaults reproduce the store's fixed behavior; there is no
/// config file or flag, only `RUST_LOG` for the log filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Accepted quantities for the add and remove prompts.
    pub quantity: RangeInclusive<u32>,
    /// Id of the active cart; kept across checkouts.
    pub cart_id: CartId,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quantity: 1..=100,
            cart_id: CartId::new(1),
        }
    }
}

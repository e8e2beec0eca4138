#![no_std]

pub mod engine;
pub mod sync;

pub use engine::{execute_swap, resolve_price_limit, swap_start_price, SwapParams, SwapResult};
pub use sync::{cross_limit_tick, next_limit_tick, sync_pool, sync_side, SyncReport};

#![no_std]

pub mod limit;
pub mod overlay;
pub mod range;
pub mod state;
pub mod store;
pub mod tickmap;
pub mod types;

pub use limit::{anchor_limit_tick, consume_limit_tick, release_limit_tick};
pub use overlay::{EmptyStore, MemoryStore, Overlay};
pub use range::{cross_range_tick, fee_growth_inside, update_range_tick};
pub use state::{LimitSide, PoolState, RangeState};
pub use store::TickStore;
pub use types::{LimitTick, RangeTick, TickDeltas, TickMapKind};

pub use limitswap_math::{is_aligned, is_valid_tick};

#![no_std]

pub mod claim;
pub mod error;
pub mod limit;
pub mod range;

pub use claim::{burn_limit_position, claim_tick, stage, take_share, ClaimOutcome, LimitStage};
pub use error::PositionError;
pub use limit::{add_limit_liquidity, deposit_for_liquidity, liquidity_for_deposit, order_amount, LimitPosition};
pub use range::{modify_position, update_position, validate_ticks, RangePosition};

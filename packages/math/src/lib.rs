// LimitSwap Math Package

#![no_std]

pub mod constants;
pub mod liquidity;
pub mod q64;
pub mod sqrt_price;
pub mod swap_step;

pub use constants::*;

pub use q64::{div_round_up, mul_div, mul_div_round_up, mul_q64, ONE_X64};

pub use sqrt_price::{
    get_next_sqrt_price_from_input, get_next_sqrt_price_from_output, get_sqrt_ratio_at_tick,
    get_tick_at_sqrt_ratio, max_sqrt_price, min_sqrt_price,
};

pub use liquidity::{
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity, get_liquidity_for_amount0,
    get_liquidity_for_amount1, get_liquidity_for_amounts,
};

pub use swap_step::{compute_swap_step, SwapStep};

/// True when `tick` lies on the spacing grid.
#[inline]
pub fn is_aligned(tick: i32, spacing: i32) -> bool {
    spacing > 0 && tick.rem_euclid(spacing) == 0
}

/// True when `tick` is inside the supported range.
#[inline]
pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

// Range positions and fee accounting

use limitswap_math::{is_aligned, is_valid_tick, mul_div, ONE_X64};
use soroban_sdk::{contracttype, Address, Env};

use crate::error::PositionError;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangePosition {
    pub owner: Address,
    pub lower: i32,
    pub upper: i32,
    pub liquidity: u128,
    pub fee_growth_inside_last_0: u128,
    pub fee_growth_inside_last_1: u128,
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

impl RangePosition {
    pub fn new(owner: Address, lower: i32, upper: i32) -> Self {
        Self {
            owner,
            lower,
            upper,
            liquidity: 0,
            fee_growth_inside_last_0: 0,
            fee_growth_inside_last_1: 0,
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.liquidity == 0 && self.tokens_owed_0 == 0 && self.tokens_owed_1 == 0
    }
}

/// Settle fees earned since the last checkpoint into `tokens_owed_*`:
/// `owed += liquidity * (inside - inside_last) / 2^64`.
pub fn update_position(env: &Env, pos: &mut RangePosition, fee_growth_inside_0: u128, fee_growth_inside_1: u128) {
    if pos.liquidity > 0 {
        let delta_0 = fee_growth_inside_0.wrapping_sub(pos.fee_growth_inside_last_0);
        let delta_1 = fee_growth_inside_1.wrapping_sub(pos.fee_growth_inside_last_1);

        let fee_0 = mul_div(env, pos.liquidity, delta_0, ONE_X64);
        let fee_1 = mul_div(env, pos.liquidity, delta_1, ONE_X64);

        pos.tokens_owed_0 = pos.tokens_owed_0.saturating_add(fee_0);
        pos.tokens_owed_1 = pos.tokens_owed_1.saturating_add(fee_1);
    }

    pos.fee_growth_inside_last_0 = fee_growth_inside_0;
    pos.fee_growth_inside_last_1 = fee_growth_inside_1;
}

/// Settle fees, then apply `liquidity_delta`.
pub fn modify_position(
    env: &Env,
    pos: &mut RangePosition,
    liquidity_delta: i128,
    fee_growth_inside_0: u128,
    fee_growth_inside_1: u128,
) -> Result<(), PositionError> {
    update_position(env, pos, fee_growth_inside_0, fee_growth_inside_1);

    if liquidity_delta >= 0 {
        pos.liquidity = pos.liquidity.saturating_add(liquidity_delta as u128);
    } else {
        pos.liquidity = pos
            .liquidity
            .checked_sub(liquidity_delta.unsigned_abs())
            .ok_or(PositionError::NotEnoughPositionLiquidity)?;
    }
    Ok(())
}

/// Bounds shared by range and limit positions.
pub fn validate_ticks(lower: i32, upper: i32, tick_spacing: i32) -> Result<(), PositionError> {
    if lower >= upper {
        return Err(PositionError::InvalidTickRange);
    }
    if !is_valid_tick(lower) || !is_valid_tick(upper) {
        return Err(PositionError::TickOutOfRange);
    }
    if !is_aligned(lower, tick_spacing) {
        return Err(PositionError::LowerTickOutsideTickSpacing);
    }
    if !is_aligned(upper, tick_spacing) {
        return Err(PositionError::UpperTickOutsideTickSpacing);
    }
    Ok(())
}

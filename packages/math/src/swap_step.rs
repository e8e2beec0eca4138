// SPDX-License-Identifier: MIT
// Single swap step against a constant-liquidity curve

use soroban_sdk::Env;

use crate::constants::BPS_DENOMINATOR;
use crate::liquidity::{get_amount_0_delta, get_amount_1_delta};
use crate::q64::{mul_div, mul_div_round_up};
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

/// Outcome of one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapStep {
    pub sqrt_price_next: u128,
    pub amount_in: u128,
    pub amount_out: u128,
    /// Portion of the input kept by the curve on top of `amount_in`. For an
    /// exact-input step that stops short of the target this is everything
    /// left over, so the step always consumes the whole remainder.
    pub fee_amount: u128,
}

impl SwapStep {
    /// Input charged to the taker for this step.
    #[inline]
    pub fn amount_paid(&self) -> u128 {
        self.amount_in.saturating_add(self.fee_amount)
    }

    /// True when the step stopped exactly at its target price.
    #[inline]
    pub fn reached(&self, sqrt_price_target: u128) -> bool {
        self.sqrt_price_next == sqrt_price_target
    }
}

/// Move from `sqrt_price_current` towards `sqrt_price_target` through
/// `liquidity`, consuming at most `amount_remaining` (input when `exact_in`,
/// output otherwise). `fee_bps` is charged on the input.
///
/// Zero liquidity moves straight to the target for free.
pub fn compute_swap_step(
    env: &Env,
    sqrt_price_current: u128,
    sqrt_price_target: u128,
    liquidity: u128,
    amount_remaining: u128,
    exact_in: bool,
    zero_for_one: bool,
    fee_bps: u32,
) -> SwapStep {
    let fee_complement = (BPS_DENOMINATOR - fee_bps) as u128;
    let bps = BPS_DENOMINATOR as u128;

    let amount_in_at_target = if zero_for_one {
        get_amount_0_delta(env, sqrt_price_target, sqrt_price_current, liquidity, true)
    } else {
        get_amount_1_delta(env, sqrt_price_current, sqrt_price_target, liquidity, true)
    };
    let amount_out_at_target = if zero_for_one {
        get_amount_1_delta(env, sqrt_price_target, sqrt_price_current, liquidity, false)
    } else {
        get_amount_0_delta(env, sqrt_price_current, sqrt_price_target, liquidity, false)
    };

    let sqrt_price_next = if exact_in {
        let amount_less_fee = mul_div(env, amount_remaining, fee_complement, bps);
        if amount_less_fee >= amount_in_at_target {
            sqrt_price_target
        } else {
            get_next_sqrt_price_from_input(env, sqrt_price_current, liquidity, amount_less_fee, zero_for_one)
        }
    } else if amount_remaining >= amount_out_at_target {
        sqrt_price_target
    } else {
        get_next_sqrt_price_from_output(env, sqrt_price_current, liquidity, amount_remaining, zero_for_one)
    };

    let reached = sqrt_price_next == sqrt_price_target;

    let amount_in = if reached {
        amount_in_at_target
    } else if zero_for_one {
        get_amount_0_delta(env, sqrt_price_next, sqrt_price_current, liquidity, true)
    } else {
        get_amount_1_delta(env, sqrt_price_current, sqrt_price_next, liquidity, true)
    };

    let mut amount_out = if reached {
        amount_out_at_target
    } else if zero_for_one {
        get_amount_1_delta(env, sqrt_price_next, sqrt_price_current, liquidity, false)
    } else {
        get_amount_0_delta(env, sqrt_price_current, sqrt_price_next, liquidity, false)
    };

    if !exact_in && amount_out > amount_remaining {
        amount_out = amount_remaining;
    }

    let fee_amount = if exact_in && !reached {
        amount_remaining.saturating_sub(amount_in)
    } else {
        mul_div_round_up(env, amount_in, fee_bps as u128, fee_complement)
    };

    SwapStep {
        sqrt_price_next,
        amount_in,
        amount_out,
        fee_amount,
    }
}

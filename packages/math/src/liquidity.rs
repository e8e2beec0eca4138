// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::Env;

use crate::q64::{
    div_u256_round_up, mul_div, mul_div_round_up, mul_div_u256, to_u128_saturating, u256, ONE_X64,
};

#[inline]
fn sorted(a: u128, b: u128) -> (u128, u128) {
    if a < b { (a, b) } else { (b, a) }
}

/// Token0 between two sqrt prices: L * (b - a) / (a * b).
/// Saturates at u128::MAX when the true value does not fit.
pub fn get_amount_0_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 || sqrt_lower == sqrt_upper || sqrt_lower == 0 {
        return 0;
    }

    let numerator1 = u256(env, liquidity).shl(64);
    let numerator2 = u256(env, sqrt_upper - sqrt_lower);
    let upper = u256(env, sqrt_upper);
    let lower = u256(env, sqrt_lower);

    if round_up {
        let inner = div_u256_round_up(env, &numerator1.mul(&numerator2), &upper);
        to_u128_saturating(&div_u256_round_up(env, &inner, &lower))
    } else {
        let inner = mul_div_u256(&numerator1, &numerator2, &upper);
        to_u128_saturating(&inner.div(&lower))
    }
}

/// Token1 between two sqrt prices: L * (b - a) / 2^64.
pub fn get_amount_1_delta(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_a, sqrt_price_b);
    if liquidity == 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    if round_up {
        mul_div_round_up(env, liquidity, sqrt_upper - sqrt_lower, ONE_X64)
    } else {
        mul_div(env, liquidity, sqrt_upper - sqrt_lower, ONE_X64)
    }
}

/// Calculate liquidity from token0 amount
pub fn get_liquidity_for_amount0(
    env: &Env,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    amount0: u128,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_lower, sqrt_price_upper);
    if amount0 == 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    let intermediate = mul_div(env, sqrt_lower, sqrt_upper, ONE_X64);
    mul_div(env, amount0, intermediate, sqrt_upper - sqrt_lower)
}

/// Calculate liquidity from token1 amount
pub fn get_liquidity_for_amount1(
    env: &Env,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    amount1: u128,
) -> u128 {
    let (sqrt_lower, sqrt_upper) = sorted(sqrt_price_lower, sqrt_price_upper);
    if amount1 == 0 || sqrt_lower == sqrt_upper {
        return 0;
    }

    mul_div(env, amount1, ONE_X64, sqrt_upper - sqrt_lower)
}

/// Calculate liquidity from both token amounts
pub fn get_liquidity_for_amounts(
    env: &Env,
    amount0_desired: u128,
    amount1_desired: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> u128 {
    if sqrt_price_lower >= sqrt_price_upper {
        return 0;
    }

    if current_sqrt_price <= sqrt_price_lower {
        get_liquidity_for_amount0(env, sqrt_price_lower, sqrt_price_upper, amount0_desired)
    } else if current_sqrt_price >= sqrt_price_upper {
        get_liquidity_for_amount1(env, sqrt_price_lower, sqrt_price_upper, amount1_desired)
    } else {
        let liq0 = get_liquidity_for_amount0(env, current_sqrt_price, sqrt_price_upper, amount0_desired);
        let liq1 = get_liquidity_for_amount1(env, sqrt_price_lower, current_sqrt_price, amount1_desired);
        liq0.min(liq1)
    }
}

/// Calculate token amounts held by `liquidity` over a range at the
/// current price. Deposits round up, withdrawals round down.
pub fn get_amounts_for_liquidity(
    env: &Env,
    liquidity: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
    round_up: bool,
) -> (u128, u128) {
    if liquidity == 0 {
        return (0, 0);
    }

    let sp = current_sqrt_price.max(sqrt_price_lower).min(sqrt_price_upper);

    let amount0 = if sp < sqrt_price_upper {
        get_amount_0_delta(env, sp, sqrt_price_upper, liquidity, round_up)
    } else {
        0
    };

    let amount1 = if sp > sqrt_price_lower {
        get_amount_1_delta(env, sqrt_price_lower, sp, liquidity, round_up)
    } else {
        0
    };

    (amount0, amount1)
}

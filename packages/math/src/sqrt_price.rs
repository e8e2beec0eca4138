// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use soroban_sdk::Env;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::q64::{
    div_u256_round_up, mul_div, mul_div_round_up, mul_q64, to_u128_saturating, u256, ONE_X64,
};

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
pub fn get_sqrt_ratio_at_tick(tick: i32) -> u128 {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        panic!("tick out of range");
    }

    if tick == 0 {
        return ONE_X64;
    }

    let abs_tick = tick.unsigned_abs();
    let mut ratio: u128 = ONE_X64;

    // floor(sqrt(1.0001^(2^n)) * 2^64)
    if abs_tick & 0x1 != 0 { ratio = mul_q64(ratio, 18447666387855959850); }
    if abs_tick & 0x2 != 0 { ratio = mul_q64(ratio, 18448588748116922571); }
    if abs_tick & 0x4 != 0 { ratio = mul_q64(ratio, 18450433606991734263); }
    if abs_tick & 0x8 != 0 { ratio = mul_q64(ratio, 18454123878217468680); }
    if abs_tick & 0x10 != 0 { ratio = mul_q64(ratio, 18461506635090006701); }
    if abs_tick & 0x20 != 0 { ratio = mul_q64(ratio, 18476281010653910144); }
    if abs_tick & 0x40 != 0 { ratio = mul_q64(ratio, 18505865242158250041); }
    if abs_tick & 0x80 != 0 { ratio = mul_q64(ratio, 18565175891880433522); }
    if abs_tick & 0x100 != 0 { ratio = mul_q64(ratio, 18684368066214940582); }
    if abs_tick & 0x200 != 0 { ratio = mul_q64(ratio, 18925053041275764671); }
    if abs_tick & 0x400 != 0 { ratio = mul_q64(ratio, 19415764168677886926); }
    if abs_tick & 0x800 != 0 { ratio = mul_q64(ratio, 20435687552633177494); }
    if abs_tick & 0x1000 != 0 { ratio = mul_q64(ratio, 22639080592224303007); }
    if abs_tick & 0x2000 != 0 { ratio = mul_q64(ratio, 27784196929998399742); }
    if abs_tick & 0x4000 != 0 { ratio = mul_q64(ratio, 41848122137994986128); }
    if abs_tick & 0x8000 != 0 { ratio = mul_q64(ratio, 94936283578220370716); }
    if abs_tick & 0x10000 != 0 { ratio = mul_q64(ratio, 488590176327622479860); }
    if abs_tick & 0x20000 != 0 { ratio = mul_q64(ratio, 12941056668319229769860); }

    if tick < 0 {
        ratio = u128::MAX / ratio;
    }

    ratio
}

/// Lowest representable sqrt price.
#[inline]
pub fn min_sqrt_price() -> u128 {
    get_sqrt_ratio_at_tick(MIN_TICK)
}

/// Highest representable sqrt price.
#[inline]
pub fn max_sqrt_price() -> u128 {
    get_sqrt_ratio_at_tick(MAX_TICK)
}

/// Greatest tick whose sqrt price is `<= sqrt_price_x64`, clamped to the
/// valid tick range.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x64: u128) -> i32 {
    let mut lo = MIN_TICK;
    let mut hi = MAX_TICK;

    if sqrt_price_x64 <= get_sqrt_ratio_at_tick(lo) {
        return lo;
    }
    if sqrt_price_x64 >= get_sqrt_ratio_at_tick(hi) {
        return hi;
    }

    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if get_sqrt_ratio_at_tick(mid) <= sqrt_price_x64 {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    lo
}

/// Price after adding (`add = true`) or removing token0 at constant
/// liquidity. Rounds up so the pool never gives away extra token1.
fn next_sqrt_price_from_amount0(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> u128 {
    let numerator1 = u256(env, liquidity).shl(64);
    let price = u256(env, sqrt_price);
    let product = u256(env, amount).mul(&price);

    let denominator = if add {
        numerator1.add(&product)
    } else {
        // callers cap `amount` below the output reachable at this liquidity
        numerator1.sub(&product)
    };

    let numerator = numerator1.mul(&price);
    to_u128_saturating(&div_u256_round_up(env, &numerator, &denominator))
}

/// Price after adding (`add = true`) or removing token1 at constant
/// liquidity. Rounds down.
fn next_sqrt_price_from_amount1(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    add: bool,
) -> u128 {
    if add {
        sqrt_price.saturating_add(mul_div(env, amount, ONE_X64, liquidity))
    } else {
        sqrt_price.saturating_sub(mul_div_round_up(env, amount, ONE_X64, liquidity))
    }
}

/// Calculate next sqrt price given input amount
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    zero_for_one: bool,
) -> u128 {
    if amount_in == 0 || liquidity == 0 {
        return sqrt_price;
    }

    if zero_for_one {
        next_sqrt_price_from_amount0(env, sqrt_price, liquidity, amount_in, true)
    } else {
        next_sqrt_price_from_amount1(env, sqrt_price, liquidity, amount_in, true)
    }
}

/// Calculate next sqrt price given output amount
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_out: u128,
    zero_for_one: bool,
) -> u128 {
    if amount_out == 0 || liquidity == 0 {
        return sqrt_price;
    }

    if zero_for_one {
        next_sqrt_price_from_amount1(env, sqrt_price, liquidity, amount_out, false)
    } else {
        next_sqrt_price_from_amount0(env, sqrt_price, liquidity, amount_out, false)
    }
}

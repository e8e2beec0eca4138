// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};

use crate::constants::Q64;

pub const ONE_X64: u128 = Q64;

/// Multiply two Q64.64 numbers, returning the floored Q64.64 result.
/// Uses limb decomposition; exact while the result fits 128 bits.
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFF_FFFF_FFFF_FFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFF_FFFF_FFFF_FFFF;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    (term_hh << 64) + term_hl + term_lh + (term_ll >> 64)
}

#[inline]
pub fn u256(env: &Env, x: u128) -> U256 {
    U256::from_u128(env, x)
}

/// True when `x` is non-zero. Only used on values known to be below 2^128.
#[inline]
fn is_nonzero(x: &U256) -> bool {
    x.to_u128() != Some(0)
}

/// floor(a * b / d) over 256-bit intermediates.
pub fn mul_div_u256(a: &U256, b: &U256, d: &U256) -> U256 {
    a.mul(b).div(d)
}

/// ceil(a * b / d) over 256-bit intermediates. `d` must fit 128 bits.
pub fn mul_div_u256_round_up(env: &Env, a: &U256, b: &U256, d: &U256) -> U256 {
    let product = a.mul(b);
    let quotient = product.div(d);
    if is_nonzero(&product.rem_euclid(d)) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    }
}

/// ceil(n / d) for 256-bit values. `d` must fit 128 bits.
pub fn div_u256_round_up(env: &Env, n: &U256, d: &U256) -> U256 {
    let quotient = n.div(d);
    if is_nonzero(&n.rem_euclid(d)) {
        quotient.add(&U256::from_u32(env, 1))
    } else {
        quotient
    }
}

/// Saturating narrowing back to u128.
#[inline]
pub fn to_u128_saturating(x: &U256) -> u128 {
    x.to_u128().unwrap_or(u128::MAX)
}

/// Safe multiply-divide using U256 to prevent overflow.
/// Calculates: floor(a * b / denominator)
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("mul_div: divide by zero");
    }
    to_u128_saturating(&mul_div_u256(&u256(env, a), &u256(env, b), &u256(env, denominator)))
}

/// Calculates: ceil(a * b / denominator)
pub fn mul_div_round_up(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("mul_div: divide by zero");
    }
    to_u128_saturating(&mul_div_u256_round_up(
        env,
        &u256(env, a),
        &u256(env, b),
        &u256(env, denominator),
    ))
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        return 0;
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result + 1
    } else {
        result
    }
}

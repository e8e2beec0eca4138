// TWAP sample tracker
//
// Ring buffer of range tick observations. Each observation carries the
// cumulative `tick * seconds` up to its own timestamp; its tick holds from
// that timestamp until the next observation.

use soroban_sdk::{contracttype, Env};

use crate::error::PoolError;
use crate::storage::{extend_persistent_ttl, DataKey};

pub const TWAP_BUFFER_SIZE: u32 = 100;

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwapObservation {
    pub timestamp: u64,
    pub tick: i32,
    pub tick_cumulative: i64,
}

fn newest_index(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TwapNewestIndex)
        .unwrap_or(0)
}

/// Number of stored observations, at most `TWAP_BUFFER_SIZE`.
pub fn observation_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TwapCount)
        .unwrap_or(0)
}

fn read_observation(env: &Env, index: u32) -> Option<TwapObservation> {
    env.storage()
        .persistent()
        .get(&DataKey::TwapObservation(index % TWAP_BUFFER_SIZE))
}

fn write_observation(env: &Env, index: u32, newest: u32, count: u32, obs: &TwapObservation) {
    let key = DataKey::TwapObservation(index % TWAP_BUFFER_SIZE);
    env.storage().persistent().set(&key, obs);
    extend_persistent_ttl(env, &key);

    env.storage().persistent().set(&DataKey::TwapNewestIndex, &newest);
    env.storage().persistent().set(&DataKey::TwapCount, &count);
    extend_persistent_ttl(env, &DataKey::TwapNewestIndex);
    extend_persistent_ttl(env, &DataKey::TwapCount);
}

pub fn latest_observation(env: &Env) -> Option<TwapObservation> {
    if observation_count(env) == 0 {
        return None;
    }
    read_observation(env, newest_index(env))
}

/// Record the range tick at the current ledger timestamp.
///
/// A second observation in the same timestamp replaces the newest tick.
pub fn record_observation(env: &Env, tick: i32) {
    let now = env.ledger().timestamp();
    let count = observation_count(env);

    let Some(last) = latest_observation(env) else {
        let obs = TwapObservation { timestamp: now, tick, tick_cumulative: 0 };
        write_observation(env, 0, 0, 1, &obs);
        return;
    };

    let newest = newest_index(env);
    if last.timestamp >= now {
        if last.tick != tick {
            let obs = TwapObservation { tick, ..last };
            write_observation(env, newest, newest, count, &obs);
        }
        return;
    }

    let elapsed = (now - last.timestamp) as i64;
    let obs = TwapObservation {
        timestamp: now,
        tick,
        tick_cumulative: last
            .tick_cumulative
            .saturating_add((last.tick as i64).saturating_mul(elapsed)),
    };
    let next = (newest + 1) % TWAP_BUFFER_SIZE;
    write_observation(env, next, next, (count + 1).min(TWAP_BUFFER_SIZE), &obs);
}

/// Cumulative tick at `timestamp`, extrapolated from the last observation
/// at or before it.
fn cumulative_at(env: &Env, timestamp: u64, newest: u32, count: u32) -> Option<i64> {
    for i in 0..count {
        let index = (newest + TWAP_BUFFER_SIZE - i) % TWAP_BUFFER_SIZE;
        let obs = read_observation(env, index)?;
        if obs.timestamp <= timestamp {
            let elapsed = (timestamp - obs.timestamp) as i64;
            return Some(obs.tick_cumulative.saturating_add((obs.tick as i64).saturating_mul(elapsed)));
        }
    }
    None
}

/// Time-weighted average range tick over the last `twap_length` seconds,
/// rounded towards negative infinity.
///
/// # Errors
/// `WaitUntilEnoughObservations` with fewer than `sample_count`
/// observations or when the oldest one does not cover the window.
pub fn twap_tick(env: &Env, twap_length: u64, sample_count: u32) -> Result<i32, PoolError> {
    let count = observation_count(env);
    if count == 0 || count < sample_count {
        return Err(PoolError::WaitUntilEnoughObservations);
    }
    let newest = newest_index(env);
    let last = read_observation(env, newest).ok_or(PoolError::WaitUntilEnoughObservations)?;
    if twap_length == 0 {
        return Ok(last.tick);
    }

    let now = env.ledger().timestamp();
    let start = now
        .checked_sub(twap_length)
        .ok_or(PoolError::WaitUntilEnoughObservations)?;
    let oldest_index = if count < TWAP_BUFFER_SIZE { 0 } else { (newest + 1) % TWAP_BUFFER_SIZE };
    let oldest = read_observation(env, oldest_index).ok_or(PoolError::WaitUntilEnoughObservations)?;
    if oldest.timestamp > start {
        return Err(PoolError::WaitUntilEnoughObservations);
    }

    let cumulative_now = cumulative_at(env, now, newest, count).ok_or(PoolError::WaitUntilEnoughObservations)?;
    let cumulative_start = cumulative_at(env, start, newest, count).ok_or(PoolError::WaitUntilEnoughObservations)?;

    let average = (cumulative_now - cumulative_start).div_euclid(twap_length as i64);
    Ok(average as i32)
}

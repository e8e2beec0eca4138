// Three-level tick bitmap
//
// Level 0 holds one bit per tick, level 1 one bit per non-empty level 0 word
// and level 2 one bit per non-empty level 1 word. The full tick range needs
// 3466 level 0 words, 28 level 1 words and a single root word.

use limitswap_math::constants::{MAX_TICK, MIN_TICK};

use crate::store::TickStore;
use crate::types::TickMapKind;

const WORD_BITS: u32 = 128;
const ROOT_LEVEL: u32 = 2;

#[inline]
fn position(tick: i32) -> u32 {
    (tick - MIN_TICK) as u32
}

#[inline]
fn tick_at(position: u32) -> i32 {
    position as i32 + MIN_TICK
}

/// Mark `tick` populated. Returns `true` if the bit was clear.
pub fn set<S: TickStore>(store: &mut S, kind: TickMapKind, tick: i32) -> bool {
    debug_assert!((MIN_TICK..=MAX_TICK).contains(&tick));
    let mut pos = position(tick);
    for level in 0..=ROOT_LEVEL {
        let index = pos / WORD_BITS;
        let mask = 1u128 << (pos % WORD_BITS);
        let word = store.bitmap_word(kind, level, index);
        if word & mask != 0 {
            return level != 0;
        }
        store.set_bitmap_word(kind, level, index, word | mask);
        if word != 0 {
            // parent already marks this word
            return true;
        }
        pos = index;
    }
    true
}

/// Clear `tick`. Returns `true` if the bit was set.
pub fn unset<S: TickStore>(store: &mut S, kind: TickMapKind, tick: i32) -> bool {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return false;
    }
    let mut pos = position(tick);
    for level in 0..=ROOT_LEVEL {
        let index = pos / WORD_BITS;
        let mask = 1u128 << (pos % WORD_BITS);
        let word = store.bitmap_word(kind, level, index);
        if word & mask == 0 {
            return level != 0;
        }
        let word = word & !mask;
        store.set_bitmap_word(kind, level, index, word);
        if word != 0 {
            return true;
        }
        pos = index;
    }
    true
}

pub fn is_set<S: TickStore>(store: &S, kind: TickMapKind, tick: i32) -> bool {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return false;
    }
    let pos = position(tick);
    store.bitmap_word(kind, 0, pos / WORD_BITS) & (1u128 << (pos % WORD_BITS)) != 0
}

/// Nearest populated tick strictly beyond `tick` in the given direction.
pub fn next<S: TickStore>(store: &S, kind: TickMapKind, tick: i32, upward: bool) -> Option<i32> {
    if upward {
        if tick >= MAX_TICK {
            return None;
        }
        let start = position(tick.saturating_add(1).max(MIN_TICK));
        first_at_or_after(store, kind, 0, start).map(tick_at)
    } else {
        if tick <= MIN_TICK {
            return None;
        }
        let start = position(tick.saturating_sub(1).min(MAX_TICK));
        last_at_or_before(store, kind, 0, start).map(tick_at)
    }
}

/// Nearest populated tick strictly behind `tick` for a walk in the given
/// direction.
#[inline]
pub fn previous<S: TickStore>(store: &S, kind: TickMapKind, tick: i32, upward: bool) -> Option<i32> {
    next(store, kind, tick, !upward)
}

fn first_at_or_after<S: TickStore>(store: &S, kind: TickMapKind, level: u32, pos: u32) -> Option<u32> {
    let index = pos / WORD_BITS;
    if level == ROOT_LEVEL && index > 0 {
        return None;
    }
    let word = store.bitmap_word(kind, level, index) & (u128::MAX << (pos % WORD_BITS));
    if word != 0 {
        return Some(index * WORD_BITS + word.trailing_zeros());
    }
    if level == ROOT_LEVEL {
        return None;
    }
    let index = first_at_or_after(store, kind, level + 1, index + 1)?;
    let word = store.bitmap_word(kind, level, index);
    Some(index * WORD_BITS + word.trailing_zeros())
}

fn last_at_or_before<S: TickStore>(store: &S, kind: TickMapKind, level: u32, pos: u32) -> Option<u32> {
    let index = pos / WORD_BITS;
    if level == ROOT_LEVEL && index > 0 {
        return last_at_or_before(store, kind, level, WORD_BITS - 1);
    }
    let word = store.bitmap_word(kind, level, index) & (u128::MAX >> (WORD_BITS - 1 - pos % WORD_BITS));
    if word != 0 {
        return Some(index * WORD_BITS + (WORD_BITS - 1 - word.leading_zeros()));
    }
    if level == ROOT_LEVEL || index == 0 {
        return None;
    }
    let index = last_at_or_before(store, kind, level + 1, index - 1)?;
    let word = store.bitmap_word(kind, level, index);
    Some(index * WORD_BITS + (WORD_BITS - 1 - word.leading_zeros()))
}

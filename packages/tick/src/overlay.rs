// Copy-on-write store used for quotes and in-memory tests

use soroban_sdk::{Env, Map};

use crate::store::TickStore;
use crate::types::{LimitTick, RangeTick, TickDeltas, TickMapKind};

/// Records every write in host maps and falls back to `base` for reads.
/// Dropping the overlay discards the writes.
pub struct Overlay<B: TickStore> {
    base: B,
    range: Map<i32, RangeTick>,
    limit: Map<(bool, i32), LimitTick>,
    deltas: Map<(bool, i32, u32), Option<TickDeltas>>,
    words: Map<(TickMapKind, u32, u32), u128>,
}

impl<B: TickStore> Overlay<B> {
    pub fn new(env: &Env, base: B) -> Self {
        Self {
            base,
            range: Map::new(env),
            limit: Map::new(env),
            deltas: Map::new(env),
            words: Map::new(env),
        }
    }
}

/// Backing store with nothing in it.
pub struct EmptyStore;

impl TickStore for EmptyStore {
    fn range_tick(&self, _tick: i32) -> RangeTick {
        RangeTick::default()
    }
    fn set_range_tick(&mut self, _tick: i32, _info: &RangeTick) {}

    fn limit_tick(&self, _zero_for_one: bool, _tick: i32) -> LimitTick {
        LimitTick::default()
    }
    fn set_limit_tick(&mut self, _zero_for_one: bool, _tick: i32, _info: &LimitTick) {}

    fn tick_deltas(&self, _zero_for_one: bool, _tick: i32, _round: u32) -> Option<TickDeltas> {
        None
    }
    fn set_tick_deltas(&mut self, _zero_for_one: bool, _tick: i32, _round: u32, _deltas: &TickDeltas) {}
    fn remove_tick_deltas(&mut self, _zero_for_one: bool, _tick: i32, _round: u32) {}

    fn bitmap_word(&self, _kind: TickMapKind, _level: u32, _index: u32) -> u128 {
        0
    }
    fn set_bitmap_word(&mut self, _kind: TickMapKind, _level: u32, _index: u32, _word: u128) {}
}

/// Pure in-memory store.
pub type MemoryStore = Overlay<EmptyStore>;

impl MemoryStore {
    pub fn memory(env: &Env) -> Self {
        Overlay::new(env, EmptyStore)
    }
}

impl<B: TickStore> TickStore for Overlay<B> {
    fn range_tick(&self, tick: i32) -> RangeTick {
        self.range.get(tick).unwrap_or_else(|| self.base.range_tick(tick))
    }

    fn set_range_tick(&mut self, tick: i32, info: &RangeTick) {
        self.range.set(tick, info.clone());
    }

    fn limit_tick(&self, zero_for_one: bool, tick: i32) -> LimitTick {
        self.limit
            .get((zero_for_one, tick))
            .unwrap_or_else(|| self.base.limit_tick(zero_for_one, tick))
    }

    fn set_limit_tick(&mut self, zero_for_one: bool, tick: i32, info: &LimitTick) {
        self.limit.set((zero_for_one, tick), info.clone());
    }

    fn tick_deltas(&self, zero_for_one: bool, tick: i32, round: u32) -> Option<TickDeltas> {
        match self.deltas.get((zero_for_one, tick, round)) {
            Some(entry) => entry,
            None => self.base.tick_deltas(zero_for_one, tick, round),
        }
    }

    fn set_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32, deltas: &TickDeltas) {
        self.deltas.set((zero_for_one, tick, round), Some(deltas.clone()));
    }

    fn remove_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32) {
        // tombstone so the base record stays hidden
        self.deltas.set((zero_for_one, tick, round), None);
    }

    fn bitmap_word(&self, kind: TickMapKind, level: u32, index: u32) -> u128 {
        self.words
            .get((kind, level, index))
            .unwrap_or_else(|| self.base.bitmap_word(kind, level, index))
    }

    fn set_bitmap_word(&mut self, kind: TickMapKind, level: u32, index: u32, word: u128) {
        self.words.set((kind, level, index), word);
    }
}

// Storage seam for the tick ledgers

use crate::types::{LimitTick, RangeTick, TickDeltas, TickMapKind};

/// Storage used by the tick map, the tick ledgers and the engines built on
/// them. The pool implements it over contract storage and over an in-memory
/// overlay for quotes, so both paths run the exact same code.
pub trait TickStore {
    fn range_tick(&self, tick: i32) -> RangeTick;
    fn set_range_tick(&mut self, tick: i32, info: &RangeTick);

    fn limit_tick(&self, zero_for_one: bool, tick: i32) -> LimitTick;
    fn set_limit_tick(&mut self, zero_for_one: bool, tick: i32, info: &LimitTick);

    fn tick_deltas(&self, zero_for_one: bool, tick: i32, round: u32) -> Option<TickDeltas>;
    fn set_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32, deltas: &TickDeltas);
    fn remove_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32);

    fn bitmap_word(&self, kind: TickMapKind, level: u32, index: u32) -> u128;
    fn set_bitmap_word(&mut self, kind: TickMapKind, level: u32, index: u32, word: u128);
}

impl<S: TickStore + ?Sized> TickStore for &mut S {
    fn range_tick(&self, tick: i32) -> RangeTick {
        (**self).range_tick(tick)
    }
    fn set_range_tick(&mut self, tick: i32, info: &RangeTick) {
        (**self).set_range_tick(tick, info)
    }
    fn limit_tick(&self, zero_for_one: bool, tick: i32) -> LimitTick {
        (**self).limit_tick(zero_for_one, tick)
    }
    fn set_limit_tick(&mut self, zero_for_one: bool, tick: i32, info: &LimitTick) {
        (**self).set_limit_tick(zero_for_one, tick, info)
    }
    fn tick_deltas(&self, zero_for_one: bool, tick: i32, round: u32) -> Option<TickDeltas> {
        (**self).tick_deltas(zero_for_one, tick, round)
    }
    fn set_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32, deltas: &TickDeltas) {
        (**self).set_tick_deltas(zero_for_one, tick, round, deltas)
    }
    fn remove_tick_deltas(&mut self, zero_for_one: bool, tick: i32, round: u32) {
        (**self).remove_tick_deltas(zero_for_one, tick, round)
    }
    fn bitmap_word(&self, kind: TickMapKind, level: u32, index: u32) -> u128 {
        (**self).bitmap_word(kind, level, index)
    }
    fn set_bitmap_word(&mut self, kind: TickMapKind, level: u32, index: u32, word: u128) {
        (**self).set_bitmap_word(kind, level, index, word)
    }
}

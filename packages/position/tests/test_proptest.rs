use limitswap_math::get_sqrt_ratio_at_tick;
use limitswap_position::take_share;
use limitswap_tick::TickDeltas;
use proptest::prelude::*;
use soroban_sdk::Env;

const E18: u128 = 1_000_000_000_000_000_000;

/// An auction record with fills inside their bound, plus the liquidity of
/// each claimant.
fn record() -> impl Strategy<Value = (TickDeltas, Vec<u128>)> {
    (
        prop::collection::vec(1u128..1_000 * E18, 1..6),
        (0u128..100 * E18, 0u128..100 * E18, 0u128..100 * E18),
        (0u128..100 * E18, 0u128..100 * E18, 0u128..100 * E18),
    )
        .prop_map(|(claimants, (fill_in, spare_in, stash_in), (fill_out, spare_out, stash_out))| {
            let total = claimants.iter().sum();
            let mut deltas = TickDeltas::open(total, 1, get_sqrt_ratio_at_tick(0));
            deltas.amount_in_delta = fill_in;
            deltas.amount_in_delta_max_minus = fill_in + spare_in;
            deltas.amount_in_delta_max_stashed = stash_in;
            deltas.amount_out_delta = fill_out;
            deltas.amount_out_delta_max_minus = fill_out + spare_out;
            deltas.amount_out_delta_max_stashed = stash_out;
            (deltas, claimants)
        })
}

proptest! {
    /// Claimants leaving one by one split the record exactly: every fill
    /// and every unfilled maximum is paid out once, and the fill bound
    /// holds for whoever is left.
    #[test]
    fn prop_claims_split_record_exactly((mut deltas, claimants) in record()) {
        let env = Env::default();
        env.cost_estimate().budget().reset_unlimited();

        let filled_in = deltas.amount_in_delta;
        let unfilled_out = deltas.amount_out_max() - deltas.amount_out_delta;
        let (mut paid_in, mut paid_out) = (0u128, 0u128);

        let last = claimants.len() - 1;
        for (i, liquidity) in claimants.into_iter().enumerate() {
            let ((amount_in, amount_out), empty) = take_share(&env, &mut deltas, liquidity);
            paid_in += amount_in;
            paid_out += amount_out;
            prop_assert_eq!(empty, i == last);
            if !empty {
                prop_assert!(deltas.within_bounds());
            }
        }

        prop_assert_eq!(paid_in, filled_in);
        prop_assert_eq!(paid_out, unfilled_out);
    }
}

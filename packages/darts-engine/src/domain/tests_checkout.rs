use crate::domain::checkout::{suggest_checkout, Checkout};
use crate::domain::checkout_table::THREE_DART_CHECKOUTS;
use crate::domain::options::DartRule;
use crate::domain::rules::{is_no_outshot, MAX_CHECKOUT};
use crate::domain::score::{dart_or_miss, sum_notations};

const OUT_MODES: [DartRule; 3] = [DartRule::Straight, DartRule::Double, DartRule::Master];

#[test]
fn table_routes_sum_to_their_key() {
    for (score, route) in THREE_DART_CHECKOUTS {
        if is_no_outshot(*score) {
            continue;
        }
        assert_eq!(sum_notations(*route), *score, "{route:?}");
        let last = route.last().map(|d| dart_or_miss(d));
        assert!(last.is_some_and(|d| d.is_double()), "{score} must end on a double");
    }
}

#[test]
fn big_fish_route() {
    assert_eq!(
        suggest_checkout(170, DartRule::Double, 3),
        Checkout::Finish(vec!["T20".into(), "T20".into(), "Bull".into()])
    );
}

#[test]
fn every_finish_is_legal_for_its_out_mode() {
    for out_mode in OUT_MODES {
        for darts in 1..=3usize {
            for remaining in 2..=MAX_CHECKOUT as i32 {
                let advice = suggest_checkout(remaining, out_mode, darts);
                let Checkout::Finish(route) = &advice else {
                    continue;
                };
                assert!(route.len() <= darts, "{remaining} with {darts}: {route:?}");
                assert_eq!(sum_notations(route), remaining as u32, "{route:?}");
                let finisher = route.last().map(|d| dart_or_miss(d));
                assert!(
                    finisher.is_some_and(|d| out_mode.accepts(d)),
                    "{remaining} {out_mode:?}: {route:?}"
                );
            }
        }
    }
}

#[test]
fn three_darts_finish_everything_but_the_bogeys() {
    for remaining in 2..=MAX_CHECKOUT {
        let advice = suggest_checkout(remaining as i32, DartRule::Double, 3);
        if is_no_outshot(remaining) {
            assert_eq!(advice, Checkout::NoOutshot);
        } else {
            assert!(advice.is_finish(), "{remaining}: {advice:?}");
        }
    }
}

#[test]
fn setups_stay_below_the_remaining_score() {
    for remaining in 2..=MAX_CHECKOUT as i32 {
        for darts in 1..=2 {
            if let Checkout::Setup(route) = suggest_checkout(remaining, DartRule::Double, darts) {
                assert_eq!(route.len(), 1);
                let value = sum_notations(&route) as i32;
                assert!(value < remaining || remaining > 60, "{remaining}: {route:?}");
            }
        }
    }
}

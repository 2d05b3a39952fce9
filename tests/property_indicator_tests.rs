use indicator_rs::api::clip_to_visible;
use indicator_rs::core::{IndicatorOutput, VisibleRange};
use indicator_rs::indicators::{MaKind, bollinger, rsi, sma};
use proptest::prelude::*;

fn random_walk(steps: Vec<f64>) -> Vec<f64> {
    let mut price = 100.0;
    steps
        .into_iter()
        .map(|step| {
            price = (price + step).max(0.01);
            price
        })
        .collect()
}

proptest! {
    #[test]
    fn sma_length_and_begin_index_property(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..200),
        period in 1usize..40
    ) {
        match sma(&values, period) {
            Ok(result) => {
                prop_assert!(values.len() >= period);
                prop_assert_eq!(result.begin_index(), period - 1);
                prop_assert_eq!(result.line_len(), values.len() - period + 1);
            }
            Err(_) => prop_assert!(values.len() < period),
        }
    }

    #[test]
    fn rsi_stays_inside_percent_range_on_random_walks(
        steps in prop::collection::vec(-2.5f64..2.5, 20..200),
        period in 2usize..20
    ) {
        let closes = random_walk(steps);
        prop_assume!(closes.len() > period);

        let result = rsi(&closes, period).expect("rsi over sufficient data");
        for value in result.lines()[0] {
            prop_assert!((0.0..=100.0).contains(value), "rsi {} out of range", value);
        }
    }

    #[test]
    fn bollinger_ordering_holds_for_non_negative_deviations(
        steps in prop::collection::vec(-2.0f64..2.0, 30..120),
        period in 2usize..25,
        dev_up in 0.0f64..4.0,
        dev_dn in 0.0f64..4.0
    ) {
        let closes = random_walk(steps);
        prop_assume!(closes.len() >= period);

        let result = bollinger(&closes, period, dev_up, dev_dn, MaKind::Sma)
            .expect("bollinger over sufficient data");
        let IndicatorOutput::Triple(upper, middle, lower) = result.output() else {
            panic!("bollinger must produce three lines");
        };
        for ((up, mid), low) in upper.iter().zip(middle).zip(lower) {
            prop_assert!(up >= mid);
            prop_assert!(mid >= low);
        }
    }

    #[test]
    fn clipping_is_idempotent_for_arbitrary_windows(
        values in prop::collection::vec(-500.0f64..500.0, 10..120),
        period in 1usize..10,
        window in (0usize..100, 2usize..40)
    ) {
        prop_assume!(values.len() >= period);
        let result = sma(&values, period).expect("sma");

        let (start, span) = window;
        prop_assume!(start + span <= values.len());
        let range = VisibleRange::new(start, start + span, values.len()).expect("range");

        let once = clip_to_visible(&result, range);
        let twice = clip_to_visible(&once, range);
        prop_assert_eq!(&once, &twice);

        // The clipped span never leaves the visible window.
        prop_assert!(once.begin_index() >= range.start() || once.is_empty());
        prop_assert!(once.begin_index() + once.line_len() <= range.end() || once.is_empty());
    }
}

//! Cross-module scenarios: compute, record, export, share

use atr_targets::calc::{compute_targets, RiskInputs, TradeDirection};
use atr_targets::history::HistoryLog;
use atr_targets::share;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn compute_record_export_flow() {
    let mut log = HistoryLog::new();

    let long = RiskInputs::new(
        TradeDirection::Long,
        dec!(100),
        dec!(2),
        dec!(1.0),
        dec!(2.0),
    );
    long.validate().unwrap();
    let long_result = compute_targets(&long);
    log.record(&long, &long_result);

    let short = RiskInputs::new(
        TradeDirection::Short,
        dec!(100),
        dec!(2),
        dec!(1.5),
        dec!(2.0),
    );
    short.validate().unwrap();
    let short_result = compute_targets(&short);
    log.record(&short, &short_result);

    assert_eq!(long_result.stop_loss, dec!(98));
    assert_eq!(long_result.take_profit, dec!(104));
    assert_eq!(short_result.stop_loss, dec!(103));
    assert_eq!(short_result.take_profit, dec!(96));

    let mut buf = Vec::new();
    log.export_csv(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 3); // header + two rows
    assert!(text.contains("long"));
    assert!(text.contains("short"));
}

#[test]
fn shared_link_reproduces_the_calculation() {
    let inputs = RiskInputs::new(
        TradeDirection::Short,
        dec!(1.0842),
        dec!(0.0031),
        dec!(1.5),
        dec!(2.0),
    )
    .with_tick_size(dec!(0.0001))
    .with_risk_amount(dec!(250));

    let link = share::encode(&inputs);
    let decoded = share::decode(&link).unwrap();

    assert_eq!(compute_targets(&decoded), compute_targets(&inputs));
}

#[test]
fn full_featured_long_scenario() {
    // tick rounding + sizing together
    let inputs = RiskInputs::new(
        TradeDirection::Long,
        dec!(4213.5),
        dec!(12.8),
        dec!(1.5),
        dec!(2.0),
    )
    .with_tick_size(dec!(0.25))
    .with_risk_amount(dec!(1000));

    let result = compute_targets(&inputs);

    // raw SL 4194.3 -> 4194.25, raw TP 4239.1 -> 4239.00
    assert_eq!(result.stop_loss, dec!(4194.25));
    assert_eq!(result.take_profit, dec!(4239.00));

    let size = result.position_size.unwrap();
    let loss = result.loss_at_stop.unwrap();
    assert!((loss - dec!(1000)).abs() < dec!(0.0000001));
    assert!((size * result.distance_to_stop - dec!(1000)).abs() < dec!(0.0000001));
}

#[test]
fn degenerate_inputs_never_panic() {
    // the pure core is total even on inputs boundary validation would reject
    for (entry, atr) in [
        (dec!(0), dec!(0)),
        (dec!(0), dec!(2)),
        (dec!(100), dec!(0)),
        (dec!(-5), dec!(1)),
    ] {
        for direction in [TradeDirection::Long, TradeDirection::Short] {
            let inputs = RiskInputs::new(direction, entry, atr, dec!(1.0), dec!(2.0));
            let result = compute_targets(&inputs);
            // ratio is always a finite Decimal; percentages defined as 0
            // when entry is not positive
            if entry <= Decimal::ZERO {
                assert_eq!(result.stop_loss_pct, Decimal::ZERO);
                assert_eq!(result.take_profit_pct, Decimal::ZERO);
            }
        }
    }
}

#[test]
fn tick_rounding_near_entry_keeps_distances_non_negative() {
    // When the stop offset is smaller than half a tick, rounding can carry
    // the level across the entry; distances must clamp at zero, never go
    // negative, and sizing must stay uncomputed
    let cases = [
        (TradeDirection::Long, dec!(100.2), dec!(0.01)),
        (TradeDirection::Short, dec!(100.2), dec!(0.01)),
        (TradeDirection::Long, dec!(57.31), dec!(0.04)),
        (TradeDirection::Short, dec!(57.31), dec!(0.04)),
    ];

    for (direction, entry, atr) in cases {
        // sl_multiplier * atr < tick_size / 2
        let inputs = RiskInputs::new(direction, entry, atr, dec!(1), dec!(1))
            .with_tick_size(dec!(0.25))
            .with_risk_amount(dec!(100));
        let result = compute_targets(&inputs);

        assert!(
            result.distance_to_stop >= Decimal::ZERO,
            "negative stop distance for {direction:?} entry {entry}"
        );
        assert!(
            result.distance_to_target >= Decimal::ZERO,
            "negative target distance for {direction:?} entry {entry}"
        );
        assert!(result.stop_loss_pct >= Decimal::ZERO);
        assert!(result.take_profit_pct >= Decimal::ZERO);
        assert!(result.reward_to_risk >= Decimal::ZERO);
        if result.distance_to_stop == Decimal::ZERO {
            assert_eq!(result.position_size, None);
        }
    }
}

#[test]
fn long_and_short_mirror_for_random_like_grid() {
    let entries = [dec!(0.5), dec!(37.25), dec!(19432.8)];
    let atrs = [dec!(0.01), dec!(1.7), dec!(57.35)];
    let mults = [dec!(0.5), dec!(1.0), dec!(1.5)];

    for entry in entries {
        for atr in atrs {
            for m in mults {
                let l = compute_targets(&RiskInputs::new(
                    TradeDirection::Long,
                    entry,
                    atr,
                    m,
                    dec!(2.0),
                ));
                let s = compute_targets(&RiskInputs::new(
                    TradeDirection::Short,
                    entry,
                    atr,
                    m,
                    dec!(2.0),
                ));
                assert_eq!(entry - l.stop_loss, s.stop_loss - entry);
                assert_eq!(l.take_profit - entry, entry - s.take_profit);
                assert_eq!(l.reward_to_risk, s.reward_to_risk);
            }
        }
    }
}

extern crate tourney_advisor;

use tourney_advisor::core::Card;
use tourney_advisor::holdem::{
    Action, Advisor, EquitySimulator, HandRange, Position, TournamentStage,
};
use tourney_advisor::icm::{Blinds, IcmCalculator, Seat};

fn cards(names: &[&str]) -> Vec<Card> {
    names.iter().map(|c| c.parse().unwrap()).collect()
}

#[test]
fn test_pocket_aces_shove_short() {
    let simulator = EquitySimulator::new();
    let hole = cards(&["As", "Ad"]);

    let strength = simulator.estimate(&hole, 6, &[], None).unwrap();
    assert!((strength - 0.85).abs() < 1e-12);

    let advisor = Advisor::new();
    let action = advisor.recommend(
        strength,
        Position::Middle,
        Some(12),
        TournamentStage::Middle,
        None,
    );
    assert_eq!(Action::AllIn, action);
}

#[test]
fn test_half_equity_short_stack_shoves_from_any_position() {
    let advisor = Advisor::new();
    let action = advisor.recommend(0.5, Position::Early, Some(10), TournamentStage::Middle, None);
    assert_eq!(Action::AllIn, action);
}

#[test]
fn test_sampled_equity_feeds_the_advisor() {
    let simulator = EquitySimulator::new();
    let advisor = Advisor::new();

    // Middling suited connector on a dry board, nothing premium
    // about it, so the estimate comes from sampling.
    let hole = cards(&["8h", "7h"]);
    let board = cards(&["2s", "9d", "Kc"]);
    let strength = simulator.estimate(&hole, 4, &board, None).unwrap();
    assert!(strength > 0.0 && strength < 1.0);

    // Whatever the draw, the advisor must map it to an action.
    let action = advisor.recommend(
        strength,
        Position::Late,
        Some(30),
        TournamentStage::Middle,
        None,
    );
    assert!(matches!(
        action,
        Action::Fold | Action::Call | Action::Raise
    ));
}

#[test]
fn test_range_aware_equity_is_pessimistic() {
    let simulator = EquitySimulator::new();
    let hole = cards(&["Js", "Jh"]);
    let tight = HandRange::parse("QQ+").unwrap();

    let versus_tight = simulator.estimate(&hole, 2, &[], Some(&tight)).unwrap();
    let versus_random = simulator.estimate(&hole, 2, &[], None).unwrap();
    assert!(versus_tight < versus_random);
    // Jacks are crushed by an overpair-only range.
    assert!(versus_tight < 0.45);
}

#[test]
fn test_icm_pressure_tightens_the_recommendation() {
    let icm = IcmCalculator::new();
    let stacks = [4000, 3000, 1000];
    let payouts = [100, 60, 40];

    let equities = icm.equity(&stacks, &payouts).unwrap();
    assert!((equities.iter().sum::<f64>() - 200.0).abs() < 1e-9);

    let pressure = icm.pressure(&stacks, &payouts, 2).unwrap();
    assert!((0.0..=1.0).contains(&pressure));

    let advisor = Advisor::new();
    // A strength that raises without pressure context only calls or
    // folds once the thresholds tighten all the way up.
    let relaxed = advisor.recommend(
        0.33,
        Position::Middle,
        None,
        TournamentStage::Middle,
        Some(0.0),
    );
    let squeezed = advisor.recommend(
        0.33,
        Position::Middle,
        None,
        TournamentStage::Middle,
        Some(1.0),
    );
    assert_eq!(Action::Raise, relaxed);
    assert!(matches!(squeezed, Action::Call | Action::Fold));
}

#[test]
fn test_push_fold_chart_orders_seats() {
    let icm = IcmCalculator::new();
    let seats = [
        Seat::Utg,
        Seat::UtgPlusOne,
        Seat::Mp,
        Seat::MpPlusOne,
        Seat::Hj,
        Seat::Co,
        Seat::Btn,
        Seat::Sb,
        Seat::Bb,
    ];
    let stacks = [2000u32; 9];
    let blinds = Blinds { small: 50, big: 100 };

    let chart = icm
        .nash_push_fold(&stacks, &seats, blinds, Some(&[500, 300, 200]))
        .unwrap();

    assert_eq!(9, chart.len());
    // The earliest seat shoves tightest, the button widest.
    assert!(chart[&Seat::Utg].push > chart[&Seat::Btn].push);
    for thresholds in chart.values() {
        assert!(thresholds.push <= 0.9);
        assert!(thresholds.call <= 0.9);
    }
}

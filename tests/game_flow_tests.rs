//! Full-game lifecycle tests driven through the public API.

use reflex::{Game, GameConfig, ViewEvent};

fn count_events(events: &[ViewEvent], matcher: impl Fn(&ViewEvent) -> bool) -> usize {
    events.iter().filter(|e| matcher(e)).count()
}

#[test]
fn test_countdown_runs_exactly_three_ticks_for_30_seconds() {
    let mut game = Game::new(GameConfig::new(3, 30), 42).unwrap();
    game.start();

    let mut observed = Vec::new();
    for _ in 0..3 {
        game.advance(10);
        observed.push(game.remaining_time());
    }

    assert_eq!(observed, vec![20, 10, 0]);
    assert!(game.is_finished());
}

#[test]
fn test_countdown_clamps_when_duration_is_not_a_cycle_multiple() {
    let mut game = Game::new(GameConfig::new(2, 25), 13).unwrap();
    game.start();

    let mut observed = Vec::new();
    for _ in 0..3 {
        game.advance(10);
        observed.push(game.remaining_time());
    }

    // The tick that would go negative clamps to zero and terminates.
    assert_eq!(observed, vec![15, 5, 0]);
    assert!(game.is_finished());
}

#[test]
fn test_partial_cycle_countdown_mirrored_to_participants() {
    let mut game = Game::new(GameConfig::new(2, 25), 13).unwrap();
    game.start();

    game.advance(20); // last full cycle setup runs with 5 seconds left
    for p in game.participants() {
        assert_eq!(p.remaining_time(), 5);
    }

    game.advance(10);
    assert!(game.is_finished());
    for p in game.participants() {
        assert_eq!(p.remaining_time(), 0);
    }
}

#[test]
fn test_three_cycles_then_one_report() {
    let mut game = Game::new(GameConfig::new(4, 30), 7).unwrap();
    game.start();
    game.advance(30);

    let events = game.drain_events();
    // Cycle setups: one at construction, one per non-terminal tick.
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::AlertShown)),
        3
    );
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::CycleStarted)),
        3
    );
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::ActorRevealed { .. })),
        3
    );
    assert_eq!(
        count_events(&events, |e| matches!(e, ViewEvent::GameEnded(_))),
        1
    );
}

#[test]
fn test_alert_hides_three_seconds_into_each_cycle() {
    let mut game = Game::new(GameConfig::new(2, 20), 3).unwrap();
    game.start();
    game.drain_events();

    game.advance(2);
    assert!(game.drain_events().is_empty());

    game.advance(1);
    assert_eq!(game.drain_events(), vec![ViewEvent::AlertHidden]);
}

#[test]
fn test_reveal_fires_before_the_next_tick() {
    let mut game = Game::new(GameConfig::new(3, 30), 11).unwrap();
    game.start();
    game.drain_events();

    // Whole first cycle in one jump: the reveal at t=5 must land before
    // the tick at t=10 resets selection state.
    game.advance(10);
    let events = game.drain_events();

    let reveal = events
        .iter()
        .position(|e| matches!(e, ViewEvent::ActorRevealed { .. }))
        .unwrap();
    let next_cycle = events
        .iter()
        .position(|e| matches!(e, ViewEvent::CycleStarted))
        .unwrap();
    assert!(reveal < next_cycle);

    // And the tick wiped selection for the new cycle.
    assert!(game.participants().iter().all(|p| !p.is_selected()));
}

#[test]
fn test_report_matches_scores() {
    let mut game = Game::new(GameConfig::new(5, 50), 99).unwrap();
    game.start();
    game.advance(50);

    let report = game.report().unwrap();
    let max = game
        .participants()
        .iter()
        .map(|p| p.points())
        .max()
        .unwrap();
    assert_eq!(report.points(), max);
    for p in game.participants() {
        assert_eq!(report.is_winner(p.name()), p.points() == max);
    }
}

#[test]
fn test_report_expires_after_its_window() {
    let mut game = Game::new(GameConfig::new(2, 10), 1).unwrap();
    game.start();
    game.advance(10);
    assert!(game.is_finished());
    game.drain_events();

    game.advance(9);
    assert!(game.drain_events().is_empty());
    game.advance(1);
    assert_eq!(game.drain_events(), vec![ViewEvent::ReportExpired]);
}

#[test]
fn test_manual_guesses_reset_each_cycle() {
    let mut game = Game::new(GameConfig::new(2, 30), 5).unwrap();
    game.start();

    let first = game.participant("User1").unwrap().assignment();
    assert!(game
        .handle_action("User1", first.target, first.limb)
        .is_accepted());
    assert!(!game
        .handle_action("User1", first.target, first.limb)
        .is_accepted());

    // New cycle, new guess allowed.
    game.advance(10);
    let second = game.participant("User1").unwrap().assignment();
    assert!(game
        .handle_action("User1", second.target, second.limb)
        .is_accepted());
    assert_eq!(game.participant("User1").unwrap().points(), 2);
}

#[test]
fn test_assignments_mirror_countdown() {
    let mut game = Game::new(GameConfig::new(3, 40), 8).unwrap();
    game.start();

    for p in game.participants() {
        assert_eq!(p.remaining_time(), 40);
    }
    game.advance(10);
    for p in game.participants() {
        assert_eq!(p.remaining_time(), 30);
    }
}

#[test]
fn test_view_snapshot_has_every_participant_field() {
    let mut game = Game::new(GameConfig::new(3, 30), 21).unwrap();
    game.start();
    game.advance(5);

    let view = game.view();
    assert_eq!(view.participants.len(), 3);
    assert!(view.any_selected);
    let json = serde_json::to_string(&view).unwrap();
    for field in [
        "name",
        "points",
        "target",
        "limb",
        "remaining_time",
        "has_selected",
        "selected",
        "selected_action",
    ] {
        assert!(json.contains(field), "snapshot missing {field}");
    }
}

#[test]
fn test_same_seed_same_game() {
    let run = |seed: u64| {
        let mut game = Game::new(GameConfig::new(4, 60), seed).unwrap();
        game.start();
        let mut trace = Vec::new();
        for _ in 0..6 {
            game.advance(10);
            trace.push(game.view());
        }
        (trace, game.report().cloned())
    };

    assert_eq!(run(1234), run(1234));
}

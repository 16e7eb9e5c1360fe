use rand::rngs::SmallRng;
use rand::SeedableRng;
use sink_fleet::{
    new_game, Cell, Controller, Coord, Difficulty, EngineError, FleetConfig, Game, GameSetup,
    Orientation, PlayerId, ShipClass, ShotOutcome, StartingPlayer, TurnState,
};

fn human_vs_human(sizes: Vec<usize>, first: PlayerId) -> Game {
    let setup = GameSetup::new(FleetConfig::new(sizes))
        .seed(17)
        .starting(StartingPlayer::Fixed(first))
        .player(PlayerId::One, "one", Controller::HumanInput)
        .player(PlayerId::Two, "two", Controller::HumanInput);
    Game::new(setup).unwrap()
}

#[test]
fn single_frigate_sinks_and_ends_the_game() {
    let mut game = human_vs_human(vec![1], PlayerId::One);
    game.clear_fleet(PlayerId::Two).unwrap();
    game.place_ship(PlayerId::Two, 1, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();

    let report = game.submit_shot(Coord::new(0, 0)).unwrap();
    assert_eq!(report.outcome, ShotOutcome::HitAndSunk(ShipClass::Frigate));
    assert_eq!(report.next, TurnState::GameOver { winner: PlayerId::One });
    assert_eq!(game.is_game_over(), Some(PlayerId::One));
    assert_eq!(game.active_player(), None);
    assert!(game.player(PlayerId::Two).is_defeated());
    assert!(!game.player(PlayerId::One).is_defeated());

    assert_eq!(game.submit_shot(Coord::new(5, 5)), Err(EngineError::GameOver));
}

#[test]
fn hits_keep_the_turn_and_misses_pass_it() {
    let mut game = human_vs_human(vec![2, 1], PlayerId::One);
    game.clear_fleet(PlayerId::One).unwrap();
    game.place_ship(PlayerId::One, 1, Coord::new(9, 9), Orientation::Horizontal)
        .unwrap();
    game.place_ship(PlayerId::One, 1, Coord::new(7, 7), Orientation::Horizontal)
        .unwrap();
    game.clear_fleet(PlayerId::Two).unwrap();
    game.place_ship(PlayerId::Two, 2, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    game.place_ship(PlayerId::Two, 1, Coord::new(5, 5), Orientation::Horizontal)
        .unwrap();

    let r = game.submit_shot(Coord::new(0, 0)).unwrap();
    assert_eq!((r.attacker, r.outcome), (PlayerId::One, ShotOutcome::Hit));
    assert_eq!(r.next, TurnState::AwaitingShot(PlayerId::One));

    let r = game.submit_shot(Coord::new(3, 3)).unwrap();
    assert_eq!(r.outcome, ShotOutcome::Miss);
    assert_eq!(r.next, TurnState::AwaitingShot(PlayerId::Two));

    let r = game.submit_shot(Coord::new(9, 9)).unwrap();
    assert_eq!(r.attacker, PlayerId::Two);
    assert_eq!(r.outcome, ShotOutcome::HitAndSunk(ShipClass::Frigate));
    assert_eq!(r.next, TurnState::AwaitingShot(PlayerId::Two));

    let r = game.submit_shot(Coord::new(0, 9)).unwrap();
    assert_eq!(r.next, TurnState::AwaitingShot(PlayerId::One));

    let r = game.submit_shot(Coord::new(0, 1)).unwrap();
    assert_eq!(r.outcome, ShotOutcome::HitAndSunk(ShipClass::Destroyer));
    assert_eq!(r.next, TurnState::AwaitingShot(PlayerId::One));

    let r = game.submit_shot(Coord::new(5, 5)).unwrap();
    assert_eq!(r.next, TurnState::GameOver { winner: PlayerId::One });
    assert!(game.player(PlayerId::Two).is_defeated());
    assert!(!game.player(PlayerId::One).is_defeated());
    assert_eq!(game.shots_taken(), 6);

    assert_eq!(game.board_snapshot(PlayerId::One)[9][9], Cell::Hit);
    assert_eq!(game.board_snapshot(PlayerId::One)[7][7], Cell::Ship);
    assert_eq!(game.shots_snapshot(PlayerId::One)[3][3], Cell::Miss);
    assert!(game.fleet_status(PlayerId::Two).iter().all(|s| s.sunk));
}

#[test]
fn repeated_shot_is_rejected_without_changing_the_turn() {
    let mut game = human_vs_human(vec![1], PlayerId::One);
    game.clear_fleet(PlayerId::One).unwrap();
    game.place_ship(PlayerId::One, 1, Coord::new(9, 9), Orientation::Horizontal)
        .unwrap();
    game.clear_fleet(PlayerId::Two).unwrap();
    game.place_ship(PlayerId::Two, 1, Coord::new(9, 0), Orientation::Horizontal)
        .unwrap();
    game.submit_shot(Coord::new(4, 4)).unwrap();
    game.submit_shot(Coord::new(0, 0)).unwrap();
    assert_eq!(game.state(), TurnState::AwaitingShot(PlayerId::One));

    let shots = game.shots_fired(PlayerId::One).to_vec();
    let snapshot = game.shots_snapshot(PlayerId::One);
    let enemy_board = game.board_snapshot(PlayerId::Two);
    assert_eq!(
        game.submit_shot(Coord::new(4, 4)),
        Err(EngineError::RepeatedShot { row: 4, col: 4 })
    );
    assert_eq!(game.state(), TurnState::AwaitingShot(PlayerId::One));
    assert_eq!(game.shots_fired(PlayerId::One), shots.as_slice());
    assert_eq!(game.shots_snapshot(PlayerId::One), snapshot);
    assert_eq!(game.board_snapshot(PlayerId::Two), enemy_board);
    assert_eq!(game.shots_taken(), 2);
}

#[test]
fn invalid_coordinate_is_rejected() {
    let mut game = human_vs_human(vec![1], PlayerId::Two);
    assert_eq!(
        game.submit_shot(Coord::new(0, 12)),
        Err(EngineError::InvalidCoordinate { row: 0, col: 12 })
    );
    assert_eq!(game.state(), TurnState::AwaitingShot(PlayerId::Two));
    assert_eq!(game.shots_taken(), 0);
}

#[test]
fn request_shot_errors() {
    let setup = GameSetup::default()
        .seed(3)
        .starting(StartingPlayer::Fixed(PlayerId::One));
    let mut game = Game::new(setup).unwrap();
    assert_eq!(
        game.request_shot(PlayerId::One),
        Err(EngineError::ExternalInputRequired)
    );
    assert_eq!(game.request_shot(PlayerId::Two), Err(EngineError::NotYourTurn));
}

#[test]
fn fleets_are_fixed_once_firing_starts() {
    let mut game = human_vs_human(vec![3, 2], PlayerId::One);
    game.place_fleet(PlayerId::Two, &FleetConfig::new(vec![4])).unwrap();
    assert_eq!(game.player(PlayerId::Two).fleet().total_cells(), 4);
    assert_eq!(
        game.place_fleet(PlayerId::Two, &FleetConfig::new(vec![])),
        Err(EngineError::EmptyFleet)
    );

    game.submit_shot(Coord::new(0, 0)).unwrap();
    assert_eq!(
        game.place_fleet(PlayerId::One, &FleetConfig::default()),
        Err(EngineError::GameInProgress)
    );
    assert_eq!(game.clear_fleet(PlayerId::Two), Err(EngineError::GameInProgress));
}

#[test]
fn bad_fleet_configurations() {
    assert_eq!(
        new_game(FleetConfig::new(vec![]), Some(1)).unwrap_err(),
        EngineError::EmptyFleet
    );
    assert_eq!(
        new_game(FleetConfig::new(vec![4, 5]), Some(1)).unwrap_err(),
        EngineError::UnknownShipSize(5)
    );
}

#[test]
fn machine_turns_run_until_the_human_is_up() {
    let setup = GameSetup::default()
        .seed(21)
        .starting(StartingPlayer::Fixed(PlayerId::Two))
        .machine(PlayerId::Two, "machine", Difficulty::Hard);
    let mut game = Game::new(setup).unwrap();
    let reports = game.play_until_human_or_over().unwrap();

    assert!(!reports.is_empty());
    assert!(reports.iter().all(|r| r.attacker == PlayerId::Two));
    let last = reports.last().unwrap();
    assert_eq!(last.outcome, ShotOutcome::Miss);
    assert_eq!(game.active_player(), Some(PlayerId::One));
    assert_eq!(game.shots_fired(PlayerId::Two).len(), reports.len());
}

#[test]
fn machine_vs_machine_finishes_with_one_winner() {
    let setup = GameSetup::default()
        .seed(2024)
        .machine(PlayerId::One, "hunter", Difficulty::Hard)
        .machine(PlayerId::Two, "random", Difficulty::Easy);
    let mut game = Game::new(setup).unwrap();
    game.play_until_human_or_over().unwrap();

    let winner = game.is_game_over().expect("game should be decided");
    assert!(game.player(winner.opponent()).is_defeated());
    assert!(!game.player(winner).is_defeated());
    assert!(game.shots_fired(PlayerId::One).len() <= 100);
    assert!(game.shots_fired(PlayerId::Two).len() <= 100);
    assert_eq!(game.play_machine_turn(), Err(EngineError::GameOver));
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let setup = GameSetup::default()
            .seed(seed)
            .machine(PlayerId::One, "a", Difficulty::Hard)
            .machine(PlayerId::Two, "b", Difficulty::Hard);
        let mut game = Game::new(setup).unwrap();
        game.play_until_human_or_over().unwrap();
        (
            game.is_game_over(),
            game.shots_fired(PlayerId::One).to_vec(),
            game.shots_fired(PlayerId::Two).to_vec(),
        )
    };
    assert_eq!(play(8), play(8));
}

#[test]
fn empty_fleet_blocks_every_shot() {
    let setup = GameSetup::default()
        .seed(5)
        .starting(StartingPlayer::Fixed(PlayerId::One))
        .machine(PlayerId::One, "a", Difficulty::Hard)
        .machine(PlayerId::Two, "b", Difficulty::Easy);
    let mut game = Game::new(setup).unwrap();
    game.clear_fleet(PlayerId::Two).unwrap();

    assert_eq!(game.play_until_human_or_over(), Err(EngineError::EmptyFleet));
    assert_eq!(game.submit_shot(Coord::new(0, 0)), Err(EngineError::EmptyFleet));
    assert_eq!(game.request_shot(PlayerId::One), Err(EngineError::EmptyFleet));
    assert_eq!(game.state(), TurnState::AwaitingShot(PlayerId::One));
    assert_eq!(game.is_game_over(), None);
    assert_eq!(game.shots_taken(), 0);
    assert!(game.shots_fired(PlayerId::One).is_empty());
    assert_eq!(game.shots_snapshot(PlayerId::One)[0][0], Cell::Empty);

    // placing a ship again unblocks the game
    game.place_ship(PlayerId::Two, 1, Coord::new(9, 9), Orientation::Horizontal)
        .unwrap();
    game.play_until_human_or_over().unwrap();
    assert!(game.is_game_over().is_some());
}

#[test]
fn with_rng_same_stream_same_game() {
    let play = |seed| {
        let setup = GameSetup::default()
            .machine(PlayerId::One, "a", Difficulty::Hard)
            .machine(PlayerId::Two, "b", Difficulty::Easy);
        let mut game = Game::with_rng(setup, SmallRng::seed_from_u64(seed)).unwrap();
        let fleets = (
            game.fleet_status(PlayerId::One),
            game.fleet_status(PlayerId::Two),
            game.board_snapshot(PlayerId::One),
            game.board_snapshot(PlayerId::Two),
        );
        let first = game.active_player();
        game.play_until_human_or_over().unwrap();
        (
            fleets,
            first,
            game.is_game_over(),
            game.shots_fired(PlayerId::One).to_vec(),
            game.shots_fired(PlayerId::Two).to_vec(),
        )
    };
    assert_eq!(play(21), play(21));
    assert_ne!(play(21).0, play(22).0);
}

#[test]
fn random_starter_picks_both_sides() {
    let mut seen = Vec::new();
    for seed in 0..64 {
        let setup = GameSetup::default()
            .seed(seed)
            .starting(StartingPlayer::Random);
        let starter = Game::new(setup).unwrap().active_player().unwrap();
        if !seen.contains(&starter) {
            seen.push(starter);
        }
    }
    assert!(seen.contains(&PlayerId::One));
    assert!(seen.contains(&PlayerId::Two));
}

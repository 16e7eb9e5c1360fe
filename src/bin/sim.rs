use clap::{Parser, ValueEnum};
use serde_json::json;
use sink_fleet::{
    init_logging, Difficulty, FleetConfig, Game, GameSetup, PlayerId, StartingPlayer,
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum First {
    One,
    Two,
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Easy,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Hard => Difficulty::Hard,
        }
    }
}

/// Play one machine-vs-machine game and print the result as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = First::Random)]
    first: First,
    #[arg(long, value_enum, default_value_t = Level::Hard)]
    difficulty_one: Level,
    #[arg(long, value_enum, default_value_t = Level::Easy)]
    difficulty_two: Level,
    /// Comma-separated ship sizes; defaults to the standard fleet.
    #[arg(long, value_delimiter = ',')]
    fleet: Option<Vec<usize>>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let fleet = cli.fleet.map(FleetConfig::new).unwrap_or_default();
    let first = match cli.first {
        First::One => StartingPlayer::Fixed(PlayerId::One),
        First::Two => StartingPlayer::Fixed(PlayerId::Two),
        First::Random => StartingPlayer::Random,
    };
    let mut setup = GameSetup::new(fleet)
        .starting(first)
        .machine(PlayerId::One, "one", cli.difficulty_one.into())
        .machine(PlayerId::Two, "two", cli.difficulty_two.into());
    if let Some(seed) = cli.seed {
        setup = setup.seed(seed);
    }

    let mut game = Game::new(setup)?;
    let opener = game.active_player();
    game.play_until_human_or_over()?;
    let winner = game
        .is_game_over()
        .ok_or_else(|| anyhow::anyhow!("game stopped before a winner was decided"))?;

    let result = json!({
        "first": opener,
        "winner": winner,
        "shots": {
            "one": game.shots_fired(PlayerId::One).len(),
            "two": game.shots_fired(PlayerId::Two).len(),
        },
        "total_shots": game.shots_taken(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

//! Turn controller: who shoots next, extra turns on hits, and the win condition.

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::BoardSnapshot;
use crate::common::{Coord, EngineError, ShotOutcome};
use crate::config::{Difficulty, FleetConfig, StartingPlayer};
use crate::player::{Controller, Player, PlayerId};
use crate::resolver::resolve_shot;
use crate::ship::{Orientation, ShipStatus};
use crate::targeting::strategy_for;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    AwaitingShot(PlayerId),
    GameOver { winner: PlayerId },
}

/// What happened on one resolved shot, and whose turn it is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub attacker: PlayerId,
    pub coord: Coord,
    pub outcome: ShotOutcome,
    pub next: TurnState,
}

/// Everything needed to start a game.
#[derive(Debug)]
pub struct GameSetup {
    fleet: FleetConfig,
    seed: Option<u64>,
    first: StartingPlayer,
    one: (String, Controller),
    two: (String, Controller),
}

impl GameSetup {
    /// Human as player one against an easy machine as player two, random first
    /// shooter, unseeded.
    pub fn new(fleet: FleetConfig) -> Self {
        Self {
            fleet,
            seed: None,
            first: StartingPlayer::default(),
            one: (String::from("Player"), Controller::HumanInput),
            two: (
                String::from("Machine"),
                Controller::Machine(strategy_for(Difficulty::default())),
            ),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn starting(mut self, first: StartingPlayer) -> Self {
        self.first = first;
        self
    }

    pub fn player(mut self, id: PlayerId, name: impl Into<String>, controller: Controller) -> Self {
        let slot = match id {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        };
        *slot = (name.into(), controller);
        self
    }

    /// Shorthand for a machine player of the given difficulty.
    pub fn machine(self, id: PlayerId, name: impl Into<String>, difficulty: Difficulty) -> Self {
        self.player(id, name, Controller::Machine(strategy_for(difficulty)))
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(FleetConfig::default())
    }
}

#[cfg(feature = "std")]
fn entropy_rng() -> SmallRng {
    SmallRng::from_rng(&mut rand::rng())
}

// Without std there is no entropy source; unseeded games are deterministic.
#[cfg(not(feature = "std"))]
fn entropy_rng() -> SmallRng {
    SmallRng::seed_from_u64(0)
}

/// Start a game with default players and the given fleet.
pub fn new_game(fleet: FleetConfig, seed: Option<u64>) -> Result<Game, EngineError> {
    let mut setup = GameSetup::new(fleet);
    setup.seed = seed;
    Game::new(setup)
}

/// A two-player game in progress. Owns the single RNG used for placement,
/// machine targeting, and choosing the first shooter.
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    state: TurnState,
    rng: SmallRng,
    shots_taken: usize,
}

impl Game {
    pub fn new(setup: GameSetup) -> Result<Self, EngineError> {
        let rng = setup.seed.map(SmallRng::seed_from_u64).unwrap_or_else(entropy_rng);
        Self::with_rng(setup, rng)
    }

    /// Like [`Game::new`] but with a caller-supplied RNG; any seed in `setup`
    /// is ignored.
    pub fn with_rng(setup: GameSetup, mut rng: SmallRng) -> Result<Self, EngineError> {
        if setup.fleet.sizes().is_empty() {
            return Err(EngineError::EmptyFleet);
        }
        let GameSetup {
            fleet, first, one, two, ..
        } = setup;
        let mut players = [
            Player::new(PlayerId::One, one.0, one.1),
            Player::new(PlayerId::Two, two.0, two.1),
        ];
        for player in players.iter_mut() {
            player.place_fleet(&fleet, &mut rng)?;
        }
        let starter = match first {
            StartingPlayer::Fixed(id) => id,
            StartingPlayer::Random => {
                if rng.random() {
                    PlayerId::One
                } else {
                    PlayerId::Two
                }
            }
        };
        info!(
            "new game: {} ship(s) per side, {} shoots first",
            fleet.sizes().len(),
            players[starter.index()].name()
        );
        Ok(Self {
            players,
            state: TurnState::AwaitingShot(starter),
            rng,
            shots_taken: 0,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Player whose shot is awaited, or `None` once the game is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::AwaitingShot(id) => Some(id),
            TurnState::GameOver { .. } => None,
        }
    }

    /// The winner, once there is one.
    pub fn is_game_over(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            TurnState::AwaitingShot(_) => None,
        }
    }

    /// Total shots resolved so far, both sides.
    pub fn shots_taken(&self) -> usize {
        self.shots_taken
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn setup_player_mut(&mut self, id: PlayerId) -> Result<&mut Player, EngineError> {
        if self.shots_taken > 0 {
            return Err(EngineError::GameInProgress);
        }
        Ok(&mut self.players[id.index()])
    }

    /// Re-place `id`'s fleet at random. Only allowed before the first shot.
    pub fn place_fleet(&mut self, id: PlayerId, fleet: &FleetConfig) -> Result<(), EngineError> {
        if fleet.sizes().is_empty() {
            return Err(EngineError::EmptyFleet);
        }
        if self.shots_taken > 0 {
            return Err(EngineError::GameInProgress);
        }
        let player = &mut self.players[id.index()];
        player.place_fleet(fleet, &mut self.rng)
    }

    /// Remove every ship of `id`, ready for manual placement.
    pub fn clear_fleet(&mut self, id: PlayerId) -> Result<(), EngineError> {
        self.setup_player_mut(id)?.clear_fleet();
        Ok(())
    }

    /// Add one ship to `id`'s fleet at a fixed position.
    pub fn place_ship(
        &mut self,
        id: PlayerId,
        size: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), EngineError> {
        self.setup_player_mut(id)?.place_ship(size, origin, orientation)
    }

    /// Both fleets must hold at least one ship before any shot is taken.
    fn ensure_fleets(&self) -> Result<(), EngineError> {
        if self.players.iter().any(|p| p.fleet().is_empty()) {
            return Err(EngineError::EmptyFleet);
        }
        Ok(())
    }

    /// Ask a machine player's strategy where it fires next. Nothing is resolved.
    pub fn request_shot(&mut self, id: PlayerId) -> Result<Coord, EngineError> {
        match self.state {
            TurnState::GameOver { .. } => return Err(EngineError::GameOver),
            TurnState::AwaitingShot(active) if active != id => {
                return Err(EngineError::NotYourTurn)
            }
            TurnState::AwaitingShot(_) => {}
        }
        self.ensure_fleets()?;
        let player = &mut self.players[id.index()];
        match &mut player.controller {
            Controller::HumanInput => Err(EngineError::ExternalInputRequired),
            Controller::Machine(strategy) => strategy
                .select_target(&mut self.rng, &player.fired_mask)
                .ok_or(EngineError::NoTargetsLeft),
        }
    }

    /// Fire the active player's shot at `coord` and advance the turn.
    pub fn submit_shot(&mut self, coord: Coord) -> Result<ShotReport, EngineError> {
        let attacker_id = match self.state {
            TurnState::AwaitingShot(id) => id,
            TurnState::GameOver { .. } => return Err(EngineError::GameOver),
        };
        self.ensure_fleets()?;
        let (head, tail) = self.players.split_at_mut(1);
        let (attacker, defender) = match attacker_id {
            PlayerId::One => (&mut head[0], &mut tail[0]),
            PlayerId::Two => (&mut tail[0], &mut head[0]),
        };

        let outcome = resolve_shot(attacker, defender, coord)?;
        self.shots_taken += 1;
        if let Controller::Machine(strategy) = &mut attacker.controller {
            strategy.record_outcome(coord, outcome);
        }

        self.state = if !outcome.is_hit() {
            TurnState::AwaitingShot(attacker_id.opponent())
        } else if defender.is_defeated() {
            info!("{} wins after {} shots", attacker.name(), attacker.shots_fired().len());
            TurnState::GameOver {
                winner: attacker_id,
            }
        } else {
            TurnState::AwaitingShot(attacker_id)
        };
        debug!("next: {:?}", self.state);

        Ok(ShotReport {
            attacker: attacker_id,
            coord,
            outcome,
            next: self.state,
        })
    }

    /// Request and fire one shot for the active machine player.
    pub fn play_machine_turn(&mut self) -> Result<ShotReport, EngineError> {
        let active = self.active_player().ok_or(EngineError::GameOver)?;
        let coord = self.request_shot(active)?;
        self.submit_shot(coord)
    }

    /// Keep firing for machine players until a human must act or the game ends.
    pub fn play_until_human_or_over(&mut self) -> Result<Vec<ShotReport>, EngineError> {
        let mut reports = Vec::new();
        while let Some(active) = self.active_player() {
            if self.players[active.index()].controller.is_human() {
                break;
            }
            reports.push(self.play_machine_turn()?);
        }
        Ok(reports)
    }

    pub fn board_snapshot(&self, id: PlayerId) -> BoardSnapshot {
        self.player(id).board().snapshot()
    }

    pub fn shots_snapshot(&self, id: PlayerId) -> BoardSnapshot {
        self.player(id).shots_board().snapshot()
    }

    pub fn fleet_status(&self, id: PlayerId) -> Vec<ShipStatus> {
        self.player(id).fleet().status()
    }

    pub fn shots_fired(&self, id: PlayerId) -> &[Coord] {
        self.player(id).shots_fired()
    }
}

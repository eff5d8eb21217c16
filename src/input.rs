//! Input routing
//!
//! Translates host events (keyboard, on-screen buttons, UI controls) into a
//! small command set applied between ticks. Directional intents land in the
//! single pending-direction slot, so several intents inside one interval
//! coalesce and only the latest valid one takes effect on the next step.

use rand_pcg::Pcg32;

use crate::scheduler::TickScheduler;
use crate::sim::{Direction, GameState, reset};
use crate::theme::Theme;

/// The abstracted control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// (Re)start a run from the initial layout
    Start,
    /// Flip Running/Paused; ignored in Ready and terminal phases
    TogglePause,
    /// Directional intent, subject to the no-reversal rule
    SetDirection(Direction),
    /// Speed level 1..=10 (clamped)
    SetSpeedLevel(u8),
    /// Cosmetic color theme; does not touch game state
    SetTheme(Theme),
}

/// Apply one command. Everything here runs between ticks on the single
/// execution context, so no step is ever observed half-applied.
pub fn route(cmd: Command, state: &mut GameState, scheduler: &mut TickScheduler, rng: &mut Pcg32) {
    match cmd {
        Command::Start => {
            reset(state, rng);
            scheduler.rearm();
        }
        Command::TogglePause => state.toggle_pause(),
        Command::SetDirection(dir) => state.set_pending_direction(dir),
        Command::SetSpeedLevel(level) => scheduler.set_speed_level(level),
        Command::SetTheme(theme) => theme.apply(),
    }
}

/// Map a key name (KeyboardEvent.key, lowercased) to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "arrowup" | "w" => Some(Command::SetDirection(Direction::Up)),
        "arrowdown" | "s" => Some(Command::SetDirection(Direction::Down)),
        "arrowleft" | "a" => Some(Command::SetDirection(Direction::Left)),
        "arrowright" | "d" => Some(Command::SetDirection(Direction::Right)),
        " " => Some(Command::TogglePause),
        _ => None,
    }
}

/// Parse a direction name from the on-screen pad buttons
pub fn direction_from_name(name: &str) -> Option<Direction> {
    match name {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_INTERVAL_MS;
    use crate::sim::GamePhase;
    use rand::SeedableRng;

    fn setup() -> (GameState, TickScheduler, Pcg32) {
        (
            GameState::new(),
            TickScheduler::default(),
            Pcg32::seed_from_u64(7),
        )
    }

    #[test]
    fn test_start_resets_and_runs() {
        let (mut state, mut sched, mut rng) = setup();
        state.phase = GamePhase::GameOver;
        state.score = 90;

        route(Command::Start, &mut state, &mut sched, &mut rng);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.food.is_some());
    }

    #[test]
    fn test_direction_intent_respects_no_reversal() {
        let (mut state, mut sched, mut rng) = setup();
        route(
            Command::SetDirection(Direction::Left),
            &mut state,
            &mut sched,
            &mut rng,
        );
        assert_eq!(state.pending_direction, Direction::Right);

        route(
            Command::SetDirection(Direction::Down),
            &mut state,
            &mut sched,
            &mut rng,
        );
        assert_eq!(state.pending_direction, Direction::Down);
    }

    #[test]
    fn test_pause_noop_before_start() {
        let (mut state, mut sched, mut rng) = setup();
        route(Command::TogglePause, &mut state, &mut sched, &mut rng);
        assert_eq!(state.phase, GamePhase::Ready);
    }

    #[test]
    fn test_speed_routed_to_scheduler() {
        let (mut state, mut sched, mut rng) = setup();
        route(Command::SetSpeedLevel(10), &mut state, &mut sched, &mut rng);
        assert_eq!(sched.interval_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            command_for_key("arrowup"),
            Some(Command::SetDirection(Direction::Up))
        );
        assert_eq!(
            command_for_key("d"),
            Some(Command::SetDirection(Direction::Right))
        );
        assert_eq!(command_for_key(" "), Some(Command::TogglePause));
        assert_eq!(command_for_key("q"), None);
    }

    #[test]
    fn test_theme_command_leaves_state_alone() {
        let (mut state, mut sched, mut rng) = setup();
        let before = state.clone();
        route(
            Command::SetTheme(Theme::Sunset),
            &mut state,
            &mut sched,
            &mut rng,
        );
        assert_eq!(state.snake, before.snake);
        assert_eq!(state.phase, before.phase);
    }
}

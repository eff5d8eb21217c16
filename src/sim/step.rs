//! Discrete simulation step
//!
//! One step: adopt the pending direction, move the head one cell, check
//! collisions, handle food, trim the tail.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameState, Position};
use crate::consts::*;

/// Resampling cap for the food spawn before falling back to a linear scan
const MAX_FOOD_ATTEMPTS: usize = 1024;

/// What a single step did, reported to the host for rendering/persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Phase was not Running; nothing happened
    Idle,
    /// Ordinary constant-length move
    Moved,
    /// Head landed on food: score awarded, snake grew, food respawned
    Scored,
    /// Wall or self collision; phase is now GameOver
    Died,
    /// Food was eaten and no free cell remains; phase is now BoardFull
    BoardFull,
}

/// Reinitialize the board wholesale and start running
pub fn reset(state: &mut GameState, rng: &mut Pcg32) {
    *state = GameState::new();
    state.food = spawn_food(state, rng);
    state.phase = GamePhase::Running;
    log::info!("game reset, food at {:?}", state.food);
}

/// Advance the game by one step. Only Running states advance; a collision
/// transitions to GameOver without touching the snake.
pub fn step(state: &mut GameState, rng: &mut Pcg32) -> StepEvent {
    if state.phase != GamePhase::Running {
        return StepEvent::Idle;
    }

    state.direction = state.pending_direction;
    let new_head = state.head().offset(state.direction);

    if !new_head.in_bounds() || state.occupies(new_head) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "game over at step {} with score {} (head would be {:?})",
            state.steps,
            state.score,
            new_head
        );
        return StepEvent::Died;
    }

    state.snake.push_front(new_head);
    state.steps += 1;

    if state.food == Some(new_head) {
        state.score += FOOD_REWARD;
        state.food = spawn_food(state, rng);
        if state.food.is_none() {
            state.phase = GamePhase::BoardFull;
            log::info!("board full at score {}", state.score);
            return StepEvent::BoardFull;
        }
        StepEvent::Scored
    } else {
        state.snake.pop_back();
        StepEvent::Moved
    }
}

/// Pick a uniformly random free cell for the food, or None when the snake
/// covers the whole board. Rejection sampling is capped; past the cap the
/// free cells are scanned in row order so the search always terminates.
pub fn spawn_food(state: &GameState, rng: &mut Pcg32) -> Option<Position> {
    let cells = (GRID_SIZE * GRID_SIZE) as usize;
    if state.snake.len() >= cells {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let pos = Position::new(
            rng.random_range(0..GRID_SIZE),
            rng.random_range(0..GRID_SIZE),
        );
        if !state.occupies(pos) {
            return Some(pos);
        }
    }

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let pos = Position::new(x, y);
            if !state.occupies(pos) {
                return Some(pos);
            }
        }
    }
    None
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::sim::state::Direction;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        /// Segments stay pairwise distinct and in bounds for any input
        /// sequence, and length tracks food consumed exactly.
        #[test]
        fn prop_state_invariants(
            seed in any::<u64>(),
            intents in proptest::collection::vec(arb_direction(), 1..200),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = GameState::new();
            reset(&mut state, &mut rng);

            for dir in intents {
                state.set_pending_direction(dir);
                let event = step(&mut state, &mut rng);

                if state.phase == GamePhase::Running {
                    let unique: HashSet<_> = state.snake.iter().copied().collect();
                    prop_assert_eq!(unique.len(), state.snake.len());
                    prop_assert!(state.snake.iter().all(|p| p.in_bounds()));
                    prop_assert_eq!(
                        state.snake.len(),
                        INITIAL_SNAKE_LENGTH + (state.score / FOOD_REWARD) as usize
                    );
                    let food = state.food.unwrap();
                    prop_assert!(!state.occupies(food));
                } else {
                    prop_assert_eq!(event, StepEvent::Died);
                    break;
                }
            }
        }

        /// The pending direction is never the opposite of the current one.
        #[test]
        fn prop_no_reversal(
            intents in proptest::collection::vec(arb_direction(), 1..100),
        ) {
            let mut state = GameState::new();
            for dir in intents {
                state.set_pending_direction(dir);
                prop_assert_ne!(state.pending_direction, state.direction.opposite());
            }
        }
    }
}

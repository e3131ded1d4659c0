//! Phase transitions: clicks, victory detection, post-point recovery
//!
//! Transition table:
//! - Intro -> Playing (first click)
//! - Playing -> Paused (score event, during the step)
//! - Paused -> Playing (ball recentered at the end of the scoring frame)
//! - Playing -> Victory (a score reaches the target)
//! - Victory -> Playing (click resets the match; never back to Intro)

use crate::consts::GAME_LENGTH;

use super::state::{GamePhase, GameState, Side};

/// Apply a pending click for the current phase. Clicks while Playing or
/// Paused are ignored.
pub fn handle_click(state: &mut GameState) {
    match state.phase {
        GamePhase::Intro => {
            log::info!("intro dismissed, game on");
            state.phase = GamePhase::Playing;
        }
        GamePhase::Victory(_) => reset(state),
        GamePhase::Playing | GamePhase::Paused => {}
    }
}

/// Latch the winner once either score reaches the target. Set at most once;
/// the phase stays terminal until a click resets the match.
pub fn check_victory(state: &mut GameState) {
    if state.winner().is_some() {
        return;
    }
    let winner = if state.player_score >= GAME_LENGTH {
        Side::Player
    } else if state.cpu_score >= GAME_LENGTH {
        Side::Cpu
    } else {
        return;
    };
    log::info!(
        "{} wins the match {} to {}",
        winner.label(),
        state.player_score,
        state.cpu_score
    );
    state.phase = GamePhase::Victory(winner);
}

/// Put the ball back in play after a point: recenter it at the surface
/// midpoint, send it back the other way horizontally, and downward toward
/// the player. Runs at the end of the scoring frame, after the draw, so the
/// overshoot position renders exactly once.
pub fn recover_from_pause(state: &mut GameState) {
    if state.phase != GamePhase::Paused {
        return;
    }
    state.ball.pos = state.center();
    state.ball.vel.x = -state.ball.vel.x;
    state.ball.vel.y = state.ball.vel.y.abs();
    state.phase = GamePhase::Playing;
}

/// Start a fresh match after a victory click. Scores and positions reset;
/// the ball keeps its end-of-match velocity.
pub fn reset(state: &mut GameState) {
    let fresh = GameState::new(state.bounds);
    state.ball.pos = fresh.ball.pos;
    state.cpu.pos = fresh.cpu.pos;
    state.player_score = 0;
    state.cpu_score = 0;
    state.phase = GamePhase::Playing;
    log::info!("match reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_intro_click_starts_play() {
        let mut state = GameState::new(BOUNDS);
        handle_click(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.cpu_score, 0);
    }

    #[test]
    fn test_click_ignored_while_playing() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Playing;
        state.player_score = 2;
        handle_click(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player_score, 2);
    }

    #[test]
    fn test_victory_latches_at_game_length() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Playing;
        state.player_score = GAME_LENGTH;
        check_victory(&mut state);
        assert_eq!(state.winner(), Some(Side::Player));
    }

    #[test]
    fn test_no_victory_below_target() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Playing;
        state.player_score = GAME_LENGTH - 1;
        state.cpu_score = GAME_LENGTH - 1;
        check_victory(&mut state);
        assert_eq!(state.winner(), None);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_winner_is_latched_once() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Playing;
        state.cpu_score = GAME_LENGTH;
        check_victory(&mut state);
        assert_eq!(state.winner(), Some(Side::Cpu));

        // a later check never rewrites the outcome
        state.player_score = GAME_LENGTH;
        check_victory(&mut state);
        assert_eq!(state.winner(), Some(Side::Cpu));
    }

    #[test]
    fn test_pause_recovery_recenters_and_redirects() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Paused;
        state.ball.pos = Vec2::new(123.0, 705.0);
        state.ball.vel = Vec2::new(7.0, -10.0);
        recover_from_pause(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, state.center());
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 10.0));
    }

    #[test]
    fn test_recovery_only_applies_to_paused() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Victory(Side::Cpu);
        state.ball.pos = Vec2::new(123.0, 705.0);
        recover_from_pause(&mut state);
        assert_eq!(state.phase, GamePhase::Victory(Side::Cpu));
        assert_eq!(state.ball.pos, Vec2::new(123.0, 705.0));
    }

    #[test]
    fn test_reset_restores_match() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Victory(Side::Cpu);
        state.player_score = 2;
        state.cpu_score = GAME_LENGTH;
        state.ball.pos = Vec2::new(50.0, 900.0);
        state.ball.vel = Vec2::new(7.0, -10.0);
        state.cpu.pos.x = -40.0;

        handle_click(&mut state);

        // back to play, not to the intro banner
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner(), None);
        assert_eq!(state.player_score, 0);
        assert_eq!(state.cpu_score, 0);
        assert_eq!(state.ball.pos, state.center());
        assert_eq!(state.cpu.pos.x, 350.0);
        // velocity keeps its end-of-match value
        assert_eq!(state.ball.vel, Vec2::new(7.0, -10.0));
    }
}

//! Scene drawing: scoreboard, entities and phase overlays

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, Paddle};

use super::surface::{Surface, TextAlign};

/// Vertical spacing of overlay and score lines from the surface midpoint
const LINE_OFFSET: f32 = 100.0;
/// Scoreboard inset from the right edge
const SCORE_INSET: f32 = 100.0;

/// Draw one frame of the current state
pub fn draw<S: Surface>(state: &GameState, surface: &mut S) {
    surface.clear();

    let center = state.center();

    if state.phase == GamePhase::Intro {
        draw_intro(surface, center);
        return;
    }

    draw_scoreboard(state, surface);
    draw_ball(state, surface);
    draw_paddle(&state.player, surface);
    draw_paddle(&state.cpu, surface);

    if let GamePhase::Victory(side) = state.phase {
        draw_victory(surface, center, side.label());
    }
}

fn draw_intro<S: Surface>(surface: &mut S, center: Vec2) {
    surface.fill_text(
        &format!("First to {GAME_LENGTH} wins"),
        center,
        BANNER_FONT_PX,
        BANNER_COLOR,
        TextAlign::Center,
    );
    surface.fill_text(
        "CLICK TO START",
        center + Vec2::new(0.0, LINE_OFFSET),
        PROMPT_FONT_PX,
        PROMPT_COLOR,
        TextAlign::Center,
    );
}

/// Both scores share the right margin; the player's sits below the midline,
/// the CPU's above, each in its paddle's color
fn draw_scoreboard<S: Surface>(state: &GameState, surface: &mut S) {
    let x = state.bounds.x - SCORE_INSET;
    let mid_y = state.center().y;
    surface.fill_text(
        &state.player_score.to_string(),
        Vec2::new(x, mid_y + LINE_OFFSET),
        BANNER_FONT_PX,
        state.player.color,
        TextAlign::Right,
    );
    surface.fill_text(
        &state.cpu_score.to_string(),
        Vec2::new(x, mid_y - LINE_OFFSET),
        BANNER_FONT_PX,
        state.cpu.color,
        TextAlign::Right,
    );
}

fn draw_ball<S: Surface>(state: &GameState, surface: &mut S) {
    surface.fill_circle(state.ball.pos, state.ball.radius, state.ball.color);
}

fn draw_paddle<S: Surface>(paddle: &Paddle, surface: &mut S) {
    surface.fill_rect(paddle.pos, paddle.size, paddle.color);
}

fn draw_victory<S: Surface>(surface: &mut S, center: Vec2, winner: &str) {
    surface.fill_text(
        &format!("{winner} wins!"),
        center,
        BANNER_FONT_PX,
        BANNER_COLOR,
        TextAlign::Center,
    );
    surface.fill_text(
        "CLICK TO PLAY AGAIN",
        center + Vec2::new(0.0, LINE_OFFSET),
        PROMPT_FONT_PX,
        PROMPT_COLOR,
        TextAlign::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Clear,
        Rect(String),
        Circle(String),
        Text(String, String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Cmd>);

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.0.push(Cmd::Clear);
        }
        fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, color: &str) {
            self.0.push(Cmd::Rect(color.into()));
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, color: &str) {
            self.0.push(Cmd::Circle(color.into()));
        }
        fn fill_text(&mut self, text: &str, _pos: Vec2, _size_px: f32, color: &str, _align: TextAlign) {
            self.0.push(Cmd::Text(text.into(), color.into()));
        }
    }

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn text(s: &str, color: &str) -> Cmd {
        Cmd::Text(s.into(), color.into())
    }

    #[test]
    fn test_intro_draws_banner_only() {
        let state = GameState::new(BOUNDS);
        let mut rec = Recorder::default();
        draw(&state, &mut rec);
        assert_eq!(rec.0[0], Cmd::Clear);
        assert!(rec.0.contains(&text("First to 5 wins", "white")));
        assert!(rec.0.contains(&text("CLICK TO START", "gray")));
        assert!(
            !rec.0
                .iter()
                .any(|c| matches!(c, Cmd::Rect(_) | Cmd::Circle(_)))
        );
    }

    #[test]
    fn test_playing_draws_scoreboard_and_entities() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Playing;
        state.player_score = 3;
        let mut rec = Recorder::default();
        draw(&state, &mut rec);

        let rects = rec.0.iter().filter(|c| matches!(c, Cmd::Rect(_))).count();
        assert_eq!(rects, 2);
        assert!(rec.0.contains(&Cmd::Circle("#fff".into())));
        assert!(rec.0.contains(&text("3", "coral")));
        assert!(rec.0.contains(&text("0", "cyan")));
    }

    #[test]
    fn test_victory_overlay_names_the_winner() {
        let mut state = GameState::new(BOUNDS);
        state.phase = GamePhase::Victory(Side::Cpu);
        let mut rec = Recorder::default();
        draw(&state, &mut rec);

        assert!(rec.0.contains(&text("CPU wins!", "white")));
        assert!(rec.0.contains(&text("CLICK TO PLAY AGAIN", "gray")));
        // entities stay on screen under the banner
        let rects = rec.0.iter().filter(|c| matches!(c, Cmd::Rect(_))).count();
        assert_eq!(rects, 2);
    }
}

//! Per-frame Pong update
//!
//! Core game loop step; the host calls it on a fixed cadence (`SIM_DT`).

use super::collision::{bounce_direction, collides_x, collides_y, paddle_contact};
use super::state::{PongEvent, PongState, Side};

/// Advance the game by `dt` seconds and report what happened.
///
/// Not reentrant: the host must serialize calls for a given state.
pub fn tick(state: &mut PongState, dt: f32) -> Vec<PongEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Paddles stop at the wall instead of being clamped
    let height = state.height;
    for paddle in [&mut state.player1, &mut state.player2] {
        if !collides_y(paddle, 0.0, height) {
            paddle.advance(dt);
        }
    }

    // Ball past a side wall: point for whoever it was heading away from
    if collides_x(&state.ball, 0.0, state.width) {
        let scorer = if state.ball.direction.x() > 0.0 {
            Side::Left
        } else {
            Side::Right
        };
        state.award_point(scorer);
        let (score1, score2) = state.scores();
        log::info!("Point for {:?}: {} - {}", scorer, score1, score2);
        events.push(PongEvent::Scored(scorer));
        return events;
    }

    // Only the paddle the ball is heading toward can be hit
    let heading_x = state.ball.direction.x();
    let struck = if heading_x < 0.0 && paddle_contact(&state.player1, &state.ball) {
        Some(Side::Left)
    } else if heading_x > 0.0 && paddle_contact(&state.player2, &state.ball) {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = struck {
        let paddle_y = state.player(side).position.y();
        let paddle_half_height = state.player(side).half_extent.y();
        let ball_y = state.ball.position.y();
        let direction = state.ball.direction;

        state.ball.direction =
            bounce_direction(direction, ball_y, paddle_y, paddle_half_height, state.rng());
        log::debug!(
            "Paddle hit {:?} at y={:.1}, new direction ({:.3}, {:.3})",
            side,
            ball_y,
            state.ball.direction.x(),
            state.ball.direction.y()
        );
        events.push(PongEvent::PaddleHit(side));
    }

    if collides_y(&state.ball, 0.0, height) {
        state.ball.direction = state.ball.direction.with_y(-state.ball.direction.y());
        events.push(PongEvent::WallBounce);
    } else {
        state.ball.advance(dt);
    }

    // Rallies speed up without limit
    state.ball.velocity = state.ball.velocity.add(state.ball.acceleration);

    events
}

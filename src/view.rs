//! Render boundary
//!
//! A renderer gets a read-only [`Snapshot`] each frame and, if it wants the
//! stock screens, the [`DrawCommand`] list from [`compose`]. It has no write
//! access to game state.

use serde::Serialize;

use crate::consts::GAME_WIDTH;
use crate::sim::{GamePhase, GameState};

/// What a renderer needs to know about one slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
    pub lane_x: f64,
    pub full_text: String,
    /// One flag per character, true once typed
    pub typed_mask: Vec<bool>,
    /// Untyped prefix, drawn over `full_text` to hide the typed suffix
    pub untyped: String,
    pub quantized_y: f64,
    pub killed: bool,
}

/// Per-frame view of the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// 1-based
    pub level: usize,
    pub waves_remaining: i32,
    pub boundary_y: f64,
    pub tokens: Vec<TokenView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            level: state.level_number(),
            waves_remaining: state.waves_remaining,
            boundary_y: state.boundary_y,
            tokens: state
                .tokens
                .iter()
                .map(|t| TokenView {
                    lane_x: t.lane_x,
                    full_text: t.text().to_owned(),
                    typed_mask: t.typed_mask(),
                    untyped: t.partial_text().to_owned(),
                    quantized_y: t.quantized_y,
                    killed: t.killed,
                })
                .collect(),
        }
    }
}

/// RGBA8 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const GREY: Color = Color(212, 212, 212, 255);
    pub const RED: Color = Color(255, 0, 0, 255);
}

/// Font faces, by point size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Font {
    /// 48pt
    Title,
    /// 32pt, tokens and end screens
    Body,
    /// 20pt
    Hud,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Color),
    /// Text with its baseline at `y`
    Text {
        text: String,
        font: Font,
        x: f64,
        y: f64,
        color: Color,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: Color,
    },
}

fn text(text: impl Into<String>, font: Font, x: f64, y: f64) -> DrawCommand {
    DrawCommand::Text {
        text: text.into(),
        font,
        x,
        y,
        color: Color::BLACK,
    }
}

/// Draw list for one frame
pub fn compose(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let mut cmds = vec![DrawCommand::Clear(Color::WHITE)];

    match snapshot.phase {
        GamePhase::NotStarted => {
            cmds.push(text("REVERSE TYPIST", Font::Title, 20.0, 100.0));
            cmds.push(text("RULES", Font::Hud, 200.0, 300.0));
            cmds.push(text("1. Type strings in reverse order", Font::Hud, 20.0, 340.0));
            cmds.push(text("2. Strings must not cross red line", Font::Hud, 20.0, 380.0));
            cmds.push(text("press <Enter> to start", Font::Hud, 100.0, 730.0));
        }
        GamePhase::Playing => {
            for token in snapshot.tokens.iter().filter(|t| !t.killed) {
                cmds.push(DrawCommand::Text {
                    text: token.full_text.clone(),
                    font: Font::Body,
                    x: token.lane_x,
                    y: token.quantized_y,
                    color: Color::GREY,
                });
                cmds.push(text(token.untyped.clone(), Font::Body, token.lane_x, token.quantized_y));
            }
            cmds.push(DrawCommand::Line {
                x0: 0.0,
                y0: snapshot.boundary_y,
                x1: GAME_WIDTH,
                y1: snapshot.boundary_y,
                width: 1.0,
                color: Color::RED,
            });
            cmds.push(text(format!("level: {}", snapshot.level), Font::Hud, 10.0, 730.0));
            cmds.push(text(
                format!("strings left: {}", snapshot.waves_remaining),
                Font::Hud,
                10.0,
                780.0,
            ));
        }
        GamePhase::Over | GamePhase::Won => {
            let banner = if snapshot.phase == GamePhase::Won {
                "you won"
            } else {
                "game over"
            };
            cmds.push(text(banner, Font::Body, 120.0, 240.0));
            cmds.push(text("press <Enter> to restart", Font::Body, 20.0, 360.0));
        }
    }

    cmds
}

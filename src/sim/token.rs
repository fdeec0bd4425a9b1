//! Falling word tokens
//!
//! A token is cleared by typing its letters last to first. The letters still
//! owed are kept front-first in `remaining`, so the next required letter is
//! always `remaining[0]` and the untyped part of the text is a prefix of it.

use std::collections::VecDeque;

/// A falling token ("enemy") occupying one lane
#[derive(Debug, Clone)]
pub struct Token {
    /// Horizontal lane this slot falls in
    pub lane_x: f64,
    /// Row the token returns to on reset
    pub spawn_y: f64,
    text: String,
    /// Letters not yet typed, next required letter first
    remaining: VecDeque<char>,
    /// Continuous vertical position
    pub y: f64,
    /// `y` snapped down to a multiple of `jump_height`
    pub quantized_y: f64,
    pub jump_height: f64,
    /// Pixels per frame, fixed until the next reset
    pub speed: f64,
    pub killed: bool,
}

impl Token {
    pub fn new(lane_x: f64, spawn_y: f64) -> Self {
        Self {
            lane_x,
            spawn_y,
            text: String::new(),
            remaining: VecDeque::new(),
            y: spawn_y,
            quantized_y: quantize(spawn_y, crate::consts::DEFAULT_JUMP_HEIGHT),
            jump_height: crate::consts::DEFAULT_JUMP_HEIGHT,
            speed: 0.0,
            killed: false,
        }
    }

    /// Start falling again from the spawn row with new text and speed
    pub fn reset(&mut self, text: &str, speed: f64, jump_height: f64) {
        self.text = text.to_owned();
        self.remaining = text.chars().rev().collect();
        self.y = self.spawn_y;
        self.quantized_y = quantize(self.spawn_y, jump_height);
        self.jump_height = jump_height;
        self.speed = speed;
        self.killed = false;
    }

    /// Consume `letter` if it is the next one owed. Wrong letters do nothing.
    pub fn apply_input(&mut self, letter: char) {
        if self.remaining.is_empty() {
            self.killed = true;
            return;
        }

        if self.remaining.front() == Some(&letter) {
            self.remaining.pop_front();
            if self.remaining.is_empty() {
                self.killed = true;
            }
        }
    }

    /// Advance one frame. Returns true if this frame's input killed the token.
    pub fn update(&mut self, typed: Option<char>) -> bool {
        let was_killed = self.killed;
        if let Some(letter) = typed {
            self.apply_input(letter);
        }

        self.y += self.speed;
        self.quantized_y = quantize(self.y, self.jump_height);

        self.killed && !was_killed
    }

    /// Loss check, made against the continuous position
    pub fn is_past_boundary(&self, boundary_y: f64) -> bool {
        self.y >= boundary_y
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters still owed, next required first
    pub fn remaining(&self) -> impl Iterator<Item = char> + '_ {
        self.remaining.iter().copied()
    }

    /// Next letter the player has to type
    pub fn next_letter(&self) -> Option<char> {
        self.remaining.front().copied()
    }

    pub fn typed_count(&self) -> usize {
        self.text.chars().count() - self.remaining.len()
    }

    /// Untyped prefix of the text, in reading order
    pub fn partial_text(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.remaining.len())
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    /// One flag per character of the text, true once typed
    pub fn typed_mask(&self) -> Vec<bool> {
        let untyped = self.remaining.len();
        (0..self.text.chars().count()).map(|i| i >= untyped).collect()
    }
}

/// Snap `y` down to the nearest multiple of `step`
#[inline]
pub fn quantize(y: f64, step: f64) -> f64 {
    (y / step).floor() * step
}

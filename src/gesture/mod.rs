// ABOUTME: Swipe gesture state machine for the card stack
// ABOUTME: Pure synchronous transitions from raw drag deltas to committed decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Swipe Gesture State Machine
//!
//! Converts a continuous drag into a committed like/dislike decision with
//! discrete, testable states:
//!
//! ```text
//! Idle -> Dragging -> Committing(direction) -> Settled
//!              \----> Idle                     (snap back)
//! ```
//!
//! The machine is pure and synchronous. It never awaits, so drag tracking
//! stays jitter-free: position updates are a function call, and all I/O
//! happens elsewhere (see [`crate::swipe::SwipeCoordinator`]). The rendering
//! layer feeds in cumulative drag deltas, asks for the exit target when a
//! release commits, and reports animation completion back via
//! [`SwipeGesture::exit_complete`], the single place a decision is
//! produced, exactly once per card.

use std::time::Duration;

use crate::constants::gesture::{
    DRAG_DEADZONE, EXIT_ANIMATION_MS, EXIT_OVERSHOOT, ROTATION_MAX_DEGREES,
    ROTATION_RANGE_FACTOR, SWIPE_THRESHOLD,
};

/// Horizontal direction of a committed swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dislike
    Left,
    /// Like
    Right,
}

impl SwipeDirection {
    /// Whether this direction means the recipe was liked
    #[must_use]
    pub const fn liked(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Discrete gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No active touch; offset is 0
    Idle,
    /// An accepted horizontal drag; offset tracks the raw delta 1:1
    Dragging,
    /// Released past the threshold; exit animation in progress
    Committing(SwipeDirection),
    /// Exit animation finished; decision already produced
    Settled(SwipeDirection),
}

/// What a release resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Drag passed the threshold; exit animation should play
    Commit(SwipeDirection),
    /// Drag fell short; card springs back, nothing is recorded
    SnapBack,
    /// No drag was in progress
    Ignored,
}

/// Per-card swipe gesture state machine
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    phase: GesturePhase,
    offset: f32,
    screen_width: f32,
}

impl SwipeGesture {
    /// Create a machine for a surface of the given width
    #[must_use]
    pub const fn new(screen_width: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            offset: 0.0,
            screen_width,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Current horizontal offset in surface units
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// A finger landed on the card; returns whether the touch is accepted
    ///
    /// Touches during the exit animation are ignored until the card settles.
    /// A touch on a settled machine rolls it over to the next card first.
    pub fn touch_start(&mut self) -> bool {
        match self.phase {
            GesturePhase::Idle | GesturePhase::Dragging => true,
            GesturePhase::Settled(_) => {
                self.next_card();
                true
            }
            GesturePhase::Committing(_) => false,
        }
    }

    /// Cumulative drag deltas since touch start
    ///
    /// From `Idle`, the drag is accepted only once it clears the deadzone
    /// horizontally AND is more horizontal than vertical; a vertical-leaning
    /// movement stays with the card content's own scrolling. Once dragging,
    /// the offset mirrors `dx` exactly so rotation and overlay opacity can
    /// be derived as pure functions of it.
    pub fn drag_move(&mut self, dx: f32, dy: f32) {
        match self.phase {
            GesturePhase::Idle => {
                if dx.abs() > DRAG_DEADZONE && dx.abs() > dy.abs() {
                    self.phase = GesturePhase::Dragging;
                    self.offset = dx;
                }
            }
            GesturePhase::Dragging => {
                self.offset = dx;
            }
            GesturePhase::Committing(_) | GesturePhase::Settled(_) => {}
        }
    }

    /// The finger lifted
    ///
    /// Strict inequality: a release exactly at the threshold snaps back.
    pub fn release(&mut self) -> ReleaseOutcome {
        match self.phase {
            GesturePhase::Dragging => {
                if self.offset > SWIPE_THRESHOLD {
                    self.phase = GesturePhase::Committing(SwipeDirection::Right);
                    ReleaseOutcome::Commit(SwipeDirection::Right)
                } else if self.offset < -SWIPE_THRESHOLD {
                    self.phase = GesturePhase::Committing(SwipeDirection::Left);
                    ReleaseOutcome::Commit(SwipeDirection::Left)
                } else {
                    self.phase = GesturePhase::Idle;
                    self.offset = 0.0;
                    ReleaseOutcome::SnapBack
                }
            }
            GesturePhase::Idle
            | GesturePhase::Committing(_)
            | GesturePhase::Settled(_) => ReleaseOutcome::Ignored,
        }
    }

    /// Offset the exit animation should end at, while committing
    #[must_use]
    pub fn exit_target(&self) -> Option<f32> {
        match self.phase {
            GesturePhase::Committing(SwipeDirection::Right) => {
                Some(self.screen_width + EXIT_OVERSHOOT)
            }
            GesturePhase::Committing(SwipeDirection::Left) => {
                Some(-(self.screen_width + EXIT_OVERSHOOT))
            }
            _ => None,
        }
    }

    /// Fixed duration of the exit animation
    #[must_use]
    pub const fn exit_duration() -> Duration {
        Duration::from_millis(EXIT_ANIMATION_MS)
    }

    /// The exit animation finished; produce the decision exactly once
    ///
    /// Returns the committed direction on the `Committing -> Settled`
    /// transition and `None` on every other call, so a duplicate animation
    /// callback can never double-report a swipe. The offset resets for the
    /// next card.
    pub fn exit_complete(&mut self) -> Option<SwipeDirection> {
        if let GesturePhase::Committing(direction) = self.phase {
            self.phase = GesturePhase::Settled(direction);
            self.offset = 0.0;
            Some(direction)
        } else {
            None
        }
    }

    /// Roll a settled machine over to the next card
    pub fn next_card(&mut self) {
        if matches!(self.phase, GesturePhase::Settled(_)) {
            self.phase = GesturePhase::Idle;
            self.offset = 0.0;
        }
    }
}

/// Card rotation in degrees as a pure function of the drag offset
///
/// Linear from 0° at rest to ±30° at ±1.5 screen widths, clamped.
#[must_use]
pub fn rotation_degrees(offset: f32, screen_width: f32) -> f32 {
    let range = screen_width * ROTATION_RANGE_FACTOR;
    if range <= 0.0 {
        return 0.0;
    }
    (offset / range).clamp(-1.0, 1.0) * ROTATION_MAX_DEGREES
}

/// Like-overlay opacity: 0 at rest, 1 at the commit threshold, clamped
#[must_use]
pub fn like_opacity(offset: f32) -> f32 {
    (offset / SWIPE_THRESHOLD).clamp(0.0, 1.0)
}

/// Nope-overlay opacity: mirror image of [`like_opacity`]
#[must_use]
pub fn nope_opacity(offset: f32) -> f32 {
    (-offset / SWIPE_THRESHOLD).clamp(0.0, 1.0)
}

// ABOUTME: Swipe commit protocol coordinator
// ABOUTME: Ties a committed gesture to the liked set, report client, and feed cursor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

//! # Swipe Commit Protocol
//!
//! The coordinator runs the strictly-ordered sequence a committed swipe
//! requires:
//!
//! 1. if liked, the recipe joins the liked set synchronously;
//! 2. the swipe report is issued fire-and-forget (failures are logged,
//!    never retried, never block the UI);
//! 3. only after the report is issued does the feed cursor advance, so
//!    prefetch triggering can never race ahead of the swipe being recorded.
//!
//! The acted-upon recipe is resolved from CURRENT feed state at commit time
//! and carried by id from that point on. The list can shift between gesture
//! start and animation completion (a prefetch may land mid-animation);
//! resolving late and pinning the id guarantees the report names the card
//! the user actually saw.

use std::sync::Arc;

use tracing::{debug, warn};

use plateswipe_providers::{SwipeRecord, SwipeReportClient};

use crate::device::device_id;
use crate::feed::FeedEngine;
use crate::gesture::{SwipeDirection, SwipeGesture};
use crate::liked::LikedRecipes;

/// Runs the commit protocol for settled swipes
#[derive(Clone)]
pub struct SwipeCoordinator {
    feed: FeedEngine,
    liked: LikedRecipes,
    reporter: Arc<dyn SwipeReportClient>,
}

impl SwipeCoordinator {
    /// Create a coordinator over the given collaborators
    #[must_use]
    pub const fn new(
        feed: FeedEngine,
        liked: LikedRecipes,
        reporter: Arc<dyn SwipeReportClient>,
    ) -> Self {
        Self {
            feed,
            liked,
            reporter,
        }
    }

    /// Commit a decision against the current card
    ///
    /// Returns the id of the recipe the decision applied to, or `None` when
    /// the feed is exhausted and no card is showing.
    pub async fn commit(&self, direction: SwipeDirection) -> Option<i64> {
        // Resolve the card from current state, not from anything captured
        // at gesture start.
        let recipe = self.feed.snapshot().await.current_recipe().cloned()?;
        let recipe_id = recipe.id;
        let liked = direction.liked();
        debug!(recipe_id, liked, "committing swipe");

        if liked {
            self.liked.add(recipe).await;
        }

        let record = SwipeRecord {
            device_id: device_id().to_owned(),
            recipe_id,
            liked,
        };
        let reporter = Arc::clone(&self.reporter);
        // Issued before the cursor advances; completion is not awaited.
        tokio::spawn(async move {
            if let Err(e) = reporter.record_swipe(&record).await {
                warn!("failed to record swipe for recipe {recipe_id}: {e}");
            }
        });

        self.feed.advance().await;
        Some(recipe_id)
    }

    /// Finish a card's exit animation and commit its decision
    ///
    /// Convenience wiring for the rendering layer: forwards the
    /// exactly-once decision out of [`SwipeGesture::exit_complete`] into
    /// [`Self::commit`]. A call on a machine that is not committing does
    /// nothing.
    pub async fn settle(&self, gesture: &mut SwipeGesture) -> Option<i64> {
        let direction = gesture.exit_complete()?;
        self.commit(direction).await
    }
}

// ABOUTME: Memoized per-device identity used as an opaque parameter to backend calls
// ABOUTME: Singleton pattern; embedders may inject a platform id before first use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Plateswipe

use std::sync::OnceLock;

use uuid::Uuid;

/// Process-wide device identity
static DEVICE_ID: OnceLock<String> = OnceLock::new();

/// Inject the platform-provided device identity
///
/// Must be called before the first [`device_id`] call to take effect; later
/// calls are ignored. Embedders that have a vendor or OS identity call this
/// at startup. Returns `false` if an id was already resolved.
pub fn initialize_device_id(id: impl Into<String>) -> bool {
    DEVICE_ID.set(id.into()).is_ok()
}

/// Get the device identity, memoized once per process lifetime
///
/// Falls back to a random UUID when no platform id was injected; the value
/// is stable for the rest of the process either way.
pub fn device_id() -> &'static str {
    DEVICE_ID.get_or_init(|| format!("anon-{}", Uuid::new_v4()))
}

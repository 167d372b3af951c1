//! Application configuration.
//!
//! Centralized configuration for the ideation frontend.
//! In development, these are hardcoded. In production, they could be
//! injected at build time.

/// Backend API base URL.
///
/// All requests carry the session cookie (`credentials: include`).
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "Ideation Portal";

/// How long a toast stays visible (milliseconds).
pub const TOAST_DURATION_MS: u32 = 4000;

/// Maximum toasts shown at once; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;

/// Icon cloud sphere radius (pixels).
pub const CLOUD_RADIUS: f32 = 120.0;

/// Idle rotation speed of the icon cloud (radians per frame).
pub const CLOUD_IDLE_SPEED: f32 = 0.003;

/// Rotation speed per unit of pointer offset from the cloud center (radians per frame).
pub const CLOUD_POINTER_GAIN: f32 = 0.02;

/// Animation frame interval for the icon cloud (milliseconds).
pub const CLOUD_FRAME_MS: u32 = 16;

//! Color constants for the Holocron palette.
//!
//! Dark archive aesthetic: deep space backgrounds, gold for special cards,
//! violet for limited editions.

#![allow(dead_code)]

// === SPACE (Backgrounds) ===
pub const SPACE_BLACK: &str = "#0b0c10";
pub const SPACE_PANEL: &str = "#13151c";
pub const SPACE_BORDER: &str = "#23263a";

// === SABER BLUE (Links, Actions) ===
pub const SABER: &str = "#4aa8ff";
pub const SABER_GLOW: &str = "rgba(74, 168, 255, 0.3)";

// === GOLD (Special Cards, Titles) ===
pub const GOLD: &str = "#e3b341";
pub const GOLD_GLOW: &str = "rgba(227, 179, 65, 0.35)";

// === VIOLET (Limited Edition Cards) ===
pub const VIOLET: &str = "#b687f0";
pub const VIOLET_GLOW: &str = "rgba(182, 135, 240, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f3f5";
pub const TEXT_SECONDARY: &str = "rgba(242, 243, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(242, 243, 245, 0.5)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#4caf7d";
pub const DANGER: &str = "#ff4d6a";
pub const WARNING: &str = "#ffa23e";
pub const INFO: &str = "#5f8fff";

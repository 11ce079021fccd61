//! Color constants for the portfolio theme.
//!
//! Dark studio palette with one warm accent.

#![allow(dead_code)]

// === Backgrounds ===
pub const INK_BLACK: &str = "#0c0d10";
pub const INK_PANEL: &str = "#14161b";
pub const INK_BORDER: &str = "#23262e";

// === ACCENT (calls to action, active states) ===
pub const AMBER: &str = "#f5a524";
pub const AMBER_GLOW: &str = "rgba(245, 165, 36, 0.35)";

// === SECONDARY ACCENT (links, progress fills) ===
pub const TEAL: &str = "#2dd4bf";
pub const TEAL_GLOW: &str = "rgba(45, 212, 191, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f2f2f2";
pub const TEXT_SECONDARY: &str = "rgba(242, 242, 242, 0.7)";
pub const TEXT_MUTED: &str = "rgba(242, 242, 242, 0.45)";

// === SEMANTIC ===
pub const DANGER: &str = "#ff4d6d";
pub const SUCCESS: &str = "#4ade80";

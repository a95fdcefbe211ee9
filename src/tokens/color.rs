//! Color palette constants.
//!
//! Hex values for the palette the class-based presets draw from, for
//! callers emitting inline styles or custom CSS instead of utility classes.

// Slate ramp

pub const SLATE_50: &str = "#f8fafc";
pub const SLATE_100: &str = "#f1f5f9";
pub const SLATE_200: &str = "#e2e8f0";
pub const SLATE_300: &str = "#cbd5e1";
pub const SLATE_400: &str = "#94a3b8";
pub const SLATE_500: &str = "#64748b";
pub const SLATE_600: &str = "#475569";
pub const SLATE_700: &str = "#334155";
pub const SLATE_800: &str = "#1e293b";
pub const SLATE_900: &str = "#0f172a";

// Gray ramp

pub const GRAY_50: &str = "#f9fafb";
pub const GRAY_100: &str = "#f3f4f6";
pub const GRAY_200: &str = "#e5e7eb";
pub const GRAY_300: &str = "#d1d5db";
pub const GRAY_400: &str = "#9ca3af";
pub const GRAY_500: &str = "#6b7280";
pub const GRAY_600: &str = "#4b5563";
pub const GRAY_700: &str = "#374151";
pub const GRAY_800: &str = "#1f2937";
pub const GRAY_900: &str = "#111827";

// Blue ramp

pub const BLUE_50: &str = "#eff6ff";
pub const BLUE_100: &str = "#dbeafe";
pub const BLUE_500: &str = "#3b82f6";
pub const BLUE_600: &str = "#2563eb";
pub const BLUE_700: &str = "#1d4ed8";

// Green ramp

pub const GREEN_50: &str = "#f0fdf4";
pub const GREEN_100: &str = "#dcfce7";
pub const GREEN_500: &str = "#22c55e";
pub const GREEN_600: &str = "#16a34a";
pub const GREEN_700: &str = "#15803d";

// Amber ramp

pub const AMBER_50: &str = "#fffbeb";
pub const AMBER_100: &str = "#fef3c7";
pub const AMBER_500: &str = "#f59e0b";
pub const AMBER_600: &str = "#d97706";
pub const AMBER_700: &str = "#b45309";

// Red ramp

pub const RED_50: &str = "#fef2f2";
pub const RED_100: &str = "#fee2e2";
pub const RED_500: &str = "#ef4444";
pub const RED_600: &str = "#dc2626";
pub const RED_700: &str = "#b91c1c";

// Semantic aliases

/// Primary interactive color (buttons, focus rings, links).
pub const PRIMARY: &str = BLUE_600;

/// Positive feedback (success alerts and badges).
pub const SUCCESS: &str = GREEN_600;

/// Cautionary feedback.
pub const WARNING: &str = AMBER_500;

/// Destructive actions and error states.
pub const DANGER: &str = RED_600;

/// Default body text.
pub const TEXT: &str = GRAY_900;

/// Secondary and placeholder text.
pub const TEXT_MUTED: &str = GRAY_500;

/// Default surface behind components.
pub const SURFACE: &str = "#ffffff";

/// Default component border.
pub const BORDER: &str = GRAY_200;

//! Type scale, weights and line heights.

/// System font stack used by the presets.
pub const FONT_SANS: &str =
    "ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif";

/// Monospace stack for code spans.
pub const FONT_MONO: &str =
    "ui-monospace, SFMono-Regular, Menlo, Consolas, 'Liberation Mono', monospace";

// Font sizes

/// 12px - badges, captions.
pub const TEXT_XS: &str = "0.75rem";

/// 14px - buttons, inputs, dense UI.
pub const TEXT_SM: &str = "0.875rem";

/// 16px - body text.
pub const TEXT_BASE: &str = "1rem";

/// 18px.
pub const TEXT_LG: &str = "1.125rem";

/// 20px.
pub const TEXT_XL: &str = "1.25rem";

/// 24px - section headings.
pub const TEXT_2XL: &str = "1.5rem";

/// 30px.
pub const TEXT_3XL: &str = "1.875rem";

/// 36px - page titles.
pub const TEXT_4XL: &str = "2.25rem";

// Font weights

pub const WEIGHT_NORMAL: &str = "400";
pub const WEIGHT_MEDIUM: &str = "500";
pub const WEIGHT_SEMIBOLD: &str = "600";
pub const WEIGHT_BOLD: &str = "700";

// Line heights

/// Headings.
pub const LEADING_TIGHT: &str = "1.25";

/// Body copy.
pub const LEADING_NORMAL: &str = "1.5";

/// Long-form reading.
pub const LEADING_RELAXED: &str = "1.625";

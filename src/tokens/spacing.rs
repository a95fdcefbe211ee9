//! Spacing and radius constants (4px base scale).
//!
//! Values are rem strings ready for inline styles or custom CSS. The class
//! presets encode the same scale through utility names like `px-4`.

/// No spacing.
pub const SPACE_0: &str = "0";

/// 1px hairline.
pub const SPACE_PX: &str = "1px";

/// 4px - tight icon gaps.
pub const SPACE_1: &str = "0.25rem";

/// 8px - gaps within a component.
pub const SPACE_2: &str = "0.5rem";

/// 12px - form field margins.
pub const SPACE_3: &str = "0.75rem";

/// 16px - standard component padding.
pub const SPACE_4: &str = "1rem";

/// 20px.
pub const SPACE_5: &str = "1.25rem";

/// 24px - section padding.
pub const SPACE_6: &str = "1.5rem";

/// 32px - between major sections.
pub const SPACE_8: &str = "2rem";

/// 40px.
pub const SPACE_10: &str = "2.5rem";

/// 48px.
pub const SPACE_12: &str = "3rem";

/// 64px - hero sections.
pub const SPACE_16: &str = "4rem";

// Border radius values

/// 2px - subtle rounding.
pub const RADIUS_SM: &str = "0.125rem";

/// 4px - small controls.
pub const RADIUS_DEFAULT: &str = "0.25rem";

/// 6px - inputs and buttons.
pub const RADIUS_MD: &str = "0.375rem";

/// 8px - buttons and inputs in the presets.
pub const RADIUS_LG: &str = "0.5rem";

/// 12px - cards.
pub const RADIUS_XL: &str = "0.75rem";

/// 16px - large cards and dialogs.
pub const RADIUS_2XL: &str = "1rem";

/// Pills and circular elements.
pub const RADIUS_FULL: &str = "9999px";

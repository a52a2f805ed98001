//! Checklist placement relative to the password input.

/// Bounding box of the reference element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Inline style for the floating checklist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingStyle {
    pub top: f32,
    pub left: f32,
    pub width: f32,
}

impl FloatingStyle {
    /// Renders the value of a `style` attribute.
    pub fn to_inline_css(&self) -> String {
        format!(
            "position: absolute; top: {}px; left: {}px; width: {}px",
            self.top, self.left, self.width
        )
    }
}

/// Positions a floating element against its reference element.
pub trait Positioner {
    fn place(&self, reference: &Rect) -> FloatingStyle;
}

/// Anchors the floating element under the reference, same width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BelowReference {
    pub offset: f32,
}

impl BelowReference {
    pub const DEFAULT_OFFSET: f32 = 8.0;
}

impl Default for BelowReference {
    fn default() -> Self {
        Self {
            offset: Self::DEFAULT_OFFSET,
        }
    }
}

impl Positioner for BelowReference {
    fn place(&self, reference: &Rect) -> FloatingStyle {
        FloatingStyle {
            top: reference.bottom() + self.offset,
            left: reference.x,
            width: reference.width,
        }
    }
}

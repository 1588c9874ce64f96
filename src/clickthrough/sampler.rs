use super::classifier::{is_visible, VisualSignals};

/// Viewport coordinates of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point-query capability of the rendering engine.
pub trait HitTester {
    type Element;

    /// Every element under `point`, topmost first. Empty outside the document.
    fn hit_test_stack(&self, point: Point) -> Vec<Self::Element>;

    fn visual_signals(&self, element: &Self::Element) -> VisualSignals;
}

/// Reduce the hit stack under `point` to "is the pointer over content".
pub fn is_over_content<H: HitTester + ?Sized>(hit_tester: &H, point: Point) -> bool {
    hit_tester
        .hit_test_stack(point)
        .iter()
        .any(|element| is_visible(&hit_tester.visual_signals(element)))
}

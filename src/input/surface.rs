/// Where the target surface sits in the coordinate space raw pointer
/// events are reported in.
///
/// Browsers report `clientX`/`clientY` relative to the viewport, so the web
/// adapter asks the canvas for its bounding rect on every move. Window
/// systems that already report surface-local positions use
/// [`SurfaceOffset::ZERO`].
pub trait SurfaceGeometry {
    /// Surface origin `(left, top)` in raw pointer coordinates.
    fn origin(&self) -> (f32, f32);
}

/// A fixed surface origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceOffset {
    /// Horizontal origin.
    pub x: f32,
    /// Vertical origin.
    pub y: f32,
}

impl SurfaceOffset {
    /// Origin at `(0, 0)`: raw positions are already surface-local.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Offset at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl SurfaceGeometry for SurfaceOffset {
    fn origin(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Convert a raw pointer position into surface-local coordinates.
#[must_use]
pub fn to_surface_local(
    geometry: &impl SurfaceGeometry,
    x: f32,
    y: f32,
) -> (f32, f32) {
    let (left, top) = geometry.origin();
    (x - left, y - top)
}

/// Shape variant tag.
///
/// Selects drawing semantics for the renderer and fixes the per-kind
/// segment budget. Never changes after a shape is constructed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Arc,
    Rectangle,
    Spiral,
    Star,
    Triangle,
}

impl ShapeKind {
    /// Maximum number of components (independently colorable segments) a
    /// shape of this kind can be composed of.
    #[inline]
    pub const fn max_components(self) -> usize {
        match self {
            ShapeKind::Arc => 10,
            ShapeKind::Rectangle => 4,
            ShapeKind::Spiral => 20,
            ShapeKind::Star => 6,
            ShapeKind::Triangle => 2,
        }
    }
}

use rand::Rng;

use crate::interpolators::{AlphaInterpolator, ColorInterpolator, ShapeInterpolator};
use crate::paint::{Color, Palette};

use super::ShapeKind;

/// Upper bound of the raw random draw in
/// [`FlashShape::generate_random_component_colors`]. The draw is reduced
/// into the pool with `%`, which softens (but does not remove) modulo bias
/// unless `300 % pool.len() == 0`.
const COLOR_DRAW_BOUND: usize = 300;

/// One drawable flash shape instance.
///
/// A configuration record, not a process: the only derived-data operation
/// is the random per-segment color assignment. Renderers read the kind,
/// offsets, colors, and interpolators; nothing here draws.
#[derive(Debug, Clone)]
pub struct FlashShape {
    kind: ShapeKind,
    x_offset: i32,
    y_offset: i32,
    color_interpolator: Option<ColorInterpolator>,
    alpha_interpolator: Option<AlphaInterpolator>,
    shape_interpolator: Option<ShapeInterpolator>,
    allow_multicolored_components: bool,
    component_color_pool: Vec<Color>,
    component_colors: Vec<Color>,
}

impl FlashShape {
    pub fn new(kind: ShapeKind) -> Self {
        let pool: Vec<Color> = Palette::DEFAULT.colors().to_vec();
        Self {
            kind,
            x_offset: 0,
            y_offset: 0,
            color_interpolator: None,
            alpha_interpolator: None,
            shape_interpolator: None,
            allow_multicolored_components: false,
            // The initial assignment is a copy of the pool, not a
            // `max_components()`-sized array. Renderers index with
            // `segment % colors.len()`, so a shape read before the first
            // randomization still draws.
            component_colors: pool.clone(),
            component_color_pool: pool,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Segment budget for this shape's kind.
    #[inline]
    pub fn max_components(&self) -> usize {
        self.kind.max_components()
    }

    #[inline]
    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    #[inline]
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    pub fn set_x_offset(&mut self, x_offset: i32) {
        self.x_offset = x_offset;
    }

    pub fn set_y_offset(&mut self, y_offset: i32) {
        self.y_offset = y_offset;
    }

    pub fn set_offsets(&mut self, x_offset: i32, y_offset: i32) {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
    }

    #[inline]
    pub fn component_colors(&self) -> &[Color] {
        &self.component_colors
    }

    /// Overrides the per-segment color assignment. Segment `i` is drawn
    /// with `colors[i % colors.len()]`, so an array shorter than the
    /// segment count cycles.
    pub fn set_component_colors(&mut self, colors: Vec<Color>) {
        self.component_colors = colors;
    }

    #[inline]
    pub fn component_color_pool(&self) -> &[Color] {
        &self.component_color_pool
    }

    /// Replaces the candidate pool for random color assignment. An empty
    /// pool is not an error: the default palette is restored instead, so
    /// the pool is never empty. Already-assigned `component_colors` are
    /// left untouched.
    pub fn set_component_color_pool(&mut self, pool: &[Color]) {
        if pool.is_empty() {
            log::debug!("empty component color pool, reverting to default palette");
            self.component_color_pool = Palette::DEFAULT.colors().to_vec();
        } else {
            self.component_color_pool = pool.to_vec();
        }
    }

    #[inline]
    pub fn allow_multicolored_components(&self) -> bool {
        self.allow_multicolored_components
    }

    /// Advisory flag for the renderer: when false, per-segment colors are
    /// ignored and one uniform color is used for the whole shape.
    pub fn set_allow_multicolored_components(&mut self, allow: bool) {
        self.allow_multicolored_components = allow;
    }

    /// Fills `component_colors` with exactly `max_components()` entries
    /// sampled from the pool, `colors[i]` coloring segment `i`.
    ///
    /// The RNG is injected so callers control seeding; pass
    /// `rand::thread_rng()` outside of tests.
    pub fn generate_random_component_colors<R: Rng>(&mut self, rng: &mut R) {
        let pool = &self.component_color_pool;
        self.component_colors = (0..self.kind.max_components())
            .map(|_| pool[rng.gen_range(0..COLOR_DRAW_BOUND) % pool.len()])
            .collect();
    }

    #[inline]
    pub fn color_interpolator(&self) -> Option<&ColorInterpolator> {
        self.color_interpolator.as_ref()
    }

    #[inline]
    pub fn color_interpolator_mut(&mut self) -> Option<&mut ColorInterpolator> {
        self.color_interpolator.as_mut()
    }

    pub fn set_color_interpolator(&mut self, interpolator: ColorInterpolator) {
        self.color_interpolator = Some(interpolator);
    }

    #[inline]
    pub fn alpha_interpolator(&self) -> Option<&AlphaInterpolator> {
        self.alpha_interpolator.as_ref()
    }

    #[inline]
    pub fn alpha_interpolator_mut(&mut self) -> Option<&mut AlphaInterpolator> {
        self.alpha_interpolator.as_mut()
    }

    pub fn set_alpha_interpolator(&mut self, interpolator: AlphaInterpolator) {
        self.alpha_interpolator = Some(interpolator);
    }

    /// Kind-specific interpolator (angular sweep for arcs, triangle growth
    /// for triangles, and so on), if one has been attached.
    #[inline]
    pub fn shape_interpolator(&self) -> Option<&ShapeInterpolator> {
        self.shape_interpolator.as_ref()
    }

    #[inline]
    pub fn shape_interpolator_mut(&mut self) -> Option<&mut ShapeInterpolator> {
        self.shape_interpolator.as_mut()
    }

    pub fn set_shape_interpolator(&mut self, interpolator: ShapeInterpolator) {
        self.shape_interpolator = Some(interpolator);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_shape_defaults() {
        let shape = FlashShape::new(ShapeKind::Arc);
        assert_eq!(shape.kind(), ShapeKind::Arc);
        assert_eq!(shape.x_offset(), 0);
        assert_eq!(shape.y_offset(), 0);
        assert!(!shape.allow_multicolored_components());
        assert!(shape.color_interpolator().is_none());
        assert!(shape.alpha_interpolator().is_none());
        assert!(shape.shape_interpolator().is_none());
        assert_eq!(shape.component_color_pool(), Palette::DEFAULT.colors());
    }

    #[test]
    fn initial_colors_are_pool_sized_not_component_sized() {
        // Known quirk: before the first randomization, component_colors is
        // a copy of the pool (5 entries), not max_components (10).
        let shape = FlashShape::new(ShapeKind::Arc);
        assert_eq!(shape.component_colors(), shape.component_color_pool());
        assert_ne!(shape.component_colors().len(), shape.max_components());
    }

    #[test]
    fn offsets_are_independent() {
        let mut shape = FlashShape::new(ShapeKind::Star);
        shape.set_x_offset(12);
        assert_eq!(shape.x_offset(), 12);
        assert_eq!(shape.y_offset(), 0);

        shape.set_offsets(-3, 44);
        assert_eq!(shape.x_offset(), -3);
        assert_eq!(shape.y_offset(), 44);
        assert_eq!(shape.component_color_pool(), Palette::DEFAULT.colors());
        assert_eq!(shape.kind(), ShapeKind::Star);
    }

    // ── color pool ────────────────────────────────────────────────────────

    #[test]
    fn empty_pool_reverts_to_default_palette() {
        let mut shape = FlashShape::new(ShapeKind::Spiral);
        shape.set_component_color_pool(&[Color::RED, Color::GREEN]);
        assert_eq!(shape.component_color_pool(), &[Color::RED, Color::GREEN]);

        shape.set_component_color_pool(&[]);
        assert_eq!(shape.component_color_pool(), Palette::DEFAULT.colors());
    }

    #[test]
    fn non_empty_pool_is_taken_verbatim() {
        let mut shape = FlashShape::new(ShapeKind::Triangle);
        let pool = [Color::BLUE, Color::RED, Color::GREEN];
        shape.set_component_color_pool(&pool);
        assert_eq!(shape.component_color_pool(), &pool);
    }

    // ── random generation ─────────────────────────────────────────────────

    #[test]
    fn generated_colors_fill_the_component_budget_from_the_pool() {
        let mut shape = FlashShape::new(ShapeKind::Arc);
        let mut rng = StdRng::seed_from_u64(7);
        shape.generate_random_component_colors(&mut rng);

        assert_eq!(shape.component_colors().len(), 10);
        for color in shape.component_colors() {
            assert!(Palette::DEFAULT.colors().contains(color));
        }
    }

    #[test]
    fn single_color_pool_yields_uniform_assignment() {
        let mut shape = FlashShape::new(ShapeKind::Arc);
        let only = Color::from_argb_u32(0xFFAA_BBCC);
        shape.set_component_color_pool(&[only]);

        let mut rng = StdRng::seed_from_u64(99);
        shape.generate_random_component_colors(&mut rng);

        assert_eq!(shape.component_colors().len(), 10);
        assert!(shape.component_colors().iter().all(|c| *c == only));
    }

    #[test]
    fn generation_is_deterministic_for_a_fixed_seed() {
        let mut first = FlashShape::new(ShapeKind::Spiral);
        let mut second = FlashShape::new(ShapeKind::Spiral);

        let mut rng = StdRng::seed_from_u64(1234);
        first.generate_random_component_colors(&mut rng);
        let mut rng = StdRng::seed_from_u64(1234);
        second.generate_random_component_colors(&mut rng);

        assert_eq!(first.component_colors(), second.component_colors());
    }

    #[test]
    fn generation_respects_each_kind_budget() {
        for kind in [
            ShapeKind::Arc,
            ShapeKind::Rectangle,
            ShapeKind::Spiral,
            ShapeKind::Star,
            ShapeKind::Triangle,
        ] {
            let mut shape = FlashShape::new(kind);
            let mut rng = StdRng::seed_from_u64(5);
            shape.generate_random_component_colors(&mut rng);
            assert_eq!(shape.component_colors().len(), kind.max_components());
        }
    }

    // ── direct override ───────────────────────────────────────────────────

    #[test]
    fn explicit_colors_replace_the_assignment() {
        let mut shape = FlashShape::new(ShapeKind::Rectangle);
        shape.set_component_colors(vec![Color::RED]);
        assert_eq!(shape.component_colors(), &[Color::RED]);
        // Pool is untouched by a direct override.
        assert_eq!(shape.component_color_pool(), Palette::DEFAULT.colors());
    }
}

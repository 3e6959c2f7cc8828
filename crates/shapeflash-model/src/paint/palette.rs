use super::Color;

// Cool blues with a magenta accent.
const PALETTE_ONE: [Color; 5] = [
    Color::from_argb_u32(0xFF01_1638),
    Color::from_argb_u32(0xFFAA_0082),
    Color::from_argb_u32(0xFF00_50E5),
    Color::from_argb_u32(0xFF00_6FB5),
    Color::from_argb_u32(0xFF00_6EA5),
];

// Warm sunset tones.
const PALETTE_TWO: [Color; 5] = [
    Color::from_argb_u32(0xFF93_1621),
    Color::from_argb_u32(0xFFB9_1372),
    Color::from_argb_u32(0xFFF2_5C54),
    Color::from_argb_u32(0xFFF4_A259),
    Color::from_argb_u32(0xFFF7_B32B),
];

// Muted teals.
const PALETTE_THREE: [Color; 5] = [
    Color::from_argb_u32(0xFF0B_3C49),
    Color::from_argb_u32(0xFF16_697A),
    Color::from_argb_u32(0xFF48_9FB5),
    Color::from_argb_u32(0xFF82_C0CC),
    Color::from_argb_u32(0xFFED_E7E3),
];

/// Named, process-wide constant color palettes.
///
/// Each palette is a non-empty, fixed-order table of opaque packed ARGB
/// colors. [`Palette::DEFAULT`] is the pool every
/// [`FlashShape`](crate::shapes::FlashShape) starts with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Palette {
    One,
    Two,
    Three,
}

impl Palette {
    pub const DEFAULT: Palette = Palette::One;

    #[inline]
    pub const fn colors(self) -> &'static [Color] {
        match self {
            Palette::One => &PALETTE_ONE,
            Palette::Two => &PALETTE_TWO,
            Palette::Three => &PALETTE_THREE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_values() {
        let colors = Palette::DEFAULT.colors();
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].argb(), 0xFF01_1638);
        assert_eq!(colors[1].argb(), 0xFFAA_0082);
        assert_eq!(colors[2].argb(), 0xFF00_50E5);
        assert_eq!(colors[3].argb(), 0xFF00_6FB5);
        assert_eq!(colors[4].argb(), 0xFF00_6EA5);
    }

    #[test]
    fn all_palettes_are_non_empty_and_opaque() {
        for palette in [Palette::One, Palette::Two, Palette::Three] {
            let colors = palette.colors();
            assert!(!colors.is_empty());
            assert!(colors.iter().all(|c| c.is_opaque()));
        }
    }
}

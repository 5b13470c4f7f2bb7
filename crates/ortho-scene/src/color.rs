//! Fill colors for scene polygons.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
pub const RED: Rgba = Rgba::opaque(255, 0, 0);
pub const GREEN: Rgba = Rgba::opaque(0, 128, 0);
pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
pub const ALICE_BLUE: Rgba = Rgba::opaque(240, 248, 255);
pub const DIM_GRAY: Rgba = Rgba::opaque(105, 105, 105);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_sets_full_alpha() {
        assert_eq!(Rgba::opaque(1, 2, 3).a, 255);
    }
}

//! Map-layer color triple.
//!
//! The dashboard's rendering layers take per-feature colors as plain
//! `[r, g, b]` integer arrays, no alpha.  `Rgb` is the typed form of that
//! triple; [`Rgb::as_array`] hands it back in wire order.

/// An opaque 8-bit-per-channel RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b]` in the order map layers expect.
    #[inline]
    pub const fn as_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Rgb {
    /// Lowercase CSS hex form, e.g. `#ff8000`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

use std::fmt;

// ---------------------------------------------------------------------------
// Xyz – raw tristimulus triple
// ---------------------------------------------------------------------------

/// CIE XYZ tristimulus values exactly as read from the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Normalization denominator `X + Y + Z`.
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    /// Project onto the chromaticity plane.
    ///
    /// Returns `None` when the sum is zero, negative or not finite, since
    /// the division would otherwise yield NaN or infinity.
    pub fn chromaticity(&self) -> Option<Chromaticity> {
        let sum = self.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return None;
        }
        Some(Chromaticity {
            x: self.x / sum,
            y: self.y / sum,
        })
    }
}

// ---------------------------------------------------------------------------
// Chromaticity – normalized (x, y)
// ---------------------------------------------------------------------------

/// Luminance-free chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Chromaticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// WavelengthSample – one row of the dataset
// ---------------------------------------------------------------------------

/// A single sampled wavelength with its tristimulus values and derived
/// chromaticity. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthSample {
    /// Wavelength in nanometres.
    pub wavelength: f64,
    pub xyz: Xyz,
    pub chromaticity: Chromaticity,
}

impl WavelengthSample {
    /// Build a sample, or `None` if `xyz` has no defined chromaticity.
    pub fn new(wavelength: f64, xyz: Xyz) -> Option<Self> {
        let chromaticity = xyz.chromaticity()?;
        Some(Self {
            wavelength,
            xyz,
            chromaticity,
        })
    }
}

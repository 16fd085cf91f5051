/// Data layer: the sample model and the CSV loader.
///
/// Architecture:
/// ```text
///  CIE_cc_1931_2deg.csv   (wavelength,X,Y,Z, no header)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Vec<WavelengthSample>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ WavelengthSample  │  wavelength, XYZ, derived (x, y)
///   └──────────────────┘
/// ```

pub mod loader;
pub mod model;

use std::io::Write;

use crate::data::model::WavelengthSample;
use crate::error::TableResult;

// ---------------------------------------------------------------------------
// Fixed header text
// ---------------------------------------------------------------------------

const PREAMBLE: &str = "\
// CIE 1931 Wavelength Table
#pragma once

#include <promeki/ciepoint.h>

namespace promeki {

struct CIEWavelength {
\tdouble        wavelength;
\tCIEPoint::XYZ xyz;
\tCIEPoint      xy;
};

static const CIEWavelength cieWavelengthTable[] = {
";

const EPILOGUE: &str = "\
};

} // namespace promeki
";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Write the complete C++ header declaring `cieWavelengthTable`.
///
/// Entries appear in the order of `samples`. The output depends only on
/// the sample values, so identical input always renders identical bytes.
pub fn write_table<W: Write>(out: &mut W, samples: &[WavelengthSample]) -> TableResult<()> {
    out.write_all(PREAMBLE.as_bytes())?;
    for sample in samples {
        writeln!(out, "\t{}", format_entry(sample))?;
    }
    out.write_all(EPILOGUE.as_bytes())?;
    Ok(())
}

/// One array entry, `{ W, { X, Y, Z }, { x, y } },`, without indentation.
///
/// The wavelength gets one decimal place, everything else six.
pub fn format_entry(sample: &WavelengthSample) -> String {
    let xyz = &sample.xyz;
    let xy = &sample.chromaticity;
    format!(
        "{{ {:.1}, {{ {:.6}, {:.6}, {:.6} }}, {{ {:.6}, {:.6} }} }},",
        sample.wavelength, xyz.x, xyz.y, xyz.z, xy.x, xy.y
    )
}

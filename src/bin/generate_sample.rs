use anyhow::{Context, Result};
use serde::Serialize;

/// Same name the generator looks for by default.
const OUTPUT_PATH: &str = "CIE_cc_1931_2deg.csv";

const LAMBDA_START: u32 = 360;
const LAMBDA_END: u32 = 830;

/// One `wavelength,X,Y,Z` record.
#[derive(Debug, Serialize)]
struct Row {
    wavelength: f64,
    x: f64,
    y: f64,
    z: f64,
}

// Multi-lobe piecewise Gaussian fit of the CIE 1931 2° observer, from
// "Simple Analytic Approximations to the CIE XYZ Color Matching Functions"
// (Wyman, Sloan, Shirley).

fn lobe(lambda: f64, mu: f64, below: f64, above: f64) -> f64 {
    let t = (lambda - mu) * if lambda < mu { below } else { above };
    (-0.5 * t * t).exp()
}

fn x_bar(lambda: f64) -> f64 {
    0.362 * lobe(lambda, 442.0, 0.0624, 0.0374) + 1.056 * lobe(lambda, 599.8, 0.0264, 0.0323)
        - 0.065 * lobe(lambda, 501.1, 0.0490, 0.0382)
}

fn y_bar(lambda: f64) -> f64 {
    0.821 * lobe(lambda, 568.8, 0.0213, 0.0247) + 0.286 * lobe(lambda, 530.9, 0.0613, 0.0322)
}

fn z_bar(lambda: f64) -> f64 {
    1.217 * lobe(lambda, 437.0, 0.0845, 0.0278) + 0.681 * lobe(lambda, 459.0, 0.0385, 0.0725)
}

fn main() -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut rows = 0;
    for nm in LAMBDA_START..=LAMBDA_END {
        let lambda = f64::from(nm);
        writer
            .serialize(Row {
                wavelength: lambda,
                x: x_bar(lambda),
                y: y_bar(lambda),
                z: z_bar(lambda),
            })
            .with_context(|| format!("writing {nm} nm"))?;
        rows += 1;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} wavelengths ({LAMBDA_START}-{LAMBDA_END} nm) to {OUTPUT_PATH}");
    Ok(())
}

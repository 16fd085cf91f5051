mod config;
mod data;
mod error;
mod table;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use config::Config;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::debug!("{config:?}");

    let samples = data::loader::load_csv(&config.input, config.strict)
        .with_context(|| format!("loading {}", config.input.display()))?;

    if let (Some(first), Some(last)) = (samples.first(), samples.last()) {
        log::debug!(
            "Spectral locus from {} nm {} to {} nm {}",
            first.wavelength,
            first.chromaticity,
            last.wavelength,
            last.chromaticity
        );
    }

    // Nothing reaches stdout until every row has parsed.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    table::write_table(&mut out, &samples).context("writing table")?;
    out.flush().context("flushing table")?;

    Ok(())
}

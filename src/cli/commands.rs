//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. Each command imports a
//! clip, applies one core operation, and writes the result.

use std::fs;
use std::path::Path;

use log::info;

use crate::engine::{self, EditParams, EditSession};
use crate::error::Result;

/// Print clip metadata.
pub fn info(input: &Path) -> Result<()> {
    let clip = engine::import_wav(input)?;

    println!("File:        {}", input.display());
    println!("Channels:    {}", clip.channels());
    println!("Sample rate: {} Hz", clip.sample_rate());
    println!("Frames:      {}", clip.frames());
    println!("Duration:    {:.3} s", clip.duration_secs());
    println!("Peak:        {:.4}", clip.peak());

    Ok(())
}

/// Render an edited copy of a clip and write it out.
pub fn render(input: &Path, output: &Path, params: &EditParams) -> Result<()> {
    info!("rendering {} -> {}", input.display(), output.display());

    let clip = engine::import_wav(input)?;
    let rendered = engine::render(&clip, params)?;
    engine::export_wav(&rendered, output)?;

    println!(
        "Rendered {} frames at {} Hz to {}",
        rendered.frames(),
        rendered.sample_rate(),
        output.display()
    );

    Ok(())
}

/// Load edit parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<EditParams> {
    let text = fs::read_to_string(path)?;
    let params: EditParams = serde_json::from_str(&text)?;
    params.validate()?;
    Ok(params)
}

/// Peak-normalize a clip file.
pub fn normalize(input: &Path, output: &Path) -> Result<()> {
    info!("normalizing {} -> {}", input.display(), output.display());

    let mut session = EditSession::new(engine::import_wav(input)?);
    session.normalize();
    engine::export_wav(session.clip(), output)?;

    println!(
        "Normalized to peak {:.4}: {}",
        session.clip().peak(),
        output.display()
    );

    Ok(())
}

/// Reverse a clip file.
pub fn reverse(input: &Path, output: &Path) -> Result<()> {
    info!("reversing {} -> {}", input.display(), output.display());

    let mut session = EditSession::new(engine::import_wav(input)?);
    session.reverse();
    engine::export_wav(session.clip(), output)?;

    println!("Reversed: {}", output.display());

    Ok(())
}

/// Crush a clip file to a lower bit depth.
pub fn crush(input: &Path, output: &Path, bits: u32) -> Result<()> {
    info!(
        "crushing {} to {} bits -> {}",
        input.display(),
        bits,
        output.display()
    );

    let mut session = EditSession::new(engine::import_wav(input)?);
    session.crush(bits)?;
    engine::export_wav(session.clip(), output)?;

    println!("Crushed to {} bits: {}", bits, output.display());

    Ok(())
}

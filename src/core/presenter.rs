use crate::core::BreedRecord;
use crate::utils::error::Result;
use std::io::Write;

pub fn render_breed_profile(breed: &BreedRecord) -> String {
    let mut out = format!(
        "=== {} ===\nOrigin: {}\nTemperament: {}\nLife Span: {} years\nWeight: {} lbs\n",
        breed.name, breed.origin, breed.temperament, breed.life_span, breed.weight.imperial,
    );
    if let Some(url) = &breed.wikipedia_url {
        out.push_str(&format!("Learn more: {}\n", url));
    }
    out
}

/// Writes the profile block for `breed` to `out` (stdout in the binary).
pub fn display_breed_profile<W: Write>(breed: &BreedRecord, out: &mut W) -> Result<()> {
    out.write_all(render_breed_profile(breed).as_bytes())?;
    out.flush()?;
    Ok(())
}

//! Startup banner
//!
//! Echoes the logo asset verbatim when it can be read; a missing or
//! unreadable asset is not an error and just means the plain greeting.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

/// Default location of the logo asset, relative to the working directory
pub const LOGO_ASSET: &str = "assets/logo.txt";

/// Greeting used when the logo asset is unavailable
pub const DEFAULT_GREETING: &str = "Welcome to Kata!";

/// Print the startup banner
pub fn show<W: Write>(out: &mut W, asset: &Path) -> Result<()> {
    match std::fs::read_to_string(asset) {
        Ok(logo) => write!(out, "{logo}")?,
        Err(err) => {
            tracing::debug!("No logo asset at {asset:?}: {err}");
            writeln!(out, "{DEFAULT_GREETING}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_asset_falls_back_to_greeting() {
        let dir = tempdir().unwrap();
        let mut out = Vec::new();

        show(&mut out, &dir.path().join("nope.txt")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Welcome to Kata!\n");
    }

    #[test]
    fn asset_is_echoed_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.txt");
        std::fs::write(&path, "| KATA |\n").unwrap();

        let mut out = Vec::new();
        show(&mut out, &path).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "| KATA |\n");
    }
}

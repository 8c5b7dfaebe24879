//! Discovery of connected instruments from `spotread -h`.
//!
//! The help text (printed on stderr) lists instruments between the
//! `-c listno` option and the `-t` option:
//!
//! ```text
//!  -c listno            Set communication port from the following list (default 1)
//!     1 = '/dev/ttyUSB0 (X-Rite i1 DisplayPro, ColorMunki Display)'
//!  -t                   Use transmission measurement mode
//! ```

use std::collections::BTreeMap;
use std::process::Command;

use crate::error::{ProbeError, Result};

const LISTING_START: &str = "-c listno";
const LISTING_END: &str = "-t";
const NO_PORTS: &str = "** No ports found **";

/// Instrument port number to instrument name.
pub type ProbeListing = BTreeMap<u32, String>;

/// Run `<command> -h` and parse the instrument listing from its stderr.
pub fn list_probes(command: &str) -> Result<ProbeListing> {
    let output = Command::new(command)
        .arg("-h")
        .output()
        .map_err(|source| ProbeError::Spawn {
            command: command.to_string(),
            source,
        })?;
    // spotread exits non-zero after printing usage.
    tracing::debug!(status = ?output.status, "{command} -h finished");
    parse_probe_listing(&String::from_utf8_lossy(&output.stderr))
}

/// Parse the instrument listing out of spotread's usage text.
pub fn parse_probe_listing(help: &str) -> Result<ProbeListing> {
    let mut in_listing = false;
    let mut entries = Vec::new();
    for line in help.lines().map(str::trim) {
        if line.starts_with(LISTING_START) {
            in_listing = true;
        } else if line.starts_with(LISTING_END) {
            in_listing = false;
        } else if in_listing && !line.is_empty() {
            entries.push(line);
        }
    }

    if entries == [NO_PORTS] {
        return Ok(ProbeListing::new());
    }
    entries.into_iter().map(parse_entry).collect()
}

/// Parse `N = '<port> (<name>)'`.
fn parse_entry(line: &str) -> Result<(u32, String)> {
    let malformed = || ProbeError::MalformedListing(line.to_string());

    let (number, quoted) = line.split_once(" = '").ok_or_else(malformed)?;
    let number = number.trim().parse().map_err(|_| malformed())?;
    let (_port, name) = quoted.split_once(" (").ok_or_else(malformed)?;
    let name = name.strip_suffix(")'").ok_or_else(malformed)?;
    Ok((number, name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELP_WITH_PROBES: &str = "\
Read Print Spot values, Version 1.3.2
usage: spotread [-options] [logfile]
 -v                   Verbose mode
 -c listno            Set communication port from the following list (default 1)
    1 = '/dev/ttyUSB0 (X-Rite i1 DisplayPro, ColorMunki Display)'
    2 = '/dev/bus/usb/003/004 (Datacolor Spyder3)'
 -t                   Use transmission measurement mode
 -e                   Use emissive measurement mode (absolute results)
";

    const HELP_WITHOUT_PROBES: &str = "\
 -c listno            Set communication port from the following list (default 1)
    ** No ports found **
 -t                   Use transmission measurement mode
";

    #[test]
    fn test_listing_maps_port_numbers_to_names() {
        let probes = parse_probe_listing(HELP_WITH_PROBES).unwrap();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[&1], "X-Rite i1 DisplayPro, ColorMunki Display");
        assert_eq!(probes[&2], "Datacolor Spyder3");
    }

    #[test]
    fn test_no_ports_is_empty_listing() {
        assert!(parse_probe_listing(HELP_WITHOUT_PROBES).unwrap().is_empty());
    }

    #[test]
    fn test_missing_section_is_empty_listing() {
        assert!(parse_probe_listing("usage: spotread\n").unwrap().is_empty());
    }

    #[test]
    fn test_garbage_entry_is_rejected() {
        let help = " -c listno  ports\n    this is not an entry\n -t  other\n";
        assert!(matches!(
            parse_probe_listing(help),
            Err(ProbeError::MalformedListing(line)) if line == "this is not an entry"
        ));
    }

    #[test]
    fn test_missing_command_fails_to_spawn() {
        let err = list_probes("/nonexistent/colourstuff/spotread").unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
    }
}

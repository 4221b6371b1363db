//! Regenerate-and-compare against committed fixtures.

use log::{info, warn};

use super::{FixtureError, Suite};

/// Differing lines reported before the diff is cut short.
const MAX_REPORTED: usize = 20;

/// Regenerate `suite` and compare it byte for byte with `committed`.
pub fn verify(suite: Suite, committed: &str) -> Result<(), FixtureError> {
    let generated = suite.generate()?;
    if generated == committed {
        info!("suite '{}' matches {}", suite.name(), suite.default_path());
        return Ok(());
    }
    warn!("suite '{}' differs from {}", suite.name(), suite.default_path());
    Err(FixtureError::Mismatch { suite: suite.name(), diff: line_diff(committed, &generated) })
}

/// Line-by-line report in `diff`'s normal format (`NcN`, `<`, `---`, `>`).
///
/// Lines are paired by position; a length difference shows up as added or
/// deleted lines at the end. Empty when the inputs are equal.
pub fn line_diff(expected: &str, actual: &str) -> String {
    let old: Vec<&str> = expected.lines().collect();
    let new: Vec<&str> = actual.lines().collect();
    let mut out = String::new();
    let mut reported = 0;

    for i in 0..old.len().max(new.len()) {
        let (o, n) = (old.get(i), new.get(i));
        if o == n {
            continue;
        }
        if reported == MAX_REPORTED {
            out.push_str("... further differences omitted\n");
            break;
        }
        reported += 1;
        let line = i + 1;
        let hunk = match (o, n) {
            (Some(o), Some(n)) => format!("{line}c{line}\n< {o}\n---\n> {n}\n"),
            (Some(o), None) => format!("{line}d{}\n< {o}\n", new.len()),
            (None, Some(n)) => format!("{}a{line}\n> {n}\n", old.len()),
            (None, None) => continue,
        };
        out.push_str(&hunk);
    }

    if out.is_empty() && expected != actual {
        // only line endings or a trailing newline differ
        out.push_str("\\ No newline at end of file\n");
    }
    out
}

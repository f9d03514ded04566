//! Splits raw puzzle text into shape blocks and region lines
//!
//! Shape blocks start with a `<index>:` header followed by `#`/`.` rows. The
//! first line that parses as a region switches the reader to regions for the
//! rest of the input.

use std::collections::BTreeMap;

use crate::spatial::RegionSpec;

/// Shape blocks and region lines separated from one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleInput {
    /// Trimmed, non-empty shape rows keyed by header index
    pub shapes: BTreeMap<usize, Vec<String>>,
    /// Trimmed, non-empty region lines in input order
    pub regions: Vec<String>,
}

impl PuzzleInput {
    /// Split puzzle text
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Split pre-split lines
    ///
    /// Rows before the first shape header are dropped. A repeated header
    /// starts its block afresh.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = Self::default();
        let mut current_shape = None;
        let mut reading_shapes = true;

        for raw in lines {
            let line = raw.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if reading_shapes && RegionSpec::parse(line).is_ok() {
                reading_shapes = false;
            }

            if !reading_shapes {
                input.regions.push(line.to_string());
            } else if let Some(index) = shape_header(line) {
                input.shapes.insert(index, Vec::new());
                current_shape = Some(index);
            } else if let Some(rows) = current_shape.and_then(|index| input.shapes.get_mut(&index)) {
                rows.push(line.to_string());
            }
        }

        input
    }
}

/// Index of a `<digits>:` shape header line
pub fn shape_header(line: &str) -> Option<usize> {
    let digits = line.trim().strip_suffix(':')?.trim_end();
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

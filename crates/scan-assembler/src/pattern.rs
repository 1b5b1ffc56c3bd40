//! Filename patterns mapping grid positions to sample files.
//!
//! Patterns use printf-style integer conversions, e.g.
//! `SAMPLE_3162099_%d_%d.dmp` or `scan/%03d/%03d.bin`. The first conversion
//! receives the column (x), the second the row (y).

use scan_common::{GridPosition, ScanError, ScanResult};
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Integer {
        zero_pad: bool,
        left_align: bool,
        width: usize,
    },
}

/// A parsed filename pattern with exactly two integer placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    source: String,
    segments: Vec<Segment>,
}

impl FilePattern {
    /// Parse a pattern, validating its placeholders.
    pub fn parse(pattern: &str) -> ScanResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }

            let mut zero_pad = false;
            let mut left_align = false;
            while let Some(&flag) = chars.peek() {
                match flag {
                    '0' => zero_pad = true,
                    '-' => left_align = true,
                    _ => break,
                }
                chars.next();
            }

            let mut width = 0usize;
            while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                width = width
                    .checked_mul(10)
                    .and_then(|w| w.checked_add(digit as usize))
                    .ok_or_else(|| {
                        ScanError::InvalidPattern(format!("field width too large in '{}'", pattern))
                    })?;
                chars.next();
            }

            // Length modifiers carry no meaning for our unsigned values
            while matches!(chars.peek(), Some('l' | 'h' | 'z')) {
                chars.next();
            }

            match chars.next() {
                Some('d' | 'i' | 'u') => {}
                Some(other) => {
                    return Err(ScanError::InvalidPattern(format!(
                        "unsupported conversion '%{}' in '{}'",
                        other, pattern
                    )))
                }
                None => {
                    return Err(ScanError::InvalidPattern(format!(
                        "dangling '%' at end of '{}'",
                        pattern
                    )))
                }
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Integer {
                // '-' overrides '0', as in printf
                zero_pad: zero_pad && !left_align,
                left_align,
                width,
            });
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let placeholders = segments
            .iter()
            .filter(|s| matches!(s, Segment::Integer { .. }))
            .count();
        if placeholders != 2 {
            return Err(ScanError::InvalidPattern(format!(
                "expected 2 integer placeholders (x, y) in '{}', found {}",
                pattern, placeholders
            )));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Path of the sample file for a grid position.
    pub fn path_for(&self, pos: GridPosition) -> PathBuf {
        let mut values = [pos.x, pos.y].into_iter();
        let mut out = String::with_capacity(self.source.len() + 8);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Integer {
                    zero_pad,
                    left_align,
                    width,
                } => {
                    let value = values.next().unwrap_or_default();
                    let width = *width;
                    // Writing into a String cannot fail
                    let _ = if *left_align {
                        write!(out, "{:<width$}", value)
                    } else if *zero_pad {
                        write!(out, "{:0width$}", value)
                    } else {
                        write!(out, "{:>width$}", value)
                    };
                }
            }
        }

        PathBuf::from(out)
    }
}

impl std::str::FromStr for FilePattern {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FilePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

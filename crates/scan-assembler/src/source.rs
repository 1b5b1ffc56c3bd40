//! Sources of raw sample sequences, one per grid position.

use crate::pattern::FilePattern;
use scan_common::{GridPosition, ScanError, ScanResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// Byte width of one stored sample (native-endian `f32`).
pub const SAMPLE_WIDTH: usize = std::mem::size_of::<f32>();

/// Raw readings recorded at one grid position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSequence {
    pub samples: Vec<f32>,
    /// Bytes consumed from the underlying source
    pub bytes_read: u64,
}

impl SampleSequence {
    pub fn new(samples: Vec<f32>) -> Self {
        let bytes_read = (samples.len() * SAMPLE_WIDTH) as u64;
        Self {
            samples,
            bytes_read,
        }
    }

    /// Decode a buffer of native-endian `f32` samples.
    ///
    /// Returns `None` if the buffer is not a whole number of samples.
    pub fn from_ne_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() % SAMPLE_WIDTH != 0 {
            return None;
        }
        let samples = bytes
            .chunks_exact(SAMPLE_WIDTH)
            .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Some(Self {
            samples,
            bytes_read: bytes.len() as u64,
        })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Loads the sample sequence recorded at a grid position.
///
/// Each position is read exactly once per scan; implementations should not
/// retry on failure.
pub trait SampleSource {
    fn read_samples(&mut self, pos: GridPosition) -> ScanResult<SampleSequence>;
}

/// Reads one file per grid position, named by a [`FilePattern`].
#[derive(Debug, Clone)]
pub struct PatternSource {
    pattern: FilePattern,
}

impl PatternSource {
    pub fn new(pattern: FilePattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &FilePattern {
        &self.pattern
    }

    fn read_file(path: &Path) -> ScanResult<SampleSequence> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        SampleSequence::from_ne_bytes(&bytes).ok_or_else(|| ScanError::MisalignedSize {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
        })
    }
}

impl SampleSource for PatternSource {
    fn read_samples(&mut self, pos: GridPosition) -> ScanResult<SampleSequence> {
        let path = self.pattern.path_for(pos);
        trace!(x = pos.x, y = pos.y, path = %path.display(), "Reading samples");
        Self::read_file(&path)
    }
}

/// In-memory samples keyed by grid position.
///
/// Positions without an entry behave like missing files.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    samples: HashMap<GridPosition, Vec<f32>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the samples for a position, replacing any previous entry.
    pub fn insert(&mut self, pos: GridPosition, samples: Vec<f32>) {
        self.samples.insert(pos, samples);
    }

    /// Builder-style variant of [`MemorySource::insert`].
    pub fn with(mut self, x: usize, y: usize, samples: Vec<f32>) -> Self {
        self.insert(GridPosition::new(x, y), samples);
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleSource for MemorySource {
    fn read_samples(&mut self, pos: GridPosition) -> ScanResult<SampleSequence> {
        self.samples
            .get(&pos)
            .map(|samples| SampleSequence::new(samples.clone()))
            .ok_or(ScanError::MissingSamples { x: pos.x, y: pos.y })
    }
}

impl<S: SampleSource + ?Sized> SampleSource for &mut S {
    fn read_samples(&mut self, pos: GridPosition) -> ScanResult<SampleSequence> {
        (**self).read_samples(pos)
    }
}

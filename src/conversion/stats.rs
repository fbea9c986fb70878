//! Statistics tracking for conversion operations

use crate::conversion::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};

/// Statistics for one or more conversion passes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input corpus size in bytes
    pub input_size_bytes: u64,
    /// Output size in bytes
    pub output_size_bytes: u64,
    /// Records read across all passes
    pub record_count: usize,
    /// Distinct lemmas seen across all passes
    pub lemma_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of corpus files processed
    pub file_count: usize,
    /// Throughput (input bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            record_count: 0,
            lemma_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            throughput_bytes_per_sec: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a single conversion pass
    pub fn for_conversion(metadata: &ConversionMetadata) -> Self {
        Self {
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            record_count: metadata.record_count,
            lemma_count: metadata.lemma_count,
            processing_time_ms: metadata.processing_time_ms,
            file_count: 1,
            throughput_bytes_per_sec: throughput(
                metadata.input_size,
                metadata.processing_time_ms,
            ),
            collected_at: chrono::Utc::now(),
        }
    }

    /// Combine statistics from multiple passes.
    ///
    /// Lemma counts are summed per pass; the same lemma in two files counts
    /// twice because seen-key state is scoped to a single run.
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.record_count += other.record_count;
        self.lemma_count += other.lemma_count;
        self.processing_time_ms += other.processing_time_ms;
        self.file_count += other.file_count;
        self.throughput_bytes_per_sec =
            throughput(self.input_size_bytes, self.processing_time_ms);
        self.collected_at = chrono::Utc::now();
    }
}

fn throughput(input_bytes: u64, elapsed_ms: u64) -> f32 {
    if elapsed_ms == 0 {
        return 0.0;
    }
    (input_bytes as f64 / (elapsed_ms as f64 / 1000.0)) as f32
}

//! Error types for tfevents-logger.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("\"step\" should be a non-negative integer, got {0}")]
    InvalidStep(i64),

    #[error("expected len(bucket_edges) == len(bucket_counts) + 1, got {edges} edges and {counts} counts")]
    BucketCountMismatch { edges: usize, counts: usize },

    #[error("cannot build a histogram from an empty sample sequence")]
    EmptyHistogram,

    #[error("logger has been closed")]
    Closed,

    #[error("default logger already configured")]
    AlreadyConfigured,

    #[error("default logger is not configured; call configure(logdir) or construct a Logger directly")]
    NotConfigured,
}

pub type Result<T> = std::result::Result<T, Error>;

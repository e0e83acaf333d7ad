//! # tfevents-logger
//!
//! An append-only writer for the TensorBoard event-file format. Lets a
//! producer emit time-series scalar, histogram and image measurements that
//! TensorBoard can visualize, without depending on TensorBoard's runtime.
//!
//! ## Main Components
//!
//! * `Logger`: per-run writer that turns name/value/step triples into
//!   framed records (or captures them in memory for tests)
//! * `TagRegistry`: sanitizes arbitrary series names into a stable,
//!   collision-free tag namespace
//! * `RecordWriter`: length-prefixed, checksum-protected framing that
//!   byte-for-byte matches the on-disk format
//! * `masked_crc`: the masked CRC32C variant the format requires
//! * `registry`: optional process-wide default Logger with free-function
//!   shims for the single-writer case
//!
//! ## Quick Start
//!
//! ```no_run
//! use tfevents_logger::{Histogram, Logger};
//!
//! let mut logger = Logger::new("runs/exp-1").unwrap();
//! for step in 0..10 {
//!     logger.log_value("train/loss", 1.0 / (step + 1) as f64, Some(step)).unwrap();
//! }
//! let hist = Histogram::from_samples(&[0.1, 0.4, 0.4, 0.9]).unwrap();
//! logger.log_histogram("train/weights", hist, Some(9)).unwrap();
//! ```
//!
//! Or configure the process-wide default once and log from anywhere:
//!
//! ```no_run
//! tfevents_logger::configure("runs/exp-1", 2.0).unwrap();
//! tfevents_logger::log_value("train/loss", 0.25, Some(0)).unwrap();
//! ```

pub mod clock;
pub mod encoding;
pub mod error;
pub mod logger;
pub mod masked_crc;
pub mod proto;
pub mod record_writer;
pub mod registry;
pub mod summary;
pub mod tag_registry;

pub use encoding::{EventEncoder, ProtobufEncoder};
pub use error::{Error, Result};
pub use logger::{Logger, LoggerBuilder};
pub use masked_crc::masked_crc32c;
pub use record_writer::RecordWriter;
pub use registry::{configure, log_histogram, log_images, log_value, unconfigure};
pub use summary::{EncodedImage, Histogram, Value};
pub use tag_registry::TagRegistry;

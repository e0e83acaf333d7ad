use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, warn};

use crate::clock::WallClock;
use crate::encoding::{EventEncoder, ProtobufEncoder};
use crate::error::{Error, Result};
use crate::proto::{event, Event};
use crate::record_writer::RecordWriter;
use crate::summary::{encode_image, summary_for, Histogram, Value};
use crate::tag_registry::TagRegistry;

/// Version marker carried by the first record of every event file.
const FILE_VERSION: &str = "brain.Event:2";

/// Writes scalar, histogram and image series into one event file.
///
/// A Logger runs in one of two modes, fixed at construction:
///
/// * **persistent** — the default. The log directory is created if absent,
///   an `events.out.tfevents.<unix-time>.<hostname>` file is opened, and a
///   bootstrap record declaring the format version is written immediately.
///   Every logged value becomes one framed record, flushed before the call
///   returns.
/// * **capture** — no I/O at all. Every logged value is appended to an
///   in-memory per-tag history as `(step, value)`, in call order with
///   duplicates retained. Used for deterministic tests.
///
/// Logging calls are synchronous and the file handle is exclusively owned;
/// sharing one Logger across threads requires external synchronization.
///
/// # Examples
///
/// ```
/// use tfevents_logger::{Logger, Value};
///
/// let mut logger = Logger::builder("runs/demo").capture().build().unwrap();
/// logger.log_value("accuracy", 0.875, Some(0)).unwrap();
/// assert_eq!(
///     logger.captured("accuracy").unwrap(),
///     &[(Some(0), Value::Scalar(0.875))]
/// );
/// ```
pub struct Logger {
    logdir: PathBuf,
    flush_secs: f64,
    clock: WallClock,
    encoder: Box<dyn EventEncoder>,
    tags: TagRegistry,
    writer: Option<RecordWriter<BufWriter<File>>>,
    capture: Option<HashMap<String, Vec<(Option<i64>, Value)>>>,
}

/// Configures and constructs a [`Logger`].
pub struct LoggerBuilder {
    logdir: PathBuf,
    flush_secs: f64,
    capture: bool,
    fixed_time: Option<f64>,
    encoder: Option<Box<dyn EventEncoder>>,
}

impl LoggerBuilder {
    /// Advisory flush interval in seconds. Kept for compatibility with the
    /// file format's sibling producers; every record is explicitly flushed
    /// on write regardless.
    pub fn flush_secs(mut self, secs: f64) -> Self {
        self.flush_secs = secs;
        self
    }

    /// Switches the Logger to capture mode: no filesystem I/O, logged
    /// values are recorded in memory instead.
    pub fn capture(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Substitutes a fixed timestamp (float seconds since the Unix epoch)
    /// for the wall clock, making output byte-reproducible.
    pub fn fixed_time(mut self, seconds: f64) -> Self {
        self.fixed_time = Some(seconds);
        self
    }

    /// Replaces the default protobuf record encoder.
    pub fn encoder(mut self, encoder: impl EventEncoder + 'static) -> Self {
        self.encoder = Some(Box::new(encoder));
        self
    }

    /// Builds the Logger. In persistent mode this creates the log
    /// directory, opens the event file and writes the bootstrap record.
    pub fn build(self) -> Result<Logger> {
        let clock = match self.fixed_time {
            Some(seconds) => WallClock::Fixed(seconds),
            None => WallClock::System,
        };
        let mut logger = Logger {
            logdir: self.logdir,
            flush_secs: self.flush_secs,
            clock,
            encoder: self.encoder.unwrap_or_else(|| Box::new(ProtobufEncoder)),
            tags: TagRegistry::new(),
            writer: None,
            capture: None,
        };

        if self.capture {
            logger.capture = Some(HashMap::new());
            return Ok(logger);
        }

        fs::create_dir_all(&logger.logdir)?;
        let path = event_file_path(&logger.logdir, logger.clock.now());
        let file = File::create(&path)?;
        logger.writer = Some(RecordWriter::new(BufWriter::new(file)));
        debug!(path = %path.display(), "created event file");

        logger.write_event(&Event {
            wall_time: logger.clock.now(),
            step: 0,
            what: Some(event::What::FileVersion(FILE_VERSION.to_string())),
        })?;
        Ok(logger)
    }
}

impl Logger {
    /// Starts building a Logger for the given log directory.
    pub fn builder<P: AsRef<Path>>(logdir: P) -> LoggerBuilder {
        LoggerBuilder {
            logdir: logdir.as_ref().to_path_buf(),
            flush_secs: 2.0,
            capture: false,
            fixed_time: None,
            encoder: None,
        }
    }

    /// Opens a persistent Logger with default settings.
    pub fn new<P: AsRef<Path>>(logdir: P) -> Result<Self> {
        Self::builder(logdir).build()
    }

    /// Logs a scalar value for `name` at `step`.
    ///
    /// You can log several different series at one step, but should not log
    /// different values of the same series at the same step (this is not
    /// checked).
    pub fn log_value(&mut self, name: &str, value: f64, step: Option<i64>) -> Result<()> {
        self.log(name, Value::Scalar(value), step)
    }

    /// Logs a distribution for `name` at `step`.
    ///
    /// Build the [`Histogram`] with [`Histogram::from_samples`] for raw
    /// observations or [`Histogram::from_edges`] for precomputed buckets.
    pub fn log_histogram(&mut self, name: &str, histogram: Histogram, step: Option<i64>) -> Result<()> {
        self.log(name, Value::Histogram(histogram), step)
    }

    /// Logs a batch of images for `name` at `step`.
    ///
    /// Each image is PNG-encoded independently and recorded under the
    /// sub-tag `{tag}/{index}` (0-based).
    pub fn log_images(&mut self, name: &str, images: &[DynamicImage], step: Option<i64>) -> Result<()> {
        // Encode before touching the namespace so a codec failure leaves
        // the Logger's state exactly as it was.
        let encoded = images.iter().map(encode_image).collect::<Result<Vec<_>>>()?;
        self.log(name, Value::Images(encoded), step)
    }

    fn log(&mut self, name: &str, value: Value, step: Option<i64>) -> Result<()> {
        if let Some(step) = step {
            if step < 0 {
                return Err(Error::InvalidStep(step));
            }
        }
        let tag = self.tags.ensure_tag(name);

        if let Some(capture) = self.capture.as_mut() {
            capture.entry(tag).or_default().push((step, value));
            return Ok(());
        }

        let event = Event {
            wall_time: self.clock.now(),
            step: step.unwrap_or(0),
            what: Some(event::What::Summary(summary_for(&tag, &value))),
        };
        self.write_event(&event)
    }

    fn write_event(&mut self, event: &Event) -> Result<()> {
        let data = self.encoder.encode(event);
        let writer = self.writer.as_mut().ok_or(Error::Closed)?;
        writer.write_record(&data)?;
        writer.flush()?;
        Ok(())
    }

    /// Flushes the event file. A no-op in capture mode or after `close`.
    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flushes and closes the event file.
    ///
    /// Idempotent: a second call is a no-op, not an error. Logging after
    /// `close` on a persistent Logger fails with [`Error::Closed`].
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    /// The log directory this Logger was constructed with.
    pub fn logdir(&self) -> &Path {
        &self.logdir
    }

    /// The advisory flush interval in seconds.
    pub fn flush_secs(&self) -> f64 {
        self.flush_secs
    }

    /// The recorded history for `tag` in capture mode.
    ///
    /// Returns `None` for persistent Loggers and for tags never logged.
    pub fn captured(&self, tag: &str) -> Option<&[(Option<i64>, Value)]> {
        self.capture.as_ref()?.get(tag).map(Vec::as_slice)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Close on every exit path; failures here have no caller to reach,
        // so they are logged instead of propagated.
        if let Some(mut writer) = self.writer.take() {
            if let Err(err) = writer.flush() {
                warn!("failed to flush event file on drop: {err}");
            }
        }
    }
}

/// `events.out.tfevents.<unix-time-integer>.<host-identifier>`
fn event_file_path(logdir: &Path, now: f64) -> PathBuf {
    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "localhost".to_string());
    logdir.join(format!("events.out.tfevents.{}.{}", now as i64, host))
}

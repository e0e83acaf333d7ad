use std::path::Path;

use image::DynamicImage;
use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::summary::Histogram;

/// Process-wide default Logger.
///
/// A convenience for the common single-writer case: configure once, then
/// call the free functions from anywhere in the process. The lifecycle is
/// explicit — [`configure`] fails if a default Logger already exists, and
/// [`unconfigure`] clears it unconditionally. Multi-writer programs should
/// construct [`Logger`] instances directly instead.

lazy_static! {
    static ref DEFAULT_LOGGER: Mutex<Option<Logger>> = Mutex::new(None);
}

/// Installs the process-wide default Logger, writing to `logdir`.
///
/// # Errors
///
/// [`Error::AlreadyConfigured`] if a default Logger is already installed;
/// any I/O error from opening the event file.
pub fn configure<P: AsRef<Path>>(logdir: P, flush_secs: f64) -> Result<()> {
    let mut slot = DEFAULT_LOGGER.lock();
    if slot.is_some() {
        return Err(Error::AlreadyConfigured);
    }
    *slot = Some(Logger::builder(logdir).flush_secs(flush_secs).build()?);
    Ok(())
}

/// Removes the process-wide default Logger, closing its event file.
///
/// A no-op when none is configured.
pub fn unconfigure() {
    *DEFAULT_LOGGER.lock() = None;
}

fn with_default<R>(f: impl FnOnce(&mut Logger) -> Result<R>) -> Result<R> {
    match DEFAULT_LOGGER.lock().as_mut() {
        Some(logger) => f(logger),
        None => Err(Error::NotConfigured),
    }
}

/// [`Logger::log_value`] on the default Logger.
pub fn log_value(name: &str, value: f64, step: Option<i64>) -> Result<()> {
    with_default(|logger| logger.log_value(name, value, step))
}

/// [`Logger::log_histogram`] on the default Logger.
pub fn log_histogram(name: &str, histogram: Histogram, step: Option<i64>) -> Result<()> {
    with_default(|logger| logger.log_histogram(name, histogram, step))
}

/// [`Logger::log_images`] on the default Logger.
pub fn log_images(name: &str, images: &[DynamicImage], step: Option<i64>) -> Result<()> {
    with_default(|logger| logger.log_images(name, images, step))
}

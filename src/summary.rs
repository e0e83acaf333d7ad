use std::io::Cursor;

use image::{ColorType, DynamicImage, ImageOutputFormat};

use crate::error::{Error, Result};
use crate::proto;

/// Conversion of user-supplied measurements into tagged summary values.
///
/// The value kind is a closed union selected by the logging entry point the
/// caller invoked, never by inspecting the argument's shape at runtime.
/// Scalars carry one value, histograms carry one value, a batch of N images
/// carries N values with `/0`, `/1`, ... sub-tags under one logical name.

/// One logged measurement, as stored in capture mode and as turned into a
/// summary on the persistent path.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Histogram(Histogram),
    Images(Vec<EncodedImage>),
}

/// Distribution statistics plus bucketed counts.
///
/// Build one with [`Histogram::from_samples`] (statistics and automatic
/// binning computed from raw observations) or [`Histogram::from_edges`]
/// (caller supplies the buckets, statistics stay zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub num: f64,
    pub sum: f64,
    pub sum_squares: f64,
    /// Inclusive upper edge of each bucket, in order. The lower edge of the
    /// first bucket is `min` and is not recorded.
    pub bucket_limits: Vec<f64>,
    /// Count per bucket, same order as `bucket_limits`.
    pub bucket_counts: Vec<f64>,
}

impl Histogram {
    /// Builds a histogram from explicit bucket edges and counts.
    ///
    /// `edges` must hold exactly one more element than `counts`; each
    /// `counts[i]` covers the interval `edges[i]..edges[i+1]`. Min and max
    /// are taken as the extrema of the edges; num, sum and sum-of-squares
    /// are left at zero since the raw observations are not available.
    ///
    /// # Errors
    ///
    /// [`Error::BucketCountMismatch`] when the length precondition fails.
    pub fn from_edges(edges: &[f64], counts: &[f64]) -> Result<Self> {
        if edges.len() != counts.len() + 1 {
            return Err(Error::BucketCountMismatch {
                edges: edges.len(),
                counts: counts.len(),
            });
        }
        let min = edges.iter().copied().fold(f64::INFINITY, f64::min);
        let max = edges.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            min,
            max,
            num: 0.0,
            sum: 0.0,
            sum_squares: 0.0,
            bucket_limits: edges[1..].to_vec(),
            bucket_counts: counts.to_vec(),
        })
    }

    /// Builds a histogram from raw observations.
    ///
    /// Min, max, count, sum and sum-of-squares are computed over the
    /// samples. The bin count follows the same rule as numpy's
    /// `bins='auto'`: the larger of the Sturges estimate
    /// (`ceil(log2 n) + 1`) and the Freedman-Diaconis estimate
    /// (bin width `2 * IQR / n^(1/3)`), with uniform edges over
    /// `[min, max]`. When every sample is identical the single bucket is
    /// widened to `[min - 0.5, max + 0.5]`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyHistogram`] when `samples` is empty.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyHistogram);
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut sum_squares = 0.0;
        for &s in samples {
            min = min.min(s);
            max = max.max(s);
            sum += s;
            sum_squares += s * s;
        }

        let edges = auto_bin_edges(samples, min, max);
        let bins = edges.len() - 1;
        let lo = edges[0];
        let span = edges[bins] - lo;
        let mut counts = vec![0.0; bins];
        for &s in samples {
            // Edges are uniform, so the bucket index is a direct scale;
            // the top edge lands in the last bucket.
            let idx = ((s - lo) / span * bins as f64) as usize;
            counts[idx.min(bins - 1)] += 1.0;
        }

        Ok(Self {
            min,
            max,
            num: samples.len() as f64,
            sum,
            sum_squares,
            bucket_limits: edges[1..].to_vec(),
            bucket_counts: counts,
        })
    }

    pub(crate) fn to_proto(&self) -> proto::HistogramProto {
        proto::HistogramProto {
            min: self.min,
            max: self.max,
            num: self.num,
            sum: self.sum,
            sum_squares: self.sum_squares,
            bucket_limit: self.bucket_limits.clone(),
            bucket: self.bucket_counts.clone(),
        }
    }
}

/// Uniform bucket edges over `[min, max]` with an automatic bin count.
fn auto_bin_edges(samples: &[f64], min: f64, max: f64) -> Vec<f64> {
    if min == max {
        return vec![min - 0.5, max + 0.5];
    }
    let n = samples.len() as f64;
    let sturges = n.log2().ceil() as usize + 1;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let iqr = percentile(&sorted, 0.75) - percentile(&sorted, 0.25);
    let fd = if iqr > 0.0 {
        let width = 2.0 * iqr / n.cbrt();
        ((max - min) / width).ceil() as usize
    } else {
        0
    };

    let bins = sturges.max(fd).max(1);
    (0..=bins)
        .map(|i| min + (max - min) * i as f64 / bins as f64)
        .collect()
}

/// Linearly interpolated percentile of a sorted slice, `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if lo + 1 < sorted.len() {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    } else {
        sorted[lo]
    }
}

/// One PNG-encoded image with its recorded dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    /// 1 = grayscale, 2 = grayscale + alpha, 3 = RGB, 4 = RGBA.
    pub colorspace: i32,
    /// PNG bytes.
    pub data: Vec<u8>,
}

impl EncodedImage {
    fn to_proto(&self) -> proto::summary::Image {
        proto::summary::Image {
            height: self.height as i32,
            width: self.width as i32,
            colorspace: self.colorspace,
            encoded_image_string: self.data.clone(),
        }
    }
}

/// Losslessly encodes one image as PNG, recording its dimensions.
pub fn encode_image(image: &DynamicImage) -> Result<EncodedImage> {
    let mut data = Vec::new();
    image.write_to(&mut Cursor::new(&mut data), ImageOutputFormat::Png)?;
    Ok(EncodedImage {
        width: image.width(),
        height: image.height(),
        colorspace: colorspace_of(image.color()),
        data,
    })
}

fn colorspace_of(color: ColorType) -> i32 {
    match color {
        ColorType::L8 | ColorType::L16 => 1,
        ColorType::La8 | ColorType::La16 => 2,
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => 3,
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => 4,
        _ => 3,
    }
}

/// Expands one logged value into its tagged summary entries.
///
/// Scalars and histograms produce a single entry under `tag`; a batch of N
/// images produces N entries tagged `{tag}/0` through `{tag}/{N-1}`.
pub(crate) fn summary_for(tag: &str, value: &Value) -> proto::Summary {
    use proto::summary::value::Value as Payload;

    let values = match value {
        Value::Scalar(v) => vec![proto::summary::Value {
            tag: tag.to_owned(),
            value: Some(Payload::SimpleValue(*v as f32)),
        }],
        Value::Histogram(h) => vec![proto::summary::Value {
            tag: tag.to_owned(),
            value: Some(Payload::Histo(h.to_proto())),
        }],
        Value::Images(images) => images
            .iter()
            .enumerate()
            .map(|(index, image)| proto::summary::Value {
                tag: format!("{tag}/{index}"),
                value: Some(Payload::Image(image.to_proto())),
            })
            .collect(),
    };
    proto::Summary { value: values }
}

//! Decoded pixel storage.

use image::{DynamicImage, GenericImageView, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

/// A decoded image as interleaved 8-bit samples.
///
/// Samples are stored row-major with `channels` consecutive samples per
/// pixel. One to four channels are supported (gray, gray+alpha, RGB, RGBA).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelGrid {
    /// Builds a grid from raw interleaved samples.
    ///
    /// Returns `None` when the channel count is outside 1..=4 or the sample
    /// buffer does not match the geometry.
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Option<Self> {
        if !(1..=4).contains(&channels) {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(channels as usize)?;
        if samples.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Narrows any decoded image to 8 bits per sample, keeping its channel
    /// layout.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let (width, height) = GenericImageView::dimensions(image);
        let (channels, samples) = match image.color().channel_count() {
            1 => (1, image.to_luma8().into_raw()),
            2 => (2, image.to_luma_alpha8().into_raw()),
            3 => (3, image.to_rgb8().into_raw()),
            _ => (4, image.to_rgba8().into_raw()),
        };
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    /// Converts back into an `image` buffer for encoding.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h) = (self.width, self.height);
        let raw = self.samples.clone();
        match self.channels {
            1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
            4 => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
            _ => None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// All samples across all channels.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Samples of a single channel in pixel order.
    pub fn channel_samples(&self, channel: u8) -> impl Iterator<Item = u8> + '_ {
        let stride = self.channels as usize;
        let skip = if channel < self.channels {
            channel as usize
        } else {
            self.samples.len()
        };
        self.samples.iter().skip(skip).step_by(stride).copied()
    }

    /// A same-shape grid with `f` applied to every sample.
    pub fn map_samples<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            samples: self.samples.iter().map(|&s| f(s)).collect(),
        }
    }
}

//! Alpha compositing of the watermark over a source image.
//!
//! The main steps per source image are:
//! - Allocate an RGBA8 canvas with the source's exact dimensions.
//! - Draw the source onto it at (0, 0), covering the full canvas.
//! - Draw the watermark over the same rectangle with standard source-over
//!   compositing, resampling it to the source's dimensions first when its
//!   native dimensions differ.
//!
//! The over operator itself comes from [`image::imageops::overlay`], which
//! blends straight-alpha pixels as
//! `out_rgb = src_rgb * src_a + dst_rgb * dst_a * (1 - src_a)` with
//! `out_a = src_a + dst_a * (1 - src_a)`, watermark as src and the base
//! image as dst.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::{Error, Result};

/// The overlay image, decoded once and shared read-only across the batch.
#[derive(Debug)]
pub struct Watermark {
    image: RgbaImage,
}

impl Watermark {
    /// Decode the watermark from a file.
    ///
    /// This happens before any source file is touched; a watermark that does
    /// not decode aborts the whole run.
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        Ok(Watermark { image })
    }

    /// Create a watermark from an already decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Watermark {
            image: image.into_rgba8(),
        }
    }

    /// Composite the watermark over `source` on a fresh canvas of the
    /// source's dimensions.
    pub fn composite_over(&self, source: &DynamicImage) -> RgbaImage {
        let (width, height) = (source.width(), source.height());
        let mut canvas: RgbaImage = source.to_rgba8();
        if self.image.dimensions() == (width, height) {
            imageops::overlay(&mut canvas, &self.image, 0, 0);
        } else {
            let stretched = imageops::resize(&self.image, width, height, FilterType::Triangle);
            imageops::overlay(&mut canvas, &stretched, 0, 0);
        }
        canvas
    }
}

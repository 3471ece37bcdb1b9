#![allow(dead_code)]
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

/// Write a solid-colored PNG fixture at the given path.
pub fn write_solid_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
    solid(width, height, rgba)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap_or_else(|_| panic!("could not write fixture at {:?}", path));
}

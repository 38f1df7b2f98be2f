//! # Only Aug
//!
//! `only_aug`是一个纯rust的图像增强库，目前提供池化类增强器（平均、最大、最小、中值池化）。
//! 增强器以`(H, W, C)`的[`ndarray::Array3`]作为图像，并能对关键点、多边形、包围盒做与图像一致的
//! 几何变换，便于在训练数据管线中同时增强图像与标注。
//!

pub mod augmentables;
pub mod augmenters;
pub mod errors;
pub mod parameters;
pub mod utils;
pub mod vision;

pub use augmenters::{
    AveragePooling, Augmenter, MaxPooling, MedianPooling, MinPooling, TraitAugmenter,
};
pub use errors::{AugmentError, Result};
pub use parameters::{IntParam, KernelSize};

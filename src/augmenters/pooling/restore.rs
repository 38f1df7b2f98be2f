//! 池化后的尺寸还原：把缩小后的图像按指定插值方式放大回原始高宽。
//! 只改变尺寸，不尝试“撤销”归约。

use crate::errors::{AugmentError, Result};
use crate::utils::traits::element::PoolElement;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};
use ndarray::{Array3, ArrayView3, Axis};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// 还原尺寸时的插值方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// 最近邻，还原后每个块内的像素都等于该块的归约值
    #[default]
    Nearest,
    Linear,
    Cubic,
    Gaussian,
    Lanczos3,
}

impl Interpolation {
    fn filter_type(self) -> FilterType {
        match self {
            Interpolation::Nearest => FilterType::Nearest,
            Interpolation::Linear => FilterType::Triangle,
            Interpolation::Cubic => FilterType::CatmullRom,
            Interpolation::Gaussian => FilterType::Gaussian,
            Interpolation::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// 将图像缩放到`(height, width)`，通道数与元素类型不变
///
/// 最近邻直接按索引取值，结果与输入逐值相同。其余插值方式把每个通道单独交给`image`库缩放：
/// 由于`image`库对`f32`像素会截断到`[0, 1]`，先按通道的最小、最大值归一化，缩放后再映射回原值域
/// （`u32`等宽类型经过`f32`缓冲区会损失精度）。
pub fn resize_image<T: PoolElement>(
    image: ArrayView3<'_, T>,
    height: usize,
    width: usize,
    interpolation: Interpolation,
) -> Result<Array3<T>> {
    let (src_height, src_width, channels) = image.dim();
    if (src_height, src_width) == (height, width) {
        return Ok(image.to_owned());
    }
    if src_height == 0 || src_width == 0 || height == 0 || width == 0 {
        return Err(AugmentError::InvalidInput(format!(
            "缩放的源尺寸({src_height}, {src_width})与目标尺寸({height}, {width})都须大于0"
        )));
    }
    trace!(src_height, src_width, height, width, ?interpolation, "还原图像尺寸");
    if interpolation == Interpolation::Nearest {
        return Ok(resize_nearest(image, height, width));
    }

    let mut resized = Array3::from_elem((height, width, channels), T::min_value());
    for (c, channel) in image.axis_iter(Axis(2)).enumerate() {
        let values: Vec<f64> = channel.iter().map(|v| v.as_f64()).collect();
        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            });
        let mut target = resized.index_axis_mut(Axis(2), c);
        // 常量通道（含全NaN）无需插值
        if hi <= lo {
            let fill = channel.iter().next().copied().unwrap_or_else(T::min_value);
            target.fill(fill);
            continue;
        }

        let normalized: Vec<f32> = values.iter().map(|v| ((v - lo) / (hi - lo)) as f32).collect();
        let buffer: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(src_width as u32, src_height as u32, normalized).ok_or_else(
                || AugmentError::InvalidState("无法由通道数据构造缩放缓冲区".to_string()),
            )?;
        let scaled = imageops::resize(
            &buffer,
            width as u32,
            height as u32,
            interpolation.filter_type(),
        );
        for ((y, x), value) in target.indexed_iter_mut() {
            let v = scaled.get_pixel(x as u32, y as u32).0[0] as f64;
            *value = T::from_f64_clamped(lo + v * (hi - lo));
        }
    }
    Ok(resized)
}

/// 最近邻缩放：目标像素取其中心`(dst + 0.5) * src / dst`所落在的源像素
fn resize_nearest<T: PoolElement>(image: ArrayView3<'_, T>, height: usize, width: usize) -> Array3<T> {
    let (src_height, src_width, channels) = image.dim();
    let source_index = |dst: usize, dst_len: usize, src_len: usize| {
        let index = (2 * dst as u128 + 1) * src_len as u128 / (2 * dst_len as u128);
        (index as usize).min(src_len - 1)
    };
    let rows: Vec<usize> = (0..height).map(|y| source_index(y, height, src_height)).collect();
    let cols: Vec<usize> = (0..width).map(|x| source_index(x, width, src_width)).collect();
    Array3::from_shape_fn((height, width, channels), |(y, x, c)| image[[rows[y], cols[x], c]])
}

//! 可随图像一同增强的几何标注
//!
//! - [`KeypointsOnImage`]: 关键点
//! - [`PolygonsOnImage`]: 多边形
//! - [`BoundingBoxesOnImage`]: 轴对齐包围盒
//!
//! 三者都只暴露“坐标数组 + 所属图像形状”这一契约（[`TraitForCoords`]），
//! 增强器据此做纯线性的坐标变换，不涉及任何像素数据。

mod bbs;
mod kps;
mod polys;


pub use bbs::{BoundingBox, BoundingBoxesOnImage};
pub use kps::{Keypoint, KeypointsOnImage};
pub use polys::{Polygon, PolygonsOnImage};

use crate::errors::{AugmentError, Result};
use ndarray::Array2;

pub trait TraitForCoords: Clone {
    /// 所属图像的形状，形如`(H, W)`或`(H, W, C)`
    fn shape(&self) -> &[usize];

    /// 所有坐标按顺序展开为`N×2`的`(x, y)`数组
    fn to_xy_array(&self) -> Array2<f32>;

    /// 以新坐标（顺序、行数须与`to_xy_array`一致）和新`shape`构造一份同结构的新实例，自身不变
    fn fill_from_xy_array(&self, xy: &Array2<f32>, shape: &[usize]) -> Result<Self>;
}

/// 从标注的`shape`中取出`(H, W)`；维数不足或高宽为0时视为元数据异常
pub fn image_size_of(shape: &[usize]) -> Result<(usize, usize)> {
    if shape.len() < 2 {
        return Err(AugmentError::InvalidState(format!(
            "标注所属图像的shape至少需要2个维度，实际为{shape:?}"
        )));
    }
    let (height, width) = (shape[0], shape[1]);
    if height == 0 || width == 0 {
        return Err(AugmentError::InvalidState(format!(
            "标注所属图像的高和宽须大于0，实际shape为{shape:?}"
        )));
    }
    Ok((height, width))
}

pub(crate) fn check_xy_rows(xy: &Array2<f32>, expected: usize) -> Result<()> {
    if xy.nrows() != expected || xy.ncols() != 2 {
        return Err(AugmentError::InvalidInput(format!(
            "坐标数组形状应为[{expected}, 2]，实际为{:?}",
            xy.shape()
        )));
    }
    Ok(())
}

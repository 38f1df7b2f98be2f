/*
 * @Author       : 老董
 * @Date         : 2026-10-13
 * @Description  : 块归约：将（虚拟）补边后的图像切成互不重叠的`kh×kw`块，
 *                 每块、每通道各自归约为一个值。
 *
 * - 补边不落地：块越过下边、右边的部分按最后一行/列的重复次数加权计入
 * - 求均值、中值时先提升到f64计算，再按元素类型舍入、截断回原类型
 * - 最大、最小值直接在原类型上比较，结果精确
 * - 通道之间互不混合
 */

use super::pad::{BlockExtent, reduced_shape};
use crate::errors::{AugmentError, Result};
use crate::utils::traits::element::PoolElement;
use ndarray::{Array3, ArrayView2, ArrayView3, s};
use serde::{Deserialize, Serialize};

/// 块归约策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reduction {
    Mean,
    Max,
    Min,
    Median,
}

impl Reduction {
    /// 将一个块（单通道、图像内的真实部分）归约为一个值；块为空时返回`None`
    ///
    /// `rows`/`cols`描述块在两个轴上的范围，其中越过图像边缘的部分按边缘复制计入：
    /// 最后一行/列的权重为`1 + replicated`。
    pub fn reduce<T: PoolElement>(
        &self,
        block: ArrayView2<'_, T>,
        rows: &BlockExtent,
        cols: &BlockExtent,
    ) -> Option<T> {
        match self {
            Reduction::Mean => {
                let mut sum = 0.0;
                let mut count: u128 = 0;
                for ((y, x), v) in block.indexed_iter() {
                    let weight = rows.weight(y) * cols.weight(x);
                    sum += weight as f64 * v.as_f64();
                    count += weight;
                }
                (count > 0).then(|| T::from_f64_clamped(sum / count as f64))
            }
            Reduction::Max => block.iter().copied().reduce(|acc, v| if v > acc { v } else { acc }),
            Reduction::Min => block.iter().copied().reduce(|acc, v| if v < acc { v } else { acc }),
            Reduction::Median => {
                let mut weighted: Vec<(f64, u128)> = block
                    .indexed_iter()
                    .map(|((y, x), v)| (v.as_f64(), rows.weight(y) * cols.weight(x)))
                    .collect();
                weighted.sort_by(|a, b| a.0.total_cmp(&b.0));
                let count: u128 = weighted.iter().map(|(_, w)| w).sum();
                if count == 0 {
                    return None;
                }
                let mid = count / 2;
                // 偶数个时取中间两值的平均
                let median = if count % 2 == 0 {
                    (value_at_rank(&weighted, mid - 1)? + value_at_rank(&weighted, mid)?) / 2.0
                } else {
                    value_at_rank(&weighted, mid)?
                };
                Some(T::from_f64_clamped(median))
            }
        }
    }
}

/// 已按值升序排列的加权序列中，第`rank`个（从0起）值
fn value_at_rank(weighted: &[(f64, u128)], rank: u128) -> Option<f64> {
    let mut seen: u128 = 0;
    for (value, weight) in weighted {
        seen += weight;
        if seen > rank {
            return Some(*value);
        }
    }
    None
}

/// 对图像做块归约，输出形状为`(ceil(H/kh), ceil(W/kw), C)`
///
/// 高宽不必是核尺寸的整数倍：不足一块的部分按边缘复制补齐，但不会真的分配补边后的图像，
/// 因此耗时与内存只取决于输入大小，与核尺寸无关。
pub fn reduce_blocks<T: PoolElement>(
    image: ArrayView3<'_, T>,
    kh: usize,
    kw: usize,
    reduction: Reduction,
) -> Result<Array3<T>> {
    let (height, width, channels) = image.dim();
    if kh == 0 || kw == 0 {
        return Err(AugmentError::InvalidInput(format!(
            "块归约的核尺寸须大于0，实际为({kh}, {kw})"
        )));
    }
    if height == 0 || width == 0 {
        return Err(AugmentError::InvalidInput(format!(
            "块归约的输入高宽须大于0，实际为({height}, {width})"
        )));
    }

    let (out_height, out_width) = reduced_shape(height, width, kh, kw);
    let mut values = Vec::with_capacity(out_height * out_width * channels);
    for oy in 0..out_height {
        let rows = BlockExtent::new(oy, kh, height);
        for ox in 0..out_width {
            let cols = BlockExtent::new(ox, kw, width);
            for c in 0..channels {
                let block = image.slice(s![rows.range(), cols.range(), c]);
                let value = reduction.reduce(block, &rows, &cols).ok_or_else(|| {
                    AugmentError::InvalidState(format!("第({oy}, {ox})块在图像内没有像素"))
                })?;
                values.push(value);
            }
        }
    }
    Array3::from_shape_vec((out_height, out_width, channels), values)
        .map_err(|e| AugmentError::InvalidState(format!("块归约结果与形状不符：{e}")))
}

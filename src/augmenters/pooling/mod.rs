/*
 * @Author       : 老董
 * @Date         : 2026-10-13
 * @Description  : 池化类增强器（平均/最大/最小/中值池化）
 *
 * 处理流程：
 * - 图像：采样核尺寸 -> 虚拟补边并块归约 ->（可选）还原尺寸
 * - 标注：采样核尺寸 -> 只按形状推算归约后的高宽 -> 对坐标做线性缩放，
 *         全程不构造任何像素缓冲区
 *
 * 四种增强器只是选择不同`Reduction`的薄封装，逻辑都在`Pooling`里。
 */

mod pad;
mod reduce;
mod restore;

#[cfg(test)]
mod tests;

pub use pad::{BlockExtent, Padding, compute_padding, padded_shape, reduced_shape};
pub use reduce::{Reduction, reduce_blocks};
pub use restore::{Interpolation, resize_image};

use crate::augmentables::{TraitForCoords, image_size_of};
use crate::errors::{AugmentError, Result};
use crate::parameters::KernelSize;
use crate::utils::traits::element::PoolElement;
use ndarray::{Array3, ArrayView3, Axis};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 池化增强器的可序列化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolingConfig {
    pub reduction: Reduction,
    pub kernel_size: KernelSize,
    pub keep_size: bool,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default)]
    pub seed: Option<u64>,
    pub name: String,
}

/// 池化增强的核心实现，由`Reduction`决定块归约方式
#[derive(Debug, Clone)]
pub struct Pooling {
    reduction: Reduction,
    kernel_size: KernelSize,
    keep_size: bool,
    interpolation: Interpolation,
    name: String,
    seed: Option<u64>,
    rng: StdRng,
    /// 为`true`时每次调用都从同一随机状态出发，保证图像与标注采到相同的核尺寸
    deterministic: bool,
}

impl Pooling {
    /// 创建池化增强器，`keep_size`默认为`true`
    pub fn new(reduction: Reduction, kernel_size: impl Into<KernelSize>) -> Result<Self> {
        let kernel_size = kernel_size.into();
        kernel_size.validate()?;
        Ok(Self {
            reduction,
            kernel_size,
            keep_size: true,
            interpolation: Interpolation::default(),
            name: default_name(reduction).to_string(),
            seed: None,
            rng: StdRng::from_entropy(),
            deterministic: false,
        })
    }

    pub fn from_config(config: PoolingConfig) -> Result<Self> {
        let mut pooling = Self::new(config.reduction, config.kernel_size)?;
        pooling.keep_size = config.keep_size;
        pooling.interpolation = config.interpolation;
        pooling.name = config.name;
        if let Some(seed) = config.seed {
            pooling.set_seed(seed);
        }
        Ok(pooling)
    }

    pub fn config(&self) -> PoolingConfig {
        PoolingConfig {
            reduction: self.reduction,
            kernel_size: self.kernel_size.clone(),
            keep_size: self.keep_size,
            interpolation: self.interpolation,
            seed: self.seed,
            name: self.name.clone(),
        }
    }

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓属性↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn kernel_size(&self) -> &KernelSize {
        &self.kernel_size
    }

    pub fn keep_size(&self) -> bool {
        self.keep_size
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// 返回`(kernel_size, keep_size)`，无副作用
    pub fn get_parameters(&self) -> (KernelSize, bool) {
        (self.kernel_size.clone(), self.keep_size)
    }

    pub fn set_keep_size(&mut self, keep_size: bool) {
        self.keep_size = keep_size;
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// 重置随机状态，之后的采样序列完全由`seed`决定
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑属性↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    /// 派生一个确定性副本：其随机状态由本实例的随机流派生（本实例的随机流因此前进一步），
    /// 之后副本的每次调用都从该状态出发
    pub fn to_deterministic(&mut self) -> Self {
        let mut copy = self.clone();
        copy.rng = StdRng::seed_from_u64(self.rng.next_u64());
        copy.deterministic = true;
        copy
    }

    fn draw_kernel_size(&mut self) -> Result<(usize, usize)> {
        let (kh, kw) = if self.deterministic {
            let mut rng = self.rng.clone();
            self.kernel_size.sample(&mut rng)?
        } else {
            self.kernel_size.sample(&mut self.rng)?
        };
        debug!(augmenter = %self.name, kh, kw, "采样池化核尺寸");
        Ok((kh, kw))
    }

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓图像↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    /// 增强单张`(H, W, C)`图像
    pub fn augment_image<T: PoolElement>(&mut self, image: &Array3<T>) -> Result<Array3<T>> {
        check_image(image.view())?;
        let (kh, kw) = self.draw_kernel_size()?;
        self.pool_image(image.view(), kh, kw)
    }

    /// 增强一批图像，每张图像各自采样核尺寸
    pub fn augment_images<T: PoolElement>(&mut self, images: &[Array3<T>]) -> Result<Vec<Array3<T>>> {
        images.iter().map(|image| self.augment_image(image)).collect()
    }

    /// 用给定的核尺寸池化，结果只取决于输入与`(kh, kw)`
    pub fn pool_image<T: PoolElement>(
        &self,
        image: ArrayView3<'_, T>,
        kh: usize,
        kw: usize,
    ) -> Result<Array3<T>> {
        check_image(image)?;
        let (kh, kw) = (kh.max(1), kw.max(1));
        if kh == 1 && kw == 1 {
            return Ok(image.to_owned());
        }

        let (height, width, _) = image.dim();
        let padding = compute_padding(height, width, kh, kw);
        debug!(
            augmenter = %self.name,
            height,
            width,
            pad_bottom = padding.bottom,
            pad_right = padding.right,
            "池化前补边"
        );
        let reduced = reduce_blocks(image, kh, kw, self.reduction)?;

        if self.keep_size {
            resize_image(reduced.view(), height, width, self.interpolation)
        } else {
            Ok(reduced)
        }
    }
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑图像↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

    /*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓标注↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
    /// 增强任意坐标类标注（关键点、多边形、包围盒）
    pub fn augment_coords<A: TraitForCoords>(&mut self, augmentable: &A) -> Result<A> {
        image_size_of(augmentable.shape())?;
        let (kh, kw) = self.draw_kernel_size()?;
        self.pool_coords(augmentable, kh, kw)
    }

    /// 用给定的核尺寸变换标注坐标
    ///
    /// 保持尺寸时，“缩小再放大回原尺寸”在几何上是恒等变换，坐标与`shape`均不变；
    /// 否则`x`乘以`归约后宽/原宽`，`y`乘以`归约后高/原高`，`shape`的高宽随之更新。
    pub fn pool_coords<A: TraitForCoords>(&self, augmentable: &A, kh: usize, kw: usize) -> Result<A> {
        let shape = augmentable.shape();
        let (height, width) = image_size_of(shape)?;
        let (kh, kw) = (kh.max(1), kw.max(1));
        if self.keep_size || (kh == 1 && kw == 1) {
            return Ok(augmentable.clone());
        }

        let (reduced_height, reduced_width) = reduced_shape(height, width, kh, kw);
        let scale_x = reduced_width as f32 / width as f32;
        let scale_y = reduced_height as f32 / height as f32;

        let mut xy = augmentable.to_xy_array();
        xy.column_mut(0).mapv_inplace(|x| x * scale_x);
        xy.column_mut(1).mapv_inplace(|y| y * scale_y);

        let mut new_shape = shape.to_vec();
        new_shape[0] = reduced_height;
        new_shape[1] = reduced_width;
        augmentable.fill_from_xy_array(&xy, &new_shape)
    }
    /*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑标注↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
}

fn default_name(reduction: Reduction) -> &'static str {
    match reduction {
        Reduction::Mean => "AveragePooling",
        Reduction::Max => "MaxPooling",
        Reduction::Min => "MinPooling",
        Reduction::Median => "MedianPooling",
    }
}

fn check_image<T>(image: ArrayView3<'_, T>) -> Result<()> {
    let (height, width, _) = image.dim();
    if height == 0 || width == 0 {
        return Err(AugmentError::InvalidInput(format!(
            "图像的高和宽须大于0，实际形状为{:?}",
            image.shape()
        )));
    }
    if image.len_of(Axis(2)) == 0 {
        return Err(AugmentError::InvalidInput(format!(
            "图像至少需要1个通道，实际形状为{:?}",
            image.shape()
        )));
    }
    Ok(())
}

/// 为四种池化增强器生成薄封装：仅固定`Reduction`，并提供构建器式配置
macro_rules! pooling_augmenter {
    ($(#[$meta:meta])* $name:ident, $reduction:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            pooling: Pooling,
        }

        impl $name {
            /// 创建增强器，`kernel_size`可为单个整数、整数对或随机参数对；`keep_size`默认为`true`
            pub fn new(kernel_size: impl Into<KernelSize>) -> Result<Self> {
                Ok(Self {
                    pooling: Pooling::new($reduction, kernel_size)?,
                })
            }

            /// 是否在池化后把图像缩放回原尺寸
            pub fn keep_size(mut self, keep_size: bool) -> Self {
                self.pooling.set_keep_size(keep_size);
                self
            }

            /// 还原尺寸时使用的插值方式
            pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
                self.pooling.set_interpolation(interpolation);
                self
            }

            /// 设置随机种子
            pub fn seed(mut self, seed: u64) -> Self {
                self.pooling.set_seed(seed);
                self
            }

            /// 由已构造好的`Pooling`包装，调用方须保证其`Reduction`与本类型一致
            pub(crate) fn from_pooling(pooling: Pooling) -> Self {
                debug_assert_eq!(pooling.reduction(), $reduction);
                Self { pooling }
            }

            pub fn with_name(mut self, name: &str) -> Self {
                self.pooling.set_name(name);
                self
            }

            pub fn to_deterministic(&mut self) -> Self {
                Self {
                    pooling: self.pooling.to_deterministic(),
                }
            }
        }

        impl crate::augmenters::TraitAugmenter for $name {
            fn pooling(&self) -> &Pooling {
                &self.pooling
            }

            fn pooling_mut(&mut self) -> &mut Pooling {
                &mut self.pooling
            }
        }
    };
}

pooling_augmenter!(
    /// 平均池化：每块取算术平均（整数类型按四舍六入五成双舍入）
    AveragePooling,
    Reduction::Mean
);
pooling_augmenter!(
    /// 最大池化：每块取最大值
    MaxPooling,
    Reduction::Max
);
pooling_augmenter!(
    /// 最小池化：每块取最小值
    MinPooling,
    Reduction::Min
);
pooling_augmenter!(
    /// 中值池化：每块取中值，偶数个值时取中间两值的平均
    MedianPooling,
    Reduction::Median
);

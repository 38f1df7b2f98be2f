//! 增强器
//!
//! 目前只包含池化类增强器：
//! - [`AveragePooling`]: 平均池化
//! - [`MaxPooling`]: 最大池化
//! - [`MinPooling`]: 最小池化
//! - [`MedianPooling`]: 中值池化
//!
//! # 使用示例
//!
//! ```ignore
//! use only_aug::augmenters::{AveragePooling, TraitAugmenter};
//!
//! let mut aug = AveragePooling::new((3, 2))?.keep_size(false).seed(42);
//! let image_aug = aug.augment_image(&image)?;
//! let kpsoi_aug = aug.augment_keypoints(&kpsoi)?;
//! ```

pub mod pooling;

pub use pooling::{
    AveragePooling, Interpolation, MaxPooling, MedianPooling, MinPooling, Pooling, PoolingConfig,
    Reduction,
};

use crate::augmentables::{BoundingBoxesOnImage, KeypointsOnImage, PolygonsOnImage};
use crate::errors::Result;
use crate::parameters::KernelSize;
use crate::utils::traits::element::PoolElement;
use enum_dispatch::enum_dispatch;
use ndarray::Array3;


#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Augmenter {
    AveragePooling(AveragePooling),
    MaxPooling(MaxPooling),
    MinPooling(MinPooling),
    MedianPooling(MedianPooling),
}

#[enum_dispatch(Augmenter)]
pub trait TraitAugmenter {
    fn pooling(&self) -> &Pooling;

    fn pooling_mut(&mut self) -> &mut Pooling;

    fn name(&self) -> &str {
        self.pooling().name()
    }

    fn augment_image<T: PoolElement>(&mut self, image: &Array3<T>) -> Result<Array3<T>> {
        self.pooling_mut().augment_image(image)
    }

    fn augment_images<T: PoolElement>(&mut self, images: &[Array3<T>]) -> Result<Vec<Array3<T>>> {
        self.pooling_mut().augment_images(images)
    }

    fn augment_keypoints(&mut self, kpsoi: &KeypointsOnImage) -> Result<KeypointsOnImage> {
        self.pooling_mut().augment_coords(kpsoi)
    }

    fn augment_polygons(&mut self, psoi: &PolygonsOnImage) -> Result<PolygonsOnImage> {
        self.pooling_mut().augment_coords(psoi)
    }

    fn augment_bounding_boxes(
        &mut self,
        bbsoi: &BoundingBoxesOnImage,
    ) -> Result<BoundingBoxesOnImage> {
        self.pooling_mut().augment_coords(bbsoi)
    }

    /// 返回`(kernel_size, keep_size)`
    fn get_parameters(&self) -> (KernelSize, bool) {
        self.pooling().get_parameters()
    }
}

impl Augmenter {
    /// 按配置中的`reduction`还原出对应的增强器
    pub fn from_config(config: PoolingConfig) -> Result<Self> {
        let reduction = config.reduction;
        let pooling = Pooling::from_config(config)?;
        Ok(match reduction {
            Reduction::Mean => AveragePooling::from_pooling(pooling).into(),
            Reduction::Max => MaxPooling::from_pooling(pooling).into(),
            Reduction::Min => MinPooling::from_pooling(pooling).into(),
            Reduction::Median => MedianPooling::from_pooling(pooling).into(),
        })
    }

    pub fn config(&self) -> PoolingConfig {
        self.pooling().config()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.config())?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: PoolingConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn to_deterministic(&mut self) -> Self {
        match self {
            Augmenter::AveragePooling(aug) => aug.to_deterministic().into(),
            Augmenter::MaxPooling(aug) => aug.to_deterministic().into(),
            Augmenter::MinPooling(aug) => aug.to_deterministic().into(),
            Augmenter::MedianPooling(aug) => aug.to_deterministic().into(),
        }
    }
}

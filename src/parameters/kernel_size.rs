use super::IntParam;
use crate::errors::{AugmentError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 池化核尺寸：`(高, 宽)`
///
/// `width`为`None`时表示正方形核，即宽直接沿用本次采样得到的高。
/// 采样结果为0与为1等价，都表示该轴不做池化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSize {
    pub height: IntParam,
    pub width: Option<IntParam>,
}

impl KernelSize {
    pub fn new(height: impl Into<IntParam>, width: Option<IntParam>) -> Self {
        Self {
            height: height.into(),
            width,
        }
    }

    /// 高、宽分别在闭区间上均匀采样，如`KernelSize::uniform((2, 4), (5, 6))`
    pub fn uniform(height: (i64, i64), width: (i64, i64)) -> Self {
        Self {
            height: IntParam::DiscreteUniform(height.0, height.1),
            width: Some(IntParam::DiscreteUniform(width.0, width.1)),
        }
    }

    /// 检查核尺寸配置是否合法（任一轴都不能采样出负数）
    pub fn validate(&self) -> Result<()> {
        self.height.validate_non_negative("kernel_size[0]")?;
        if let Some(width) = &self.width {
            width.validate_non_negative("kernel_size[1]")?;
        }
        Ok(())
    }

    /// 采样出本次调用的`(kh, kw)`，先采高再采宽；0会被规整为1
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(usize, usize)> {
        let kh = self.height.sample(rng)?;
        let kw = match &self.width {
            Some(width) => width.sample(rng)?,
            None => kh,
        };
        Ok((to_kernel_extent(kh)?, to_kernel_extent(kw)?))
    }
}

fn to_kernel_extent(value: i64) -> Result<usize> {
    let extent = usize::try_from(value).map_err(|_| {
        AugmentError::InvalidConfig(format!("采样得到的核尺寸{value}不是非负整数"))
    })?;
    Ok(extent.max(1))
}

impl From<i64> for KernelSize {
    fn from(k: i64) -> Self {
        Self::new(k, None)
    }
}

impl From<i32> for KernelSize {
    fn from(k: i32) -> Self {
        Self::new(k, None)
    }
}

impl From<(i64, i64)> for KernelSize {
    fn from((kh, kw): (i64, i64)) -> Self {
        Self::new(kh, Some(kw.into()))
    }
}

impl From<(i32, i32)> for KernelSize {
    fn from((kh, kw): (i32, i32)) -> Self {
        Self::new(kh, Some(kw.into()))
    }
}

impl From<IntParam> for KernelSize {
    fn from(param: IntParam) -> Self {
        Self::new(param, None)
    }
}

impl From<(IntParam, IntParam)> for KernelSize {
    fn from((height, width): (IntParam, IntParam)) -> Self {
        Self::new(height, Some(width))
    }
}

impl From<(IntParam, Option<IntParam>)> for KernelSize {
    fn from((height, width): (IntParam, Option<IntParam>)) -> Self {
        Self::new(height, width)
    }
}

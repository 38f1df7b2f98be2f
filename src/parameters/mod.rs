/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 随机参数：只提供池化核尺寸所需的整数采样能力。
 *                 每次增强调用时，每个轴各采样一次。
 */

use crate::errors::{AugmentError, ComparisonOperator, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

mod kernel_size;
pub use kernel_size::KernelSize;


/// 整数型随机参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntParam {
    /// 固定值
    Deterministic(i64),
    /// 闭区间`[a, b]`上的离散均匀分布
    DiscreteUniform(i64, i64),
    /// 从候选值中等概率抽取一个
    Choice(Vec<i64>),
}

impl IntParam {
    /// 固定值参数时返回其值，否则返回`None`
    pub fn value(&self) -> Option<i64> {
        match self {
            IntParam::Deterministic(v) => Some(*v),
            _ => None,
        }
    }

    /// 检查该参数能否采样出负数；`value_name`仅用于错误信息
    pub fn validate_non_negative(&self, value_name: &str) -> Result<()> {
        match self {
            IntParam::Deterministic(v) => check_non_negative(value_name, *v),
            IntParam::DiscreteUniform(a, b) => {
                check_non_negative(value_name, *a)?;
                if a > b {
                    return Err(AugmentError::InvalidConfig(format!(
                        "{value_name}的取值区间[{a}, {b}]下界大于上界"
                    )));
                }
                Ok(())
            }
            IntParam::Choice(values) => {
                if values.is_empty() {
                    return Err(AugmentError::InvalidConfig(format!(
                        "{value_name}的候选列表不能为空"
                    )));
                }
                values
                    .iter()
                    .try_for_each(|v| check_non_negative(value_name, *v))
            }
        }
    }

    /// 采样一次
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64> {
        match self {
            IntParam::Deterministic(v) => Ok(*v),
            IntParam::DiscreteUniform(a, b) => {
                if a > b {
                    return Err(AugmentError::InvalidConfig(format!(
                        "取值区间[{a}, {b}]下界大于上界"
                    )));
                }
                Ok(rng.gen_range(*a..=*b))
            }
            IntParam::Choice(values) => values.choose(rng).copied().ok_or_else(|| {
                AugmentError::InvalidConfig("候选列表为空，无法采样".to_string())
            }),
        }
    }
}

fn check_non_negative(value_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(AugmentError::value_must_satisfy(
            value_name,
            ComparisonOperator::GreaterOrEqual,
            0,
            value,
        ));
    }
    Ok(())
}

impl From<i64> for IntParam {
    fn from(value: i64) -> Self {
        IntParam::Deterministic(value)
    }
}

impl From<i32> for IntParam {
    fn from(value: i32) -> Self {
        IntParam::Deterministic(value as i64)
    }
}

impl From<Vec<i64>> for IntParam {
    fn from(values: Vec<i64>) -> Self {
        IntParam::Choice(values)
    }
}

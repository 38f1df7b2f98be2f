/*
 * @Author       : 老董
 * @Date         : 2026-10-12
 * @Description  : 增强器的统一错误类型
 */

use thiserror::Error;

/// 本库所有可失败操作的返回类型
pub type Result<T> = std::result::Result<T, AugmentError>;

#[derive(Error, Debug)]
pub enum AugmentError {
    /// 配置非法（如核尺寸为负、取值区间颠倒、候选列表为空等），构造或采样时即报错，绝不静默修正
    #[error("配置错误：{0}")]
    InvalidConfig(String),
    /// 输入数据非法（如图像高或宽为0）
    #[error("输入错误：{0}")]
    InvalidInput(String),
    /// 标注元数据异常（如`shape`维数不足或高宽为0）
    #[error("状态错误：{0}")]
    InvalidState(String),

    #[error("图像读写错误：{0}")]
    Image(#[from] image::ImageError),
    #[error("JSON错误：{0}")]
    Json(#[from] serde_json::Error),
}

// 数字比较用
use std::fmt::{self, Display};

/// 比较运算符，仅用于拼装错误信息
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComparisonOperator {
    GreaterOrEqual,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::GreaterOrEqual => "≥",
        };
        write!(f, "{}", operator_name)
    }
}

impl AugmentError {
    /// 生成形如“`kernel_size`须≥0，实际为-1”的配置错误
    pub(crate) fn value_must_satisfy(
        value_name: &str,
        operator: ComparisonOperator,
        threshold: i64,
        actual: i64,
    ) -> Self {
        AugmentError::InvalidConfig(format!(
            "{value_name}须{operator}{threshold}，实际为{actual}"
        ))
    }
}

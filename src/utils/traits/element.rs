use num_traits::{Bounded, NumCast, ToPrimitive};
use std::fmt::Debug;

/// 可被池化的像素元素类型（无符号整数或浮点数）
///
/// 所有聚合运算都先经`as_f64`提升到`f64`，算完后再经`from_f64_clamped`回到原类型，
/// 因此像`u8`求均值时不会在累加阶段溢出。
pub trait PoolElement: Copy + PartialOrd + NumCast + Bounded + Debug + 'static {
    /// 是否为浮点类型：浮点类型回转时不做舍入
    const IS_FLOAT: bool;

    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(0.0)
    }

    /// 将`f64`转回本类型：整数类型按“四舍六入五成双”舍入，并截断到本类型的可表示范围
    fn from_f64_clamped(value: f64) -> Self {
        let min = Self::min_value().as_f64();
        let max = Self::max_value().as_f64();
        let value = if Self::IS_FLOAT {
            value
        } else {
            value.round_ties_even()
        };
        // NaN只可能来自浮点输入，原样转回即可
        if value.is_nan() {
            return NumCast::from(value).unwrap_or_else(Self::min_value);
        }
        NumCast::from(value.clamp(min, max)).unwrap_or_else(Self::min_value)
    }
}

macro_rules! impl_pool_element {
    ($($ty:ty => $is_float:expr),* $(,)?) => {
        $(
            impl PoolElement for $ty {
                const IS_FLOAT: bool = $is_float;
            }
        )*
    };
}

impl_pool_element! {
    u8 => false,
    u16 => false,
    u32 => false,
    f32 => true,
    f64 => true,
}

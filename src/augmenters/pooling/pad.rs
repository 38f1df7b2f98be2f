//! 池化前的补边：仅在下边、右边按边缘复制补齐，使高宽恰为核尺寸的整数倍
//!
//! 补边是虚拟的，不分配补边后的缓冲区：越过图像边缘的行/列等价于重复最后一行/列，
//! 因此块归约只需读取块在原图内的真实范围，并把多出的部分计为最后一行/列的重复次数。

use std::ops::Range;

/// 下边与右边各需补的行/列数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub bottom: usize,
    pub right: usize,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.bottom == 0 && self.right == 0
    }
}

/// 计算最小补边量：`(k - n % k) % k`；核尺寸≤1的轴不补
pub fn compute_padding(height: usize, width: usize, kh: usize, kw: usize) -> Padding {
    let minimal = |n: usize, k: usize| if k <= 1 { 0 } else { (k - n % k) % k };
    Padding {
        bottom: minimal(height, kh),
        right: minimal(width, kw),
    }
}

/// 只算形状不动像素：补边后的`(高, 宽)`
pub fn padded_shape(height: usize, width: usize, kh: usize, kw: usize) -> (usize, usize) {
    let padding = compute_padding(height, width, kh, kw);
    (height + padding.bottom, width + padding.right)
}

/// 补边并归约后的`(高, 宽)`，即`(ceil(H/kh), ceil(W/kw))`；核尺寸0按1处理
pub fn reduced_shape(height: usize, width: usize, kh: usize, kw: usize) -> (usize, usize) {
    (height.div_ceil(kh.max(1)), width.div_ceil(kw.max(1)))
}

/// 某个块在单个轴上的真实范围
///
/// 块在该轴上共`kernel`个位置，其中`len`个落在图像内（从`start`起），
/// 其余`replicated`个由最后一行/列复制而来。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockExtent {
    pub start: usize,
    pub len: usize,
    pub replicated: usize,
}

impl BlockExtent {
    /// 第`index`个块的范围；调用方须保证`index < ceil(n / kernel)`且`kernel > 0`
    pub fn new(index: usize, kernel: usize, n: usize) -> Self {
        let start = index * kernel;
        let len = kernel.min(n - start);
        Self {
            start,
            len,
            replicated: kernel - len,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// 块内第`offset`行/列在补边后出现的次数
    pub fn weight(&self, offset: usize) -> u128 {
        if offset + 1 == self.len {
            1 + self.replicated as u128
        } else {
            1
        }
    }
}

mod annotations;

use ndarray::Array3;

/// 将单通道的二维图像沿通道轴复制`channels`份
pub(super) fn tile_channels(rows: &[&[u8]], channels: usize) -> Array3<u8> {
    let (height, width) = (rows.len(), rows[0].len());
    Array3::from_shape_fn((height, width, channels), |(y, x, _)| rows[y][x])
}

/// 左块均值为50、右块均值为120的2×4图像
pub(super) fn two_block_image(channels: usize) -> Array3<u8> {
    tile_channels(&[&[48, 49, 116, 124], &[51, 52, 121, 119]], channels)
}

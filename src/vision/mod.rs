/*
 * @Author       : 老董
 * @Date         : 2023-08-30 19:16:48
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-14 10:20:31
 * @Description  : 本模块负责图像文件与`(H, W, C)`数组之间的互相转换，
 *                 便于直接对磁盘上的图像做增强。
 *                 在本模块中，不严谨地说：
 *                 1. 所谓的image/图像是指灰度、灰度+透明、RGB或RGBA格式的8位图像；
 *                 2. “灰度”（图）等同于英文中luma、luminance、grey、gray的概念。
 */

use crate::errors::{AugmentError, Result};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use ndarray::Array3;
use std::path::Path;


pub struct Vision;

impl Vision {
    /// 将本地的图像加载为`(H, W, C)`的`u8`数组，`C`取决于图像自身的通道数（1、2、3或4）
    pub fn load_image(path: impl AsRef<Path>) -> Result<Array3<u8>> {
        let image = image::open(path)?;
        Self::from_dynamic_image(image)
    }

    /// 保存`(H, W, C)`的`u8`数组为图像，格式由扩展名决定
    pub fn save_image(image: &Array3<u8>, path: impl AsRef<Path>) -> Result<()> {
        Self::to_dynamic_image(image)?.save(path)?;
        Ok(())
    }

    pub fn from_dynamic_image(image: DynamicImage) -> Result<Array3<u8>> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let (channels, raw) = match image.color().channel_count() {
            1 => (1, image.into_luma8().into_raw()),
            2 => (2, image.into_luma_alpha8().into_raw()),
            3 => (3, image.into_rgb8().into_raw()),
            _ => (4, image.into_rgba8().into_raw()),
        };
        Array3::from_shape_vec((height, width, channels), raw)
            .map_err(|e| AugmentError::InvalidInput(format!("图像数据与形状不符：{e}")))
    }

    pub fn to_dynamic_image(image: &Array3<u8>) -> Result<DynamicImage> {
        let (height, width, channels) = image.dim();
        let (w, h) = (width as u32, height as u32);
        // 按逻辑顺序（行、列、通道）展开，与内存布局无关
        let raw: Vec<u8> = image.iter().copied().collect();
        let invalid = || {
            AugmentError::InvalidInput(format!("无法由形状{:?}构造图像", image.shape()))
        };
        let dynamic = match channels {
            1 => DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, raw).ok_or_else(invalid)?),
            2 => DynamicImage::ImageLumaA8(
                GrayAlphaImage::from_raw(w, h, raw).ok_or_else(invalid)?,
            ),
            3 => DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, raw).ok_or_else(invalid)?),
            4 => DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, raw).ok_or_else(invalid)?),
            _ => {
                return Err(AugmentError::InvalidInput(format!(
                    "图像的通道数只可能是1、2、3或4，实际为{channels}"
                )));
            }
        };
        Ok(dynamic)
    }
}

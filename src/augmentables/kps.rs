use super::{TraitForCoords, check_xy_rows};
use crate::errors::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 单个关键点，坐标为亚像素精度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 某张图像上的一组关键点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypointsOnImage {
    pub keypoints: Vec<Keypoint>,
    pub shape: Vec<usize>,
}

impl KeypointsOnImage {
    pub fn new(keypoints: Vec<Keypoint>, shape: &[usize]) -> Self {
        Self {
            keypoints,
            shape: shape.to_vec(),
        }
    }

    /// 由`N×2`的`(x, y)`数组构造
    pub fn from_xy_array(xy: &Array2<f32>, shape: &[usize]) -> Result<Self> {
        check_xy_rows(xy, xy.nrows())?;
        let keypoints = xy
            .rows()
            .into_iter()
            .map(|row| Keypoint::new(row[0], row[1]))
            .collect();
        Ok(Self::new(keypoints, shape))
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

impl TraitForCoords for KeypointsOnImage {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn to_xy_array(&self) -> Array2<f32> {
        let mut xy = Array2::zeros((self.keypoints.len(), 2));
        for (mut row, kp) in xy.rows_mut().into_iter().zip(&self.keypoints) {
            row[0] = kp.x;
            row[1] = kp.y;
        }
        xy
    }

    fn fill_from_xy_array(&self, xy: &Array2<f32>, shape: &[usize]) -> Result<Self> {
        check_xy_rows(xy, self.keypoints.len())?;
        Self::from_xy_array(xy, shape)
    }
}

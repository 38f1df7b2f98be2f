use super::{TraitForCoords, check_xy_rows};
use crate::errors::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// 轴对齐包围盒，`(x1, y1)`为左上角，`(x2, y2)`为右下角
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub label: Option<String>,
}

impl BoundingBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            label: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

/// 某张图像上的一组包围盒；坐标数组中每个盒子按左上、右下两个角点展开
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxesOnImage {
    pub bounding_boxes: Vec<BoundingBox>,
    pub shape: Vec<usize>,
}

impl BoundingBoxesOnImage {
    pub fn new(bounding_boxes: Vec<BoundingBox>, shape: &[usize]) -> Self {
        Self {
            bounding_boxes,
            shape: shape.to_vec(),
        }
    }
}

impl TraitForCoords for BoundingBoxesOnImage {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn to_xy_array(&self) -> Array2<f32> {
        let mut xy = Array2::zeros((self.bounding_boxes.len() * 2, 2));
        for (i, bb) in self.bounding_boxes.iter().enumerate() {
            xy[[2 * i, 0]] = bb.x1;
            xy[[2 * i, 1]] = bb.y1;
            xy[[2 * i + 1, 0]] = bb.x2;
            xy[[2 * i + 1, 1]] = bb.y2;
        }
        xy
    }

    fn fill_from_xy_array(&self, xy: &Array2<f32>, shape: &[usize]) -> Result<Self> {
        check_xy_rows(xy, self.bounding_boxes.len() * 2)?;
        let bounding_boxes = self
            .bounding_boxes
            .iter()
            .enumerate()
            .map(|(i, bb)| BoundingBox {
                x1: xy[[2 * i, 0]],
                y1: xy[[2 * i, 1]],
                x2: xy[[2 * i + 1, 0]],
                y2: xy[[2 * i + 1, 1]],
                label: bb.label.clone(),
            })
            .collect();
        Ok(Self::new(bounding_boxes, shape))
    }
}

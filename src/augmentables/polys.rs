use super::{TraitForCoords, check_xy_rows};
use crate::errors::Result;
use ndarray::{Array2, s};
use serde::{Deserialize, Serialize};

/// 多边形，`exterior`为`N×2`的顶点数组（按顺序首尾相连）
///
/// 这里不检查、也不修复自相交等有效性问题。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub exterior: Array2<f32>,
    pub label: Option<String>,
}

impl Polygon {
    pub fn new(points: &[(f32, f32)]) -> Self {
        let mut exterior = Array2::zeros((points.len(), 2));
        for (mut row, (x, y)) in exterior.rows_mut().into_iter().zip(points) {
            row[0] = *x;
            row[1] = *y;
        }
        Self {
            exterior,
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.exterior.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.nrows() == 0
    }
}

/// 某张图像上的一组多边形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonsOnImage {
    pub polygons: Vec<Polygon>,
    pub shape: Vec<usize>,
}

impl PolygonsOnImage {
    pub fn new(polygons: Vec<Polygon>, shape: &[usize]) -> Self {
        Self {
            polygons,
            shape: shape.to_vec(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }
}

impl TraitForCoords for PolygonsOnImage {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn to_xy_array(&self) -> Array2<f32> {
        let mut xy = Array2::zeros((self.vertex_count(), 2));
        let mut start = 0;
        for polygon in &self.polygons {
            let end = start + polygon.len();
            xy.slice_mut(s![start..end, ..]).assign(&polygon.exterior);
            start = end;
        }
        xy
    }

    fn fill_from_xy_array(&self, xy: &Array2<f32>, shape: &[usize]) -> Result<Self> {
        check_xy_rows(xy, self.vertex_count())?;
        let mut start = 0;
        let polygons = self
            .polygons
            .iter()
            .map(|polygon| {
                let end = start + polygon.len();
                let exterior = xy.slice(s![start..end, ..]).to_owned();
                start = end;
                Polygon {
                    exterior,
                    label: polygon.label.clone(),
                }
            })
            .collect();
        Ok(Self::new(polygons, shape))
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-14
 * @Description  : 池化增强器对关键点、多边形、包围盒的变换
 *
 * 四种池化增强器的标注变换完全相同，用宏为每种增强器生成同一组测试。
 */

use crate::assert_err;
use crate::augmentables::{
    BoundingBox, BoundingBoxesOnImage, Keypoint, KeypointsOnImage, Polygon, PolygonsOnImage,
};
use crate::augmenters::{AveragePooling, MaxPooling, MedianPooling, MinPooling, TraitAugmenter};
use crate::errors::AugmentError;
use approx::assert_abs_diff_eq;

fn sample_keypoints(shape: &[usize]) -> KeypointsOnImage {
    KeypointsOnImage::new(
        vec![Keypoint::new(1.5, 5.5), Keypoint::new(5.5, 1.5)],
        shape,
    )
}

fn assert_keypoints_close(actual: &KeypointsOnImage, expected: &[(f32, f32)]) {
    assert_eq!(actual.len(), expected.len());
    for (kp, (x, y)) in actual.keypoints.iter().zip(expected) {
        assert_abs_diff_eq!(kp.x, *x, epsilon = 1e-5);
        assert_abs_diff_eq!(kp.y, *y, epsilon = 1e-5);
    }
}

macro_rules! annotation_tests {
    ($module:ident, $augmenter:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn test_keypoints_trivial_kernel_is_noop() {
                for k in [0, 1] {
                    let mut aug = $augmenter::new(k).unwrap().keep_size(false);
                    let kpsoi = sample_keypoints(&[6, 6, 3]);
                    assert_eq!(aug.augment_keypoints(&kpsoi).unwrap(), kpsoi);
                }
            }

            #[test]
            fn test_keypoints_keep_size_is_noop() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(true);
                let kpsoi = sample_keypoints(&[6, 6, 3]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                assert_eq!(kpsoi_aug.shape, vec![6, 6, 3]);
                assert_keypoints_close(&kpsoi_aug, &[(1.5, 5.5), (5.5, 1.5)]);
            }

            #[test]
            fn test_keypoints_kernel_size_two() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(false);
                let kpsoi = sample_keypoints(&[6, 6, 3]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                assert_eq!(kpsoi_aug.shape, vec![3, 3, 3]);
                assert_keypoints_close(&kpsoi_aug, &[(0.75, 2.75), (2.75, 0.75)]);
                // 输入本身不变
                assert_eq!(kpsoi.shape, vec![6, 6, 3]);
                assert_eq!(kpsoi.keypoints[0], Keypoint::new(1.5, 5.5));
            }

            #[test]
            fn test_keypoints_kernel_size_differs() {
                let mut aug = $augmenter::new((3, 2)).unwrap().keep_size(false);
                let kpsoi = sample_keypoints(&[6, 6, 3]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                assert_eq!(kpsoi_aug.shape, vec![2, 3, 3]);
                assert_keypoints_close(
                    &kpsoi_aug,
                    &[(1.5 * 3.0 / 6.0, 5.5 * 2.0 / 6.0), (5.5 * 3.0 / 6.0, 1.5 * 2.0 / 6.0)],
                );
            }

            #[test]
            fn test_keypoints_kernel_size_differs_requires_padding() {
                let mut aug = $augmenter::new((3, 2)).unwrap().keep_size(false);
                let kpsoi = sample_keypoints(&[5, 6, 3]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                // 高5补到6后归约为2
                assert_eq!(kpsoi_aug.shape, vec![2, 3, 3]);
                assert_keypoints_close(
                    &kpsoi_aug,
                    &[(1.5 * 3.0 / 6.0, 5.5 * 2.0 / 5.0), (5.5 * 3.0 / 6.0, 1.5 * 2.0 / 5.0)],
                );
            }

            #[test]
            fn test_keypoints_two_dimensional_shape() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(false);
                let kpsoi = sample_keypoints(&[6, 6]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                assert_eq!(kpsoi_aug.shape, vec![3, 3]);
            }

            #[test]
            fn test_empty_keypoints() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(false);
                let kpsoi = KeypointsOnImage::new(vec![], &[6, 6, 3]);
                let kpsoi_aug = aug.augment_keypoints(&kpsoi).unwrap();
                assert!(kpsoi_aug.is_empty());
                assert_eq!(kpsoi_aug.shape, vec![3, 3, 3]);
            }

            #[test]
            fn test_polygons_kernel_size_two() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(false);
                let psoi = PolygonsOnImage::new(
                    vec![
                        Polygon::new(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).with_label("tri"),
                        Polygon::new(&[(1.0, 1.0), (6.0, 1.0), (6.0, 6.0), (1.0, 6.0)]),
                    ],
                    &[6, 6, 3],
                );
                let psoi_aug = aug.augment_polygons(&psoi).unwrap();
                assert_eq!(psoi_aug.shape, vec![3, 3, 3]);
                assert_eq!(psoi_aug.polygons.len(), 2);
                assert_eq!(psoi_aug.polygons[0].label.as_deref(), Some("tri"));
                assert_eq!(psoi_aug.polygons[0].len(), 3);
                assert_eq!(psoi_aug.polygons[1].len(), 4);
                assert_abs_diff_eq!(psoi_aug.polygons[0].exterior[[2, 0]], 2.0, epsilon = 1e-5);
                assert_abs_diff_eq!(psoi_aug.polygons[0].exterior[[2, 1]], 2.0, epsilon = 1e-5);
                assert_abs_diff_eq!(psoi_aug.polygons[1].exterior[[3, 0]], 0.5, epsilon = 1e-5);
                assert_abs_diff_eq!(psoi_aug.polygons[1].exterior[[3, 1]], 3.0, epsilon = 1e-5);
            }

            #[test]
            fn test_polygons_keep_size_is_noop() {
                let mut aug = $augmenter::new(3).unwrap();
                let psoi = PolygonsOnImage::new(
                    vec![Polygon::new(&[(0.5, 0.5), (4.0, 0.5), (4.0, 4.0)])],
                    &[6, 6, 3],
                );
                assert_eq!(aug.augment_polygons(&psoi).unwrap(), psoi);
            }

            #[test]
            fn test_bounding_boxes_kernel_size_differs() {
                let mut aug = $augmenter::new((2, 3)).unwrap().keep_size(false);
                let mut bb = BoundingBox::new(1.0, 2.0, 5.0, 4.0);
                bb.label = Some("car".to_string());
                let bbsoi = BoundingBoxesOnImage::new(vec![bb], &[6, 6, 3]);
                let bbsoi_aug = aug.augment_bounding_boxes(&bbsoi).unwrap();
                // 高6/2=3，宽6/3=2
                assert_eq!(bbsoi_aug.shape, vec![3, 2, 3]);
                let bb_aug = &bbsoi_aug.bounding_boxes[0];
                assert_abs_diff_eq!(bb_aug.x1, 1.0 / 3.0, epsilon = 1e-5);
                assert_abs_diff_eq!(bb_aug.y1, 1.0, epsilon = 1e-5);
                assert_abs_diff_eq!(bb_aug.x2, 5.0 / 3.0, epsilon = 1e-5);
                assert_abs_diff_eq!(bb_aug.y2, 2.0, epsilon = 1e-5);
                assert_eq!(bb_aug.label.as_deref(), Some("car"));
            }

            #[test]
            fn test_invalid_shape_is_rejected() {
                let mut aug = $augmenter::new(2).unwrap().keep_size(false);
                assert_err!(
                    aug.augment_keypoints(&sample_keypoints(&[6])),
                    AugmentError::InvalidState(_)
                );
                assert_err!(
                    aug.augment_keypoints(&sample_keypoints(&[0, 6, 3])),
                    AugmentError::InvalidState(_)
                );
                // 保持尺寸时同样检查
                let mut aug = $augmenter::new(2).unwrap();
                assert_err!(
                    aug.augment_bounding_boxes(&BoundingBoxesOnImage::new(vec![], &[6, 0])),
                    AugmentError::InvalidState(_)
                );
            }
        }
    };
}

annotation_tests!(average, AveragePooling);
annotation_tests!(max, MaxPooling);
annotation_tests!(min, MinPooling);
annotation_tests!(median, MedianPooling);

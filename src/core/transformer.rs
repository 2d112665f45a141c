use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{BarRect, DataPoint, LinearScale, PixelPoint, ViewPortHandler};

/// Value-space to pixel-space mapping consumed by the bar layout pipeline.
///
/// Only the two axis mappings are required; the rect helpers are derived
/// from them.
pub trait CoordinateTransform {
    fn value_to_pixel_x(&self, x: f64) -> f64;

    fn value_to_pixel_y(&self, y: f64) -> f64;

    fn point_value_to_pixel(&self, point: DataPoint) -> PixelPoint {
        PixelPoint::new(self.value_to_pixel_x(point.x), self.value_to_pixel_y(point.y))
    }

    fn rect_value_to_pixel(&self, rect: BarRect) -> BarRect {
        BarRect::new(
            self.value_to_pixel_x(rect.left),
            self.value_to_pixel_y(rect.top),
            self.value_to_pixel_x(rect.right),
            self.value_to_pixel_y(rect.bottom),
        )
    }

    /// Scales the vertical edges by `phase_y` before mapping.
    fn rect_value_to_pixel_with_phase(&self, rect: BarRect, phase_y: f64) -> BarRect {
        self.rect_value_to_pixel(rect.scale_y(phase_y))
    }

    fn rects_value_to_pixel(&self, rects: &mut [BarRect]) {
        for rect in rects.iter_mut() {
            *rect = self.rect_value_to_pixel(*rect);
        }
    }
}

/// Linear transformer from chart values onto a view port content rect.
///
/// Larger y values map upward unless the axis is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformer {
    x_scale: LinearScale,
    y_scale: LinearScale,
    content: BarRect,
    inverted: bool,
}

impl Transformer {
    #[must_use]
    pub fn new(
        x_scale: LinearScale,
        y_scale: LinearScale,
        view_port: ViewPortHandler,
        inverted: bool,
    ) -> Self {
        Self {
            x_scale,
            y_scale,
            content: view_port.content_rect(),
            inverted,
        }
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn pixel_to_value_y(&self, pixel: f64) -> f64 {
        let (start, end) = self.y_range();
        self.y_scale.range_to_domain(pixel, start, end)
    }

    fn y_range(&self) -> (f64, f64) {
        if self.inverted {
            (self.content.top, self.content.bottom)
        } else {
            (self.content.bottom, self.content.top)
        }
    }
}

impl CoordinateTransform for Transformer {
    fn value_to_pixel_x(&self, x: f64) -> f64 {
        self.x_scale
            .domain_to_range(x, self.content.left, self.content.right)
    }

    fn value_to_pixel_y(&self, y: f64) -> f64 {
        let (start, end) = self.y_range();
        self.y_scale.domain_to_range(y, start, end)
    }

    fn rects_value_to_pixel(&self, rects: &mut [BarRect]) {
        #[cfg(feature = "parallel-projection")]
        {
            rects
                .par_iter_mut()
                .for_each(|rect| *rect = self.rect_value_to_pixel(*rect));
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            for rect in rects.iter_mut() {
                *rect = self.rect_value_to_pixel(*rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateTransform, Transformer};
    use crate::core::{BarRect, LinearScale, ViewPortHandler, Viewport};

    fn transformer(inverted: bool) -> Transformer {
        let view_port = ViewPortHandler::new(Viewport::new(100, 200)).expect("view port");
        Transformer::new(
            LinearScale::new(0.0, 10.0).expect("x"),
            LinearScale::new(0.0, 20.0).expect("y"),
            view_port,
            inverted,
        )
    }

    #[test]
    fn values_grow_upward_on_regular_axis() {
        let t = transformer(false);
        assert!((t.value_to_pixel_y(0.0) - 200.0).abs() <= 1e-9);
        assert!((t.value_to_pixel_y(20.0) - 0.0).abs() <= 1e-9);
        assert!((t.value_to_pixel_x(5.0) - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn inverted_axis_grows_downward() {
        let t = transformer(true);
        assert!((t.value_to_pixel_y(0.0) - 0.0).abs() <= 1e-9);
        assert!((t.value_to_pixel_y(5.0) - 50.0).abs() <= 1e-9);
        assert!((t.pixel_to_value_y(50.0) - 5.0).abs() <= 1e-9);
    }

    #[test]
    fn phase_scales_vertical_edges_before_mapping() {
        let t = transformer(false);
        let rect = t.rect_value_to_pixel_with_phase(BarRect::new(1.0, 10.0, 2.0, 0.0), 0.5);
        assert!((rect.top - 150.0).abs() <= 1e-9);
        assert!((rect.bottom - 200.0).abs() <= 1e-9);
        assert!((rect.left - 10.0).abs() <= 1e-9);
        assert!((rect.right - 20.0).abs() <= 1e-9);
    }

    #[test]
    fn bulk_mapping_matches_single_mapping() {
        let t = transformer(false);
        let source = [
            BarRect::new(0.0, 4.0, 1.0, 0.0),
            BarRect::new(3.0, 0.0, 4.0, -2.0),
        ];
        let mut rects = source;
        t.rects_value_to_pixel(&mut rects);
        for (mapped, original) in rects.iter().zip(source) {
            assert_eq!(*mapped, t.rect_value_to_pixel(original));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{BarRect, GradientColors, PixelPoint, RectCorners};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    /// Fully transparent black; bars with this fill are not emitted.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fill of a rect primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum RectFill {
    Solid(Color),
    /// Linear gradient between `start` and `end`; stops are evenly spaced.
    LinearGradient {
        colors: GradientColors,
        start: PixelPoint,
        end: PixelPoint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStroke {
    pub width: f64,
    pub color: Color,
}

/// Draw command for one (optionally rounded) rect in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub rect: BarRect,
    pub fill: Option<RectFill>,
    pub stroke: Option<RectStroke>,
    pub corners: RectCorners,
    pub corner_radius: f64,
}

impl RectPrimitive {
    /// Filled rect with sharp corners.
    #[must_use]
    pub fn filled(rect: BarRect, color: Color) -> Self {
        Self {
            rect,
            fill: Some(RectFill::Solid(color)),
            stroke: None,
            corners: RectCorners::NONE,
            corner_radius: 0.0,
        }
    }

    /// Rounds `corners` with a radius of half the rect width.
    #[must_use]
    pub fn with_corners(mut self, corners: RectCorners) -> Self {
        self.corners = corners;
        self.corner_radius = if corners.is_empty() {
            0.0
        } else {
            self.rect.width().abs() / 2.0
        };
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: RectFill) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, width: f64, color: Color) -> Self {
        self.stroke = Some(RectStroke { width, color });
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.rect.validate()?;
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        match &self.fill {
            Some(RectFill::Solid(color)) => color.validate()?,
            Some(RectFill::LinearGradient { colors, start, end }) => {
                if colors.len() < 2 {
                    return Err(ChartError::InvalidData(
                        "gradient fill needs at least two colors".to_owned(),
                    ));
                }
                if !start.x.is_finite()
                    || !start.y.is_finite()
                    || !end.x.is_finite()
                    || !end.y.is_finite()
                {
                    return Err(ChartError::InvalidData(
                        "gradient endpoints must be finite".to_owned(),
                    ));
                }
                for color in colors {
                    color.validate()?;
                }
            }
            None => {}
        }
        if let Some(stroke) = self.stroke {
            if !stroke.width.is_finite() || stroke.width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "rect stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.color.validate()?;
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "rect primitive must be filled or stroked".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space; `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, RectFill, RectPrimitive};
    use crate::core::{BarRect, PixelPoint, RectCorners};

    #[test]
    fn corner_radius_is_half_width() {
        let rect = RectPrimitive::filled(BarRect::new(10.0, 0.0, 30.0, 50.0), Color::rgb(1.0, 0.0, 0.0))
            .with_corners(RectCorners::TOP);
        assert!((rect.corner_radius - 10.0).abs() <= 1e-12);
        let sharp = rect.clone().with_corners(RectCorners::NONE);
        assert!(sharp.corner_radius.abs() <= 1e-12);
    }

    #[test]
    fn single_stop_gradient_is_invalid() {
        let rect = RectPrimitive::filled(BarRect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 0.0))
            .with_fill(RectFill::LinearGradient {
                colors: [Color::rgb(1.0, 1.0, 1.0)].into_iter().collect(),
                start: PixelPoint::new(0.0, 0.0),
                end: PixelPoint::new(0.0, 1.0),
            });
        assert!(rect.validate().is_err());
    }

    #[test]
    fn rejects_zero_width_stroke() {
        let rect = RectPrimitive::filled(BarRect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 0.0))
            .with_stroke(0.0, Color::rgb(0.0, 0.0, 0.0));
        assert!(rect.validate().is_err());
    }
}

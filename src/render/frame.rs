use crate::core::PixelBounds;
use crate::error::{GraphError, GraphResult};
use crate::render::{
    CurvePrimitive, LinePrimitive, MarkerPrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one graph draw pass.
///
/// Backends draw the primitive groups in a fixed order: shade rects first,
/// then gridlines, labels, curve segments, and finally sample markers, so the
/// background never obscures the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub bounds: PixelBounds,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub curves: Vec<CurvePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(bounds: PixelBounds) -> Self {
        Self {
            bounds,
            rects: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
            curves: Vec::new(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurvePrimitive) -> Self {
        self.curves.push(curve);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if !self.bounds.is_valid() {
            return Err(GraphError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for curve in &self.curves {
            curve.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.texts.is_empty()
            && self.curves.is_empty()
            && self.markers.is_empty()
    }
}

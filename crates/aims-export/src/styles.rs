use serde::{Deserialize, Serialize};

/// Page geometry and type sizes for PDF reports. Lengths are millimetres,
/// font sizes are points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfStyles {
    pub page_width: f32,
    pub page_height: f32,

    /// Applied uniformly on all four sides.
    pub margin: f32,

    pub body_size: f32,
    pub heading1_size: f32,
    pub heading2_size: f32,

    /// Vertical advance for one line of body text.
    pub line_height: f32,

    /// Characters per wrapped body line.
    pub wrap_width: usize,

    /// Rendered width of the embedded chart; height follows the aspect ratio.
    pub chart_width: f32,
}

impl Default for PdfStyles {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            body_size: 11.0,
            heading1_size: 18.0,
            heading2_size: 14.0,
            line_height: 6.0,
            wrap_width: 90,
            chart_width: 170.0,
        }
    }
}

impl PdfStyles {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}

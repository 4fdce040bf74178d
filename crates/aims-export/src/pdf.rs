use std::io::BufWriter;

use printpdf::image_crate::{self, DynamicImage, ImageFormat};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};

use crate::error::ExportError;
use crate::render::CHART_MARKER;
use crate::styles::PdfStyles;

/// Lay out rendered report text as an A4 PDF.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` / `## Heading` -> heading sizes 1 and 2
/// - `- item` -> bullet line
/// - `**bold**` anywhere in a line -> the whole line in bold
/// - `[[chart]]` -> the chart image, or nothing when `chart_png` is `None`
/// - Everything else -> body text, wrapped
pub fn generate_pdf(
    rendered: &str,
    chart_png: Option<&[u8]>,
    styles: &PdfStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut writer = PageWriter::new(styles)?;

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            writer.advance(styles.line_height / 2.0);
        } else if trimmed == CHART_MARKER {
            if let Some(png) = chart_png {
                writer.image(png)?;
            }
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            writer.heading(text, styles.heading2_size);
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            writer.heading(text, styles.heading1_size);
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            writer.paragraph(&format!("\u{2022} {text}"), 5.0);
        } else {
            writer.paragraph(trimmed, 0.0);
        }
    }

    writer.finish()
}

struct PageWriter<'a> {
    styles: &'a PdfStyles,
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    /// Baseline of the next line, measured from the bottom edge.
    y: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(styles: &'a PdfStyles) -> Result<Self, ExportError> {
        let (doc, page, layer) = PdfDocument::new(
            "AIMS Survey Report",
            Mm(styles.page_width),
            Mm(styles.page_height),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

        Ok(Self {
            styles,
            doc,
            layer,
            regular,
            bold,
            y: styles.page_height - styles.margin,
            pages: 1,
        })
    }

    fn advance(&mut self, height: f32) {
        self.y -= height;
    }

    /// Start a new page if fewer than `height` mm remain above the margin.
    fn reserve(&mut self, height: f32) {
        if self.y - height >= self.styles.margin {
            return;
        }
        let (page, layer) = self.doc.add_page(
            Mm(self.styles.page_width),
            Mm(self.styles.page_height),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.styles.page_height - self.styles.margin;
        self.pages += 1;
    }

    fn heading(&mut self, text: &str, size: f32) {
        let height = size * 0.5;
        self.reserve(height + self.styles.line_height);
        self.advance(self.styles.line_height / 2.0);
        self.layer
            .use_text(text, size, Mm(self.styles.margin), Mm(self.y), &self.bold);
        self.advance(height);
    }

    fn paragraph(&mut self, text: &str, indent: f32) {
        let (text, font) = if text.contains("**") {
            (text.replace("**", ""), self.bold.clone())
        } else {
            (text.to_string(), self.regular.clone())
        };

        for line in wrap_text(&text, self.styles.wrap_width) {
            self.reserve(self.styles.line_height);
            self.layer.use_text(
                line,
                self.styles.body_size,
                Mm(self.styles.margin + indent),
                Mm(self.y),
                &font,
            );
            self.advance(self.styles.line_height);
        }
    }

    fn image(&mut self, png: &[u8]) -> Result<(), ExportError> {
        let decoded = image_crate::load_from_memory_with_format(png, ImageFormat::Png)
            .map_err(|e| ExportError::ChartImage(e.to_string()))?;
        // The PDF image path has no alpha support; flatten to RGB.
        let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
        let (width_px, height_px) = (rgb.width(), rgb.height());
        if width_px == 0 || height_px == 0 {
            return Err(ExportError::ChartImage("image has no pixels".to_string()));
        }

        let extent = chart_extent(width_px, height_px, self.styles);

        self.reserve(extent.height);
        self.advance(extent.height);
        Image::from_dynamic_image(&rgb).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(self.styles.margin)),
                translate_y: Some(Mm(self.y)),
                dpi: Some(extent.dpi),
                ..Default::default()
            },
        );
        self.advance(self.styles.line_height);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        let pages = self.pages;
        let mut buf = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buf)
            .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
        let bytes = buf
            .into_inner()
            .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))?;
        tracing::debug!(pages, bytes = bytes.len(), "rendered report PDF");
        Ok(bytes)
    }
}

/// Placed size of the chart image, in millimetres, and the DPI that
/// produces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartExtent {
    pub width: f32,
    pub height: f32,
    pub dpi: f32,
}

/// Scale a `width_px` x `height_px` image to the chart width, shrinking it
/// further when it would not fit between the top and bottom margins.
pub fn chart_extent(width_px: u32, height_px: u32, styles: &PdfStyles) -> ChartExtent {
    let (width_px, height_px) = (width_px as f32, height_px as f32);
    let max_width = styles.chart_width.min(styles.content_width());
    let max_height = styles.page_height - 2.0 * styles.margin;

    let mut dpi = width_px * 25.4 / max_width;
    if height_px * 25.4 / dpi > max_height {
        dpi = height_px * 25.4 / max_height;
    }

    ChartExtent {
        width: width_px * 25.4 / dpi,
        height: height_px * 25.4 / dpi,
        dpi,
    }
}

/// Greedy word wrap on character count. Words longer than `width` are kept
/// whole on their own line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

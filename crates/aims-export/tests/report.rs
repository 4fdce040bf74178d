use std::io::Cursor;

use aims_core::models::patient::Patient;
use aims_core::models::survey::Survey;
use aims_export::chart::decode_chart_image;
use aims_export::error::ExportError;
use aims_export::pdf::{chart_extent, generate_pdf, wrap_text};
use aims_export::patient_report_pdf;
use aims_export::render::{CHART_MARKER, ReportContext, render_report};
use aims_export::styles::PdfStyles;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

fn patient() -> Patient {
    serde_json::from_value(json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "age": 61,
        "surveyDate": "2025-02-01"
    }))
    .unwrap()
}

fn survey() -> Survey {
    serde_json::from_value(json!({
        "patientId": "p-1",
        "facialMuscles": 3, "lipsPerioral": 2, "jaw": 1, "tongue": 4,
        "upperExtremities": 0, "lowerExtremities": 1, "neckShouldersHips": 2,
        "severityOfMovements": 3, "incapacitationDueToMovements": 2,
        "patientAwareness": 1, "emotionalDistress": 4, "globalRating": 3
    }))
    .unwrap()
}

fn png_bytes() -> Vec<u8> {
    let img = image::DynamicImage::new_rgba8(40, 20);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
    buf.into_inner()
}

#[test]
fn rendered_report_lists_every_item_with_band() {
    let rendered = render_report(&ReportContext::new(&patient(), &survey())).unwrap();

    assert!(rendered.starts_with("# AIMS Survey Report"));
    assert!(rendered.contains("**Name:** Jane Doe"));
    assert!(rendered.contains("Age: 61"));
    assert!(rendered.contains("Gender: -"));
    assert!(rendered.contains("- 1. Facial Muscles: 3 (Fair)"));
    assert!(rendered.contains("- 4. Tongue: 4 (Poor)"));
    assert!(rendered.contains("- 12. Global Rating: 3 (Fair)"));
    assert!(rendered.contains("Total movement score (items 1-7): 13"));
    assert!(rendered.lines().any(|l| l.trim() == CHART_MARKER));
}

#[test]
fn data_url_and_bare_base64_both_decode() {
    let png = png_bytes();
    let bare = STANDARD.encode(&png);
    let url = format!("data:image/png;base64,{bare}");

    assert_eq!(decode_chart_image(&bare).unwrap(), png);
    assert_eq!(decode_chart_image(&url).unwrap(), png);
}

#[test]
fn non_png_chart_is_rejected() {
    let jpeg_ish = STANDARD.encode(b"\xff\xd8\xff\xe0 not a png");
    assert!(matches!(
        decode_chart_image(&jpeg_ish),
        Err(ExportError::ChartImage(_))
    ));
    assert!(matches!(
        decode_chart_image("data:image/png;base64,@@@"),
        Err(ExportError::ChartImage(_))
    ));
    assert!(matches!(
        decode_chart_image("data:image/png,rawtext"),
        Err(ExportError::ChartImage(_))
    ));
}

#[test]
fn pdf_without_chart() {
    let bytes = patient_report_pdf(&patient(), &survey(), None).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_with_chart_embeds_image() {
    let chart = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes()));
    let with_chart = patient_report_pdf(&patient(), &survey(), Some(&chart)).unwrap();
    let without = patient_report_pdf(&patient(), &survey(), None).unwrap();

    assert!(with_chart.starts_with(b"%PDF"));
    assert!(with_chart.len() > without.len());
}

#[test]
fn long_reports_still_render() {
    let rendered: String = (0..200).map(|i| format!("- line {i}\n")).collect();
    let short = generate_pdf("- line 0\n", None, &PdfStyles::default()).unwrap();
    let long = generate_pdf(&rendered, None, &PdfStyles::default()).unwrap();
    assert!(long.starts_with(b"%PDF"));
    assert!(long.len() > short.len());
}

#[test]
fn wrap_respects_width() {
    let lines = wrap_text("alpha beta gamma delta epsilon", 11);
    assert_eq!(lines, vec!["alpha beta", "gamma delta", "epsilon"]);
    assert!(wrap_text("", 10).is_empty());
    assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
}

#[test]
fn wide_chart_fills_chart_width() {
    let styles = PdfStyles::default();
    let extent = chart_extent(1700, 850, &styles);
    assert!((extent.width - 170.0).abs() < 1e-3);
    assert!((extent.height - 85.0).abs() < 1e-3);
}

#[test]
fn tall_chart_is_clamped_to_page() {
    let styles = PdfStyles::default();
    let usable = styles.page_height - 2.0 * styles.margin;
    let extent = chart_extent(100, 4000, &styles);

    assert!(extent.height <= usable + 1e-3);
    assert!(extent.width <= styles.content_width());
    // Aspect ratio is preserved.
    assert!((extent.height / extent.width - 40.0).abs() < 1e-2);
}

#[test]
fn tall_chart_still_renders() {
    let img = image::DynamicImage::new_rgb8(10, 600);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
    let chart = STANDARD.encode(buf.into_inner());

    let bytes = patient_report_pdf(&patient(), &survey(), Some(&chart)).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

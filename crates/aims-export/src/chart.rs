use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ExportError;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Decode the chart captured by the frontend.
///
/// Accepts either bare base64 or a `data:image/png;base64,...` URL as
/// produced by `canvas.toDataURL`. Only PNG is supported.
pub fn decode_chart_image(encoded: &str) -> Result<Vec<u8>, ExportError> {
    let encoded = encoded.trim();
    let payload = match encoded.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest
                .split_once(',')
                .ok_or_else(|| ExportError::ChartImage("data URL has no payload".to_string()))?;
            if !meta.ends_with(";base64") {
                return Err(ExportError::ChartImage(format!(
                    "unsupported data URL encoding: {meta}"
                )));
            }
            data
        }
        None => encoded,
    };

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::ChartImage(e.to_string()))?;

    if !bytes.starts_with(PNG_SIGNATURE) {
        return Err(ExportError::ChartImage("not a PNG image".to_string()));
    }

    Ok(bytes)
}

//! Classification of decoded payloads.

/// Whether a decoded payload looks like a link to a PDF document.
///
/// Case-insensitive `.pdf` suffix check on the URL path; query string and
/// fragment are ignored so `https://host/doc.pdf?dl=1` still matches.
pub fn looks_like_pdf(payload: &str) -> bool {
    let path = payload
        .split_once('#')
        .map_or(payload, |(before, _)| before);
    let path = path.split_once('?').map_or(path, |(before, _)| before);
    path.to_ascii_lowercase().ends_with(".pdf")
}

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Baseline y that vertically centers a single text line on `center_y`.
pub(super) fn text_baseline_for_center(center_y: f64, font_size_px: f64) -> f64 {
    center_y + font_size_px * 0.35
}

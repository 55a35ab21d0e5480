/// Share of the scrollable distance already traversed, as a percentage in `[0, 100]`.
///
/// Pages that cannot scroll (content no taller than the viewport) report 0.
pub fn scroll_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn progress_width(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

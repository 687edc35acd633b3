/// Fraction of the page scrolled, in `[0, 1]`.
///
/// A page that fits in the viewport counts as fully scrolled.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 1.0;
    }
    if !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_down() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    }

    #[test]
    fn clamps_overscroll() {
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_page_is_complete() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 1.0);
    }
}

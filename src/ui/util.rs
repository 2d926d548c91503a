use tui::layout::Rect;

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(46, 12, area);
        assert_eq!(rect, Rect::new(27, 14, 46, 12));

        let clamped = centered_rect(200, 80, area);
        assert_eq!(clamped, area);
    }
}

/// Opacity of the dimming overlay for a given drag offset.
///
/// Settled open (`offset >= 0`) the overlay sits at `max_opacity`; while
/// dragging it fades linearly and reaches zero only at `|offset| == width`.
pub fn overlay_opacity(offset: f32, width: f32, max_opacity: f32) -> f32 {
    if offset < 0.0 {
        let drag_fraction = offset.abs() / width;
        max_opacity * (1.0 - drag_fraction)
    } else {
        max_opacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_open_is_half_opaque() {
        assert_eq!(overlay_opacity(0.0, 280.0, 0.5), 0.5);
    }

    #[test]
    fn fully_dragged_is_transparent() {
        assert_eq!(overlay_opacity(-280.0, 280.0, 0.5), 0.0);
    }

    #[test]
    fn fades_linearly() {
        let opacity = overlay_opacity(-50.0, 280.0, 0.5);
        assert!((opacity - 0.411).abs() < 0.001, "opacity {}", opacity);
        assert!((overlay_opacity(-140.0, 280.0, 0.5) - 0.25).abs() < f32::EPSILON);
    }
}

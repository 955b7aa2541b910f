//! Pointer-driven hover effects for cards and buttons.

/// Max tilt in degrees when the pointer sits on a card edge.
pub const MAX_TILT_DEG: f64 = 10.0;
pub const HOVER_SCALE: f64 = 1.02;
pub const MAGNETIC_PULL: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0, scale: 1.0 };

    pub fn is_active(&self) -> bool {
        self.scale > 1.0
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale({});",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// `x`/`y` are pointer coordinates relative to the card's top-left corner.
pub fn tilt_for(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::REST;
    }
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    Tilt {
        rotate_x: (y - center_y) / center_y * MAX_TILT_DEG,
        rotate_y: (center_x - x) / center_x * MAX_TILT_DEG,
        scale: HOVER_SCALE,
    }
}

/// Offset for a button that leans toward the pointer. Inputs are client
/// coordinates and the button's bounding box.
pub fn magnetic_offset(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    let dx = client_x - (left + width / 2.0);
    let dy = client_y - (top + height / 2.0);
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_no_rotation() {
        let tilt = tilt_for(100.0, 50.0, 200.0, 100.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert!(tilt.is_active());
    }

    #[test]
    fn corners_reach_max_tilt() {
        let top_left = tilt_for(0.0, 0.0, 200.0, 100.0);
        assert_eq!(top_left.rotate_x, -MAX_TILT_DEG);
        assert_eq!(top_left.rotate_y, MAX_TILT_DEG);

        let bottom_right = tilt_for(200.0, 100.0, 200.0, 100.0);
        assert_eq!(bottom_right.rotate_x, MAX_TILT_DEG);
        assert_eq!(bottom_right.rotate_y, -MAX_TILT_DEG);
    }

    #[test]
    fn degenerate_box_rests() {
        assert_eq!(tilt_for(5.0, 5.0, 0.0, 10.0), Tilt::REST);
        assert!(!Tilt::REST.is_active());
    }

    #[test]
    fn magnetic_pull_is_a_fifth_of_the_offset() {
        let (x, y) = magnetic_offset(160.0, 40.0, 0.0, 0.0, 200.0, 40.0);
        assert!((x - 12.0).abs() < 1e-9);
        assert!((y - 4.0).abs() < 1e-9);
        assert_eq!(magnetic_offset(100.0, 20.0, 0.0, 0.0, 200.0, 40.0), (0.0, 0.0));
    }
}

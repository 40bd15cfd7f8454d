/// Button bounds in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Square overlay centred on the click, relative to the button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    pub fn at_click(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            x: client_x - bounds.left - size / 2.0,
            y: client_y - bounds.top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {0}px; height: {0}px; left: {1}px; top: {2}px;",
            self.size, self.x, self.y
        )
    }
}

use basalt_core::geometry::{Pos, Rect, Size};

/// A physical display (monitor or embedded panel) as reported by the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    id: u32,
    name: Option<String>,
    bounds: Rect,
    scale_factor: f64,
}

impl Display {
    pub fn new(id: u32, bounds: Rect) -> Self {
        Self {
            id,
            name: None,
            bounds,
            scale_factor: 1.0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Area of the display in the global desktop coordinate space.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Native resolution in pixels.
    pub fn size(&self) -> Size<u32> {
        self.bounds.size()
    }

    pub fn pos(&self) -> Pos<i32> {
        self.bounds.pos()
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Position that centers a window of `size` on this display.
    pub fn centered(&self, size: Size<u32>) -> Pos<i32> {
        let dx = (self.bounds.width as i64 - size.width as i64) / 2;
        let dy = (self.bounds.height as i64 - size.height as i64) / 2;
        Pos::new(self.bounds.x + dx as i32, self.bounds.y + dy as i32)
    }
}

impl Default for Display {
    /// A 1920x1080 primary display at the origin, used when a platform cannot
    /// enumerate its outputs.
    fn default() -> Self {
        Display::new(0, Rect::new(Pos::new(0, 0), Size::new(1920, 1080))).with_name("Primary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_centered() {
        let display = Display::default();
        assert_eq!(display.centered(Size::new(800, 600)), Pos::new(560, 240));
    }

    #[test]
    fn test_display_centered_offset_origin() {
        let display = Display::new(1, Rect::new(Pos::new(1920, 0), Size::new(1280, 1024)));
        assert_eq!(display.centered(Size::new(1280, 1024)), Pos::new(1920, 0));
    }
}

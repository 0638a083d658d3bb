//! Capability flags advertised by platform windows.
//!
//! Every window operation is safe to call on every platform; an unsupported one is
//! a silent no-op. Portable code that wants to know in advance can query
//! [`PlatformWindow::capabilities`](crate::window::PlatformWindow::capabilities).

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        const FULL_SCREEN = 1 << 0;
        const RESIZE = 1 << 1;
        const POSITION = 1 << 2;
        const TITLE = 1 << 3;
        const VISIBILITY = 1 << 4;
        const BORDERLESS = 1 << 5;
        const ALWAYS_ON_TOP = 1 << 6;
        const CURSOR = 1 << 7;
        const MULTI_TOUCH = 1 << 8;
    }
}

impl Capabilities {
    /// What a desktop compositor window offers, minus touch.
    pub const DESKTOP: Self = Self::from_bits_truncate(
        Self::FULL_SCREEN.bits()
            | Self::RESIZE.bits()
            | Self::POSITION.bits()
            | Self::TITLE.bits()
            | Self::VISIBILITY.bits()
            | Self::BORDERLESS.bits()
            | Self::ALWAYS_ON_TOP.bits()
            | Self::CURSOR.bits(),
    );

    /// A fixed display surface: always full-screen, touch driven.
    pub const SURFACE: Self =
        Self::from_bits_truncate(Self::FULL_SCREEN.bits() | Self::MULTI_TOUCH.bits());

    pub const fn supports(&self, capability: Capabilities) -> bool {
        self.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_lacks_touch() {
        assert!(Capabilities::DESKTOP.supports(Capabilities::ALWAYS_ON_TOP));
        assert!(!Capabilities::DESKTOP.supports(Capabilities::MULTI_TOUCH));
    }

    #[test]
    fn test_surface_capabilities() {
        assert!(Capabilities::SURFACE.supports(Capabilities::MULTI_TOUCH));
        assert!(!Capabilities::SURFACE.supports(Capabilities::RESIZE));
        assert!(!Capabilities::SURFACE.supports(Capabilities::ALWAYS_ON_TOP | Capabilities::FULL_SCREEN));
    }
}

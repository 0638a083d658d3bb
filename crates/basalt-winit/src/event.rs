use basalt_shell::{PlatformEvent, Pos, RawTouch, Size, TouchPhase, Vec2};
pub use winit::event::WindowEvent as WinitEvent;

fn touch_phase(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Began,
        winit::event::TouchPhase::Moved => TouchPhase::Moved,
        winit::event::TouchPhase::Ended => TouchPhase::Ended,
        winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

/// Translates a winit window event into the shell's event contract.
///
/// Positions and sizes stay in physical pixels. Events the shell does not relay
/// return `None`.
pub fn from_winit(event: WinitEvent) -> Option<PlatformEvent> {
    match event {
        WinitEvent::Resized(size) => Some(PlatformEvent::Resized(Size::new(size.width, size.height))),
        WinitEvent::Moved(pos) => Some(PlatformEvent::Moved(Pos::new(pos.x, pos.y))),
        WinitEvent::CursorMoved {
            device_id: _,
            position,
        } => Some(PlatformEvent::CursorMoved(Pos::new(
            position.x as i32,
            position.y as i32,
        ))),
        WinitEvent::Touch(touch) => Some(PlatformEvent::Touches(vec![RawTouch::new(
            touch.id,
            Vec2::new(touch.location.x as f32, touch.location.y as f32),
            touch_phase(touch.phase),
        )])),
        WinitEvent::Focused(focus) => Some(PlatformEvent::Focused(focus)),
        WinitEvent::CloseRequested | WinitEvent::Destroyed => Some(PlatformEvent::CloseRequested),
        // Frames are driven from `about_to_wait`
        WinitEvent::RedrawRequested => None,
        // Input outside the shell's contract
        WinitEvent::KeyboardInput { .. }
        | WinitEvent::ModifiersChanged(_)
        | WinitEvent::Ime(_)
        | WinitEvent::MouseInput { .. }
        | WinitEvent::MouseWheel { .. }
        | WinitEvent::CursorEntered { .. }
        | WinitEvent::CursorLeft { .. }
        | WinitEvent::TouchpadPressure { .. }
        | WinitEvent::AxisMotion { .. }
        | WinitEvent::ScaleFactorChanged { .. }
        | WinitEvent::ThemeChanged(_)
        | WinitEvent::Occluded(_) => None,
        unknown => {
            tracing::warn!("unhandled window event: {:?}", unknown);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[test]
    fn test_resize_and_move() {
        assert_eq!(
            from_winit(WinitEvent::Resized(PhysicalSize::new(1024, 768))),
            Some(PlatformEvent::Resized(Size::new(1024, 768)))
        );
        assert_eq!(
            from_winit(WinitEvent::Moved(PhysicalPosition::new(-20, 40))),
            Some(PlatformEvent::Moved(Pos::new(-20, 40)))
        );
    }

    #[test]
    fn test_close_and_focus() {
        assert_eq!(
            from_winit(WinitEvent::CloseRequested),
            Some(PlatformEvent::CloseRequested)
        );
        assert_eq!(
            from_winit(WinitEvent::Destroyed),
            Some(PlatformEvent::CloseRequested)
        );
        assert_eq!(
            from_winit(WinitEvent::Focused(false)),
            Some(PlatformEvent::Focused(false))
        );
        assert_eq!(from_winit(WinitEvent::RedrawRequested), None);
    }

    #[test]
    fn test_touch_phases() {
        use winit::event::TouchPhase as Winit;
        assert_eq!(touch_phase(Winit::Started), TouchPhase::Began);
        assert_eq!(touch_phase(Winit::Cancelled), TouchPhase::Cancelled);
    }
}

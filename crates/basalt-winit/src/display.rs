//! Monitor enumeration.
//!
//! Winit monitors carry no stable identifier, so a [`Display`] id is the monitor's
//! index in enumeration order.

use basalt_shell::{Display, Pos, Rect, Size};
use winit::monitor::MonitorHandle;

pub fn display_from_monitor(id: u32, monitor: &MonitorHandle) -> Display {
    let pos = monitor.position();
    let size = monitor.size();

    let display = Display::new(
        id,
        Rect::new(Pos::new(pos.x, pos.y), Size::new(size.width, size.height)),
    )
    .with_scale_factor(monitor.scale_factor());

    match monitor.name() {
        Some(name) => display.with_name(name),
        None => display,
    }
}

/// Maps `monitor` to a [`Display`], numbering it by its position in `monitors`.
pub fn resolve_display(
    monitor: &MonitorHandle,
    monitors: impl Iterator<Item = MonitorHandle>,
) -> Display {
    let id = monitors
        .enumerate()
        .find(|(_, candidate)| candidate == monitor)
        .map_or(0, |(index, _)| index as u32);
    display_from_monitor(id, monitor)
}

/// Picks the primary monitor, then the first enumerated one, then the fallback
/// [`Display::default`].
pub(crate) fn primary_display(
    primary: Option<MonitorHandle>,
    monitors: impl Iterator<Item = MonitorHandle>,
) -> Display {
    let monitors: Vec<MonitorHandle> = monitors.collect();
    match primary.or_else(|| monitors.first().cloned()) {
        Some(monitor) => resolve_display(&monitor, monitors.into_iter()),
        None => {
            tracing::warn!("no monitors reported, assuming a 1920x1080 display");
            Display::default()
        }
    }
}

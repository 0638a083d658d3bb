//! Launches on the embedded surface platform, end to end.

use std::cell::RefCell;
use std::rc::Rc;

use basalt_shell::platform::{ScriptedSource, SurfacePlatform};
use basalt_shell::{Capabilities, Display, LifecycleState, Pos, RawTouch, Rect, Size, execute_launch};
use basalt_test_utils::{Call, CallLog, RecordingApp, RecordingRenderer};

fn panel() -> Display {
    Display::new(0, Rect::new(Pos::new(0, 0), Size::new(1024, 600)))
}

fn surface_app() -> RecordingApp {
    RecordingApp::new().with_settings(|settings| {
        settings.set_frame_rate(0.0);
        settings.set_window_size(800, 480);
        settings.enable_multi_touch(true);
    })
}

fn run(app: RecordingApp, source: ScriptedSource) -> CallLog {
    let log = app.log();
    let renderer = RecordingRenderer::new(log.clone());
    execute_launch(
        SurfacePlatform::new(source, panel()),
        app,
        renderer,
        "Panel",
        Vec::new(),
    )
    .unwrap();
    log
}

#[test]
fn test_surface_negotiates_then_covers_panel() {
    let log = run(surface_app(), ScriptedSource::new().idle());
    let calls = log.calls();

    assert_eq!(calls[0], Call::PrepareSettings);
    assert_eq!(
        calls[1],
        Call::RendererSetup {
            size: Size::new(1024, 600),
        }
    );
    assert_eq!(
        calls[2],
        Call::Setup {
            size: Size::new(1024, 600),
            full_screen: true,
        }
    );
    assert_eq!(calls.last(), Some(&Call::RendererTeardown));
}

#[test]
fn test_surface_relays_touches() {
    let source = ScriptedSource::new()
        .with_touches(vec![
            RawTouch::began(1, 10.0, 10.0),
            RawTouch::began(2, 20.0, 20.0),
        ])
        .with_touches(vec![RawTouch::ended(1, 10.0, 10.0)]);

    let log = run(surface_app(), source);

    assert_eq!(
        log.touch_calls(),
        vec![
            Call::TouchesBegan {
                ids: vec![1, 2],
                active: vec![1, 2],
            },
            Call::TouchesEnded {
                ids: vec![1],
                active: vec![2],
            },
        ]
    );
}

#[test]
fn test_surface_ignores_window_management() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = seen.clone();

    let app = surface_app().with_update(move |ctx, _time| {
        assert!(ctx.supports(Capabilities::MULTI_TOUCH));
        assert!(!ctx.supports(Capabilities::RESIZE));

        ctx.set_full_screen(false);
        ctx.set_window_size(320, 240);
        ctx.set_window_pos(5, 5);
        record
            .borrow_mut()
            .push((ctx.is_full_screen(), ctx.window_size(), ctx.window_pos()));
        ctx.quit();
    });

    let log = run(app, ScriptedSource::new().idle_frames(3));

    assert_eq!(
        *seen.borrow(),
        vec![(true, Size::new(1024, 600), Pos::new(0, 0))]
    );
    assert_eq!(
        log.calls().iter().find(|call| matches!(call, Call::Shutdown { .. })),
        Some(&Call::Shutdown {
            state: LifecycleState::Quitting,
        })
    );
}

#[test]
fn test_surface_abort_skips_setup() {
    let app = surface_app().with_settings(|settings| settings.set_should_quit(true));
    let log = run(app, ScriptedSource::new().idle());

    assert_eq!(log.calls(), vec![Call::PrepareSettings]);
}

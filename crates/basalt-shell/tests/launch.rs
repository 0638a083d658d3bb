//! Launch protocol tests against the headless platform.
//!
//! Every test disables frame pacing so each pump iteration renders exactly one
//! frame.

use std::cell::RefCell;
use std::rc::Rc;

use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
use basalt_shell::{
    LifecycleState, NullRenderer, PlatformEvent, Shell, ShellError, ShellResult, Size, current,
    execute_launch,
};
use basalt_test_utils::{Call, CallLog, RecordingApp, RecordingRenderer};

fn unpaced(app: RecordingApp) -> RecordingApp {
    app.with_settings(|settings| settings.set_frame_rate(0.0))
}

fn run(app: RecordingApp, source: ScriptedSource) -> (ShellResult<()>, CallLog) {
    let log = app.log();
    let renderer = RecordingRenderer::new(log.clone());
    let result = execute_launch(
        HeadlessPlatform::new(source),
        app,
        renderer,
        "Launch Test",
        vec!["--test".to_string()],
    );
    (result, log)
}

#[test]
fn test_negotiated_size_is_applied() {
    let app = RecordingApp::new().with_settings(|settings| {
        settings.set_frame_rate(0.0);
        settings.set_window_size(800, 600);
        settings.set_full_screen(false);
    });

    let (result, log) = run(app, ScriptedSource::new().idle());
    result.unwrap();

    assert!(log.calls().contains(&Call::Setup {
        size: Size::new(800, 600),
        full_screen: false,
    }));
}

#[test]
fn test_full_frame_sequence() {
    let (result, log) = run(unpaced(RecordingApp::new()), ScriptedSource::new().idle());
    result.unwrap();

    assert_eq!(
        log.calls(),
        vec![
            Call::PrepareSettings,
            Call::RendererSetup {
                size: Size::new(640, 480)
            },
            Call::Setup {
                size: Size::new(640, 480),
                full_screen: false,
            },
            Call::Update { frame: 1 },
            Call::StartDraw,
            Call::Draw { frame: 1 },
            Call::FinishDraw,
            Call::Shutdown {
                state: LifecycleState::Quitting
            },
            Call::RendererTeardown,
        ]
    );
}

#[test]
fn test_launch_in_full_screen() {
    let app = RecordingApp::new().with_settings(|settings| {
        settings.set_frame_rate(0.0);
        settings.set_full_screen(true);
        settings.set_full_screen_size(1280, 720);
    });

    let (result, log) = run(app, ScriptedSource::new());
    result.unwrap();

    assert!(log.calls().contains(&Call::Setup {
        size: Size::new(1280, 720),
        full_screen: true,
    }));
}

#[test]
fn test_quit_is_observed_on_next_iteration() {
    let quits = Rc::new(RefCell::new(Vec::new()));
    let seen = quits.clone();

    let app = unpaced(RecordingApp::new()).with_update(move |ctx, _time| {
        ctx.quit();
        seen.borrow_mut().push(ctx.lifecycle());
        ctx.quit();
        seen.borrow_mut().push(ctx.lifecycle());
    });

    let (result, log) = run(app, ScriptedSource::new().idle_frames(10));
    result.unwrap();

    assert_eq!(
        *quits.borrow(),
        vec![LifecycleState::Quitting, LifecycleState::Quitting]
    );
    assert_eq!(log.count(|call| matches!(call, Call::Update { .. })), 1);
    assert_eq!(log.count(|call| matches!(call, Call::Shutdown { .. })), 1);
}

#[test]
fn test_quit_after_frames() {
    let app = unpaced(RecordingApp::new()).quit_after_frames(3);
    let (result, log) = run(app, ScriptedSource::new().idle_frames(10));
    result.unwrap();

    assert_eq!(log.count(|call| matches!(call, Call::Draw { .. })), 3);
}

#[test]
fn test_should_quit_aborts_before_window() {
    let app = RecordingApp::new().with_settings(|settings| settings.set_should_quit(true));
    let (result, log) = run(app, ScriptedSource::new().idle_frames(3));

    result.unwrap();
    assert_eq!(log.calls(), vec![Call::PrepareSettings]);
    assert!(current().is_none());
}

#[test]
fn test_zero_size_window_is_fatal() {
    let app = RecordingApp::new().with_settings(|settings| settings.set_window_size(0, 480));
    let (result, log) = run(app, ScriptedSource::new().idle());

    assert!(matches!(result, Err(ShellError::WindowCreation { .. })));
    assert_eq!(log.calls(), vec![Call::PrepareSettings]);
    assert!(current().is_none());
}

#[test]
fn test_instance_is_stable_for_the_whole_run() {
    let ids = Rc::new(RefCell::new(Vec::new()));
    let from_setup = ids.clone();
    let from_update = ids.clone();

    let app = unpaced(RecordingApp::new())
        .with_setup(move |ctx| {
            let instance = current().unwrap();
            assert!(Rc::ptr_eq(&instance, ctx.instance()));
            assert_eq!(instance.title(), "Launch Test");
            assert_eq!(instance.args(), ["--test".to_string()]);
            from_setup.borrow_mut().push(instance.id());
        })
        .with_update(move |_ctx, _time| {
            from_update.borrow_mut().push(current().unwrap().id());
        });

    assert!(current().is_none());
    let (result, _log) = run(app, ScriptedSource::new().idle_frames(3));
    result.unwrap();
    assert!(current().is_none());

    let ids = ids.borrow();
    assert_eq!(ids.len(), 4);
    assert!(ids.iter().all(|id| *id == ids[0]));
}

#[test]
fn test_second_launch_is_rejected() {
    let rejected = Rc::new(RefCell::new(None));
    let seen = rejected.clone();

    let app = unpaced(RecordingApp::new()).with_setup(move |_ctx| {
        let second = Shell::launch(
            Box::new(RecordingApp::new()),
            Box::new(NullRenderer),
            "Second",
            Vec::new(),
        );
        *seen.borrow_mut() = second.err();
    });

    let (result, _log) = run(app, ScriptedSource::new().idle());
    result.unwrap();
    assert_eq!(*rejected.borrow(), Some(ShellError::AlreadyLaunched));
}

#[test]
fn test_relaunch_after_teardown() {
    let (first, _) = run(unpaced(RecordingApp::new()), ScriptedSource::new().idle());
    let (second, log) = run(unpaced(RecordingApp::new()), ScriptedSource::new().idle());

    first.unwrap();
    second.unwrap();
    assert_eq!(log.count(|call| matches!(call, Call::Setup { .. })), 1);
}

#[test]
fn test_close_request_ends_run() {
    let source = ScriptedSource::new()
        .idle()
        .with_close()
        .idle_frames(5);

    let (result, log) = run(unpaced(RecordingApp::new()), source);
    result.unwrap();

    assert_eq!(log.count(|call| matches!(call, Call::Update { .. })), 1);
}

#[test]
fn test_window_close_from_hook_quits() {
    let app = unpaced(RecordingApp::new()).with_update(|ctx, _time| {
        if let Some(window) = ctx.window_mut() {
            window.close();
        }
    });

    let (result, log) = run(app, ScriptedSource::new().idle_frames(5));
    result.unwrap();

    assert_eq!(log.count(|call| matches!(call, Call::Update { .. })), 1);
}

#[test]
fn test_resize_reaches_renderer_before_update() {
    let source = ScriptedSource::new()
        .with_resize(300, 200)
        .with_resize(1024, 700);

    let (result, log) = run(unpaced(RecordingApp::new()), source);
    result.unwrap();

    let resize = log
        .position(|call| {
            *call
                == Call::RendererResize {
                    size: Size::new(300, 200),
                }
        })
        .unwrap();
    let first_update = log.position(|call| *call == Call::Update { frame: 1 }).unwrap();
    assert!(resize < first_update);

    assert!(log.calls().contains(&Call::RendererResize {
        size: Size::new(1024, 700)
    }));
}

#[test]
fn test_resizes_in_one_iteration_coalesce() {
    let source = ScriptedSource::new().with_batch(vec![
        PlatformEvent::Resized(Size::new(300, 200)),
        PlatformEvent::Resized(Size::new(400, 300)),
    ]);

    let (result, log) = run(unpaced(RecordingApp::new()), source);
    result.unwrap();

    assert_eq!(
        log.count(|call| matches!(call, Call::RendererResize { .. })),
        1
    );
}

#[test]
fn test_focus_is_forwarded() {
    let source = ScriptedSource::new()
        .with_event(PlatformEvent::Focused(false))
        .with_event(PlatformEvent::Focused(true));

    let (result, log) = run(unpaced(RecordingApp::new()), source);
    result.unwrap();

    let focus: Vec<Call> = log
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::FocusChanged(_)))
        .collect();
    assert_eq!(focus, vec![Call::FocusChanged(false), Call::FocusChanged(true)]);
}

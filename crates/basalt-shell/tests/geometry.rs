//! Window geometry through the app-facing API.
//!
//! Each test runs a scripted sequence of steps inside `update`, one step per frame,
//! and records what the app observed.

use std::cell::RefCell;
use std::rc::Rc;

use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
use basalt_shell::{AppCtx, Capabilities, Display, Pos, Rect, Size, execute_launch};
use basalt_test_utils::{RecordingApp, RecordingRenderer};
use proptest::prelude::*;

type Step = Box<dyn Fn(&mut AppCtx)>;

fn step(f: impl Fn(&mut AppCtx) + 'static) -> Step {
    Box::new(f)
}

/// Runs `steps` on consecutive frames and returns the window size and position
/// seen after each one.
fn run_steps(display: Display, steps: Vec<Step>) -> Vec<(Size<u32>, Pos<i32>, bool)> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = seen.clone();
    let frames = steps.len();

    let app = RecordingApp::new()
        .with_settings(|settings| {
            settings.set_frame_rate(0.0);
            settings.set_window_size(800, 600);
            settings.set_window_pos(100, 100);
        })
        .with_update(move |ctx, time| {
            let index = (time.frame_count - 1) as usize;
            if let Some(action) = steps.get(index) {
                action(ctx);
                record
                    .borrow_mut()
                    .push((ctx.window_size(), ctx.window_pos(), ctx.is_full_screen()));
            }
        });

    let log = app.log();
    execute_launch(
        HeadlessPlatform::new(ScriptedSource::new().idle_frames(frames)).with_display(display),
        app,
        RecordingRenderer::new(log),
        "Geometry",
        Vec::new(),
    )
    .unwrap();

    seen.take()
}

fn display() -> Display {
    Display::new(0, Rect::new(Pos::new(0, 0), Size::new(2560, 1440)))
}

#[test]
fn test_full_screen_round_trip() {
    let seen = run_steps(
        display(),
        vec![
            step(|ctx| ctx.set_full_screen(true)),
            step(|ctx| ctx.set_full_screen(false)),
        ],
    );

    assert_eq!(seen[0], (Size::new(2560, 1440), Pos::new(0, 0), true));
    assert_eq!(seen[1], (Size::new(800, 600), Pos::new(100, 100), false));
}

#[test]
fn test_full_screen_is_idempotent() {
    let seen = run_steps(
        display(),
        vec![
            step(|ctx| ctx.set_full_screen(true)),
            step(|ctx| ctx.set_full_screen(true)),
            step(|ctx| ctx.set_full_screen(false)),
            step(|ctx| ctx.set_full_screen(false)),
        ],
    );

    assert_eq!(seen[0], seen[1]);
    assert_eq!(seen[2], seen[3]);
    assert_eq!(seen[3].0, Size::new(800, 600));
}

#[test]
fn test_mutators_while_full_screen_apply_on_exit() {
    let seen = run_steps(
        display(),
        vec![
            step(|ctx| ctx.set_full_screen(true)),
            step(|ctx| {
                ctx.set_window_size(1024, 768);
                ctx.set_window_pos(10, 20);
            }),
            step(|ctx| ctx.set_full_screen(false)),
        ],
    );

    assert_eq!(seen[1], (Size::new(2560, 1440), Pos::new(0, 0), true));
    assert_eq!(seen[2], (Size::new(1024, 768), Pos::new(10, 20), false));
}

#[test]
fn test_width_and_height_setters() {
    let seen = run_steps(
        display(),
        vec![
            step(|ctx| ctx.set_window_width(1000)),
            step(|ctx| ctx.set_window_height(500)),
        ],
    );

    assert_eq!(seen[0].0, Size::new(1000, 600));
    assert_eq!(seen[1].0, Size::new(1000, 500));
}

#[test]
fn test_geometry_queries_agree() {
    let checks = Rc::new(RefCell::new(0));
    let counter = checks.clone();

    let check = step(move |ctx| {
        let size = ctx.window_size();
        assert_eq!(ctx.window_width(), size.width);
        assert_eq!(ctx.window_height(), size.height);
        if let Some(window) = ctx.window() {
            assert_eq!(window.geometry().effective().size(), size);
        }
        *counter.borrow_mut() += 1;
    });

    run_steps(
        display(),
        vec![
            step(|ctx| ctx.set_window_size(320, 200)),
            step(|ctx| ctx.set_full_screen(true)),
            check,
        ],
    );
    assert_eq!(*checks.borrow(), 1);
}

#[test]
fn test_capability_queries() {
    let seen = Rc::new(RefCell::new(None));
    let record = seen.clone();

    let app = RecordingApp::new().with_setup(move |ctx| {
        *record.borrow_mut() = Some((
            ctx.supports(Capabilities::MULTI_TOUCH),
            ctx.supports(Capabilities::FULL_SCREEN | Capabilities::RESIZE),
        ));
        ctx.hide_cursor();
        assert!(!ctx.window().unwrap().is_cursor_visible());
        ctx.show_cursor();
        assert!(ctx.window().unwrap().is_cursor_visible());
        ctx.quit();
    });

    let log = app.log();
    execute_launch(
        HeadlessPlatform::new(ScriptedSource::new().idle()),
        app,
        RecordingRenderer::new(log),
        "Capabilities",
        Vec::new(),
    )
    .unwrap();

    assert_eq!(*seen.borrow(), Some((true, true)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Setting any nonzero size and then leaving full-screen reports exactly that
    /// size, whether or not the window was full-screen when the size was set.
    #[test]
    fn test_window_size_survives_full_screen_exit(
        width in 1u32..=4096,
        height in 1u32..=4096,
        full_screen_first in any::<bool>(),
    ) {
        let widths = Rc::new(RefCell::new(None));
        let record = widths.clone();

        let seen = run_steps(
            display(),
            vec![
                step(move |ctx| ctx.set_full_screen(full_screen_first)),
                step(move |ctx| ctx.set_window_size(width, height)),
                step(move |ctx| {
                    ctx.set_full_screen(false);
                    *record.borrow_mut() = Some((ctx.window_width(), ctx.window_height()));
                }),
            ],
        );

        prop_assert_eq!(seen[2].0, Size::new(width, height));
        prop_assert!(!seen[2].2);
        prop_assert_eq!(*widths.borrow(), Some((width, height)));
    }
}

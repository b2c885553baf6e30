// src/main.rs
use nannou::event::{MouseScrollDelta, TouchPhase};
use nannou::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use glidepath::{
    animation::{
        ContainerBounds, DeclaredLayout, DriverConfig, DriverHandle, ProgressDriver, ScrollFrame,
    },
    config::Config,
    models::{CursorState, PathProject, PathTable},
    views::{IconView, PageViewport, PathView},
};

struct Model {
    // Core components:
    table: PathTable,
    driver: ProgressDriver,
    handle: DriverHandle,
    driver_config: DriverConfig,
    cursor: Rc<RefCell<Option<CursorState>>>,

    // Virtual page:
    scroll_y: f32,
    document_height: f32,
    container: ContainerBounds,
    wheel_line_px: f32,

    // Views:
    path_view: PathView,
    icon_view: IconView,
    segment_thickness: f32,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load the declared path and build its cumulative layout
    let project =
        PathProject::load(config.resolve_project_path()).expect("Failed to load path file");
    let table = project.build_table().expect("Path file has bad segments");

    // Create window
    app.new_window()
        .title("glidepath 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .build()
        .unwrap();

    let driver_config = config
        .driver
        .to_driver_config()
        .expect("Unrecognized driver marker in config");

    // The listener writes into shared cursor state the views read from
    let cursor = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&cursor);
    let mut driver = ProgressDriver::new();
    let handle = driver.attach(
        table.clone(),
        Box::new(DeclaredLayout {
            thickness: config.style.segment_thickness,
        }),
        driver_config,
        Box::new(move |state| {
            *sink.borrow_mut() = Some(state);
        }),
    );

    Model {
        table,
        driver,
        handle,
        driver_config,
        cursor,

        scroll_y: 0.0,
        document_height: config.page.document_height,
        container: ContainerBounds {
            top: config.page.container_top,
            height: config.page.container_height,
        },
        wheel_line_px: config.page.wheel_line_px,

        path_view: PathView::new(config.style.segment_thickness),
        icon_view: IconView::new(config.style.icon_size),
        segment_thickness: config.style.segment_thickness,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        // Toggle the debug overlay
        Key::D => {
            model.debug_flag = !model.debug_flag;
        }
        // Replay the entrance sweep by re-attaching
        Key::R => {
            reattach(model);
        }
        // Toggle smoothing live
        Key::S => {
            model.driver_config.smoothing.enabled = !model.driver_config.smoothing.enabled;
            reattach(model);
        }
        _ => {}
    }
}

// Re-attaching replaces the previous subscription; the driver disposes it
// first, so the old handle goes dead.
fn reattach(model: &mut Model) {
    let sink = Rc::clone(&model.cursor);
    model.handle = model.driver.attach(
        model.table.clone(),
        Box::new(DeclaredLayout {
            thickness: model.segment_thickness,
        }),
        model.driver_config,
        Box::new(move |state| {
            *sink.borrow_mut() = Some(state);
        }),
    );
}

fn mouse_wheel(app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => y * model.wheel_line_px,
        MouseScrollDelta::PixelDelta(position) => position.y as f32,
    };

    let max = PageViewport::max_scroll(model.document_height, app.window_rect().h());
    model.scroll_y = (model.scroll_y - dy).clamp(0.0, max);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let dt = (now - model.last_update).as_secs_f32();
    model.last_update = now;

    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / dt.max(1e-6);
    }

    /*************** Feed the driver one scroll observation ***************/
    model.driver.observe(
        ScrollFrame {
            offset: model.scroll_y,
            container: model.container,
            viewport_height: app.window_rect().h(),
        },
        dt,
    );
    /**********************************************************************/
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let viewport = PageViewport::new(model.scroll_y, app.window_rect());

    // Page heading, scrolls with the document
    draw.text("Interactive Shield Path")
        .xy(viewport.to_window(viewport.window_width / 2.0, 60.0))
        .color(BLACK)
        .font_size(32);

    model.path_view.draw(&draw, &model.table, &viewport);

    if let Some(cursor) = *model.cursor.borrow() {
        model.icon_view.draw(&draw, &cursor, &viewport);
    }

    if model.debug_flag {
        let window = app.window_rect();
        let status = format!(
            "FPS: {:.1}  scroll: {:.0}  state: {:?}  disposed: {}",
            model.fps,
            model.scroll_y,
            model.driver.state(),
            model.handle.is_disposed(),
        );
        draw.text(&status)
            .x_y(window.left() + 180.0, window.top() - 20.0)
            .color(RED)
            .font_size(14);
    }

    draw.to_frame(app, &frame).unwrap();
}

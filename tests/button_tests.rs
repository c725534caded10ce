//! Tests for the button state machine.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{BlinkEnv, RecordingSink, cell_center, renderer};
use glyphgrid::{
    Button, ButtonState, ButtonStyle, Color, ColorPair, Config, InputEvent, MouseButton,
    RedrawReceiver, RedrawRequest, Widget, redraw_channel,
};

const COLUMN: u32 = 1;
const ROW: u32 = 2;

fn press(x: i32, y: i32) -> InputEvent {
    InputEvent::MousePress {
        x,
        y,
        button: MouseButton::Primary,
    }
}

fn release(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseRelease {
        x,
        y,
        button: MouseButton::Primary,
    }
}

fn hover(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseMove { x, y, button: None }
}

fn drag(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseMove {
        x,
        y,
        button: Some(MouseButton::Primary),
    }
}

/// A painted "<OK>" button and its click counter.
fn painted_button() -> (Button, Arc<AtomicUsize>, RedrawReceiver) {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let (tx, rx) = redraw_channel();
    let button = Button::new("OK", COLUMN, ROW, ButtonStyle::default(), tx, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let mut renderer = renderer();
    button
        .render(&mut renderer, &mut RecordingSink::default())
        .unwrap();
    (button, clicks, rx)
}

fn inside() -> (i32, i32) {
    cell_center(COLUMN + 2, ROW)
}

fn outside() -> (i32, i32) {
    cell_center(COLUMN + 10, ROW)
}

#[test]
fn test_layout() {
    let (button, _, _) = painted_button();
    assert_eq!(button.row().text(), "<OK>");
    assert_eq!(button.label(), "OK");
    assert_eq!(button.state(), ButtonState::Normal);
    let style = ButtonStyle::default();
    assert_eq!(
        button.row().cell(2).unwrap().read().background(),
        style.normal.background
    );
    assert!(button.bounds().is_some());
}

#[test]
fn test_unpainted_button_ignores_pointer() {
    let (tx, _rx) = redraw_channel();
    let mut button = Button::new("X", 0, 0, ButtonStyle::default(), tx, || {});
    assert!(button.bounds().is_none());
    assert!(!button.handle_input(&press(1, 1)));
    assert_eq!(button.state(), ButtonState::Normal);
}

#[test]
fn test_click_inside_fires_once() {
    let (mut button, clicks, _) = painted_button();
    let (x, y) = inside();
    button.handle_input(&hover(x, y));
    assert_eq!(button.state(), ButtonState::Hovered);
    button.handle_input(&press(x, y));
    assert_eq!(button.state(), ButtonState::Pressed);
    button.handle_input(&release(x, y));
    assert_eq!(button.state(), ButtonState::Hovered);
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_press_outside_never_clicks() {
    let (mut button, clicks, _) = painted_button();
    let (ox, oy) = outside();
    let (ix, iy) = inside();
    button.handle_input(&press(ox, oy));
    assert_eq!(button.state(), ButtonState::Normal);
    button.handle_input(&release(ix, iy));
    button.handle_input(&release(ox, oy));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_release_outside_after_press_still_clicks() {
    let (mut button, clicks, _) = painted_button();
    let (ix, iy) = inside();
    let (ox, oy) = outside();
    button.handle_input(&press(ix, iy));
    button.handle_input(&hover(ox, oy));
    assert_eq!(button.state(), ButtonState::Pressed);
    button.handle_input(&release(ox, oy));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(button.state(), ButtonState::Normal);
}

#[test]
fn test_drag_out_and_back_then_release_clicks() {
    let (mut button, clicks, _) = painted_button();
    let (ix, iy) = inside();
    let (ox, oy) = outside();
    button.handle_input(&hover(ix, iy));
    button.handle_input(&press(ix, iy));
    assert!(!button.handle_input(&drag(ox, oy)));
    assert_eq!(button.state(), ButtonState::Pressed);
    assert!(!button.handle_input(&drag(ix, iy)));
    assert_eq!(button.state(), ButtonState::Pressed);

    button.handle_input(&release(ix, iy));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(button.state(), ButtonState::Hovered);
}

#[test]
fn test_drag_from_outside_does_not_hover() {
    let (mut button, clicks, _) = painted_button();
    let (ix, iy) = inside();
    let (ox, oy) = outside();
    button.handle_input(&press(ox, oy));
    button.handle_input(&drag(ix, iy));
    assert_eq!(button.state(), ButtonState::Normal);
    button.handle_input(&release(ix, iy));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(button.state(), ButtonState::Hovered);
}

#[test]
fn test_transitions_recolor_and_redraw_once() {
    let (mut button, _, mut rx) = painted_button();
    let style = ButtonStyle::default();
    let (x, y) = inside();

    button.handle_input(&hover(x, y));
    button.handle_input(&hover(x + 1, y));
    assert_eq!(rx.drain(), vec![RedrawRequest::WidgetChanged]);
    assert_eq!(
        button.row().cell(0).unwrap().read().foreground(),
        style.hovered.foreground
    );

    button.handle_input(&press(x, y));
    assert_eq!(
        button.row().cell(3).unwrap().read().background(),
        style.pressed.background
    );

    let (ox, oy) = outside();
    button.handle_input(&release(ox, oy));
    button.handle_input(&hover(ox, oy));
    assert_eq!(
        button.row().cell(1).unwrap().read().foreground(),
        style.normal.foreground
    );
    assert_eq!(rx.drain().len(), 2);
}

#[test]
fn test_secondary_button_ignored() {
    let (mut button, clicks, _) = painted_button();
    let (x, y) = inside();
    let handled = button.handle_input(&InputEvent::MousePress {
        x,
        y,
        button: MouseButton::Secondary,
    });
    assert!(!handled);
    button.handle_input(&release(x, y));
    assert_eq!(clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_palette_update_repaints_only_active_state() {
    let (mut button, _, mut rx) = painted_button();
    let teal = ColorPair::new(Color::rgb(0, 128, 128), Color::BLACK);

    button.set_hovered_colors(teal);
    assert!(rx.drain().is_empty());
    assert_ne!(button.row().cell(1).unwrap().read().foreground(), teal.foreground);

    button.set_normal_colors(teal);
    assert_eq!(rx.drain(), vec![RedrawRequest::WidgetChanged]);
    assert_eq!(button.row().cell(1).unwrap().read().foreground(), teal.foreground);
}

#[test]
fn test_delimiters() {
    let (mut button, _, _) = painted_button();
    button.set_starting_character('[');
    button.set_ending_character(']');
    assert_eq!(button.row().text(), "[OK]");
    assert_eq!(button.label(), "OK");
    assert_eq!(button.starting_character(), '[');
}

#[test]
fn test_blink_skips_delimiters_and_stops_on_drop() {
    let env = BlinkEnv::new();
    let (tx, _rx) = redraw_channel();
    let button = Button::from_config("GO", 0, 0, &Config::default(), tx, || {});
    button.enable_blink(100, &env.blink);

    let blinking: Vec<bool> = button.row().iter().map(|c| c.is_blinking()).collect();
    assert_eq!(blinking, vec![false, true, true, false]);

    button.disable_blink();
    assert_eq!(env.clock.pending(), 0);

    button.enable_blink(100, &env.blink);
    drop(button);
    assert_eq!(env.clock.pending(), 0);
}

#[test]
fn test_config_underline_thickness_reaches_cells() {
    let (tx, _rx) = redraw_channel();
    let config = Config {
        underline_thickness: 5,
        ..Config::default()
    };
    let button = Button::from_config("GO", 0, 0, &config, tx, || {});
    assert!(
        button
            .row()
            .iter()
            .all(|c| c.read().underline_thickness() == 5)
    );
}

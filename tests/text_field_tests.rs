//! Tests for text field editing, caret movement and scrolling.

mod common;

use std::sync::Arc;

use common::{BlinkEnv, RecordingSink, cell_center, renderer};
use glyphgrid::{
    CharFilter, Config, InputEvent, KeyCode, KeyToggles, MouseButton, RedrawRequest,
    SurfaceError, TextField, TextFieldStyle, Widget,
};

fn any_char() -> CharFilter {
    Arc::new(|c: char| !c.is_control())
}

fn field(env: &BlinkEnv, visible: usize, max: usize) -> TextField {
    TextField::new(
        visible,
        max,
        0,
        0,
        &TextFieldStyle::default(),
        any_char(),
        env.blink.clone(),
    )
    .unwrap()
}

fn type_str(field: &mut TextField, text: &str) {
    for c in text.chars() {
        field.type_char(c);
    }
}

fn blinking_indices(field: &TextField) -> Vec<usize> {
    field
        .row()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_blinking())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_invalid_dimensions() {
    let env = BlinkEnv::new();
    let style = TextFieldStyle::default();
    assert!(matches!(
        TextField::new(0, 5, 0, 0, &style, any_char(), env.blink.clone()),
        Err(SurfaceError::InvalidArgument(_))
    ));
    assert!(TextField::new(6, 5, 0, 0, &style, any_char(), env.blink.clone()).is_err());
}

#[test]
fn test_fill_then_overwrite_last() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 5, 5);
    type_str(&mut f, "hello");
    assert_eq!(f.text(), "hello");
    assert_eq!(f.actual_caret(), 4);

    f.type_char('!');
    assert_eq!(f.text(), "hell!");
    assert_eq!(f.text().chars().count(), 5);
}

#[test]
fn test_rejected_characters_change_nothing() {
    let mut env = BlinkEnv::new();
    let mut f = TextField::from_config(4, 4, 0, 0, &Config::default(), env.blink.clone()).unwrap();
    env.redraws.drain();
    assert!(!f.type_char('\n'));
    assert!(!f.type_char('é'));
    assert_eq!(f.text(), "    ");
    assert_eq!(f.actual_caret(), 0);
    assert!(env.redraws.drain().is_empty());
    assert!(f.type_char('Q'));
    assert_eq!(f.text(), "Q   ");
}

#[test]
fn test_invalid_config_pattern_falls_back() {
    let env = BlinkEnv::new();
    let mut config = Config::default();
    config.text_field.allowed_pattern = "([".to_string();
    let mut f = TextField::from_config(3, 3, 0, 0, &config, env.blink.clone()).unwrap();
    assert!(f.type_char('a'));
    assert!(!f.type_char('\t'));
}

#[test]
fn test_config_underline_thickness_reaches_cells() {
    let env = BlinkEnv::new();
    let config = Config {
        underline_thickness: 4,
        ..Config::default()
    };
    let mut f = TextField::from_config(3, 5, 0, 0, &config, env.blink.clone()).unwrap();
    type_str(&mut f, "abcd");
    assert!(f.row().iter().all(|c| c.read().underline_thickness() == 4));
}

#[test]
fn test_window_scrolls_with_caret() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 3, 6);
    type_str(&mut f, "abcde");
    assert_eq!((f.actual_caret(), f.visual_caret()), (5, 2));
    assert_eq!(f.row().text(), "de ");

    f.apply_key(KeyCode::Home);
    assert_eq!((f.actual_caret(), f.visual_caret()), (0, 0));
    assert_eq!(f.row().text(), "abc");

    f.apply_key(KeyCode::End);
    assert_eq!((f.actual_caret(), f.visual_caret()), (5, 2));
    assert_eq!(f.row().text(), "de ");
}

#[test]
fn test_arrows_clamp_independently() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 3, 6);
    type_str(&mut f, "abcdef");
    assert_eq!((f.actual_caret(), f.visual_caret()), (5, 2));

    for _ in 0..3 {
        f.apply_key(KeyCode::Left);
    }
    assert_eq!((f.actual_caret(), f.visual_caret()), (2, 0));
    assert_eq!(f.row().text(), "cde");

    f.apply_key(KeyCode::Left);
    assert_eq!((f.actual_caret(), f.visual_caret()), (1, 0));
    assert_eq!(f.row().text(), "bcd");

    for _ in 0..10 {
        f.apply_key(KeyCode::Right);
    }
    assert_eq!((f.actual_caret(), f.visual_caret()), (5, 2));
    assert_eq!(f.row().text(), "def");
}

#[test]
fn test_delete_keeps_caret() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 4, 4);
    type_str(&mut f, "abc");
    f.apply_key(KeyCode::Left);
    f.apply_key(KeyCode::Delete);
    assert_eq!(f.text(), "ab  ");
    assert_eq!(f.actual_caret(), 2);
}

#[test]
fn test_backspace_at_last_index() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 4, 4);
    type_str(&mut f, "abcd");
    assert_eq!(f.actual_caret(), 3);

    // Non-blank: clear in place
    f.apply_key(KeyCode::Backspace);
    assert_eq!(f.text(), "abc ");
    assert_eq!(f.actual_caret(), 3);

    // Blank: step left, then clear
    f.apply_key(KeyCode::Backspace);
    assert_eq!(f.text(), "ab  ");
    assert_eq!(f.actual_caret(), 2);
    assert_eq!(f.visual_caret(), 2);
}

#[test]
fn test_backspace_at_start_clears_first() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 3, 3);
    f.set_text("xyz");
    f.apply_key(KeyCode::Backspace);
    assert_eq!(f.text(), " yz");
    assert_eq!(f.actual_caret(), 0);
}

#[test]
fn test_disabled_key_is_complete_noop() {
    let mut env = BlinkEnv::new();
    let mut f = field(&env, 4, 4);
    type_str(&mut f, "ab");
    f.set_keys(KeyToggles {
        left_arrow: false,
        backspace: false,
        ..KeyToggles::default()
    });
    env.redraws.drain();

    assert!(!f.apply_key(KeyCode::Left));
    assert!(!f.apply_key(KeyCode::Backspace));
    assert_eq!(f.actual_caret(), 2);
    assert_eq!(f.text(), "ab  ");
    assert!(env.redraws.drain().is_empty());

    assert!(f.apply_key(KeyCode::Home));
    assert_eq!(env.redraws.drain(), vec![RedrawRequest::WidgetChanged]);
}

#[test]
fn test_only_caret_cell_blinks() {
    let env = BlinkEnv::new();
    let style = TextFieldStyle::default();
    let mut f = field(&env, 4, 8);
    assert_eq!(blinking_indices(&f), vec![0]);

    type_str(&mut f, "ab");
    assert_eq!(blinking_indices(&f), vec![2]);
    assert_eq!(env.clock.pending(), 1);

    let old = f.row().cell(0).unwrap().read().clone();
    assert_eq!(old.background(), style.background);
    let caret = f.row().cell(2).unwrap().read().clone();
    assert_eq!(caret.background(), style.caret_background);

    f.apply_key(KeyCode::End);
    assert_eq!(blinking_indices(&f), vec![3]);
    assert_eq!(env.clock.pending(), 1);
}

#[test]
fn test_moving_caret_unhides_previous_cell() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 4, 4);
    env.advance_ms(1000);
    assert!(f.row().cell(0).unwrap().read().is_hidden());

    f.apply_key(KeyCode::Right);
    assert!(!f.row().cell(0).unwrap().read().is_hidden());
    env.advance_ms(3000);
    assert!(!f.row().cell(0).unwrap().read().is_hidden());
}

#[test]
fn test_set_and_clear_text() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 3, 5);
    f.set_text("abcdefgh");
    assert_eq!(f.text(), "abcde");
    assert_eq!(f.row().text(), "abc");

    f.set_text("xy");
    assert_eq!(f.text(), "xy   ");

    f.set_text("");
    assert_eq!(f.text(), "     ");

    f.set_text("q");
    f.clear_text();
    assert_eq!(f.text(), "     ");
    assert_eq!(f.row().text(), "   ");
}

#[test]
fn test_focus_gates_keyboard_input() {
    let env = BlinkEnv::new();
    let mut f = field(&env, 4, 4);
    let mut renderer = renderer();
    f.render(&mut renderer, &mut RecordingSink::default()).unwrap();

    assert!(!f.handle_input(&InputEvent::CharTyped('a')));
    assert_eq!(f.text(), "    ");

    let (x, y) = cell_center(1, 0);
    assert!(f.handle_input(&InputEvent::MousePress {
        x,
        y,
        button: MouseButton::Primary
    }));
    assert!(f.is_focused());
    assert!(f.handle_input(&InputEvent::CharTyped('a')));
    assert!(f.handle_input(&InputEvent::KeyAction(KeyCode::Home)));
    assert_eq!(f.text(), "a   ");

    let (x, y) = cell_center(9, 3);
    f.handle_input(&InputEvent::MousePress {
        x,
        y,
        button: MouseButton::Primary,
    });
    assert!(!f.is_focused());
    assert!(!f.handle_input(&InputEvent::CharTyped('b')));
}

#[test]
fn test_drop_stops_caret_blink() {
    let env = BlinkEnv::new();
    let f = field(&env, 4, 4);
    assert_eq!(env.clock.pending(), 1);
    drop(f);
    assert_eq!(env.clock.pending(), 0);
}

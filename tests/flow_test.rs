use lesson_ngin::{
    config::LessonConfig,
    flow::{Input, LoopState},
    lessons::rotate_texture::{INITIAL_MIX, MIX_STEP, step_mix},
    viewport::Viewport,
};
use winit::{event::WindowEvent, keyboard::KeyCode};

#[test]
fn should_keep_running_without_escape() {
    let mut input = Input::default();
    assert_eq!(LoopState::default(), LoopState::Running);
    assert_eq!(LoopState::Running.process_input(&input), LoopState::Running);

    input.press(KeyCode::KeyW);
    assert_eq!(LoopState::Running.process_input(&input), LoopState::Running);
}

#[test]
fn should_close_on_escape() {
    let mut input = Input::default();
    input.press(KeyCode::Escape);
    let state = LoopState::Running.process_input(&input);
    assert!(state.is_closing());

    // closing is terminal
    input.release(KeyCode::Escape);
    assert_eq!(state.process_input(&input), LoopState::Closing);
}

#[test]
fn should_close_on_close_request() {
    assert_eq!(LoopState::Running.close_requested(), LoopState::Closing);
    assert_eq!(LoopState::Closing.close_requested(), LoopState::Closing);
}

#[test]
fn should_forget_keys_when_focus_is_lost() {
    let mut input = Input::default();
    input.press(KeyCode::Escape);
    input.handle_window_event(&WindowEvent::Focused(false));
    assert!(!input.is_pressed(KeyCode::Escape));
    assert_eq!(LoopState::Running.process_input(&input), LoopState::Running);
}

#[test]
fn should_reset_viewport_on_resize() {
    let config = LessonConfig::default();
    let mut viewport = Viewport::from_size(config.width, config.height);
    assert_eq!(viewport, Viewport::from_size(800, 600));

    assert!(viewport.resize(1024, 768));
    assert_eq!(
        viewport,
        Viewport {
            x: 0,
            y: 0,
            width: 1024,
            height: 768
        }
    );
    assert!((viewport.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn should_ignore_zero_sized_resize() {
    let mut viewport = Viewport::from_size(800, 600);
    assert!(!viewport.resize(0, 0));
    assert!(!viewport.resize(640, 0));
    assert_eq!(viewport, Viewport::from_size(800, 600));
}

#[test]
fn should_default_to_lesson_window() {
    let config = LessonConfig::new("LearnOpenGL");
    assert_eq!(config.title, "LearnOpenGL");
    assert_eq!((config.width, config.height), (800, 600));
    assert_eq!(config.clear_colour, LessonConfig::DEFAULT_CLEAR_COLOUR);
    assert!(!config.srgb);

    let config = config.with_size(1280, 720);
    assert_eq!((config.width, config.height), (1280, 720));
}

#[test]
fn should_step_mix_value_with_arrows() {
    let mut input = Input::default();
    assert_eq!(step_mix(INITIAL_MIX, &input), INITIAL_MIX);

    input.press(KeyCode::ArrowUp);
    assert!((step_mix(INITIAL_MIX, &input) - (INITIAL_MIX + MIX_STEP)).abs() < 1e-6);
    assert_eq!(step_mix(1.0, &input), 1.0);

    input.release(KeyCode::ArrowUp);
    input.press(KeyCode::ArrowDown);
    assert!((step_mix(INITIAL_MIX, &input) - (INITIAL_MIX - MIX_STEP)).abs() < 1e-6);
    assert_eq!(step_mix(0.0, &input), 0.0);
}

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_fireworks::input::map_event;
use tui_fireworks::types::{Control, NUM_PARTICLES};
use tui_fireworks::App;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

fn dispatch(app: &mut App<StdRng>, ev: Event) -> Control {
    match map_event(ev) {
        Some(ev) => app.on_event(ev),
        None => Control::Continue,
    }
}

#[test]
fn quit_keys_stop_the_loop() {
    let mut app = App::new(20, 10, StdRng::seed_from_u64(1));
    assert_eq!(dispatch(&mut app, key(KeyCode::Char('q'))), Control::Quit);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(dispatch(&mut app, ctrl_c), Control::Quit);
}

#[test]
fn other_key_replaces_every_particle() {
    let mut app = App::new(40, 20, StdRng::seed_from_u64(2));
    for _ in 0..30 {
        app.on_tick();
    }
    let stale = app.simulation().particles().to_vec();

    assert_eq!(dispatch(&mut app, key(KeyCode::Char(' '))), Control::Continue);

    let fresh = app.simulation().particles();
    assert_eq!(fresh.len(), NUM_PARTICLES);
    // A new burst starts from a single shared origin.
    let origin = fresh[0].position();
    assert!(fresh.iter().all(|p| p.position() == origin));
    for old in &stale {
        assert!(!fresh.iter().any(|p| p.physics == old.physics));
    }
}

#[test]
fn resize_applies_on_next_render() {
    let mut app = App::new(20, 10, StdRng::seed_from_u64(3));
    assert_eq!(dispatch(&mut app, Event::Resize(6, 2)), Control::Continue);
    let out = app.render();
    assert_eq!(out.split('\n').count(), 2);
}

#[test]
fn respawn_after_shrink_to_zero() {
    let mut app = App::new(20, 10, StdRng::seed_from_u64(4));
    dispatch(&mut app, Event::Resize(0, 0));
    dispatch(&mut app, key(KeyCode::Enter));
    app.on_tick();
    assert_eq!(app.render(), "");
}

#[test]
fn same_seed_same_frames() {
    let mut a = App::new(30, 10, StdRng::seed_from_u64(5));
    let mut b = App::new(30, 10, StdRng::seed_from_u64(5));
    for _ in 0..20 {
        a.on_tick();
        b.on_tick();
        assert_eq!(a.render(), b.render());
    }
}

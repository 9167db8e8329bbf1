//! Unit tests for the interaction state machine.

use bevy::prelude::*;

use super::controller::{InteractionController, NudgeSteps};
use super::mode::{Direction, MenuAction, Mode, PointerAffordance, RotateDirection};
use crate::annotations::{AnnotationId, AnnotationStore, Axis, Family};

const ANCHOR: Vec2 = Vec2::new(320.0, 240.0);

fn setup() -> (InteractionController, AnnotationStore) {
    (InteractionController::default(), AnnotationStore::default())
}

fn place(
    controller: &mut InteractionController,
    store: &mut AnnotationStore,
    family: Family,
    point: Vec3,
) -> AnnotationId {
    controller.request_placement(family);
    controller
        .surface_clicked(store, point)
        .expect("placement should create an annotation")
        .id()
}

fn start_move(
    controller: &mut InteractionController,
    store: &mut AnnotationStore,
    id: AnnotationId,
) {
    controller.flag_right_clicked(store, id, ANCHOR);
    controller.context_menu_action(store, MenuAction::Move);
}

#[test]
fn test_place_sensor_returns_to_idle() {
    let (mut controller, mut store) = setup();

    controller.request_placement(Family::Sensor);
    assert_eq!(controller.mode(), &Mode::Placing(Family::Sensor));
    assert_eq!(
        controller.pointer_affordance(),
        PointerAffordance::Placing(Family::Sensor)
    );

    let created = controller.surface_clicked(&mut store, Vec3::ZERO).unwrap();
    assert_eq!(created.family(), Family::Sensor);
    assert_eq!(store.len(), 1);
    assert!(controller.mode().is_idle());
    assert_eq!(controller.pointer_affordance(), PointerAffordance::Default);
}

#[test]
fn test_switching_tool_keeps_single_pending_placement() {
    let (mut controller, mut store) = setup();

    controller.request_placement(Family::Marker);
    controller.request_placement(Family::Alert);
    assert_eq!(controller.mode(), &Mode::Placing(Family::Alert));

    let created = controller.surface_clicked(&mut store, Vec3::ONE).unwrap();
    assert_eq!(created.family(), Family::Alert);
    assert_eq!(store.len(), 1);

    // The marker request was replaced, not queued
    assert!(controller.surface_clicked(&mut store, Vec3::ONE).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_surface_click_ignored_when_idle() {
    let (mut controller, mut store) = setup();
    assert!(controller.surface_clicked(&mut store, Vec3::ZERO).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_surface_click_ignored_while_repositioning() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
    start_move(&mut controller, &mut store, id);

    assert!(controller.surface_clicked(&mut store, Vec3::ONE).is_none());
    assert_eq!(store.len(), 1);
    assert!(controller.mode().reposition_session().is_some());
}

#[test]
fn test_dismiss_all_drops_pending_placement() {
    let (mut controller, mut store) = setup();

    controller.request_placement(Family::Marker);
    controller.dismiss_all();

    assert!(controller.mode().is_idle());
    assert_eq!(controller.pointer_affordance(), PointerAffordance::Default);
    assert!(controller.surface_clicked(&mut store, Vec3::ZERO).is_none());
}

#[test]
fn test_right_click_opens_menu_without_changing_mode() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.request_placement(Family::Alert);
    controller.flag_right_clicked(&store, id, ANCHOR);

    assert_eq!(controller.selected_id(), Some(id));
    let menu = controller.context_menu().unwrap();
    assert_eq!(menu.target, id);
    assert_eq!(menu.anchor, ANCHOR);
    assert_eq!(controller.mode(), &Mode::Placing(Family::Alert));
}

#[test]
fn test_right_click_on_stale_id_is_ignored() {
    let (mut controller, store) = setup();
    controller.flag_right_clicked(&store, 404, ANCHOR);
    assert!(controller.context_menu().is_none());
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_edit_sets_label_and_clears_selection() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.context_menu_action(&mut store, MenuAction::Edit);

    assert!(controller.context_menu().is_none());
    let prompt = controller.label_prompt().unwrap();
    assert_eq!(prompt.target, id);
    assert_eq!(prompt.current, "NO DATA");

    controller.submit_label(&mut store, Some("Flange A".to_string()));
    assert_eq!(store.get(id).unwrap().label, "Flange A");
    assert!(controller.label_prompt().is_none());
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_cancelled_edit_keeps_label() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Alert, Vec3::ZERO);
    store.set_label(id, "Existing");

    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.context_menu_action(&mut store, MenuAction::Edit);
    controller.submit_label(&mut store, None);

    assert_eq!(store.get(id).unwrap().label, "Existing");
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_edit_refreshes_visible_tooltip() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.pointer_over(&store, id, ANCHOR);
    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.context_menu_action(&mut store, MenuAction::Edit);
    controller.submit_label(&mut store, Some("Updated".to_string()));

    assert_eq!(controller.tooltip().unwrap().text, "Updated");
}

#[test]
fn test_delete_removes_and_clears_selection() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.context_menu_action(&mut store, MenuAction::Delete);

    assert!(store.is_empty());
    assert!(controller.selected_id().is_none());
    assert!(controller.context_menu().is_none());
}

#[test]
fn test_menu_action_without_selection_is_noop() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.context_menu_action(&mut store, MenuAction::Delete);
    assert!(store.contains(id));
    assert!(controller.mode().is_idle());
}

#[test]
fn test_menu_action_on_deleted_target_only_closes_menu() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.flag_right_clicked(&store, id, ANCHOR);
    store.delete(id);
    controller.context_menu_action(&mut store, MenuAction::Move);

    assert!(controller.mode().is_idle());
    assert!(controller.context_menu().is_none());
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_nudge_up_three_times_then_cancel() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::new(0.4, 0.5, 0.6));
    let original = store.get(id).unwrap().position;

    start_move(&mut controller, &mut store, id);
    assert_eq!(controller.selected_id(), Some(id));

    for _ in 0..3 {
        controller.nudge(&mut store, Direction::Up);
    }
    let moved = store.get(id).unwrap().position;
    assert!((moved.y - (original.y + 0.03)).abs() < 1e-5);
    assert_eq!(moved.x, original.x);
    assert_eq!(moved.z, original.z);

    controller.cancel_reposition(&mut store);
    assert_eq!(store.get(id).unwrap().position, original);
    assert!(controller.mode().is_idle());
    assert!(controller.selected_id().is_none());
    assert!(controller.reposition_panel().is_none());
}

#[test]
fn test_confirm_keeps_live_edits() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    start_move(&mut controller, &mut store, id);
    controller.nudge(&mut store, Direction::Right);
    controller.nudge(&mut store, Direction::Forward);
    controller.confirm_reposition();

    let position = store.get(id).unwrap().position;
    assert!((position.x - 0.01).abs() < 1e-6);
    assert!((position.z + 0.01).abs() < 1e-6);
    assert!(controller.mode().is_idle());
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_rotation_panel_only_for_sensors() {
    let (mut controller, mut store) = setup();
    let marker = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
    let sensor = place(&mut controller, &mut store, Family::Sensor, Vec3::ONE);

    start_move(&mut controller, &mut store, marker);
    let panel = controller.reposition_panel().unwrap();
    assert_eq!(panel.target, marker);
    assert!(!panel.show_rotation);
    controller.confirm_reposition();

    start_move(&mut controller, &mut store, sensor);
    let panel = controller.reposition_panel().unwrap();
    assert_eq!(panel.target, sensor);
    assert!(panel.show_rotation);
}

#[test]
fn test_rotate_sensor_and_cancel_restores_rotation() {
    let (mut controller, mut store) = setup();
    let sensor = place(&mut controller, &mut store, Family::Sensor, Vec3::ZERO);

    start_move(&mut controller, &mut store, sensor);
    controller.rotate(&mut store, Axis::Y, RotateDirection::Up);
    controller.rotate(&mut store, Axis::Y, RotateDirection::Up);
    controller.rotate(&mut store, Axis::X, RotateDirection::Down);

    let rotation = store.get(sensor).unwrap().rotation;
    assert!((rotation.y - 0.2).abs() < 1e-6);
    assert!((rotation.x + 0.1).abs() < 1e-6);

    controller.cancel_reposition(&mut store);
    assert_eq!(store.get(sensor).unwrap().rotation, Vec3::ZERO);
}

#[test]
fn test_rotate_non_sensor_is_noop() {
    let (mut controller, mut store) = setup();
    let marker = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    start_move(&mut controller, &mut store, marker);
    controller.rotate(&mut store, Axis::Z, RotateDirection::Up);
    assert_eq!(store.get(marker).unwrap().rotation, Vec3::ZERO);
}

#[test]
fn test_configured_steps_are_used() {
    let mut controller = InteractionController::with_steps(NudgeSteps {
        position: 0.5,
        rotation: 1.0,
    });
    let mut store = AnnotationStore::default();
    let sensor = place(&mut controller, &mut store, Family::Sensor, Vec3::ZERO);

    start_move(&mut controller, &mut store, sensor);
    controller.nudge(&mut store, Direction::Down);
    controller.rotate(&mut store, Axis::Z, RotateDirection::Down);

    let annotation = store.get(sensor).unwrap();
    assert_eq!(annotation.position, Vec3::new(0.0, -0.5, 0.0));
    assert_eq!(annotation.rotation, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_placement_request_ignored_while_repositioning() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    start_move(&mut controller, &mut store, id);
    controller.request_placement(Family::Alert);

    assert!(controller.mode().reposition_session().is_some());
    assert_eq!(controller.pointer_affordance(), PointerAffordance::Default);
}

#[test]
fn test_move_exits_placing_mode() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.request_placement(Family::Sensor);
    start_move(&mut controller, &mut store, id);

    assert!(controller.mode().placing_family().is_none());
    assert!(controller.mode().reposition_session().is_some());
}

#[test]
fn test_move_second_target_commits_first() {
    let (mut controller, mut store) = setup();
    let first = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
    let second = place(&mut controller, &mut store, Family::Alert, Vec3::ONE);

    start_move(&mut controller, &mut store, first);
    controller.nudge(&mut store, Direction::Up);
    start_move(&mut controller, &mut store, second);
    controller.cancel_reposition(&mut store);

    // Cancelling the second session must not roll back the first
    assert!((store.get(first).unwrap().position.y - 0.01).abs() < 1e-6);
    assert_eq!(store.get(second).unwrap().position, Vec3::ONE);
}

#[test]
fn test_repeat_move_keeps_original_snapshot() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    start_move(&mut controller, &mut store, id);
    controller.nudge(&mut store, Direction::Left);
    start_move(&mut controller, &mut store, id);
    controller.cancel_reposition(&mut store);

    assert_eq!(store.get(id).unwrap().position, Vec3::ZERO);
}

#[test]
fn test_delete_target_mid_reposition_ends_session() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Sensor, Vec3::ZERO);

    start_move(&mut controller, &mut store, id);
    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.context_menu_action(&mut store, MenuAction::Delete);

    assert!(store.is_empty());
    assert!(controller.mode().is_idle());
    assert!(controller.reposition_panel().is_none());

    // Stale follow-up events are harmless
    controller.nudge(&mut store, Direction::Up);
    controller.cancel_reposition(&mut store);
    assert!(store.is_empty());
}

#[test]
fn test_menu_on_other_annotation_keeps_session_target() {
    let (mut controller, mut store) = setup();
    let moving = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
    let other = place(&mut controller, &mut store, Family::Alert, Vec3::ONE);

    start_move(&mut controller, &mut store, moving);
    controller.flag_right_clicked(&store, other, ANCHOR);
    assert_eq!(controller.selected_id(), Some(other));

    controller.context_menu_action(&mut store, MenuAction::Delete);
    assert!(!store.contains(other));
    assert_eq!(controller.selected_id(), Some(moving));

    controller.nudge(&mut store, Direction::Up);
    assert!((store.get(moving).unwrap().position.y - 0.01).abs() < 1e-6);
}

#[test]
fn test_close_context_menu_clears_selection() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    controller.flag_right_clicked(&store, id, ANCHOR);
    controller.close_context_menu();

    assert!(controller.context_menu().is_none());
    assert!(controller.selected_id().is_none());
}

#[test]
fn test_dismiss_all_commits_reposition() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

    start_move(&mut controller, &mut store, id);
    controller.nudge(&mut store, Direction::Backward);
    controller.dismiss_all();

    assert!(controller.mode().is_idle());
    assert!((store.get(id).unwrap().position.z - 0.01).abs() < 1e-6);
}

#[test]
fn test_tooltip_follows_pointer() {
    let (mut controller, mut store) = setup();
    let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
    store.set_label(id, "");

    controller.pointer_over(&store, id, ANCHOR);
    let tooltip = controller.tooltip().unwrap();
    assert_eq!(tooltip.text, "NO DATA");
    assert_eq!(tooltip.anchor, ANCHOR);
    assert!(controller.mode().is_idle());

    controller.pointer_out();
    assert!(controller.tooltip().is_none());
}

#[test]
fn test_reset_keeps_steps() {
    let steps = NudgeSteps {
        position: 0.2,
        rotation: 0.3,
    };
    let mut controller = InteractionController::with_steps(steps);
    controller.request_placement(Family::Alert);
    controller.reset();

    assert!(controller.mode().is_idle());
    assert_eq!(controller.steps(), steps);
}

/// Every event the view layer can deliver.
#[derive(Debug, Clone, Copy)]
enum Event {
    RequestPlacement(Family),
    SurfaceClicked,
    RightClickMarker,
    RightClickSensor,
    RightClickStale,
    Menu(MenuAction),
    SubmitLabel(bool),
    CloseMenu,
    Nudge(Direction),
    Rotate(Axis, RotateDirection),
    Confirm,
    Cancel,
    PointerOver,
    PointerOut,
    DismissAll,
}

fn all_events() -> Vec<Event> {
    let mut events = Vec::new();
    for family in Family::all() {
        events.push(Event::RequestPlacement(*family));
    }
    events.extend([
        Event::SurfaceClicked,
        Event::RightClickMarker,
        Event::RightClickSensor,
        Event::RightClickStale,
        Event::SubmitLabel(true),
        Event::SubmitLabel(false),
        Event::CloseMenu,
        Event::Confirm,
        Event::Cancel,
        Event::PointerOver,
        Event::PointerOut,
        Event::DismissAll,
    ]);
    for action in MenuAction::all() {
        events.push(Event::Menu(*action));
    }
    for direction in Direction::all() {
        events.push(Event::Nudge(*direction));
    }
    for axis in Axis::all() {
        events.push(Event::Rotate(*axis, RotateDirection::Up));
        events.push(Event::Rotate(*axis, RotateDirection::Down));
    }
    events
}

struct Fixture {
    controller: InteractionController,
    store: AnnotationStore,
    marker: AnnotationId,
    sensor: AnnotationId,
}

impl Fixture {
    fn new() -> Self {
        let mut store = AnnotationStore::default();
        let marker = store.create_at(Vec3::ZERO, Family::Marker, 1).id();
        let sensor = store.create_at(Vec3::ONE, Family::Sensor, 2).id();
        Self {
            controller: InteractionController::default(),
            store,
            marker,
            sensor,
        }
    }

    fn apply(&mut self, event: Event) {
        let c = &mut self.controller;
        let s = &mut self.store;
        match event {
            Event::RequestPlacement(family) => c.request_placement(family),
            Event::SurfaceClicked => {
                c.surface_clicked(s, Vec3::splat(0.25));
            }
            Event::RightClickMarker => c.flag_right_clicked(s, self.marker, ANCHOR),
            Event::RightClickSensor => c.flag_right_clicked(s, self.sensor, ANCHOR),
            Event::RightClickStale => c.flag_right_clicked(s, 999_999, ANCHOR),
            Event::Menu(action) => c.context_menu_action(s, action),
            Event::SubmitLabel(accepted) => {
                c.submit_label(s, accepted.then(|| "edited".to_string()));
            }
            Event::CloseMenu => c.close_context_menu(),
            Event::Nudge(direction) => c.nudge(s, direction),
            Event::Rotate(axis, direction) => c.rotate(s, axis, direction),
            Event::Confirm => c.confirm_reposition(),
            Event::Cancel => c.cancel_reposition(s),
            Event::PointerOver => c.pointer_over(s, self.marker, ANCHOR),
            Event::PointerOut => c.pointer_out(),
            Event::DismissAll => c.dismiss_all(),
        }
    }

    fn assert_consistent(&self, context: &str) {
        let c = &self.controller;

        assert_eq!(
            c.reposition_panel().is_some(),
            c.mode().reposition_session().is_some(),
            "panel/mode mismatch after {}",
            context
        );

        if let Some(menu) = c.context_menu() {
            assert_eq!(c.selected_id(), Some(menu.target), "menu target after {}", context);
        }

        let transient_ui = c.context_menu().is_some() || c.label_prompt().is_some();
        if !transient_ui {
            let expected = c.mode().reposition_session().map(|session| session.target);
            assert_eq!(c.selected_id(), expected, "selection after {}", context);
        }

        match c.mode() {
            Mode::Placing(family) => {
                assert_eq!(c.pointer_affordance(), PointerAffordance::Placing(*family))
            }
            _ => assert_eq!(c.pointer_affordance(), PointerAffordance::Default),
        }

        if let Some(session) = c.mode().reposition_session() {
            assert!(self.store.contains(session.target), "dangling session after {}", context);
        }
    }
}

/// Drive each starting mode into every event and check the result is well formed.
#[test]
fn test_state_machine_is_total() {
    let preludes: Vec<Vec<Event>> = vec![
        vec![],
        vec![Event::RequestPlacement(Family::Marker)],
        vec![Event::RequestPlacement(Family::Sensor)],
        vec![Event::RightClickMarker],
        vec![Event::RightClickMarker, Event::Menu(MenuAction::Edit)],
        vec![Event::RightClickMarker, Event::Menu(MenuAction::Move)],
        vec![Event::RightClickSensor, Event::Menu(MenuAction::Move)],
        vec![
            Event::RightClickSensor,
            Event::Menu(MenuAction::Move),
            Event::RightClickMarker,
        ],
    ];

    for prelude in &preludes {
        for event in all_events() {
            let mut fixture = Fixture::new();
            for step in prelude {
                fixture.apply(*step);
            }
            fixture.assert_consistent(&format!("prelude {:?}", prelude));

            fixture.apply(event);
            fixture.assert_consistent(&format!("{:?} then {:?}", prelude, event));

            // A second identical event must be just as well defined
            fixture.apply(event);
            fixture.assert_consistent(&format!("{:?} then {:?} twice", prelude, event));
        }
    }
}

#[test]
fn test_invalid_events_leave_store_untouched() {
    let mut fixture = Fixture::new();
    let before: Vec<_> = fixture.store.list().to_vec();

    for event in [
        Event::Nudge(Direction::Up),
        Event::Rotate(Axis::X, RotateDirection::Up),
        Event::Confirm,
        Event::Cancel,
        Event::SurfaceClicked,
        Event::Menu(MenuAction::Delete),
        Event::SubmitLabel(true),
    ] {
        fixture.apply(event);
    }

    assert_eq!(fixture.store.list(), before.as_slice());
    assert!(fixture.controller.mode().is_idle());
}

mod pointer_routing {
    use super::*;
    use crate::interaction::input::{route_pointer, PointerFrame, PointerHit};

    fn frame(hit: PointerHit, left_pressed: bool, right_pressed: bool) -> PointerFrame {
        PointerFrame {
            cursor: Some((ANCHOR, hit)),
            left_pressed,
            right_pressed,
        }
    }

    fn left(hit: PointerHit) -> PointerFrame {
        frame(hit, true, false)
    }

    fn right(hit: PointerHit) -> PointerFrame {
        frame(hit, false, true)
    }

    #[test]
    fn test_left_press_on_surface_places_pending_annotation() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        controller.request_placement(Family::Alert);

        let hit = PointerHit::Surface(Vec3::new(0.0, 1.0, 0.0));
        let created = route_pointer(&mut controller, &mut store, &mut hovered, left(hit), false);

        assert_eq!(created.map(|a| a.family()), Some(Family::Alert));
        assert_eq!(store.len(), 1);
        assert!(controller.mode().is_idle());
    }

    #[test]
    fn test_left_press_on_nothing_dismisses_placement() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        controller.request_placement(Family::Marker);

        let frame = left(PointerHit::Nothing);
        route_pointer(&mut controller, &mut store, &mut hovered, frame, false);

        assert!(controller.mode().is_idle());
        assert!(store.is_empty());
    }

    #[test]
    fn test_left_press_on_glyph_does_not_place() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
        controller.request_placement(Family::Sensor);

        let frame = left(PointerHit::Glyph(id));
        let created = route_pointer(&mut controller, &mut store, &mut hovered, frame, false);

        assert!(created.is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(controller.mode(), &Mode::Placing(Family::Sensor));
    }

    #[test]
    fn test_right_press_on_glyph_opens_menu() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);

        let frame = right(PointerHit::Glyph(id));
        route_pointer(&mut controller, &mut store, &mut hovered, frame, false);

        assert_eq!(controller.context_menu().map(|m| m.target), Some(id));
        assert_eq!(controller.selected_id(), Some(id));
    }

    #[test]
    fn test_right_press_off_glyph_closes_menu() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
        controller.flag_right_clicked(&store, id, ANCHOR);

        let frame = right(PointerHit::Surface(Vec3::X));
        route_pointer(&mut controller, &mut store, &mut hovered, frame, false);

        assert!(controller.context_menu().is_none());
        assert_eq!(controller.selected_id(), None);
    }

    #[test]
    fn test_left_press_elsewhere_closes_menu() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
        controller.flag_right_clicked(&store, id, ANCHOR);

        let frame = left(PointerHit::Nothing);
        route_pointer(&mut controller, &mut store, &mut hovered, frame, false);

        assert!(controller.context_menu().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_hover_over_and_out_drive_tooltip() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        let id = place(&mut controller, &mut store, Family::Alert, Vec3::ZERO);

        let over = frame(PointerHit::Glyph(id), false, false);
        route_pointer(&mut controller, &mut store, &mut hovered, over, false);
        assert_eq!(hovered, Some(id));
        assert_eq!(controller.tooltip().map(|t| t.text.as_str()), Some("NO DATA"));

        let off_window = PointerFrame {
            cursor: None,
            left_pressed: false,
            right_pressed: false,
        };
        route_pointer(&mut controller, &mut store, &mut hovered, off_window, false);
        assert_eq!(hovered, None);
        assert!(controller.tooltip().is_none());
    }

    #[test]
    fn test_input_dropped_while_modal_open() {
        let (mut controller, mut store) = setup();
        let mut hovered = None;
        controller.request_placement(Family::Marker);

        let hit = PointerHit::Surface(Vec3::ONE);
        let created = route_pointer(&mut controller, &mut store, &mut hovered, left(hit), true);

        assert!(created.is_none());
        assert!(store.is_empty());
        assert_eq!(controller.mode(), &Mode::Placing(Family::Marker));

        let id = place(&mut controller, &mut store, Family::Marker, Vec3::ZERO);
        let frame = right(PointerHit::Glyph(id));
        route_pointer(&mut controller, &mut store, &mut hovered, frame, true);
        assert!(controller.context_menu().is_none());
        assert!(hovered.is_none());
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use eframe_sketchpad::{
    Command, ContentChange, GestureState, InputEvent, SketchEvent, Sketchpad, SketchpadConfig,
    Sticker, StickerText, Stroke, Thickness, input::route_event,
};
use egui::{Color32, pos2};

fn recorded_events(sketchpad: &Sketchpad) -> Rc<RefCell<Vec<SketchEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    sketchpad
        .event_bus()
        .subscribe(move |event: &SketchEvent| sink.borrow_mut().push(event.clone()));
    events
}

fn content_changes(events: &RefCell<Vec<SketchEvent>>) -> Vec<ContentChange> {
    events
        .borrow()
        .iter()
        .filter_map(|event| match event {
            SketchEvent::ContentChanged(change) => Some(*change),
            _ => None,
        })
        .collect()
}

#[test]
fn test_drag_builds_one_stroke() {
    let mut sketchpad = Sketchpad::default();
    let events = recorded_events(&sketchpad);

    sketchpad.pointer_down(pos2(1.0, 1.0));
    assert!(sketchpad.state().is_drawing());
    assert!(sketchpad.history().is_drawing());
    // Partial strokes are already part of the picture
    assert_eq!(sketchpad.history().len(), 1);

    sketchpad.pointer_move(pos2(2.0, 3.0));
    sketchpad.pointer_move(pos2(4.0, 5.0));
    sketchpad.pointer_up();

    assert_eq!(sketchpad.state(), &GestureState::default());
    let stroke = sketchpad.history().drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points(), &[pos2(1.0, 1.0), pos2(2.0, 3.0), pos2(4.0, 5.0)]);
    assert_eq!(stroke.color(), Color32::BLACK);

    assert_eq!(
        content_changes(&events),
        vec![
            ContentChange::StrokeStarted,
            ContentChange::StrokeExtended,
            ContentChange::StrokeExtended,
            ContentChange::StrokeFinished,
        ]
    );
}

#[test]
fn test_stroke_is_frozen_after_gesture() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.pointer_move(pos2(1.0, 0.0));
    sketchpad.pointer_up();
    sketchpad.pointer_move(pos2(50.0, 50.0));

    let stroke = sketchpad.history().drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 2);
    assert!(sketchpad.state().preview().is_some());
}

#[test]
fn test_pointer_leave_ends_stroke_and_hides_preview() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.pointer_move(pos2(5.0, 5.0));
    sketchpad.pointer_leave();

    assert!(!sketchpad.history().is_drawing());
    assert!(sketchpad.state().preview().is_none());

    sketchpad.pointer_move(pos2(6.0, 6.0));
    assert!(sketchpad.state().preview().is_some());
    sketchpad.pointer_leave();
    assert!(sketchpad.state().preview().is_none());
}

#[test]
fn test_undo_ignored_mid_gesture() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.pointer_move(pos2(1.0, 1.0));
    sketchpad.undo();
    sketchpad.clear();
    assert_eq!(sketchpad.history().len(), 1);

    sketchpad.pointer_up();
    sketchpad.undo();
    assert!(sketchpad.history().is_empty());
    assert_eq!(sketchpad.history().undo_stack().len(), 1);
}

#[test]
fn test_sticker_tool_places_on_press() {
    let mut sketchpad = Sketchpad::default();
    let events = recorded_events(&sketchpad);
    let cat = StickerText::parse("😸").unwrap();
    sketchpad.select_sticker(Some(cat.clone()));
    assert_eq!(sketchpad.selected_sticker(), Some(&cat));

    sketchpad.pointer_down(pos2(12.0, 34.0));
    assert!(!sketchpad.state().is_drawing());
    sketchpad.pointer_move(pos2(20.0, 40.0));
    sketchpad.pointer_up();

    assert_eq!(sketchpad.history().len(), 1);
    let sticker = sketchpad.history().drawables()[0].as_sticker().unwrap();
    assert_eq!(sticker.text(), &cat);
    assert_eq!(sticker.position(), pos2(12.0, 34.0));
    assert_eq!(content_changes(&events), vec![ContentChange::StickerPlaced]);
}

#[test]
fn test_thickness_selection_returns_to_marker() {
    let config = SketchpadConfig {
        thin_width: 1.5,
        thick_width: 6.0,
        ..Default::default()
    };
    let mut sketchpad = Sketchpad::new(&config);
    sketchpad.select_sticker(Some(StickerText::parse("★").unwrap()));
    sketchpad.select_thickness(Thickness::Thick);

    assert!(sketchpad.selected_sticker().is_none());
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.pointer_move(pos2(3.0, 0.0));
    sketchpad.pointer_up();
    assert_eq!(sketchpad.history().drawables()[0].as_stroke().unwrap().width(), 6.0);

    sketchpad.select_sticker(Some(StickerText::parse("★").unwrap()));
    sketchpad.select_sticker(None);
    assert_eq!(sketchpad.thickness(), Thickness::Thick);
    assert_eq!(sketchpad.tool().as_marker_tool().unwrap().width(), 6.0);
}

#[test]
fn test_tool_change_refreshes_preview_under_cursor() {
    let mut sketchpad = Sketchpad::default();
    let events = recorded_events(&sketchpad);
    sketchpad.pointer_move(pos2(8.0, 9.0));
    sketchpad.select_sticker(Some(StickerText::parse("😻").unwrap()));

    let preview = sketchpad.state().preview().unwrap();
    assert_eq!(preview.position(), pos2(8.0, 9.0));
    assert!(matches!(preview, eframe_sketchpad::ToolPreview::Sticker { .. }));
    assert!(events
        .borrow()
        .iter()
        .any(|event| matches!(event, SketchEvent::ToolChanged { tool: "Sticker" })));
}

#[test]
fn test_tool_change_mid_gesture_finishes_stroke() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.select_thickness(Thickness::Thick);

    assert!(!sketchpad.state().is_drawing());
    assert!(!sketchpad.history().is_drawing());
}

#[test]
fn test_no_op_commands_do_not_notify() {
    let mut sketchpad = Sketchpad::default();
    let events = recorded_events(&sketchpad);
    sketchpad.undo();
    sketchpad.redo();
    sketchpad.clear();
    sketchpad.pointer_up();
    assert!(content_changes(&events).is_empty());
}

#[test]
fn test_clear_after_clear_notifies_once() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(1.0, 1.0));
    sketchpad.pointer_up();
    let events = recorded_events(&sketchpad);

    sketchpad.clear();
    sketchpad.clear();
    assert_eq!(content_changes(&events), [ContentChange::Cleared]);
}

#[test]
fn test_executed_stroke_is_finished_by_pointer_up() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.pointer_move(pos2(5.0, 5.0));
    sketchpad.pointer_up();

    sketchpad.execute(Command::BeginStroke(Stroke::new(pos2(9.0, 9.0), 1.0, Color32::BLACK)));
    assert!(sketchpad.state().is_drawing());

    sketchpad.pointer_up();
    sketchpad.pointer_leave();
    assert!(!sketchpad.state().is_drawing());
    assert!(!sketchpad.history().is_drawing());
    assert!(sketchpad.history().can_undo());

    sketchpad.undo();
    assert_eq!(sketchpad.history().len(), 1);
}

#[test]
fn test_executed_commands_end_gesture_mid_drag() {
    let mut sketchpad = Sketchpad::default();
    sketchpad.pointer_down(pos2(0.0, 0.0));
    sketchpad.execute(Command::FinishStroke);
    assert_eq!(sketchpad.state(), &GestureState::default());

    // Further movement must not extend the finished stroke
    sketchpad.pointer_move(pos2(3.0, 3.0));
    let stroke = sketchpad.history().drawables()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 1);

    sketchpad.pointer_down(pos2(4.0, 4.0));
    let cat = StickerText::parse("😸").unwrap();
    sketchpad.execute(Command::PlaceSticker(Sticker::new(cat, pos2(6.0, 6.0))));
    assert!(!sketchpad.state().is_drawing());
    assert!(!sketchpad.history().is_drawing());
    assert_eq!(sketchpad.history().len(), 3);
}

#[test]
fn test_new_stroke_after_undo_discards_redo() {
    let mut sketchpad = Sketchpad::default();
    for x in [0.0, 10.0] {
        sketchpad.pointer_down(pos2(x, 0.0));
        sketchpad.pointer_move(pos2(x, 5.0));
        sketchpad.pointer_up();
    }
    sketchpad.undo();
    assert!(sketchpad.history().can_redo());

    sketchpad.pointer_down(pos2(20.0, 0.0));
    sketchpad.pointer_up();
    sketchpad.redo();
    assert_eq!(sketchpad.history().len(), 2);
    assert!(sketchpad.history().undo_stack().is_empty());
}

#[test]
fn test_routed_input_events_drive_sketchpad() {
    let mut sketchpad = Sketchpad::default();
    let events = [
        InputEvent::PointerMove(pos2(1.0, 1.0)),
        InputEvent::PointerDown(pos2(1.0, 1.0)),
        InputEvent::PointerMove(pos2(2.0, 2.0)),
        InputEvent::PointerUp,
        InputEvent::PointerLeave,
    ];
    for event in &events {
        route_event(event, &mut sketchpad);
    }

    assert_eq!(sketchpad.history().len(), 1);
    assert_eq!(sketchpad.history().drawables()[0].as_stroke().unwrap().points().len(), 2);
    assert_eq!(sketchpad.state(), &GestureState::default());
}

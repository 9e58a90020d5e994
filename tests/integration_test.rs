use anyhow::Result;
use egui::{pos2, PointerButton, Rect};
use tabby::{
    ActionId, ActionRegistry, DragParticipant, DragTransfer, DropOutcome, EditorConfig, GestureEnd,
    HighlightHandle, MenuBar, Orientation, Panel, PanelId, PlainHandle, ResizeParticipant, Splitter,
};

fn splitter_of(titles: &[&str]) -> Result<Splitter> {
    let mut splitter = Splitter::new(Orientation::Horizontal);
    for title in titles {
        splitter.append(Panel::titled(*title))?;
    }
    Ok(splitter)
}

fn startup_workspace() -> Result<Splitter> {
    let mut splitter = Splitter::new(Orientation::Horizontal);
    splitter.append(Panel::options())?;
    splitter.append(Panel::media_library())?;
    splitter.append(Panel::video_player())?;
    splitter.set_relative_sizes(&EditorConfig::default().initial_sizes)?;
    Ok(splitter)
}

#[test]
fn test_every_pair_swaps_only_its_endpoints() -> Result<()> {
    let titles = ["A", "B", "C", "D", "E"];

    for (si, source) in titles.iter().enumerate() {
        for (ti, target) in titles.iter().enumerate() {
            if si == ti {
                continue;
            }
            let mut splitter = splitter_of(&titles)?;
            let outcome = splitter.drop_onto(PanelId::for_title(target), &DragTransfer::with_text(*source));
            assert_eq!(outcome, DropOutcome::Swapped { source: si, target: ti });

            let mut expected = titles.to_vec();
            expected.swap(si, ti);
            assert_eq!(splitter.titles(), expected, "drop of {source} onto {target}");
            assert_eq!(splitter.len(), titles.len());
            assert_eq!(splitter.handles().len(), titles.len() - 1);
        }
    }
    Ok(())
}

#[test]
fn test_self_drop_is_idempotent() -> Result<()> {
    let mut splitter = splitter_of(&["A", "B", "C"])?;
    for title in ["A", "B", "C"] {
        let outcome = splitter.drop_onto(PanelId::for_title(title), &DragTransfer::with_text(title));
        assert_eq!(outcome, DropOutcome::SelfDrop);
        assert_eq!(splitter.titles(), vec!["A", "B", "C"]);
    }
    Ok(())
}

#[test]
fn test_options_dropped_on_player() -> Result<()> {
    let mut splitter = startup_workspace()?;
    splitter.drop_onto(PanelId::for_title("Video Player"), &DragTransfer::with_text("Options"));
    assert_eq!(splitter.titles(), vec!["Video Player", "Media Library", "Options"]);
    Ok(())
}

#[test]
fn test_b_dropped_on_d() -> Result<()> {
    let mut splitter = splitter_of(&["A", "B", "C", "D"])?;
    splitter.drop_onto(PanelId::for_title("D"), &DragTransfer::with_text("B"));
    assert_eq!(splitter.titles(), vec!["A", "D", "C", "B"]);
    Ok(())
}

#[test]
fn test_foreign_and_detached_drops_are_ignored() -> Result<()> {
    let mut splitter = splitter_of(&["A", "B"])?;
    let target = PanelId::for_title("A");

    assert_eq!(splitter.drop_onto(target, &DragTransfer::without_text()), DropOutcome::Rejected);
    assert_eq!(
        splitter.drop_onto(target, &DragTransfer::with_text("Gone")),
        DropOutcome::SourceDetached
    );
    assert_eq!(splitter.titles(), vec!["A", "B"]);
    Ok(())
}

#[test]
fn test_full_gesture_from_press_to_swap() -> Result<()> {
    let mut splitter = startup_workspace()?;
    let config = EditorConfig::default();

    let options = splitter
        .panel_mut(PanelId::for_title("Options"))
        .expect("options panel");
    options.press(PointerButton::Primary, pos2(20.0, 20.0));
    assert!(options.pointer_moved(true, pos2(24.0, 22.0), config.drag_threshold).is_none());
    let transfer = options
        .pointer_moved(true, pos2(400.0, 25.0), config.drag_threshold)
        .expect("drag should start past the threshold");
    assert!(options.gesture().overlay_visible());

    let outcome = splitter.drop_onto(PanelId::for_title("Media Library"), &transfer);
    assert!(matches!(outcome, DropOutcome::Swapped { .. }));

    let options = splitter
        .panel_mut(PanelId::for_title("Options"))
        .expect("options panel");
    assert_eq!(options.release(true), GestureEnd::Dropped(transfer));
    assert!(!options.gesture().overlay_visible());

    assert_eq!(splitter.titles(), vec!["Media Library", "Options", "Video Player"]);
    Ok(())
}

#[test]
fn test_click_never_produces_transfer() -> Result<()> {
    let mut panel = Panel::media_library();
    let threshold = EditorConfig::default().drag_threshold;

    panel.press(PointerButton::Primary, pos2(50.0, 50.0));
    for step in 0..10 {
        let offset = step as f32 * 0.9;
        assert!(panel.pointer_moved(true, pos2(50.0 + offset, 50.0), threshold).is_none());
    }
    assert_eq!(panel.release(false), GestureEnd::Click);
    Ok(())
}

#[test]
fn test_handle_flag_pairs_with_press_and_release() {
    let mut handle = HighlightHandle::create(Orientation::Horizontal);
    for _ in 0..3 {
        assert!(!handle.is_active());
        handle.press(PointerButton::Primary);
        assert!(handle.is_active());
        // The release may land anywhere; only the press/release pairing matters
        handle.release(PointerButton::Primary);
        assert!(!handle.is_active());
    }
}

#[test]
fn test_initial_ratios_until_handle_drag() -> Result<()> {
    let mut splitter = startup_workspace()?;
    let expected = [0.1, 0.3, 0.6];
    for (size, want) in splitter.relative_sizes().iter().zip(expected) {
        assert!((size - want).abs() < 1e-4);
    }

    let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1010.0, 600.0));
    let layout = splitter.layout(rect, 5.0);
    assert_eq!(layout.panels.len(), 3);
    assert_eq!(layout.handles.len(), 2);
    assert!((layout.panels[0].width() - 100.0).abs() < 1e-3);

    splitter.drag_handle(1, -100.0, 1010.0, 5.0, 48.0)?;
    let sizes = splitter.relative_sizes();
    assert!((sizes[0] - 0.1).abs() < 1e-4);
    assert!((sizes[1] - 0.2).abs() < 1e-4);
    assert!((sizes[2] - 0.7).abs() < 1e-4);
    assert!((sizes.iter().sum::<f32>() - 1.0).abs() < 1e-4);
    Ok(())
}

#[test]
fn test_menu_actions_are_inert() -> Result<()> {
    let bar = MenuBar::standard();
    let mut registry = ActionRegistry::new();
    let splitter = startup_workspace()?;
    let before = splitter.titles().join(",");

    for menu in bar.menus() {
        for action in &menu.actions {
            assert!(!registry.trigger(*action), "{action} should have no handler");
        }
    }
    assert!(!registry.trigger(ActionId::ImportMedia));
    assert!(!registry.trigger(ActionId::PlayPause));

    assert_eq!(splitter.titles().join(","), before);
    Ok(())
}

#[test]
fn test_plain_handles_on_vertical_splitter() -> Result<()> {
    let mut splitter: Splitter<PlainHandle> = Splitter::new(Orientation::Vertical);
    splitter.append(Panel::titled("Top"))?;
    splitter.append(Panel::titled("Middle"))?;
    splitter.append(Panel::titled("Bottom"))?;
    assert_eq!(splitter.handles().len(), 2);

    splitter.drop_onto(PanelId::for_title("Top"), &DragTransfer::with_text("Bottom"));
    assert_eq!(splitter.titles(), vec!["Bottom", "Middle", "Top"]);
    Ok(())
}

#[test]
fn test_config_from_json() -> Result<()> {
    let config = EditorConfig::from_json_str(r#"{ "initial_sizes": [2.0, 2.0, 6.0], "fullscreen": false }"#)?;
    assert!(!config.fullscreen);

    let mut splitter = splitter_of(&["Options", "Media Library", "Video Player"])?;
    splitter.set_relative_sizes(&config.initial_sizes)?;
    assert!((splitter.relative_sizes()[2] - 0.6).abs() < 1e-4);
    Ok(())
}

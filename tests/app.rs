use sights::{HeadlessMap, MapHost, PoiApp, PoiCommand, PoiConfig, Sight, SightsManager, Visibility};

fn app() -> PoiApp<HeadlessMap> {
    let config = PoiConfig::default();
    let sights = SightsManager::from_sights(
        vec![
            Sight {
                name: "North".to_string(),
                lat: 60.0,
                lon: 10.0,
                zoom: 12,
                model: "pin".to_string(),
            },
            Sight {
                name: "South".to_string(),
                lat: -33.0,
                lon: 18.0,
                zoom: 13,
                model: "pin".to_string(),
            },
        ],
        &config,
    );
    PoiApp::with_sights(config, sights, HeadlessMap::new())
}

#[test]
fn tick_applies_queued_commands_in_order() {
    let mut app = app();
    let sender = app.sender();

    sender.send(PoiCommand::Toggle);
    sender.send(PoiCommand::Next);
    sender.send(PoiCommand::Next);

    assert_eq!(app.tick(), 3);
    assert_eq!(app.sights().current_index(), 0);
    assert_eq!(app.map().layer_visibility("poiLayer"), Some(Visibility::Visible));
    assert_eq!(app.map().jump_count(), 3);
    assert_eq!(app.tick(), 0);
}

#[test]
fn jump_command_ignores_missing_sight() {
    let mut app = app();

    app.apply(PoiCommand::JumpTo(1));
    assert_eq!(app.sights().current_index(), 1);

    app.apply(PoiCommand::JumpTo(7));
    assert_eq!(app.sights().current_index(), 1);
    assert_eq!(app.map().jump_count(), 1);
}

#[test]
fn layer_draws_markers_once_shown() {
    let mut app = app();
    app.apply(PoiCommand::Toggle);

    assert_eq!(app.map_mut().render_frame().len(), 2);

    app.apply(PoiCommand::Toggle);
    assert!(app.map_mut().render_frame().is_empty());
}

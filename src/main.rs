use anyhow::{bail, Result};
use sights::{HeadlessMap, MapHost, PoiApp, PoiCommand, PoiConfig};

const CONFIG_ENV: &str = "POI_CONFIG";

fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "poi.ron".to_string());
    let config = PoiConfig::load(&config_path)?;

    let commands = std::env::args()
        .skip(1)
        .map(|arg| match PoiCommand::parse(&arg) {
            Some(command) => Ok(command),
            None => bail!("unknown command {arg:?}, expected next, toggle or \"jump <index>\""),
        })
        .collect::<Result<Vec<_>>>()?;

    let mut app = PoiApp::new(config, HeadlessMap::new());
    let sender = app.sender();
    for command in commands {
        sender.send(command);
        app.tick();

        let draw_calls = app.map_mut().render_frame();
        let camera = app.map().camera();
        tracing::info!(
            target: "engine",
            ?command,
            sight = app.sights().current().map(|s| s.name.as_str()).unwrap_or("-"),
            ?camera,
            markers = draw_calls.len(),
            "frame"
        );
    }

    tracing::info!(target: "engine", app = %app.config().app_name, "shutdown complete");
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

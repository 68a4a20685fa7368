mod host;

use canvas::config::CanvasConfig;
use canvas::geom::Size;

use host::{DemoHost, HostError, TouchEvent};

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    let config = CanvasConfig::from_env()?;
    let content_size = host::parse_content_size(&std::env::var("DRAWSHAPES_CONTENT_SIZE").unwrap_or_default())?;
    let script: Vec<TouchEvent> = match std::env::var("DRAWSHAPES_SCRIPT") {
        Ok(json) => serde_json::from_str(&json)?,
        Err(_) => host::scripted_gesture(),
    };

    let mut demo = DemoHost::new(config, Size::new(320.0, 480.0), content_size);
    demo.load_demo_layout();
    tracing::info!(shapes = demo.shapes().len(), ?content_size, "demo layout loaded");

    demo.replay(&script);
    println!("{}", serde_json::to_string_pretty(&demo.shapes())?);
    Ok(())
}

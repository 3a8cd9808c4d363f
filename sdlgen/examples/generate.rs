//! Prints the generated SDL for a content model export.
//!
//! ```text
//! cargo run --example generate -- content_types.json [config.json]
//! ```

use sdlgen::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sdlgen=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        anyhow::bail!("usage: generate <content_types.json> [config.json]");
    };

    let config = match args.next() {
        Some(config_path) => PluginConfig::from_json(&std::fs::read_to_string(config_path)?)?,
        None => PluginConfig::new(),
    }
    .enable_schema_generation(true);

    let source = JsonFileSource::new(path);
    let mut actions = SdlActions::new();
    let report = create_schema_customization(&source, &mut actions, &config).await?;

    println!("{}", actions.sdl());
    eprintln!(
        "{} content types, {} references, {} file fields, {} skipped",
        report.content_types,
        report.references.len(),
        report.file_fields.len(),
        report.skipped.len()
    );

    Ok(())
}

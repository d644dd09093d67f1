mod config;
mod fixture;
mod flags;
mod http;

use anyhow::{Context, Result};
use jiff::Timestamp;
use mapping::MappingId;
use tracing::info;

use crate::config::Config;
use crate::fixture::Fixture;
use crate::flags::{ApubRender, ApubRenderCmd, Render};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let flags = ApubRender::from_env_or_exit();
    let config = Config::load(flags.config.as_deref())?;

    match flags.subcommand {
        ApubRenderCmd::Render(render) => render_fixture(&config, render),
        ApubRenderCmd::Serve(_) => {
            info!(target: "lifecycle", port = config.server.http_port, "serving fixtures");
            http::serve(&config).await
        }
    }
}

fn render_fixture(config: &Config, flags: Render) -> Result<()> {
    let now = match flags.now.as_deref() {
        Some(now) => now
            .parse::<Timestamp>()
            .with_context(|| format!("invalid --now {now}"))?,
        None => Timestamp::now(),
    };
    let mapping = flags
        .mapping
        .as_deref()
        .map(str::parse::<MappingId>)
        .transpose()?;

    let mut render = config.render.clone();
    if flags.no_inline {
        render.allow_inlining = false;
    }
    if flags.force_approval_id {
        render.force_approval_id = true;
    }

    let fixture = Fixture::load(&flags.fixture)?;
    let document = fixture.render(&config.serializer(), mapping, &render.options(now))?;
    info!(
        target: "lifecycle",
        mapping = %document.mapping(),
        category = ?document.category(),
        "rendered {}",
        flags.fixture.display()
    );
    println!("{}", serde_json::to_string_pretty(document.as_value())?);
    Ok(())
}

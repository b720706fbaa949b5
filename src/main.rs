use anyhow::Context;
use env_logger::Env;
use graph_paper::{config, Font, GraphPaper, GridSpec};
use std::fs::File;
use std::io::BufWriter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let font = Font::from_file(config::FONT_PATH)
        .with_context(|| format!("failed to load label font {}", config::FONT_PATH))?;

    let paper = GraphPaper::new(GridSpec::default()).context("grid doesn't fit on the page")?;
    log::info!(
        "drawing a {}x{}mm grid on {}x{}mm paper",
        paper.geometry().span().x,
        paper.geometry().span().y,
        paper.spec().paper.0,
        paper.spec().paper.1
    );
    let document = paper.into_document(font)?;

    let out = File::create(config::OUTPUT_PATH)
        .with_context(|| format!("failed to create {}", config::OUTPUT_PATH))?;
    document
        .write(BufWriter::new(out))
        .with_context(|| format!("failed to write {}", config::OUTPUT_PATH))?;

    log::info!("wrote {}", config::OUTPUT_PATH);
    Ok(())
}

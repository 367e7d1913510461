use crate::{Cli, CloudFormat, Format, RunArgs};
use anyhow::{Context, Result};
use std::io::Write;
use tome_cli::{Catalog, Overrides, Pipeline, RunConfig};
use tome_core::Mode;
use tome_render::{CloudRenderer, HumanWriter, ImageRenderer, JsonlWriter, WeightFileRenderer};
use tome_score::LexiconAnalyzer;
use tome_source::CachedHttpSource;

pub fn run(cli: &Cli, mode: Mode, args: &RunArgs, top_n: Option<usize>) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    let overrides = Overrides {
        top_k: args.top_k,
        top_n,
        extra_stop_words: args.extra_stop_words.clone(),
        cache_dir: args.cache_dir.clone(),
        out_dir: args.out_dir.clone(),
        no_cloud: args.no_cloud,
    };
    let config = RunConfig::resolve(mode, catalog, &overrides)?;

    if !cli.is_quiet() {
        eprintln!(
            "Processing {} documents (mode: {mode}, cache: {})...",
            config.documents.len(),
            config.cache_dir.display()
        );
    }

    let source = CachedHttpSource::new(&config.cache_dir);
    let analyzer = LexiconAnalyzer::new();
    let cloud: Option<Box<dyn CloudRenderer>> =
        config.cloud_dir.as_deref().map(|dir| match args.cloud_format {
            CloudFormat::Png => Box::new(ImageRenderer::new(dir)) as Box<dyn CloudRenderer>,
            CloudFormat::Json => Box::new(WeightFileRenderer::new(dir)),
        });

    let report = Pipeline::new(&config, &source, &analyzer)
        .cloud(cloud.as_deref())
        .run();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Human => HumanWriter::write_to(&mut out, &report),
        Format::Jsonl => JsonlWriter::write_to(&mut out, &report),
    }
    .context("failed to write report")?;
    out.flush()?;

    if !cli.is_quiet() {
        for failure in &report.failures {
            eprintln!("Failed: {} ({})", failure.title, failure.reason);
        }
        eprintln!(
            "Done: {} succeeded, {} failed.",
            report.documents.len(),
            report.failures.len()
        );
    }

    if report.all_failed() {
        anyhow::bail!("every document failed");
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use sley_docs::config::load_config;
use sley_docs::inject::InjectVersion;
use sley_docs::manifest::{resolve_version, MANIFEST_FILE};
use sley_docs::pipeline::{collect_pages, write_pages, Pipeline};
use sley_docs::site::SiteData;
use sley_docs::ui;

#[derive(clap::Parser)]
#[command(
    name = "sley-docs",
    about = "Stamp the live package version into rendered documentation pages"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Custom manifest file path")]
    manifest: Option<String>,

    #[arg(short, long, help = "Build output directory to transform")]
    out_dir: Option<String>,

    #[arg(long, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(long, help = "Print the assembled site data as JSON and exit")]
    show_config: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("sley-docs {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    // Resolve the package version once for the whole build. A failure here
    // is fatal: no substitution runs without a known version.
    let manifest_path = args.manifest.as_deref().unwrap_or(MANIFEST_FILE);
    let version = match resolve_version(Path::new(manifest_path)) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.show_config {
        let data = SiteData::assemble(config, &version);
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.build.out_dir.clone());
    let out_path = Path::new(&out_dir);

    if !out_path.is_dir() {
        ui::display_error(&format!("Output directory not found: {}", out_dir));
        std::process::exit(1);
    }

    // Collect rendered pages eligible for injection
    ui::display_status(&format!("Scanning rendered pages in '{}'", out_dir));
    let mut pages = match collect_pages(out_path, &config.build.page_extensions) {
        Ok(pages) => pages,
        Err(e) => {
            ui::display_error(&format!("Failed to read build output: {}", e));
            std::process::exit(1);
        }
    };

    // Snapshot originals so only rewritten pages get flushed back
    let originals: Vec<String> = pages.iter().map(|p| p.contents.clone()).collect();

    let mut pipeline = Pipeline::new();
    pipeline.register(Box::new(InjectVersion::new(version.clone())));

    let reports = match pipeline.run(&mut pages) {
        Ok(reports) => reports,
        Err(e) => {
            ui::display_error(&format!("Build transform failed: {}", e));
            std::process::exit(1);
        }
    };

    let changed: Vec<_> = pages
        .iter()
        .zip(originals.iter())
        .filter(|(page, original)| &page.contents != *original)
        .map(|(page, _)| page.clone())
        .collect();

    if args.dry_run {
        ui::display_run_summary(&reports, pages.len());
        ui::display_status(&format!(
            "Dry run: {} page(s) would be rewritten with version {}",
            changed.len(),
            version
        ));
        return Ok(());
    }

    if let Err(e) = write_pages(&changed) {
        ui::display_error(&format!("Failed to write build output: {}", e));
        std::process::exit(1);
    }

    ui::display_run_summary(&reports, pages.len());
    ui::display_success(&format!(
        "Injected version {} into {} page(s)",
        version,
        changed.len()
    ));

    Ok(())
}

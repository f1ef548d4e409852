use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use swiftwise::core::catalog::Module;
use swiftwise::core::config;
use swiftwise::tui;

#[derive(Parser)]
#[command(name = "swiftwise", about = "Terminal guide to SwiftUI for React developers")]
struct Args {
    /// Track to open at startup
    #[arg(short, long, value_enum)]
    module: Option<Module>,

    /// Lesson id to open directly (e.g. "types-and-inference")
    #[arg(short, long)]
    lesson: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to swiftwise.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("swiftwise.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config ({e}), using defaults");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.module, args.lesson);

    log::info!(
        "swiftwise starting up: module={}, lesson={:?}",
        resolved.start_module.as_str(),
        resolved.start_lesson
    );

    tui::run(resolved)
}

mod app;
mod mock;
mod paths;
mod terminal;

use simplelog::{Config, LevelFilter, WriteLogger};
use treeview::{Glyphs, TreeConfig};

#[tokio::main]
async fn main() {
    match paths::create_log_file() {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let glyphs = if std::env::args().skip(1).any(|arg| arg == "--ascii") {
        Glyphs::ASCII
    } else {
        Glyphs::UNICODE
    };

    if let Err(e) = app::run(TreeConfig::new().glyphs(glyphs)).await {
        eprintln!("Error: {}", e);
    }
}

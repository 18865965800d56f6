//! Headless chart renderer.
//!
//! # Responsibility
//! - Render a member store to Graphviz DOT on stdout for piping into `dot`.
//! - Bootstrap file logging from the environment before any work runs.

use giapha_core::db::open_db;
use giapha_core::{
    init_logging_from_env, to_dot, ChartService, GraphOptions, MemberFilter,
    SqliteMemberRepository, StylePalette,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is opt-in via GIAPHA_LOG_DIR; a broken config must not block
    // rendering.
    if let Err(err) = init_logging_from_env() {
        eprintln!("giapha: logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let Some(db_path) = args.next() else {
        println!("giapha_core version={}", giapha_core::core_version());
        println!("usage: giapha <members.sqlite3> [query]");
        return ExitCode::SUCCESS;
    };
    let query = args.next().unwrap_or_default();

    match render_chart(&db_path, &query) {
        Ok(dot) => {
            print!("{dot}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("giapha: {err}");
            ExitCode::FAILURE
        }
    }
}

fn render_chart(db_path: &str, query: &str) -> Result<String, Box<dyn std::error::Error>> {
    let conn = open_db(db_path)?;
    let repo = SqliteMemberRepository::try_new(&conn)?;
    let service = ChartService::new(repo);

    let chart = service.build_chart(&MemberFilter::new(query), &StylePalette::default())?;
    Ok(to_dot(&chart, &GraphOptions::default()))
}

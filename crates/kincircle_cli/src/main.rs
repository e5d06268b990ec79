//! Command-line planner demo.
//!
//! # Responsibility
//! - Open (or create) a planner database, seed the sample group when empty,
//!   and print ranked reunion locations for every group.
//!
//! Usage: `kincircle_cli [DB_PATH]`. Without a path an in-memory database is
//! used. Set `KINCIRCLE_LOG_DIR` (absolute) to enable file logging, with the
//! level taken from `KINCIRCLE_LOG`.

use kincircle_core::db::{open_db, open_db_in_memory};
use kincircle_core::sample::seed_sample_data;
use kincircle_core::{
    default_log_level, init_logging, AnalysisService, AnalysisServiceError, GroupRepository,
    LocationAnalysis, SqliteAnalysisRepository, SqliteGroupRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("KINCIRCLE_LOG_DIR") {
        let level =
            std::env::var("KINCIRCLE_LOG").unwrap_or_else(|_| default_log_level().to_string());
        init_logging(&level, &log_dir)?;
    }

    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    if seed_sample_data(&conn)? {
        println!("seeded sample group");
    }

    let groups = SqliteGroupRepository::new(&conn);
    let service = AnalysisService::new(
        SqliteGroupRepository::new(&conn),
        SqliteAnalysisRepository::new(&conn),
    );

    for group in groups.list_groups()? {
        println!("\n{} ({})", group.name, group.id);
        match service.analyze_group(group.id) {
            Ok(analysis) => print_analysis(&analysis),
            Err(AnalysisServiceError::NotEnoughMembers { required, actual }) => {
                println!("  add at least {required} members to get suggestions (has {actual})");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn print_analysis(analysis: &LocationAnalysis) {
    println!(
        "  {} households, {} attendees, centroid {:.4},{:.4}",
        analysis.total_members,
        analysis.total_attendees,
        analysis.centroid.lat,
        analysis.centroid.lng
    );
    for (rank, candidate) in analysis.candidates.iter().enumerate() {
        println!(
            "  {}. {}, {} [{}] score={:.6} - {}",
            rank + 1,
            candidate.city,
            candidate.state,
            candidate.cost_band.symbol(),
            candidate.score,
            candidate.rationale
        );
    }
}

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use hanoi_api::config::cli::CliArgs;
#[cfg(feature = "cli")]
use hanoi_api::core::solver;
#[cfg(feature = "cli")]
use hanoi_api::utils::{logger, validation};
#[cfg(feature = "cli")]
use serde_json::json;

#[cfg(feature = "cli")]
fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting hanoi-api CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // Run CLI input through the same validation as the hosted boundary
    let body = json!({
        "disks": args.disks,
        "source": args.source,
        "auxiliary": args.auxiliary,
        "target": args.target,
    });
    let request = match validation::parse_solve_request(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Input validation failed: {}", e);
            eprintln!("❌ {}: {}", e.label(), e.user_message());
            std::process::exit(1);
        }
    };

    let solution = solver::solve(
        request.disks,
        &request.source,
        &request.auxiliary,
        &request.target,
    );

    if args.json {
        match serde_json::to_string_pretty(&solution) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                tracing::error!("Failed to serialize solution: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for step in &solution.moves {
        println!("{}", step);
    }
    if let Some(message) = &solution.message {
        println!("{}", message);
    }
    println!(
        "✅ Solved {} disks in {} moves ({})",
        solution.n, solution.total_moves, solution.formula
    );
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("hanoi-api was built without the `cli` feature");
}

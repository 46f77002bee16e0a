use clap::Parser;

/// Command-line front end over the same solve contract as the hosted API.
///
/// `disks` stays a plain i64 here; range and type rules are enforced by the
/// shared boundary validation so the CLI rejects exactly what the API would.
#[derive(Debug, Clone, Parser)]
#[command(name = "hanoi-api")]
#[command(about = "Solve the Tower of Hanoi puzzle (1-20 disks)")]
pub struct CliArgs {
    /// Number of disks (1-20)
    pub disks: i64,

    #[arg(long, default_value = "A")]
    pub source: String,

    #[arg(long, default_value = "B")]
    pub auxiliary: String,

    #[arg(long, default_value = "C")]
    pub target: String,

    #[arg(long, help = "Print the full solution as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

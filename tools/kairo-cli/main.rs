use clap::Parser;
use kairo::prelude::*;

/// Migrates a workflow definition: inserts the context-merge node, rewires
/// the parallel producers into it, and rewrites the response prompt
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file to migrate
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Path to write the migrated workflow JSON to
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// Fail if any node named by the migration plan is absent from the workflow
    #[arg(long)]
    strict: bool,

    /// Preserve pre-existing outgoing edges of the rewired sources instead of
    /// replacing them
    #[arg(long)]
    merge_edges: bool,
}

fn main() {
    let cli = Cli::parse();

    let document = load_workflow(&cli.input)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));

    let edge_policy = if cli.merge_edges {
        EdgePolicy::Merge
    } else {
        EdgePolicy::Replace
    };

    let (document, report) = Migration::builder(document)
        .strict(cli.strict)
        .edge_policy(edge_policy)
        .build()
        .apply()
        .unwrap_or_else(|e| exit_with_error(&format!("Migration failed: {}", e)));

    save_workflow(&cli.output, &document)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workflow: {}", e)));

    println!("Workflow migrated successfully!");
    println!("  Input:  {}", cli.input);
    println!("  Output: {}", cli.output);
    println!();
    println!("{}", report);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

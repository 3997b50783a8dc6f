use clap::Parser;
use kairo::prelude::*;
use rand::Rng;
use serde_json::{Map, json};
use std::fs;

/// A CLI tool to generate a mock input workflow document for the migration
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating mock v5.004 workflow document...");

    let plan = RewirePlan::default();
    let mut nodes = vec![make_node(
        "Webhook: Receber Mensagem",
        "n8n-nodes-base.webhook",
        json!({ "path": "suporte", "httpMethod": "POST" }),
        &mut rng,
    )];

    for source in &plan.sources {
        nodes.push(make_node(
            &source.name,
            "n8n-nodes-base.httpRequest",
            json!({ "options": {} }),
            &mut rng,
        ));
        println!("-> Generated source node '{}'.", source.name);
    }

    nodes.push(make_node(
        &plan.prompt_node,
        "n8n-nodes-base.openAi",
        json!({
            "resource": "chat",
            "messages": {
                "values": [
                    { "role": "system", "content": "Você é um agente de suporte da Gynprog." },
                    { "role": "user", "content": "=Mensagem do cliente: {{ $json.message_content }}" }
                ]
            }
        }),
        &mut rng,
    ));
    println!("-> Generated prompt node '{}'.", plan.prompt_node);

    // The trigger fans out to the four producers; their own wiring is what
    // the migration will install.
    let mut connections = indexmap::IndexMap::new();
    connections.insert(
        "Webhook: Receber Mensagem".to_string(),
        ConnectionPorts {
            main: vec![
                plan.sources
                    .iter()
                    .map(|s| Edge::main(s.name.clone(), 0))
                    .collect(),
            ],
            extra: Map::new(),
        },
    );

    let document = WorkflowDocument {
        name: "agt_suporte_gynprog_v5.004".to_string(),
        nodes,
        connections,
        version_id: uuid::Uuid::new_v4().to_string(),
        extra: Map::new(),
    };

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow document to '{}'",
        cli.output
    );

    Ok(())
}

fn make_node(
    name: &str,
    node_type: &str,
    parameters: serde_json::Value,
    rng: &mut impl Rng,
) -> WorkflowNode {
    WorkflowNode {
        parameters,
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        type_version: Some(json!(1)),
        position: Some(json!([
            rng.random_range(-600..600),
            rng.random_range(-300..300)
        ])),
        notes_in_flow: None,
        extra: Map::new(),
    }
}

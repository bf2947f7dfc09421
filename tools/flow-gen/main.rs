use clap::Parser;
use mtss_flow::graph::{
    EdgeKind, GraphDocument, GraphEdge, GraphNode, NodeData, NodeKind, Position,
};
use rand::{Rng, rngs::ThreadRng};
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random flow documents for stress testing the editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(long, default_value_t = 50)]
    nodes: usize,

    /// The number of edges to generate
    #[arg(long, default_value_t = 80)]
    edges: usize,

    /// Width and height of the square canvas area nodes are placed on
    #[arg(long, default_value_t = 2000.0)]
    extent: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.edges > 0 && cli.nodes == 0 {
        eprintln!("Error: cannot generate edges without nodes");
        std::process::exit(1);
    }
    if !cli.extent.is_finite() || cli.extent <= 0.0 {
        eprintln!("Error: --extent must be a positive number");
        std::process::exit(1);
    }

    let nodes = generate_nodes(&mut rng, cli.nodes, cli.extent);
    let edges = generate_edges(&mut rng, &nodes, cli.edges);
    let document = GraphDocument::new(nodes, edges);
    document.validate()?;

    fs::write(&cli.output, document.to_json()?)?;
    info!(
        nodes = document.nodes.len(),
        edges = document.edges.len(),
        output = %cli.output,
        "generated flow"
    );
    println!(
        "Successfully generated and saved flow document to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_nodes(rng: &mut ThreadRng, count: usize, extent: f64) -> Vec<GraphNode> {
    (0..count)
        .map(|i| {
            let kind = NodeKind::ALL[rng.random_range(0..NodeKind::ALL.len())];
            let position = Position::new(
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            );
            GraphNode::new(format!("n{}", i), position, generate_payload(rng, kind, i))
        })
        .collect()
}

/// Edges get unique ids, so parallel edges between the same pair are allowed.
fn generate_edges(rng: &mut ThreadRng, nodes: &[GraphNode], count: usize) -> Vec<GraphEdge> {
    const KINDS: [EdgeKind; 5] = [
        EdgeKind::Default,
        EdgeKind::Conditional,
        EdgeKind::Sequential,
        EdgeKind::Parallel,
        EdgeKind::Feedback,
    ];
    (0..count)
        .map(|i| {
            let source = &nodes[rng.random_range(0..nodes.len())];
            let target = &nodes[rng.random_range(0..nodes.len())];
            let kind = KINDS[rng.random_range(0..KINDS.len())];
            GraphEdge::new(format!("e{}", i), &source.id, &target.id, kind)
        })
        .collect()
}

fn generate_payload(rng: &mut ThreadRng, kind: NodeKind, index: usize) -> NodeData {
    match kind {
        NodeKind::Screening => NodeData::Screening {
            name: format!("Screening {}", index),
            tool: Some("CBM".to_string()),
            frequency: Some("3x per year".to_string()),
        },
        NodeKind::Assessment => NodeData::Assessment {
            name: format!("Assessment {}", index),
            measure: Some("Oral reading fluency".to_string()),
            target_score: Some(rng.random_range(40.0..120.0)),
        },
        NodeKind::Intervention => NodeData::Intervention {
            name: format!("Intervention {}", index),
            duration: Some(format!("{} weeks", rng.random_range(2..12))),
            resources: vec!["Worksheets".to_string()],
        },
        NodeKind::Decision => NodeData::Decision {
            criteria: format!("Decision {}", index),
            outcomes: vec!["Continue".to_string(), "Adjust".to_string()],
            threshold: Some(rng.random_range(0.0..100.0)),
        },
        NodeKind::Group => NodeData::Group {
            name: format!("Group {}", index),
            tier: Some(rng.random_range(1..=3)),
            members: Vec::new(),
        },
        NodeKind::Activity => NodeData::Activity {
            name: format!("Activity {}", index),
            description: None,
        },
        NodeKind::Condition => NodeData::Condition {
            expression: format!("score < {}", rng.random_range(10..90)),
            description: None,
        },
    }
}

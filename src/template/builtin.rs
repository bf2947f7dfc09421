use super::FlowTemplate;
use crate::graph::{EdgeKind, GraphEdge, GraphNode, NodeData, Position};

pub(super) fn templates() -> Vec<FlowTemplate> {
    vec![
        universal_screening(),
        tier2_intervention(),
        progress_monitoring(),
    ]
}

fn node(id: &str, x: f64, y: f64, data: NodeData) -> GraphNode {
    GraphNode::new(id, Position::new(x, y), data)
}

fn edge(source: &str, target: &str, kind: EdgeKind) -> GraphEdge {
    GraphEdge::new(format!("e{}-{}", source, target), source, target, kind)
}

/// Fall/winter/spring benchmark screening feeding a tiering decision.
fn universal_screening() -> FlowTemplate {
    FlowTemplate::new(
        "universal-screening",
        "Universal screening cycle: benchmark all students and sort them into tiers",
        vec![
            node(
                "screen",
                250.0,
                0.0,
                NodeData::Screening {
                    name: "Universal Screening".to_string(),
                    tool: Some("Curriculum-based measurement".to_string()),
                    frequency: Some("3x per year".to_string()),
                },
            ),
            node(
                "review",
                250.0,
                120.0,
                NodeData::Decision {
                    criteria: "Score below benchmark".to_string(),
                    outcomes: vec![
                        "Tier 1".to_string(),
                        "Tier 2".to_string(),
                        "Tier 3".to_string(),
                    ],
                    threshold: Some(25.0),
                },
            ),
            node(
                "tier1",
                0.0,
                260.0,
                NodeData::Group {
                    name: "Core Instruction".to_string(),
                    tier: Some(1),
                    members: Vec::new(),
                },
            ),
            node(
                "tier2",
                250.0,
                260.0,
                NodeData::Group {
                    name: "Targeted Support".to_string(),
                    tier: Some(2),
                    members: Vec::new(),
                },
            ),
            node(
                "tier3",
                500.0,
                260.0,
                NodeData::Group {
                    name: "Intensive Support".to_string(),
                    tier: Some(3),
                    members: Vec::new(),
                },
            ),
        ],
        vec![
            edge("screen", "review", EdgeKind::Sequential),
            edge("review", "tier1", EdgeKind::Conditional).with_label("at or above benchmark"),
            edge("review", "tier2", EdgeKind::Conditional).with_label("some risk"),
            edge("review", "tier3", EdgeKind::Conditional).with_label("high risk"),
        ],
    )
}

/// Small-group Tier 2 cycle with a progress check looping back.
fn tier2_intervention() -> FlowTemplate {
    FlowTemplate::new(
        "tier2-intervention",
        "Tier 2 intervention cycle: diagnose, intervene in small groups, re-check",
        vec![
            node(
                "diagnose",
                0.0,
                0.0,
                NodeData::Assessment {
                    name: "Diagnostic Assessment".to_string(),
                    measure: Some("Phonics inventory".to_string()),
                    target_score: None,
                },
            ),
            node(
                "group",
                0.0,
                120.0,
                NodeData::Intervention {
                    name: "Small Group Reading".to_string(),
                    duration: Some("6 weeks".to_string()),
                    resources: vec!["Decodable readers".to_string(), "Word cards".to_string()],
                },
            ),
            node(
                "practice",
                250.0,
                120.0,
                NodeData::Activity {
                    name: "Guided Practice".to_string(),
                    description: Some("Daily 20 minute session".to_string()),
                },
            ),
            node(
                "check",
                0.0,
                240.0,
                NodeData::Assessment {
                    name: "Progress Check".to_string(),
                    measure: Some("Oral reading fluency".to_string()),
                    target_score: Some(90.0),
                },
            ),
        ],
        vec![
            edge("diagnose", "group", EdgeKind::Sequential),
            edge("group", "practice", EdgeKind::Parallel),
            edge("group", "check", EdgeKind::Sequential),
            edge("check", "group", EdgeKind::Feedback).with_label("not yet on track"),
        ],
    )
}

/// Data-based decision loop on top of weekly probes.
fn progress_monitoring() -> FlowTemplate {
    FlowTemplate::new(
        "progress-monitoring",
        "Progress monitoring decision loop: probe weekly, compare against the aim line",
        vec![
            node(
                "probe",
                0.0,
                0.0,
                NodeData::Assessment {
                    name: "Weekly Probe".to_string(),
                    measure: Some("CBM probe".to_string()),
                    target_score: None,
                },
            ),
            node(
                "trend",
                0.0,
                120.0,
                NodeData::Condition {
                    expression: "last 4 points below aim line".to_string(),
                    description: None,
                },
            ),
            node(
                "decide",
                0.0,
                240.0,
                NodeData::Decision {
                    criteria: "Rate of improvement".to_string(),
                    outcomes: vec![
                        "Continue".to_string(),
                        "Adjust".to_string(),
                        "Intensify".to_string(),
                    ],
                    threshold: Some(1.5),
                },
            ),
            node(
                "adjust",
                250.0,
                240.0,
                NodeData::Intervention {
                    name: "Adjusted Intervention".to_string(),
                    duration: Some("4 weeks".to_string()),
                    resources: Vec::new(),
                },
            ),
        ],
        vec![
            edge("probe", "trend", EdgeKind::Sequential),
            edge("trend", "decide", EdgeKind::Conditional).with_label("yes"),
            edge("decide", "adjust", EdgeKind::Conditional).with_label("adjust"),
            edge("adjust", "probe", EdgeKind::Feedback),
        ],
    )
}

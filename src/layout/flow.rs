use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};
use crate::models::{Agent, InteractionPattern, RagAgentConfiguration};

const COLUMN_SPACING: f64 = 250.0;
const ROW_SPACING: f64 = 150.0;
const SEQUENCE_ROW: f64 = 100.0;
const RING_CENTER: (f64, f64) = (300.0, 300.0);
const RING_RADIUS: f64 = 250.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub position: Position,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
}

/// Nodes and edges for drawing a configuration as a diagram.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    fn add_node(&mut self, agent: &Agent, x: f64, y: f64) {
        self.nodes.push(FlowNode {
            id: agent.kind.clone(),
            label: agent.role.clone(),
            position: Position { x, y },
        });
    }

    fn connect(&mut self, source: &Agent, target: &Agent) {
        self.edges.push(FlowEdge {
            id: format!("{}-{}", source.kind, target.kind),
            source: source.kind.clone(),
            target: target.kind.clone(),
            animated: true,
        });
    }
}

/// Places the agents of a configuration according to its interaction pattern.
pub fn layout(configuration: &RagAgentConfiguration) -> FlowGraph {
    if configuration.is_empty() {
        return FlowGraph::default();
    }
    let agents = &configuration.agents;

    match configuration.interaction_flow.pattern {
        InteractionPattern::Single => single(agents),
        InteractionPattern::Sequential => sequential(agents),
        InteractionPattern::Hierarchical => hierarchical(agents),
        InteractionPattern::Orchestrated => circular(agents),
    }
}

// A stored configuration may have been edited by hand, so every layout
// copes with any number of agents.
fn single(agents: &[Agent]) -> FlowGraph {
    if agents.len() > 1 {
        return sequential(agents);
    }
    let mut graph = FlowGraph::default();
    graph.add_node(&agents[0], 0.0, SEQUENCE_ROW);
    graph
}

fn sequential(agents: &[Agent]) -> FlowGraph {
    let mut graph = FlowGraph::default();
    for (i, agent) in agents.iter().enumerate() {
        graph.add_node(agent, COLUMN_SPACING * i as f64, SEQUENCE_ROW);
    }
    for pair in agents.windows(2) {
        graph.connect(&pair[0], &pair[1]);
    }
    graph
}

fn hierarchical(agents: &[Agent]) -> FlowGraph {
    let Some((root, rest)) = agents.split_first() else {
        return FlowGraph::default();
    };

    let (children, sink) = match rest.split_last() {
        Some((last, middle)) if last.kind == "synthesis" && !middle.is_empty() => (middle, Some(last)),
        _ => (rest, None),
    };

    // Children are centred under the root
    let width = COLUMN_SPACING * children.len().saturating_sub(1) as f64;
    let center = width / 2.0;

    let mut graph = FlowGraph::default();
    graph.add_node(root, center, 0.0);

    for (i, child) in children.iter().enumerate() {
        graph.add_node(child, COLUMN_SPACING * i as f64, ROW_SPACING);
        graph.connect(root, child);
    }

    if let Some(sink) = sink {
        graph.add_node(sink, center, ROW_SPACING * 2.0);
        for child in children {
            graph.connect(child, sink);
        }
    }
    graph
}

fn circular(agents: &[Agent]) -> FlowGraph {
    let Some((hub, ring)) = agents.split_first() else {
        return FlowGraph::default();
    };

    let mut graph = FlowGraph::default();
    graph.add_node(hub, RING_CENTER.0, RING_CENTER.1);

    let step = TAU / ring.len().max(1) as f64;
    for (i, agent) in ring.iter().enumerate() {
        // First ring node sits straight above the hub
        let angle = step * i as f64 - FRAC_PI_2;
        let x = (RING_CENTER.0 + RING_RADIUS * angle.cos()).round();
        let y = (RING_CENTER.1 + RING_RADIUS * angle.sin()).round();
        graph.add_node(agent, x, y);
        graph.connect(hub, agent);
    }
    graph
}

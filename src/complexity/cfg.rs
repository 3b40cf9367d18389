//! Line-level control flow graph
//!
//! Source lines are grouped into basic blocks. A line holding a control flow
//! keyword closes the current block. Every block flows into the next one and
//! the last block flows into a synthetic exit node. A block closed by a
//! branching keyword (`if`, `for`, `while`, `case`) also gets a branch edge
//! that skips its successor.
//!
//! V(G) is computed as `E - N + 2P` with one connected component. It counts
//! branching lines, not tokens, so it is reported next to `c1` and never
//! replaces it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CONTROL_FLOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?-u:\b)(if|else|for|while|do|switch|case|default|goto|return|break|continue)(?-u:\b)",
    )
    .unwrap()
});

static BRANCHING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(if|for|while|case)(?-u:\b)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Flow,
    Branch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicBlock {
    pub id: usize,
    /// 1-based line of the first statement, if the block has one
    pub start_line: Option<usize>,
    pub statements: usize,
    branches: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CfgEdge {
    pub from: usize,
    pub to: usize,
    pub kind: EdgeKind,
}

/// Graph size and the complexity derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CfgMetrics {
    pub nodes: u32,
    pub edges: u32,
    pub connected_components: u32,
    pub regions: u32,
    pub cyclomatic_complexity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFlowGraph {
    blocks: Vec<BasicBlock>,
    edges: Vec<CfgEdge>,
}

impl ControlFlowGraph {
    pub fn build(source: &str) -> Self {
        let blocks = split_blocks(source);
        let edges = connect(&blocks);
        Self { blocks, edges }
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    pub fn edges(&self) -> &[CfgEdge] {
        &self.edges
    }

    /// Id of the synthetic exit node
    pub fn exit(&self) -> usize {
        self.blocks.len()
    }

    pub fn metrics(&self) -> CfgMetrics {
        let nodes = to_u32(self.blocks.len() + 1);
        let edges = to_u32(self.edges.len());
        let connected_components = 1;
        let cyclomatic_complexity = (edges + 2 * connected_components).saturating_sub(nodes);

        CfgMetrics {
            nodes,
            edges,
            connected_components,
            regions: cyclomatic_complexity.max(1),
            cyclomatic_complexity,
        }
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn new_block(id: usize) -> BasicBlock {
    BasicBlock {
        id,
        start_line: None,
        statements: 0,
        branches: false,
    }
}

fn split_blocks(source: &str) -> Vec<BasicBlock> {
    let mut blocks = Vec::new();
    let mut current = new_block(0);

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") {
            continue;
        }

        current.start_line.get_or_insert(index + 1);
        current.statements += 1;

        if CONTROL_FLOW.is_match(trimmed) {
            current.branches = BRANCHING.is_match(trimmed);
            let next = new_block(current.id + 1);
            blocks.push(std::mem::replace(&mut current, next));
        }
    }

    blocks.push(current);
    blocks
}

fn connect(blocks: &[BasicBlock]) -> Vec<CfgEdge> {
    let exit = blocks.len();
    let mut edges = Vec::with_capacity(blocks.len() * 2);

    for block in blocks {
        edges.push(CfgEdge {
            from: block.id,
            to: block.id + 1,
            kind: EdgeKind::Flow,
        });
        // A branching line always opens a successor, so the target is at most the exit
        if block.branches {
            edges.push(CfgEdge {
                from: block.id,
                to: (block.id + 2).min(exit),
                kind: EdgeKind::Branch,
            });
        }
    }

    edges
}

/// Build the graph for `source` and return its metrics
pub fn cfg_metrics(source: &str) -> CfgMetrics {
    ControlFlowGraph::build(source).metrics()
}

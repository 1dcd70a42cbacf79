//! Run transcripts: a recorded event stream rendered as canonical JSON.
//!
//! A [`Transcript`] is the full observable record of one run. Its canonical
//! bytes are compact JSON with object keys in sorted order, so two runs
//! with the same inputs produce byte-identical transcripts and equal
//! digests. The digest is the cheap comparison used by the determinism
//! tests and the fixture binary.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use wayfinder_search::{InstrumentationSink, Outcome, StepEvent, Strategy};

use crate::worlds::grid::Cell;
use crate::worlds::weighted_graph::NodeId;

/// Transcript format tag, embedded in every rendering.
pub const TRANSCRIPT_SCHEMA_VERSION: &str = "transcript.v1";

/// Domain separation prefix for transcript digests. Null-terminated.
pub const DOMAIN_TRANSCRIPT: &[u8] = b"WAYFINDER::TRANSCRIPT::V1\0";

/// JSON rendering of a node label.
pub trait TranscriptNode {
    fn to_json(&self) -> Value;
}

impl TranscriptNode for Cell {
    fn to_json(&self) -> Value {
        json!([self.row, self.col])
    }
}

impl TranscriptNode for NodeId {
    fn to_json(&self) -> Value {
        json!(self)
    }
}

/// Sink that keeps a copy of every event.
#[derive(Debug, Clone)]
pub struct RecordingSink<N> {
    events: Vec<StepEvent<N>>,
}

impl<N> Default for RecordingSink<N> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<N> RecordingSink<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[StepEvent<N>] {
        &self.events
    }

    #[must_use]
    pub fn into_transcript(self, domain_id: &str, strategy: Strategy) -> Transcript<N> {
        Transcript {
            domain_id: domain_id.to_string(),
            strategy,
            events: self.events,
        }
    }
}

impl<N: Clone> InstrumentationSink<N> for RecordingSink<N> {
    fn on_event(&mut self, event: &StepEvent<N>) {
        self.events.push(event.clone());
    }
}

/// Recorded run: domain, strategy and the ordered event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript<N> {
    domain_id: String,
    strategy: Strategy,
    events: Vec<StepEvent<N>>,
}

impl<N> Transcript<N> {
    #[must_use]
    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn events(&self) -> &[StepEvent<N>] {
        &self.events
    }

    /// Expanded nodes in emission order (start excluded).
    pub fn expanded(&self) -> impl Iterator<Item = &N> + '_ {
        self.events.iter().filter_map(StepEvent::expanded_node)
    }

    /// The terminal outcome, if the run ended normally.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome<N>> {
        self.events.iter().rev().find_map(|event| match event {
            StepEvent::Final(outcome) => Some(outcome),
            _ => None,
        })
    }
}

impl<N: TranscriptNode> Transcript<N> {
    #[must_use]
    pub fn to_json(&self) -> Value {
        let events: Vec<Value> = self.events.iter().map(event_json).collect();
        json!({
            "schema_version": TRANSCRIPT_SCHEMA_VERSION,
            "domain_id": self.domain_id,
            "strategy": self.strategy.as_str(),
            "events": events,
        })
    }

    /// Compact JSON, keys sorted.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        self.to_json().to_string().into_bytes()
    }

    /// `"sha256:<hex>"` over the domain prefix and the canonical bytes.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TRANSCRIPT);
        hasher.update(self.canonical_bytes());
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

fn event_json<N: TranscriptNode>(event: &StepEvent<N>) -> Value {
    match event {
        StepEvent::Expanded {
            order,
            node,
            cost_so_far,
            depth,
        } => json!({
            "kind": "expanded",
            "order": order,
            "node": node.to_json(),
            "cost_so_far": cost_so_far,
            "depth": depth,
        }),
        StepEvent::Final(Outcome::Found { path, cost }) => json!({
            "kind": "found",
            "path": path.iter().map(TranscriptNode::to_json).collect::<Vec<_>>(),
            "cost": cost,
        }),
        StepEvent::Final(Outcome::Exhausted) => json!({ "kind": "exhausted" }),
        StepEvent::Final(Outcome::BudgetExceeded { expansions }) => json!({
            "kind": "budget_exceeded",
            "expansions": expansions,
        }),
        StepEvent::Aborted { detail } => json!({
            "kind": "aborted",
            "detail": detail,
        }),
    }
}

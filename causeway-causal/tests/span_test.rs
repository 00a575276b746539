//! Operation spans and the fields they carry. Uses a scoped subscriber with
//! a capturing layer, so it lives in its own test binary.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use causeway_causal::CausalEngine;

/// (span name, graph_id) pairs in the order they were created or recorded.
#[derive(Clone, Default)]
struct SpanLog(Arc<Mutex<Vec<(String, Option<String>)>>>);

impl SpanLog {
    fn push(&self, name: &str, graph_id: Option<String>) {
        self.0.lock().unwrap().push((name.to_string(), graph_id));
    }

    fn graph_ids(&self, name: &str) -> Vec<Option<String>> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, id)| id.clone())
            .collect()
    }
}

#[derive(Default)]
struct GraphIdVisitor(Option<String>);

impl Visit for GraphIdVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "graph_id" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "graph_id" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S> Layer<S> for SpanLog
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let mut visitor = GraphIdVisitor::default();
        attrs.record(&mut visitor);
        self.push(attrs.metadata().name(), visitor.0);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let mut visitor = GraphIdVisitor::default();
        values.record(&mut visitor);
        if let (Some(span), Some(graph_id)) = (ctx.span(id), visitor.0) {
            self.push(span.name(), Some(graph_id));
        }
    }
}

#[test]
fn operations_open_spans_carrying_the_graph_id() {
    let log = SpanLog::default();
    let subscriber = tracing_subscriber::registry().with(log.clone());

    tracing::subscriber::with_default(subscriber, || {
        let engine = CausalEngine::new();
        let graph = engine
            .build_graph("spans", &["Smoking causes cancer".to_string()])
            .unwrap();
        engine.get_graph(&graph.id).unwrap();
        assert!(engine.get_graph("missing-id").is_err());

        // Opened without an id, then recorded once the store minted one.
        assert_eq!(
            log.graph_ids("causeway.build_graph"),
            vec![None, Some(graph.id.clone())]
        );
        assert_eq!(
            log.graph_ids("causeway.get_graph"),
            vec![Some(graph.id.clone()), Some("missing-id".to_string())]
        );
    });
}

//! Verify every trait is implementable by creating mock structs.
use std::sync::{Arc, Mutex};

use causeway_core::errors::{CausewayError, CausewayResult};
use causeway_core::models::*;
use causeway_core::traits::*;
use chrono::Utc;

struct MockExtractor;
impl IObservationExtractor for MockExtractor {
    fn extract(&self, observations: &[String]) -> Extraction {
        let variables = observations
            .iter()
            .enumerate()
            .map(|(i, o)| Variable::new(format!("var-{}", i + 1), o.clone(), VariableKind::Binary))
            .collect();
        Extraction {
            variables,
            links: Vec::new(),
        }
    }
}

#[derive(Default)]
struct MockStore {
    graphs: Mutex<Vec<Arc<CausalGraph>>>,
}

impl IGraphStore for MockStore {
    fn create(&self, description: &str, variables: Vec<Variable>, links: Vec<Link>) -> Arc<CausalGraph> {
        let mut graphs = self.graphs.lock().unwrap();
        let graph = Arc::new(CausalGraph {
            id: format!("mock-{}", graphs.len() + 1),
            description: description.to_string(),
            variables,
            links,
            metadata: Metadata::new(),
            created_at: Utc::now(),
        });
        graphs.push(Arc::clone(&graph));
        graph
    }
    fn get(&self, graph_id: &str) -> CausewayResult<Arc<CausalGraph>> {
        self.graphs
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == graph_id)
            .cloned()
            .ok_or_else(|| CausewayError::graph_not_found(graph_id))
    }
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-0")
    }
    fn len(&self) -> usize {
        self.graphs.lock().unwrap().len()
    }
}

#[test]
fn extractor_trait_is_object_safe() {
    let extractor: Box<dyn IObservationExtractor> = Box::new(MockExtractor);
    let extraction = extractor.extract(&["rain".to_string(), "wet grass".to_string()]);
    assert_eq!(extraction.variables.len(), 2);
    assert!(!extraction.is_empty());
    assert!(Extraction::default().is_empty());
}

#[test]
fn store_trait_is_object_safe_and_reports_not_found() {
    let store: Arc<dyn IGraphStore> = Arc::new(MockStore::default());
    assert!(store.is_empty());
    let graph = store.create("test", Vec::new(), Vec::new());
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&graph.id).unwrap().description, "test");
    assert!(store.get("missing").unwrap_err().is_not_found());
}

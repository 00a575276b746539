mod extractor;
mod graph_store;

pub use extractor::{Extraction, IObservationExtractor};
pub use graph_store::IGraphStore;

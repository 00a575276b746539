use crate::models::{Link, Variable};

/// Variables and links recovered from a batch of observations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub variables: Vec<Variable>,
    pub links: Vec<Link>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.links.is_empty()
    }
}

/// Turns natural-language observations into candidate graph structure.
///
/// Best effort: finding nothing is a valid, silent outcome. Implementations
/// must only emit links whose endpoints are among the returned variables.
pub trait IObservationExtractor: Send + Sync {
    fn extract(&self, observations: &[String]) -> Extraction;
}

//! Keyword-based observation extractor.
//!
//! Best effort by contract: it recognizes a fixed table of connectives and
//! never fails. A sentence that yields nothing is skipped silently.
//!
//! Two passes over the observations:
//! 1. every connective that occurs exactly once splits its sentence, and each
//!    cleaned side becomes a variable (deduplicated by name, first seen wins);
//! 2. each sentence yields at most one link, from the first connective (in
//!    table order) whose two sides both contain a known variable. On each side
//!    the variable nearest the connective is chosen.

pub mod cleaning;
pub mod connectives;
pub mod intensity;
pub mod phrase;

use std::collections::HashSet;

use serde_json::json;
use tracing::debug;

use causeway_core::config::ExtractionConfig;
use causeway_core::constants::{LINK_ID_PREFIX, VARIABLE_ID_PREFIX};
use causeway_core::models::{Link, Metadata, Variable};
use causeway_core::traits::{Extraction, IObservationExtractor};

pub use cleaning::{clean_variable_name, infer_variable_kind};
pub use connectives::{Connective, CONNECTIVES};
pub use intensity::{estimate_confidence, estimate_strength};

struct Sentence<'a> {
    index: usize,
    text: &'a str,
    lower: String,
}

#[derive(Clone, Copy)]
enum Side {
    BeforeConnective,
    AfterConnective,
}

/// Default [`IObservationExtractor`] backed by the connective table.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: ExtractionConfig,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    fn collect_variables(&self, sentences: &[Sentence<'_>]) -> Vec<Variable> {
        let mut variables: Vec<Variable> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for sentence in sentences {
            for connective in CONNECTIVES {
                let Some((before, after)) = connective.split(&sentence.lower) else {
                    continue;
                };
                for side in [before, after] {
                    let name = clean_variable_name(side, self.config.min_variable_name_len);
                    // A side that still holds a connective is a clause, not a name.
                    if name.is_empty() || CONNECTIVES.iter().any(|c| c.is_match(&name)) {
                        continue;
                    }
                    if !seen.insert(name.clone()) {
                        continue;
                    }

                    let kind = infer_variable_kind(&name, &sentence.lower);
                    let id = format!("{VARIABLE_ID_PREFIX}-{}", variables.len() + 1);
                    let mut variable = Variable::new(id, name, kind);
                    variable
                        .metadata
                        .insert("first_seen_in".to_string(), json!(sentence.index));
                    variables.push(variable);
                }
            }
        }

        variables
    }

    fn collect_links(&self, sentences: &[Sentence<'_>], variables: &[Variable]) -> Vec<Link> {
        let mut links: Vec<Link> = Vec::new();

        for sentence in sentences {
            let Some((connective, cause, effect)) = match_link(sentence, variables) else {
                continue;
            };

            // Repeated claims accumulate evidence on the first link.
            if let Some(existing) = links
                .iter_mut()
                .find(|l| l.from == cause.id && l.to == effect.id && l.kind == connective.kind)
            {
                existing.evidence.push(sentence.text.to_string());
                continue;
            }

            let mut metadata = Metadata::new();
            metadata.insert("connective".to_string(), json!(connective.phrase));
            metadata.insert("observation_index".to_string(), json!(sentence.index));

            links.push(Link {
                id: format!("{LINK_ID_PREFIX}-{}", links.len() + 1),
                from: cause.id.clone(),
                to: effect.id.clone(),
                strength: estimate_strength(&sentence.lower, self.config.default_strength),
                kind: connective.kind,
                confidence: estimate_confidence(&sentence.lower, self.config.default_confidence),
                evidence: vec![sentence.text.to_string()],
                metadata,
            });
        }

        links
    }
}

impl IObservationExtractor for KeywordExtractor {
    fn extract(&self, observations: &[String]) -> Extraction {
        let sentences: Vec<Sentence<'_>> = observations
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let text = raw.trim();
                (!text.is_empty()).then(|| Sentence {
                    index,
                    text,
                    lower: text.to_lowercase(),
                })
            })
            .collect();

        let variables = self.collect_variables(&sentences);
        let links = self.collect_links(&sentences, &variables);
        debug!(
            observations = observations.len(),
            variables = variables.len(),
            links = links.len(),
            "keyword extraction complete"
        );

        Extraction { variables, links }
    }
}

fn match_link<'v>(
    sentence: &Sentence<'_>,
    variables: &'v [Variable],
) -> Option<(&'static Connective, &'v Variable, &'v Variable)> {
    CONNECTIVES.iter().find_map(|connective| {
        let (before, after) = connective.split(&sentence.lower)?;
        let first = nearest(before, variables, Side::BeforeConnective)?;
        let second = nearest(after, variables, Side::AfterConnective)?;
        let (cause, effect) = if connective.reversed {
            (second, first)
        } else {
            (first, second)
        };
        (cause.id != effect.id).then_some((connective, cause, effect))
    })
}

/// The variable whose name occurs closest to the connective in `segment`.
/// Ties go to the longer name, then to the earlier variable.
fn nearest<'v>(segment: &str, variables: &'v [Variable], side: Side) -> Option<&'v Variable> {
    variables
        .iter()
        .filter_map(|v| {
            let mut hits = phrase::word_matches(segment, &v.name);
            let distance = match side {
                Side::BeforeConnective => {
                    let start = hits.last()?;
                    segment.len() - (start + v.name.len())
                }
                Side::AfterConnective => hits.next()?,
            };
            Some((distance, v))
        })
        .min_by(|(da, a), (db, b)| da.cmp(db).then_with(|| b.name.len().cmp(&a.name.len())))
        .map(|(_, v)| v)
}

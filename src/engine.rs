//! Full pipeline: payload -> utterance -> intent -> reply

use std::borrow::Cow;

use tracing::{debug, info_span};

use crate::catalog::Catalog;
use crate::compose::ResponseComposer;
use crate::intent::IntentResolver;
use crate::normalize::normalize;
use crate::query::catalog_query;
use crate::random::RandomSource;
use crate::templates::ResponseTemplates;
use crate::types::{ContextualItem, Intent, Payload, ReplyEnvelope};

/// Stateless responder over a read-only template store and optional catalog
pub struct Engine<'a> {
    resolver: IntentResolver,
    templates: &'a ResponseTemplates,
    catalog: Option<&'a Catalog>,
}

impl<'a> Engine<'a> {
    pub fn new(templates: &'a ResponseTemplates) -> Self {
        Self {
            resolver: IntentResolver::new(),
            templates,
            catalog: None,
        }
    }

    /// Fill recommendation requests that arrive without `db_items` from a catalog.
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Produce the reply for one payload. Never empty.
    pub fn respond<R: RandomSource>(&self, payload: &Payload, rng: &mut R) -> String {
        let _span = info_span!("respond").entered();

        let utterance = payload.utterance();
        let normalized = normalize(utterance);
        debug!(normalized = %normalized, items = payload.db_items.len(), "utterance");

        let resolution = self.resolver.resolve(&normalized);
        let items = self.contextual_items(resolution.intent, utterance, &payload.db_items);

        ResponseComposer::new(self.templates).compose(&resolution, &items, rng)
    }

    pub fn respond_envelope<R: RandomSource>(
        &self,
        payload: &Payload,
        rng: &mut R,
    ) -> ReplyEnvelope {
        ReplyEnvelope {
            reply: self.respond(payload, rng),
        }
    }

    fn contextual_items<'p>(
        &self,
        intent: Intent,
        utterance: &str,
        supplied: &'p [ContextualItem],
    ) -> Cow<'p, [ContextualItem]> {
        if !supplied.is_empty() || intent != Intent::RecommendationRequest {
            return Cow::Borrowed(supplied);
        }

        match (self.catalog, catalog_query(utterance)) {
            (Some(catalog), Some(query)) => Cow::Owned(catalog.find(&query)),
            _ => Cow::Borrowed(supplied),
        }
    }
}

/// Respond to a payload with the given templates.
pub fn respond<R: RandomSource>(
    payload: &Payload,
    templates: &ResponseTemplates,
    rng: &mut R,
) -> String {
    Engine::new(templates).respond(payload, rng)
}

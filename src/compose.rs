//! Response composer - turns a resolved intent into a reply string

use tracing::debug;

use crate::random::RandomSource;
use crate::templates::ResponseTemplates;
use crate::types::{ContextualItem, Intent, RecommendationContext, Resolution};

/// Reply used when every other path yields nothing
pub const DEFAULT_REPLY: &str = "Lo siento, no puedo ayudarte ahora mismo con eso. \
                                 Prueba a pedirme recomendaciones por género.";

/// Maximum number of contextual items listed in a recommendation
pub const MAX_SUGGESTIONS: usize = 3;

/// Builds replies from a template store
pub struct ResponseComposer<'t> {
    templates: &'t ResponseTemplates,
}

impl<'t> ResponseComposer<'t> {
    pub fn new(templates: &'t ResponseTemplates) -> Self {
        Self { templates }
    }

    /// Compose the reply for a resolution. Never returns an empty string.
    pub fn compose<R: RandomSource>(
        &self,
        resolution: &Resolution,
        items: &[ContextualItem],
        rng: &mut R,
    ) -> String {
        let reply = match resolution.intent {
            Intent::RecommendationRequest => {
                self.recommend(resolution.recommendation.unwrap_or_default(), items, rng)
            }
            intent => intent
                .template_category()
                .and_then(|category| self.templates.choose(category, rng))
                .map(str::to_string),
        };

        match reply {
            Some(reply) if !reply.trim().is_empty() => reply,
            _ => DEFAULT_REPLY.to_string(),
        }
    }

    fn recommend<R: RandomSource>(
        &self,
        context: RecommendationContext,
        items: &[ContextualItem],
        rng: &mut R,
    ) -> Option<String> {
        if !items.is_empty() {
            debug!(items = items.len(), "recommending from contextual items");
            return suggestion_list(items).or_else(|| self.pick("fallback_questions", rng));
        }

        if context.kind.is_known() && context.genre.is_some() {
            let parts: Vec<&str> = [
                self.templates.choose("acknowledge", rng),
                self.templates.choose("more_variants", rng),
            ]
            .into_iter()
            .flatten()
            .collect();
            return (!parts.is_empty()).then(|| parts.join(" "));
        }

        self.pick("clarify_more", rng)
    }

    fn pick<R: RandomSource>(&self, category: &str, rng: &mut R) -> Option<String> {
        self.templates.choose(category, rng).map(str::to_string)
    }
}

/// Itemized reply for up to [`MAX_SUGGESTIONS`] items.
///
/// Items without any usable title are left out; `None` when nothing remains.
pub fn suggestion_list(items: &[ContextualItem]) -> Option<String> {
    let lines: Vec<String> = items
        .iter()
        .take(MAX_SUGGESTIONS)
        .filter_map(suggestion_line)
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!(
        "Te recomiendo {} opción(es):\n{}",
        lines.len(),
        lines.join("\n")
    ))
}

fn suggestion_line(item: &ContextualItem) -> Option<String> {
    let title = item.display_title()?;
    let kind = item.kind_label();
    Some(match item.year() {
        Some(year) => format!("- {title} ({year}) — {kind}"),
        None => format!("- {title} — {kind}"),
    })
}

/// Compose a reply with a one-off composer.
pub fn compose<R: RandomSource>(
    resolution: &Resolution,
    items: &[ContextualItem],
    templates: &ResponseTemplates,
    rng: &mut R,
) -> String {
    ResponseComposer::new(templates).compose(resolution, items, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedPick, RngSource};
    use crate::types::{Genre, MediaKind};
    use serde_json::json;

    fn templates() -> ResponseTemplates {
        let mut t = ResponseTemplates::default();
        t.insert("greetings", vec!["hola!".into(), "buenas!".into()]);
        t.insert("acknowledge", vec!["Genial.".into()]);
        t.insert("more_variants", vec!["¿Más opciones?".into()]);
        t.insert("clarify_more", vec!["¿Qué tipo y género?".into()]);
        t.insert("fallback_questions", vec!["¿Perdón?".into()]);
        t
    }

    fn recommendation(kind: MediaKind, genre: Option<&'static str>) -> Resolution {
        Resolution {
            intent: Intent::RecommendationRequest,
            recommendation: Some(RecommendationContext {
                kind,
                genre: genre.map(Genre),
            }),
        }
    }

    fn items(value: serde_json::Value) -> Vec<ContextualItem> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_simple_intent_uses_its_category() {
        let t = templates();
        let reply = compose(&Resolution::new(Intent::Greeting), &[], &t, &mut FixedPick(1));
        assert_eq!(reply, "buenas!");

        let reply = compose(
            &Resolution::new(Intent::Greeting),
            &[],
            &t,
            &mut RngSource::thread(),
        );
        assert!(t.candidates("greetings").iter().any(|c| *c == reply));
    }

    #[test]
    fn test_missing_category_falls_to_default() {
        let t = templates();
        let reply = compose(&Resolution::new(Intent::JokeRequest), &[], &t, &mut FixedPick(0));
        assert_eq!(reply, DEFAULT_REPLY);
    }

    #[test]
    fn test_items_override_kind_and_genre() {
        let t = templates();
        let db = items(json!([
            {"title": "Matrix", "data": {"year": 1999}, "itemType": "movie"}
        ]));
        let reply = compose(
            &recommendation(MediaKind::Series, Some("drama")),
            &db,
            &t,
            &mut FixedPick(0),
        );
        assert_eq!(reply, "Te recomiendo 1 opción(es):\n- Matrix (1999) — movie");
    }

    #[test]
    fn test_items_truncated_and_titles_resolved() {
        let t = templates();
        let db = items(json!([
            {"data": {"title": "Dune"}, "type": "book"},
            {"name": "Friends"},
            {"title": "Alien", "data": {"year": "1979"}, "itemType": "movie", "type": "ignored"},
            {"title": "Fourth"}
        ]));
        let reply = compose(&recommendation(MediaKind::Unknown, None), &db, &t, &mut FixedPick(0));
        assert_eq!(
            reply,
            "Te recomiendo 3 opción(es):\n\
             - Dune — book\n\
             - Friends — \n\
             - Alien (1979) — movie"
        );
    }

    #[test]
    fn test_falsy_year_left_out() {
        let t = templates();
        let db = items(json!([
            {"title": "A", "data": {"year": 0}, "itemType": "movie"},
            {"title": "B", "data": {"year": false}, "itemType": "movie"}
        ]));
        let reply = compose(&recommendation(MediaKind::Movie, None), &db, &t, &mut FixedPick(0));
        assert_eq!(reply, "Te recomiendo 2 opción(es):\n- A — movie\n- B — movie");
    }

    #[test]
    fn test_untitled_items_fall_back() {
        let t = templates();
        let db = items(json!([{"data": {"year": 2001}}, {"itemType": "movie"}]));
        let reply = compose(&recommendation(MediaKind::Movie, None), &db, &t, &mut FixedPick(0));
        assert_eq!(reply, "¿Perdón?");
    }

    #[test]
    fn test_kind_and_genre_acknowledged() {
        let t = templates();
        let reply = compose(
            &recommendation(MediaKind::Movie, Some("terror")),
            &[],
            &t,
            &mut FixedPick(0),
        );
        assert_eq!(reply, "Genial. ¿Más opciones?");
    }

    #[test]
    fn test_partial_context_asks_for_clarification() {
        let t = templates();
        for res in [
            recommendation(MediaKind::Movie, None),
            recommendation(MediaKind::Unknown, Some("drama")),
            recommendation(MediaKind::Unknown, None),
        ] {
            assert_eq!(compose(&res, &[], &t, &mut FixedPick(0)), "¿Qué tipo y género?");
        }
    }

    #[test]
    fn test_empty_store_never_empty() {
        let t = ResponseTemplates::default();
        for intent in [Intent::Greeting, Intent::Fallback, Intent::RecommendationRequest] {
            let reply = compose(&Resolution::new(intent), &[], &t, &mut FixedPick(0));
            assert_eq!(reply, DEFAULT_REPLY);
        }
        let reply = compose(
            &recommendation(MediaKind::Book, Some("drama")),
            &[],
            &t,
            &mut FixedPick(0),
        );
        assert_eq!(reply, DEFAULT_REPLY);
    }

    #[test]
    fn test_blank_template_is_not_a_reply() {
        let mut t = ResponseTemplates::default();
        t.insert("thanks", vec!["   ".into()]);
        let reply = compose(&Resolution::new(Intent::Thanks), &[], &t, &mut FixedPick(0));
        assert_eq!(reply, DEFAULT_REPLY);
    }
}

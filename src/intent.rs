//! Intent resolver - ordered, first-match-wins keyword ladder

use tracing::debug;

use crate::entities::SlotExtractor;
use crate::matcher::find_match;
use crate::types::{Intent, RecommendationContext, Resolution};

/// Refines a matched intent with extra slots taken from the same text
pub type SubClassifier = fn(&str) -> RecommendationContext;

/// One rung of the ladder
#[derive(Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub sub_classifier: Option<SubClassifier>,
}

impl IntentRule {
    pub const fn new(intent: Intent, keywords: &'static [&'static str]) -> Self {
        Self {
            intent,
            keywords,
            sub_classifier: None,
        }
    }

    pub const fn with_sub_classifier(mut self, sub_classifier: SubClassifier) -> Self {
        self.sub_classifier = Some(sub_classifier);
        self
    }
}

/// Recommendation slots for a recommendation request.
pub fn recommendation_slots(normalized: &str) -> RecommendationContext {
    SlotExtractor::new().extract(normalized)
}

/// Ladder in priority order. Anything unmatched resolves to [`Intent::Fallback`].
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule::new(Intent::Greeting, &["hola", "buenas", "hello", "hi"]),
    IntentRule::new(
        Intent::HowAreYou,
        &["como estas", "qué tal", "como estás", "how are you", "how are u"],
    ),
    IntentRule::new(Intent::Farewell, &["adios", "hasta luego", "bye", "chau"]),
    IntentRule::new(Intent::Thanks, &["gracias", "thank you", "thanks"]),
    IntentRule::new(Intent::JokeRequest, &["chiste", "broma", "joke"]),
    IntentRule::new(
        Intent::CapabilityQuery,
        &["qué puedes", "puedes hacer", "que haces", "capacidad", "capabilities"],
    ),
    IntentRule::new(
        Intent::RecommendationRequest,
        &["dime", "recomienda", "recomendame", "sugerencia", "sugiere", "buscar"],
    )
    .with_sub_classifier(recommendation_slots),
    IntentRule::new(
        Intent::Smalltalk,
        &["planes", "visto", "vista", "vista recientemente", "visto alguna"],
    ),
];

/// Classifies normalized utterances by walking a rule ladder
pub struct IntentResolver {
    rules: &'static [IntentRule],
}

impl IntentResolver {
    pub fn new() -> Self {
        Self::with_rules(INTENT_RULES)
    }

    pub fn with_rules(rules: &'static [IntentRule]) -> Self {
        Self { rules }
    }

    /// Resolve the intent of already-normalized text.
    ///
    /// The first rule with a matching keyword wins; its sub-classifier, if
    /// any, fills the recommendation context.
    pub fn resolve(&self, normalized: &str) -> Resolution {
        for rule in self.rules {
            if let Some((keyword, how)) = find_match(normalized, rule.keywords) {
                let recommendation = rule.sub_classifier.map(|classify| classify(normalized));
                debug!(
                    intent = rule.intent.as_str(),
                    keyword,
                    rule = ?how,
                    kind = recommendation.map(|r| r.kind.as_str()),
                    genre = recommendation.and_then(|r| r.genre).map(|g| g.as_str()),
                    "intent resolved"
                );
                return Resolution {
                    intent: rule.intent,
                    recommendation,
                };
            }
        }

        debug!(intent = Intent::Fallback.as_str(), "no rule matched");
        Resolution::new(Intent::Fallback)
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve with the built-in ladder.
pub fn resolve_intent(normalized: &str) -> Resolution {
    IntentResolver::new().resolve(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::types::MediaKind;

    fn intent_of(s: &str) -> Intent {
        resolve_intent(&normalize(s)).intent
    }

    #[test]
    fn test_ladder() {
        assert_eq!(intent_of("Hola!"), Intent::Greeting);
        assert_eq!(intent_of("¿Cómo estás?"), Intent::HowAreYou);
        assert_eq!(intent_of("adios amigo"), Intent::Farewell);
        assert_eq!(intent_of("muchas gracias"), Intent::Thanks);
        assert_eq!(intent_of("joke please"), Intent::JokeRequest);
        assert_eq!(intent_of("que puedes hacer"), Intent::CapabilityQuery);
        assert_eq!(intent_of("recomiendame algo"), Intent::RecommendationRequest);
        assert_eq!(intent_of("que planes tienes"), Intent::Smalltalk);
        assert_eq!(intent_of("zzz"), Intent::Fallback);
        assert_eq!(intent_of(""), Intent::Fallback);
    }

    #[test]
    fn test_priority_follows_ladder_order() {
        assert_eq!(intent_of("hola y adios"), Intent::Greeting);
        assert_eq!(intent_of("adios y gracias"), Intent::Farewell);
    }

    #[test]
    fn test_typo_tolerance() {
        assert_eq!(intent_of("holaa"), Intent::Greeting);
        assert_eq!(intent_of("grasias"), Intent::Thanks);
    }

    #[test]
    fn test_recommendation_context_only_for_recommendations() {
        let res = resolve_intent(&normalize("Dime una película de comedia"));
        assert_eq!(res.intent, Intent::RecommendationRequest);
        let ctx = res.recommendation.unwrap();
        assert_eq!(ctx.kind, MediaKind::Movie);
        assert_eq!(ctx.genre.map(|g| g.as_str()), Some("comedia"));

        assert!(resolve_intent("hola").recommendation.is_none());
        assert!(resolve_intent("zzz").recommendation.is_none());
    }

    #[test]
    fn test_custom_rules() {
        static RULES: &[IntentRule] = &[IntentRule::new(Intent::Thanks, &["merci"])];
        let resolver = IntentResolver::with_rules(RULES);
        assert_eq!(resolver.resolve("merci beaucoup").intent, Intent::Thanks);
        assert_eq!(resolver.resolve("hola").intent, Intent::Fallback);
    }

    #[test]
    fn test_deterministic() {
        let text = normalize("recomienda una serie de drama");
        assert_eq!(resolve_intent(&text), resolve_intent(&text));
    }
}

//! Conversation driver and response composer
//!
//! One call per chat turn. The server holds no conversation state: the
//! caller sends the previous `SessionContext` and gets the updated one
//! back, so a turn is `(SessionContext, utterance) -> (SessionContext,
//! reply)` plus the collaborator calls it makes.
//!
//! Every error path stays distinguishable in the returned context flags
//! (`db_queried`, `ai_used`, `recommended_action`) without parsing the
//! reply text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use findit_config::{Lexicon, ResponseTemplates};
use findit_core::{
    Intent, ItemStatus, Language, MatchResult, RecommendedAction, SessionContext, TextGenerator,
};
use findit_llm::investigator_prompt;
use findit_search::{SearchEngine, SearchParams};

use crate::extract::EntityExtractor;
use crate::format::format_results;
use crate::intent::{is_question, IntentClassifier};

/// One prior conversation turn. Accepted for wire compatibility; the rule
/// engine derives all state from the session context instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorTurn {
    pub role: String,
    pub content: String,
}

/// Request for one chat turn
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<PriorTurn>,
    #[serde(default)]
    pub session_context: Option<SessionContext>,
}

/// Structured turn outcome returned alongside the reply text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnContext {
    pub intent: Intent,
    pub missing_fields: Vec<String>,
    pub clarifying_questions: Vec<String>,
    pub matches: Vec<MatchResult>,
    pub recommended_action: RecommendedAction,
    pub ai_used: bool,
    pub db_queried: bool,
    pub session_context: SessionContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_location: Option<bool>,
}

impl TurnContext {
    fn new(intent: Intent, action: RecommendedAction, session: SessionContext) -> Self {
        Self {
            intent,
            missing_fields: Vec::new(),
            clarifying_questions: Vec::new(),
            matches: Vec::new(),
            recommended_action: action,
            ai_used: false,
            db_queried: false,
            session_context: session,
            needs_location: None,
        }
    }
}

/// One completed chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub response: String,
    pub context: TurnContext,
}

/// The assistant: extraction, classification, search, composition
pub struct Assistant {
    engine: Arc<SearchEngine>,
    generator: Option<Arc<dyn TextGenerator>>,
    templates: Arc<ResponseTemplates>,
    extractor: EntityExtractor,
    classifier: IntentClassifier,
}

impl Assistant {
    pub fn new(
        engine: Arc<SearchEngine>,
        lexicon: Arc<Lexicon>,
        templates: Arc<ResponseTemplates>,
    ) -> Self {
        Self {
            engine,
            generator: None,
            templates,
            extractor: EntityExtractor::new(lexicon.clone()),
            classifier: IntentClassifier::new(lexicon),
        }
    }

    /// Attach the fallback generator
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Process one chat turn.
    ///
    /// Never fails: collaborator errors become canned replies with the
    /// matching context flags set.
    pub async fn process(&self, request: &ChatRequest) -> ChatTurn {
        let lang = Language::detect(&request.message);

        let prior = request.session_context.clone().unwrap_or_default();
        let mut session = prior.clone();
        session.begin_turn();

        let extracted = self.extractor.extract(&request.message);
        session.absorb(&extracted);

        // Classification sees the pre-merge context: the location-update
        // override asks whether the location was missing BEFORE this
        // utterance supplied one.
        let detected = self.classifier.classify(&request.message, Some(&prior));
        let intent = detected.intent;
        if !intent.is_transient() {
            session.intent = Some(intent);
        }

        tracing::debug!(
            intent = %intent,
            confidence = detected.confidence,
            turn = session.conversation_turn,
            info_score = session.info_score,
            lang = lang.code(),
            "turn classified"
        );

        // Static intents answer from templates; no store query
        if intent.is_static() {
            return self.static_reply(intent, lang, session);
        }

        // Disallowed topics are refused outright, never searched and
        // never handed to the generative fallback
        if intent == Intent::DisallowedTopic {
            return ChatTurn {
                response: self.templates.disallowed_topic.get(lang).to_string(),
                context: TurnContext::new(intent, RecommendedAction::Continue, session),
            };
        }

        // Any informative field, or an info-bearing intent, triggers the
        // search
        let should_search = session.has_any_info()
            || matches!(
                intent,
                Intent::Search | Intent::PostFound | Intent::LocationUpdate | Intent::Browse
            );

        if should_search {
            return self.search_reply(intent, lang, session).await;
        }

        // No info at all and nothing classified: a question gets the
        // mode-redirect rather than a guess
        if intent == Intent::Unknown {
            return if is_question(&request.message.to_lowercase()) {
                let mut context =
                    TurnContext::new(intent, RecommendedAction::SwitchModeOrProvideInfo, session);
                context.missing_fields.push("category".to_string());
                ChatTurn {
                    response: self.templates.mode_redirect.get(lang).to_string(),
                    context,
                }
            } else {
                let mut context = TurnContext::new(intent, RecommendedAction::ProvideInfo, session);
                context.missing_fields.push("category".to_string());
                ChatTurn {
                    response: self.templates.need_more_info.get(lang).to_string(),
                    context,
                }
            };
        }

        // Last resort: bounded generative fallback
        self.fallback_reply(intent, lang, &request.message, session).await
    }

    fn static_reply(&self, intent: Intent, lang: Language, session: SessionContext) -> ChatTurn {
        let (template, action) = match intent {
            Intent::Identity => (&self.templates.identity, RecommendedAction::Continue),
            Intent::Greeting => (&self.templates.greeting, RecommendedAction::AwaitInput),
            Intent::Help => (&self.templates.help, RecommendedAction::AwaitInput),
            Intent::Closure => (&self.templates.closure_guide, RecommendedAction::GuideClosure),
            Intent::Safety => (&self.templates.safety_tips, RecommendedAction::ProvideGuidance),
            Intent::Recovery => (&self.templates.recovery_tips, RecommendedAction::ProvideGuidance),
            Intent::NextSteps => (&self.templates.next_steps, RecommendedAction::ProvideGuidance),
            // is_static() gates the call
            _ => unreachable!("non-static intent in static_reply"),
        };

        ChatTurn {
            response: template.get(lang).to_string(),
            context: TurnContext::new(intent, action, session),
        }
    }

    async fn search_reply(
        &self,
        intent: Intent,
        lang: Language,
        session: SessionContext,
    ) -> ChatTurn {
        let params = SearchParams {
            keyword: session.search_keyword().map(str::to_string),
            location: session.location.clone(),
            status: ItemStatus::Active,
        };

        let items = match self.engine.search(&params).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, "search unavailable");
                let mut context =
                    TurnContext::new(intent, RecommendedAction::Retry, session);
                context.db_queried = true;
                return ChatTurn {
                    response: self.templates.store_error.get(lang).to_string(),
                    context,
                };
            }
        };

        let has_category = session.category.is_some();
        let has_location = session.location.is_some();

        let mut needs_location = false;
        let mut action = if items.is_empty() {
            RecommendedAction::PostItem
        } else {
            RecommendedAction::ReviewMatches
        };

        let response = if items.is_empty() && has_category && !has_location {
            // Ask for location and distinguishing features in one message
            needs_location = true;
            action = RecommendedAction::ProvideLocation;
            let category = session.category.as_deref().unwrap_or("item");
            self.templates.ask_location_features(lang, category)
        } else {
            let mut text = format_results(&items, lang, &self.templates);
            if !items.is_empty() && !has_location {
                text.push('\n');
                text.push_str(self.templates.location_hint.get(lang));
                needs_location = true;
            }
            text
        };

        let reported_intent = session.intent.unwrap_or(intent);
        let mut context = TurnContext::new(reported_intent, action, session);
        context.db_queried = true;
        context.matches = MatchResult::from_scored(&items);
        context.needs_location = Some(needs_location);

        ChatTurn { response, context }
    }

    async fn fallback_reply(
        &self,
        intent: Intent,
        lang: Language,
        message: &str,
        session: SessionContext,
    ) -> ChatTurn {
        let Some(generator) = &self.generator else {
            return self.ai_unavailable(intent, lang, session);
        };

        match generator.generate(&investigator_prompt(lang), message).await {
            Ok(text) => {
                let mut context =
                    TurnContext::new(intent, RecommendedAction::Continue, session);
                context.ai_used = true;
                ChatTurn { response: text, context }
            }
            Err(e) => {
                tracing::warn!(model = generator.model_name(), error = %e, "fallback failed");
                self.ai_unavailable(intent, lang, session)
            }
        }
    }

    fn ai_unavailable(&self, intent: Intent, lang: Language, session: SessionContext) -> ChatTurn {
        ChatTurn {
            response: self.templates.ai_unavailable.get(lang).to_string(),
            context: TurnContext::new(intent, RecommendedAction::Retry, session),
        }
    }
}

//! RouteQueryHandler - Classify a query, answer it, and audit the exchange

use std::sync::Arc;

use serde::Deserialize;

use crate::application::responders::{ChatResponder, JokeResponder, WeatherResponder};
use crate::domain::audit::AuditRecord;
use crate::domain::foundation::AuditRecordId;
use crate::domain::query::{extract_city, Intent, Query};
use crate::ports::{
    AuditLog, AuditLogError, ChatProvider, JokeProvider, ProviderError, WeatherProvider,
};

/// Command to route a user query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQueryCommand {
    pub query: Query,
}

/// Inbound body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    query: String,
}

impl RouteQueryCommand {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: Query::new(query),
        }
    }

    /// Parses a raw request body.
    ///
    /// The body must be a JSON object; `query` is optional but, when
    /// present, must be a string.
    pub fn from_json(body: &[u8]) -> Result<Self, RouteQueryError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(RouteQueryError::MalformedInput(
                "Request body is empty".to_string(),
            ));
        }

        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| RouteQueryError::MalformedInput(format!("Invalid JSON: {}", e)))?;
        if !value.is_object() {
            return Err(RouteQueryError::MalformedInput(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let parsed: QueryBody = serde_json::from_value(value)
            .map_err(|e| RouteQueryError::MalformedInput(format!("Invalid query field: {}", e)))?;
        Ok(Self::new(parsed.query))
    }
}

/// Result of routing a query
#[derive(Debug, Clone)]
pub struct RouteQueryResult {
    pub intent: Intent,
    pub response: String,
    /// Id of the stored audit record; `None` when a write failure was tolerated.
    pub audit_id: Option<AuditRecordId>,
}

/// Error type for routing a query
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteQueryError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Weather or joke provider answered 200 with an unusable body.
    #[error("{intent} provider returned an unexpected response: {source}")]
    ProviderContractViolation {
        intent: Intent,
        #[source]
        source: ProviderError,
    },

    /// Weather or joke provider could not be reached or refused the request.
    #[error("{intent} provider is unreachable: {source}")]
    ProviderUnreachable {
        intent: Intent,
        #[source]
        source: ProviderError,
    },

    #[error("Chat provider failed: {0}")]
    ChatProviderFailure(#[source] ProviderError),

    #[error("Failed to write audit record: {0}")]
    StoreWriteFailure(#[source] AuditLogError),
}

/// Coarse failure category, used by transports to pick a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MalformedInput,
    Upstream,
    AuditWrite,
    Internal,
}

impl FailureKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::MalformedInput => "MALFORMED_INPUT",
            FailureKind::Upstream => "UPSTREAM_FAILURE",
            FailureKind::AuditWrite => "AUDIT_WRITE_FAILED",
            FailureKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl RouteQueryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RouteQueryError::MalformedInput(_) => FailureKind::MalformedInput,
            RouteQueryError::ProviderContractViolation { .. }
            | RouteQueryError::ProviderUnreachable { .. }
            | RouteQueryError::ChatProviderFailure(_) => FailureKind::Upstream,
            RouteQueryError::StoreWriteFailure(AuditLogError::NotConfigured(_)) => {
                FailureKind::Internal
            }
            RouteQueryError::StoreWriteFailure(_) => FailureKind::AuditWrite,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    fn from_provider(intent: Intent, err: ProviderError) -> Self {
        match err {
            ProviderError::Contract { .. } => RouteQueryError::ProviderContractViolation {
                intent,
                source: err,
            },
            ProviderError::Status { .. }
            | ProviderError::Transport { .. }
            | ProviderError::Timeout { .. } => RouteQueryError::ProviderUnreachable {
                intent,
                source: err,
            },
        }
    }
}

/// What to do when the audit record cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditWritePolicy {
    /// Fail the request; no answer leaves without its record.
    #[default]
    FailRequest,
    /// Log the failure and return the answer anyway.
    LogAndContinue,
}

/// Handler for routing user queries
pub struct RouteQueryHandler {
    weather: WeatherResponder,
    joke: JokeResponder,
    chat: ChatResponder,
    audit_log: Arc<dyn AuditLog>,
    audit_policy: AuditWritePolicy,
}

impl RouteQueryHandler {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        joke: Arc<dyn JokeProvider>,
        chat: Arc<dyn ChatProvider>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            weather: WeatherResponder::new(weather),
            joke: JokeResponder::new(joke),
            chat: ChatResponder::new(chat),
            audit_log,
            audit_policy: AuditWritePolicy::default(),
        }
    }

    pub fn with_audit_policy(mut self, policy: AuditWritePolicy) -> Self {
        self.audit_policy = policy;
        self
    }

    pub async fn handle(
        &self,
        cmd: RouteQueryCommand,
    ) -> Result<RouteQueryResult, RouteQueryError> {
        let query = cmd.query;

        // 1. Classify
        let intent = Intent::classify(&query);
        tracing::debug!(intent = %intent, query_len = query.as_str().len(), "Routing query");

        // 2. Dispatch to the matching responder
        let response = match intent {
            Intent::Weather => {
                let city = extract_city(query.as_str());
                tracing::debug!(city = %city, "Fetching weather");
                self.weather
                    .respond(&city)
                    .await
                    .map_err(|e| RouteQueryError::from_provider(intent, e))?
            }
            Intent::Joke => self
                .joke
                .respond()
                .await
                .map_err(|e| RouteQueryError::from_provider(intent, e))?,
            Intent::Chat => self
                .chat
                .respond(&query)
                .await
                .map_err(RouteQueryError::ChatProviderFailure)?,
        };

        // 3. Audit the exchange
        let record = AuditRecord::new(&query, response.clone());
        let audit_id = match self.audit_log.record(&record).await {
            Ok(()) => Some(record.id()),
            Err(err) => match self.audit_policy {
                AuditWritePolicy::FailRequest => {
                    return Err(RouteQueryError::StoreWriteFailure(err));
                }
                AuditWritePolicy::LogAndContinue => {
                    tracing::error!(
                        error = %err,
                        intent = %intent,
                        "Audit write failed, answering anyway"
                    );
                    None
                }
            },
        };

        tracing::info!(intent = %intent, audit_id = ?audit_id, "Query answered");
        Ok(RouteQueryResult {
            intent,
            response,
            audit_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::audit::InMemoryAuditLog;
    use crate::adapters::chat::MockChatProvider;
    use crate::adapters::joke::MockJokeProvider;
    use crate::adapters::weather::MockWeatherProvider;
    use crate::domain::query::{JOKE_APOLOGY, WEATHER_APOLOGY};

    struct Fixture {
        weather: MockWeatherProvider,
        joke: MockJokeProvider,
        chat: MockChatProvider,
        audit: InMemoryAuditLog,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                weather: MockWeatherProvider::new(),
                joke: MockJokeProvider::new(),
                chat: MockChatProvider::new(),
                audit: InMemoryAuditLog::new(),
            }
        }

        fn handler(&self) -> RouteQueryHandler {
            RouteQueryHandler::new(
                Arc::new(self.weather.clone()),
                Arc::new(self.joke.clone()),
                Arc::new(self.chat.clone()),
                Arc::new(self.audit.clone()),
            )
        }
    }

    #[test]
    fn from_json_reads_query() {
        let cmd = RouteQueryCommand::from_json(br#"{"query": "Tell me a JOKE"}"#).unwrap();
        assert_eq!(cmd.query.as_str(), "tell me a joke");
    }

    #[test]
    fn from_json_defaults_missing_query_to_empty() {
        let cmd = RouteQueryCommand::from_json(br#"{"other": 1}"#).unwrap();
        assert!(cmd.query.is_empty());
    }

    #[test]
    fn from_json_rejects_bad_bodies() {
        for body in [
            &b""[..],
            b"   ",
            b"{not json",
            b"[\"weather\"]",
            b"\"weather\"",
            br#"{"query": 42}"#,
            br#"{"query": null}"#,
        ] {
            let result = RouteQueryCommand::from_json(body);
            assert!(
                matches!(result, Err(RouteQueryError::MalformedInput(_))),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn error_kinds_map_to_codes() {
        assert_eq!(
            RouteQueryError::MalformedInput("x".into()).code(),
            "MALFORMED_INPUT"
        );
        assert_eq!(
            RouteQueryError::ChatProviderFailure(ProviderError::status("mistral", 500)).code(),
            "UPSTREAM_FAILURE"
        );
        assert_eq!(
            RouteQueryError::StoreWriteFailure(AuditLogError::DatabaseError("down".into())).code(),
            "AUDIT_WRITE_FAILED"
        );
        assert_eq!(
            RouteQueryError::StoreWriteFailure(AuditLogError::NotConfigured("no table".into()))
                .code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn provider_errors_map_by_cause() {
        let status =
            RouteQueryError::from_provider(Intent::Weather, ProviderError::status("w", 503));
        let timeout = RouteQueryError::from_provider(
            Intent::Joke,
            ProviderError::Timeout {
                provider: "j",
                timeout_secs: 30,
            },
        );
        let contract =
            RouteQueryError::from_provider(Intent::Joke, ProviderError::contract("j", "no setup"));

        assert!(matches!(
            status,
            RouteQueryError::ProviderUnreachable { .. }
        ));
        assert!(matches!(
            timeout,
            RouteQueryError::ProviderUnreachable { .. }
        ));
        assert!(matches!(
            contract,
            RouteQueryError::ProviderContractViolation { .. }
        ));
        assert_eq!(
            status.to_string(),
            "weather provider is unreachable: w returned status 503"
        );
    }

    #[tokio::test]
    async fn weather_query_uses_extracted_city_and_is_audited() {
        let fx = Fixture::new();
        let fx = Fixture {
            weather: fx.weather.with_report("overcast clouds", 9),
            ..fx
        };

        let result = fx
            .handler()
            .handle(RouteQueryCommand::new("What's the weather in Paris?"))
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::Weather);
        assert_eq!(
            result.response,
            "Current weather in paris: overcast clouds, 9°C."
        );
        assert_eq!(fx.weather.cities(), vec!["paris".to_string()]);

        let records = fx.audit.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].query(), "what's the weather in paris?");
        assert_eq!(records[0].response(), result.response);
        assert_eq!(result.audit_id, Some(records[0].id()));
    }

    #[tokio::test]
    async fn weather_takes_precedence_over_joke() {
        let fx = Fixture::new();

        let result = fx
            .handler()
            .handle(RouteQueryCommand::new("tell me a joke about the weather"))
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::Weather);
        assert_eq!(fx.weather.call_count(), 1);
        assert_eq!(fx.joke.call_count(), 0);
    }

    #[tokio::test]
    async fn joke_query_is_answered() {
        let fx = Fixture::new();
        let fx = Fixture {
            joke: fx
                .joke
                .with_joke("What do you call a fake noodle?", "An impasta."),
            ..fx
        };

        let result = fx
            .handler()
            .handle(RouteQueryCommand::new("joke please"))
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::Joke);
        assert_eq!(
            result.response,
            "What do you call a fake noodle? An impasta."
        );
    }

    #[tokio::test]
    async fn empty_query_goes_to_chat() {
        let fx = Fixture::new();
        let fx = Fixture {
            chat: fx.chat.with_response("Hello there!"),
            ..fx
        };

        let result = fx
            .handler()
            .handle(RouteQueryCommand::new(""))
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::Chat);
        assert_eq!(result.response, "Hello there!");
        assert_eq!(fx.chat.call_count(), 1);
    }

    #[tokio::test]
    async fn apologies_are_audited_like_answers() {
        let fx = Fixture::new();
        let fx = Fixture {
            weather: fx.weather.with_error(ProviderError::status("weather", 404)),
            joke: fx.joke.with_error(ProviderError::status("jokes", 500)),
            ..fx
        };
        let handler = fx.handler();

        let weather = handler
            .handle(RouteQueryCommand::new("weather in atlantis"))
            .await
            .unwrap();
        let joke = handler
            .handle(RouteQueryCommand::new("a joke"))
            .await
            .unwrap();

        assert_eq!(weather.response, WEATHER_APOLOGY);
        assert_eq!(joke.response, JOKE_APOLOGY);
        assert_eq!(fx.audit.count().await, 2);
    }

    #[tokio::test]
    async fn weather_contract_violation_propagates_without_audit() {
        let fx = Fixture::new();
        let fx = Fixture {
            weather: fx.weather.with_error(ProviderError::contract(
                "weather",
                "missing field `weather`",
            )),
            ..fx
        };

        let err = fx
            .handler()
            .handle(RouteQueryCommand::new("weather"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RouteQueryError::ProviderContractViolation {
                intent: Intent::Weather,
                ..
            }
        ));
        assert_eq!(fx.audit.count().await, 0);
    }

    #[tokio::test]
    async fn joke_transport_failure_is_unreachable() {
        let fx = Fixture::new();
        let fx = Fixture {
            joke: fx
                .joke
                .with_error(ProviderError::transport("jokes", "Connection failed")),
            ..fx
        };

        let err = fx
            .handler()
            .handle(RouteQueryCommand::new("joke"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RouteQueryError::ProviderUnreachable {
                intent: Intent::Joke,
                ..
            }
        ));
        assert_eq!(err.kind(), FailureKind::Upstream);
    }

    #[tokio::test]
    async fn chat_status_error_propagates() {
        let fx = Fixture::new();
        let fx = Fixture {
            chat: fx.chat.with_error(ProviderError::status("mistral", 429)),
            ..fx
        };

        let err = fx
            .handler()
            .handle(RouteQueryCommand::new("who are you?"))
            .await
            .unwrap_err();

        assert!(matches!(err, RouteQueryError::ChatProviderFailure(_)));
        assert_eq!(fx.audit.count().await, 0);
    }

    #[tokio::test]
    async fn audit_failure_fails_request_by_default() {
        let fx = Fixture::new();
        let fx = Fixture {
            audit: InMemoryAuditLog::failing("table missing"),
            ..fx
        };

        let err = fx
            .handler()
            .handle(RouteQueryCommand::new("joke"))
            .await
            .unwrap_err();

        assert!(matches!(err, RouteQueryError::StoreWriteFailure(_)));
        assert_eq!(err.kind(), FailureKind::AuditWrite);
    }

    #[tokio::test]
    async fn audit_failure_can_be_tolerated() {
        let fx = Fixture::new();
        let fx = Fixture {
            audit: InMemoryAuditLog::failing("table missing"),
            ..fx
        };

        let result = fx
            .handler()
            .with_audit_policy(AuditWritePolicy::LogAndContinue)
            .handle(RouteQueryCommand::new("joke"))
            .await
            .unwrap();

        assert_eq!(result.intent, Intent::Joke);
        assert!(result.audit_id.is_none());
    }
}

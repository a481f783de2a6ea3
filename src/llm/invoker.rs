//! Resilient model invocation: bounded retries with exponential backoff and
//! jitter around an [`LlmProvider`].

use std::time::Duration;

use rand::Rng;
use uuid::Uuid;

use super::provider::LlmProvider;
use super::types::ModelRequest;
use crate::error::{ChatError, ProviderError};

/// Placeholder shown when the endpoint answers successfully but with no
/// usable text. Substituted instead of surfacing an error.
pub const EMPTY_ANSWER_TEXT: &str =
    "The model returned an empty response. Please try asking again.";

/// Retry behavior for model invocations.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: usize,
    /// Delay before the first retry; doubles per subsequent retry.
    pub base_delay: Duration,
    /// Upper bound (exclusive) of the uniform jitter added to each delay.
    pub jitter_max: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            jitter_max: Duration::from_millis(250),
        }
    }
}

/// Backoff before the retry following failed attempt `attempt` (zero-based):
/// `base_delay * 2^attempt` plus uniform jitter in `[0, jitter_max)`.
fn backoff_delay(policy: &RetryPolicy, attempt: u32) -> Duration {
    let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    let exponential = policy.base_delay.saturating_mul(factor);

    let jitter_ms = policy.jitter_max.as_millis() as u64;
    let jitter = if jitter_ms == 0 {
        Duration::ZERO
    } else {
        Duration::from_millis(rand::rng().random_range(0..jitter_ms))
    };

    exponential + jitter
}

/// Wraps a provider and absorbs transient endpoint failures.
pub struct ResilientInvoker<P> {
    provider: P,
    policy: RetryPolicy,
}

impl<P: LlmProvider> ResilientInvoker<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Execute `request`, retrying transient failures until the attempt
    /// budget runs out.
    ///
    /// Returns the answer text on success; an HTTP-successful reply with no
    /// usable text resolves to [`EMPTY_ANSWER_TEXT`] rather than an error.
    pub async fn invoke(&self, request: &ModelRequest) -> Result<String, ChatError> {
        let request_id = Uuid::new_v4();
        let max_attempts = self.policy.max_attempts.max(1);
        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..max_attempts {
            match self.provider.generate(request).await {
                Ok(response) => {
                    return Ok(match response.answer_text {
                        Some(text) => text,
                        None => {
                            tracing::warn!(
                                %request_id,
                                provider = self.provider.name(),
                                "endpoint returned no answer text, substituting placeholder"
                            );
                            EMPTY_ANSWER_TEXT.to_string()
                        }
                    });
                }
                Err(err) => {
                    if attempt + 1 < max_attempts {
                        let delay = backoff_delay(&self.policy, attempt as u32);
                        tracing::warn!(
                            %request_id,
                            provider = self.provider.name(),
                            attempt = attempt + 1,
                            max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "model call failed, backing off before retry"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(err);
                }
            }
        }

        let message = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown failure".to_string());
        tracing::error!(%request_id, attempts = max_attempts, %message, "retries exhausted");
        Err(ChatError::Invocation {
            attempts: max_attempts,
            message: format!("retries exhausted: {message}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ModelResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `fail_first` calls, then answers with `answer`.
    struct ScriptedProvider {
        fail_first: usize,
        calls: AtomicUsize,
        answer: Option<String>,
    }

    impl ScriptedProvider {
        fn new(fail_first: usize, answer: Option<&str>) -> Self {
            Self {
                fail_first,
                calls: AtomicUsize::new(0),
                answer: answer.map(str::to_string),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn health_check(&self) -> Result<bool, ProviderError> {
            Ok(true)
        }

        async fn generate(&self, _request: &ModelRequest) -> Result<ModelResponse, ProviderError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(ProviderError::Status {
                    status: 503,
                    body: "unavailable".into(),
                });
            }
            Ok(ModelResponse {
                answer_text: self.answer.clone(),
            })
        }
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            jitter_max: Duration::from_millis(1),
        }
    }

    fn request() -> ModelRequest {
        ModelRequest {
            system_instruction: "sys".into(),
            user_question: "q".into(),
        }
    }

    #[tokio::test]
    async fn recovers_after_two_failures() {
        let invoker = ResilientInvoker::new(ScriptedProvider::new(2, Some("recovered")))
            .with_policy(fast_policy());
        let answer = invoker.invoke(&request()).await.unwrap();
        assert_eq!(answer, "recovered");
        assert_eq!(invoker.provider().calls(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let invoker = ResilientInvoker::new(ScriptedProvider::new(usize::MAX, None))
            .with_policy(fast_policy());
        let err = invoker.invoke(&request()).await.unwrap_err();
        assert!(matches!(err, ChatError::Invocation { attempts: 3, .. }));
        assert_eq!(invoker.provider().calls(), 3);
    }

    #[tokio::test]
    async fn empty_answer_becomes_placeholder_without_retry() {
        let invoker =
            ResilientInvoker::new(ScriptedProvider::new(0, None)).with_policy(fast_policy());
        let answer = invoker.invoke(&request()).await.unwrap();
        assert_eq!(answer, EMPTY_ANSWER_TEXT);
        assert_eq!(invoker.provider().calls(), 1);
    }

    #[tokio::test]
    async fn first_try_success_makes_one_call() {
        let invoker = ResilientInvoker::new(ScriptedProvider::new(0, Some("direct")))
            .with_policy(fast_policy());
        let answer = invoker.invoke(&request()).await.unwrap();
        assert_eq!(answer, "direct");
        assert_eq!(invoker.provider().calls(), 1);
    }

    #[test]
    fn backoff_grows_exponentially_within_jitter_bounds() {
        let policy = RetryPolicy {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            jitter_max: Duration::from_millis(50),
        };

        for attempt in 0..3u32 {
            let floor = Duration::from_millis(100 * 2u64.pow(attempt));
            let ceiling = floor + Duration::from_millis(50);
            for _ in 0..20 {
                let delay = backoff_delay(&policy, attempt);
                assert!(delay >= floor, "attempt {attempt}: {delay:?} < {floor:?}");
                assert!(delay < ceiling, "attempt {attempt}: {delay:?} >= {ceiling:?}");
            }
        }
    }

    #[test]
    fn zero_jitter_is_deterministic() {
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            jitter_max: Duration::ZERO,
        };
        assert_eq!(backoff_delay(&policy, 0), Duration::from_millis(100));
        assert_eq!(backoff_delay(&policy, 1), Duration::from_millis(200));
    }
}

//! Fallback text generator trait
//!
//! Used only when no rule matches an utterance. Calls are bounded by the
//! implementation's timeout; a failure propagates to the caller, which
//! surfaces an explicit unavailability message. No retries here — retry
//! policy belongs to the caller.

use async_trait::async_trait;

use crate::error::CoreError;

/// A bounded call to an external text-generation model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply for `user_message` under `system_prompt`.
    async fn generate(&self, system_prompt: &str, user_message: &str)
        -> Result<String, CoreError>;

    /// Check whether the backing model can be reached
    async fn is_available(&self) -> bool;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

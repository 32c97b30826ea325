//! Response cache: memoizes generator output keyed by a SHA-256 of the prompt.
//!
//! Prompts embed the full input documents, so identical uploads skip the network.
//! Eviction is least-recently-used with a fixed capacity. Failed calls are never cached.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use async_trait::async_trait;
use lru::LruCache;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::llm_client::{LlmError, TextGenerator};

type PromptKey = [u8; 32];

fn prompt_key(prompt: &str) -> PromptKey {
    Sha256::digest(prompt.as_bytes()).into()
}

/// A `TextGenerator` that serves repeated prompts from an LRU cache.
pub struct CachedGenerator<G> {
    inner: G,
    /// `None` when the configured capacity is zero.
    cache: Option<Mutex<LruCache<PromptKey, String>>>,
}

impl<G: TextGenerator> CachedGenerator<G> {
    pub fn new(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    fn lookup(&self, key: &PromptKey) -> Option<String> {
        let cache = self.cache.as_ref()?;
        // Poisoned lock: skip the cache.
        cache.lock().ok()?.get(key).cloned()
    }

    fn store(&self, key: PromptKey, value: &str) {
        if let Some(cache) = &self.cache {
            if let Ok(mut cache) = cache.lock() {
                cache.put(key, value.to_string());
            }
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.cache
            .as_ref()
            .and_then(|c| c.lock().ok().map(|c| c.len()))
            .unwrap_or(0)
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for CachedGenerator<G> {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let key = prompt_key(prompt);

        if let Some(hit) = self.lookup(&key) {
            debug!("LLM cache hit");
            return Ok(hit);
        }

        let text = self.inner.generate(prompt).await?;
        self.store(key, &text);
        Ok(text)
    }
}

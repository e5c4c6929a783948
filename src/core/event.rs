//! Log event structure

use super::context::Context;
use super::log_level::LogLevel;
use super::value::Value;
use chrono::{DateTime, FixedOffset, Local};
use std::any::Any;
use std::sync::{Arc, Weak};

/// Source location of the logging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

/// One log occurrence, handed by the logger to a handler chain
///
/// `context` is shared between every event of the originating logger and is
/// never modified by formatters or handlers.
#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: DateTime<FixedOffset>,
    pub level: LogLevel,
    pub message: String,
    /// Alternating key/value entries bound to the originating logger
    pub context: Arc<[Value]>,
    /// Alternating key/value entries supplied at the call site
    pub pairs: Vec<Value>,
    pub call_site: Option<CallSite>,
    logger: Option<Weak<dyn Any + Send + Sync>>,
}

impl Event {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().fixed_offset(),
            level,
            message: message.into(),
            context: Arc::from(Vec::new()),
            pairs: Vec::new(),
            call_site: None,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_timestamp<Tz: chrono::TimeZone>(mut self, timestamp: DateTime<Tz>) -> Self {
        self.timestamp = timestamp.fixed_offset();
        self
    }

    /// Record the call site; a non-positive line means "unknown" and is ignored
    #[must_use]
    pub fn with_call_site(mut self, file: impl Into<String>, line: i64) -> Self {
        self.call_site = u32::try_from(line)
            .ok()
            .filter(|line| *line > 0)
            .map(|line| CallSite {
                file: file.into(),
                line,
            });
        self
    }

    /// Attach the logger's shared static context
    #[must_use]
    pub fn with_context(mut self, context: Arc<[Value]>) -> Self {
        self.context = context;
        self
    }

    /// Attach a `Context` map, flattening it into key/value entries
    #[must_use]
    pub fn with_context_map(self, context: &Context) -> Self {
        self.with_context(context.to_pairs())
    }

    #[must_use]
    pub fn with_pair(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.pairs.push(key.into());
        self.pairs.push(value.into());
        self
    }

    /// Append raw alternating key/value entries
    #[must_use]
    pub fn with_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.pairs.extend(pairs);
        self
    }

    /// Remember the originating logger without keeping it alive
    #[must_use]
    pub fn with_logger<L>(mut self, logger: &Arc<L>) -> Self
    where
        L: Any + Send + Sync,
    {
        let logger: Arc<dyn Any + Send + Sync> = logger.clone();
        self.logger = Some(Arc::downgrade(&logger));
        self
    }

    /// Look up the originating logger, if it is still alive and of type `L`
    pub fn logger<L>(&self) -> Option<Arc<L>>
    where
        L: Any + Send + Sync,
    {
        self.logger
            .as_ref()
            .and_then(Weak::upgrade)
            .and_then(|logger| logger.downcast::<L>().ok())
    }
}

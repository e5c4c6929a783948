//! Severity-to-decoration themes for terminal output

use super::log_level::LogLevel;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Text decoration applied to a level label
pub type Decorator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Maps each severity to the decoration of its label
///
/// Levels without an entry are rendered undecorated.
#[derive(Clone, Default)]
pub struct Theme {
    decorators: HashMap<LogLevel, Decorator>,
}

impl Theme {
    /// Theme that performs no decoration at all
    pub fn no_color() -> Self {
        Self::default()
    }

    /// Theme coloring each label with its level's terminal color
    #[cfg(feature = "console")]
    pub fn colored() -> Self {
        use colored::Colorize;

        LogLevel::ALL.iter().fold(Self::default(), |theme, level| {
            let color = level.color_code();
            theme.with_decorator(*level, move |text: &str| text.color(color).to_string())
        })
    }

    /// Pick the colored theme for interactive terminals, no color otherwise
    ///
    /// Interactivity is decided by the caller, typically once at startup.
    #[cfg_attr(not(feature = "console"), allow(unused_variables))]
    pub fn for_terminal(interactive: bool) -> Self {
        #[cfg(feature = "console")]
        if interactive {
            return Self::colored();
        }
        Self::no_color()
    }

    /// Override the decoration of one level
    #[must_use]
    pub fn with_decorator<F>(mut self, level: LogLevel, decorator: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.decorators.insert(level, Arc::new(decorator));
        self
    }

    /// Decorate `text` for `level`
    pub fn paint(&self, level: LogLevel, text: &str) -> String {
        match self.decorators.get(&level) {
            Some(decorate) => decorate(text),
            None => text.to_string(),
        }
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels: Vec<_> = self.decorators.keys().collect();
        levels.sort();
        f.debug_struct("Theme").field("decorated", &levels).finish()
    }
}

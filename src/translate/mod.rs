// Translation backends
//
// - Command: external tool invocation and the translate-shell argument layout
// - Trans: translate-shell implementation of `Translator`

pub mod command;
pub mod trans;

use async_trait::async_trait;

pub use command::*;
pub use trans::TransTranslator;

use crate::config::TranslatorConfig;
use crate::error::Result;
use crate::language::LanguagePair;

/// Translates one caption line at a time
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single line of caption text
    async fn translate_line(&self, text: &str, pair: &LanguagePair) -> Result<String>;
}

/// Factory for creating translator instances
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create the default translator (translate-shell)
    pub fn create_translator(config: TranslatorConfig) -> Box<dyn Translator> {
        Box::new(TransTranslator::new(config))
    }
}

use async_trait::async_trait;
use tracing::debug;

use super::Translator;
use super::command::TransCommandBuilder;
use crate::config::TranslatorConfig;
use crate::error::Result;
use crate::language::LanguagePair;

/// Translator backed by the translate-shell command line tool
pub struct TransTranslator {
    config: TranslatorConfig,
    command_builder: TransCommandBuilder,
}

impl TransTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        let command_builder =
            TransCommandBuilder::new(&config.binary_path, config.extra_args.clone());

        Self {
            config,
            command_builder,
        }
    }
}

#[async_trait]
impl Translator for TransTranslator {
    async fn translate_line(&self, text: &str, pair: &LanguagePair) -> Result<String> {
        let mut command = self.command_builder.translate(text, pair);
        if self.config.use_shell {
            command = command.into_shell();
        }

        let translation = command.execute().await?;
        debug!("{:?} -> {:?}", text, translation);
        Ok(translation)
    }
}

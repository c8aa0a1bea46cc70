use anyhow::Result;
use mcmigrate_core::{Config, SourceRewriter};
use mcmigrate_gradle::GroovyBuildRewriter;
use mcmigrate_properties::GradlePropertiesRewriter;

/// One rewriter per supported file shape, selected by the configured globs.
///
/// # Errors
/// Returns error if a configured pattern is invalid.
pub fn get_rewriters(config: &Config) -> Result<Vec<Box<dyn SourceRewriter>>> {
    Ok(vec![
        Box::new(GroovyBuildRewriter::new(&config.build_scripts)?),
        Box::new(GradlePropertiesRewriter::new(&config.properties)?),
    ])
}

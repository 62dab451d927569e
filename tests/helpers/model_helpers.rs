//! Shared models and assertions.

use classref::{LoadOptions, Model, load_str};
use once_cell::sync::Lazy;

use super::source_fixtures::{big_model_ast, big_model_source};

/// The n=100 big model, loaded once from text with default options.
pub static BIG_MODEL_100: Lazy<Model> = Lazy::new(|| {
    load_str(&big_model_source(100), &LoadOptions::default()).expect("big model loads")
});

/// Load the big model from its AST with the given options.
pub fn big_model(n: usize, options: &LoadOptions) -> Model {
    Model::from_ast(big_model_ast(n), options).expect("big model loads")
}

/// `Owner.attr` of every ref target, in declaration order.
pub fn targets(model: &Model) -> Vec<String> {
    model
        .classes()
        .flat_map(|class| class.refs())
        .map(|r| r.target().to_string())
        .collect()
}

/// Every matched path, rendered as `Owner.attr` lists, in declaration order.
pub fn matched_paths(model: &Model) -> Vec<Vec<String>> {
    model
        .classes()
        .flat_map(|class| class.refs())
        .map(|r| r.matched_path().map(|a| a.to_string()).collect())
        .collect()
}

/// Load text that must load, panicking with the error otherwise.
pub fn load_ok(text: &str) -> Model {
    match load_str(text, &LoadOptions::default()) {
        Ok(model) => model,
        Err(error) => panic!("failed to load:\n{text}\nerror: {error}"),
    }
}

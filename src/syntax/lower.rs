//! Lowering from the rowan CST to the data-only [`SourceModel`].

use smol_str::SmolStr;

use super::source::{AttributeDecl, ClassDecl, RefDecl, SourceModel};
use crate::parser::{AstNode, Parse, SourceFile, SyntaxError, parse};

/// Parse `text` and lower it in one step.
pub fn parse_source(text: &str) -> Result<SourceModel, Vec<SyntaxError>> {
    lower(&parse(text))
}

/// Lower a parse result into a [`SourceModel`].
///
/// A parse with errors is rejected as a whole: every syntax error is
/// returned and no partial model is produced.
pub fn lower(parse: &Parse) -> Result<SourceModel, Vec<SyntaxError>> {
    if !parse.ok() {
        return Err(parse.errors.clone());
    }
    let Some(file) = SourceFile::cast(parse.syntax()) else {
        return Ok(SourceModel::new());
    };

    let mut model = SourceModel::new();
    for class_def in file.classes() {
        let name = class_def.name();
        let mut class = ClassDecl::new(name_text(name.as_ref().and_then(|n| n.text())));
        class.range = name.map(|n| n.syntax().text_range());

        for attr_def in class_def.attributes() {
            let name = attr_def.name().and_then(|n| n.text());
            let type_name = attr_def.type_name().and_then(|n| n.text());
            let mut attr = AttributeDecl::new(name_text(name), name_text(type_name));
            attr.range = Some(attr_def.syntax().text_range());
            class.attributes.push(attr);
        }

        for ref_def in class_def.refs() {
            let Some(path) = ref_def.path() else {
                continue;
            };
            let mut decl = RefDecl::new(path.text());
            decl.range = Some(path.range());
            class.refs.push(decl);
        }

        model.push_class(class);
    }

    tracing::debug!(
        "[LOWER] {} classes, {} attributes, {} refs",
        model.classes.len(),
        model.attribute_count(),
        model.ref_count()
    );
    Ok(model)
}

fn name_text(text: Option<String>) -> SmolStr {
    text.map(SmolStr::from).unwrap_or_default()
}

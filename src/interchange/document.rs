//! Serde document shared by the JSON and YAML formats.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::InterchangeError;
use crate::hir::{Attribute, Class, LoadOptions, Model};
use crate::syntax::{AttributeDecl, ClassDecl, RefDecl, SourceModel};

/// A whole exported model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub classes: Vec<ClassDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: SmolStr,
    #[serde(default)]
    pub attrs: Vec<AttributeDoc>,
    #[serde(default)]
    pub refs: Vec<RefDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDoc {
    pub name: SmolStr,
    /// Pointer to the type class.
    #[serde(rename = "type")]
    pub ty: Pointer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefDoc {
    pub path: SmolStr,
    /// Pointer to the resolved target attribute.
    #[serde(rename = "ref")]
    pub target: Pointer,
}

/// A `{"$ref": "#/classes[i]/attrs[j]"}` link inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    #[serde(rename = "$ref")]
    pub target: String,
}

impl Pointer {
    pub fn to_class(class: Class<'_>) -> Self {
        Self {
            target: format!("#/classes[{}]", class.index()),
        }
    }

    pub fn to_attribute(attr: Attribute<'_>) -> Self {
        Self {
            target: format!("#/classes[{}]/attrs[{}]", attr.owner().index(), attr.index()),
        }
    }

    /// Split into the class index and, for attribute pointers, the
    /// attribute index.
    pub fn parse(&self) -> Result<(usize, Option<usize>), InterchangeError> {
        let invalid = || InterchangeError::invalid_pointer(format!("'{}'", self.target));

        let rest = self.target.strip_prefix("#/").ok_or_else(invalid)?;
        let (class, attr) = match rest.split_once('/') {
            Some((class, attr)) => (class, Some(attr)),
            None => (rest, None),
        };
        let class = indexed(class, "classes").ok_or_else(invalid)?;
        let attr = match attr {
            Some(attr) => Some(indexed(attr, "attrs").ok_or_else(invalid)?),
            None => None,
        };
        Ok((class, attr))
    }
}

/// Parse `name[index]`.
fn indexed(text: &str, name: &str) -> Option<usize> {
    text.strip_prefix(name)?
        .strip_prefix('[')?
        .strip_suffix(']')?
        .parse()
        .ok()
}

impl Document {
    pub fn from_model(model: &Model) -> Self {
        let classes = model
            .classes()
            .map(|class| ClassDoc {
                name: class.name().clone(),
                attrs: class
                    .attributes()
                    .map(|attr| AttributeDoc {
                        name: attr.name().clone(),
                        ty: Pointer::to_class(attr.ty()),
                    })
                    .collect(),
                refs: class
                    .refs()
                    .map(|r| RefDoc {
                        path: r.path().clone(),
                        target: Pointer::to_attribute(r.target()),
                    })
                    .collect(),
            })
            .collect();
        Self { classes }
    }

    /// Rebuild the AST. Attribute types come from their class pointers; ref
    /// pointers are checked for shape and bounds only. Use
    /// [`load`](Self::load) to also check them against resolution.
    pub fn into_source(self) -> Result<SourceModel, InterchangeError> {
        let names: Vec<SmolStr> = self.classes.iter().map(|c| c.name.clone()).collect();
        let attr_counts: Vec<usize> = self.classes.iter().map(|c| c.attrs.len()).collect();

        let mut source = SourceModel::new();
        for class in self.classes {
            let mut decl = ClassDecl::new(class.name);
            for attr in class.attrs {
                let (index, None) = attr.ty.parse()? else {
                    return Err(InterchangeError::invalid_pointer(format!(
                        "type of '{}.{}' must point at a class, got '{}'",
                        decl.name, attr.name, attr.ty.target
                    )));
                };
                let type_name = names.get(index).ok_or_else(|| {
                    InterchangeError::invalid_pointer(format!("class index {index} out of range"))
                })?;
                decl.attributes.push(AttributeDecl::new(attr.name, type_name.clone()));
            }
            for r in class.refs {
                let (class_index, Some(attr_index)) = r.target.parse()? else {
                    return Err(InterchangeError::invalid_pointer(format!(
                        "ref '{}' must point at an attribute, got '{}'",
                        r.path, r.target.target
                    )));
                };
                if attr_counts.get(class_index).is_none_or(|&count| attr_index >= count) {
                    return Err(InterchangeError::invalid_pointer(format!(
                        "'{}' out of range",
                        r.target.target
                    )));
                }
                decl.refs.push(RefDecl::new(r.path));
            }
            source.push_class(decl);
        }
        Ok(source)
    }

    /// Rebuild and resolve the model, then check that every ref pointer
    /// names the attribute its path resolves to.
    pub fn load(self, options: &LoadOptions) -> Result<Model, InterchangeError> {
        let expected: Vec<Pointer> = self
            .classes
            .iter()
            .flat_map(|c| c.refs.iter().map(|r| r.target.clone()))
            .collect();
        let model = Model::from_ast(self.into_source()?, options)?;

        let resolved = model.classes().flat_map(|class| class.refs());
        for (r, expected) in resolved.zip(&expected) {
            let actual = Pointer::to_attribute(r.target());
            if actual != *expected {
                return Err(InterchangeError::invalid_pointer(format!(
                    "ref '{}' of class '{}' points at '{}' but resolves to '{}'",
                    r.path(),
                    r.owner().name(),
                    expected.target,
                    actual.target
                )));
            }
        }
        tracing::debug!("[INTERCHANGE] checked {} ref pointers", expected.len());
        Ok(model)
    }
}

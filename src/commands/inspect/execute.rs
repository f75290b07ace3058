use std::error::Error;

use serde::Serialize;

use super::InspectCmd;
use crate::classify::is_structural_or_complex;
use crate::commands::{select_model, Execute};
use crate::config::load_schema_file;
use crate::schema::{PropertyTarget, SchemaModel, SchemaType, TypeKind};

/// A single property with its classification
#[derive(Debug, Clone, Serialize)]
pub struct PropertyReport {
    pub name: String,
    pub kind: String,
    pub target: String,
    pub nullable: bool,
    /// Whether "select all structural/complex fields" emits this property
    pub select_all: bool,
}

/// A single schema type
#[derive(Debug, Clone, Serialize)]
pub struct TypeReport {
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    pub declares_key: bool,
    pub properties: Vec<PropertyReport>,
}

/// Result of the inspect command
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    pub model: String,
    pub total_types: usize,
    pub types: Vec<TypeReport>,
}

fn kind_name(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Entity => "entity",
        TypeKind::Complex => "complex",
    }
}

fn target_display(model: &SchemaModel, target: &PropertyTarget) -> String {
    match target {
        PropertyTarget::Primitive(p) => p.name().to_string(),
        PropertyTarget::Named(id) => model.schema_type(*id).name.clone(),
        PropertyTarget::Collection(id) => format!("[{}]", model.schema_type(*id).name),
    }
}

fn type_report(model: &SchemaModel, ty: &SchemaType) -> TypeReport {
    let properties = ty
        .properties
        .iter()
        .map(|p| PropertyReport {
            name: p.name.clone(),
            kind: format!("{:?}", p.kind).to_lowercase(),
            target: target_display(model, &p.target),
            nullable: p.nullable,
            select_all: is_structural_or_complex(model, p),
        })
        .collect();

    TypeReport {
        name: ty.name.clone(),
        kind: kind_name(ty.kind).to_string(),
        base: ty.base.map(|id| model.schema_type(id).name.clone()),
        declares_key: ty.declares_key,
        properties,
    }
}

impl Execute for InspectCmd {
    type Output = InspectResult;

    fn execute(self) -> Result<Self::Output, Box<dyn Error>> {
        let registry = load_schema_file(&self.schema)?;
        let model = select_model(&registry, self.model.as_deref())?;

        let types: Vec<TypeReport> = model
            .types()
            .filter(|(_, ty)| {
                self.type_name
                    .as_deref()
                    .is_none_or(|wanted| ty.name == wanted)
            })
            .map(|(_, ty)| type_report(&model, ty))
            .collect();

        if types.is_empty() {
            if let Some(wanted) = &self.type_name {
                return Err(format!(
                    "Type '{}' not found in model '{}'",
                    wanted,
                    model.name()
                )
                .into());
            }
        }

        Ok(InspectResult {
            model: model.name().to_string(),
            total_types: types.len(),
            types,
        })
    }
}

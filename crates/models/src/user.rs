use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{self, require_text};
use crate::social_media;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SocialMedia,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::SocialMedia => Entity::has_many(social_media::Entity).into() }
    }
}

impl Related<social_media::Entity> for Entity {
    fn to() -> RelationDef { Relation::SocialMedia.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_first_name(v: &str) -> Result<(), errors::ModelError> { require_text("first name", v) }

pub fn validate_last_name(v: &str) -> Result<(), errors::ModelError> { require_text("last name", v) }

pub fn validate_phone(v: &str) -> Result<(), errors::ModelError> { require_text("phone", v) }

/// Structural email check: one `@`, a non-empty local part and a dotted domain
/// whose labels are non-empty. No whitespace anywhere.
pub fn validate_email(v: &str) -> Result<(), errors::ModelError> {
    require_text("email", v)?;
    let invalid = || errors::ModelError::Validation("email must have a valid format".into());
    if v.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = v.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-')) {
        return Err(invalid());
    }
    Ok(())
}

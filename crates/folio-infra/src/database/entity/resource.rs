//! Resource entity for SeaORM. Blogs and contacts share the `resources` table.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::Resource;
use folio_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Resource. Fails on an unknown `kind`.
impl TryFrom<Model> for Resource {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let kind = model
            .kind
            .parse()
            .map_err(|e: folio_core::domain::UnknownKind| RepoError::Query(e.to_string()))?;

        Ok(Self {
            id: model.id,
            kind,
            title: model.title,
            content: model.content,
            owner_id: model.owner_id,
            created_at: model.created_at.into(),
        })
    }
}

/// Conversion from Domain Resource to SeaORM ActiveModel.
impl From<Resource> for ActiveModel {
    fn from(resource: Resource) -> Self {
        Self {
            id: Set(resource.id),
            kind: Set(resource.kind.as_str().to_string()),
            title: Set(resource.title),
            content: Set(resource.content),
            owner_id: Set(resource.owner_id),
            created_at: Set(resource.created_at.into()),
        }
    }
}

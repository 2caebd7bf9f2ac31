use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub activity_summary_id: i32,
    pub now_application_id: i32,
    /// e.g. "exploration_access", "camp", "cut_lines_polarization_survey"
    pub activity_type_code: String,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::now_application::Entity",
        from = "Column::NowApplicationId",
        to = "super::now_application::Column::NowApplicationId"
    )]
    NowApplication,
}

impl Related<super::now_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NowApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Links a staging-area detail to a camp activity summary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_summary_staging_area_detail_xref")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub activity_summary_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub activity_detail_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activity_summary::Entity",
        from = "Column::ActivitySummaryId",
        to = "super::activity_summary::Column::ActivitySummaryId"
    )]
    ActivitySummary,
    #[sea_orm(
        belongs_to = "super::activity_detail::Entity",
        from = "Column::ActivityDetailId",
        to = "super::activity_detail::Column::ActivityDetailId"
    )]
    ActivityDetail,
}

impl Related<super::activity_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivitySummary.def()
    }
}

impl Related<super::activity_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

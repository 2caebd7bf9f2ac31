use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Measurement record for a Notice of Work activity. Every measurement is
/// optional and pairs with a unit_type code. The effective activity type is
/// not stored here: it is derived from whichever summary cross-reference
/// links the detail (see `storage::resolve_activity_type_code`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub activity_detail_id: i32,
    pub activity_type_description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub disturbed_area: Option<Decimal>,
    pub disturbed_area_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub timber_volume: Option<Decimal>,
    pub timber_volume_unit_type_code: Option<String>,
    pub number_of_sites: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub width: Option<Decimal>,
    pub width_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub length: Option<Decimal>,
    pub length_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub depth: Option<Decimal>,
    pub depth_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub height: Option<Decimal>,
    pub height_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub quantity: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub incline: Option<Decimal>,
    pub incline_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub cut_line_length: Option<Decimal>,
    pub cut_line_length_unit_type_code: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub water_quantity: Option<Decimal>,
    pub water_quantity_unit_type_code: Option<String>,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

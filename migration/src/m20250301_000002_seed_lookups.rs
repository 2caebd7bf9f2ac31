use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const STATUS_CODES: &[(&str, &str, i32)] = &[
    ("REC", "Received", 10),
    ("REF", "Referred", 20),
    ("PEV", "Pending Verification", 30),
    ("AIA", "Approved", 40),
    ("WDN", "Withdrawn", 50),
    ("REJ", "Rejected", 60),
];

const UNIT_TYPES: &[(&str, &str)] = &[
    ("HA", "Hectares"),
    ("DEG", "Degrees"),
    ("M", "Metres"),
    ("M3", "Cubic Metres"),
    ("MTN", "Tonnes"),
    ("MED", "Cubic Metres per Day"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(NowApplicationStatus::Table)
            .columns([
                NowApplicationStatus::NowApplicationStatusCode,
                NowApplicationStatus::Description,
                NowApplicationStatus::DisplayOrder,
            ])
            .to_owned();
        for (code, description, display_order) in STATUS_CODES {
            insert.values_panic([(*code).into(), (*description).into(), (*display_order).into()]);
        }
        manager.exec_stmt(insert).await?;

        let mut insert = Query::insert()
            .into_table(UnitType::Table)
            .columns([UnitType::UnitTypeCode, UnitType::Description])
            .to_owned();
        for (code, description) in UNIT_TYPES {
            insert.values_panic([(*code).into(), (*description).into()]);
        }
        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(UnitType::Table).to_owned())
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(NowApplicationStatus::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum NowApplicationStatus {
    Table,
    NowApplicationStatusCode,
    Description,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum UnitType {
    Table,
    UnitTypeCode,
    Description,
}

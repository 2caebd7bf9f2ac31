use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enable foreign keys for SQLite
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Sqlite {
            manager
                .get_connection()
                .execute_unprepared("PRAGMA foreign_keys = ON")
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Mine::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mine::MineGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_uniq(Mine::MineNo))
                    .col(string(Mine::MineName))
                    .col(big_integer(Mine::DeletedInd).default(0))
                    .col(string(Mine::CreateUser))
                    .col(big_integer(Mine::CreateTimestamp))
                    .col(string(Mine::UpdateUser))
                    .col(big_integer(Mine::UpdateTimestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Permit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Permit::PermitId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid_uniq(Permit::PermitGuid))
                    .col(uuid(Permit::MineGuid))
                    .col(string_null(Permit::PermitNo))
                    .col(string(Permit::PermitStatusCode))
                    .col(big_integer(Permit::DeletedInd).default(0))
                    .col(string(Permit::CreateUser))
                    .col(big_integer(Permit::CreateTimestamp))
                    .col(string(Permit::UpdateUser))
                    .col(big_integer(Permit::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permit_mine")
                            .from(Permit::Table, Permit::MineGuid)
                            .to(Mine::Table, Mine::MineGuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PermitAmendment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PermitAmendment::PermitAmendmentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid_uniq(PermitAmendment::PermitAmendmentGuid))
                    .col(integer(PermitAmendment::PermitId))
                    .col(string(PermitAmendment::PermitAmendmentStatusCode))
                    .col(date_null(PermitAmendment::IssueDate))
                    .col(date_null(PermitAmendment::AuthorizationEndDate))
                    .col(uuid_null(PermitAmendment::NowApplicationGuid))
                    .col(big_integer(PermitAmendment::DeletedInd).default(0))
                    .col(string(PermitAmendment::CreateUser))
                    .col(big_integer(PermitAmendment::CreateTimestamp))
                    .col(string(PermitAmendment::UpdateUser))
                    .col(big_integer(PermitAmendment::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_permit_amendment_permit")
                            .from(PermitAmendment::Table, PermitAmendment::PermitId)
                            .to(Permit::Table, Permit::PermitId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MineDocument::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MineDocument::MineDocumentGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(uuid(MineDocument::MineGuid))
                    .col(uuid(MineDocument::DocumentManagerGuid))
                    .col(string(MineDocument::DocumentName))
                    .col(big_integer(MineDocument::DeletedInd).default(0))
                    .col(string(MineDocument::CreateUser))
                    .col(big_integer(MineDocument::CreateTimestamp))
                    .col(string(MineDocument::UpdateUser))
                    .col(big_integer(MineDocument::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mine_document_mine")
                            .from(MineDocument::Table, MineDocument::MineGuid)
                            .to(Mine::Table, Mine::MineGuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NoticeOfDeparture::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NoticeOfDeparture::NodGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(uuid(NoticeOfDeparture::MineGuid))
                    .col(uuid(NoticeOfDeparture::PermitGuid))
                    .col(string_len(NoticeOfDeparture::NodTitle, 50))
                    .col(big_integer(NoticeOfDeparture::DeletedInd).default(0))
                    .col(string(NoticeOfDeparture::CreateUser))
                    .col(big_integer(NoticeOfDeparture::CreateTimestamp))
                    .col(string(NoticeOfDeparture::UpdateUser))
                    .col(big_integer(NoticeOfDeparture::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nod_mine")
                            .from(NoticeOfDeparture::Table, NoticeOfDeparture::MineGuid)
                            .to(Mine::Table, Mine::MineGuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nod_permit")
                            .from(NoticeOfDeparture::Table, NoticeOfDeparture::PermitGuid)
                            .to(Permit::Table, Permit::PermitGuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NodDocumentXref::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NodDocumentXref::NodXrefGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(uuid(NodDocumentXref::MineDocumentGuid))
                    .col(uuid(NodDocumentXref::NodGuid))
                    .col(string_len(NodDocumentXref::DocumentType, 16).default("checklist"))
                    .col(big_integer(NodDocumentXref::DeletedInd).default(0))
                    .col(string(NodDocumentXref::CreateUser))
                    .col(big_integer(NodDocumentXref::CreateTimestamp))
                    .col(string(NodDocumentXref::UpdateUser))
                    .col(big_integer(NodDocumentXref::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nod_document_xref_nod")
                            .from(NodDocumentXref::Table, NodDocumentXref::NodGuid)
                            .to(NoticeOfDeparture::Table, NoticeOfDeparture::NodGuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_nod_document_xref_mine_document")
                            .from(NodDocumentXref::Table, NodDocumentXref::MineDocumentGuid)
                            .to(MineDocument::Table, MineDocument::MineDocumentGuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NowApplicationStatus::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NowApplicationStatus::NowApplicationStatusCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(NowApplicationStatus::Description))
                    .col(integer(NowApplicationStatus::DisplayOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NowApplication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NowApplication::NowApplicationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(NowApplication::NowApplicationStatusCode))
                    .col(big_integer_null(NowApplication::StatusUpdatedDate))
                    .col(string(NowApplication::NoticeOfWorkTypeCode))
                    .col(string(NowApplication::CreateUser))
                    .col(big_integer(NowApplication::CreateTimestamp))
                    .col(string(NowApplication::UpdateUser))
                    .col(big_integer(NowApplication::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_now_application_status")
                            .from(NowApplication::Table, NowApplication::NowApplicationStatusCode)
                            .to(
                                NowApplicationStatus::Table,
                                NowApplicationStatus::NowApplicationStatusCode,
                            ),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NowApplicationIdentity::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NowApplicationIdentity::NowApplicationGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer_null(NowApplicationIdentity::NowApplicationId))
                    .col(uuid(NowApplicationIdentity::MineGuid))
                    .col(string(NowApplicationIdentity::CreateUser))
                    .col(big_integer(NowApplicationIdentity::CreateTimestamp))
                    .col(string(NowApplicationIdentity::UpdateUser))
                    .col(big_integer(NowApplicationIdentity::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_now_application_identity_mine")
                            .from(
                                NowApplicationIdentity::Table,
                                NowApplicationIdentity::MineGuid,
                            )
                            .to(Mine::Table, Mine::MineGuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_now_application_identity_application")
                            .from(
                                NowApplicationIdentity::Table,
                                NowApplicationIdentity::NowApplicationId,
                            )
                            .to(NowApplication::Table, NowApplication::NowApplicationId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NowPartyAppointment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NowPartyAppointment::NowPartyApptId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(integer(NowPartyAppointment::NowApplicationId))
                    .col(uuid(NowPartyAppointment::PartyGuid))
                    .col(string(NowPartyAppointment::MinePartyApptTypeCode))
                    .col(string(NowPartyAppointment::CreateUser))
                    .col(big_integer(NowPartyAppointment::CreateTimestamp))
                    .col(string(NowPartyAppointment::UpdateUser))
                    .col(big_integer(NowPartyAppointment::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_now_party_appointment_application")
                            .from(
                                NowPartyAppointment::Table,
                                NowPartyAppointment::NowApplicationId,
                            )
                            .to(NowApplication::Table, NowApplication::NowApplicationId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MinePartyAppt::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MinePartyAppt::MinePartyApptId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(uuid_uniq(MinePartyAppt::MinePartyApptGuid))
                    .col(uuid_null(MinePartyAppt::MineGuid))
                    .col(integer_null(MinePartyAppt::PermitId))
                    .col(uuid(MinePartyAppt::PartyGuid))
                    .col(string(MinePartyAppt::MinePartyApptTypeCode))
                    .col(date_null(MinePartyAppt::StartDate))
                    .col(date_null(MinePartyAppt::EndDate))
                    .col(string(MinePartyAppt::ProcessedBy))
                    .col(big_integer(MinePartyAppt::DeletedInd).default(0))
                    .col(string(MinePartyAppt::CreateUser))
                    .col(big_integer(MinePartyAppt::CreateTimestamp))
                    .col(string(MinePartyAppt::UpdateUser))
                    .col(big_integer(MinePartyAppt::UpdateTimestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UnitType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitType::UnitTypeCode)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(UnitType::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivitySummary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivitySummary::ActivitySummaryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(integer(ActivitySummary::NowApplicationId))
                    .col(string(ActivitySummary::ActivityTypeCode))
                    .col(string(ActivitySummary::CreateUser))
                    .col(big_integer(ActivitySummary::CreateTimestamp))
                    .col(string(ActivitySummary::UpdateUser))
                    .col(big_integer(ActivitySummary::UpdateTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_summary_application")
                            .from(ActivitySummary::Table, ActivitySummary::NowApplicationId)
                            .to(NowApplication::Table, NowApplication::NowApplicationId),
                    )
                    .to_owned(),
            )
            .await?;

        let mut activity_detail = Table::create();
        activity_detail
                    .table(ActivityDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityDetail::ActivityDetailId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(ActivityDetail::ActivityTypeDescription))
                    .col(decimal_len_null(ActivityDetail::DisturbedArea, 14, 2))
                    .col(string_null(ActivityDetail::DisturbedAreaUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::TimberVolume, 14, 2))
                    .col(string_null(ActivityDetail::TimberVolumeUnitTypeCode))
                    .col(integer_null(ActivityDetail::NumberOfSites))
                    .col(decimal_len_null(ActivityDetail::Width, 14, 2))
                    .col(string_null(ActivityDetail::WidthUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::Length, 14, 2))
                    .col(string_null(ActivityDetail::LengthUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::Depth, 14, 2))
                    .col(string_null(ActivityDetail::DepthUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::Height, 14, 2))
                    .col(string_null(ActivityDetail::HeightUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::Quantity, 14, 2))
                    .col(decimal_len_null(ActivityDetail::Incline, 14, 2))
                    .col(string_null(ActivityDetail::InclineUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::CutLineLength, 14, 2))
                    .col(string_null(ActivityDetail::CutLineLengthUnitTypeCode))
                    .col(decimal_len_null(ActivityDetail::WaterQuantity, 14, 2))
                    .col(string_null(ActivityDetail::WaterQuantityUnitTypeCode))
                    .col(string(ActivityDetail::CreateUser))
                    .col(big_integer(ActivityDetail::CreateTimestamp))
                    .col(string(ActivityDetail::UpdateUser))
                    .col(big_integer(ActivityDetail::UpdateTimestamp));
        // SQLite only accepts foreign keys inline with CREATE TABLE
        for (name, column) in [
            ("fk_activity_detail_disturbed_area_unit", ActivityDetail::DisturbedAreaUnitTypeCode),
            ("fk_activity_detail_timber_volume_unit", ActivityDetail::TimberVolumeUnitTypeCode),
            ("fk_activity_detail_width_unit", ActivityDetail::WidthUnitTypeCode),
            ("fk_activity_detail_length_unit", ActivityDetail::LengthUnitTypeCode),
            ("fk_activity_detail_depth_unit", ActivityDetail::DepthUnitTypeCode),
            ("fk_activity_detail_height_unit", ActivityDetail::HeightUnitTypeCode),
            ("fk_activity_detail_incline_unit", ActivityDetail::InclineUnitTypeCode),
            ("fk_activity_detail_cut_line_length_unit", ActivityDetail::CutLineLengthUnitTypeCode),
            ("fk_activity_detail_water_quantity_unit", ActivityDetail::WaterQuantityUnitTypeCode),
        ] {
            activity_detail.foreign_key(
                ForeignKey::create()
                    .name(name)
                    .from(ActivityDetail::Table, column)
                    .to(UnitType::Table, UnitType::UnitTypeCode),
            );
        }
        manager.create_table(activity_detail).await?;

        for (table, fk_summary, fk_detail) in [
            (
                XrefTable::Plain,
                "fk_activity_summary_detail_xref_summary",
                "fk_activity_summary_detail_xref_detail",
            ),
            (
                XrefTable::StagingArea,
                "fk_activity_summary_staging_area_detail_xref_summary",
                "fk_activity_summary_staging_area_detail_xref_detail",
            ),
            (
                XrefTable::Building,
                "fk_activity_summary_building_detail_xref_summary",
                "fk_activity_summary_building_detail_xref_detail",
            ),
        ] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(integer(Xref::ActivitySummaryId))
                        .col(integer(Xref::ActivityDetailId))
                        .primary_key(
                            Index::create()
                                .col(Xref::ActivitySummaryId)
                                .col(Xref::ActivityDetailId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(fk_summary)
                                .from(table, Xref::ActivitySummaryId)
                                .to(ActivitySummary::Table, ActivitySummary::ActivitySummaryId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(fk_detail)
                                .from(table, Xref::ActivityDetailId)
                                .to(ActivityDetail::Table, ActivityDetail::ActivityDetailId),
                        )
                        .to_owned(),
                )
                .await?;
        }

        // Document manager tables
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Document::DocumentGuid)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(Document::FullStoragePath))
                    .col(string(Document::FileDisplayName))
                    .col(big_integer(Document::UploadDate))
                    .col(string(Document::CreateUser))
                    .col(big_integer(Document::CreateTimestamp))
                    .col(string(Document::UpdateUser))
                    .col(big_integer(Document::UpdateTimestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ImportNowSubmissionDocument::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImportNowSubmissionDocument::ImportNowSubmissionDocumentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(ImportNowSubmissionDocument::SubmissionDocumentUrl))
                    .col(uuid_null(ImportNowSubmissionDocument::DocumentGuid))
                    .col(string_null(ImportNowSubmissionDocument::Error))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_import_now_submission_document_document")
                            .from(
                                ImportNowSubmissionDocument::Table,
                                ImportNowSubmissionDocument::DocumentGuid,
                            )
                            .to(Document::Table, Document::DocumentGuid),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Tables::ImportNowSubmissionDocument,
            Tables::Document,
            Tables::ActivitySummaryBuildingDetailXref,
            Tables::ActivitySummaryStagingAreaDetailXref,
            Tables::ActivitySummaryDetailXref,
            Tables::ActivityDetail,
            Tables::ActivitySummary,
            Tables::UnitType,
            Tables::MinePartyAppt,
            Tables::NowPartyAppointment,
            Tables::NowApplicationIdentity,
            Tables::NowApplication,
            Tables::NowApplicationStatus,
            Tables::NodDocumentXref,
            Tables::NoticeOfDeparture,
            Tables::MineDocument,
            Tables::PermitAmendment,
            Tables::Permit,
            Tables::Mine,
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tables {
    Mine,
    Permit,
    PermitAmendment,
    MineDocument,
    NoticeOfDeparture,
    NodDocumentXref,
    NowApplicationStatus,
    NowApplication,
    NowApplicationIdentity,
    NowPartyAppointment,
    MinePartyAppt,
    UnitType,
    ActivitySummary,
    ActivityDetail,
    ActivitySummaryDetailXref,
    ActivitySummaryStagingAreaDetailXref,
    ActivitySummaryBuildingDetailXref,
    Document,
    ImportNowSubmissionDocument,
}

#[derive(DeriveIden)]
enum Mine {
    Table,
    MineGuid,
    MineNo,
    MineName,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum Permit {
    Table,
    PermitId,
    PermitGuid,
    MineGuid,
    PermitNo,
    PermitStatusCode,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum PermitAmendment {
    Table,
    PermitAmendmentId,
    PermitAmendmentGuid,
    PermitId,
    PermitAmendmentStatusCode,
    IssueDate,
    AuthorizationEndDate,
    NowApplicationGuid,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum MineDocument {
    Table,
    MineDocumentGuid,
    MineGuid,
    DocumentManagerGuid,
    DocumentName,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum NoticeOfDeparture {
    Table,
    NodGuid,
    MineGuid,
    PermitGuid,
    NodTitle,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum NodDocumentXref {
    Table,
    NodXrefGuid,
    MineDocumentGuid,
    NodGuid,
    DocumentType,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum NowApplicationStatus {
    Table,
    NowApplicationStatusCode,
    Description,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum NowApplication {
    Table,
    NowApplicationId,
    NowApplicationStatusCode,
    StatusUpdatedDate,
    NoticeOfWorkTypeCode,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum NowApplicationIdentity {
    Table,
    NowApplicationGuid,
    NowApplicationId,
    MineGuid,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum NowPartyAppointment {
    Table,
    NowPartyApptId,
    NowApplicationId,
    PartyGuid,
    MinePartyApptTypeCode,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum MinePartyAppt {
    Table,
    MinePartyApptId,
    MinePartyApptGuid,
    MineGuid,
    PermitId,
    PartyGuid,
    MinePartyApptTypeCode,
    StartDate,
    EndDate,
    ProcessedBy,
    DeletedInd,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum UnitType {
    Table,
    UnitTypeCode,
    Description,
}

#[derive(DeriveIden)]
enum ActivitySummary {
    Table,
    ActivitySummaryId,
    NowApplicationId,
    ActivityTypeCode,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum ActivityDetail {
    Table,
    ActivityDetailId,
    ActivityTypeDescription,
    DisturbedArea,
    DisturbedAreaUnitTypeCode,
    TimberVolume,
    TimberVolumeUnitTypeCode,
    NumberOfSites,
    Width,
    WidthUnitTypeCode,
    Length,
    LengthUnitTypeCode,
    Depth,
    DepthUnitTypeCode,
    Height,
    HeightUnitTypeCode,
    Quantity,
    Incline,
    InclineUnitTypeCode,
    CutLineLength,
    CutLineLengthUnitTypeCode,
    WaterQuantity,
    WaterQuantityUnitTypeCode,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden, Clone, Copy)]
enum XrefTable {
    #[sea_orm(iden = "activity_summary_detail_xref")]
    Plain,
    #[sea_orm(iden = "activity_summary_staging_area_detail_xref")]
    StagingArea,
    #[sea_orm(iden = "activity_summary_building_detail_xref")]
    Building,
}

#[derive(DeriveIden)]
enum Xref {
    ActivitySummaryId,
    ActivityDetailId,
}

#[derive(DeriveIden)]
enum Document {
    Table,
    DocumentGuid,
    FullStoragePath,
    FileDisplayName,
    UploadDate,
    CreateUser,
    CreateTimestamp,
    UpdateUser,
    UpdateTimestamp,
}

#[derive(DeriveIden)]
enum ImportNowSubmissionDocument {
    Table,
    ImportNowSubmissionDocumentId,
    SubmissionDocumentUrl,
    DocumentGuid,
    Error,
}

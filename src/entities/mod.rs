pub mod activity_detail;
pub mod activity_summary;
pub mod activity_summary_building_detail_xref;
pub mod activity_summary_detail_xref;
pub mod activity_summary_staging_area_detail_xref;
pub mod document;
pub mod import_now_submission_document;
pub mod mine;
pub mod mine_document;
pub mod mine_party_appt;
pub mod nod_document_xref;
pub mod notice_of_departure;
pub mod now_application;
pub mod now_application_identity;
pub mod now_application_status;
pub mod now_party_appointment;
pub mod permit;
pub mod permit_amendment;
pub mod unit_type;

pub use activity_detail::Entity as ActivityDetail;
pub use activity_summary::Entity as ActivitySummary;
pub use activity_summary_building_detail_xref::Entity as ActivitySummaryBuildingDetailXref;
pub use activity_summary_detail_xref::Entity as ActivitySummaryDetailXref;
pub use activity_summary_staging_area_detail_xref::Entity as ActivitySummaryStagingAreaDetailXref;
pub use document::Entity as Document;
pub use import_now_submission_document::Entity as ImportNowSubmissionDocument;
pub use mine::Entity as Mine;
pub use mine_document::Entity as MineDocument;
pub use mine_party_appt::Entity as MinePartyAppt;
pub use nod_document_xref::Entity as NodDocumentXref;
pub use notice_of_departure::Entity as NoticeOfDeparture;
pub use now_application::Entity as NowApplication;
pub use now_application_identity::Entity as NowApplicationIdentity;
pub use now_application_status::Entity as NowApplicationStatus;
pub use now_party_appointment::Entity as NowPartyAppointment;
pub use permit::Entity as Permit;
pub use permit_amendment::Entity as PermitAmendment;
pub use unit_type::Entity as UnitType;

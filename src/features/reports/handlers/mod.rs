pub mod report_handler;

pub use report_handler::{
    create_report, delete_report, list_reports, update_report_status, ReportState,
};

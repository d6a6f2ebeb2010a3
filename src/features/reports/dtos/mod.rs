mod report_dto;

pub use report_dto::{
    CreateReportDto, CreatedReportDto, ListReportsQuery, LocationDto, ReportResponseDto,
    UpdateStatusDto,
};

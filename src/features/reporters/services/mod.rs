mod reporter_service;

pub use reporter_service::ReporterService;

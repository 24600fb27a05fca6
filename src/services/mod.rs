pub mod analysis_service;
pub mod report_service;

pub use analysis_service::AnalysisService;
pub use report_service::{Dashboard, ReportService};

mod report_generator;

pub use report_generator::ReportGenerator;

mod report_assembler;

pub use report_assembler::{ReportAssembler, ReportLayout};

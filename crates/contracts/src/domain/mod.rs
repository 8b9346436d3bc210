pub mod a001_project;
pub mod a002_investigation;
pub mod a003_work_order;

//! GUI module - sequential figure viewer

mod app;

pub use app::ReportViewer;

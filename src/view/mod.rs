pub mod dashboard_view;

pub use dashboard_view::{
    render_dashboard_text, ConsoleDashboardView, DashboardView, DashboardViewModel,
};

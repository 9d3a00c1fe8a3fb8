mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod profile;
pub use profile::{ProfileTab, ProfileView};

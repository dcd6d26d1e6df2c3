mod modal_overlay;
pub use modal_overlay::{Dialog, ModalOverlay};

mod widgets;
pub use widgets::{LoadError, Loading, RoleBadge, StatCard, StatusBadge};

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::DashboardView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod manager_dashboard;
pub use manager_dashboard::ManagerDashboard;

mod developer_dashboard;
pub use developer_dashboard::DeveloperDashboard;

mod users;
pub use users::UsersView;

mod projects;
pub use projects::ProjectsView;

mod tasks;
pub use tasks::TasksView;

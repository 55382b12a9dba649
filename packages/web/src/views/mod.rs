mod shell;
pub use shell::{AdminShell, GuestShell, MemberShell};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod history;
pub use history::History;

mod users;
pub use users::Users;

mod database;
pub use database::Database;

mod not_found;
pub use not_found::NotFound;

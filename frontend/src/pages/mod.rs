pub mod attendance;
pub mod dashboard;
pub mod home;
pub mod leave;
pub mod login;

pub use attendance::{AttendanceHistoryPage, CheckInPage, CheckOutPage};
pub use dashboard::{ApproveLeavePage, CreateEmployeePage};
pub use home::HomePage;
pub use leave::{LeaveHistoryPage, LeaveRequestPage};
pub use login::LoginPage;

mod approve_leave;
mod create_employee;

pub use approve_leave::ApproveLeavePage;
pub use create_employee::CreateEmployeePage;

pub mod child_record_form;
pub mod employee_details_form;
pub mod spouse_form;

pub use child_record_form::ChildRecordForm;
pub use employee_details_form::EmployeeDetailsForm;
pub use spouse_form::SpouseForm;

pub mod children_section;
pub mod employee_form;
pub mod form_field;
pub mod forms;

pub use employee_form::{EmployeeForm, EmployeeFormProps};

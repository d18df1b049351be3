use shared::{EmployeeDetails, EmployeeField, FieldKey, FormConfig, MaritalStatus, RequiredFieldsReport};
use yew::prelude::*;

use crate::components::form_field::{border_style, SelectField, TextField};

const MARITAL_STATUSES: [&str; 4] = ["Single", "Married", "Divorced", "Widowed"];

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailsFormProps {
    pub employee: EmployeeDetails,
    pub marital_status: MaritalStatus,
    pub report: Option<RequiredFieldsReport>,
    pub config: FormConfig,

    pub on_employee_change: Callback<(EmployeeField, String)>,
    pub on_marital_status_change: Callback<String>,
}

fn label(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::EmployeeId => "Employee ID",
        EmployeeField::FullName => "Full Name",
        EmployeeField::Email => "Email",
        EmployeeField::Phone => "Phone Number",
        EmployeeField::DateOfBirth => "Date of Birth",
    }
}

fn input_type(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::Email => "email",
        EmployeeField::Phone => "tel",
        EmployeeField::DateOfBirth => "date",
        _ => "text",
    }
}

#[function_component(EmployeeDetailsForm)]
pub fn employee_details_form(props: &EmployeeDetailsFormProps) -> Html {
    html! {
        <section class="form-section employee-section">
            <h3>{"Employee Details"}</h3>
            <div class="form-row">
                {for EmployeeField::ALL.iter().map(|&field| {
                    let on_change = props.on_employee_change.reform(move |value: String| (field, value));
                    html! {
                        <TextField
                            id={field.input_name()}
                            name={field.input_name()}
                            label={label(field)}
                            value={props.employee.value(field).to_string()}
                            input_type={input_type(field)}
                            required=true
                            style={border_style(&props.report, &props.config, &FieldKey::Employee(field))}
                            {on_change}
                        />
                    }
                })}
            </div>

            <div class="form-row">
                <SelectField
                    id="marital_status"
                    name="marital_status"
                    label="Marital Status"
                    value={props.marital_status.as_select_value().to_string()}
                    placeholder="Select Marital Status"
                    options={MARITAL_STATUSES
                        .iter()
                        .map(|s| (s.to_string(), s.to_string()))
                        .collect::<Vec<_>>()}
                    required=true
                    style={border_style(&props.report, &props.config, &FieldKey::MaritalStatus)}
                    on_change={props.on_marital_status_change.clone()}
                />
            </div>
        </section>
    }
}

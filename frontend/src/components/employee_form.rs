use shared::FormConfig;
use yew::prelude::*;

use crate::components::children_section::ChildrenSection;
use crate::components::forms::{EmployeeDetailsForm, SpouseForm};
use crate::hooks::use_family_form::{use_family_form, UseFamilyFormResult};

#[derive(Properties, PartialEq, Clone)]
pub struct EmployeeFormProps {
    pub config: FormConfig,
    /// Where the browser posts the form; the current URL when `None`
    #[prop_or_default]
    pub action: Option<String>,
}

/// The whole employee form. Validation runs on submit; a valid form is
/// posted by the browser as usual.
#[function_component(EmployeeForm)]
pub fn employee_form(props: &EmployeeFormProps) -> Html {
    let UseFamilyFormResult { state, actions } = use_family_form(props.config.clone());
    let visibility = state.form.visibility();

    html! {
        <form
            id="employeeForm"
            class="employee-form"
            method="post"
            action={props.action.clone()}
            novalidate={true}
            onsubmit={actions.submit.clone()}
        >
            <EmployeeDetailsForm
                employee={state.form.employee.clone()}
                marital_status={state.form.marital_status.clone()}
                report={state.report.clone()}
                config={state.config.clone()}
                on_employee_change={actions.set_employee_field.clone()}
                on_marital_status_change={actions.set_marital_status.clone()}
            />

            <SpouseForm
                spouse={state.form.spouse.clone()}
                visible={visibility.spouse_visible}
                report={state.report.clone()}
                config={state.config.clone()}
                on_change={actions.set_spouse_field.clone()}
            />

            <ChildrenSection
                children={state.form.children.clone()}
                visible={visibility.children_visible}
                report={state.report.clone()}
                config={state.config.clone()}
                on_add={actions.add_child.clone()}
                on_remove={actions.remove_child.clone()}
                on_change={actions.set_child_field.clone()}
            />

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">{"Submit Details"}</button>
            </div>
        </form>
    }
}

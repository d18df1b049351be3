use std::rc::Rc;

use shared::{
    ChildField, ChildRecordId, EmployeeField, FamilyForm, FormConfig, MaritalStatus,
    RequiredFieldsReport, SpouseField,
};
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::notices::{show_notice, Notice};

const COMPONENT: &str = "family-form";

/// Everything the employee form needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyFormState {
    pub form: FamilyForm,
    pub config: FormConfig,
    /// Result of the last submit attempt; drives field border colors
    pub report: Option<RequiredFieldsReport>,
}

impl FamilyFormState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FamilyForm::new(&config),
            config,
            report: None,
        }
    }
}

pub enum FamilyFormAction {
    SetEmployeeField(EmployeeField, String),
    SetMaritalStatus(String),
    SetSpouseField(SpouseField, String),
    AddChild,
    RemoveChild(ChildRecordId),
    SetChildField(ChildRecordId, ChildField, String),
    SetReport(RequiredFieldsReport),
}

impl Reducible for FamilyFormState {
    type Action = FamilyFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            FamilyFormAction::SetEmployeeField(field, value) => {
                next.form.employee.set_value(field, &value);
            }
            FamilyFormAction::SetMaritalStatus(value) => {
                let visibility = next
                    .form
                    .set_marital_status(MaritalStatus::from_select_value(&value));
                Logger::debug_with_component(
                    COMPONENT,
                    &format!(
                        "Marital status {:?}: spouse {}, children {}",
                        value,
                        visibility.spouse_display(),
                        visibility.children_display()
                    ),
                );
            }
            FamilyFormAction::SetSpouseField(field, value) => {
                next.form.spouse.set_value(field, &value);
            }
            FamilyFormAction::AddChild => match next.form.add_child() {
                Ok(id) => Logger::debug_with_component(
                    COMPONENT,
                    &format!("Added child record {} ({} total)", id, next.form.children.len()),
                ),
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("Add rejected: {}", e));
                    return self;
                }
            },
            FamilyFormAction::RemoveChild(id) => match next.form.remove_child(id) {
                Ok(_) => Logger::debug_with_component(
                    COMPONENT,
                    &format!("Removed child record {} ({} left)", id, next.form.children.len()),
                ),
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("Remove rejected: {}", e));
                    return self;
                }
            },
            FamilyFormAction::SetChildField(id, field, value) => {
                if let Err(e) = next.form.children.update(id, field, &value) {
                    Logger::warn_with_component(COMPONENT, &format!("Update rejected: {}", e));
                    return self;
                }
            }
            FamilyFormAction::SetReport(report) => {
                next.report = Some(report);
            }
        }

        Rc::new(next)
    }
}

pub struct UseFamilyFormResult {
    pub state: UseReducerHandle<FamilyFormState>,
    pub actions: UseFamilyFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFamilyFormActions {
    pub set_employee_field: Callback<(EmployeeField, String)>,
    pub set_marital_status: Callback<String>,
    pub set_spouse_field: Callback<(SpouseField, String)>,
    pub add_child: Callback<()>,
    pub remove_child: Callback<ChildRecordId>,
    pub set_child_field: Callback<(ChildRecordId, ChildField, String)>,
    pub submit: Callback<SubmitEvent>,
}

/// Owns the form state. All changes go through one reducer so handlers see
/// the latest state in event order.
#[hook]
pub fn use_family_form(config: FormConfig) -> UseFamilyFormResult {
    let state = use_reducer(|| FamilyFormState::new(config));

    let set_employee_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (EmployeeField, String)| {
            state.dispatch(FamilyFormAction::SetEmployeeField(field, value));
        })
    };

    let set_marital_status = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(FamilyFormAction::SetMaritalStatus(value));
        })
    };

    let set_spouse_field = {
        let state = state.clone();
        Callback::from(move |(field, value): (SpouseField, String)| {
            state.dispatch(FamilyFormAction::SetSpouseField(field, value));
        })
    };

    let add_child = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let children = &state.form.children;
            if children.is_full() {
                show_notice(&Notice::CapacityReached {
                    capacity: children.capacity(),
                });
                return;
            }
            state.dispatch(FamilyFormAction::AddChild);
        })
    };

    let remove_child = {
        let state = state.clone();
        Callback::from(move |id: ChildRecordId| {
            state.dispatch(FamilyFormAction::RemoveChild(id));
        })
    };

    let set_child_field = {
        let state = state.clone();
        Callback::from(move |(id, field, value): (ChildRecordId, ChildField, String)| {
            state.dispatch(FamilyFormAction::SetChildField(id, field, value));
        })
    };

    let submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            let report = state.form.validate();
            let is_valid = report.is_valid();
            if !is_valid {
                e.prevent_default();
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Submit cancelled, {} empty field(s)", report.invalid_fields().len()),
                );
            } else {
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Submitting form with {} child record(s)", state.form.children.len()),
                );
            }
            state.dispatch(FamilyFormAction::SetReport(report));
            if !is_valid {
                show_notice(&Notice::MissingRequiredFields);
            }
        })
    };

    let actions = UseFamilyFormActions {
        set_employee_field,
        set_marital_status,
        set_spouse_field,
        add_child,
        remove_child,
        set_child_field,
        submit,
    };

    UseFamilyFormResult { state, actions }
}

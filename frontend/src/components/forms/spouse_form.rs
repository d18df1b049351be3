use shared::{FieldKey, FormConfig, RequiredFieldsReport, SpouseDetails, SpouseField};
use yew::prelude::*;

use crate::components::form_field::{border_style, gender_options, SelectField, TextField};
use crate::services::date_utils::age_hint_for;

#[derive(Properties, PartialEq)]
pub struct SpouseFormProps {
    pub spouse: SpouseDetails,
    pub visible: bool,
    pub report: Option<RequiredFieldsReport>,
    pub config: FormConfig,
    pub on_change: Callback<(SpouseField, String)>,
}

#[function_component(SpouseForm)]
pub fn spouse_form(props: &SpouseFormProps) -> Html {
    let field_change = |field: SpouseField| props.on_change.reform(move |value: String| (field, value));
    let style = |field: SpouseField| border_style(&props.report, &props.config, &FieldKey::Spouse(field));
    let required = |field: SpouseField| props.visible && SpouseField::REQUIRED.contains(&field);
    let display = if props.visible { "block" } else { "none" };

    html! {
        <section id="spouseSection" class="form-section" style={format!("display: {}", display)}>
            <h3>{"Spouse Details"}</h3>
            <div class="form-row">
                <TextField
                    id="spouse_name"
                    name={SpouseField::FullName.input_name()}
                    label="Full Name"
                    value={props.spouse.full_name.clone()}
                    required={required(SpouseField::FullName)}
                    style={style(SpouseField::FullName)}
                    on_change={field_change(SpouseField::FullName)}
                />
                <SelectField
                    id="spouse_gender"
                    name={SpouseField::Gender.input_name()}
                    label="Gender"
                    value={props.spouse.value(SpouseField::Gender).to_string()}
                    placeholder="Select Gender"
                    options={gender_options()}
                    required={required(SpouseField::Gender)}
                    style={style(SpouseField::Gender)}
                    on_change={field_change(SpouseField::Gender)}
                />
            </div>
            <div class="form-row">
                <TextField
                    id="spouse_dob"
                    name={SpouseField::DateOfBirth.input_name()}
                    label="Date of Birth"
                    input_type="date"
                    value={props.spouse.date_of_birth.clone()}
                    required={required(SpouseField::DateOfBirth)}
                    style={style(SpouseField::DateOfBirth)}
                    hint={age_hint_for(&props.spouse.date_of_birth)}
                    on_change={field_change(SpouseField::DateOfBirth)}
                />
                <TextField
                    id="spouse_phone"
                    name={SpouseField::PhoneNumber.input_name()}
                    label="Phone Number"
                    input_type="tel"
                    value={props.spouse.phone_number.clone()}
                    on_change={field_change(SpouseField::PhoneNumber)}
                />
            </div>
        </section>
    }
}

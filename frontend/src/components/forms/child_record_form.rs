use shared::{ChildField, ChildRecord, ChildRecordId, ChildRecordList, FieldKey, FormConfig, RequiredFieldsReport};
use web_sys::Element;
use yew::prelude::*;

use crate::components::form_field::{border_style, gender_options, SelectField, TextField};
use crate::services::date_utils::age_hint_for;
use crate::services::dom::scroll_into_view_centered;

#[derive(Properties, PartialEq)]
pub struct ChildRecordFormProps {
    pub record: ChildRecord,
    /// 1-based position in the list
    pub display_index: usize,
    pub report: Option<RequiredFieldsReport>,
    pub config: FormConfig,

    pub on_change: Callback<(ChildRecordId, ChildField, String)>,
    pub on_remove: Callback<ChildRecordId>,
}

/// Sub-form for one child. Mounting means the record was just added, so the
/// card scrolls itself into view.
#[function_component(ChildRecordForm)]
pub fn child_record_form(props: &ChildRecordFormProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with((), move |_| {
            if let Some(element) = node.cast::<Element>() {
                scroll_into_view_centered(&element);
            }
            || ()
        });
    }

    let id = props.record.id;
    let index = props.display_index;
    let field_change = |field: ChildField| props.on_change.reform(move |value: String| (id, field, value));
    let style = |field: ChildField| border_style(&props.report, &props.config, &FieldKey::Child { id, field });

    let on_remove = {
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id))
    };

    html! {
        <div class="family-member" ref={node} data-record-id={id.to_string()}>
            <div class="family-member-header">
                <h4 class="family-member-title">{ChildRecordList::title_for(index)}</h4>
                <button type="button" class="remove-family-member" onclick={on_remove}>
                    {"Remove"}
                </button>
            </div>

            <div class="form-row">
                <TextField
                    id={ChildField::FullName.dom_id(index)}
                    name={ChildField::FullName.input_name()}
                    label="Full Name"
                    value={props.record.full_name.clone()}
                    required=true
                    style={style(ChildField::FullName)}
                    on_change={field_change(ChildField::FullName)}
                />
                <SelectField
                    id={ChildField::Gender.dom_id(index)}
                    name={ChildField::Gender.input_name()}
                    label="Gender"
                    value={props.record.value(ChildField::Gender).to_string()}
                    placeholder="Select Gender"
                    options={gender_options()}
                    required=true
                    style={style(ChildField::Gender)}
                    on_change={field_change(ChildField::Gender)}
                />
            </div>

            <div class="form-row">
                <TextField
                    id={ChildField::DateOfBirth.dom_id(index)}
                    name={ChildField::DateOfBirth.input_name()}
                    label="Date of Birth"
                    input_type="date"
                    value={props.record.date_of_birth.clone()}
                    required=true
                    style={style(ChildField::DateOfBirth)}
                    hint={age_hint_for(&props.record.date_of_birth)}
                    on_change={field_change(ChildField::DateOfBirth)}
                />
                <TextField
                    id={ChildField::PhoneNumber.dom_id(index)}
                    name={ChildField::PhoneNumber.input_name()}
                    label="Phone Number"
                    input_type="tel"
                    value={props.record.phone_number.clone()}
                    on_change={field_change(ChildField::PhoneNumber)}
                />
            </div>
        </div>
    }
}

use shared::{ChildField, ChildRecordId, ChildRecordList, FormConfig, RequiredFieldsReport};
use yew::prelude::*;

use crate::components::forms::ChildRecordForm;

#[derive(Properties, PartialEq)]
pub struct ChildrenSectionProps {
    pub children: ChildRecordList,
    pub visible: bool,
    pub report: Option<RequiredFieldsReport>,
    pub config: FormConfig,

    pub on_add: Callback<()>,
    pub on_remove: Callback<ChildRecordId>,
    pub on_change: Callback<(ChildRecordId, ChildField, String)>,
}

#[function_component(ChildrenSection)]
pub fn children_section(props: &ChildrenSectionProps) -> Html {
    let on_add = props.on_add.reform(|_: MouseEvent| ());
    let display = if props.visible { "block" } else { "none" };

    html! {
        <section id="childrenSection" class="form-section" style={format!("display: {}", display)}>
            <h3>{"Children"}</h3>
            <input type="hidden" name="total_children" value={props.children.len().to_string()} />

            <div id="familyMembersContainer">
                {for props.children.iter_numbered().map(|(display_index, record)| html! {
                    <ChildRecordForm
                        key={record.id.to_string()}
                        record={record.clone()}
                        {display_index}
                        report={props.report.clone()}
                        config={props.config.clone()}
                        on_change={props.on_change.clone()}
                        on_remove={props.on_remove.clone()}
                    />
                })}
            </div>

            <button type="button" id="addFamilyMember" class="btn btn-secondary" onclick={on_add}>
                {format!("+ Add Child (max {})", props.children.capacity())}
            </button>
        </section>
    }
}

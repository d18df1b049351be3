use shared::{FieldKey, FormConfig, RequiredFieldsReport};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Inline border style for a field checked by the last submit attempt
pub fn border_style(
    report: &Option<RequiredFieldsReport>,
    config: &FormConfig,
    key: &FieldKey,
) -> Option<String> {
    report
        .as_ref()?
        .border_color(key, config)
        .map(|color| format!("border-color: {}", color))
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: String,
    pub name: String,
    pub label: String,
    pub value: String,
    #[prop_or("text")]
    pub input_type: &'static str,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub style: Option<String>,
    /// Extra text shown after the label, e.g. an age hint
    #[prop_or_default]
    pub hint: Option<String>,
    pub on_change: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                {&props.label}
                {if props.required { " *" } else { "" }}
                {if let Some(hint) = props.hint.as_ref().filter(|h| !h.is_empty()) {
                    html! { <span class="field-hint">{format!(" ({})", hint)}</span> }
                } else { html! {} }}
            </label>
            <input
                type={props.input_type}
                id={props.id.clone()}
                name={props.name.clone()}
                value={props.value.clone()}
                required={props.required}
                style={props.style.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: String,
    pub name: String,
    pub label: String,
    pub value: String,
    /// Label of the empty first option
    pub placeholder: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub style: Option<String>,
    pub on_change: Callback<String>,
}

/// The DOM select's value is set from props after every change, since the
/// `selected` attribute no longer applies once the user has picked an option.
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(select) = node.cast::<HtmlSelectElement>() {
                select.set_value(value);
            }
            || ()
        });
    }

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                {&props.label}
                {if props.required { " *" } else { "" }}
            </label>
            <select
                ref={node}
                id={props.id.clone()}
                name={props.name.clone()}
                required={props.required}
                style={props.style.clone()}
                {onchange}
            >
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label}</option>
                })}
            </select>
        </div>
    }
}

/// Options for a gender dropdown
pub fn gender_options() -> Vec<(String, String)> {
    shared::Gender::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect()
}

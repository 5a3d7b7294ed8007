use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::{document, elements, listen, log_failure, query_all};
use crate::error::{UiError, UiResult};
use crate::validation::{format_phone, validate, FieldKind};

const INVALID_CLASS: &str = "is-invalid";
const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Any control a `.luxury-form` can hold.
#[derive(Clone)]
pub enum FormField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl FormField {
    pub fn from_element(el: Element) -> Option<Self> {
        let el = match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(FormField::Input(input)),
            Err(el) => el,
        };
        let el = match el.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(FormField::TextArea(area)),
            Err(el) => el,
        };
        el.dyn_into::<HtmlSelectElement>().ok().map(FormField::Select)
    }

    pub fn element(&self) -> &Element {
        match self {
            FormField::Input(input) => input,
            FormField::TextArea(area) => area,
            FormField::Select(select) => select,
        }
    }

    pub fn value(&self) -> String {
        match self {
            FormField::Input(input) => input.value(),
            FormField::TextArea(area) => area.value(),
            FormField::Select(select) => select.value(),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Input(input) => FieldKind::from_input_type(&input.type_()),
            _ => FieldKind::Other,
        }
    }

    pub fn required(&self) -> bool {
        self.element().has_attribute("required")
    }
}

pub fn init() -> UiResult<()> {
    // formatting goes first so validation sees the punctuated number
    for el in query_all("input[type=\"tel\"]")? {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        listen(&input, "input", move |_| {
            target.set_value(&format_phone(&target.value()));
        })?;
    }

    for form in query_all(".luxury-form")? {
        for el in elements(form.query_selector_all("input, textarea, select")?) {
            if let Some(field) = FormField::from_element(el) {
                wire_field(field)?;
            }
        }
    }
    Ok(())
}

fn wire_field(field: FormField) -> UiResult<()> {
    let el = field.element().clone();

    {
        let target = el.clone();
        listen(&el, "focus", move |_| {
            if let Some(parent) = target.parent_element() {
                log_failure("focus class", parent.class_list().add_1("focused"));
            }
        })?;
    }

    {
        let field = field.clone();
        listen(&el, "blur", move |_| {
            if field.value().trim().is_empty() {
                if let Some(parent) = field.element().parent_element() {
                    log_failure("blur class", parent.class_list().remove_1("focused"));
                }
            }
            run_validation(&field);
        })?;
    }

    listen(&el, "input", move |_| run_validation(&field))
}

fn run_validation(field: &FormField) {
    if let Err(err) = validate_input(field) {
        tracing::debug!("validation annotation failed: {err}");
    }
}

/// Re-checks a field and refreshes its error annotation. Returns whether the
/// value is acceptable.
pub fn validate_input(field: &FormField) -> UiResult<bool> {
    let el = field.element();
    el.class_list().remove_1(INVALID_CLASS)?;
    let parent = el
        .parent_element()
        .ok_or_else(|| UiError::MissingElement("form field parent".into()))?;
    if let Some(existing) = parent.query_selector(&format!(".{FEEDBACK_CLASS}"))? {
        existing.remove();
    }

    match validate(field.kind(), &field.value(), field.required()) {
        Ok(()) => Ok(true),
        Err(err) => {
            el.class_list().add_1(INVALID_CLASS)?;
            let feedback = document()?.create_element("div")?;
            feedback.set_class_name(FEEDBACK_CLASS);
            feedback.set_text_content(Some(&err.to_string()));
            parent.append_child(&feedback)?;
            Ok(false)
        }
    }
}

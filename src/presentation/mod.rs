//! Presentation model for the contact form.
//!
//! [`render`] turns a [`FormState`] into a [`FormView`]: a plain description
//! of what to draw (labeled inputs, at most one error per field, a submit
//! button). Host UIs can consume the view as data, or print it as HTML via
//! its `Display` impl.

use crate::form::FormState;
use crate::models::Field;
use serde::Serialize;
use std::fmt;

/// Label of the submit control.
pub const SUBMIT_LABEL: &str = "Add contact";

/// Styling tokens attached to the rendered elements.
///
/// The values are opaque to the form; they typically come from a CSS module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassNames {
    pub wrapper: String,
    pub form: String,
    pub field: String,
    pub tag: String,
    pub input: String,
    pub error: String,
    pub btn: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            wrapper: "wrapper".to_string(),
            form: "form".to_string(),
            field: "field".to_string(),
            tag: "tag".to_string(),
            input: "input".to_string(),
            error: "error".to_string(),
            btn: "btn".to_string(),
        }
    }
}

/// One labeled input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    /// HTML input type: `text` or `tel`
    pub input_type: &'static str,
    /// Virtual keyboard hint, set for the number field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<&'static str>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: &'static str,
}

/// Everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub classes: ClassNames,
    pub fields: Vec<FieldView>,
    pub submit: ButtonView,
}

impl FormView {
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }
}

/// Build the view for `state`.
pub fn render(state: &FormState, classes: &ClassNames) -> FormView {
    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let (input_type, input_mode) = match field {
                Field::Name => ("text", None),
                Field::Number => ("tel", Some("tel")),
            };

            FieldView {
                field,
                label: field.label(),
                input_type,
                input_mode,
                value: state.values.get(field).to_string(),
                error: state.visible_error(field).map(ToString::to_string),
            }
        })
        .collect();

    FormView {
        classes: classes.clone(),
        fields,
        submit: ButtonView {
            label: SUBMIT_LABEL,
        },
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes = &self.classes;

        write!(f, "<div class=\"{}\">", escape(&classes.wrapper))?;
        write!(f, "<form class=\"{}\">", escape(&classes.form))?;

        for view in &self.fields {
            write!(f, "<label class=\"{}\">", escape(&classes.field))?;
            write!(f, "<span class=\"{}\">{}</span>", escape(&classes.tag), view.label)?;
            write!(
                f,
                "<input class=\"{}\" type=\"{}\" name=\"{}\"",
                escape(&classes.input),
                view.input_type,
                view.field.key()
            )?;
            if let Some(mode) = view.input_mode {
                write!(f, " inputmode=\"{}\"", mode)?;
            }
            write!(f, " value=\"{}\">", escape(&view.value))?;
            if let Some(error) = &view.error {
                write!(f, "<span class=\"{}\">{}</span>", escape(&classes.error), escape(error))?;
            }
            write!(f, "</label>")?;
        }

        write!(
            f,
            "<button class=\"{}\" type=\"submit\">{}</button>",
            escape(&classes.btn),
            self.submit.label
        )?;
        write!(f, "</form></div>")
    }
}

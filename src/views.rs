//! Template rendering.
//!
//! [`TemplateRenderer`] is the seam to a host template engine; it receives the
//! configured view id and the resolved [`ValueBag`] (which is `Serialize`, so
//! engines working on serde data can consume it directly). [`BootstrapViews`]
//! renders the bundled view ids as Bootstrap 4 markup.

use crate::attributes::{class_list, escape};
use crate::button::ButtonAction;
use crate::error::{ComponentError, ComponentResult};
use crate::form::SelectOption;
use crate::resolver::{Content, Validation, ValueBag};

pub const INPUT_VIEW: &str = "bootstrap-components.form.input";
pub const FILE_VIEW: &str = "bootstrap-components.form.file";
pub const TEXTAREA_VIEW: &str = "bootstrap-components.form.textarea";
pub const SELECT_VIEW: &str = "bootstrap-components.form.select";
pub const CHECKBOX_VIEW: &str = "bootstrap-components.form.checkbox";
pub const TOGGLE_VIEW: &str = "bootstrap-components.form.toggle";
pub const BUTTON_VIEW: &str = "bootstrap-components.buttons.button";
pub const AUDIO_VIEW: &str = "bootstrap-components.media.audio";
pub const VIDEO_VIEW: &str = "bootstrap-components.media.video";
pub const IMAGE_VIEW: &str = "bootstrap-components.media.image";

pub const KNOWN_VIEWS: &[&str] = &[
    INPUT_VIEW,
    FILE_VIEW,
    TEXTAREA_VIEW,
    SELECT_VIEW,
    CHECKBOX_VIEW,
    TOGGLE_VIEW,
    BUTTON_VIEW,
    AUDIO_VIEW,
    VIDEO_VIEW,
    IMAGE_VIEW,
];

pub trait TemplateRenderer {
    fn render(&self, view: &str, values: &ValueBag) -> ComponentResult<String>;
}

/// Built-in Bootstrap 4 views
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapViews;

impl BootstrapViews {
    pub fn knows(view: &str) -> bool {
        KNOWN_VIEWS.contains(&view)
    }
}

impl TemplateRenderer for BootstrapViews {
    fn render(&self, view: &str, values: &ValueBag) -> ComponentResult<String> {
        let html = match (view, &values.content) {
            (INPUT_VIEW, Content::Input { input_type, value, placeholder }) => {
                render_input(values, input_type, value.as_deref(), placeholder.as_deref())
            }
            (FILE_VIEW, Content::File { placeholder }) => render_file(values, placeholder.as_deref()),
            (TEXTAREA_VIEW, Content::Textarea { value, placeholder }) => {
                render_textarea(values, value.as_deref(), placeholder.as_deref())
            }
            (SELECT_VIEW, Content::Select { placeholder, options }) => {
                render_select(values, placeholder.as_deref(), options)
            }
            (CHECKBOX_VIEW, Content::Checkable { checked }) => {
                render_checkable(values, *checked, &CHECKBOX)
            }
            (TOGGLE_VIEW, Content::Checkable { checked }) => {
                render_checkable(values, *checked, &TOGGLE)
            }
            (BUTTON_VIEW, Content::Button { action }) => render_button(values, action),
            (AUDIO_VIEW, Content::Audio { src }) => render_audio(values, src.as_deref()),
            (VIDEO_VIEW, Content::Video { src, poster }) => {
                render_video(values, src.as_deref(), poster.as_deref())
            }
            (IMAGE_VIEW, Content::Image { src, alt, link }) => {
                render_image(values, src.as_deref(), alt.as_deref(), link.as_deref())
            }
            (view, content) if Self::knows(view) => {
                return Err(ComponentError::ViewMismatch {
                    view: view.to_string(),
                    component: content.kind().to_string(),
                })
            }
            (view, _) => {
                return Err(ComponentError::UnknownView {
                    view: view.to_string(),
                })
            }
        };
        Ok(html)
    }
}

// ─── Shared fragments ───────────────────────────────────────────────────────

fn open_container(values: &ValueBag) -> String {
    format!(
        "<div class=\"{}\"{}>",
        class_list(&values.classes.container),
        values.html_attributes.container.to_html()
    )
}

/// Component classes with a view-fixed base class first and the validity
/// class last
fn component_class(values: &ValueBag, base: &str) -> String {
    let mut classes = Vec::with_capacity(values.classes.component.len() + 2);
    if !base.is_empty() {
        classes.push(base.to_string());
    }
    classes.extend(values.classes.component.iter().cloned());
    match values.validation {
        Some(Validation::Error(_)) => classes.push("is-invalid".to_string()),
        Some(Validation::Success(_)) => classes.push("is-valid".to_string()),
        None => {}
    }
    class_list(&classes)
}

fn label_tag(values: &ValueBag) -> Option<String> {
    values.label.as_ref().map(|label| {
        format!("<label for=\"{}\">{}</label>", escape(&values.id), escape(label))
    })
}

fn icon_prepend(values: &ValueBag) -> Option<String> {
    values.icon.as_ref().map(|icon| {
        format!(
            "<div class=\"input-group-prepend\"><span class=\"icon input-group-text\">{}</span></div>",
            icon
        )
    })
}

/// `aria-label` and `aria-describedby`, each only when there is something to point at
fn aria(values: &ValueBag) -> String {
    let mut html = String::new();
    if let Some(label) = &values.label {
        html.push_str(&format!(" aria-label=\"{}\"", escape(label)));
    }
    if values.legend.is_some() {
        html.push_str(&format!(" aria-describedby=\"{}-legend\"", escape(&values.id)));
    }
    html
}

fn legend_tag(values: &ValueBag) -> Option<String> {
    values.legend.as_ref().map(|legend| {
        format!(
            "<small id=\"{}-legend\" class=\"form-text text-muted\">{}</small>",
            escape(&values.id),
            escape(legend)
        )
    })
}

fn feedback_tag(values: &ValueBag) -> Option<String> {
    values.validation.as_ref().map(|validation| match validation {
        Validation::Error(message) => {
            format!("<div class=\"invalid-feedback d-block\">{}</div>", escape(message))
        }
        Validation::Success(message) => {
            format!("<div class=\"valid-feedback d-block\">{}</div>", escape(message))
        }
    })
}

fn optional_attribute(name: &str, value: Option<&str>) -> String {
    value
        .map(|value| format!(" {}=\"{}\"", name, escape(value)))
        .unwrap_or_default()
}

fn name_attribute(values: &ValueBag) -> String {
    optional_attribute("name", values.name.as_deref())
}

/// Label, input group around `control`, legend and feedback
fn form_group(values: &ValueBag, control: String) -> String {
    let mut lines = vec![open_container(values)];
    lines.extend(label_tag(values));
    lines.push("<div class=\"input-group\">".to_string());
    lines.extend(icon_prepend(values));
    lines.push(control);
    lines.push("</div>".to_string());
    lines.extend(legend_tag(values));
    lines.extend(feedback_tag(values));
    lines.push("</div>".to_string());
    lines.join("\n")
}

// ─── Form views ─────────────────────────────────────────────────────────────

fn render_input(
    values: &ValueBag,
    input_type: &str,
    value: Option<&str>,
    placeholder: Option<&str>,
) -> String {
    let control = format!(
        "<input id=\"{}\" class=\"{}\" type=\"{}\"{}{}{}{}{}>",
        escape(&values.id),
        component_class(values, "form-control"),
        escape(input_type),
        name_attribute(values),
        optional_attribute("value", value),
        optional_attribute("placeholder", placeholder),
        aria(values),
        values.html_attributes.component.to_html()
    );
    form_group(values, control)
}

fn render_file(values: &ValueBag, placeholder: Option<&str>) -> String {
    let control = format!(
        "<div class=\"custom-file\">\n<input id=\"{}\" class=\"{}\" type=\"file\"{}{}{}>\n<label class=\"custom-file-label\" for=\"{}\">{}</label>\n</div>",
        escape(&values.id),
        component_class(values, "custom-file-input"),
        name_attribute(values),
        aria(values),
        values.html_attributes.component.to_html(),
        escape(&values.id),
        escape(placeholder.unwrap_or_default())
    );
    form_group(values, control)
}

fn render_textarea(values: &ValueBag, value: Option<&str>, placeholder: Option<&str>) -> String {
    let control = format!(
        "<textarea id=\"{}\" class=\"{}\"{}{}{}{}>{}</textarea>",
        escape(&values.id),
        component_class(values, "form-control"),
        name_attribute(values),
        optional_attribute("placeholder", placeholder),
        aria(values),
        values.html_attributes.component.to_html(),
        escape(value.unwrap_or_default())
    );
    form_group(values, control)
}

fn render_select(values: &ValueBag, placeholder: Option<&str>, options: &[SelectOption]) -> String {
    let mut control = format!(
        "<select id=\"{}\" class=\"{}\"{}{}{}>",
        escape(&values.id),
        component_class(values, "custom-select"),
        name_attribute(values),
        aria(values),
        values.html_attributes.component.to_html()
    );
    if let Some(placeholder) = placeholder {
        let nothing_selected = options.iter().all(|option| !option.selected);
        control.push_str(&format!(
            "\n<option value=\"\" disabled{}>{}</option>",
            if nothing_selected { " selected" } else { "" },
            escape(placeholder)
        ));
    }
    for option in options {
        control.push_str(&format!(
            "\n<option value=\"{}\"{}>{}</option>",
            escape(&option.value),
            if option.selected { " selected" } else { "" },
            escape(&option.label)
        ));
    }
    control.push_str("\n</select>");
    form_group(values, control)
}

/// Class names of one checkable flavour
struct CheckStyle {
    wrapper: &'static str,
    input: &'static str,
    label: &'static str,
}

const CHECKBOX: CheckStyle = CheckStyle {
    wrapper: "form-check",
    input: "form-check-input",
    label: "form-check-label",
};

const TOGGLE: CheckStyle = CheckStyle {
    wrapper: "custom-control custom-switch",
    input: "custom-control-input",
    label: "custom-control-label",
};

fn render_checkable(values: &ValueBag, checked: bool, style: &CheckStyle) -> String {
    let mut lines = vec![
        open_container(values),
        format!("<div class=\"{}\">", style.wrapper),
        format!(
            "<input id=\"{}\" class=\"{}\" type=\"checkbox\"{} value=\"1\"{}{}{}>",
            escape(&values.id),
            component_class(values, style.input),
            name_attribute(values),
            if checked { " checked" } else { "" },
            aria(values),
            values.html_attributes.component.to_html()
        ),
    ];
    let caption = caption(values.icon.as_deref(), values.label.as_deref());
    if !caption.is_empty() {
        lines.push(format!(
            "<label class=\"{}\" for=\"{}\">{}</label>",
            style.label,
            escape(&values.id),
            caption
        ));
    }
    lines.push("</div>".to_string());
    lines.extend(legend_tag(values));
    lines.extend(feedback_tag(values));
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Raw icon and escaped label, space separated when both are present
fn caption(icon: Option<&str>, label: Option<&str>) -> String {
    match (icon, label) {
        (Some(icon), Some(label)) => format!("{} {}", icon, escape(label)),
        (Some(icon), None) => icon.to_string(),
        (None, Some(label)) => escape(label),
        (None, None) => String::new(),
    }
}

// ─── Buttons ────────────────────────────────────────────────────────────────

fn render_button(values: &ValueBag, action: &ButtonAction) -> String {
    let caption = caption(values.icon.as_deref(), values.label.as_deref());
    let element = match action {
        ButtonAction::Submit => format!(
            "<button class=\"{}\" type=\"submit\"{}{}>{}</button>",
            component_class(values, ""),
            optional_attribute("title", values.label.as_deref()),
            values.html_attributes.component.to_html(),
            caption
        ),
        ButtonAction::Link(url) => format!(
            "<a href=\"{}\" class=\"{}\"{}{}>{}</a>",
            escape(url),
            component_class(values, ""),
            optional_attribute("title", values.label.as_deref()),
            values.html_attributes.component.to_html(),
            caption
        ),
    };
    [open_container(values), element, "</div>".to_string()].join("\n")
}

// ─── Media ──────────────────────────────────────────────────────────────────

fn render_audio(values: &ValueBag, src: Option<&str>) -> String {
    let element = format!(
        "<audio class=\"{}\"{}{}></audio>",
        component_class(values, ""),
        optional_attribute("src", src),
        values.html_attributes.component.to_html()
    );
    [open_container(values), element, "</div>".to_string()].join("\n")
}

fn render_video(values: &ValueBag, src: Option<&str>, poster: Option<&str>) -> String {
    let element = format!(
        "<video class=\"{}\"{}{}{}></video>",
        component_class(values, ""),
        optional_attribute("src", src),
        optional_attribute("poster", poster),
        values.html_attributes.component.to_html()
    );
    [open_container(values), element, "</div>".to_string()].join("\n")
}

fn render_image(values: &ValueBag, src: Option<&str>, alt: Option<&str>, link: Option<&str>) -> String {
    let img = format!(
        "<img class=\"{}\"{}{}{}>",
        component_class(values, ""),
        optional_attribute("src", src),
        optional_attribute("alt", alt),
        values.html_attributes.component.to_html()
    );
    let mut lines = vec![open_container(values)];
    match link {
        Some(url) => {
            lines.push(format!(
                "<a href=\"{}\" class=\"{}\"{}>",
                escape(url),
                class_list(&values.classes.link),
                values.html_attributes.link.to_html()
            ));
            lines.push(img);
            lines.push("</a>".to_string());
        }
        None => lines.push(img),
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::context::RenderContext;
    use crate::form::{self, FormField};
    use crate::resolver::Component;

    #[test]
    fn unknown_view() {
        let store = ConfigStore::bundled();
        let bag = form::text()
            .name("name")
            .resolve(&RenderContext::new(&store))
            .unwrap();
        let result = BootstrapViews.render("custom.view", &bag);
        assert!(matches!(result, Err(ComponentError::UnknownView { .. })));
    }

    #[test]
    fn view_content_mismatch() {
        let mut store = ConfigStore::bundled();
        store.set("form.text.view", SELECT_VIEW);
        let result = form::text()
            .name("name")
            .render(&RenderContext::new(&store));
        assert!(matches!(
            result,
            Err(ComponentError::ViewMismatch { ref component, .. }) if component == "input"
        ));
    }

    struct ViewEcho;

    impl TemplateRenderer for ViewEcho {
        fn render(&self, view: &str, values: &ValueBag) -> ComponentResult<String> {
            Ok(format!("{}#{}", view, values.id))
        }
    }

    #[test]
    fn host_renderer_receives_view_and_values() {
        let store = ConfigStore::bundled();
        let ctx = RenderContext::new(&store).with_renderer(&ViewEcho);
        let html = form::email().name("email").render(&ctx).unwrap();
        assert_eq!(html, "bootstrap-components.form.input#email-email");
    }

    #[test]
    fn caption_joins_icon_and_label() {
        assert_eq!(caption(Some("<i></i>"), Some("Save & go")), "<i></i> Save &amp; go");
        assert_eq!(caption(None, None), "");
    }
}

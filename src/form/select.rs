use serde::Serialize;
use serde_json::{Map, Value};

use super::Field;
use crate::context::RenderContext;
use crate::error::{ComponentError, ComponentResult};
use crate::resolver::{Component, Content, ValueBag};
use crate::services::{scalar_text, Model};

const COMPONENT: &str = "form.select";

/// A normalized `<option>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    /// The full source record
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
struct OptionList {
    records: Vec<Map<String, Value>>,
    value_field: String,
    label_field: String,
}

/// Explicit selection rule declared with [`Select::selected`]
#[derive(Debug, Clone, PartialEq)]
struct Comparison {
    field: String,
    value: Value,
}

/// `<select>` built from a list of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub(super) field: Field,
    options: Option<OptionList>,
    selected: Option<Comparison>,
}

impl Select {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the option list. Each record is serialized to a JSON object and
    /// must carry non-empty `value_field` and `label_field` entries.
    pub fn options<I, T>(
        mut self,
        list: I,
        value_field: impl Into<String>,
        label_field: impl Into<String>,
    ) -> ComponentResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        let value_field = value_field.into();
        let label_field = label_field.into();

        let mut records = Vec::new();
        for (index, item) in list.into_iter().enumerate() {
            let record = match serde_json::to_value(item)? {
                Value::Object(record) => record,
                other => {
                    return Err(ComponentError::InvalidOption {
                        component: COMPONENT.to_string(),
                        index,
                        reason: format!("expected a record, got {}", other),
                    })
                }
            };
            require_field(&record, &value_field, "options() value field")?;
            require_field(&record, &label_field, "options() label field")?;
            records.push(record);
        }

        self.options = Some(OptionList {
            records,
            value_field,
            label_field,
        });
        Ok(self)
    }

    /// Mark as selected the options whose `field` strictly equals `value`,
    /// instead of comparing against the bound model. A null `value` declares
    /// no comparison.
    pub fn selected(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.selected = if value.is_null() {
            None
        } else {
            Some(Comparison {
                field: field.into(),
                value,
            })
        };
        self
    }
}

impl OptionList {
    fn resolve(
        &self,
        comparison: Option<&Comparison>,
        model: Option<&Model>,
    ) -> ComponentResult<Vec<SelectOption>> {
        if let Some(comparison) = comparison {
            for record in &self.records {
                require_field(record, &comparison.field, "selected() comparison field")?;
            }
        }

        Ok(self
            .records
            .iter()
            .map(|record| SelectOption {
                value: text_of(record, &self.value_field),
                label: text_of(record, &self.label_field),
                selected: self.is_selected(record, comparison, model),
                fields: record.clone(),
            })
            .collect())
    }

    fn is_selected(
        &self,
        record: &Map<String, Value>,
        comparison: Option<&Comparison>,
        model: Option<&Model>,
    ) -> bool {
        if let Some(comparison) = comparison {
            return record.get(&comparison.field) == Some(&comparison.value);
        }
        match model.and_then(|model| model.attribute(&self.value_field)) {
            Some(attribute) => record.get(&self.value_field) == Some(attribute),
            None => false,
        }
    }
}

impl Component for Select {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        self.field.resolve(ctx, "select", |_, name| {
            let options = match &self.options {
                Some(list) => list.resolve(self.selected.as_ref(), self.field.model.as_ref())?,
                None => Vec::new(),
            };
            Ok(Content::Select {
                placeholder: self.field.resolve_placeholder(ctx, name),
                options,
            })
        })
    }
}

/// Absent, null and empty-string entries count as missing
fn require_field(record: &Map<String, Value>, field: &str, argument: &str) -> ComponentResult<()> {
    let present = match record.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    };
    if present {
        Ok(())
    } else {
        Err(ComponentError::InvalidOptionField {
            component: COMPONENT.to_string(),
            argument: argument.to_string(),
            field: field.to_string(),
        })
    }
}

fn text_of(record: &Map<String, Value>, field: &str) -> String {
    record
        .get(field)
        .and_then(scalar_text)
        .unwrap_or_default()
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::client::model::error::{ClientError, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    /// Masked input; never populated from a record.
    Secret,
    Integer,
    Decimal,
    /// `YYYY-MM-DD` in the form, a midnight timestamp on the wire.
    Date,
    /// Comma-separated in the form, an array on the wire.
    List,
    Choice(&'static [&'static str]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Always,
    OnCreate,
}

/// One editable field of a resource form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    /// Only sent when creating; hidden from update forms.
    pub create_only: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            requirement: Requirement::Optional,
            create_only: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.requirement = Requirement::Always;
        self
    }

    pub const fn required_on_create(mut self) -> Self {
        self.requirement = Requirement::OnCreate;
        self
    }

    pub const fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    fn is_required(&self, mode: FormMode) -> bool {
        match self.requirement {
            Requirement::Optional => false,
            Requirement::Always => true,
            Requirement::OnCreate => mode == FormMode::Create,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

/// A field as the form renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    pub spec: FieldSpec,
    pub value: String,
    pub locked: bool,
}

/// Create/update form state, keyed by backend field name.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    fields: &'static [FieldSpec],
    values: Vec<String>,
    locked: Vec<&'static str>,
    pub error: Option<String>,
}

impl FormState {
    pub fn blank(fields: &'static [FieldSpec]) -> Self {
        Self {
            mode: FormMode::Create,
            fields,
            values: fields.iter().map(|_| String::new()).collect(),
            locked: Vec::new(),
            error: None,
        }
    }

    /// Fills an update form from `record`'s serialized fields.
    ///
    /// Fields are matched by name; nulls and secrets stay blank, arrays are joined
    /// with `", "` and dates are cut to `YYYY-MM-DD`.
    pub fn populate(
        fields: &'static [FieldSpec],
        id: i64,
        record: &impl Serialize,
    ) -> Result<Self, ClientError> {
        let Value::Object(map) = serde_json::to_value(record)? else {
            return Err(ClientError::Decode("record is not an object".to_string()));
        };

        let values = fields
            .iter()
            .map(|spec| match (spec.kind, map.get(spec.name)) {
                (FieldKind::Secret, _) | (_, None) => String::new(),
                (kind, Some(value)) => display_value(kind, value),
            })
            .collect();

        Ok(Self {
            mode: FormMode::Update(id),
            fields,
            values,
            locked: Vec::new(),
            error: None,
        })
    }

    /// Fields to render; create-only fields are hidden when updating.
    pub fn fields(&self) -> Vec<FieldView> {
        self.fields
            .iter()
            .zip(&self.values)
            .filter(|(spec, _)| self.mode == FormMode::Create || !spec.create_only)
            .map(|(spec, value)| FieldView {
                spec: *spec,
                value: value.clone(),
                locked: self.is_locked(spec.name),
            })
            .collect()
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.values[index].as_str())
    }

    /// Sets a field; unknown and locked names are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if self.is_locked(name) {
            return;
        }
        if let Some(index) = self.position(name) {
            self.values[index] = value.into();
            self.error = None;
        }
    }

    pub fn lock(&mut self, names: &[&'static str]) {
        self.locked.extend_from_slice(names);
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked.contains(&name)
    }

    /// Converts the form into the JSON body for a create or update call.
    ///
    /// Blank optional fields are left out, as are locked fields and create-only
    /// fields on update.
    pub fn to_payload(&self) -> Result<Map<String, Value>, ValidationError> {
        let mut payload = Map::new();

        for (spec, raw) in self.fields.iter().zip(&self.values) {
            if self.is_locked(spec.name) {
                continue;
            }
            if spec.create_only && self.mode != FormMode::Create {
                continue;
            }

            let raw = raw.trim();
            if raw.is_empty() {
                if spec.is_required(self.mode) {
                    return Err(ValidationError::MissingField(spec.label));
                }
                continue;
            }

            payload.insert(spec.name.to_string(), wire_value(spec, raw)?);
        }

        Ok(payload)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }
}

/// Joins list items for editing in a single text field.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Splits a comma-separated field back into its trimmed, non-empty items.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn display_value(kind: FieldKind, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) if kind == FieldKind::Date => date_part(text),
        Value::String(text) => text.clone(),
        Value::Array(items) => join_list(
            &items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>(),
        ),
        other => other.to_string(),
    }
}

fn date_part(text: &str) -> String {
    let head = text.get(..10).unwrap_or(text);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => text.to_string(),
    }
}

fn wire_value(spec: &FieldSpec, raw: &str) -> Result<Value, ValidationError> {
    match spec.kind {
        FieldKind::Text | FieldKind::Secret | FieldKind::Choice(_) => {
            Ok(Value::String(raw.to_string()))
        }
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| ValidationError::InvalidInteger(spec.label)),
        FieldKind::Decimal => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(ValidationError::InvalidDecimal(spec.label)),
        FieldKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight: NaiveDateTime| {
                Value::String(midnight.format("%Y-%m-%dT%H:%M:%S").to_string())
            })
            .ok_or(ValidationError::InvalidDate(spec.label)),
        FieldKind::List => Ok(Value::Array(
            split_list(raw).into_iter().map(Value::String).collect(),
        )),
    }
}

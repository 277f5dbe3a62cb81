use samplegrid_types::{Error, FieldKind, SAMPLE_ID_KEY, Schema};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Choice { choices: Vec<String> },
}

/// Toolkit-agnostic description of one input control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlDescriptor {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: ControlKind,
    pub default: String,
    pub required: bool,
}

impl ControlDescriptor {
    pub fn choices(&self) -> &[String] {
        match &self.kind {
            ControlKind::Text => &[],
            ControlKind::Choice { choices } => choices,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, ControlKind::Choice { .. })
    }
}

/// One control per schema field, in registry order.
///
/// Select fields become choice controls defaulting to their first option; every
/// other field is free text. Only `sample_id` is required.
pub fn generate_form(schema: &Schema) -> Vec<ControlDescriptor> {
    schema
        .fields()
        .iter()
        .map(|field| {
            let (kind, default) = match field.kind {
                FieldKind::Select => (
                    ControlKind::Choice {
                        choices: field.options.clone(),
                    },
                    field.options.first().cloned().unwrap_or_default(),
                ),
                FieldKind::Text => (ControlKind::Text, String::new()),
            };

            ControlDescriptor {
                key: field.key.clone(),
                label: field.label.clone(),
                kind,
                default,
                required: field.key == SAMPLE_ID_KEY,
            }
        })
        .collect()
}

/// Current values of a generated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    controls: Vec<ControlDescriptor>,
    values: Vec<String>,
}

impl FormDraft {
    pub fn new(controls: Vec<ControlDescriptor>) -> Self {
        let values = controls.iter().map(|c| c.default.clone()).collect();
        Self { controls, values }
    }

    pub fn from_schema(schema: &Schema) -> Self {
        Self::new(generate_form(schema))
    }

    pub fn controls(&self) -> &[ControlDescriptor] {
        &self.controls
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.values[i].as_str())
    }

    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Key/value pairs in control order
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.controls
            .iter()
            .zip(&self.values)
            .map(|(c, v)| (c.key.as_str(), v.as_str()))
    }

    /// Set a control value; choice controls only take one of their choices
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), Error> {
        let index = self
            .position(key)
            .ok_or_else(|| Error::UnknownField(key.to_string()))?;
        self.set_at(index, value)
    }

    pub fn set_at(&mut self, index: usize, value: impl Into<String>) -> Result<(), Error> {
        let Some(control) = self.controls.get(index) else {
            return Err(Error::NoSuchControl(index));
        };
        let value = value.into();

        if control.is_choice() && !control.choices().contains(&value) {
            return Err(Error::InvalidOption {
                key: control.key.clone(),
                value,
            });
        }

        self.values[index] = value;
        Ok(())
    }

    /// Move a choice control `step` options forward (negative goes back), wrapping
    pub fn cycle_at(&mut self, index: usize, step: isize) {
        let Some(control) = self.controls.get(index) else {
            return;
        };
        let choices = control.choices();
        if choices.is_empty() {
            return;
        }

        let current = choices
            .iter()
            .position(|c| *c == self.values[index])
            .unwrap_or(0) as isize;
        let len = choices.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.values[index] = choices[next].clone();
    }

    /// Restore every control to its default
    pub fn reset(&mut self) {
        for (control, value) in self.controls.iter().zip(self.values.iter_mut()) {
            *value = control.default.clone();
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.key == key)
    }
}

use std::fmt;

use crate::presentation::view_models::{CreateView, FormViewModel, RenderOptions, SchemaViewModel};
use samplegrid_types::FieldKind;

impl CreateView for FormViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(FormView { data: self })
    }
}

struct FormView<'a> {
    data: &'a FormViewModel,
}

impl<'a> fmt::Display for FormView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .data
            .controls
            .iter()
            .map(|c| c.label.chars().count() + 2)
            .max()
            .unwrap_or(0);

        for control in &self.data.controls {
            let label = if control.required {
                format!("{} *", control.label)
            } else {
                control.label.clone()
            };

            if control.is_choice() {
                writeln!(
                    f,
                    "{:<width$}  [{}]  default: {}",
                    label,
                    control.choices().join(" | "),
                    control.default,
                    width = label_width
                )?;
            } else {
                writeln!(f, "{:<width$}  text", label, width = label_width)?;
            }
        }

        Ok(())
    }
}

impl CreateView for SchemaViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(SchemaView { data: self })
    }
}

struct SchemaView<'a> {
    data: &'a SchemaViewModel,
}

impl<'a> fmt::Display for SchemaView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:<20} {:<8} OPTIONS", "KEY", "LABEL", "TYPE")?;
        writeln!(f, "{}", "-".repeat(72))?;

        for field in &self.data.fields {
            let kind = match field.kind {
                FieldKind::Text => "text",
                FieldKind::Select => "select",
            };
            writeln!(
                f,
                "{:<16} {:<20} {:<8} {}",
                field.key,
                field.label,
                kind,
                field.options.join(", ")
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplegrid_engine::generate_form;
    use samplegrid_types::{FieldDefinition, Schema};

    #[test]
    fn test_form_view_marks_required_and_lists_choices() {
        let schema = Schema::new(vec![
            FieldDefinition::text("sample_id", "Sample ID"),
            FieldDefinition::select("finish", "Finish", ["Matte", "Gloss"]),
        ])
        .unwrap();
        let vm = FormViewModel {
            controls: generate_form(&schema),
        };

        let text = vm.create_view(RenderOptions::default()).to_string();
        insta::assert_snapshot!(text.trim_end(), @r"
        Sample ID *  text
        Finish       [Matte | Gloss]  default: Matte
        ");
    }
}

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, FormViewModel, Guidance, SchemaViewModel,
};
use samplegrid_engine::ControlDescriptor;
use samplegrid_types::Schema;

pub fn present_form(controls: Vec<ControlDescriptor>) -> CommandResultViewModel<FormViewModel> {
    CommandResultViewModel::new(FormViewModel { controls })
        .with_suggestion(Guidance::new("Submit a record from the shell").with_command(cmd::ADD))
        .with_suggestion(Guidance::new("Use the interactive form").with_command(cmd::BROWSE))
}

pub fn present_schema(schema: &Schema) -> CommandResultViewModel<SchemaViewModel> {
    CommandResultViewModel::new(SchemaViewModel {
        fields: schema.fields().to_vec(),
    })
}

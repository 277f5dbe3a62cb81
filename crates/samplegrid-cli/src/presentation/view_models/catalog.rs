use samplegrid_engine::ControlDescriptor;
use samplegrid_types::FieldDefinition;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FormViewModel {
    pub controls: Vec<ControlDescriptor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaViewModel {
    pub fields: Vec<FieldDefinition>,
}

use crate::config::CatalogConfig;
use crate::{Error, Result};
use samplegrid_types::{FieldDefinition, Record, RecordCollection, SampleId, Schema};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Schema registry plus the seed records used to bootstrap an empty store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub schema: Schema,
    pub seed: RecordCollection,
}

impl Catalog {
    /// Built-in catalog, overridden piecewise by files named in the config
    pub fn load(config: &CatalogConfig, data_dir: &Path) -> Result<Self> {
        let schema = match &config.schema {
            Some(path) => read_json::<Schema>(&data_dir.join(path))?,
            None => builtin_schema()?,
        };
        let seed = match &config.seed {
            Some(path) => read_json::<RecordCollection>(&data_dir.join(path))?,
            None => builtin_seed()?,
        };

        tracing::debug!(
            fields = schema.len(),
            seed_records = seed.len(),
            "catalog loaded"
        );
        Ok(Self { schema, seed })
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self {
            schema: builtin_schema()?,
            seed: builtin_seed()?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Catalog(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Catalog(format!("invalid {}: {}", path.display(), e)))
}

pub fn builtin_schema() -> Result<Schema> {
    let schema = Schema::new(vec![
        FieldDefinition::text("sample_id", "Sample ID"),
        FieldDefinition::text("content", "Content"),
        FieldDefinition::select(
            "market_sector",
            "Market Sector",
            [
                "Automotive",
                "Consumer Electronics",
                "Medical",
                "Aerospace",
                "Architecture",
            ],
        ),
        FieldDefinition::text("material", "Material"),
        FieldDefinition::text("code_color", "Color Code"),
        FieldDefinition::text("dims", "Dimensions"),
        FieldDefinition::select("finish", "Finish", ["Matte", "Satin", "Gloss", "Textured"]),
        FieldDefinition::text("supplier", "Supplier"),
        FieldDefinition::text("location", "Storage Location"),
    ])?;
    Ok(schema)
}

pub fn builtin_seed() -> Result<RecordCollection> {
    let rows: [[(&str, &str); 7]; 4] = [
        [
            ("sample_id", "MSP-0001"),
            ("content", "Door trim panel"),
            ("market_sector", "Automotive"),
            ("material", "PC/ABS"),
            ("code_color", "RAL 9005"),
            ("dims", "120x80x3 mm"),
            ("finish", "Textured"),
        ],
        [
            ("sample_id", "MSP-0002"),
            ("content", "Laptop lid"),
            ("market_sector", "Consumer Electronics"),
            ("material", "Anodized Aluminium 6063"),
            ("code_color", "Space Grey"),
            ("dims", "300x210x1.5 mm"),
            ("finish", "Matte"),
        ],
        [
            ("sample_id", "MSP-0003"),
            ("content", "Infusion pump housing"),
            ("market_sector", "Medical"),
            ("material", "PBT"),
            ("code_color", "RAL 9016"),
            ("dims", "95x60x2 mm"),
            ("finish", "Satin"),
        ],
        [
            ("sample_id", "MSP-0004"),
            ("content", ""),
            ("market_sector", "Architecture"),
            ("material", "Stainless Steel 316L"),
            ("code_color", ""),
            ("dims", "150x150x1 mm"),
            ("finish", "Gloss"),
        ],
    ];

    rows.into_iter()
        .map(|row| -> Result<Record> {
            let mut fields = row.into_iter();
            let (_, id) = fields.next().unwrap_or(("sample_id", ""));
            let mut record = Record::new(SampleId::new(id)?);
            for (key, value) in fields {
                record.set(key, value)?;
            }
            Ok(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_is_consistent() -> Result<()> {
        let catalog = Catalog::builtin()?;
        assert_eq!(catalog.seed.len(), 4);

        for record in catalog.seed.iter() {
            for (key, _) in record.entries() {
                assert!(catalog.schema.contains_key(key), "seed key {} not in schema", key);
            }
        }
        Ok(())
    }

    #[test]
    fn test_files_override_builtin() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("seed.json"),
            r#"[{"sample_id": "S1", "material": "steel"}]"#,
        )?;

        let config = CatalogConfig {
            schema: None,
            seed: Some(PathBuf::from("seed.json")),
        };
        let catalog = Catalog::load(&config, temp_dir.path())?;

        assert_eq!(catalog.seed.len(), 1);
        assert_eq!(catalog.schema, builtin_schema()?);
        Ok(())
    }

    #[test]
    fn test_invalid_schema_file_is_catalog_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("schema.json"),
            r#"[{"key": "material", "label": "Material", "type": "text"}]"#,
        )?;

        let config = CatalogConfig {
            schema: Some(PathBuf::from("schema.json")),
            seed: None,
        };
        let err = Catalog::load(&config, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Catalog(msg) if msg.contains("sample_id")));
        Ok(())
    }
}

//! Catalog files small enough to reason about in assertions.

/// Schema with one select field and the four preview fields
pub const SCHEMA_JSON: &str = r#"[
  { "key": "sample_id", "label": "Sample ID", "type": "text" },
  { "key": "content", "label": "Content", "type": "text" },
  { "key": "market_sector", "label": "Market Sector", "type": "select", "options": ["Automotive", "Medical"] },
  { "key": "material", "label": "Material", "type": "text" },
  { "key": "code_color", "label": "Color Code", "type": "text" },
  { "key": "dims", "label": "Dimensions", "type": "text" }
]
"#;

/// A single steel sample
pub const SEED_JSON: &str = r#"[
  { "sample_id": "S1", "content": "Bracket", "market_sector": "Automotive", "material": "steel" }
]
"#;

/// Config pointing the catalog at `schema.json` and `seed.json` in the data dir
pub const CATALOG_CONFIG_TOML: &str = r#"[catalog]
schema = "schema.json"
seed = "seed.json"
"#;

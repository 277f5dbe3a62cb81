use samplegrid_types::{CONTENT_KEY, FieldDefinition, Record, SAMPLE_ID_KEY, Schema};
use serde::Serialize;

/// Shown in the card header when a record has no content
pub const CONTENT_PLACEHOLDER: &str = "N/A";

/// Shown for absent or empty field values
pub const VALUE_PLACEHOLDER: &str = "-";

/// Shown instead of cards when there is nothing to display
pub const EMPTY_NOTICE: &str = "No records found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Display projection of one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub sample_id: String,
    pub content: String,
    pub rows: Vec<CardRow>,
}

/// Result of projecting a record sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    Empty { notice: String },
    Cards { cards: Vec<Card> },
}

impl GridView {
    pub fn cards(&self) -> &[Card] {
        match self {
            GridView::Empty { .. } => &[],
            GridView::Cards { cards } => cards,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }
}

/// Project records into cards, one per record, in input order.
///
/// Each card carries the preview fields of the schema. The whole view is rebuilt
/// on every call.
pub fn project_grid<'a, I>(records: I, schema: &Schema) -> GridView
where
    I: IntoIterator<Item = &'a Record>,
{
    let cards: Vec<Card> = records
        .into_iter()
        .map(|record| project_card(record, schema))
        .collect();

    if cards.is_empty() {
        GridView::Empty {
            notice: EMPTY_NOTICE.to_string(),
        }
    } else {
        GridView::Cards { cards }
    }
}

/// Compact card: badge, content and the preview rows
pub fn project_card(record: &Record, schema: &Schema) -> Card {
    build_card(record, schema.preview_fields())
}

/// Full card: every schema field except the badge and content, followed by
/// keys the schema doesn't know about
pub fn project_detail(record: &Record, schema: &Schema) -> Card {
    let mut card = build_card(
        record,
        schema
            .fields()
            .iter()
            .filter(|f| f.key != SAMPLE_ID_KEY && f.key != CONTENT_KEY),
    );

    for (key, value) in record.entries() {
        if key == SAMPLE_ID_KEY || key == CONTENT_KEY || schema.contains_key(key) {
            continue;
        }
        card.rows.push(CardRow {
            key: key.to_string(),
            label: key.to_string(),
            value: display_value(Some(value)),
        });
    }

    card
}

fn build_card<'a, F>(record: &Record, fields: F) -> Card
where
    F: Iterator<Item = &'a FieldDefinition>,
{
    let rows = fields
        .map(|field| CardRow {
            key: field.key.clone(),
            label: field.label.clone(),
            value: display_value(record.get(&field.key)),
        })
        .collect();

    Card {
        sample_id: record.sample_id().to_string(),
        content: record
            .non_empty(CONTENT_KEY)
            .unwrap_or(CONTENT_PLACEHOLDER)
            .to_string(),
        rows,
    }
}

fn display_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => VALUE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samplegrid_types::{RecordCollection, SampleId};

    fn schema() -> Schema {
        Schema::new(vec![
            FieldDefinition::text("sample_id", "Sample ID"),
            FieldDefinition::text("content", "Content"),
            FieldDefinition::text("dims", "Dimensions"),
            FieldDefinition::select("market_sector", "Market Sector", ["Automotive", "Medical"]),
            FieldDefinition::text("supplier", "Supplier"),
            FieldDefinition::text("material", "Material"),
            FieldDefinition::text("code_color", "Color Code"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_input_yields_notice() {
        let view = project_grid(&RecordCollection::new(), &schema());
        assert_eq!(
            view,
            GridView::Empty {
                notice: "No records found.".to_string()
            }
        );
        assert!(view.cards().is_empty());
    }

    #[test]
    fn test_one_card_per_record_in_order() {
        let records: RecordCollection = vec![
            Record::new(SampleId::new("S2").unwrap()).with_field("material", "glass"),
            Record::new(SampleId::new("S1").unwrap()).with_field("material", "steel"),
        ]
        .into();

        let view = project_grid(&records, &schema());
        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].sample_id, "S2");
        assert_eq!(cards[1].sample_id, "S1");
    }

    #[test]
    fn test_preview_rows_follow_schema_order_with_placeholders() {
        let record = Record::new(SampleId::new("S1").unwrap())
            .with_field("material", "steel")
            .with_field("code_color", "")
            .with_field("supplier", "Acme");

        let card = project_card(&record, &schema());

        insta::assert_json_snapshot!(card, @r###"
        {
          "sample_id": "S1",
          "content": "N/A",
          "rows": [
            {
              "key": "dims",
              "label": "Dimensions",
              "value": "-"
            },
            {
              "key": "market_sector",
              "label": "Market Sector",
              "value": "-"
            },
            {
              "key": "material",
              "label": "Material",
              "value": "steel"
            },
            {
              "key": "code_color",
              "label": "Color Code",
              "value": "-"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_content_is_shown_when_present() {
        let record = Record::new(SampleId::new("S1").unwrap()).with_field("content", "Door handle");
        assert_eq!(project_card(&record, &schema()).content, "Door handle");
    }

    #[test]
    fn test_detail_includes_all_fields_and_extras() {
        let record = Record::new(SampleId::new("S1").unwrap())
            .with_field("supplier", "Acme")
            .with_field("legacy_ref", "X-1");

        let card = project_detail(&record, &schema());
        let keys: Vec<&str> = card.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["dims", "market_sector", "supplier", "material", "code_color", "legacy_ref"]
        );
        assert_eq!(card.rows[2].value, "Acme");
        assert_eq!(card.rows[5].label, "legacy_ref");
    }
}

use serde::Deserialize;

/// One entry of the breed catalog, as returned by the API.
///
/// Only `name` is required. Descriptive fields fall back to empty strings so a
/// single sparse entry does not fail the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BreedRecord {
    pub name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub temperament: String,
    #[serde(default)]
    pub life_span: String,
    #[serde(default)]
    pub weight: Weight,
    pub wikipedia_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Weight {
    #[serde(default)]
    pub imperial: String,
    pub metric: Option<String>,
}

pub type BreedList = Vec<BreedRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_api_entry() {
        let json = serde_json::json!({
            "id": "siam",
            "name": "Siamese",
            "origin": "Thailand",
            "temperament": "Active, Agile, Clever",
            "life_span": "12 - 15",
            "weight": {"imperial": "8 - 15", "metric": "4 - 7"},
            "wikipedia_url": "https://en.wikipedia.org/wiki/Siamese_(cat)",
            "adaptability": 5
        });

        let record: BreedRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.name, "Siamese");
        assert_eq!(record.weight.imperial, "8 - 15");
        assert_eq!(record.weight.metric.as_deref(), Some("4 - 7"));
        assert_eq!(
            record.wikipedia_url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Siamese_(cat)")
        );
    }

    #[test]
    fn test_deserialize_sparse_entry() {
        let json = serde_json::json!({"name": "Siamese", "origin": "Thailand"});

        let record: BreedRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.origin, "Thailand");
        assert_eq!(record.temperament, "");
        assert_eq!(record.weight, Weight::default());
        assert!(record.wikipedia_url.is_none());
    }

    #[test]
    fn test_null_wikipedia_url_is_absent() {
        let json = serde_json::json!({"name": "Sphynx", "wikipedia_url": null, "weight": {}});

        let record: BreedRecord = serde_json::from_value(json).unwrap();

        assert!(record.wikipedia_url.is_none());
        assert_eq!(record.weight.imperial, "");
        assert!(record.weight.metric.is_none());
    }

    #[test]
    fn test_name_is_required() {
        let json = serde_json::json!({"origin": "Thailand"});
        assert!(serde_json::from_value::<BreedRecord>(json).is_err());
    }
}

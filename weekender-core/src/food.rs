//! Food search query and response.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FOOD_LOCATION: &str = "Pittsburgh, PA";
pub const DEFAULT_FOOD_LIMIT: u32 = 5;

/// Query string of `GET /food/search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodSearch {
    pub query: String,
    pub location: String,
    pub limit: u32,
    /// Price tier filter ("1" to "4", or a comma list); omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl FoodSearch {
    pub fn new(query: impl Into<String>) -> Self {
        FoodSearch {
            query: query.into(),
            location: DEFAULT_FOOD_LOCATION.to_string(),
            limit: DEFAULT_FOOD_LIMIT,
            price: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodSearchResponse {
    pub query: String,
    pub location: String,
    /// Business records as returned by the upstream search service.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

/// The handful of business fields worth showing.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPlace {
    pub name: String,
    pub rating: Option<f64>,
    pub price: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
}

impl FoodPlace {
    /// Pull the display fields out of an opaque result record.
    /// Records without a name are skipped.
    pub fn from_result(result: &serde_json::Value) -> Option<Self> {
        let name = result.get("name")?.as_str()?.to_string();
        let text = |key: &str| result.get(key).and_then(|v| v.as_str()).map(str::to_string);

        let address = result
            .get("location")
            .and_then(|loc| loc.get("display_address"))
            .and_then(|lines| lines.as_array())
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(|line| line.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .or_else(|| text("address"));

        Some(FoodPlace {
            name,
            rating: result.get("rating").and_then(|v| v.as_f64()),
            price: text("price"),
            address,
            url: text("url"),
        })
    }
}

impl FoodSearchResponse {
    pub fn places(&self) -> Vec<FoodPlace> {
        self.results.iter().filter_map(FoodPlace::from_result).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_omitted_when_unset() {
        let search = FoodSearch::new("pierogies");
        let json = serde_json::to_value(&search).unwrap();
        assert_eq!(json["location"], "Pittsburgh, PA");
        assert_eq!(json["limit"], 5);
        assert!(json.get("price").is_none());
    }

    #[test]
    fn test_places_extracts_display_fields() {
        let json = r#"{
            "query": "sandwich",
            "location": "Pittsburgh, PA",
            "results": [
                {"name": "Primanti Bros", "rating": 4.0, "price": "$",
                 "location": {"display_address": ["46 18th St", "Pittsburgh, PA 15222"]}},
                {"rating": 5.0},
                {"name": "Pamela's", "address": "60 21st St"}
            ]
        }"#;
        let response: FoodSearchResponse = serde_json::from_str(json).unwrap();
        let places = response.places();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Primanti Bros");
        assert_eq!(places[0].address.as_deref(), Some("46 18th St, Pittsburgh, PA 15222"));
        assert_eq!(places[0].rating, Some(4.0));
        assert_eq!(places[1].address.as_deref(), Some("60 21st St"));
        assert_eq!(places[1].price, None);
    }
}

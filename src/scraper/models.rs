use serde::{Deserialize, Serialize};

// record
//  ├── address, price, description      (heuristics below)
//  ├── image_urls                        (first 5 <img src>)
//  └── bedrooms, bathrooms, square_feet,
//      lot_size, year_built, property_type,
//      listing_agent, days_on_market,
//      mls_number, neighborhood          (reserved, always None for now)

/// Fields pulled from one listing page.
///
/// Every scalar is independently optional and serializes as `null` when
/// unknown. Field order here is the key order in the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub address: Option<String>,
    pub price: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub square_feet: Option<i64>,
    pub lot_size: Option<String>,
    pub year_built: Option<i64>,
    pub property_type: Option<String>,
    pub listing_agent: Option<String>,
    pub days_on_market: Option<i64>,
    pub mls_number: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub neighborhood: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Ordering applied to the `date` column of dated records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, poem_openapi::Enum)]
#[serde(rename_all = "lowercase")]
#[oai(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sea_order(self) -> sea_orm::Order {
        match self {
            Self::Asc => sea_orm::Order::Asc,
            Self::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Filter for software listings
///
/// Both substring filters are optional and combined with AND. Blank strings
/// are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct SoftwareFilter {
    pub inventory: Option<String>,
    pub name: Option<String>,
    pub sort: SortOrder,
}

/// Filter for maintenance listings
#[derive(Debug, Clone, Default)]
pub struct MaintenanceFilter {
    pub inventory: Option<String>,
    pub sort: SortOrder,
}

/// Drop blank search terms so `Some("")` behaves like no filter
pub fn non_blank(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}

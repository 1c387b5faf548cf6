//! Built-in dataset catalog.
//!
//! The set of datasets is fixed at compile time; declaration order drives
//! the processing order of a full run.

/// One configured dataset: internal key plus its Kaggle coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Short internal key, also the output subdirectory name.
    pub id: &'static str,
    /// Kaggle catalog identifier (`owner/slug`).
    pub remote_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The four datasets used by the StockWise prototype.
pub static BUILTIN: [DatasetSpec; 4] = [
    DatasetSpec {
        id: "ecommerce_sales",
        remote_id: "prasad22/retail-transactions-dataset",
        name: "E-commerce Sales Data",
        description: "Retail transaction data for e-commerce analysis",
    },
    DatasetSpec {
        id: "inventory_mgmt",
        remote_id: "vinothkannaece/sales-dataset",
        name: "Inventory Management Data",
        description: "Sales data optimized for inventory management",
    },
    DatasetSpec {
        id: "seasonal_trends",
        remote_id: "crawford/weekly-sales-transactions",
        name: "Seasonal Trends Data",
        description: "Weekly sales transactions showing seasonal patterns",
    },
    DatasetSpec {
        id: "customer_behavior",
        remote_id: "srinivasav22/sales-transactions-dataset",
        name: "Customer Behavior Data",
        description: "Sales transactions for customer behavior analysis",
    },
];

/// Look up a dataset by its internal key.
pub fn find(id: &str) -> Option<&'static DatasetSpec> {
    BUILTIN.iter().find(|d| d.id == id)
}

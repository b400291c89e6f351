//! Portfolio categories as the dashboard groups them.

use serde::{Deserialize, Serialize};

/// A dashboard category. Investment categories hold assets, the rest hold costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Stocks,
    Properties,
    MutualFunds,
    #[serde(rename = "fd")]
    FixedDeposits,
    Gold,
    Silver,
    PostRetirement,
    Marriage,
    Education,
    Bills,
    Loans,
    PersonalExpense,
    Insurance,
}

impl Category {
    pub const INVESTMENTS: [Category; 7] = [
        Category::Stocks,
        Category::Properties,
        Category::MutualFunds,
        Category::FixedDeposits,
        Category::Gold,
        Category::Silver,
        Category::PostRetirement,
    ];

    pub const LIFE_EVENTS: [Category; 6] = [
        Category::Marriage,
        Category::Education,
        Category::Bills,
        Category::Loans,
        Category::PersonalExpense,
        Category::Insurance,
    ];

    /// Key used by the stored snapshot document.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Stocks => "stocks",
            Category::Properties => "properties",
            Category::MutualFunds => "mutualFunds",
            Category::FixedDeposits => "fd",
            Category::Gold => "gold",
            Category::Silver => "silver",
            Category::PostRetirement => "postRetirement",
            Category::Marriage => "marriage",
            Category::Education => "education",
            Category::Bills => "bills",
            Category::Loans => "loans",
            Category::PersonalExpense => "personalExpense",
            Category::Insurance => "insurance",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Stocks => "Stocks & ETFs",
            Category::Properties => "Properties",
            Category::MutualFunds => "Mutual Funds",
            Category::FixedDeposits => "FD (Bank)",
            Category::Gold => "Gold",
            Category::Silver => "Silver",
            Category::PostRetirement => "Post-retirement Living",
            Category::Marriage => "Social Gatherings",
            Category::Education => "Education",
            Category::Bills => "Household Bills",
            Category::Loans => "Loans",
            Category::PersonalExpense => "Personal Expense",
            Category::Insurance => "Insurance",
        }
    }

    pub fn is_investment(&self) -> bool {
        Self::INVESTMENTS.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serialization() {
        for category in Category::INVESTMENTS.iter().chain(Category::LIFE_EVENTS.iter()) {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.key());
        }
    }

    #[test]
    fn test_investment_split() {
        assert!(Category::Gold.is_investment());
        assert!(!Category::Loans.is_investment());
    }
}

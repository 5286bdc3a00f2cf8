//! Career Explorer: search, industry filter and sorting over the catalogue.
//!
//! Filters apply first (search, then industry), then the sort. Sorting is
//! stable, so careers with equal keys keep catalogue order.

use std::cmp::Reverse;

use serde::Deserialize;

use crate::catalog::careers::ALL_INDUSTRIES;
use crate::models::career::Career;

/// Sort order requested by the client. Every order is descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Match,
    Salary,
    Growth,
}

impl SortKey {
    /// Unknown names yield `None`, which leaves catalogue order untouched.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "match" => Some(SortKey::Match),
            "salary" => Some(SortKey::Salary),
            "growth" => Some(SortKey::Growth),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreQuery {
    pub search: Option<String>,
    pub industry: Option<String>,
    /// Defaults to "match" when absent.
    pub sort_by: Option<String>,
}

pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<Career>) -> Self {
        CareerCatalog { careers }
    }

    pub fn find(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.id == id)
    }

    pub fn explore(&self, query: &ExploreQuery) -> Vec<Career> {
        let search = query
            .search
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let industry = query
            .industry
            .as_deref()
            .filter(|i| !i.is_empty() && *i != ALL_INDUSTRIES);

        let mut careers: Vec<Career> = self
            .careers
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&search)
                    || c.description.to_lowercase().contains(&search)
            })
            .filter(|c| industry.map_or(true, |i| c.industry == i))
            .cloned()
            .collect();

        match SortKey::parse(query.sort_by.as_deref().unwrap_or("match")) {
            Some(SortKey::Match) => careers.sort_by_key(|c| Reverse(c.match_percentage)),
            Some(SortKey::Salary) => {
                careers.sort_by_key(|c| Reverse(salary_sort_key(&c.average_salary)))
            }
            Some(SortKey::Growth) => careers.sort_by(|a, b| {
                growth_sort_key(&b.growth_rate).total_cmp(&growth_sort_key(&a.growth_rate))
            }),
            None => {}
        }

        careers
    }
}

/// All digits of the salary string read as one number, so
/// "$75,000 - $120,000" becomes 75000120000. Ranges therefore order by
/// their lower bound first. No digits sorts as zero.
fn salary_sort_key(salary: &str) -> u64 {
    let digits: String = salary.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Leading numeric value of a growth string such as "13%" or "4.5% yearly".
fn growth_sort_key(growth: &str) -> f64 {
    let number: String = growth
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.parse().unwrap_or(0.0)
}

//! Each function evaluates every company exactly once. Results keyed by name
//! assume names are unique; a later company silently replaces an earlier one
//! with the same name.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::instrument;

use crate::{Company, Possessions};

/// The outcome of evaluating one company, with its requirement rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    /// Whether the candidate can work at the company.
    pub eligible: bool,
    /// The company's requirement description.
    pub requirement_description: String,
}

impl EligibilityResult {
    /// Evaluate a single company.
    #[must_use]
    pub fn evaluate(company: &Company, possessions: &Possessions) -> Self {
        Self {
            eligible: company.can_work(possessions),
            requirement_description: company.requirement_description(),
        }
    }
}

/// Map each company name to whether the candidate can work there.
#[instrument(level = "debug", skip_all, fields(companies = companies.len()))]
#[must_use]
pub fn evaluate_eligibility(
    companies: &[Company],
    possessions: &Possessions,
) -> BTreeMap<String, bool> {
    companies
        .iter()
        .map(|company| (company.name().to_string(), company.can_work(possessions)))
        .collect()
}

/// The companies the candidate can work at, in input order.
#[must_use]
pub fn eligible_companies<'a>(
    companies: &'a [Company],
    possessions: &Possessions,
) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|company| company.can_work(possessions))
        .collect()
}

/// The companies the candidate cannot work at, in input order.
#[must_use]
pub fn ineligible_companies<'a>(
    companies: &'a [Company],
    possessions: &Possessions,
) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|company| !company.can_work(possessions))
        .collect()
}

/// Map each company name to its eligibility and requirement description.
#[instrument(level = "debug", skip_all, fields(companies = companies.len()))]
#[must_use]
pub fn detailed_eligibility(
    companies: &[Company],
    possessions: &Possessions,
) -> BTreeMap<String, EligibilityResult> {
    let results: BTreeMap<_, _> = companies
        .iter()
        .map(|company| {
            (
                company.name().to_string(),
                EligibilityResult::evaluate(company, possessions),
            )
        })
        .collect();

    tracing::debug!(
        eligible = results.values().filter(|result| result.eligible).count(),
        "evaluated {} companies",
        results.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Requirement;

    fn leaf(item: &str) -> Requirement {
        Requirement::simple(item).unwrap()
    }

    fn companies() -> Vec<Company> {
        vec![
            Company::new(
                "Company A",
                Some(
                    Requirement::all(vec![
                        Requirement::any(vec![leaf("apartment"), leaf("house")]).unwrap(),
                        leaf("property insurance"),
                    ])
                    .unwrap(),
                ),
            )
            .unwrap(),
            Company::new(
                "Company F",
                Some(
                    Requirement::all(vec![
                        Requirement::any(vec![leaf("scooter"), leaf("bike"), leaf("motorcycle")])
                            .unwrap(),
                        leaf("driving license"),
                        leaf("motorcycle insurance"),
                    ])
                    .unwrap(),
                ),
            )
            .unwrap(),
            Company::new("Company J", None).unwrap(),
            Company::new("Company K", Some(leaf("PayPal account"))).unwrap(),
        ]
    }

    fn bike_and_license() -> Possessions {
        ["bike", "driving license"].into_iter().collect()
    }

    fn names<'a>(companies: &[&'a Company]) -> Vec<&'a str> {
        companies.iter().map(|company| company.name()).collect()
    }

    #[test]
    fn evaluates_every_company() {
        let results = evaluate_eligibility(&companies(), &bike_and_license());

        assert_eq!(results.len(), 4);
        assert!(results["Company J"]);
        assert!(!results["Company F"]);
        assert!(!results["Company A"]);
        assert!(!results["Company K"]);
    }

    #[test]
    fn empty_possessions_only_pass_unconditional_companies() {
        let results = evaluate_eligibility(&companies(), &Possessions::new());

        assert!(results["Company J"]);
        assert!(!results["Company A"]);
        assert!(!results["Company F"]);
        assert!(!results["Company K"]);
    }

    #[test]
    fn complex_requirement_passes_with_insurance() {
        let possessions: Possessions = ["bike", "driving license", "motorcycle insurance"]
            .into_iter()
            .collect();
        let results = evaluate_eligibility(&companies(), &possessions);
        assert!(results["Company F"]);
    }

    #[test]
    fn partitions_companies() {
        let companies = companies();
        let possessions = bike_and_license();

        assert_eq!(
            names(&eligible_companies(&companies, &possessions)),
            vec!["Company J"]
        );
        assert_eq!(
            names(&ineligible_companies(&companies, &possessions)),
            vec!["Company A", "Company F", "Company K"]
        );
    }

    #[test]
    fn detailed_results_carry_descriptions() {
        let results = detailed_eligibility(&companies(), &bike_and_license());

        assert_eq!(results.len(), 4);
        assert_eq!(
            results["Company J"],
            EligibilityResult {
                eligible: true,
                requirement_description: "No requirements".to_string(),
            }
        );
        let company_a = &results["Company A"];
        assert!(!company_a.eligible);
        assert!(company_a.requirement_description.contains("property insurance"));
    }

    #[test]
    fn duplicate_names_keep_the_last_company() {
        let companies = vec![
            Company::new("Acme", Some(leaf("garage"))).unwrap(),
            Company::new("Acme", None).unwrap(),
        ];
        let results = evaluate_eligibility(&companies, &Possessions::new());
        assert_eq!(results.len(), 1);
        assert!(results["Acme"]);
    }

    #[test]
    fn no_companies_yields_empty_map() {
        assert!(evaluate_eligibility(&[], &bike_and_license()).is_empty());
        assert!(detailed_eligibility(&[], &bike_and_license()).is_empty());
    }
}

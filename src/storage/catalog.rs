use std::{io::Read, path::Path, str::FromStr};

use serde::Deserialize;

use super::LoadError;
use crate::{Company, InvalidInput, Operator, Requirement};

/// A list of companies loaded from YAML.
///
/// ```yaml
/// _version: "1"
/// companies:
///   - name: Company A
///     requires:
///       operator: AND
///       children:
///         - operator: OR
///           children: [apartment, house]
///         - property insurance
///   - name: Company J
/// ```
///
/// A requirement is either a plain string (a single item) or a map with an
/// `operator` (`AND` or `OR`) and a list of `children`. A company without
/// `requires` accepts every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    companies: Vec<Company>,
}

impl Catalog {
    /// Reads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, is not
    /// valid YAML, or describes an invalid company.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let catalog = Self::from_reader(super::open(path)?)?;
        tracing::debug!(
            "Loaded {} companies from {}",
            catalog.companies.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Reads a catalog from any YAML source.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid YAML or describes an
    /// invalid company.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let raw: CatalogVersion = serde_yaml::from_reader(reader)?;
        raw.try_into()
    }

    /// The companies, in file order.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Consume the catalog, returning its companies.
    #[must_use]
    pub fn into_companies(self) -> Vec<Company> {
        self.companies
    }
}

impl From<Vec<Company>> for Catalog {
    fn from(companies: Vec<Company>) -> Self {
        Self { companies }
    }
}

impl FromStr for Catalog {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: CatalogVersion = serde_yaml::from_str(s)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum CatalogVersion {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        companies: Vec<RawCompany>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCompany {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    requires: Option<RawRequirement>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRequirement {
    Item(String),
    Node(RawNode),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNode {
    #[serde(default)]
    operator: Option<String>,
    #[serde(default)]
    children: Option<Vec<Option<RawRequirement>>>,
}

impl TryFrom<CatalogVersion> for Catalog {
    type Error = LoadError;

    fn try_from(version: CatalogVersion) -> Result<Self, Self::Error> {
        let CatalogVersion::V1 { companies } = version;

        let companies = companies
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Company::try_from(raw).map_err(|source| LoadError::InvalidCompany { index, source })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { companies })
    }
}

impl TryFrom<RawCompany> for Company {
    type Error = InvalidInput;

    fn try_from(raw: RawCompany) -> Result<Self, Self::Error> {
        let RawCompany { name, requires } = raw;
        let name = name.ok_or(InvalidInput::EmptyCompanyName)?;
        let requirement = requires.map(Requirement::try_from).transpose()?;
        Self::new(&name, requirement)
    }
}

impl TryFrom<RawRequirement> for Requirement {
    type Error = InvalidInput;

    fn try_from(raw: RawRequirement) -> Result<Self, Self::Error> {
        match raw {
            RawRequirement::Item(item) => Self::simple(&item),
            RawRequirement::Node(RawNode { operator, children }) => {
                let operator: Operator = operator.ok_or(InvalidInput::MissingOperator)?.parse()?;
                let children = children
                    .ok_or(InvalidInput::NoChildren)?
                    .into_iter()
                    .enumerate()
                    .map(|(index, child)| {
                        child
                            .ok_or(InvalidInput::MissingChild { index })
                            .and_then(Self::try_from)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Self::composite(operator, children)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Possessions;

    const CATALOG: &str = r#"
_version: "1"
companies:
  - name: Company A
    requires:
      operator: AND
      children:
        - operator: or
          children: [apartment, house]
        - Property Insurance
  - name: "  Company J  "
  - name: Company K
    requires: PayPal account
"#;

    fn invalid_company(yaml: &str) -> (usize, InvalidInput) {
        match yaml.parse::<Catalog>().unwrap_err() {
            LoadError::InvalidCompany { index, source } => (index, source),
            other => panic!("expected an invalid company, got {other:?}"),
        }
    }

    #[test]
    fn parses_companies_in_order() {
        let catalog: Catalog = CATALOG.parse().unwrap();
        let names: Vec<_> = catalog.companies().iter().map(Company::name).collect();
        assert_eq!(names, vec!["Company A", "Company J", "Company K"]);
    }

    #[test]
    fn parses_nested_requirements() {
        let catalog: Catalog = CATALOG.parse().unwrap();
        let company_a = &catalog.companies()[0];

        assert_eq!(
            company_a.requirement_description(),
            "((apartment OR house) AND property insurance)"
        );
        assert!(company_a.can_work(&["house", "property insurance"].into_iter().collect()));
        assert!(!company_a.can_work(&["house"].into_iter().collect()));
    }

    #[test]
    fn company_without_requirement_accepts_anyone() {
        let catalog: Catalog = CATALOG.parse().unwrap();
        let company_j = &catalog.companies()[1];
        assert!(company_j.requirement().is_none());
        assert!(company_j.can_work(&Possessions::new()));
    }

    #[test]
    fn string_requirement_is_a_single_item() {
        let catalog: Catalog = CATALOG.parse().unwrap();
        assert_eq!(
            catalog.companies()[2].requirement(),
            Some(&Requirement::simple("paypal account").unwrap())
        );
    }

    #[test]
    fn empty_catalog_has_no_companies() {
        let catalog: Catalog = r#"_version: "1""#.parse().unwrap();
        assert!(catalog.companies().is_empty());
    }

    #[test]
    fn missing_name_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: ok\n  - requires: bike\n";
        assert_eq!(invalid_company(yaml), (1, InvalidInput::EmptyCompanyName));
    }

    #[test]
    fn blank_name_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: \"   \"\n";
        assert_eq!(invalid_company(yaml), (0, InvalidInput::EmptyCompanyName));
    }

    #[test]
    fn missing_operator_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      children: [bike]\n";
        assert_eq!(invalid_company(yaml), (0, InvalidInput::MissingOperator));
    }

    #[test]
    fn missing_children_are_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      operator: AND\n";
        assert_eq!(invalid_company(yaml), (0, InvalidInput::NoChildren));
    }

    #[test]
    fn empty_children_are_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      operator: OR\n      children: []\n";
        assert_eq!(invalid_company(yaml), (0, InvalidInput::NoChildren));
    }

    #[test]
    fn null_child_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      operator: OR\n      children: [bike, ~]\n";
        assert_eq!(
            invalid_company(yaml),
            (0, InvalidInput::MissingChild { index: 1 })
        );
    }

    #[test]
    fn blank_item_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      operator: AND\n      children: [bike, \"  \"]\n";
        assert_eq!(invalid_company(yaml), (0, InvalidInput::EmptyItem));
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requires:\n      operator: XOR\n      children: [bike]\n";
        assert_eq!(
            invalid_company(yaml),
            (0, InvalidInput::UnknownOperator("XOR".to_string()))
        );
    }

    #[test]
    fn nested_bad_child_is_reported() {
        let yaml = r#"
_version: "1"
companies:
  - name: Fine
  - name: Broken
    requires:
      operator: AND
      children:
        - driving license
        - operator: OR
          children: [~, bike]
"#;
        assert_eq!(
            invalid_company(yaml),
            (1, InvalidInput::MissingChild { index: 0 })
        );
    }

    #[test]
    fn nested_unknown_operator_is_reported() {
        let yaml = r#"
_version: "1"
companies:
  - name: Broken
    requires:
      operator: AND
      children:
        - operator: NOR
          children: [bike]
"#;
        assert_eq!(
            invalid_company(yaml),
            (0, InvalidInput::UnknownOperator("NOR".to_string()))
        );
    }

    #[test]
    fn unknown_fields_are_malformed() {
        let yaml = "_version: \"1\"\ncompanies:\n  - name: X\n    requirez: bike\n";
        assert!(matches!(
            yaml.parse::<Catalog>().unwrap_err(),
            LoadError::Yaml(_)
        ));
    }

    #[test]
    fn demo_catalog_matches_sample() {
        let catalog: Catalog = include_str!("../../demos/companies.yaml").parse().unwrap();
        assert_eq!(catalog, Catalog::from(crate::sample::companies().unwrap()));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();

        assert_eq!(catalog.into_companies().len(), 3);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.yaml");

        assert!(matches!(
            Catalog::load(&missing).unwrap_err(),
            LoadError::NotFound(path) if path == missing
        ));
    }
}

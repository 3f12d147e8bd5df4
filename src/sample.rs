//! Used by `elig` when no catalog file is configured.

use crate::{Company, InvalidInput, Requirement};

fn item(name: &str) -> Result<Requirement, InvalidInput> {
    Requirement::simple(name)
}

fn items(names: &[&str]) -> Result<Vec<Requirement>, InvalidInput> {
    names.iter().copied().map(item).collect()
}

/// The demonstration companies A to K.
///
/// # Errors
///
/// Never fails in practice; construction goes through the validating
/// constructors and their errors are propagated.
pub fn companies() -> Result<Vec<Company>, InvalidInput> {
    Ok(vec![
        // an apartment or house, and property insurance
        Company::new(
            "Company A",
            Some(Requirement::all(vec![
                Requirement::any(items(&["apartment", "house"])?)?,
                item("property insurance")?,
            ])?),
        )?,
        Company::new(
            "Company B",
            Some(Requirement::all(vec![
                Requirement::any(items(&["5 door car", "4 door car"])?)?,
                item("driving license")?,
                item("car insurance")?,
            ])?),
        )?,
        Company::new(
            "Company C",
            Some(Requirement::all(items(&[
                "social security number",
                "work permit",
            ])?)?),
        )?,
        Company::new(
            "Company D",
            Some(Requirement::any(items(&["apartment", "flat", "house"])?)?),
        )?,
        Company::new(
            "Company E",
            Some(Requirement::all(vec![
                item("driving license")?,
                Requirement::any(items(&[
                    "2 door car",
                    "3 door car",
                    "4 door car",
                    "5 door car",
                ])?)?,
            ])?),
        )?,
        // any two-wheeler, plus a license and insurance
        Company::new(
            "Company F",
            Some(Requirement::all(vec![
                Requirement::any(items(&["scooter", "bike", "motorcycle"])?)?,
                item("driving license")?,
                item("motorcycle insurance")?,
            ])?),
        )?,
        Company::new(
            "Company G",
            Some(Requirement::all(items(&[
                "massage qualification certificate",
                "liability insurance",
            ])?)?),
        )?,
        Company::new(
            "Company H",
            Some(Requirement::any(items(&["storage place", "garage"])?)?),
        )?,
        Company::new("Company J", None)?,
        Company::new("Company K", Some(item("PayPal account")?))?,
    ])
}

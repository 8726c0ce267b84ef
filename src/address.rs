// Postal addresses.
//
// An `Address` is built with `AddressBuilder`, either optimistically
// (`build`, no checks, no network) or validated against a country's
// address format (`build_valid`). Country formats come from a
// `CountryFormatSource`; the production source is the HTTP client in
// `api`, tests plug in fixed data.

use crate::error::{CoaError, Result};
use regex::Regex;
use serde::Deserialize;

/// Turns the two free-form street lines into the list stored on an
/// `Address`. Line 1 is mandatory, line 2 is kept only when non-empty.
pub fn normalize_lines(line1: &str, line2: &str) -> Result<Vec<String>> {
    if line1.is_empty() {
        return Err(CoaError::Validation(
            "Address format invalid: the first address line is empty".into(),
        ));
    }
    if line2.is_empty() {
        Ok(vec![line1.to_string()])
    } else {
        Ok(vec![line1.to_string(), line2.to_string()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub country: String,
    pub name: String,
    pub street_address: Vec<String>,
    pub locality: String,
    pub administrative_area: String,
    pub post_code: String,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn country(mut self, country: &str) -> Self {
        self.address.country = country.trim().to_uppercase();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.address.name = name.to_string();
        self
    }

    pub fn street_address(mut self, lines: Vec<String>) -> Self {
        self.address.street_address = lines;
        self
    }

    pub fn locality(mut self, locality: &str) -> Self {
        self.address.locality = locality.to_string();
        self
    }

    pub fn administrative_area(mut self, area: &str) -> Self {
        self.address.administrative_area = area.to_string();
        self
    }

    pub fn post_code(mut self, code: &str) -> Self {
        self.address.post_code = code.to_string();
        self
    }

    /// Returns the address as given, without consulting any service.
    pub fn build(self) -> Address {
        self.address
    }

    /// Checks the address against its country's format. On success the
    /// returned address is normalised (upper-cased where the country asks
    /// for it, administrative area replaced by its canonical key).
    pub fn build_valid<S: CountryFormatSource + ?Sized>(self, source: &S) -> Result<Address> {
        let mut address = self.address;
        if address.country.is_empty() {
            return Err(CoaError::AddressValidation("country code is required".into()));
        }

        let format = source.country_format(&address.country)?;
        if format.key.is_none() {
            return Err(CoaError::AddressValidation(format!(
                "unknown country code {}",
                address.country
            )));
        }

        let problems = check_against(&mut address, &format)?;
        if problems.is_empty() {
            log::info!("address validated for country {}", address.country);
            Ok(address)
        } else {
            Err(CoaError::AddressValidation(problems.join("; ")))
        }
    }
}

/// Per-country address rules as published by the i18n address metadata
/// service. Absent fields fall back to the service's world-wide defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CountryFormat {
    pub key: Option<String>,
    pub name: Option<String>,
    pub fmt: Option<String>,
    pub require: Option<String>,
    pub upper: Option<String>,
    pub zip: Option<String>,
    pub sub_keys: Option<String>,
    pub sub_names: Option<String>,
    /// Latin-script names, sent for countries whose `sub_names` are not.
    pub sub_lnames: Option<String>,
}

const DEFAULT_FMT: &str = "%N%n%O%n%A%n%C";
const DEFAULT_REQUIRE: &str = "AC";

impl CountryFormat {
    fn fmt(&self) -> &str {
        self.fmt.as_deref().unwrap_or(DEFAULT_FMT)
    }

    fn require(&self) -> &str {
        self.require.as_deref().unwrap_or(DEFAULT_REQUIRE)
    }

    fn upper(&self) -> &str {
        self.upper.as_deref().unwrap_or("")
    }

    fn uses(&self, field: char) -> bool {
        self.fmt().contains(&format!("%{field}"))
    }

    /// Looks up an administrative area by key, local name or Latin name,
    /// ignoring case, and returns the canonical key.
    fn find_subdivision(&self, area: &str) -> Option<String> {
        let keys: Vec<&str> = self.sub_keys.as_deref()?.split('~').collect();
        let split = |list: &Option<String>| -> Vec<String> {
            list.as_deref()
                .map(|n| n.split('~').map(str::to_string).collect())
                .unwrap_or_default()
        };
        let names = split(&self.sub_names);
        let lnames = split(&self.sub_lnames);
        let same = |candidate: Option<&String>| {
            candidate.is_some_and(|n| n.to_lowercase() == area.to_lowercase())
        };

        keys.iter()
            .enumerate()
            .find(|(i, key)| {
                key.to_lowercase() == area.to_lowercase()
                    || same(names.get(*i))
                    || same(lnames.get(*i))
            })
            .map(|(_, key)| key.to_string())
    }
}

/// Something that knows the address format of a country, keyed by its
/// ISO 3166-1 alpha-2 code.
pub trait CountryFormatSource {
    fn country_format(&self, country: &str) -> Result<CountryFormat>;
}

fn field_label(field: char) -> &'static str {
    match field {
        'A' => "street address",
        'C' => "city",
        'S' => "state",
        'Z' => "postal code",
        'N' => "name",
        _ => "field",
    }
}

fn field_value(address: &Address, field: char) -> Option<bool> {
    match field {
        'A' => Some(address.street_address.iter().any(|l| !l.trim().is_empty())),
        'C' => Some(!address.locality.trim().is_empty()),
        'S' => Some(!address.administrative_area.trim().is_empty()),
        'Z' => Some(!address.post_code.trim().is_empty()),
        'N' => Some(!address.name.trim().is_empty()),
        // organisation, dependent locality, sorting code are not collected
        _ => None,
    }
}

fn check_against(address: &mut Address, format: &CountryFormat) -> Result<Vec<String>> {
    let mut problems = Vec::new();
    let country = address.country.clone();

    for field in format.require().chars() {
        if field_value(address, field) == Some(false) {
            problems.push(format!("{} is required in {}", field_label(field), country));
        }
    }

    for field in ['C', 'S', 'Z'] {
        if field_value(address, field) == Some(true) && !format.uses(field) {
            problems.push(format!("{} is not used in {}", field_label(field), country));
        }
    }

    // every collected field the country lists in `upper`
    for field in format.upper().chars() {
        match field {
            'A' => {
                for line in &mut address.street_address {
                    *line = line.to_uppercase();
                }
            }
            'C' => address.locality = address.locality.to_uppercase(),
            'S' => address.administrative_area = address.administrative_area.to_uppercase(),
            'Z' => address.post_code = address.post_code.to_uppercase(),
            'N' => address.name = address.name.to_uppercase(),
            _ => {}
        }
    }

    if let Some(pattern) = format.zip.as_deref() {
        let code = address.post_code.trim();
        if !code.is_empty() {
            let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                CoaError::AddressService(format!("bad postal code pattern for {country}: {e}"))
            })?;
            if !re.is_match(code) {
                problems.push(format!("postal code {code} is not valid in {country}"));
            }
        }
    }

    let area = address.administrative_area.trim().to_string();
    if !area.is_empty() && format.sub_keys.is_some() && format.uses('S') {
        match format.find_subdivision(&area) {
            Some(key) => address.administrative_area = key,
            None => problems.push(format!("state {area} is not known in {country}")),
        }
    }

    Ok(problems)
}

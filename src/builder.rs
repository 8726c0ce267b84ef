// Record builder: the single path both entry modes feed into.
//
// `render-local` fills a `RecordInput` from flags, `wizard` fills it
// from prompts; `build_record` then populates a fresh record in a fixed
// order and resolves the postal address.

use crate::address::{normalize_lines, Address, CountryFormatSource};
use crate::error::Result;
use crate::model::CertificateRecord;

/// Everything the user supplies for one certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInput {
    pub work_title: String,
    pub artist_name: String,
    pub artist_email: String,
    pub artist_wallet: String,
    pub artist_website: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_country: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
}

impl Default for RecordInput {
    fn default() -> Self {
        RecordInput {
            work_title: String::new(),
            artist_name: String::new(),
            artist_email: String::new(),
            artist_wallet: String::new(),
            artist_website: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            address_country: "US".into(),
            address_city: String::new(),
            address_state: String::new(),
            address_zip: String::new(),
        }
    }
}

/// Populates a new record from `input`.
///
/// With `validate_address` set the address is checked through `source`;
/// otherwise it is stored as given and `source` is never called. Any
/// failure aborts the build and no record is returned.
pub fn build_record<S: CountryFormatSource + ?Sized>(
    input: &RecordInput,
    source: &S,
    validate_address: bool,
) -> Result<CertificateRecord> {
    let mut record = CertificateRecord::new();
    record.work_title = input.work_title.clone();

    // this prototype only supports a single person
    let person = record.primary_person_mut();
    person.name = input.artist_name.clone();
    person.email = input.artist_email.clone();
    person.validate_email()?;
    person.set_primary_wallet(&input.artist_wallet);
    person.set_primary_website(&input.artist_website);

    let lines = normalize_lines(&input.address_line1, &input.address_line2)?;
    let builder = Address::builder()
        .country(&input.address_country)
        .name(&input.artist_name)
        .street_address(lines)
        .locality(&input.address_city)
        .administrative_area(&input.address_state)
        .post_code(&input.address_zip);

    let address = if validate_address {
        builder.build_valid(source)?
    } else {
        log::debug!("address validation skipped");
        builder.build()
    };
    record.primary_person_mut().set_primary_address(address);

    Ok(record)
}

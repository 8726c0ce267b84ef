// Output formatting: a verbose, developer-readable dump of the whole
// record (pretty `Debug`), meant for eyeballing rather than parsing.

use crate::model::CertificateRecord;
use std::io::{self, Write};

pub fn dump<W: Write>(record: &CertificateRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "{:#?}", record)?;
    out.flush()
}

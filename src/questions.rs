// Prompt wording used by the wizard, one question per collected field.

pub const WORK_TITLE: &str = "What is the title of this artwork?";
pub const ARTIST_NAME: &str = "What is the name of the artist?";
pub const ARTIST_EMAIL: &str = "What is the email address of the artist?";
pub const ARTIST_WALLET: &str = "What is the ETH wallet address of the artist?";
pub const ARTIST_WEBSITE: &str = "What is the website address of the artist?";

// address
pub const ADDRESS_LINE_1: &str = "What is the first line of the artist's address?";
pub const ADDRESS_LINE_2: &str = "What is the second line of the artist's address? (optional)";
pub const COUNTRY: &str = "In which country does the artist live?";
pub const CITY: &str = "In which city does the artist live?";
pub const STATE: &str = "In which state or province does the artist live?";
pub const ZIP: &str = "In which zip code or postal code does the artist live?";

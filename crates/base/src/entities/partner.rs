pub type PartnerId = String;

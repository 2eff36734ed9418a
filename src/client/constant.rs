pub const SITE_NAME: &str = "LiveryHub";

/// Page size of the public livery listing.
pub const LIVERIES_PER_PAGE: u64 = 20;

//! Choice lists offered by the survey form. The dashboard's fixed tallies
//! use [`USES_REBATES`] and [`PROJECT_SIZE_BUCKETS`] as their keys.

pub const USES_REBATES: [&str; 3] = ["Yes", "Sometimes", "No"];

pub const PROJECT_SIZE_BUCKETS: [&str; 4] =
    ["Under $5k", "$5k–$25k", "$25k–$100k", "Over $100k"];

pub const COMPANY_SIZES: [&str; 5] = ["1", "2-9", "10-50", "51-200", "200+"];

pub const BARRIERS: [&str; 6] = [
    "Cost",
    "Paperwork",
    "Eligibility rules",
    "Slow payouts",
    "Finding programs",
    "Customer interest",
];

pub const WHO_FILES: [&str; 4] = ["Contractor", "Homeowner", "Third-party service", "Nobody"];

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const ENTRIES: &[(&str, &str)] = &[
    ("City", "City"),
    ("Local Time", "Local Time"),
    ("Time Zone", "Time Zone"),
    ("Local", "Local"),
    ("Added city", "Added city"),
    ("is already added", "is already added"),
    ("Removed city", "Removed city"),
    ("not found", "not found"),
    ("Language set to", "Language set to"),
];

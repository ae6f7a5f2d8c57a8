pub const ENTRIES: &[(&str, &str)] = &[
    ("City", "Shahar"),
    ("Local Time", "Mahalliy vaqt"),
    ("Time Zone", "Vaqt zonasi"),
    ("Local", "Mahalliy"),
    ("Added city", "Shahar qoʻshildi"),
    ("is already added", "allaqachon qoʻshilgan"),
    ("Removed city", "Shahar olib tashlandi"),
    ("not found", "topilmadi"),
    ("Language set to", "Til oʻrnatildi"),
];

pub const ENTRIES: &[(&str, &str)] = &[
    ("City", "Город"),
    ("Local Time", "Местное время"),
    ("Time Zone", "Часовой пояс"),
    ("Local", "Местное"),
    ("Added city", "Город добавлен"),
    ("is already added", "уже добавлен"),
    ("Removed city", "Город удален"),
    ("not found", "не найден"),
    ("Language set to", "Язык установлен на"),
];

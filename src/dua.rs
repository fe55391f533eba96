//! Bedtime dua catalog.
//!
//! The catalog is fixed; only the favorite markers are user state, kept in
//! the store by id.

/// One dua with its Arabic text, transliteration, and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dua {
    pub id: &'static str,
    pub title: &'static str,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
}

/// The bedtime duas, in display order.
pub const DUAS: [Dua; 3] = [
    Dua {
        id: "before-sleeping",
        title: "Before sleeping",
        arabic: "\u{628}\u{650}\u{627}\u{633}\u{652}\u{645}\u{650}\u{643}\u{64e} \u{627}\u{644}\u{644}\u{651}\u{64e}\u{647}\u{64f}\u{645}\u{651}\u{64e} \u{623}\u{64e}\u{645}\u{64f}\u{648}\u{62a}\u{64f} \u{648}\u{64e}\u{623}\u{64e}\u{62d}\u{652}\u{64a}\u{64e}\u{627}",
        transliteration: "Bismika Allahumma amutu wa ahya",
        meaning: "In Your name, O Allah, I die and I live.",
    },
    Dua {
        id: "ayat-al-kursi",
        title: "Ayat al-Kursi",
        arabic: "\u{627}\u{644}\u{644}\u{651}\u{64e}\u{647}\u{64f} \u{644}\u{64e}\u{627} \u{625}\u{650}\u{644}\u{64e}\u{670}\u{647}\u{64e} \u{625}\u{650}\u{644}\u{651}\u{64e}\u{627} \u{647}\u{64f}\u{648}\u{64e} \u{627}\u{644}\u{652}\u{62d}\u{64e}\u{64a}\u{651}\u{64f} \u{627}\u{644}\u{652}\u{642}\u{64e}\u{64a}\u{651}\u{64f}\u{648}\u{645}\u{64f}",
        transliteration: "Allahu la ilaha illa Huwa, Al-Hayyul-Qayyum...",
        meaning: "Allah - there is no deity except Him, the Ever-Living, the Sustainer...",
    },
    Dua {
        id: "last-two-baqarah",
        title: "Last two verses of Al-Baqarah",
        arabic: "\u{622}\u{645}\u{64e}\u{646}\u{64e} \u{627}\u{644}\u{631}\u{651}\u{64e}\u{633}\u{64f}\u{648}\u{644}\u{64f} \u{628}\u{650}\u{645}\u{64e}\u{627} \u{623}\u{64f}\u{646}\u{632}\u{650}\u{644}\u{64e} \u{625}\u{650}\u{644}\u{64e}\u{64a}\u{652}\u{647}\u{650} \u{645}\u{650}\u{646} \u{631}\u{651}\u{64e}\u{628}\u{651}\u{650}\u{647}\u{650} \u{648}\u{64e}\u{627}\u{644}\u{652}\u{645}\u{64f}\u{624}\u{652}\u{645}\u{650}\u{646}\u{64f}\u{648}\u{646}\u{64e}",
        transliteration: "Amnar-Rasoolu bimaa unzila ilayhi...",
        meaning: "The Messenger has believed in what was revealed to him from his Lord...",
    },
];

/// Look up a dua by id.
pub fn find_dua(id: &str) -> Option<&'static Dua> {
    DUAS.iter().find(|d| d.id == id)
}

//! The 28 Arabic lunar mansions (manāzil al-qamar).
//!
//! Equal sidereal division of 360/28 = 12°51′26″ starting at sidereal 0°,
//! shifted by the Fagan-Allen ayanamsa (25°00′ in 2019, 50.29″/yr).

use zij_zodiac::{
    DegMin, FAGAN_ALLEN_2019, FixedEpochAyanamsa, Segment, SiderealDivision, ZodiacLabel,
    zodiac_label,
};

/// Names of one mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manzil {
    /// Scholarly transliteration, e.g. `Al-Sharaṭayn`.
    pub transliteration: &'static str,
    /// Arabic script.
    pub arabic: &'static str,
    /// English meaning.
    pub meaning: &'static str,
}

const fn m(transliteration: &'static str, arabic: &'static str, meaning: &'static str) -> Manzil {
    Manzil {
        transliteration,
        arabic,
        meaning,
    }
}

/// The 28 mansions in order from the first point of sidereal Aries.
pub static MANAZIL: [Manzil; 28] = [
    m("Al-Sharaṭayn", "الشرطين", "The Two Signs"),
    m("Al-Buṭayn", "البطين", "The Little Belly"),
    m("Al-Thurayyā", "الثريا", "The Pleiades"),
    m("Al-Dabarān", "الدبران", "The Follower"),
    m("Al-Haqʿa", "الهقعة", "The Circle"),
    m("Al-Hanʿa", "الهنعة", "The Brand"),
    m("Al-Dhirāʿ", "الذراع", "The Forearm"),
    m("Al-Nathra", "النثرة", "The Gap"),
    m("Al-Ṭarf", "الطرف", "The Glance"),
    m("Al-Jabha", "الجبهة", "The Forehead"),
    m("Al-Zubra", "الزبرة", "The Mane"),
    m("Al-Ṣarfa", "الصرفة", "The Changer"),
    m("Al-ʿAwwāʾ", "العواء", "The Howler"),
    m("Al-Simāk", "السماك", "The Unarmed"),
    m("Al-Ghafr", "الغفر", "The Cover"),
    m("Al-Zubānā", "الزبانى", "The Claws"),
    m("Al-Iklīl", "الإكليل", "The Crown"),
    m("Al-Qalb", "القلب", "The Heart"),
    m("Al-Shawla", "الشولة", "The Raised Tail"),
    m("Al-Naʿāʾim", "النعائم", "The Ostriches"),
    m("Al-Balda", "البلدة", "The Empty Place"),
    m("Saʿd al-Dhābiḥ", "سعد الذابح", "The Slaughterer"),
    m("Saʿd Bulaʿ", "سعد بلع", "The Swallower"),
    m("Saʿd al-Suʿūd", "سعد السعود", "Luckiest of the Lucky"),
    m("Saʿd al-Akhbiya", "سعد الأخبية", "The Tents"),
    m("Al-Fargh al-Muqaddam", "الفرغ المقدم", "The Former Spout"),
    m("Al-Fargh al-Muʾakhkhar", "الفرغ المؤخر", "The Latter Spout"),
    m("Baṭn al-Ḥūt", "بطن الحوت", "Belly of the Fish"),
];

/// One mansion with its tropical boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ManzilRow {
    /// 1-based mansion number.
    pub number: u8,
    pub manzil: &'static Manzil,
    pub segment: Segment,
    pub start: ZodiacLabel,
    pub end: ZodiacLabel,
}

/// All 28 mansions for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct ManzilTable {
    pub year: i32,
    pub ayanamsa: FixedEpochAyanamsa,
    /// Ayanamsa applied to every boundary, degrees.
    pub ayanamsa_deg: f64,
    pub rows: Vec<ManzilRow>,
}

impl ManzilTable {
    /// Ayanamsa rounded to the arc-minute.
    pub fn ayanamsa_label(&self) -> DegMin {
        DegMin::from_degrees(self.ayanamsa_deg)
    }
}

/// Tropical boundaries of the manāzil in `year`, Fagan-Allen ayanamsa.
pub fn manzil_table(year: i32) -> ManzilTable {
    manzil_table_with(year, FAGAN_ALLEN_2019)
}

/// Tropical boundaries of the manāzil in `year` under any fixed-epoch ayanamsa.
pub fn manzil_table_with(year: i32, ayanamsa: FixedEpochAyanamsa) -> ManzilTable {
    let aya = ayanamsa.at_year(year as f64);
    tracing::debug!(year, ayanamsa = aya, "generating manzil table");

    let rows = MANAZIL
        .iter()
        .zip(SiderealDivision::MANZIL.segments(aya))
        .map(|(manzil, segment)| ManzilRow {
            number: segment.index as u8 + 1,
            manzil,
            start: zodiac_label(segment.tropical_start),
            end: zodiac_label(segment.tropical_end),
            segment,
        })
        .collect();

    ManzilTable {
        year,
        ayanamsa,
        ayanamsa_deg: aya,
        rows,
    }
}

//! The 28 Chinese lodges (èrshíbā xiù).
//!
//! Each lodge begins at the hour circle of its determinative star. The
//! tropical boundary is that hour circle projected onto the ecliptic of
//! date, so lodge widths are unequal and follow the stars.

use zij_catalog::StarEphemeris;
use zij_frames::mean_obliquity_deg;
use zij_time::Epoch;
use zij_zodiac::{
    DegMin, Dms, ZodiacLabel, boundary_spans, deg_to_dms, ecliptic_offset, hour_circle_longitude,
    zodiac_label,
};

use crate::error::TableError;

/// The four directional palaces, seven lodges each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palace {
    AzureDragon,
    BlackTortoise,
    WhiteTiger,
    VermilionBird,
}

/// All four palaces in lodge order.
pub const ALL_PALACES: [Palace; 4] = [
    Palace::AzureDragon,
    Palace::BlackTortoise,
    Palace::WhiteTiger,
    Palace::VermilionBird,
];

impl Palace {
    /// Palace of a 1-based lodge number (1–7 Dragon, …, 22–28 Bird).
    pub const fn of_lodge(number: u8) -> Palace {
        ALL_PALACES[((number.saturating_sub(1) / 7) % 4) as usize]
    }

    /// English title with direction.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "Eastern Azure Dragon",
            Self::BlackTortoise => "Northern Black Tortoise",
            Self::WhiteTiger => "Western White Tiger",
            Self::VermilionBird => "Southern Vermilion Bird",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::AzureDragon => "東方青龍",
            Self::BlackTortoise => "北方玄武",
            Self::WhiteTiger => "西方白虎",
            Self::VermilionBird => "南方朱雀",
        }
    }

    pub const fn season(self) -> &'static str {
        match self {
            Self::AzureDragon => "Spring",
            Self::BlackTortoise => "Winter",
            Self::WhiteTiger => "Autumn",
            Self::VermilionBird => "Summer",
        }
    }

    /// Inclusive 1-based lodge range.
    pub const fn lodges(self) -> (u8, u8) {
        match self {
            Self::AzureDragon => (1, 7),
            Self::BlackTortoise => (8, 14),
            Self::WhiteTiger => (15, 21),
            Self::VermilionBird => (22, 28),
        }
    }
}

/// One lodge and its determinative star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xiu {
    /// 1-based lodge number.
    pub number: u8,
    pub hanzi: &'static str,
    pub pinyin: &'static str,
    /// English name.
    pub name: &'static str,
    /// Catalog name of the determinative star.
    pub star: &'static str,
    /// Hipparcos number of the determinative star.
    pub hip: u32,
}

impl Xiu {
    pub const fn palace(&self) -> Palace {
        Palace::of_lodge(self.number)
    }
}

const fn x(
    number: u8,
    hanzi: &'static str,
    pinyin: &'static str,
    name: &'static str,
    star: &'static str,
    hip: u32,
) -> Xiu {
    Xiu {
        number,
        hanzi,
        pinyin,
        name,
        star,
        hip,
    }
}

/// The 28 lodges in traditional order from Jiǎo.
#[rustfmt::skip]
pub static XIU: [Xiu; 28] = [
    x(1,  "角", "Jiǎo",  "Horn",             "Spica",            65474),
    x(2,  "亢", "Kàng",  "Neck",             "Kang",             69427),
    x(3,  "氐", "Dǐ",    "Root",             "Zubenelgenubi",    72622),
    x(4,  "房", "Fáng",  "Room",             "Fang",             78265),
    x(5,  "心", "Xīn",   "Heart",            "Alniyat",          80112),
    x(6,  "尾", "Wěi",   "Tail",             "Xamidimura",       82514),
    x(7,  "箕", "Jī",    "Winnowing Basket", "Alnasl",           88635),
    x(8,  "斗", "Dǒu",   "Southern Dipper",  "Phi Sagittarii",   92041),
    x(9,  "牛", "Niú",   "Ox",               "Dabih",            100345),
    x(10, "女", "Nǚ",    "Girl",             "Albali",           102618),
    x(11, "虛", "Xū",    "Emptiness",        "Sadalsuud",        106278),
    x(12, "危", "Wēi",   "Rooftop",          "Sadalmelik",       109074),
    x(13, "室", "Shì",   "Encampment",       "Markab",           113963),
    x(14, "壁", "Bì",    "Wall",             "Algenib",          1067),
    x(15, "奎", "Kuí",   "Legs",             "Eta Andromedae",   4463),
    x(16, "婁", "Lóu",   "Bond",             "Sheratan",         8903),
    x(17, "胃", "Wèi",   "Stomach",          "35 Arietis",       12719),
    x(18, "昴", "Mǎo",   "Hairy Head",       "Electra",          17499),
    x(19, "畢", "Bì",    "Net",              "Ain",              20889),
    x(20, "觜", "Zī",    "Turtle Beak",      "Meissa",           26207),
    x(21, "參", "Shēn",  "Three Stars",      "Alnitak",          26727),
    x(22, "井", "Jǐng",  "Well",             "Tejat",            30343),
    x(23, "鬼", "Guǐ",   "Ghost",            "Theta Cancri",     41822),
    x(24, "柳", "Liǔ",   "Willow",           "Delta Hydrae",     42313),
    x(25, "星", "Xīng",  "Star",             "Alphard",          46390),
    x(26, "張", "Zhāng", "Extended Net",     "Upsilon-1 Hydrae", 48356),
    x(27, "翼", "Yì",    "Wings",            "Alkes",            53740),
    x(28, "軫", "Zhěn",  "Chariot",          "Gienah",           59803),
];

/// One lodge with its projected boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct XiuRow {
    pub xiu: &'static Xiu,
    /// Determinative star's right ascension of date, degrees.
    pub ra_deg: f64,
    /// Hour circle projected onto the ecliptic: the lodge's tropical start.
    pub projected_deg: f64,
    /// The star's own ecliptic longitude of date.
    pub direct_deg: f64,
    /// Distance to the next lodge's boundary, degrees.
    pub span_deg: f64,
    /// Projected minus direct, wrapped to (−180, 180].
    pub delta_deg: f64,
}

impl XiuRow {
    pub fn projected_label(&self) -> ZodiacLabel {
        zodiac_label(self.projected_deg)
    }

    pub fn direct_label(&self) -> ZodiacLabel {
        zodiac_label(self.direct_deg)
    }

    pub fn span_label(&self) -> DegMin {
        DegMin::from_degrees(self.span_deg)
    }
}

/// All 28 lodges for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct XiuTable {
    pub year: i32,
    /// Mean obliquity of date, degrees.
    pub obliquity_deg: f64,
    pub rows: Vec<XiuRow>,
}

impl XiuTable {
    pub fn obliquity_dms(&self) -> Dms {
        deg_to_dms(self.obliquity_deg)
    }

    /// Rows of one palace, in lodge order.
    pub fn palace_rows(&self, palace: Palace) -> impl Iterator<Item = &XiuRow> {
        self.rows.iter().filter(move |r| r.xiu.palace() == palace)
    }
}

/// Lodge boundaries in `year` by hour-circle projection of the
/// determinative stars, at 1 January 0h TT.
///
/// Fails if any determinative star is missing from `ephem`.
pub fn xiu_table<E: StarEphemeris + ?Sized>(ephem: &E, year: i32) -> Result<XiuTable, TableError> {
    let epoch = Epoch::new_year(year);
    let obliquity_deg = mean_obliquity_deg(epoch.centuries());
    let obliquity_rad = obliquity_deg.to_radians();
    tracing::debug!(year, obliquity = obliquity_deg, "generating xiu table");

    let mut rows = Vec::with_capacity(XIU.len());
    for xiu in &XIU {
        let pos = ephem.position(xiu.star, epoch)?;
        let projected = hour_circle_longitude(pos.ra_rad(), obliquity_rad);
        tracing::trace!(
            lodge = xiu.number,
            star = xiu.star,
            ra = pos.ra_deg,
            projected,
            "projected hour circle"
        );
        rows.push(XiuRow {
            xiu,
            ra_deg: pos.ra_deg,
            projected_deg: projected,
            direct_deg: pos.ecl_lon_deg,
            span_deg: 0.0,
            delta_deg: ecliptic_offset(projected, pos.ecl_lon_deg),
        });
    }

    let boundaries: Vec<f64> = rows.iter().map(|r| r.projected_deg).collect();
    for (row, span) in rows.iter_mut().zip(boundary_spans(&boundaries)) {
        row.span_deg = span;
    }

    Ok(XiuTable {
        year,
        obliquity_deg,
        rows,
    })
}

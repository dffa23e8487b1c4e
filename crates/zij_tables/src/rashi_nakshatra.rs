//! The 12 rāśi and 27 nakṣatra under the Lahiri (Chitrapaksha) ayanamsa.
//!
//! The ayanamsa is derived from Spica's tropical longitude of date, Spica
//! being fixed at 0° sidereal Libra.

use zij_catalog::StarEphemeris;
use zij_time::Epoch;
use zij_zodiac::{
    DegMin, LAHIRI_SPICA, Segment, Sign, SiderealDivision, StarAnchor, ZodiacLabel, zodiac_label,
};

use crate::error::TableError;
use crate::planet::Planet;

/// Names and ruler of one rāśi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rashi {
    /// IAST name, e.g. `Meṣa`.
    pub name: &'static str,
    pub devanagari: &'static str,
    /// The tropical sign of the same name.
    pub western: Sign,
    pub ruler: Planet,
}

/// Names, ruler and meaning of one nakṣatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nakshatra {
    /// IAST name, e.g. `Aśvinī`.
    pub name: &'static str,
    pub devanagari: &'static str,
    pub ruler: Planet,
    pub meaning: &'static str,
}

const fn r(
    name: &'static str,
    devanagari: &'static str,
    western: Sign,
    ruler: Planet,
) -> Rashi {
    Rashi {
        name,
        devanagari,
        western,
        ruler,
    }
}

/// The 12 rāśi from Meṣa.
pub static RASHIS: [Rashi; 12] = [
    r("Meṣa", "मेष", Sign::Aries, Planet::Mars),
    r("Vṛṣabha", "वृषभ", Sign::Taurus, Planet::Venus),
    r("Mithuna", "मिथुन", Sign::Gemini, Planet::Mercury),
    r("Karka", "कर्क", Sign::Cancer, Planet::Moon),
    r("Siṃha", "सिंह", Sign::Leo, Planet::Sun),
    r("Kanyā", "कन्या", Sign::Virgo, Planet::Mercury),
    r("Tulā", "तुला", Sign::Libra, Planet::Venus),
    r("Vṛścika", "वृश्चिक", Sign::Scorpio, Planet::Mars),
    r("Dhanu", "धनु", Sign::Sagittarius, Planet::Jupiter),
    r("Makara", "मकर", Sign::Capricorn, Planet::Saturn),
    r("Kumbha", "कुम्भ", Sign::Aquarius, Planet::Saturn),
    r("Mīna", "मीन", Sign::Pisces, Planet::Jupiter),
];

const fn n(
    name: &'static str,
    devanagari: &'static str,
    ruler: Planet,
    meaning: &'static str,
) -> Nakshatra {
    Nakshatra {
        name,
        devanagari,
        ruler,
        meaning,
    }
}

/// The 27 nakṣatra from Aśvinī.
pub static NAKSHATRAS: [Nakshatra; 27] = [
    n("Aśvinī", "अश्विनी", Planet::Ketu, "The Physicians"),
    n("Bharaṇī", "भरणी", Planet::Venus, "The Bearer"),
    n("Kṛttikā", "कृत्तिका", Planet::Sun, "The Cutter"),
    n("Rohiṇī", "रोहिणी", Planet::Moon, "The Red One"),
    n("Mṛgaśīrṣā", "मृगशीर्षा", Planet::Mars, "The Deer's Head"),
    n("Ārdrā", "आर्द्रा", Planet::Rahu, "The Moist One"),
    n("Punarvasu", "पुनर्वसु", Planet::Jupiter, "The Restorer"),
    n("Puṣya", "पुष्य", Planet::Saturn, "The Nourisher"),
    n("Āśleṣā", "आश्लेषा", Planet::Mercury, "The Embracer"),
    n("Maghā", "मघा", Planet::Ketu, "The Great One"),
    n("Pūrva Phālgunī", "पूर्व फाल्गुनी", Planet::Venus, "The Former Red One"),
    n("Uttara Phālgunī", "उत्तर फाल्गुनी", Planet::Sun, "The Latter Red One"),
    n("Hasta", "हस्त", Planet::Moon, "The Hand"),
    n("Chitrā", "चित्रा", Planet::Mars, "The Bright One"),
    n("Svātī", "स्वाती", Planet::Rahu, "The Independent"),
    n("Viśākhā", "विशाखा", Planet::Jupiter, "The Forked"),
    n("Anurādhā", "अनुराधा", Planet::Saturn, "The Follower of Rādhā"),
    n("Jyeṣṭhā", "ज्येष्ठा", Planet::Mercury, "The Eldest"),
    n("Mūla", "मूल", Planet::Ketu, "The Root"),
    n("Pūrvāṣāḍhā", "पूर्वाषाढ़ा", Planet::Venus, "The Former Invincible"),
    n("Uttarāṣāḍhā", "उत्तराषाढ़ा", Planet::Sun, "The Latter Invincible"),
    n("Śravaṇa", "श्रवण", Planet::Moon, "The Ear"),
    n("Dhaniṣṭhā", "धनिष्ठा", Planet::Mars, "The Wealthiest"),
    n("Śatabhiṣā", "शतभिषा", Planet::Rahu, "The Hundred Physicians"),
    n("Pūrva Bhādrapadā", "पूर्व भाद्रपदा", Planet::Jupiter, "Former Lucky Feet"),
    n("Uttara Bhādrapadā", "उत्तर भाद्रपदा", Planet::Saturn, "Latter Lucky Feet"),
    n("Revatī", "रेवती", Planet::Mercury, "The Wealthy"),
];

/// One rāśi with its tropical boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct RashiRow {
    pub number: u8,
    pub rashi: &'static Rashi,
    pub segment: Segment,
    pub start: ZodiacLabel,
    pub end: ZodiacLabel,
}

/// One nakṣatra with its tropical boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraRow {
    pub number: u8,
    pub nakshatra: &'static Nakshatra,
    pub segment: Segment,
    pub start: ZodiacLabel,
    pub end: ZodiacLabel,
}

/// Rāśi and nakṣatra boundaries for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct RashiNakshatraTable {
    pub year: i32,
    pub anchor: StarAnchor,
    /// Tropical longitude of the anchor star at 1 January, 0h TT.
    pub anchor_lon_deg: f64,
    pub ayanamsa_deg: f64,
    pub rashis: Vec<RashiRow>,
    pub nakshatras: Vec<NakshatraRow>,
}

impl RashiNakshatraTable {
    pub fn ayanamsa_label(&self) -> DegMin {
        DegMin::from_degrees(self.ayanamsa_deg)
    }

    pub fn anchor_label(&self) -> ZodiacLabel {
        zodiac_label(self.anchor_lon_deg)
    }
}

/// Rāśi and nakṣatra boundaries in `year`, Lahiri ayanamsa from Spica.
pub fn rashi_nakshatra_table<E: StarEphemeris + ?Sized>(
    ephem: &E,
    year: i32,
) -> Result<RashiNakshatraTable, TableError> {
    rashi_nakshatra_table_with(ephem, year, LAHIRI_SPICA)
}

/// Rāśi and nakṣatra boundaries in `year` under any star-anchored ayanamsa.
pub fn rashi_nakshatra_table_with<E: StarEphemeris + ?Sized>(
    ephem: &E,
    year: i32,
    anchor: StarAnchor,
) -> Result<RashiNakshatraTable, TableError> {
    let epoch = Epoch::new_year(year);
    let anchor_lon = ephem.position(anchor.star, epoch)?.ecl_lon_deg;
    let aya = anchor.ayanamsa(anchor_lon);
    tracing::debug!(
        year,
        star = anchor.star,
        star_lon = anchor_lon,
        ayanamsa = aya,
        "generating rashi/nakshatra table"
    );

    let rashis = RASHIS
        .iter()
        .zip(SiderealDivision::RASHI.segments(aya))
        .map(|(rashi, segment)| RashiRow {
            number: segment.index as u8 + 1,
            rashi,
            start: zodiac_label(segment.tropical_start),
            end: zodiac_label(segment.tropical_end),
            segment,
        })
        .collect();

    let nakshatras = NAKSHATRAS
        .iter()
        .zip(SiderealDivision::NAKSHATRA.segments(aya))
        .map(|(nakshatra, segment)| NakshatraRow {
            number: segment.index as u8 + 1,
            nakshatra,
            start: zodiac_label(segment.tropical_start),
            end: zodiac_label(segment.tropical_end),
            segment,
        })
        .collect();

    Ok(RashiNakshatraTable {
        year,
        anchor,
        anchor_lon_deg: anchor_lon,
        ayanamsa_deg: aya,
        rashis,
        nakshatras,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zij_catalog::{CatalogError, StarPosition};

    struct FixedSpica(f64);

    impl StarEphemeris for FixedSpica {
        fn position(&self, name: &str, _epoch: Epoch) -> Result<StarPosition, CatalogError> {
            if name != "Spica" {
                return Err(CatalogError::StarNotFound(name.to_string()));
            }
            Ok(StarPosition {
                ra_deg: 0.0,
                dec_deg: 0.0,
                distance_pc: 77.0,
                ecl_lon_deg: self.0,
                ecl_lat_deg: -2.05,
            })
        }
    }

    #[test]
    fn western_signs_in_order() {
        for (i, r) in RASHIS.iter().enumerate() {
            assert_eq!(r.western.index() as usize, i);
        }
    }

    #[test]
    fn row_counts() {
        let t = rashi_nakshatra_table(&FixedSpica(204.17), 2024).unwrap();
        assert_eq!(t.rashis.len(), 12);
        assert_eq!(t.nakshatras.len(), 27);
        assert_eq!(t.nakshatras[26].number, 27);
    }

    #[test]
    fn lahiri_from_spica() {
        let t = rashi_nakshatra_table(&FixedSpica(204.17), 2024).unwrap();
        assert!((t.ayanamsa_deg - 24.17).abs() < 1e-9);
        assert_eq!(t.ayanamsa_label().to_string(), "24°10'");
        assert_eq!(t.anchor_label().to_string(), "24°10' Libra");
        assert_eq!(t.rashis[0].start.to_string(), "24°10' Aries");
        assert_eq!(t.rashis[6].start, t.anchor_label());
    }

    #[test]
    fn chitra_contains_spica() {
        // Spica sits at 180° sidereal, inside Chitrā (#14, 173°20′–186°40′).
        let t = rashi_nakshatra_table(&FixedSpica(204.17), 2024).unwrap();
        let chitra = &t.nakshatras[13];
        assert_eq!(chitra.nakshatra.name, "Chitrā");
        assert!(chitra.segment.sidereal_start < 180.0 && 180.0 < chitra.segment.sidereal_end);
    }

    #[test]
    fn missing_anchor_star() {
        let anchor = StarAnchor {
            star: "Revati",
            sidereal_lon_deg: 359.833,
        };
        let err = rashi_nakshatra_table_with(&FixedSpica(204.0), 2024, anchor).unwrap_err();
        assert_eq!(
            err,
            TableError::Catalog(CatalogError::StarNotFound("Revati".into()))
        );
    }
}

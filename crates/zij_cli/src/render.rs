//! Plain-text layout of the tables.

use std::io::{self, Write};

use zij_catalog::StarGroup;
use zij_tables::{ALL_PALACES, FixedStarTable, ManzilTable, RashiNakshatraTable, XiuTable};

fn rule(out: &mut impl Write, ch: char, width: usize) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(width))
}

pub fn manzil(out: &mut impl Write, t: &ManzilTable) -> io::Result<()> {
    writeln!(
        out,
        "28 Lunar Mansions (Manāzil) — Tropical Boundaries ({})",
        t.year
    )?;
    writeln!(out, "Fagan-Allen ayanamsa: {}", t.ayanamsa_label())?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<4} {:<26} {:<22} {:<22} Meaning",
        "#", "Name", "Start", "End"
    )?;
    rule(out, '─', 100)?;
    for r in &t.rows {
        writeln!(
            out,
            "{:<4} {:<26} {:<22} {:<22} {}",
            r.number, r.manzil.transliteration, r.start, r.end, r.manzil.meaning
        )?;
    }
    writeln!(out)?;
    writeln!(out)
}

pub fn rashi_nakshatra(out: &mut impl Write, t: &RashiNakshatraTable) -> io::Result<()> {
    writeln!(out, "Rāśi and Nakṣatra — Tropical Boundaries ({})", t.year)?;
    writeln!(
        out,
        "Lahiri (Chitrapaksha) ayanamsa: {} ({} at {})",
        t.ayanamsa_label(),
        t.anchor.star,
        t.anchor_label()
    )?;
    writeln!(out)?;

    writeln!(out, "RĀŚI (12 Sidereal Signs)")?;
    writeln!(
        out,
        "{:<4} {:<14} {:<10} {:<22} {:<22} Ruler",
        "#", "Name", "Devanāgarī", "Start", "End"
    )?;
    rule(out, '─', 90)?;
    for r in &t.rashis {
        writeln!(
            out,
            "{:<4} {:<14} {:<10} {:<22} {:<22} {}",
            r.number,
            r.rashi.name,
            r.rashi.devanagari,
            r.start,
            r.end,
            r.rashi.ruler.name()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "NAKṢATRA (27 Lunar Mansions)")?;
    writeln!(
        out,
        "{:<4} {:<24} {:<18} {:<22} {:<22} Ruler",
        "#", "Name", "Devanāgarī", "Start", "End"
    )?;
    rule(out, '─', 110)?;
    for r in &t.nakshatras {
        writeln!(
            out,
            "{:<4} {:<24} {:<18} {:<22} {:<22} {}",
            r.number,
            r.nakshatra.name,
            r.nakshatra.devanagari,
            r.start,
            r.end,
            r.nakshatra.ruler.name()
        )?;
    }
    writeln!(out)?;
    writeln!(out)
}

pub fn xiu(out: &mut impl Write, t: &XiuTable) -> io::Result<()> {
    writeln!(
        out,
        "二十八宿 — 28 Xiù (Chinese Lunar Mansions) — Hour-Circle Projection ({})",
        t.year
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Boundaries defined by projecting each determinative star's hour circle"
    )?;
    writeln!(out, "onto the ecliptic: λ = atan2(sin α★ · cos ε, cos α★)")?;
    writeln!(
        out,
        "Obliquity ε = {:.4}° ({})",
        t.obliquity_deg,
        t.obliquity_dms()
    )?;
    writeln!(out)?;

    for palace in ALL_PALACES {
        writeln!(
            out,
            "{} {} ({})",
            palace.name(),
            palace.hanzi(),
            palace.season()
        )?;
        rule(out, '─', 89)?;
        writeln!(
            out,
            "{:<4} {:<8} {:<20} {:<28} {:<20} Span",
            "#", "Xiù", "Name", "Determinative Star", "Projected"
        )?;
        for r in t.palace_rows(palace) {
            writeln!(
                out,
                "{:<4} {} {:<6} {:<20} {:<28} {:<20} {}",
                r.xiu.number,
                r.xiu.hanzi,
                r.xiu.pinyin,
                r.xiu.name,
                r.xiu.star,
                r.projected_label(),
                r.span_label()
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Comparison: hour-circle projection vs. direct ecliptic longitude"
    )?;
    rule(out, '─', 80)?;
    writeln!(
        out,
        "{:<4} {:<8} {:<22} {:<22} Δ",
        "#", "Xiù", "Projected", "Direct ecl. lon."
    )?;
    rule(out, '─', 80)?;
    for r in &t.rows {
        writeln!(
            out,
            "{:<4} {} {:<6} {:<22} {:<22} {:+.2}°",
            r.xiu.number,
            r.xiu.hanzi,
            r.xiu.pinyin,
            r.projected_label(),
            r.direct_label(),
            r.delta_deg
        )?;
    }
    writeln!(out)
}

fn group_title(group: StarGroup) -> &'static str {
    match group {
        StarGroup::Behenian => "Behenian stars",
        StarGroup::Royal => "Royal star",
        StarGroup::Orion => "Orion",
        StarGroup::Gemini => "Gemini",
        StarGroup::Bright => "Bright / navigational",
        StarGroup::Active => "Astrologically active",
        StarGroup::Requested => "Requested",
        StarGroup::Manzil => "Manzil indicator stars",
        StarGroup::Xiu => "Xiù determinative stars",
    }
}

pub fn fixed_stars(out: &mut impl Write, t: &FixedStarTable) -> io::Result<()> {
    writeln!(
        out,
        "Fixed Stars — Tropical Ecliptic Longitudes ({})",
        t.year
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<24} {:<24} {:<10} HIP ID",
        "Star", "Longitude", "Latitude"
    )?;
    rule(out, '-', 70)?;

    let mut current = None;
    for r in &t.rows {
        if current != Some(r.group) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "# {}", group_title(r.group))?;
            current = Some(r.group);
        }
        let hip = match r.hip {
            Some(id) => format!("HIP {id}"),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "{:<24} {:<24} {:<10} {}",
            r.name,
            r.label,
            format!("{:+.2}°", r.lat_deg),
            hip
        )?;
    }
    writeln!(out)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zij_tables::manzil_table;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn manzil_layout() {
        let s = render(|out| manzil(out, &manzil_table(2019)));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(
            lines[0],
            "28 Lunar Mansions (Manāzil) — Tropical Boundaries (2019)"
        );
        assert_eq!(lines[1], "Fagan-Allen ayanamsa: 25°00'");
        assert_eq!(lines[4].chars().count(), 100);
        assert_eq!(
            lines[5],
            "1    Al-Sharaṭayn               25°00' Aries           07°51' Taurus          The Two Signs"
        );
        assert_eq!(s.lines().filter(|l| l.starts_with("28 ")).count(), 2);
    }

    #[test]
    fn rule_width_in_chars() {
        let s = render(|out| rule(out, '─', 10));
        assert_eq!(s, "──────────\n");
    }
}

use std::fmt;

/// The four classical zodiac elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

/// Map a sign label to its element
///
/// Labels are matched exactly as the profile form stores them, glyph suffix
/// included. Anything else (missing, trimmed, translated, typo'd) resolves
/// to None and the zodiac factor is skipped.
pub fn element_of(sign: &str) -> Option<Element> {
    match sign {
        "Aries ♈" | "Leo ♌" | "Sagittarius ♐" => Some(Element::Fire),
        "Taurus ♉" | "Virgo ♍" | "Capricorn ♑" => Some(Element::Earth),
        "Gemini ♊" | "Libra ♎" | "Aquarius ♒" => Some(Element::Air),
        "Cancer ♋" | "Scorpio ♏" | "Pisces ♓" => Some(Element::Water),
        _ => None,
    }
}

/// Whether two differing elements form one of the two canonical
/// compatible cross-pairs: Fire/Air and Water/Earth, either order
pub fn elements_harmonize(a: Element, b: Element) -> bool {
    matches!(
        (a, b),
        (Element::Fire, Element::Air)
            | (Element::Air, Element::Fire)
            | (Element::Water, Element::Earth)
            | (Element::Earth, Element::Water)
    )
}

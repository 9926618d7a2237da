use crate::core::vibes::count_cross_matches;
use crate::core::zodiac::{element_of, elements_harmonize};
use crate::models::{CompatibilityResult, Profile};

/// Score the pairwise compatibility of two profiles (0-100)
///
/// Pure and total: no input combination fails. A missing profile on either
/// side short-circuits to the "Calculating..." sentinel; every other factor
/// degrades to zero contribution when its fields are absent or malformed.
///
/// Factors, accumulated in order:
/// - shared interests: 0/10/20/28/35 points for 0/1/2/3/4+ overlaps
/// - zodiac elements: +10 same element, +8 for Fire/Air or Water/Earth
/// - MBTI second letter equal: +10
/// - vibe keyword cross-matches: +min(25, matches * 15)
/// - city substring match: +10
/// - age gap <= 2 years: +5 (no reason chip)
/// - baseline: +5
///
/// The total is clamped to [10, 100] and mapped to a summary tier.
pub fn calculate_compatibility(
    a: Option<&Profile>,
    b: Option<&Profile>,
) -> CompatibilityResult {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return CompatibilityResult::pending(),
    };

    let mut score: u32 = 0;
    let mut reasons: Vec<String> = Vec::new();

    // Shared interests. A's entries are filtered against B's membership,
    // so duplicates on A's side each count if present in B.
    let b_interests: Vec<String> = b.interests.iter().map(|i| i.to_lowercase()).collect();
    let shared = a
        .interests
        .iter()
        .filter(|i| b_interests.contains(&i.to_lowercase()))
        .count();
    score += interest_points(shared);
    if shared > 0 {
        reasons.push(format!("{} Shared Interests", shared));
    }

    // Zodiac element compatibility. Unrecognized signs resolve to no
    // element and the factor is skipped.
    if let (Some(ea), Some(eb)) = (
        a.zodiac.as_deref().and_then(element_of),
        b.zodiac.as_deref().and_then(element_of),
    ) {
        if ea == eb {
            score += 10;
            reasons.push(format!("{} Signs Vibe", ea));
        } else if elements_harmonize(ea, eb) {
            score += 8;
            reasons.push("Zodiac Chemistry".to_string());
        }
    }

    // MBTI mental connection: only the second letter (the S/N axis) is
    // compared, with no format validation beyond presence. Codes too short
    // to have a second letter compare as equal on both sides.
    if let (Some(ma), Some(mb)) = (a.mbti.as_deref(), b.mbti.as_deref()) {
        if !ma.is_empty() && !mb.is_empty() && ma.chars().nth(1) == mb.chars().nth(1) {
            score += 10;
            reasons.push("Mental Connection".to_string());
        }
    }

    // Vibe keywords: what A looks for against what B says about themselves,
    // and vice versa.
    let vibe_matches = count_cross_matches(
        &a.intro_text(),
        &a.looking_text(),
        &b.intro_text(),
        &b.looking_text(),
    );
    if vibe_matches > 0 {
        score += (vibe_matches * 15).min(25);
        reasons.push("Vibe Check Passed".to_string());
    }

    // Location proximity: bidirectional substring so "Melaka" still hits
    // "Melaka Campus". The reason chip is only added while the running
    // total is below 30.
    if let (Some(ca), Some(cb)) = (a.city_label(), b.city_label()) {
        if ca.contains(&cb) || cb.contains(&ca) {
            score += 10;
            if score < 30 {
                reasons.push("Same Location".to_string());
            }
        }
    }

    // Age proximity contributes silently
    if (i16::from(a.age_years()) - i16::from(b.age_years())).abs() <= 2 {
        score += 5;
    }

    // Baseline
    score += 5;

    let score = score.min(100).max(10) as u8;

    CompatibilityResult {
        score,
        summary: summary_label(score).to_string(),
        reasons,
    }
}

/// Points awarded for the shared-interest count
#[inline]
fn interest_points(count: usize) -> u32 {
    match count {
        0 => 0,
        1 => 10,
        2 => 20,
        3 => 28,
        _ => 35,
    }
}

/// Map a clamped score to its summary tier, highest band first
#[inline]
fn summary_label(score: u8) -> &'static str {
    if score >= 90 {
        "Soulmate Potential? 💍"
    } else if score >= 75 {
        "High Compatibility! 🔥"
    } else if score >= 50 {
        "Worth a shot! 😉"
    } else if score >= 30 {
        "Opposites attract? 🤷\u{200d}♂️"
    } else {
        "Challenging Match 🧊"
    }
}

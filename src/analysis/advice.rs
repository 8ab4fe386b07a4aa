//! Remediation advice for detected cycles.
//!
//! Pure transformation from cycle metadata to human-readable guidance.
//! Nothing here touches the filesystem; suggestions are advisory text only
//! and are never applied to source files.

use super::cycles::{Cycle, CycleKind};

/// Produces one ranked suggestion per cycle.
///
/// Direct cycles come first: a two-file tangle is usually the cheapest to
/// untangle and the advice is concrete. Indirect cycles follow with
/// structural guidance.
pub fn suggest_fixes(cycles: &[Cycle]) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(cycles.len());

    for cycle in cycles.iter().filter(|c| c.kind == CycleKind::Direct) {
        suggestions.push(direct_suggestion(cycle));
    }
    for cycle in cycles.iter().filter(|c| c.kind == CycleKind::Indirect) {
        suggestions.push(indirect_suggestion(cycle));
    }

    suggestions
}

fn direct_suggestion(cycle: &Cycle) -> String {
    match cycle.files.as_slice() {
        [only] => format!(
            "'{}' imports itself; remove the self-import or split the file so the referenced piece lives elsewhere.",
            only.display()
        ),
        [first, second] => format!(
            "Mutual import between '{}' and '{}': extract the shared definitions into a module both can import, \
             invert one direction behind an interface, decouple the two through events, \
             or defer one side with a dynamic import().",
            first.display(),
            second.display()
        ),
        _ => format!(
            "Break the mutual dependency in {} by extracting the shared pieces into a common module.",
            cycle.describe()
        ),
    }
}

fn indirect_suggestion(cycle: &Cycle) -> String {
    format!(
        "Import chain {} closes on itself: introduce an abstraction layer for one of the hops, \
         apply the dependency inversion principle so lower layers stop importing upward, \
         or restructure these {} files into layers with one-way imports.",
        cycle.describe(),
        cycle.len()
    )
}

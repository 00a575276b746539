//! Causal connective phrases and the sign each one carries.

use std::sync::LazyLock;

use regex::Regex;

use causeway_core::models::LinkKind;

/// A phrase that joins a cause and an effect inside one sentence.
pub struct Connective {
    pub phrase: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub kind: LinkKind,
    /// The effect precedes the connective ("yield depends on rainfall").
    pub reversed: bool,
}

impl Connective {
    /// Split `text` around the connective. Yields `None` unless the phrase
    /// occurs exactly once, so every split has exactly two sides.
    pub fn split<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let re = self.regex.as_ref()?;
        let mut found = re.find_iter(text);
        let m = found.next()?;
        if found.next().is_some() {
            return None;
        }
        Some((&text[..m.start()], &text[m.end()..]))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }
}

macro_rules! connective_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Positive: increase family ──────────────────────────────────────────────
connective_pattern!(RE_INCREASES, r"\bincreases\b");
connective_pattern!(RE_RAISES, r"\braises\b");
connective_pattern!(RE_BOOSTS, r"\bboosts\b");
connective_pattern!(RE_ENHANCES, r"\benhances\b");

// ── Negative: decrease family ──────────────────────────────────────────────
connective_pattern!(RE_DECREASES, r"\bdecreases\b");
connective_pattern!(RE_REDUCES, r"\breduces\b");
connective_pattern!(RE_LOWERS, r"\blowers\b");
connective_pattern!(RE_DIMINISHES, r"\bdiminishes\b");

// ── Positive: cause family ─────────────────────────────────────────────────
connective_pattern!(RE_CAUSES, r"\bcauses\b");
connective_pattern!(RE_LEADS_TO, r"\bleads\s+to\b");
connective_pattern!(RE_RESULTS_IN, r"\bresults\s+in\b");
connective_pattern!(RE_PRODUCES, r"\bproduces\b");

// ── Negative: prevent family ───────────────────────────────────────────────
connective_pattern!(RE_PREVENTS, r"\bprevents\b");
connective_pattern!(RE_BLOCKS, r"\bblocks\b");
connective_pattern!(RE_INHIBITS, r"\binhibits\b");

// ── Unsigned influence, read as positive ───────────────────────────────────
connective_pattern!(RE_AFFECTS, r"\baffects\b");
connective_pattern!(RE_INFLUENCES, r"\binfluences\b");
connective_pattern!(RE_DEPENDS_ON, r"\bdepends\s+on\b");

const fn connective(
    phrase: &'static str,
    regex: &'static LazyLock<Option<Regex>>,
    kind: LinkKind,
    reversed: bool,
) -> Connective {
    Connective {
        phrase,
        regex,
        kind,
        reversed,
    }
}

/// Every known connective, in matching priority order.
pub static CONNECTIVES: &[Connective] = &[
    connective("increases", &RE_INCREASES, LinkKind::Positive, false),
    connective("raises", &RE_RAISES, LinkKind::Positive, false),
    connective("boosts", &RE_BOOSTS, LinkKind::Positive, false),
    connective("enhances", &RE_ENHANCES, LinkKind::Positive, false),
    connective("decreases", &RE_DECREASES, LinkKind::Negative, false),
    connective("reduces", &RE_REDUCES, LinkKind::Negative, false),
    connective("lowers", &RE_LOWERS, LinkKind::Negative, false),
    connective("diminishes", &RE_DIMINISHES, LinkKind::Negative, false),
    connective("causes", &RE_CAUSES, LinkKind::Positive, false),
    connective("leads to", &RE_LEADS_TO, LinkKind::Positive, false),
    connective("results in", &RE_RESULTS_IN, LinkKind::Positive, false),
    connective("produces", &RE_PRODUCES, LinkKind::Positive, false),
    connective("prevents", &RE_PREVENTS, LinkKind::Negative, false),
    connective("blocks", &RE_BLOCKS, LinkKind::Negative, false),
    connective("inhibits", &RE_INHIBITS, LinkKind::Negative, false),
    connective("affects", &RE_AFFECTS, LinkKind::Positive, false),
    connective("influences", &RE_INFLUENCES, LinkKind::Positive, false),
    connective("depends on", &RE_DEPENDS_ON, LinkKind::Positive, true),
];

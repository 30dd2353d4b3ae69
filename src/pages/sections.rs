/// In-page anchors, in the order the scroll spy checks them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Awards,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Awards,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Awards => "awards",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Awards => "Awards",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, probe_line: f64) -> bool {
        self.top <= probe_line && self.bottom >= probe_line
    }
}

/// First section (in `Section::ALL` order) whose box crosses the probe line.
///
/// `measure` returns `None` for sections that are not in the document; those
/// are skipped. `None` overall means nothing matched and the caller keeps
/// whatever section was active before.
pub fn section_at_probe<F>(probe_line: f64, mut measure: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL.into_iter().find(|section| {
        measure(*section)
            .map(|bounds| bounds.straddles(probe_line))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(scroll: f64) -> impl Fn(Section) -> Option<SectionBounds> {
        // Five 800px tall sections laid out one after another.
        move |section| {
            let index = Section::ALL.iter().position(|s| *s == section)? as f64;
            let top = index * 800.0 - scroll;
            Some(SectionBounds { top, bottom: top + 800.0 })
        }
    }

    #[test]
    fn test_first_section_at_page_top() {
        assert_eq!(section_at_probe(100.0, stacked(0.0)), Some(Section::Home));
    }

    #[test]
    fn test_section_under_probe() {
        assert_eq!(section_at_probe(100.0, stacked(800.0)), Some(Section::About));
        assert_eq!(section_at_probe(100.0, stacked(2500.0)), Some(Section::Awards));
    }

    #[test]
    fn test_shared_edge_prefers_list_order() {
        // Home ends exactly where About starts, both touch the probe line.
        assert_eq!(section_at_probe(100.0, stacked(700.0)), Some(Section::Home));
    }

    #[test]
    fn test_no_match_returns_none() {
        let gap = |section: Section| match section {
            Section::Home => Some(SectionBounds { top: -900.0, bottom: 50.0 }),
            Section::About => Some(SectionBounds { top: 150.0, bottom: 900.0 }),
            _ => None,
        };
        assert_eq!(section_at_probe(100.0, gap), None);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let only_contact = |section: Section| match section {
            Section::Contact => Some(SectionBounds { top: 0.0, bottom: 400.0 }),
            _ => None,
        };
        assert_eq!(section_at_probe(100.0, only_contact), Some(Section::Contact));
    }

    #[test]
    fn test_repeated_position_is_stable() {
        let first = section_at_probe(100.0, stacked(1234.0));
        for _ in 0..10 {
            assert_eq!(section_at_probe(100.0, stacked(1234.0)), first);
        }
    }

    #[test]
    fn test_ids_and_hrefs() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "services", "awards", "contact"]);
        assert_eq!(Section::Awards.href(), "#awards");
    }
}

// project descriptors and case-study layouts
//
// the layout is static data: which blocks a case study is made of, in which order, and which
// translation keys and media files each block draws on.  the words live in the translation
// tables, so the same layout renders in every locale.  keys inside a section are relative to
// `case.<id>.<section>`

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaRef {
    pub image: &'static str,
    pub hover_image: Option<&'static str>,
    pub video: Option<&'static str>,
    pub alt_key: &'static str,
}

impl MediaRef {
    const fn image(image: &'static str, alt_key: &'static str) -> Self {
        MediaRef {
            image,
            hover_image: None,
            video: None,
            alt_key,
        }
    }

    const fn hover(image: &'static str, hover_image: &'static str, alt_key: &'static str) -> Self {
        MediaRef {
            image,
            hover_image: Some(hover_image),
            video: None,
            alt_key,
        }
    }

    const fn video(image: &'static str, video: &'static str, alt_key: &'static str) -> Self {
        MediaRef {
            image,
            hover_image: None,
            video: Some(video),
            alt_key,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Check,
    Bolt,
    Lock,
    Question,
    Clipboard,
    Users,
    Layers,
    Target,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    // `emphasis` names a substring of `text` that is rendered bold
    Prose {
        heading: Option<&'static str>,
        text: &'static str,
        emphasis: Option<&'static str>,
    },
    Highlights(&'static [Highlight]),
    Cards(&'static [Card]),
    Stat {
        value: &'static str,
        label: &'static str,
        text: &'static str,
    },
    Bullets(&'static [&'static str]),
    Media(&'static [MediaRef]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub numbered: bool,
    pub blocks: &'static [Block],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub overview: MediaRef,
    pub challenge_emphasis: bool,
    pub sections: &'static [Section],
}

// the chip groups shown under each project on the home page, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailKind {
    Industry,
    Type,
    Platform,
    KeyFocus,
}

impl DetailKind {
    pub fn all() -> Vec<Self> {
        vec![Self::Industry, Self::Type, Self::Platform, Self::KeyFocus]
    }

    fn field(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Type => "type",
            Self::Platform => "platform",
            Self::KeyFocus => "key_focus",
        }
    }

    // key focus chips wrap onto their own line below the label
    pub fn stacked(self) -> bool {
        self == Self::KeyFocus
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub slug: &'static str,
    pub id: &'static str,
    pub showcase: MediaRef,
    pub case_study: CaseStudy,
}

impl ProjectDescriptor {
    pub fn key(&self, field: &str) -> String {
        format!("projects.{}.{field}", self.id)
    }

    pub fn case_key(&self, path: &str) -> String {
        format!("case.{}.{path}", self.id)
    }

    pub fn section_key(&self, section: &Section, path: &str) -> String {
        self.case_key(&format!("{}.{path}", section.key))
    }

    pub fn detail_label_key(&self, kind: DetailKind) -> String {
        self.key(kind.field())
    }

    pub fn detail_chips_key(&self, kind: DetailKind) -> String {
        self.key(&format!("{}_chips", kind.field()))
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.slug)
    }

    // every translation key this project's card and case study read, used to check the
    // tables cover the layout
    pub fn translation_keys(&self) -> Vec<String> {
        let mut keys = vec![
            self.key("title"),
            self.key("description"),
            self.showcase.alt_key.to_owned(),
            self.case_key("tags"),
            self.case_key("hero.title"),
            self.case_key("hero.subtitle"),
            self.case_key("challenge.heading"),
            self.case_key("challenge.text"),
            self.case_key("role.heading"),
            self.case_key("role.text"),
            self.case_key("outcome.heading"),
            self.case_key("outcome.text"),
            self.case_study.overview.alt_key.to_owned(),
        ];

        for kind in DetailKind::all() {
            keys.push(self.detail_label_key(kind));
            keys.push(self.detail_chips_key(kind));
        }

        if self.case_study.challenge_emphasis {
            keys.push(self.case_key("challenge.emphasis"));
        }

        for section in self.case_study.sections {
            if section.numbered {
                keys.push(self.section_key(section, "number"));
            }
            keys.push(self.section_key(section, "title"));

            for block in section.blocks {
                match block {
                    Block::Prose {
                        heading,
                        text,
                        emphasis,
                    } => {
                        keys.extend(heading.map(|k| self.section_key(section, k)));
                        keys.push(self.section_key(section, text));
                        keys.extend(emphasis.map(|k| self.section_key(section, k)));
                    }
                    Block::Highlights(items) => {
                        for item in *items {
                            keys.push(self.section_key(section, item.label));
                            keys.push(self.section_key(section, item.text));
                        }
                    }
                    Block::Cards(cards) => {
                        for card in *cards {
                            keys.push(self.section_key(section, card.title));
                            keys.push(self.section_key(section, card.text));
                        }
                    }
                    Block::Stat { value, label, text } => {
                        keys.push(self.section_key(section, value));
                        keys.push(self.section_key(section, label));
                        keys.push(self.section_key(section, text));
                    }
                    Block::Bullets(points) => {
                        keys.extend(points.iter().map(|k| self.section_key(section, k)));
                    }
                    Block::Media(media) => {
                        keys.extend(media.iter().map(|m| m.alt_key.to_owned()));
                    }
                }
            }
        }

        keys
    }
}

pub fn all() -> &'static [ProjectDescriptor] {
    PROJECTS
}

pub fn find(slug: &str) -> Option<&'static ProjectDescriptor> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

// the "more projects" footer of a case study
pub fn others(slug: &str) -> impl Iterator<Item = &'static ProjectDescriptor> {
    PROJECTS.iter().filter(move |p| p.slug != slug)
}

const fn prose(heading: &'static str, text: &'static str) -> Block {
    Block::Prose {
        heading: Some(heading),
        text,
        emphasis: None,
    }
}

const fn lead(text: &'static str) -> Block {
    Block::Prose {
        heading: None,
        text,
        emphasis: None,
    }
}

const fn card(title: &'static str, text: &'static str) -> Card {
    Card { title, text }
}

const fn highlight(icon: Icon, label: &'static str, text: &'static str) -> Highlight {
    Highlight { icon, label, text }
}

const LONGEVITY_PASSPORT: ProjectDescriptor = ProjectDescriptor {
    slug: "longevity-passport",
    id: "longevity_passport",
    showcase: MediaRef::hover(
        "/assets/media/main/Longevity-main.png",
        "/assets/media/main/Longevity-main_on_hover.png",
        "projects.longevity_passport.showcase_alt",
    ),
    case_study: CaseStudy {
        overview: MediaRef::image(
            "/assets/media/longevity-passport/platform-overview.png",
            "case.longevity_passport.media.overview",
        ),
        challenge_emphasis: false,
        sections: &[
            Section {
                key: "impact",
                numbered: false,
                blocks: &[
                    lead("subheading"),
                    Block::Cards(&[
                        card("item1.title", "item1.description"),
                        card("item2.title", "item2.description"),
                        card("item3.title", "item3.description"),
                    ]),
                    Block::Media(&[MediaRef::video(
                        "/assets/media/longevity-passport/the-impact.png",
                        "/assets/media/longevity-passport/the-impact.mp4",
                        "case.longevity_passport.media.impact",
                    )]),
                ],
            },
            Section {
                key: "section1",
                numbered: true,
                blocks: &[
                    lead("intro"),
                    Block::Cards(&[
                        card("user_problem.heading", "user_problem.text"),
                        card("business_problem.heading", "business_problem.text"),
                        card("constraint.heading", "constraint.text"),
                    ]),
                ],
            },
            Section {
                key: "section2",
                numbered: true,
                blocks: &[
                    prose("friction_title", "friction_text"),
                    prose("solution_title", "solution_intro"),
                    Block::Cards(&[
                        card("step1.title", "step1.text"),
                        card("step2.title", "step2.text"),
                        card("step3.title", "step3.text"),
                    ]),
                ],
            },
            Section {
                key: "section3",
                numbered: true,
                blocks: &[
                    prose("challenge_title", "challenge_text"),
                    prose("design_title", "design_intro"),
                    Block::Highlights(&[
                        highlight(Icon::Layers, "chunking.title", "chunking.text"),
                        highlight(Icon::Target, "cognitive_load.title", "cognitive_load.text"),
                        highlight(Icon::Bolt, "scalability.title", "scalability.text"),
                    ]),
                    Block::Media(&[MediaRef::image(
                        "/assets/media/longevity-passport/section-3.png",
                        "case.longevity_passport.media.section3",
                    )]),
                ],
            },
            Section {
                key: "section4",
                numbered: true,
                blocks: &[
                    prose("reality_title", "reality_text"),
                    prose("system_title", "system_text"),
                    Block::Stat {
                        value: "reduction",
                        label: "reduction_label",
                        text: "impact_text",
                    },
                ],
            },
            Section {
                key: "section5",
                numbered: true,
                blocks: &[
                    prose("iteration_title", "iteration_text"),
                    Block::Media(&[MediaRef::image(
                        "/assets/media/longevity-passport/section-5.png",
                        "case.longevity_passport.media.section5",
                    )]),
                    prose("learned_title", "learned_text"),
                ],
            },
        ],
    },
};

const SEVEN_SPRINGS: ProjectDescriptor = ProjectDescriptor {
    slug: "seven-springs",
    id: "seven_springs",
    showcase: MediaRef::video(
        "/assets/media/main/Seven-springs-main.png",
        "/assets/media/main/Seven_springs_main.mov",
        "projects.seven_springs.showcase_alt",
    ),
    case_study: CaseStudy {
        overview: MediaRef::image(
            "/assets/media/seven-springs/website-overview.png",
            "case.seven_springs.media.overview",
        ),
        challenge_emphasis: false,
        sections: &[
            Section {
                key: "section1",
                numbered: true,
                blocks: &[
                    prose("friction_title", "friction_text"),
                    prose("pivot_title", "pivot_intro"),
                    Block::Cards(&[
                        card("rule_label", "rule_text"),
                        card("result_label", "result_text"),
                    ]),
                ],
            },
            Section {
                key: "section2",
                numbered: true,
                blocks: &[
                    prose("conflict_title", "conflict_text"),
                    prose("stand_title", "stand_text"),
                ],
            },
            Section {
                key: "section3",
                numbered: true,
                blocks: &[
                    prose("visualizing_title", "visualizing_intro"),
                    Block::Bullets(&["point1", "point2"]),
                    Block::Media(&[MediaRef::hover(
                        "/assets/media/seven-springs/booking-flow.png",
                        "/assets/media/seven-springs/booking-flow-on-hover.png",
                        "case.seven_springs.media.booking",
                    )]),
                ],
            },
            Section {
                key: "section4",
                numbered: true,
                blocks: &[lead("outcome_text")],
            },
        ],
    },
};

const OR_INTEGRATION: ProjectDescriptor = ProjectDescriptor {
    slug: "or-integration",
    id: "or_integration",
    showcase: MediaRef::hover(
        "/assets/media/main/OR-system-main-page-after.png",
        "/assets/media/main/OR-system-main-page-before.png",
        "projects.or_integration.showcase_alt",
    ),
    case_study: CaseStudy {
        overview: MediaRef::video(
            "/assets/media/or-integration/OR-integration-system-overview.png",
            "/assets/media/or-integration/OR-integration-system-overview.mov",
            "case.or_integration.media.overview",
        ),
        challenge_emphasis: true,
        sections: &[
            Section {
                key: "phase1",
                numbered: true,
                blocks: &[
                    Block::Media(&[
                        MediaRef::hover(
                            "/assets/media/or-integration/Legacy-system-screenshot-from-sales-video.png",
                            "/assets/media/or-integration/Legacy-system-screenshot-from-sales-video-on-hover.png",
                            "case.or_integration.media.legacy",
                        ),
                        MediaRef::hover(
                            "/assets/media/or-integration/Clean-figma-component-design.png",
                            "/assets/media/or-integration/Clean-figma-component-design-on-hover.png",
                            "case.or_integration.media.figma",
                        ),
                    ]),
                    prose("friction_title", "friction_text"),
                    prose("solution_title", "solution_intro"),
                    Block::Highlights(&[
                        highlight(Icon::Check, "reconstruction", "reconstruction_text"),
                        highlight(Icon::Bolt, "value", "value_text"),
                    ]),
                ],
            },
            Section {
                key: "phase2",
                numbered: true,
                blocks: &[
                    prose("challenge_title", "challenge_text"),
                    Block::Prose {
                        heading: Some("ux_strategy_title"),
                        text: "ux_strategy_intro",
                        emphasis: Some("error_prevention"),
                    },
                    Block::Highlights(&[
                        highlight(Icon::Lock, "constraint", "constraint_text"),
                        highlight(Icon::Question, "why", "why_text"),
                    ]),
                    Block::Media(&[MediaRef::hover(
                        "/assets/media/or-integration/Admin-configuration-panel-design.png",
                        "/assets/media/or-integration/Admin-configuration-panel-design-on-hover.png",
                        "case.or_integration.media.admin",
                    )]),
                ],
            },
            Section {
                key: "phase3",
                numbered: true,
                blocks: &[
                    lead("intro"),
                    Block::Highlights(&[
                        highlight(Icon::Clipboard, "precision_specs", "precision_specs_text"),
                        highlight(Icon::Users, "collaboration", "collaboration_text"),
                    ]),
                ],
            },
        ],
    },
};

// home page order
const PROJECTS: &[ProjectDescriptor] = &[LONGEVITY_PASSPORT, SEVEN_SPRINGS, OR_INTEGRATION];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_and_ids_are_unique() {
        let slugs: HashSet<_> = all().iter().map(|p| p.slug).collect();
        let ids: HashSet<_> = all().iter().map(|p| p.id).collect();

        assert_eq!(slugs.len(), all().len());
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn find_matches_exact_slug_only() {
        assert_eq!(find("seven-springs").map(|p| p.id), Some("seven_springs"));
        assert!(find("Seven-Springs").is_none());
        assert!(find("").is_none());
        assert!(find("seven-springs/").is_none());
    }

    #[test]
    fn others_excludes_current() {
        let rest: Vec<_> = others("seven-springs").map(|p| p.slug).collect();
        assert_eq!(rest, vec!["longevity-passport", "or-integration"]);
    }

    #[test]
    fn keys_are_scoped_to_the_project() {
        let p = find("or-integration").unwrap();
        let section = &p.case_study.sections[1];

        assert_eq!(p.key("title"), "projects.or_integration.title");
        assert_eq!(
            p.detail_chips_key(DetailKind::KeyFocus),
            "projects.or_integration.key_focus_chips"
        );
        assert_eq!(
            p.section_key(section, "why_text"),
            "case.or_integration.phase2.why_text"
        );
        assert_eq!(p.href(), "/projects/or-integration");
    }

    #[test]
    fn media_paths_are_absolute() {
        for project in all() {
            let mut media = vec![project.showcase, project.case_study.overview];
            for section in project.case_study.sections {
                for block in section.blocks {
                    if let Block::Media(items) = block {
                        media.extend(items.iter().copied());
                    }
                }
            }

            for m in media {
                assert!(m.image.starts_with("/assets/media/"), "{}", m.image);
                assert!(m.hover_image.is_none_or(|p| p.starts_with("/assets/media/")));
                assert!(m.video.is_none_or(|p| p.starts_with("/assets/media/")));
            }
        }
    }
}

use std::fmt;

use tracing::debug;

use crate::{
    effects::FADE_STAGGER_MS,
    i18n::Translator,
    locale::Locale,
    projects::{self, Block, DetailKind, Icon, MediaRef, ProjectDescriptor, Section},
};

// page composition
//
// each page is resolved to a plain view model (owned strings, no keys) from the route, the
// active translator and the gate state.  the frontend only lays these out, so everything a page
// says can be checked here without a browser

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteRoute {
    Home,
    Project { slug: String },
    Unknown { path: String },
}

impl SiteRoute {
    // `/`, `/projects/<slug>`, and everything else
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => SiteRoute::Home,
            ["projects", slug] => SiteRoute::Project {
                slug: (*slug).to_owned(),
            },
            _ => SiteRoute::Unknown {
                path: path.to_owned(),
            },
        }
    }
}

impl fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteRoute::Home => write!(f, "/"),
            SiteRoute::Project { slug } => write!(f, "/projects/{slug}"),
            SiteRoute::Unknown { path } => write!(f, "{path}"),
        }
    }
}

// a paragraph with at most one bold run in the middle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmphasizedText {
    pub before: String,
    pub emphasis: Option<String>,
    pub after: String,
}

// splits `text` around the first occurrence of `emphasis`
//
// an empty or absent emphasis leaves the text whole
pub fn split_emphasis(text: &str, emphasis: &str) -> EmphasizedText {
    if emphasis.is_empty() {
        return EmphasizedText {
            before: text.to_owned(),
            ..Default::default()
        };
    }

    match text.split_once(emphasis) {
        Some((before, after)) => EmphasizedText {
            before: before.to_owned(),
            emphasis: Some(emphasis.to_owned()),
            after: after.to_owned(),
        },
        None => EmphasizedText {
            before: text.to_owned(),
            ..Default::default()
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaView {
    pub image: String,
    pub hover_image: Option<String>,
    pub video: Option<String>,
    pub alt: String,
}

impl MediaView {
    fn resolve(t: &Translator, media: &MediaRef) -> Self {
        MediaView {
            image: media.image.to_owned(),
            hover_image: media.hover_image.map(str::to_owned),
            video: media.video.map(str::to_owned),
            alt: t.text(media.alt_key).to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub name: String,
    pub role: String,
    pub links: Vec<LinkView>,
}

pub fn compose_nav(t: &Translator, cv_url: &str) -> NavView {
    let link = |key: &str, href: &str, external: bool| LinkView {
        label: t.text(key).to_owned(),
        href: href.to_owned(),
        external,
    };

    NavView {
        name: t.text("navbar.name").to_owned(),
        role: t.text("navbar.role").to_owned(),
        links: vec![
            link("navbar.projects", "/#projects", false),
            link("navbar.about", "/#about", false),
            link("navbar.cv", cv_url, true),
        ],
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterView {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub copyright: String,
    pub built_with: String,
    pub thanks: String,
}

fn compose_footer(t: &Translator) -> FooterView {
    FooterView {
        name: t.text("footer.name").to_owned(),
        role: t.text("footer.role").to_owned(),
        tagline: t.text("footer.tagline").to_owned(),
        copyright: t.text("footer.copyright").to_owned(),
        built_with: t.text("footer.built_with").to_owned(),
        thanks: t.text("footer.thanks").to_owned(),
    }
}

// hero intro: plain runs alternate with highlighted phrases
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Run {
    Plain(String),
    Accent(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroView {
    pub label: String,
    pub intro: Vec<Run>,
    pub linkedin_label: String,
    pub linkedin_href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailGroupView {
    pub label: String,
    pub chips: Vec<String>,
    pub stacked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardView {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub description: String,
    pub details: Vec<DetailGroupView>,
    pub showcase: MediaView,
    // odd rows put the media on the left
    pub mirrored: bool,
    pub explore: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AboutBlockView {
    pub title: String,
    pub paragraphs: Vec<EmphasizedText>,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomePage {
    pub hero: HeroView,
    pub projects_title: String,
    pub projects: Vec<ProjectCardView>,
    pub about_title: String,
    pub about: Vec<AboutBlockView>,
    pub cta: String,
    pub footer: FooterView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightView {
    pub icon: Icon,
    pub label: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockView {
    Prose {
        heading: Option<String>,
        text: EmphasizedText,
    },
    Highlights(Vec<HighlightView>),
    Cards(Vec<CardView>),
    Stat {
        value: String,
        label: String,
        text: String,
    },
    Bullets(Vec<String>),
    Media(Vec<MediaView>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub number: Option<String>,
    pub title: String,
    pub blocks: Vec<BlockView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadedText {
    pub heading: String,
    pub text: EmphasizedText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseStudyView {
    pub tags: Vec<String>,
    pub title: String,
    pub subtitle: String,
    pub challenge: HeadedText,
    pub role: HeadedText,
    pub outcome: HeadedText,
    pub overview: MediaView,
    pub sections: Vec<SectionView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoreProjectView {
    pub slug: String,
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPage {
    pub slug: String,
    pub back_label: String,
    pub case_study: CaseStudyView,
    pub more_projects_title: String,
    pub more_projects: Vec<MoreProjectView>,
    pub view_case_study: String,
    pub view_all_projects: String,
    pub footer: FooterView,
    // the gate screen replaces the whole page until the visitor unlocks it
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotFoundPage {
    pub path: String,
    pub title: String,
    pub text: String,
    pub home_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home(HomePage),
    Project(ProjectPage),
    NotFound(NotFoundPage),
}

// what a composer needs besides the route
pub struct PageContext<'a> {
    pub translator: &'a Translator,
    pub linkedin_url: &'a str,
    pub is_gated: &'a dyn Fn(&str) -> bool,
    pub is_unlocked: &'a dyn Fn(&str) -> bool,
}

pub fn compose(route: &SiteRoute, ctx: &PageContext) -> Page {
    match route {
        SiteRoute::Home => Page::Home(compose_home(ctx.translator, ctx.linkedin_url)),
        SiteRoute::Project { slug } => match projects::find(slug) {
            Some(project) => {
                let locked = (ctx.is_gated)(slug) && !(ctx.is_unlocked)(slug);
                Page::Project(compose_project(ctx.translator, project, locked))
            }
            None => {
                debug!(slug, "unknown project");
                Page::NotFound(compose_not_found(ctx.translator, &route.to_string()))
            }
        },
        SiteRoute::Unknown { path } => Page::NotFound(compose_not_found(ctx.translator, path)),
    }
}

pub fn compose_home(t: &Translator, linkedin_url: &str) -> HomePage {
    let text = |key: &str| t.text(key).to_owned();

    let hero = HeroView {
        label: text("hero.label"),
        intro: vec![
            Run::Plain(text("hero.intro_part1")),
            Run::Accent(text("hero.intro_role")),
            Run::Plain(text("hero.intro_part2")),
            Run::Accent(text("hero.intro_background")),
            Run::Plain(text("hero.intro_part3")),
            Run::Accent(text("hero.intro_solutions")),
            Run::Plain(text("hero.intro_part4")),
            Run::Accent(text("hero.intro_clients")),
            Run::Plain(text("hero.intro_part5")),
        ],
        linkedin_label: text("hero.linkedin"),
        linkedin_href: linkedin_url.to_owned(),
    };

    let projects = projects::all()
        .iter()
        .enumerate()
        .map(|(idx, project)| compose_card(t, project, idx % 2 != 0))
        .collect();

    let about = vec![
        AboutBlockView {
            title: text("about.psychologist.title"),
            paragraphs: vec![
                split_emphasis(
                    t.text("about.psychologist.paragraph1"),
                    t.text("about.psychologist.paragraph1_education"),
                ),
                split_emphasis(t.text("about.psychologist.paragraph2"), ""),
            ],
            delay_ms: 0,
        },
        AboutBlockView {
            title: text("about.compass.title"),
            paragraphs: vec![
                split_emphasis(t.text("about.compass.paragraph1"), ""),
                split_emphasis(
                    t.text("about.compass.paragraph2"),
                    t.text("about.compass.paragraph2_goal"),
                ),
            ],
            delay_ms: FADE_STAGGER_MS,
        },
        AboutBlockView {
            title: text("about.healthtech.title"),
            paragraphs: vec![split_emphasis(t.text("about.healthtech.paragraph"), "")],
            delay_ms: 2 * FADE_STAGGER_MS,
        },
    ];

    HomePage {
        hero,
        projects_title: text("projects.section_title"),
        projects,
        about_title: text("about.section_title"),
        about,
        cta: text("cta.text"),
        footer: compose_footer(t),
    }
}

fn compose_card(t: &Translator, project: &ProjectDescriptor, mirrored: bool) -> ProjectCardView {
    let details = DetailKind::all()
        .into_iter()
        .map(|kind| DetailGroupView {
            label: t.text(&project.detail_label_key(kind)).to_owned(),
            chips: t.list(&project.detail_chips_key(kind)).to_vec(),
            stacked: kind.stacked(),
        })
        .collect();

    ProjectCardView {
        slug: project.slug.to_owned(),
        href: project.href(),
        title: t.text(&project.key("title")).to_owned(),
        description: t.text(&project.key("description")).to_owned(),
        details,
        showcase: MediaView::resolve(t, &project.showcase),
        mirrored,
        explore: t.text("projects.explore").to_owned(),
    }
}

pub fn compose_project(t: &Translator, project: &ProjectDescriptor, locked: bool) -> ProjectPage {
    let case = |path: &str| t.text(&project.case_key(path)).to_owned();
    let headed = |path: &str| HeadedText {
        heading: case(&format!("{path}.heading")),
        text: split_emphasis(&case(&format!("{path}.text")), ""),
    };

    let challenge_text = case("challenge.text");
    let challenge_emphasis = if project.case_study.challenge_emphasis {
        case("challenge.emphasis")
    } else {
        String::new()
    };

    let case_study = CaseStudyView {
        tags: t.list(&project.case_key("tags")).to_vec(),
        title: case("hero.title"),
        subtitle: case("hero.subtitle"),
        challenge: HeadedText {
            heading: case("challenge.heading"),
            text: split_emphasis(&challenge_text, &challenge_emphasis),
        },
        role: headed("role"),
        outcome: headed("outcome"),
        overview: MediaView::resolve(t, &project.case_study.overview),
        sections: project
            .case_study
            .sections
            .iter()
            .map(|section| compose_section(t, project, section))
            .collect(),
    };

    let more_projects = projects::others(project.slug)
        .map(|other| MoreProjectView {
            slug: other.slug.to_owned(),
            title: t.text(&other.key("title")).to_owned(),
            href: other.href(),
        })
        .collect();

    ProjectPage {
        slug: project.slug.to_owned(),
        back_label: t.text("common.back_to_projects").to_owned(),
        case_study,
        more_projects_title: t.text("common.more_projects").to_owned(),
        more_projects,
        view_case_study: t.text("common.view_case_study").to_owned(),
        view_all_projects: t.text("common.view_all_projects").to_owned(),
        footer: compose_footer(t),
        locked,
    }
}

fn compose_section(t: &Translator, project: &ProjectDescriptor, section: &Section) -> SectionView {
    let text = |path: &str| t.text(&project.section_key(section, path)).to_owned();

    let blocks = section
        .blocks
        .iter()
        .map(|block| match block {
            Block::Prose {
                heading,
                text: body,
                emphasis,
            } => BlockView::Prose {
                heading: heading.map(|k| text(k)),
                text: split_emphasis(&text(*body), &emphasis.map(|k| text(k)).unwrap_or_default()),
            },
            Block::Highlights(items) => BlockView::Highlights(
                items
                    .iter()
                    .map(|item| HighlightView {
                        icon: item.icon,
                        label: text(item.label),
                        text: text(item.text),
                    })
                    .collect(),
            ),
            Block::Cards(cards) => BlockView::Cards(
                cards
                    .iter()
                    .map(|card| CardView {
                        title: text(card.title),
                        text: text(card.text),
                    })
                    .collect(),
            ),
            Block::Stat {
                value,
                label,
                text: body,
            } => BlockView::Stat {
                value: text(*value),
                label: text(*label),
                text: text(*body),
            },
            Block::Bullets(points) => BlockView::Bullets(points.iter().map(|k| text(*k)).collect()),
            Block::Media(media) => {
                BlockView::Media(media.iter().map(|m| MediaView::resolve(t, m)).collect())
            }
        })
        .collect();

    SectionView {
        number: section.numbered.then(|| text("number")),
        title: text("title"),
        blocks,
    }
}

pub fn compose_not_found(t: &Translator, path: &str) -> NotFoundPage {
    NotFoundPage {
        path: path.to_owned(),
        title: t.text("not_found.title").to_owned(),
        text: t.text("not_found.text").to_owned(),
        home_label: t.text("not_found.home").to_owned(),
    }
}

// <title> for a page
pub fn document_title(t: &Translator, page: &Page) -> String {
    let site = t.text("meta.title");
    match page {
        Page::Home(_) => site.to_owned(),
        Page::Project(p) => format!("{} | {site}", p.case_study.title),
        Page::NotFound(p) => format!("{} | {site}", p.title),
    }
}

pub fn html_lang(locale: Locale) -> &'static str {
    locale.code()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        gate::{Gate, MemorySessionStore},
        i18n::{MissingKeyPolicy, TranslationCatalog},
    };

    fn translator(locale: Locale) -> Translator {
        let catalog = Arc::new(TranslationCatalog::bundled().unwrap());
        Translator::new(catalog, locale).with_policy(MissingKeyPolicy::Panic)
    }

    fn gate() -> Gate {
        Gate::new(
            [(String::from("longevity-passport"), String::from("helena2024"))]
                .into_iter()
                .collect(),
        )
    }

    fn render(route: &str, t: &Translator, gate: &Gate, store: &MemorySessionStore) -> Page {
        let is_gated = |slug: &str| gate.is_gated(slug);
        let is_unlocked = |slug: &str| gate.is_unlocked(store, slug);
        let ctx = PageContext {
            translator: t,
            linkedin_url: "https://example.com/in",
            is_gated: &is_gated,
            is_unlocked: &is_unlocked,
        };

        compose(&SiteRoute::parse(route), &ctx)
    }

    #[test]
    fn nav_links_follow_locale_and_cv() {
        let nav = compose_nav(&translator(Locale::Es), "https://example.com/cv");

        assert_eq!(nav.name, "Helena Baltaza");
        assert_eq!(nav.role, "Diseñadora UX");

        let hrefs: Vec<_> = nav.links.iter().map(|l| (l.href.as_str(), l.external)).collect();
        assert_eq!(
            hrefs,
            [
                ("/#projects", false),
                ("/#about", false),
                ("https://example.com/cv", true)
            ]
        );
        assert_eq!(nav.links[1].label, "Sobre mí");
    }

    #[test]
    fn routes_parse() {
        assert_eq!(SiteRoute::parse("/"), SiteRoute::Home);
        assert_eq!(SiteRoute::parse("/#projects"), SiteRoute::Home);
        assert_eq!(
            SiteRoute::parse("/projects/seven-springs/"),
            SiteRoute::Project {
                slug: String::from("seven-springs")
            }
        );
        assert_eq!(
            SiteRoute::parse("/projects"),
            SiteRoute::Unknown {
                path: String::from("/projects")
            }
        );
        assert_eq!(
            SiteRoute::parse("/projects/a/b"),
            SiteRoute::Unknown {
                path: String::from("/projects/a/b")
            }
        );
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let t = translator(Locale::En);
        let store = MemorySessionStore::new();

        for route in ["/projects/nope", "/projects/LONGEVITY-PASSPORT", "/projects/%20"] {
            match render(route, &t, &gate(), &store) {
                Page::NotFound(page) => assert!(!page.title.is_empty()),
                other => panic!("{route} rendered {other:?}"),
            }
        }

        assert!(matches!(
            render("/about/me", &t, &gate(), &store),
            Page::NotFound(_)
        ));
    }

    #[test]
    fn home_lists_every_project_in_order() {
        let t = translator(Locale::En);
        let Page::Home(home) = render("/", &t, &gate(), &MemorySessionStore::new()) else {
            panic!("expected home page");
        };

        let slugs: Vec<_> = home.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["longevity-passport", "seven-springs", "or-integration"]);

        let mirrored: Vec<_> = home.projects.iter().map(|p| p.mirrored).collect();
        assert_eq!(mirrored, vec![false, true, false]);

        for card in &home.projects {
            assert_eq!(card.details.len(), 4);
            assert!(card.details.iter().all(|d| !d.chips.is_empty()));
            assert!(card.details.last().unwrap().stacked);
        }

        let delays: Vec<_> = home.about.iter().map(|a| a.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300]);
    }

    #[test]
    fn gated_project_is_locked_until_unlocked() {
        let t = translator(Locale::En);
        let gate = gate();
        let mut store = MemorySessionStore::new();

        let Page::Project(page) = render("/projects/longevity-passport", &t, &gate, &store) else {
            panic!("expected project page");
        };
        assert!(page.locked);

        gate.submit(&mut store, "longevity-passport", "wrongpass").unwrap();
        let Page::Project(page) = render("/projects/longevity-passport", &t, &gate, &store) else {
            panic!("expected project page");
        };
        assert!(page.locked);

        gate.submit(&mut store, "longevity-passport", "helena2024").unwrap();
        let Page::Project(page) = render("/projects/longevity-passport", &t, &gate, &store) else {
            panic!("expected project page");
        };
        assert!(!page.locked);

        let Page::Project(page) = render("/projects/seven-springs", &t, &gate, &store) else {
            panic!("expected project page");
        };
        assert!(!page.locked);
    }

    #[test]
    fn case_study_links_to_the_other_projects() {
        let t = translator(Locale::En);
        let Page::Project(page) =
            render("/projects/or-integration", &t, &gate(), &MemorySessionStore::new())
        else {
            panic!("expected project page");
        };

        let hrefs: Vec<_> = page.more_projects.iter().map(|p| p.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["/projects/longevity-passport", "/projects/seven-springs"]
        );
        assert_eq!(page.case_study.sections.len(), 3);
        assert!(page.case_study.challenge.text.emphasis.is_some());
    }

    // switching language between navigations must never leave a key unresolved; the panicking
    // policy turns any missing key into a test failure
    #[test]
    fn every_page_renders_in_every_locale() {
        let routes = [
            "/",
            "/projects/longevity-passport",
            "/projects/seven-springs",
            "/projects/or-integration",
            "/missing",
        ];
        let gate = gate();
        let store = MemorySessionStore::new();
        let mut t = translator(Locale::En);

        for locale in Locale::all().into_iter().chain(Locale::all()) {
            t.switch(locale);
            for route in routes {
                let page = render(route, &t, &gate, &store);
                assert!(!document_title(&t, &page).is_empty());
            }
        }
    }

    #[test]
    fn layout_keys_exist_in_every_locale() {
        for locale in Locale::all() {
            let t = translator(locale);
            for project in projects::all() {
                for key in project.translation_keys() {
                    assert!(t.try_entry(&key).is_some(), "{locale}: {key} missing");
                }
            }
        }
    }

    #[test]
    fn locales_produce_different_pages() {
        let store = MemorySessionStore::new();
        let en = render("/", &translator(Locale::En), &gate(), &store);
        let es = render("/", &translator(Locale::Es), &gate(), &store);
        assert_ne!(en, es);
    }

    #[test]
    fn emphasis_splits_on_first_occurrence() {
        let split = split_emphasis("zero documentation, zero docs", "zero");
        assert_eq!(split.before, "");
        assert_eq!(split.emphasis.as_deref(), Some("zero"));
        assert_eq!(split.after, " documentation, zero docs");

        let whole = split_emphasis("nothing to see", "absent");
        assert_eq!(whole.before, "nothing to see");
        assert_eq!(whole.emphasis, None);

        assert_eq!(split_emphasis("text", "").before, "text");
    }
}

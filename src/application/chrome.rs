use crate::config::SiteSettings;
use crate::domain::routes::{self, Page};
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, NavigationView, PageMetaView,
};

const NOT_FOUND_TITLE: &str = "Page Not Found";

/// Builds the frame shared by every page from the site settings and the route table.
#[derive(Debug, Clone)]
pub struct ChromeService {
    site: SiteSettings,
}

impl ChromeService {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    pub fn layout(&self, page: Page) -> LayoutChrome {
        let route = page.route();
        self.build(route.title, Some(route.path), Some(page))
    }

    pub fn not_found(&self) -> LayoutChrome {
        self.build(NOT_FOUND_TITLE, None, None)
    }

    fn build(&self, title: &str, path: Option<&str>, active: Option<Page>) -> LayoutChrome {
        let entries = routes::ROUTES
            .iter()
            .map(|route| NavigationLinkView {
                key: route.page.as_str(),
                label: route.title.to_string(),
                href: route.path.to_string(),
                is_active: Some(route.page) == active,
            })
            .collect();

        LayoutChrome {
            title: title.to_string(),
            document_title: format!("{title} · {}", self.site.name),
            brand: BrandView {
                name: self.site.name.clone(),
                tagline: self.site.tagline.clone(),
                href: Page::Home.route().path.to_string(),
            },
            navigation: NavigationView { entries },
            footer: FooterView {
                copy: self.site.footer.clone(),
            },
            meta: PageMetaView {
                description: self.site.tagline.clone(),
                canonical: path.and_then(|path| self.canonical_url(path)),
            },
        }
    }

    fn canonical_url(&self, path: &str) -> Option<String> {
        let base = self.site.base_url.as_ref()?;
        Some(format!("{}{path}", base.as_str().trim_end_matches('/')))
    }
}
